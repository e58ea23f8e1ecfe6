//! Bit-level decoding of the packed position and move fields of a record.

pub mod bit_cursor;
pub mod move16;
pub mod piece_code;
pub mod position;

pub use bit_cursor::BitCursor;
pub use move16::decode_move;
pub use piece_code::{PIECE_CODES, PieceCode, read_piece};
pub use position::{POSITION_BYTES, decode_position};
