//! Decoder for 40-byte packed training records: a Huffman-coded chess position
//! followed by score, move, ply and game result.

pub mod board;
pub mod error;
#[cfg(feature = "cli")]
pub mod logger;
pub mod moves;
pub mod packed;
pub mod record;
pub mod square;
pub mod summary;

pub use error::DecodeError;
pub use packed::{decode_move as parse_move, decode_position as parse_position};
pub use record::{RawSample, ReaderOptions, RecordReader, Sample};
