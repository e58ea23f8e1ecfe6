use super::bit_cursor::BitCursor;
use super::piece_code::read_piece;
use crate::board::{Board, BoardBuilder, CASTLE_RECORD_ORDER, Color, Piece};
use crate::error::{DecodeError, Result};
use crate::square::Square;
use tracing::trace;

/// Size of the packed position at the start of every record.
pub const POSITION_BYTES: usize = 32;

/// Decode a packed position from the first [`POSITION_BYTES`] of `data`.
///
/// Field order:
/// 1. side to move (1 bit)
/// 2. white king square, black king square (6 bits each)
/// 3. one piece code per remaining square, rank 8 down to rank 1, file a to h
/// 4. castling rights K, Q, k, q (1 bit each)
/// 5. en-passant flag (1 bit), then its square (6 bits) when set
/// 6. halfmove clock low 6 bits, fullmove low byte, fullmove high byte,
///    halfmove clock high bit
///
/// Nothing is checked for legality. Overlapping placements overwrite each other.
pub fn decode_position(data: &[u8]) -> Result<Board> {
    if data.len() < POSITION_BYTES {
        return Err(DecodeError::TruncatedRecord {
            needed: POSITION_BYTES,
            available: data.len(),
        });
    }

    let mut cursor = BitCursor::new(&data[..POSITION_BYTES]);
    let mut board = BoardBuilder::new();

    let stm = Color::from_u8(cursor.read_bit()?);
    board.set_side_to_move(stm);

    let wksq = Square::from_index(cursor.read_bits(6)? as u8);
    board.set_piece_at(wksq, Color::White, Piece::King);
    let bksq = Square::from_index(cursor.read_bits(6)? as u8);
    board.set_piece_at(bksq, Color::Black, Piece::King);

    for rank in (0..8u8).rev() {
        for file in 0..8u8 {
            let sq = Square::from_file_rank(file, rank);
            if sq == wksq || sq == bksq {
                continue;
            }
            if let Some((color, piece)) = read_piece(&mut cursor)? {
                board.set_piece_at(sq, color, piece);
            }
        }
    }

    for flag in CASTLE_RECORD_ORDER {
        if cursor.read_bit()? == 1 {
            board.add_castling(flag);
        }
    }

    if cursor.read_bit()? == 1 {
        let ep = Square::from_index(cursor.read_bits(6)? as u8);
        board.set_en_passant(Some(ep));
    }

    let halfmove_low = cursor.read_bits(6)?;
    let fullmove_low = cursor.read_bits(8)?;
    let fullmove_high = cursor.read_bits(8)?;
    board.set_fullmove_number((fullmove_high << 8) | fullmove_low);

    let halfmove_high = cursor.read_bits(1)?;
    board.set_halfmove_clock((halfmove_high << 6) | halfmove_low);

    trace!(bits = cursor.position(), "decoded packed position");
    Ok(board.finish())
}
