use super::bit_cursor::BitCursor;
use crate::board::{Color, Piece};
use crate::error::{DecodeError, Result};
use tracing::debug;

/// One entry of the prefix-code table. `piece == None` is the empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceCode {
    pub code: u8,
    pub bits: u8,
    pub piece: Option<Piece>,
}

/// Longest code in [`PIECE_CODES`].
pub const MAX_CODE_BITS: u8 = 4;

/// Codes are stored with the first bit read in bit 0.
///
/// | piece  | code | bits |
/// |--------|------|------|
/// | empty  | 0    | 1    |
/// | pawn   | 0001 | 4    |
/// | knight | 0011 | 4    |
/// | bishop | 0101 | 4    |
/// | rook   | 0111 | 4    |
/// | queen  | 1001 | 4    |
///
/// Every non-empty code is followed by one color bit (0 = white, 1 = black).
pub const PIECE_CODES: [PieceCode; 6] = [
    PieceCode { code: 0b0000, bits: 1, piece: None },
    PieceCode { code: 0b0001, bits: 4, piece: Some(Piece::Pawn) },
    PieceCode { code: 0b0011, bits: 4, piece: Some(Piece::Knight) },
    PieceCode { code: 0b0101, bits: 4, piece: Some(Piece::Bishop) },
    PieceCode { code: 0b0111, bits: 4, piece: Some(Piece::Rook) },
    PieceCode { code: 0b1001, bits: 4, piece: Some(Piece::Queen) },
];

#[inline]
fn lookup(code: u8, bits: u8) -> Option<&'static PieceCode> {
    PIECE_CODES.iter().find(|e| e.code == code && e.bits == bits)
}

/// Decode one square: `Ok(None)` for an empty square, otherwise the colored piece.
pub fn read_piece(cursor: &mut BitCursor<'_>) -> Result<Option<(Color, Piece)>> {
    let start = cursor.position();
    let mut code = 0u8;

    for bits in 1..=MAX_CODE_BITS {
        code |= cursor.read_bit()? << (bits - 1);

        if let Some(entry) = lookup(code, bits) {
            let Some(piece) = entry.piece else {
                return Ok(None);
            };
            let color = Color::from_u8(cursor.read_bit()?);
            return Ok(Some((color, piece)));
        }
    }

    debug!(bit_offset = start, code, "piece code matched no table entry");
    Err(DecodeError::CorruptEncoding {
        bit_offset: start,
        code,
    })
}
