use crate::board::Piece;
use crate::moves::types::{Move, SpecialMove};
use crate::square::Square;

// bits  0-5: destination square
// bits  6-11: origin square
// bits 12-13: promotion piece, 0 = knight .. 3 = queen
// bits 14-15: special move flag, promotion (1), en passant (2), castling (3)
const SQ_MASK: u16 = 0x3F;
const FROM_SHIFT: u16 = 6;
const PROMO_SHIFT: u16 = 12;
const SPECIAL_SHIFT: u16 = 14;

pub const PROMOTION_PIECES: [Piece; 4] = [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen];

/// Decode a packed 16-bit move. Total over all inputs.
///
/// Only the promotion flag changes which fields are filled in. En-passant and
/// castling moves keep their tag in `special` but otherwise look like plain moves.
#[inline]
pub fn decode_move(word: u16) -> Move {
    let to = Square::from_index((word & SQ_MASK) as u8);
    let from = Square::from_index(((word >> FROM_SHIFT) & SQ_MASK) as u8);
    let promo = ((word >> PROMO_SHIFT) & 0x3) as usize;
    let special = SpecialMove::from_bits(word >> SPECIAL_SHIFT);

    match special {
        SpecialMove::Promotion => Move::with_promotion(from, to, PROMOTION_PIECES[promo]),
        _ => Move::new(from, to, special),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn word(from: u16, to: u16, promo: u16, special: u16) -> u16 {
        to | (from << 6) | (promo << 12) | (special << 14)
    }

    #[test]
    fn plain_move() {
        let mv = decode_move(word(12, 28, 0, 0));
        assert_eq!(mv.to_uci(), "e2e4");
        assert_eq!(mv.special, SpecialMove::None);
        assert_eq!(mv.promotion, None);
    }

    #[test]
    fn promotion_pieces_follow_code() {
        for (code, piece) in PROMOTION_PIECES.iter().enumerate() {
            let mv = decode_move(word(52, 60, code as u16, 1));
            assert_eq!(mv.promotion, Some(*piece));
            assert!(mv.is_promotion());
        }
        assert_eq!(decode_move(word(52, 60, 3, 1)).to_uci(), "e7e8q");
    }

    #[test]
    fn en_passant_and_castling_keep_tag_only() {
        let ep = decode_move(word(36, 43, 2, 2));
        assert!(ep.is_en_passant());
        assert_eq!(ep.promotion, None);

        let castle = decode_move(word(4, 7, 0, 3));
        assert!(castle.is_castling());
        assert_eq!(castle.promotion, None);
        assert_eq!(castle.to.index(), 7);
    }

    #[test]
    fn every_word_decodes_its_square_fields() {
        for w in 0..=u16::MAX {
            let mv = decode_move(w);
            assert_eq!(mv.to.index() as u16, w & 0x3F);
            assert_eq!(mv.from.index() as u16, (w >> 6) & 0x3F);
            assert_eq!(mv.promotion.is_some(), (w >> 14) == 1);
        }
    }

    #[test]
    fn random_promotions_offset_by_code() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let w: u16 = rng.random::<u16>() & 0x3FFF | (1 << 14);
            let mv = decode_move(w);
            let expected = Piece::from_u8(((w >> 12) & 0x3) as u8 + 1);
            assert_eq!(mv.promotion, Some(expected));
        }
    }
}
