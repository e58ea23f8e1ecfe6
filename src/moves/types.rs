use crate::board::Piece;
use crate::square::Square;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Special-move tag carried in the top two bits of a packed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum SpecialMove {
    #[default]
    None = 0,
    Promotion = 1,
    EnPassant = 2,
    Castling = 3,
}

impl SpecialMove {
    /// Decode a 2-bit tag. Only the low two bits are looked at.
    #[inline(always)]
    pub(crate) fn from_bits(v: u16) -> Self {
        match v & 0x3 {
            0 => SpecialMove::None,
            1 => SpecialMove::Promotion,
            2 => SpecialMove::EnPassant,
            _ => SpecialMove::Castling,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
    pub special: SpecialMove,
}

impl Move {
    /// A move with no promotion piece.
    #[inline(always)]
    pub fn new(from: Square, to: Square, special: SpecialMove) -> Self {
        Self {
            from,
            to,
            promotion: None,
            special,
        }
    }

    #[inline(always)]
    pub fn with_promotion(from: Square, to: Square, promotion: Piece) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
            special: SpecialMove::Promotion,
        }
    }

    #[inline(always)]
    pub fn is_promotion(&self) -> bool {
        self.special == SpecialMove::Promotion
    }

    #[inline(always)]
    pub fn is_en_passant(&self) -> bool {
        self.special == SpecialMove::EnPassant
    }

    #[inline(always)]
    pub fn is_castling(&self) -> bool {
        self.special == SpecialMove::Castling
    }

    pub fn to_uci(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Start with from->to like e2e4
        let mut s = format!("{}{}", self.from, self.to);

        // Add promotion piece if applicable (lowercase for UCI style)
        if let Some(promo) = self.promotion {
            let c = match promo {
                Piece::Queen => 'q',
                Piece::Rook => 'r',
                Piece::Bishop => 'b',
                Piece::Knight => 'n',
                _ => '?', // Should never happen
            };
            s.push(c);
        }

        // like "{:#}" formatting
        if f.alternate() {
            match self.special {
                SpecialMove::Castling => s.push_str(" (castle)"),
                SpecialMove::EnPassant => s.push_str(" (ep)"),
                _ => {}
            }
        }

        write!(f, "{}", s)
    }
}
