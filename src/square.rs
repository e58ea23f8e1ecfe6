use serde::{Deserialize, Serialize};
use std::fmt;

/// A board square as a 0–63 index, a1 = 0, h1 = 7, a8 = 56, h8 = 63.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Square(u8);

impl Square {
    /// Build a square from a 0–63 index. Higher bits are masked off.
    #[inline(always)]
    pub const fn from_index(idx: u8) -> Self {
        Square(idx & 63)
    }

    /// Build a square from a file (0 = a) and a rank (0 = rank 1).
    #[inline(always)]
    pub const fn from_file_rank(file: u8, rank: u8) -> Self {
        Square(((rank & 7) << 3) | (file & 7))
    }

    #[inline(always)]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline(always)]
    pub const fn file(self) -> u8 {
        self.0 & 7
    }

    #[inline(always)]
    pub const fn rank(self) -> u8 {
        self.0 >> 3
    }

    #[inline(always)]
    pub const fn bb(self) -> u64 {
        1u64 << self.0
    }
}

impl TryFrom<u8> for Square {
    type Error = String;

    fn try_from(idx: u8) -> Result<Self, Self::Error> {
        if idx < 64 {
            Ok(Square(idx))
        } else {
            Err(format!("square index out of range: {}", idx))
        }
    }
}

impl From<Square> for u8 {
    fn from(sq: Square) -> u8 {
        sq.0
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file()) as char;
        let rank = (b'1' + self.rank()) as char;
        write!(f, "{}{}", file, rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_and_names() {
        assert_eq!(Square::from_file_rank(0, 0).index(), 0);
        assert_eq!(Square::from_file_rank(7, 0).index(), 7);
        assert_eq!(Square::from_file_rank(0, 7).index(), 56);
        assert_eq!(Square::from_file_rank(7, 7).index(), 63);
        assert_eq!(Square::from_index(4).to_string(), "e1");
        assert_eq!(Square::from_index(60).to_string(), "e8");
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert!(Square::try_from(63).is_ok());
        assert!(Square::try_from(64).is_err());
    }
}
