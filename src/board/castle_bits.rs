// src/board/castle_bits.rs

/// Underlying bit type for castling rights.
pub type CastleBits = u8;

// One bit per rook corner.
pub const CASTLE_WK: CastleBits = 0b0001; // h1
pub const CASTLE_WQ: CastleBits = 0b0010; // a1
pub const CASTLE_BK: CastleBits = 0b0100; // h8
pub const CASTLE_BQ: CastleBits = 0b1000; // a8

/// Rights in the order they are packed in a position record.
pub const CASTLE_RECORD_ORDER: [CastleBits; 4] = [CASTLE_WK, CASTLE_WQ, CASTLE_BK, CASTLE_BQ];

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn castle_bits_single_and_disjoint() {
        assert_eq!(CASTLE_WK.count_ones(), 1);
        assert_eq!(CASTLE_WQ.count_ones(), 1);
        assert_eq!(CASTLE_BK.count_ones(), 1);
        assert_eq!(CASTLE_BQ.count_ones(), 1);

        let all = CASTLE_RECORD_ORDER.iter().fold(0, |acc, &b| acc | b);
        assert_eq!(all.count_ones(), 4);
    }
}
