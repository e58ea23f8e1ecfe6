use crate::error::{DecodeError, Result};

/// Forward-only reader over a byte slice, LSB-first within each byte.
#[derive(Debug, Clone)]
pub struct BitCursor<'a> {
    data: &'a [u8],
    bit_pos: usize,
}

impl<'a> BitCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, bit_pos: 0 }
    }

    /// Number of bits consumed so far.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.bit_pos
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        (self.data.len() * 8).saturating_sub(self.bit_pos)
    }

    /// Read one bit and advance by one.
    #[inline]
    pub fn read_bit(&mut self) -> Result<u8> {
        let byte_idx = self.bit_pos / 8;
        let Some(&byte) = self.data.get(byte_idx) else {
            return Err(DecodeError::TruncatedRecord {
                needed: byte_idx + 1,
                available: self.data.len(),
            });
        };
        let bit = (byte >> (self.bit_pos & 7)) & 1;
        self.bit_pos += 1;
        Ok(bit)
    }

    /// Read `n` bits (at most 32); the first bit read becomes bit 0 of the result.
    #[inline]
    pub fn read_bits(&mut self, n: u32) -> Result<u32> {
        debug_assert!(n <= 32, "read_bits: {} bits do not fit in u32", n);
        let mut value = 0u32;
        for k in 0..n {
            value |= u32::from(self.read_bit()?) << k;
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_come_out_lsb_first() {
        let data = [0b1010_0110u8, 0b0000_0001];
        let mut c = BitCursor::new(&data);
        let bits: Vec<u8> = (0..9).map(|_| c.read_bit().unwrap()).collect();
        assert_eq!(bits, vec![0, 1, 1, 0, 0, 1, 0, 1, 1]);
        assert_eq!(c.position(), 9);
        assert_eq!(c.remaining(), 7);
    }

    #[test]
    fn read_bits_first_bit_is_least_significant() {
        // 6-bit field 60 (0b111100) followed by 6-bit field 4 (0b000100)
        let data = [0b0011_1100u8, 0b0000_0001];
        let mut c = BitCursor::new(&data);
        assert_eq!(c.read_bits(6).unwrap(), 60);
        assert_eq!(c.read_bits(6).unwrap(), 4);
        assert_eq!(c.position(), 12);
    }

    #[test]
    fn read_bits_across_byte_boundary() {
        let data = [0xFFu8, 0x01];
        let mut c = BitCursor::new(&data);
        c.read_bit().unwrap();
        assert_eq!(c.read_bits(8).unwrap(), 0xFF);
    }

    #[test]
    fn reading_past_the_end_is_an_error() {
        let data = [0u8];
        let mut c = BitCursor::new(&data);
        assert_eq!(c.read_bits(8).unwrap(), 0);
        match c.read_bit() {
            Err(DecodeError::TruncatedRecord { needed, available }) => {
                assert_eq!(needed, 2);
                assert_eq!(available, 1);
            }
            other => panic!("expected TruncatedRecord, got {:?}", other),
        }
        assert_eq!(c.position(), 8);
    }

    #[test]
    fn empty_buffer() {
        let mut c = BitCursor::new(&[]);
        assert_eq!(c.remaining(), 0);
        assert!(c.read_bit().is_err());
        assert_eq!(c.read_bits(0).unwrap(), 0);
    }
}
