use crate::board::Board;
use crate::error::{DecodeError, Result};
use crate::moves::types::Move;
use crate::packed::{POSITION_BYTES, decode_move, decode_position};
use serde::{Serialize, Serializer};

/// Size of one training record on disk.
pub const RECORD_BYTES: usize = 40;

/// The six fields of a record, still in their on-disk little-endian form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSample {
    pub position: [u8; POSITION_BYTES],
    pub score: [u8; 2],
    pub mv: [u8; 2],
    pub ply: [u8; 2],
    pub result: [u8; 1],
    pub padding: [u8; 1],
}

impl RawSample {
    /// Split the first [`RECORD_BYTES`] of `bytes` into fields.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < RECORD_BYTES {
            return Err(DecodeError::TruncatedRecord {
                needed: RECORD_BYTES,
                available: bytes.len(),
            });
        }

        let mut position = [0u8; POSITION_BYTES];
        position.copy_from_slice(&bytes[0..32]);

        Ok(Self {
            position,
            score: [bytes[32], bytes[33]],
            mv: [bytes[34], bytes[35]],
            ply: [bytes[36], bytes[37]],
            result: [bytes[38]],
            padding: [bytes[39]],
        })
    }

    pub fn score(&self) -> i16 {
        i16::from_le_bytes(self.score)
    }

    pub fn move_word(&self) -> u16 {
        u16::from_le_bytes(self.mv)
    }

    pub fn ply(&self) -> u16 {
        u16::from_le_bytes(self.ply)
    }

    pub fn result(&self) -> i8 {
        i8::from_le_bytes(self.result)
    }

    pub fn decode(&self) -> Result<Sample> {
        Ok(Sample {
            board: decode_position(&self.position)?,
            score: self.score(),
            mv: decode_move(self.move_word()),
            ply: self.ply(),
            result: self.result(),
        })
    }
}

/// One decoded training sample. `result` is from the side to move's view:
/// 1 win, 0 draw, -1 loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sample {
    #[serde(serialize_with = "board_as_fen")]
    pub board: Board,
    pub score: i16,
    pub mv: Move,
    pub ply: u16,
    pub result: i8,
}

impl Sample {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        RawSample::from_bytes(bytes)?.decode()
    }
}

fn board_as_fen<S: Serializer>(board: &Board, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(&board.to_fen())
}
