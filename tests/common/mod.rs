#![allow(dead_code)]

use nnuebin::board::{Color, Piece};
use std::path::PathBuf;

/// LSB-first bit sink used to build record fixtures.
#[derive(Default)]
pub struct BitWriter {
    data: Vec<u8>,
    pos: usize,
}

impl BitWriter {
    pub fn put(&mut self, value: u32, n: u32) -> &mut Self {
        for k in 0..n {
            if self.pos / 8 >= self.data.len() {
                self.data.push(0);
            }
            if (value >> k) & 1 == 1 {
                self.data[self.pos / 8] |= 1 << (self.pos % 8);
            }
            self.pos += 1;
        }
        self
    }

    pub fn bits(&self) -> usize {
        self.pos
    }

    pub fn into_bytes(mut self, len: usize) -> Vec<u8> {
        assert!(self.data.len() <= len, "fixture needs {} bytes", self.data.len());
        self.data.resize(len, 0);
        self.data
    }
}

/// Description of a position fixture. Squares are 0..63 with a1 = 0.
pub struct PositionFixture {
    pub black_to_move: bool,
    pub white_king: u8,
    pub black_king: u8,
    pub pieces: Vec<(u8, Color, Piece)>,
    /// K, Q, k, q
    pub castling: [bool; 4],
    pub en_passant: Option<u8>,
    pub halfmove: u32,
    pub fullmove: u32,
}

impl PositionFixture {
    pub fn kings(white_king: u8, black_king: u8) -> Self {
        Self {
            black_to_move: false,
            white_king,
            black_king,
            pieces: Vec::new(),
            castling: [false; 4],
            en_passant: None,
            halfmove: 0,
            fullmove: 1,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut w = BitWriter::default();
        w.put(self.black_to_move as u32, 1);
        w.put(self.white_king as u32, 6);
        w.put(self.black_king as u32, 6);

        for rank in (0..8u8).rev() {
            for file in 0..8u8 {
                let sq = rank * 8 + file;
                if sq == self.white_king || sq == self.black_king {
                    continue;
                }
                match self.pieces.iter().find(|(s, _, _)| *s == sq) {
                    Some(&(_, color, piece)) => {
                        w.put(piece_code(piece), 4);
                        w.put(color as u32, 1);
                    }
                    None => {
                        w.put(0, 1);
                    }
                }
            }
        }

        for allowed in self.castling {
            w.put(allowed as u32, 1);
        }
        match self.en_passant {
            Some(sq) => w.put(1, 1).put(sq as u32, 6),
            None => w.put(0, 1),
        };
        w.put(self.halfmove & 0x3F, 6);
        w.put(self.fullmove & 0xFF, 8);
        w.put((self.fullmove >> 8) & 0xFF, 8);
        w.put((self.halfmove >> 6) & 1, 1);
        w.into_bytes(32)
    }
}

pub fn piece_code(piece: Piece) -> u32 {
    match piece {
        Piece::Pawn => 0b0001,
        Piece::Knight => 0b0011,
        Piece::Bishop => 0b0101,
        Piece::Rook => 0b0111,
        Piece::Queen => 0b1001,
        Piece::King => panic!("kings are stored as squares"),
    }
}

pub fn move_word(from: u16, to: u16, promo: u16, special: u16) -> u16 {
    to | (from << 6) | (promo << 12) | (special << 14)
}

/// Assemble one 40-byte record.
pub fn record(position: &[u8], score: i16, mv: u16, ply: u16, result: i8) -> Vec<u8> {
    assert_eq!(position.len(), 32);
    let mut out = Vec::with_capacity(40);
    out.extend_from_slice(position);
    out.extend_from_slice(&score.to_le_bytes());
    out.extend_from_slice(&mv.to_le_bytes());
    out.extend_from_slice(&ply.to_le_bytes());
    out.push(result as u8);
    out.push(0);
    out
}

/// Write `bytes` to a fresh file under the temp dir and return its path.
pub fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("nnuebin-{}-{}.bin", name, std::process::id()));
    std::fs::write(&path, bytes).expect("write fixture");
    path
}

pub fn sq(name: &str) -> u8 {
    let b = name.as_bytes();
    (b[1] - b'1') * 8 + (b[0] - b'a')
}
