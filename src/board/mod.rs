mod fen;

use crate::square::Square;
use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod castle_bits;
mod fen_tables;
pub use castle_bits::*;

// Empty square value, no piece 0-13 will coincide with 255
pub(crate) const EMPTY_SQ: u8 = 0xFF;

/// Which side is to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    White,
    Black,
}

/// Piece enum to hold all types of pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A decoded position. Built once through [`BoardBuilder`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// [color][piece] bitboards
    piece_bb: [[u64; 6]; 2],
    occ_white: u64,
    occ_black: u64,
    occ_all: u64,
    /// Lookup table for each square: 0xFF = empty, otherwise (color<<3)|piece
    piece_on_sq: [u8; 64],
    side_to_move: Color,
    /// Castling rights: bit 0=White kingside, 1=White queenside, 2=Black kingside, 3=Black queenside
    castling_rights: CastleBits,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Board {
    /// Create an empty board: no pieces, White to move, no rights, fullmove 1.
    pub fn new_empty() -> Self {
        Board {
            piece_bb: [[0u64; 6]; 2],
            occ_white: 0,
            occ_black: 0,
            occ_all: 0,
            piece_on_sq: [EMPTY_SQ; 64],
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline(always)]
    pub(crate) fn bb(&self, color: Color, piece: Piece) -> u64 {
        self.piece_bb[color as usize][piece as usize]
    }

    #[inline(always)]
    /// Bitboard of all pieces (both colors).
    pub fn occupied(&self) -> u64 {
        self.occ_all
    }

    #[inline(always)]
    /// Bitboard of all pieces for one side.
    pub fn occupancy(&self, color: Color) -> u64 {
        match color {
            Color::White => self.occ_white,
            Color::Black => self.occ_black,
        }
    }

    #[inline(always)]
    pub fn pieces(&self, piece: Piece, color: Color) -> u64 {
        self.bb(color, piece)
    }

    /// Returns the piece and color at a given square, or None if empty.
    #[inline(always)]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let val = self.piece_on_sq[sq.index() as usize];
        if val == EMPTY_SQ {
            None
        } else {
            let color = Color::from_u8((val >> 3) & 1);
            let piece = Piece::from_u8(val & 0b111);
            Some((color, piece))
        }
    }

    /// Every occupied square in index order (a1 first).
    pub fn piece_list(&self) -> ArrayVec<(Square, Color, Piece), 64> {
        let mut out = ArrayVec::new();
        let mut occ = self.occ_all;
        while occ != 0 {
            let sq = Square::from_index(occ.trailing_zeros() as u8);
            if let Some((color, piece)) = self.piece_at(sq) {
                out.push((sq, color, piece));
            }
            occ &= occ - 1;
        }
        out
    }

    #[inline(always)]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline(always)]
    pub fn castling_rights(&self) -> CastleBits {
        self.castling_rights
    }

    #[inline(always)]
    pub fn has_castling(&self, flag: CastleBits) -> bool {
        self.castling_rights & flag != 0
    }

    #[inline(always)]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline(always)]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline(always)]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Square of the given side's king. Decoded data is not validated, so with
    /// several kings of one color this is the lowest-index one.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king_bb = self.bb(color, Piece::King);
        if king_bb == 0 {
            None
        } else {
            Some(Square::from_index(king_bb.trailing_zeros() as u8))
        }
    }

    /// Number of pieces on the board, kings included.
    pub fn piece_count(&self) -> u32 {
        self.occ_all.count_ones()
    }

    fn clear_square(&mut self, sq: Square) {
        let i = sq.index() as usize;
        let val = self.piece_on_sq[i];
        if val == EMPTY_SQ {
            return;
        }
        let ci = ((val >> 3) & 1) as usize;
        let pi = (val & 0b111) as usize;
        let mask = !sq.bb();
        self.piece_bb[ci][pi] &= mask;
        self.occ_white &= mask;
        self.occ_black &= mask;
        self.occ_all &= mask;
        self.piece_on_sq[i] = EMPTY_SQ;
    }

    fn place_piece_at_sq(&mut self, color: Color, piece: Piece, sq: Square) {
        self.clear_square(sq);
        let bit = sq.bb();
        self.piece_bb[color as usize][piece as usize] |= bit;
        match color {
            Color::White => self.occ_white |= bit,
            Color::Black => self.occ_black |= bit,
        }
        self.occ_all |= bit;
        self.piece_on_sq[sq.index() as usize] = (color as u8) << 3 | (piece as u8);
    }
}

/// Mutable scratch state for a position under construction.
///
/// The decoder fills one of these field by field and freezes it with
/// [`BoardBuilder::finish`], so callers never observe a half-decoded [`Board`].
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    board: Board,
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self {
            board: Board::new_empty(),
        }
    }

    /// Put a piece on a square, replacing whatever stood there.
    pub fn set_piece_at(&mut self, sq: Square, color: Color, piece: Piece) -> &mut Self {
        self.board.place_piece_at_sq(color, piece, sq);
        self
    }

    pub fn set_side_to_move(&mut self, color: Color) -> &mut Self {
        self.board.side_to_move = color;
        self
    }

    pub fn add_castling(&mut self, flag: CastleBits) -> &mut Self {
        self.board.castling_rights |= flag;
        self
    }

    pub fn set_en_passant(&mut self, sq: Option<Square>) -> &mut Self {
        self.board.en_passant = sq;
        self
    }

    pub fn set_halfmove_clock(&mut self, clock: u32) -> &mut Self {
        self.board.halfmove_clock = clock;
        self
    }

    pub fn set_fullmove_number(&mut self, number: u32) -> &mut Self {
        self.board.fullmove_number = number;
        self
    }

    pub fn finish(self) -> Board {
        self.board
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Decode a 0/1 value into a Color.
    #[inline(always)]
    pub(crate) fn from_u8(v: u8) -> Self {
        match v {
            0 => Color::White,
            1 => Color::Black,
            _ => panic!("Invalid Color encoding: {}", v),
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.opposite()
    }
}

impl Piece {
    /// Decode a 0–5 value into a Piece.
    #[inline(always)]
    pub(crate) fn from_u8(v: u8) -> Self {
        match v {
            0 => Piece::Pawn,
            1 => Piece::Knight,
            2 => Piece::Bishop,
            3 => Piece::Rook,
            4 => Piece::Queen,
            5 => Piece::King,
            _ => panic!("Invalid Piece encoding: {}", v),
        }
    }
}

/// An all-zero board (no pieces) with White to move.
impl Default for Board {
    fn default() -> Self {
        Board::new_empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fen = self.to_fen();
        write!(f, "{}", fen)
    }
}
