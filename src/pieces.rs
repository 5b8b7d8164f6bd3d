//! Chess piece model types and the starting layout
//!
//! Pieces are plain `Copy` data: color, type, and a board position. The
//! board owns the piece collection; nothing else mutates piece fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Board coordinate as `(file, rank)`, both in `0..=7`. `(0, 0)` is the
/// white-side corner.
pub type Square = (u8, u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn opponent(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub color: PieceColor,
    pub piece_type: PieceType,
    pub x: u8,
    pub y: u8,
}

impl Piece {
    pub fn new(color: PieceColor, piece_type: PieceType, (x, y): Square) -> Self {
        Self {
            color,
            piece_type,
            x,
            y,
        }
    }

    pub fn position(&self) -> Square {
        (self.x, self.y)
    }
}

impl fmt::Display for Piece {
    /// Formats as e.g. "White Knight b1" for logs and error messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.x) as char;
        write!(
            f,
            "{:?} {:?} {}{}",
            self.color,
            self.piece_type,
            file,
            self.y + 1
        )
    }
}

/// Back-rank layout by file, shared by both sides. The king sits on
/// file 3 and the queen on file 4.
pub const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::King,
    PieceType::Queen,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Data-driven starting position: 32 pieces, pawns on ranks 1 and 6,
/// back ranks on 0 and 7.
pub(crate) fn starting_pieces() -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(32);

    for (file, &piece_type) in BACK_RANK.iter().enumerate() {
        pieces.push(Piece::new(PieceColor::White, piece_type, (file as u8, 0)));
        pieces.push(Piece::new(PieceColor::Black, piece_type, (file as u8, 7)));
    }

    for file in 0..8 {
        pieces.push(Piece::new(PieceColor::White, PieceType::Pawn, (file, 1)));
        pieces.push(Piece::new(PieceColor::Black, PieceType::Pawn, (file, 6)));
    }

    pieces
}
