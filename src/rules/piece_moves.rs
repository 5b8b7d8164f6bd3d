//! Chess piece movement rules
//!
//! Contains the pseudo-legal movement rules for each piece type. Pure
//! functions with no side effects - easy to test.
//!
//! Candidate squares are computed in signed arithmetic and filtered to
//! the board before any occupancy test; off-board candidates are
//! dropped, never clamped. Generation order is deterministic: each ray
//! and offset table is walked in declaration order.

use super::board_state::BoardState;
use crate::pieces::{Piece, PieceColor, PieceType, Square};

/// Straight ray directions, walked in order: +x, -x, +y, -y.
const STRAIGHT_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal ray directions, walked in order: (+,+), (-,+), (+,-), (-,-).
const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// The eight knight leaps.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

/// King steps. Only the orthogonal neighbours are generated.
/// TODO: diagonal king steps and castling
const KING_OFFSETS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Get all pseudo-legal destination squares for a piece.
///
/// Pure function of the piece and the occupancy snapshot. The returned
/// order is deterministic for a given input; the queen emits its
/// straight rays before its diagonal rays.
pub fn get_possible_moves(piece: &Piece, board: &BoardState) -> Vec<Square> {
    match piece.piece_type {
        PieceType::Pawn => pawn_moves(piece, board),
        PieceType::Knight => offset_moves(piece, &KNIGHT_OFFSETS, board),
        PieceType::Bishop => ray_moves(piece, &DIAGONAL_DIRS, board),
        PieceType::Rook => ray_moves(piece, &STRAIGHT_DIRS, board),
        PieceType::Queen => {
            let mut moves = ray_moves(piece, &STRAIGHT_DIRS, board);
            moves.extend(ray_moves(piece, &DIAGONAL_DIRS, board));
            moves
        }
        PieceType::King => offset_moves(piece, &KING_OFFSETS, board),
    }
}

/// Check whether `to` is among the piece's pseudo-legal destinations.
pub fn is_valid_move(piece: &Piece, to: Square, board: &BoardState) -> bool {
    get_possible_moves(piece, board).contains(&to)
}

fn on_board(x: i8, y: i8) -> Option<Square> {
    if (0..8).contains(&x) && (0..8).contains(&y) {
        Some((x as u8, y as u8))
    } else {
        None
    }
}

/// Walk each ray outward from the piece. An empty square extends the
/// ray, an opposing piece ends it as a capture, an own piece ends it
/// without being added.
fn ray_moves(piece: &Piece, directions: &[(i8, i8)], board: &BoardState) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(dx, dy) in directions {
        for step in 1i8..8 {
            let Some(target) = on_board(piece.x as i8 + dx * step, piece.y as i8 + dy * step)
            else {
                break;
            };
            match board.get_piece_color(target) {
                None => moves.push(target),
                Some(color) => {
                    if color != piece.color {
                        moves.push(target);
                    }
                    break;
                }
            }
        }
    }
    moves
}

/// Fixed-offset candidates (knight and king): on-board and not occupied
/// by an own piece.
fn offset_moves(piece: &Piece, offsets: &[(i8, i8)], board: &BoardState) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(dx, dy) in offsets {
        let Some(target) = on_board(piece.x as i8 + dx, piece.y as i8 + dy) else {
            continue;
        };
        if board.get_piece_color(target) != Some(piece.color) {
            moves.push(target);
        }
    }
    moves
}

fn pawn_moves(piece: &Piece, board: &BoardState) -> Vec<Square> {
    let mut moves = Vec::new();
    let direction: i8 = match piece.color {
        PieceColor::White => 1,
        PieceColor::Black => -1,
    };
    let (x, y) = (piece.x as i8, piece.y as i8);

    // The diagonal squares are capture-only.
    let captures = match piece.color {
        PieceColor::White => [(x + 1, y + 1), (x - 1, y + 1)],
        PieceColor::Black => [(x - 1, y - 1), (x + 1, y - 1)],
    };
    for (cx, cy) in captures {
        if let Some(target) = on_board(cx, cy) {
            if board
                .get_piece_color(target)
                .is_some_and(|color| color != piece.color)
            {
                moves.push(target);
            }
        }
    }

    // A pawn on the last rank generates no forward step (promotion is
    // not implemented).
    if piece.y != 7 {
        if let Some(forward) = on_board(x, y + direction) {
            if board.is_empty(forward) {
                moves.push(forward);
                // Double step only from rank 1 regardless of color; a
                // black pawn on its actual starting rank 6 never gets
                // one.
                if piece.y == 1 {
                    if let Some(double) = on_board(x, y + 2 * direction) {
                        if board.is_empty(double) {
                            moves.push(double);
                        }
                    }
                }
            }
        }
    }

    moves
}
