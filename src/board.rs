//! Owning board model
//!
//! The [`Board`] is the exclusive owner of the piece collection; the
//! rendering/input shell never mutates piece fields directly. Queries
//! are total: an out-of-range square reads as empty, and mutations
//! against an empty square are silent no-ops.

use tracing::{debug, info, warn};

use crate::error::{BoardError, BoardResult};
use crate::pieces::{starting_pieces, Piece, Square};
use crate::rules::{is_valid_move, BoardState};

/// Whether [`Board::try_move`] consults the move generator before
/// committing a move.
///
/// `Unchecked` reproduces the plain drag-and-drop flow where any
/// destination square is accepted on release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovePolicy {
    Unchecked,
    Enforced,
}

pub struct Board {
    pieces: Vec<Piece>,
}

impl Board {
    /// A board seeded with the standard 32-piece starting layout.
    pub fn new() -> Self {
        Self {
            pieces: starting_pieces(),
        }
    }

    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Self { pieces: Vec::new() }
    }

    /// A board holding exactly the given pieces.
    pub fn with_pieces(pieces: Vec<Piece>) -> Self {
        Self { pieces }
    }

    /// Read-only view of every piece, for drawing and snapshotting.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The piece occupying `square`, if any. Out-of-range squares are
    /// empty by definition.
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.position() == square)
    }

    /// Occupancy snapshot for the move generator.
    pub fn snapshot(&self) -> BoardState {
        BoardState::new(self.pieces.clone())
    }

    /// Relocates the piece at `from` to `to` unconditionally. Silently
    /// returns when `from` is empty; a displaced occupant of `to` is
    /// removed from the board.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        if off_board(from) || off_board(to) {
            warn!(
                "[BOARD] Ignoring move with off-board square: {:?} -> {:?}",
                from, to
            );
            return;
        }
        if self.piece_at(from).is_none() {
            debug!("[BOARD] No piece at {:?} to move", from);
            return;
        }

        if from != to {
            if let Some(index) = self.pieces.iter().position(|piece| piece.position() == to) {
                let taken = self.pieces.swap_remove(index);
                info!("[BOARD] {} captured on {:?}", taken, to);
            }
        }

        if let Some(piece) = self.pieces.iter_mut().find(|piece| piece.position() == from) {
            piece.x = to.0;
            piece.y = to.1;
            debug!("[BOARD] Moved {} from {:?}", piece, from);
        }
    }

    /// Deletes the piece at `square`; no-op when the square is empty.
    pub fn remove_piece(&mut self, square: Square) {
        if let Some(index) = self
            .pieces
            .iter()
            .position(|piece| piece.position() == square)
        {
            let removed = self.pieces.swap_remove(index);
            info!("[BOARD] Removed {} from {:?}", removed, square);
        }
    }

    /// Moves the piece at `from` to `to` under the given policy.
    ///
    /// With [`MovePolicy::Enforced`] the destination must be among the
    /// generator's pseudo-legal moves for the piece; with
    /// [`MovePolicy::Unchecked`] any destination is committed.
    pub fn try_move(&mut self, from: Square, to: Square, policy: MovePolicy) -> BoardResult<()> {
        let piece = *self
            .piece_at(from)
            .ok_or(BoardError::PieceNotFound { x: from.0, y: from.1 })?;

        if policy == MovePolicy::Enforced && !is_valid_move(&piece, to, &self.snapshot()) {
            warn!("[BOARD] Rejected move {} -> {:?}", piece, to);
            return Err(BoardError::InvalidMove {
                message: format!("{} cannot reach {:?}", piece, to),
            });
        }

        self.move_piece(from, to);
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn off_board((x, y): Square) -> bool {
    x > 7 || y > 7
}
