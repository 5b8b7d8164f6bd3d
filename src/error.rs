//! Error types for board operations
//!
//! Plain queries stay total and return `Option`; only the policy-checked
//! move path surfaces errors.

/// Errors that can occur when applying a move through [`crate::Board::try_move`]
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// Destination rejected by the move generator
    #[error("Invalid move: {message}")]
    InvalidMove { message: String },

    /// No piece at the requested origin square
    #[error("Piece not found at position ({x}, {y})")]
    PieceNotFound { x: u8, y: u8 },
}

/// Result type alias for board operations
pub type BoardResult<T> = Result<T, BoardError>;
