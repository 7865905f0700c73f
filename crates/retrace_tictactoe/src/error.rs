//! Rejections reported by the game operations.
//!
//! A rejected operation never changes the game. Callers that only need the
//! "ignore bad input" behavior can log the error and carry on.

use super::Position;

/// Reason a move was not applied.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The board at the current step already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The cell index is not on the board.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}

/// Reason a jump was not performed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The step is past the last recorded move.
    #[display("Step {} is out of range (history has {} records)", step, len)]
    OutOfRange {
        /// Requested step.
        step: usize,
        /// Number of records in the history.
        len: usize,
    },
}

impl std::error::Error for JumpError {}

/// Reason serialized game state was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum LoadError {
    /// The records are not a move log starting from the empty board.
    #[display("History is not a valid move log")]
    InconsistentHistory,

    /// Step or turn disagree with the history.
    #[display("Game state violates invariants: {}", _0)]
    Invariants(String),
}

impl std::error::Error for LoadError {}
