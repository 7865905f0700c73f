//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Nothing here knows about
//! history or whose turn it is, so the same board always yields the same
//! verdict regardless of the move order that produced it.

pub mod win;

pub use win::{WINNING_LINES, check_winner};

use super::{Board, Position, Verdict};
use tracing::instrument;

/// True once every cell holds a mark.
pub fn is_full(board: &Board) -> bool {
    board.occupied() == Position::ALL.len()
}

/// Evaluates a board.
///
/// The first completed line in [`WINNING_LINES`] order wins; otherwise a
/// full board is a draw and anything else is still in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Verdict {
    if let Some((mark, line)) = check_winner(board) {
        Verdict::Won { mark, line }
    } else if is_full(board) {
        Verdict::Draw
    } else {
        Verdict::InProgress
    }
}
