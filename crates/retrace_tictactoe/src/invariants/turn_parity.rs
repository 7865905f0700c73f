//! Turn parity invariant: X moves on even steps, O on odd ones.

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: the player to move is determined by the step number.
///
/// Holds after applying a move (which flips the turn) and after a jump
/// (which recomputes it), so the stored turn never drifts from the step.
pub struct TurnParityInvariant;

impl Invariant<Game> for TurnParityInvariant {
    fn holds(game: &Game) -> bool {
        game.to_move() == Player::for_step(game.step())
    }

    fn description() -> &'static str {
        "Player to move matches step parity (X on even steps)"
    }
}
