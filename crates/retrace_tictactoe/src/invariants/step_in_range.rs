//! Step range invariant: the playback position names a recorded move.

use super::super::Game;
use super::Invariant;

/// Invariant: `step < history.len()`.
pub struct StepInRangeInvariant;

impl Invariant<Game> for StepInRangeInvariant {
    fn holds(game: &Game) -> bool {
        game.step() < game.history().len()
    }

    fn description() -> &'static str {
        "Current step indexes a recorded move"
    }
}
