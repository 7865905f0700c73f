//! History consistency invariant: each record adds exactly one mark.

use super::super::{Game, GameHistory, Player, Square};
use super::Invariant;

/// Invariant: the history is a valid append-only move log.
///
/// Record 0 is the empty board with no coordinate. Every later record
/// differs from its predecessor in exactly one cell, that cell was empty,
/// it holds the mark of the player whose turn it was, and the record's
/// coordinate names it.
pub struct HistoryConsistentInvariant;

impl HistoryConsistentInvariant {
    /// Checks a history on its own, independent of playback position.
    pub fn history_holds(history: &GameHistory) -> bool {
        let Some(start) = history.get(0) else {
            return false;
        };
        if start.coordinate().is_some() || start.board().occupied() != 0 {
            return false;
        }

        history.records().windows(2).enumerate().all(|(i, pair)| {
            let (before, after) = (&pair[0], &pair[1]);
            let changed: Vec<usize> = (0..9)
                .filter(|&idx| before.board().squares()[idx] != after.board().squares()[idx])
                .collect();
            let [idx] = changed.as_slice() else {
                return false;
            };
            let expected = Square::Occupied(Player::for_step(i));
            before.board().squares()[*idx] == Square::Empty
                && after.board().squares()[*idx] == expected
                && after
                    .coordinate()
                    .and_then(|c| c.position())
                    .is_some_and(|pos| pos.to_index() == *idx)
        })
    }
}

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        Self::history_holds(game.history())
    }

    fn description() -> &'static str {
        "Each history record adds exactly one mark at its coordinate"
    }
}
