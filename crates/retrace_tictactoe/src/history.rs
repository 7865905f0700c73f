//! Append-only log of board snapshots, one per move.

use super::error::LoadError;
use super::invariants::HistoryConsistentInvariant;
use super::{Board, Coordinate};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One entry in the history: the board after a move and where it was played.
///
/// Records are never mutated once appended. The record at step 0 holds the
/// empty board and no coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    board: Board,
    coordinate: Option<Coordinate>,
}

impl MoveRecord {
    /// The starting record: empty board, no move.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            coordinate: None,
        }
    }

    /// Board snapshot after this move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cell just filled, `None` for the starting record.
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }
}

/// Ordered move records; index 0 is always the empty board.
///
/// Deserialization rejects record lists that are not a valid move log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct GameHistory {
    records: Vec<MoveRecord>,
}

#[derive(Deserialize)]
struct RawHistory {
    records: Vec<MoveRecord>,
}

impl TryFrom<RawHistory> for GameHistory {
    type Error = LoadError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        let history = Self {
            records: raw.records,
        };
        if HistoryConsistentInvariant::history_holds(&history) {
            Ok(history)
        } else {
            Err(LoadError::InconsistentHistory)
        }
    }
}

impl GameHistory {
    /// Creates a history holding only the starting record.
    pub fn new() -> Self {
        Self {
            records: vec![MoveRecord::start()],
        }
    }

    /// Number of records, including the starting one.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; the starting record cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `step`, if recorded.
    pub fn get(&self, step: usize) -> Option<&MoveRecord> {
        self.records.get(step)
    }

    /// The most recent record.
    pub fn latest(&self) -> &MoveRecord {
        // records is never empty: truncate_to keeps index 0
        &self.records[self.records.len() - 1]
    }

    /// All records in step order.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Iterates records in step order.
    pub fn iter(&self) -> std::slice::Iter<'_, MoveRecord> {
        self.records.iter()
    }

    /// Keeps records `0..=step` and discards the rest.
    ///
    /// Steps at or beyond the last record leave the history unchanged.
    #[instrument(skip(self), fields(len = self.records.len()))]
    pub fn truncate_to(&mut self, step: usize) {
        let keep = step.saturating_add(1);
        if keep < self.records.len() {
            debug!(discarded = self.records.len() - keep, "Discarding future moves");
            self.records.truncate(keep);
        }
    }

    /// Appends a record for a move.
    #[instrument(skip(self, board), fields(len = self.records.len()))]
    pub fn append(&mut self, board: Board, coordinate: Coordinate) {
        self.records.push(MoveRecord {
            board,
            coordinate: Some(coordinate),
        });
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a GameHistory {
    type Item = &'a MoveRecord;
    type IntoIter = std::slice::Iter<'a, MoveRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    fn history_with(positions: &[Position]) -> GameHistory {
        let mut history = GameHistory::new();
        for (i, pos) in positions.iter().enumerate() {
            let board = history.latest().board().with_mark(*pos, Player::for_step(i));
            history.append(board, pos.coordinate());
        }
        history
    }

    #[test]
    fn test_new_history_has_start_record() {
        let history = GameHistory::new();
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.latest(), &MoveRecord::start());
        assert_eq!(history.latest().coordinate(), None);
    }

    #[test]
    fn test_append_records_coordinate() {
        let history = history_with(&[Position::Center]);
        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().coordinate(), Some(Coordinate::new(2, 2)));
        assert_eq!(history.get(0).map(|r| r.board().occupied()), Some(0));
    }

    #[test]
    fn test_truncate_discards_later_records() {
        let mut history = history_with(&[
            Position::TopLeft,
            Position::TopCenter,
            Position::Center,
        ]);
        history.truncate_to(1);
        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().coordinate(), Some(Coordinate::new(1, 1)));
    }

    #[test]
    fn test_truncate_to_zero_keeps_start() {
        let mut history = history_with(&[Position::TopLeft, Position::Center]);
        history.truncate_to(0);
        assert_eq!(history, GameHistory::new());
    }

    #[test]
    fn test_deserialize_accepts_recorded_history() {
        let history = history_with(&[Position::Center, Position::TopLeft]);
        let json = serde_json::to_string(&history).unwrap();
        let loaded: GameHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, history);
    }

    #[test]
    fn test_deserialize_rejects_empty_records() {
        let err = serde_json::from_str::<GameHistory>(r#"{"records":[]}"#).unwrap_err();
        assert!(err.to_string().contains("not a valid move log"));
    }

    #[test]
    fn test_deserialize_rejects_skipped_move() {
        let mut value = serde_json::to_value(history_with(&[Position::Center])).unwrap();
        value["records"][1]["board"] = serde_json::to_value(Board::new()).unwrap();
        assert!(serde_json::from_value::<GameHistory>(value).is_err());
    }

    #[test]
    fn test_truncate_past_end_is_noop() {
        let mut history = history_with(&[Position::TopLeft]);
        let before = history.clone();
        history.truncate_to(1);
        history.truncate_to(usize::MAX);
        assert_eq!(history, before);
    }
}
