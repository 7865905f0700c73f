//! Read-only projection of a [`Game`] for rendering.
//!
//! [`derive_view`] is pure: it can be called after every operation, or as
//! often as the presentation layer redraws, without affecting the game.

use super::{Board, Game, Player, Position, Verdict, WinningLine};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status line above the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The current board is won.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The current board is full with no line.
    #[display("Winner: Draw")]
    Draw,
    /// Play continues.
    #[display("Next Player: {}", _0)]
    NextPlayer(Player),
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    step: usize,
    /// Button text.
    label: String,
    /// True for the entry at the current step.
    active: bool,
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameView {
    /// Board at the current step.
    board: Board,
    /// Verdict for that board.
    verdict: Verdict,
    /// Cells to highlight when the board is won.
    highlighted_line: Option<WinningLine>,
    /// Status line.
    status: Status,
    /// Move list in presentation order.
    moves: Vec<MoveEntry>,
    /// Label of the sort toggle.
    sort_label: String,
}

impl GameView {
    /// Whether `pos` is part of the highlighted line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.highlighted_line.is_some_and(|line| line.contains(pos))
    }

    /// The entry marked active.
    pub fn active_entry(&self) -> Option<&MoveEntry> {
        self.moves.iter().find(|entry| entry.active)
    }
}

/// Projects the game into a [`GameView`].
#[instrument(skip(game), fields(step = game.step()))]
pub fn derive_view(game: &Game) -> GameView {
    let board = game.current_board().clone();
    let verdict = game.verdict();

    let status = match verdict {
        Verdict::Won { mark, .. } => Status::Winner(mark),
        Verdict::Draw => Status::Draw,
        Verdict::InProgress => Status::NextPlayer(game.to_move()),
    };

    let mut moves: Vec<MoveEntry> = game
        .history()
        .iter()
        .enumerate()
        .map(|(step, record)| {
            let label = match record.coordinate() {
                Some(coordinate) => format!("Go to move #{} {}", step, coordinate),
                None => "Go to game start".to_string(),
            };
            MoveEntry::new(step, label, step == game.step())
        })
        .collect();
    if !game.is_ascending() {
        moves.reverse();
    }

    GameView {
        board,
        verdict,
        highlighted_line: verdict.winning_line(),
        status,
        moves,
        sort_label: game.order().label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_view() {
        let view = Game::new().view();
        assert_eq!(view.status().to_string(), "Next Player: X");
        assert_eq!(view.moves().len(), 1);
        assert_eq!(view.moves()[0].label(), "Go to game start");
        assert!(*view.moves()[0].active());
        assert_eq!(view.highlighted_line(), &None);
        assert_eq!(view.sort_label(), "Descend");
    }

    #[test]
    fn test_move_labels_use_coordinates() {
        let game = Game::replay(&[Position::Center, Position::TopCenter]).unwrap();
        let view = game.view();
        let labels: Vec<&str> = view.moves().iter().map(|m| m.label().as_str()).collect();
        assert_eq!(
            labels,
            vec!["Go to game start", "Go to move #1 (2,2)", "Go to move #2 (1,2)"]
        );
    }

    #[test]
    fn test_descending_reverses_entries() {
        let mut game = Game::replay(&[Position::Center, Position::TopCenter]).unwrap();
        game.toggle_sort();
        let view = game.view();
        let steps: Vec<usize> = view.moves().iter().map(|m| *m.step()).collect();
        assert_eq!(steps, vec![2, 1, 0]);
        assert_eq!(view.active_entry().map(|m| *m.step()), Some(2));
        assert_eq!(view.sort_label(), "Ascend");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Winner(Player::O).to_string(), "Winner: O");
        assert_eq!(Status::Draw.to_string(), "Winner: Draw");
        assert_eq!(Status::NextPlayer(Player::O).to_string(), "Next Player: O");
    }

    #[test]
    fn test_view_is_repeatable() {
        let game = Game::replay(&[Position::Center]).unwrap();
        assert_eq!(game.view(), game.view());
    }
}
