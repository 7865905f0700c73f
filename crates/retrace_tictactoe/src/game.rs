//! The time-travel game state machine.
//!
//! A [`Game`] owns the move history, the playback position (`step`), whose
//! turn it is and the move-list sort order. It changes only through
//! [`Game::apply_move`], [`Game::jump_to`] and [`Game::toggle_sort`]; every
//! other method is a read.

use super::error::{JumpError, LoadError, MoveError};
use super::history::{GameHistory, MoveRecord};
use super::invariants::{GameInvariants, InvariantSet};
use super::view::{GameView, derive_view};
use super::{Board, Coordinate, Player, Position, Verdict, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Presentation order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label shown on the sort button: the order a press switches to.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Descend",
            Self::Descending => "Ascend",
        }
    }

    /// True for [`SortOrder::Ascending`].
    pub fn is_ascending(self) -> bool {
        self == Self::Ascending
    }
}

/// Tic-tac-toe with a full move history and time travel.
///
/// Deserialized games are checked against [`GameInvariants`] before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGame")]
pub struct Game {
    history: GameHistory,
    step: usize,
    to_move: Player,
    order: SortOrder,
}

#[derive(Deserialize)]
struct RawGame {
    history: GameHistory,
    step: usize,
    to_move: Player,
    order: SortOrder,
}

impl TryFrom<RawGame> for Game {
    type Error = LoadError;

    fn try_from(raw: RawGame) -> Result<Self, Self::Error> {
        let game = Self {
            history: raw.history,
            step: raw.step,
            to_move: raw.to_move,
            order: raw.order,
        };
        GameInvariants::check_all(&game).map_err(|violations| {
            let described: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
            LoadError::Invariants(described.join("; "))
        })?;
        Ok(game)
    }
}

impl Game {
    /// Creates a new game: empty board, X to move, ascending move list.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(SortOrder::default())
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_order(order: SortOrder) -> Self {
        Self {
            history: GameHistory::new(),
            step: 0,
            to_move: Player::X,
            order,
        }
    }

    /// Plays `moves` in order from a new game.
    ///
    /// # Errors
    ///
    /// Returns the first rejection; the moves before it are not kept.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for pos in moves {
            game.apply_move(*pos)?;
        }
        Ok(game)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Playing from an earlier step discards every record after it before
    /// the new one is appended. Returns the coordinate recorded for the move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the board at the current step is won.
    /// - [`MoveError::SquareOccupied`] if `pos` is already taken.
    ///
    /// The game is unchanged when an error is returned.
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move))]
    pub fn apply_move(&mut self, pos: Position) -> Result<Coordinate, MoveError> {
        let current = self.current_board();
        if rules::check_winner(current).is_some() {
            debug!("Move rejected, game already won");
            return Err(MoveError::GameOver);
        }
        if !current.is_empty(pos) {
            debug!("Move rejected, square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        let board = current.with_mark(pos, self.to_move);
        let coordinate = pos.coordinate();

        self.history.truncate_to(self.step);
        self.history.append(board, coordinate);
        self.step = self.history.len() - 1;
        self.to_move = self.to_move.opponent();

        assert_invariants(self);
        info!(%coordinate, new_step = self.step, "Move applied");
        Ok(coordinate)
    }

    /// Index form of [`Game::apply_move`].
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for indices above 8, otherwise as
    /// [`Game::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_move_at(&mut self, index: usize) -> Result<Coordinate, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.apply_move(pos)
    }

    /// Moves playback to `step` without touching the history.
    ///
    /// # Errors
    ///
    /// [`JumpError::OutOfRange`] if `step` is not a recorded move.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        let len = self.history.len();
        if step >= len {
            debug!(len, "Jump rejected");
            return Err(JumpError::OutOfRange { step, len });
        }

        self.step = step;
        self.to_move = Player::for_step(step);

        assert_invariants(self);
        debug!(player = %self.to_move, "Jumped");
        Ok(())
    }

    /// Flips the move-list order.
    #[instrument(skip(self), fields(order = ?self.order))]
    pub fn toggle_sort(&mut self) {
        self.order = self.order.toggle();
    }

    /// The move log.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Current playback position.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Player whose mark the next move places.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// True when X moves next.
    pub fn x_is_next(&self) -> bool {
        self.to_move == Player::X
    }

    /// Move-list order.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// True when the move list starts at game start.
    pub fn is_ascending(&self) -> bool {
        self.order.is_ascending()
    }

    /// Record at the current step.
    pub fn current_record(&self) -> &MoveRecord {
        &self.history.records()[self.step]
    }

    /// Board at the current step.
    pub fn current_board(&self) -> &Board {
        self.current_record().board()
    }

    /// Verdict for the board at the current step.
    pub fn verdict(&self) -> Verdict {
        rules::evaluate(self.current_board())
    }

    /// Positions still open at the current step.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.verdict().is_win() {
            Vec::new()
        } else {
            Position::valid_moves(self.current_board())
        }
    }

    /// Derived view for rendering.
    pub fn view(&self) -> GameView {
        derive_view(self)
    }

    #[cfg(test)]
    pub(crate) fn corrupt_turn_for_test(&mut self) {
        self.to_move = self.to_move.opponent();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks every game invariant in debug builds.
fn assert_invariants(game: &Game) {
    debug_assert!(
        GameInvariants::check_all(game).is_ok(),
        "Game invariants violated: {:?}",
        GameInvariants::check_all(game).err()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariants::{Invariant, StepInRangeInvariant, TurnParityInvariant};

    #[test]
    fn test_new_game_state() {
        let game = Game::new();
        assert_eq!(game.step(), 0);
        assert!(game.x_is_next());
        assert!(game.is_ascending());
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.verdict(), Verdict::InProgress);
    }

    #[test]
    fn test_apply_move_advances() {
        let mut game = Game::new();
        let coordinate = game.apply_move(Position::Center).unwrap();
        assert_eq!(coordinate, Coordinate::new(2, 2));
        assert_eq!(game.step(), 1);
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.current_board().get(Position::Center).mark(), Some(Player::X));
    }

    #[test]
    fn test_occupied_square_rejected_without_change() {
        let mut game = Game::new();
        game.apply_move(Position::Center).unwrap();
        let before = game.clone();
        assert_eq!(
            game.apply_move(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_bounds_index_rejected() {
        let mut game = Game::new();
        assert_eq!(game.apply_move_at(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut game = Game::new();
        game.apply_move(Position::Center).unwrap();
        assert_eq!(game.jump_to(2), Err(JumpError::OutOfRange { step: 2, len: 2 }));
        assert_eq!(game.step(), 1);
    }

    #[test]
    fn test_jump_forward_after_jump_back() {
        let mut game = Game::replay(&[Position::TopLeft, Position::Center]).unwrap();
        game.jump_to(0).unwrap();
        assert!(game.x_is_next());
        game.jump_to(2).unwrap();
        assert!(game.x_is_next());
        assert_eq!(game.current_board().occupied(), 2);
    }

    #[test]
    fn test_toggle_sort_round_trip() {
        let mut game = Game::new();
        game.toggle_sort();
        assert_eq!(game.order(), SortOrder::Descending);
        game.toggle_sort();
        assert_eq!(game.order(), SortOrder::Ascending);
    }

    #[test]
    fn test_valid_moves_empty_after_win() {
        let game = Game::replay(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ])
        .unwrap();
        assert!(game.verdict().is_win());
        assert!(game.valid_moves().is_empty());
    }

    #[test]
    fn test_deserialize_round_trip() {
        let mut game = Game::replay(&[Position::Center, Position::TopLeft]).unwrap();
        game.jump_to(1).unwrap();
        let json = serde_json::to_string(&game).unwrap();
        let loaded: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, game);
    }

    #[test]
    fn test_deserialize_rejects_step_past_history() {
        let mut value = serde_json::to_value(Game::new()).unwrap();
        value["step"] = serde_json::json!(5);
        let err = serde_json::from_value::<Game>(value).unwrap_err();
        assert!(err.to_string().contains(StepInRangeInvariant::description()));
    }

    #[test]
    fn test_deserialize_rejects_wrong_turn() {
        let mut value = serde_json::to_value(Game::replay(&[Position::Center]).unwrap()).unwrap();
        value["to_move"] = serde_json::json!("X");
        let err = serde_json::from_value::<Game>(value).unwrap_err();
        assert!(err.to_string().contains(TurnParityInvariant::description()));
    }

    #[test]
    fn test_sort_label_names_the_toggle_target() {
        assert_eq!(SortOrder::Ascending.label(), "Descend");
        assert_eq!(SortOrder::Descending.label(), "Ascend");

        let mut game = Game::new();
        assert_eq!(game.view().sort_label(), "Descend");
        game.toggle_sort();
        assert!(!game.is_ascending());
        assert_eq!(game.view().sort_label(), "Ascend");
    }
}
