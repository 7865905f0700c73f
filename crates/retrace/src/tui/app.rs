//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use retrace_tictactoe::{Game, Position};
use tracing::{debug, info, instrument};

use super::input::{digit_position, move_cursor};

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The board: arrows move the cursor, Enter plays.
    #[default]
    Board,
    /// The move list: arrows select, Enter jumps.
    Moves,
}

impl Focus {
    /// Toggles between the board and the move list.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Main application state.
///
/// Owns the single [`Game`] and changes it only through its operations.
#[derive(Debug, Getters)]
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    /// Index into the move list as currently presented.
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application around `game`.
    #[instrument(skip(game))]
    pub fn new(game: Game) -> Self {
        let mut app = Self {
            game,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            should_quit: false,
        };
        app.select_active();
        app
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Tab => self.focus = self.focus.toggle(),
            KeyCode::Char('s') => {
                self.game.toggle_sort();
                self.select_active();
            }
            KeyCode::Home => self.jump(0),
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::Moves => self.jump_to_selected(),
            },
            KeyCode::Up | KeyCode::Down if self.focus == Focus::Moves => {
                self.move_selection(key.code == KeyCode::Down);
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
            }
            code => {
                if let Some(pos) = digit_position(code) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
        }
    }

    fn play(&mut self, pos: Position) {
        match self.game.apply_move(pos) {
            Ok(coordinate) => debug!(%coordinate, "Move played"),
            Err(e) => debug!(error = %e, "Move ignored"),
        }
        self.select_active();
    }

    fn jump(&mut self, step: usize) {
        if let Err(e) = self.game.jump_to(step) {
            debug!(error = %e, "Jump ignored");
        }
        self.select_active();
    }

    fn jump_to_selected(&mut self) {
        let step = self.game.view().moves().get(self.selected).map(|m| *m.step());
        if let Some(step) = step {
            self.jump(step);
        }
    }

    fn move_selection(&mut self, down: bool) {
        let last = self.game.history().len() - 1;
        self.selected = if down {
            (self.selected + 1).min(last)
        } else {
            self.selected.saturating_sub(1)
        };
    }

    /// Points the selection at the entry for the current step.
    fn select_active(&mut self) {
        let view = self.game.view();
        self.selected = view
            .moves()
            .iter()
            .position(|m| *m.active())
            .unwrap_or(0);
    }
}
