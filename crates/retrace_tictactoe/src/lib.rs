//! Tic-tac-toe with a replayable move history.
//!
//! The crate is the game core only: board types, win detection, the
//! append-only move history, and a [`Game`] state machine that can jump to
//! any recorded step. Rendering lives elsewhere and talks to the core
//! through three operations and one projection.
//!
//! # Architecture
//!
//! - **Rules**: [`rules::evaluate`] turns a board into a [`Verdict`]
//! - **History**: [`GameHistory`], one [`MoveRecord`] per move plus the empty start
//! - **Game**: [`Game::apply_move`], [`Game::jump_to`], [`Game::toggle_sort`]
//! - **View**: [`derive_view`] builds the [`GameView`] a front end draws
//!
//! # Example
//!
//! ```
//! use retrace_tictactoe::{Game, Position};
//!
//! let mut game = Game::new();
//! game.apply_move(Position::Center)?;
//! game.apply_move(Position::TopLeft)?;
//! game.jump_to(1)?;
//!
//! let view = game.view();
//! assert_eq!(view.status().to_string(), "Next Player: O");
//! assert_eq!(view.moves()[1].label(), "Go to move #1 (2,2)");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod history;
mod position;
mod types;
mod verdict;
mod view;

pub mod invariants;
pub mod rules;

pub use error::{JumpError, LoadError, MoveError};
pub use game::{Game, SortOrder};
pub use history::{GameHistory, MoveRecord};
pub use position::{Coordinate, Position};
pub use types::{Board, Player, Square};
pub use verdict::{Verdict, WinningLine};
pub use view::{GameView, MoveEntry, Status, derive_view};
