//! The outcome of evaluating a board.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Three cells in a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// Creates a line from its three positions.
    pub const fn new(positions: [Position; 3]) -> Self {
        Self(positions)
    }

    /// The three positions, in line order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices, in line order.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Verdict for a single board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// No three in a row and at least one empty cell.
    InProgress,
    /// Every cell filled with no three in a row.
    Draw,
    /// `mark` holds every cell of `line`.
    Won {
        /// The winning player.
        mark: Player,
        /// The first completed line in evaluation order.
        line: WinningLine,
    },
}

impl Verdict {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Verdict::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the completed line if the board is won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            Verdict::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// True once a player has three in a row.
    pub fn is_win(&self) -> bool {
        matches!(self, Verdict::Won { .. })
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::InProgress => write!(f, "In progress"),
            Verdict::Draw => write!(f, "Draw"),
            Verdict::Won { mark, line } => {
                let [a, b, c] = line.indices();
                write!(f, "Player {} wins on [{}, {}, {}]", mark, a, b, c)
            }
        }
    }
}
