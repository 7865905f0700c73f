//! Board positions and the 1-based coordinates shown in the move list.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based row of this position.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column of this position.
    pub fn column(self) -> usize {
        self.to_index() % 3
    }

    /// Position at the given zero-based row and column.
    pub fn at(row: usize, column: usize) -> Option<Self> {
        if row < 3 && column < 3 {
            Self::from_index(row * 3 + column)
        } else {
            None
        }
    }

    /// The coordinate recorded in history when this cell is played.
    pub fn coordinate(self) -> Coordinate {
        Coordinate::from(self)
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The 1-based `(column, row)` pair stored with each played move.
///
/// `column` is `index / 3 + 1` and `row` is `index % 3 + 1`, so the
/// first number counts board rows top to bottom and the second counts
/// cells left to right. The move list prints them as `(column,row)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new,
    derive_more::Display,
)]
#[display("({},{})", column, row)]
pub struct Coordinate {
    /// First component, 1-3.
    pub column: u8,
    /// Second component, 1-3.
    pub row: u8,
}

impl Coordinate {
    /// The board position this coordinate names, if it is in range.
    pub fn position(self) -> Option<Position> {
        if !(1..=3).contains(&self.column) || !(1..=3).contains(&self.row) {
            return None;
        }
        let index = (usize::from(self.column) - 1) * 3 + usize::from(self.row) - 1;
        Position::from_index(index)
    }
}

impl From<Position> for Coordinate {
    fn from(pos: Position) -> Self {
        let index = pos.to_index();
        // index < 9, both components fit in a u8
        Self {
            column: (index / 3 + 1) as u8,
            row: (index % 3 + 1) as u8,
        }
    }
}
