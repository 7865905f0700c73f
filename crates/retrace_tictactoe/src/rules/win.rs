//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square, WinningLine};
use tracing::instrument;

/// The eight winning triples: rows top to bottom, columns left to right,
/// then the main and anti diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    WinningLine::new([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinningLine::new([
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]),
    WinningLine::new([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    WinningLine::new([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ]),
    WinningLine::new([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]),
    WinningLine::new([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    WinningLine::new([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinningLine::new([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Checks if there is a winner on the board.
///
/// Returns the player and the first line in [`WINNING_LINES`] order that
/// they complete, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, WinningLine)> {
    for line in WINNING_LINES {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        if sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some((player, line));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark_all(board: &mut Board, player: Player, positions: &[Position]) {
        for pos in positions {
            board.set(*pos, Square::Occupied(player));
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        mark_all(
            &mut board,
            Player::X,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        assert_eq!(check_winner(&board), Some((Player::X, WINNING_LINES[0])));
    }

    #[test]
    fn test_winner_middle_column() {
        let mut board = Board::new();
        mark_all(
            &mut board,
            Player::O,
            &[Position::TopCenter, Position::Center, Position::BottomCenter],
        );
        let (player, line) = check_winner(&board).unwrap();
        assert_eq!(player, Player::O);
        assert_eq!(line.indices(), [1, 4, 7]);
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        mark_all(
            &mut board,
            Player::O,
            &[Position::TopLeft, Position::Center, Position::BottomRight],
        );
        assert_eq!(check_winner(&board), Some((Player::O, WINNING_LINES[6])));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        mark_all(&mut board, Player::X, &[Position::TopLeft, Position::TopCenter]);
        board.set(Position::TopRight, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_is_distinct() {
        for (i, a) in WINNING_LINES.iter().enumerate() {
            for b in &WINNING_LINES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
