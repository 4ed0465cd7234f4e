//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square, Verdict, WinningLine};
use super::draw::is_full;
use tracing::instrument;

/// The eight winning lines in evaluation order: rows, columns, diagonals.
///
/// When a board completes more than one line, the first match in this
/// order is reported.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    WinningLine::new([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinningLine::new([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinningLine::new([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    WinningLine::new([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinningLine::new([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinningLine::new([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinningLine::new([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinningLine::new([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Checks if there is a winner on the board.
///
/// Returns the player and the first completed line, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(Player, WinningLine)> {
    WINNING_LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Square::Occupied(player)
                if board.get(b) == board.get(a) && board.get(c) == board.get(a) =>
            {
                Some((player, *line))
            }
            _ => None,
        }
    })
}

/// Evaluates a board: winner, draw, or still in progress.
#[instrument]
pub fn evaluate(board: &Board) -> Verdict {
    if let Some((player, line)) = check_winner(board) {
        return Verdict::Winner { player, line };
    }
    if is_full(board) {
        Verdict::Draw
    } else {
        Verdict::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().expect("valid board")
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
        assert_eq!(evaluate(&Board::new()), Verdict::InProgress);
    }

    #[test]
    fn test_winner_top_row() {
        let verdict = evaluate(&board("XXX/OO./..."));
        assert_eq!(verdict.winner(), Some(Player::X));
        assert_eq!(verdict.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
    }

    #[test]
    fn test_winner_diagonal() {
        let verdict = evaluate(&board("O.X/XO./X.O"));
        assert_eq!(verdict.winner(), Some(Player::O));
        assert_eq!(verdict.winning_line().map(|l| l.indices()), Some([0, 4, 8]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let verdict = evaluate(&board("OOX/.X./X.."));
        assert_eq!(verdict.winning_line().map(|l| l.indices()), Some([2, 4, 6]));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(evaluate(&board("XX./.../...")), Verdict::InProgress);
    }

    #[test]
    fn test_first_line_in_order_wins_tie() {
        // Row 0 and column 0 both complete; the row comes first.
        let verdict = evaluate(&board("XXX/XOO/XOO"));
        assert_eq!(verdict.winning_line().map(|l| l.indices()), Some([0, 1, 2]));

        // Column 2 and the anti-diagonal; the column comes first.
        let verdict = evaluate(&board("OOX/OXX/X.X"));
        assert_eq!(verdict.winning_line().map(|l| l.indices()), Some([2, 5, 8]));
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        let verdict = evaluate(&board("XOX/OXO/OXX"));
        assert_eq!(verdict.winner(), Some(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(evaluate(&board("XOX/XOO/OXX")), Verdict::Draw);
    }

    #[test]
    fn test_lines_are_distinct() {
        for (i, a) in WINNING_LINES.iter().enumerate() {
            for b in &WINNING_LINES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
