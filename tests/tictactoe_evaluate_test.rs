//! Exhaustive tests for win evaluation.

use rewind_tictactoe::{
    Board, Player, Position, Square, Verdict, WINNING_LINES, check_winner, evaluate, is_full,
};

/// Decodes `n` in base 3: 0 empty, 1 X, 2 O.
fn board_from_code(mut n: u32) -> Board {
    let mut squares = [Square::Empty; 9];
    for square in squares.iter_mut() {
        *square = match n % 3 {
            0 => Square::Empty,
            1 => Square::Occupied(Player::X),
            _ => Square::Occupied(Player::O),
        };
        n /= 3;
    }
    Board::from_squares(squares)
}

/// Straightforward reference: first triple in table order wins.
fn oracle(board: &Board) -> Verdict {
    let squares = board.squares();
    for line in WINNING_LINES {
        let [a, b, c] = line.indices();
        if let Square::Occupied(player) = squares[a]
            && squares[b] == squares[a]
            && squares[c] == squares[a]
        {
            return Verdict::Winner { player, line };
        }
    }
    if squares.iter().all(|s| *s != Square::Empty) {
        Verdict::Draw
    } else {
        Verdict::InProgress
    }
}

#[test]
fn test_evaluate_agrees_with_oracle_on_all_boards() {
    for code in 0..3u32.pow(9) {
        let board = board_from_code(code);
        assert_eq!(evaluate(&board), oracle(&board), "board {}", board);
    }
}

#[test]
fn test_winner_implies_line_of_that_player() {
    for code in 0..3u32.pow(9) {
        let board = board_from_code(code);
        if let Some((player, line)) = check_winner(&board) {
            for pos in line.positions() {
                assert_eq!(board.get(pos), Square::Occupied(player));
            }
        }
    }
}

#[test]
fn test_winning_lines_table() {
    let table: Vec<[usize; 3]> = WINNING_LINES.iter().map(|l| l.indices()).collect();
    assert_eq!(
        table,
        vec![
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ]
    );
}

#[test]
fn test_parsed_boards() {
    let board: Board = "XXX/OO./...".parse().unwrap();
    assert_eq!(evaluate(&board).winner(), Some(Player::X));
    assert_eq!(
        evaluate(&board).winning_line().map(|l| l.indices()),
        Some([0, 1, 2])
    );

    let board: Board = "XOX/XOO/OXX".parse().unwrap();
    assert!(is_full(&board));
    assert_eq!(evaluate(&board), Verdict::Draw);

    let board: Board = "O.X/.OX/..O".parse().unwrap();
    assert_eq!(evaluate(&board).winner(), Some(Player::O));
    assert!(evaluate(&board).winning_line().unwrap().contains(Position::Center));
}
