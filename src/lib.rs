//! Rewind tic-tac-toe: a two-player tic-tac-toe board with time travel.
//!
//! Every accepted move appends an immutable snapshot to the game history.
//! Any earlier snapshot can be viewed, and playing from it discards the
//! snapshots that followed.
//!
//! # Architecture
//!
//! - **Games**: board, win evaluation, history, contracts and invariants
//! - **Replay**: headless replay of a move list
//! - **TUI**: interactive terminal front end
//! - **Config**: TOML view and logging options
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Player};
//!
//! let game = GameState::new()
//!     .apply_index(0).unwrap()
//!     .apply_index(4).unwrap()
//!     .apply_index(1).unwrap()
//!     .apply_index(8).unwrap()
//!     .apply_index(2).unwrap();
//! assert_eq!(game.verdict().winner(), Some(Player::X));
//!
//! let earlier = game.jump_to(2).unwrap();
//! assert_eq!(earlier.status_text(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod replay;
mod tui;

// Crate-level exports - Configuration
pub use config::{Config, ConfigError};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingTurnInvariant, Board, BoardParseError, Contract, Coordinate,
    FrozenAfterWinInvariant, GameState, HistoryError, Invariant, InvariantSet,
    InvariantViolation, LegalMove, Move, MoveContract, MoveError, NoWinnerYet, Player,
    PlayersTurn, Position, SingleCellStepInvariant, Snapshot, Square, SquareIsEmpty,
    TicTacToeInvariants, Verdict, ViewedStepInBoundsInvariant, WINNING_LINES, WinningLine,
    check_winner, evaluate, is_full,
};

// Crate-level exports - Replay
pub use replay::{Rejection, ReplayReport, replay};

// Crate-level exports - Terminal UI
pub use tui::{
    Action, App, Direction, Focus, ScreenLayout, action_for_click, action_for_key,
    board_cells, board_inner, draw, handle_event, history_inner, history_window, move_cursor,
    run_loop, run_tui, screen_layout,
};
