//! Tic-tac-toe with move history and time travel.

mod action;
mod contracts;
mod game;
mod invariants;
mod position;
mod rules;
mod snapshot;
mod types;
mod verdict;

pub use action::{Move, MoveError};
pub use contracts::{Contract, LegalMove, MoveContract, NoWinnerYet, PlayersTurn, SquareIsEmpty};
pub use game::{GameState, HistoryError};
pub use invariants::{
    AlternatingTurnInvariant, FrozenAfterWinInvariant, Invariant, InvariantSet, InvariantViolation,
    SingleCellStepInvariant, TicTacToeInvariants, ViewedStepInBoundsInvariant,
};
pub use position::{Coordinate, Position};
pub use rules::{WINNING_LINES, check_winner, evaluate, is_full};
pub use snapshot::Snapshot;
pub use types::{Board, BoardParseError, Player, Square};
pub use verdict::{Verdict, WinningLine};
