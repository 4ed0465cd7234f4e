//! Immutable board snapshots recorded in game history.

use super::action::Move;
use super::position::Coordinate;
use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One board state in history, plus the coordinate of the move that
/// produced it (`None` for the initial, empty board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    point: Option<Coordinate>,
}

impl Snapshot {
    /// The empty board that starts every game.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            point: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, point: Option<Coordinate>) -> Self {
        Self { board, point }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the coordinate of the move that produced this snapshot.
    pub fn point(&self) -> Option<Coordinate> {
        self.point
    }

    /// Produces the snapshot that follows this one after `mov`.
    ///
    /// Legality is checked by the caller.
    #[instrument(skip(self))]
    pub(super) fn advance(&self, mov: Move) -> Self {
        Self {
            board: self.board.with_mark(mov.position, mov.player),
            point: Some(mov.position.coordinate()),
        }
    }

    /// History list label for this snapshot at `step`.
    pub fn describe(&self, step: usize, show_coordinates: bool) -> String {
        match (step, self.point) {
            (0, _) => "Go to game start".to_string(),
            (_, Some(point)) if show_coordinates => format!("Go to move #{} {}", step, point),
            _ => format!("Go to move #{}", step),
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}
