//! Win/draw/ongoing determination for a board.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// One of the eight fixed triples (rows, columns, diagonals) that wins the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// Creates a line from three positions.
    pub const fn new(cells: [Position; 3]) -> Self {
        Self(cells)
    }

    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three cell indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Verdict for a single board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// No winner yet and at least one empty square.
    InProgress,
    /// A player completed a line.
    Winner {
        /// The winning player.
        player: Player,
        /// The first completed line in evaluation order.
        line: WinningLine,
    },
    /// Board full with no completed line.
    Draw,
}

impl Verdict {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Verdict::Winner { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            Verdict::Winner { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::InProgress => write!(f, "No winner yet"),
            Verdict::Winner { player, .. } => write!(f, "Winner: {}", player),
            Verdict::Draw => write!(f, "Draw"),
        }
    }
}
