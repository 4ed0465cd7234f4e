//! Game state with move history and time travel.
//!
//! A [`GameState`] is a value: every operation returns a new state and
//! leaves the receiver untouched. The view keeps the latest value and
//! re-renders from it.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::rules::evaluate;
use super::snapshot::Snapshot;
use super::{Player, Position, Verdict};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error raised when a history jump targets a step that does not exist.
///
/// The view only ever offers steps that exist, so this indicates a bug in
/// the caller rather than bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// Requested step is past the end of history.
    #[display("Step {} is out of range (history has {} snapshots)", step, len)]
    StepOutOfRange {
        /// The requested step.
        step: usize,
        /// Number of snapshots in history.
        len: usize,
    },
}

/// Move history plus the index of the snapshot being viewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    history: Vec<Snapshot>,
    step: usize,
}

impl GameState {
    /// Creates a new game: one empty snapshot, viewing step 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::initial()],
            step: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(history: Vec<Snapshot>, step: usize) -> Self {
        Self { history, step }
    }

    /// All snapshots, oldest first. `history()[0]` is the empty board.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Index of the snapshot being viewed.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Index of the most recent snapshot.
    pub fn latest_step(&self) -> usize {
        self.history.len() - 1
    }

    /// Returns true when viewing the most recent snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.step == self.latest_step()
    }

    /// The snapshot being viewed.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.step]
    }

    /// Player to move at the viewed step. Derived from step parity.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Verdict for the viewed snapshot.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn verdict(&self) -> Verdict {
        evaluate(self.current().board())
    }

    /// Status line for the viewed snapshot.
    pub fn status_text(&self) -> String {
        match self.verdict() {
            Verdict::Winner { player, .. } => format!("Winner: {}", player),
            Verdict::Draw => "Draw".to_string(),
            Verdict::InProgress => format!("Next player: {}", self.to_move()),
        }
    }

    /// Plays the side to move at `position`, acting from the viewed step.
    ///
    /// Any snapshots after the viewed step are discarded, the new snapshot
    /// is appended and becomes the viewed step.
    ///
    /// # Errors
    ///
    /// - [`MoveError::SquareOccupied`] if the square is taken
    /// - [`MoveError::GameOver`] if the viewed board already has a winner
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move()))]
    pub fn apply_move(&self, position: Position) -> Result<Self, MoveError> {
        let mov = Move::new(self.to_move(), position);
        MoveContract::pre(self, &mov)?;

        let mut history = self.history[..=self.step].to_vec();
        history.push(self.current().advance(mov));
        let next = Self {
            step: history.len() - 1,
            history,
        };

        MoveContract::post(self, &next)?;
        debug!(
            discarded = self.latest_step() - self.step,
            new_step = next.step,
            "Move applied"
        );
        Ok(next)
    }

    /// Same as [`GameState::apply_move`] for a raw cell index (0-8).
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for an index above 8, otherwise as
    /// [`GameState::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_index(&self, index: usize) -> Result<Self, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.apply_move(position)
    }

    /// Views an earlier (or later) snapshot without changing history.
    ///
    /// # Errors
    ///
    /// [`HistoryError::StepOutOfRange`] if `step` is not in history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&self, step: usize) -> Result<Self, HistoryError> {
        if step >= self.history.len() {
            return Err(HistoryError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        debug!(from = self.step, to = step, "Jumping in history");
        Ok(Self {
            history: self.history.clone(),
            step,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
