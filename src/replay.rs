//! Headless replay of a move list.
//!
//! Drives [`GameState`] exactly as the terminal UI does, without a
//! terminal: rejected moves are collected instead of silently dropped.

use crate::games::tictactoe::{GameState, HistoryError, MoveError};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// A move from the input list that the game refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Rejection {
    /// Position of the move in the input list.
    index: usize,
    /// Cell index that was attempted.
    cell: usize,
    /// Why it was refused.
    reason: MoveError,
}

/// Outcome of replaying a move list.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct ReplayReport {
    /// Final game state.
    game: GameState,
    /// Moves that were refused, in input order.
    rejected: Vec<Rejection>,
}

/// Applies `cells` one by one from the initial state.
#[instrument]
pub fn replay(cells: &[usize]) -> ReplayReport {
    let mut game = GameState::new();
    let mut rejected = Vec::new();

    for (index, &cell) in cells.iter().enumerate() {
        match game.apply_index(cell) {
            Ok(next) => game = next,
            Err(reason) => {
                debug!(index, cell, %reason, "Move rejected");
                rejected.push(Rejection { index, cell, reason });
            }
        }
    }

    info!(
        steps = game.latest_step(),
        rejected = rejected.len(),
        "Replay finished"
    );
    ReplayReport { game, rejected }
}

impl ReplayReport {
    /// Views `step` of the replayed history.
    ///
    /// # Errors
    ///
    /// [`HistoryError::StepOutOfRange`] if the replay never reached `step`.
    pub fn jump_to(self, step: usize) -> Result<Self, HistoryError> {
        Ok(Self {
            game: self.game.jump_to(step)?,
            rejected: self.rejected,
        })
    }

    /// Plain-text report: board, status, history with the viewed step
    /// marked, then any rejections.
    pub fn render_text(&self, show_coordinates: bool) -> String {
        let mut out = String::new();
        out.push_str(&self.game.current().board().display());
        out.push('\n');
        out.push_str(&self.game.status_text());
        out.push_str("\n\nHistory:\n");

        for (step, snapshot) in self.game.history().iter().enumerate() {
            let marker = if step == self.game.step() { '>' } else { ' ' };
            out.push_str(&format!(
                "{} {}\n",
                marker,
                snapshot.describe(step, show_coordinates)
            ));
        }

        if !self.rejected.is_empty() {
            out.push_str("\nRejected:\n");
            for r in &self.rejected {
                out.push_str(&format!("  move {} (cell {}): {}\n", r.index + 1, r.cell, r.reason));
            }
        }
        out
    }

    /// JSON form of the report.
    ///
    /// # Errors
    ///
    /// Serialization failure from `serde_json`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position};

    #[test]
    fn test_replay_collects_rejections() {
        let report = replay(&[4, 4, 0, 9]);
        assert_eq!(report.game().step(), 2);
        assert_eq!(
            report.rejected(),
            &vec![
                Rejection {
                    index: 1,
                    cell: 4,
                    reason: MoveError::SquareOccupied(Position::Center),
                },
                Rejection {
                    index: 3,
                    cell: 9,
                    reason: MoveError::OutOfBounds(9),
                },
            ]
        );
    }

    #[test]
    fn test_moves_after_win_rejected() {
        let report = replay(&[0, 4, 1, 8, 2, 5]);
        assert_eq!(report.game().verdict().winner(), Some(Player::X));
        assert_eq!(report.rejected().len(), 1);
        assert_eq!(report.rejected()[0].reason, MoveError::GameOver(Player::X));
    }

    #[test]
    fn test_jump_views_earlier_step() {
        let report = replay(&[0, 4, 1]).jump_to(1).unwrap();
        assert_eq!(report.game().step(), 1);
        assert_eq!(report.game().history().len(), 4);
        assert!(replay(&[0]).jump_to(2).is_err());
    }

    #[test]
    fn test_render_text_marks_viewed_step() {
        let text = replay(&[4, 0]).jump_to(1).unwrap().render_text(true);
        assert!(text.contains("Next player: O"));
        assert!(text.contains("  Go to game start"));
        assert!(text.contains("> Go to move #1 (1, 1)"));
        assert!(text.contains("  Go to move #2 (0, 0)"));
        assert!(!text.contains("Rejected"));
    }

    #[test]
    fn test_render_text_lists_rejections() {
        let text = replay(&[4, 4]).render_text(false);
        assert!(text.contains("Rejected:"));
        assert!(text.contains("move 2 (cell 4)"));
    }

    #[test]
    fn test_json_has_history_and_rejections() {
        let json = replay(&[4, 4]).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["game"]["step"], 1);
        assert_eq!(value["game"]["history"].as_array().unwrap().len(), 2);
        assert_eq!(value["rejected"][0]["cell"], 4);
    }
}
