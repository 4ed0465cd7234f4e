//! Frozen-after-win invariant: nothing is played after a completed line.

use super::super::rules::check_winner;
use super::super::GameState;
use super::Invariant;

/// Invariant: a won board is the last snapshot of its branch.
pub struct FrozenAfterWinInvariant;

impl Invariant<GameState> for FrozenAfterWinInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        history
            .iter()
            .take(history.len().saturating_sub(1))
            .all(|snapshot| check_winner(snapshot.board()).is_none())
    }

    fn description() -> &'static str {
        "No snapshot follows a won board"
    }
}
