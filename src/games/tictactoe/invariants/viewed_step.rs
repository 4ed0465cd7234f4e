//! Viewed step invariant: the viewed step always names an existing snapshot.

use super::super::GameState;
use super::Invariant;

/// Invariant: viewed step < history length.
pub struct ViewedStepInBoundsInvariant;

impl Invariant<GameState> for ViewedStepInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.step() < game.history().len()
    }

    fn description() -> &'static str {
        "Viewed step is within history"
    }
}
