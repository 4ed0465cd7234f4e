//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player, Position};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The square filled at snapshot `n` holds the mark of the player to move
/// at step `n - 1`: X first, then O, and so on.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let (before, after) = (pair[0].board(), pair[1].board());
                let expected = Player::for_step(step);
                Position::ALL
                    .into_iter()
                    .filter(|&pos| before.get(pos) != after.get(pos))
                    .all(|pos| after.get(pos).player() == Some(expected))
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
