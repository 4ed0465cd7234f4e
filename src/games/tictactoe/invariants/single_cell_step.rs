//! Single-cell step invariant: each snapshot fills exactly one new square.

use super::super::{GameState, Position, Square};
use super::Invariant;

/// Invariant: history grows one mark at a time.
///
/// Snapshot 0 is the empty board with no coordinate. Every later snapshot
/// differs from its predecessor in exactly one square, that square was
/// empty before, and the snapshot's coordinate names it.
pub struct SingleCellStepInvariant;

impl Invariant<GameState> for SingleCellStepInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return false;
        };
        if first.board().occupied_count() != 0 || first.point().is_some() {
            return false;
        }

        history.windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let changed: Vec<Position> = Position::ALL
                .into_iter()
                .filter(|&pos| before.get(pos) != after.get(pos))
                .collect();

            match changed.as_slice() {
                [pos] => {
                    before.get(*pos) == Square::Empty
                        && pair[1].point() == Some(pos.coordinate())
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one previously empty square"
    }
}
