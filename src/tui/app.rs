//! Application state and logic.

use super::input::{Direction, move_cursor};
use crate::config::Config;
use crate::games::tictactoe::{GameState, HistoryError, Position};
use derive_getters::Getters;
use tracing::{debug, info, instrument};

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The board: arrows move the cursor, Enter plays.
    #[default]
    Board,
    /// The history list: arrows select a step, Enter jumps to it.
    History,
}

/// One user interaction, applied atomically by [`App::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor.
    MoveCursor(Direction),
    /// Play at the board cursor.
    PlaceAtCursor,
    /// Play at a specific position.
    Place(Position),
    /// Move the history selection up.
    SelectPrevious,
    /// Move the history selection down.
    SelectNext,
    /// View the selected history step.
    JumpToSelected,
    /// View a specific history step.
    JumpTo(usize),
    /// View the previous step.
    StepBack,
    /// View the next step.
    StepForward,
    /// View the initial empty board.
    JumpToStart,
    /// View the most recent snapshot.
    JumpToLatest,
    /// Switch focus between board and history.
    ToggleFocus,
    /// Discard all history and start over.
    Restart,
    /// Leave the application.
    Quit,
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    /// Game being displayed.
    game: GameState,
    /// Board cursor.
    cursor: Position,
    /// Focused pane.
    focus: Focus,
    /// Highlighted row in the history list.
    selected: usize,
    /// View options.
    config: Config,
    /// Set once the user quits.
    should_quit: bool,
}

impl App {
    /// Creates a new application with an empty board.
    #[instrument(skip(config))]
    pub fn new(config: Config) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            config,
            should_quit: false,
        }
    }

    /// History row the list should keep visible: the selection while the
    /// history pane has focus, the viewed step otherwise.
    pub fn history_anchor(&self) -> usize {
        match self.focus {
            Focus::History => self.selected,
            Focus::Board => self.game.step(),
        }
    }

    /// Applies one action.
    ///
    /// Rejected moves leave the game unchanged and are only logged.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if a jump names a step that does not exist.
    /// The view only produces valid steps, so this is a bug, not user error.
    #[instrument(skip(self), fields(step = self.game.step()))]
    pub fn handle(&mut self, action: Action) -> Result<(), HistoryError> {
        match action {
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::Place(position) => {
                self.cursor = position;
                self.place(position);
            }
            Action::SelectPrevious => {
                self.selected = self.selected.saturating_sub(1);
            }
            Action::SelectNext => {
                self.selected = (self.selected + 1).min(self.game.latest_step());
            }
            Action::JumpToSelected => self.jump(self.selected)?,
            Action::JumpTo(step) => self.jump(step)?,
            Action::StepBack => {
                if let Some(step) = self.game.step().checked_sub(1) {
                    self.jump(step)?;
                }
            }
            Action::StepForward => {
                if !self.game.is_at_latest() {
                    self.jump(self.game.step() + 1)?;
                }
            }
            Action::JumpToStart => self.jump(0)?,
            Action::JumpToLatest => self.jump(self.game.latest_step())?,
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.selected = self.game.step();
            }
            Action::Restart => {
                info!("Restarting game");
                self.game = GameState::new();
                self.cursor = Position::Center;
                self.selected = 0;
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
        Ok(())
    }

    fn place(&mut self, position: Position) {
        match self.game.apply_move(position) {
            Ok(next) => {
                debug!(%position, new_step = next.step(), "Move accepted");
                self.game = next;
                self.selected = self.game.step();
            }
            Err(e) => debug!(%position, error = %e, "Move rejected"),
        }
    }

    fn jump(&mut self, step: usize) -> Result<(), HistoryError> {
        self.game = self.game.jump_to(step)?;
        self.selected = step;
        Ok(())
    }
}
