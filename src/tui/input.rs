//! Keyboard and mouse input mapping.

use super::app::{Action, App, Focus};
use super::ui;
use crate::games::tictactoe::Position;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Position as ScreenPosition, Rect};
use tracing::{instrument, trace};

/// Direction for board cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// Moves the board cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let point = cursor.coordinate();
    let (col, row) = (*point.col(), *point.row());
    let (col, row) = match direction {
        Direction::Up => (col, row.saturating_sub(1)),
        Direction::Down => (col, (row + 1).min(2)),
        Direction::Left => (col.saturating_sub(1), row),
        Direction::Right => ((col + 1).min(2), row),
    };
    Position::from_coordinate(col, row).unwrap_or(cursor)
}

/// Maps a key press to an action, given which pane has focus.
#[instrument]
pub fn action_for_key(key: KeyEvent, focus: Focus) -> Option<Action> {
    let action = match (key.code, focus) {
        (KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('r') | KeyCode::Char('R'), _) => Action::Restart,
        (KeyCode::Tab | KeyCode::BackTab, _) => Action::ToggleFocus,
        (KeyCode::Char('[') | KeyCode::Char('<'), _) => Action::StepBack,
        (KeyCode::Char(']') | KeyCode::Char('>'), _) => Action::StepForward,
        (KeyCode::Home, _) => Action::JumpToStart,
        (KeyCode::End, _) => Action::JumpToLatest,
        (KeyCode::Char(c @ '1'..='9'), _) => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            Action::Place(Position::from_index(index)?)
        }

        (KeyCode::Up, Focus::Board) => Action::MoveCursor(Direction::Up),
        (KeyCode::Down, Focus::Board) => Action::MoveCursor(Direction::Down),
        (KeyCode::Left, Focus::Board) => Action::MoveCursor(Direction::Left),
        (KeyCode::Right, Focus::Board) => Action::MoveCursor(Direction::Right),
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => Action::PlaceAtCursor,

        (KeyCode::Up, Focus::History) => Action::SelectPrevious,
        (KeyCode::Down, Focus::History) => Action::SelectNext,
        (KeyCode::Enter | KeyCode::Char(' '), Focus::History) => Action::JumpToSelected,

        _ => return None,
    };
    trace!(?action, "Key mapped");
    Some(action)
}

/// Maps a left click at terminal cell (`column`, `row`) to an action.
///
/// `area` is the full frame area of the last draw; hit-testing uses the
/// same layout the renderer used.
#[instrument(skip(app))]
pub fn action_for_click(app: &App, area: Rect, column: u16, row: u16) -> Option<Action> {
    let layout = ui::screen_layout(area);
    let point = ScreenPosition::new(column, row);

    let cells = ui::board_cells(ui::board_inner(layout.board));
    if let Some(index) = cells.iter().position(|cell| cell.contains(point)) {
        return Position::from_index(index).map(Action::Place);
    }

    let list = ui::history_inner(layout.history);
    if list.contains(point) {
        let window =
            ui::history_window(app.game().history().len(), app.history_anchor(), list.height);
        let step = window.start + usize::from(row - list.y);
        if window.contains(&step) {
            return Some(Action::JumpTo(step));
        }
    }

    None
}
