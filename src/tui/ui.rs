//! Stateless UI rendering for tic-tac-toe.
//!
//! Layout is a pure function of the frame area so input handling can
//! hit-test mouse clicks against exactly what was drawn.

use std::ops::Range;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app::{App, Focus};
use crate::games::tictactoe::{Player, Position, Square, Verdict, WinningLine};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Areas of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Bordered board pane.
    pub board: Rect,
    /// Status line under the board.
    pub status: Rect,
    /// Bordered history list.
    pub history: Rect,
    /// Key help.
    pub help: Rect,
}

/// Splits the frame area into panes.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(14),
            Constraint::Length(3),
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(25), Constraint::Length(34)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(11), Constraint::Length(3)])
        .split(body[0]);

    ScreenLayout {
        title: rows[0],
        board: left[0],
        status: left[1],
        history: body[1],
        help: rows[2],
    }
}

fn pane(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

/// Area inside the board pane's border.
pub fn board_inner(board: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(board)
}

/// Area inside the history pane's border.
pub fn history_inner(history: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(history)
}

/// The nine cell rectangles, row-major, centered in `area`.
pub fn board_cells(area: Rect) -> [Rect; 9] {
    let grid = center_rect(area, CELL_WIDTH * 3, CELL_HEIGHT * 3);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(grid);

    let mut cells = [Rect::default(); 9];
    for (r, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row);
        for (c, cell) in cols.iter().enumerate() {
            cells[r * 3 + c] = *cell;
        }
    }
    cells
}

/// Range of history steps shown in a list `visible` rows tall, scrolled
/// so that `anchor` is on screen. A list with no rows shows nothing.
pub fn history_window(len: usize, anchor: usize, visible: u16) -> Range<usize> {
    if visible == 0 {
        return 0..0;
    }
    let visible = usize::from(visible);
    let start = (anchor + 1).saturating_sub(visible);
    start..(start + visible).min(len)
}

/// Draws the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = screen_layout(frame.area());

    let title = Paragraph::new("Rewind Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    draw_board(frame, layout.board, app);
    draw_status(frame, layout.status, app);
    draw_history(frame, layout.history, app);

    let help = match app.focus() {
        Focus::Board => {
            "Arrows: Move | Enter/1-9: Play | Tab: History | [ ]: Step | R: Restart | Q: Quit"
        }
        Focus::History => {
            "Up/Down: Select | Enter: Jump | Home/End: Start/Latest | Tab: Board | Q: Quit"
        }
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout.help);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let block = pane("Board", *app.focus() == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let highlight = if *app.config().highlight_winning_line() {
        app.game().verdict().winning_line()
    } else {
        None
    };

    for (pos, cell) in Position::ALL.into_iter().zip(board_cells(inner)) {
        draw_cell(frame, cell, app, pos, highlight);
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    pos: Position,
    highlight: Option<WinningLine>,
) {
    let square = app.game().current().board().get(pos);

    let (symbol, mut style) = match square {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    let mut border = Style::default().fg(Color::DarkGray);

    if highlight.is_some_and(|line| line.contains(pos)) {
        style = style.bg(Color::Green);
        border = Style::default().fg(Color::Green);
    }
    if *app.focus() == Focus::Board && *app.cursor() == pos {
        border = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let style = match app.game().verdict() {
        Verdict::Winner { .. } => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Verdict::Draw => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::SLOW_BLINK),
        Verdict::InProgress => Style::default().fg(Color::Yellow),
    };

    let status = Paragraph::new(app.game().status_text())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let focused = *app.focus() == Focus::History;
    let title = format!("History ({}/{})", game.step(), game.latest_step());
    let block = pane(&title, focused);

    let visible = block.inner(area).height;
    let window = history_window(game.history().len(), app.history_anchor(), visible);
    let show_coordinates = *app.config().show_coordinates();

    let items: Vec<ListItem> = window
        .map(|step| {
            let label = game.history()[step].describe(step, show_coordinates);
            let viewed = step == game.step();
            let marker = if viewed { "> " } else { "  " };

            let mut style = Style::default();
            if viewed {
                style = style.add_modifier(Modifier::BOLD);
            }
            if focused && step == *app.selected() {
                style = style.fg(Color::Black).bg(Color::Yellow);
            }
            ListItem::new(format!("{}{}", marker, label)).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
