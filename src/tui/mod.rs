//! Terminal UI for rewind tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::{Action, App, Focus};
pub use input::{Direction, action_for_click, action_for_key, move_cursor};
pub use ui::{
    ScreenLayout, board_cells, board_inner, draw, history_inner, history_window, screen_layout,
};

use crate::config::Config;
use crate::games::tictactoe::HistoryError;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::Rect,
};
use std::io;
use tracing::{error, info, instrument};

/// Runs the interactive game on the real terminal until the user quits.
///
/// The terminal is restored even when the loop fails.
#[instrument(skip(config))]
pub fn run_tui(config: Config) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut terminal = match enter_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            // Leave raw mode so the shell is usable after a failed start
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            error!(error = ?e, "Terminal setup failed");
            return Err(e.into());
        }
    };

    let mut app = App::new(config);
    let res = run_loop(&mut terminal, &mut app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(steps = app.game().latest_step(), "Terminal UI closed");
    res
}

fn enter_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Draws, waits for one event, applies it; repeats until the app quits.
///
/// `next_event` is the blocking event source, `crossterm::event::read` on a
/// real terminal.
///
/// # Errors
///
/// Terminal I/O failures, and history jumps to steps that do not exist.
#[instrument(skip_all)]
pub fn run_loop<B, F>(terminal: &mut Terminal<B>, app: &mut App, mut next_event: F) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
    F: FnMut() -> std::io::Result<Event>,
{
    while !*app.should_quit() {
        let area = terminal.draw(|f| ui::draw(f, app))?.area;
        handle_event(app, next_event()?, area)?;
    }
    Ok(())
}

/// Applies one terminal event. `area` is the frame area of the last draw.
///
/// # Errors
///
/// [`HistoryError`] if the event resolves to a jump outside history.
pub fn handle_event(app: &mut App, event: Event, area: Rect) -> Result<(), HistoryError> {
    let action = match event {
        // crossterm reports both press and release on some platforms
        Event::Key(key) if key.kind == KeyEventKind::Release => None,
        Event::Key(key) => input::action_for_key(key, *app.focus()),
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            input::action_for_click(app, area, mouse.column, mouse.row)
        }
        _ => None,
    };

    match action {
        Some(action) => app.handle(action),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position, Verdict};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn scripted(events: Vec<Event>) -> impl FnMut() -> std::io::Result<Event> {
        let mut queue: VecDeque<Event> = events.into();
        move || {
            queue
                .pop_front()
                .ok_or_else(|| std::io::Error::other("script exhausted"))
        }
    }

    #[test]
    fn test_loop_plays_until_quit() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut app = App::new(Config::default());
        let events = "14253q".chars().map(key).collect();

        run_loop(&mut terminal, &mut app, scripted(events)).unwrap();

        assert!(*app.should_quit());
        assert_eq!(app.game().verdict().winner(), Some(Player::X));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = App::new(Config::default());
        let mut release = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;

        handle_event(&mut app, Event::Key(release), Rect::new(0, 0, 100, 30)).unwrap();
        assert_eq!(app.game().step(), 0);
    }

    #[test]
    fn test_mouse_click_places_mark() {
        let area = Rect::new(0, 0, 100, 30);
        let cells = board_cells(board_inner(screen_layout(area).board));
        let mut app = App::new(Config::default());

        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: cells[8].x + 2,
            row: cells[8].y + 1,
            modifiers: KeyModifiers::NONE,
        });
        handle_event(&mut app, click, area).unwrap();

        assert_eq!(
            app.game().current().board().get(Position::BottomRight).player(),
            Some(Player::X)
        );
    }

    #[test]
    fn test_draw_game_via_keys() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut app = App::new(Config::default());
        let events = "123546879q".chars().map(key).collect();

        run_loop(&mut terminal, &mut app, scripted(events)).unwrap();
        assert_eq!(app.game().verdict(), Verdict::Draw);
    }

    #[test]
    fn test_event_source_error_ends_loop() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut app = App::new(Config::default());

        let err = run_loop(&mut terminal, &mut app, scripted(vec![key('5')])).unwrap_err();
        assert!(err.to_string().contains("script exhausted"));
        assert_eq!(app.game().step(), 1);
    }
}
