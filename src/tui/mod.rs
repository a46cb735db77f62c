//! Terminal UI for the tic-tac-toe session.
//!
//! Synchronous event loop: each key event is handled to completion
//! against the single [`crate::game::GameSession`] before the next event
//! is read.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use tracing::{error, info};

use app::App;

/// Runs the TUI until the user quits.
///
/// Logging goes to a file so tracing output does not interfere with the
/// terminal drawing.
pub fn run_tui(sort_ascending: bool, log_file: &Path) -> Result<()> {
    let log = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log))
        .with_ansi(false)
        .try_init();

    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_event_loop(&mut terminal, App::new(sort_ascending));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}

/// Draw, read one event, apply it, repeat.
fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => app.quit(),
                KeyCode::Char('r') => app.restart(),
                KeyCode::Char('s') => app.toggle_sort_order(),
                KeyCode::Char('[') => app.step_back(),
                KeyCode::Char(']') => app.step_forward(),
                KeyCode::Char('g') => app.jump_to_start(),
                KeyCode::Enter | KeyCode::Char(' ') => app.place_at_cursor(),
                code @ (KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down) => {
                    app.set_cursor(input::move_cursor(app.cursor(), code));
                }
                _ => {}
            }
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
