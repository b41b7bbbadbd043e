//! Terminal setup and teardown
//!
//! Handles raw mode and the alternate screen, installs a panic hook that
//! restores the terminal, and drives the draw/handle loop. Draw and update
//! passes run under the crash guard; a caught panic switches the session to
//! the recovery screen instead of tearing the terminal down.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::error;

use crate::config::Settings;

use super::app::App;
use super::event;
use super::fallback;
use super::handler::handle_event;
use super::views;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Restore the terminal before printing panic info
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the dashboard session
pub fn run_tui(settings: Settings) -> Result<()> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(settings);

    let result = run_loop(&mut terminal, &mut app);

    restore_terminal()?;
    result
}

/// Main event loop: draw, block on the next event, apply it
fn run_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    loop {
        if app.crashed() {
            // The recovery screen renders unguarded; it depends on nothing
            // but the crash text, so it cannot hit the failure again.
            terminal.draw(|frame| views::render(frame, app))?;
        } else {
            let drawn = fallback::guard(|| {
                terminal
                    .draw(|frame| views::render(frame, app))
                    .map(|_| ())
            });
            match drawn {
                Ok(drawn) => drawn?,
                Err(crash) => {
                    error!(message = %crash.message, "draw pass panicked");
                    app.crash = Some(crash);
                    continue;
                }
            }
        }

        let event = event::next()?;
        if app.crashed() {
            handle_event(app, event)?;
        } else {
            match fallback::guard(|| handle_event(app, event)) {
                Ok(handled) => handled?,
                Err(crash) => {
                    error!(message = %crash.message, "event handler panicked");
                    app.crash = Some(crash);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
