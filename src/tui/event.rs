//! Event handling for the TUI
//!
//! The dashboard is single-threaded: there is no background tick, so the
//! loop just blocks on the next terminal event. Nothing on screen changes
//! between inputs, which makes redraw-per-event sufficient.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

use crate::error::{DeckError, DeckResult};

/// Terminal events the dashboard reacts to
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
}

/// Block until the next relevant terminal event
///
/// Key release and repeat-release events are skipped so terminals that
/// report them do not double-fire every binding.
pub fn next() -> DeckResult<Event> {
    loop {
        let event = event::read()
            .map_err(|e| DeckError::Terminal(format!("Failed to read terminal event: {}", e)))?;
        match event {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                return Ok(Event::Key(key));
            }
            CrosstermEvent::Resize(width, height) => {
                return Ok(Event::Resize(width, height));
            }
            _ => {}
        }
    }
}
