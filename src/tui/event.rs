//! Terminal event polling
//!
//! A synchronous poll/read loop over crossterm events. The dialog flow is
//! single-threaded and has no timers, so a blocking poll with a tick
//! timeout is all the demo needs.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Terminal events the demo loop reacts to
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Nothing happened within the poll timeout
    Tick,
}

/// Wait up to `timeout` for the next terminal event
pub fn next_event(timeout: Duration) -> io::Result<Event> {
    if !event::poll(timeout)? {
        return Ok(Event::Tick);
    }

    match event::read()? {
        // Windows terminals deliver both press and release events
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Event::Key(key)),
        CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
        _ => Ok(Event::Tick),
    }
}
