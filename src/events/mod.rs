//! Event handling for the application.
//!
//! This module handles keyboard input and the render tick. All state
//! transitions happen in response to these discrete events; there is no
//! background work.

mod keys;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

pub use keys::KeyBindings;

/// How long `next_event` waits for input before emitting a tick. Toast
/// expiry runs on this cadence, so it must stay well under the shortest
/// toast duration.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// An application event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key press.
    Key(KeyEvent),
    /// The terminal was resized to (width, height).
    Resize(u16, u16),
    /// Periodic tick for time-based updates (toast expiry).
    Tick,
}

/// Block for the next application event, or `Event::Tick` if the poll
/// interval elapses with no input.
pub fn next_event() -> io::Result<Event> {
    if event::poll(POLL_INTERVAL)? {
        Ok(translate(event::read()?))
    } else {
        Ok(Event::Tick)
    }
}

/// Map a terminal event onto the application's event set. Mouse, focus and
/// paste events carry no meaning here and only advance time.
fn translate(raw: CrosstermEvent) -> Event {
    match raw {
        CrosstermEvent::Key(key) => Event::Key(key),
        CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
        CrosstermEvent::Mouse(_)
        | CrosstermEvent::FocusGained
        | CrosstermEvent::FocusLost
        | CrosstermEvent::Paste(_) => Event::Tick,
    }
}
