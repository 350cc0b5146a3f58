//! Event handling infrastructure
//!
//! Polls crossterm for keyboard, paste and resize events and turns silence
//! into ticks, so the loop wakes up to apply scheduled form completions.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

use crate::app::Action;

/// TUI events that can be dispatched
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// Keyboard input (presses and repeats only)
    Key(KeyEvent),

    /// Bracketed paste
    Paste(String),

    /// Terminal resize
    Resize(u16, u16),

    /// Periodic tick
    Tick,
}

impl From<TuiEvent> for Action {
    fn from(event: TuiEvent) -> Self {
        match event {
            TuiEvent::Key(key) => Action::Key(key),
            TuiEvent::Paste(text) => Action::Paste(text),
            TuiEvent::Resize(w, h) => Action::Resize(w, h),
            TuiEvent::Tick => Action::Tick,
        }
    }
}

/// Event handler that polls for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Poll for the next event, blocking up to the tick rate
    ///
    /// Returns `Tick` if nothing arrived in time.
    pub fn next(&self) -> std::io::Result<TuiEvent> {
        if !event::poll(self.tick_rate)? {
            return Ok(TuiEvent::Tick);
        }

        let event = match event::read()? {
            // Windows reports releases too
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => TuiEvent::Key(key),
            CrosstermEvent::Paste(text) => TuiEvent::Paste(text),
            CrosstermEvent::Resize(w, h) => TuiEvent::Resize(w, h),
            _ => TuiEvent::Tick,
        };
        Ok(event)
    }
}
