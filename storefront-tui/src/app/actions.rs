//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. The reducer
//! (see `reducer.rs`) is responsible for applying them to state.

use crossterm::event::KeyEvent;
use libstorefront::service::events::FormEvent;

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input the text field did not consume
    Key(KeyEvent),

    /// Bracketed paste outside the email field
    Paste(String),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    /// Move focus forward (page -> email -> send)
    FocusNext,

    /// Move focus backward
    FocusPrev,

    /// Scroll the page body up by n lines
    ScrollUp(u16),

    /// Scroll the page body down by n lines
    ScrollDown(u16),

    /// Largest scroll offset the last frame allowed
    ScrollBounds(u16),

    // === Signup form ===
    /// Text in the email field changed
    EmailChanged(String),

    /// User asked to submit the form
    SubmitRequested,

    /// Event published by the mounted form
    Form(FormEvent),

    // === Error Handling ===
    /// Show error overlay
    ShowError(String),

    /// Dismiss error overlay
    DismissError,

    // === Status Bar ===
    /// Update status message
    SetStatus(String),

    /// Clear status message
    ClearStatus,
}

/// Which part of the page receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Scrollable page body
    #[default]
    Page,

    /// Newsletter email field
    Email,

    /// Newsletter submit button
    Send,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Page => Focus::Email,
            Focus::Email => Focus::Send,
            Focus::Send => Focus::Page,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Page => Focus::Send,
            Focus::Email => Focus::Page,
            Focus::Send => Focus::Email,
        }
    }
}

/// Handler call the event loop owes the mounted form
///
/// The reducer stays pure: it records what the form should be told and the
/// loop forwards it to `SubscriptionForm` after the state update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    /// Change handler with the field's new value
    Input(String),

    /// Blur handler (focus left the email field)
    Blur,

    /// Submit handler
    Submit,
}
