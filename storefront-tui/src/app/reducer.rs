//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State`
//!
//! No I/O happens here. Calls the signup form is owed are recorded in
//! `AppState::intent` and forwarded by the event loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libstorefront::service::events::FormEvent;
use libstorefront::SubmissionStatus;

use super::actions::{Action, Focus, FormIntent};
use super::state::{AppState, StatusBarState};

/// Lines moved by PageUp / PageDown
pub const PAGE_STEP: u16 = 10;

/// Pure reducer function
///
/// Deterministic: same inputs give the same output.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Paste(_) => state, // Only the email field accepts text
        Action::Tick => state,
        Action::Resize(_, _) => state, // ScrollBounds follows on the next frame

        // === Navigation ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        Action::FocusNext => {
            let focus = state.focus.next();
            move_focus(state, focus)
        }

        Action::FocusPrev => {
            let focus = state.focus.prev();
            move_focus(state, focus)
        }

        Action::ScrollUp(n) => AppState {
            scroll: state.scroll.saturating_sub(n),
            ..state
        },

        Action::ScrollDown(n) => AppState {
            scroll: state.scroll.saturating_add(n).min(state.scroll_max),
            ..state
        },

        Action::ScrollBounds(max) => AppState {
            scroll_max: max,
            scroll: state.scroll.min(max),
            ..state
        },

        // === Signup form ===
        Action::EmailChanged(value) => AppState {
            intent: Some(FormIntent::Input(value)),
            ..state
        },

        Action::SubmitRequested => AppState {
            intent: Some(FormIntent::Submit),
            ..state
        },

        Action::Form(event) => handle_form_event(state, event),

        // === Error Handling ===
        Action::ShowError(error) => AppState {
            error: Some(error),
            ..state
        },

        Action::DismissError => AppState {
            error: None,
            ..state
        },

        // === Status Bar ===
        Action::SetStatus(message) => AppState {
            status: StatusBarState {
                message: Some(message),
            },
            ..state
        },

        Action::ClearStatus => AppState {
            status: StatusBarState { message: None },
            ..state
        },
    }
}

/// Whether `key` is a shell binding while the email field has focus
///
/// Everything else is typed into the field.
pub fn is_app_key(key: &KeyEvent) -> bool {
    matches!(
        (key.code, key.modifiers),
        (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::F(_), _)
            | (KeyCode::Esc, _)
            | (KeyCode::Tab, _)
            | (KeyCode::BackTab, _)
            | (KeyCode::Enter, _)
            | (KeyCode::Up, _)
            | (KeyCode::Down, _)
            | (KeyCode::PageUp, _)
            | (KeyCode::PageDown, _)
    )
}

fn move_focus(state: AppState, focus: Focus) -> AppState {
    // Leaving the field is its blur
    let intent = if state.focus == Focus::Email && focus != Focus::Email {
        Some(FormIntent::Blur)
    } else {
        state.intent
    };

    AppState {
        focus,
        intent,
        ..state
    }
}

fn handle_form_event(state: AppState, event: FormEvent) -> AppState {
    match event {
        FormEvent::StatusChanged { to, .. } => {
            let state = AppState {
                form_status: to,
                ..state
            };
            match to {
                SubmissionStatus::Submitting => {
                    reduce(state, Action::SetStatus("Sending…".to_string()))
                }
                SubmissionStatus::Idle | SubmissionStatus::Success => state,
            }
        }
        FormEvent::Subscribed { email, .. } => {
            reduce(state, Action::SetStatus(format!("Subscribed {}", email)))
        }
        FormEvent::SubmissionFailed { error, .. } => {
            let message = format!("Submission failed: {}", error);
            let state = reduce(state, Action::SetStatus(message.clone()));
            reduce(state, Action::ShowError(message))
        }
        // Rendered inline under the field
        FormEvent::ValidationFailed { .. } => reduce(state, Action::ClearStatus),
    }
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            return reduce(state, Action::Quit);
        }

        (KeyCode::F(1), _) => {
            let action = if state.help_visible { Action::HideHelp } else { Action::ShowHelp };
            return reduce(state, action);
        }

        (KeyCode::Esc, _) if state.error.is_some() => {
            return reduce(state, Action::DismissError);
        }

        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, Action::HideHelp);
        }

        _ => {}
    }

    // Overlays swallow everything else
    if state.overlay_open() {
        return state;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Tab, _) => reduce(state, Action::FocusNext),
        (KeyCode::BackTab, _) => reduce(state, Action::FocusPrev),

        (KeyCode::Esc, _) if state.focus != Focus::Page => move_focus(state, Focus::Page),

        (KeyCode::Enter, _) if matches!(state.focus, Focus::Email | Focus::Send) => {
            reduce(state, Action::SubmitRequested)
        }

        (KeyCode::Up, _) => reduce(state, Action::ScrollUp(1)),
        (KeyCode::Down, _) => reduce(state, Action::ScrollDown(1)),
        (KeyCode::PageUp, _) => reduce(state, Action::ScrollUp(PAGE_STEP)),
        (KeyCode::PageDown, _) => reduce(state, Action::ScrollDown(PAGE_STEP)),

        // Not while a submission is in flight
        (KeyCode::Char('q'), KeyModifiers::NONE)
            if state.focus != Focus::Email && state.form_status != SubmissionStatus::Submitting =>
        {
            reduce(state, Action::Quit)
        }

        _ => state,
    }
}
