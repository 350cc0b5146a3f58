//! Render the whole page into a test backend
//!
//! Checks that the newsletter primitives show what the form state says.

use libstorefront::{FormAction, FormState, SubmissionStatus, ValidationError};
use ratatui::{backend::TestBackend, Terminal};
use storefront_tui::app::{AppState, UiConfig};
use storefront_tui::ui::{self, widgets};

fn plain_state() -> AppState {
    AppState::with_config(UiConfig {
        colors_enabled: false,
        tick_rate_ms: 100,
    })
}

/// Draw one frame and return (screen text, scroll limit)
fn draw(state: &AppState, form: &FormState) -> (String, u16) {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let textarea = widgets::email_textarea();
    let mut scroll_max = 0;

    terminal
        .draw(|frame| {
            scroll_max = ui::render(frame, state, &textarea, form);
        })
        .unwrap();

    let buffer = terminal.backend().buffer().clone();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    (text, scroll_max)
}

#[test]
fn test_idle_form_shows_send_and_placeholder() {
    let (screen, _) = draw(&plain_state(), &FormState::new());

    assert!(screen.contains("JOIN SHOPPING COMMUNITY TO GET MONTHLY PROMO"));
    assert!(screen.contains("Add your email here"));
    assert!(screen.contains("SEND"));
    assert!(!screen.contains("SENDING…"));
}

#[test]
fn test_submitting_form_shows_sending_label() {
    let form = FormState {
        status: SubmissionStatus::Submitting,
        generation: 1,
        ..FormState::new()
    };

    let (screen, _) = draw(&plain_state(), &form);

    assert!(screen.contains("SENDING…"));
}

#[test]
fn test_error_and_notice_are_rendered() {
    let form = FormState {
        error: Some(ValidationError::Empty),
        ..FormState::new()
    };
    let (screen, _) = draw(&plain_state(), &form);
    assert!(screen.contains("Please enter your email."));

    let (success, _) = libstorefront::form::reduce(
        FormState {
            status: SubmissionStatus::Submitting,
            generation: 1,
            ..FormState::new()
        },
        FormAction::SubmissionSucceeded { generation: 1 },
    );
    let (screen, _) = draw(&plain_state(), &success);
    assert!(screen.contains("Thanks! You're subscribed."));
}

#[test]
fn test_page_body_reports_scroll_limit() {
    let (screen, scroll_max) = draw(&plain_state(), &FormState::new());

    assert!(screen.contains("FASHION"));
    assert!(scroll_max > 0);
}

#[test]
fn test_help_overlay_lists_bindings() {
    let mut state = plain_state();
    state.help_visible = true;

    let (screen, _) = draw(&state, &FormState::new());

    assert!(screen.contains("Keyboard Shortcuts"));
    assert!(screen.contains("Shift+Tab"));
}

#[test]
fn test_submission_failure_renders_error_overlay() {
    let mut state = plain_state();
    state.error = Some("Submission failed: Timed out after 5s".to_string());

    let (screen, _) = draw(&state, &FormState::new());

    assert!(screen.contains("Timed out after 5s"));
    assert!(screen.contains("Press Esc to dismiss"));
}
