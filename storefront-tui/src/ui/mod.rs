//! UI rendering
//!
//! Render functions draw state into a frame and never change it. The page is
//! a header, a scrollable body, the newsletter panel docked beneath it and a
//! one-line status bar.

pub mod content;
pub mod widgets;

use libstorefront::FormState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use crate::app::{AppState, Focus};
use self::widgets::{Button, TextInput, TEXT_INPUT_HEIGHT};

/// Height of the docked newsletter panel, borders included
const NEWSLETTER_HEIGHT: u16 = 2 + 1 + TEXT_INPUT_HEIGHT + 1;

const BUTTON_WIDTH: u16 = 14;

/// Render the application UI
///
/// Returns the largest scroll offset that still shows page content, which
/// the loop feeds back as `Action::ScrollBounds`.
pub fn render(frame: &mut Frame, state: &AppState, textarea: &TextArea, form: &FormState) -> u16 {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                 // Header
            Constraint::Min(3),                    // Page body
            Constraint::Length(NEWSLETTER_HEIGHT), // Newsletter
            Constraint::Length(1),                 // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], state);
    let scroll_max = render_body(frame, chunks[1], state);
    render_newsletter(frame, chunks[2], state, textarea, form);
    render_status_bar(frame, chunks[3], state);

    if state.help_visible {
        render_help_overlay(frame, area);
    }

    if let Some(ref error) = state.error {
        render_error_overlay(frame, area, error);
    }

    scroll_max
}

fn accent(state: &AppState) -> Style {
    if state.config.colors_enabled {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled(content::BRAND, accent(state)), Span::raw("    ")];
    for item in content::NAV_ITEMS {
        spans.push(Span::raw(item));
        spans.push(Span::raw("   "));
    }
    spans.push(Span::styled(format!("[ {} ]", content::SIGN_UP), accent(state)));

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

/// Render the scrollable page body and return its scroll limit
fn render_body(frame: &mut Frame, area: Rect, state: &AppState) -> u16 {
    let lines = content::page_lines(state.config.colors_enabled);
    let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let scroll_max = total.saturating_sub(area.height);

    let border = if state.focus == Focus::Page && state.config.colors_enabled {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let body = Paragraph::new(lines)
        .block(Block::default().borders(Borders::LEFT).border_style(border))
        .scroll((state.scroll.min(scroll_max), 0));
    frame.render_widget(body, area);

    scroll_max
}

fn render_newsletter(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    textarea: &TextArea,
    form: &FormState,
) {
    let colors = state.config.colors_enabled;

    let block = Block::default()
        .title(format!(" {} ", content::NEWSLETTER_TITLE))
        .title_style(accent(state))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(TEXT_INPUT_HEIGHT),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(content::NEWSLETTER_COPY), rows[0]);

    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(1), Constraint::Length(BUTTON_WIDTH)])
        .split(rows[1]);

    let view = form.input_view();
    frame.render_widget(TextInput::new(textarea, view.error).colors(colors), controls[0]);

    // The button is as tall as the field, not the error line below it
    let button_area = Rect { height: 3, ..controls[2] };
    let button = Button::from(form.button_view())
        .focused(state.focus == Focus::Send)
        .colors(colors);
    frame.render_widget(button, button_area);

    if let Some(notice) = form.notice() {
        let style = if colors {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        frame.render_widget(Paragraph::new(Span::styled(notice, style)), rows[2]);
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = match state.focus {
        Focus::Page => "Tab: Form | ↑↓ PgUp PgDn: Scroll | F1: Help | q: Quit",
        Focus::Email => "Enter: Send | Tab: Next | Esc: Leave field | Ctrl+C: Quit",
        Focus::Send => "Enter: Send | Tab: Next | F1: Help | q: Quit",
    };

    let mut spans = Vec::new();
    if let Some(ref message) = state.status.message {
        spans.push(Span::styled(message.clone(), accent(state)));
        spans.push(Span::raw(" | "));
    }
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Page:"),
        Line::from("  ↑ / ↓       - Scroll one line"),
        Line::from("  PgUp / PgDn - Scroll one page"),
        Line::from("  q           - Quit"),
        Line::from(""),
        Line::from("Newsletter:"),
        Line::from("  Tab         - Page -> Email -> Send"),
        Line::from("  Shift+Tab   - Back"),
        Line::from("  Enter       - Send (in the field or on the button)"),
        Line::from("  Esc         - Leave the field"),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  F1          - Toggle help"),
        Line::from("  Ctrl+C      - Quit"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str) {
    let popup_area = centered_rect(70, 30, area);

    let error_text = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(error),
        Line::from(""),
        Line::from("Press Esc to dismiss"),
    ];

    let error_widget = Paragraph::new(error_text)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(error_widget, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
