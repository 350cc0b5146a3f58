//! Form primitives: the text input and the button
//!
//! `TextInput` wraps a `tui_textarea::TextArea` and draws the inline error
//! beneath it. The textarea is stateful, so its border and cursor are set
//! through [`style_text_input`] before each draw.

use libstorefront::{ButtonView, InputView};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
};
use tui_textarea::TextArea;

use super::content::EMAIL_PLACEHOLDER;

/// Rows a `TextInput` needs: bordered field plus the error line
pub const TEXT_INPUT_HEIGHT: u16 = 4;

/// Fresh single-line email field
pub fn email_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text(EMAIL_PLACEHOLDER);
    textarea
}

/// Apply focus and error styling ahead of a draw
///
/// The border turns red while the view carries an error; the cursor is only
/// shown while the field has focus.
pub fn style_text_input(
    textarea: &mut TextArea<'_>,
    view: &InputView<'_>,
    focused: bool,
    colors: bool,
) {
    let border = match (colors, view.invalid(), focused) {
        (true, true, _) => Style::default().fg(Color::Red),
        (true, false, true) => Style::default().fg(Color::Yellow),
        (true, false, false) => Style::default().fg(Color::Gray),
        (false, _, true) => Style::default().add_modifier(Modifier::BOLD),
        (false, _, false) => Style::default(),
    };

    textarea.set_block(
        Block::default()
            .title(" Email address ")
            .borders(Borders::ALL)
            .border_style(border),
    );
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    });
}

/// Text input primitive: the field and an optional error beneath it
pub struct TextInput<'t, 'a> {
    textarea: &'t TextArea<'a>,
    error: Option<&'t str>,
    colors: bool,
}

impl<'t, 'a> TextInput<'t, 'a> {
    pub fn new(textarea: &'t TextArea<'a>, error: Option<&'t str>) -> Self {
        Self {
            textarea,
            error,
            colors: true,
        }
    }

    pub fn colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }
}

impl Widget for TextInput<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [field, message] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

        self.textarea.render(field, buf);

        if let Some(error) = self.error {
            let style = if self.colors {
                Style::default().fg(Color::Red)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            Paragraph::new(Span::styled(error, style)).render(message, buf);
        }
    }
}

/// Button primitive: a label and a disabled flag
pub struct Button<'a> {
    label: &'a str,
    disabled: bool,
    focused: bool,
    colors: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            disabled: false,
            focused: false,
            colors: true,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    fn style(&self) -> Style {
        let base = if self.disabled {
            Style::default().add_modifier(Modifier::DIM)
        } else if self.colors {
            Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        if self.focused && !self.disabled {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    }
}

impl From<ButtonView> for Button<'static> {
    fn from(view: ButtonView) -> Self {
        Button::new(view.label).disabled(view.disabled)
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.style();
        Paragraph::new(self.label)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(style)
            .render(area, buf);
    }
}
