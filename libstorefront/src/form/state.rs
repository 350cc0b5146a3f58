//! Form state
//!
//! Plain data; all transitions go through [`super::reduce`].

use crate::types::{ButtonView, InputView, SubmissionStatus, ValidationError};

/// State of one signup form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Text currently in the email field
    pub draft: String,

    /// Inline message under the field, if any
    pub error: Option<ValidationError>,

    /// Where the submission lifecycle is
    pub status: SubmissionStatus,

    /// Number of submissions accepted so far
    ///
    /// Scheduled completions carry the generation they belong to and are
    /// ignored once it no longer matches.
    pub generation: u64,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a completion for `generation` still applies in `expected` status
    pub fn is_current(&self, generation: u64, expected: SubmissionStatus) -> bool {
        self.generation == generation && self.status == expected
    }

    pub fn input_view(&self) -> InputView<'_> {
        InputView {
            value: &self.draft,
            error: self.error.as_ref().map(ValidationError::message),
        }
    }

    pub fn button_view(&self) -> ButtonView {
        ButtonView::from(self.status)
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.status.notice()
    }
}
