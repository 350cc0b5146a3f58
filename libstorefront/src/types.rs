//! Core types for the newsletter signup form

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Label shown on the submit control while it can be pressed
pub const SEND_LABEL: &str = "SEND";

/// Label shown on the submit control while a submission is in flight
pub const SENDING_LABEL: &str = "SENDING…";

/// Notice rendered beneath the form while the status is `success`
pub const SUCCESS_NOTICE: &str = "Thanks! You're subscribed.";

/// Identifier of one mounted form instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(Uuid);

impl FormId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FormId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Submission lifecycle of the form
///
/// Exactly one value holds at a time. Everything the submit control shows is
/// derived from it, see [`ButtonView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Submitting => "submitting",
            SubmissionStatus::Success => "success",
        }
    }

    /// Confirmation text to show for this status, if any
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Success => Some(SUCCESS_NOTICE),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inline message rendered under the email field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum ValidationError {
    /// Submit attempted with nothing but whitespace in the field
    Empty,
    /// The draft does not look like `local@domain.tld`
    Malformed,
    /// The subscriber rejected or never answered the request
    SubmissionFailed(String),
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::Empty => "Please enter your email.",
            ValidationError::Malformed => "Please enter a valid email address.",
            ValidationError::SubmissionFailed(_) => "Something went wrong. Please try again.",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// What the submit control renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub disabled: bool,
}

impl From<SubmissionStatus> for ButtonView {
    fn from(status: SubmissionStatus) -> Self {
        match status {
            SubmissionStatus::Submitting => ButtonView {
                label: SENDING_LABEL,
                disabled: true,
            },
            SubmissionStatus::Idle | SubmissionStatus::Success => ButtonView {
                label: SEND_LABEL,
                disabled: false,
            },
        }
    }
}

/// What the text input renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputView<'a> {
    pub value: &'a str,
    pub error: Option<&'static str>,
}

impl InputView<'_> {
    /// Mirrors `aria-invalid`: set whenever an error is shown
    pub fn invalid(&self) -> bool {
        self.error.is_some()
    }
}
