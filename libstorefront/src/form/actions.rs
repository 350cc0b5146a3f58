//! Actions and effects of the signup form

use crate::error::SubmissionError;

/// Everything that can happen to a form
///
/// The first three come from the user; the rest are delivered by tasks the
/// form scheduled earlier and carry the generation they were scheduled for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// The text in the email field changed
    InputChanged(String),

    /// The email field lost focus
    Blurred,

    /// The user pressed the submit control
    SubmitRequested,

    /// The subscriber accepted the address
    SubmissionSucceeded { generation: u64 },

    /// The subscriber failed
    SubmissionFailed {
        generation: u64,
        error: SubmissionError,
    },

    /// The success notice has been shown long enough
    ResetElapsed { generation: u64 },
}

impl FormAction {
    /// True for actions delivered by a scheduled task
    pub fn is_scheduled(&self) -> bool {
        matches!(
            self,
            FormAction::SubmissionSucceeded { .. }
                | FormAction::SubmissionFailed { .. }
                | FormAction::ResetElapsed { .. }
        )
    }
}

/// Side effect requested by the reducer
///
/// The reducer only describes these; [`super::SubscriptionForm`] runs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand `email` to the subscriber, then report back for `generation`
    StartSubmission { email: String, generation: u64 },

    /// Wait out the success window, then report back for `generation`
    ScheduleReset { generation: u64 },
}
