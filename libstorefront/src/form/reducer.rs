//! Pure reducer for the signup form
//!
//! `(FormState, FormAction) -> (FormState, Option<Effect>)`
//!
//! No timers, no I/O, no logging. Scheduling the returned effect is the
//! caller's job (see `controller.rs`).

use super::actions::{Effect, FormAction};
use super::state::FormState;
use crate::service::validation::{trim_address, ValidationService};
use crate::types::{SubmissionStatus, ValidationError};

/// Apply `action` to `state`
///
/// Deterministic: the same inputs always give the same output.
pub fn reduce(state: FormState, action: FormAction) -> (FormState, Option<Effect>) {
    let validator = ValidationService::new();

    match action {
        FormAction::InputChanged(draft) => (FormState { draft, ..state }, None),

        FormAction::Blurred => match validator.check_blur(&state.draft) {
            Some(error) => (
                FormState {
                    error: Some(error),
                    ..state
                },
                None,
            ),
            None => (state, None),
        },

        FormAction::SubmitRequested => submit(state, &validator),

        FormAction::SubmissionSucceeded { generation }
            if state.is_current(generation, SubmissionStatus::Submitting) =>
        {
            (
                FormState {
                    status: SubmissionStatus::Success,
                    draft: String::new(),
                    ..state
                },
                Some(Effect::ScheduleReset { generation }),
            )
        }

        FormAction::SubmissionFailed { generation, error }
            if state.is_current(generation, SubmissionStatus::Submitting) =>
        {
            (
                FormState {
                    status: SubmissionStatus::Idle,
                    error: Some(ValidationError::SubmissionFailed(error.to_string())),
                    ..state
                },
                None,
            )
        }

        FormAction::ResetElapsed { generation }
            if state.is_current(generation, SubmissionStatus::Success) =>
        {
            (
                FormState {
                    status: SubmissionStatus::Idle,
                    ..state
                },
                None,
            )
        }

        // Stale completion from an earlier generation or an unexpected status
        FormAction::SubmissionSucceeded { .. }
        | FormAction::SubmissionFailed { .. }
        | FormAction::ResetElapsed { .. } => (state, None),
    }
}

fn submit(state: FormState, validator: &ValidationService) -> (FormState, Option<Effect>) {
    // The control is disabled while submitting; a stray submit changes nothing
    if state.status == SubmissionStatus::Submitting {
        return (state, None);
    }

    match validator.check_submit(&state.draft) {
        Err(error) => (
            FormState {
                error: Some(error),
                ..state
            },
            None,
        ),
        Ok(()) => {
            let generation = state.generation + 1;
            let email = trim_address(&state.draft).to_string();
            (
                FormState {
                    error: None,
                    status: SubmissionStatus::Submitting,
                    generation,
                    ..state
                },
                Some(Effect::StartSubmission { email, generation }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubmissionError;

    fn typed(draft: &str) -> FormState {
        reduce(FormState::new(), FormAction::InputChanged(draft.to_string())).0
    }

    #[test]
    fn test_reducer_is_pure() {
        let state = typed("user@example.com");
        let before = state.clone();

        let (next, _) = reduce(state.clone(), FormAction::SubmitRequested);

        assert_eq!(state, before);
        assert_eq!(next.status, SubmissionStatus::Submitting);
    }

    #[test]
    fn test_input_does_not_touch_error_or_status() {
        let mut state = typed("abc");
        state.error = Some(ValidationError::Malformed);

        let (next, effect) = reduce(state, FormAction::InputChanged("abcd".to_string()));

        assert_eq!(next.draft, "abcd");
        assert_eq!(next.error, Some(ValidationError::Malformed));
        assert_eq!(next.status, SubmissionStatus::Idle);
        assert!(effect.is_none());
    }

    #[test]
    fn test_submit_valid_requests_submission() {
        let (next, effect) = reduce(typed("  user@example.com "), FormAction::SubmitRequested);

        assert_eq!(next.generation, 1);
        assert!(next.error.is_none());
        assert_eq!(
            effect,
            Some(Effect::StartSubmission {
                email: "user@example.com".to_string(),
                generation: 1,
            })
        );
    }

    #[test]
    fn test_submit_clears_previous_error() {
        let mut state = typed("user@example.com");
        state.error = Some(ValidationError::Malformed);

        let (next, _) = reduce(state, FormAction::SubmitRequested);

        assert!(next.error.is_none());
    }

    #[test]
    fn test_submit_while_submitting_is_ignored() {
        let (submitting, _) = reduce(typed("user@example.com"), FormAction::SubmitRequested);

        let (next, effect) = reduce(submitting.clone(), FormAction::SubmitRequested);

        assert_eq!(next, submitting);
        assert!(effect.is_none());
    }

    #[test]
    fn test_success_clears_draft_and_schedules_reset() {
        let (submitting, _) = reduce(typed("user@example.com"), FormAction::SubmitRequested);

        let (next, effect) = reduce(submitting, FormAction::SubmissionSucceeded { generation: 1 });

        assert_eq!(next.status, SubmissionStatus::Success);
        assert_eq!(next.draft, "");
        assert_eq!(effect, Some(Effect::ScheduleReset { generation: 1 }));
    }

    #[test]
    fn test_failure_returns_to_idle_and_keeps_draft() {
        let (submitting, _) = reduce(typed("user@example.com"), FormAction::SubmitRequested);

        let (next, effect) = reduce(
            submitting,
            FormAction::SubmissionFailed {
                generation: 1,
                error: SubmissionError::Network("refused".to_string()),
            },
        );

        assert_eq!(next.status, SubmissionStatus::Idle);
        assert_eq!(next.draft, "user@example.com");
        assert_eq!(
            next.input_view().error,
            Some("Something went wrong. Please try again.")
        );
        assert_eq!(
            next.error,
            Some(ValidationError::SubmissionFailed("Network error: refused".to_string()))
        );
        assert!(effect.is_none());
    }

    #[test]
    fn test_reset_only_applies_in_success() {
        let (submitting, _) = reduce(typed("user@example.com"), FormAction::SubmitRequested);

        let (next, _) = reduce(submitting.clone(), FormAction::ResetElapsed { generation: 1 });

        assert_eq!(next, submitting);
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let (submitting, _) = reduce(typed("user@example.com"), FormAction::SubmitRequested);

        let (next, effect) = reduce(
            submitting.clone(),
            FormAction::SubmissionSucceeded { generation: 0 },
        );

        assert_eq!(next, submitting);
        assert!(effect.is_none());
    }
}
