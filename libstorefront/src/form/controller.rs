//! Form driver
//!
//! [`SubscriptionForm`] owns one form's state, runs the reducer, and turns the
//! effects it returns into tokio tasks. Tasks never touch the state: they send
//! a [`FormAction`] back over a channel, and the owner applies it through
//! [`SubscriptionForm::poll_scheduled`] or [`SubscriptionForm::next_scheduled`].
//! State therefore only changes on the owner's thread, one action at a time.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};

use super::actions::{Effect, FormAction};
use super::reducer::reduce;
use super::state::FormState;
use super::tasks::{TaskKind, TaskSet};
use crate::error::SubmissionError;
use crate::service::events::{EventBus, FormEvent};
use crate::service::subscription::Subscriber;
use crate::types::{ButtonView, FormId, InputView, SubmissionStatus, ValidationError};

/// One mounted newsletter signup form
///
/// Dropping the form aborts every task it scheduled.
pub struct SubscriptionForm {
    id: FormId,
    state: FormState,
    subscriber: Arc<dyn Subscriber>,
    success_reset: Duration,
    runtime: Handle,
    tasks: TaskSet,
    // Spawned tasks whose completion has not been received yet
    outstanding: usize,
    in_flight: Option<String>,
    last_failure: Option<SubmissionError>,
    scheduled_tx: mpsc::UnboundedSender<FormAction>,
    scheduled_rx: mpsc::UnboundedReceiver<FormAction>,
    events: EventBus,
}

impl SubscriptionForm {
    /// Mount a new form
    ///
    /// * `subscriber` - receives accepted addresses
    /// * `success_reset` - how long `success` lasts before reverting to `idle`
    /// * `runtime` - where scheduled tasks run
    /// * `events` - bus to publish form events on
    pub fn new(
        subscriber: Arc<dyn Subscriber>,
        success_reset: Duration,
        runtime: Handle,
        events: EventBus,
    ) -> Self {
        let (scheduled_tx, scheduled_rx) = mpsc::unbounded_channel();
        let id = FormId::new();
        debug!(form_id = %id, subscriber = subscriber.name(), "Form mounted");

        Self {
            id,
            state: FormState::new(),
            subscriber,
            success_reset,
            runtime,
            tasks: TaskSet::new(),
            outstanding: 0,
            in_flight: None,
            last_failure: None,
            scheduled_tx,
            scheduled_rx,
            events,
        }
    }

    pub fn id(&self) -> FormId {
        self.id
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state.status
    }

    pub fn input_view(&self) -> InputView<'_> {
        self.state.input_view()
    }

    pub fn button_view(&self) -> ButtonView {
        self.state.button_view()
    }

    /// Error of the most recent submission, if it failed
    ///
    /// Cleared when the next submission starts.
    pub fn last_failure(&self) -> Option<&SubmissionError> {
        self.last_failure.as_ref()
    }

    /// Change handler of the email field
    pub fn input(&mut self, value: impl Into<String>) {
        self.dispatch(FormAction::InputChanged(value.into()));
    }

    /// Blur handler of the email field
    pub fn blur(&mut self) {
        self.dispatch(FormAction::Blurred);
    }

    /// Submit handler
    pub fn submit(&mut self) {
        self.dispatch(FormAction::SubmitRequested);
    }

    /// Apply one action and run whatever effect it produces
    pub fn dispatch(&mut self, action: FormAction) {
        let previous = self.state.clone();
        let kind = ActionKind::of(&action);
        let failure = match &action {
            FormAction::SubmissionFailed { error, .. } => Some(error.clone()),
            _ => None,
        };
        if action.is_scheduled() {
            trace!(form_id = %self.id, ?action, "Scheduled completion arrived");
        }

        let (next, effect) = reduce(std::mem::take(&mut self.state), action);
        self.state = next;

        if previous.status != self.state.status {
            debug!(
                form_id = %self.id,
                from = %previous.status,
                to = %self.state.status,
                "Status changed"
            );
            self.events.emit(FormEvent::StatusChanged {
                form_id: self.id,
                from: previous.status,
                to: self.state.status,
            });

            match (kind, self.state.status) {
                (ActionKind::Succeeded, SubmissionStatus::Success) => {
                    let email = self.in_flight.take().unwrap_or_default();
                    info!(form_id = %self.id, "Subscribed {}", email);
                    self.events.emit(FormEvent::Subscribed {
                        form_id: self.id,
                        email,
                    });
                }
                (ActionKind::Failed, SubmissionStatus::Idle) => {
                    self.in_flight = None;
                    self.last_failure = failure;
                    if let Some(ValidationError::SubmissionFailed(reason)) = &self.state.error {
                        warn!(form_id = %self.id, "Submission failed: {}", reason);
                        self.events.emit(FormEvent::SubmissionFailed {
                            form_id: self.id,
                            error: reason.clone(),
                        });
                    }
                }
                _ => {}
            }
        }

        // Every rejected submit raises its message again; a blur only when it changed
        let raised = match kind {
            ActionKind::Submit => effect.is_none() && previous.status == self.state.status,
            ActionKind::Blur => previous.error != self.state.error,
            _ => false,
        };
        if raised {
            if let Some(error) = &self.state.error {
                debug!(form_id = %self.id, "Validation failed: {}", error);
                self.events.emit(FormEvent::ValidationFailed {
                    form_id: self.id,
                    message: error.message().to_string(),
                });
            }
        }

        if let Some(effect) = effect {
            self.run_effect(effect);
        }
    }

    /// Apply every scheduled completion that has already arrived
    ///
    /// Non-blocking; meant for synchronous event loops. Returns how many
    /// actions were applied.
    pub fn poll_scheduled(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.scheduled_rx.try_recv() {
            self.outstanding = self.outstanding.saturating_sub(1);
            self.dispatch(action);
            applied += 1;
        }
        applied
    }

    /// Wait for the next scheduled completion and apply it
    ///
    /// Returns `None` once every spawned task has reported back and been
    /// applied. Tasks that already sent their completion count as reported even
    /// if the runtime has not marked them finished yet.
    pub async fn next_scheduled(&mut self) -> Option<FormAction> {
        if self.outstanding == 0 {
            return None;
        }
        let action = self.scheduled_rx.recv().await?;
        self.outstanding -= 1;
        self.dispatch(action.clone());
        Some(action)
    }

    /// Number of scheduled tasks still running
    pub fn pending_tasks(&mut self) -> usize {
        self.tasks.pending()
    }

    /// Number of scheduled completions not yet applied
    pub fn outstanding(&self) -> usize {
        self.outstanding
    }

    /// Cancel every scheduled task and discard completions not yet applied
    ///
    /// Returns the number of tasks aborted. Called on drop as well.
    pub fn teardown(&mut self) -> usize {
        let in_flight = self.tasks.pending_of(TaskKind::Submission);
        let aborted = self.tasks.abort_all();
        self.outstanding = 0;
        // An aborted task may still be mid-poll on another worker; it sends into the old channel
        let (scheduled_tx, scheduled_rx) = mpsc::unbounded_channel();
        self.scheduled_tx = scheduled_tx;
        self.scheduled_rx = scheduled_rx;
        if aborted > 0 {
            debug!(form_id = %self.id, aborted, in_flight, "Form torn down with pending tasks");
        }
        aborted
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::StartSubmission { email, generation } => {
                info!(form_id = %self.id, generation, "Submitting {}", email);
                self.in_flight = Some(email.clone());
                self.last_failure = None;

                let subscriber = Arc::clone(&self.subscriber);
                let tx = self.scheduled_tx.clone();
                let handle = self.runtime.spawn(async move {
                    let action = match subscriber.subscribe(&email).await {
                        Ok(()) => FormAction::SubmissionSucceeded { generation },
                        Err(error) => FormAction::SubmissionFailed { generation, error },
                    };
                    let _ = tx.send(action);
                });
                self.tasks.push(TaskKind::Submission, handle);
                self.outstanding += 1;
            }
            Effect::ScheduleReset { generation } => {
                // Measured from entering success, not from when the task first runs
                let deadline = tokio::time::Instant::now() + self.success_reset;
                let tx = self.scheduled_tx.clone();
                let handle = self.runtime.spawn(async move {
                    tokio::time::sleep_until(deadline).await;
                    let _ = tx.send(FormAction::ResetElapsed { generation });
                });
                self.tasks.push(TaskKind::Reset, handle);
                self.outstanding += 1;
            }
        }
    }
}

impl Drop for SubscriptionForm {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActionKind {
    Submit,
    Blur,
    Succeeded,
    Failed,
    Other,
}

impl ActionKind {
    fn of(action: &FormAction) -> Self {
        match action {
            FormAction::SubmitRequested => ActionKind::Submit,
            FormAction::Blurred => ActionKind::Blur,
            FormAction::SubmissionSucceeded { .. } => ActionKind::Succeeded,
            FormAction::SubmissionFailed { .. } => ActionKind::Failed,
            FormAction::InputChanged(_) | FormAction::ResetElapsed { .. } => ActionKind::Other,
        }
    }
}
