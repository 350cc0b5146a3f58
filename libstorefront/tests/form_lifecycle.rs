//! Integration tests for the signup form lifecycle
//!
//! Drives `SubscriptionForm` through submit, success and reversion with the
//! tokio clock paused, so the 650 ms / 2500 ms delays cost nothing.

use std::sync::Arc;
use std::time::Duration;

use libstorefront::error::SubmissionError;
use libstorefront::form::{FormAction, SubscriptionForm};
use libstorefront::service::events::{EventBus, FormEvent};
use libstorefront::service::subscription::{MockSubscriber, SimulatedSubscriber};
use libstorefront::types::{SubmissionStatus, ValidationError};
use tokio::runtime::Handle;
use tokio::time::Instant;

const SUBMIT_DELAY: Duration = Duration::from_millis(650);
const RESET_DELAY: Duration = Duration::from_millis(2500);

fn mount(events: &EventBus) -> SubscriptionForm {
    SubscriptionForm::new(
        Arc::new(SimulatedSubscriber::new(SUBMIT_DELAY)),
        RESET_DELAY,
        Handle::current(),
        events.clone(),
    )
}

#[tokio::test(start_paused = true)]
async fn test_empty_submit_stays_idle() {
    let mut form = mount(&EventBus::default());

    form.submit();

    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.input_view().error, Some("Please enter your email."));
    assert_eq!(form.pending_tasks(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_submit_stays_idle() {
    let mut form = mount(&EventBus::default());

    form.input("not-an-email");
    form.submit();

    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.input_view().error, Some("Please enter a valid email address."));
    assert!(form.input_view().invalid());
}

#[tokio::test(start_paused = true)]
async fn test_repeated_invalid_submits_are_idempotent() {
    let mut form = mount(&EventBus::default());
    form.input("not-an-email");

    form.submit();
    let first = form.state().clone();
    form.submit();
    form.submit();

    assert_eq!(form.state(), &first);
    assert_eq!(form.state().generation, 0);
    assert_eq!(form.pending_tasks(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_full_lifecycle() {
    let events = EventBus::default();
    let mut form = mount(&events);
    let started = Instant::now();

    form.input("user@example.com");
    form.submit();

    assert_eq!(form.status(), SubmissionStatus::Submitting);
    assert!(form.input_view().error.is_none());
    assert!(form.button_view().disabled);
    assert_eq!(form.button_view().label, "SENDING…");

    let action = form.next_scheduled().await;
    assert_eq!(action, Some(FormAction::SubmissionSucceeded { generation: 1 }));
    assert!(started.elapsed() >= SUBMIT_DELAY);
    assert_eq!(form.status(), SubmissionStatus::Success);
    assert_eq!(form.state().draft, "");
    assert!(!form.button_view().disabled);
    assert_eq!(form.state().notice(), Some("Thanks! You're subscribed."));

    let action = form.next_scheduled().await;
    assert_eq!(action, Some(FormAction::ResetElapsed { generation: 1 }));
    assert!(started.elapsed() >= SUBMIT_DELAY + RESET_DELAY);
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.button_view().label, "SEND");

    // Nothing left to wait for
    assert_eq!(form.next_scheduled().await, None);
}

#[tokio::test(start_paused = true)]
async fn test_blur_sets_error_without_touching_status() {
    let mut form = mount(&EventBus::default());

    form.input("abc");
    form.blur();

    assert_eq!(form.input_view().error, Some("Please enter a valid email address."));
    assert_eq!(form.status(), SubmissionStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_blur_on_empty_field_is_silent() {
    let mut form = mount(&EventBus::default());

    form.blur();

    assert!(form.input_view().error.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_submit_is_ignored_while_submitting() {
    let subscriber = MockSubscriber::success(SUBMIT_DELAY);
    let mut form = SubscriptionForm::new(
        Arc::new(subscriber.clone()),
        RESET_DELAY,
        Handle::current(),
        EventBus::default(),
    );

    form.input("user@example.com");
    form.submit();
    form.submit();
    form.submit();
    form.next_scheduled().await;

    assert_eq!(subscriber.received(), vec!["user@example.com"]);
    assert_eq!(form.state().generation, 1);
}

#[tokio::test(start_paused = true)]
async fn test_stale_reset_cannot_stomp_new_submission() {
    let mut form = mount(&EventBus::default());

    form.input("first@example.com");
    form.submit();
    form.next_scheduled().await;
    assert_eq!(form.status(), SubmissionStatus::Success);

    // Resubmit inside the success window
    tokio::time::advance(Duration::from_millis(2000)).await;
    form.input("second@example.com");
    form.submit();
    assert_eq!(form.status(), SubmissionStatus::Submitting);
    assert_eq!(form.state().generation, 2);

    // First reversion timer fires 500 ms later, the new submission is still in flight
    let action = form.next_scheduled().await;
    assert_eq!(action, Some(FormAction::ResetElapsed { generation: 1 }));
    assert_eq!(form.status(), SubmissionStatus::Submitting);

    let action = form.next_scheduled().await;
    assert_eq!(action, Some(FormAction::SubmissionSucceeded { generation: 2 }));
    assert_eq!(form.status(), SubmissionStatus::Success);
}

#[tokio::test(start_paused = true)]
async fn test_submission_failure_returns_to_idle() {
    let events = EventBus::default();
    let mut receiver = events.subscribe();
    let mut form = SubscriptionForm::new(
        Arc::new(MockSubscriber::failure(
            SUBMIT_DELAY,
            SubmissionError::Timeout(Duration::from_secs(5)),
        )),
        RESET_DELAY,
        Handle::current(),
        events.clone(),
    );

    form.input("user@example.com");
    form.submit();
    form.next_scheduled().await;

    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.state().draft, "user@example.com");
    assert_eq!(
        form.state().error,
        Some(ValidationError::SubmissionFailed("Timed out after 5s".to_string()))
    );
    assert_eq!(
        form.last_failure(),
        Some(&SubmissionError::Timeout(Duration::from_secs(5)))
    );
    assert_eq!(form.pending_tasks(), 0);

    let mut saw_failure = false;
    while let Ok(event) = receiver.try_recv() {
        if let FormEvent::SubmissionFailed { error, .. } = event {
            assert_eq!(error, "Timed out after 5s");
            saw_failure = true;
        }
    }
    assert!(saw_failure);
}

#[tokio::test(start_paused = true)]
async fn test_teardown_cancels_pending_tasks() {
    let mut form = mount(&EventBus::default());

    form.input("user@example.com");
    form.submit();
    assert_eq!(form.pending_tasks(), 1);

    assert_eq!(form.teardown(), 1);
    assert_eq!(form.pending_tasks(), 0);

    tokio::time::sleep(SUBMIT_DELAY * 2).await;
    assert_eq!(form.poll_scheduled(), 0);
    assert_eq!(form.status(), SubmissionStatus::Submitting);
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels_success_timer() {
    let events = EventBus::default();
    let mut receiver = events.subscribe();
    let mut form = mount(&events);

    form.input("user@example.com");
    form.submit();
    form.next_scheduled().await;
    assert_eq!(form.status(), SubmissionStatus::Success);
    drop(form);

    tokio::time::sleep(RESET_DELAY * 2).await;

    // No status change to idle was ever published
    while let Ok(event) = receiver.try_recv() {
        if let FormEvent::StatusChanged { to, .. } = event {
            assert_ne!(to, SubmissionStatus::Idle);
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_poll_scheduled_drains_arrived_completions() {
    let mut form = mount(&EventBus::default());

    form.input("user@example.com");
    form.submit();
    assert_eq!(form.poll_scheduled(), 0);

    tokio::time::sleep(SUBMIT_DELAY + Duration::from_millis(1)).await;
    assert_eq!(form.poll_scheduled(), 1);
    assert_eq!(form.status(), SubmissionStatus::Success);
}

#[tokio::test(start_paused = true)]
async fn test_event_sequence_for_successful_submission() {
    let events = EventBus::default();
    let mut receiver = events.subscribe();
    let mut form = mount(&events);

    form.submit();
    form.input("user@example.com");
    form.submit();
    while form.next_scheduled().await.is_some() {}

    let mut seen = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        assert_eq!(event.form_id(), form.id());
        seen.push(event);
    }

    let kinds: Vec<&str> = seen
        .iter()
        .map(|e| match e {
            FormEvent::ValidationFailed { .. } => "validation_failed",
            FormEvent::StatusChanged { .. } => "status_changed",
            FormEvent::Subscribed { .. } => "subscribed",
            FormEvent::SubmissionFailed { .. } => "submission_failed",
        })
        .collect();

    assert_eq!(
        kinds,
        vec![
            "validation_failed",
            "status_changed",
            "status_changed",
            "subscribed",
            "status_changed",
        ]
    );
    assert!(seen.contains(&FormEvent::Subscribed {
        form_id: form.id(),
        email: "user@example.com".to_string(),
    }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_next_scheduled_ends_after_last_completion_on_worker_threads() {
    for _ in 0..200 {
        let mut form = SubscriptionForm::new(
            Arc::new(SimulatedSubscriber::new(Duration::ZERO)),
            Duration::ZERO,
            Handle::current(),
            EventBus::default(),
        );

        form.input("user@example.com");
        form.submit();
        assert_eq!(form.outstanding(), 1);

        let first = form.next_scheduled().await;
        assert_eq!(first, Some(FormAction::SubmissionSucceeded { generation: 1 }));
        let second = form.next_scheduled().await;
        assert_eq!(second, Some(FormAction::ResetElapsed { generation: 1 }));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.outstanding(), 0);

        // Must not wait on a task that already reported back
        let third = tokio::time::timeout(Duration::from_millis(200), form.next_scheduled()).await;
        assert!(matches!(third, Ok(None)), "next_scheduled waited past the last completion");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_teardown_clears_outstanding_completions() {
    let mut form = mount(&EventBus::default());

    form.input("user@example.com");
    form.submit();
    assert_eq!(form.outstanding(), 1);

    form.teardown();
    assert_eq!(form.outstanding(), 0);
    assert_eq!(form.next_scheduled().await, None);
}
