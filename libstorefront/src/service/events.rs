//! Event system for form observers
//!
//! An in-process bus that lets the shell (status bar, CLI output, logs) follow
//! what a form does without reaching into its state.
//!
//! The bus uses `tokio::sync::broadcast` for multi-subscriber support. If no
//! subscribers exist, events are dropped immediately. Subscribers can lag
//! without blocking the form.
//!
//! # Example
//!
//! ```no_run
//! use libstorefront::service::events::{EventBus, FormEvent};
//! use libstorefront::types::{FormId, SubmissionStatus};
//!
//! # async fn example() {
//! let event_bus = EventBus::new(64);
//! let mut receiver = event_bus.subscribe();
//!
//! event_bus.emit(FormEvent::StatusChanged {
//!     form_id: FormId::new(),
//!     from: SubmissionStatus::Idle,
//!     to: SubmissionStatus::Submitting,
//! });
//!
//! if let Ok(event) = receiver.recv().await {
//!     println!("Received: {:?}", event);
//! }
//! # }
//! ```

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{FormId, SubmissionStatus};

/// Event receiver type alias
pub type EventReceiver = broadcast::Receiver<FormEvent>;

/// Event bus for distributing form events
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<FormEvent>,
}

impl EventBus {
    /// Create a new event bus buffering `capacity` events per subscriber
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events emitted from now on
    pub fn subscribe(&self) -> EventReceiver {
        self.sender.subscribe()
    }

    /// Emit an event to all subscribers
    ///
    /// Never blocks. Dropped silently when nobody is listening.
    pub fn emit(&self, event: FormEvent) {
        let _ = self.sender.send(event);
    }

    /// Get the number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

/// Events emitted by a signup form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    /// The submission status moved
    StatusChanged {
        form_id: FormId,
        from: SubmissionStatus,
        to: SubmissionStatus,
    },

    /// An inline validation message was raised
    ValidationFailed { form_id: FormId, message: String },

    /// The subscriber accepted the address
    Subscribed { form_id: FormId, email: String },

    /// The subscriber failed; the form is back to idle
    SubmissionFailed { form_id: FormId, error: String },
}

impl FormEvent {
    pub fn form_id(&self) -> FormId {
        match self {
            FormEvent::StatusChanged { form_id, .. }
            | FormEvent::ValidationFailed { form_id, .. }
            | FormEvent::Subscribed { form_id, .. }
            | FormEvent::SubmissionFailed { form_id, .. } => *form_id,
        }
    }
}
