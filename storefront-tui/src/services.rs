//! Service layer adapter for the TUI
//!
//! Bridges the async form driver to the synchronous terminal event loop.
//!
//! - `ServiceHandle`: owns a tokio runtime and the one mounted signup form
//! - Handlers: the loop forwards `FormIntent`s, which reach the form on this thread
//! - Events: the tokio broadcast bus is bridged to a crossbeam channel
//!
//! # Example
//!
//! ```no_run
//! use storefront_tui::app::FormIntent;
//! use storefront_tui::services::ServiceHandle;
//!
//! # fn example() -> storefront_tui::error::Result<()> {
//! let mut services = ServiceHandle::new()?;
//!
//! services.apply(FormIntent::Input("user@example.com".to_string()));
//! services.apply(FormIntent::Submit);
//!
//! // Once per loop iteration
//! for event in services.poll() {
//!     println!("{:?}", event);
//! }
//! # Ok(())
//! # }
//! ```

use crossbeam_channel::{unbounded, Receiver, Sender};
use libstorefront::service::events::{EventReceiver, FormEvent};
use libstorefront::service::StorefrontService;
use libstorefront::{Config, SubscriptionForm};
use tokio::runtime::Runtime;
use tokio::sync::broadcast::error::RecvError;

use crate::app::FormIntent;
use crate::error::Result;

/// Service handle for TUI operations
pub struct ServiceHandle {
    // Dropped first so its tasks are aborted while the runtime still exists
    form: SubscriptionForm,
    event_rx: Receiver<FormEvent>,
    service: StorefrontService,
    runtime: Runtime,
}

impl ServiceHandle {
    /// Create a service handle with configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the config file exists but cannot be read or parsed
    /// - the tokio runtime cannot be created
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::from_config(config)
    }

    /// Create a service handle with custom configuration
    pub fn from_config(config: Config) -> Result<Self> {
        let runtime = Runtime::new()?;
        let service = StorefrontService::from_config(config);

        // Subscribe before mounting so no event of this form is missed
        let (tx, event_rx) = unbounded();
        runtime.spawn(bridge_events(service.subscribe(), tx));

        let form = service.mount_form(runtime.handle().clone());

        Ok(Self {
            form,
            event_rx,
            service,
            runtime,
        })
    }

    pub fn config(&self) -> &Config {
        self.service.config()
    }

    pub fn form(&self) -> &SubscriptionForm {
        &self.form
    }

    /// Forward one handler call to the form
    pub fn apply(&mut self, intent: FormIntent) {
        match intent {
            FormIntent::Input(value) => self.form.input(value),
            FormIntent::Blur => self.form.blur(),
            FormIntent::Submit => self.form.submit(),
        }
    }

    /// Apply scheduled completions that have arrived and collect form events
    ///
    /// Non-blocking; call once per loop iteration.
    pub fn poll(&mut self) -> Vec<FormEvent> {
        self.form.poll_scheduled();
        self.event_rx.try_iter().collect()
    }

    /// Cancel the form's pending tasks ahead of shutdown
    pub fn shutdown(&mut self) -> usize {
        let aborted = self.form.teardown();
        tracing::debug!(aborted, "Service handle shut down");
        aborted
    }
}

/// Forward broadcast events to the sync side until either end goes away
async fn bridge_events(mut event_rx: EventReceiver, tx: Sender<FormEvent>) {
    loop {
        match event_rx.recv().await {
            Ok(event) => {
                if tx.send(event).is_err() {
                    // Receiver dropped, stop forwarding
                    break;
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Event receiver lagged, skipped {} events", skipped);
            }
            Err(RecvError::Closed) => break,
        }
    }
}
