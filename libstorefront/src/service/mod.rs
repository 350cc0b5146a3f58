//! Service layer for Storefront
//!
//! Gives every front end (terminal UI, headless CLI) the same way to mount a
//! signup form, so timings, validation and events are wired identically.
//!
//! - `ValidationService`: email shape check and message classification
//! - `Subscriber`: where accepted addresses go (simulated by default)
//! - `EventBus`: form event distribution
//!
//! # Example
//!
//! ```no_run
//! use libstorefront::service::StorefrontService;
//!
//! # async fn example() -> libstorefront::Result<()> {
//! let service = StorefrontService::new()?;
//! let mut form = service.mount_form(tokio::runtime::Handle::current());
//!
//! form.input("user@example.com");
//! form.submit();
//! while form.next_scheduled().await.is_some() {}
//! # Ok(())
//! # }
//! ```

pub mod events;
pub mod subscription;
pub mod validation;

use std::sync::Arc;
use tokio::runtime::Handle;

use self::events::{EventBus, EventReceiver};
use self::subscription::{SimulatedSubscriber, Subscriber};
use self::validation::ValidationService;
use crate::form::SubscriptionForm;
use crate::{Config, Result};

/// Main service facade
pub struct StorefrontService {
    config: Arc<Config>,
    validation: ValidationService,
    event_bus: EventBus,
}

impl StorefrontService {
    /// Create a new service with configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::from_config(config))
    }

    /// Create a service with custom configuration
    pub fn from_config(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            validation: ValidationService::new(),
            event_bus: EventBus::new(64),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn validation(&self) -> &ValidationService {
        &self.validation
    }

    /// Subscribe to events of every form mounted through this service
    pub fn subscribe(&self) -> EventReceiver {
        self.event_bus.subscribe()
    }

    /// Mount a form backed by the simulated subscriber
    ///
    /// Scheduled tasks run on `runtime`.
    pub fn mount_form(&self, runtime: Handle) -> SubscriptionForm {
        let subscriber = SimulatedSubscriber::new(self.config.form.submit_delay());
        self.mount_form_with(Arc::new(subscriber), runtime)
    }

    /// Mount a form backed by a custom subscriber
    pub fn mount_form_with(
        &self,
        subscriber: Arc<dyn Subscriber>,
        runtime: Handle,
    ) -> SubscriptionForm {
        SubscriptionForm::new(
            subscriber,
            self.config.form.success_reset(),
            runtime,
            self.event_bus.clone(),
        )
    }
}
