//! Storefront - landing page newsletter signup
//!
//! This library holds the logic behind the landing page's newsletter form:
//! email validation, the submission state machine, and the scheduled
//! transitions that drive it. Renderers (terminal UI, headless CLI) sit on top.

pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{StorefrontError, Result};
pub use form::{FormAction, FormState, SubscriptionForm};
pub use types::{ButtonView, InputView, SubmissionStatus, ValidationError};
