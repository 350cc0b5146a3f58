//! storefront-tui library
//!
//! Exports the app, rendering and service adapter for testing and reuse.

pub mod app;
pub mod error;
pub mod services;
pub mod terminal;
pub mod ui;

// Re-export commonly used types
pub use app::{reduce, Action, AppState, Focus, FormIntent};
pub use error::{Result, TuiError};
