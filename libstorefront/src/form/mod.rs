//! Newsletter signup form
//!
//! - Actions: what can happen to a form
//! - State: what is true right now
//! - Reducer: pure `(State, Action) -> (State, Effect)`
//! - Controller: owns one form, schedules effects as cancellable tasks

pub mod actions;
pub mod controller;
pub mod reducer;
pub mod state;
pub mod tasks;

pub use actions::{Effect, FormAction};
pub use controller::SubscriptionForm;
pub use reducer::reduce;
pub use state::FormState;
