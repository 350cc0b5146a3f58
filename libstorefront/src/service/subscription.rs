//! Subscription backends
//!
//! The form hands an accepted address to a [`Subscriber`]. The landing page
//! ships only [`SimulatedSubscriber`], which waits a fixed latency and always
//! succeeds; nothing is persisted. A real backend plugs in behind the same
//! trait and reports failure through [`SubmissionError`].

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::error::SubmissionError;

/// Something that records a newsletter subscription
#[async_trait]
pub trait Subscriber: Send + Sync {
    /// Record the (already validated) address
    async fn subscribe(&self, email: &str) -> Result<(), SubmissionError>;

    /// Short name used in logs
    fn name(&self) -> &str;
}

/// Waits `delay` and reports success
#[derive(Debug, Clone)]
pub struct SimulatedSubscriber {
    delay: Duration,
}

impl SimulatedSubscriber {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubscriber {
    fn default() -> Self {
        Self::new(Duration::from_millis(650))
    }
}

#[async_trait]
impl Subscriber for SimulatedSubscriber {
    async fn subscribe(&self, email: &str) -> Result<(), SubmissionError> {
        tracing::debug!(
            delay_ms = self.delay.as_millis() as u64,
            "Simulating subscription for {}",
            email
        );
        sleep(self.delay).await;
        Ok(())
    }

    fn name(&self) -> &str {
        "simulated"
    }
}

/// Configurable subscriber for tests
///
/// Records every address it receives so tests can assert on them.
#[derive(Debug, Clone)]
pub struct MockSubscriber {
    pub delay: Duration,
    pub outcome: Result<(), SubmissionError>,
    pub received: Arc<Mutex<Vec<String>>>,
}

impl MockSubscriber {
    /// A subscriber that succeeds after `delay`
    pub fn success(delay: Duration) -> Self {
        Self {
            delay,
            outcome: Ok(()),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A subscriber that fails with `error` after `delay`
    pub fn failure(delay: Duration, error: SubmissionError) -> Self {
        Self {
            delay,
            outcome: Err(error),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn received(&self) -> Vec<String> {
        self.received.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Subscriber for MockSubscriber {
    async fn subscribe(&self, email: &str) -> Result<(), SubmissionError> {
        if let Ok(mut received) = self.received.lock() {
            received.push(email.to_string());
        }
        sleep(self.delay).await;
        self.outcome.clone()
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_subscriber_waits_its_delay() {
        let subscriber = SimulatedSubscriber::new(Duration::from_millis(650));
        let started = tokio::time::Instant::now();

        subscriber.subscribe("user@example.com").await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(650));
    }

    #[tokio::test(start_paused = true)]
    async fn test_mock_failure_reports_error_and_records_email() {
        let subscriber = MockSubscriber::failure(
            Duration::from_millis(5),
            SubmissionError::Network("connection reset".to_string()),
        );

        let result = subscriber.subscribe("user@example.com").await;

        assert_eq!(result, Err(SubmissionError::Network("connection reset".to_string())));
        assert_eq!(subscriber.received(), vec!["user@example.com"]);
    }

    #[test]
    fn test_default_delay_is_reference_latency() {
        assert_eq!(SimulatedSubscriber::default().delay(), Duration::from_millis(650));
    }
}
