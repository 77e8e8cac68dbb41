//! Minimum-interval request pacing.

use std::time::{Duration, Instant};

/// Default minimum interval between requests (~40 req/s).
pub(crate) const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(25);

/// Single-tier pacer shared by all requests of a client.
///
/// TMDb allows roughly 40 requests per second; consecutive requests are
/// spaced at least `min_interval` apart.
#[derive(Debug)]
pub(crate) struct RequestPacer {
    /// Minimum interval between requests.
    min_interval: Duration,
    /// Timestamp of the last request.
    last_request: Option<Instant>,
}

impl RequestPacer {
    /// Creates a pacer with the given minimum interval.
    pub(crate) const fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: None,
        }
    }

    /// Waits until the next request is allowed, then records it.
    pub(crate) async fn wait(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval.saturating_sub(elapsed)).await;
            }
        }

        self.last_request = Some(Instant::now());
    }
}

impl Default for RequestPacer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}
