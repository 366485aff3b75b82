//! Rate limiting for outbound fetches
//!
//! One shared limiter per crawl run enforces a minimum spacing between
//! consecutive fetch initiations, success and failure alike. The engine
//! records the moment a fetch is initiated and throttles before moving to
//! the next frontier entry, which produces the same aggregate pacing as
//! throttling before each fetch.

use std::time::{Duration, Instant};

/// Enforces a minimum interval between consecutive fetch initiations
#[derive(Debug)]
pub struct RateLimiter {
    interval: Duration,
    last_fetch: Option<Instant>,
}

impl RateLimiter {
    /// Creates a limiter with the given minimum spacing
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fetch: None,
        }
    }

    /// Records that a fetch is being initiated now
    pub fn mark_fetch(&mut self) {
        self.last_fetch = Some(Instant::now());
    }

    /// Suspends the caller until at least the configured interval has
    /// elapsed since the last recorded fetch initiation
    ///
    /// A no-op if no fetch has been recorded yet or the interval has
    /// already passed.
    pub async fn throttle(&self) {
        if let Some(last) = self.last_fetch {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                tokio::time::sleep(self.interval - elapsed).await;
            }
        }
    }
}
