//! Per-host request pacing
//!
//! The pacer spaces out consecutive requests to the same host by a fixed
//! minimum interval, independent of any rate-limit signal from the upstream.
//! The interval runs from the moment the previous call to that host
//! finished, so a slow response never eats into the gap. One pacer lives for
//! one inbound request, so no timing state is shared between requests.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Tracks when the last call to every host contacted in one session finished
#[derive(Debug, Clone)]
pub struct Pacer {
    /// Minimum time between one call finishing and the next starting
    min_interval: Duration,

    /// Host -> time the most recent call completed
    last_completed: HashMap<String, Instant>,
}

impl Pacer {
    /// Creates a pacer with the given minimum interval
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_completed: HashMap::new(),
        }
    }

    /// Calculates how long a request to `host` must wait
    ///
    /// Returns None if a request can be made now.
    pub fn time_until_ready(&self, host: &str, now: Instant) -> Option<Duration> {
        let last = self.last_completed.get(host)?;
        let elapsed = now.saturating_duration_since(*last);
        if elapsed < self.min_interval {
            Some(self.min_interval - elapsed)
        } else {
            None
        }
    }

    /// Waits until `host` may be contacted
    ///
    /// The first request to a host never waits.
    pub async fn wait_turn(&self, host: &str) {
        if let Some(wait) = self.time_until_ready(host, Instant::now()) {
            tracing::debug!("Pacing request to {} for {:?}", host, wait);
            tokio::time::sleep(wait).await;
        }
    }

    /// Records that a call to `host` finished at `now`, successfully or not
    pub fn record_completion(&mut self, host: &str, now: Instant) {
        self.last_completed.insert(host.to_string(), now);
    }
}
