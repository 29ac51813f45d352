//! Courtesy pacing for calls to shared public OSM services.
//!
//! Nominatim and the public Overpass instances are free community services;
//! the pacer keeps consecutive outbound requests a configurable minimum
//! interval apart. This replaces a fixed pre-call sleep: the first call goes
//! out immediately, and a call that arrives after the interval has already
//! elapsed does not wait at all.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

pub struct Pacer {
    min_interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl Pacer {
    /// A pacer that keeps calls at least `min_interval_ms` apart.
    /// `0` disables pacing entirely.
    #[must_use]
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval: Duration::from_millis(min_interval_ms),
            last_call: Mutex::new(None),
        }
    }

    /// Waits until the configured interval has passed since the previous
    /// paced call, then records this call.
    ///
    /// The internal lock is held across the sleep, so concurrent callers are
    /// serialized and each gets its own full interval.
    pub async fn pace(&self) {
        if self.min_interval.is_zero() {
            return;
        }
        let mut last_call = self.last_call.lock().await;
        if let Some(previous) = *last_call {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        *last_call = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_call_is_not_delayed() {
        let pacer = Pacer::new(1000);
        let start = Instant::now();
        pacer.pace().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn consecutive_calls_are_spaced_by_the_interval() {
        let pacer = Pacer::new(1000);
        let start = Instant::now();
        pacer.pace().await;
        pacer.pace().await;
        pacer.pace().await;
        assert!(
            start.elapsed() >= Duration::from_millis(2000),
            "three calls should span at least two intervals, got {:?}",
            start.elapsed()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn zero_interval_disables_pacing() {
        let pacer = Pacer::new(0);
        let start = Instant::now();
        pacer.pace().await;
        pacer.pace().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn elapsed_interval_is_not_waited_again() {
        let pacer = Pacer::new(1000);
        pacer.pace().await;
        tokio::time::sleep(Duration::from_millis(1500)).await;
        let before = Instant::now();
        pacer.pace().await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }
}
