//! Fair-use request pacing for the Overpass API.
//!
//! One `RequestPacer` is shared by every concurrent invocation; it is the
//! only cross-invocation mutable state in the server. Bursts of requests
//! are spaced out to the configured minimum interval, never dropped.

use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Enforces a minimum interval between outbound requests.
///
/// The scheduling arithmetic (`reserve`) is separated from the actual
/// sleeping (`pace`) so tests can drive it with explicit instants. The
/// internal mutex is only held while computing the next slot, never
/// across a sleep or a network call.
#[derive(Debug)]
pub struct RequestPacer {
    min_interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl RequestPacer {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            next_slot: Mutex::new(None),
        }
    }

    /// Claim the next request slot and return how long the caller must
    /// wait before sending. Slots are handed out in call order, each at
    /// least `min_interval` after the previous one.
    pub fn reserve(&self, now: Instant) -> Duration {
        let mut slot = self
            .next_slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let start = match *slot {
            Some(at) if at > now => at,
            _ => now,
        };
        *slot = Some(start + self.min_interval);

        start.saturating_duration_since(now)
    }

    /// Wait until this caller's reserved slot arrives.
    pub async fn pace(&self) {
        let wait = self.reserve(Instant::now());
        if !wait.is_zero() {
            tokio::time::sleep(wait).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_request_is_immediate() {
        let pacer = RequestPacer::new(Duration::from_millis(500));
        let now = Instant::now();
        assert_eq!(pacer.reserve(now), Duration::ZERO);
    }

    #[test]
    fn test_burst_is_spaced_not_dropped() {
        let pacer = RequestPacer::new(Duration::from_millis(500));
        let now = Instant::now();

        assert_eq!(pacer.reserve(now), Duration::ZERO);
        assert_eq!(pacer.reserve(now), Duration::from_millis(500));
        assert_eq!(pacer.reserve(now), Duration::from_millis(1000));
    }

    #[test]
    fn test_slot_expires_after_idle_period() {
        let pacer = RequestPacer::new(Duration::from_millis(500));
        let now = Instant::now();

        assert_eq!(pacer.reserve(now), Duration::ZERO);
        // Well past the reserved slot: no wait required.
        let later = now + Duration::from_secs(5);
        assert_eq!(pacer.reserve(later), Duration::ZERO);
    }

    #[test]
    fn test_partial_elapse_waits_remainder() {
        let pacer = RequestPacer::new(Duration::from_millis(500));
        let now = Instant::now();

        pacer.reserve(now);
        let wait = pacer.reserve(now + Duration::from_millis(200));
        assert_eq!(wait, Duration::from_millis(300));
    }

    #[test]
    fn test_zero_interval_never_waits() {
        let pacer = RequestPacer::new(Duration::ZERO);
        let now = Instant::now();
        assert_eq!(pacer.reserve(now), Duration::ZERO);
        assert_eq!(pacer.reserve(now), Duration::ZERO);
    }
}
