//! Nonce generation for Bitstamp API authentication.
//!
//! Bitstamp requires a strictly increasing nonce for each authenticated
//! request to prevent replay attacks.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Compute the next nonce from the previous one and a clock reading.
///
/// Returns `max(previous + 1, now)`, where `now` is whole seconds since the
/// UNIX epoch. Anchoring to wall-clock time keeps nonces strictly increasing
/// even across process restarts, while the increment covers several requests
/// issued within the same second.
pub fn advance(previous: u64, now: u64) -> u64 {
    (previous + 1).max(now)
}

/// Trait for providing nonces for authenticated requests.
///
/// The nonce must be strictly increasing for each request.
pub trait NonceProvider: Send + Sync {
    /// Generate the next nonce value.
    ///
    /// This value must be greater than any previously returned value.
    fn next_nonce(&self) -> u64;
}

/// A nonce provider scoped to one authenticated session.
///
/// Each call returns `max(last + 1, unix_time_secs)` via an atomic
/// compare-and-swap, so the value is strictly increasing even when the
/// provider is shared between tasks.
pub struct SessionNonce {
    last_nonce: AtomicU64,
}

impl SessionNonce {
    /// Create a new session nonce starting from zero.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Create a session nonce resuming from a known previous value.
    pub fn starting_at(previous: u64) -> Self {
        Self {
            last_nonce: AtomicU64::new(previous),
        }
    }

    /// Get current time in whole seconds since UNIX epoch.
    fn current_time_secs() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

impl Default for SessionNonce {
    fn default() -> Self {
        Self::new()
    }
}

impl NonceProvider for SessionNonce {
    fn next_nonce(&self) -> u64 {
        let now = Self::current_time_secs();

        loop {
            let last = self.last_nonce.load(Ordering::SeqCst);
            let next = advance(last, now);

            if self
                .last_nonce
                .compare_exchange(last, next, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return next;
            }
            // If CAS failed, another thread updated the value. Retry.
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_advance_prefers_increment_when_ahead_of_clock() {
        // previous + 1 > now
        assert_eq!(advance(2_000_000_000, 1_700_000_000), 2_000_000_001);
        assert_eq!(advance(1_700_000_000, 1_700_000_000), 1_700_000_001);
    }

    #[test]
    fn test_advance_anchors_to_clock_when_behind() {
        // previous + 1 <= now
        assert_eq!(advance(0, 1_700_000_000), 1_700_000_000);
        assert_eq!(advance(1_699_999_999, 1_700_000_000), 1_700_000_000);
    }

    #[test]
    fn test_nonce_strictly_increasing() {
        let provider = SessionNonce::new();

        let mut last = 0u64;
        for _ in 0..1000 {
            let nonce = provider.next_nonce();
            assert!(nonce > last, "Nonce must be strictly increasing");
            last = nonce;
        }
    }

    #[test]
    fn test_nonce_starts_at_clock_time() {
        let provider = SessionNonce::new();
        let nonce = provider.next_nonce();
        // A fresh session anchors to the wall clock, not to 1.
        assert!(nonce > 1_600_000_000);
    }

    #[test]
    fn test_nonce_resumes_past_seed() {
        let seed = u64::MAX - 2000;
        let provider = SessionNonce::starting_at(seed);
        assert_eq!(provider.next_nonce(), seed + 1);
        assert_eq!(provider.next_nonce(), seed + 2);
    }

    #[test]
    fn test_nonce_unique_across_threads() {
        let provider = std::sync::Arc::new(SessionNonce::new());
        let mut handles = vec![];

        for _ in 0..4 {
            let p = provider.clone();
            handles.push(thread::spawn(move || {
                let mut nonces = Vec::new();
                for _ in 0..1000 {
                    nonces.push(p.next_nonce());
                }
                nonces
            }));
        }

        let mut all_nonces = HashSet::new();
        for handle in handles {
            let nonces = handle.join().unwrap();
            for nonce in nonces {
                assert!(
                    all_nonces.insert(nonce),
                    "Nonce must be unique across threads"
                );
            }
        }
    }
}
