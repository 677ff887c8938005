//! Nonce generation for Txbit API authentication.
//!
//! Txbit expects a per-request increasing nonce on signed requests to
//! prevent replay attacks. The exchange accepts millisecond timestamps.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing nonces for signed requests.
///
/// The nonce must be increasing for each request. Txbit accepts
/// milliseconds since the UNIX epoch.
pub trait NonceProvider: Send + Sync {
    /// Generate the next nonce value.
    ///
    /// This value must be greater than any previously returned value.
    fn next_nonce(&self) -> u64;
}

/// A nonce provider based on wall-clock milliseconds.
///
/// Millisecond resolution alone is not enough under rapid concurrent
/// calls, so an atomic counter breaks ties: each nonce is the max of the
/// current timestamp and the previous nonce plus one. Values remain
/// plausible millisecond timestamps as far as the exchange is concerned.
pub struct MillisNonce {
    last_nonce: AtomicU64,
}

impl MillisNonce {
    /// Create a new millisecond nonce provider.
    pub fn new() -> Self {
        Self {
            last_nonce: AtomicU64::new(0),
        }
    }

    /// Get current time in milliseconds since UNIX epoch.
    fn current_time_millis() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

impl Default for MillisNonce {
    fn default() -> Self {
        Self::new()
    }
}

impl NonceProvider for MillisNonce {
    fn next_nonce(&self) -> u64 {
        let time_nonce = Self::current_time_millis();

        // Ensure the nonce is strictly increasing.
        // Use the max of current time and last + 1.
        loop {
            let last = self.last_nonce.load(Ordering::SeqCst);
            let next = time_nonce.max(last + 1);

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
    fn test_nonce_strictly_increasing() {
        let provider = MillisNonce::new();

        let mut last = 0u64;
        for _ in 0..1000 {
            let nonce = provider.next_nonce();
            assert!(nonce > last, "Nonce must be strictly increasing");
            last = nonce;
        }
    }

    #[test]
    fn test_nonce_is_a_recent_timestamp() {
        let provider = MillisNonce::new();
        let nonce = provider.next_nonce();
        // 2020-01-01 in milliseconds; anything earlier means we produced
        // something other than a wall-clock value.
        assert!(nonce > 1_577_836_800_000);
    }

    #[test]
    fn test_nonce_unique_across_threads() {
        let provider = std::sync::Arc::new(MillisNonce::new());
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
