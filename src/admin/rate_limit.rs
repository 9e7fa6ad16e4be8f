//! Sliding-window rate limiter keyed by a client fingerprint.
//!
//! Stale fingerprints are evicted during periodic sweeps on the mutation
//! path, so the map stays bounded under many distinct clients instead of
//! growing forever.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::response::AdminError;
use crate::config::RateLimitSettings;

/// How many checks between eviction sweeps.
const SWEEP_INTERVAL: u64 = 256;

#[derive(Debug)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    entries: DashMap<String, WindowEntry>,
    ops: AtomicU64,
}

#[derive(Debug)]
struct WindowEntry {
    timestamps: Vec<Instant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    pub remaining: u32,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            entries: DashMap::new(),
            ops: AtomicU64::new(0),
        }
    }

    pub fn from_settings(settings: &RateLimitSettings) -> Self {
        Self::new(
            settings.max_requests,
            Duration::from_secs(settings.window_seconds),
        )
    }

    /// Record a request for `fingerprint`, failing with `retry_after` when
    /// the window is already full.
    pub fn check(&self, fingerprint: &str) -> Result<RateLimitDecision, AdminError> {
        self.maybe_sweep();

        let now = Instant::now();
        let mut entry = self
            .entries
            .entry(fingerprint.to_string())
            .or_insert_with(|| WindowEntry {
                timestamps: Vec::new(),
            });

        entry
            .timestamps
            .retain(|t| now.duration_since(*t) < self.window);

        if entry.timestamps.len() as u32 >= self.max_requests {
            // With a zero limit the window is empty and every request waits
            // out a full window.
            let retry_after = match entry.timestamps.first() {
                Some(oldest) => self.window.saturating_sub(now.duration_since(*oldest)),
                None => self.window,
            }
            .as_secs()
            .max(1);
            return Err(AdminError::RateLimited {
                retry_after_seconds: retry_after,
            });
        }

        entry.timestamps.push(now);
        Ok(RateLimitDecision {
            remaining: self.max_requests - entry.timestamps.len() as u32,
        })
    }

    /// Number of tracked fingerprints, for observability and tests.
    pub fn tracked_clients(&self) -> usize {
        self.entries.len()
    }

    fn maybe_sweep(&self) {
        let ops = self.ops.fetch_add(1, Ordering::Relaxed) + 1;
        if ops % SWEEP_INTERVAL != 0 {
            return;
        }
        let now = Instant::now();
        self.entries.retain(|_, entry| {
            entry
                .timestamps
                .last()
                .is_some_and(|t| now.duration_since(*t) < self.window)
        });
    }
}

/// Client fingerprint: (IP, user-agent) pair.
pub fn fingerprint(ip: &str, user_agent: &str) -> String {
    format!("{}|{}", ip, user_agent)
}
