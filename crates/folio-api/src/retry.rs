// ── Bounded retry with exponential backoff ──

use std::time::Duration;

use crate::error::Error;

/// Retry policy for idempotent reads.
///
/// `delay_for(n)` is `base_delay * 2^n`, capped at `max_delay`. A policy
/// with `max_retries == 0` never retries, which is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    pub const MAX_DELAY: Duration = Duration::from_secs(30);
    /// Upper bound on `max_retries`.
    pub const MAX_RETRIES: u32 = 3;

    /// Never retry.
    pub const fn none() -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::from_secs(1),
            max_delay: Self::MAX_DELAY,
        }
    }

    /// Three retries, starting at one second.
    pub const fn standard() -> Self {
        Self::with_retries(3)
    }

    /// Retry up to `max_retries` times, clamped to [`Self::MAX_RETRIES`].
    pub const fn with_retries(max_retries: u32) -> Self {
        let max_retries = if max_retries > Self::MAX_RETRIES {
            Self::MAX_RETRIES
        } else {
            max_retries
        };
        Self {
            max_retries,
            base_delay: Duration::from_secs(1),
            max_delay: Self::MAX_DELAY,
        }
    }

    /// Backoff before retry number `attempt` (zero-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.checked_pow(attempt).unwrap_or(u32::MAX);
        self.base_delay
            .checked_mul(factor)
            .map_or(self.max_delay, |d| d.min(self.max_delay))
    }

    /// Whether a failed attempt should be retried.
    pub fn should_retry(&self, attempt: u32, err: &Error) -> bool {
        attempt < self.max_retries && err.is_transient()
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}
