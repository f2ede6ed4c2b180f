//! Bounded retry with exponential backoff.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How many times a fetch is attempted and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts, including the first one
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Delay before the first retry; doubled for each further retry
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    /// Upper bound for the exponential part of the delay
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    /// Random jitter added to each delay (0 to this value)
    #[serde(default = "default_jitter_ms")]
    pub jitter_ms: u64,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_base_delay_ms() -> u64 {
    500
}

fn default_max_delay_ms() -> u64 {
    8000
}

fn default_jitter_ms() -> u64 {
    250
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            jitter_ms: default_jitter_ms(),
        }
    }
}

impl RetryPolicy {
    /// A policy that tries once and never waits.
    pub fn none() -> Self {
        Self { max_attempts: 1, base_delay_ms: 0, max_delay_ms: 0, jitter_ms: 0 }
    }

    /// Number of attempts to make; never less than one.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Exponential part of the delay before retry number `retry` (0-based).
    pub fn backoff(&self, retry: u32) -> Duration {
        let exponential = self.base_delay_ms.saturating_mul(2u64.saturating_pow(retry.min(20)));
        Duration::from_millis(exponential.min(self.max_delay_ms))
    }

    /// Full delay before retry number `retry`, jitter included.
    pub fn delay(&self, retry: u32) -> Duration {
        let jitter = if self.jitter_ms > 0 {
            rand::rng().random_range(0..=self.jitter_ms)
        } else {
            0
        };

        self.backoff(retry) + Duration::from_millis(jitter)
    }
}

/// Whether a response status is worth another attempt.
///
/// Server errors, 408 and 429 are transient; every other client error is final.
pub fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 429 | 500..=599)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(base: u64, max: u64) -> RetryPolicy {
        RetryPolicy { max_attempts: 5, base_delay_ms: base, max_delay_ms: max, jitter_ms: 0 }
    }

    #[test]
    fn test_exponential_growth() {
        let policy = policy(100, 10_000);
        assert_eq!(policy.delay(0).as_millis(), 100);
        assert_eq!(policy.delay(1).as_millis(), 200);
        assert_eq!(policy.delay(2).as_millis(), 400);
    }

    #[test]
    fn test_max_cap() {
        let policy = policy(100, 1000);
        assert_eq!(policy.delay(10).as_millis(), 1000);
        assert_eq!(policy.delay(u32::MAX).as_millis(), 1000);
    }

    #[test]
    fn test_jitter_bounds() {
        let policy = RetryPolicy { jitter_ms: 50, ..policy(100, 1000) };
        for _ in 0..20 {
            let delay = policy.delay(0).as_millis();
            assert!((100..=150).contains(&delay));
        }
    }

    #[test]
    fn test_attempts_at_least_one() {
        let policy = RetryPolicy { max_attempts: 0, ..RetryPolicy::default() };
        assert_eq!(policy.attempts(), 1);
        assert_eq!(RetryPolicy::none().attempts(), 1);
        assert_eq!(RetryPolicy::default().attempts(), 3);
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable_status(503));
        assert!(is_retryable_status(500));
        assert!(is_retryable_status(429));
        assert!(is_retryable_status(408));
        assert!(!is_retryable_status(404));
        assert!(!is_retryable_status(403));
        assert!(!is_retryable_status(301));
    }

    #[test]
    fn test_policy_from_toml_partial() {
        let policy: RetryPolicy = toml::from_str("max_attempts = 5").unwrap();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.base_delay_ms, 500);
        assert_eq!(policy.max_delay_ms, 8000);
        assert_eq!(policy.jitter_ms, 250);
    }
}
