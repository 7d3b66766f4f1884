//! Retry policy for product fetches.

use std::time::Duration;

use crate::client::FetchError;

/// Delay schedule between retry attempts.
#[derive(Debug, Clone)]
pub enum Backoff {
    /// Retry immediately.
    None,
    /// Same delay before every attempt.
    Fixed(Duration),
    /// Doubling delay, capped at `max`.
    Exponential { base: Duration, max: Duration },
}

impl Backoff {
    /// Delay before the given retry attempt (0-indexed).
    pub fn delay(&self, attempt: u32) -> Duration {
        match self {
            Backoff::None => Duration::ZERO,
            Backoff::Fixed(d) => *d,
            Backoff::Exponential { base, max } => {
                let factor = 2u32.saturating_pow(attempt);
                (*base).saturating_mul(factor).min(*max)
            }
        }
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Backoff::Exponential {
            base: Duration::from_millis(50),
            max: Duration::from_millis(500),
        }
    }
}

/// Bounded retry for transient fetch failures.
///
/// Server errors, timeouts, and connection failures are retried; client
/// errors and malformed payloads are not — retrying those can only repeat
/// the same answer.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the initial attempt.
    pub max_retries: u32,
    /// Delay schedule.
    pub backoff: Backoff,
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            backoff: Backoff::default(),
        }
    }

    /// A policy that never retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            backoff: Backoff::None,
        }
    }

    pub fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }

    /// Whether the given failure should be retried at this attempt count.
    pub fn should_retry(&self, error: &FetchError, attempt: u32) -> bool {
        if attempt >= self.max_retries {
            return false;
        }
        match error {
            FetchError::Http { status, .. } => (500..600).contains(status),
            FetchError::Timeout(_) | FetchError::Connection(_) => true,
            FetchError::Decode(_) | FetchError::Request(_) => false,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(1)
    }
}
