// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Throttle retry attempts across all the requests of a client.
//!
//! A retry policy decides if a single request may be retried. When a service
//! is overloaded, many requests in the same client may fail at once, and
//! retrying all of them makes the problem worse. A retry throttler tracks the
//! outcome of recent requests and rejects retry attempts when too many fail.
//!
//! Throttled attempts are not sent. The retry loop consults the retry policy
//! (see [RetryPolicy::on_throttle]) and then waits as if the attempt failed.
//!
//! [RetryPolicy::on_throttle]: crate::retry_policy::RetryPolicy::on_throttle

use crate::retry_result::RetryResult;
use std::sync::{Arc, Mutex};

/// The error returned when a throttler is misconfigured.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("the scaling factor ({0}) must be greater or equal than 0.0")]
    ScalingOutOfRange(f64),
    #[error(
        "the minimum tokens ({min}) must be less than or equal to the initial token ({initial}) count"
    )]
    TooFewMinTokens { min: u64, initial: u64 },
}

/// Implementations of this trait decide if a retry attempt is sent.
pub trait RetryThrottler: Send + Sync + std::fmt::Debug {
    /// Returns true if the next retry attempt should be skipped.
    fn throttle_retry_attempt(&self) -> bool;

    /// Called after a failed attempt, with the retry policy decision.
    fn on_retry_failure(&mut self, flow: &RetryResult);

    /// Called after a successful attempt.
    fn on_success(&mut self);
}

/// Retry throttlers are shared by all the requests in a client.
pub type SharedRetryThrottler = Arc<Mutex<dyn RetryThrottler>>;

/// A helper type to use [RetryThrottler] in client and request options.
#[derive(Clone, Debug)]
pub struct RetryThrottlerArg(pub(crate) SharedRetryThrottler);

impl<T: RetryThrottler + 'static> From<T> for RetryThrottlerArg {
    fn from(value: T) -> Self {
        Self(Arc::new(Mutex::new(value)))
    }
}

impl From<SharedRetryThrottler> for RetryThrottlerArg {
    fn from(value: SharedRetryThrottler) -> Self {
        Self(value)
    }
}

impl From<RetryThrottlerArg> for SharedRetryThrottler {
    fn from(value: RetryThrottlerArg) -> Self {
        value.0
    }
}

/// Rejects retry attempts with a probability based on recent failures.
///
/// The throttler counts all requests (`r`) and the requests accepted by the
/// service (`a`). A retry attempt is rejected with probability
/// `max(0, (r - factor * a) / (r + 1))`. Permanent errors count as accepted
/// requests, the service processed them.
///
/// # Example
/// ```
/// # use oci_gax::retry_throttler::*;
/// let throttler = AdaptiveThrottler::new(2.0)?;
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct AdaptiveThrottler {
    accept_count: f64,
    request_count: f64,
    factor: f64,
}

impl AdaptiveThrottler {
    /// Creates a new throttler, validating the factor.
    pub fn new(factor: f64) -> Result<Self, Error> {
        if factor < 0.0 {
            return Err(Error::ScalingOutOfRange(factor));
        }
        Ok(Self::clamp(factor))
    }

    /// Creates a new throttler, clamping the factor to a valid value.
    pub fn clamp(factor: f64) -> Self {
        Self {
            accept_count: 0.0,
            request_count: 0.0,
            factor: factor.max(0.0),
        }
    }

    fn reject_probability(&self) -> f64 {
        let p = (self.request_count - self.factor * self.accept_count) / (self.request_count + 1.0);
        p.max(0.0)
    }
}

impl Default for AdaptiveThrottler {
    fn default() -> Self {
        Self::clamp(2.0)
    }
}

impl RetryThrottler for AdaptiveThrottler {
    fn throttle_retry_attempt(&self) -> bool {
        let p = self.reject_probability();
        p > 0.0 && rand::random_range(0.0..=1.0) <= p
    }

    fn on_retry_failure(&mut self, flow: &RetryResult) {
        self.request_count += 1.0;
        if flow.is_permanent() {
            self.accept_count += 1.0;
        }
    }

    fn on_success(&mut self) {
        self.request_count += 1.0;
        self.accept_count += 1.0;
    }
}

/// Rejects all retry attempts once the error budget is depleted.
///
/// The throttler starts with `tokens`. Each transient failure consumes
/// `error_cost` tokens, each success adds one token. Retry attempts are
/// rejected while the token count is at or below `min_tokens`.
///
/// # Example
/// ```
/// # use oci_gax::retry_throttler::*;
/// let throttler = CircuitBreaker::new(1000, 250, 10)?;
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct CircuitBreaker {
    max_tokens: u64,
    min_tokens: u64,
    cur_tokens: u64,
    error_cost: u64,
}

impl CircuitBreaker {
    /// Creates a new circuit breaker, validating the parameters.
    pub fn new(tokens: u64, min_tokens: u64, error_cost: u64) -> Result<Self, Error> {
        if min_tokens > tokens {
            return Err(Error::TooFewMinTokens {
                min: min_tokens,
                initial: tokens,
            });
        }
        Ok(Self::clamp(tokens, min_tokens, error_cost))
    }

    /// Creates a new circuit breaker, clamping `min_tokens` to `tokens`.
    pub fn clamp(tokens: u64, min_tokens: u64, error_cost: u64) -> Self {
        Self {
            max_tokens: tokens,
            min_tokens: std::cmp::min(min_tokens, tokens),
            cur_tokens: tokens,
            error_cost,
        }
    }
}

impl Default for CircuitBreaker {
    fn default() -> Self {
        Self::clamp(100, 50, 10)
    }
}

impl RetryThrottler for CircuitBreaker {
    fn throttle_retry_attempt(&self) -> bool {
        self.cur_tokens <= self.min_tokens
    }

    fn on_retry_failure(&mut self, flow: &RetryResult) {
        if flow.is_permanent() {
            return self.on_success();
        }
        self.cur_tokens = self.cur_tokens.saturating_sub(self.error_cost);
    }

    fn on_success(&mut self) {
        self.cur_tokens = std::cmp::min(self.max_tokens, self.cur_tokens.saturating_add(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error as GaxError;

    fn transient() -> RetryResult {
        RetryResult::Continue(GaxError::io("test-only"))
    }

    fn permanent() -> RetryResult {
        RetryResult::Permanent(GaxError::binding("test-only"))
    }

    #[test]
    fn retry_throttler_arg() {
        let _ = RetryThrottlerArg::from(AdaptiveThrottler::default());
        let throttler: SharedRetryThrottler = Arc::new(Mutex::new(CircuitBreaker::default()));
        let arg = RetryThrottlerArg::from(throttler);
        let _: SharedRetryThrottler = arg.into();
    }

    #[test]
    fn adaptive_construction() {
        let got = AdaptiveThrottler::new(-2.0);
        assert!(matches!(got, Err(Error::ScalingOutOfRange(_))), "{got:?}");
        let got = AdaptiveThrottler::new(0.0);
        assert!(got.is_ok(), "{got:?}");
        let got = AdaptiveThrottler::clamp(-2.0);
        assert_eq!(got.factor, 0.0);
    }

    #[test]
    fn adaptive_new_never_throttles() {
        let throttler = AdaptiveThrottler::default();
        assert_eq!(throttler.reject_probability(), 0.0);
        assert!(!throttler.throttle_retry_attempt(), "{throttler:?}");
    }

    #[test]
    fn adaptive_probability() {
        let mut throttler = AdaptiveThrottler::default();
        for _ in 0..3 {
            throttler.on_retry_failure(&transient());
        }
        // (3 - 2 * 0) / (3 + 1)
        assert_eq!(throttler.reject_probability(), 0.75);

        throttler.on_success();
        // (4 - 2 * 1) / (4 + 1)
        assert_eq!(throttler.reject_probability(), 0.4);

        throttler.on_retry_failure(&permanent());
        // (5 - 2 * 2) / (5 + 1)
        assert_eq!(throttler.reject_probability(), 1.0 / 6.0);

        throttler.on_success();
        throttler.on_success();
        assert_eq!(throttler.reject_probability(), 0.0);
        assert!(!throttler.throttle_retry_attempt(), "{throttler:?}");
    }

    #[test]
    fn circuit_breaker_construction() {
        let got = CircuitBreaker::new(10, 20, 1);
        assert!(matches!(got, Err(Error::TooFewMinTokens { .. })), "{got:?}");
        let got = CircuitBreaker::clamp(10, 20, 1);
        assert_eq!(got.min_tokens, 10);
        assert!(got.throttle_retry_attempt(), "{got:?}");
    }

    #[test]
    fn circuit_breaker() -> anyhow::Result<()> {
        let mut throttler = CircuitBreaker::new(100, 80, 10)?;
        assert!(!throttler.throttle_retry_attempt(), "{throttler:?}");

        throttler.on_retry_failure(&transient());
        assert_eq!(throttler.cur_tokens, 90);
        assert!(!throttler.throttle_retry_attempt(), "{throttler:?}");

        throttler.on_retry_failure(&RetryResult::Exhausted(GaxError::io("test-only")));
        assert_eq!(throttler.cur_tokens, 80);
        assert!(throttler.throttle_retry_attempt(), "{throttler:?}");

        throttler.on_retry_failure(&permanent());
        assert_eq!(throttler.cur_tokens, 81);
        assert!(!throttler.throttle_retry_attempt(), "{throttler:?}");

        for _ in 0..100 {
            throttler.on_success();
        }
        assert_eq!(throttler.cur_tokens, 100);
        Ok(())
    }
}
