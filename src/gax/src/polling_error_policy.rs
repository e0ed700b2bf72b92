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

//! Defines the trait for polling error policies and some common
//! implementations.
//!
//! Work requests are polled until they complete. The polling error policy
//! decides which errors during polling are transient, and how long the
//! application is willing to wait for the work request to complete.
//!
//! # Example
//! ```
//! # use oci_gax::polling_error_policy::*;
//! use std::time::Duration;
//! let policy = DefaultTransient.with_time_limit(Duration::from_secs(30 * 60));
//! ```

use crate::error::Error;
use crate::error::rpc::Code;
use crate::polling_state::PollingState;
use crate::retry_result::RetryResult;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Determines how errors are handled in the polling loop.
pub trait PollingErrorPolicy: Send + Sync + std::fmt::Debug {
    /// Query the polling policy after an error.
    ///
    /// Polling requests only read state, any error the policy considers
    /// transient may be retried.
    fn on_error(&self, state: &PollingState, error: Error) -> RetryResult;

    /// Called when the work request is still in progress.
    ///
    /// Returns an error to stop the polling loop, or `None` to continue.
    fn on_in_progress(&self, _state: &PollingState, _work_request_id: &str) -> Option<Error> {
        None
    }
}

/// A helper type to use [PollingErrorPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct PollingErrorPolicyArg(pub(crate) Arc<dyn PollingErrorPolicy>);

impl<T: PollingErrorPolicy + 'static> From<T> for PollingErrorPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn PollingErrorPolicy>> for PollingErrorPolicyArg {
    fn from(value: Arc<dyn PollingErrorPolicy>) -> Self {
        Self(value)
    }
}

impl From<PollingErrorPolicyArg> for Arc<dyn PollingErrorPolicy> {
    fn from(value: PollingErrorPolicyArg) -> Self {
        value.0
    }
}

/// Extension trait for [PollingErrorPolicy].
pub trait PollingErrorPolicyExt: PollingErrorPolicy + Sized {
    /// Decorate a policy to limit the total time in the polling loop.
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a policy to limit the number of polling attempts.
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: PollingErrorPolicy> PollingErrorPolicyExt for T {}

/// Continues polling on transient errors.
///
/// Errors sending the request, timeouts, `429`, and `503` responses are
/// transient. Transient problems creating the authentication headers are
/// transient too.
#[derive(Clone, Debug)]
pub struct DefaultTransient;

impl PollingErrorPolicy for DefaultTransient {
    fn on_error(&self, _state: &PollingState, error: Error) -> RetryResult {
        if error.is_transient_and_before_rpc() || error.is_io() || error.is_timeout() {
            return RetryResult::Continue(error);
        }
        if let Some(status) = error.status() {
            if matches!(
                status.code,
                Code::TooManyRequests | Code::ServiceUnavailable
            ) {
                return RetryResult::Continue(error);
            }
        }
        match error.http_status_code() {
            Some(429) | Some(503) => RetryResult::Continue(error),
            _ => RetryResult::Permanent(error),
        }
    }
}

/// Continues polling on all errors.
///
/// This policy must be decorated to limit the polling loop.
#[derive(Clone, Debug)]
pub struct AlwaysContinue;

impl PollingErrorPolicy for AlwaysContinue {
    fn on_error(&self, _state: &PollingState, error: Error) -> RetryResult {
        RetryResult::Continue(error)
    }
}

/// A polling policy decorator that limits the total time in the polling loop.
#[derive(Debug)]
pub struct LimitedElapsedTime<P = DefaultTransient>
where
    P: PollingErrorPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Creates a new instance, decorating [DefaultTransient].
    pub fn new(maximum_duration: Duration) -> Self {
        Self::custom(DefaultTransient, maximum_duration)
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: PollingErrorPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn is_expired(&self, loop_start: Instant) -> bool {
        Instant::now() >= loop_start + self.maximum_duration
    }
}

impl<P> PollingErrorPolicy for LimitedElapsedTime<P>
where
    P: PollingErrorPolicy,
{
    fn on_error(&self, state: &PollingState, error: Error) -> RetryResult {
        match self.inner.on_error(state, error) {
            RetryResult::Continue(e) if self.is_expired(state.loop_start) => {
                RetryResult::Exhausted(e)
            }
            other => other,
        }
    }

    fn on_in_progress(&self, state: &PollingState, work_request_id: &str) -> Option<Error> {
        self.inner
            .on_in_progress(state, work_request_id)
            .or_else(|| {
                if !self.is_expired(state.loop_start) {
                    return None;
                }
                Some(Error::exhausted(PollingExhausted::new(
                    work_request_id,
                    "elapsed time",
                    format!("{:?}", state.loop_start.elapsed()),
                    format!("{:?}", self.maximum_duration),
                )))
            })
    }
}

/// A polling policy decorator that limits the number of polling attempts.
#[derive(Debug)]
pub struct LimitedAttemptCount<P = DefaultTransient>
where
    P: PollingErrorPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a new instance, decorating [DefaultTransient].
    pub fn new(maximum_attempts: u32) -> Self {
        Self::custom(DefaultTransient, maximum_attempts)
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: PollingErrorPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> PollingErrorPolicy for LimitedAttemptCount<P>
where
    P: PollingErrorPolicy,
{
    fn on_error(&self, state: &PollingState, error: Error) -> RetryResult {
        match self.inner.on_error(state, error) {
            RetryResult::Continue(e) if state.attempt_count >= self.maximum_attempts => {
                RetryResult::Exhausted(e)
            }
            other => other,
        }
    }

    fn on_in_progress(&self, state: &PollingState, work_request_id: &str) -> Option<Error> {
        self.inner
            .on_in_progress(state, work_request_id)
            .or_else(|| {
                if state.attempt_count < self.maximum_attempts {
                    return None;
                }
                Some(Error::exhausted(PollingExhausted::new(
                    work_request_id,
                    "attempt count",
                    state.attempt_count.to_string(),
                    self.maximum_attempts.to_string(),
                )))
            })
    }
}

/// The error returned when a polling policy stops an in-progress loop.
#[derive(Debug)]
pub struct PollingExhausted {
    work_request_id: String,
    limit_name: &'static str,
    value: String,
    limit: String,
}

impl PollingExhausted {
    fn new(work_request_id: &str, limit_name: &'static str, value: String, limit: String) -> Self {
        Self {
            work_request_id: work_request_id.to_string(),
            limit_name,
            value,
            limit,
        }
    }

    /// The id of the work request that did not complete.
    pub fn work_request_id(&self) -> &str {
        &self.work_request_id
    }
}

impl std::fmt::Display for PollingExhausted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "polling loop for work request {} exhausted on {}, the value ({}) exceeds the limit ({})",
            self.work_request_id, self.limit_name, self.value, self.limit
        )
    }
}

impl std::error::Error for PollingExhausted {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry_policy::tests::from_status;
    use std::error::Error as _;
    use test_case::test_case;

    #[test_case(Error::io("err"))]
    #[test_case(Error::timeout("err"))]
    #[test_case(from_status(Code::TooManyRequests, 429))]
    #[test_case(from_status(Code::ServiceUnavailable, 503))]
    fn default_transient_continue(error: Error) {
        let got = DefaultTransient.on_error(&PollingState::default(), error);
        assert!(got.is_continue(), "{got:?}");
    }

    #[test_case(from_status(Code::NotAuthorizedOrNotFound, 404))]
    #[test_case(from_status(Code::InternalServerError, 500))]
    #[test_case(Error::deser("err"))]
    fn default_transient_permanent(error: Error) {
        let got = DefaultTransient.on_error(&PollingState::default(), error);
        assert!(got.is_permanent(), "{got:?}");
    }

    #[test]
    fn always_continue() {
        let got = AlwaysContinue.on_error(&PollingState::default(), Error::deser("err"));
        assert!(got.is_continue(), "{got:?}");
        assert!(
            AlwaysContinue
                .on_in_progress(&PollingState::default(), "wr-123")
                .is_none()
        );
    }

    #[test]
    fn limited_attempt_count() {
        let policy = AlwaysContinue.with_attempt_limit(3);
        let state = PollingState::default().with_attempt_count(2);
        let got = policy.on_error(&state, Error::io("err"));
        assert!(got.is_continue(), "{got:?}");
        assert!(policy.on_in_progress(&state, "wr-123").is_none());

        let state = PollingState::default().with_attempt_count(3);
        let got = policy.on_error(&state, Error::io("err"));
        assert!(got.is_exhausted(), "{got:?}");
        let got = policy.on_in_progress(&state, "wr-123");
        let err = got.expect("policy should be exhausted");
        assert!(err.is_exhausted(), "{err:?}");
        let source = err
            .source()
            .and_then(|e| e.downcast_ref::<PollingExhausted>());
        assert_eq!(source.map(|e| e.work_request_id()), Some("wr-123"));
    }

    #[test]
    fn limited_elapsed_time() {
        let policy = LimitedElapsedTime::new(Duration::from_secs(60));
        let state = PollingState::default();
        let got = policy.on_error(&state, Error::io("err"));
        assert!(got.is_continue(), "{got:?}");
        assert!(policy.on_in_progress(&state, "wr-123").is_none());

        let state = PollingState::new(Instant::now() - Duration::from_secs(120));
        let got = policy.on_error(&state, Error::io("err"));
        assert!(got.is_exhausted(), "{got:?}");
        let got = policy.on_in_progress(&state, "wr-123");
        assert!(got.is_some_and(|e| e.to_string().contains("elapsed time")));

        let got = policy.on_error(&state, Error::deser("err"));
        assert!(got.is_permanent(), "{got:?}");
    }
}
