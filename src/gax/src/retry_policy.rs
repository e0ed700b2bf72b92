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

//! Defines traits for retry policies and some common implementations.
//!
//! The client libraries automatically retry requests that fail with transient
//! errors, as long as retrying is safe. Requests that change state in the
//! service are only retried if they are idempotent, for example, because they
//! include an `opc-retry-token` header.
//!
//! The retry policy decides which errors are transient, and when the retry
//! loop gives up. Applications can configure the policy for all requests in a
//! client, or for a single request.
//!
//! # Example
//! ```
//! # use oci_gax::retry_policy::*;
//! use std::time::Duration;
//! let policy = DefaultRetryable
//!     .with_attempt_limit(3)
//!     .with_time_limit(Duration::from_secs(10));
//! ```

use crate::error::Error;
use crate::error::rpc::Code;
use crate::retry_result::RetryResult;
use crate::throttle_result::ThrottleResult;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// The maximum number of attempts used by the default client policy.
pub const DEFAULT_MAXIMUM_ATTEMPTS: u32 = 8;

/// The maximum elapsed time used by the default client policy.
pub const DEFAULT_MAXIMUM_DURATION: Duration = Duration::from_secs(600);

/// Determines how errors are handled in the retry loop.
///
/// Implementations of this trait determine if errors are retryable, and for
/// how long the retry loop may continue.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts. This includes the initial
    ///   attempt. This method is called after the first attempt, so the
    ///   value is always non-zero.
    /// * `idempotent` - if `true` assume the operation is idempotent.
    /// * `error` - the last error when attempting the request.
    fn on_error(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult;

    /// Query the retry policy after a retry attempt is throttled.
    ///
    /// The default implementation continues the loop. Policies that limit the
    /// loop duration stop it when their limits are reached.
    fn on_throttle(
        &self,
        _loop_start: Instant,
        _attempt_count: u32,
        error: Error,
    ) -> ThrottleResult {
        ThrottleResult::Continue(error)
    }

    /// The remaining time in the retry policy.
    ///
    /// For policies based on elapsed time this is the remaining time. For
    /// other policies this is `None`.
    fn remaining_time(&self, _loop_start: Instant, _attempt_count: u32) -> Option<Duration> {
        None
    }
}

/// A helper type to use [RetryPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct RetryPolicyArg(pub(crate) Arc<dyn RetryPolicy>);

impl<T: RetryPolicy + 'static> From<T> for RetryPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Self {
        value.0
    }
}

/// Extension trait for [RetryPolicy].
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Decorate a [RetryPolicy] to limit the total elapsed time in the retry loop.
    ///
    /// # Example
    /// ```
    /// # use oci_gax::retry_policy::*;
    /// let policy = DefaultRetryable.with_time_limit(std::time::Duration::from_secs(30));
    /// ```
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a [RetryPolicy] to limit the number of attempts.
    ///
    /// # Example
    /// ```
    /// # use oci_gax::retry_policy::*;
    /// let policy = DefaultRetryable.with_attempt_limit(5);
    /// ```
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: RetryPolicy> RetryPolicyExt for T {}

/// Returns the policy used by clients when the application does not set one.
///
/// The policy retries [DefaultRetryable] errors, stopping after
/// [DEFAULT_MAXIMUM_ATTEMPTS] attempts or [DEFAULT_MAXIMUM_DURATION],
/// whichever comes first.
pub fn default_policy() -> Arc<dyn RetryPolicy> {
    Arc::new(
        DefaultRetryable
            .with_attempt_limit(DEFAULT_MAXIMUM_ATTEMPTS)
            .with_time_limit(DEFAULT_MAXIMUM_DURATION),
    )
}

/// Retries the errors OCI services document as transient.
///
/// For idempotent requests this policy retries:
/// - errors sending the request or receiving the response,
/// - timeouts,
/// - `409` responses with the `IncorrectState` code,
/// - `429` (too many requests) responses,
/// - `5xx` responses, other than `501` (not implemented).
///
/// For all requests it retries transient problems creating the authentication
/// headers, as the request was never sent.
///
/// This policy does not limit the number of attempts or their duration.
#[derive(Clone, Debug)]
pub struct DefaultRetryable;

impl DefaultRetryable {
    fn is_retryable(error: &Error) -> bool {
        if error.is_io() || error.is_timeout() {
            return true;
        }
        if let Some(status) = error.status() {
            match status.code {
                Code::IncorrectState if error.http_status_code() == Some(409) => return true,
                Code::TooManyRequests | Code::ServiceUnavailable => return true,
                _ => {}
            }
        }
        match error.http_status_code() {
            Some(429) => true,
            Some(501) => false,
            Some(code) => code >= 500,
            None => false,
        }
    }
}

impl RetryPolicy for DefaultRetryable {
    fn on_error(&self, _: Instant, _: u32, idempotent: bool, error: Error) -> RetryResult {
        if error.is_transient_and_before_rpc() {
            return RetryResult::Continue(error);
        }
        if idempotent && Self::is_retryable(&error) {
            return RetryResult::Continue(error);
        }
        RetryResult::Permanent(error)
    }
}

/// A retry policy that retries all errors.
///
/// This policy must be decorated to limit the number of retry attempts or the
/// duration of the retry loop. Idempotency is ignored.
#[derive(Clone, Debug)]
pub struct AlwaysRetry;

impl RetryPolicy for AlwaysRetry {
    fn on_error(&self, _: Instant, _: u32, _: bool, error: Error) -> RetryResult {
        RetryResult::Continue(error)
    }
}

/// A retry policy that never retries.
#[derive(Clone, Debug)]
pub struct NeverRetry;

impl RetryPolicy for NeverRetry {
    fn on_error(&self, _: Instant, _: u32, _: bool, error: Error) -> RetryResult {
        RetryResult::Exhausted(error)
    }
}

/// A retry policy decorator that limits the total time in the retry loop.
///
/// # Example
/// ```
/// # use oci_gax::retry_policy::*;
/// let policy = LimitedElapsedTime::new(std::time::Duration::from_secs(10));
/// ```
#[derive(Debug)]
pub struct LimitedElapsedTime<P = DefaultRetryable>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Creates a new instance, decorating [DefaultRetryable].
    pub fn new(maximum_duration: Duration) -> Self {
        Self::custom(DefaultRetryable, maximum_duration)
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn error_if_exhausted(&self, loop_start: Instant, error: Error) -> ThrottleResult {
        let deadline = loop_start + self.maximum_duration;
        let now = Instant::now();
        if now < deadline {
            ThrottleResult::Continue(error)
        } else {
            ThrottleResult::Exhausted(Error::exhausted(Exhausted::new(
                error,
                "elapsed time",
                format!("{:?}", now.saturating_duration_since(loop_start)),
                format!("{:?}", self.maximum_duration),
            )))
        }
    }
}

impl<P> RetryPolicy for LimitedElapsedTime<P>
where
    P: RetryPolicy + 'static,
{
    fn on_error(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self
            .inner
            .on_error(loop_start, attempt_count, idempotent, error)
        {
            RetryResult::Continue(e) => match self.error_if_exhausted(loop_start, e) {
                ThrottleResult::Continue(e) => RetryResult::Continue(e),
                ThrottleResult::Exhausted(e) => RetryResult::Exhausted(e),
            },
            other => other,
        }
    }

    fn on_throttle(&self, loop_start: Instant, attempt_count: u32, error: Error) -> ThrottleResult {
        match self.inner.on_throttle(loop_start, attempt_count, error) {
            ThrottleResult::Continue(e) => self.error_if_exhausted(loop_start, e),
            e @ ThrottleResult::Exhausted(_) => e,
        }
    }

    fn remaining_time(&self, loop_start: Instant, attempt_count: u32) -> Option<Duration> {
        let deadline = loop_start + self.maximum_duration;
        let remaining = deadline.saturating_duration_since(Instant::now());
        match self.inner.remaining_time(loop_start, attempt_count) {
            Some(inner) => Some(std::cmp::min(remaining, inner)),
            None => Some(remaining),
        }
    }
}

/// A retry policy decorator that limits the number of attempts.
///
/// # Example
/// ```
/// # use oci_gax::retry_policy::*;
/// let policy = LimitedAttemptCount::new(4);
/// ```
#[derive(Debug)]
pub struct LimitedAttemptCount<P = DefaultRetryable>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a new instance, decorating [DefaultRetryable].
    pub fn new(maximum_attempts: u32) -> Self {
        Self::custom(DefaultRetryable, maximum_attempts)
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    fn on_error(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self
            .inner
            .on_error(loop_start, attempt_count, idempotent, error)
        {
            RetryResult::Continue(e) if attempt_count >= self.maximum_attempts => {
                RetryResult::Exhausted(Error::exhausted(Exhausted::new(
                    e,
                    "attempt count",
                    attempt_count.to_string(),
                    self.maximum_attempts.to_string(),
                )))
            }
            other => other,
        }
    }

    fn on_throttle(&self, loop_start: Instant, attempt_count: u32, error: Error) -> ThrottleResult {
        if attempt_count >= self.maximum_attempts {
            return ThrottleResult::Exhausted(error);
        }
        self.inner.on_throttle(loop_start, attempt_count, error)
    }

    fn remaining_time(&self, loop_start: Instant, attempt_count: u32) -> Option<Duration> {
        self.inner.remaining_time(loop_start, attempt_count)
    }
}

/// The error returned when a policy limit stops a loop.
///
/// The source is the last error observed in the loop.
#[derive(Debug)]
pub struct Exhausted {
    last: Error,
    limit_name: &'static str,
    value: String,
    limit: String,
}

impl Exhausted {
    pub(crate) fn new(last: Error, limit_name: &'static str, value: String, limit: String) -> Self {
        Self {
            last,
            limit_name,
            value,
            limit,
        }
    }
}

impl std::fmt::Display for Exhausted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "retry policy is exhausted on {}, the value ({}) exceeds the limit ({}). The last error was: {}",
            self.limit_name, self.value, self.limit, self.last
        )
    }
}

impl std::error::Error for Exhausted {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.last)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::CredentialsError;
    use crate::error::rpc::Status;
    use http::HeaderMap;
    use std::error::Error as _;
    use test_case::test_case;

    pub(crate) fn from_status(code: Code, http_status: u16) -> Error {
        Error::service_with_http_metadata(
            Status::default().set_code(code).set_message("test-only"),
            Some(http_status),
            None,
        )
    }

    fn http_error(code: u16) -> Error {
        Error::http(code, HeaderMap::new(), bytes::Bytes::from_static(b"test-only"))
    }

    #[test_case(Error::io("err"))]
    #[test_case(Error::timeout("err"))]
    #[test_case(from_status(Code::IncorrectState, 409))]
    #[test_case(from_status(Code::TooManyRequests, 429))]
    #[test_case(from_status(Code::InternalServerError, 500))]
    #[test_case(from_status(Code::ServiceUnavailable, 503))]
    #[test_case(http_error(502))]
    #[test_case(http_error(504))]
    fn default_retryable_transient(error: Error) {
        let p = DefaultRetryable;
        let now = Instant::now();
        let got = p.on_error(now, 1, true, error);
        assert!(got.is_continue(), "{got:?}");
    }

    #[test_case(from_status(Code::NotAuthorizedOrNotFound, 404))]
    #[test_case(from_status(Code::InvalidParameter, 400))]
    #[test_case(from_status(Code::Conflict, 409))]
    #[test_case(from_status(Code::IncorrectState, 400))]
    #[test_case(from_status(Code::NoEtagMatch, 412))]
    #[test_case(http_error(501))]
    #[test_case(http_error(400))]
    #[test_case(Error::ser("err"))]
    #[test_case(Error::binding("err"))]
    fn default_retryable_permanent(error: Error) {
        let p = DefaultRetryable;
        let now = Instant::now();
        let got = p.on_error(now, 1, true, error);
        assert!(got.is_permanent(), "{got:?}");
    }

    #[test]
    fn default_retryable_not_idempotent() {
        let p = DefaultRetryable;
        let now = Instant::now();
        let got = p.on_error(now, 1, false, Error::io("err"));
        assert!(got.is_permanent(), "{got:?}");
        let got = p.on_error(now, 1, false, from_status(Code::TooManyRequests, 429));
        assert!(got.is_permanent(), "{got:?}");

        let auth = Error::authentication(CredentialsError::from_msg(true, "err"));
        let got = p.on_error(now, 1, false, auth);
        assert!(got.is_continue(), "{got:?}");
        let auth = Error::authentication(CredentialsError::from_msg(false, "err"));
        let got = p.on_error(now, 1, false, auth);
        assert!(got.is_permanent(), "{got:?}");
    }

    #[test]
    fn always_and_never() {
        let now = Instant::now();
        let got = AlwaysRetry.on_error(now, 1, false, Error::binding("err"));
        assert!(got.is_continue(), "{got:?}");
        let got = NeverRetry.on_error(now, 1, true, Error::io("err"));
        assert!(got.is_exhausted(), "{got:?}");
        assert!(AlwaysRetry.remaining_time(now, 1).is_none());
    }

    #[test]
    fn limited_attempt_count() {
        let p = LimitedAttemptCount::new(3);
        let now = Instant::now();
        let got = p.on_error(now, 1, true, Error::io("err"));
        assert!(got.is_continue(), "{got:?}");
        let got = p.on_error(now, 2, true, Error::io("err"));
        assert!(got.is_continue(), "{got:?}");
        let got = p.on_error(now, 3, true, Error::io("err"));
        assert!(got.is_exhausted(), "{got:?}");
        let err = got.into_error();
        assert!(err.is_exhausted(), "{err:?}");
        assert!(err.source().is_some(), "{err:?}");
        assert!(err.to_string().contains("attempt count"), "{err}");

        let got = p.on_error(now, 1, true, Error::binding("err"));
        assert!(got.is_permanent(), "{got:?}");
    }

    #[test]
    fn limited_attempt_count_throttle() {
        let p = AlwaysRetry.with_attempt_limit(3);
        let now = Instant::now();
        let got = p.on_throttle(now, 2, Error::io("err"));
        assert!(matches!(got, ThrottleResult::Continue(_)), "{got:?}");
        let got = p.on_throttle(now, 3, Error::io("err"));
        assert!(matches!(got, ThrottleResult::Exhausted(_)), "{got:?}");
    }

    #[test]
    fn limited_elapsed_time() {
        let p = LimitedElapsedTime::new(Duration::from_secs(10));
        let now = Instant::now();
        let got = p.on_error(now, 1, true, Error::io("err"));
        assert!(got.is_continue(), "{got:?}");

        let start = now - Duration::from_secs(20);
        let got = p.on_error(start, 1, true, Error::io("err"));
        assert!(got.is_exhausted(), "{got:?}");
        let err = got.into_error();
        assert!(err.to_string().contains("elapsed time"), "{err}");

        let got = p.on_error(now, 1, true, Error::binding("err"));
        assert!(got.is_permanent(), "{got:?}");

        let got = p.on_throttle(start, 1, Error::io("err"));
        assert!(matches!(got, ThrottleResult::Exhausted(_)), "{got:?}");
    }

    #[test]
    fn limited_elapsed_time_remaining() {
        let p = AlwaysRetry.with_time_limit(Duration::from_secs(60));
        let now = Instant::now();
        let got = p.remaining_time(now, 1);
        assert!(
            got.is_some_and(|d| d <= Duration::from_secs(60) && d > Duration::from_secs(50)),
            "{got:?}"
        );
        let got = p.remaining_time(now - Duration::from_secs(120), 1);
        assert_eq!(got, Some(Duration::ZERO));

        let p = AlwaysRetry
            .with_time_limit(Duration::from_secs(10))
            .with_time_limit(Duration::from_secs(60));
        let got = p.remaining_time(now, 1);
        assert!(got.is_some_and(|d| d <= Duration::from_secs(10)), "{got:?}");
    }

    #[test]
    fn default_policy_limits() {
        let p = default_policy();
        let now = Instant::now();
        let got = p.on_error(now, 1, true, Error::io("err"));
        assert!(got.is_continue(), "{got:?}");
        let got = p.on_error(now, DEFAULT_MAXIMUM_ATTEMPTS, true, Error::io("err"));
        assert!(got.is_exhausted(), "{got:?}");
        let got = p.remaining_time(now, 1);
        assert!(got.is_some_and(|d| d <= DEFAULT_MAXIMUM_DURATION), "{got:?}");
    }

    #[test]
    fn retry_policy_arg() {
        let _ = RetryPolicyArg::from(DefaultRetryable);
        let policy: Arc<dyn RetryPolicy> = Arc::new(NeverRetry);
        let arg = RetryPolicyArg::from(policy);
        let _: Arc<dyn RetryPolicy> = arg.into();
    }
}
