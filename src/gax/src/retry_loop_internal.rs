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

//! The retry loop shared by all client libraries.
//!
//! Not part of the public API, subject to change without notice.

use crate::Result;
use crate::backoff_policy::BackoffPolicy;
use crate::error::Error;
use crate::options::RequestOptions;
use crate::retry_policy::RetryPolicy;
use crate::retry_result::RetryResult;
use crate::retry_throttler::{RetryThrottler, SharedRetryThrottler};
use crate::throttle_result::ThrottleResult;
use std::sync::{Arc, MutexGuard, PoisonError};
use std::time::Duration;

/// Runs `inner` until it succeeds, or the retry policy stops the loop.
///
/// `inner` receives the remaining time in the retry policy, if any, and
/// should use it to cap the attempt timeout.
pub async fn retry_loop<F, S, Response>(
    inner: F,
    sleep: S,
    idempotent: bool,
    retry_throttler: SharedRetryThrottler,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
) -> Result<Response>
where
    F: AsyncFnMut(Option<Duration>) -> Result<Response> + Send,
    S: AsyncFn(Duration) -> () + Send,
{
    retry_loop_with_callback(
        inner,
        sleep,
        idempotent,
        retry_throttler,
        retry_policy,
        backoff_policy,
        |_, _, _| {},
    )
    .await
}

/// Same as [retry_loop], calling `on_retry` before each retry attempt.
///
/// The callback receives the number of attempts so far, the last error, and
/// the delay before the next attempt.
pub async fn retry_loop_with_callback<F, S, OnRetry, Response>(
    mut inner: F,
    sleep: S,
    idempotent: bool,
    retry_throttler: SharedRetryThrottler,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
    mut on_retry: OnRetry,
) -> Result<Response>
where
    F: AsyncFnMut(Option<Duration>) -> Result<Response> + Send,
    S: AsyncFn(Duration) -> () + Send,
    OnRetry: FnMut(u32, &Error, Duration) + Send,
{
    let loop_start = tokio::time::Instant::now().into_std();
    let mut attempt_count = 0_u32;
    let mut pending: Option<(Duration, Error)> = None;
    loop {
        let remaining_time = retry_policy.remaining_time(loop_start, attempt_count);
        if let Some((delay, error)) = pending.take() {
            if remaining_time.is_some_and(|remaining| remaining < delay) {
                return Err(Error::exhausted(error));
            }
            on_retry(attempt_count, &error, delay);
            sleep(delay).await;
            if lock(&retry_throttler).throttle_retry_attempt() {
                // A throttled attempt counts as a failure for the retry policy.
                let error = match retry_policy.on_throttle(loop_start, attempt_count, error) {
                    ThrottleResult::Exhausted(e) => return Err(e),
                    ThrottleResult::Continue(e) => e,
                };
                let delay = backoff_policy.on_failure(loop_start, attempt_count);
                pending = Some((delay, error));
                continue;
            }
        }
        attempt_count += 1;
        let error = match inner(remaining_time).await {
            Ok(response) => {
                lock(&retry_throttler).on_success();
                return Ok(response);
            }
            Err(e) => e,
        };
        let flow = retry_policy.on_error(loop_start, attempt_count, idempotent, error);
        let delay = backoff_policy.on_failure(loop_start, attempt_count);
        lock(&retry_throttler).on_retry_failure(&flow);
        match flow {
            RetryResult::Permanent(e) | RetryResult::Exhausted(e) => return Err(e),
            RetryResult::Continue(e) => pending = Some((delay, e)),
        }
    }
}

/// Computes the timeout for a single attempt.
///
/// This is the minimum of the attempt timeout in the request options and the
/// remaining time in the retry policy.
pub fn effective_timeout(
    options: &RequestOptions,
    remaining_time: Option<Duration>,
) -> Option<Duration> {
    match (options.attempt_timeout(), remaining_time) {
        (None, None) => None,
        (None, Some(t)) => Some(t),
        (Some(t), None) => Some(*t),
        (Some(a), Some(r)) => Some(std::cmp::min(*a, r)),
    }
}

fn lock(throttler: &SharedRetryThrottler) -> MutexGuard<'_, dyn RetryThrottler + 'static> {
    throttler.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::{Code, Status};
    use std::sync::Mutex;
    use test_case::test_case;

    #[test_case(None, None, None)]
    #[test_case(Some(Duration::from_secs(4)), Some(Duration::from_secs(4)), None)]
    #[test_case(Some(Duration::from_secs(4)), None, Some(Duration::from_secs(4)))]
    #[test_case(
        Some(Duration::from_secs(2)),
        Some(Duration::from_secs(2)),
        Some(Duration::from_secs(4))
    )]
    #[test_case(
        Some(Duration::from_secs(2)),
        Some(Duration::from_secs(4)),
        Some(Duration::from_secs(2))
    )]
    fn effective_timeouts(
        want: Option<Duration>,
        remaining: Option<Duration>,
        request: Option<Duration>,
    ) {
        let mut options = RequestOptions::default();
        if let Some(t) = request {
            options.set_attempt_timeout(t);
        }
        let got = effective_timeout(&options, remaining);
        assert_eq!(want, got);
    }

    #[tokio::test]
    async fn immediate_success() -> anyhow::Result<()> {
        let mut call = MockCall::new();
        call.expect_call().once().returning(|_| success());
        let inner = async move |d| call.call(d);

        let mut throttler = MockRetryThrottler::new();
        throttler.expect_on_success().once().return_const(());
        let mut retry_policy = MockRetryPolicy::new();
        retry_policy
            .expect_remaining_time()
            .once()
            .return_const(None);
        let backoff_policy = MockBackoffPolicy::new();
        let sleep = MockSleep::new();

        let response = retry_loop(
            inner,
            async move |d| sleep.sleep(d).await,
            true,
            to_retry_throttler(throttler),
            Arc::new(retry_policy),
            Arc::new(backoff_policy),
        )
        .await?;
        assert_eq!(response, "success");
        Ok(())
    }

    #[tokio::test]
    async fn immediate_failure() -> anyhow::Result<()> {
        let mut call = MockCall::new();
        call.expect_call().once().returning(|_| permanent());
        let inner = async move |d| call.call(d);

        let mut throttler = MockRetryThrottler::new();
        throttler
            .expect_on_retry_failure()
            .once()
            .withf(|flow| flow.is_permanent())
            .return_const(());
        let mut retry_policy = MockRetryPolicy::new();
        retry_policy
            .expect_remaining_time()
            .once()
            .return_const(None);
        retry_policy
            .expect_on_error()
            .once()
            .returning(|_, _, _, e| RetryResult::Permanent(e));
        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy
            .expect_on_failure()
            .once()
            .return_const(Duration::ZERO);
        let sleep = MockSleep::new();

        let response = retry_loop(
            inner,
            async move |d| sleep.sleep(d).await,
            true,
            to_retry_throttler(throttler),
            Arc::new(retry_policy),
            Arc::new(backoff_policy),
        )
        .await;
        let err = response.expect_err("permanent errors stop the loop");
        assert_eq!(err.status().map(|s| &s.code), Some(&Code::NotAuthorizedOrNotFound));
        Ok(())
    }

    #[test_case(true)]
    #[test_case(false)]
    #[tokio::test]
    async fn retry_success(expected_idempotency: bool) -> anyhow::Result<()> {
        let mut call_seq = mockall::Sequence::new();
        let mut call = MockCall::new();
        let attempts: [(u64, fn() -> Result<String>); 3] =
            [(3, transient), (2, transient), (1, success)];
        for (remaining, result) in attempts {
            call.expect_call()
                .once()
                .in_sequence(&mut call_seq)
                .withf(move |got| got == &Some(Duration::from_secs(remaining)))
                .returning(move |_| result());
        }
        let inner = async move |d| call.call(d);

        let mut throttler = MockRetryThrottler::new();
        throttler
            .expect_on_retry_failure()
            .times(2)
            .return_const(());
        throttler
            .expect_throttle_retry_attempt()
            .times(2)
            .return_const(false);
        throttler.expect_on_success().once().return_const(());

        let mut retry_seq = mockall::Sequence::new();
        let mut retry_policy = MockRetryPolicy::new();
        for remaining in [3, 2, 1] {
            retry_policy
                .expect_remaining_time()
                .once()
                .in_sequence(&mut retry_seq)
                .return_const(Some(Duration::from_secs(remaining)));
        }
        retry_policy
            .expect_on_error()
            .times(2)
            .withf(move |_, _, idempotent, _| idempotent == &expected_idempotency)
            .returning(|_, _, _, e| RetryResult::Continue(e));

        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy
            .expect_on_failure()
            .times(2)
            .returning(|_, count| Duration::from_millis(count as u64 * 10));
        let mut sleep_seq = mockall::Sequence::new();
        let mut sleep = MockSleep::new();
        for d in [10, 20] {
            sleep
                .expect_sleep()
                .once()
                .in_sequence(&mut sleep_seq)
                .withf(move |got| got == &Duration::from_millis(d))
                .returning(|_| Box::pin(async {}));
        }

        let mut retries = Vec::new();
        let response = retry_loop_with_callback(
            inner,
            async move |d| sleep.sleep(d).await,
            expected_idempotency,
            to_retry_throttler(throttler),
            Arc::new(retry_policy),
            Arc::new(backoff_policy),
            |count, _, delay| retries.push((count, delay)),
        )
        .await?;
        assert_eq!(response, "success");
        assert_eq!(
            retries,
            vec![
                (1, Duration::from_millis(10)),
                (2, Duration::from_millis(20))
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn transient_then_permanent() -> anyhow::Result<()> {
        let mut call_seq = mockall::Sequence::new();
        let mut call = MockCall::new();
        call.expect_call()
            .once()
            .in_sequence(&mut call_seq)
            .returning(|_| transient());
        call.expect_call()
            .once()
            .in_sequence(&mut call_seq)
            .returning(|_| permanent());
        let inner = async move |d| call.call(d);

        let mut throttler = MockRetryThrottler::new();
        throttler
            .expect_on_retry_failure()
            .times(2)
            .return_const(());
        throttler
            .expect_throttle_retry_attempt()
            .once()
            .return_const(false);
        let mut retry_policy = MockRetryPolicy::new();
        retry_policy
            .expect_remaining_time()
            .times(2)
            .return_const(None);
        retry_policy
            .expect_on_error()
            .times(2)
            .returning(|_, _, _, e| match e.status().map(|s| s.code.clone()) {
                Some(Code::ServiceUnavailable) => RetryResult::Continue(e),
                _ => RetryResult::Permanent(e),
            });
        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy
            .expect_on_failure()
            .times(2)
            .return_const(Duration::from_millis(1));
        let mut sleep = MockSleep::new();
        sleep
            .expect_sleep()
            .once()
            .returning(|_| Box::pin(async {}));

        let response = retry_loop(
            inner,
            async move |d| sleep.sleep(d).await,
            true,
            to_retry_throttler(throttler),
            Arc::new(retry_policy),
            Arc::new(backoff_policy),
        )
        .await;
        let err = response.expect_err("permanent errors stop the loop");
        assert_eq!(err.status().map(|s| &s.code), Some(&Code::NotAuthorizedOrNotFound));
        Ok(())
    }

    #[tokio::test]
    async fn backoff_exceeds_remaining_time() -> anyhow::Result<()> {
        let mut call = MockCall::new();
        call.expect_call().once().returning(|_| transient());
        let inner = async move |d| call.call(d);

        let mut throttler = MockRetryThrottler::new();
        throttler
            .expect_on_retry_failure()
            .once()
            .return_const(());
        let mut retry_seq = mockall::Sequence::new();
        let mut retry_policy = MockRetryPolicy::new();
        retry_policy
            .expect_remaining_time()
            .once()
            .in_sequence(&mut retry_seq)
            .return_const(Some(Duration::from_secs(10)));
        retry_policy
            .expect_remaining_time()
            .once()
            .in_sequence(&mut retry_seq)
            .return_const(Some(Duration::from_secs(1)));
        retry_policy
            .expect_on_error()
            .once()
            .returning(|_, _, _, e| RetryResult::Continue(e));
        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy
            .expect_on_failure()
            .once()
            .return_const(Duration::from_secs(5));
        let sleep = MockSleep::new();

        let response = retry_loop(
            inner,
            async move |d| sleep.sleep(d).await,
            true,
            to_retry_throttler(throttler),
            Arc::new(retry_policy),
            Arc::new(backoff_policy),
        )
        .await;
        let err = response.expect_err("the loop should be exhausted");
        assert!(err.is_exhausted(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn throttled_then_exhausted() -> anyhow::Result<()> {
        let mut call = MockCall::new();
        call.expect_call().once().returning(|_| transient());
        let inner = async move |d| call.call(d);

        let mut throttler = MockRetryThrottler::new();
        throttler
            .expect_on_retry_failure()
            .once()
            .return_const(());
        throttler
            .expect_throttle_retry_attempt()
            .times(2)
            .return_const(true);
        let mut retry_policy = MockRetryPolicy::new();
        retry_policy
            .expect_remaining_time()
            .times(3)
            .return_const(None);
        retry_policy
            .expect_on_error()
            .once()
            .returning(|_, _, _, e| RetryResult::Continue(e));
        let mut throttle_seq = mockall::Sequence::new();
        retry_policy
            .expect_on_throttle()
            .once()
            .in_sequence(&mut throttle_seq)
            .returning(|_, _, e| ThrottleResult::Continue(e));
        retry_policy
            .expect_on_throttle()
            .once()
            .in_sequence(&mut throttle_seq)
            .returning(|_, _, e| ThrottleResult::Exhausted(e));
        let mut backoff_policy = MockBackoffPolicy::new();
        backoff_policy
            .expect_on_failure()
            .times(2)
            .return_const(Duration::from_millis(1));
        let mut sleep = MockSleep::new();
        sleep
            .expect_sleep()
            .times(2)
            .returning(|_| Box::pin(async {}));

        let response = retry_loop(
            inner,
            async move |d| sleep.sleep(d).await,
            true,
            to_retry_throttler(throttler),
            Arc::new(retry_policy),
            Arc::new(backoff_policy),
        )
        .await;
        let err = response.expect_err("the loop should stop");
        assert_eq!(err.status().map(|s| &s.code), Some(&Code::ServiceUnavailable));
        Ok(())
    }

    fn success() -> Result<String> {
        Ok("success".into())
    }

    fn transient() -> Result<String> {
        let status = Status::default()
            .set_code(Code::ServiceUnavailable)
            .set_message("try-again");
        Err(Error::service(status))
    }

    fn permanent() -> Result<String> {
        let status = Status::default()
            .set_code(Code::NotAuthorizedOrNotFound)
            .set_message("uh-oh");
        Err(Error::service(status))
    }

    fn to_retry_throttler(mock: MockRetryThrottler) -> SharedRetryThrottler {
        Arc::new(Mutex::new(mock))
    }

    trait Call {
        fn call(&self, d: Option<Duration>) -> Result<String>;
    }

    mockall::mock! {
        Call {}
        impl Call for Call {
            fn call(&self, d: Option<Duration>) -> Result<String>;
        }
    }

    trait Sleep {
        fn sleep(&self, d: Duration) -> impl Future<Output = ()>;
    }

    mockall::mock! {
        Sleep {}
        impl Sleep for Sleep {
            fn sleep(&self, d: Duration) -> impl Future<Output = ()> + Send;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        RetryPolicy {}
        impl RetryPolicy for RetryPolicy {
            fn on_error(&self, loop_start: std::time::Instant, attempt_count: u32, idempotent: bool, error: Error) -> RetryResult;
            fn on_throttle(&self, loop_start: std::time::Instant, attempt_count: u32, error: Error) -> ThrottleResult;
            fn remaining_time(&self, loop_start: std::time::Instant, attempt_count: u32) -> Option<Duration>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        BackoffPolicy {}
        impl BackoffPolicy for BackoffPolicy {
            fn on_failure(&self, loop_start: std::time::Instant, attempt_count: u32) -> Duration;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        RetryThrottler {}
        impl RetryThrottler for RetryThrottler {
            fn throttle_retry_attempt(&self) -> bool;
            fn on_retry_failure(&mut self, flow: &RetryResult);
            fn on_success(&mut self);
        }
    }
}
