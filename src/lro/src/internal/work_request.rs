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

//! Pollers for OCI work requests.
//!
//! The generated clients provide two closures: one to start the operation,
//! returning the work request id, and one to query the work request.

use crate::{Poller, PollingResult};
use gax::Result;
use gax::error::Error;
use gax::error::rpc::{Code, Status};
use gax::polling_backoff_policy::PollingBackoffPolicy;
use gax::polling_error_policy::PollingErrorPolicy;
use gax::polling_state::PollingState;
use gax::retry_result::RetryResult;
use std::sync::Arc;

/// The error code used when a work request completes unsuccessfully.
pub const WORK_REQUEST_FAILED: &str = "WorkRequestFailed";

/// The state of a work request, as seen by the poller.
#[derive(Clone, Debug, PartialEq)]
pub enum WorkRequestState {
    /// Accepted or in progress, with the completed percentage if known.
    Pending(Option<f32>),
    /// Completed successfully.
    Succeeded,
    /// Failed or canceled. Includes a description of the problem.
    Failed(String),
}

/// Implemented by the work request types in each client library.
pub trait WorkRequestStatus {
    /// Returns the state of the work request.
    fn state(&self) -> WorkRequestState;
}

/// Creates a poller for a work request.
///
/// `start` sends the request that creates the work request, and returns its
/// id. `query` fetches the work request given its id.
pub fn new_poller<W, S, SF, Q, QF>(
    error_policy: Arc<dyn PollingErrorPolicy>,
    backoff_policy: Arc<dyn PollingBackoffPolicy>,
    start: S,
    query: Q,
) -> impl Poller<W>
where
    W: WorkRequestStatus + Send,
    S: FnOnce() -> SF + Send + Sync,
    SF: std::future::Future<Output = Result<String>> + Send + 'static,
    Q: FnMut(String) -> QF + Send + Sync,
    QF: std::future::Future<Output = Result<W>> + Send + 'static,
{
    WorkRequestPoller {
        error_policy,
        backoff_policy,
        start: Some(start),
        query,
        work_request_id: None,
        state: PollingState::default(),
    }
}

struct WorkRequestPoller<S, Q> {
    error_policy: Arc<dyn PollingErrorPolicy>,
    backoff_policy: Arc<dyn PollingBackoffPolicy>,
    start: Option<S>,
    query: Q,
    work_request_id: Option<String>,
    state: PollingState,
}

impl<S, Q> crate::sealed::Poller for WorkRequestPoller<S, Q> {}

impl<W, S, SF, Q, QF> Poller<W> for WorkRequestPoller<S, Q>
where
    W: WorkRequestStatus + Send,
    S: FnOnce() -> SF + Send + Sync,
    SF: std::future::Future<Output = Result<String>> + Send + 'static,
    Q: FnMut(String) -> QF + Send + Sync,
    QF: std::future::Future<Output = Result<W>> + Send + 'static,
{
    async fn poll(&mut self) -> Option<PollingResult<W>> {
        if let Some(start) = self.start.take() {
            let result = start().await;
            let (id, poll) = self::handle_start(result);
            self.work_request_id = id;
            return Some(poll);
        }
        if let Some(id) = self.work_request_id.take() {
            self.state.attempt();
            let result = (self.query)(id.clone()).await;
            let (id, poll) =
                self::handle_poll(self.error_policy.as_ref(), &self.state, id, result);
            self.work_request_id = id;
            return Some(poll);
        }
        None
    }

    async fn until_done(mut self) -> Result<W> {
        while let Some(p) = self.poll().await {
            match p {
                PollingResult::Completed(r) => return r,
                PollingResult::InProgress(_) | PollingResult::PollingError(_) => (),
            }
            tokio::time::sleep(self.backoff_policy.wait_period(&self.state)).await;
        }
        // `poll()` only returns `None` after returning `Completed`.
        unreachable!("loop should exit via the `Completed` branch vs. this line");
    }

    #[cfg(feature = "unstable-stream")]
    fn into_stream(self) -> impl futures::Stream<Item = PollingResult<W>> + Unpin {
        use futures::stream::unfold;
        Box::pin(unfold(Some(self), move |state| async move {
            if let Some(mut poller) = state {
                if let Some(pr) = poller.poll().await {
                    return Some((pr, Some(poller)));
                }
            };
            None
        }))
    }
}

fn handle_start<W>(result: Result<String>) -> (Option<String>, PollingResult<W>) {
    match result {
        Err(e) => (None, PollingResult::Completed(Err(e))),
        Ok(id) => {
            tracing::debug!(work_request_id = %id, "work request started");
            (Some(id), PollingResult::InProgress(None))
        }
    }
}

fn handle_poll<W>(
    error_policy: &dyn PollingErrorPolicy,
    state: &PollingState,
    id: String,
    result: Result<W>,
) -> (Option<String>, PollingResult<W>)
where
    W: WorkRequestStatus,
{
    let work_request = match result {
        Ok(w) => w,
        Err(e) => {
            return match error_policy.on_error(state, e) {
                RetryResult::Continue(e) => {
                    tracing::debug!(work_request_id = %id, error = %e, "transient polling error");
                    (Some(id), PollingResult::PollingError(e))
                }
                RetryResult::Exhausted(e) | RetryResult::Permanent(e) => {
                    (None, PollingResult::Completed(Err(e)))
                }
            };
        }
    };
    match work_request.state() {
        WorkRequestState::Succeeded => (None, PollingResult::Completed(Ok(work_request))),
        WorkRequestState::Failed(message) => {
            (None, PollingResult::Completed(Err(failed(&id, message))))
        }
        WorkRequestState::Pending(percent) => match error_policy.on_in_progress(state, &id) {
            Some(e) => (None, PollingResult::Completed(Err(e))),
            None => {
                tracing::debug!(work_request_id = %id, ?percent, "work request in progress");
                (Some(id), PollingResult::InProgress(percent))
            }
        },
    }
}

fn failed(id: &str, message: String) -> Error {
    let status = Status::default()
        .set_code(Code::from(WORK_REQUEST_FAILED))
        .set_message(format!("work request {id} did not succeed: {message}"));
    Error::service(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::exponential_backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
    use gax::polling_error_policy::{
        AlwaysContinue, DefaultTransient, LimitedAttemptCount, PollingErrorPolicyExt,
    };
    use std::time::Duration;

    #[derive(Debug, Default, PartialEq)]
    struct TestWorkRequest {
        status: &'static str,
        percent: Option<f32>,
    }

    impl WorkRequestStatus for TestWorkRequest {
        fn state(&self) -> WorkRequestState {
            match self.status {
                "SUCCEEDED" => WorkRequestState::Succeeded,
                "FAILED" | "CANCELED" => WorkRequestState::Failed(self.status.to_string()),
                _ => WorkRequestState::Pending(self.percent),
            }
        }
    }

    fn pending(percent: f32) -> TestWorkRequest {
        TestWorkRequest {
            status: "IN_PROGRESS",
            percent: Some(percent),
        }
    }

    fn succeeded() -> TestWorkRequest {
        TestWorkRequest {
            status: "SUCCEEDED",
            percent: Some(100.0),
        }
    }

    fn transient() -> Error {
        Error::service_with_http_metadata(
            Status::default()
                .set_code(Code::ServiceUnavailable)
                .set_message("try-again"),
            Some(503),
            None,
        )
    }

    fn permanent() -> Error {
        Error::service_with_http_metadata(
            Status::default()
                .set_code(Code::NotAuthorizedOrNotFound)
                .set_message("uh-oh"),
            Some(404),
            None,
        )
    }

    fn test_backoff() -> ExponentialBackoff {
        ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(1))
            .with_maximum_delay(Duration::from_millis(1))
            .clamp()
    }

    async fn start_ok() -> Result<String> {
        Ok("ocid1.workrequest.test".to_string())
    }

    #[tokio::test]
    async fn poll_sequence() {
        let mut count = 0;
        let query = move |id: String| {
            assert_eq!(id, "ocid1.workrequest.test");
            count += 1;
            let count = count;
            async move {
                match count {
                    1 => Ok(pending(50.0)),
                    _ => Ok(succeeded()),
                }
            }
        };
        let mut poller = new_poller(
            Arc::new(DefaultTransient),
            Arc::new(test_backoff()),
            start_ok,
            query,
        );
        let p = poller.poll().await;
        assert!(matches!(p, Some(PollingResult::InProgress(None))), "{p:?}");
        let p = poller.poll().await;
        assert!(
            matches!(p, Some(PollingResult::InProgress(Some(v))) if v == 50.0),
            "{p:?}"
        );
        let p = poller.poll().await;
        assert!(matches!(p, Some(PollingResult::Completed(Ok(_)))), "{p:?}");
        let p = poller.poll().await;
        assert!(p.is_none(), "{p:?}");
    }

    #[tokio::test]
    async fn until_done_success() {
        let mut count = 0;
        let query = move |_id| {
            count += 1;
            let count = count;
            async move {
                match count {
                    1 => Err(transient()),
                    2 => Ok(pending(10.0)),
                    _ => Ok(succeeded()),
                }
            }
        };
        let got = new_poller(
            Arc::new(DefaultTransient),
            Arc::new(test_backoff()),
            start_ok,
            query,
        )
        .until_done()
        .await;
        assert!(matches!(&got, Ok(w) if *w == succeeded()), "{got:?}");
    }

    #[tokio::test]
    async fn until_done_start_error() {
        let start = || async move { Err::<String, Error>(permanent()) };
        let query = |_id| async move { Ok(succeeded()) };
        let got = new_poller(
            Arc::new(DefaultTransient),
            Arc::new(test_backoff()),
            start,
            query,
        )
        .until_done()
        .await;
        let err = got.unwrap_err();
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
    }

    #[tokio::test]
    async fn until_done_permanent_poll_error() {
        let query = |_id| async move { Err::<TestWorkRequest, Error>(permanent()) };
        let got = new_poller(
            Arc::new(DefaultTransient),
            Arc::new(test_backoff()),
            start_ok,
            query,
        )
        .until_done()
        .await;
        let err = got.unwrap_err();
        assert_eq!(
            err.status().map(|s| s.code.clone()),
            Some(Code::NotAuthorizedOrNotFound)
        );
    }

    #[tokio::test]
    async fn until_done_failed() {
        let query = |_id| async move {
            Ok(TestWorkRequest {
                status: "FAILED",
                percent: None,
            })
        };
        let got = new_poller(
            Arc::new(AlwaysContinue),
            Arc::new(test_backoff()),
            start_ok,
            query,
        )
        .until_done()
        .await;
        let err = got.unwrap_err();
        let status = err.status().expect("failed work requests are service errors");
        assert_eq!(status.code, Code::from(WORK_REQUEST_FAILED));
        assert!(status.message.contains("ocid1.workrequest.test"), "{status:?}");
        assert!(status.message.contains("FAILED"), "{status:?}");
    }

    #[tokio::test]
    async fn until_done_attempts_exhausted() {
        let query = |_id| async move { Ok(pending(1.0)) };
        let got = new_poller(
            Arc::new(AlwaysContinue.with_attempt_limit(3)),
            Arc::new(test_backoff()),
            start_ok,
            query,
        )
        .until_done()
        .await;
        let err = got.unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
    }

    #[tokio::test]
    async fn polling_error_then_exhausted() {
        let query = |_id| async move { Err::<TestWorkRequest, Error>(transient()) };
        let mut poller = new_poller(
            Arc::new(LimitedAttemptCount::new(2)),
            Arc::new(test_backoff()),
            start_ok,
            query,
        );
        let p = poller.poll().await;
        assert!(matches!(p, Some(PollingResult::InProgress(None))), "{p:?}");
        let p = poller.poll().await;
        assert!(matches!(p, Some(PollingResult::PollingError(_))), "{p:?}");
        let p = poller.poll().await;
        assert!(matches!(p, Some(PollingResult::Completed(Err(_)))), "{p:?}");
        let p = poller.poll().await;
        assert!(p.is_none(), "{p:?}");
    }

    #[cfg(feature = "unstable-stream")]
    #[tokio::test]
    async fn stream() {
        use futures::StreamExt;
        let query = |_id| async move { Ok(succeeded()) };
        let poller = new_poller(
            Arc::new(DefaultTransient),
            Arc::new(test_backoff()),
            start_ok,
            query,
        );
        let results = poller.into_stream().collect::<Vec<_>>().await;
        assert_eq!(results.len(), 2, "{results:?}");
        assert!(matches!(results[0], PollingResult::InProgress(None)), "{results:?}");
        assert!(matches!(results[1], PollingResult::Completed(Ok(_))), "{results:?}");
    }
}
