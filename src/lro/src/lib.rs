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

//! Types and functions to wait for OCI work requests.
//!
//! Some OCI operations start a background task and return immediately. The
//! service tracks these tasks as *work requests*, the response to the initial
//! request includes the id of the work request in the `opc-work-request-id`
//! header. The application polls the work request until it completes.
//!
//! The client libraries return an implementation of [Poller] for these
//! operations. Most applications just call [until_done][Poller::until_done]:
//!
//! ```no_run
//! # use oci_lro::Poller;
//! # async fn sample(poller: impl Poller<String>) -> gax::Result<()> {
//! let work_request = poller.until_done().await?;
//! println!("work request completed: {work_request:?}");
//! # Ok(()) }
//! ```
//!
//! Applications that want to report progress call [poll][Poller::poll] in a
//! loop.

use gax::Result;
use gax::error::Error;
use std::future::Future;

pub mod internal;

/// The result of polling a work request.
///
/// # Parameters
/// * `R` - the type returned when the work request completes, typically the
///   final state of the work request.
#[derive(Debug)]
pub enum PollingResult<R> {
    /// The work request is still in progress.
    ///
    /// Includes the percentage of the work completed, if the service reports
    /// it.
    InProgress(Option<f32>),

    /// The work request completed, successfully or with an error.
    ///
    /// Also returned when the polling policies give up.
    Completed(Result<R>),

    /// An error trying to poll the work request.
    ///
    /// Not all errors indicate that the work request failed. For example, the
    /// request to query its status may timeout. The polling error policy
    /// decided this error is transient, and polling continues.
    PollingError(Error),
}

/// The trait implemented by work request pollers.
pub trait Poller<R>: Send + sealed::Poller {
    /// Query the current status of the work request.
    ///
    /// The first call sends the request that starts the work request. Returns
    /// `None` after the work request completes.
    fn poll(&mut self) -> impl Future<Output = Option<PollingResult<R>>> + Send;

    /// Poll the work request until it completes, waiting between attempts as
    /// configured by the polling backoff policy.
    fn until_done(self) -> impl Future<Output = Result<R>> + Send;

    /// Convert a poller to a [Stream][futures::stream::Stream].
    #[cfg(feature = "unstable-stream")]
    fn into_stream(self) -> impl futures::Stream<Item = PollingResult<R>> + Unpin;
}

pub(crate) mod sealed {
    pub trait Poller {}
}
