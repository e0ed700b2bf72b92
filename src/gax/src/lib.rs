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

//! OCI client library helpers.
//!
//! This crate contains the types and functions shared by the OCI client
//! libraries for Rust: the error type returned by every operation, the retry,
//! backoff and throttling policies applied by the clients, request options,
//! and helpers to iterate over paginated results.
//!
//! Applications rarely need to depend on this crate directly, but they use its
//! types when configuring a client or inspecting an error.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping service operations.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub mod backoff_policy;
pub mod client_builder;
pub mod error;
pub mod exponential_backoff;
pub mod options;
pub mod paginator;
pub mod polling_backoff_policy;
pub mod polling_error_policy;
pub mod polling_state;
pub mod response;
pub mod retry_policy;
pub mod retry_result;
pub mod retry_throttler;
pub mod throttle_result;

#[doc(hidden)]
pub mod retry_loop_internal;
