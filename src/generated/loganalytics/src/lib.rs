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

//! Oracle Cloud Infrastructure Client Libraries for Rust - Logging Analytics API
//!
//! **WARNING:** some of the types in this crate are marked as
//! `#[non_exhaustive]`. New fields and enum variants may be added in future
//! versions of the service.
//!
//! This crate contains traits, types, and functions to interact with the
//! Logging Analytics API. Most applications will use the structs defined in
//! the [client] module. More specifically:
//!
//! * [LogAnalytics](client/struct.LogAnalytics.html)
//!
//! Every operation is scoped to a tenancy namespace. Operations that start a
//! work request on the service return a [lro::Poller] from their builder's
//! `poller()` function, and list operations return paginators from
//! `by_page()` and `by_item()`.

/// The response and error types used by every operation.
pub use gax::Result;
pub use gax::error::Error;

#[allow(rustdoc::invalid_html_tags)]
#[allow(rustdoc::redundant_explicit_links)]
pub mod model;

pub mod stub;

/// Concrete implementations of this client library traits.
pub mod client;

/// Request builders.
pub mod builder;

#[doc(hidden)]
pub(crate) mod tracing;

#[doc(hidden)]
pub(crate) mod transport;

/// The default host used by the service.
const DEFAULT_HOST: &str = "https://loganalytics.us-ashburn-1.oci.oraclecloud.com/20200601";

pub(crate) mod info {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub(crate) const API_CLIENT: gaxi::api_header::ApiClient = gaxi::api_header::ApiClient {
        name: NAME,
        version: VERSION,
    };
}
