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

//! Errors returned by the OCI client libraries.
//!
//! All operations return [Error] on failure. The error captures enough
//! information to decide whether a failure is worth retrying, and to report
//! useful diagnostics, including the `opc-request-id` the service assigned to
//! the failed request.

mod core_error;
pub use core_error::*;

mod credentials;
pub use credentials::CredentialsError;

pub mod rpc;
