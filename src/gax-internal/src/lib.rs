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

//! Implementation details for the OCI client libraries.
//!
//! <div class="warning">
//! All the types, traits, and functions defined in this crate are <b>not</b>
//! intended for general use. This crate will remain unstable for the
//! foreseeable future, even if used in stable SDKs. We (the OCI Client
//! Libraries for Rust team) control both and will change both if needed.
//! </div>

pub mod api_header;
pub mod enums;
pub mod header_parameter;
pub mod http;
pub mod options;
pub mod path_parameter;
pub mod query_parameter;
pub mod retry_token;
pub mod unimplemented;
