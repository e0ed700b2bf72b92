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

//! OCI client libraries authentication.
//!
//! The client libraries obtain authentication headers from a [Credentials]
//! object before sending each request. This crate defines the interface
//! between the clients and the credentials, and provides a few simple
//! implementations:
//!
//! - [anonymous][credentials::anonymous] credentials, which add no headers.
//! - [security token][credentials::security_token] credentials, which send a
//!   static session token.
//!
//! Applications with other requirements, such as request signing with an API
//! key, implement [CredentialsProvider] and wrap the implementation in a
//! [Credentials] object.
//!
//! [Credentials]: credentials::Credentials
//! [CredentialsProvider]: credentials::CredentialsProvider

pub mod build_errors;
pub mod credentials;
pub mod errors;

pub(crate) type BuildResult<T> = std::result::Result<T, build_errors::Error>;
