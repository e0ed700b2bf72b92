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

//! Response types.
//!
//! This module contains types related to OCI service responses. Notably it
//! contains the [Response] type itself. Typically you'll import this type.
//!
//! OCI services return important information in the response headers: the
//! `opc-request-id` used in troubleshooting, the `opc-next-page` token used
//! in pagination, the resource `etag`, and the `opc-work-request-id` of
//! asynchronous operations. [Response] has helpers to query these headers.
//!
//! # Example
//! ```
//! # use oci_gax::response::{Parts, Response};
//! let mut headers = http::HeaderMap::new();
//! headers.insert("opc-request-id", http::HeaderValue::from_static("ABC123"));
//! let response = Response::from_parts(Parts::new().set_headers(headers), "body");
//! assert_eq!(response.opc_request_id(), Some("ABC123"));
//! assert_eq!(response.body(), &"body");
//! ```

/// The `opc-request-id` header name.
pub const OPC_REQUEST_ID: &str = "opc-request-id";
/// The `opc-next-page` header name.
pub const OPC_NEXT_PAGE: &str = "opc-next-page";
/// The `opc-prev-page` header name.
pub const OPC_PREV_PAGE: &str = "opc-prev-page";
/// The `opc-total-items` header name.
pub const OPC_TOTAL_ITEMS: &str = "opc-total-items";
/// The `opc-work-request-id` header name.
pub const OPC_WORK_REQUEST_ID: &str = "opc-work-request-id";
/// The `etag` header name.
pub const ETAG: &str = "etag";

/// Represents an OCI service response.
///
/// A response consists of a body and the HTTP headers.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body, with empty headers.
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts.
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Returns the body associated with this response.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response returning the parts and body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Consumes the response returning only its body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Transforms the body, keeping the headers.
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            parts: self.parts,
            body: f(self.body),
        }
    }

    /// The identifier assigned by the service to this request.
    pub fn opc_request_id(&self) -> Option<&str> {
        self.header(OPC_REQUEST_ID)
    }

    /// The token to fetch the next page of a list operation.
    pub fn opc_next_page(&self) -> Option<&str> {
        self.header(OPC_NEXT_PAGE)
    }

    /// The token to fetch the previous page of a list operation.
    pub fn opc_prev_page(&self) -> Option<&str> {
        self.header(OPC_PREV_PAGE)
    }

    /// The total number of items across all pages, if reported.
    pub fn opc_total_items(&self) -> Option<i64> {
        self.header(OPC_TOTAL_ITEMS)?.parse().ok()
    }

    /// The work request tracking an asynchronous operation.
    pub fn opc_work_request_id(&self) -> Option<&str> {
        self.header(OPC_WORK_REQUEST_ID)
    }

    /// The entity tag of the returned resource.
    ///
    /// Use this value in the `if-match` header of update and delete
    /// operations for optimistic concurrency control.
    pub fn etag(&self) -> Option<&str> {
        self.header(ETAG)
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.parts.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Component parts of a response.
///
/// The response parts, excluding the body, consist of the headers. Other
/// fields may be added in the future.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Parts {
    /// Create a new instance.
    pub fn new() -> Self {
        Parts::default()
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn headers() -> http::HeaderMap {
        let mut headers = http::HeaderMap::new();
        headers.insert(OPC_REQUEST_ID, HeaderValue::from_static("req-1"));
        headers.insert(OPC_NEXT_PAGE, HeaderValue::from_static("page-2"));
        headers.insert(OPC_PREV_PAGE, HeaderValue::from_static("page-0"));
        headers.insert(OPC_TOTAL_ITEMS, HeaderValue::from_static("42"));
        headers.insert(OPC_WORK_REQUEST_ID, HeaderValue::from_static("wr-1"));
        headers.insert(ETAG, HeaderValue::from_static("etag-1"));
        headers
    }

    #[test]
    fn response_from() {
        let response = Response::from("abc123".to_string());
        assert!(response.headers().is_empty());
        assert_eq!(response.body().as_str(), "abc123");
        assert!(response.opc_request_id().is_none());
        assert!(response.opc_next_page().is_none());
        assert!(response.opc_total_items().is_none());
        assert_eq!(response.into_body(), "abc123");
    }

    #[test]
    fn response_from_parts() {
        let parts = Parts::new().set_headers(headers());
        let response = Response::from_parts(parts, "abc123".to_string());
        assert_eq!(response.headers(), &headers());
        assert_eq!(response.opc_request_id(), Some("req-1"));
        assert_eq!(response.opc_next_page(), Some("page-2"));
        assert_eq!(response.opc_prev_page(), Some("page-0"));
        assert_eq!(response.opc_total_items(), Some(42));
        assert_eq!(response.opc_work_request_id(), Some("wr-1"));
        assert_eq!(response.etag(), Some("etag-1"));

        let (parts, body) = response.into_parts();
        assert_eq!(body, "abc123");
        assert_eq!(parts.headers, headers());
    }

    #[test]
    fn map() {
        let parts = Parts::new().set_headers(headers());
        let response = Response::from_parts(parts, "abc123".to_string()).map(|s| s.len());
        assert_eq!(response.body(), &6);
        assert_eq!(response.opc_request_id(), Some("req-1"));
    }
}
