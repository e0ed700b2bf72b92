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

//! Validate required parameters and format them as path segments.
//!
//! OCI operations reject requests with missing required parameters. The
//! clients detect these problems before sending the request, and report them
//! as [binding errors][gax::error::Error::is_binding].

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter `{0}`")]
    MissingRequiredParameter(String),
    #[error("required parameter `{0}` must not be blank")]
    BlankParameter(String),
}

pub fn missing(name: &str) -> gax::error::Error {
    gax::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}

pub fn blank(name: &str) -> gax::error::Error {
    gax::error::Error::binding(Error::BlankParameter(name.to_string()))
}

// RFC 3986 unreserved characters are not escaped in a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Validates a path parameter and escapes it as a single path segment.
pub fn required(value: &str, name: &str) -> gax::Result<String> {
    let value = not_blank(value, name)?;
    Ok(utf8_percent_encode(value, PATH_SEGMENT).to_string())
}

/// Returns an error if a required string parameter is empty or whitespace.
pub fn not_blank<'a>(value: &'a str, name: &str) -> gax::Result<&'a str> {
    if value.trim().is_empty() {
        return Err(blank(name));
    }
    Ok(value)
}

/// Returns an error if a required parameter is not set.
pub fn present<'a, T>(value: &'a Option<T>, name: &str) -> gax::Result<&'a T> {
    value.as_ref().ok_or_else(|| missing(name))
}

#[cfg(test)]
mod tests {
    use super::Error;
    use std::error::Error as _;
    use test_case::test_case;

    #[test]
    fn missing() {
        let e = super::missing("abc123");
        assert!(e.is_binding(), "{e:?}");
        assert!(e.to_string().contains("abc123"), "{e}");
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::MissingRequiredParameter(p)) if p == "abc123"),
            "{e:?}"
        );
    }

    #[test_case("")]
    #[test_case("   ")]
    #[test_case("\t\n")]
    fn blank(input: &str) {
        let e = super::required(input, "namespaceName").unwrap_err();
        assert!(e.is_binding(), "{e:?}");
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::BlankParameter(p)) if p == "namespaceName"),
            "{e:?}"
        );
    }

    #[test_case("my-namespace", "my-namespace")]
    #[test_case(
        "ocid1.loganalyticsentity.oc1..aaa_bbb~c",
        "ocid1.loganalyticsentity.oc1..aaa_bbb~c"
    )]
    #[test_case("a/b", "a%2Fb")]
    #[test_case("with space", "with%20space")]
    #[test_case("q?x=1&y", "q%3Fx%3D1%26y")]
    fn required(input: &str, want: &str) {
        let got = super::required(input, "name").unwrap();
        assert_eq!(got, want);
    }

    #[test]
    fn present() {
        let value = Some(42);
        assert_eq!(super::present(&value, "limit").ok(), Some(&42));
        let value: Option<i32> = None;
        let e = super::present(&value, "limit").unwrap_err();
        assert!(e.is_binding(), "{e:?}");
        assert!(e.to_string().contains("limit"), "{e}");
    }

    #[test]
    fn not_blank() {
        assert_eq!(super::not_blank("abc", "name").ok(), Some("abc"));
        assert!(super::not_blank(" ", "name").is_err());
    }
}
