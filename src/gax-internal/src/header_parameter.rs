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

//! Add optional headers to a request.

use reqwest::header::HeaderValue;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("the value for header `{0}` contains invalid characters")]
    InvalidHeaderValue(String),
}

/// Adds the `name` header if `value` is set.
pub fn add(
    builder: reqwest::RequestBuilder,
    name: &'static str,
    value: Option<&str>,
) -> gax::Result<reqwest::RequestBuilder> {
    match value {
        None => Ok(builder),
        Some(v) => Ok(builder.header(name, to_value(name, v)?)),
    }
}

/// Adds the `name` header, using `default` if `value` is not set.
///
/// The default is only computed when needed.
pub fn with_default<F>(
    builder: reqwest::RequestBuilder,
    name: &'static str,
    value: Option<&str>,
    default: F,
) -> gax::Result<reqwest::RequestBuilder>
where
    F: FnOnce() -> String,
{
    let value = match value {
        Some(v) => v.to_string(),
        None => default(),
    };
    Ok(builder.header(name, to_value(name, &value)?))
}

fn to_value(name: &str, value: &str) -> gax::Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| gax::error::Error::binding(Error::InvalidHeaderValue(name.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    type TestResult = anyhow::Result<()>;

    fn builder() -> anyhow::Result<reqwest::RequestBuilder> {
        Ok(reqwest::Client::builder()
            .build()?
            .post("https://loganalytics.us-ashburn-1.oci.oraclecloud.com/20200601/unused"))
    }

    #[test]
    fn optional() -> TestResult {
        let builder = add(builder()?, "opc-request-id", Some("req-1"))?;
        let builder = add(builder, "if-match", None)?;
        let request = builder.build()?;
        assert_eq!(
            request.headers().get("opc-request-id"),
            Some(&HeaderValue::from_static("req-1"))
        );
        assert!(request.headers().get("if-match").is_none());
        Ok(())
    }

    #[test]
    fn default_when_unset() -> TestResult {
        let builder = with_default(builder()?, "content-type", None, || {
            "application/octet-stream".to_string()
        })?;
        let request = builder.build()?;
        assert_eq!(
            request.headers().get("content-type"),
            Some(&HeaderValue::from_static("application/octet-stream"))
        );
        Ok(())
    }

    #[test]
    fn override_skips_default() -> TestResult {
        let builder = with_default(builder()?, "opc-retry-token", Some("my-token"), || {
            panic!("the default should not be computed")
        })?;
        let request = builder.build()?;
        assert_eq!(
            request.headers().get("opc-retry-token"),
            Some(&HeaderValue::from_static("my-token"))
        );
        Ok(())
    }

    #[test]
    fn invalid() -> TestResult {
        let e = add(builder()?, "opc-request-id", Some("bad\nvalue")).unwrap_err();
        assert!(e.is_binding(), "{e:?}");
        assert!(e.to_string().contains("opc-request-id"), "{e}");
        Ok(())
    }
}
