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

//! Security token credentials.
//!
//! These credentials send a session token, obtained out of band, in the
//! `authorization` header of each request. The token is not refreshed, create
//! new credentials when it expires.
//!
//! # Example
//! ```
//! # use oci_auth::credentials::security_token::Builder;
//! let credentials = Builder::new("my-session-token").build()?;
//! # Ok::<(), oci_auth::build_errors::Error>(())
//! ```

use crate::BuildResult;
use crate::build_errors::Error as BuilderError;
use crate::credentials::{CacheableResource, Credentials, CredentialsProvider, EntityTag, Result};
use http::header::{AUTHORIZATION, HeaderValue};
use http::{Extensions, HeaderMap};

struct SecurityTokenCredentials {
    header: HeaderValue,
    entity_tag: EntityTag,
}

impl std::fmt::Debug for SecurityTokenCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityTokenCredentials")
            .field("header", &"[censored]")
            .field("entity_tag", &self.entity_tag)
            .finish()
    }
}

/// A builder for security token credentials.
pub struct Builder {
    token: String,
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("token", &"[censored]")
            .finish()
    }
}

impl Builder {
    /// Creates a builder for the given session token.
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Returns a [Credentials] instance.
    ///
    /// Fails if the token is blank, or if it contains characters that are not
    /// valid in an HTTP header.
    pub fn build(self) -> BuildResult<Credentials> {
        let token = self.token.trim();
        if token.is_empty() {
            return Err(BuilderError::invalid("the security token is blank"));
        }
        let mut header =
            HeaderValue::from_str(&format!("Bearer {token}")).map_err(BuilderError::invalid)?;
        header.set_sensitive(true);
        Ok(Credentials::from(SecurityTokenCredentials {
            header,
            entity_tag: EntityTag::new(),
        }))
    }
}

impl CredentialsProvider for SecurityTokenCredentials {
    async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>> {
        match extensions.get::<EntityTag>() {
            Some(tag) if self.entity_tag.eq(tag) => Ok(CacheableResource::NotModified),
            _ => Ok(CacheableResource::New {
                data: HeaderMap::from_iter([(AUTHORIZATION, self.header.clone())]),
                entity_tag: self.entity_tag.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::tests::get_headers;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    #[tokio::test]
    async fn headers() -> TestResult {
        let creds = Builder::new("abc123").build()?;
        let headers = get_headers(creds.headers(Extensions::new()).await?);
        let value = headers.get(AUTHORIZATION).expect("authorization is set");
        assert_eq!(value, "Bearer abc123");
        assert!(value.is_sensitive());
        Ok(())
    }

    #[tokio::test]
    async fn not_modified() -> TestResult {
        let creds = Builder::new("abc123").build()?;
        let entity_tag = match creds.headers(Extensions::new()).await? {
            CacheableResource::New { entity_tag, .. } => entity_tag,
            CacheableResource::NotModified => unreachable!("expecting new headers"),
        };
        let mut extensions = Extensions::new();
        extensions.insert(entity_tag);
        assert_eq!(creds.headers(extensions).await?, CacheableResource::NotModified);
        Ok(())
    }

    #[test]
    fn debug_is_censored() -> TestResult {
        let builder = Builder::new("super-secret");
        let fmt = format!("{builder:?}");
        assert!(!fmt.contains("super-secret"), "{fmt}");
        let creds = builder.build()?;
        let fmt = format!("{creds:?}");
        assert!(!fmt.contains("super-secret"), "{fmt}");
        assert!(fmt.contains("[censored]"), "{fmt}");
        Ok(())
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "blank")]
    #[test_case("line\nbreak"; "invalid header")]
    fn invalid(token: &str) {
        let e = Builder::new(token).build().unwrap_err();
        assert!(e.is_invalid(), "{e:?}");
    }
}
