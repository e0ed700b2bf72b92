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

//! Types and functions to work with OCI credentials.

use crate::BuildResult;
use crate::build_errors::Error as BuilderError;
use crate::errors::CredentialsError;
use http::{Extensions, HeaderMap};
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

pub mod anonymous;
pub mod security_token;

/// The environment variable holding a session token for the default
/// credentials.
pub const OCI_SECURITY_TOKEN: &str = "OCI_SECURITY_TOKEN";

pub(crate) type Result<T> = std::result::Result<T, CredentialsError>;

static NEXT_ENTITY_TAG: AtomicU64 = AtomicU64::new(0);

/// Identifies a version of the headers returned by a [Credentials] object.
///
/// Callers include the last tag they received in the request [Extensions].
/// If the headers have not changed, the credentials return
/// [CacheableResource::NotModified].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntityTag(u64);

impl EntityTag {
    /// Creates a new, unique, entity tag.
    pub fn new() -> Self {
        Self(NEXT_ENTITY_TAG.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for EntityTag {
    fn default() -> Self {
        Self::new()
    }
}

/// A resource that may be cached by the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum CacheableResource<T> {
    /// The resource has not changed since the version in the request.
    NotModified,
    /// A new version of the resource.
    New { entity_tag: EntityTag, data: T },
}

/// An implementation of [CredentialsProvider].
///
/// The client libraries call [headers][Credentials::headers] before each
/// request attempt, and add the returned headers to the request.
///
/// `Credentials` are cheap to clone, all the clones share the same
/// implementation.
#[derive(Clone, Debug)]
pub struct Credentials {
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers to authenticate a request.
    pub async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>> {
        self.inner.headers(extensions).await
    }
}

/// The interface between the client libraries and credentials.
///
/// Implement this trait to plug in a custom authentication mechanism, for
/// example, request signing or tokens fetched from an external process.
pub trait CredentialsProvider: std::fmt::Debug {
    /// Returns the headers to authenticate a request.
    ///
    /// Return a transient [CredentialsError] if the problem may go away,
    /// the client libraries retry these errors even for non-idempotent
    /// requests.
    fn headers(
        &self,
        extensions: Extensions,
    ) -> impl Future<Output = Result<CacheableResource<HeaderMap>>> + Send;
}

pub(crate) mod dynamic {
    use super::{CacheableResource, Extensions, HeaderMap, Result};

    /// A dyn-compatible, crate-private version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>>;
    }

    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>> {
            T::headers(self, extensions).await
        }
    }
}

/// Creates the default credentials.
///
/// The default credentials use the session token in the `OCI_SECURITY_TOKEN`
/// environment variable. Building fails if the variable is not set.
///
/// # Example
/// ```
/// # use oci_auth::credentials::Builder;
/// match Builder::default().build() {
///     Ok(credentials) => println!("using {credentials:?}"),
///     Err(e) if e.is_not_found() => println!("no default credentials: {e}"),
///     Err(e) => println!("cannot use the default credentials: {e}"),
/// }
/// ```
#[derive(Debug, Default)]
pub struct Builder {}

impl Builder {
    /// Returns the default [Credentials].
    pub fn build(self) -> BuildResult<Credentials> {
        let token = match std::env::var(OCI_SECURITY_TOKEN) {
            Ok(t) if !t.trim().is_empty() => t,
            Ok(_) => {
                return Err(BuilderError::not_found(format!(
                    "the {OCI_SECURITY_TOKEN} environment variable is empty"
                )));
            }
            Err(e) => {
                return Err(BuilderError::not_found(format!(
                    "cannot read the {OCI_SECURITY_TOKEN} environment variable: {e}"
                )));
            }
        };
        security_token::Builder::new(token).build()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use http::HeaderValue;
    use scoped_env::ScopedEnv;

    type TestResult = anyhow::Result<()>;

    static_assertions::assert_impl_all!(Credentials: Clone, Send, Sync, std::fmt::Debug);

    mockall::mock! {
        #[derive(Debug)]
        Provider {}

        impl CredentialsProvider for Provider {
            async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>>;
        }
    }

    pub(crate) fn get_headers(resource: CacheableResource<HeaderMap>) -> HeaderMap {
        match resource {
            CacheableResource::New { data, .. } => data,
            CacheableResource::NotModified => HeaderMap::new(),
        }
    }

    #[test]
    fn entity_tags_are_unique() {
        let a = EntityTag::new();
        let b = EntityTag::default();
        assert_ne!(a, b);
        assert_eq!(a.clone(), a);
    }

    #[tokio::test]
    async fn from_provider() -> TestResult {
        let mut mock = MockProvider::new();
        mock.expect_headers().times(1).returning(|_| {
            let headers = HeaderMap::from_iter([(
                http::header::AUTHORIZATION,
                HeaderValue::from_static("Signature test"),
            )]);
            Ok(CacheableResource::New {
                entity_tag: EntityTag::new(),
                data: headers,
            })
        });
        let credentials = Credentials::from(mock);
        let headers = get_headers(credentials.headers(Extensions::new()).await?);
        assert_eq!(
            headers.get(http::header::AUTHORIZATION),
            Some(&HeaderValue::from_static("Signature test"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn provider_error() {
        let mut mock = MockProvider::new();
        mock.expect_headers()
            .times(1)
            .returning(|_| Err(CredentialsError::from_msg(true, "try again")));
        let credentials = Credentials::from(mock);
        let e = credentials.headers(Extensions::new()).await.unwrap_err();
        assert!(e.is_transient(), "{e:?}");
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn default_from_environment() -> TestResult {
        let _e = ScopedEnv::set(OCI_SECURITY_TOKEN, "env-token");
        let credentials = Builder::default().build()?;
        let headers = get_headers(credentials.headers(Extensions::new()).await?);
        assert_eq!(
            headers.get(http::header::AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer env-token"))
        );
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn default_missing() {
        let _e = ScopedEnv::remove(OCI_SECURITY_TOKEN);
        let e = Builder::default().build().unwrap_err();
        assert!(e.is_not_found(), "{e:?}");
        assert!(e.to_string().contains(OCI_SECURITY_TOKEN), "{e}");
    }

    #[test]
    #[serial_test::serial]
    fn default_blank() {
        let _e = ScopedEnv::set(OCI_SECURITY_TOKEN, "  ");
        let e = Builder::default().build().unwrap_err();
        assert!(e.is_not_found(), "{e:?}");
    }
}
