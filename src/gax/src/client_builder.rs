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

//! Provides a generic builder for OCI clients.
//!
//! The OCI client libraries for Rust use this builder to configure clients.
//! Applications use [ClientBuilder] through a client-specific alias, such as
//! `oci_loganalytics::builder::log_analytics::ClientBuilder`.
//!
//! # Example
//! ```ignore
//! # use oci_gax::retry_policy::{DefaultRetryable, RetryPolicyExt};
//! let client = LogAnalytics::builder()
//!     .with_endpoint("https://loganalytics.eu-frankfurt-1.oci.oraclecloud.com/20200601")
//!     .with_retry_policy(DefaultRetryable.with_attempt_limit(3))
//!     .build()
//!     .await?;
//! ```

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::polling_backoff_policy::{PollingBackoffPolicy, PollingBackoffPolicyArg};
use crate::polling_error_policy::{PollingErrorPolicy, PollingErrorPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use crate::retry_throttler::{RetryThrottlerArg, SharedRetryThrottler};
use std::sync::Arc;

/// The result of building a client.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// The default credentials could not be created.
    ///
    /// Set the credentials explicitly with `with_credentials()`, or check the
    /// environment variables used by the default credentials.
    pub fn is_default_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::DefaultCredentials(_))
    }

    /// The transport client could not be created.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    #[doc(hidden)]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::DefaultCredentials(source.into()))
    }

    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not create default credentials")]
    DefaultCredentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// `F` is a factory creating the client from the configuration, `Cr` is the
/// credentials type.
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    config: internal::ClientConfig<Cr>,
    factory: F,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint, including the API version path.
    ///
    /// OCI services are regional, use this to target a region other than the
    /// default, or a private endpoint.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the authentication credentials.
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Configure the retry policy.
    ///
    /// The client libraries retry idempotent requests that fail with
    /// transient errors. The retry policy decides which errors are transient
    /// and how long the retry loop may continue.
    pub fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.config.retry_policy = Some(v.into().into());
        self
    }

    /// Configure the retry backoff policy.
    pub fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.backoff_policy = Some(v.into().into());
        self
    }

    /// Configure the retry throttler.
    ///
    /// All requests made by the client share the throttler.
    pub fn with_retry_throttler<V: Into<RetryThrottlerArg>>(mut self, v: V) -> Self {
        self.config.retry_throttler = v.into().into();
        self
    }

    /// Configure the polling error policy for work requests.
    pub fn with_polling_error_policy<V: Into<PollingErrorPolicyArg>>(mut self, v: V) -> Self {
        self.config.polling_error_policy = Some(v.into().into());
        self
    }

    /// Configure the polling backoff policy for work requests.
    pub fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.polling_backoff_policy = Some(v.into().into());
        self
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> super::ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    ///
    /// A common client configuration shared by all clients.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub cred: Option<Cr>,
        pub tracing: bool,
        pub retry_policy: Option<Arc<dyn RetryPolicy>>,
        pub backoff_policy: Option<Arc<dyn BackoffPolicy>>,
        pub retry_throttler: SharedRetryThrottler,
        pub polling_error_policy: Option<Arc<dyn PollingErrorPolicy>>,
        pub polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
    }

    impl<Cr> Default for ClientConfig<Cr> {
        fn default() -> Self {
            use crate::retry_throttler::AdaptiveThrottler;
            use std::sync::Mutex;
            Self {
                endpoint: None,
                cred: None,
                tracing: false,
                retry_policy: None,
                backoff_policy: None,
                retry_throttler: Arc::new(Mutex::new(AdaptiveThrottler::default())),
                polling_error_policy: None,
                polling_backoff_policy: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use crate::exponential_backoff::ExponentialBackoffBuilder;
    use crate::polling_error_policy::{AlwaysContinue, PollingErrorPolicyExt};
    use crate::retry_policy::{AlwaysRetry, RetryPolicyExt};
    use crate::retry_throttler::CircuitBreaker;
    use std::error::Error as _;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct FakeCredentials(String);

    struct FakeClient(ClientConfig<FakeCredentials>);

    struct FakeFactory;

    impl ClientFactory for FakeFactory {
        type Client = FakeClient;
        type Credentials = FakeCredentials;
        async fn build(self, config: ClientConfig<FakeCredentials>) -> Result<FakeClient> {
            Ok(FakeClient(config))
        }
    }

    fn builder() -> ClientBuilder<FakeFactory, FakeCredentials> {
        new_builder(FakeFactory)
    }

    #[tokio::test]
    async fn defaults() -> anyhow::Result<()> {
        let config = builder().build().await?.0;
        assert_eq!(config.endpoint, None);
        assert_eq!(config.cred, None);
        assert!(!config.tracing);
        assert!(
            format!("{config:?}").contains("AdaptiveThrottler"),
            "{config:?}"
        );
        assert!(config.retry_policy.is_none(), "{config:?}");
        assert!(config.backoff_policy.is_none(), "{config:?}");
        assert!(config.polling_error_policy.is_none(), "{config:?}");
        assert!(config.polling_backoff_policy.is_none(), "{config:?}");
        Ok(())
    }

    #[tokio::test]
    async fn all_settings() -> anyhow::Result<()> {
        let config = builder()
            .with_endpoint("http://localhost:8080/20200601")
            .with_tracing()
            .with_credentials(FakeCredentials("test-only".into()))
            .with_retry_policy(AlwaysRetry.with_attempt_limit(3))
            .with_backoff_policy(ExponentialBackoffBuilder::new().clamp())
            .with_retry_throttler(CircuitBreaker::default())
            .with_polling_error_policy(AlwaysContinue.with_attempt_limit(5))
            .with_polling_backoff_policy(ExponentialBackoffBuilder::new().clamp())
            .build()
            .await?
            .0;
        assert_eq!(
            config.endpoint.as_deref(),
            Some("http://localhost:8080/20200601")
        );
        assert!(config.tracing);
        assert_eq!(config.cred, Some(FakeCredentials("test-only".into())));
        assert!(config.retry_policy.is_some(), "{config:?}");
        assert!(config.backoff_policy.is_some(), "{config:?}");
        assert!(
            format!("{config:?}").contains("CircuitBreaker"),
            "{config:?}"
        );
        assert!(config.polling_error_policy.is_some(), "{config:?}");
        assert!(config.polling_backoff_policy.is_some(), "{config:?}");
        Ok(())
    }

    #[test]
    fn errors() {
        let e = Error::cred("missing token");
        assert!(e.is_default_credentials(), "{e:?}");
        assert!(!e.is_transport(), "{e:?}");
        assert!(e.source().is_some(), "{e:?}");

        let e = Error::transport("cannot create TLS config");
        assert!(e.is_transport(), "{e:?}");
        assert!(!e.is_default_credentials(), "{e:?}");
    }
}
