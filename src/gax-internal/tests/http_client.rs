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

//! Verify the HTTP client adds the client identification and authentication
//! headers, and decodes responses.

#[cfg(test)]
mod tests {
    use auth::credentials::{CacheableResource, Credentials, CredentialsProvider, EntityTag};
    use auth::errors::CredentialsError;
    use gax::options::*;
    use gax::retry_policy::{DefaultRetryable, RetryPolicyExt};
    use http::header::{HeaderName, HeaderValue};
    use http::{Extensions, HeaderMap};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use oci_gax_internal::api_header::ApiClient;
    use oci_gax_internal::http::{NoBody, ReqwestClient};
    use oci_gax_internal::options::ClientConfig;
    use serde_json::json;
    use std::error::Error as _;
    use std::time::Duration;

    type AuthResult<T> = std::result::Result<T, CredentialsError>;
    type Result<T> = anyhow::Result<T>;

    const API_CLIENT: ApiClient = ApiClient {
        name: "oci-test",
        version: "0.0.1",
    };

    mockall::mock! {
        #[derive(Debug)]
        Credentials {}

        impl CredentialsProvider for Credentials {
            async fn headers(&self, extensions: Extensions) -> AuthResult<CacheableResource<HeaderMap>>;
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn client_headers() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/20200601/namespaces/ns"),
                request::headers(contains(("accept", "application/json"))),
                request::headers(contains(("opc-client-info", "Oracle-RustSDK/0.0.1"))),
                request::headers(contains((
                    "user-agent",
                    matches("^my-app/1.0 Oracle-RustSDK/0.0.1 \\(oci-test/0.0.1; rust/"),
                ))),
            ])
            .respond_with(json_encoded(json!({"namespaceName": "ns"}))),
        );
        let endpoint = format!("http://{}/20200601/", server.addr());
        let client = ReqwestClient::new(test_config(), &endpoint, API_CLIENT).await?;
        let builder = client.builder(reqwest::Method::GET, "/namespaces/ns".into());
        let mut options = RequestOptions::default();
        options.set_user_agent("my-app/1.0");
        let response = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await?;
        assert_eq!(response.into_body(), json!({"namespaceName": "ns"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn endpoint_override() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/override/test"))
                .respond_with(json_encoded(json!({}))),
        );
        let mut config = test_config();
        config.endpoint = Some(format!("http://{}/override", server.addr()));
        let client = ReqwestClient::new(config, "https://unused.example.com", API_CLIENT).await?;
        let builder = client.builder(reqwest::Method::GET, "/test".into());
        client
            .execute::<NoBody, serde_json::Value>(builder, None, RequestOptions::default())
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn auth_headers() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/test"),
                request::headers(contains(("auth-key-1", "auth-value-1"))),
                request::headers(contains(("auth-key-2", "auth-value-2"))),
            ])
            .respond_with(json_encoded(json!({"status": "done"}))),
        );

        let mut mock = MockCredentials::new();
        let header = HeaderMap::from_iter([
            (
                HeaderName::from_static("auth-key-1"),
                HeaderValue::from_static("auth-value-1"),
            ),
            (
                HeaderName::from_static("auth-key-2"),
                HeaderValue::from_static("auth-value-2"),
            ),
        ]);
        mock.expect_headers().return_once(|_extensions| {
            Ok(CacheableResource::New {
                entity_tag: EntityTag::default(),
                data: header,
            })
        });
        let mut config = ClientConfig::default();
        config.cred = Some(Credentials::from(mock));
        let client = ReqwestClient::new(config, &format!("http://{}", server.addr()), API_CLIENT)
            .await?;

        let builder = client.builder(reqwest::Method::GET, "/test".into());
        let response = client
            .execute::<NoBody, serde_json::Value>(builder, None, RequestOptions::default())
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn auth_error_transient() -> Result<()> {
        let server = Server::run();
        let mut mock = MockCredentials::new();
        mock.expect_headers()
            .times(3)
            .returning(|_extensions| Err(CredentialsError::from_msg(true, "mock transient error")));
        let mut config = ClientConfig::default();
        config.cred = Some(Credentials::from(mock));
        let client = ReqwestClient::new(config, &format!("http://{}", server.addr()), API_CLIENT)
            .await?;

        // Transient authentication errors are retried even for non-idempotent
        // requests, the request was never sent.
        let mut options = RequestOptions::default();
        options.set_idempotency(false);
        options.set_retry_policy(DefaultRetryable.with_attempt_limit(3));
        options.set_backoff_policy(test_backoff());
        let builder = client.builder(reqwest::Method::POST, "/test".into());
        let err = client
            .execute::<serde_json::Value, serde_json::Value>(builder, Some(json!({})), options)
            .await
            .unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn auth_error_permanent() -> Result<()> {
        let server = Server::run();
        let mut mock = MockCredentials::new();
        mock.expect_headers()
            .times(1)
            .returning(|_extensions| Err(CredentialsError::from_msg(false, "mock permanent error")));
        let mut config = ClientConfig::default();
        config.cred = Some(Credentials::from(mock));
        let client = ReqwestClient::new(config, &format!("http://{}", server.addr()), API_CLIENT)
            .await?;

        let builder = client.builder(reqwest::Method::GET, "/test".into());
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_authentication(), "{err:?}");
        let source = err
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(matches!(source, Some(e) if !e.is_transient()), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn download() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/export"),
                request::body(json_decoded(eq(json!({"queryString": "*"})))),
            ])
            .respond_with(
                status_code(200)
                    .insert_header("content-type", "text/csv")
                    .body("a,b\n1,2\n"),
            ),
        );
        let client = ReqwestClient::new(
            test_config(),
            &format!("http://{}", server.addr()),
            API_CLIENT,
        )
        .await?;
        let builder = client.builder(reqwest::Method::POST, "/export".into());
        let response = client
            .download(
                builder,
                Some(json!({"queryString": "*"})),
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(
            response.headers().get("content-type"),
            Some(&HeaderValue::from_static("text/csv"))
        );
        assert_eq!(response.into_body(), bytes::Bytes::from_static(b"a,b\n1,2\n"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn attempt_timeout() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/slow"))
                .respond_with(delay_and_then(Duration::from_secs(5), status_code(200))),
        );
        let client = ReqwestClient::new(
            test_config(),
            &format!("http://{}", server.addr()),
            API_CLIENT,
        )
        .await?;
        let builder = client.builder(reqwest::Method::GET, "/slow".into());
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_millis(50));
        options.set_retry_policy(gax::retry_policy::NeverRetry);
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn default_credentials_missing() {
        let _e = scoped_env::ScopedEnv::remove("OCI_SECURITY_TOKEN");
        let err = ReqwestClient::new(ClientConfig::default(), "https://unused", API_CLIENT)
            .await
            .unwrap_err();
        assert!(err.is_default_credentials(), "{err:?}");
    }

    fn test_config() -> ClientConfig {
        use auth::credentials::anonymous::Builder as Anonymous;
        let mut config = ClientConfig::default();
        config.cred = Anonymous::new().build().into();
        config
    }

    fn test_backoff() -> gax::exponential_backoff::ExponentialBackoff {
        gax::exponential_backoff::ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(1))
            .with_maximum_delay(Duration::from_millis(1))
            .clamp()
    }
}
