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

//! These tests verify the retry wrapper in the HTTP client uses the retry
//! policy and idempotency as expected.
//!
//! The tests use an HTTP server that returns a sequence of responses. The
//! sequence is specific to each test, intended to drive the retry loop as
//! needed for that test.

#[cfg(test)]
mod tests {
    use gax::backoff_policy::BackoffPolicy;
    use gax::error::rpc::Code;
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::options::*;
    use gax::retry_policy::{DefaultRetryable, NeverRetry, RetryPolicyExt};
    use http::StatusCode;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use oci_gax_internal::api_header::ApiClient;
    use oci_gax_internal::http::ReqwestClient;
    use oci_gax_internal::options::ClientConfig;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::{Context, SubscriberExt};

    type Result<T> = anyhow::Result<T>;

    const API_CLIENT: ApiClient = ApiClient {
        name: "oci-test",
        version: "0.0.1",
    };

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn immediate_success() -> Result<()> {
        let server = start("GET", vec![success()]);
        let client = ReqwestClient::new(test_config(), &endpoint(&server), API_CLIENT).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());

        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, idempotent())
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn immediate_failure() -> Result<()> {
        let server = start("GET", vec![permanent()]);
        let client = ReqwestClient::new(test_config(), &endpoint(&server), API_CLIENT).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());

        let err = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, idempotent())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(400));
        assert_eq!(
            err.status().map(|s| s.code.clone()),
            Some(Code::InvalidParameter)
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_success() -> Result<()> {
        let server = start("GET", vec![transient(), transient(), success()]);
        let client = ReqwestClient::new(test_config(), &endpoint(&server), API_CLIENT).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());

        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, idempotent())
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_with_json_body() -> Result<()> {
        let server = start("POST", vec![transient(), success()]);
        let client = ReqwestClient::new(test_config(), &endpoint(&server), API_CLIENT).await?;
        let builder = client.builder(reqwest::Method::POST, "/retry".into());

        let response = client
            .execute::<serde_json::Value, serde_json::Value>(
                builder,
                Some(json!({"name": "test"})),
                idempotent(),
            )
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn non_idempotent_is_not_retried() -> Result<()> {
        let server = start("POST", vec![transient()]);
        let client = ReqwestClient::new(test_config(), &endpoint(&server), API_CLIENT).await?;
        let builder = client.builder(reqwest::Method::POST, "/retry".into());

        let mut options = RequestOptions::default();
        options.set_backoff_policy(test_backoff());
        options.set_idempotency(false);
        let err = client
            .execute::<serde_json::Value, serde_json::Value>(builder, Some(json!({})), options)
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn too_many_transients() -> Result<()> {
        let server = start("GET", vec![transient(), transient(), transient()]);
        let client = ReqwestClient::new(test_config(), &endpoint(&server), API_CLIENT).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());

        let mut options = idempotent();
        options.set_retry_policy(DefaultRetryable.with_attempt_limit(3));
        let err = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, options)
            .await
            .unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn client_policy_applies() -> Result<()> {
        let server = start("GET", vec![transient()]);
        let mut config = test_config();
        config.retry_policy = Some(std::sync::Arc::new(NeverRetry));
        let client = ReqwestClient::new(config, &endpoint(&server), API_CLIENT).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());

        let err = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, idempotent())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn payload_retried() -> Result<()> {
        let server = start("POST", vec![transient(), success()]);
        let client = ReqwestClient::new(test_config(), &endpoint(&server), API_CLIENT).await?;
        let builder = client
            .builder(reqwest::Method::POST, "/retry".into())
            .header("content-type", "text/csv");

        let response = client
            .execute_with_payload::<serde_json::Value>(
                builder,
                bytes::Bytes::from_static(b"a,b\n1,2\n"),
                idempotent(),
            )
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test]
    async fn retries_are_logged() -> Result<()> {
        let events = CapturedEvents::default();
        let subscriber = tracing_subscriber::registry().with(events.clone());
        let _guard = tracing::subscriber::set_default(subscriber);

        let server = start("GET", vec![transient(), success()]);
        let client = ReqwestClient::new(test_config(), &endpoint(&server), API_CLIENT).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());
        client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, idempotent())
            .await?;

        let captured = events.0.lock().expect("events are never poisoned");
        let retries = captured
            .iter()
            .filter(|e| e.get("message").map(String::as_str) == Some("retrying request"))
            .collect::<Vec<_>>();
        assert_eq!(retries.len(), 1, "{captured:?}");
        let retry = retries[0];
        assert_eq!(retry.get("level").map(String::as_str), Some("WARN"));
        assert_eq!(retry.get("attempt").map(String::as_str), Some("1"));
        let error = retry.get("error").map(String::as_str).unwrap_or_default();
        assert!(error.contains("try-again"), "{retry:?}");
        Ok(())
    }

    #[derive(Clone, Default)]
    struct CapturedEvents(Arc<Mutex<Vec<HashMap<String, String>>>>);

    impl<S: tracing::Subscriber> Layer<S> for CapturedEvents {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            fields.insert("level".to_string(), event.metadata().level().to_string());
            event.record(&mut FieldVisitor(&mut fields));
            if let Ok(mut events) = self.0.lock() {
                events.push(fields);
            }
        }
    }

    struct FieldVisitor<'a>(&'a mut HashMap<String, String>);

    impl tracing::field::Visit for FieldVisitor<'_> {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            self.0.insert(field.name().to_string(), format!("{value:?}"));
        }

        fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
            self.0.insert(field.name().to_string(), value.to_string());
        }
    }

    fn idempotent() -> RequestOptions {
        let mut options = RequestOptions::default();
        options.set_backoff_policy(test_backoff());
        options.set_idempotency(true);
        options
    }

    fn success() -> (StatusCode, String) {
        let response = json!({
            "status": "done"
        });
        (StatusCode::OK, response.to_string())
    }

    fn transient() -> (StatusCode, String) {
        let status = json!({
            "code": "ServiceUnavailable",
            "message": "try-again",
        });
        (StatusCode::SERVICE_UNAVAILABLE, status.to_string())
    }

    fn permanent() -> (StatusCode, String) {
        let status = json!({
            "code": "InvalidParameter",
            "message": "uh-oh",
        });
        (StatusCode::BAD_REQUEST, status.to_string())
    }

    fn test_config() -> ClientConfig {
        use auth::credentials::anonymous::Builder as Anonymous;
        let mut config = ClientConfig::default();
        config.cred = Anonymous::new().build().into();
        config
    }

    fn test_backoff() -> impl BackoffPolicy {
        ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(1))
            .with_maximum_delay(Duration::from_millis(1))
            .clamp()
    }

    fn endpoint(server: &Server) -> String {
        format!("http://{}", server.addr())
    }

    fn start(method: &'static str, responses: Vec<(StatusCode, String)>) -> Server {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(method, "/retry"))
                .times(responses.len())
                .respond_with(cycle(
                    responses
                        .into_iter()
                        .map(|(status, body)| to_responder(status, body))
                        .collect(),
                )),
        );
        server
    }

    fn to_responder(status: StatusCode, response: String) -> Box<dyn Responder> {
        Box::new(
            status_code(status.as_u16())
                .insert_header("Content-Type", "application/json")
                .body(response),
        )
    }
}
