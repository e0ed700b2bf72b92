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

use crate::api_header::ApiClient;
use auth::credentials::CacheableResource;
use auth::credentials::Credentials;
use gax::Result;
use gax::backoff_policy::BackoffPolicy;
use gax::client_builder::Error as BuilderError;
use gax::error::Error;
use gax::exponential_backoff::ExponentialBackoff;
use gax::options::RequestOptions;
use gax::polling_backoff_policy::PollingBackoffPolicy;
use gax::polling_error_policy::{DefaultTransient, PollingErrorPolicy};
use gax::response::{Parts, Response};
use gax::retry_policy::RetryPolicy;
use gax::retry_throttler::SharedRetryThrottler;
use http::Extensions;
use std::sync::Arc;

const OPC_CLIENT_INFO: &str = "opc-client-info";

type Decoder<O> = fn(reqwest::StatusCode, bytes::Bytes) -> Result<O>;

/// The HTTP executor shared by all the operations in a client.
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    api_client: ApiClient,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    retry_throttler: SharedRetryThrottler,
    polling_error_policy: Option<Arc<dyn PollingErrorPolicy>>,
    polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
}

impl ReqwestClient {
    pub async fn new(
        config: crate::options::ClientConfig,
        default_endpoint: &str,
        api_client: ApiClient,
    ) -> gax::client_builder::Result<Self> {
        let cred = Self::make_credentials(&config).await?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string());
        Ok(Self {
            inner,
            cred,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_client,
            retry_policy: config.retry_policy,
            backoff_policy: config.backoff_policy,
            retry_throttler: config.retry_throttler,
            polling_error_policy: config.polling_error_policy,
            polling_backoff_policy: config.polling_backoff_policy,
        })
    }

    /// Starts a request for `path`, relative to the service endpoint.
    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner.request(method, format!("{}{path}", &self.endpoint))
    }

    /// Sends a request with an optional JSON body and parses a JSON response.
    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned + Default>(
        &self,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<O>> {
        let builder = Self::with_json_body(accept_json(builder), body)?;
        self.send(builder, options, self::json_body::<O>).await
    }

    /// Sends a request with an optional JSON body, ignoring any response payload.
    pub async fn execute_no_content<I: serde::ser::Serialize>(
        &self,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let builder = Self::with_json_body(accept_json(builder), body)?;
        self.send(builder, options, self::discard_body).await
    }

    /// Sends a request with a raw payload and parses a JSON response.
    ///
    /// The caller sets the `content-type` header.
    pub async fn execute_with_payload<O: serde::de::DeserializeOwned + Default>(
        &self,
        builder: reqwest::RequestBuilder,
        payload: bytes::Bytes,
        options: RequestOptions,
    ) -> Result<Response<O>> {
        let builder = accept_json(builder).body(payload);
        self.send(builder, options, self::json_body::<O>).await
    }

    /// Sends a request with a raw payload, ignoring any response payload.
    pub async fn execute_with_payload_no_content(
        &self,
        builder: reqwest::RequestBuilder,
        payload: bytes::Bytes,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let builder = accept_json(builder).body(payload);
        self.send(builder, options, self::discard_body).await
    }

    /// Sends a request and returns the response payload as raw bytes.
    pub async fn download<I: serde::ser::Serialize>(
        &self,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<bytes::Bytes>> {
        let builder = Self::with_json_body(builder, body)?;
        self.send(builder, options, self::raw_body).await
    }

    fn with_json_body<I: serde::ser::Serialize>(
        builder: reqwest::RequestBuilder,
        body: Option<I>,
    ) -> Result<reqwest::RequestBuilder> {
        let Some(body) = body else {
            return Ok(builder);
        };
        let body = serde_json::to_vec(&body).map_err(Error::ser)?;
        Ok(builder
            .header(
                reqwest::header::CONTENT_TYPE,
                reqwest::header::HeaderValue::from_static("application/json"),
            )
            .body(body))
    }

    async fn send<O>(
        &self,
        mut builder: reqwest::RequestBuilder,
        options: RequestOptions,
        decoder: Decoder<O>,
    ) -> Result<Response<O>> {
        let user_agent = match options.user_agent() {
            Some(prefix) => format!("{prefix} {}", self.api_client.user_agent()),
            None => self.api_client.user_agent(),
        };
        builder = builder
            .header(
                reqwest::header::USER_AGENT,
                reqwest::header::HeaderValue::from_str(&user_agent).map_err(Error::ser)?,
            )
            .header(
                OPC_CLIENT_INFO,
                reqwest::header::HeaderValue::from_str(&self.api_client.opc_client_info())
                    .map_err(Error::ser)?,
            );
        self.retry_loop(builder, options, decoder).await
    }

    async fn make_credentials(
        config: &crate::options::ClientConfig,
    ) -> gax::client_builder::Result<Credentials> {
        if let Some(c) = config.cred.clone() {
            return Ok(c);
        }
        auth::credentials::Builder::default()
            .build()
            .map_err(BuilderError::cred)
    }

    async fn retry_loop<O>(
        &self,
        builder: reqwest::RequestBuilder,
        options: RequestOptions,
        decoder: Decoder<O>,
    ) -> Result<Response<O>> {
        let idempotent = options.idempotent().unwrap_or(false);
        let retry_policy = self.get_retry_policy(&options);
        let throttler = self.get_retry_throttler(&options);
        let backoff = self.get_backoff_policy(&options);
        let this = self.clone();
        let inner = async move |d| {
            let builder = builder
                .try_clone()
                .ok_or_else(|| Error::io("the request body cannot be sent more than once"))?;
            this.request_attempt(builder, &options, d, decoder).await
        };
        let sleep = async |d| tokio::time::sleep(d).await;
        let on_retry = |attempt: u32, error: &Error, delay: std::time::Duration| {
            tracing::warn!(attempt, ?delay, %error, "retrying request");
        };
        gax::retry_loop_internal::retry_loop_with_callback(
            inner,
            sleep,
            idempotent,
            throttler,
            retry_policy,
            backoff,
            on_retry,
        )
        .await
    }

    async fn request_attempt<O>(
        &self,
        mut builder: reqwest::RequestBuilder,
        options: &RequestOptions,
        remaining_time: Option<std::time::Duration>,
        decoder: Decoder<O>,
    ) -> Result<Response<O>> {
        builder = gax::retry_loop_internal::effective_timeout(options, remaining_time)
            .into_iter()
            .fold(builder, |b, t| b.timeout(t));
        let auth_headers = match self
            .cred
            .headers(Extensions::new())
            .await
            .map_err(Error::authentication)?
        {
            CacheableResource::New { data, .. } => data,
            CacheableResource::NotModified => http::HeaderMap::new(),
        };
        for (key, value) in auth_headers.iter() {
            builder = builder.header(key, value);
        }
        let response = builder.send().await.map_err(Self::map_send_error)?;
        if !response.status().is_success() {
            return self::to_http_error(response).await;
        }

        self::to_http_response(response, decoder).await
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }

    fn get_retry_policy(&self, options: &RequestOptions) -> Arc<dyn RetryPolicy> {
        options
            .retry_policy()
            .clone()
            .or_else(|| self.retry_policy.clone())
            .unwrap_or_else(gax::retry_policy::default_policy)
    }

    pub(crate) fn get_backoff_policy(&self, options: &RequestOptions) -> Arc<dyn BackoffPolicy> {
        options
            .backoff_policy()
            .clone()
            .or_else(|| self.backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }

    pub(crate) fn get_retry_throttler(&self, options: &RequestOptions) -> SharedRetryThrottler {
        options
            .retry_throttler()
            .clone()
            .unwrap_or_else(|| self.retry_throttler.clone())
    }

    pub fn get_polling_error_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn PollingErrorPolicy> {
        options
            .polling_error_policy()
            .clone()
            .or_else(|| self.polling_error_policy.clone())
            .unwrap_or_else(|| Arc::new(DefaultTransient))
    }

    pub fn get_polling_backoff_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn PollingBackoffPolicy> {
        options
            .polling_backoff_policy()
            .clone()
            .or_else(|| self.polling_backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }
}

/// The body type for requests without a payload.
#[derive(serde::Serialize)]
pub struct NoBody;

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let error = match gax::error::rpc::Status::try_from(&body) {
        Ok(status) => {
            Error::service_with_http_metadata(status, Some(status_code), Some(parts.headers))
        }
        Err(_) => Error::http(status_code, parts.headers, body),
    };
    Err(error)
}

async fn to_http_response<O>(
    response: reqwest::Response,
    decoder: Decoder<O>,
) -> Result<Response<O>> {
    let status = response.status();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();
    let body = decoder(status, body)?;

    Ok(Response::from_parts(
        Parts::new().set_headers(parts.headers),
        body,
    ))
}

fn json_body<O: serde::de::DeserializeOwned + Default>(
    status: reqwest::StatusCode,
    content: bytes::Bytes,
) -> Result<O> {
    // Many OCI operations return no payload, with 200 or 204.
    if content.is_empty()
        && (status == reqwest::StatusCode::NO_CONTENT || status == reqwest::StatusCode::OK)
    {
        return Ok(O::default());
    }
    serde_json::from_slice::<O>(&content).map_err(Error::deser)
}

fn accept_json(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    builder.header(
        reqwest::header::ACCEPT,
        reqwest::header::HeaderValue::from_static("application/json"),
    )
}

fn discard_body(_status: reqwest::StatusCode, _content: bytes::Bytes) -> Result<()> {
    Ok(())
}

fn raw_body(_status: reqwest::StatusCode, content: bytes::Bytes) -> Result<bytes::Bytes> {
    Ok(content)
}

#[cfg(test)]
mod tests {
    use gax::error::rpc::{Code, Status};
    use http::{HeaderMap, HeaderValue};
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    struct Widget {
        #[serde(default)]
        name: String,
    }

    #[tokio::test]
    async fn http_error_bytes() -> TestResult {
        let http_resp = http::Response::builder()
            .header("Content-Type", "text/plain")
            .status(502)
            .body("upstream connect error")?;
        let response: reqwest::Response = http_resp.into();
        let err = super::to_http_error::<()>(response)
            .await
            .expect_err("502 should be an error");
        assert_eq!(err.http_status_code(), Some(502));
        assert!(err.status().is_none(), "{err:?}");
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("text/plain"));
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from("upstream connect error")).as_ref()
        );
        Ok(())
    }

    #[tokio::test]
    async fn http_error_with_status() -> TestResult {
        let body = serde_json::json!({
            "code": "NotAuthorizedOrNotFound",
            "message": "Authorization failed or requested resource not found.",
        });
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .header("opc-request-id", "req-123")
            .status(404)
            .body(body.to_string())?;
        let response: reqwest::Response = http_resp.into();
        let err = super::to_http_error::<()>(response)
            .await
            .expect_err("404 should be an error");
        let want = Status::default()
            .set_code(Code::NotAuthorizedOrNotFound)
            .set_message("Authorization failed or requested resource not found.");
        assert_eq!(err.status(), Some(&want));
        assert_eq!(err.http_status_code(), Some(404));
        assert_eq!(err.opc_request_id(), Some("req-123"));
        Ok(())
    }

    #[tokio::test]
    #[test_case(reqwest::StatusCode::OK, "{}"; "200 with empty object")]
    #[test_case(reqwest::StatusCode::OK, ""; "200 with empty content")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, ""; "204 with empty content")]
    async fn empty_content(code: reqwest::StatusCode, content: &str) -> TestResult {
        let response = resp_from_code_content(code, content)?;
        let response = super::to_http_response(response, super::json_body::<Widget>).await?;
        assert_eq!(response.into_body(), Widget::default());
        Ok(())
    }

    #[tokio::test]
    async fn malformed_content() -> TestResult {
        let response = resp_from_code_content(reqwest::StatusCode::OK, "{not-json")?;
        let err = super::to_http_response(response, super::json_body::<Widget>)
            .await
            .expect_err("malformed payloads should fail");
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    #[test_case("{\"id\": \"ocid1.workrequest\"}"; "object")]
    #[test_case(""; "empty")]
    async fn discarded_content(content: &str) -> TestResult {
        let response = resp_from_code_content(reqwest::StatusCode::OK, content)?;
        let response = super::to_http_response(response, super::discard_body).await?;
        assert_eq!(response.into_body(), ());
        Ok(())
    }

    #[tokio::test]
    async fn raw_content() -> TestResult {
        let response = resp_from_code_content(reqwest::StatusCode::OK, "a,b,c\n1,2,3\n")?;
        let response = super::to_http_response(response, super::raw_body).await?;
        assert_eq!(response.body(), &bytes::Bytes::from_static(b"a,b,c\n1,2,3\n"));
        assert_eq!(
            response.headers().get("content-type"),
            Some(&HeaderValue::from_static("application/json"))
        );
        Ok(())
    }

    fn resp_from_code_content(
        code: reqwest::StatusCode,
        content: &str,
    ) -> http::Result<reqwest::Response> {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(code)
            .body(content.to_string())?;

        let response: reqwest::Response = http_resp.into();
        Ok(response)
    }
}
