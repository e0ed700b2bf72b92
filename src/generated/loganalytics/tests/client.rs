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

//! Verify the client sends the expected HTTP requests.

#[cfg(test)]
mod tests {
    use auth::credentials::anonymous::Builder as Anonymous;
    use gax::error::rpc::Code;
    use gax::exponential_backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
    use gax::retry_policy::LimitedAttemptCount;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use oci_loganalytics::client::LogAnalytics;
    use oci_loganalytics::model;
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    async fn test_client(server: &Server) -> Result<LogAnalytics> {
        let client = LogAnalytics::builder()
            .with_endpoint(format!("http://{}/20200601", server.addr()))
            .with_credentials(Anonymous::new().build())
            .with_retry_policy(LimitedAttemptCount::new(3))
            .with_backoff_policy(test_backoff())
            .build()
            .await?;
        Ok(client)
    }

    fn test_backoff() -> ExponentialBackoff {
        ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(1))
            .with_maximum_delay(Duration::from_millis(1))
            .clamp()
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_namespace() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/20200601/namespaces/my-namespace"),
                request::headers(contains(("accept", "application/json"))),
                request::headers(contains(("opc-request-id", "req-123"))),
            ])
            .respond_with(
                status_code(200)
                    .insert_header("content-type", "application/json")
                    .insert_header("opc-request-id", "req-123/server")
                    .body(
                        json!({
                            "namespaceName": "my-namespace",
                            "isOnboarded": true,
                            "isArchivingEnabled": false,
                        })
                        .to_string(),
                    ),
            ),
        );

        let client = test_client(&server).await?;
        let response = client
            .get_namespace()
            .set_namespace_name("my-namespace")
            .set_opc_request_id("req-123")
            .send()
            .await?;
        assert_eq!(response.opc_request_id(), Some("req-123/server"));
        let namespace = response.into_body();
        assert_eq!(namespace.namespace_name.as_deref(), Some("my-namespace"));
        assert_eq!(namespace.is_onboarded, Some(true));
        assert_eq!(namespace.is_archiving_enabled, Some(false));
        assert_eq!(namespace.is_logs_source_enabled, None);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn with_tracing() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/20200601/namespaces/ns"))
                .respond_with(json_encoded(json!({"namespaceName": "ns"}))),
        );

        let client = LogAnalytics::builder()
            .with_endpoint(format!("http://{}/20200601", server.addr()))
            .with_credentials(Anonymous::new().build())
            .with_tracing()
            .build()
            .await?;
        let namespace = client
            .get_namespace()
            .set_namespace_name("ns")
            .send()
            .await?
            .into_body();
        assert_eq!(namespace.namespace_name.as_deref(), Some("ns"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn path_parameters_are_escaped() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/20200601/namespaces/ns/logAnalyticsLogGroups/a%2Fb%20c",
            ))
            .respond_with(json_encoded(json!({"id": "a/b c"}))),
        );

        let client = test_client(&server).await?;
        let group = client
            .get_log_analytics_log_group()
            .set_namespace_name("ns")
            .set_log_analytics_log_group_id("a/b c")
            .send()
            .await?
            .into_body();
        assert_eq!(group.id.as_deref(), Some("a/b c"));
        Ok(())
    }

    #[tokio::test]
    async fn missing_required_path_parameter() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;

        let err = client.get_namespace().send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");

        let err = client
            .get_namespace()
            .set_namespace_name("   ")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn missing_required_query_parameter() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;

        let err = client
            .list_log_analytics_entities()
            .set_namespace_name("ns")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn missing_required_body() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;

        let err = client
            .create_log_analytics_log_group()
            .set_namespace_name("ns")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn unknown_enum_value_is_rejected() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;

        let err = client
            .list_log_analytics_entities()
            .set_namespace_name("ns")
            .set_compartment_id("ocid1.compartment.oc1..test")
            .set_sort_order(model::SortOrders::from("SIDEWAYS"))
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let fmt = format!("{err}");
        assert!(fmt.contains("SIDEWAYS"), "{fmt}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn query_parameters() -> Result<()> {
        use model::list_log_analytics_entities_request::CreationSourceType;
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/20200601/namespaces/ns/logAnalyticsEntities"),
                request::query(url_decoded(contains((
                    "compartmentId",
                    "ocid1.compartment.oc1..test"
                )))),
                request::query(url_decoded(contains(("entityTypeName", "Host (Linux)")))),
                request::query(url_decoded(contains(("entityTypeName", "Host (Windows)")))),
                request::query(url_decoded(contains(("creationSourceType", "EM_BRIDGE")))),
                request::query(url_decoded(contains(("creationSourceType", "DISCOVERY")))),
                request::query(url_decoded(contains(("sortOrder", "DESC")))),
                request::query(url_decoded(contains(("limit", "25")))),
                request::query(url_decoded(not(contains(("page", any()))))),
                request::query(url_decoded(not(contains(("name", any()))))),
            ])
            .respond_with(json_encoded(json!({"items": []}))),
        );

        let client = test_client(&server).await?;
        let response = client
            .list_log_analytics_entities()
            .set_namespace_name("ns")
            .set_compartment_id("ocid1.compartment.oc1..test")
            .set_entity_type_name(["Host (Linux)", "Host (Windows)"])
            .set_creation_source_type([CreationSourceType::EmBridge, CreationSourceType::Discovery])
            .set_sort_order(model::SortOrders::Desc)
            .set_limit(25)
            .send()
            .await?;
        assert!(response.body().items.is_empty(), "{response:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn mutating_requests_generate_retry_token() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/20200601/namespaces/ns/logAnalyticsLogGroups"),
                request::headers(contains(("opc-retry-token", any()))),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({
                    "displayName": "web-servers",
                    "compartmentId": "ocid1.compartment.oc1..test",
                })))),
            ])
            .respond_with(json_encoded(json!({
                "id": "ocid1.loganalyticsloggroup.oc1..test",
                "displayName": "web-servers",
                "timeCreated": "2025-03-01T10:00:00Z",
            }))),
        );

        let client = test_client(&server).await?;
        let group = client
            .create_log_analytics_log_group()
            .set_namespace_name("ns")
            .set_create_log_analytics_log_group_details(
                model::CreateLogAnalyticsLogGroupDetails::new()
                    .set_display_name("web-servers")
                    .set_compartment_id("ocid1.compartment.oc1..test"),
            )
            .send()
            .await?
            .into_body();
        assert_eq!(
            group.id.as_deref(),
            Some("ocid1.loganalyticsloggroup.oc1..test")
        );
        assert_eq!(
            group.time_created,
            Some(time::macros::datetime!(2025-03-01 10:00:00 UTC))
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_token_override() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "POST",
                    "/20200601/namespaces/ns/logAnalyticsLogGroups"
                ),
                request::headers(contains(("opc-retry-token", "my-token"))),
            ])
            .respond_with(json_encoded(json!({"id": "g1"}))),
        );

        let client = test_client(&server).await?;
        client
            .create_log_analytics_log_group()
            .set_namespace_name("ns")
            .set_opc_retry_token("my-token")
            .set_create_log_analytics_log_group_details(
                model::CreateLogAnalyticsLogGroupDetails::new().set_display_name("g1"),
            )
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_token_is_stable_across_attempts() -> Result<()> {
        let tokens = Arc::new(Mutex::new(Vec::new()));
        let recorded = tokens.clone();
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/20200601/namespaces/ns/logAnalyticsLogGroups"),
                move |req: &http::Request<bytes::Bytes>| {
                    let token = req
                        .headers()
                        .get("opc-retry-token")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    if let (Some(token), Ok(mut tokens)) = (token, recorded.lock()) {
                        tokens.push(token);
                    }
                    true
                },
            ])
            .times(2)
            .respond_with(httptest::cycle![
                status_code(503)
                    .insert_header("content-type", "application/json")
                    .body(
                        json!({"code": "ServiceUnavailable", "message": "try-again"}).to_string()
                    ),
                json_encoded(json!({"id": "g1"})),
            ]),
        );

        let client = test_client(&server).await?;
        let group = client
            .create_log_analytics_log_group()
            .set_namespace_name("ns")
            .set_create_log_analytics_log_group_details(
                model::CreateLogAnalyticsLogGroupDetails::new().set_display_name("g1"),
            )
            .send()
            .await?
            .into_body();
        assert_eq!(group.id.as_deref(), Some("g1"));

        let tokens = tokens.lock().expect("tokens are never poisoned").clone();
        assert!(tokens.len() >= 2, "{tokens:?}");
        assert_eq!(tokens[0].len(), 32, "{tokens:?}");
        assert!(tokens.iter().all(|t| t == &tokens[0]), "{tokens:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn storage_work_request_paths() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/20200601/namespaces/ns/storageWorkRequests/wr-1",
            ))
            .respond_with(json_encoded(json!({"id": "wr-1", "status": "SUCCEEDED"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/20200601/namespaces/ns/storageWorkRequests"),
                request::query(url_decoded(contains(("compartmentId", "c1")))),
            ])
            .respond_with(json_encoded(json!({"items": [{"id": "wr-1"}]}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "GET",
                    "/20200601/namespaces/ns/storageWorkRequests/wr-1/errors"
                ),
                request::query(url_decoded(contains(("compartmentId", "c1")))),
            ])
            .respond_with(json_encoded(json!({"items": []}))),
        );

        let client = test_client(&server).await?;
        let work_request = client
            .get_storage_work_request()
            .set_namespace_name("ns")
            .set_work_request_id("wr-1")
            .send()
            .await?
            .into_body();
        assert_eq!(work_request.id.as_deref(), Some("wr-1"));
        assert_eq!(work_request.status, Some(model::OperationStatus::Succeeded));

        let list = client
            .list_storage_work_requests()
            .set_namespace_name("ns")
            .set_compartment_id("c1")
            .send()
            .await?
            .into_body();
        assert_eq!(list.items.len(), 1);

        let errors = client
            .list_storage_work_request_errors()
            .set_namespace_name("ns")
            .set_work_request_id("wr-1")
            .set_compartment_id("c1")
            .send()
            .await?
            .into_body();
        assert!(errors.items.is_empty(), "{errors:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn unprocessed_data_bucket_paths() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "POST",
                    "/20200601/namespaces/ns/storage/actions/setUnprocessedDataBucket"
                ),
                request::query(url_decoded(contains(("bucketName", "unprocessed")))),
                request::query(url_decoded(contains(("isEnabled", "true")))),
                request::headers(contains(("opc-retry-token", any()))),
            ])
            .respond_with(json_encoded(json!({
                "namespace": "ns",
                "bucket": "unprocessed",
                "isEnabled": true,
            }))),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/20200601/namespaces/ns/storage/unprocessedDataBucket",
            ))
            .respond_with(json_encoded(json!({"namespace": "ns", "bucket": "unprocessed"}))),
        );

        let client = test_client(&server).await?;
        let bucket = client
            .set_unprocessed_data_bucket()
            .set_namespace_name("ns")
            .set_bucket_name("unprocessed")
            .set_is_enabled(true)
            .send()
            .await?
            .into_body();
        assert_eq!(bucket.is_enabled, Some(true));

        let bucket = client
            .get_unprocessed_data_bucket()
            .set_namespace_name("ns")
            .send()
            .await?
            .into_body();
        assert_eq!(bucket.bucket.as_deref(), Some("unprocessed"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn association_paths() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/20200601/namespaces/ns/entityAssociations"),
                request::query(url_decoded(contains(("entityId", "e1")))),
            ])
            .respond_with(json_encoded(json!({"items": []}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/20200601/namespaces/ns/sourceAssociations"),
                request::query(url_decoded(contains(("sourceName", "s1")))),
            ])
            .respond_with(json_encoded(json!({"items": []}))),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/20200601/namespaces/ns/associationSummary",
            ))
            .respond_with(json_encoded(json!({"associationCount": 3}))),
        );

        let client = test_client(&server).await?;
        client
            .list_entity_source_associations()
            .set_namespace_name("ns")
            .set_compartment_id("c1")
            .set_entity_id("e1")
            .send()
            .await?;
        client
            .list_source_associations()
            .set_namespace_name("ns")
            .set_compartment_id("c1")
            .set_source_name("s1")
            .send()
            .await?;
        let summary = client
            .get_association_summary()
            .set_namespace_name("ns")
            .set_compartment_id("c1")
            .send()
            .await?
            .into_body();
        assert_eq!(summary.association_count, Some(3));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn timestamp_out_of_range() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client
            .get_recalled_data_size()
            .set_namespace_name("ns")
            .set_time_data_started(time::OffsetDateTime::UNIX_EPOCH.replace_year(-1)?)
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(err.to_string().contains("timeDataStarted"), "{err}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn upload_log_file_defaults() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/20200601/namespaces/ns/actions/uploadLogFile"),
                request::query(url_decoded(contains(("uploadName", "nightly")))),
                request::query(url_decoded(contains(("logSourceName", "Linux Syslog Logs")))),
                request::query(url_decoded(contains(("filename", "messages.log")))),
                request::headers(contains(("opc-meta-loggrpid", "ocid1.loggroup"))),
                request::headers(contains(("content-type", "application/octet-stream"))),
                request::headers(contains(("opc-retry-token", any()))),
                request::headers(not(contains(("expect", any())))),
                request::body("Mar  1 10:00:00 host sshd[42]: accepted\n"),
            ])
            .respond_with(json_encoded(json!({
                "reference": "upload-ref-1",
                "name": "nightly",
                "warningsCount": 0,
            }))),
        );

        let client = test_client(&server).await?;
        let upload = client
            .upload_log_file()
            .set_namespace_name("ns")
            .set_upload_name("nightly")
            .set_log_source_name("Linux Syslog Logs")
            .set_filename("messages.log")
            .set_opc_meta_loggrpid("ocid1.loggroup")
            .set_body("Mar  1 10:00:00 host sshd[42]: accepted\n")
            .send()
            .await?
            .into_body();
        assert_eq!(upload.reference.as_deref(), Some("upload-ref-1"));
        assert_eq!(upload.warnings_count, Some(0));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn upload_log_file_overrides() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/20200601/namespaces/ns/actions/uploadLogFile"),
                request::headers(contains(("content-type", "application/zip"))),
                request::headers(contains(("expect", "100-Continue"))),
                request::headers(contains(("opc-retry-token", "upload-1"))),
            ])
            .respond_with(json_encoded(json!({"reference": "upload-ref-2"}))),
        );

        let client = test_client(&server).await?;
        let upload = client
            .upload_log_file()
            .set_namespace_name("ns")
            .set_upload_name("nightly")
            .set_log_source_name("Linux Syslog Logs")
            .set_filename("logs.zip")
            .set_opc_meta_loggrpid("ocid1.loggroup")
            .set_content_type("application/zip")
            .set_expect("100-Continue")
            .set_opc_retry_token("upload-1")
            .set_body(bytes::Bytes::from_static(b"PK\x03\x04"))
            .send()
            .await?
            .into_body();
        assert_eq!(upload.reference.as_deref(), Some("upload-ref-2"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_without_content() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "DELETE",
                    "/20200601/namespaces/ns/logAnalyticsEntities/ocid1.entity"
                ),
                request::headers(contains(("if-match", "etag-1"))),
                request::query(url_decoded(contains(("isForceDelete", "true")))),
            ])
            .respond_with(status_code(204)),
        );

        let client = test_client(&server).await?;
        client
            .delete_log_analytics_entity()
            .set_namespace_name("ns")
            .set_log_analytics_entity_id("ocid1.entity")
            .set_if_match("etag-1")
            .set_is_force_delete(true)
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn service_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/20200601/namespaces/ns/logAnalyticsLogGroups/missing",
            ))
            .respond_with(
                status_code(404)
                    .insert_header("content-type", "application/json")
                    .body(
                        json!({
                            "code": "NotAuthorizedOrNotFound",
                            "message": "log group not found",
                        })
                        .to_string(),
                    ),
            ),
        );

        let client = test_client(&server).await?;
        let err = client
            .get_log_analytics_log_group()
            .set_namespace_name("ns")
            .set_log_analytics_log_group_id("missing")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        let status = err.status().expect("the error should include a status");
        assert_eq!(status.code, Code::NotAuthorizedOrNotFound);
        assert_eq!(status.message, "log group not found");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn pagination() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/20200601/namespaces/ns/logAnalyticsLogGroups"),
                request::query(url_decoded(not(contains(("page", any()))))),
            ])
            .respond_with(
                status_code(200)
                    .insert_header("content-type", "application/json")
                    .insert_header("opc-next-page", "page-2")
                    .body(json!({"items": [{"id": "g1"}, {"id": "g2"}]}).to_string()),
            ),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/20200601/namespaces/ns/logAnalyticsLogGroups"),
                request::query(url_decoded(contains(("page", "page-2")))),
            ])
            .respond_with(json_encoded(json!({"items": [{"id": "g3"}]}))),
        );

        let client = test_client(&server).await?;
        let mut items = client
            .list_log_analytics_log_groups()
            .set_namespace_name("ns")
            .set_compartment_id("ocid1.compartment.oc1..test")
            .by_item();
        let mut ids = Vec::new();
        while let Some(item) = items.next().await {
            ids.push(item?.id.unwrap_or_default());
        }
        assert_eq!(ids, vec!["g1", "g2", "g3"]);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn pagination_by_page() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/20200601/namespaces/ns/logAnalyticsLogGroups"),
                request::query(url_decoded(contains(("page", "seed")))),
            ])
            .respond_with(json_encoded(json!({"items": [{"id": "g9"}]}))),
        );

        let client = test_client(&server).await?;
        let mut pages = client
            .list_log_analytics_log_groups()
            .set_namespace_name("ns")
            .set_compartment_id("ocid1.compartment.oc1..test")
            .set_page("seed")
            .by_page();
        let page = pages.next().await.transpose()?;
        let page = page.expect("the first page should be returned");
        assert_eq!(page.body().items.len(), 1);
        assert!(pages.next().await.is_none());
        Ok(())
    }
}
