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

//! Verify the operations that start work requests can be polled to completion.

#[cfg(test)]
mod tests {
    use auth::credentials::anonymous::Builder as Anonymous;
    use gax::exponential_backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
    use gax::retry_policy::LimitedAttemptCount;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use lro::{Poller, PollingResult};
    use oci_loganalytics::client::LogAnalytics;
    use oci_loganalytics::model;
    use serde_json::json;
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    const PURGE_PATH: &str = "/20200601/namespaces/ns/storage/actions/purgeData";
    const WORK_REQUEST_PATH: &str = "/20200601/namespaces/ns/storageWorkRequests/wr-123";

    async fn test_client(server: &Server) -> Result<LogAnalytics> {
        let client = LogAnalytics::builder()
            .with_endpoint(format!("http://{}/20200601", server.addr()))
            .with_credentials(Anonymous::new().build())
            .with_retry_policy(LimitedAttemptCount::new(2))
            .with_backoff_policy(test_backoff())
            .with_polling_backoff_policy(test_backoff())
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

    fn purge_details() -> model::PurgeStorageDataDetails {
        model::PurgeStorageDataDetails::new()
            .set_compartment_id("ocid1.compartment.oc1..test")
            .set_time_data_ended(time::macros::datetime!(2025-01-01 00:00:00 UTC))
            .set_data_type(model::StorageDataType::Log)
    }

    fn expect_purge(server: &Server) {
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", PURGE_PATH),
                request::headers(contains(("opc-retry-token", any()))),
                request::body(json_decoded(eq(json!({
                    "compartmentId": "ocid1.compartment.oc1..test",
                    "timeDataEnded": "2025-01-01T00:00:00Z",
                    "dataType": "LOG",
                })))),
            ])
            .respond_with(status_code(202).insert_header("opc-work-request-id", "wr-123")),
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn until_done() -> Result<()> {
        let server = Server::run();
        expect_purge(&server);
        server.expect(
            Expectation::matching(request::method_path("GET", WORK_REQUEST_PATH))
                .times(2)
                .respond_with(httptest::cycle![
                    json_encoded(json!({
                        "id": "wr-123",
                        "status": "IN_PROGRESS",
                        "percentComplete": 50,
                    })),
                    json_encoded(json!({
                        "id": "wr-123",
                        "status": "SUCCEEDED",
                        "percentComplete": 100,
                    })),
                ]),
        );

        let client = test_client(&server).await?;
        let work_request = client
            .purge_storage_data()
            .set_namespace_name("ns")
            .set_purge_storage_data_details(purge_details())
            .poller()
            .until_done()
            .await?;
        assert_eq!(work_request.id.as_deref(), Some("wr-123"));
        assert_eq!(work_request.status, Some(model::OperationStatus::Succeeded));
        assert_eq!(work_request.percent_complete, Some(100));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn poll_reports_progress() -> Result<()> {
        let server = Server::run();
        expect_purge(&server);
        server.expect(
            Expectation::matching(request::method_path("GET", WORK_REQUEST_PATH))
                .times(2)
                .respond_with(httptest::cycle![
                    json_encoded(json!({"status": "ACCEPTED", "percentComplete": 10})),
                    json_encoded(json!({"status": "SUCCEEDED", "percentComplete": 100})),
                ]),
        );

        let client = test_client(&server).await?;
        let mut poller = client
            .purge_storage_data()
            .set_namespace_name("ns")
            .set_purge_storage_data_details(purge_details())
            .poller();

        let started = poller.poll().await;
        assert!(
            matches!(started, Some(PollingResult::InProgress(None))),
            "{started:?}"
        );
        let progress = poller.poll().await;
        assert!(
            matches!(progress, Some(PollingResult::InProgress(Some(p))) if p == 10.0),
            "{progress:?}"
        );
        let done = poller.poll().await;
        assert!(
            matches!(done, Some(PollingResult::Completed(Ok(_)))),
            "{done:?}"
        );
        assert!(poller.poll().await.is_none());
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn failed_work_request() -> Result<()> {
        let server = Server::run();
        expect_purge(&server);
        server.expect(
            Expectation::matching(request::method_path("GET", WORK_REQUEST_PATH)).respond_with(
                json_encoded(json!({
                    "status": "FAILED",
                    "statusDetails": "the purge query is invalid",
                })),
            ),
        );

        let client = test_client(&server).await?;
        let err = client
            .purge_storage_data()
            .set_namespace_name("ns")
            .set_purge_storage_data_details(purge_details())
            .poller()
            .until_done()
            .await
            .unwrap_err();
        let status = err.status().expect("the error should include a status");
        assert_eq!(status.code.name(), lro::internal::WORK_REQUEST_FAILED);
        assert!(
            status.message.contains("the purge query is invalid"),
            "{status:?}"
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn missing_work_request_id() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", PURGE_PATH))
                .respond_with(status_code(202)),
        );

        let client = test_client(&server).await?;
        let err = client
            .purge_storage_data()
            .set_namespace_name("ns")
            .set_purge_storage_data_details(purge_details())
            .poller()
            .until_done()
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn start_error() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client
            .purge_storage_data()
            .set_namespace_name("ns")
            .poller()
            .until_done()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }
}
