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

//! Verify applications can mock the client.

#[cfg(test)]
mod tests {
    use gax::options::RequestOptions;
    use gax::response::{Parts, Response};
    use lro::Poller;
    use oci_loganalytics::client::LogAnalytics;
    use oci_loganalytics::model::*;
    use oci_loganalytics::stub;
    use std::sync::Arc;
    use std::time::Duration;

    type Result<T> = oci_loganalytics::Result<T>;

    mockall::mock! {
        #[derive(Debug)]
        LogAnalytics {}
        impl stub::LogAnalytics for LogAnalytics {
            async fn get_namespace(&self, req: GetNamespaceRequest, options: RequestOptions) -> Result<Response<Namespace>>;
            async fn list_log_analytics_log_groups(&self, req: ListLogAnalyticsLogGroupsRequest, options: RequestOptions) -> Result<Response<LogAnalyticsLogGroupSummaryCollection>>;
            async fn query(&self, req: QueryRequest, options: RequestOptions) -> Result<Response<QueryAggregation>>;
            async fn get_query_work_request(&self, req: GetQueryWorkRequestRequest, options: RequestOptions) -> Result<Response<QueryWorkRequest>>;
            fn get_polling_backoff_policy(&self, options: &RequestOptions) -> Arc<dyn gax::polling_backoff_policy::PollingBackoffPolicy>;
        }
    }

    fn with_headers<T>(body: T, headers: &[(&'static str, &'static str)]) -> Response<T> {
        let map = http::HeaderMap::from_iter(headers.iter().map(|(k, v)| {
            (
                http::HeaderName::from_static(k),
                http::HeaderValue::from_static(v),
            )
        }));
        Response::from_parts(Parts::new().set_headers(map), body)
    }

    #[tokio::test]
    async fn get_namespace() -> anyhow::Result<()> {
        let mut mock = MockLogAnalytics::new();
        mock.expect_get_namespace()
            .withf(|r, _| r.namespace_name == "my-namespace")
            .return_once(|_, _| {
                Ok(Response::from(
                    Namespace::new()
                        .set_namespace_name("my-namespace")
                        .set_is_onboarded(true),
                ))
            });

        let client = LogAnalytics::from_stub(mock);
        let namespace = client
            .get_namespace()
            .set_namespace_name("my-namespace")
            .send()
            .await?
            .into_body();
        assert_eq!(namespace.is_onboarded, Some(true));
        Ok(())
    }

    #[tokio::test]
    async fn list_by_item() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockLogAnalytics::new();
        mock.expect_list_log_analytics_log_groups()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.page.is_none() && r.compartment_id == "c1")
            .return_once(|_, _| {
                let page = LogAnalyticsLogGroupSummaryCollection::new().set_items([
                    LogAnalyticsLogGroupSummary::new().set_display_name("a"),
                    LogAnalyticsLogGroupSummary::new().set_display_name("b"),
                ]);
                Ok(with_headers(page, &[("opc-next-page", "p2")]))
            });
        mock.expect_list_log_analytics_log_groups()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.page.as_deref() == Some("p2"))
            .return_once(|_, _| {
                let page = LogAnalyticsLogGroupSummaryCollection::new()
                    .set_items([LogAnalyticsLogGroupSummary::new().set_display_name("c")]);
                Ok(Response::from(page))
            });

        let client = LogAnalytics::from_stub(mock);
        let mut items = client
            .list_log_analytics_log_groups()
            .set_namespace_name("ns")
            .set_compartment_id("c1")
            .by_item();
        let mut names = Vec::new();
        while let Some(item) = items.next().await {
            names.push(item?.display_name.unwrap_or_default());
        }
        assert_eq!(names, vec!["a", "b", "c"]);
        Ok(())
    }

    #[tokio::test]
    async fn query_poller() -> anyhow::Result<()> {
        let mut mock = MockLogAnalytics::new();
        mock.expect_get_polling_backoff_policy().returning(|_| {
            Arc::new(
                gax::exponential_backoff::ExponentialBackoffBuilder::new()
                    .with_initial_delay(Duration::from_millis(1))
                    .with_maximum_delay(Duration::from_millis(1))
                    .clamp(),
            )
        });
        mock.expect_query()
            .withf(|r, _| {
                r.query_details
                    .as_ref()
                    .is_some_and(|d| d.should_run_async == Some(true))
            })
            .return_once(|_, _| {
                Ok(with_headers(
                    QueryAggregation::new(),
                    &[("opc-work-request-id", "wr-query")],
                ))
            });
        let mut seq = mockall::Sequence::new();
        mock.expect_get_query_work_request()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.namespace_name == "ns" && r.work_request_id == "wr-query")
            .return_once(|_, _| {
                Ok(Response::from(
                    QueryWorkRequest::new()
                        .set_status(OperationStatus::InProgress)
                        .set_percent_complete(40),
                ))
            });
        mock.expect_get_query_work_request()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_, _| {
                Ok(Response::from(
                    QueryWorkRequest::new()
                        .set_id("wr-query")
                        .set_status(OperationStatus::Succeeded),
                ))
            });

        let client = LogAnalytics::from_stub(mock);
        let work_request = client
            .query()
            .set_namespace_name("ns")
            .set_query_details(
                QueryDetails::new()
                    .set_compartment_id("c1")
                    .set_query_string("'Log Source' = 'Linux Syslog Logs' | stats count")
                    .set_sub_system(SubSystemName::Log)
                    .set_should_run_async(true),
            )
            .poller()
            .until_done()
            .await?;
        assert_eq!(work_request.id.as_deref(), Some("wr-query"));
        Ok(())
    }
}
