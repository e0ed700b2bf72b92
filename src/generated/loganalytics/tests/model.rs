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

//! Verify the model types serialize as the service expects.

#[cfg(test)]
mod tests {
    use gaxi::enums::ServiceEnum;
    use lro::internal::{WorkRequestState, WorkRequestStatus};
    use oci_loganalytics::model::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    type Result = anyhow::Result<()>;

    #[test_case(SortOrders::Asc, "ASC")]
    #[test_case(SortOrders::Desc, "DESC")]
    #[test_case(SortOrders::UnknownValue("SIDEWAYS".into()), "SIDEWAYS")]
    fn enum_names(value: SortOrders, want: &str) -> Result {
        assert_eq!(value.name(), want);
        assert_eq!(value.to_string(), want);
        assert_eq!(SortOrders::from(want), value);
        assert_eq!(serde_json::to_value(&value)?, json!(want));
        assert_eq!(serde_json::from_value::<SortOrders>(json!(want))?, value);
        Ok(())
    }

    #[test]
    fn enum_known_values() {
        assert_eq!(SortOrders::KNOWN_VALUES, &["ASC", "DESC"]);
        assert_eq!(
            OperationStatus::KNOWN_VALUES,
            &[
                "ACCEPTED",
                "CANCELED",
                "FAILED",
                "IN_PROGRESS",
                "SUCCEEDED",
                "CANCELING"
            ]
        );
    }

    #[test]
    fn unknown_fields_are_preserved() -> Result {
        let input = json!({
            "namespaceName": "ns",
            "isOnboarded": true,
            "newServiceField": {"nested": [1, 2, 3]},
        });
        let namespace = serde_json::from_value::<Namespace>(input.clone())?;
        assert_eq!(namespace.namespace_name.as_deref(), Some("ns"));
        assert_eq!(serde_json::to_value(&namespace)?, input);
        Ok(())
    }

    #[test]
    fn unset_fields_are_omitted() -> Result {
        let details = CreateLogAnalyticsLogGroupDetails::new().set_display_name("g1");
        assert_eq!(serde_json::to_value(&details)?, json!({"displayName": "g1"}));
        Ok(())
    }

    #[test]
    fn timestamps() -> Result {
        let input = json!({
            "id": "wr-1",
            "timeAccepted": "2025-03-01T10:00:00Z",
            "percentComplete": 25,
        });
        let work_request = serde_json::from_value::<StorageWorkRequest>(input.clone())?;
        assert_eq!(
            work_request.time_accepted,
            Some(time::macros::datetime!(2025-03-01 10:00:00 UTC))
        );
        assert_eq!(serde_json::to_value(&work_request)?, input);
        Ok(())
    }

    #[test_case(None, WorkRequestState::Pending(None))]
    #[test_case(Some(OperationStatus::Accepted), WorkRequestState::Pending(Some(30.0)))]
    #[test_case(Some(OperationStatus::InProgress), WorkRequestState::Pending(Some(30.0)))]
    #[test_case(Some(OperationStatus::Canceling), WorkRequestState::Pending(Some(30.0)))]
    #[test_case(Some(OperationStatus::Succeeded), WorkRequestState::Succeeded)]
    fn storage_work_request_state(status: Option<OperationStatus>, want: WorkRequestState) {
        let mut work_request = StorageWorkRequest::new();
        work_request.status = status;
        if want != WorkRequestState::Pending(None) {
            work_request.percent_complete = Some(30);
        }
        assert_eq!(work_request.state(), want);
    }

    #[test]
    fn storage_work_request_failed() {
        let work_request = StorageWorkRequest::new()
            .set_status(OperationStatus::Failed)
            .set_status_details("no data matched the purge query");
        assert_eq!(
            work_request.state(),
            WorkRequestState::Failed("no data matched the purge query".into())
        );

        let work_request = StorageWorkRequest::new().set_status(OperationStatus::Canceled);
        let state = work_request.state();
        assert!(
            matches!(&state, WorkRequestState::Failed(m) if m.contains("CANCELED")),
            "{state:?}"
        );
    }

    #[test]
    fn config_work_request_state() {
        let work_request = ConfigWorkRequest::new()
            .set_lifecycle_state(ConfigWorkRequestLifecycleState::InProgress)
            .set_percent_complete(60);
        assert_eq!(work_request.state(), WorkRequestState::Pending(Some(60.0)));

        let work_request = ConfigWorkRequest::new()
            .set_lifecycle_state(ConfigWorkRequestLifecycleState::Succeeded);
        assert_eq!(work_request.state(), WorkRequestState::Succeeded);

        let work_request = ConfigWorkRequest::new()
            .set_lifecycle_state(ConfigWorkRequestLifecycleState::Failed)
            .set_total_associations(4)
            .set_associations_failed(1);
        assert_eq!(
            work_request.state(),
            WorkRequestState::Failed("1 of 4 associations failed".into())
        );
    }

    #[test]
    fn page_items() {
        use gax::paginator::PageItems;
        let collection = LogAnalyticsLogGroupSummaryCollection::new().set_items([
            LogAnalyticsLogGroupSummary::new().set_id("g1"),
            LogAnalyticsLogGroupSummary::new().set_id("g2"),
        ]);
        let ids: Vec<_> = collection
            .into_items()
            .into_iter()
            .filter_map(|i| i.id)
            .collect();
        assert_eq!(ids, vec!["g1", "g2"]);
    }
}
