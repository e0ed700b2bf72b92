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

use crate::Result;

/// Implements a [LogAnalytics](super::stub::LogAnalytics) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct LogAnalytics<T>
where
    T: super::stub::LogAnalytics + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> LogAnalytics<T>
where
    T: super::stub::LogAnalytics + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::LogAnalytics for LogAnalytics<T>
where
    T: super::stub::LogAnalytics + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn list_namespaces(
        &self,
        req: crate::model::ListNamespacesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::NamespaceCollection>> {
        self.inner.list_namespaces(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_namespace(
        &self,
        req: crate::model::GetNamespaceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Namespace>> {
        self.inner.get_namespace(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn onboard_namespace(
        &self,
        req: crate::model::OnboardNamespaceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.onboard_namespace(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn offboard_namespace(
        &self,
        req: crate::model::OffboardNamespaceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.offboard_namespace(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_entity_source_associations(
        &self,
        req: crate::model::ListEntitySourceAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsAssociationCollection>> {
        self.inner.list_entity_source_associations(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_source_associations(
        &self,
        req: crate::model::ListSourceAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsAssociationCollection>> {
        self.inner.list_source_associations(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_association_summary(
        &self,
        req: crate::model::GetAssociationSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AssociationSummaryReport>> {
        self.inner.get_association_summary(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn upsert_associations(
        &self,
        req: crate::model::UpsertAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.upsert_associations(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_associations(
        &self,
        req: crate::model::DeleteAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_associations(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn validate_association_parameters(
        &self,
        req: crate::model::ValidateAssociationParametersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsAssociationParameterCollection>> {
        self.inner.validate_association_parameters(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_categories(
        &self,
        req: crate::model::ListCategoriesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsCategoryCollection>> {
        self.inner.list_categories(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_category(
        &self,
        req: crate::model::GetCategoryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsCategory>> {
        self.inner.get_category(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_category(
        &self,
        req: crate::model::DeleteCategoryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_category(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_resource_categories(
        &self,
        req: crate::model::ListResourceCategoriesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsResourceCategoryCollection>> {
        self.inner.list_resource_categories(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_resource_categories(
        &self,
        req: crate::model::UpdateResourceCategoriesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.update_resource_categories(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn remove_resource_categories(
        &self,
        req: crate::model::RemoveResourceCategoriesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.remove_resource_categories(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_config_work_request(
        &self,
        req: crate::model::GetConfigWorkRequestRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ConfigWorkRequest>> {
        self.inner.get_config_work_request(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_config_work_requests(
        &self,
        req: crate::model::ListConfigWorkRequestsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ConfigWorkRequestCollection>> {
        self.inner.list_config_work_requests(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn export_custom_content(
        &self,
        req: crate::model::ExportCustomContentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<bytes::Bytes>> {
        self.inner.export_custom_content(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn import_custom_content(
        &self,
        req: crate::model::ImportCustomContentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsImportCustomContent>> {
        self.inner.import_custom_content(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_log_analytics_em_bridge(
        &self,
        req: crate::model::CreateLogAnalyticsEmBridgeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEmBridge>> {
        self.inner.create_log_analytics_em_bridge(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_log_analytics_em_bridge(
        &self,
        req: crate::model::GetLogAnalyticsEmBridgeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEmBridge>> {
        self.inner.get_log_analytics_em_bridge(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_log_analytics_em_bridges(
        &self,
        req: crate::model::ListLogAnalyticsEmBridgesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEmBridgeCollection>> {
        self.inner.list_log_analytics_em_bridges(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_log_analytics_em_bridge(
        &self,
        req: crate::model::UpdateLogAnalyticsEmBridgeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEmBridge>> {
        self.inner.update_log_analytics_em_bridge(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_log_analytics_em_bridge(
        &self,
        req: crate::model::DeleteLogAnalyticsEmBridgeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_log_analytics_em_bridge(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_log_analytics_em_bridge_summary(
        &self,
        req: crate::model::GetLogAnalyticsEmBridgeSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEmBridgeSummaryReport>> {
        self.inner.get_log_analytics_em_bridge_summary(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_log_analytics_entity(
        &self,
        req: crate::model::CreateLogAnalyticsEntityRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntity>> {
        self.inner.create_log_analytics_entity(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_log_analytics_entity(
        &self,
        req: crate::model::GetLogAnalyticsEntityRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntity>> {
        self.inner.get_log_analytics_entity(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_log_analytics_entities(
        &self,
        req: crate::model::ListLogAnalyticsEntitiesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityCollection>> {
        self.inner.list_log_analytics_entities(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_log_analytics_entity(
        &self,
        req: crate::model::UpdateLogAnalyticsEntityRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntity>> {
        self.inner.update_log_analytics_entity(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_log_analytics_entity(
        &self,
        req: crate::model::DeleteLogAnalyticsEntityRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_log_analytics_entity(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_log_analytics_entities_summary(
        &self,
        req: crate::model::GetLogAnalyticsEntitiesSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntitySummaryReport>> {
        self.inner.get_log_analytics_entities_summary(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn change_log_analytics_entity_compartment(
        &self,
        req: crate::model::ChangeLogAnalyticsEntityCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.change_log_analytics_entity_compartment(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn add_entity_association(
        &self,
        req: crate::model::AddEntityAssociationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.add_entity_association(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn remove_entity_associations(
        &self,
        req: crate::model::RemoveEntityAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.remove_entity_associations(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_entity_associations(
        &self,
        req: crate::model::ListEntityAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityCollection>> {
        self.inner.list_entity_associations(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_log_analytics_entity_topology(
        &self,
        req: crate::model::ListLogAnalyticsEntityTopologyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityTopologyCollection>> {
        self.inner.list_log_analytics_entity_topology(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_log_analytics_entity_type(
        &self,
        req: crate::model::CreateLogAnalyticsEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.create_log_analytics_entity_type(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_log_analytics_entity_type(
        &self,
        req: crate::model::GetLogAnalyticsEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityType>> {
        self.inner.get_log_analytics_entity_type(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_log_analytics_entity_types(
        &self,
        req: crate::model::ListLogAnalyticsEntityTypesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityTypeCollection>> {
        self.inner.list_log_analytics_entity_types(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_log_analytics_entity_type(
        &self,
        req: crate::model::UpdateLogAnalyticsEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.update_log_analytics_entity_type(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_log_analytics_entity_type(
        &self,
        req: crate::model::DeleteLogAnalyticsEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_log_analytics_entity_type(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_log_analytics_log_group(
        &self,
        req: crate::model::CreateLogAnalyticsLogGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLogGroup>> {
        self.inner.create_log_analytics_log_group(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_log_analytics_log_group(
        &self,
        req: crate::model::GetLogAnalyticsLogGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLogGroup>> {
        self.inner.get_log_analytics_log_group(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_log_analytics_log_groups(
        &self,
        req: crate::model::ListLogAnalyticsLogGroupsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLogGroupSummaryCollection>> {
        self.inner.list_log_analytics_log_groups(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_log_analytics_log_group(
        &self,
        req: crate::model::UpdateLogAnalyticsLogGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLogGroup>> {
        self.inner.update_log_analytics_log_group(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_log_analytics_log_group(
        &self,
        req: crate::model::DeleteLogAnalyticsLogGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_log_analytics_log_group(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn change_log_analytics_log_group_compartment(
        &self,
        req: crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.change_log_analytics_log_group_compartment(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_log_analytics_log_groups_summary(
        &self,
        req: crate::model::GetLogAnalyticsLogGroupsSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogGroupSummaryReport>> {
        self.inner.get_log_analytics_log_groups_summary(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_log_analytics_object_collection_rule(
        &self,
        req: crate::model::CreateLogAnalyticsObjectCollectionRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRule>> {
        self.inner.create_log_analytics_object_collection_rule(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_log_analytics_object_collection_rule(
        &self,
        req: crate::model::GetLogAnalyticsObjectCollectionRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRule>> {
        self.inner.get_log_analytics_object_collection_rule(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_log_analytics_object_collection_rules(
        &self,
        req: crate::model::ListLogAnalyticsObjectCollectionRulesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRuleCollection>> {
        self.inner.list_log_analytics_object_collection_rules(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_log_analytics_object_collection_rule(
        &self,
        req: crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRule>> {
        self.inner.update_log_analytics_object_collection_rule(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_log_analytics_object_collection_rule(
        &self,
        req: crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_log_analytics_object_collection_rule(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn change_log_analytics_object_collection_rule_compartment(
        &self,
        req: crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.change_log_analytics_object_collection_rule_compartment(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_ingest_time_rule(
        &self,
        req: crate::model::CreateIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::IngestTimeRule>> {
        self.inner.create_ingest_time_rule(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_ingest_time_rule(
        &self,
        req: crate::model::GetIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::IngestTimeRule>> {
        self.inner.get_ingest_time_rule(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_ingest_time_rules(
        &self,
        req: crate::model::ListIngestTimeRulesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::IngestTimeRuleSummaryCollection>> {
        self.inner.list_ingest_time_rules(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_ingest_time_rule(
        &self,
        req: crate::model::UpdateIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::IngestTimeRule>> {
        self.inner.update_ingest_time_rule(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_ingest_time_rule(
        &self,
        req: crate::model::DeleteIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_ingest_time_rule(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn enable_ingest_time_rule(
        &self,
        req: crate::model::EnableIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.enable_ingest_time_rule(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn disable_ingest_time_rule(
        &self,
        req: crate::model::DisableIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.disable_ingest_time_rule(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn change_ingest_time_rule_compartment(
        &self,
        req: crate::model::ChangeIngestTimeRuleCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.change_ingest_time_rule_compartment(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_rules(
        &self,
        req: crate::model::ListRulesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RuleSummaryCollection>> {
        self.inner.list_rules(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_rules_summary(
        &self,
        req: crate::model::GetRulesSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RuleSummaryReport>> {
        self.inner.get_rules_summary(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_fields(
        &self,
        req: crate::model::ListFieldsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsFieldCollection>> {
        self.inner.list_fields(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_field(
        &self,
        req: crate::model::GetFieldRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsField>> {
        self.inner.get_field(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn upsert_field(
        &self,
        req: crate::model::UpsertFieldRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsField>> {
        self.inner.upsert_field(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_field(
        &self,
        req: crate::model::DeleteFieldRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_field(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_fields_summary(
        &self,
        req: crate::model::GetFieldsSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::FieldSummaryReport>> {
        self.inner.get_fields_summary(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn extract_structured_log_field_paths(
        &self,
        req: crate::model::ExtractStructuredLogFieldPathsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ExtractLogFieldResults>> {
        self.inner.extract_structured_log_field_paths(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn extract_structured_log_header_paths(
        &self,
        req: crate::model::ExtractStructuredLogHeaderPathsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ExtractLogHeaderResults>> {
        self.inner.extract_structured_log_header_paths(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn test_parser(
        &self,
        req: crate::model::TestParserRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ParserTestResult>> {
        self.inner.test_parser(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_labels(
        &self,
        req: crate::model::ListLabelsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabelCollection>> {
        self.inner.list_labels(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_label(
        &self,
        req: crate::model::GetLabelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabel>> {
        self.inner.get_label(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn upsert_label(
        &self,
        req: crate::model::UpsertLabelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabel>> {
        self.inner.upsert_label(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_label(
        &self,
        req: crate::model::DeleteLabelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_label(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_label_summary(
        &self,
        req: crate::model::GetLabelSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LabelSummaryReport>> {
        self.inner.get_label_summary(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_label_priorities(
        &self,
        req: crate::model::ListLabelPrioritiesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LabelPriorityCollection>> {
        self.inner.list_label_priorities(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_label_source_details(
        &self,
        req: crate::model::ListLabelSourceDetailsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LabelSourceCollection>> {
        self.inner.list_label_source_details(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn batch_get_basic_info(
        &self,
        req: crate::model::BatchGetBasicInfoRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabelBasicCollection>> {
        self.inner.batch_get_basic_info(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn register_lookup(
        &self,
        req: crate::model::RegisterLookupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLookup>> {
        self.inner.register_lookup(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_lookup(
        &self,
        req: crate::model::UpdateLookupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLookup>> {
        self.inner.update_lookup(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_lookup_data(
        &self,
        req: crate::model::UpdateLookupDataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.update_lookup_data(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn append_lookup_data(
        &self,
        req: crate::model::AppendLookupDataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.append_lookup_data(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_lookup(
        &self,
        req: crate::model::DeleteLookupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_lookup(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_lookup(
        &self,
        req: crate::model::GetLookupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLookup>> {
        self.inner.get_lookup(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_lookups(
        &self,
        req: crate::model::ListLookupsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLookupCollection>> {
        self.inner.list_lookups(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn export_lookup(
        &self,
        req: crate::model::ExportLookupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<bytes::Bytes>> {
        self.inner.export_lookup(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_lookup_summary(
        &self,
        req: crate::model::GetLookupSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LookupSummaryReport>> {
        self.inner.get_lookup_summary(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_meta_source_types(
        &self,
        req: crate::model::ListMetaSourceTypesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsMetaSourceTypeCollection>> {
        self.inner.list_meta_source_types(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_parser_functions(
        &self,
        req: crate::model::ListParserFunctionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsParserFunctionCollection>> {
        self.inner.list_parser_functions(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_parser_meta_plugins(
        &self,
        req: crate::model::ListParserMetaPluginsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsParserMetaPluginCollection>> {
        self.inner.list_parser_meta_plugins(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_supported_char_encodings(
        &self,
        req: crate::model::ListSupportedCharEncodingsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CharEncodingCollection>> {
        self.inner.list_supported_char_encodings(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_supported_timezones(
        &self,
        req: crate::model::ListSupportedTimezonesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TimezoneCollection>> {
        self.inner.list_supported_timezones(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_source_meta_functions(
        &self,
        req: crate::model::ListSourceMetaFunctionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsSourceMetaFunctionCollection>> {
        self.inner.list_source_meta_functions(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_source_patterns(
        &self,
        req: crate::model::ListSourcePatternsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsSourcePatternCollection>> {
        self.inner.list_source_patterns(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_source_label_operators(
        &self,
        req: crate::model::ListSourceLabelOperatorsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabelOperatorCollection>> {
        self.inner.list_source_label_operators(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_source_extended_field_definitions(
        &self,
        req: crate::model::ListSourceExtendedFieldDefinitionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<crate::model::LogAnalyticsSourceExtendedFieldDefinitionCollection>,
    > {
        self.inner.list_source_extended_field_definitions(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_effective_properties(
        &self,
        req: crate::model::ListEffectivePropertiesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EffectivePropertyCollection>> {
        self.inner.list_effective_properties(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_properties_metadata(
        &self,
        req: crate::model::ListPropertiesMetadataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::PropertyMetadataSummaryCollection>> {
        self.inner.list_properties_metadata(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_log_sets(
        &self,
        req: crate::model::ListLogSetsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogSetCollection>> {
        self.inner.list_log_sets(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_log_sets_count(
        &self,
        req: crate::model::GetLogSetsCountRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogSetsCount>> {
        self.inner.get_log_sets_count(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_parser(
        &self,
        req: crate::model::DeleteParserRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_parser(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_parser(
        &self,
        req: crate::model::GetParserRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsParser>> {
        self.inner.get_parser(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_parsers(
        &self,
        req: crate::model::ListParsersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsParserCollection>> {
        self.inner.list_parsers(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn upsert_parser(
        &self,
        req: crate::model::UpsertParserRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsParser>> {
        self.inner.upsert_parser(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_parser_summary(
        &self,
        req: crate::model::GetParserSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ParserSummaryReport>> {
        self.inner.get_parser_summary(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_preferences(
        &self,
        req: crate::model::ListPreferencesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsPreferenceCollection>> {
        self.inner.list_preferences(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_preferences(
        &self,
        req: crate::model::UpdatePreferencesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.update_preferences(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn remove_preferences(
        &self,
        req: crate::model::RemovePreferencesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.remove_preferences(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn query(
        &self,
        req: crate::model::QueryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::QueryAggregation>> {
        self.inner.query(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_query_result(
        &self,
        req: crate::model::GetQueryResultRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::QueryAggregation>> {
        self.inner.get_query_result(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn export_query_result(
        &self,
        req: crate::model::ExportQueryResultRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<bytes::Bytes>> {
        self.inner.export_query_result(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn filter(
        &self,
        req: crate::model::FilterRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::FilterOutput>> {
        self.inner.filter(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn parse_query(
        &self,
        req: crate::model::ParseQueryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ParseQueryOutput>> {
        self.inner.parse_query(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn suggest(
        &self,
        req: crate::model::SuggestRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SuggestOutput>> {
        self.inner.suggest(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_query_work_request(
        &self,
        req: crate::model::GetQueryWorkRequestRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::QueryWorkRequest>> {
        self.inner.get_query_work_request(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_query_work_request(
        &self,
        req: crate::model::DeleteQueryWorkRequestRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_query_work_request(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_query_work_requests(
        &self,
        req: crate::model::ListQueryWorkRequestsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::QueryWorkRequestCollection>> {
        self.inner.list_query_work_requests(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_scheduled_task(
        &self,
        req: crate::model::CreateScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
        self.inner.create_scheduled_task(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_scheduled_task(
        &self,
        req: crate::model::GetScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
        self.inner.get_scheduled_task(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_scheduled_tasks(
        &self,
        req: crate::model::ListScheduledTasksRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ScheduledTaskCollection>> {
        self.inner.list_scheduled_tasks(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_scheduled_task(
        &self,
        req: crate::model::UpdateScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
        self.inner.update_scheduled_task(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_scheduled_task(
        &self,
        req: crate::model::DeleteScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_scheduled_task(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn pause_scheduled_task(
        &self,
        req: crate::model::PauseScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
        self.inner.pause_scheduled_task(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn resume_scheduled_task(
        &self,
        req: crate::model::ResumeScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
        self.inner.resume_scheduled_task(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn change_scheduled_task_compartment(
        &self,
        req: crate::model::ChangeScheduledTaskCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.change_scheduled_task_compartment(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_source(
        &self,
        req: crate::model::DeleteSourceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_source(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_source(
        &self,
        req: crate::model::GetSourceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsSource>> {
        self.inner.get_source(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_sources(
        &self,
        req: crate::model::ListSourcesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsSourceCollection>> {
        self.inner.list_sources(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn upsert_source(
        &self,
        req: crate::model::UpsertSourceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsSource>> {
        self.inner.upsert_source(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn validate_source(
        &self,
        req: crate::model::ValidateSourceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SourceValidateResults>> {
        self.inner.validate_source(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn validate_source_extended_field_details(
        &self,
        req: crate::model::ValidateSourceExtendedFieldDetailsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<crate::model::LogAnalyticsSourceExtendedFieldDefinitionValidation>,
    > {
        self.inner.validate_source_extended_field_details(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn enable_auto_association(
        &self,
        req: crate::model::EnableAutoAssociationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EnableAutoAssociationResult>> {
        self.inner.enable_auto_association(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn disable_auto_association(
        &self,
        req: crate::model::DisableAutoAssociationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DisableAutoAssociationResult>> {
        self.inner.disable_auto_association(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_auto_associations(
        &self,
        req: crate::model::ListAutoAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AutoAssociationCollection>> {
        self.inner.list_auto_associations(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn suppress_warning(
        &self,
        req: crate::model::SuppressWarningRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.suppress_warning(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn unsuppress_warning(
        &self,
        req: crate::model::UnsuppressWarningRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.unsuppress_warning(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_warnings(
        &self,
        req: crate::model::ListWarningsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsWarningCollection>> {
        self.inner.list_warnings(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_storage(
        &self,
        req: crate::model::GetStorageRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Storage>> {
        self.inner.get_storage(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_storage(
        &self,
        req: crate::model::UpdateStorageRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Storage>> {
        self.inner.update_storage(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_storage_usage(
        &self,
        req: crate::model::GetStorageUsageRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::StorageUsage>> {
        self.inner.get_storage_usage(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn estimate_purge_data_size(
        &self,
        req: crate::model::EstimatePurgeDataSizeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EstimatePurgeDataSizeResult>> {
        self.inner.estimate_purge_data_size(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn estimate_recall_data_size(
        &self,
        req: crate::model::EstimateRecallDataSizeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EstimateRecallDataSizeResult>> {
        self.inner.estimate_recall_data_size(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn estimate_release_data_size(
        &self,
        req: crate::model::EstimateReleaseDataSizeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EstimateReleaseDataSizeResult>> {
        self.inner.estimate_release_data_size(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn purge_storage_data(
        &self,
        req: crate::model::PurgeStorageDataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.purge_storage_data(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn recall_archived_data(
        &self,
        req: crate::model::RecallArchivedDataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.recall_archived_data(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn release_recalled_data(
        &self,
        req: crate::model::ReleaseRecalledDataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.release_recalled_data(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_storage_work_request(
        &self,
        req: crate::model::GetStorageWorkRequestRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::StorageWorkRequest>> {
        self.inner.get_storage_work_request(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_storage_work_requests(
        &self,
        req: crate::model::ListStorageWorkRequestsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::StorageWorkRequestCollection>> {
        self.inner.list_storage_work_requests(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_storage_work_request_errors(
        &self,
        req: crate::model::ListStorageWorkRequestErrorsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::WorkRequestErrorCollection>> {
        self.inner.list_storage_work_request_errors(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_recall_count(
        &self,
        req: crate::model::GetRecallCountRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RecallCount>> {
        self.inner.get_recall_count(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_recalled_data_size(
        &self,
        req: crate::model::GetRecalledDataSizeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RecalledDataSize>> {
        self.inner.get_recalled_data_size(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_recalled_data(
        &self,
        req: crate::model::ListRecalledDataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RecalledDataCollection>> {
        self.inner.list_recalled_data(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_overlapping_recalls(
        &self,
        req: crate::model::ListOverlappingRecallsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::OverlappingRecallCollection>> {
        self.inner.list_overlapping_recalls(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn set_unprocessed_data_bucket(
        &self,
        req: crate::model::SetUnprocessedDataBucketRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UnprocessedDataBucket>> {
        self.inner.set_unprocessed_data_bucket(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_unprocessed_data_bucket(
        &self,
        req: crate::model::GetUnprocessedDataBucketRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UnprocessedDataBucket>> {
        self.inner.get_unprocessed_data_bucket(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn enable_archiving(
        &self,
        req: crate::model::EnableArchivingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.enable_archiving(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn disable_archiving(
        &self,
        req: crate::model::DisableArchivingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.disable_archiving(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn upload_log_file(
        &self,
        req: crate::model::UploadLogFileRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Upload>> {
        self.inner.upload_log_file(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn upload_log_events_file(
        &self,
        req: crate::model::UploadLogEventsFileRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.upload_log_events_file(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn upload_discovery_data(
        &self,
        req: crate::model::UploadDiscoveryDataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.upload_discovery_data(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_upload(
        &self,
        req: crate::model::GetUploadRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Upload>> {
        self.inner.get_upload(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_uploads(
        &self,
        req: crate::model::ListUploadsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UploadCollection>> {
        self.inner.list_uploads(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_upload(
        &self,
        req: crate::model::DeleteUploadRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_upload(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_upload_files(
        &self,
        req: crate::model::ListUploadFilesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UploadFileCollection>> {
        self.inner.list_upload_files(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_upload_file(
        &self,
        req: crate::model::DeleteUploadFileRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_upload_file(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_upload_warnings(
        &self,
        req: crate::model::ListUploadWarningsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UploadWarningCollection>> {
        self.inner.list_upload_warnings(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_upload_warning(
        &self,
        req: crate::model::DeleteUploadWarningRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_upload_warning(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_templates(
        &self,
        req: crate::model::ListTemplatesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsTemplateCollection>> {
        self.inner.list_templates(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_template(
        &self,
        req: crate::model::GetTemplateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsTemplate>> {
        self.inner.get_template(req, options).await
    }

    fn get_polling_error_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_error_policy::PollingErrorPolicy> {
        self.inner.get_polling_error_policy(options)
    }

    fn get_polling_backoff_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_backoff_policy::PollingBackoffPolicy> {
        self.inner.get_polling_backoff_policy(options)
    }
}
