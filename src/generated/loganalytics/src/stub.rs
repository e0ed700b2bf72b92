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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::LogAnalytics].
///
/// Application developers may need to implement this trait to mock
/// `client::LogAnalytics`.  In other use-cases, application developers only
/// use `client::LogAnalytics` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait LogAnalytics: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::LogAnalytics::list_namespaces].
    fn list_namespaces(
        &self,
        _req: crate::model::ListNamespacesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::NamespaceCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_namespace].
    fn get_namespace(
        &self,
        _req: crate::model::GetNamespaceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::Namespace>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::onboard_namespace].
    fn onboard_namespace(
        &self,
        _req: crate::model::OnboardNamespaceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::offboard_namespace].
    fn offboard_namespace(
        &self,
        _req: crate::model::OffboardNamespaceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_entity_source_associations].
    fn list_entity_source_associations(
        &self,
        _req: crate::model::ListEntitySourceAssociationsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsAssociationCollection>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_source_associations].
    fn list_source_associations(
        &self,
        _req: crate::model::ListSourceAssociationsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsAssociationCollection>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_association_summary].
    fn get_association_summary(
        &self,
        _req: crate::model::GetAssociationSummaryRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::AssociationSummaryReport>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::upsert_associations].
    fn upsert_associations(
        &self,
        _req: crate::model::UpsertAssociationsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::delete_associations].
    fn delete_associations(
        &self,
        _req: crate::model::DeleteAssociationsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::validate_association_parameters].
    fn validate_association_parameters(
        &self,
        _req: crate::model::ValidateAssociationParametersRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsAssociationParameterCollection>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_categories].
    fn list_categories(
        &self,
        _req: crate::model::ListCategoriesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsCategoryCollection>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_category].
    fn get_category(
        &self,
        _req: crate::model::GetCategoryRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsCategory>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::delete_category].
    fn delete_category(
        &self,
        _req: crate::model::DeleteCategoryRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_resource_categories].
    fn list_resource_categories(
        &self,
        _req: crate::model::ListResourceCategoriesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsResourceCategoryCollection>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::update_resource_categories].
    fn update_resource_categories(
        &self,
        _req: crate::model::UpdateResourceCategoriesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::remove_resource_categories].
    fn remove_resource_categories(
        &self,
        _req: crate::model::RemoveResourceCategoriesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_config_work_request].
    fn get_config_work_request(
        &self,
        _req: crate::model::GetConfigWorkRequestRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ConfigWorkRequest>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_config_work_requests].
    fn list_config_work_requests(
        &self,
        _req: crate::model::ListConfigWorkRequestsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ConfigWorkRequestCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::export_custom_content].
    fn export_custom_content(
        &self,
        _req: crate::model::ExportCustomContentRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<bytes::Bytes>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::import_custom_content].
    fn import_custom_content(
        &self,
        _req: crate::model::ImportCustomContentRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsImportCustomContent>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::create_log_analytics_em_bridge].
    fn create_log_analytics_em_bridge(
        &self,
        _req: crate::model::CreateLogAnalyticsEmBridgeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsEmBridge>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_log_analytics_em_bridge].
    fn get_log_analytics_em_bridge(
        &self,
        _req: crate::model::GetLogAnalyticsEmBridgeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsEmBridge>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_log_analytics_em_bridges].
    fn list_log_analytics_em_bridges(
        &self,
        _req: crate::model::ListLogAnalyticsEmBridgesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsEmBridgeCollection>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::update_log_analytics_em_bridge].
    fn update_log_analytics_em_bridge(
        &self,
        _req: crate::model::UpdateLogAnalyticsEmBridgeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsEmBridge>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::delete_log_analytics_em_bridge].
    fn delete_log_analytics_em_bridge(
        &self,
        _req: crate::model::DeleteLogAnalyticsEmBridgeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_log_analytics_em_bridge_summary].
    fn get_log_analytics_em_bridge_summary(
        &self,
        _req: crate::model::GetLogAnalyticsEmBridgeSummaryRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsEmBridgeSummaryReport>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::create_log_analytics_entity].
    fn create_log_analytics_entity(
        &self,
        _req: crate::model::CreateLogAnalyticsEntityRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsEntity>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_log_analytics_entity].
    fn get_log_analytics_entity(
        &self,
        _req: crate::model::GetLogAnalyticsEntityRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsEntity>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_log_analytics_entities].
    fn list_log_analytics_entities(
        &self,
        _req: crate::model::ListLogAnalyticsEntitiesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsEntityCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::update_log_analytics_entity].
    fn update_log_analytics_entity(
        &self,
        _req: crate::model::UpdateLogAnalyticsEntityRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsEntity>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::delete_log_analytics_entity].
    fn delete_log_analytics_entity(
        &self,
        _req: crate::model::DeleteLogAnalyticsEntityRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_log_analytics_entities_summary].
    fn get_log_analytics_entities_summary(
        &self,
        _req: crate::model::GetLogAnalyticsEntitiesSummaryRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsEntitySummaryReport>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::change_log_analytics_entity_compartment].
    fn change_log_analytics_entity_compartment(
        &self,
        _req: crate::model::ChangeLogAnalyticsEntityCompartmentRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::add_entity_association].
    fn add_entity_association(
        &self,
        _req: crate::model::AddEntityAssociationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::remove_entity_associations].
    fn remove_entity_associations(
        &self,
        _req: crate::model::RemoveEntityAssociationsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_entity_associations].
    fn list_entity_associations(
        &self,
        _req: crate::model::ListEntityAssociationsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsEntityCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_log_analytics_entity_topology].
    fn list_log_analytics_entity_topology(
        &self,
        _req: crate::model::ListLogAnalyticsEntityTopologyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsEntityTopologyCollection>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::create_log_analytics_entity_type].
    fn create_log_analytics_entity_type(
        &self,
        _req: crate::model::CreateLogAnalyticsEntityTypeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_log_analytics_entity_type].
    fn get_log_analytics_entity_type(
        &self,
        _req: crate::model::GetLogAnalyticsEntityTypeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsEntityType>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_log_analytics_entity_types].
    fn list_log_analytics_entity_types(
        &self,
        _req: crate::model::ListLogAnalyticsEntityTypesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsEntityTypeCollection>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::update_log_analytics_entity_type].
    fn update_log_analytics_entity_type(
        &self,
        _req: crate::model::UpdateLogAnalyticsEntityTypeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::delete_log_analytics_entity_type].
    fn delete_log_analytics_entity_type(
        &self,
        _req: crate::model::DeleteLogAnalyticsEntityTypeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::create_log_analytics_log_group].
    fn create_log_analytics_log_group(
        &self,
        _req: crate::model::CreateLogAnalyticsLogGroupRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsLogGroup>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_log_analytics_log_group].
    fn get_log_analytics_log_group(
        &self,
        _req: crate::model::GetLogAnalyticsLogGroupRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsLogGroup>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_log_analytics_log_groups].
    fn list_log_analytics_log_groups(
        &self,
        _req: crate::model::ListLogAnalyticsLogGroupsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsLogGroupSummaryCollection>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::update_log_analytics_log_group].
    fn update_log_analytics_log_group(
        &self,
        _req: crate::model::UpdateLogAnalyticsLogGroupRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsLogGroup>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::delete_log_analytics_log_group].
    fn delete_log_analytics_log_group(
        &self,
        _req: crate::model::DeleteLogAnalyticsLogGroupRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::change_log_analytics_log_group_compartment].
    fn change_log_analytics_log_group_compartment(
        &self,
        _req: crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_log_analytics_log_groups_summary].
    fn get_log_analytics_log_groups_summary(
        &self,
        _req: crate::model::GetLogAnalyticsLogGroupsSummaryRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogGroupSummaryReport>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::create_log_analytics_object_collection_rule].
    fn create_log_analytics_object_collection_rule(
        &self,
        _req: crate::model::CreateLogAnalyticsObjectCollectionRuleRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsObjectCollectionRule>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_log_analytics_object_collection_rule].
    fn get_log_analytics_object_collection_rule(
        &self,
        _req: crate::model::GetLogAnalyticsObjectCollectionRuleRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsObjectCollectionRule>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_log_analytics_object_collection_rules].
    fn list_log_analytics_object_collection_rules(
        &self,
        _req: crate::model::ListLogAnalyticsObjectCollectionRulesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsObjectCollectionRuleCollection>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::update_log_analytics_object_collection_rule].
    fn update_log_analytics_object_collection_rule(
        &self,
        _req: crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsObjectCollectionRule>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::delete_log_analytics_object_collection_rule].
    fn delete_log_analytics_object_collection_rule(
        &self,
        _req: crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::change_log_analytics_object_collection_rule_compartment].
    fn change_log_analytics_object_collection_rule_compartment(
        &self,
        _req: crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::create_ingest_time_rule].
    fn create_ingest_time_rule(
        &self,
        _req: crate::model::CreateIngestTimeRuleRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::IngestTimeRule>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_ingest_time_rule].
    fn get_ingest_time_rule(
        &self,
        _req: crate::model::GetIngestTimeRuleRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::IngestTimeRule>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_ingest_time_rules].
    fn list_ingest_time_rules(
        &self,
        _req: crate::model::ListIngestTimeRulesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::IngestTimeRuleSummaryCollection>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::update_ingest_time_rule].
    fn update_ingest_time_rule(
        &self,
        _req: crate::model::UpdateIngestTimeRuleRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::IngestTimeRule>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::delete_ingest_time_rule].
    fn delete_ingest_time_rule(
        &self,
        _req: crate::model::DeleteIngestTimeRuleRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::enable_ingest_time_rule].
    fn enable_ingest_time_rule(
        &self,
        _req: crate::model::EnableIngestTimeRuleRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::disable_ingest_time_rule].
    fn disable_ingest_time_rule(
        &self,
        _req: crate::model::DisableIngestTimeRuleRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::change_ingest_time_rule_compartment].
    fn change_ingest_time_rule_compartment(
        &self,
        _req: crate::model::ChangeIngestTimeRuleCompartmentRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_rules].
    fn list_rules(
        &self,
        _req: crate::model::ListRulesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::RuleSummaryCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_rules_summary].
    fn get_rules_summary(
        &self,
        _req: crate::model::GetRulesSummaryRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::RuleSummaryReport>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_fields].
    fn list_fields(
        &self,
        _req: crate::model::ListFieldsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsFieldCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_field].
    fn get_field(
        &self,
        _req: crate::model::GetFieldRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsField>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::upsert_field].
    fn upsert_field(
        &self,
        _req: crate::model::UpsertFieldRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsField>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::delete_field].
    fn delete_field(
        &self,
        _req: crate::model::DeleteFieldRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_fields_summary].
    fn get_fields_summary(
        &self,
        _req: crate::model::GetFieldsSummaryRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::FieldSummaryReport>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::extract_structured_log_field_paths].
    fn extract_structured_log_field_paths(
        &self,
        _req: crate::model::ExtractStructuredLogFieldPathsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ExtractLogFieldResults>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::extract_structured_log_header_paths].
    fn extract_structured_log_header_paths(
        &self,
        _req: crate::model::ExtractStructuredLogHeaderPathsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ExtractLogHeaderResults>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::test_parser].
    fn test_parser(
        &self,
        _req: crate::model::TestParserRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ParserTestResult>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_labels].
    fn list_labels(
        &self,
        _req: crate::model::ListLabelsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsLabelCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_label].
    fn get_label(
        &self,
        _req: crate::model::GetLabelRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsLabel>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::upsert_label].
    fn upsert_label(
        &self,
        _req: crate::model::UpsertLabelRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsLabel>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::delete_label].
    fn delete_label(
        &self,
        _req: crate::model::DeleteLabelRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_label_summary].
    fn get_label_summary(
        &self,
        _req: crate::model::GetLabelSummaryRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LabelSummaryReport>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_label_priorities].
    fn list_label_priorities(
        &self,
        _req: crate::model::ListLabelPrioritiesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LabelPriorityCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_label_source_details].
    fn list_label_source_details(
        &self,
        _req: crate::model::ListLabelSourceDetailsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LabelSourceCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::batch_get_basic_info].
    fn batch_get_basic_info(
        &self,
        _req: crate::model::BatchGetBasicInfoRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsLabelBasicCollection>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::register_lookup].
    fn register_lookup(
        &self,
        _req: crate::model::RegisterLookupRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsLookup>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::update_lookup].
    fn update_lookup(
        &self,
        _req: crate::model::UpdateLookupRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsLookup>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::update_lookup_data].
    fn update_lookup_data(
        &self,
        _req: crate::model::UpdateLookupDataRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::append_lookup_data].
    fn append_lookup_data(
        &self,
        _req: crate::model::AppendLookupDataRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::delete_lookup].
    fn delete_lookup(
        &self,
        _req: crate::model::DeleteLookupRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_lookup].
    fn get_lookup(
        &self,
        _req: crate::model::GetLookupRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsLookup>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_lookups].
    fn list_lookups(
        &self,
        _req: crate::model::ListLookupsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsLookupCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::export_lookup].
    fn export_lookup(
        &self,
        _req: crate::model::ExportLookupRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<bytes::Bytes>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_lookup_summary].
    fn get_lookup_summary(
        &self,
        _req: crate::model::GetLookupSummaryRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LookupSummaryReport>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_meta_source_types].
    fn list_meta_source_types(
        &self,
        _req: crate::model::ListMetaSourceTypesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsMetaSourceTypeCollection>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_parser_functions].
    fn list_parser_functions(
        &self,
        _req: crate::model::ListParserFunctionsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsParserFunctionCollection>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_parser_meta_plugins].
    fn list_parser_meta_plugins(
        &self,
        _req: crate::model::ListParserMetaPluginsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsParserMetaPluginCollection>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_supported_char_encodings].
    fn list_supported_char_encodings(
        &self,
        _req: crate::model::ListSupportedCharEncodingsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::CharEncodingCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_supported_timezones].
    fn list_supported_timezones(
        &self,
        _req: crate::model::ListSupportedTimezonesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::TimezoneCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_source_meta_functions].
    fn list_source_meta_functions(
        &self,
        _req: crate::model::ListSourceMetaFunctionsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsSourceMetaFunctionCollection>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_source_patterns].
    fn list_source_patterns(
        &self,
        _req: crate::model::ListSourcePatternsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsSourcePatternCollection>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_source_label_operators].
    fn list_source_label_operators(
        &self,
        _req: crate::model::ListSourceLabelOperatorsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsLabelOperatorCollection>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_source_extended_field_definitions].
    fn list_source_extended_field_definitions(
        &self,
        _req: crate::model::ListSourceExtendedFieldDefinitionsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<
                crate::model::LogAnalyticsSourceExtendedFieldDefinitionCollection,
            >,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_effective_properties].
    fn list_effective_properties(
        &self,
        _req: crate::model::ListEffectivePropertiesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::EffectivePropertyCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_properties_metadata].
    fn list_properties_metadata(
        &self,
        _req: crate::model::ListPropertiesMetadataRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::PropertyMetadataSummaryCollection>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_log_sets].
    fn list_log_sets(
        &self,
        _req: crate::model::ListLogSetsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogSetCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_log_sets_count].
    fn get_log_sets_count(
        &self,
        _req: crate::model::GetLogSetsCountRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogSetsCount>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::delete_parser].
    fn delete_parser(
        &self,
        _req: crate::model::DeleteParserRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_parser].
    fn get_parser(
        &self,
        _req: crate::model::GetParserRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsParser>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_parsers].
    fn list_parsers(
        &self,
        _req: crate::model::ListParsersRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsParserCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::upsert_parser].
    fn upsert_parser(
        &self,
        _req: crate::model::UpsertParserRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsParser>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_parser_summary].
    fn get_parser_summary(
        &self,
        _req: crate::model::GetParserSummaryRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ParserSummaryReport>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_preferences].
    fn list_preferences(
        &self,
        _req: crate::model::ListPreferencesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsPreferenceCollection>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::update_preferences].
    fn update_preferences(
        &self,
        _req: crate::model::UpdatePreferencesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::remove_preferences].
    fn remove_preferences(
        &self,
        _req: crate::model::RemovePreferencesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::query].
    fn query(
        &self,
        _req: crate::model::QueryRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::QueryAggregation>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_query_result].
    fn get_query_result(
        &self,
        _req: crate::model::GetQueryResultRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::QueryAggregation>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::export_query_result].
    fn export_query_result(
        &self,
        _req: crate::model::ExportQueryResultRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<bytes::Bytes>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::filter].
    fn filter(
        &self,
        _req: crate::model::FilterRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::FilterOutput>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::parse_query].
    fn parse_query(
        &self,
        _req: crate::model::ParseQueryRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ParseQueryOutput>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::suggest].
    fn suggest(
        &self,
        _req: crate::model::SuggestRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::SuggestOutput>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_query_work_request].
    fn get_query_work_request(
        &self,
        _req: crate::model::GetQueryWorkRequestRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::QueryWorkRequest>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::delete_query_work_request].
    fn delete_query_work_request(
        &self,
        _req: crate::model::DeleteQueryWorkRequestRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_query_work_requests].
    fn list_query_work_requests(
        &self,
        _req: crate::model::ListQueryWorkRequestsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::QueryWorkRequestCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::create_scheduled_task].
    fn create_scheduled_task(
        &self,
        _req: crate::model::CreateScheduledTaskRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ScheduledTask>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_scheduled_task].
    fn get_scheduled_task(
        &self,
        _req: crate::model::GetScheduledTaskRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ScheduledTask>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_scheduled_tasks].
    fn list_scheduled_tasks(
        &self,
        _req: crate::model::ListScheduledTasksRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ScheduledTaskCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::update_scheduled_task].
    fn update_scheduled_task(
        &self,
        _req: crate::model::UpdateScheduledTaskRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ScheduledTask>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::delete_scheduled_task].
    fn delete_scheduled_task(
        &self,
        _req: crate::model::DeleteScheduledTaskRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::pause_scheduled_task].
    fn pause_scheduled_task(
        &self,
        _req: crate::model::PauseScheduledTaskRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ScheduledTask>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::resume_scheduled_task].
    fn resume_scheduled_task(
        &self,
        _req: crate::model::ResumeScheduledTaskRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ScheduledTask>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::change_scheduled_task_compartment].
    fn change_scheduled_task_compartment(
        &self,
        _req: crate::model::ChangeScheduledTaskCompartmentRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::delete_source].
    fn delete_source(
        &self,
        _req: crate::model::DeleteSourceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_source].
    fn get_source(
        &self,
        _req: crate::model::GetSourceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsSource>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_sources].
    fn list_sources(
        &self,
        _req: crate::model::ListSourcesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsSourceCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::upsert_source].
    fn upsert_source(
        &self,
        _req: crate::model::UpsertSourceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsSource>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::validate_source].
    fn validate_source(
        &self,
        _req: crate::model::ValidateSourceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::SourceValidateResults>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::validate_source_extended_field_details].
    fn validate_source_extended_field_details(
        &self,
        _req: crate::model::ValidateSourceExtendedFieldDetailsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<
                crate::model::LogAnalyticsSourceExtendedFieldDefinitionValidation,
            >,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::enable_auto_association].
    fn enable_auto_association(
        &self,
        _req: crate::model::EnableAutoAssociationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::EnableAutoAssociationResult>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::disable_auto_association].
    fn disable_auto_association(
        &self,
        _req: crate::model::DisableAutoAssociationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DisableAutoAssociationResult>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_auto_associations].
    fn list_auto_associations(
        &self,
        _req: crate::model::ListAutoAssociationsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::AutoAssociationCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::suppress_warning].
    fn suppress_warning(
        &self,
        _req: crate::model::SuppressWarningRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::unsuppress_warning].
    fn unsuppress_warning(
        &self,
        _req: crate::model::UnsuppressWarningRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_warnings].
    fn list_warnings(
        &self,
        _req: crate::model::ListWarningsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsWarningCollection>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_storage].
    fn get_storage(
        &self,
        _req: crate::model::GetStorageRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::Storage>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::update_storage].
    fn update_storage(
        &self,
        _req: crate::model::UpdateStorageRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::Storage>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_storage_usage].
    fn get_storage_usage(
        &self,
        _req: crate::model::GetStorageUsageRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::StorageUsage>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::estimate_purge_data_size].
    fn estimate_purge_data_size(
        &self,
        _req: crate::model::EstimatePurgeDataSizeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::EstimatePurgeDataSizeResult>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::estimate_recall_data_size].
    fn estimate_recall_data_size(
        &self,
        _req: crate::model::EstimateRecallDataSizeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::EstimateRecallDataSizeResult>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::estimate_release_data_size].
    fn estimate_release_data_size(
        &self,
        _req: crate::model::EstimateReleaseDataSizeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::EstimateReleaseDataSizeResult>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::purge_storage_data].
    fn purge_storage_data(
        &self,
        _req: crate::model::PurgeStorageDataRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::recall_archived_data].
    fn recall_archived_data(
        &self,
        _req: crate::model::RecallArchivedDataRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::release_recalled_data].
    fn release_recalled_data(
        &self,
        _req: crate::model::ReleaseRecalledDataRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_storage_work_request].
    fn get_storage_work_request(
        &self,
        _req: crate::model::GetStorageWorkRequestRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::StorageWorkRequest>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_storage_work_requests].
    fn list_storage_work_requests(
        &self,
        _req: crate::model::ListStorageWorkRequestsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::StorageWorkRequestCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_storage_work_request_errors].
    fn list_storage_work_request_errors(
        &self,
        _req: crate::model::ListStorageWorkRequestErrorsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::WorkRequestErrorCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_recall_count].
    fn get_recall_count(
        &self,
        _req: crate::model::GetRecallCountRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::RecallCount>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_recalled_data_size].
    fn get_recalled_data_size(
        &self,
        _req: crate::model::GetRecalledDataSizeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::RecalledDataSize>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_recalled_data].
    fn list_recalled_data(
        &self,
        _req: crate::model::ListRecalledDataRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::RecalledDataCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_overlapping_recalls].
    fn list_overlapping_recalls(
        &self,
        _req: crate::model::ListOverlappingRecallsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::OverlappingRecallCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::set_unprocessed_data_bucket].
    fn set_unprocessed_data_bucket(
        &self,
        _req: crate::model::SetUnprocessedDataBucketRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::UnprocessedDataBucket>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_unprocessed_data_bucket].
    fn get_unprocessed_data_bucket(
        &self,
        _req: crate::model::GetUnprocessedDataBucketRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::UnprocessedDataBucket>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::enable_archiving].
    fn enable_archiving(
        &self,
        _req: crate::model::EnableArchivingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::disable_archiving].
    fn disable_archiving(
        &self,
        _req: crate::model::DisableArchivingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::upload_log_file].
    fn upload_log_file(
        &self,
        _req: crate::model::UploadLogFileRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::Upload>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::upload_log_events_file].
    fn upload_log_events_file(
        &self,
        _req: crate::model::UploadLogEventsFileRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::upload_discovery_data].
    fn upload_discovery_data(
        &self,
        _req: crate::model::UploadDiscoveryDataRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_upload].
    fn get_upload(
        &self,
        _req: crate::model::GetUploadRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::Upload>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_uploads].
    fn list_uploads(
        &self,
        _req: crate::model::ListUploadsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::UploadCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::delete_upload].
    fn delete_upload(
        &self,
        _req: crate::model::DeleteUploadRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_upload_files].
    fn list_upload_files(
        &self,
        _req: crate::model::ListUploadFilesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::UploadFileCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::delete_upload_file].
    fn delete_upload_file(
        &self,
        _req: crate::model::DeleteUploadFileRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_upload_warnings].
    fn list_upload_warnings(
        &self,
        _req: crate::model::ListUploadWarningsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::UploadWarningCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::delete_upload_warning].
    fn delete_upload_warning(
        &self,
        _req: crate::model::DeleteUploadWarningRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::list_templates].
    fn list_templates(
        &self,
        _req: crate::model::ListTemplatesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::LogAnalyticsTemplateCollection>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::LogAnalytics::get_template].
    fn get_template(
        &self,
        _req: crate::model::GetTemplateRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::LogAnalyticsTemplate>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Returns the polling error policy.
    ///
    /// When mocking, this method is typically irrelevant. Do not try to verify
    /// it is called by your mocks.
    fn get_polling_error_policy(
        &self,
        _options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_error_policy::PollingErrorPolicy> {
        std::sync::Arc::new(gax::polling_error_policy::DefaultTransient)
    }

    /// Returns the polling backoff policy.
    ///
    /// When mocking, this method is typically irrelevant. Do not try to verify
    /// it is called by your mocks.
    fn get_polling_backoff_policy(
        &self,
        _options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_backoff_policy::PollingBackoffPolicy> {
        std::sync::Arc::new(gax::exponential_backoff::ExponentialBackoff::default())
    }
}
