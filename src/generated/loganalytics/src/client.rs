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
#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

/// Implements a client for the Logging Analytics API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use oci_loganalytics::client::LogAnalytics;
/// let client = LogAnalytics::builder().build().await?;
/// let mut entities = client
///     .list_log_analytics_entities()
///     .set_namespace_name("my-namespace")
///     .set_compartment_id("ocid1.compartment.oc1..example")
///     .by_item();
/// while let Some(entity) = entities.next().await {
///     println!("{:?}", entity?);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(()) });
/// ```
///
/// # Service Description
///
/// Logging Analytics ingests, enriches and indexes log data from cloud and
/// on-premises resources, and runs queries over it.
///
/// # Configuration
///
/// To configure `LogAnalytics` use the `with_*` methods in the type returned
/// by [builder()][LogAnalytics::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the service endpoint in
///   the `us-ashburn-1` region. Applications using other regions need to
///   override the endpoint.
/// * [with_credentials()]: by default this client reads a security token from
///   the `OCI_SECURITY_TOKEN` environment variable. Applications with other
///   authentication needs should provide their own credentials.
///
/// [with_endpoint()]: super::builder::log_analytics::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::log_analytics::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `LogAnalytics` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `LogAnalytics` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct LogAnalytics {
    inner: std::sync::Arc<dyn super::stub::dynamic::LogAnalytics>,
}

impl LogAnalytics {
    /// Returns a builder for [LogAnalytics].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use oci_loganalytics::client::LogAnalytics;
    /// let client = LogAnalytics::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::log_analytics::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::log_analytics::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::LogAnalytics + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::LogAnalytics>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::LogAnalytics> {
        super::transport::LogAnalytics::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::LogAnalytics> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::LogAnalytics::new)
    }

    /// Lists the namespaces of a tenancy.
    pub fn list_namespaces(&self) -> super::builder::log_analytics::ListNamespaces {
        super::builder::log_analytics::ListNamespaces::new(self.inner.clone())
    }

    /// Gets a namespace, and its onboarding status.
    pub fn get_namespace(&self) -> super::builder::log_analytics::GetNamespace {
        super::builder::log_analytics::GetNamespace::new(self.inner.clone())
    }

    /// Onboards a tenancy to Logging Analytics.
    pub fn onboard_namespace(&self) -> super::builder::log_analytics::OnboardNamespace {
        super::builder::log_analytics::OnboardNamespace::new(self.inner.clone())
    }

    /// Offboards a tenancy from Logging Analytics.
    pub fn offboard_namespace(&self) -> super::builder::log_analytics::OffboardNamespace {
        super::builder::log_analytics::OffboardNamespace::new(self.inner.clone())
    }

    /// Lists the source associations of an entity.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_entity_source_associations(
        &self,
    ) -> super::builder::log_analytics::ListEntitySourceAssociations {
        super::builder::log_analytics::ListEntitySourceAssociations::new(self.inner.clone())
    }

    /// Lists the entities associated with a source.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_source_associations(
        &self,
    ) -> super::builder::log_analytics::ListSourceAssociations {
        super::builder::log_analytics::ListSourceAssociations::new(self.inner.clone())
    }

    /// Gets the number of associations in each state.
    pub fn get_association_summary(&self) -> super::builder::log_analytics::GetAssociationSummary {
        super::builder::log_analytics::GetAssociationSummary::new(self.inner.clone())
    }

    /// Creates or updates associations between sources and entities.
    ///
    /// This operation starts a work request. Use the `poller()` method of the
    /// returned builder to wait until it completes.
    pub fn upsert_associations(&self) -> super::builder::log_analytics::UpsertAssociations {
        super::builder::log_analytics::UpsertAssociations::new(self.inner.clone())
    }

    /// Deletes associations between sources and entities.
    ///
    /// This operation starts a work request. Use the `poller()` method of the
    /// returned builder to wait until it completes.
    pub fn delete_associations(&self) -> super::builder::log_analytics::DeleteAssociations {
        super::builder::log_analytics::DeleteAssociations::new(self.inner.clone())
    }

    /// Checks if the entities of a set of associations have the properties required by the source.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn validate_association_parameters(
        &self,
    ) -> super::builder::log_analytics::ValidateAssociationParameters {
        super::builder::log_analytics::ValidateAssociationParameters::new(self.inner.clone())
    }

    /// Lists the categories.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_categories(&self) -> super::builder::log_analytics::ListCategories {
        super::builder::log_analytics::ListCategories::new(self.inner.clone())
    }

    /// Gets a category.
    pub fn get_category(&self) -> super::builder::log_analytics::GetCategory {
        super::builder::log_analytics::GetCategory::new(self.inner.clone())
    }

    /// Deletes a category.
    pub fn delete_category(&self) -> super::builder::log_analytics::DeleteCategory {
        super::builder::log_analytics::DeleteCategory::new(self.inner.clone())
    }

    /// Lists the categories assigned to resources.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_resource_categories(
        &self,
    ) -> super::builder::log_analytics::ListResourceCategories {
        super::builder::log_analytics::ListResourceCategories::new(self.inner.clone())
    }

    /// Assigns categories to resources.
    pub fn update_resource_categories(
        &self,
    ) -> super::builder::log_analytics::UpdateResourceCategories {
        super::builder::log_analytics::UpdateResourceCategories::new(self.inner.clone())
    }

    /// Removes category assignments from resources.
    pub fn remove_resource_categories(
        &self,
    ) -> super::builder::log_analytics::RemoveResourceCategories {
        super::builder::log_analytics::RemoveResourceCategories::new(self.inner.clone())
    }

    /// Gets a configuration work request.
    pub fn get_config_work_request(&self) -> super::builder::log_analytics::GetConfigWorkRequest {
        super::builder::log_analytics::GetConfigWorkRequest::new(self.inner.clone())
    }

    /// Lists the configuration work requests in a compartment.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_config_work_requests(
        &self,
    ) -> super::builder::log_analytics::ListConfigWorkRequests {
        super::builder::log_analytics::ListConfigWorkRequests::new(self.inner.clone())
    }

    /// Exports custom sources, parsers and fields as a zip archive.
    ///
    /// The response body contains the raw bytes returned by the service.
    pub fn export_custom_content(&self) -> super::builder::log_analytics::ExportCustomContent {
        super::builder::log_analytics::ExportCustomContent::new(self.inner.clone())
    }

    /// Imports custom content from a zip archive.
    pub fn import_custom_content(&self) -> super::builder::log_analytics::ImportCustomContent {
        super::builder::log_analytics::ImportCustomContent::new(self.inner.clone())
    }

    /// Creates an Enterprise Manager bridge.
    pub fn create_log_analytics_em_bridge(
        &self,
    ) -> super::builder::log_analytics::CreateLogAnalyticsEmBridge {
        super::builder::log_analytics::CreateLogAnalyticsEmBridge::new(self.inner.clone())
    }

    /// Gets an Enterprise Manager bridge.
    pub fn get_log_analytics_em_bridge(
        &self,
    ) -> super::builder::log_analytics::GetLogAnalyticsEmBridge {
        super::builder::log_analytics::GetLogAnalyticsEmBridge::new(self.inner.clone())
    }

    /// Lists the Enterprise Manager bridges in a compartment.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_log_analytics_em_bridges(
        &self,
    ) -> super::builder::log_analytics::ListLogAnalyticsEmBridges {
        super::builder::log_analytics::ListLogAnalyticsEmBridges::new(self.inner.clone())
    }

    /// Updates an Enterprise Manager bridge.
    pub fn update_log_analytics_em_bridge(
        &self,
    ) -> super::builder::log_analytics::UpdateLogAnalyticsEmBridge {
        super::builder::log_analytics::UpdateLogAnalyticsEmBridge::new(self.inner.clone())
    }

    /// Deletes an Enterprise Manager bridge.
    pub fn delete_log_analytics_em_bridge(
        &self,
    ) -> super::builder::log_analytics::DeleteLogAnalyticsEmBridge {
        super::builder::log_analytics::DeleteLogAnalyticsEmBridge::new(self.inner.clone())
    }

    /// Gets the number of Enterprise Manager bridges in each state.
    pub fn get_log_analytics_em_bridge_summary(
        &self,
    ) -> super::builder::log_analytics::GetLogAnalyticsEmBridgeSummary {
        super::builder::log_analytics::GetLogAnalyticsEmBridgeSummary::new(self.inner.clone())
    }

    /// Creates an entity.
    pub fn create_log_analytics_entity(
        &self,
    ) -> super::builder::log_analytics::CreateLogAnalyticsEntity {
        super::builder::log_analytics::CreateLogAnalyticsEntity::new(self.inner.clone())
    }

    /// Gets an entity.
    pub fn get_log_analytics_entity(&self) -> super::builder::log_analytics::GetLogAnalyticsEntity {
        super::builder::log_analytics::GetLogAnalyticsEntity::new(self.inner.clone())
    }

    /// Lists the entities in a compartment.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_log_analytics_entities(
        &self,
    ) -> super::builder::log_analytics::ListLogAnalyticsEntities {
        super::builder::log_analytics::ListLogAnalyticsEntities::new(self.inner.clone())
    }

    /// Updates an entity.
    pub fn update_log_analytics_entity(
        &self,
    ) -> super::builder::log_analytics::UpdateLogAnalyticsEntity {
        super::builder::log_analytics::UpdateLogAnalyticsEntity::new(self.inner.clone())
    }

    /// Deletes an entity.
    pub fn delete_log_analytics_entity(
        &self,
    ) -> super::builder::log_analytics::DeleteLogAnalyticsEntity {
        super::builder::log_analytics::DeleteLogAnalyticsEntity::new(self.inner.clone())
    }

    /// Gets the number of entities in a compartment.
    pub fn get_log_analytics_entities_summary(
        &self,
    ) -> super::builder::log_analytics::GetLogAnalyticsEntitiesSummary {
        super::builder::log_analytics::GetLogAnalyticsEntitiesSummary::new(self.inner.clone())
    }

    /// Moves an entity to a different compartment.
    pub fn change_log_analytics_entity_compartment(
        &self,
    ) -> super::builder::log_analytics::ChangeLogAnalyticsEntityCompartment {
        super::builder::log_analytics::ChangeLogAnalyticsEntityCompartment::new(self.inner.clone())
    }

    /// Associates other entities with an entity.
    pub fn add_entity_association(&self) -> super::builder::log_analytics::AddEntityAssociation {
        super::builder::log_analytics::AddEntityAssociation::new(self.inner.clone())
    }

    /// Removes associations between an entity and other entities.
    pub fn remove_entity_associations(
        &self,
    ) -> super::builder::log_analytics::RemoveEntityAssociations {
        super::builder::log_analytics::RemoveEntityAssociations::new(self.inner.clone())
    }

    /// Lists the entities associated with an entity.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_entity_associations(
        &self,
    ) -> super::builder::log_analytics::ListEntityAssociations {
        super::builder::log_analytics::ListEntityAssociations::new(self.inner.clone())
    }

    /// Gets the topology of an entity.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_log_analytics_entity_topology(
        &self,
    ) -> super::builder::log_analytics::ListLogAnalyticsEntityTopology {
        super::builder::log_analytics::ListLogAnalyticsEntityTopology::new(self.inner.clone())
    }

    /// Creates an entity type.
    pub fn create_log_analytics_entity_type(
        &self,
    ) -> super::builder::log_analytics::CreateLogAnalyticsEntityType {
        super::builder::log_analytics::CreateLogAnalyticsEntityType::new(self.inner.clone())
    }

    /// Gets an entity type.
    pub fn get_log_analytics_entity_type(
        &self,
    ) -> super::builder::log_analytics::GetLogAnalyticsEntityType {
        super::builder::log_analytics::GetLogAnalyticsEntityType::new(self.inner.clone())
    }

    /// Lists the entity types.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_log_analytics_entity_types(
        &self,
    ) -> super::builder::log_analytics::ListLogAnalyticsEntityTypes {
        super::builder::log_analytics::ListLogAnalyticsEntityTypes::new(self.inner.clone())
    }

    /// Updates an entity type.
    pub fn update_log_analytics_entity_type(
        &self,
    ) -> super::builder::log_analytics::UpdateLogAnalyticsEntityType {
        super::builder::log_analytics::UpdateLogAnalyticsEntityType::new(self.inner.clone())
    }

    /// Deletes an entity type.
    pub fn delete_log_analytics_entity_type(
        &self,
    ) -> super::builder::log_analytics::DeleteLogAnalyticsEntityType {
        super::builder::log_analytics::DeleteLogAnalyticsEntityType::new(self.inner.clone())
    }

    /// Creates a log group.
    pub fn create_log_analytics_log_group(
        &self,
    ) -> super::builder::log_analytics::CreateLogAnalyticsLogGroup {
        super::builder::log_analytics::CreateLogAnalyticsLogGroup::new(self.inner.clone())
    }

    /// Gets a log group.
    pub fn get_log_analytics_log_group(
        &self,
    ) -> super::builder::log_analytics::GetLogAnalyticsLogGroup {
        super::builder::log_analytics::GetLogAnalyticsLogGroup::new(self.inner.clone())
    }

    /// Lists the log groups in a compartment.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_log_analytics_log_groups(
        &self,
    ) -> super::builder::log_analytics::ListLogAnalyticsLogGroups {
        super::builder::log_analytics::ListLogAnalyticsLogGroups::new(self.inner.clone())
    }

    /// Updates a log group.
    pub fn update_log_analytics_log_group(
        &self,
    ) -> super::builder::log_analytics::UpdateLogAnalyticsLogGroup {
        super::builder::log_analytics::UpdateLogAnalyticsLogGroup::new(self.inner.clone())
    }

    /// Deletes a log group.
    pub fn delete_log_analytics_log_group(
        &self,
    ) -> super::builder::log_analytics::DeleteLogAnalyticsLogGroup {
        super::builder::log_analytics::DeleteLogAnalyticsLogGroup::new(self.inner.clone())
    }

    /// Moves a log group to a different compartment.
    pub fn change_log_analytics_log_group_compartment(
        &self,
    ) -> super::builder::log_analytics::ChangeLogAnalyticsLogGroupCompartment {
        super::builder::log_analytics::ChangeLogAnalyticsLogGroupCompartment::new(
            self.inner.clone(),
        )
    }

    /// Gets the number of log groups in a compartment.
    pub fn get_log_analytics_log_groups_summary(
        &self,
    ) -> super::builder::log_analytics::GetLogAnalyticsLogGroupsSummary {
        super::builder::log_analytics::GetLogAnalyticsLogGroupsSummary::new(self.inner.clone())
    }

    /// Creates a rule to collect logs from an Object Storage bucket.
    pub fn create_log_analytics_object_collection_rule(
        &self,
    ) -> super::builder::log_analytics::CreateLogAnalyticsObjectCollectionRule {
        super::builder::log_analytics::CreateLogAnalyticsObjectCollectionRule::new(
            self.inner.clone(),
        )
    }

    /// Gets an object collection rule.
    pub fn get_log_analytics_object_collection_rule(
        &self,
    ) -> super::builder::log_analytics::GetLogAnalyticsObjectCollectionRule {
        super::builder::log_analytics::GetLogAnalyticsObjectCollectionRule::new(self.inner.clone())
    }

    /// Lists the object collection rules in a compartment.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_log_analytics_object_collection_rules(
        &self,
    ) -> super::builder::log_analytics::ListLogAnalyticsObjectCollectionRules {
        super::builder::log_analytics::ListLogAnalyticsObjectCollectionRules::new(
            self.inner.clone(),
        )
    }

    /// Updates an object collection rule.
    pub fn update_log_analytics_object_collection_rule(
        &self,
    ) -> super::builder::log_analytics::UpdateLogAnalyticsObjectCollectionRule {
        super::builder::log_analytics::UpdateLogAnalyticsObjectCollectionRule::new(
            self.inner.clone(),
        )
    }

    /// Deletes an object collection rule.
    pub fn delete_log_analytics_object_collection_rule(
        &self,
    ) -> super::builder::log_analytics::DeleteLogAnalyticsObjectCollectionRule {
        super::builder::log_analytics::DeleteLogAnalyticsObjectCollectionRule::new(
            self.inner.clone(),
        )
    }

    /// Moves an object collection rule to a different compartment.
    pub fn change_log_analytics_object_collection_rule_compartment(
        &self,
    ) -> super::builder::log_analytics::ChangeLogAnalyticsObjectCollectionRuleCompartment {
        super::builder::log_analytics::ChangeLogAnalyticsObjectCollectionRuleCompartment::new(
            self.inner.clone(),
        )
    }

    /// Creates an ingest time rule.
    pub fn create_ingest_time_rule(&self) -> super::builder::log_analytics::CreateIngestTimeRule {
        super::builder::log_analytics::CreateIngestTimeRule::new(self.inner.clone())
    }

    /// Gets an ingest time rule.
    pub fn get_ingest_time_rule(&self) -> super::builder::log_analytics::GetIngestTimeRule {
        super::builder::log_analytics::GetIngestTimeRule::new(self.inner.clone())
    }

    /// Lists the ingest time rules in a compartment.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_ingest_time_rules(&self) -> super::builder::log_analytics::ListIngestTimeRules {
        super::builder::log_analytics::ListIngestTimeRules::new(self.inner.clone())
    }

    /// Updates an ingest time rule.
    pub fn update_ingest_time_rule(&self) -> super::builder::log_analytics::UpdateIngestTimeRule {
        super::builder::log_analytics::UpdateIngestTimeRule::new(self.inner.clone())
    }

    /// Deletes an ingest time rule.
    pub fn delete_ingest_time_rule(&self) -> super::builder::log_analytics::DeleteIngestTimeRule {
        super::builder::log_analytics::DeleteIngestTimeRule::new(self.inner.clone())
    }

    /// Enables an ingest time rule.
    pub fn enable_ingest_time_rule(&self) -> super::builder::log_analytics::EnableIngestTimeRule {
        super::builder::log_analytics::EnableIngestTimeRule::new(self.inner.clone())
    }

    /// Disables an ingest time rule.
    pub fn disable_ingest_time_rule(&self) -> super::builder::log_analytics::DisableIngestTimeRule {
        super::builder::log_analytics::DisableIngestTimeRule::new(self.inner.clone())
    }

    /// Moves an ingest time rule to a different compartment.
    pub fn change_ingest_time_rule_compartment(
        &self,
    ) -> super::builder::log_analytics::ChangeIngestTimeRuleCompartment {
        super::builder::log_analytics::ChangeIngestTimeRuleCompartment::new(self.inner.clone())
    }

    /// Lists the detection rules in a compartment.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_rules(&self) -> super::builder::log_analytics::ListRules {
        super::builder::log_analytics::ListRules::new(self.inner.clone())
    }

    /// Gets the number of detection rules of each kind.
    pub fn get_rules_summary(&self) -> super::builder::log_analytics::GetRulesSummary {
        super::builder::log_analytics::GetRulesSummary::new(self.inner.clone())
    }

    /// Lists the fields.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_fields(&self) -> super::builder::log_analytics::ListFields {
        super::builder::log_analytics::ListFields::new(self.inner.clone())
    }

    /// Gets a field.
    pub fn get_field(&self) -> super::builder::log_analytics::GetField {
        super::builder::log_analytics::GetField::new(self.inner.clone())
    }

    /// Creates or updates a field.
    pub fn upsert_field(&self) -> super::builder::log_analytics::UpsertField {
        super::builder::log_analytics::UpsertField::new(self.inner.clone())
    }

    /// Deletes a field.
    pub fn delete_field(&self) -> super::builder::log_analytics::DeleteField {
        super::builder::log_analytics::DeleteField::new(self.inner.clone())
    }

    /// Gets the number of fields of each kind.
    pub fn get_fields_summary(&self) -> super::builder::log_analytics::GetFieldsSummary {
        super::builder::log_analytics::GetFieldsSummary::new(self.inner.clone())
    }

    /// Extracts the field paths of a structured log sample.
    pub fn extract_structured_log_field_paths(
        &self,
    ) -> super::builder::log_analytics::ExtractStructuredLogFieldPaths {
        super::builder::log_analytics::ExtractStructuredLogFieldPaths::new(self.inner.clone())
    }

    /// Extracts the header paths of a structured log sample.
    pub fn extract_structured_log_header_paths(
        &self,
    ) -> super::builder::log_analytics::ExtractStructuredLogHeaderPaths {
        super::builder::log_analytics::ExtractStructuredLogHeaderPaths::new(self.inner.clone())
    }

    /// Tests a parser against a log sample.
    pub fn test_parser(&self) -> super::builder::log_analytics::TestParser {
        super::builder::log_analytics::TestParser::new(self.inner.clone())
    }

    /// Lists the labels.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_labels(&self) -> super::builder::log_analytics::ListLabels {
        super::builder::log_analytics::ListLabels::new(self.inner.clone())
    }

    /// Gets a label.
    pub fn get_label(&self) -> super::builder::log_analytics::GetLabel {
        super::builder::log_analytics::GetLabel::new(self.inner.clone())
    }

    /// Creates or updates a label.
    pub fn upsert_label(&self) -> super::builder::log_analytics::UpsertLabel {
        super::builder::log_analytics::UpsertLabel::new(self.inner.clone())
    }

    /// Deletes a label.
    pub fn delete_label(&self) -> super::builder::log_analytics::DeleteLabel {
        super::builder::log_analytics::DeleteLabel::new(self.inner.clone())
    }

    /// Gets the number of labels.
    pub fn get_label_summary(&self) -> super::builder::log_analytics::GetLabelSummary {
        super::builder::log_analytics::GetLabelSummary::new(self.inner.clone())
    }

    /// Lists the label priorities.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_label_priorities(&self) -> super::builder::log_analytics::ListLabelPriorities {
        super::builder::log_analytics::ListLabelPriorities::new(self.inner.clone())
    }

    /// Lists the sources using a label.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_label_source_details(
        &self,
    ) -> super::builder::log_analytics::ListLabelSourceDetails {
        super::builder::log_analytics::ListLabelSourceDetails::new(self.inner.clone())
    }

    /// Gets the basic information about a list of labels.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn batch_get_basic_info(&self) -> super::builder::log_analytics::BatchGetBasicInfo {
        super::builder::log_analytics::BatchGetBasicInfo::new(self.inner.clone())
    }

    /// Registers a lookup from a CSV file.
    pub fn register_lookup(&self) -> super::builder::log_analytics::RegisterLookup {
        super::builder::log_analytics::RegisterLookup::new(self.inner.clone())
    }

    /// Updates the metadata of a lookup.
    pub fn update_lookup(&self) -> super::builder::log_analytics::UpdateLookup {
        super::builder::log_analytics::UpdateLookup::new(self.inner.clone())
    }

    /// Replaces the content of a lookup.
    pub fn update_lookup_data(&self) -> super::builder::log_analytics::UpdateLookupData {
        super::builder::log_analytics::UpdateLookupData::new(self.inner.clone())
    }

    /// Appends rows to a lookup.
    pub fn append_lookup_data(&self) -> super::builder::log_analytics::AppendLookupData {
        super::builder::log_analytics::AppendLookupData::new(self.inner.clone())
    }

    /// Deletes a lookup.
    pub fn delete_lookup(&self) -> super::builder::log_analytics::DeleteLookup {
        super::builder::log_analytics::DeleteLookup::new(self.inner.clone())
    }

    /// Gets a lookup.
    pub fn get_lookup(&self) -> super::builder::log_analytics::GetLookup {
        super::builder::log_analytics::GetLookup::new(self.inner.clone())
    }

    /// Lists the lookups.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_lookups(&self) -> super::builder::log_analytics::ListLookups {
        super::builder::log_analytics::ListLookups::new(self.inner.clone())
    }

    /// Downloads the content of a lookup as CSV.
    ///
    /// The response body contains the raw bytes returned by the service.
    pub fn export_lookup(&self) -> super::builder::log_analytics::ExportLookup {
        super::builder::log_analytics::ExportLookup::new(self.inner.clone())
    }

    /// Gets the number of lookups of each kind.
    pub fn get_lookup_summary(&self) -> super::builder::log_analytics::GetLookupSummary {
        super::builder::log_analytics::GetLookupSummary::new(self.inner.clone())
    }

    /// Lists the kinds of log sources.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_meta_source_types(&self) -> super::builder::log_analytics::ListMetaSourceTypes {
        super::builder::log_analytics::ListMetaSourceTypes::new(self.inner.clone())
    }

    /// Lists the functions of a parser.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_parser_functions(&self) -> super::builder::log_analytics::ListParserFunctions {
        super::builder::log_analytics::ListParserFunctions::new(self.inner.clone())
    }

    /// Lists the parser plugins.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_parser_meta_plugins(&self) -> super::builder::log_analytics::ListParserMetaPlugins {
        super::builder::log_analytics::ListParserMetaPlugins::new(self.inner.clone())
    }

    /// Lists the supported character encodings.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_supported_char_encodings(
        &self,
    ) -> super::builder::log_analytics::ListSupportedCharEncodings {
        super::builder::log_analytics::ListSupportedCharEncodings::new(self.inner.clone())
    }

    /// Lists the supported timezones.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_supported_timezones(
        &self,
    ) -> super::builder::log_analytics::ListSupportedTimezones {
        super::builder::log_analytics::ListSupportedTimezones::new(self.inner.clone())
    }

    /// Lists the functions available to sources.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_source_meta_functions(
        &self,
    ) -> super::builder::log_analytics::ListSourceMetaFunctions {
        super::builder::log_analytics::ListSourceMetaFunctions::new(self.inner.clone())
    }

    /// Lists the patterns of a source.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_source_patterns(&self) -> super::builder::log_analytics::ListSourcePatterns {
        super::builder::log_analytics::ListSourcePatterns::new(self.inner.clone())
    }

    /// Lists the operators used in label conditions.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_source_label_operators(
        &self,
    ) -> super::builder::log_analytics::ListSourceLabelOperators {
        super::builder::log_analytics::ListSourceLabelOperators::new(self.inner.clone())
    }

    /// Lists the extended field definitions of a source.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_source_extended_field_definitions(
        &self,
    ) -> super::builder::log_analytics::ListSourceExtendedFieldDefinitions {
        super::builder::log_analytics::ListSourceExtendedFieldDefinitions::new(self.inner.clone())
    }

    /// Lists the effective values of the configuration properties.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_effective_properties(
        &self,
    ) -> super::builder::log_analytics::ListEffectiveProperties {
        super::builder::log_analytics::ListEffectiveProperties::new(self.inner.clone())
    }

    /// Lists the metadata of the configuration properties.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_properties_metadata(
        &self,
    ) -> super::builder::log_analytics::ListPropertiesMetadata {
        super::builder::log_analytics::ListPropertiesMetadata::new(self.inner.clone())
    }

    /// Lists the log sets.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_log_sets(&self) -> super::builder::log_analytics::ListLogSets {
        super::builder::log_analytics::ListLogSets::new(self.inner.clone())
    }

    /// Gets the number of log sets.
    pub fn get_log_sets_count(&self) -> super::builder::log_analytics::GetLogSetsCount {
        super::builder::log_analytics::GetLogSetsCount::new(self.inner.clone())
    }

    /// Deletes a parser.
    pub fn delete_parser(&self) -> super::builder::log_analytics::DeleteParser {
        super::builder::log_analytics::DeleteParser::new(self.inner.clone())
    }

    /// Gets a parser.
    pub fn get_parser(&self) -> super::builder::log_analytics::GetParser {
        super::builder::log_analytics::GetParser::new(self.inner.clone())
    }

    /// Lists the parsers.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_parsers(&self) -> super::builder::log_analytics::ListParsers {
        super::builder::log_analytics::ListParsers::new(self.inner.clone())
    }

    /// Creates or updates a parser.
    pub fn upsert_parser(&self) -> super::builder::log_analytics::UpsertParser {
        super::builder::log_analytics::UpsertParser::new(self.inner.clone())
    }

    /// Gets the number of parsers of each kind.
    pub fn get_parser_summary(&self) -> super::builder::log_analytics::GetParserSummary {
        super::builder::log_analytics::GetParserSummary::new(self.inner.clone())
    }

    /// Lists the namespace preferences.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_preferences(&self) -> super::builder::log_analytics::ListPreferences {
        super::builder::log_analytics::ListPreferences::new(self.inner.clone())
    }

    /// Updates the namespace preferences.
    pub fn update_preferences(&self) -> super::builder::log_analytics::UpdatePreferences {
        super::builder::log_analytics::UpdatePreferences::new(self.inner.clone())
    }

    /// Removes namespace preferences.
    pub fn remove_preferences(&self) -> super::builder::log_analytics::RemovePreferences {
        super::builder::log_analytics::RemovePreferences::new(self.inner.clone())
    }

    /// Runs a query, in the foreground or in the background.
    ///
    /// This operation starts a work request. Use the `poller()` method of the
    /// returned builder to wait until it completes.
    pub fn query(&self) -> super::builder::log_analytics::Query {
        super::builder::log_analytics::Query::new(self.inner.clone())
    }

    /// Gets the results of a query running in the background.
    pub fn get_query_result(&self) -> super::builder::log_analytics::GetQueryResult {
        super::builder::log_analytics::GetQueryResult::new(self.inner.clone())
    }

    /// Exports the results of a query as CSV or JSON.
    ///
    /// The response body contains the raw bytes returned by the service.
    pub fn export_query_result(&self) -> super::builder::log_analytics::ExportQueryResult {
        super::builder::log_analytics::ExportQueryResult::new(self.inner.clone())
    }

    /// Adds filters to a query.
    pub fn filter(&self) -> super::builder::log_analytics::Filter {
        super::builder::log_analytics::Filter::new(self.inner.clone())
    }

    /// Parses a query.
    pub fn parse_query(&self) -> super::builder::log_analytics::ParseQuery {
        super::builder::log_analytics::ParseQuery::new(self.inner.clone())
    }

    /// Suggests completions for a partial query.
    pub fn suggest(&self) -> super::builder::log_analytics::Suggest {
        super::builder::log_analytics::Suggest::new(self.inner.clone())
    }

    /// Gets a query work request.
    pub fn get_query_work_request(&self) -> super::builder::log_analytics::GetQueryWorkRequest {
        super::builder::log_analytics::GetQueryWorkRequest::new(self.inner.clone())
    }

    /// Cancels a query running in the background.
    pub fn delete_query_work_request(
        &self,
    ) -> super::builder::log_analytics::DeleteQueryWorkRequest {
        super::builder::log_analytics::DeleteQueryWorkRequest::new(self.inner.clone())
    }

    /// Lists the query work requests in a compartment.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_query_work_requests(&self) -> super::builder::log_analytics::ListQueryWorkRequests {
        super::builder::log_analytics::ListQueryWorkRequests::new(self.inner.clone())
    }

    /// Creates a scheduled task.
    pub fn create_scheduled_task(&self) -> super::builder::log_analytics::CreateScheduledTask {
        super::builder::log_analytics::CreateScheduledTask::new(self.inner.clone())
    }

    /// Gets a scheduled task.
    pub fn get_scheduled_task(&self) -> super::builder::log_analytics::GetScheduledTask {
        super::builder::log_analytics::GetScheduledTask::new(self.inner.clone())
    }

    /// Lists the scheduled tasks of a type.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_scheduled_tasks(&self) -> super::builder::log_analytics::ListScheduledTasks {
        super::builder::log_analytics::ListScheduledTasks::new(self.inner.clone())
    }

    /// Updates a scheduled task.
    pub fn update_scheduled_task(&self) -> super::builder::log_analytics::UpdateScheduledTask {
        super::builder::log_analytics::UpdateScheduledTask::new(self.inner.clone())
    }

    /// Deletes a scheduled task.
    pub fn delete_scheduled_task(&self) -> super::builder::log_analytics::DeleteScheduledTask {
        super::builder::log_analytics::DeleteScheduledTask::new(self.inner.clone())
    }

    /// Pauses a scheduled task.
    pub fn pause_scheduled_task(&self) -> super::builder::log_analytics::PauseScheduledTask {
        super::builder::log_analytics::PauseScheduledTask::new(self.inner.clone())
    }

    /// Resumes a paused scheduled task.
    pub fn resume_scheduled_task(&self) -> super::builder::log_analytics::ResumeScheduledTask {
        super::builder::log_analytics::ResumeScheduledTask::new(self.inner.clone())
    }

    /// Moves a scheduled task to a different compartment.
    pub fn change_scheduled_task_compartment(
        &self,
    ) -> super::builder::log_analytics::ChangeScheduledTaskCompartment {
        super::builder::log_analytics::ChangeScheduledTaskCompartment::new(self.inner.clone())
    }

    /// Deletes a source.
    pub fn delete_source(&self) -> super::builder::log_analytics::DeleteSource {
        super::builder::log_analytics::DeleteSource::new(self.inner.clone())
    }

    /// Gets a source.
    pub fn get_source(&self) -> super::builder::log_analytics::GetSource {
        super::builder::log_analytics::GetSource::new(self.inner.clone())
    }

    /// Lists the sources.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_sources(&self) -> super::builder::log_analytics::ListSources {
        super::builder::log_analytics::ListSources::new(self.inner.clone())
    }

    /// Creates or updates a source.
    pub fn upsert_source(&self) -> super::builder::log_analytics::UpsertSource {
        super::builder::log_analytics::UpsertSource::new(self.inner.clone())
    }

    /// Validates a source before it is saved.
    pub fn validate_source(&self) -> super::builder::log_analytics::ValidateSource {
        super::builder::log_analytics::ValidateSource::new(self.inner.clone())
    }

    /// Validates the extended field definitions of a source.
    pub fn validate_source_extended_field_details(
        &self,
    ) -> super::builder::log_analytics::ValidateSourceExtendedFieldDetails {
        super::builder::log_analytics::ValidateSourceExtendedFieldDetails::new(self.inner.clone())
    }

    /// Enables auto association for a source.
    pub fn enable_auto_association(&self) -> super::builder::log_analytics::EnableAutoAssociation {
        super::builder::log_analytics::EnableAutoAssociation::new(self.inner.clone())
    }

    /// Disables auto association for a source.
    pub fn disable_auto_association(
        &self,
    ) -> super::builder::log_analytics::DisableAutoAssociation {
        super::builder::log_analytics::DisableAutoAssociation::new(self.inner.clone())
    }

    /// Lists the auto association settings of a source.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_auto_associations(&self) -> super::builder::log_analytics::ListAutoAssociations {
        super::builder::log_analytics::ListAutoAssociations::new(self.inner.clone())
    }

    /// Suppresses warnings.
    pub fn suppress_warning(&self) -> super::builder::log_analytics::SuppressWarning {
        super::builder::log_analytics::SuppressWarning::new(self.inner.clone())
    }

    /// Unsuppresses warnings.
    pub fn unsuppress_warning(&self) -> super::builder::log_analytics::UnsuppressWarning {
        super::builder::log_analytics::UnsuppressWarning::new(self.inner.clone())
    }

    /// Lists the warnings in a compartment.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_warnings(&self) -> super::builder::log_analytics::ListWarnings {
        super::builder::log_analytics::ListWarnings::new(self.inner.clone())
    }

    /// Gets the storage settings of a namespace.
    pub fn get_storage(&self) -> super::builder::log_analytics::GetStorage {
        super::builder::log_analytics::GetStorage::new(self.inner.clone())
    }

    /// Updates the storage settings of a namespace.
    pub fn update_storage(&self) -> super::builder::log_analytics::UpdateStorage {
        super::builder::log_analytics::UpdateStorage::new(self.inner.clone())
    }

    /// Gets the storage used by a namespace.
    pub fn get_storage_usage(&self) -> super::builder::log_analytics::GetStorageUsage {
        super::builder::log_analytics::GetStorageUsage::new(self.inner.clone())
    }

    /// Estimates the size of the data a purge would delete.
    pub fn estimate_purge_data_size(&self) -> super::builder::log_analytics::EstimatePurgeDataSize {
        super::builder::log_analytics::EstimatePurgeDataSize::new(self.inner.clone())
    }

    /// Estimates the size of the data a recall would restore.
    pub fn estimate_recall_data_size(
        &self,
    ) -> super::builder::log_analytics::EstimateRecallDataSize {
        super::builder::log_analytics::EstimateRecallDataSize::new(self.inner.clone())
    }

    /// Estimates the size of the data a release would free.
    pub fn estimate_release_data_size(
        &self,
    ) -> super::builder::log_analytics::EstimateReleaseDataSize {
        super::builder::log_analytics::EstimateReleaseDataSize::new(self.inner.clone())
    }

    /// Purges data older than a point in time.
    ///
    /// This operation starts a work request. Use the `poller()` method of the
    /// returned builder to wait until it completes.
    pub fn purge_storage_data(&self) -> super::builder::log_analytics::PurgeStorageData {
        super::builder::log_analytics::PurgeStorageData::new(self.inner.clone())
    }

    /// Recalls archived data for a time range.
    ///
    /// This operation starts a work request. Use the `poller()` method of the
    /// returned builder to wait until it completes.
    pub fn recall_archived_data(&self) -> super::builder::log_analytics::RecallArchivedData {
        super::builder::log_analytics::RecallArchivedData::new(self.inner.clone())
    }

    /// Releases recalled data for a time range.
    ///
    /// This operation starts a work request. Use the `poller()` method of the
    /// returned builder to wait until it completes.
    pub fn release_recalled_data(&self) -> super::builder::log_analytics::ReleaseRecalledData {
        super::builder::log_analytics::ReleaseRecalledData::new(self.inner.clone())
    }

    /// Gets a storage work request.
    pub fn get_storage_work_request(&self) -> super::builder::log_analytics::GetStorageWorkRequest {
        super::builder::log_analytics::GetStorageWorkRequest::new(self.inner.clone())
    }

    /// Lists the storage work requests in a compartment.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_storage_work_requests(
        &self,
    ) -> super::builder::log_analytics::ListStorageWorkRequests {
        super::builder::log_analytics::ListStorageWorkRequests::new(self.inner.clone())
    }

    /// Lists the errors of a storage work request.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_storage_work_request_errors(
        &self,
    ) -> super::builder::log_analytics::ListStorageWorkRequestErrors {
        super::builder::log_analytics::ListStorageWorkRequestErrors::new(self.inner.clone())
    }

    /// Gets the number of recalls.
    pub fn get_recall_count(&self) -> super::builder::log_analytics::GetRecallCount {
        super::builder::log_analytics::GetRecallCount::new(self.inner.clone())
    }

    /// Gets the size of the recalled data in a time range.
    pub fn get_recalled_data_size(&self) -> super::builder::log_analytics::GetRecalledDataSize {
        super::builder::log_analytics::GetRecalledDataSize::new(self.inner.clone())
    }

    /// Lists the recalled data.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_recalled_data(&self) -> super::builder::log_analytics::ListRecalledData {
        super::builder::log_analytics::ListRecalledData::new(self.inner.clone())
    }

    /// Lists the recalls overlapping with a time range.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_overlapping_recalls(
        &self,
    ) -> super::builder::log_analytics::ListOverlappingRecalls {
        super::builder::log_analytics::ListOverlappingRecalls::new(self.inner.clone())
    }

    /// Sets the bucket storing data that could not be processed.
    pub fn set_unprocessed_data_bucket(
        &self,
    ) -> super::builder::log_analytics::SetUnprocessedDataBucket {
        super::builder::log_analytics::SetUnprocessedDataBucket::new(self.inner.clone())
    }

    /// Gets the bucket storing data that could not be processed.
    pub fn get_unprocessed_data_bucket(
        &self,
    ) -> super::builder::log_analytics::GetUnprocessedDataBucket {
        super::builder::log_analytics::GetUnprocessedDataBucket::new(self.inner.clone())
    }

    /// Enables archiving of old data.
    pub fn enable_archiving(&self) -> super::builder::log_analytics::EnableArchiving {
        super::builder::log_analytics::EnableArchiving::new(self.inner.clone())
    }

    /// Disables archiving of old data.
    pub fn disable_archiving(&self) -> super::builder::log_analytics::DisableArchiving {
        super::builder::log_analytics::DisableArchiving::new(self.inner.clone())
    }

    /// Uploads a log file.
    pub fn upload_log_file(&self) -> super::builder::log_analytics::UploadLogFile {
        super::builder::log_analytics::UploadLogFile::new(self.inner.clone())
    }

    /// Uploads a file of log events, in JSON, gzip or zip format.
    pub fn upload_log_events_file(&self) -> super::builder::log_analytics::UploadLogEventsFile {
        super::builder::log_analytics::UploadLogEventsFile::new(self.inner.clone())
    }

    /// Uploads entities and relationships discovered by an external tool.
    pub fn upload_discovery_data(&self) -> super::builder::log_analytics::UploadDiscoveryData {
        super::builder::log_analytics::UploadDiscoveryData::new(self.inner.clone())
    }

    /// Gets an upload.
    pub fn get_upload(&self) -> super::builder::log_analytics::GetUpload {
        super::builder::log_analytics::GetUpload::new(self.inner.clone())
    }

    /// Lists the uploads.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_uploads(&self) -> super::builder::log_analytics::ListUploads {
        super::builder::log_analytics::ListUploads::new(self.inner.clone())
    }

    /// Deletes an upload and the data it ingested.
    pub fn delete_upload(&self) -> super::builder::log_analytics::DeleteUpload {
        super::builder::log_analytics::DeleteUpload::new(self.inner.clone())
    }

    /// Lists the files of an upload.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_upload_files(&self) -> super::builder::log_analytics::ListUploadFiles {
        super::builder::log_analytics::ListUploadFiles::new(self.inner.clone())
    }

    /// Deletes an uploaded file and the data it ingested.
    pub fn delete_upload_file(&self) -> super::builder::log_analytics::DeleteUploadFile {
        super::builder::log_analytics::DeleteUploadFile::new(self.inner.clone())
    }

    /// Lists the warnings of an upload.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_upload_warnings(&self) -> super::builder::log_analytics::ListUploadWarnings {
        super::builder::log_analytics::ListUploadWarnings::new(self.inner.clone())
    }

    /// Dismisses a warning of an upload.
    pub fn delete_upload_warning(&self) -> super::builder::log_analytics::DeleteUploadWarning {
        super::builder::log_analytics::DeleteUploadWarning::new(self.inner.clone())
    }

    /// Lists the templates in a compartment.
    ///
    /// The results are paginated, see `by_page()` and `by_item()`.
    pub fn list_templates(&self) -> super::builder::log_analytics::ListTemplates {
        super::builder::log_analytics::ListTemplates::new(self.inner.clone())
    }

    /// Gets a template.
    pub fn get_template(&self) -> super::builder::log_analytics::GetTemplate {
        super::builder::log_analytics::GetTemplate::new(self.inner.clone())
    }
}
