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
#[allow(unused_imports)]
use gaxi::query_parameter::QueryParameter;

/// The media type of binary payloads when the application does not set one.
const DEFAULT_PAYLOAD_CONTENT_TYPE: &str = "application/octet-stream";

/// Implements [LogAnalytics](super::stub::LogAnalytics) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct LogAnalytics {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for LogAnalytics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("LogAnalytics")
            .field("inner", &self.inner)
            .finish()
    }
}

impl LogAnalytics {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner =
            gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST, crate::info::API_CLIENT)
                .await?;
        Ok(Self { inner })
    }
}

impl super::stub::LogAnalytics for LogAnalytics {
    async fn list_namespaces(
        &self,
        req: crate::model::ListNamespacesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::NamespaceCollection>> {
        let compartment_id =
            gaxi::path_parameter::not_blank(&req.compartment_id, "compartment_id")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = "/namespaces".to_string();
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_namespace(
        &self,
        req: crate::model::GetNamespaceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Namespace>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn onboard_namespace(
        &self,
        req: crate::model::OnboardNamespaceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/actions/onboard");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner
            .execute_no_content(builder, req.onboard_namespace_details.as_ref(), options)
            .await
    }

    async fn offboard_namespace(
        &self,
        req: crate::model::OffboardNamespaceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/actions/offboard");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner
            .execute_no_content(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_entity_source_associations(
        &self,
        req: crate::model::ListEntitySourceAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsAssociationCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let compartment_id =
            gaxi::path_parameter::not_blank(&req.compartment_id, "compartment_id")?;
        let entity_id = gaxi::path_parameter::not_blank(&req.entity_id, "entity_id")?;
        let life_cycle_state =
            gaxi::enums::check_optional(&req.life_cycle_state, "life_cycle_state")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/entityAssociations");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId")?;
        let builder = entity_id.add(builder, "entityId")?;
        let builder = req.entity_type.as_deref().add(builder, "entityType")?;
        let builder = req
            .entity_type_display_name
            .as_deref()
            .add(builder, "entityTypeDisplayName")?;
        let builder = life_cycle_state.add(builder, "lifeCycleState")?;
        let builder = req.is_show_total.add(builder, "isShowTotal")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_source_associations(
        &self,
        req: crate::model::ListSourceAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsAssociationCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let source_name = gaxi::path_parameter::not_blank(&req.source_name, "source_name")?;
        let compartment_id =
            gaxi::path_parameter::not_blank(&req.compartment_id, "compartment_id")?;
        let life_cycle_state =
            gaxi::enums::check_optional(&req.life_cycle_state, "life_cycle_state")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/sourceAssociations");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = source_name.add(builder, "sourceName")?;
        let builder = compartment_id.add(builder, "compartmentId")?;
        let builder = req.entity_id.as_deref().add(builder, "entityId")?;
        let builder = life_cycle_state.add(builder, "lifeCycleState")?;
        let builder = req.is_show_total.add(builder, "isShowTotal")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_association_summary(
        &self,
        req: crate::model::GetAssociationSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AssociationSummaryReport>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let compartment_id =
            gaxi::path_parameter::not_blank(&req.compartment_id, "compartment_id")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/associationSummary");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn upsert_associations(
        &self,
        req: crate::model::UpsertAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(
            &req.upsert_log_analytics_association_details,
            "upsert_log_analytics_association_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/associations/actions/upsert");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = req.is_from_republish.add(builder, "isFromRepublish")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner
            .execute_no_content(builder, Some(body), options)
            .await
    }

    async fn delete_associations(
        &self,
        req: crate::model::DeleteAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(
            &req.delete_log_analytics_association_details,
            "delete_log_analytics_association_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/associations/actions/delete");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner
            .execute_no_content(builder, Some(body), options)
            .await
    }

    async fn validate_association_parameters(
        &self,
        req: crate::model::ValidateAssociationParametersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsAssociationParameterCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let body = gaxi::path_parameter::present(
            &req.upsert_log_analytics_association_details,
            "upsert_log_analytics_association_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/associations/actions/validateParameters");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn list_categories(
        &self,
        req: crate::model::ListCategoriesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsCategoryCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/categories");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req
            .category_display_text
            .as_deref()
            .add(builder, "categoryDisplayText")?;
        let builder = req.category_type.as_deref().add(builder, "categoryType")?;
        let builder = req.name.as_deref().add(builder, "name")?;
        let builder = req.is_system.add(builder, "isSystem")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_category(
        &self,
        req: crate::model::GetCategoryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsCategory>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let category_name = gaxi::path_parameter::required(&req.category_name, "category_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/categories/{category_name}");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete_category(
        &self,
        req: crate::model::DeleteCategoryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let category_name = gaxi::path_parameter::required(&req.category_name, "category_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/categories/{category_name}");
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute_no_content(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_resource_categories(
        &self,
        req: crate::model::ListResourceCategoriesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsResourceCategoryCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/categories/resourceCategories");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.categories.as_deref().add(builder, "categories")?;
        let builder = req.resource_types.as_deref().add(builder, "resourceTypes")?;
        let builder = req.resource_ids.as_deref().add(builder, "resourceIds")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_resource_categories(
        &self,
        req: crate::model::UpdateResourceCategoriesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(
            &req.log_analytics_categories_list_details,
            "log_analytics_categories_list_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path =
            format!("/namespaces/{namespace_name}/categories/actions/updateResourceCategories");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner
            .execute_no_content(builder, Some(body), options)
            .await
    }

    async fn remove_resource_categories(
        &self,
        req: crate::model::RemoveResourceCategoriesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(
            &req.log_analytics_categories_list_details,
            "log_analytics_categories_list_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path =
            format!("/namespaces/{namespace_name}/categories/actions/removeResourceCategories");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner
            .execute_no_content(builder, Some(body), options)
            .await
    }

    async fn get_config_work_request(
        &self,
        req: crate::model::GetConfigWorkRequestRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ConfigWorkRequest>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let work_request_id =
            gaxi::path_parameter::required(&req.work_request_id, "work_request_id")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/configWorkRequests/{work_request_id}");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_config_work_requests(
        &self,
        req: crate::model::ListConfigWorkRequestsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ConfigWorkRequestCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let compartment_id =
            gaxi::path_parameter::not_blank(&req.compartment_id, "compartment_id")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/configWorkRequests");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn export_custom_content(
        &self,
        req: crate::model::ExportCustomContentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<bytes::Bytes>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(&req.export_content, "export_content")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/actions/exportCustomContent");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner.download(builder, Some(body), options).await
    }

    async fn import_custom_content(
        &self,
        req: crate::model::ImportCustomContentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsImportCustomContent>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(&req.body, "body")?.clone();
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/actions/importCustomContent");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = req.is_overwrite.add(builder, "isOverwrite")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        let builder = gaxi::header_parameter::add(builder, "expect", req.expect.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            "content-type",
            req.content_type.as_deref(),
            || DEFAULT_PAYLOAD_CONTENT_TYPE.to_string(),
        )?;
        self.inner
            .execute_with_payload(builder, body, options)
            .await
    }

    async fn create_log_analytics_em_bridge(
        &self,
        req: crate::model::CreateLogAnalyticsEmBridgeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEmBridge>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(
            &req.create_log_analytics_em_bridge_details,
            "create_log_analytics_em_bridge_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/logAnalyticsEmBridges");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn get_log_analytics_em_bridge(
        &self,
        req: crate::model::GetLogAnalyticsEmBridgeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEmBridge>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let log_analytics_em_bridge_id = gaxi::path_parameter::required(
            &req.log_analytics_em_bridge_id,
            "log_analytics_em_bridge_id",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{namespace_name}/logAnalyticsEmBridges/{log_analytics_em_bridge_id}",
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_log_analytics_em_bridges(
        &self,
        req: crate::model::ListLogAnalyticsEmBridgesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEmBridgeCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let compartment_id =
            gaxi::path_parameter::not_blank(&req.compartment_id, "compartment_id")?;
        let lifecycle_state = gaxi::enums::check_all(&req.lifecycle_state, "lifecycle_state")?;
        let import_status = gaxi::enums::check_all(&req.import_status, "import_status")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/logAnalyticsEmBridges");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId")?;
        let builder = req.display_name.as_deref().add(builder, "displayName")?;
        let builder = lifecycle_state.add(builder, "lifecycleState")?;
        let builder = req
            .lifecycle_details_contains
            .as_deref()
            .add(builder, "lifecycleDetailsContains")?;
        let builder = import_status.add(builder, "importStatus")?;
        let builder = req
            .em_entities_compartment_id
            .as_deref()
            .add(builder, "emEntitiesCompartmentId")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_log_analytics_em_bridge(
        &self,
        req: crate::model::UpdateLogAnalyticsEmBridgeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEmBridge>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let log_analytics_em_bridge_id = gaxi::path_parameter::required(
            &req.log_analytics_em_bridge_id,
            "log_analytics_em_bridge_id",
        )?;
        let body = gaxi::path_parameter::present(
            &req.update_log_analytics_em_bridge_details,
            "update_log_analytics_em_bridge_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{namespace_name}/logAnalyticsEmBridges/{log_analytics_em_bridge_id}",
        );
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn delete_log_analytics_em_bridge(
        &self,
        req: crate::model::DeleteLogAnalyticsEmBridgeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let log_analytics_em_bridge_id = gaxi::path_parameter::required(
            &req.log_analytics_em_bridge_id,
            "log_analytics_em_bridge_id",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{namespace_name}/logAnalyticsEmBridges/{log_analytics_em_bridge_id}",
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = req.is_delete_entities.add(builder, "isDeleteEntities")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute_no_content(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_log_analytics_em_bridge_summary(
        &self,
        req: crate::model::GetLogAnalyticsEmBridgeSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEmBridgeSummaryReport>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let compartment_id =
            gaxi::path_parameter::not_blank(&req.compartment_id, "compartment_id")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/logAnalyticsEmBridges/emBridgeSummary");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_log_analytics_entity(
        &self,
        req: crate::model::CreateLogAnalyticsEntityRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntity>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(
            &req.create_log_analytics_entity_details,
            "create_log_analytics_entity_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/logAnalyticsEntities");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn get_log_analytics_entity(
        &self,
        req: crate::model::GetLogAnalyticsEntityRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntity>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let log_analytics_entity_id = gaxi::path_parameter::required(
            &req.log_analytics_entity_id,
            "log_analytics_entity_id",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path =
            format!("/namespaces/{namespace_name}/logAnalyticsEntities/{log_analytics_entity_id}");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_log_analytics_entities(
        &self,
        req: crate::model::ListLogAnalyticsEntitiesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let compartment_id =
            gaxi::path_parameter::not_blank(&req.compartment_id, "compartment_id")?;
        let lifecycle_state = gaxi::enums::check_optional(&req.lifecycle_state, "lifecycle_state")?;
        let is_management_agent_id_null = gaxi::enums::check_optional(
            &req.is_management_agent_id_null,
            "is_management_agent_id_null",
        )?;
        let creation_source_type =
            gaxi::enums::check_all(&req.creation_source_type, "creation_source_type")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/logAnalyticsEntities");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId")?;
        let builder = req.name.as_deref().add(builder, "name")?;
        let builder = req.name_contains.as_deref().add(builder, "nameContains")?;
        let builder = req.entity_type_name.add(builder, "entityTypeName")?;
        let builder = req
            .cloud_resource_id
            .as_deref()
            .add(builder, "cloudResourceId")?;
        let builder = lifecycle_state.add(builder, "lifecycleState")?;
        let builder = req
            .lifecycle_details_contains
            .as_deref()
            .add(builder, "lifecycleDetailsContains")?;
        let builder = is_management_agent_id_null
            .add(builder, "isManagementAgentIdNull")?;
        let builder = req.hostname.as_deref().add(builder, "hostname")?;
        let builder = req
            .hostname_contains
            .as_deref()
            .add(builder, "hostnameContains")?;
        let builder = req.source_id.as_deref().add(builder, "sourceId")?;
        let builder = creation_source_type.add(builder, "creationSourceType")?;
        let builder = req
            .creation_source_details
            .as_deref()
            .add(builder, "creationSourceDetails")?;
        let builder = req
            .is_show_associated_sources_count
            .add(builder, "isShowAssociatedSourcesCount")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_log_analytics_entity(
        &self,
        req: crate::model::UpdateLogAnalyticsEntityRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntity>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let log_analytics_entity_id = gaxi::path_parameter::required(
            &req.log_analytics_entity_id,
            "log_analytics_entity_id",
        )?;
        let body = gaxi::path_parameter::present(
            &req.update_log_analytics_entity_details,
            "update_log_analytics_entity_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path =
            format!("/namespaces/{namespace_name}/logAnalyticsEntities/{log_analytics_entity_id}");
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn delete_log_analytics_entity(
        &self,
        req: crate::model::DeleteLogAnalyticsEntityRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let log_analytics_entity_id = gaxi::path_parameter::required(
            &req.log_analytics_entity_id,
            "log_analytics_entity_id",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path =
            format!("/namespaces/{namespace_name}/logAnalyticsEntities/{log_analytics_entity_id}");
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = req.is_force_delete.add(builder, "isForceDelete")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute_no_content(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_log_analytics_entities_summary(
        &self,
        req: crate::model::GetLogAnalyticsEntitiesSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntitySummaryReport>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let compartment_id =
            gaxi::path_parameter::not_blank(&req.compartment_id, "compartment_id")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/logAnalyticsEntities/entitySummary");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn change_log_analytics_entity_compartment(
        &self,
        req: crate::model::ChangeLogAnalyticsEntityCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let log_analytics_entity_id = gaxi::path_parameter::required(
            &req.log_analytics_entity_id,
            "log_analytics_entity_id",
        )?;
        let body = gaxi::path_parameter::present(
            &req.change_log_analytics_entity_compartment_details,
            "change_log_analytics_entity_compartment_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{namespace_name}/logAnalyticsEntities/{log_analytics_entity_id}/actions/changeCompartment",
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute_no_content(builder, Some(body), options)
            .await
    }

    async fn add_entity_association(
        &self,
        req: crate::model::AddEntityAssociationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let log_analytics_entity_id = gaxi::path_parameter::required(
            &req.log_analytics_entity_id,
            "log_analytics_entity_id",
        )?;
        let body = gaxi::path_parameter::present(
            &req.add_entity_association_details,
            "add_entity_association_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{namespace_name}/logAnalyticsEntities/{log_analytics_entity_id}/actions/addEntityAssociations",
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute_no_content(builder, Some(body), options)
            .await
    }

    async fn remove_entity_associations(
        &self,
        req: crate::model::RemoveEntityAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let log_analytics_entity_id = gaxi::path_parameter::required(
            &req.log_analytics_entity_id,
            "log_analytics_entity_id",
        )?;
        let body = gaxi::path_parameter::present(
            &req.remove_entity_associations_details,
            "remove_entity_associations_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{namespace_name}/logAnalyticsEntities/{log_analytics_entity_id}/actions/removeEntityAssociations",
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute_no_content(builder, Some(body), options)
            .await
    }

    async fn list_entity_associations(
        &self,
        req: crate::model::ListEntityAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let log_analytics_entity_id = gaxi::path_parameter::required(
            &req.log_analytics_entity_id,
            "log_analytics_entity_id",
        )?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{namespace_name}/logAnalyticsEntities/{log_analytics_entity_id}/actions/listEntityAssociations",
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req
            .direct_associated_entity_type_name
            .add(builder, "directAssociatedEntityTypeName")?;
        let builder = req.association_depth.add(builder, "associationDepth")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_log_analytics_entity_topology(
        &self,
        req: crate::model::ListLogAnalyticsEntityTopologyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityTopologyCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let log_analytics_entity_id = gaxi::path_parameter::required(
            &req.log_analytics_entity_id,
            "log_analytics_entity_id",
        )?;
        let lifecycle_state = gaxi::enums::check_optional(&req.lifecycle_state, "lifecycle_state")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{namespace_name}/logAnalyticsEntities/{log_analytics_entity_id}/actions/topology",
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = lifecycle_state.add(builder, "lifecycleState")?;
        let builder = req.metadata_equals.add(builder, "metadataEquals")?;
        let builder = req.context.as_deref().add(builder, "context")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_log_analytics_entity_type(
        &self,
        req: crate::model::CreateLogAnalyticsEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(
            &req.create_log_analytics_entity_type_details,
            "create_log_analytics_entity_type_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/logAnalyticsEntityTypes");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner
            .execute_no_content(builder, Some(body), options)
            .await
    }

    async fn get_log_analytics_entity_type(
        &self,
        req: crate::model::GetLogAnalyticsEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityType>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let entity_type_name =
            gaxi::path_parameter::required(&req.entity_type_name, "entity_type_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path =
            format!("/namespaces/{namespace_name}/logAnalyticsEntityTypes/{entity_type_name}");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_log_analytics_entity_types(
        &self,
        req: crate::model::ListLogAnalyticsEntityTypesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityTypeCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let cloud_type = gaxi::enums::check_optional(&req.cloud_type, "cloud_type")?;
        let lifecycle_state = gaxi::enums::check_optional(&req.lifecycle_state, "lifecycle_state")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/logAnalyticsEntityTypes");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.name.as_deref().add(builder, "name")?;
        let builder = req.name_contains.as_deref().add(builder, "nameContains")?;
        let builder = cloud_type.add(builder, "cloudType")?;
        let builder = lifecycle_state.add(builder, "lifecycleState")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_log_analytics_entity_type(
        &self,
        req: crate::model::UpdateLogAnalyticsEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let entity_type_name =
            gaxi::path_parameter::required(&req.entity_type_name, "entity_type_name")?;
        let body = gaxi::path_parameter::present(
            &req.update_log_analytics_entity_type_details,
            "update_log_analytics_entity_type_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path =
            format!("/namespaces/{namespace_name}/logAnalyticsEntityTypes/{entity_type_name}");
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute_no_content(builder, Some(body), options)
            .await
    }

    async fn delete_log_analytics_entity_type(
        &self,
        req: crate::model::DeleteLogAnalyticsEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let entity_type_name =
            gaxi::path_parameter::required(&req.entity_type_name, "entity_type_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path =
            format!("/namespaces/{namespace_name}/logAnalyticsEntityTypes/{entity_type_name}");
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute_no_content(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_log_analytics_log_group(
        &self,
        req: crate::model::CreateLogAnalyticsLogGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLogGroup>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(
            &req.create_log_analytics_log_group_details,
            "create_log_analytics_log_group_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/logAnalyticsLogGroups");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn get_log_analytics_log_group(
        &self,
        req: crate::model::GetLogAnalyticsLogGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLogGroup>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let log_analytics_log_group_id = gaxi::path_parameter::required(
            &req.log_analytics_log_group_id,
            "log_analytics_log_group_id",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{namespace_name}/logAnalyticsLogGroups/{log_analytics_log_group_id}",
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_log_analytics_log_groups(
        &self,
        req: crate::model::ListLogAnalyticsLogGroupsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLogGroupSummaryCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let compartment_id =
            gaxi::path_parameter::not_blank(&req.compartment_id, "compartment_id")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/logAnalyticsLogGroups");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId")?;
        let builder = req.display_name.as_deref().add(builder, "displayName")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_log_analytics_log_group(
        &self,
        req: crate::model::UpdateLogAnalyticsLogGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLogGroup>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let log_analytics_log_group_id = gaxi::path_parameter::required(
            &req.log_analytics_log_group_id,
            "log_analytics_log_group_id",
        )?;
        let body = gaxi::path_parameter::present(
            &req.update_log_analytics_log_group_details,
            "update_log_analytics_log_group_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{namespace_name}/logAnalyticsLogGroups/{log_analytics_log_group_id}",
        );
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn delete_log_analytics_log_group(
        &self,
        req: crate::model::DeleteLogAnalyticsLogGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let log_analytics_log_group_id = gaxi::path_parameter::required(
            &req.log_analytics_log_group_id,
            "log_analytics_log_group_id",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{namespace_name}/logAnalyticsLogGroups/{log_analytics_log_group_id}",
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute_no_content(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn change_log_analytics_log_group_compartment(
        &self,
        req: crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let log_analytics_log_group_id = gaxi::path_parameter::required(
            &req.log_analytics_log_group_id,
            "log_analytics_log_group_id",
        )?;
        let body = gaxi::path_parameter::present(
            &req.change_log_analytics_log_group_compartment_details,
            "change_log_analytics_log_group_compartment_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!(
            "/namespaces/{namespace_name}/logAnalyticsLogGroups/{log_analytics_log_group_id}/actions/changeCompartment",
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute_no_content(builder, Some(body), options)
            .await
    }

    async fn get_log_analytics_log_groups_summary(
        &self,
        req: crate::model::GetLogAnalyticsLogGroupsSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogGroupSummaryReport>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let compartment_id =
            gaxi::path_parameter::not_blank(&req.compartment_id, "compartment_id")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/logAnalyticsLogGroupsSummary");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_log_analytics_object_collection_rule(
        &self,
        req: crate::model::CreateLogAnalyticsObjectCollectionRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRule>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(
            &req.create_log_analytics_object_collection_rule_details,
            "create_log_analytics_object_collection_rule_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/logAnalyticsObjectCollectionRules");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn get_log_analytics_object_collection_rule(
        &self,
        req: crate::model::GetLogAnalyticsObjectCollectionRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRule>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let log_analytics_object_collection_rule_id = gaxi::path_parameter::required(
            &req.log_analytics_object_collection_rule_id,
            "log_analytics_object_collection_rule_id",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{namespace_name}/logAnalyticsObjectCollectionRules/{log_analytics_object_collection_rule_id}",
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_log_analytics_object_collection_rules(
        &self,
        req: crate::model::ListLogAnalyticsObjectCollectionRulesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRuleCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let compartment_id =
            gaxi::path_parameter::not_blank(&req.compartment_id, "compartment_id")?;
        let lifecycle_state = gaxi::enums::check_optional(&req.lifecycle_state, "lifecycle_state")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/logAnalyticsObjectCollectionRules");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId")?;
        let builder = req.name.as_deref().add(builder, "name")?;
        let builder = lifecycle_state.add(builder, "lifecycleState")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_log_analytics_object_collection_rule(
        &self,
        req: crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRule>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let log_analytics_object_collection_rule_id = gaxi::path_parameter::required(
            &req.log_analytics_object_collection_rule_id,
            "log_analytics_object_collection_rule_id",
        )?;
        let body = gaxi::path_parameter::present(
            &req.update_log_analytics_object_collection_rule_details,
            "update_log_analytics_object_collection_rule_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{namespace_name}/logAnalyticsObjectCollectionRules/{log_analytics_object_collection_rule_id}",
        );
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn delete_log_analytics_object_collection_rule(
        &self,
        req: crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let log_analytics_object_collection_rule_id = gaxi::path_parameter::required(
            &req.log_analytics_object_collection_rule_id,
            "log_analytics_object_collection_rule_id",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{namespace_name}/logAnalyticsObjectCollectionRules/{log_analytics_object_collection_rule_id}",
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute_no_content(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn change_log_analytics_object_collection_rule_compartment(
        &self,
        req: crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let log_analytics_object_collection_rule_id = gaxi::path_parameter::required(
            &req.log_analytics_object_collection_rule_id,
            "log_analytics_object_collection_rule_id",
        )?;
        let body = gaxi::path_parameter::present(
            &req.change_log_analytics_object_collection_rule_compartment_details,
            "change_log_analytics_object_collection_rule_compartment_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!(
            "/namespaces/{namespace_name}/logAnalyticsObjectCollectionRules/{log_analytics_object_collection_rule_id}/actions/changeCompartment",
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute_no_content(builder, Some(body), options)
            .await
    }

    async fn create_ingest_time_rule(
        &self,
        req: crate::model::CreateIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::IngestTimeRule>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(
            &req.create_ingest_time_rule_details,
            "create_ingest_time_rule_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/ingestTimeRules");
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn get_ingest_time_rule(
        &self,
        req: crate::model::GetIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::IngestTimeRule>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let ingest_time_rule_id =
            gaxi::path_parameter::required(&req.ingest_time_rule_id, "ingest_time_rule_id")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/ingestTimeRules/{ingest_time_rule_id}");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_ingest_time_rules(
        &self,
        req: crate::model::ListIngestTimeRulesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::IngestTimeRuleSummaryCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let compartment_id =
            gaxi::path_parameter::not_blank(&req.compartment_id, "compartment_id")?;
        let lifecycle_state = gaxi::enums::check_optional(&req.lifecycle_state, "lifecycle_state")?;
        let condition_kind = gaxi::enums::check_optional(&req.condition_kind, "condition_kind")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/ingestTimeRules");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId")?;
        let builder = req.display_name.as_deref().add(builder, "displayName")?;
        let builder = lifecycle_state.add(builder, "lifecycleState")?;
        let builder = condition_kind.add(builder, "conditionKind")?;
        let builder = req.field_name.as_deref().add(builder, "fieldName")?;
        let builder = req.field_value.as_deref().add(builder, "fieldValue")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_ingest_time_rule(
        &self,
        req: crate::model::UpdateIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::IngestTimeRule>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let ingest_time_rule_id =
            gaxi::path_parameter::required(&req.ingest_time_rule_id, "ingest_time_rule_id")?;
        let body = gaxi::path_parameter::present(
            &req.update_ingest_time_rule_details,
            "update_ingest_time_rule_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/ingestTimeRules/{ingest_time_rule_id}");
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn delete_ingest_time_rule(
        &self,
        req: crate::model::DeleteIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let ingest_time_rule_id =
            gaxi::path_parameter::required(&req.ingest_time_rule_id, "ingest_time_rule_id")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/ingestTimeRules/{ingest_time_rule_id}");
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute_no_content(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn enable_ingest_time_rule(
        &self,
        req: crate::model::EnableIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let ingest_time_rule_id =
            gaxi::path_parameter::required(&req.ingest_time_rule_id, "ingest_time_rule_id")?;
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!(
            "/namespaces/{namespace_name}/ingestTimeRules/{ingest_time_rule_id}/actions/enableIngestTimeRule",
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute_no_content(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn disable_ingest_time_rule(
        &self,
        req: crate::model::DisableIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let ingest_time_rule_id =
            gaxi::path_parameter::required(&req.ingest_time_rule_id, "ingest_time_rule_id")?;
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!(
            "/namespaces/{namespace_name}/ingestTimeRules/{ingest_time_rule_id}/actions/disableIngestTimeRule",
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute_no_content(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn change_ingest_time_rule_compartment(
        &self,
        req: crate::model::ChangeIngestTimeRuleCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let ingest_time_rule_id =
            gaxi::path_parameter::required(&req.ingest_time_rule_id, "ingest_time_rule_id")?;
        let body = gaxi::path_parameter::present(
            &req.change_ingest_time_rule_compartment_details,
            "change_ingest_time_rule_compartment_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!(
            "/namespaces/{namespace_name}/ingestTimeRules/{ingest_time_rule_id}/actions/changeCompartment",
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute_no_content(builder, Some(body), options)
            .await
    }

    async fn list_rules(
        &self,
        req: crate::model::ListRulesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RuleSummaryCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let compartment_id =
            gaxi::path_parameter::not_blank(&req.compartment_id, "compartment_id")?;
        let kind = gaxi::enums::check_optional(&req.kind, "kind")?;
        let lifecycle_state = gaxi::enums::check_optional(&req.lifecycle_state, "lifecycle_state")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/rules");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId")?;
        let builder = req.display_name.as_deref().add(builder, "displayName")?;
        let builder = kind.add(builder, "kind")?;
        let builder = req.target_service.as_deref().add(builder, "targetService")?;
        let builder = lifecycle_state.add(builder, "lifecycleState")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_rules_summary(
        &self,
        req: crate::model::GetRulesSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RuleSummaryReport>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let compartment_id =
            gaxi::path_parameter::not_blank(&req.compartment_id, "compartment_id")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/rulesSummary");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_fields(
        &self,
        req: crate::model::ListFieldsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsFieldCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let parser_type = gaxi::enums::check_optional(&req.parser_type, "parser_type")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/fields");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.is_match_all.add(builder, "isMatchAll")?;
        let builder = req.source_ids.as_deref().add(builder, "sourceIds")?;
        let builder = req.source_names.as_deref().add(builder, "sourceNames")?;
        let builder = parser_type.add(builder, "parserType")?;
        let builder = req.parser_ids.as_deref().add(builder, "parserIds")?;
        let builder = req.parser_names.as_deref().add(builder, "parserNames")?;
        let builder = req.is_include_parser.add(builder, "isIncludeParser")?;
        let builder = req.filter.as_deref().add(builder, "filter")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_field(
        &self,
        req: crate::model::GetFieldRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsField>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let field_name = gaxi::path_parameter::required(&req.field_name, "field_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/fields/{field_name}");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn upsert_field(
        &self,
        req: crate::model::UpsertFieldRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsField>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(
            &req.upsert_log_analytics_field_details,
            "upsert_log_analytics_field_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/fields/actions/upsert");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn delete_field(
        &self,
        req: crate::model::DeleteFieldRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let field_name = gaxi::path_parameter::required(&req.field_name, "field_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/fields/{field_name}");
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute_no_content(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_fields_summary(
        &self,
        req: crate::model::GetFieldsSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::FieldSummaryReport>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/fieldSummary");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.is_show_detail.add(builder, "isShowDetail")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn extract_structured_log_field_paths(
        &self,
        req: crate::model::ExtractStructuredLogFieldPathsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ExtractLogFieldResults>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let parser_type = gaxi::enums::check_optional(&req.parser_type, "parser_type")?;
        let body =
            gaxi::path_parameter::present(&req.log_analytics_parser, "log_analytics_parser")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/parsers/actions/extractLogFieldPaths");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = parser_type.add(builder, "parserType")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn extract_structured_log_header_paths(
        &self,
        req: crate::model::ExtractStructuredLogHeaderPathsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ExtractLogHeaderResults>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let parser_type = gaxi::enums::check_optional(&req.parser_type, "parser_type")?;
        let body =
            gaxi::path_parameter::present(&req.log_analytics_parser, "log_analytics_parser")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/parsers/actions/extractLogHeaderPaths");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = parser_type.add(builder, "parserType")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn test_parser(
        &self,
        req: crate::model::TestParserRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ParserTestResult>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let scope = gaxi::enums::check_optional(&req.scope, "scope")?;
        let body = gaxi::path_parameter::present(
            &req.test_parser_payload_details,
            "test_parser_payload_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/parsers/actions/test");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = scope.add(builder, "scope")?;
        let builder = req
            .req_origin_module
            .as_deref()
            .add(builder, "reqOriginModule")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn list_labels(
        &self,
        req: crate::model::ListLabelsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabelCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let is_system = gaxi::enums::check_optional(&req.is_system, "is_system")?;
        let label_priority = gaxi::enums::check_optional(&req.label_priority, "label_priority")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/labels");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.label_name.as_deref().add(builder, "labelName")?;
        let builder = req
            .label_display_text
            .as_deref()
            .add(builder, "labelDisplayText")?;
        let builder = is_system.add(builder, "isSystem")?;
        let builder = label_priority.add(builder, "labelPriority")?;
        let builder = req.is_count_pop.add(builder, "isCountPop")?;
        let builder = req.is_alias_pop.add(builder, "isAliasPop")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req
            .label_source_name
            .as_deref()
            .add(builder, "labelSourceName")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_label(
        &self,
        req: crate::model::GetLabelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabel>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let label_name = gaxi::path_parameter::required(&req.label_name, "label_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/labels/{label_name}");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn upsert_label(
        &self,
        req: crate::model::UpsertLabelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabel>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(
            &req.log_analytics_label_definition,
            "log_analytics_label_definition",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/labels/actions/upsert");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn delete_label(
        &self,
        req: crate::model::DeleteLabelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let label_name = gaxi::path_parameter::required(&req.label_name, "label_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/labels/{label_name}");
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute_no_content(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_label_summary(
        &self,
        req: crate::model::GetLabelSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LabelSummaryReport>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/labelSummary");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_label_priorities(
        &self,
        req: crate::model::ListLabelPrioritiesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LabelPriorityCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/labelPriorities");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_label_source_details(
        &self,
        req: crate::model::ListLabelSourceDetailsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LabelSourceCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/labelSourceDetails");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.label_name.as_deref().add(builder, "labelName")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn batch_get_basic_info(
        &self,
        req: crate::model::BatchGetBasicInfoRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabelBasicCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let is_include_deleted = *
            gaxi::path_parameter::present(&req.is_include_deleted, "is_include_deleted")?;
        let basic_label_sort_by =
            gaxi::enums::check_optional(&req.basic_label_sort_by, "basic_label_sort_by")?;
        let basic_label_sort_sequence = gaxi::enums::check_optional(
            &req.basic_label_sort_sequence,
            "basic_label_sort_sequence",
        )?;
        let body = gaxi::path_parameter::present(&req.label_names, "label_names")?;
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!("/namespaces/{namespace_name}/labels/actions/basicInfo");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = is_include_deleted.add(builder, "isIncludeDeleted")?;
        let builder = basic_label_sort_by.add(builder, "basicLabelSortBy")?;
        let builder = basic_label_sort_sequence
            .add(builder, "basicLabelSortSequence")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn register_lookup(
        &self,
        req: crate::model::RegisterLookupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLookup>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let r#type = gaxi::path_parameter::present(&req.r#type, "type")?;
        let r#type = gaxi::enums::check(r#type, "type")?;
        let body = gaxi::path_parameter::present(&req.body, "body")?.clone();
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/lookups/actions/register");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = r#type.add(builder, "type")?;
        let builder = req.name.as_deref().add(builder, "name")?;
        let builder = req.description.as_deref().add(builder, "description")?;
        let builder = req.char_encoding.as_deref().add(builder, "charEncoding")?;
        let builder = req.is_hidden.add(builder, "isHidden")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        let builder = gaxi::header_parameter::add(builder, "expect", req.expect.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            "content-type",
            req.content_type.as_deref(),
            || DEFAULT_PAYLOAD_CONTENT_TYPE.to_string(),
        )?;
        self.inner
            .execute_with_payload(builder, body, options)
            .await
    }

    async fn update_lookup(
        &self,
        req: crate::model::UpdateLookupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLookup>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let lookup_name = gaxi::path_parameter::required(&req.lookup_name, "lookup_name")?;
        let body = gaxi::path_parameter::present(
            &req.update_lookup_metadata_details,
            "update_lookup_metadata_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/lookups/{lookup_name}");
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn update_lookup_data(
        &self,
        req: crate::model::UpdateLookupDataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let lookup_name = gaxi::path_parameter::required(&req.lookup_name, "lookup_name")?;
        let body = gaxi::path_parameter::present(&req.body, "body")?.clone();
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/lookups/{lookup_name}/actions/updateData");
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder = req.is_force.add(builder, "isForce")?;
        let builder = req.char_encoding.as_deref().add(builder, "charEncoding")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "expect", req.expect.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            "content-type",
            req.content_type.as_deref(),
            || DEFAULT_PAYLOAD_CONTENT_TYPE.to_string(),
        )?;
        self.inner
            .execute_with_payload_no_content(builder, body, options)
            .await
    }

    async fn append_lookup_data(
        &self,
        req: crate::model::AppendLookupDataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let lookup_name = gaxi::path_parameter::required(&req.lookup_name, "lookup_name")?;
        let body = gaxi::path_parameter::present(&req.body, "body")?.clone();
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/lookups/{lookup_name}/actions/appendData");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = req.is_force.add(builder, "isForce")?;
        let builder = req.char_encoding.as_deref().add(builder, "charEncoding")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "expect", req.expect.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            "content-type",
            req.content_type.as_deref(),
            || DEFAULT_PAYLOAD_CONTENT_TYPE.to_string(),
        )?;
        self.inner
            .execute_with_payload_no_content(builder, body, options)
            .await
    }

    async fn delete_lookup(
        &self,
        req: crate::model::DeleteLookupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let lookup_name = gaxi::path_parameter::required(&req.lookup_name, "lookup_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/lookups/{lookup_name}");
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = req.is_force.add(builder, "isForce")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute_no_content(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_lookup(
        &self,
        req: crate::model::GetLookupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLookup>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let lookup_name = gaxi::path_parameter::required(&req.lookup_name, "lookup_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/lookups/{lookup_name}");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_lookups(
        &self,
        req: crate::model::ListLookupsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLookupCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let r#type = gaxi::path_parameter::present(&req.r#type, "type")?;
        let r#type = gaxi::enums::check(r#type, "type")?;
        let is_system = gaxi::enums::check_optional(&req.is_system, "is_system")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let status = gaxi::enums::check_optional(&req.status, "status")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/lookups");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = r#type.add(builder, "type")?;
        let builder = req
            .lookup_display_text
            .as_deref()
            .add(builder, "lookupDisplayText")?;
        let builder = is_system.add(builder, "isSystem")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.categories.as_deref().add(builder, "categories")?;
        let builder = status.add(builder, "status")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = req.is_hide_special.add(builder, "isHideSpecial")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn export_lookup(
        &self,
        req: crate::model::ExportLookupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<bytes::Bytes>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let lookup_name = gaxi::path_parameter::required(&req.lookup_name, "lookup_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/lookups/{lookup_name}/actions/export");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .download(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_lookup_summary(
        &self,
        req: crate::model::GetLookupSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LookupSummaryReport>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/lookupSummary");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_meta_source_types(
        &self,
        req: crate::model::ListMetaSourceTypesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsMetaSourceTypeCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/sourceMetaTypes");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_parser_functions(
        &self,
        req: crate::model::ListParserFunctionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsParserFunctionCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/parsers/parserFunctions");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.parser_name.as_deref().add(builder, "parserName")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_parser_meta_plugins(
        &self,
        req: crate::model::ListParserMetaPluginsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsParserMetaPluginCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/parsers/parserMetaPlugins");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_supported_char_encodings(
        &self,
        req: crate::model::ListSupportedCharEncodingsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CharEncodingCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/supportedCharEncodings");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_supported_timezones(
        &self,
        req: crate::model::ListSupportedTimezonesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TimezoneCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/supportedTimezones");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_source_meta_functions(
        &self,
        req: crate::model::ListSourceMetaFunctionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsSourceMetaFunctionCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/sources/sourceMetaFunctions");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_source_patterns(
        &self,
        req: crate::model::ListSourcePatternsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsSourcePatternCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let source_name = gaxi::path_parameter::required(&req.source_name, "source_name")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/sources/{source_name}/patterns");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.is_include.add(builder, "isInclude")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_source_label_operators(
        &self,
        req: crate::model::ListSourceLabelOperatorsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabelOperatorCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/sources/labelOperators");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_source_extended_field_definitions(
        &self,
        req: crate::model::ListSourceExtendedFieldDefinitionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<crate::model::LogAnalyticsSourceExtendedFieldDefinitionCollection>,
    > {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let source_name = gaxi::path_parameter::required(&req.source_name, "source_name")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path =
            format!("/namespaces/{namespace_name}/sources/{source_name}/extendedFieldDefinitions");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_effective_properties(
        &self,
        req: crate::model::ListEffectivePropertiesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EffectivePropertyCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/effectiveProperties");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.agent_id.as_deref().add(builder, "agentId")?;
        let builder = req.source_name.as_deref().add(builder, "sourceName")?;
        let builder = req.is_include_patterns.add(builder, "isIncludePatterns")?;
        let builder = req.entity_id.as_deref().add(builder, "entityId")?;
        let builder = req.pattern_id.add(builder, "patternId")?;
        let builder = req.pattern_id_long.add(builder, "patternIdLong")?;
        let builder = req.name.as_deref().add(builder, "name")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_properties_metadata(
        &self,
        req: crate::model::ListPropertiesMetadataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::PropertyMetadataSummaryCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/propertiesMetadata");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.name.as_deref().add(builder, "name")?;
        let builder = req.display_text.as_deref().add(builder, "displayText")?;
        let builder = req.level.as_deref().add(builder, "level")?;
        let builder = req.constraints.as_deref().add(builder, "constraints")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_log_sets(
        &self,
        req: crate::model::ListLogSetsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogSetCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/storage/logSets");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req
            .log_set_name_contains
            .as_deref()
            .add(builder, "logSetNameContains")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_log_sets_count(
        &self,
        req: crate::model::GetLogSetsCountRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogSetsCount>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/storage/logSetsCount");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete_parser(
        &self,
        req: crate::model::DeleteParserRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let parser_name = gaxi::path_parameter::required(&req.parser_name, "parser_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/parsers/{parser_name}");
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute_no_content(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_parser(
        &self,
        req: crate::model::GetParserRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsParser>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let parser_name = gaxi::path_parameter::required(&req.parser_name, "parser_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/parsers/{parser_name}");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_parsers(
        &self,
        req: crate::model::ListParsersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsParserCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let source_type = gaxi::enums::check_optional(&req.source_type, "source_type")?;
        let parser_type = gaxi::enums::check_optional(&req.parser_type, "parser_type")?;
        let is_system = gaxi::enums::check_optional(&req.is_system, "is_system")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/parsers");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.is_match_all.add(builder, "isMatchAll")?;
        let builder = source_type.add(builder, "sourceType")?;
        let builder = req.parser_name.as_deref().add(builder, "parserName")?;
        let builder = req
            .parser_display_text
            .as_deref()
            .add(builder, "parserDisplayText")?;
        let builder = parser_type.add(builder, "parserType")?;
        let builder = req.categories.as_deref().add(builder, "categories")?;
        let builder = is_system.add(builder, "isSystem")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn upsert_parser(
        &self,
        req: crate::model::UpsertParserRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsParser>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(
            &req.upsert_log_analytics_parser_details,
            "upsert_log_analytics_parser_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/parsers/actions/upsert");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn get_parser_summary(
        &self,
        req: crate::model::GetParserSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ParserSummaryReport>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/parsersSummary");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_preferences(
        &self,
        req: crate::model::ListPreferencesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsPreferenceCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/preferences");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_preferences(
        &self,
        req: crate::model::UpdatePreferencesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(
            &req.log_analytics_preference_details,
            "log_analytics_preference_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/preferences/actions/updatePreferences");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner
            .execute_no_content(builder, Some(body), options)
            .await
    }

    async fn remove_preferences(
        &self,
        req: crate::model::RemovePreferencesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(
            &req.log_analytics_preference_details,
            "log_analytics_preference_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/preferences/actions/removePreferences");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner
            .execute_no_content(builder, Some(body), options)
            .await
    }

    async fn query(
        &self,
        req: crate::model::QueryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::QueryAggregation>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let output_mode = gaxi::enums::check_optional(&req.output_mode, "output_mode")?;
        let body = gaxi::path_parameter::present(&req.query_details, "query_details")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/search/actions/query");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = req
            .should_include_total_count
            .add(builder, "shouldIncludeTotalCount")?;
        let builder = req
            .should_include_columns
            .add(builder, "shouldIncludeColumns")?;
        let builder = req
            .should_include_fields
            .add(builder, "shouldIncludeFields")?;
        let builder = output_mode.add(builder, "outputMode")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn get_query_result(
        &self,
        req: crate::model::GetQueryResultRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::QueryAggregation>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let work_request_id =
            gaxi::path_parameter::not_blank(&req.work_request_id, "work_request_id")?;
        let output_mode = gaxi::enums::check_optional(&req.output_mode, "output_mode")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/search/actions/query");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = work_request_id.add(builder, "workRequestId")?;
        let builder = req
            .should_include_columns
            .add(builder, "shouldIncludeColumns")?;
        let builder = req
            .should_include_fields
            .add(builder, "shouldIncludeFields")?;
        let builder = output_mode.add(builder, "outputMode")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn export_query_result(
        &self,
        req: crate::model::ExportQueryResultRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<bytes::Bytes>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(&req.export_details, "export_details")?;
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!("/namespaces/{namespace_name}/search/actions/export");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner.download(builder, Some(body), options).await
    }

    async fn filter(
        &self,
        req: crate::model::FilterRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::FilterOutput>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(&req.filter_details, "filter_details")?;
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!("/namespaces/{namespace_name}/search/actions/filter");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn parse_query(
        &self,
        req: crate::model::ParseQueryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ParseQueryOutput>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(&req.parse_query_details, "parse_query_details")?;
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!("/namespaces/{namespace_name}/search/actions/parse");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn suggest(
        &self,
        req: crate::model::SuggestRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SuggestOutput>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(&req.suggest_details, "suggest_details")?;
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!("/namespaces/{namespace_name}/search/actions/suggest");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn get_query_work_request(
        &self,
        req: crate::model::GetQueryWorkRequestRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::QueryWorkRequest>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let work_request_id =
            gaxi::path_parameter::required(&req.work_request_id, "work_request_id")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/queryWorkRequests/{work_request_id}");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete_query_work_request(
        &self,
        req: crate::model::DeleteQueryWorkRequestRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let work_request_id =
            gaxi::path_parameter::required(&req.work_request_id, "work_request_id")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/queryWorkRequests/{work_request_id}");
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute_no_content(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_query_work_requests(
        &self,
        req: crate::model::ListQueryWorkRequestsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::QueryWorkRequestCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let compartment_id =
            gaxi::path_parameter::not_blank(&req.compartment_id, "compartment_id")?;
        let mode = gaxi::enums::check_optional(&req.mode, "mode")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/queryWorkRequests");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId")?;
        let builder = mode.add(builder, "mode")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_scheduled_task(
        &self,
        req: crate::model::CreateScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(
            &req.create_scheduled_task_details,
            "create_scheduled_task_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/scheduledTasks");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn get_scheduled_task(
        &self,
        req: crate::model::GetScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let scheduled_task_id =
            gaxi::path_parameter::required(&req.scheduled_task_id, "scheduled_task_id")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/scheduledTasks/{scheduled_task_id}");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_scheduled_tasks(
        &self,
        req: crate::model::ListScheduledTasksRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ScheduledTaskCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let task_type = gaxi::path_parameter::present(&req.task_type, "task_type")?;
        let task_type = gaxi::enums::check(task_type, "task_type")?;
        let compartment_id =
            gaxi::path_parameter::not_blank(&req.compartment_id, "compartment_id")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/scheduledTasks");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = task_type.add(builder, "taskType")?;
        let builder = compartment_id.add(builder, "compartmentId")?;
        let builder = req.display_name.as_deref().add(builder, "displayName")?;
        let builder = req.target_service.as_deref().add(builder, "targetService")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_scheduled_task(
        &self,
        req: crate::model::UpdateScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let scheduled_task_id =
            gaxi::path_parameter::required(&req.scheduled_task_id, "scheduled_task_id")?;
        let body = gaxi::path_parameter::present(
            &req.update_scheduled_task_details,
            "update_scheduled_task_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/scheduledTasks/{scheduled_task_id}");
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn delete_scheduled_task(
        &self,
        req: crate::model::DeleteScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let scheduled_task_id =
            gaxi::path_parameter::required(&req.scheduled_task_id, "scheduled_task_id")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/scheduledTasks/{scheduled_task_id}");
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute_no_content(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn pause_scheduled_task(
        &self,
        req: crate::model::PauseScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let scheduled_task_id =
            gaxi::path_parameter::required(&req.scheduled_task_id, "scheduled_task_id")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{namespace_name}/scheduledTasks/{scheduled_task_id}/actions/pause",
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn resume_scheduled_task(
        &self,
        req: crate::model::ResumeScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let scheduled_task_id =
            gaxi::path_parameter::required(&req.scheduled_task_id, "scheduled_task_id")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{namespace_name}/scheduledTasks/{scheduled_task_id}/actions/resume",
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn change_scheduled_task_compartment(
        &self,
        req: crate::model::ChangeScheduledTaskCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let scheduled_task_id =
            gaxi::path_parameter::required(&req.scheduled_task_id, "scheduled_task_id")?;
        let body = gaxi::path_parameter::present(
            &req.change_scheduled_task_compartment_details,
            "change_scheduled_task_compartment_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!(
            "/namespaces/{namespace_name}/scheduledTasks/{scheduled_task_id}/actions/changeCompartment",
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute_no_content(builder, Some(body), options)
            .await
    }

    async fn delete_source(
        &self,
        req: crate::model::DeleteSourceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let source_name = gaxi::path_parameter::required(&req.source_name, "source_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/sources/{source_name}");
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute_no_content(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_source(
        &self,
        req: crate::model::GetSourceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsSource>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let source_name = gaxi::path_parameter::required(&req.source_name, "source_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/sources/{source_name}");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_sources(
        &self,
        req: crate::model::ListSourcesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsSourceCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let is_system = gaxi::enums::check_optional(&req.is_system, "is_system")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/sources");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.entity_type.as_deref().add(builder, "entityType")?;
        let builder = req
            .source_display_text
            .as_deref()
            .add(builder, "sourceDisplayText")?;
        let builder = is_system.add(builder, "isSystem")?;
        let builder = req
            .is_auto_association_enabled
            .add(builder, "isAutoAssociationEnabled")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.name.as_deref().add(builder, "name")?;
        let builder = req.categories.as_deref().add(builder, "categories")?;
        let builder = req.is_simplified.add(builder, "isSimplified")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn upsert_source(
        &self,
        req: crate::model::UpsertSourceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsSource>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(
            &req.upsert_log_analytics_source_details,
            "upsert_log_analytics_source_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/sources/actions/upsert");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = req
            .create_like_source_id
            .add(builder, "createLikeSourceId")?;
        let builder = req.is_incremental.add(builder, "isIncremental")?;
        let builder = req.is_ignore_warning.add(builder, "isIgnoreWarning")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn validate_source(
        &self,
        req: crate::model::ValidateSourceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SourceValidateResults>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(
            &req.upsert_log_analytics_source_details,
            "upsert_log_analytics_source_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/sources/actions/validate");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn validate_source_extended_field_details(
        &self,
        req: crate::model::ValidateSourceExtendedFieldDetailsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<crate::model::LogAnalyticsSourceExtendedFieldDefinitionValidation>,
    > {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body =
            gaxi::path_parameter::present(&req.log_analytics_source, "log_analytics_source")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/sources/actions/validateExtendedFields");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn enable_auto_association(
        &self,
        req: crate::model::EnableAutoAssociationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EnableAutoAssociationResult>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let source_name = gaxi::path_parameter::required(&req.source_name, "source_name")?;
        let body = gaxi::path_parameter::present(
            &req.enable_auto_association_details,
            "enable_auto_association_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{namespace_name}/sources/{source_name}/actions/enableAutoAssociation",
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn disable_auto_association(
        &self,
        req: crate::model::DisableAutoAssociationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DisableAutoAssociationResult>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let source_name = gaxi::path_parameter::required(&req.source_name, "source_name")?;
        let body = gaxi::path_parameter::present(
            &req.disable_auto_association_details,
            "disable_auto_association_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{namespace_name}/sources/{source_name}/actions/disableAutoAssociation",
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn list_auto_associations(
        &self,
        req: crate::model::ListAutoAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AutoAssociationCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let source_name = gaxi::path_parameter::required(&req.source_name, "source_name")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/sources/{source_name}/autoAssociations");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn suppress_warning(
        &self,
        req: crate::model::SuppressWarningRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let compartment_id =
            gaxi::path_parameter::not_blank(&req.compartment_id, "compartment_id")?;
        let body = gaxi::path_parameter::present(
            &req.warning_reference_details,
            "warning_reference_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/warnings/actions/suppress");
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder = compartment_id.add(builder, "compartmentId")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute_no_content(builder, Some(body), options)
            .await
    }

    async fn unsuppress_warning(
        &self,
        req: crate::model::UnsuppressWarningRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let compartment_id =
            gaxi::path_parameter::not_blank(&req.compartment_id, "compartment_id")?;
        let body = gaxi::path_parameter::present(
            &req.warning_reference_details,
            "warning_reference_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/warnings/actions/unsuppress");
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder = compartment_id.add(builder, "compartmentId")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute_no_content(builder, Some(body), options)
            .await
    }

    async fn list_warnings(
        &self,
        req: crate::model::ListWarningsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsWarningCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let compartment_id =
            gaxi::path_parameter::not_blank(&req.compartment_id, "compartment_id")?;
        let warning_state = gaxi::enums::check_optional(&req.warning_state, "warning_state")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/warnings");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId")?;
        let builder = warning_state.add(builder, "warningState")?;
        let builder = req.source_name.as_deref().add(builder, "sourceName")?;
        let builder = req.source_pattern.as_deref().add(builder, "sourcePattern")?;
        let builder = req
            .warning_message
            .as_deref()
            .add(builder, "warningMessage")?;
        let builder = req.entity_name.as_deref().add(builder, "entityName")?;
        let builder = req.entity_type.as_deref().add(builder, "entityType")?;
        let builder = req.warning_type.as_deref().add(builder, "warningType")?;
        let builder = req.is_no_source.add(builder, "isNoSource")?;
        let builder = req.start_time.as_deref().add(builder, "startTime")?;
        let builder = req.end_time.as_deref().add(builder, "endTime")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_storage(
        &self,
        req: crate::model::GetStorageRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Storage>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/storage");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_storage(
        &self,
        req: crate::model::UpdateStorageRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Storage>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body =
            gaxi::path_parameter::present(&req.update_storage_details, "update_storage_details")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/storage");
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn get_storage_usage(
        &self,
        req: crate::model::GetStorageUsageRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::StorageUsage>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/storage/usage");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn estimate_purge_data_size(
        &self,
        req: crate::model::EstimatePurgeDataSizeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EstimatePurgeDataSizeResult>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(
            &req.estimate_purge_data_size_details,
            "estimate_purge_data_size_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/storage/actions/estimatePurgeDataSize");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn estimate_recall_data_size(
        &self,
        req: crate::model::EstimateRecallDataSizeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EstimateRecallDataSizeResult>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(
            &req.estimate_recall_data_size_details,
            "estimate_recall_data_size_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/storage/actions/estimateRecallDataSize");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn estimate_release_data_size(
        &self,
        req: crate::model::EstimateReleaseDataSizeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EstimateReleaseDataSizeResult>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(
            &req.estimate_release_data_size_details,
            "estimate_release_data_size_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/storage/actions/estimateReleaseDataSize");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner.execute(builder, Some(body), options).await
    }

    async fn purge_storage_data(
        &self,
        req: crate::model::PurgeStorageDataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(
            &req.purge_storage_data_details,
            "purge_storage_data_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/storage/actions/purgeData");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner
            .execute_no_content(builder, Some(body), options)
            .await
    }

    async fn recall_archived_data(
        &self,
        req: crate::model::RecallArchivedDataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(
            &req.recall_archived_data_details,
            "recall_archived_data_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/storage/actions/recallArchivedData");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner
            .execute_no_content(builder, Some(body), options)
            .await
    }

    async fn release_recalled_data(
        &self,
        req: crate::model::ReleaseRecalledDataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let body = gaxi::path_parameter::present(
            &req.release_recalled_data_details,
            "release_recalled_data_details",
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/storage/actions/releaseRecalledData");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner
            .execute_no_content(builder, Some(body), options)
            .await
    }

    async fn get_storage_work_request(
        &self,
        req: crate::model::GetStorageWorkRequestRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::StorageWorkRequest>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let work_request_id =
            gaxi::path_parameter::required(&req.work_request_id, "work_request_id")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/storageWorkRequests/{work_request_id}");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_storage_work_requests(
        &self,
        req: crate::model::ListStorageWorkRequestsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::StorageWorkRequestCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let compartment_id =
            gaxi::path_parameter::not_blank(&req.compartment_id, "compartment_id")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let operation_type = gaxi::enums::check_optional(&req.operation_type, "operation_type")?;
        let status = gaxi::enums::check_optional(&req.status, "status")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/storageWorkRequests");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = operation_type.add(builder, "operationType")?;
        let builder = status.add(builder, "status")?;
        let builder = req
            .time_started_greater_than_or_equal
            .add(builder, "timeStartedGreaterThanOrEqual")?;
        let builder = req
            .time_finished_less_than_or_equal
            .add(builder, "timeFinishedLessThanOrEqual")?;
        let builder = req.policy_name.as_deref().add(builder, "policyName")?;
        let builder = req.policy_id.as_deref().add(builder, "policyId")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_storage_work_request_errors(
        &self,
        req: crate::model::ListStorageWorkRequestErrorsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::WorkRequestErrorCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let work_request_id =
            gaxi::path_parameter::required(&req.work_request_id, "work_request_id")?;
        let compartment_id =
            gaxi::path_parameter::not_blank(&req.compartment_id, "compartment_id")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path =
            format!("/namespaces/{namespace_name}/storageWorkRequests/{work_request_id}/errors");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_recall_count(
        &self,
        req: crate::model::GetRecallCountRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RecallCount>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/storage/recallCount");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_recalled_data_size(
        &self,
        req: crate::model::GetRecalledDataSizeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RecalledDataSize>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/storage/recalledDataSize");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.time_data_started.add(builder, "timeDataStarted")?;
        let builder = req.time_data_ended.add(builder, "timeDataEnded")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_recalled_data(
        &self,
        req: crate::model::ListRecalledDataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RecalledDataCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/storage/recalledData");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req
            .time_data_started_greater_than_or_equal
            .add(builder, "timeDataStartedGreaterThanOrEqual")?;
        let builder = req
            .time_data_ended_less_than
            .add(builder, "timeDataEndedLessThan")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_overlapping_recalls(
        &self,
        req: crate::model::ListOverlappingRecallsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::OverlappingRecallCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/storage/overlappingRecalls");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.time_data_started.add(builder, "timeDataStarted")?;
        let builder = req.time_data_ended.add(builder, "timeDataEnded")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn set_unprocessed_data_bucket(
        &self,
        req: crate::model::SetUnprocessedDataBucketRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UnprocessedDataBucket>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let bucket_name = gaxi::path_parameter::not_blank(&req.bucket_name, "bucket_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/storage/actions/setUnprocessedDataBucket");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = bucket_name.add(builder, "bucketName")?;
        let builder = req.is_enabled.add(builder, "isEnabled")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_unprocessed_data_bucket(
        &self,
        req: crate::model::GetUnprocessedDataBucketRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UnprocessedDataBucket>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/storage/unprocessedDataBucket");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn enable_archiving(
        &self,
        req: crate::model::EnableArchivingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/storage/actions/enableArchiving");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute_no_content(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn disable_archiving(
        &self,
        req: crate::model::DisableArchivingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/storage/actions/disableArchiving");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute_no_content(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn upload_log_file(
        &self,
        req: crate::model::UploadLogFileRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Upload>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let upload_name = gaxi::path_parameter::not_blank(&req.upload_name, "upload_name")?;
        let log_source_name =
            gaxi::path_parameter::not_blank(&req.log_source_name, "log_source_name")?;
        let filename = gaxi::path_parameter::not_blank(&req.filename, "filename")?;
        let opc_meta_loggrpid =
            gaxi::path_parameter::not_blank(&req.opc_meta_loggrpid, "opc_meta_loggrpid")?;
        let body = gaxi::path_parameter::present(&req.body, "body")?.clone();
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/actions/uploadLogFile");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = upload_name.add(builder, "uploadName")?;
        let builder = log_source_name.add(builder, "logSourceName")?;
        let builder = filename.add(builder, "filename")?;
        let builder = req.entity_id.as_deref().add(builder, "entityId")?;
        let builder = req.timezone.as_deref().add(builder, "timezone")?;
        let builder = req.char_encoding.as_deref().add(builder, "charEncoding")?;
        let builder = req.date_format.as_deref().add(builder, "dateFormat")?;
        let builder = req.date_year.as_deref().add(builder, "dateYear")?;
        let builder = req.invalidate_cache.add(builder, "invalidateCache")?;
        let builder = req.log_set.as_deref().add(builder, "logSet")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-meta-loggrpid", Some(opc_meta_loggrpid))?;
        let builder =
            gaxi::header_parameter::add(builder, "content-md5", req.content_md5.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "expect", req.expect.as_deref())?;
        let builder = gaxi::header_parameter::add(
            builder,
            "opc-meta-properties",
            req.opc_meta_properties.as_deref(),
        )?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            "content-type",
            req.content_type.as_deref(),
            || DEFAULT_PAYLOAD_CONTENT_TYPE.to_string(),
        )?;
        self.inner
            .execute_with_payload(builder, body, options)
            .await
    }

    async fn upload_log_events_file(
        &self,
        req: crate::model::UploadLogEventsFileRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let log_group_id = gaxi::path_parameter::not_blank(&req.log_group_id, "log_group_id")?;
        let payload_type = gaxi::enums::check_optional(&req.payload_type, "payload_type")?;
        let body = gaxi::path_parameter::present(&req.body, "body")?.clone();
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/actions/uploadLogEventsFile");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = log_group_id.add(builder, "logGroupId")?;
        let builder = req.log_set.as_deref().add(builder, "logSet")?;
        let builder = payload_type.add(builder, "payloadType")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        let builder = gaxi::header_parameter::add(
            builder,
            "opc-meta-properties",
            req.opc_meta_properties.as_deref(),
        )?;
        let builder = gaxi::header_parameter::add(builder, "expect", req.expect.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            "content-type",
            req.content_type.as_deref(),
            || DEFAULT_PAYLOAD_CONTENT_TYPE.to_string(),
        )?;
        self.inner
            .execute_with_payload_no_content(builder, body, options)
            .await
    }

    async fn upload_discovery_data(
        &self,
        req: crate::model::UploadDiscoveryDataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let discovery_data_type =
            gaxi::enums::check_optional(&req.discovery_data_type, "discovery_data_type")?;
        let payload_type = gaxi::enums::check_optional(&req.payload_type, "payload_type")?;
        let body = gaxi::path_parameter::present(&req.body, "body")?.clone();
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/actions/uploadDiscoveryData");
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = discovery_data_type.add(builder, "discoveryDataType")?;
        let builder = req.log_group_id.as_deref().add(builder, "logGroupId")?;
        let builder = payload_type.add(builder, "payloadType")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            gaxi::retry_token::OPC_RETRY_TOKEN,
            req.opc_retry_token.as_deref(),
            gaxi::retry_token::generate_opc_retry_token,
        )?;
        let builder = gaxi::header_parameter::add(
            builder,
            "opc-meta-properties",
            req.opc_meta_properties.as_deref(),
        )?;
        let builder = gaxi::header_parameter::add(builder, "expect", req.expect.as_deref())?;
        let builder = gaxi::header_parameter::with_default(
            builder,
            "content-type",
            req.content_type.as_deref(),
            || DEFAULT_PAYLOAD_CONTENT_TYPE.to_string(),
        )?;
        self.inner
            .execute_with_payload_no_content(builder, body, options)
            .await
    }

    async fn get_upload(
        &self,
        req: crate::model::GetUploadRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Upload>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let upload_reference =
            gaxi::path_parameter::required(&req.upload_reference, "upload_reference")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/uploads/{upload_reference}");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_uploads(
        &self,
        req: crate::model::ListUploadsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UploadCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let warnings_filter = gaxi::enums::check_optional(&req.warnings_filter, "warnings_filter")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/uploads");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.name.as_deref().add(builder, "name")?;
        let builder = req.name_contains.as_deref().add(builder, "nameContains")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = warnings_filter.add(builder, "warningsFilter")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete_upload(
        &self,
        req: crate::model::DeleteUploadRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let upload_reference =
            gaxi::path_parameter::required(&req.upload_reference, "upload_reference")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/uploads/{upload_reference}");
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute_no_content(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_upload_files(
        &self,
        req: crate::model::ListUploadFilesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UploadFileCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let upload_reference =
            gaxi::path_parameter::required(&req.upload_reference, "upload_reference")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let status = gaxi::enums::check_all(&req.status, "status")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/uploads/{upload_reference}/files");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.search_str.as_deref().add(builder, "searchStr")?;
        let builder = status.add(builder, "status")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete_upload_file(
        &self,
        req: crate::model::DeleteUploadFileRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let upload_reference =
            gaxi::path_parameter::required(&req.upload_reference, "upload_reference")?;
        let file_reference = gaxi::path_parameter::required(&req.file_reference, "file_reference")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{namespace_name}/uploads/{upload_reference}/files/{file_reference}",
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        let builder = gaxi::header_parameter::add(builder, "if-match", req.if_match.as_deref())?;
        self.inner
            .execute_no_content(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_upload_warnings(
        &self,
        req: crate::model::ListUploadWarningsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UploadWarningCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let upload_reference =
            gaxi::path_parameter::required(&req.upload_reference, "upload_reference")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/uploads/{upload_reference}/warnings");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete_upload_warning(
        &self,
        req: crate::model::DeleteUploadWarningRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let upload_reference =
            gaxi::path_parameter::required(&req.upload_reference, "upload_reference")?;
        let warning_reference =
            gaxi::path_parameter::required(&req.warning_reference, "warning_reference")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{namespace_name}/uploads/{upload_reference}/warnings/{warning_reference}",
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute_no_content(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_templates(
        &self,
        req: crate::model::ListTemplatesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsTemplateCollection>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let compartment_id =
            gaxi::path_parameter::not_blank(&req.compartment_id, "compartment_id")?;
        let r#type = gaxi::enums::check_optional(&req.r#type, "type")?;
        let is_system = gaxi::enums::check_optional(&req.is_system, "is_system")?;
        let sort_order = gaxi::enums::check_optional(&req.sort_order, "sort_order")?;
        let sort_by = gaxi::enums::check_optional(&req.sort_by, "sort_by")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/templates");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId")?;
        let builder = r#type.add(builder, "type")?;
        let builder = req.name.as_deref().add(builder, "name")?;
        let builder = req
            .template_display_text
            .as_deref()
            .add(builder, "templateDisplayText")?;
        let builder = is_system.add(builder, "isSystem")?;
        let builder = req.category.as_deref().add(builder, "category")?;
        let builder = sort_order.add(builder, "sortOrder")?;
        let builder = sort_by.add(builder, "sortBy")?;
        let builder = req.limit.add(builder, "limit")?;
        let builder = req.page.as_deref().add(builder, "page")?;
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_template(
        &self,
        req: crate::model::GetTemplateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsTemplate>> {
        let namespace_name = gaxi::path_parameter::required(&req.namespace_name, "namespace_name")?;
        let template_id = gaxi::path_parameter::required(&req.template_id, "template_id")?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{namespace_name}/templates/{template_id}");
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder =
            gaxi::header_parameter::add(builder, "opc-request-id", req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
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
