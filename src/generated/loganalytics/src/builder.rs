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

pub mod log_analytics {
    use crate::Result;

    /// A builder for [LogAnalytics][crate::client::LogAnalytics].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use oci_loganalytics::*;
    /// # use builder::log_analytics::ClientBuilder;
    /// # use client::LogAnalytics;
    /// let builder : ClientBuilder = LogAnalytics::builder();
    /// let client = builder
    ///     .with_endpoint("https://loganalytics.eu-frankfurt-1.oci.oraclecloud.com/20200601")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::LogAnalytics;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = LogAnalytics;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::LogAnalytics] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    const MISSING_WORK_REQUEST_ID: &str =
        "the response is missing the `opc-work-request-id` header";

    /// The request builder for [LogAnalytics::list_namespaces][crate::client::LogAnalytics::list_namespaces] calls.
    #[derive(Clone, Debug)]
    pub struct ListNamespaces(RequestBuilder<crate::model::ListNamespacesRequest>);

    impl ListNamespaces {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListNamespacesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::NamespaceCollection>> {
            (*self.0.stub)
                .list_namespaces(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [compartment_id][crate::model::ListNamespacesRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.compartment_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListNamespacesRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListNamespacesRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListNamespaces {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_namespace][crate::client::LogAnalytics::get_namespace] calls.
    #[derive(Clone, Debug)]
    pub struct GetNamespace(RequestBuilder<crate::model::GetNamespaceRequest>);

    impl GetNamespace {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetNamespaceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Namespace>> {
            (*self.0.stub)
                .get_namespace(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetNamespaceRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetNamespaceRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetNamespaceRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetNamespace {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::onboard_namespace][crate::client::LogAnalytics::onboard_namespace] calls.
    #[derive(Clone, Debug)]
    pub struct OnboardNamespace(RequestBuilder<crate::model::OnboardNamespaceRequest>);

    impl OnboardNamespace {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::OnboardNamespaceRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .onboard_namespace(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::OnboardNamespaceRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::OnboardNamespaceRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::OnboardNamespaceRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::OnboardNamespaceRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::OnboardNamespaceRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [onboard_namespace_details][crate::model::OnboardNamespaceRequest::onboard_namespace_details].
        pub fn set_onboard_namespace_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::OnboardNamespaceDetails>,
        {
            self.0.request.onboard_namespace_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [onboard_namespace_details][crate::model::OnboardNamespaceRequest::onboard_namespace_details].
        pub fn set_or_clear_onboard_namespace_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::OnboardNamespaceDetails>,
        {
            self.0.request.onboard_namespace_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for OnboardNamespace {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::offboard_namespace][crate::client::LogAnalytics::offboard_namespace] calls.
    #[derive(Clone, Debug)]
    pub struct OffboardNamespace(RequestBuilder<crate::model::OffboardNamespaceRequest>);

    impl OffboardNamespace {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::OffboardNamespaceRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .offboard_namespace(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::OffboardNamespaceRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::OffboardNamespaceRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::OffboardNamespaceRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::OffboardNamespaceRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::OffboardNamespaceRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for OffboardNamespace {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_entity_source_associations][crate::client::LogAnalytics::list_entity_source_associations] calls.
    #[derive(Clone, Debug)]
    pub struct ListEntitySourceAssociations(
        RequestBuilder<crate::model::ListEntitySourceAssociationsRequest>,
    );

    impl ListEntitySourceAssociations {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListEntitySourceAssociationsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsAssociationCollection>> {
            (*self.0.stub)
                .list_entity_source_associations(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsAssociationCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsAssociationCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListEntitySourceAssociationsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListEntitySourceAssociationsRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.compartment_id = v.into();
            self
        }

        /// Sets the value of [entity_id][crate::model::ListEntitySourceAssociationsRequest::entity_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.entity_id = v.into();
            self
        }

        /// Sets the value of [entity_type][crate::model::ListEntitySourceAssociationsRequest::entity_type].
        pub fn set_entity_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.entity_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [entity_type][crate::model::ListEntitySourceAssociationsRequest::entity_type].
        pub fn set_or_clear_entity_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.entity_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [entity_type_display_name][crate::model::ListEntitySourceAssociationsRequest::entity_type_display_name].
        pub fn set_entity_type_display_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.entity_type_display_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [entity_type_display_name][crate::model::ListEntitySourceAssociationsRequest::entity_type_display_name].
        pub fn set_or_clear_entity_type_display_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.entity_type_display_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [life_cycle_state][crate::model::ListEntitySourceAssociationsRequest::life_cycle_state].
        pub fn set_life_cycle_state<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::AssociationStatus>,
        {
            self.0.request.life_cycle_state = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [life_cycle_state][crate::model::ListEntitySourceAssociationsRequest::life_cycle_state].
        pub fn set_or_clear_life_cycle_state<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::AssociationStatus>,
        {
            self.0.request.life_cycle_state = v.map(|x| x.into());
            self
        }

        /// Sets the value of [is_show_total][crate::model::ListEntitySourceAssociationsRequest::is_show_total].
        pub fn set_is_show_total<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_show_total = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_show_total][crate::model::ListEntitySourceAssociationsRequest::is_show_total].
        pub fn set_or_clear_is_show_total<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_show_total = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListEntitySourceAssociationsRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListEntitySourceAssociationsRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListEntitySourceAssociationsRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_entity_source_associations_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListEntitySourceAssociationsRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_entity_source_associations_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListEntitySourceAssociationsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListEntitySourceAssociationsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListEntitySourceAssociationsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListEntitySourceAssociationsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListEntitySourceAssociationsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListEntitySourceAssociationsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListEntitySourceAssociations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_source_associations][crate::client::LogAnalytics::list_source_associations] calls.
    #[derive(Clone, Debug)]
    pub struct ListSourceAssociations(RequestBuilder<crate::model::ListSourceAssociationsRequest>);

    impl ListSourceAssociations {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSourceAssociationsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsAssociationCollection>> {
            (*self.0.stub)
                .list_source_associations(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsAssociationCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsAssociationCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListSourceAssociationsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [source_name][crate::model::ListSourceAssociationsRequest::source_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListSourceAssociationsRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.compartment_id = v.into();
            self
        }

        /// Sets the value of [entity_id][crate::model::ListSourceAssociationsRequest::entity_id].
        pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.entity_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [entity_id][crate::model::ListSourceAssociationsRequest::entity_id].
        pub fn set_or_clear_entity_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.entity_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [life_cycle_state][crate::model::ListSourceAssociationsRequest::life_cycle_state].
        pub fn set_life_cycle_state<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::AssociationStatus>,
        {
            self.0.request.life_cycle_state = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [life_cycle_state][crate::model::ListSourceAssociationsRequest::life_cycle_state].
        pub fn set_or_clear_life_cycle_state<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::AssociationStatus>,
        {
            self.0.request.life_cycle_state = v.map(|x| x.into());
            self
        }

        /// Sets the value of [is_show_total][crate::model::ListSourceAssociationsRequest::is_show_total].
        pub fn set_is_show_total<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_show_total = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_show_total][crate::model::ListSourceAssociationsRequest::is_show_total].
        pub fn set_or_clear_is_show_total<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_show_total = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListSourceAssociationsRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListSourceAssociationsRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListSourceAssociationsRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_source_associations_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListSourceAssociationsRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_source_associations_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListSourceAssociationsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListSourceAssociationsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListSourceAssociationsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListSourceAssociationsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListSourceAssociationsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListSourceAssociationsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSourceAssociations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_association_summary][crate::client::LogAnalytics::get_association_summary] calls.
    #[derive(Clone, Debug)]
    pub struct GetAssociationSummary(RequestBuilder<crate::model::GetAssociationSummaryRequest>);

    impl GetAssociationSummary {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetAssociationSummaryRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::AssociationSummaryReport>> {
            (*self.0.stub)
                .get_association_summary(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetAssociationSummaryRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::GetAssociationSummaryRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.compartment_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetAssociationSummaryRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetAssociationSummaryRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetAssociationSummary {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::upsert_associations][crate::client::LogAnalytics::upsert_associations] calls.
    #[derive(Clone, Debug)]
    pub struct UpsertAssociations(RequestBuilder<crate::model::UpsertAssociationsRequest>);

    impl UpsertAssociations {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpsertAssociationsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .upsert_associations(self.0.request, self.0.options)
                .await
        }

        /// Creates a [Poller][lro::Poller] to wait for the work request started by
        /// this operation.
        ///
        /// The poller sends the request, then fetches the work request named in the
        /// `opc-work-request-id` response header until it completes.
        pub fn poller(self) -> impl lro::Poller<crate::model::ConfigWorkRequest> {
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let namespace_name = self.0.request.namespace_name.clone();

            let query = move |id: String| {
                let stub = stub.clone();
                let options = options.clone();
                let request = crate::model::GetConfigWorkRequestRequest::new()
                    .set_namespace_name(namespace_name.clone())
                    .set_work_request_id(id);
                async move {
                    stub.get_config_work_request(request, options)
                        .await
                        .map(gax::response::Response::into_body)
                }
            };

            let start = move || async move {
                let response = self.send().await?;
                response
                    .opc_work_request_id()
                    .map(str::to_string)
                    .ok_or_else(|| gax::error::Error::deser(MISSING_WORK_REQUEST_ID))
            };

            lro::internal::new_poller(polling_error_policy, polling_backoff_policy, start, query)
        }

        /// Sets the value of [namespace_name][crate::model::UpsertAssociationsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [is_from_republish][crate::model::UpsertAssociationsRequest::is_from_republish].
        pub fn set_is_from_republish<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_from_republish = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_from_republish][crate::model::UpsertAssociationsRequest::is_from_republish].
        pub fn set_or_clear_is_from_republish<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_from_republish = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpsertAssociationsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::UpsertAssociationsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::UpsertAssociationsRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::UpsertAssociationsRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [upsert_log_analytics_association_details][crate::model::UpsertAssociationsRequest::upsert_log_analytics_association_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_upsert_log_analytics_association_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::UpsertLogAnalyticsAssociationDetails>,
        {
            self.0.request.upsert_log_analytics_association_details =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [upsert_log_analytics_association_details][crate::model::UpsertAssociationsRequest::upsert_log_analytics_association_details].
        pub fn set_or_clear_upsert_log_analytics_association_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::UpsertLogAnalyticsAssociationDetails>,
        {
            self.0.request.upsert_log_analytics_association_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpsertAssociations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_associations][crate::client::LogAnalytics::delete_associations] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteAssociations(RequestBuilder<crate::model::DeleteAssociationsRequest>);

    impl DeleteAssociations {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteAssociationsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_associations(self.0.request, self.0.options)
                .await
        }

        /// Creates a [Poller][lro::Poller] to wait for the work request started by
        /// this operation.
        ///
        /// The poller sends the request, then fetches the work request named in the
        /// `opc-work-request-id` response header until it completes.
        pub fn poller(self) -> impl lro::Poller<crate::model::ConfigWorkRequest> {
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let namespace_name = self.0.request.namespace_name.clone();

            let query = move |id: String| {
                let stub = stub.clone();
                let options = options.clone();
                let request = crate::model::GetConfigWorkRequestRequest::new()
                    .set_namespace_name(namespace_name.clone())
                    .set_work_request_id(id);
                async move {
                    stub.get_config_work_request(request, options)
                        .await
                        .map(gax::response::Response::into_body)
                }
            };

            let start = move || async move {
                let response = self.send().await?;
                response
                    .opc_work_request_id()
                    .map(str::to_string)
                    .ok_or_else(|| gax::error::Error::deser(MISSING_WORK_REQUEST_ID))
            };

            lro::internal::new_poller(polling_error_policy, polling_backoff_policy, start, query)
        }

        /// Sets the value of [namespace_name][crate::model::DeleteAssociationsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteAssociationsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::DeleteAssociationsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::DeleteAssociationsRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::DeleteAssociationsRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [delete_log_analytics_association_details][crate::model::DeleteAssociationsRequest::delete_log_analytics_association_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_delete_log_analytics_association_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::DeleteLogAnalyticsAssociationDetails>,
        {
            self.0.request.delete_log_analytics_association_details =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [delete_log_analytics_association_details][crate::model::DeleteAssociationsRequest::delete_log_analytics_association_details].
        pub fn set_or_clear_delete_log_analytics_association_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::DeleteLogAnalyticsAssociationDetails>,
        {
            self.0.request.delete_log_analytics_association_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteAssociations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::validate_association_parameters][crate::client::LogAnalytics::validate_association_parameters] calls.
    #[derive(Clone, Debug)]
    pub struct ValidateAssociationParameters(
        RequestBuilder<crate::model::ValidateAssociationParametersRequest>,
    );

    impl ValidateAssociationParameters {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ValidateAssociationParametersRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<
            gax::response::Response<crate::model::LogAnalyticsAssociationParameterCollection>,
        > {
            (*self.0.stub)
                .validate_association_parameters(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsAssociationParameterCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsAssociationParameterCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ValidateAssociationParametersRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [sort_order][crate::model::ValidateAssociationParametersRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ValidateAssociationParametersRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ValidateAssociationParametersRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::validate_association_parameters_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ValidateAssociationParametersRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::validate_association_parameters_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ValidateAssociationParametersRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ValidateAssociationParametersRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ValidateAssociationParametersRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ValidateAssociationParametersRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ValidateAssociationParametersRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ValidateAssociationParametersRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::ValidateAssociationParametersRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::ValidateAssociationParametersRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [upsert_log_analytics_association_details][crate::model::ValidateAssociationParametersRequest::upsert_log_analytics_association_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_upsert_log_analytics_association_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::UpsertLogAnalyticsAssociationDetails>,
        {
            self.0.request.upsert_log_analytics_association_details =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [upsert_log_analytics_association_details][crate::model::ValidateAssociationParametersRequest::upsert_log_analytics_association_details].
        pub fn set_or_clear_upsert_log_analytics_association_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::UpsertLogAnalyticsAssociationDetails>,
        {
            self.0.request.upsert_log_analytics_association_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ValidateAssociationParameters {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_categories][crate::client::LogAnalytics::list_categories] calls.
    #[derive(Clone, Debug)]
    pub struct ListCategories(RequestBuilder<crate::model::ListCategoriesRequest>);

    impl ListCategories {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListCategoriesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsCategoryCollection>> {
            (*self.0.stub)
                .list_categories(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsCategoryCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsCategoryCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListCategoriesRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [category_display_text][crate::model::ListCategoriesRequest::category_display_text].
        pub fn set_category_display_text<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.category_display_text = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [category_display_text][crate::model::ListCategoriesRequest::category_display_text].
        pub fn set_or_clear_category_display_text<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.category_display_text = v.map(|x| x.into());
            self
        }

        /// Sets the value of [category_type][crate::model::ListCategoriesRequest::category_type].
        pub fn set_category_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.category_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [category_type][crate::model::ListCategoriesRequest::category_type].
        pub fn set_or_clear_category_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.category_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [name][crate::model::ListCategoriesRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::ListCategoriesRequest::name].
        pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [is_system][crate::model::ListCategoriesRequest::is_system].
        pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_system = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_system][crate::model::ListCategoriesRequest::is_system].
        pub fn set_or_clear_is_system<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_system = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListCategoriesRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListCategoriesRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListCategoriesRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_categories_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListCategoriesRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_categories_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListCategoriesRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListCategoriesRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListCategoriesRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListCategoriesRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListCategoriesRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListCategoriesRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListCategories {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_category][crate::client::LogAnalytics::get_category] calls.
    #[derive(Clone, Debug)]
    pub struct GetCategory(RequestBuilder<crate::model::GetCategoryRequest>);

    impl GetCategory {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetCategoryRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsCategory>> {
            (*self.0.stub)
                .get_category(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetCategoryRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [category_name][crate::model::GetCategoryRequest::category_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_category_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.category_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetCategoryRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetCategoryRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetCategory {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_category][crate::client::LogAnalytics::delete_category] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteCategory(RequestBuilder<crate::model::DeleteCategoryRequest>);

    impl DeleteCategory {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteCategoryRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_category(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteCategoryRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [category_name][crate::model::DeleteCategoryRequest::category_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_category_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.category_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteCategoryRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::DeleteCategoryRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteCategory {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_resource_categories][crate::client::LogAnalytics::list_resource_categories] calls.
    #[derive(Clone, Debug)]
    pub struct ListResourceCategories(RequestBuilder<crate::model::ListResourceCategoriesRequest>);

    impl ListResourceCategories {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListResourceCategoriesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsResourceCategoryCollection>> {
            (*self.0.stub)
                .list_resource_categories(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsResourceCategoryCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsResourceCategoryCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListResourceCategoriesRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [categories][crate::model::ListResourceCategoriesRequest::categories].
        pub fn set_categories<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.categories = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [categories][crate::model::ListResourceCategoriesRequest::categories].
        pub fn set_or_clear_categories<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.categories = v.map(|x| x.into());
            self
        }

        /// Sets the value of [resource_types][crate::model::ListResourceCategoriesRequest::resource_types].
        pub fn set_resource_types<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.resource_types = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [resource_types][crate::model::ListResourceCategoriesRequest::resource_types].
        pub fn set_or_clear_resource_types<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.resource_types = v.map(|x| x.into());
            self
        }

        /// Sets the value of [resource_ids][crate::model::ListResourceCategoriesRequest::resource_ids].
        pub fn set_resource_ids<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.resource_ids = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [resource_ids][crate::model::ListResourceCategoriesRequest::resource_ids].
        pub fn set_or_clear_resource_ids<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.resource_ids = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListResourceCategoriesRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListResourceCategoriesRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListResourceCategoriesRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_resource_categories_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListResourceCategoriesRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_resource_categories_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListResourceCategoriesRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListResourceCategoriesRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListResourceCategoriesRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListResourceCategoriesRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListResourceCategoriesRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListResourceCategoriesRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListResourceCategories {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::update_resource_categories][crate::client::LogAnalytics::update_resource_categories] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateResourceCategories(
        RequestBuilder<crate::model::UpdateResourceCategoriesRequest>,
    );

    impl UpdateResourceCategories {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateResourceCategoriesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .update_resource_categories(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpdateResourceCategoriesRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateResourceCategoriesRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::UpdateResourceCategoriesRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::UpdateResourceCategoriesRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::UpdateResourceCategoriesRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [log_analytics_categories_list_details][crate::model::UpdateResourceCategoriesRequest::log_analytics_categories_list_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_categories_list_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::LogAnalyticsCategoriesListDetails>,
        {
            self.0.request.log_analytics_categories_list_details =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [log_analytics_categories_list_details][crate::model::UpdateResourceCategoriesRequest::log_analytics_categories_list_details].
        pub fn set_or_clear_log_analytics_categories_list_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::LogAnalyticsCategoriesListDetails>,
        {
            self.0.request.log_analytics_categories_list_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateResourceCategories {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::remove_resource_categories][crate::client::LogAnalytics::remove_resource_categories] calls.
    #[derive(Clone, Debug)]
    pub struct RemoveResourceCategories(
        RequestBuilder<crate::model::RemoveResourceCategoriesRequest>,
    );

    impl RemoveResourceCategories {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RemoveResourceCategoriesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .remove_resource_categories(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::RemoveResourceCategoriesRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::RemoveResourceCategoriesRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::RemoveResourceCategoriesRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::RemoveResourceCategoriesRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::RemoveResourceCategoriesRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [log_analytics_categories_list_details][crate::model::RemoveResourceCategoriesRequest::log_analytics_categories_list_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_categories_list_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::LogAnalyticsCategoriesListDetails>,
        {
            self.0.request.log_analytics_categories_list_details =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [log_analytics_categories_list_details][crate::model::RemoveResourceCategoriesRequest::log_analytics_categories_list_details].
        pub fn set_or_clear_log_analytics_categories_list_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::LogAnalyticsCategoriesListDetails>,
        {
            self.0.request.log_analytics_categories_list_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RemoveResourceCategories {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_config_work_request][crate::client::LogAnalytics::get_config_work_request] calls.
    #[derive(Clone, Debug)]
    pub struct GetConfigWorkRequest(RequestBuilder<crate::model::GetConfigWorkRequestRequest>);

    impl GetConfigWorkRequest {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetConfigWorkRequestRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ConfigWorkRequest>> {
            (*self.0.stub)
                .get_config_work_request(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetConfigWorkRequestRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [work_request_id][crate::model::GetConfigWorkRequestRequest::work_request_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_work_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.work_request_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetConfigWorkRequestRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetConfigWorkRequestRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetConfigWorkRequest {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_config_work_requests][crate::client::LogAnalytics::list_config_work_requests] calls.
    #[derive(Clone, Debug)]
    pub struct ListConfigWorkRequests(RequestBuilder<crate::model::ListConfigWorkRequestsRequest>);

    impl ListConfigWorkRequests {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListConfigWorkRequestsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ConfigWorkRequestCollection>> {
            (*self.0.stub)
                .list_config_work_requests(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::ConfigWorkRequestCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::ConfigWorkRequestCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListConfigWorkRequestsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListConfigWorkRequestsRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.compartment_id = v.into();
            self
        }

        /// Sets the value of [sort_order][crate::model::ListConfigWorkRequestsRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListConfigWorkRequestsRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListConfigWorkRequestsRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_config_work_requests_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListConfigWorkRequestsRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_config_work_requests_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListConfigWorkRequestsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListConfigWorkRequestsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListConfigWorkRequestsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListConfigWorkRequestsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListConfigWorkRequestsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListConfigWorkRequestsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListConfigWorkRequests {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::export_custom_content][crate::client::LogAnalytics::export_custom_content] calls.
    #[derive(Clone, Debug)]
    pub struct ExportCustomContent(RequestBuilder<crate::model::ExportCustomContentRequest>);

    impl ExportCustomContent {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ExportCustomContentRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<bytes::Bytes>> {
            (*self.0.stub)
                .export_custom_content(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ExportCustomContentRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ExportCustomContentRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ExportCustomContentRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::ExportCustomContentRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::ExportCustomContentRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [export_content][crate::model::ExportCustomContentRequest::export_content].
        ///
        /// This is a **required** field for requests.
        pub fn set_export_content<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ExportContent>,
        {
            self.0.request.export_content = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [export_content][crate::model::ExportCustomContentRequest::export_content].
        pub fn set_or_clear_export_content<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ExportContent>,
        {
            self.0.request.export_content = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ExportCustomContent {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::import_custom_content][crate::client::LogAnalytics::import_custom_content] calls.
    #[derive(Clone, Debug)]
    pub struct ImportCustomContent(RequestBuilder<crate::model::ImportCustomContentRequest>);

    impl ImportCustomContent {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ImportCustomContentRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsImportCustomContent>> {
            (*self.0.stub)
                .import_custom_content(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ImportCustomContentRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [is_overwrite][crate::model::ImportCustomContentRequest::is_overwrite].
        pub fn set_is_overwrite<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_overwrite = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_overwrite][crate::model::ImportCustomContentRequest::is_overwrite].
        pub fn set_or_clear_is_overwrite<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_overwrite = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ImportCustomContentRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ImportCustomContentRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::ImportCustomContentRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::ImportCustomContentRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [expect][crate::model::ImportCustomContentRequest::expect].
        pub fn set_expect<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.expect = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [expect][crate::model::ImportCustomContentRequest::expect].
        pub fn set_or_clear_expect<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.expect = v.map(|x| x.into());
            self
        }

        /// Sets the value of [content_type][crate::model::ImportCustomContentRequest::content_type].
        pub fn set_content_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.content_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [content_type][crate::model::ImportCustomContentRequest::content_type].
        pub fn set_or_clear_content_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.content_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [body][crate::model::ImportCustomContentRequest::body].
        ///
        /// This is a **required** field for requests.
        pub fn set_body<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
            self.0.request.body = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [body][crate::model::ImportCustomContentRequest::body].
        pub fn set_or_clear_body<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bytes::Bytes>,
        {
            self.0.request.body = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ImportCustomContent {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::create_log_analytics_em_bridge][crate::client::LogAnalytics::create_log_analytics_em_bridge] calls.
    #[derive(Clone, Debug)]
    pub struct CreateLogAnalyticsEmBridge(
        RequestBuilder<crate::model::CreateLogAnalyticsEmBridgeRequest>,
    );

    impl CreateLogAnalyticsEmBridge {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateLogAnalyticsEmBridgeRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsEmBridge>> {
            (*self.0.stub)
                .create_log_analytics_em_bridge(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::CreateLogAnalyticsEmBridgeRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::CreateLogAnalyticsEmBridgeRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::CreateLogAnalyticsEmBridgeRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::CreateLogAnalyticsEmBridgeRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::CreateLogAnalyticsEmBridgeRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [create_log_analytics_em_bridge_details][crate::model::CreateLogAnalyticsEmBridgeRequest::create_log_analytics_em_bridge_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_create_log_analytics_em_bridge_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::CreateLogAnalyticsEmBridgeDetails>,
        {
            self.0.request.create_log_analytics_em_bridge_details =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [create_log_analytics_em_bridge_details][crate::model::CreateLogAnalyticsEmBridgeRequest::create_log_analytics_em_bridge_details].
        pub fn set_or_clear_create_log_analytics_em_bridge_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::CreateLogAnalyticsEmBridgeDetails>,
        {
            self.0.request.create_log_analytics_em_bridge_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateLogAnalyticsEmBridge {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_log_analytics_em_bridge][crate::client::LogAnalytics::get_log_analytics_em_bridge] calls.
    #[derive(Clone, Debug)]
    pub struct GetLogAnalyticsEmBridge(
        RequestBuilder<crate::model::GetLogAnalyticsEmBridgeRequest>,
    );

    impl GetLogAnalyticsEmBridge {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogAnalyticsEmBridgeRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsEmBridge>> {
            (*self.0.stub)
                .get_log_analytics_em_bridge(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetLogAnalyticsEmBridgeRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [log_analytics_em_bridge_id][crate::model::GetLogAnalyticsEmBridgeRequest::log_analytics_em_bridge_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_em_bridge_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_analytics_em_bridge_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLogAnalyticsEmBridgeRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetLogAnalyticsEmBridgeRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogAnalyticsEmBridge {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_log_analytics_em_bridges][crate::client::LogAnalytics::list_log_analytics_em_bridges] calls.
    #[derive(Clone, Debug)]
    pub struct ListLogAnalyticsEmBridges(
        RequestBuilder<crate::model::ListLogAnalyticsEmBridgesRequest>,
    );

    impl ListLogAnalyticsEmBridges {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLogAnalyticsEmBridgesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsEmBridgeCollection>> {
            (*self.0.stub)
                .list_log_analytics_em_bridges(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsEmBridgeCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsEmBridgeCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListLogAnalyticsEmBridgesRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListLogAnalyticsEmBridgesRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.compartment_id = v.into();
            self
        }

        /// Sets the value of [display_name][crate::model::ListLogAnalyticsEmBridgesRequest::display_name].
        pub fn set_display_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.display_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [display_name][crate::model::ListLogAnalyticsEmBridgesRequest::display_name].
        pub fn set_or_clear_display_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.display_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [lifecycle_state][crate::model::ListLogAnalyticsEmBridgesRequest::lifecycle_state].
        pub fn set_lifecycle_state<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::EmBridgeLifecycleStates>,
        {
            self.0.request.lifecycle_state = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [lifecycle_details_contains][crate::model::ListLogAnalyticsEmBridgesRequest::lifecycle_details_contains].
        pub fn set_lifecycle_details_contains<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.lifecycle_details_contains = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [lifecycle_details_contains][crate::model::ListLogAnalyticsEmBridgesRequest::lifecycle_details_contains].
        pub fn set_or_clear_lifecycle_details_contains<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.lifecycle_details_contains = v.map(|x| x.into());
            self
        }

        /// Sets the value of [import_status][crate::model::ListLogAnalyticsEmBridgesRequest::import_status].
        pub fn set_import_status<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::EmBridgeLatestImportProcessingStatus>,
        {
            self.0.request.import_status = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [em_entities_compartment_id][crate::model::ListLogAnalyticsEmBridgesRequest::em_entities_compartment_id].
        pub fn set_em_entities_compartment_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.em_entities_compartment_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [em_entities_compartment_id][crate::model::ListLogAnalyticsEmBridgesRequest::em_entities_compartment_id].
        pub fn set_or_clear_em_entities_compartment_id<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.em_entities_compartment_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListLogAnalyticsEmBridgesRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListLogAnalyticsEmBridgesRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListLogAnalyticsEmBridgesRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_log_analytics_em_bridges_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListLogAnalyticsEmBridgesRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_log_analytics_em_bridges_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListLogAnalyticsEmBridgesRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListLogAnalyticsEmBridgesRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListLogAnalyticsEmBridgesRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListLogAnalyticsEmBridgesRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListLogAnalyticsEmBridgesRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListLogAnalyticsEmBridgesRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLogAnalyticsEmBridges {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::update_log_analytics_em_bridge][crate::client::LogAnalytics::update_log_analytics_em_bridge] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateLogAnalyticsEmBridge(
        RequestBuilder<crate::model::UpdateLogAnalyticsEmBridgeRequest>,
    );

    impl UpdateLogAnalyticsEmBridge {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateLogAnalyticsEmBridgeRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsEmBridge>> {
            (*self.0.stub)
                .update_log_analytics_em_bridge(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpdateLogAnalyticsEmBridgeRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [log_analytics_em_bridge_id][crate::model::UpdateLogAnalyticsEmBridgeRequest::log_analytics_em_bridge_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_em_bridge_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_analytics_em_bridge_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateLogAnalyticsEmBridgeRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::UpdateLogAnalyticsEmBridgeRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateLogAnalyticsEmBridgeRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::UpdateLogAnalyticsEmBridgeRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }

        /// Sets the value of [update_log_analytics_em_bridge_details][crate::model::UpdateLogAnalyticsEmBridgeRequest::update_log_analytics_em_bridge_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_update_log_analytics_em_bridge_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::UpdateLogAnalyticsEmBridgeDetails>,
        {
            self.0.request.update_log_analytics_em_bridge_details =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [update_log_analytics_em_bridge_details][crate::model::UpdateLogAnalyticsEmBridgeRequest::update_log_analytics_em_bridge_details].
        pub fn set_or_clear_update_log_analytics_em_bridge_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::UpdateLogAnalyticsEmBridgeDetails>,
        {
            self.0.request.update_log_analytics_em_bridge_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateLogAnalyticsEmBridge {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_log_analytics_em_bridge][crate::client::LogAnalytics::delete_log_analytics_em_bridge] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteLogAnalyticsEmBridge(
        RequestBuilder<crate::model::DeleteLogAnalyticsEmBridgeRequest>,
    );

    impl DeleteLogAnalyticsEmBridge {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteLogAnalyticsEmBridgeRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_log_analytics_em_bridge(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteLogAnalyticsEmBridgeRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [log_analytics_em_bridge_id][crate::model::DeleteLogAnalyticsEmBridgeRequest::log_analytics_em_bridge_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_em_bridge_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_analytics_em_bridge_id = v.into();
            self
        }

        /// Sets the value of [is_delete_entities][crate::model::DeleteLogAnalyticsEmBridgeRequest::is_delete_entities].
        pub fn set_is_delete_entities<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_delete_entities = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_delete_entities][crate::model::DeleteLogAnalyticsEmBridgeRequest::is_delete_entities].
        pub fn set_or_clear_is_delete_entities<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_delete_entities = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteLogAnalyticsEmBridgeRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::DeleteLogAnalyticsEmBridgeRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteLogAnalyticsEmBridgeRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::DeleteLogAnalyticsEmBridgeRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteLogAnalyticsEmBridge {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_log_analytics_em_bridge_summary][crate::client::LogAnalytics::get_log_analytics_em_bridge_summary] calls.
    #[derive(Clone, Debug)]
    pub struct GetLogAnalyticsEmBridgeSummary(
        RequestBuilder<crate::model::GetLogAnalyticsEmBridgeSummaryRequest>,
    );

    impl GetLogAnalyticsEmBridgeSummary {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogAnalyticsEmBridgeSummaryRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsEmBridgeSummaryReport>> {
            (*self.0.stub)
                .get_log_analytics_em_bridge_summary(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetLogAnalyticsEmBridgeSummaryRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::GetLogAnalyticsEmBridgeSummaryRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.compartment_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLogAnalyticsEmBridgeSummaryRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetLogAnalyticsEmBridgeSummaryRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogAnalyticsEmBridgeSummary {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::create_log_analytics_entity][crate::client::LogAnalytics::create_log_analytics_entity] calls.
    #[derive(Clone, Debug)]
    pub struct CreateLogAnalyticsEntity(
        RequestBuilder<crate::model::CreateLogAnalyticsEntityRequest>,
    );

    impl CreateLogAnalyticsEntity {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateLogAnalyticsEntityRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntity>> {
            (*self.0.stub)
                .create_log_analytics_entity(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::CreateLogAnalyticsEntityRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::CreateLogAnalyticsEntityRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::CreateLogAnalyticsEntityRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::CreateLogAnalyticsEntityRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::CreateLogAnalyticsEntityRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [create_log_analytics_entity_details][crate::model::CreateLogAnalyticsEntityRequest::create_log_analytics_entity_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_create_log_analytics_entity_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::CreateLogAnalyticsEntityDetails>,
        {
            self.0.request.create_log_analytics_entity_details =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [create_log_analytics_entity_details][crate::model::CreateLogAnalyticsEntityRequest::create_log_analytics_entity_details].
        pub fn set_or_clear_create_log_analytics_entity_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::CreateLogAnalyticsEntityDetails>,
        {
            self.0.request.create_log_analytics_entity_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateLogAnalyticsEntity {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_log_analytics_entity][crate::client::LogAnalytics::get_log_analytics_entity] calls.
    #[derive(Clone, Debug)]
    pub struct GetLogAnalyticsEntity(RequestBuilder<crate::model::GetLogAnalyticsEntityRequest>);

    impl GetLogAnalyticsEntity {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogAnalyticsEntityRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntity>> {
            (*self.0.stub)
                .get_log_analytics_entity(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetLogAnalyticsEntityRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [log_analytics_entity_id][crate::model::GetLogAnalyticsEntityRequest::log_analytics_entity_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_entity_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_analytics_entity_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLogAnalyticsEntityRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetLogAnalyticsEntityRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogAnalyticsEntity {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_log_analytics_entities][crate::client::LogAnalytics::list_log_analytics_entities] calls.
    #[derive(Clone, Debug)]
    pub struct ListLogAnalyticsEntities(
        RequestBuilder<crate::model::ListLogAnalyticsEntitiesRequest>,
    );

    impl ListLogAnalyticsEntities {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLogAnalyticsEntitiesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityCollection>> {
            (*self.0.stub)
                .list_log_analytics_entities(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsEntityCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsEntityCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListLogAnalyticsEntitiesRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListLogAnalyticsEntitiesRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.compartment_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::ListLogAnalyticsEntitiesRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::ListLogAnalyticsEntitiesRequest::name].
        pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [name_contains][crate::model::ListLogAnalyticsEntitiesRequest::name_contains].
        pub fn set_name_contains<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.name_contains = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name_contains][crate::model::ListLogAnalyticsEntitiesRequest::name_contains].
        pub fn set_or_clear_name_contains<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.name_contains = v.map(|x| x.into());
            self
        }

        /// Sets the value of [entity_type_name][crate::model::ListLogAnalyticsEntitiesRequest::entity_type_name].
        pub fn set_entity_type_name<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            self.0.request.entity_type_name = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [cloud_resource_id][crate::model::ListLogAnalyticsEntitiesRequest::cloud_resource_id].
        pub fn set_cloud_resource_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.cloud_resource_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [cloud_resource_id][crate::model::ListLogAnalyticsEntitiesRequest::cloud_resource_id].
        pub fn set_or_clear_cloud_resource_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.cloud_resource_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [lifecycle_state][crate::model::ListLogAnalyticsEntitiesRequest::lifecycle_state].
        pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::EntityLifecycleStates>,
        {
            self.0.request.lifecycle_state = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [lifecycle_state][crate::model::ListLogAnalyticsEntitiesRequest::lifecycle_state].
        pub fn set_or_clear_lifecycle_state<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::EntityLifecycleStates>,
        {
            self.0.request.lifecycle_state = v.map(|x| x.into());
            self
        }

        /// Sets the value of [lifecycle_details_contains][crate::model::ListLogAnalyticsEntitiesRequest::lifecycle_details_contains].
        pub fn set_lifecycle_details_contains<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.lifecycle_details_contains = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [lifecycle_details_contains][crate::model::ListLogAnalyticsEntitiesRequest::lifecycle_details_contains].
        pub fn set_or_clear_lifecycle_details_contains<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.lifecycle_details_contains = v.map(|x| x.into());
            self
        }

        /// Sets the value of [is_management_agent_id_null][crate::model::ListLogAnalyticsEntitiesRequest::is_management_agent_id_null].
        pub fn set_is_management_agent_id_null<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<
                crate::model::list_log_analytics_entities_request::IsManagementAgentIdNull,
            >,
        {
            self.0.request.is_management_agent_id_null = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_management_agent_id_null][crate::model::ListLogAnalyticsEntitiesRequest::is_management_agent_id_null].
        pub fn set_or_clear_is_management_agent_id_null<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<
                crate::model::list_log_analytics_entities_request::IsManagementAgentIdNull,
            >,
        {
            self.0.request.is_management_agent_id_null = v.map(|x| x.into());
            self
        }

        /// Sets the value of [hostname][crate::model::ListLogAnalyticsEntitiesRequest::hostname].
        pub fn set_hostname<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.hostname = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [hostname][crate::model::ListLogAnalyticsEntitiesRequest::hostname].
        pub fn set_or_clear_hostname<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.hostname = v.map(|x| x.into());
            self
        }

        /// Sets the value of [hostname_contains][crate::model::ListLogAnalyticsEntitiesRequest::hostname_contains].
        pub fn set_hostname_contains<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.hostname_contains = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [hostname_contains][crate::model::ListLogAnalyticsEntitiesRequest::hostname_contains].
        pub fn set_or_clear_hostname_contains<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.hostname_contains = v.map(|x| x.into());
            self
        }

        /// Sets the value of [source_id][crate::model::ListLogAnalyticsEntitiesRequest::source_id].
        pub fn set_source_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [source_id][crate::model::ListLogAnalyticsEntitiesRequest::source_id].
        pub fn set_or_clear_source_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.source_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [creation_source_type][crate::model::ListLogAnalyticsEntitiesRequest::creation_source_type].
        pub fn set_creation_source_type<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<
                crate::model::list_log_analytics_entities_request::CreationSourceType,
            >,
        {
            self.0.request.creation_source_type = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [creation_source_details][crate::model::ListLogAnalyticsEntitiesRequest::creation_source_details].
        pub fn set_creation_source_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.creation_source_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [creation_source_details][crate::model::ListLogAnalyticsEntitiesRequest::creation_source_details].
        pub fn set_or_clear_creation_source_details<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.creation_source_details = v.map(|x| x.into());
            self
        }

        /// Sets the value of [is_show_associated_sources_count][crate::model::ListLogAnalyticsEntitiesRequest::is_show_associated_sources_count].
        pub fn set_is_show_associated_sources_count<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_show_associated_sources_count = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_show_associated_sources_count][crate::model::ListLogAnalyticsEntitiesRequest::is_show_associated_sources_count].
        pub fn set_or_clear_is_show_associated_sources_count<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_show_associated_sources_count = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListLogAnalyticsEntitiesRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListLogAnalyticsEntitiesRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListLogAnalyticsEntitiesRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_log_analytics_entities_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListLogAnalyticsEntitiesRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_log_analytics_entities_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListLogAnalyticsEntitiesRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListLogAnalyticsEntitiesRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListLogAnalyticsEntitiesRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListLogAnalyticsEntitiesRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListLogAnalyticsEntitiesRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListLogAnalyticsEntitiesRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLogAnalyticsEntities {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::update_log_analytics_entity][crate::client::LogAnalytics::update_log_analytics_entity] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateLogAnalyticsEntity(
        RequestBuilder<crate::model::UpdateLogAnalyticsEntityRequest>,
    );

    impl UpdateLogAnalyticsEntity {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateLogAnalyticsEntityRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntity>> {
            (*self.0.stub)
                .update_log_analytics_entity(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpdateLogAnalyticsEntityRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [log_analytics_entity_id][crate::model::UpdateLogAnalyticsEntityRequest::log_analytics_entity_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_entity_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_analytics_entity_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateLogAnalyticsEntityRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::UpdateLogAnalyticsEntityRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateLogAnalyticsEntityRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::UpdateLogAnalyticsEntityRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }

        /// Sets the value of [update_log_analytics_entity_details][crate::model::UpdateLogAnalyticsEntityRequest::update_log_analytics_entity_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_update_log_analytics_entity_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::UpdateLogAnalyticsEntityDetails>,
        {
            self.0.request.update_log_analytics_entity_details =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [update_log_analytics_entity_details][crate::model::UpdateLogAnalyticsEntityRequest::update_log_analytics_entity_details].
        pub fn set_or_clear_update_log_analytics_entity_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::UpdateLogAnalyticsEntityDetails>,
        {
            self.0.request.update_log_analytics_entity_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateLogAnalyticsEntity {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_log_analytics_entity][crate::client::LogAnalytics::delete_log_analytics_entity] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteLogAnalyticsEntity(
        RequestBuilder<crate::model::DeleteLogAnalyticsEntityRequest>,
    );

    impl DeleteLogAnalyticsEntity {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteLogAnalyticsEntityRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_log_analytics_entity(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteLogAnalyticsEntityRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [log_analytics_entity_id][crate::model::DeleteLogAnalyticsEntityRequest::log_analytics_entity_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_entity_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_analytics_entity_id = v.into();
            self
        }

        /// Sets the value of [is_force_delete][crate::model::DeleteLogAnalyticsEntityRequest::is_force_delete].
        pub fn set_is_force_delete<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_force_delete = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_force_delete][crate::model::DeleteLogAnalyticsEntityRequest::is_force_delete].
        pub fn set_or_clear_is_force_delete<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_force_delete = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteLogAnalyticsEntityRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::DeleteLogAnalyticsEntityRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteLogAnalyticsEntityRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::DeleteLogAnalyticsEntityRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteLogAnalyticsEntity {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_log_analytics_entities_summary][crate::client::LogAnalytics::get_log_analytics_entities_summary] calls.
    #[derive(Clone, Debug)]
    pub struct GetLogAnalyticsEntitiesSummary(
        RequestBuilder<crate::model::GetLogAnalyticsEntitiesSummaryRequest>,
    );

    impl GetLogAnalyticsEntitiesSummary {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogAnalyticsEntitiesSummaryRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntitySummaryReport>> {
            (*self.0.stub)
                .get_log_analytics_entities_summary(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetLogAnalyticsEntitiesSummaryRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::GetLogAnalyticsEntitiesSummaryRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.compartment_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLogAnalyticsEntitiesSummaryRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetLogAnalyticsEntitiesSummaryRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogAnalyticsEntitiesSummary {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::change_log_analytics_entity_compartment][crate::client::LogAnalytics::change_log_analytics_entity_compartment] calls.
    #[derive(Clone, Debug)]
    pub struct ChangeLogAnalyticsEntityCompartment(
        RequestBuilder<crate::model::ChangeLogAnalyticsEntityCompartmentRequest>,
    );

    impl ChangeLogAnalyticsEntityCompartment {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ChangeLogAnalyticsEntityCompartmentRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .change_log_analytics_entity_compartment(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ChangeLogAnalyticsEntityCompartmentRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [log_analytics_entity_id][crate::model::ChangeLogAnalyticsEntityCompartmentRequest::log_analytics_entity_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_entity_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_analytics_entity_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ChangeLogAnalyticsEntityCompartmentRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ChangeLogAnalyticsEntityCompartmentRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::ChangeLogAnalyticsEntityCompartmentRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::ChangeLogAnalyticsEntityCompartmentRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::ChangeLogAnalyticsEntityCompartmentRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::ChangeLogAnalyticsEntityCompartmentRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }

        /// Sets the value of [change_log_analytics_entity_compartment_details][crate::model::ChangeLogAnalyticsEntityCompartmentRequest::change_log_analytics_entity_compartment_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_change_log_analytics_entity_compartment_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ChangeLogAnalyticsEntityCompartmentDetails>,
        {
            self.0.request.change_log_analytics_entity_compartment_details =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [change_log_analytics_entity_compartment_details][crate::model::ChangeLogAnalyticsEntityCompartmentRequest::change_log_analytics_entity_compartment_details].
        pub fn set_or_clear_change_log_analytics_entity_compartment_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::ChangeLogAnalyticsEntityCompartmentDetails>,
        {
            self.0.request.change_log_analytics_entity_compartment_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ChangeLogAnalyticsEntityCompartment {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::add_entity_association][crate::client::LogAnalytics::add_entity_association] calls.
    #[derive(Clone, Debug)]
    pub struct AddEntityAssociation(RequestBuilder<crate::model::AddEntityAssociationRequest>);

    impl AddEntityAssociation {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AddEntityAssociationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .add_entity_association(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::AddEntityAssociationRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [log_analytics_entity_id][crate::model::AddEntityAssociationRequest::log_analytics_entity_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_entity_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_analytics_entity_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::AddEntityAssociationRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::AddEntityAssociationRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::AddEntityAssociationRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::AddEntityAssociationRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::AddEntityAssociationRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::AddEntityAssociationRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }

        /// Sets the value of [add_entity_association_details][crate::model::AddEntityAssociationRequest::add_entity_association_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_add_entity_association_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::AddEntityAssociationDetails>,
        {
            self.0.request.add_entity_association_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [add_entity_association_details][crate::model::AddEntityAssociationRequest::add_entity_association_details].
        pub fn set_or_clear_add_entity_association_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::AddEntityAssociationDetails>,
        {
            self.0.request.add_entity_association_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for AddEntityAssociation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::remove_entity_associations][crate::client::LogAnalytics::remove_entity_associations] calls.
    #[derive(Clone, Debug)]
    pub struct RemoveEntityAssociations(
        RequestBuilder<crate::model::RemoveEntityAssociationsRequest>,
    );

    impl RemoveEntityAssociations {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RemoveEntityAssociationsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .remove_entity_associations(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::RemoveEntityAssociationsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [log_analytics_entity_id][crate::model::RemoveEntityAssociationsRequest::log_analytics_entity_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_entity_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_analytics_entity_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::RemoveEntityAssociationsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::RemoveEntityAssociationsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::RemoveEntityAssociationsRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::RemoveEntityAssociationsRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::RemoveEntityAssociationsRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::RemoveEntityAssociationsRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }

        /// Sets the value of [remove_entity_associations_details][crate::model::RemoveEntityAssociationsRequest::remove_entity_associations_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_remove_entity_associations_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::RemoveEntityAssociationsDetails>,
        {
            self.0.request.remove_entity_associations_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [remove_entity_associations_details][crate::model::RemoveEntityAssociationsRequest::remove_entity_associations_details].
        pub fn set_or_clear_remove_entity_associations_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::RemoveEntityAssociationsDetails>,
        {
            self.0.request.remove_entity_associations_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RemoveEntityAssociations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_entity_associations][crate::client::LogAnalytics::list_entity_associations] calls.
    #[derive(Clone, Debug)]
    pub struct ListEntityAssociations(RequestBuilder<crate::model::ListEntityAssociationsRequest>);

    impl ListEntityAssociations {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListEntityAssociationsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityCollection>> {
            (*self.0.stub)
                .list_entity_associations(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsEntityCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsEntityCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListEntityAssociationsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [log_analytics_entity_id][crate::model::ListEntityAssociationsRequest::log_analytics_entity_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_entity_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_analytics_entity_id = v.into();
            self
        }

        /// Sets the value of [direct_associated_entity_type_name][crate::model::ListEntityAssociationsRequest::direct_associated_entity_type_name].
        pub fn set_direct_associated_entity_type_name<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            self.0.request.direct_associated_entity_type_name =
                v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [association_depth][crate::model::ListEntityAssociationsRequest::association_depth].
        pub fn set_association_depth<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.association_depth = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [association_depth][crate::model::ListEntityAssociationsRequest::association_depth].
        pub fn set_or_clear_association_depth<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.association_depth = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListEntityAssociationsRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListEntityAssociationsRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListEntityAssociationsRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_entity_associations_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListEntityAssociationsRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_entity_associations_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListEntityAssociationsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListEntityAssociationsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListEntityAssociationsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListEntityAssociationsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListEntityAssociationsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListEntityAssociationsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListEntityAssociations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_log_analytics_entity_topology][crate::client::LogAnalytics::list_log_analytics_entity_topology] calls.
    #[derive(Clone, Debug)]
    pub struct ListLogAnalyticsEntityTopology(
        RequestBuilder<crate::model::ListLogAnalyticsEntityTopologyRequest>,
    );

    impl ListLogAnalyticsEntityTopology {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLogAnalyticsEntityTopologyRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityTopologyCollection>> {
            (*self.0.stub)
                .list_log_analytics_entity_topology(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsEntityTopologyCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsEntityTopologyCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListLogAnalyticsEntityTopologyRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [log_analytics_entity_id][crate::model::ListLogAnalyticsEntityTopologyRequest::log_analytics_entity_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_entity_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_analytics_entity_id = v.into();
            self
        }

        /// Sets the value of [lifecycle_state][crate::model::ListLogAnalyticsEntityTopologyRequest::lifecycle_state].
        pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::EntityLifecycleStates>,
        {
            self.0.request.lifecycle_state = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [lifecycle_state][crate::model::ListLogAnalyticsEntityTopologyRequest::lifecycle_state].
        pub fn set_or_clear_lifecycle_state<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::EntityLifecycleStates>,
        {
            self.0.request.lifecycle_state = v.map(|x| x.into());
            self
        }

        /// Sets the value of [metadata_equals][crate::model::ListLogAnalyticsEntityTopologyRequest::metadata_equals].
        pub fn set_metadata_equals<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            self.0.request.metadata_equals = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [context][crate::model::ListLogAnalyticsEntityTopologyRequest::context].
        pub fn set_context<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.context = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [context][crate::model::ListLogAnalyticsEntityTopologyRequest::context].
        pub fn set_or_clear_context<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.context = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListLogAnalyticsEntityTopologyRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListLogAnalyticsEntityTopologyRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListLogAnalyticsEntityTopologyRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_log_analytics_entity_topology_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListLogAnalyticsEntityTopologyRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_log_analytics_entity_topology_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListLogAnalyticsEntityTopologyRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListLogAnalyticsEntityTopologyRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListLogAnalyticsEntityTopologyRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListLogAnalyticsEntityTopologyRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListLogAnalyticsEntityTopologyRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListLogAnalyticsEntityTopologyRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLogAnalyticsEntityTopology {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::create_log_analytics_entity_type][crate::client::LogAnalytics::create_log_analytics_entity_type] calls.
    #[derive(Clone, Debug)]
    pub struct CreateLogAnalyticsEntityType(
        RequestBuilder<crate::model::CreateLogAnalyticsEntityTypeRequest>,
    );

    impl CreateLogAnalyticsEntityType {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateLogAnalyticsEntityTypeRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .create_log_analytics_entity_type(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::CreateLogAnalyticsEntityTypeRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::CreateLogAnalyticsEntityTypeRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::CreateLogAnalyticsEntityTypeRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::CreateLogAnalyticsEntityTypeRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::CreateLogAnalyticsEntityTypeRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [create_log_analytics_entity_type_details][crate::model::CreateLogAnalyticsEntityTypeRequest::create_log_analytics_entity_type_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_create_log_analytics_entity_type_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::CreateLogAnalyticsEntityTypeDetails>,
        {
            self.0.request.create_log_analytics_entity_type_details =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [create_log_analytics_entity_type_details][crate::model::CreateLogAnalyticsEntityTypeRequest::create_log_analytics_entity_type_details].
        pub fn set_or_clear_create_log_analytics_entity_type_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::CreateLogAnalyticsEntityTypeDetails>,
        {
            self.0.request.create_log_analytics_entity_type_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateLogAnalyticsEntityType {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_log_analytics_entity_type][crate::client::LogAnalytics::get_log_analytics_entity_type] calls.
    #[derive(Clone, Debug)]
    pub struct GetLogAnalyticsEntityType(
        RequestBuilder<crate::model::GetLogAnalyticsEntityTypeRequest>,
    );

    impl GetLogAnalyticsEntityType {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogAnalyticsEntityTypeRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityType>> {
            (*self.0.stub)
                .get_log_analytics_entity_type(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetLogAnalyticsEntityTypeRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [entity_type_name][crate::model::GetLogAnalyticsEntityTypeRequest::entity_type_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_entity_type_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.entity_type_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLogAnalyticsEntityTypeRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetLogAnalyticsEntityTypeRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogAnalyticsEntityType {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_log_analytics_entity_types][crate::client::LogAnalytics::list_log_analytics_entity_types] calls.
    #[derive(Clone, Debug)]
    pub struct ListLogAnalyticsEntityTypes(
        RequestBuilder<crate::model::ListLogAnalyticsEntityTypesRequest>,
    );

    impl ListLogAnalyticsEntityTypes {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLogAnalyticsEntityTypesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityTypeCollection>> {
            (*self.0.stub)
                .list_log_analytics_entity_types(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsEntityTypeCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsEntityTypeCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListLogAnalyticsEntityTypesRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [name][crate::model::ListLogAnalyticsEntityTypesRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::ListLogAnalyticsEntityTypesRequest::name].
        pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [name_contains][crate::model::ListLogAnalyticsEntityTypesRequest::name_contains].
        pub fn set_name_contains<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.name_contains = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name_contains][crate::model::ListLogAnalyticsEntityTypesRequest::name_contains].
        pub fn set_or_clear_name_contains<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.name_contains = v.map(|x| x.into());
            self
        }

        /// Sets the value of [cloud_type][crate::model::ListLogAnalyticsEntityTypesRequest::cloud_type].
        pub fn set_cloud_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::EntityCloudType>,
        {
            self.0.request.cloud_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [cloud_type][crate::model::ListLogAnalyticsEntityTypesRequest::cloud_type].
        pub fn set_or_clear_cloud_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::EntityCloudType>,
        {
            self.0.request.cloud_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [lifecycle_state][crate::model::ListLogAnalyticsEntityTypesRequest::lifecycle_state].
        pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::EntityLifecycleStates>,
        {
            self.0.request.lifecycle_state = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [lifecycle_state][crate::model::ListLogAnalyticsEntityTypesRequest::lifecycle_state].
        pub fn set_or_clear_lifecycle_state<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::EntityLifecycleStates>,
        {
            self.0.request.lifecycle_state = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListLogAnalyticsEntityTypesRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListLogAnalyticsEntityTypesRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListLogAnalyticsEntityTypesRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_log_analytics_entity_types_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListLogAnalyticsEntityTypesRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_log_analytics_entity_types_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListLogAnalyticsEntityTypesRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListLogAnalyticsEntityTypesRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListLogAnalyticsEntityTypesRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListLogAnalyticsEntityTypesRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListLogAnalyticsEntityTypesRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListLogAnalyticsEntityTypesRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLogAnalyticsEntityTypes {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::update_log_analytics_entity_type][crate::client::LogAnalytics::update_log_analytics_entity_type] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateLogAnalyticsEntityType(
        RequestBuilder<crate::model::UpdateLogAnalyticsEntityTypeRequest>,
    );

    impl UpdateLogAnalyticsEntityType {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateLogAnalyticsEntityTypeRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .update_log_analytics_entity_type(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpdateLogAnalyticsEntityTypeRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [entity_type_name][crate::model::UpdateLogAnalyticsEntityTypeRequest::entity_type_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_entity_type_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.entity_type_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateLogAnalyticsEntityTypeRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::UpdateLogAnalyticsEntityTypeRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateLogAnalyticsEntityTypeRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::UpdateLogAnalyticsEntityTypeRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }

        /// Sets the value of [update_log_analytics_entity_type_details][crate::model::UpdateLogAnalyticsEntityTypeRequest::update_log_analytics_entity_type_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_update_log_analytics_entity_type_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::UpdateLogAnalyticsEntityTypeDetails>,
        {
            self.0.request.update_log_analytics_entity_type_details =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [update_log_analytics_entity_type_details][crate::model::UpdateLogAnalyticsEntityTypeRequest::update_log_analytics_entity_type_details].
        pub fn set_or_clear_update_log_analytics_entity_type_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::UpdateLogAnalyticsEntityTypeDetails>,
        {
            self.0.request.update_log_analytics_entity_type_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateLogAnalyticsEntityType {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_log_analytics_entity_type][crate::client::LogAnalytics::delete_log_analytics_entity_type] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteLogAnalyticsEntityType(
        RequestBuilder<crate::model::DeleteLogAnalyticsEntityTypeRequest>,
    );

    impl DeleteLogAnalyticsEntityType {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteLogAnalyticsEntityTypeRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_log_analytics_entity_type(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteLogAnalyticsEntityTypeRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [entity_type_name][crate::model::DeleteLogAnalyticsEntityTypeRequest::entity_type_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_entity_type_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.entity_type_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteLogAnalyticsEntityTypeRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::DeleteLogAnalyticsEntityTypeRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteLogAnalyticsEntityTypeRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::DeleteLogAnalyticsEntityTypeRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteLogAnalyticsEntityType {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::create_log_analytics_log_group][crate::client::LogAnalytics::create_log_analytics_log_group] calls.
    #[derive(Clone, Debug)]
    pub struct CreateLogAnalyticsLogGroup(
        RequestBuilder<crate::model::CreateLogAnalyticsLogGroupRequest>,
    );

    impl CreateLogAnalyticsLogGroup {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateLogAnalyticsLogGroupRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLogGroup>> {
            (*self.0.stub)
                .create_log_analytics_log_group(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::CreateLogAnalyticsLogGroupRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::CreateLogAnalyticsLogGroupRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::CreateLogAnalyticsLogGroupRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::CreateLogAnalyticsLogGroupRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::CreateLogAnalyticsLogGroupRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [create_log_analytics_log_group_details][crate::model::CreateLogAnalyticsLogGroupRequest::create_log_analytics_log_group_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_create_log_analytics_log_group_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::CreateLogAnalyticsLogGroupDetails>,
        {
            self.0.request.create_log_analytics_log_group_details =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [create_log_analytics_log_group_details][crate::model::CreateLogAnalyticsLogGroupRequest::create_log_analytics_log_group_details].
        pub fn set_or_clear_create_log_analytics_log_group_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::CreateLogAnalyticsLogGroupDetails>,
        {
            self.0.request.create_log_analytics_log_group_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateLogAnalyticsLogGroup {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_log_analytics_log_group][crate::client::LogAnalytics::get_log_analytics_log_group] calls.
    #[derive(Clone, Debug)]
    pub struct GetLogAnalyticsLogGroup(
        RequestBuilder<crate::model::GetLogAnalyticsLogGroupRequest>,
    );

    impl GetLogAnalyticsLogGroup {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogAnalyticsLogGroupRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLogGroup>> {
            (*self.0.stub)
                .get_log_analytics_log_group(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetLogAnalyticsLogGroupRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [log_analytics_log_group_id][crate::model::GetLogAnalyticsLogGroupRequest::log_analytics_log_group_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_log_group_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_analytics_log_group_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLogAnalyticsLogGroupRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetLogAnalyticsLogGroupRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogAnalyticsLogGroup {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_log_analytics_log_groups][crate::client::LogAnalytics::list_log_analytics_log_groups] calls.
    #[derive(Clone, Debug)]
    pub struct ListLogAnalyticsLogGroups(
        RequestBuilder<crate::model::ListLogAnalyticsLogGroupsRequest>,
    );

    impl ListLogAnalyticsLogGroups {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLogAnalyticsLogGroupsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLogGroupSummaryCollection>> {
            (*self.0.stub)
                .list_log_analytics_log_groups(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsLogGroupSummaryCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsLogGroupSummaryCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListLogAnalyticsLogGroupsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListLogAnalyticsLogGroupsRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.compartment_id = v.into();
            self
        }

        /// Sets the value of [display_name][crate::model::ListLogAnalyticsLogGroupsRequest::display_name].
        pub fn set_display_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.display_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [display_name][crate::model::ListLogAnalyticsLogGroupsRequest::display_name].
        pub fn set_or_clear_display_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.display_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListLogAnalyticsLogGroupsRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListLogAnalyticsLogGroupsRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListLogAnalyticsLogGroupsRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_log_analytics_log_groups_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListLogAnalyticsLogGroupsRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_log_analytics_log_groups_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListLogAnalyticsLogGroupsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListLogAnalyticsLogGroupsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListLogAnalyticsLogGroupsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListLogAnalyticsLogGroupsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListLogAnalyticsLogGroupsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListLogAnalyticsLogGroupsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLogAnalyticsLogGroups {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::update_log_analytics_log_group][crate::client::LogAnalytics::update_log_analytics_log_group] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateLogAnalyticsLogGroup(
        RequestBuilder<crate::model::UpdateLogAnalyticsLogGroupRequest>,
    );

    impl UpdateLogAnalyticsLogGroup {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateLogAnalyticsLogGroupRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLogGroup>> {
            (*self.0.stub)
                .update_log_analytics_log_group(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpdateLogAnalyticsLogGroupRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [log_analytics_log_group_id][crate::model::UpdateLogAnalyticsLogGroupRequest::log_analytics_log_group_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_log_group_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_analytics_log_group_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateLogAnalyticsLogGroupRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::UpdateLogAnalyticsLogGroupRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateLogAnalyticsLogGroupRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::UpdateLogAnalyticsLogGroupRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }

        /// Sets the value of [update_log_analytics_log_group_details][crate::model::UpdateLogAnalyticsLogGroupRequest::update_log_analytics_log_group_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_update_log_analytics_log_group_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::UpdateLogAnalyticsLogGroupDetails>,
        {
            self.0.request.update_log_analytics_log_group_details =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [update_log_analytics_log_group_details][crate::model::UpdateLogAnalyticsLogGroupRequest::update_log_analytics_log_group_details].
        pub fn set_or_clear_update_log_analytics_log_group_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::UpdateLogAnalyticsLogGroupDetails>,
        {
            self.0.request.update_log_analytics_log_group_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateLogAnalyticsLogGroup {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_log_analytics_log_group][crate::client::LogAnalytics::delete_log_analytics_log_group] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteLogAnalyticsLogGroup(
        RequestBuilder<crate::model::DeleteLogAnalyticsLogGroupRequest>,
    );

    impl DeleteLogAnalyticsLogGroup {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteLogAnalyticsLogGroupRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_log_analytics_log_group(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteLogAnalyticsLogGroupRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [log_analytics_log_group_id][crate::model::DeleteLogAnalyticsLogGroupRequest::log_analytics_log_group_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_log_group_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_analytics_log_group_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteLogAnalyticsLogGroupRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::DeleteLogAnalyticsLogGroupRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteLogAnalyticsLogGroupRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::DeleteLogAnalyticsLogGroupRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteLogAnalyticsLogGroup {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::change_log_analytics_log_group_compartment][crate::client::LogAnalytics::change_log_analytics_log_group_compartment] calls.
    #[derive(Clone, Debug)]
    pub struct ChangeLogAnalyticsLogGroupCompartment(
        RequestBuilder<crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest>,
    );

    impl ChangeLogAnalyticsLogGroupCompartment {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .change_log_analytics_log_group_compartment(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [log_analytics_log_group_id][crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest::log_analytics_log_group_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_log_group_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_analytics_log_group_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }

        /// Sets the value of [change_log_analytics_log_group_compartment_details][crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest::change_log_analytics_log_group_compartment_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_change_log_analytics_log_group_compartment_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ChangeLogAnalyticsLogGroupCompartmentDetails>,
        {
            self.0.request.change_log_analytics_log_group_compartment_details =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [change_log_analytics_log_group_compartment_details][crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest::change_log_analytics_log_group_compartment_details].
        pub fn set_or_clear_change_log_analytics_log_group_compartment_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::ChangeLogAnalyticsLogGroupCompartmentDetails>,
        {
            self.0.request.change_log_analytics_log_group_compartment_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ChangeLogAnalyticsLogGroupCompartment {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_log_analytics_log_groups_summary][crate::client::LogAnalytics::get_log_analytics_log_groups_summary] calls.
    #[derive(Clone, Debug)]
    pub struct GetLogAnalyticsLogGroupsSummary(
        RequestBuilder<crate::model::GetLogAnalyticsLogGroupsSummaryRequest>,
    );

    impl GetLogAnalyticsLogGroupsSummary {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogAnalyticsLogGroupsSummaryRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogGroupSummaryReport>> {
            (*self.0.stub)
                .get_log_analytics_log_groups_summary(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetLogAnalyticsLogGroupsSummaryRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::GetLogAnalyticsLogGroupsSummaryRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.compartment_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLogAnalyticsLogGroupsSummaryRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetLogAnalyticsLogGroupsSummaryRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogAnalyticsLogGroupsSummary {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::create_log_analytics_object_collection_rule][crate::client::LogAnalytics::create_log_analytics_object_collection_rule] calls.
    #[derive(Clone, Debug)]
    pub struct CreateLogAnalyticsObjectCollectionRule(
        RequestBuilder<crate::model::CreateLogAnalyticsObjectCollectionRuleRequest>,
    );

    impl CreateLogAnalyticsObjectCollectionRule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateLogAnalyticsObjectCollectionRuleRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRule>> {
            (*self.0.stub)
                .create_log_analytics_object_collection_rule(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::CreateLogAnalyticsObjectCollectionRuleRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::CreateLogAnalyticsObjectCollectionRuleRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::CreateLogAnalyticsObjectCollectionRuleRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::CreateLogAnalyticsObjectCollectionRuleRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::CreateLogAnalyticsObjectCollectionRuleRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [create_log_analytics_object_collection_rule_details][crate::model::CreateLogAnalyticsObjectCollectionRuleRequest::create_log_analytics_object_collection_rule_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_create_log_analytics_object_collection_rule_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::CreateLogAnalyticsObjectCollectionRuleDetails>,
        {
            self.0.request.create_log_analytics_object_collection_rule_details =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [create_log_analytics_object_collection_rule_details][crate::model::CreateLogAnalyticsObjectCollectionRuleRequest::create_log_analytics_object_collection_rule_details].
        pub fn set_or_clear_create_log_analytics_object_collection_rule_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::CreateLogAnalyticsObjectCollectionRuleDetails>,
        {
            self.0.request.create_log_analytics_object_collection_rule_details =
                v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateLogAnalyticsObjectCollectionRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_log_analytics_object_collection_rule][crate::client::LogAnalytics::get_log_analytics_object_collection_rule] calls.
    #[derive(Clone, Debug)]
    pub struct GetLogAnalyticsObjectCollectionRule(
        RequestBuilder<crate::model::GetLogAnalyticsObjectCollectionRuleRequest>,
    );

    impl GetLogAnalyticsObjectCollectionRule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogAnalyticsObjectCollectionRuleRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRule>> {
            (*self.0.stub)
                .get_log_analytics_object_collection_rule(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetLogAnalyticsObjectCollectionRuleRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [log_analytics_object_collection_rule_id][crate::model::GetLogAnalyticsObjectCollectionRuleRequest::log_analytics_object_collection_rule_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_object_collection_rule_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_analytics_object_collection_rule_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLogAnalyticsObjectCollectionRuleRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetLogAnalyticsObjectCollectionRuleRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogAnalyticsObjectCollectionRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_log_analytics_object_collection_rules][crate::client::LogAnalytics::list_log_analytics_object_collection_rules] calls.
    #[derive(Clone, Debug)]
    pub struct ListLogAnalyticsObjectCollectionRules(
        RequestBuilder<crate::model::ListLogAnalyticsObjectCollectionRulesRequest>,
    );

    impl ListLogAnalyticsObjectCollectionRules {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLogAnalyticsObjectCollectionRulesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<
            gax::response::Response<crate::model::LogAnalyticsObjectCollectionRuleCollection>,
        > {
            (*self.0.stub)
                .list_log_analytics_object_collection_rules(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsObjectCollectionRuleCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsObjectCollectionRuleCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.compartment_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::name].
        pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [lifecycle_state][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::lifecycle_state].
        pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ObjectCollectionRuleLifecycleStates>,
        {
            self.0.request.lifecycle_state = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [lifecycle_state][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::lifecycle_state].
        pub fn set_or_clear_lifecycle_state<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ObjectCollectionRuleLifecycleStates>,
        {
            self.0.request.lifecycle_state = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<
                crate::model::list_log_analytics_object_collection_rules_request::SortBy,
            >,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<
                crate::model::list_log_analytics_object_collection_rules_request::SortBy,
            >,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLogAnalyticsObjectCollectionRules {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::update_log_analytics_object_collection_rule][crate::client::LogAnalytics::update_log_analytics_object_collection_rule] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateLogAnalyticsObjectCollectionRule(
        RequestBuilder<crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest>,
    );

    impl UpdateLogAnalyticsObjectCollectionRule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRule>> {
            (*self.0.stub)
                .update_log_analytics_object_collection_rule(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [log_analytics_object_collection_rule_id][crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest::log_analytics_object_collection_rule_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_object_collection_rule_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_analytics_object_collection_rule_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }

        /// Sets the value of [update_log_analytics_object_collection_rule_details][crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest::update_log_analytics_object_collection_rule_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_update_log_analytics_object_collection_rule_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::UpdateLogAnalyticsObjectCollectionRuleDetails>,
        {
            self.0.request.update_log_analytics_object_collection_rule_details =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [update_log_analytics_object_collection_rule_details][crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest::update_log_analytics_object_collection_rule_details].
        pub fn set_or_clear_update_log_analytics_object_collection_rule_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::UpdateLogAnalyticsObjectCollectionRuleDetails>,
        {
            self.0.request.update_log_analytics_object_collection_rule_details =
                v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateLogAnalyticsObjectCollectionRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_log_analytics_object_collection_rule][crate::client::LogAnalytics::delete_log_analytics_object_collection_rule] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteLogAnalyticsObjectCollectionRule(
        RequestBuilder<crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest>,
    );

    impl DeleteLogAnalyticsObjectCollectionRule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_log_analytics_object_collection_rule(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [log_analytics_object_collection_rule_id][crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest::log_analytics_object_collection_rule_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_object_collection_rule_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_analytics_object_collection_rule_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteLogAnalyticsObjectCollectionRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::change_log_analytics_object_collection_rule_compartment][crate::client::LogAnalytics::change_log_analytics_object_collection_rule_compartment] calls.
    #[derive(Clone, Debug)]
    pub struct ChangeLogAnalyticsObjectCollectionRuleCompartment(
        RequestBuilder<crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest>,
    );

    impl ChangeLogAnalyticsObjectCollectionRuleCompartment {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<
            V: Into<crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest>,
        >(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .change_log_analytics_object_collection_rule_compartment(
                    self.0.request,
                    self.0.options,
                )
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [log_analytics_object_collection_rule_id][crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest::log_analytics_object_collection_rule_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_object_collection_rule_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_analytics_object_collection_rule_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }

        /// Sets the value of [change_log_analytics_object_collection_rule_compartment_details][crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest::change_log_analytics_object_collection_rule_compartment_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_change_log_analytics_object_collection_rule_compartment_details<T>(
            mut self,
            v: T,
        ) -> Self
        where
            T: std::convert::Into<
                crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentDetails,
            >,
        {
            self.0.request.change_log_analytics_object_collection_rule_compartment_details =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [change_log_analytics_object_collection_rule_compartment_details][crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest::change_log_analytics_object_collection_rule_compartment_details].
        pub fn set_or_clear_change_log_analytics_object_collection_rule_compartment_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<
                crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentDetails,
            >,
        {
            self.0.request.change_log_analytics_object_collection_rule_compartment_details =
                v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder
        for ChangeLogAnalyticsObjectCollectionRuleCompartment
    {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::create_ingest_time_rule][crate::client::LogAnalytics::create_ingest_time_rule] calls.
    #[derive(Clone, Debug)]
    pub struct CreateIngestTimeRule(RequestBuilder<crate::model::CreateIngestTimeRuleRequest>);

    impl CreateIngestTimeRule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateIngestTimeRuleRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::IngestTimeRule>> {
            (*self.0.stub)
                .create_ingest_time_rule(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::CreateIngestTimeRuleRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::CreateIngestTimeRuleRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::CreateIngestTimeRuleRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::CreateIngestTimeRuleRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::CreateIngestTimeRuleRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [create_ingest_time_rule_details][crate::model::CreateIngestTimeRuleRequest::create_ingest_time_rule_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_create_ingest_time_rule_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::CreateIngestTimeRuleDetails>,
        {
            self.0.request.create_ingest_time_rule_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [create_ingest_time_rule_details][crate::model::CreateIngestTimeRuleRequest::create_ingest_time_rule_details].
        pub fn set_or_clear_create_ingest_time_rule_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::CreateIngestTimeRuleDetails>,
        {
            self.0.request.create_ingest_time_rule_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateIngestTimeRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_ingest_time_rule][crate::client::LogAnalytics::get_ingest_time_rule] calls.
    #[derive(Clone, Debug)]
    pub struct GetIngestTimeRule(RequestBuilder<crate::model::GetIngestTimeRuleRequest>);

    impl GetIngestTimeRule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetIngestTimeRuleRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::IngestTimeRule>> {
            (*self.0.stub)
                .get_ingest_time_rule(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetIngestTimeRuleRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [ingest_time_rule_id][crate::model::GetIngestTimeRuleRequest::ingest_time_rule_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_ingest_time_rule_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.ingest_time_rule_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetIngestTimeRuleRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetIngestTimeRuleRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetIngestTimeRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_ingest_time_rules][crate::client::LogAnalytics::list_ingest_time_rules] calls.
    #[derive(Clone, Debug)]
    pub struct ListIngestTimeRules(RequestBuilder<crate::model::ListIngestTimeRulesRequest>);

    impl ListIngestTimeRules {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListIngestTimeRulesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::IngestTimeRuleSummaryCollection>> {
            (*self.0.stub)
                .list_ingest_time_rules(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::IngestTimeRuleSummaryCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::IngestTimeRuleSummaryCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListIngestTimeRulesRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListIngestTimeRulesRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.compartment_id = v.into();
            self
        }

        /// Sets the value of [display_name][crate::model::ListIngestTimeRulesRequest::display_name].
        pub fn set_display_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.display_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [display_name][crate::model::ListIngestTimeRulesRequest::display_name].
        pub fn set_or_clear_display_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.display_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [lifecycle_state][crate::model::ListIngestTimeRulesRequest::lifecycle_state].
        pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ConcreteLifecycleState>,
        {
            self.0.request.lifecycle_state = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [lifecycle_state][crate::model::ListIngestTimeRulesRequest::lifecycle_state].
        pub fn set_or_clear_lifecycle_state<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ConcreteLifecycleState>,
        {
            self.0.request.lifecycle_state = v.map(|x| x.into());
            self
        }

        /// Sets the value of [condition_kind][crate::model::ListIngestTimeRulesRequest::condition_kind].
        pub fn set_condition_kind<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_ingest_time_rules_request::ConditionKind>,
        {
            self.0.request.condition_kind = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [condition_kind][crate::model::ListIngestTimeRulesRequest::condition_kind].
        pub fn set_or_clear_condition_kind<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_ingest_time_rules_request::ConditionKind>,
        {
            self.0.request.condition_kind = v.map(|x| x.into());
            self
        }

        /// Sets the value of [field_name][crate::model::ListIngestTimeRulesRequest::field_name].
        pub fn set_field_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.field_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [field_name][crate::model::ListIngestTimeRulesRequest::field_name].
        pub fn set_or_clear_field_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.field_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [field_value][crate::model::ListIngestTimeRulesRequest::field_value].
        pub fn set_field_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.field_value = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [field_value][crate::model::ListIngestTimeRulesRequest::field_value].
        pub fn set_or_clear_field_value<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.field_value = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListIngestTimeRulesRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListIngestTimeRulesRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListIngestTimeRulesRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_ingest_time_rules_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListIngestTimeRulesRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_ingest_time_rules_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListIngestTimeRulesRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListIngestTimeRulesRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListIngestTimeRulesRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListIngestTimeRulesRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListIngestTimeRulesRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListIngestTimeRulesRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListIngestTimeRules {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::update_ingest_time_rule][crate::client::LogAnalytics::update_ingest_time_rule] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateIngestTimeRule(RequestBuilder<crate::model::UpdateIngestTimeRuleRequest>);

    impl UpdateIngestTimeRule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateIngestTimeRuleRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::IngestTimeRule>> {
            (*self.0.stub)
                .update_ingest_time_rule(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpdateIngestTimeRuleRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [ingest_time_rule_id][crate::model::UpdateIngestTimeRuleRequest::ingest_time_rule_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_ingest_time_rule_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.ingest_time_rule_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateIngestTimeRuleRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::UpdateIngestTimeRuleRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateIngestTimeRuleRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::UpdateIngestTimeRuleRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }

        /// Sets the value of [update_ingest_time_rule_details][crate::model::UpdateIngestTimeRuleRequest::update_ingest_time_rule_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_update_ingest_time_rule_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::UpdateIngestTimeRuleDetails>,
        {
            self.0.request.update_ingest_time_rule_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [update_ingest_time_rule_details][crate::model::UpdateIngestTimeRuleRequest::update_ingest_time_rule_details].
        pub fn set_or_clear_update_ingest_time_rule_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::UpdateIngestTimeRuleDetails>,
        {
            self.0.request.update_ingest_time_rule_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateIngestTimeRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_ingest_time_rule][crate::client::LogAnalytics::delete_ingest_time_rule] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteIngestTimeRule(RequestBuilder<crate::model::DeleteIngestTimeRuleRequest>);

    impl DeleteIngestTimeRule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteIngestTimeRuleRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_ingest_time_rule(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteIngestTimeRuleRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [ingest_time_rule_id][crate::model::DeleteIngestTimeRuleRequest::ingest_time_rule_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_ingest_time_rule_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.ingest_time_rule_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteIngestTimeRuleRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::DeleteIngestTimeRuleRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteIngestTimeRuleRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::DeleteIngestTimeRuleRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteIngestTimeRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::enable_ingest_time_rule][crate::client::LogAnalytics::enable_ingest_time_rule] calls.
    #[derive(Clone, Debug)]
    pub struct EnableIngestTimeRule(RequestBuilder<crate::model::EnableIngestTimeRuleRequest>);

    impl EnableIngestTimeRule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::EnableIngestTimeRuleRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .enable_ingest_time_rule(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::EnableIngestTimeRuleRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [ingest_time_rule_id][crate::model::EnableIngestTimeRuleRequest::ingest_time_rule_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_ingest_time_rule_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.ingest_time_rule_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::EnableIngestTimeRuleRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::EnableIngestTimeRuleRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::EnableIngestTimeRuleRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::EnableIngestTimeRuleRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for EnableIngestTimeRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::disable_ingest_time_rule][crate::client::LogAnalytics::disable_ingest_time_rule] calls.
    #[derive(Clone, Debug)]
    pub struct DisableIngestTimeRule(RequestBuilder<crate::model::DisableIngestTimeRuleRequest>);

    impl DisableIngestTimeRule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DisableIngestTimeRuleRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .disable_ingest_time_rule(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DisableIngestTimeRuleRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [ingest_time_rule_id][crate::model::DisableIngestTimeRuleRequest::ingest_time_rule_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_ingest_time_rule_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.ingest_time_rule_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DisableIngestTimeRuleRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::DisableIngestTimeRuleRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DisableIngestTimeRuleRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::DisableIngestTimeRuleRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DisableIngestTimeRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::change_ingest_time_rule_compartment][crate::client::LogAnalytics::change_ingest_time_rule_compartment] calls.
    #[derive(Clone, Debug)]
    pub struct ChangeIngestTimeRuleCompartment(
        RequestBuilder<crate::model::ChangeIngestTimeRuleCompartmentRequest>,
    );

    impl ChangeIngestTimeRuleCompartment {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ChangeIngestTimeRuleCompartmentRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .change_ingest_time_rule_compartment(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ChangeIngestTimeRuleCompartmentRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [ingest_time_rule_id][crate::model::ChangeIngestTimeRuleCompartmentRequest::ingest_time_rule_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_ingest_time_rule_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.ingest_time_rule_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ChangeIngestTimeRuleCompartmentRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ChangeIngestTimeRuleCompartmentRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::ChangeIngestTimeRuleCompartmentRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::ChangeIngestTimeRuleCompartmentRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }

        /// Sets the value of [change_ingest_time_rule_compartment_details][crate::model::ChangeIngestTimeRuleCompartmentRequest::change_ingest_time_rule_compartment_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_change_ingest_time_rule_compartment_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ChangeIngestTimeRuleCompartmentDetails>,
        {
            self.0.request.change_ingest_time_rule_compartment_details =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [change_ingest_time_rule_compartment_details][crate::model::ChangeIngestTimeRuleCompartmentRequest::change_ingest_time_rule_compartment_details].
        pub fn set_or_clear_change_ingest_time_rule_compartment_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::ChangeIngestTimeRuleCompartmentDetails>,
        {
            self.0.request.change_ingest_time_rule_compartment_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ChangeIngestTimeRuleCompartment {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_rules][crate::client::LogAnalytics::list_rules] calls.
    #[derive(Clone, Debug)]
    pub struct ListRules(RequestBuilder<crate::model::ListRulesRequest>);

    impl ListRules {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListRulesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::RuleSummaryCollection>> {
            (*self.0.stub)
                .list_rules(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::RuleSummaryCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::RuleSummaryCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListRulesRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListRulesRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.compartment_id = v.into();
            self
        }

        /// Sets the value of [display_name][crate::model::ListRulesRequest::display_name].
        pub fn set_display_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.display_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [display_name][crate::model::ListRulesRequest::display_name].
        pub fn set_or_clear_display_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.display_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [kind][crate::model::ListRulesRequest::kind].
        pub fn set_kind<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_rules_request::Kind>,
        {
            self.0.request.kind = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [kind][crate::model::ListRulesRequest::kind].
        pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_rules_request::Kind>,
        {
            self.0.request.kind = v.map(|x| x.into());
            self
        }

        /// Sets the value of [target_service][crate::model::ListRulesRequest::target_service].
        pub fn set_target_service<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.target_service = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [target_service][crate::model::ListRulesRequest::target_service].
        pub fn set_or_clear_target_service<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.target_service = v.map(|x| x.into());
            self
        }

        /// Sets the value of [lifecycle_state][crate::model::ListRulesRequest::lifecycle_state].
        pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ConcreteLifecycleState>,
        {
            self.0.request.lifecycle_state = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [lifecycle_state][crate::model::ListRulesRequest::lifecycle_state].
        pub fn set_or_clear_lifecycle_state<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ConcreteLifecycleState>,
        {
            self.0.request.lifecycle_state = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListRulesRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListRulesRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListRulesRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_rules_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListRulesRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_rules_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListRulesRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListRulesRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListRulesRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListRulesRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListRulesRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListRulesRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListRules {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_rules_summary][crate::client::LogAnalytics::get_rules_summary] calls.
    #[derive(Clone, Debug)]
    pub struct GetRulesSummary(RequestBuilder<crate::model::GetRulesSummaryRequest>);

    impl GetRulesSummary {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetRulesSummaryRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::RuleSummaryReport>> {
            (*self.0.stub)
                .get_rules_summary(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetRulesSummaryRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::GetRulesSummaryRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.compartment_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetRulesSummaryRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetRulesSummaryRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetRulesSummary {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_fields][crate::client::LogAnalytics::list_fields] calls.
    #[derive(Clone, Debug)]
    pub struct ListFields(RequestBuilder<crate::model::ListFieldsRequest>);

    impl ListFields {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListFieldsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsFieldCollection>> {
            (*self.0.stub)
                .list_fields(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsFieldCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsFieldCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListFieldsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [is_match_all][crate::model::ListFieldsRequest::is_match_all].
        pub fn set_is_match_all<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_match_all = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_match_all][crate::model::ListFieldsRequest::is_match_all].
        pub fn set_or_clear_is_match_all<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_match_all = v.map(|x| x.into());
            self
        }

        /// Sets the value of [source_ids][crate::model::ListFieldsRequest::source_ids].
        pub fn set_source_ids<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_ids = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [source_ids][crate::model::ListFieldsRequest::source_ids].
        pub fn set_or_clear_source_ids<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.source_ids = v.map(|x| x.into());
            self
        }

        /// Sets the value of [source_names][crate::model::ListFieldsRequest::source_names].
        pub fn set_source_names<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.source_names = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [source_names][crate::model::ListFieldsRequest::source_names].
        pub fn set_or_clear_source_names<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.source_names = v.map(|x| x.into());
            self
        }

        /// Sets the value of [parser_type][crate::model::ListFieldsRequest::parser_type].
        pub fn set_parser_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_fields_request::ParserType>,
        {
            self.0.request.parser_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [parser_type][crate::model::ListFieldsRequest::parser_type].
        pub fn set_or_clear_parser_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_fields_request::ParserType>,
        {
            self.0.request.parser_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [parser_ids][crate::model::ListFieldsRequest::parser_ids].
        pub fn set_parser_ids<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parser_ids = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [parser_ids][crate::model::ListFieldsRequest::parser_ids].
        pub fn set_or_clear_parser_ids<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.parser_ids = v.map(|x| x.into());
            self
        }

        /// Sets the value of [parser_names][crate::model::ListFieldsRequest::parser_names].
        pub fn set_parser_names<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.parser_names = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [parser_names][crate::model::ListFieldsRequest::parser_names].
        pub fn set_or_clear_parser_names<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.parser_names = v.map(|x| x.into());
            self
        }

        /// Sets the value of [is_include_parser][crate::model::ListFieldsRequest::is_include_parser].
        pub fn set_is_include_parser<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_include_parser = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_include_parser][crate::model::ListFieldsRequest::is_include_parser].
        pub fn set_or_clear_is_include_parser<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_include_parser = v.map(|x| x.into());
            self
        }

        /// Sets the value of [filter][crate::model::ListFieldsRequest::filter].
        pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter][crate::model::ListFieldsRequest::filter].
        pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListFieldsRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListFieldsRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListFieldsRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_fields_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListFieldsRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_fields_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListFieldsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListFieldsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListFieldsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListFieldsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListFieldsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListFieldsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListFields {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_field][crate::client::LogAnalytics::get_field] calls.
    #[derive(Clone, Debug)]
    pub struct GetField(RequestBuilder<crate::model::GetFieldRequest>);

    impl GetField {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetFieldRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsField>> {
            (*self.0.stub)
                .get_field(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetFieldRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [field_name][crate::model::GetFieldRequest::field_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_field_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.field_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetFieldRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetFieldRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetField {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::upsert_field][crate::client::LogAnalytics::upsert_field] calls.
    #[derive(Clone, Debug)]
    pub struct UpsertField(RequestBuilder<crate::model::UpsertFieldRequest>);

    impl UpsertField {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpsertFieldRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsField>> {
            (*self.0.stub)
                .upsert_field(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpsertFieldRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpsertFieldRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::UpsertFieldRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::UpsertFieldRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::UpsertFieldRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpsertFieldRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::UpsertFieldRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }

        /// Sets the value of [upsert_log_analytics_field_details][crate::model::UpsertFieldRequest::upsert_log_analytics_field_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_upsert_log_analytics_field_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::UpsertLogAnalyticsFieldDetails>,
        {
            self.0.request.upsert_log_analytics_field_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [upsert_log_analytics_field_details][crate::model::UpsertFieldRequest::upsert_log_analytics_field_details].
        pub fn set_or_clear_upsert_log_analytics_field_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::UpsertLogAnalyticsFieldDetails>,
        {
            self.0.request.upsert_log_analytics_field_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpsertField {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_field][crate::client::LogAnalytics::delete_field] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteField(RequestBuilder<crate::model::DeleteFieldRequest>);

    impl DeleteField {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteFieldRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_field(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteFieldRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [field_name][crate::model::DeleteFieldRequest::field_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_field_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.field_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteFieldRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::DeleteFieldRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteField {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_fields_summary][crate::client::LogAnalytics::get_fields_summary] calls.
    #[derive(Clone, Debug)]
    pub struct GetFieldsSummary(RequestBuilder<crate::model::GetFieldsSummaryRequest>);

    impl GetFieldsSummary {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetFieldsSummaryRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::FieldSummaryReport>> {
            (*self.0.stub)
                .get_fields_summary(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetFieldsSummaryRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [is_show_detail][crate::model::GetFieldsSummaryRequest::is_show_detail].
        pub fn set_is_show_detail<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_show_detail = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_show_detail][crate::model::GetFieldsSummaryRequest::is_show_detail].
        pub fn set_or_clear_is_show_detail<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_show_detail = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetFieldsSummaryRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetFieldsSummaryRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetFieldsSummary {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::extract_structured_log_field_paths][crate::client::LogAnalytics::extract_structured_log_field_paths] calls.
    #[derive(Clone, Debug)]
    pub struct ExtractStructuredLogFieldPaths(
        RequestBuilder<crate::model::ExtractStructuredLogFieldPathsRequest>,
    );

    impl ExtractStructuredLogFieldPaths {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ExtractStructuredLogFieldPathsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ExtractLogFieldResults>> {
            (*self.0.stub)
                .extract_structured_log_field_paths(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ExtractStructuredLogFieldPathsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [parser_type][crate::model::ExtractStructuredLogFieldPathsRequest::parser_type].
        pub fn set_parser_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<
                crate::model::extract_structured_log_field_paths_request::ParserType,
            >,
        {
            self.0.request.parser_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [parser_type][crate::model::ExtractStructuredLogFieldPathsRequest::parser_type].
        pub fn set_or_clear_parser_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<
                crate::model::extract_structured_log_field_paths_request::ParserType,
            >,
        {
            self.0.request.parser_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ExtractStructuredLogFieldPathsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ExtractStructuredLogFieldPathsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::ExtractStructuredLogFieldPathsRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::ExtractStructuredLogFieldPathsRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [log_analytics_parser][crate::model::ExtractStructuredLogFieldPathsRequest::log_analytics_parser].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_parser<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::LogAnalyticsParser>,
        {
            self.0.request.log_analytics_parser = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [log_analytics_parser][crate::model::ExtractStructuredLogFieldPathsRequest::log_analytics_parser].
        pub fn set_or_clear_log_analytics_parser<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::LogAnalyticsParser>,
        {
            self.0.request.log_analytics_parser = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ExtractStructuredLogFieldPaths {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::extract_structured_log_header_paths][crate::client::LogAnalytics::extract_structured_log_header_paths] calls.
    #[derive(Clone, Debug)]
    pub struct ExtractStructuredLogHeaderPaths(
        RequestBuilder<crate::model::ExtractStructuredLogHeaderPathsRequest>,
    );

    impl ExtractStructuredLogHeaderPaths {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ExtractStructuredLogHeaderPathsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ExtractLogHeaderResults>> {
            (*self.0.stub)
                .extract_structured_log_header_paths(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ExtractStructuredLogHeaderPathsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [parser_type][crate::model::ExtractStructuredLogHeaderPathsRequest::parser_type].
        pub fn set_parser_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<
                crate::model::extract_structured_log_header_paths_request::ParserType,
            >,
        {
            self.0.request.parser_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [parser_type][crate::model::ExtractStructuredLogHeaderPathsRequest::parser_type].
        pub fn set_or_clear_parser_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<
                crate::model::extract_structured_log_header_paths_request::ParserType,
            >,
        {
            self.0.request.parser_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ExtractStructuredLogHeaderPathsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ExtractStructuredLogHeaderPathsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::ExtractStructuredLogHeaderPathsRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::ExtractStructuredLogHeaderPathsRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [log_analytics_parser][crate::model::ExtractStructuredLogHeaderPathsRequest::log_analytics_parser].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_parser<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::LogAnalyticsParser>,
        {
            self.0.request.log_analytics_parser = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [log_analytics_parser][crate::model::ExtractStructuredLogHeaderPathsRequest::log_analytics_parser].
        pub fn set_or_clear_log_analytics_parser<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::LogAnalyticsParser>,
        {
            self.0.request.log_analytics_parser = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ExtractStructuredLogHeaderPaths {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::test_parser][crate::client::LogAnalytics::test_parser] calls.
    #[derive(Clone, Debug)]
    pub struct TestParser(RequestBuilder<crate::model::TestParserRequest>);

    impl TestParser {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::TestParserRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ParserTestResult>> {
            (*self.0.stub)
                .test_parser(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::TestParserRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [scope][crate::model::TestParserRequest::scope].
        pub fn set_scope<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::test_parser_request::Scope>,
        {
            self.0.request.scope = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [scope][crate::model::TestParserRequest::scope].
        pub fn set_or_clear_scope<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::test_parser_request::Scope>,
        {
            self.0.request.scope = v.map(|x| x.into());
            self
        }

        /// Sets the value of [req_origin_module][crate::model::TestParserRequest::req_origin_module].
        pub fn set_req_origin_module<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.req_origin_module = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [req_origin_module][crate::model::TestParserRequest::req_origin_module].
        pub fn set_or_clear_req_origin_module<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.req_origin_module = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::TestParserRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::TestParserRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::TestParserRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::TestParserRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [test_parser_payload_details][crate::model::TestParserRequest::test_parser_payload_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_test_parser_payload_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::TestParserPayloadDetails>,
        {
            self.0.request.test_parser_payload_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [test_parser_payload_details][crate::model::TestParserRequest::test_parser_payload_details].
        pub fn set_or_clear_test_parser_payload_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::TestParserPayloadDetails>,
        {
            self.0.request.test_parser_payload_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for TestParser {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_labels][crate::client::LogAnalytics::list_labels] calls.
    #[derive(Clone, Debug)]
    pub struct ListLabels(RequestBuilder<crate::model::ListLabelsRequest>);

    impl ListLabels {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLabelsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabelCollection>> {
            (*self.0.stub)
                .list_labels(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsLabelCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsLabelCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListLabelsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [label_name][crate::model::ListLabelsRequest::label_name].
        pub fn set_label_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.label_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [label_name][crate::model::ListLabelsRequest::label_name].
        pub fn set_or_clear_label_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.label_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [label_display_text][crate::model::ListLabelsRequest::label_display_text].
        pub fn set_label_display_text<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.label_display_text = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [label_display_text][crate::model::ListLabelsRequest::label_display_text].
        pub fn set_or_clear_label_display_text<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.label_display_text = v.map(|x| x.into());
            self
        }

        /// Sets the value of [is_system][crate::model::ListLabelsRequest::is_system].
        pub fn set_is_system<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::IsSystemFilter>,
        {
            self.0.request.is_system = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_system][crate::model::ListLabelsRequest::is_system].
        pub fn set_or_clear_is_system<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::IsSystemFilter>,
        {
            self.0.request.is_system = v.map(|x| x.into());
            self
        }

        /// Sets the value of [label_priority][crate::model::ListLabelsRequest::label_priority].
        pub fn set_label_priority<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_labels_request::LabelPriority>,
        {
            self.0.request.label_priority = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [label_priority][crate::model::ListLabelsRequest::label_priority].
        pub fn set_or_clear_label_priority<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_labels_request::LabelPriority>,
        {
            self.0.request.label_priority = v.map(|x| x.into());
            self
        }

        /// Sets the value of [is_count_pop][crate::model::ListLabelsRequest::is_count_pop].
        pub fn set_is_count_pop<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_count_pop = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_count_pop][crate::model::ListLabelsRequest::is_count_pop].
        pub fn set_or_clear_is_count_pop<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_count_pop = v.map(|x| x.into());
            self
        }

        /// Sets the value of [is_alias_pop][crate::model::ListLabelsRequest::is_alias_pop].
        pub fn set_is_alias_pop<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_alias_pop = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_alias_pop][crate::model::ListLabelsRequest::is_alias_pop].
        pub fn set_or_clear_is_alias_pop<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_alias_pop = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListLabelsRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListLabelsRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListLabelsRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_labels_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListLabelsRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_labels_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [label_source_name][crate::model::ListLabelsRequest::label_source_name].
        pub fn set_label_source_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.label_source_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [label_source_name][crate::model::ListLabelsRequest::label_source_name].
        pub fn set_or_clear_label_source_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.label_source_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListLabelsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListLabelsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListLabelsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListLabelsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListLabelsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListLabelsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLabels {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_label][crate::client::LogAnalytics::get_label] calls.
    #[derive(Clone, Debug)]
    pub struct GetLabel(RequestBuilder<crate::model::GetLabelRequest>);

    impl GetLabel {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLabelRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabel>> {
            (*self.0.stub)
                .get_label(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetLabelRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [label_name][crate::model::GetLabelRequest::label_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_label_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.label_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLabelRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetLabelRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLabel {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::upsert_label][crate::client::LogAnalytics::upsert_label] calls.
    #[derive(Clone, Debug)]
    pub struct UpsertLabel(RequestBuilder<crate::model::UpsertLabelRequest>);

    impl UpsertLabel {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpsertLabelRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabel>> {
            (*self.0.stub)
                .upsert_label(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpsertLabelRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpsertLabelRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::UpsertLabelRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::UpsertLabelRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::UpsertLabelRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpsertLabelRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::UpsertLabelRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }

        /// Sets the value of [log_analytics_label_definition][crate::model::UpsertLabelRequest::log_analytics_label_definition].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_label_definition<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::LogAnalyticsLabelDefinition>,
        {
            self.0.request.log_analytics_label_definition = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [log_analytics_label_definition][crate::model::UpsertLabelRequest::log_analytics_label_definition].
        pub fn set_or_clear_log_analytics_label_definition<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::LogAnalyticsLabelDefinition>,
        {
            self.0.request.log_analytics_label_definition = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpsertLabel {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_label][crate::client::LogAnalytics::delete_label] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteLabel(RequestBuilder<crate::model::DeleteLabelRequest>);

    impl DeleteLabel {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteLabelRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_label(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteLabelRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [label_name][crate::model::DeleteLabelRequest::label_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_label_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.label_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteLabelRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::DeleteLabelRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteLabel {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_label_summary][crate::client::LogAnalytics::get_label_summary] calls.
    #[derive(Clone, Debug)]
    pub struct GetLabelSummary(RequestBuilder<crate::model::GetLabelSummaryRequest>);

    impl GetLabelSummary {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLabelSummaryRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LabelSummaryReport>> {
            (*self.0.stub)
                .get_label_summary(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetLabelSummaryRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLabelSummaryRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetLabelSummaryRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLabelSummary {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_label_priorities][crate::client::LogAnalytics::list_label_priorities] calls.
    #[derive(Clone, Debug)]
    pub struct ListLabelPriorities(RequestBuilder<crate::model::ListLabelPrioritiesRequest>);

    impl ListLabelPriorities {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLabelPrioritiesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LabelPriorityCollection>> {
            (*self.0.stub)
                .list_label_priorities(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LabelPriorityCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LabelPriorityCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListLabelPrioritiesRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListLabelPrioritiesRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListLabelPrioritiesRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListLabelPrioritiesRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListLabelPrioritiesRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListLabelPrioritiesRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListLabelPrioritiesRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLabelPriorities {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_label_source_details][crate::client::LogAnalytics::list_label_source_details] calls.
    #[derive(Clone, Debug)]
    pub struct ListLabelSourceDetails(RequestBuilder<crate::model::ListLabelSourceDetailsRequest>);

    impl ListLabelSourceDetails {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLabelSourceDetailsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LabelSourceCollection>> {
            (*self.0.stub)
                .list_label_source_details(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LabelSourceCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LabelSourceCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListLabelSourceDetailsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [label_name][crate::model::ListLabelSourceDetailsRequest::label_name].
        pub fn set_label_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.label_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [label_name][crate::model::ListLabelSourceDetailsRequest::label_name].
        pub fn set_or_clear_label_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.label_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListLabelSourceDetailsRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListLabelSourceDetailsRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListLabelSourceDetailsRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_label_source_details_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListLabelSourceDetailsRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_label_source_details_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListLabelSourceDetailsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListLabelSourceDetailsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListLabelSourceDetailsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListLabelSourceDetailsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListLabelSourceDetailsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListLabelSourceDetailsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLabelSourceDetails {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::batch_get_basic_info][crate::client::LogAnalytics::batch_get_basic_info] calls.
    #[derive(Clone, Debug)]
    pub struct BatchGetBasicInfo(RequestBuilder<crate::model::BatchGetBasicInfoRequest>);

    impl BatchGetBasicInfo {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::BatchGetBasicInfoRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabelBasicCollection>> {
            (*self.0.stub)
                .batch_get_basic_info(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsLabelBasicCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsLabelBasicCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::BatchGetBasicInfoRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [is_include_deleted][crate::model::BatchGetBasicInfoRequest::is_include_deleted].
        ///
        /// This is a **required** field for requests.
        pub fn set_is_include_deleted<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_include_deleted = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_include_deleted][crate::model::BatchGetBasicInfoRequest::is_include_deleted].
        pub fn set_or_clear_is_include_deleted<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_include_deleted = v.map(|x| x.into());
            self
        }

        /// Sets the value of [basic_label_sort_by][crate::model::BatchGetBasicInfoRequest::basic_label_sort_by].
        pub fn set_basic_label_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::batch_get_basic_info_request::BasicLabelSortBy>,
        {
            self.0.request.basic_label_sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [basic_label_sort_by][crate::model::BatchGetBasicInfoRequest::basic_label_sort_by].
        pub fn set_or_clear_basic_label_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::batch_get_basic_info_request::BasicLabelSortBy>,
        {
            self.0.request.basic_label_sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [basic_label_sort_sequence][crate::model::BatchGetBasicInfoRequest::basic_label_sort_sequence].
        pub fn set_basic_label_sort_sequence<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.basic_label_sort_sequence = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [basic_label_sort_sequence][crate::model::BatchGetBasicInfoRequest::basic_label_sort_sequence].
        pub fn set_or_clear_basic_label_sort_sequence<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.basic_label_sort_sequence = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::BatchGetBasicInfoRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::BatchGetBasicInfoRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::BatchGetBasicInfoRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::BatchGetBasicInfoRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::BatchGetBasicInfoRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::BatchGetBasicInfoRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [label_names][crate::model::BatchGetBasicInfoRequest::label_names].
        ///
        /// This is a **required** field for requests.
        pub fn set_label_names<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::LabelNames>,
        {
            self.0.request.label_names = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [label_names][crate::model::BatchGetBasicInfoRequest::label_names].
        pub fn set_or_clear_label_names<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::LabelNames>,
        {
            self.0.request.label_names = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for BatchGetBasicInfo {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::register_lookup][crate::client::LogAnalytics::register_lookup] calls.
    #[derive(Clone, Debug)]
    pub struct RegisterLookup(RequestBuilder<crate::model::RegisterLookupRequest>);

    impl RegisterLookup {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RegisterLookupRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLookup>> {
            (*self.0.stub)
                .register_lookup(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::RegisterLookupRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [type][crate::model::RegisterLookupRequest::type].
        ///
        /// This is a **required** field for requests.
        pub fn set_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::RegisterLookupType>,
        {
            self.0.request.r#type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [type][crate::model::RegisterLookupRequest::type].
        pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::RegisterLookupType>,
        {
            self.0.request.r#type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [name][crate::model::RegisterLookupRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::RegisterLookupRequest::name].
        pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [description][crate::model::RegisterLookupRequest::description].
        pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.description = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [description][crate::model::RegisterLookupRequest::description].
        pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.description = v.map(|x| x.into());
            self
        }

        /// Sets the value of [char_encoding][crate::model::RegisterLookupRequest::char_encoding].
        pub fn set_char_encoding<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.char_encoding = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [char_encoding][crate::model::RegisterLookupRequest::char_encoding].
        pub fn set_or_clear_char_encoding<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.char_encoding = v.map(|x| x.into());
            self
        }

        /// Sets the value of [is_hidden][crate::model::RegisterLookupRequest::is_hidden].
        pub fn set_is_hidden<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_hidden = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_hidden][crate::model::RegisterLookupRequest::is_hidden].
        pub fn set_or_clear_is_hidden<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_hidden = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::RegisterLookupRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::RegisterLookupRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::RegisterLookupRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::RegisterLookupRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [expect][crate::model::RegisterLookupRequest::expect].
        pub fn set_expect<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.expect = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [expect][crate::model::RegisterLookupRequest::expect].
        pub fn set_or_clear_expect<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.expect = v.map(|x| x.into());
            self
        }

        /// Sets the value of [content_type][crate::model::RegisterLookupRequest::content_type].
        pub fn set_content_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.content_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [content_type][crate::model::RegisterLookupRequest::content_type].
        pub fn set_or_clear_content_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.content_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [body][crate::model::RegisterLookupRequest::body].
        ///
        /// This is a **required** field for requests.
        pub fn set_body<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
            self.0.request.body = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [body][crate::model::RegisterLookupRequest::body].
        pub fn set_or_clear_body<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bytes::Bytes>,
        {
            self.0.request.body = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RegisterLookup {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::update_lookup][crate::client::LogAnalytics::update_lookup] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateLookup(RequestBuilder<crate::model::UpdateLookupRequest>);

    impl UpdateLookup {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateLookupRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLookup>> {
            (*self.0.stub)
                .update_lookup(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpdateLookupRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [lookup_name][crate::model::UpdateLookupRequest::lookup_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_lookup_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.lookup_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateLookupRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::UpdateLookupRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateLookupRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::UpdateLookupRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }

        /// Sets the value of [update_lookup_metadata_details][crate::model::UpdateLookupRequest::update_lookup_metadata_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_update_lookup_metadata_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::UpdateLookupMetadataDetails>,
        {
            self.0.request.update_lookup_metadata_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [update_lookup_metadata_details][crate::model::UpdateLookupRequest::update_lookup_metadata_details].
        pub fn set_or_clear_update_lookup_metadata_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::UpdateLookupMetadataDetails>,
        {
            self.0.request.update_lookup_metadata_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateLookup {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::update_lookup_data][crate::client::LogAnalytics::update_lookup_data] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateLookupData(RequestBuilder<crate::model::UpdateLookupDataRequest>);

    impl UpdateLookupData {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateLookupDataRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .update_lookup_data(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpdateLookupDataRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [lookup_name][crate::model::UpdateLookupDataRequest::lookup_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_lookup_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.lookup_name = v.into();
            self
        }

        /// Sets the value of [is_force][crate::model::UpdateLookupDataRequest::is_force].
        pub fn set_is_force<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_force = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_force][crate::model::UpdateLookupDataRequest::is_force].
        pub fn set_or_clear_is_force<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_force = v.map(|x| x.into());
            self
        }

        /// Sets the value of [char_encoding][crate::model::UpdateLookupDataRequest::char_encoding].
        pub fn set_char_encoding<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.char_encoding = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [char_encoding][crate::model::UpdateLookupDataRequest::char_encoding].
        pub fn set_or_clear_char_encoding<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.char_encoding = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateLookupDataRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::UpdateLookupDataRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::UpdateLookupDataRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::UpdateLookupDataRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateLookupDataRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::UpdateLookupDataRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }

        /// Sets the value of [expect][crate::model::UpdateLookupDataRequest::expect].
        pub fn set_expect<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.expect = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [expect][crate::model::UpdateLookupDataRequest::expect].
        pub fn set_or_clear_expect<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.expect = v.map(|x| x.into());
            self
        }

        /// Sets the value of [content_type][crate::model::UpdateLookupDataRequest::content_type].
        pub fn set_content_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.content_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [content_type][crate::model::UpdateLookupDataRequest::content_type].
        pub fn set_or_clear_content_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.content_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [body][crate::model::UpdateLookupDataRequest::body].
        ///
        /// This is a **required** field for requests.
        pub fn set_body<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
            self.0.request.body = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [body][crate::model::UpdateLookupDataRequest::body].
        pub fn set_or_clear_body<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bytes::Bytes>,
        {
            self.0.request.body = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateLookupData {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::append_lookup_data][crate::client::LogAnalytics::append_lookup_data] calls.
    #[derive(Clone, Debug)]
    pub struct AppendLookupData(RequestBuilder<crate::model::AppendLookupDataRequest>);

    impl AppendLookupData {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AppendLookupDataRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .append_lookup_data(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::AppendLookupDataRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [lookup_name][crate::model::AppendLookupDataRequest::lookup_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_lookup_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.lookup_name = v.into();
            self
        }

        /// Sets the value of [is_force][crate::model::AppendLookupDataRequest::is_force].
        pub fn set_is_force<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_force = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_force][crate::model::AppendLookupDataRequest::is_force].
        pub fn set_or_clear_is_force<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_force = v.map(|x| x.into());
            self
        }

        /// Sets the value of [char_encoding][crate::model::AppendLookupDataRequest::char_encoding].
        pub fn set_char_encoding<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.char_encoding = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [char_encoding][crate::model::AppendLookupDataRequest::char_encoding].
        pub fn set_or_clear_char_encoding<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.char_encoding = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::AppendLookupDataRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::AppendLookupDataRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::AppendLookupDataRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::AppendLookupDataRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::AppendLookupDataRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::AppendLookupDataRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }

        /// Sets the value of [expect][crate::model::AppendLookupDataRequest::expect].
        pub fn set_expect<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.expect = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [expect][crate::model::AppendLookupDataRequest::expect].
        pub fn set_or_clear_expect<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.expect = v.map(|x| x.into());
            self
        }

        /// Sets the value of [content_type][crate::model::AppendLookupDataRequest::content_type].
        pub fn set_content_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.content_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [content_type][crate::model::AppendLookupDataRequest::content_type].
        pub fn set_or_clear_content_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.content_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [body][crate::model::AppendLookupDataRequest::body].
        ///
        /// This is a **required** field for requests.
        pub fn set_body<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
            self.0.request.body = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [body][crate::model::AppendLookupDataRequest::body].
        pub fn set_or_clear_body<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bytes::Bytes>,
        {
            self.0.request.body = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for AppendLookupData {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_lookup][crate::client::LogAnalytics::delete_lookup] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteLookup(RequestBuilder<crate::model::DeleteLookupRequest>);

    impl DeleteLookup {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteLookupRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_lookup(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteLookupRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [lookup_name][crate::model::DeleteLookupRequest::lookup_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_lookup_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.lookup_name = v.into();
            self
        }

        /// Sets the value of [is_force][crate::model::DeleteLookupRequest::is_force].
        pub fn set_is_force<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_force = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_force][crate::model::DeleteLookupRequest::is_force].
        pub fn set_or_clear_is_force<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_force = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteLookupRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::DeleteLookupRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteLookupRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::DeleteLookupRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteLookup {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_lookup][crate::client::LogAnalytics::get_lookup] calls.
    #[derive(Clone, Debug)]
    pub struct GetLookup(RequestBuilder<crate::model::GetLookupRequest>);

    impl GetLookup {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLookupRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLookup>> {
            (*self.0.stub)
                .get_lookup(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetLookupRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [lookup_name][crate::model::GetLookupRequest::lookup_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_lookup_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.lookup_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLookupRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetLookupRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLookup {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_lookups][crate::client::LogAnalytics::list_lookups] calls.
    #[derive(Clone, Debug)]
    pub struct ListLookups(RequestBuilder<crate::model::ListLookupsRequest>);

    impl ListLookups {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLookupsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLookupCollection>> {
            (*self.0.stub)
                .list_lookups(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsLookupCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsLookupCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListLookupsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [type][crate::model::ListLookupsRequest::type].
        ///
        /// This is a **required** field for requests.
        pub fn set_type<T: std::convert::Into<crate::model::LookupType>>(mut self, v: T) -> Self {
            self.0.request.r#type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [type][crate::model::ListLookupsRequest::type].
        pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::LookupType>,
        {
            self.0.request.r#type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [lookup_display_text][crate::model::ListLookupsRequest::lookup_display_text].
        pub fn set_lookup_display_text<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.lookup_display_text = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [lookup_display_text][crate::model::ListLookupsRequest::lookup_display_text].
        pub fn set_or_clear_lookup_display_text<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.lookup_display_text = v.map(|x| x.into());
            self
        }

        /// Sets the value of [is_system][crate::model::ListLookupsRequest::is_system].
        pub fn set_is_system<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::IsSystemFilter>,
        {
            self.0.request.is_system = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_system][crate::model::ListLookupsRequest::is_system].
        pub fn set_or_clear_is_system<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::IsSystemFilter>,
        {
            self.0.request.is_system = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListLookupsRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_lookups_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListLookupsRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_lookups_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [categories][crate::model::ListLookupsRequest::categories].
        pub fn set_categories<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.categories = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [categories][crate::model::ListLookupsRequest::categories].
        pub fn set_or_clear_categories<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.categories = v.map(|x| x.into());
            self
        }

        /// Sets the value of [status][crate::model::ListLookupsRequest::status].
        pub fn set_status<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_lookups_request::Status>,
        {
            self.0.request.status = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [status][crate::model::ListLookupsRequest::status].
        pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_lookups_request::Status>,
        {
            self.0.request.status = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListLookupsRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListLookupsRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [is_hide_special][crate::model::ListLookupsRequest::is_hide_special].
        pub fn set_is_hide_special<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_hide_special = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_hide_special][crate::model::ListLookupsRequest::is_hide_special].
        pub fn set_or_clear_is_hide_special<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_hide_special = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListLookupsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListLookupsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListLookupsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListLookupsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListLookupsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListLookupsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLookups {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::export_lookup][crate::client::LogAnalytics::export_lookup] calls.
    #[derive(Clone, Debug)]
    pub struct ExportLookup(RequestBuilder<crate::model::ExportLookupRequest>);

    impl ExportLookup {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ExportLookupRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<bytes::Bytes>> {
            (*self.0.stub)
                .export_lookup(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ExportLookupRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [lookup_name][crate::model::ExportLookupRequest::lookup_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_lookup_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.lookup_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ExportLookupRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ExportLookupRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ExportLookup {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_lookup_summary][crate::client::LogAnalytics::get_lookup_summary] calls.
    #[derive(Clone, Debug)]
    pub struct GetLookupSummary(RequestBuilder<crate::model::GetLookupSummaryRequest>);

    impl GetLookupSummary {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLookupSummaryRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LookupSummaryReport>> {
            (*self.0.stub)
                .get_lookup_summary(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetLookupSummaryRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLookupSummaryRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetLookupSummaryRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLookupSummary {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_meta_source_types][crate::client::LogAnalytics::list_meta_source_types] calls.
    #[derive(Clone, Debug)]
    pub struct ListMetaSourceTypes(RequestBuilder<crate::model::ListMetaSourceTypesRequest>);

    impl ListMetaSourceTypes {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListMetaSourceTypesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsMetaSourceTypeCollection>> {
            (*self.0.stub)
                .list_meta_source_types(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsMetaSourceTypeCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsMetaSourceTypeCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListMetaSourceTypesRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [sort_order][crate::model::ListMetaSourceTypesRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListMetaSourceTypesRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListMetaSourceTypesRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_meta_source_types_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListMetaSourceTypesRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_meta_source_types_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListMetaSourceTypesRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListMetaSourceTypesRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListMetaSourceTypesRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListMetaSourceTypesRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListMetaSourceTypesRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListMetaSourceTypesRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListMetaSourceTypes {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_parser_functions][crate::client::LogAnalytics::list_parser_functions] calls.
    #[derive(Clone, Debug)]
    pub struct ListParserFunctions(RequestBuilder<crate::model::ListParserFunctionsRequest>);

    impl ListParserFunctions {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListParserFunctionsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsParserFunctionCollection>> {
            (*self.0.stub)
                .list_parser_functions(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsParserFunctionCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsParserFunctionCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListParserFunctionsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [parser_name][crate::model::ListParserFunctionsRequest::parser_name].
        pub fn set_parser_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parser_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [parser_name][crate::model::ListParserFunctionsRequest::parser_name].
        pub fn set_or_clear_parser_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.parser_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListParserFunctionsRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListParserFunctionsRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListParserFunctionsRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_parser_functions_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListParserFunctionsRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_parser_functions_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListParserFunctionsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListParserFunctionsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListParserFunctionsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListParserFunctionsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListParserFunctionsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListParserFunctionsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListParserFunctions {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_parser_meta_plugins][crate::client::LogAnalytics::list_parser_meta_plugins] calls.
    #[derive(Clone, Debug)]
    pub struct ListParserMetaPlugins(RequestBuilder<crate::model::ListParserMetaPluginsRequest>);

    impl ListParserMetaPlugins {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListParserMetaPluginsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsParserMetaPluginCollection>> {
            (*self.0.stub)
                .list_parser_meta_plugins(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsParserMetaPluginCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsParserMetaPluginCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListParserMetaPluginsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [sort_order][crate::model::ListParserMetaPluginsRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListParserMetaPluginsRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListParserMetaPluginsRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_parser_meta_plugins_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListParserMetaPluginsRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_parser_meta_plugins_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListParserMetaPluginsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListParserMetaPluginsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListParserMetaPluginsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListParserMetaPluginsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListParserMetaPluginsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListParserMetaPluginsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListParserMetaPlugins {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_supported_char_encodings][crate::client::LogAnalytics::list_supported_char_encodings] calls.
    #[derive(Clone, Debug)]
    pub struct ListSupportedCharEncodings(
        RequestBuilder<crate::model::ListSupportedCharEncodingsRequest>,
    );

    impl ListSupportedCharEncodings {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSupportedCharEncodingsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::CharEncodingCollection>> {
            (*self.0.stub)
                .list_supported_char_encodings(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::CharEncodingCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::CharEncodingCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListSupportedCharEncodingsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListSupportedCharEncodingsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListSupportedCharEncodingsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListSupportedCharEncodingsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListSupportedCharEncodingsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListSupportedCharEncodingsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListSupportedCharEncodingsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSupportedCharEncodings {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_supported_timezones][crate::client::LogAnalytics::list_supported_timezones] calls.
    #[derive(Clone, Debug)]
    pub struct ListSupportedTimezones(RequestBuilder<crate::model::ListSupportedTimezonesRequest>);

    impl ListSupportedTimezones {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSupportedTimezonesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::TimezoneCollection>> {
            (*self.0.stub)
                .list_supported_timezones(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::TimezoneCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::TimezoneCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListSupportedTimezonesRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListSupportedTimezonesRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListSupportedTimezonesRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListSupportedTimezonesRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListSupportedTimezonesRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListSupportedTimezonesRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListSupportedTimezonesRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSupportedTimezones {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_source_meta_functions][crate::client::LogAnalytics::list_source_meta_functions] calls.
    #[derive(Clone, Debug)]
    pub struct ListSourceMetaFunctions(
        RequestBuilder<crate::model::ListSourceMetaFunctionsRequest>,
    );

    impl ListSourceMetaFunctions {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSourceMetaFunctionsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<
            gax::response::Response<crate::model::LogAnalyticsSourceMetaFunctionCollection>,
        > {
            (*self.0.stub)
                .list_source_meta_functions(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsSourceMetaFunctionCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsSourceMetaFunctionCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListSourceMetaFunctionsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [sort_order][crate::model::ListSourceMetaFunctionsRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListSourceMetaFunctionsRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListSourceMetaFunctionsRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_source_meta_functions_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListSourceMetaFunctionsRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_source_meta_functions_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListSourceMetaFunctionsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListSourceMetaFunctionsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListSourceMetaFunctionsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListSourceMetaFunctionsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListSourceMetaFunctionsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListSourceMetaFunctionsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSourceMetaFunctions {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_source_patterns][crate::client::LogAnalytics::list_source_patterns] calls.
    #[derive(Clone, Debug)]
    pub struct ListSourcePatterns(RequestBuilder<crate::model::ListSourcePatternsRequest>);

    impl ListSourcePatterns {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSourcePatternsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsSourcePatternCollection>> {
            (*self.0.stub)
                .list_source_patterns(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsSourcePatternCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsSourcePatternCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListSourcePatternsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [source_name][crate::model::ListSourcePatternsRequest::source_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = v.into();
            self
        }

        /// Sets the value of [is_include][crate::model::ListSourcePatternsRequest::is_include].
        pub fn set_is_include<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_include = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_include][crate::model::ListSourcePatternsRequest::is_include].
        pub fn set_or_clear_is_include<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_include = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListSourcePatternsRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListSourcePatternsRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListSourcePatternsRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_source_patterns_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListSourcePatternsRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_source_patterns_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListSourcePatternsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListSourcePatternsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListSourcePatternsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListSourcePatternsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListSourcePatternsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListSourcePatternsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSourcePatterns {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_source_label_operators][crate::client::LogAnalytics::list_source_label_operators] calls.
    #[derive(Clone, Debug)]
    pub struct ListSourceLabelOperators(
        RequestBuilder<crate::model::ListSourceLabelOperatorsRequest>,
    );

    impl ListSourceLabelOperators {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSourceLabelOperatorsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabelOperatorCollection>> {
            (*self.0.stub)
                .list_source_label_operators(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsLabelOperatorCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsLabelOperatorCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListSourceLabelOperatorsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [sort_order][crate::model::ListSourceLabelOperatorsRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListSourceLabelOperatorsRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListSourceLabelOperatorsRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_source_label_operators_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListSourceLabelOperatorsRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_source_label_operators_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListSourceLabelOperatorsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListSourceLabelOperatorsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListSourceLabelOperatorsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListSourceLabelOperatorsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListSourceLabelOperatorsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListSourceLabelOperatorsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSourceLabelOperators {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_source_extended_field_definitions][crate::client::LogAnalytics::list_source_extended_field_definitions] calls.
    #[derive(Clone, Debug)]
    pub struct ListSourceExtendedFieldDefinitions(
        RequestBuilder<crate::model::ListSourceExtendedFieldDefinitionsRequest>,
    );

    impl ListSourceExtendedFieldDefinitions {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSourceExtendedFieldDefinitionsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<
            gax::response::Response<
                crate::model::LogAnalyticsSourceExtendedFieldDefinitionCollection,
            >,
        > {
            (*self.0.stub)
                .list_source_extended_field_definitions(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<
                crate::model::LogAnalyticsSourceExtendedFieldDefinitionCollection,
            >,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<
                crate::model::LogAnalyticsSourceExtendedFieldDefinitionCollection,
            >,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListSourceExtendedFieldDefinitionsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [source_name][crate::model::ListSourceExtendedFieldDefinitionsRequest::source_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = v.into();
            self
        }

        /// Sets the value of [sort_order][crate::model::ListSourceExtendedFieldDefinitionsRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListSourceExtendedFieldDefinitionsRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListSourceExtendedFieldDefinitionsRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<
                crate::model::list_source_extended_field_definitions_request::SortBy,
            >,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListSourceExtendedFieldDefinitionsRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<
                crate::model::list_source_extended_field_definitions_request::SortBy,
            >,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListSourceExtendedFieldDefinitionsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListSourceExtendedFieldDefinitionsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListSourceExtendedFieldDefinitionsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListSourceExtendedFieldDefinitionsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListSourceExtendedFieldDefinitionsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListSourceExtendedFieldDefinitionsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSourceExtendedFieldDefinitions {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_effective_properties][crate::client::LogAnalytics::list_effective_properties] calls.
    #[derive(Clone, Debug)]
    pub struct ListEffectiveProperties(
        RequestBuilder<crate::model::ListEffectivePropertiesRequest>,
    );

    impl ListEffectiveProperties {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListEffectivePropertiesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::EffectivePropertyCollection>> {
            (*self.0.stub)
                .list_effective_properties(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::EffectivePropertyCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::EffectivePropertyCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListEffectivePropertiesRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [agent_id][crate::model::ListEffectivePropertiesRequest::agent_id].
        pub fn set_agent_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.agent_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [agent_id][crate::model::ListEffectivePropertiesRequest::agent_id].
        pub fn set_or_clear_agent_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.agent_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [source_name][crate::model::ListEffectivePropertiesRequest::source_name].
        pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [source_name][crate::model::ListEffectivePropertiesRequest::source_name].
        pub fn set_or_clear_source_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.source_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [is_include_patterns][crate::model::ListEffectivePropertiesRequest::is_include_patterns].
        pub fn set_is_include_patterns<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_include_patterns = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_include_patterns][crate::model::ListEffectivePropertiesRequest::is_include_patterns].
        pub fn set_or_clear_is_include_patterns<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_include_patterns = v.map(|x| x.into());
            self
        }

        /// Sets the value of [entity_id][crate::model::ListEffectivePropertiesRequest::entity_id].
        pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.entity_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [entity_id][crate::model::ListEffectivePropertiesRequest::entity_id].
        pub fn set_or_clear_entity_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.entity_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [pattern_id][crate::model::ListEffectivePropertiesRequest::pattern_id].
        pub fn set_pattern_id<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.pattern_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [pattern_id][crate::model::ListEffectivePropertiesRequest::pattern_id].
        pub fn set_or_clear_pattern_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.pattern_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [pattern_id_long][crate::model::ListEffectivePropertiesRequest::pattern_id_long].
        pub fn set_pattern_id_long<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
            self.0.request.pattern_id_long = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [pattern_id_long][crate::model::ListEffectivePropertiesRequest::pattern_id_long].
        pub fn set_or_clear_pattern_id_long<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.pattern_id_long = v.map(|x| x.into());
            self
        }

        /// Sets the value of [name][crate::model::ListEffectivePropertiesRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::ListEffectivePropertiesRequest::name].
        pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListEffectivePropertiesRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListEffectivePropertiesRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListEffectivePropertiesRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_effective_properties_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListEffectivePropertiesRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_effective_properties_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListEffectivePropertiesRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListEffectivePropertiesRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListEffectivePropertiesRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListEffectivePropertiesRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListEffectivePropertiesRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListEffectivePropertiesRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListEffectiveProperties {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_properties_metadata][crate::client::LogAnalytics::list_properties_metadata] calls.
    #[derive(Clone, Debug)]
    pub struct ListPropertiesMetadata(RequestBuilder<crate::model::ListPropertiesMetadataRequest>);

    impl ListPropertiesMetadata {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListPropertiesMetadataRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::PropertyMetadataSummaryCollection>> {
            (*self.0.stub)
                .list_properties_metadata(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::PropertyMetadataSummaryCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::PropertyMetadataSummaryCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListPropertiesMetadataRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [name][crate::model::ListPropertiesMetadataRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::ListPropertiesMetadataRequest::name].
        pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [display_text][crate::model::ListPropertiesMetadataRequest::display_text].
        pub fn set_display_text<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.display_text = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [display_text][crate::model::ListPropertiesMetadataRequest::display_text].
        pub fn set_or_clear_display_text<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.display_text = v.map(|x| x.into());
            self
        }

        /// Sets the value of [level][crate::model::ListPropertiesMetadataRequest::level].
        pub fn set_level<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.level = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [level][crate::model::ListPropertiesMetadataRequest::level].
        pub fn set_or_clear_level<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.level = v.map(|x| x.into());
            self
        }

        /// Sets the value of [constraints][crate::model::ListPropertiesMetadataRequest::constraints].
        pub fn set_constraints<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.constraints = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [constraints][crate::model::ListPropertiesMetadataRequest::constraints].
        pub fn set_or_clear_constraints<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.constraints = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListPropertiesMetadataRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListPropertiesMetadataRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListPropertiesMetadataRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_properties_metadata_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListPropertiesMetadataRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_properties_metadata_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListPropertiesMetadataRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListPropertiesMetadataRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListPropertiesMetadataRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListPropertiesMetadataRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListPropertiesMetadataRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListPropertiesMetadataRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListPropertiesMetadata {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_log_sets][crate::client::LogAnalytics::list_log_sets] calls.
    #[derive(Clone, Debug)]
    pub struct ListLogSets(RequestBuilder<crate::model::ListLogSetsRequest>);

    impl ListLogSets {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLogSetsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::LogSetCollection>> {
            (*self.0.stub)
                .list_log_sets(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogSetCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogSetCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListLogSetsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [log_set_name_contains][crate::model::ListLogSetsRequest::log_set_name_contains].
        pub fn set_log_set_name_contains<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_set_name_contains = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [log_set_name_contains][crate::model::ListLogSetsRequest::log_set_name_contains].
        pub fn set_or_clear_log_set_name_contains<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_set_name_contains = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListLogSetsRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListLogSetsRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListLogSetsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListLogSetsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListLogSetsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListLogSetsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListLogSetsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListLogSetsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLogSets {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_log_sets_count][crate::client::LogAnalytics::get_log_sets_count] calls.
    #[derive(Clone, Debug)]
    pub struct GetLogSetsCount(RequestBuilder<crate::model::GetLogSetsCountRequest>);

    impl GetLogSetsCount {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogSetsCountRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::LogSetsCount>> {
            (*self.0.stub)
                .get_log_sets_count(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetLogSetsCountRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLogSetsCountRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetLogSetsCountRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogSetsCount {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_parser][crate::client::LogAnalytics::delete_parser] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteParser(RequestBuilder<crate::model::DeleteParserRequest>);

    impl DeleteParser {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteParserRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_parser(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteParserRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [parser_name][crate::model::DeleteParserRequest::parser_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_parser_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parser_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteParserRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::DeleteParserRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteParser {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_parser][crate::client::LogAnalytics::get_parser] calls.
    #[derive(Clone, Debug)]
    pub struct GetParser(RequestBuilder<crate::model::GetParserRequest>);

    impl GetParser {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetParserRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsParser>> {
            (*self.0.stub)
                .get_parser(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetParserRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [parser_name][crate::model::GetParserRequest::parser_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_parser_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parser_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetParserRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetParserRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetParser {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_parsers][crate::client::LogAnalytics::list_parsers] calls.
    #[derive(Clone, Debug)]
    pub struct ListParsers(RequestBuilder<crate::model::ListParsersRequest>);

    impl ListParsers {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListParsersRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsParserCollection>> {
            (*self.0.stub)
                .list_parsers(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsParserCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsParserCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListParsersRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [is_match_all][crate::model::ListParsersRequest::is_match_all].
        pub fn set_is_match_all<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_match_all = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_match_all][crate::model::ListParsersRequest::is_match_all].
        pub fn set_or_clear_is_match_all<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_match_all = v.map(|x| x.into());
            self
        }

        /// Sets the value of [source_type][crate::model::ListParsersRequest::source_type].
        pub fn set_source_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SourceType>,
        {
            self.0.request.source_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [source_type][crate::model::ListParsersRequest::source_type].
        pub fn set_or_clear_source_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SourceType>,
        {
            self.0.request.source_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [parser_name][crate::model::ListParsersRequest::parser_name].
        pub fn set_parser_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parser_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [parser_name][crate::model::ListParsersRequest::parser_name].
        pub fn set_or_clear_parser_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.parser_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [parser_display_text][crate::model::ListParsersRequest::parser_display_text].
        pub fn set_parser_display_text<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.parser_display_text = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [parser_display_text][crate::model::ListParsersRequest::parser_display_text].
        pub fn set_or_clear_parser_display_text<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.parser_display_text = v.map(|x| x.into());
            self
        }

        /// Sets the value of [parser_type][crate::model::ListParsersRequest::parser_type].
        pub fn set_parser_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_parsers_request::ParserType>,
        {
            self.0.request.parser_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [parser_type][crate::model::ListParsersRequest::parser_type].
        pub fn set_or_clear_parser_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_parsers_request::ParserType>,
        {
            self.0.request.parser_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [categories][crate::model::ListParsersRequest::categories].
        pub fn set_categories<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.categories = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [categories][crate::model::ListParsersRequest::categories].
        pub fn set_or_clear_categories<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.categories = v.map(|x| x.into());
            self
        }

        /// Sets the value of [is_system][crate::model::ListParsersRequest::is_system].
        pub fn set_is_system<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::IsSystemFilter>,
        {
            self.0.request.is_system = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_system][crate::model::ListParsersRequest::is_system].
        pub fn set_or_clear_is_system<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::IsSystemFilter>,
        {
            self.0.request.is_system = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListParsersRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListParsersRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListParsersRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_parsers_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListParsersRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_parsers_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListParsersRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListParsersRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListParsersRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListParsersRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListParsersRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListParsersRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListParsers {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::upsert_parser][crate::client::LogAnalytics::upsert_parser] calls.
    #[derive(Clone, Debug)]
    pub struct UpsertParser(RequestBuilder<crate::model::UpsertParserRequest>);

    impl UpsertParser {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpsertParserRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsParser>> {
            (*self.0.stub)
                .upsert_parser(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpsertParserRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpsertParserRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::UpsertParserRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::UpsertParserRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::UpsertParserRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpsertParserRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::UpsertParserRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }

        /// Sets the value of [upsert_log_analytics_parser_details][crate::model::UpsertParserRequest::upsert_log_analytics_parser_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_upsert_log_analytics_parser_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::UpsertLogAnalyticsParserDetails>,
        {
            self.0.request.upsert_log_analytics_parser_details =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [upsert_log_analytics_parser_details][crate::model::UpsertParserRequest::upsert_log_analytics_parser_details].
        pub fn set_or_clear_upsert_log_analytics_parser_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::UpsertLogAnalyticsParserDetails>,
        {
            self.0.request.upsert_log_analytics_parser_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpsertParser {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_parser_summary][crate::client::LogAnalytics::get_parser_summary] calls.
    #[derive(Clone, Debug)]
    pub struct GetParserSummary(RequestBuilder<crate::model::GetParserSummaryRequest>);

    impl GetParserSummary {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetParserSummaryRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ParserSummaryReport>> {
            (*self.0.stub)
                .get_parser_summary(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetParserSummaryRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetParserSummaryRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetParserSummaryRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetParserSummary {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_preferences][crate::client::LogAnalytics::list_preferences] calls.
    #[derive(Clone, Debug)]
    pub struct ListPreferences(RequestBuilder<crate::model::ListPreferencesRequest>);

    impl ListPreferences {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListPreferencesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsPreferenceCollection>> {
            (*self.0.stub)
                .list_preferences(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsPreferenceCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsPreferenceCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListPreferencesRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [sort_order][crate::model::ListPreferencesRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListPreferencesRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListPreferencesRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_preferences_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListPreferencesRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_preferences_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListPreferencesRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListPreferencesRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListPreferencesRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListPreferencesRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListPreferencesRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListPreferencesRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListPreferences {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::update_preferences][crate::client::LogAnalytics::update_preferences] calls.
    #[derive(Clone, Debug)]
    pub struct UpdatePreferences(RequestBuilder<crate::model::UpdatePreferencesRequest>);

    impl UpdatePreferences {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdatePreferencesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .update_preferences(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpdatePreferencesRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdatePreferencesRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::UpdatePreferencesRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::UpdatePreferencesRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::UpdatePreferencesRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [log_analytics_preference_details][crate::model::UpdatePreferencesRequest::log_analytics_preference_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_preference_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::LogAnalyticsPreferenceDetails>,
        {
            self.0.request.log_analytics_preference_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [log_analytics_preference_details][crate::model::UpdatePreferencesRequest::log_analytics_preference_details].
        pub fn set_or_clear_log_analytics_preference_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::LogAnalyticsPreferenceDetails>,
        {
            self.0.request.log_analytics_preference_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdatePreferences {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::remove_preferences][crate::client::LogAnalytics::remove_preferences] calls.
    #[derive(Clone, Debug)]
    pub struct RemovePreferences(RequestBuilder<crate::model::RemovePreferencesRequest>);

    impl RemovePreferences {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RemovePreferencesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .remove_preferences(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::RemovePreferencesRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::RemovePreferencesRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::RemovePreferencesRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::RemovePreferencesRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::RemovePreferencesRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [log_analytics_preference_details][crate::model::RemovePreferencesRequest::log_analytics_preference_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_preference_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::LogAnalyticsPreferenceDetails>,
        {
            self.0.request.log_analytics_preference_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [log_analytics_preference_details][crate::model::RemovePreferencesRequest::log_analytics_preference_details].
        pub fn set_or_clear_log_analytics_preference_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::LogAnalyticsPreferenceDetails>,
        {
            self.0.request.log_analytics_preference_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RemovePreferences {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::query][crate::client::LogAnalytics::query] calls.
    #[derive(Clone, Debug)]
    pub struct Query(RequestBuilder<crate::model::QueryRequest>);

    impl Query {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::QueryRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::QueryAggregation>> {
            (*self.0.stub)
                .query(self.0.request, self.0.options)
                .await
        }

        /// Creates a [Poller][lro::Poller] to wait for the work request started by
        /// this operation.
        ///
        /// The poller sends the request, then fetches the work request named in the
        /// `opc-work-request-id` response header until it completes.
        pub fn poller(self) -> impl lro::Poller<crate::model::QueryWorkRequest> {
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let namespace_name = self.0.request.namespace_name.clone();

            let query = move |id: String| {
                let stub = stub.clone();
                let options = options.clone();
                let request = crate::model::GetQueryWorkRequestRequest::new()
                    .set_namespace_name(namespace_name.clone())
                    .set_work_request_id(id);
                async move {
                    stub.get_query_work_request(request, options)
                        .await
                        .map(gax::response::Response::into_body)
                }
            };

            let start = move || async move {
                let response = self.send().await?;
                response
                    .opc_work_request_id()
                    .map(str::to_string)
                    .ok_or_else(|| gax::error::Error::deser(MISSING_WORK_REQUEST_ID))
            };

            lro::internal::new_poller(polling_error_policy, polling_backoff_policy, start, query)
        }

        /// Sets the value of [namespace_name][crate::model::QueryRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [should_include_total_count][crate::model::QueryRequest::should_include_total_count].
        pub fn set_should_include_total_count<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.should_include_total_count = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [should_include_total_count][crate::model::QueryRequest::should_include_total_count].
        pub fn set_or_clear_should_include_total_count<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.should_include_total_count = v.map(|x| x.into());
            self
        }

        /// Sets the value of [should_include_columns][crate::model::QueryRequest::should_include_columns].
        pub fn set_should_include_columns<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.should_include_columns = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [should_include_columns][crate::model::QueryRequest::should_include_columns].
        pub fn set_or_clear_should_include_columns<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.should_include_columns = v.map(|x| x.into());
            self
        }

        /// Sets the value of [should_include_fields][crate::model::QueryRequest::should_include_fields].
        pub fn set_should_include_fields<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.should_include_fields = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [should_include_fields][crate::model::QueryRequest::should_include_fields].
        pub fn set_or_clear_should_include_fields<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.should_include_fields = v.map(|x| x.into());
            self
        }

        /// Sets the value of [output_mode][crate::model::QueryRequest::output_mode].
        pub fn set_output_mode<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::OutputMode>,
        {
            self.0.request.output_mode = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [output_mode][crate::model::QueryRequest::output_mode].
        pub fn set_or_clear_output_mode<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::OutputMode>,
        {
            self.0.request.output_mode = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::QueryRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::QueryRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::QueryRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::QueryRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::QueryRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::QueryRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::QueryRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::QueryRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [query_details][crate::model::QueryRequest::query_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_query_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::QueryDetails>,
        {
            self.0.request.query_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [query_details][crate::model::QueryRequest::query_details].
        pub fn set_or_clear_query_details<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::QueryDetails>,
        {
            self.0.request.query_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Query {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_query_result][crate::client::LogAnalytics::get_query_result] calls.
    #[derive(Clone, Debug)]
    pub struct GetQueryResult(RequestBuilder<crate::model::GetQueryResultRequest>);

    impl GetQueryResult {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetQueryResultRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::QueryAggregation>> {
            (*self.0.stub)
                .get_query_result(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetQueryResultRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [work_request_id][crate::model::GetQueryResultRequest::work_request_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_work_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.work_request_id = v.into();
            self
        }

        /// Sets the value of [should_include_columns][crate::model::GetQueryResultRequest::should_include_columns].
        pub fn set_should_include_columns<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.should_include_columns = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [should_include_columns][crate::model::GetQueryResultRequest::should_include_columns].
        pub fn set_or_clear_should_include_columns<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.should_include_columns = v.map(|x| x.into());
            self
        }

        /// Sets the value of [should_include_fields][crate::model::GetQueryResultRequest::should_include_fields].
        pub fn set_should_include_fields<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.should_include_fields = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [should_include_fields][crate::model::GetQueryResultRequest::should_include_fields].
        pub fn set_or_clear_should_include_fields<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.should_include_fields = v.map(|x| x.into());
            self
        }

        /// Sets the value of [output_mode][crate::model::GetQueryResultRequest::output_mode].
        pub fn set_output_mode<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::OutputMode>,
        {
            self.0.request.output_mode = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [output_mode][crate::model::GetQueryResultRequest::output_mode].
        pub fn set_or_clear_output_mode<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::OutputMode>,
        {
            self.0.request.output_mode = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::GetQueryResultRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::GetQueryResultRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::GetQueryResultRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::GetQueryResultRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetQueryResultRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetQueryResultRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetQueryResult {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::export_query_result][crate::client::LogAnalytics::export_query_result] calls.
    #[derive(Clone, Debug)]
    pub struct ExportQueryResult(RequestBuilder<crate::model::ExportQueryResultRequest>);

    impl ExportQueryResult {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ExportQueryResultRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<bytes::Bytes>> {
            (*self.0.stub)
                .export_query_result(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ExportQueryResultRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ExportQueryResultRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ExportQueryResultRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [export_details][crate::model::ExportQueryResultRequest::export_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_export_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ExportDetails>,
        {
            self.0.request.export_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [export_details][crate::model::ExportQueryResultRequest::export_details].
        pub fn set_or_clear_export_details<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ExportDetails>,
        {
            self.0.request.export_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ExportQueryResult {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::filter][crate::client::LogAnalytics::filter] calls.
    #[derive(Clone, Debug)]
    pub struct Filter(RequestBuilder<crate::model::FilterRequest>);

    impl Filter {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::FilterRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::FilterOutput>> {
            (*self.0.stub)
                .filter(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::FilterRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::FilterRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::FilterRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [filter_details][crate::model::FilterRequest::filter_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_filter_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::FilterDetails>,
        {
            self.0.request.filter_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [filter_details][crate::model::FilterRequest::filter_details].
        pub fn set_or_clear_filter_details<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::FilterDetails>,
        {
            self.0.request.filter_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Filter {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::parse_query][crate::client::LogAnalytics::parse_query] calls.
    #[derive(Clone, Debug)]
    pub struct ParseQuery(RequestBuilder<crate::model::ParseQueryRequest>);

    impl ParseQuery {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ParseQueryRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ParseQueryOutput>> {
            (*self.0.stub)
                .parse_query(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ParseQueryRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ParseQueryRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ParseQueryRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [parse_query_details][crate::model::ParseQueryRequest::parse_query_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_parse_query_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ParseQueryDetails>,
        {
            self.0.request.parse_query_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [parse_query_details][crate::model::ParseQueryRequest::parse_query_details].
        pub fn set_or_clear_parse_query_details<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ParseQueryDetails>,
        {
            self.0.request.parse_query_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ParseQuery {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::suggest][crate::client::LogAnalytics::suggest] calls.
    #[derive(Clone, Debug)]
    pub struct Suggest(RequestBuilder<crate::model::SuggestRequest>);

    impl Suggest {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::SuggestRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::SuggestOutput>> {
            (*self.0.stub)
                .suggest(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::SuggestRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::SuggestRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::SuggestRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [suggest_details][crate::model::SuggestRequest::suggest_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_suggest_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SuggestDetails>,
        {
            self.0.request.suggest_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [suggest_details][crate::model::SuggestRequest::suggest_details].
        pub fn set_or_clear_suggest_details<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SuggestDetails>,
        {
            self.0.request.suggest_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Suggest {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_query_work_request][crate::client::LogAnalytics::get_query_work_request] calls.
    #[derive(Clone, Debug)]
    pub struct GetQueryWorkRequest(RequestBuilder<crate::model::GetQueryWorkRequestRequest>);

    impl GetQueryWorkRequest {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetQueryWorkRequestRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::QueryWorkRequest>> {
            (*self.0.stub)
                .get_query_work_request(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetQueryWorkRequestRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [work_request_id][crate::model::GetQueryWorkRequestRequest::work_request_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_work_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.work_request_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetQueryWorkRequestRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetQueryWorkRequestRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetQueryWorkRequest {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_query_work_request][crate::client::LogAnalytics::delete_query_work_request] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteQueryWorkRequest(RequestBuilder<crate::model::DeleteQueryWorkRequestRequest>);

    impl DeleteQueryWorkRequest {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteQueryWorkRequestRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_query_work_request(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteQueryWorkRequestRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [work_request_id][crate::model::DeleteQueryWorkRequestRequest::work_request_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_work_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.work_request_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteQueryWorkRequestRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::DeleteQueryWorkRequestRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteQueryWorkRequestRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::DeleteQueryWorkRequestRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteQueryWorkRequest {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_query_work_requests][crate::client::LogAnalytics::list_query_work_requests] calls.
    #[derive(Clone, Debug)]
    pub struct ListQueryWorkRequests(RequestBuilder<crate::model::ListQueryWorkRequestsRequest>);

    impl ListQueryWorkRequests {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListQueryWorkRequestsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::QueryWorkRequestCollection>> {
            (*self.0.stub)
                .list_query_work_requests(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::QueryWorkRequestCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::QueryWorkRequestCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListQueryWorkRequestsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListQueryWorkRequestsRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.compartment_id = v.into();
            self
        }

        /// Sets the value of [mode][crate::model::ListQueryWorkRequestsRequest::mode].
        pub fn set_mode<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::QueryWorkRequestModeFilter>,
        {
            self.0.request.mode = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [mode][crate::model::ListQueryWorkRequestsRequest::mode].
        pub fn set_or_clear_mode<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::QueryWorkRequestModeFilter>,
        {
            self.0.request.mode = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListQueryWorkRequestsRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListQueryWorkRequestsRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListQueryWorkRequestsRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_query_work_requests_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListQueryWorkRequestsRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_query_work_requests_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListQueryWorkRequestsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListQueryWorkRequestsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListQueryWorkRequestsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListQueryWorkRequestsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListQueryWorkRequestsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListQueryWorkRequestsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListQueryWorkRequests {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::create_scheduled_task][crate::client::LogAnalytics::create_scheduled_task] calls.
    #[derive(Clone, Debug)]
    pub struct CreateScheduledTask(RequestBuilder<crate::model::CreateScheduledTaskRequest>);

    impl CreateScheduledTask {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateScheduledTaskRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
            (*self.0.stub)
                .create_scheduled_task(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::CreateScheduledTaskRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::CreateScheduledTaskRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::CreateScheduledTaskRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::CreateScheduledTaskRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::CreateScheduledTaskRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [create_scheduled_task_details][crate::model::CreateScheduledTaskRequest::create_scheduled_task_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_create_scheduled_task_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::CreateScheduledTaskDetails>,
        {
            self.0.request.create_scheduled_task_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [create_scheduled_task_details][crate::model::CreateScheduledTaskRequest::create_scheduled_task_details].
        pub fn set_or_clear_create_scheduled_task_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::CreateScheduledTaskDetails>,
        {
            self.0.request.create_scheduled_task_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateScheduledTask {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_scheduled_task][crate::client::LogAnalytics::get_scheduled_task] calls.
    #[derive(Clone, Debug)]
    pub struct GetScheduledTask(RequestBuilder<crate::model::GetScheduledTaskRequest>);

    impl GetScheduledTask {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetScheduledTaskRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
            (*self.0.stub)
                .get_scheduled_task(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetScheduledTaskRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [scheduled_task_id][crate::model::GetScheduledTaskRequest::scheduled_task_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_scheduled_task_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.scheduled_task_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetScheduledTaskRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetScheduledTaskRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetScheduledTask {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_scheduled_tasks][crate::client::LogAnalytics::list_scheduled_tasks] calls.
    #[derive(Clone, Debug)]
    pub struct ListScheduledTasks(RequestBuilder<crate::model::ListScheduledTasksRequest>);

    impl ListScheduledTasks {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListScheduledTasksRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ScheduledTaskCollection>> {
            (*self.0.stub)
                .list_scheduled_tasks(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::ScheduledTaskCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::ScheduledTaskCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListScheduledTasksRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [task_type][crate::model::ListScheduledTasksRequest::task_type].
        ///
        /// This is a **required** field for requests.
        pub fn set_task_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ScheduledTaskTaskType>,
        {
            self.0.request.task_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [task_type][crate::model::ListScheduledTasksRequest::task_type].
        pub fn set_or_clear_task_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ScheduledTaskTaskType>,
        {
            self.0.request.task_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListScheduledTasksRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.compartment_id = v.into();
            self
        }

        /// Sets the value of [display_name][crate::model::ListScheduledTasksRequest::display_name].
        pub fn set_display_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.display_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [display_name][crate::model::ListScheduledTasksRequest::display_name].
        pub fn set_or_clear_display_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.display_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [target_service][crate::model::ListScheduledTasksRequest::target_service].
        pub fn set_target_service<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.target_service = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [target_service][crate::model::ListScheduledTasksRequest::target_service].
        pub fn set_or_clear_target_service<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.target_service = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListScheduledTasksRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListScheduledTasksRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListScheduledTasksRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_scheduled_tasks_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListScheduledTasksRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_scheduled_tasks_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListScheduledTasksRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListScheduledTasksRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListScheduledTasksRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListScheduledTasksRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListScheduledTasksRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListScheduledTasksRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListScheduledTasks {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::update_scheduled_task][crate::client::LogAnalytics::update_scheduled_task] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateScheduledTask(RequestBuilder<crate::model::UpdateScheduledTaskRequest>);

    impl UpdateScheduledTask {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateScheduledTaskRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
            (*self.0.stub)
                .update_scheduled_task(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpdateScheduledTaskRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [scheduled_task_id][crate::model::UpdateScheduledTaskRequest::scheduled_task_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_scheduled_task_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.scheduled_task_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateScheduledTaskRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::UpdateScheduledTaskRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateScheduledTaskRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::UpdateScheduledTaskRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }

        /// Sets the value of [update_scheduled_task_details][crate::model::UpdateScheduledTaskRequest::update_scheduled_task_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_update_scheduled_task_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::UpdateScheduledTaskDetails>,
        {
            self.0.request.update_scheduled_task_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [update_scheduled_task_details][crate::model::UpdateScheduledTaskRequest::update_scheduled_task_details].
        pub fn set_or_clear_update_scheduled_task_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::UpdateScheduledTaskDetails>,
        {
            self.0.request.update_scheduled_task_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateScheduledTask {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_scheduled_task][crate::client::LogAnalytics::delete_scheduled_task] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteScheduledTask(RequestBuilder<crate::model::DeleteScheduledTaskRequest>);

    impl DeleteScheduledTask {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteScheduledTaskRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_scheduled_task(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteScheduledTaskRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [scheduled_task_id][crate::model::DeleteScheduledTaskRequest::scheduled_task_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_scheduled_task_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.scheduled_task_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteScheduledTaskRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::DeleteScheduledTaskRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteScheduledTaskRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::DeleteScheduledTaskRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteScheduledTask {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::pause_scheduled_task][crate::client::LogAnalytics::pause_scheduled_task] calls.
    #[derive(Clone, Debug)]
    pub struct PauseScheduledTask(RequestBuilder<crate::model::PauseScheduledTaskRequest>);

    impl PauseScheduledTask {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PauseScheduledTaskRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
            (*self.0.stub)
                .pause_scheduled_task(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::PauseScheduledTaskRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [scheduled_task_id][crate::model::PauseScheduledTaskRequest::scheduled_task_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_scheduled_task_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.scheduled_task_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::PauseScheduledTaskRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::PauseScheduledTaskRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::PauseScheduledTaskRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::PauseScheduledTaskRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::PauseScheduledTaskRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::PauseScheduledTaskRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for PauseScheduledTask {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::resume_scheduled_task][crate::client::LogAnalytics::resume_scheduled_task] calls.
    #[derive(Clone, Debug)]
    pub struct ResumeScheduledTask(RequestBuilder<crate::model::ResumeScheduledTaskRequest>);

    impl ResumeScheduledTask {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ResumeScheduledTaskRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
            (*self.0.stub)
                .resume_scheduled_task(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ResumeScheduledTaskRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [scheduled_task_id][crate::model::ResumeScheduledTaskRequest::scheduled_task_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_scheduled_task_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.scheduled_task_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ResumeScheduledTaskRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ResumeScheduledTaskRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::ResumeScheduledTaskRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::ResumeScheduledTaskRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::ResumeScheduledTaskRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::ResumeScheduledTaskRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ResumeScheduledTask {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::change_scheduled_task_compartment][crate::client::LogAnalytics::change_scheduled_task_compartment] calls.
    #[derive(Clone, Debug)]
    pub struct ChangeScheduledTaskCompartment(
        RequestBuilder<crate::model::ChangeScheduledTaskCompartmentRequest>,
    );

    impl ChangeScheduledTaskCompartment {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ChangeScheduledTaskCompartmentRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .change_scheduled_task_compartment(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ChangeScheduledTaskCompartmentRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [scheduled_task_id][crate::model::ChangeScheduledTaskCompartmentRequest::scheduled_task_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_scheduled_task_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.scheduled_task_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ChangeScheduledTaskCompartmentRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ChangeScheduledTaskCompartmentRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::ChangeScheduledTaskCompartmentRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::ChangeScheduledTaskCompartmentRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }

        /// Sets the value of [change_scheduled_task_compartment_details][crate::model::ChangeScheduledTaskCompartmentRequest::change_scheduled_task_compartment_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_change_scheduled_task_compartment_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ChangeScheduledTaskCompartmentDetails>,
        {
            self.0.request.change_scheduled_task_compartment_details =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [change_scheduled_task_compartment_details][crate::model::ChangeScheduledTaskCompartmentRequest::change_scheduled_task_compartment_details].
        pub fn set_or_clear_change_scheduled_task_compartment_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::ChangeScheduledTaskCompartmentDetails>,
        {
            self.0.request.change_scheduled_task_compartment_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ChangeScheduledTaskCompartment {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_source][crate::client::LogAnalytics::delete_source] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteSource(RequestBuilder<crate::model::DeleteSourceRequest>);

    impl DeleteSource {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteSourceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_source(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteSourceRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [source_name][crate::model::DeleteSourceRequest::source_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteSourceRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::DeleteSourceRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteSource {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_source][crate::client::LogAnalytics::get_source] calls.
    #[derive(Clone, Debug)]
    pub struct GetSource(RequestBuilder<crate::model::GetSourceRequest>);

    impl GetSource {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetSourceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsSource>> {
            (*self.0.stub)
                .get_source(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetSourceRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [source_name][crate::model::GetSourceRequest::source_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetSourceRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetSourceRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetSource {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_sources][crate::client::LogAnalytics::list_sources] calls.
    #[derive(Clone, Debug)]
    pub struct ListSources(RequestBuilder<crate::model::ListSourcesRequest>);

    impl ListSources {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSourcesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsSourceCollection>> {
            (*self.0.stub)
                .list_sources(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsSourceCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsSourceCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListSourcesRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [entity_type][crate::model::ListSourcesRequest::entity_type].
        pub fn set_entity_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.entity_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [entity_type][crate::model::ListSourcesRequest::entity_type].
        pub fn set_or_clear_entity_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.entity_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [source_display_text][crate::model::ListSourcesRequest::source_display_text].
        pub fn set_source_display_text<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.source_display_text = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [source_display_text][crate::model::ListSourcesRequest::source_display_text].
        pub fn set_or_clear_source_display_text<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.source_display_text = v.map(|x| x.into());
            self
        }

        /// Sets the value of [is_system][crate::model::ListSourcesRequest::is_system].
        pub fn set_is_system<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::IsSystemFilter>,
        {
            self.0.request.is_system = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_system][crate::model::ListSourcesRequest::is_system].
        pub fn set_or_clear_is_system<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::IsSystemFilter>,
        {
            self.0.request.is_system = v.map(|x| x.into());
            self
        }

        /// Sets the value of [is_auto_association_enabled][crate::model::ListSourcesRequest::is_auto_association_enabled].
        pub fn set_is_auto_association_enabled<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_auto_association_enabled = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_auto_association_enabled][crate::model::ListSourcesRequest::is_auto_association_enabled].
        pub fn set_or_clear_is_auto_association_enabled<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_auto_association_enabled = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListSourcesRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListSourcesRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListSourcesRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_sources_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListSourcesRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_sources_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [name][crate::model::ListSourcesRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::ListSourcesRequest::name].
        pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [categories][crate::model::ListSourcesRequest::categories].
        pub fn set_categories<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.categories = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [categories][crate::model::ListSourcesRequest::categories].
        pub fn set_or_clear_categories<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.categories = v.map(|x| x.into());
            self
        }

        /// Sets the value of [is_simplified][crate::model::ListSourcesRequest::is_simplified].
        pub fn set_is_simplified<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_simplified = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_simplified][crate::model::ListSourcesRequest::is_simplified].
        pub fn set_or_clear_is_simplified<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_simplified = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListSourcesRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListSourcesRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListSourcesRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListSourcesRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListSourcesRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListSourcesRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSources {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::upsert_source][crate::client::LogAnalytics::upsert_source] calls.
    #[derive(Clone, Debug)]
    pub struct UpsertSource(RequestBuilder<crate::model::UpsertSourceRequest>);

    impl UpsertSource {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpsertSourceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsSource>> {
            (*self.0.stub)
                .upsert_source(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpsertSourceRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [create_like_source_id][crate::model::UpsertSourceRequest::create_like_source_id].
        pub fn set_create_like_source_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
            self.0.request.create_like_source_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [create_like_source_id][crate::model::UpsertSourceRequest::create_like_source_id].
        pub fn set_or_clear_create_like_source_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.create_like_source_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [is_incremental][crate::model::UpsertSourceRequest::is_incremental].
        pub fn set_is_incremental<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_incremental = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_incremental][crate::model::UpsertSourceRequest::is_incremental].
        pub fn set_or_clear_is_incremental<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_incremental = v.map(|x| x.into());
            self
        }

        /// Sets the value of [is_ignore_warning][crate::model::UpsertSourceRequest::is_ignore_warning].
        pub fn set_is_ignore_warning<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_ignore_warning = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_ignore_warning][crate::model::UpsertSourceRequest::is_ignore_warning].
        pub fn set_or_clear_is_ignore_warning<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_ignore_warning = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpsertSourceRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::UpsertSourceRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::UpsertSourceRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::UpsertSourceRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpsertSourceRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::UpsertSourceRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }

        /// Sets the value of [upsert_log_analytics_source_details][crate::model::UpsertSourceRequest::upsert_log_analytics_source_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_upsert_log_analytics_source_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::UpsertLogAnalyticsSourceDetails>,
        {
            self.0.request.upsert_log_analytics_source_details =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [upsert_log_analytics_source_details][crate::model::UpsertSourceRequest::upsert_log_analytics_source_details].
        pub fn set_or_clear_upsert_log_analytics_source_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::UpsertLogAnalyticsSourceDetails>,
        {
            self.0.request.upsert_log_analytics_source_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpsertSource {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::validate_source][crate::client::LogAnalytics::validate_source] calls.
    #[derive(Clone, Debug)]
    pub struct ValidateSource(RequestBuilder<crate::model::ValidateSourceRequest>);

    impl ValidateSource {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ValidateSourceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::SourceValidateResults>> {
            (*self.0.stub)
                .validate_source(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ValidateSourceRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ValidateSourceRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ValidateSourceRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::ValidateSourceRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::ValidateSourceRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [upsert_log_analytics_source_details][crate::model::ValidateSourceRequest::upsert_log_analytics_source_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_upsert_log_analytics_source_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::UpsertLogAnalyticsSourceDetails>,
        {
            self.0.request.upsert_log_analytics_source_details =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [upsert_log_analytics_source_details][crate::model::ValidateSourceRequest::upsert_log_analytics_source_details].
        pub fn set_or_clear_upsert_log_analytics_source_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::UpsertLogAnalyticsSourceDetails>,
        {
            self.0.request.upsert_log_analytics_source_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ValidateSource {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::validate_source_extended_field_details][crate::client::LogAnalytics::validate_source_extended_field_details] calls.
    #[derive(Clone, Debug)]
    pub struct ValidateSourceExtendedFieldDetails(
        RequestBuilder<crate::model::ValidateSourceExtendedFieldDetailsRequest>,
    );

    impl ValidateSourceExtendedFieldDetails {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ValidateSourceExtendedFieldDetailsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<
            gax::response::Response<
                crate::model::LogAnalyticsSourceExtendedFieldDefinitionValidation,
            >,
        > {
            (*self.0.stub)
                .validate_source_extended_field_details(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ValidateSourceExtendedFieldDetailsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ValidateSourceExtendedFieldDetailsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ValidateSourceExtendedFieldDetailsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::ValidateSourceExtendedFieldDetailsRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::ValidateSourceExtendedFieldDetailsRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [log_analytics_source][crate::model::ValidateSourceExtendedFieldDetailsRequest::log_analytics_source].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_analytics_source<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::LogAnalyticsSource>,
        {
            self.0.request.log_analytics_source = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [log_analytics_source][crate::model::ValidateSourceExtendedFieldDetailsRequest::log_analytics_source].
        pub fn set_or_clear_log_analytics_source<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::LogAnalyticsSource>,
        {
            self.0.request.log_analytics_source = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ValidateSourceExtendedFieldDetails {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::enable_auto_association][crate::client::LogAnalytics::enable_auto_association] calls.
    #[derive(Clone, Debug)]
    pub struct EnableAutoAssociation(RequestBuilder<crate::model::EnableAutoAssociationRequest>);

    impl EnableAutoAssociation {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::EnableAutoAssociationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::EnableAutoAssociationResult>> {
            (*self.0.stub)
                .enable_auto_association(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::EnableAutoAssociationRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [source_name][crate::model::EnableAutoAssociationRequest::source_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::EnableAutoAssociationRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::EnableAutoAssociationRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::EnableAutoAssociationRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::EnableAutoAssociationRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [enable_auto_association_details][crate::model::EnableAutoAssociationRequest::enable_auto_association_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_enable_auto_association_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::EnableAutoAssociationDetails>,
        {
            self.0.request.enable_auto_association_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [enable_auto_association_details][crate::model::EnableAutoAssociationRequest::enable_auto_association_details].
        pub fn set_or_clear_enable_auto_association_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::EnableAutoAssociationDetails>,
        {
            self.0.request.enable_auto_association_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for EnableAutoAssociation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::disable_auto_association][crate::client::LogAnalytics::disable_auto_association] calls.
    #[derive(Clone, Debug)]
    pub struct DisableAutoAssociation(RequestBuilder<crate::model::DisableAutoAssociationRequest>);

    impl DisableAutoAssociation {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DisableAutoAssociationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::DisableAutoAssociationResult>> {
            (*self.0.stub)
                .disable_auto_association(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DisableAutoAssociationRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [source_name][crate::model::DisableAutoAssociationRequest::source_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DisableAutoAssociationRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::DisableAutoAssociationRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::DisableAutoAssociationRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::DisableAutoAssociationRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [disable_auto_association_details][crate::model::DisableAutoAssociationRequest::disable_auto_association_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_disable_auto_association_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::DisableAutoAssociationDetails>,
        {
            self.0.request.disable_auto_association_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [disable_auto_association_details][crate::model::DisableAutoAssociationRequest::disable_auto_association_details].
        pub fn set_or_clear_disable_auto_association_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::DisableAutoAssociationDetails>,
        {
            self.0.request.disable_auto_association_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DisableAutoAssociation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_auto_associations][crate::client::LogAnalytics::list_auto_associations] calls.
    #[derive(Clone, Debug)]
    pub struct ListAutoAssociations(RequestBuilder<crate::model::ListAutoAssociationsRequest>);

    impl ListAutoAssociations {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListAutoAssociationsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::AutoAssociationCollection>> {
            (*self.0.stub)
                .list_auto_associations(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::AutoAssociationCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::AutoAssociationCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListAutoAssociationsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [source_name][crate::model::ListAutoAssociationsRequest::source_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = v.into();
            self
        }

        /// Sets the value of [sort_order][crate::model::ListAutoAssociationsRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListAutoAssociationsRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListAutoAssociationsRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_auto_associations_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListAutoAssociationsRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_auto_associations_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListAutoAssociationsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListAutoAssociationsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListAutoAssociationsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListAutoAssociationsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListAutoAssociationsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListAutoAssociationsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListAutoAssociations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::suppress_warning][crate::client::LogAnalytics::suppress_warning] calls.
    #[derive(Clone, Debug)]
    pub struct SuppressWarning(RequestBuilder<crate::model::SuppressWarningRequest>);

    impl SuppressWarning {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::SuppressWarningRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .suppress_warning(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::SuppressWarningRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::SuppressWarningRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.compartment_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::SuppressWarningRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::SuppressWarningRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [warning_reference_details][crate::model::SuppressWarningRequest::warning_reference_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_warning_reference_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::WarningReferenceDetails>,
        {
            self.0.request.warning_reference_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [warning_reference_details][crate::model::SuppressWarningRequest::warning_reference_details].
        pub fn set_or_clear_warning_reference_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::WarningReferenceDetails>,
        {
            self.0.request.warning_reference_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for SuppressWarning {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::unsuppress_warning][crate::client::LogAnalytics::unsuppress_warning] calls.
    #[derive(Clone, Debug)]
    pub struct UnsuppressWarning(RequestBuilder<crate::model::UnsuppressWarningRequest>);

    impl UnsuppressWarning {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UnsuppressWarningRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .unsuppress_warning(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UnsuppressWarningRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::UnsuppressWarningRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.compartment_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UnsuppressWarningRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::UnsuppressWarningRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [warning_reference_details][crate::model::UnsuppressWarningRequest::warning_reference_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_warning_reference_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::WarningReferenceDetails>,
        {
            self.0.request.warning_reference_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [warning_reference_details][crate::model::UnsuppressWarningRequest::warning_reference_details].
        pub fn set_or_clear_warning_reference_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::WarningReferenceDetails>,
        {
            self.0.request.warning_reference_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UnsuppressWarning {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_warnings][crate::client::LogAnalytics::list_warnings] calls.
    #[derive(Clone, Debug)]
    pub struct ListWarnings(RequestBuilder<crate::model::ListWarningsRequest>);

    impl ListWarnings {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListWarningsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsWarningCollection>> {
            (*self.0.stub)
                .list_warnings(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsWarningCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsWarningCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListWarningsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListWarningsRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.compartment_id = v.into();
            self
        }

        /// Sets the value of [warning_state][crate::model::ListWarningsRequest::warning_state].
        pub fn set_warning_state<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::WarningStateFilter>,
        {
            self.0.request.warning_state = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [warning_state][crate::model::ListWarningsRequest::warning_state].
        pub fn set_or_clear_warning_state<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::WarningStateFilter>,
        {
            self.0.request.warning_state = v.map(|x| x.into());
            self
        }

        /// Sets the value of [source_name][crate::model::ListWarningsRequest::source_name].
        pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [source_name][crate::model::ListWarningsRequest::source_name].
        pub fn set_or_clear_source_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.source_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [source_pattern][crate::model::ListWarningsRequest::source_pattern].
        pub fn set_source_pattern<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.source_pattern = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [source_pattern][crate::model::ListWarningsRequest::source_pattern].
        pub fn set_or_clear_source_pattern<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.source_pattern = v.map(|x| x.into());
            self
        }

        /// Sets the value of [warning_message][crate::model::ListWarningsRequest::warning_message].
        pub fn set_warning_message<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.warning_message = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [warning_message][crate::model::ListWarningsRequest::warning_message].
        pub fn set_or_clear_warning_message<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.warning_message = v.map(|x| x.into());
            self
        }

        /// Sets the value of [entity_name][crate::model::ListWarningsRequest::entity_name].
        pub fn set_entity_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.entity_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [entity_name][crate::model::ListWarningsRequest::entity_name].
        pub fn set_or_clear_entity_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.entity_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [entity_type][crate::model::ListWarningsRequest::entity_type].
        pub fn set_entity_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.entity_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [entity_type][crate::model::ListWarningsRequest::entity_type].
        pub fn set_or_clear_entity_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.entity_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [warning_type][crate::model::ListWarningsRequest::warning_type].
        pub fn set_warning_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.warning_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [warning_type][crate::model::ListWarningsRequest::warning_type].
        pub fn set_or_clear_warning_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.warning_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [is_no_source][crate::model::ListWarningsRequest::is_no_source].
        pub fn set_is_no_source<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_no_source = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_no_source][crate::model::ListWarningsRequest::is_no_source].
        pub fn set_or_clear_is_no_source<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_no_source = v.map(|x| x.into());
            self
        }

        /// Sets the value of [start_time][crate::model::ListWarningsRequest::start_time].
        pub fn set_start_time<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.start_time = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [start_time][crate::model::ListWarningsRequest::start_time].
        pub fn set_or_clear_start_time<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.start_time = v.map(|x| x.into());
            self
        }

        /// Sets the value of [end_time][crate::model::ListWarningsRequest::end_time].
        pub fn set_end_time<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.end_time = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [end_time][crate::model::ListWarningsRequest::end_time].
        pub fn set_or_clear_end_time<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.end_time = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListWarningsRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListWarningsRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListWarningsRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_warnings_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListWarningsRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_warnings_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListWarningsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListWarningsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListWarningsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListWarningsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListWarningsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListWarningsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListWarnings {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_storage][crate::client::LogAnalytics::get_storage] calls.
    #[derive(Clone, Debug)]
    pub struct GetStorage(RequestBuilder<crate::model::GetStorageRequest>);

    impl GetStorage {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetStorageRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Storage>> {
            (*self.0.stub)
                .get_storage(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetStorageRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetStorageRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetStorageRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetStorage {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::update_storage][crate::client::LogAnalytics::update_storage] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateStorage(RequestBuilder<crate::model::UpdateStorageRequest>);

    impl UpdateStorage {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateStorageRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Storage>> {
            (*self.0.stub)
                .update_storage(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpdateStorageRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateStorageRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::UpdateStorageRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateStorageRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::UpdateStorageRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }

        /// Sets the value of [update_storage_details][crate::model::UpdateStorageRequest::update_storage_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_update_storage_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::UpdateStorageDetails>,
        {
            self.0.request.update_storage_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [update_storage_details][crate::model::UpdateStorageRequest::update_storage_details].
        pub fn set_or_clear_update_storage_details<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::UpdateStorageDetails>,
        {
            self.0.request.update_storage_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateStorage {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_storage_usage][crate::client::LogAnalytics::get_storage_usage] calls.
    #[derive(Clone, Debug)]
    pub struct GetStorageUsage(RequestBuilder<crate::model::GetStorageUsageRequest>);

    impl GetStorageUsage {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetStorageUsageRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::StorageUsage>> {
            (*self.0.stub)
                .get_storage_usage(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetStorageUsageRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetStorageUsageRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetStorageUsageRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetStorageUsage {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::estimate_purge_data_size][crate::client::LogAnalytics::estimate_purge_data_size] calls.
    #[derive(Clone, Debug)]
    pub struct EstimatePurgeDataSize(RequestBuilder<crate::model::EstimatePurgeDataSizeRequest>);

    impl EstimatePurgeDataSize {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::EstimatePurgeDataSizeRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::EstimatePurgeDataSizeResult>> {
            (*self.0.stub)
                .estimate_purge_data_size(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::EstimatePurgeDataSizeRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::EstimatePurgeDataSizeRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::EstimatePurgeDataSizeRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::EstimatePurgeDataSizeRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::EstimatePurgeDataSizeRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [estimate_purge_data_size_details][crate::model::EstimatePurgeDataSizeRequest::estimate_purge_data_size_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_estimate_purge_data_size_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::EstimatePurgeDataSizeDetails>,
        {
            self.0.request.estimate_purge_data_size_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [estimate_purge_data_size_details][crate::model::EstimatePurgeDataSizeRequest::estimate_purge_data_size_details].
        pub fn set_or_clear_estimate_purge_data_size_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::EstimatePurgeDataSizeDetails>,
        {
            self.0.request.estimate_purge_data_size_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for EstimatePurgeDataSize {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::estimate_recall_data_size][crate::client::LogAnalytics::estimate_recall_data_size] calls.
    #[derive(Clone, Debug)]
    pub struct EstimateRecallDataSize(RequestBuilder<crate::model::EstimateRecallDataSizeRequest>);

    impl EstimateRecallDataSize {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::EstimateRecallDataSizeRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::EstimateRecallDataSizeResult>> {
            (*self.0.stub)
                .estimate_recall_data_size(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::EstimateRecallDataSizeRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::EstimateRecallDataSizeRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::EstimateRecallDataSizeRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::EstimateRecallDataSizeRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::EstimateRecallDataSizeRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [estimate_recall_data_size_details][crate::model::EstimateRecallDataSizeRequest::estimate_recall_data_size_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_estimate_recall_data_size_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::EstimateRecallDataSizeDetails>,
        {
            self.0.request.estimate_recall_data_size_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [estimate_recall_data_size_details][crate::model::EstimateRecallDataSizeRequest::estimate_recall_data_size_details].
        pub fn set_or_clear_estimate_recall_data_size_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::EstimateRecallDataSizeDetails>,
        {
            self.0.request.estimate_recall_data_size_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for EstimateRecallDataSize {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::estimate_release_data_size][crate::client::LogAnalytics::estimate_release_data_size] calls.
    #[derive(Clone, Debug)]
    pub struct EstimateReleaseDataSize(
        RequestBuilder<crate::model::EstimateReleaseDataSizeRequest>,
    );

    impl EstimateReleaseDataSize {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::EstimateReleaseDataSizeRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::EstimateReleaseDataSizeResult>> {
            (*self.0.stub)
                .estimate_release_data_size(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::EstimateReleaseDataSizeRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::EstimateReleaseDataSizeRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::EstimateReleaseDataSizeRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::EstimateReleaseDataSizeRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::EstimateReleaseDataSizeRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [estimate_release_data_size_details][crate::model::EstimateReleaseDataSizeRequest::estimate_release_data_size_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_estimate_release_data_size_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::EstimateReleaseDataSizeDetails>,
        {
            self.0.request.estimate_release_data_size_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [estimate_release_data_size_details][crate::model::EstimateReleaseDataSizeRequest::estimate_release_data_size_details].
        pub fn set_or_clear_estimate_release_data_size_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::EstimateReleaseDataSizeDetails>,
        {
            self.0.request.estimate_release_data_size_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for EstimateReleaseDataSize {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::purge_storage_data][crate::client::LogAnalytics::purge_storage_data] calls.
    #[derive(Clone, Debug)]
    pub struct PurgeStorageData(RequestBuilder<crate::model::PurgeStorageDataRequest>);

    impl PurgeStorageData {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PurgeStorageDataRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .purge_storage_data(self.0.request, self.0.options)
                .await
        }

        /// Creates a [Poller][lro::Poller] to wait for the work request started by
        /// this operation.
        ///
        /// The poller sends the request, then fetches the work request named in the
        /// `opc-work-request-id` response header until it completes.
        pub fn poller(self) -> impl lro::Poller<crate::model::StorageWorkRequest> {
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let namespace_name = self.0.request.namespace_name.clone();

            let query = move |id: String| {
                let stub = stub.clone();
                let options = options.clone();
                let request = crate::model::GetStorageWorkRequestRequest::new()
                    .set_namespace_name(namespace_name.clone())
                    .set_work_request_id(id);
                async move {
                    stub.get_storage_work_request(request, options)
                        .await
                        .map(gax::response::Response::into_body)
                }
            };

            let start = move || async move {
                let response = self.send().await?;
                response
                    .opc_work_request_id()
                    .map(str::to_string)
                    .ok_or_else(|| gax::error::Error::deser(MISSING_WORK_REQUEST_ID))
            };

            lro::internal::new_poller(polling_error_policy, polling_backoff_policy, start, query)
        }

        /// Sets the value of [namespace_name][crate::model::PurgeStorageDataRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::PurgeStorageDataRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::PurgeStorageDataRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::PurgeStorageDataRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::PurgeStorageDataRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [purge_storage_data_details][crate::model::PurgeStorageDataRequest::purge_storage_data_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_purge_storage_data_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::PurgeStorageDataDetails>,
        {
            self.0.request.purge_storage_data_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [purge_storage_data_details][crate::model::PurgeStorageDataRequest::purge_storage_data_details].
        pub fn set_or_clear_purge_storage_data_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::PurgeStorageDataDetails>,
        {
            self.0.request.purge_storage_data_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for PurgeStorageData {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::recall_archived_data][crate::client::LogAnalytics::recall_archived_data] calls.
    #[derive(Clone, Debug)]
    pub struct RecallArchivedData(RequestBuilder<crate::model::RecallArchivedDataRequest>);

    impl RecallArchivedData {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RecallArchivedDataRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .recall_archived_data(self.0.request, self.0.options)
                .await
        }

        /// Creates a [Poller][lro::Poller] to wait for the work request started by
        /// this operation.
        ///
        /// The poller sends the request, then fetches the work request named in the
        /// `opc-work-request-id` response header until it completes.
        pub fn poller(self) -> impl lro::Poller<crate::model::StorageWorkRequest> {
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let namespace_name = self.0.request.namespace_name.clone();

            let query = move |id: String| {
                let stub = stub.clone();
                let options = options.clone();
                let request = crate::model::GetStorageWorkRequestRequest::new()
                    .set_namespace_name(namespace_name.clone())
                    .set_work_request_id(id);
                async move {
                    stub.get_storage_work_request(request, options)
                        .await
                        .map(gax::response::Response::into_body)
                }
            };

            let start = move || async move {
                let response = self.send().await?;
                response
                    .opc_work_request_id()
                    .map(str::to_string)
                    .ok_or_else(|| gax::error::Error::deser(MISSING_WORK_REQUEST_ID))
            };

            lro::internal::new_poller(polling_error_policy, polling_backoff_policy, start, query)
        }

        /// Sets the value of [namespace_name][crate::model::RecallArchivedDataRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::RecallArchivedDataRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::RecallArchivedDataRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::RecallArchivedDataRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::RecallArchivedDataRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [recall_archived_data_details][crate::model::RecallArchivedDataRequest::recall_archived_data_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_recall_archived_data_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::RecallArchivedDataDetails>,
        {
            self.0.request.recall_archived_data_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [recall_archived_data_details][crate::model::RecallArchivedDataRequest::recall_archived_data_details].
        pub fn set_or_clear_recall_archived_data_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::RecallArchivedDataDetails>,
        {
            self.0.request.recall_archived_data_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RecallArchivedData {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::release_recalled_data][crate::client::LogAnalytics::release_recalled_data] calls.
    #[derive(Clone, Debug)]
    pub struct ReleaseRecalledData(RequestBuilder<crate::model::ReleaseRecalledDataRequest>);

    impl ReleaseRecalledData {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ReleaseRecalledDataRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .release_recalled_data(self.0.request, self.0.options)
                .await
        }

        /// Creates a [Poller][lro::Poller] to wait for the work request started by
        /// this operation.
        ///
        /// The poller sends the request, then fetches the work request named in the
        /// `opc-work-request-id` response header until it completes.
        pub fn poller(self) -> impl lro::Poller<crate::model::StorageWorkRequest> {
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let namespace_name = self.0.request.namespace_name.clone();

            let query = move |id: String| {
                let stub = stub.clone();
                let options = options.clone();
                let request = crate::model::GetStorageWorkRequestRequest::new()
                    .set_namespace_name(namespace_name.clone())
                    .set_work_request_id(id);
                async move {
                    stub.get_storage_work_request(request, options)
                        .await
                        .map(gax::response::Response::into_body)
                }
            };

            let start = move || async move {
                let response = self.send().await?;
                response
                    .opc_work_request_id()
                    .map(str::to_string)
                    .ok_or_else(|| gax::error::Error::deser(MISSING_WORK_REQUEST_ID))
            };

            lro::internal::new_poller(polling_error_policy, polling_backoff_policy, start, query)
        }

        /// Sets the value of [namespace_name][crate::model::ReleaseRecalledDataRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ReleaseRecalledDataRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ReleaseRecalledDataRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::ReleaseRecalledDataRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::ReleaseRecalledDataRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [release_recalled_data_details][crate::model::ReleaseRecalledDataRequest::release_recalled_data_details].
        ///
        /// This is a **required** field for requests.
        pub fn set_release_recalled_data_details<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ReleaseRecalledDataDetails>,
        {
            self.0.request.release_recalled_data_details = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [release_recalled_data_details][crate::model::ReleaseRecalledDataRequest::release_recalled_data_details].
        pub fn set_or_clear_release_recalled_data_details<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<crate::model::ReleaseRecalledDataDetails>,
        {
            self.0.request.release_recalled_data_details = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ReleaseRecalledData {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_storage_work_request][crate::client::LogAnalytics::get_storage_work_request] calls.
    #[derive(Clone, Debug)]
    pub struct GetStorageWorkRequest(RequestBuilder<crate::model::GetStorageWorkRequestRequest>);

    impl GetStorageWorkRequest {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetStorageWorkRequestRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::StorageWorkRequest>> {
            (*self.0.stub)
                .get_storage_work_request(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetStorageWorkRequestRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [work_request_id][crate::model::GetStorageWorkRequestRequest::work_request_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_work_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.work_request_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetStorageWorkRequestRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetStorageWorkRequestRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetStorageWorkRequest {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_storage_work_requests][crate::client::LogAnalytics::list_storage_work_requests] calls.
    #[derive(Clone, Debug)]
    pub struct ListStorageWorkRequests(
        RequestBuilder<crate::model::ListStorageWorkRequestsRequest>,
    );

    impl ListStorageWorkRequests {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListStorageWorkRequestsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::StorageWorkRequestCollection>> {
            (*self.0.stub)
                .list_storage_work_requests(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::StorageWorkRequestCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::StorageWorkRequestCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListStorageWorkRequestsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListStorageWorkRequestsRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.compartment_id = v.into();
            self
        }

        /// Sets the value of [sort_order][crate::model::ListStorageWorkRequestsRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListStorageWorkRequestsRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListStorageWorkRequestsRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_storage_work_requests_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListStorageWorkRequestsRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_storage_work_requests_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [operation_type][crate::model::ListStorageWorkRequestsRequest::operation_type].
        pub fn set_operation_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::StorageOperationType>,
        {
            self.0.request.operation_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [operation_type][crate::model::ListStorageWorkRequestsRequest::operation_type].
        pub fn set_or_clear_operation_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::StorageOperationType>,
        {
            self.0.request.operation_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [status][crate::model::ListStorageWorkRequestsRequest::status].
        pub fn set_status<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::OperationStatus>,
        {
            self.0.request.status = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [status][crate::model::ListStorageWorkRequestsRequest::status].
        pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::OperationStatus>,
        {
            self.0.request.status = v.map(|x| x.into());
            self
        }

        /// Sets the value of [time_started_greater_than_or_equal][crate::model::ListStorageWorkRequestsRequest::time_started_greater_than_or_equal].
        pub fn set_time_started_greater_than_or_equal<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<time::OffsetDateTime>,
        {
            self.0.request.time_started_greater_than_or_equal = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [time_started_greater_than_or_equal][crate::model::ListStorageWorkRequestsRequest::time_started_greater_than_or_equal].
        pub fn set_or_clear_time_started_greater_than_or_equal<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<time::OffsetDateTime>,
        {
            self.0.request.time_started_greater_than_or_equal = v.map(|x| x.into());
            self
        }

        /// Sets the value of [time_finished_less_than_or_equal][crate::model::ListStorageWorkRequestsRequest::time_finished_less_than_or_equal].
        pub fn set_time_finished_less_than_or_equal<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<time::OffsetDateTime>,
        {
            self.0.request.time_finished_less_than_or_equal = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [time_finished_less_than_or_equal][crate::model::ListStorageWorkRequestsRequest::time_finished_less_than_or_equal].
        pub fn set_or_clear_time_finished_less_than_or_equal<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<time::OffsetDateTime>,
        {
            self.0.request.time_finished_less_than_or_equal = v.map(|x| x.into());
            self
        }

        /// Sets the value of [policy_name][crate::model::ListStorageWorkRequestsRequest::policy_name].
        pub fn set_policy_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.policy_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [policy_name][crate::model::ListStorageWorkRequestsRequest::policy_name].
        pub fn set_or_clear_policy_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.policy_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [policy_id][crate::model::ListStorageWorkRequestsRequest::policy_id].
        pub fn set_policy_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.policy_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [policy_id][crate::model::ListStorageWorkRequestsRequest::policy_id].
        pub fn set_or_clear_policy_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.policy_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListStorageWorkRequestsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListStorageWorkRequestsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListStorageWorkRequestsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListStorageWorkRequestsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListStorageWorkRequestsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListStorageWorkRequestsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListStorageWorkRequests {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_storage_work_request_errors][crate::client::LogAnalytics::list_storage_work_request_errors] calls.
    #[derive(Clone, Debug)]
    pub struct ListStorageWorkRequestErrors(
        RequestBuilder<crate::model::ListStorageWorkRequestErrorsRequest>,
    );

    impl ListStorageWorkRequestErrors {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListStorageWorkRequestErrorsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::WorkRequestErrorCollection>> {
            (*self.0.stub)
                .list_storage_work_request_errors(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::WorkRequestErrorCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::WorkRequestErrorCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListStorageWorkRequestErrorsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [work_request_id][crate::model::ListStorageWorkRequestErrorsRequest::work_request_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_work_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.work_request_id = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListStorageWorkRequestErrorsRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.compartment_id = v.into();
            self
        }

        /// Sets the value of [sort_order][crate::model::ListStorageWorkRequestErrorsRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListStorageWorkRequestErrorsRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListStorageWorkRequestErrorsRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_storage_work_request_errors_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListStorageWorkRequestErrorsRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_storage_work_request_errors_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListStorageWorkRequestErrorsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListStorageWorkRequestErrorsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListStorageWorkRequestErrorsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListStorageWorkRequestErrorsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListStorageWorkRequestErrorsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListStorageWorkRequestErrorsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListStorageWorkRequestErrors {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_recall_count][crate::client::LogAnalytics::get_recall_count] calls.
    #[derive(Clone, Debug)]
    pub struct GetRecallCount(RequestBuilder<crate::model::GetRecallCountRequest>);

    impl GetRecallCount {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetRecallCountRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::RecallCount>> {
            (*self.0.stub)
                .get_recall_count(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetRecallCountRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetRecallCountRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetRecallCountRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetRecallCount {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_recalled_data_size][crate::client::LogAnalytics::get_recalled_data_size] calls.
    #[derive(Clone, Debug)]
    pub struct GetRecalledDataSize(RequestBuilder<crate::model::GetRecalledDataSizeRequest>);

    impl GetRecalledDataSize {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetRecalledDataSizeRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::RecalledDataSize>> {
            (*self.0.stub)
                .get_recalled_data_size(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetRecalledDataSizeRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [time_data_started][crate::model::GetRecalledDataSizeRequest::time_data_started].
        pub fn set_time_data_started<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<time::OffsetDateTime>,
        {
            self.0.request.time_data_started = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [time_data_started][crate::model::GetRecalledDataSizeRequest::time_data_started].
        pub fn set_or_clear_time_data_started<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<time::OffsetDateTime>,
        {
            self.0.request.time_data_started = v.map(|x| x.into());
            self
        }

        /// Sets the value of [time_data_ended][crate::model::GetRecalledDataSizeRequest::time_data_ended].
        pub fn set_time_data_ended<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<time::OffsetDateTime>,
        {
            self.0.request.time_data_ended = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [time_data_ended][crate::model::GetRecalledDataSizeRequest::time_data_ended].
        pub fn set_or_clear_time_data_ended<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<time::OffsetDateTime>,
        {
            self.0.request.time_data_ended = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetRecalledDataSizeRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetRecalledDataSizeRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetRecalledDataSize {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_recalled_data][crate::client::LogAnalytics::list_recalled_data] calls.
    #[derive(Clone, Debug)]
    pub struct ListRecalledData(RequestBuilder<crate::model::ListRecalledDataRequest>);

    impl ListRecalledData {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListRecalledDataRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::RecalledDataCollection>> {
            (*self.0.stub)
                .list_recalled_data(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::RecalledDataCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::RecalledDataCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListRecalledDataRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [sort_order][crate::model::ListRecalledDataRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListRecalledDataRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListRecalledDataRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_recalled_data_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListRecalledDataRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_recalled_data_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [time_data_started_greater_than_or_equal][crate::model::ListRecalledDataRequest::time_data_started_greater_than_or_equal].
        pub fn set_time_data_started_greater_than_or_equal<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<time::OffsetDateTime>,
        {
            self.0.request.time_data_started_greater_than_or_equal =
                std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [time_data_started_greater_than_or_equal][crate::model::ListRecalledDataRequest::time_data_started_greater_than_or_equal].
        pub fn set_or_clear_time_data_started_greater_than_or_equal<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<time::OffsetDateTime>,
        {
            self.0.request.time_data_started_greater_than_or_equal = v.map(|x| x.into());
            self
        }

        /// Sets the value of [time_data_ended_less_than][crate::model::ListRecalledDataRequest::time_data_ended_less_than].
        pub fn set_time_data_ended_less_than<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<time::OffsetDateTime>,
        {
            self.0.request.time_data_ended_less_than = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [time_data_ended_less_than][crate::model::ListRecalledDataRequest::time_data_ended_less_than].
        pub fn set_or_clear_time_data_ended_less_than<T>(
            mut self,
            v: std::option::Option<T>,
        ) -> Self
        where
            T: std::convert::Into<time::OffsetDateTime>,
        {
            self.0.request.time_data_ended_less_than = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListRecalledDataRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListRecalledDataRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListRecalledDataRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListRecalledDataRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListRecalledDataRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListRecalledDataRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListRecalledData {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_overlapping_recalls][crate::client::LogAnalytics::list_overlapping_recalls] calls.
    #[derive(Clone, Debug)]
    pub struct ListOverlappingRecalls(RequestBuilder<crate::model::ListOverlappingRecallsRequest>);

    impl ListOverlappingRecalls {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListOverlappingRecallsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::OverlappingRecallCollection>> {
            (*self.0.stub)
                .list_overlapping_recalls(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::OverlappingRecallCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::OverlappingRecallCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListOverlappingRecallsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [sort_order][crate::model::ListOverlappingRecallsRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListOverlappingRecallsRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListOverlappingRecallsRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_overlapping_recalls_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListOverlappingRecallsRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_overlapping_recalls_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [time_data_started][crate::model::ListOverlappingRecallsRequest::time_data_started].
        pub fn set_time_data_started<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<time::OffsetDateTime>,
        {
            self.0.request.time_data_started = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [time_data_started][crate::model::ListOverlappingRecallsRequest::time_data_started].
        pub fn set_or_clear_time_data_started<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<time::OffsetDateTime>,
        {
            self.0.request.time_data_started = v.map(|x| x.into());
            self
        }

        /// Sets the value of [time_data_ended][crate::model::ListOverlappingRecallsRequest::time_data_ended].
        pub fn set_time_data_ended<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<time::OffsetDateTime>,
        {
            self.0.request.time_data_ended = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [time_data_ended][crate::model::ListOverlappingRecallsRequest::time_data_ended].
        pub fn set_or_clear_time_data_ended<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<time::OffsetDateTime>,
        {
            self.0.request.time_data_ended = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListOverlappingRecallsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListOverlappingRecallsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListOverlappingRecallsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListOverlappingRecallsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListOverlappingRecallsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListOverlappingRecallsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListOverlappingRecalls {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::set_unprocessed_data_bucket][crate::client::LogAnalytics::set_unprocessed_data_bucket] calls.
    #[derive(Clone, Debug)]
    pub struct SetUnprocessedDataBucket(
        RequestBuilder<crate::model::SetUnprocessedDataBucketRequest>,
    );

    impl SetUnprocessedDataBucket {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::SetUnprocessedDataBucketRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::UnprocessedDataBucket>> {
            (*self.0.stub)
                .set_unprocessed_data_bucket(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::SetUnprocessedDataBucketRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [bucket_name][crate::model::SetUnprocessedDataBucketRequest::bucket_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_bucket_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.bucket_name = v.into();
            self
        }

        /// Sets the value of [is_enabled][crate::model::SetUnprocessedDataBucketRequest::is_enabled].
        pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_enabled = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_enabled][crate::model::SetUnprocessedDataBucketRequest::is_enabled].
        pub fn set_or_clear_is_enabled<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.is_enabled = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::SetUnprocessedDataBucketRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::SetUnprocessedDataBucketRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::SetUnprocessedDataBucketRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::SetUnprocessedDataBucketRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for SetUnprocessedDataBucket {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_unprocessed_data_bucket][crate::client::LogAnalytics::get_unprocessed_data_bucket] calls.
    #[derive(Clone, Debug)]
    pub struct GetUnprocessedDataBucket(
        RequestBuilder<crate::model::GetUnprocessedDataBucketRequest>,
    );

    impl GetUnprocessedDataBucket {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetUnprocessedDataBucketRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::UnprocessedDataBucket>> {
            (*self.0.stub)
                .get_unprocessed_data_bucket(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetUnprocessedDataBucketRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetUnprocessedDataBucketRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetUnprocessedDataBucketRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetUnprocessedDataBucket {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::enable_archiving][crate::client::LogAnalytics::enable_archiving] calls.
    #[derive(Clone, Debug)]
    pub struct EnableArchiving(RequestBuilder<crate::model::EnableArchivingRequest>);

    impl EnableArchiving {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::EnableArchivingRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .enable_archiving(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::EnableArchivingRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::EnableArchivingRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::EnableArchivingRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::EnableArchivingRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::EnableArchivingRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::EnableArchivingRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::EnableArchivingRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for EnableArchiving {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::disable_archiving][crate::client::LogAnalytics::disable_archiving] calls.
    #[derive(Clone, Debug)]
    pub struct DisableArchiving(RequestBuilder<crate::model::DisableArchivingRequest>);

    impl DisableArchiving {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DisableArchivingRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .disable_archiving(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DisableArchivingRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DisableArchivingRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::DisableArchivingRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::DisableArchivingRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::DisableArchivingRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DisableArchivingRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::DisableArchivingRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DisableArchiving {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::upload_log_file][crate::client::LogAnalytics::upload_log_file] calls.
    #[derive(Clone, Debug)]
    pub struct UploadLogFile(RequestBuilder<crate::model::UploadLogFileRequest>);

    impl UploadLogFile {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UploadLogFileRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Upload>> {
            (*self.0.stub)
                .upload_log_file(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UploadLogFileRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [upload_name][crate::model::UploadLogFileRequest::upload_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_upload_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.upload_name = v.into();
            self
        }

        /// Sets the value of [log_source_name][crate::model::UploadLogFileRequest::log_source_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_source_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_source_name = v.into();
            self
        }

        /// Sets the value of [filename][crate::model::UploadLogFileRequest::filename].
        ///
        /// This is a **required** field for requests.
        pub fn set_filename<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.filename = v.into();
            self
        }

        /// Sets the value of [entity_id][crate::model::UploadLogFileRequest::entity_id].
        pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.entity_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [entity_id][crate::model::UploadLogFileRequest::entity_id].
        pub fn set_or_clear_entity_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.entity_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [timezone][crate::model::UploadLogFileRequest::timezone].
        pub fn set_timezone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.timezone = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [timezone][crate::model::UploadLogFileRequest::timezone].
        pub fn set_or_clear_timezone<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.timezone = v.map(|x| x.into());
            self
        }

        /// Sets the value of [char_encoding][crate::model::UploadLogFileRequest::char_encoding].
        pub fn set_char_encoding<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.char_encoding = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [char_encoding][crate::model::UploadLogFileRequest::char_encoding].
        pub fn set_or_clear_char_encoding<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.char_encoding = v.map(|x| x.into());
            self
        }

        /// Sets the value of [date_format][crate::model::UploadLogFileRequest::date_format].
        pub fn set_date_format<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.date_format = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [date_format][crate::model::UploadLogFileRequest::date_format].
        pub fn set_or_clear_date_format<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.date_format = v.map(|x| x.into());
            self
        }

        /// Sets the value of [date_year][crate::model::UploadLogFileRequest::date_year].
        pub fn set_date_year<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.date_year = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [date_year][crate::model::UploadLogFileRequest::date_year].
        pub fn set_or_clear_date_year<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.date_year = v.map(|x| x.into());
            self
        }

        /// Sets the value of [invalidate_cache][crate::model::UploadLogFileRequest::invalidate_cache].
        pub fn set_invalidate_cache<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.invalidate_cache = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [invalidate_cache][crate::model::UploadLogFileRequest::invalidate_cache].
        pub fn set_or_clear_invalidate_cache<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.invalidate_cache = v.map(|x| x.into());
            self
        }

        /// Sets the value of [log_set][crate::model::UploadLogFileRequest::log_set].
        pub fn set_log_set<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.log_set = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [log_set][crate::model::UploadLogFileRequest::log_set].
        pub fn set_or_clear_log_set<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_set = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UploadLogFileRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::UploadLogFileRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::UploadLogFileRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::UploadLogFileRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_meta_loggrpid][crate::model::UploadLogFileRequest::opc_meta_loggrpid].
        ///
        /// This is a **required** field for requests.
        pub fn set_opc_meta_loggrpid<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_meta_loggrpid = v.into();
            self
        }

        /// Sets the value of [content_md5][crate::model::UploadLogFileRequest::content_md5].
        pub fn set_content_md5<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.content_md5 = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [content_md5][crate::model::UploadLogFileRequest::content_md5].
        pub fn set_or_clear_content_md5<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.content_md5 = v.map(|x| x.into());
            self
        }

        /// Sets the value of [expect][crate::model::UploadLogFileRequest::expect].
        pub fn set_expect<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.expect = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [expect][crate::model::UploadLogFileRequest::expect].
        pub fn set_or_clear_expect<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.expect = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_meta_properties][crate::model::UploadLogFileRequest::opc_meta_properties].
        pub fn set_opc_meta_properties<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_meta_properties = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_meta_properties][crate::model::UploadLogFileRequest::opc_meta_properties].
        pub fn set_or_clear_opc_meta_properties<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_meta_properties = v.map(|x| x.into());
            self
        }

        /// Sets the value of [content_type][crate::model::UploadLogFileRequest::content_type].
        pub fn set_content_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.content_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [content_type][crate::model::UploadLogFileRequest::content_type].
        pub fn set_or_clear_content_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.content_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [body][crate::model::UploadLogFileRequest::body].
        ///
        /// This is a **required** field for requests.
        pub fn set_body<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
            self.0.request.body = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [body][crate::model::UploadLogFileRequest::body].
        pub fn set_or_clear_body<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bytes::Bytes>,
        {
            self.0.request.body = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UploadLogFile {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::upload_log_events_file][crate::client::LogAnalytics::upload_log_events_file] calls.
    #[derive(Clone, Debug)]
    pub struct UploadLogEventsFile(RequestBuilder<crate::model::UploadLogEventsFileRequest>);

    impl UploadLogEventsFile {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UploadLogEventsFileRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .upload_log_events_file(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UploadLogEventsFileRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [log_group_id][crate::model::UploadLogEventsFileRequest::log_group_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_group_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_group_id = v.into();
            self
        }

        /// Sets the value of [log_set][crate::model::UploadLogEventsFileRequest::log_set].
        pub fn set_log_set<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.log_set = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [log_set][crate::model::UploadLogEventsFileRequest::log_set].
        pub fn set_or_clear_log_set<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_set = v.map(|x| x.into());
            self
        }

        /// Sets the value of [payload_type][crate::model::UploadLogEventsFileRequest::payload_type].
        pub fn set_payload_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::PayloadType>,
        {
            self.0.request.payload_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [payload_type][crate::model::UploadLogEventsFileRequest::payload_type].
        pub fn set_or_clear_payload_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::PayloadType>,
        {
            self.0.request.payload_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UploadLogEventsFileRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::UploadLogEventsFileRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::UploadLogEventsFileRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::UploadLogEventsFileRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_meta_properties][crate::model::UploadLogEventsFileRequest::opc_meta_properties].
        pub fn set_opc_meta_properties<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_meta_properties = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_meta_properties][crate::model::UploadLogEventsFileRequest::opc_meta_properties].
        pub fn set_or_clear_opc_meta_properties<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_meta_properties = v.map(|x| x.into());
            self
        }

        /// Sets the value of [expect][crate::model::UploadLogEventsFileRequest::expect].
        pub fn set_expect<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.expect = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [expect][crate::model::UploadLogEventsFileRequest::expect].
        pub fn set_or_clear_expect<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.expect = v.map(|x| x.into());
            self
        }

        /// Sets the value of [content_type][crate::model::UploadLogEventsFileRequest::content_type].
        pub fn set_content_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.content_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [content_type][crate::model::UploadLogEventsFileRequest::content_type].
        pub fn set_or_clear_content_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.content_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [body][crate::model::UploadLogEventsFileRequest::body].
        ///
        /// This is a **required** field for requests.
        pub fn set_body<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
            self.0.request.body = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [body][crate::model::UploadLogEventsFileRequest::body].
        pub fn set_or_clear_body<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bytes::Bytes>,
        {
            self.0.request.body = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UploadLogEventsFile {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::upload_discovery_data][crate::client::LogAnalytics::upload_discovery_data] calls.
    #[derive(Clone, Debug)]
    pub struct UploadDiscoveryData(RequestBuilder<crate::model::UploadDiscoveryDataRequest>);

    impl UploadDiscoveryData {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UploadDiscoveryDataRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .upload_discovery_data(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UploadDiscoveryDataRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [discovery_data_type][crate::model::UploadDiscoveryDataRequest::discovery_data_type].
        pub fn set_discovery_data_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::DiscoveryDataType>,
        {
            self.0.request.discovery_data_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [discovery_data_type][crate::model::UploadDiscoveryDataRequest::discovery_data_type].
        pub fn set_or_clear_discovery_data_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::DiscoveryDataType>,
        {
            self.0.request.discovery_data_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [log_group_id][crate::model::UploadDiscoveryDataRequest::log_group_id].
        pub fn set_log_group_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_group_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [log_group_id][crate::model::UploadDiscoveryDataRequest::log_group_id].
        pub fn set_or_clear_log_group_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.log_group_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [payload_type][crate::model::UploadDiscoveryDataRequest::payload_type].
        pub fn set_payload_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::PayloadType>,
        {
            self.0.request.payload_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [payload_type][crate::model::UploadDiscoveryDataRequest::payload_type].
        pub fn set_or_clear_payload_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::PayloadType>,
        {
            self.0.request.payload_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UploadDiscoveryDataRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::UploadDiscoveryDataRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::UploadDiscoveryDataRequest::opc_retry_token].
        pub fn set_opc_retry_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_retry_token][crate::model::UploadDiscoveryDataRequest::opc_retry_token].
        pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_retry_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_meta_properties][crate::model::UploadDiscoveryDataRequest::opc_meta_properties].
        pub fn set_opc_meta_properties<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_meta_properties = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_meta_properties][crate::model::UploadDiscoveryDataRequest::opc_meta_properties].
        pub fn set_or_clear_opc_meta_properties<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_meta_properties = v.map(|x| x.into());
            self
        }

        /// Sets the value of [expect][crate::model::UploadDiscoveryDataRequest::expect].
        pub fn set_expect<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.expect = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [expect][crate::model::UploadDiscoveryDataRequest::expect].
        pub fn set_or_clear_expect<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.expect = v.map(|x| x.into());
            self
        }

        /// Sets the value of [content_type][crate::model::UploadDiscoveryDataRequest::content_type].
        pub fn set_content_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.content_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [content_type][crate::model::UploadDiscoveryDataRequest::content_type].
        pub fn set_or_clear_content_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.content_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [body][crate::model::UploadDiscoveryDataRequest::body].
        ///
        /// This is a **required** field for requests.
        pub fn set_body<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
            self.0.request.body = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [body][crate::model::UploadDiscoveryDataRequest::body].
        pub fn set_or_clear_body<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bytes::Bytes>,
        {
            self.0.request.body = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UploadDiscoveryData {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_upload][crate::client::LogAnalytics::get_upload] calls.
    #[derive(Clone, Debug)]
    pub struct GetUpload(RequestBuilder<crate::model::GetUploadRequest>);

    impl GetUpload {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetUploadRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Upload>> {
            (*self.0.stub)
                .get_upload(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetUploadRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [upload_reference][crate::model::GetUploadRequest::upload_reference].
        ///
        /// This is a **required** field for requests.
        pub fn set_upload_reference<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.upload_reference = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetUploadRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetUploadRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetUpload {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_uploads][crate::client::LogAnalytics::list_uploads] calls.
    #[derive(Clone, Debug)]
    pub struct ListUploads(RequestBuilder<crate::model::ListUploadsRequest>);

    impl ListUploads {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListUploadsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::UploadCollection>> {
            (*self.0.stub)
                .list_uploads(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::UploadCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::UploadCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListUploadsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [name][crate::model::ListUploadsRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::ListUploadsRequest::name].
        pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [name_contains][crate::model::ListUploadsRequest::name_contains].
        pub fn set_name_contains<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.name_contains = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name_contains][crate::model::ListUploadsRequest::name_contains].
        pub fn set_or_clear_name_contains<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.name_contains = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListUploadsRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListUploadsRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListUploadsRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_uploads_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListUploadsRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_uploads_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [warnings_filter][crate::model::ListUploadsRequest::warnings_filter].
        pub fn set_warnings_filter<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_uploads_request::WarningsFilter>,
        {
            self.0.request.warnings_filter = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [warnings_filter][crate::model::ListUploadsRequest::warnings_filter].
        pub fn set_or_clear_warnings_filter<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_uploads_request::WarningsFilter>,
        {
            self.0.request.warnings_filter = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListUploadsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListUploadsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListUploadsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListUploadsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListUploadsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListUploadsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListUploads {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_upload][crate::client::LogAnalytics::delete_upload] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteUpload(RequestBuilder<crate::model::DeleteUploadRequest>);

    impl DeleteUpload {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteUploadRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_upload(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteUploadRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [upload_reference][crate::model::DeleteUploadRequest::upload_reference].
        ///
        /// This is a **required** field for requests.
        pub fn set_upload_reference<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.upload_reference = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteUploadRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::DeleteUploadRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteUploadRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::DeleteUploadRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteUpload {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_upload_files][crate::client::LogAnalytics::list_upload_files] calls.
    #[derive(Clone, Debug)]
    pub struct ListUploadFiles(RequestBuilder<crate::model::ListUploadFilesRequest>);

    impl ListUploadFiles {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListUploadFilesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::UploadFileCollection>> {
            (*self.0.stub)
                .list_upload_files(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::UploadFileCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::UploadFileCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListUploadFilesRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [upload_reference][crate::model::ListUploadFilesRequest::upload_reference].
        ///
        /// This is a **required** field for requests.
        pub fn set_upload_reference<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.upload_reference = v.into();
            self
        }

        /// Sets the value of [sort_order][crate::model::ListUploadFilesRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListUploadFilesRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListUploadFilesRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_upload_files_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListUploadFilesRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_upload_files_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [search_str][crate::model::ListUploadFilesRequest::search_str].
        pub fn set_search_str<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.search_str = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [search_str][crate::model::ListUploadFilesRequest::search_str].
        pub fn set_or_clear_search_str<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.search_str = v.map(|x| x.into());
            self
        }

        /// Sets the value of [status][crate::model::ListUploadFilesRequest::status].
        pub fn set_status<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::UploadFileStatus>,
        {
            self.0.request.status = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [limit][crate::model::ListUploadFilesRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListUploadFilesRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListUploadFilesRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListUploadFilesRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListUploadFilesRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListUploadFilesRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListUploadFiles {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_upload_file][crate::client::LogAnalytics::delete_upload_file] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteUploadFile(RequestBuilder<crate::model::DeleteUploadFileRequest>);

    impl DeleteUploadFile {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteUploadFileRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_upload_file(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteUploadFileRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [upload_reference][crate::model::DeleteUploadFileRequest::upload_reference].
        ///
        /// This is a **required** field for requests.
        pub fn set_upload_reference<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.upload_reference = v.into();
            self
        }

        /// Sets the value of [file_reference][crate::model::DeleteUploadFileRequest::file_reference].
        ///
        /// This is a **required** field for requests.
        pub fn set_file_reference<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.file_reference = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteUploadFileRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::DeleteUploadFileRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteUploadFileRequest::if_match].
        pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [if_match][crate::model::DeleteUploadFileRequest::if_match].
        pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.if_match = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteUploadFile {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_upload_warnings][crate::client::LogAnalytics::list_upload_warnings] calls.
    #[derive(Clone, Debug)]
    pub struct ListUploadWarnings(RequestBuilder<crate::model::ListUploadWarningsRequest>);

    impl ListUploadWarnings {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListUploadWarningsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::UploadWarningCollection>> {
            (*self.0.stub)
                .list_upload_warnings(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::UploadWarningCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::UploadWarningCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListUploadWarningsRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [upload_reference][crate::model::ListUploadWarningsRequest::upload_reference].
        ///
        /// This is a **required** field for requests.
        pub fn set_upload_reference<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.upload_reference = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListUploadWarningsRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListUploadWarningsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListUploadWarningsRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListUploadWarningsRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListUploadWarningsRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListUploadWarningsRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListUploadWarnings {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_upload_warning][crate::client::LogAnalytics::delete_upload_warning] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteUploadWarning(RequestBuilder<crate::model::DeleteUploadWarningRequest>);

    impl DeleteUploadWarning {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteUploadWarningRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_upload_warning(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteUploadWarningRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [upload_reference][crate::model::DeleteUploadWarningRequest::upload_reference].
        ///
        /// This is a **required** field for requests.
        pub fn set_upload_reference<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.upload_reference = v.into();
            self
        }

        /// Sets the value of [warning_reference][crate::model::DeleteUploadWarningRequest::warning_reference].
        ///
        /// This is a **required** field for requests.
        pub fn set_warning_reference<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.warning_reference = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteUploadWarningRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::DeleteUploadWarningRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteUploadWarning {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_templates][crate::client::LogAnalytics::list_templates] calls.
    #[derive(Clone, Debug)]
    pub struct ListTemplates(RequestBuilder<crate::model::ListTemplatesRequest>);

    impl ListTemplates {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListTemplatesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsTemplateCollection>> {
            (*self.0.stub)
                .list_templates(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            gax::response::Response<crate::model::LogAnalyticsTemplateCollection>,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let page = if token.is_empty() { None } else { Some(token) };
                let builder = self.clone().set_or_clear_page(page);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            gax::response::Response<crate::model::LogAnalyticsTemplateCollection>,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListTemplatesRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListTemplatesRequest::compartment_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_compartment_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.compartment_id = v.into();
            self
        }

        /// Sets the value of [type][crate::model::ListTemplatesRequest::type].
        pub fn set_type<T: std::convert::Into<crate::model::TemplateType>>(mut self, v: T) -> Self {
            self.0.request.r#type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [type][crate::model::ListTemplatesRequest::type].
        pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::TemplateType>,
        {
            self.0.request.r#type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [name][crate::model::ListTemplatesRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [name][crate::model::ListTemplatesRequest::name].
        pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [template_display_text][crate::model::ListTemplatesRequest::template_display_text].
        pub fn set_template_display_text<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.template_display_text = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [template_display_text][crate::model::ListTemplatesRequest::template_display_text].
        pub fn set_or_clear_template_display_text<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.template_display_text = v.map(|x| x.into());
            self
        }

        /// Sets the value of [is_system][crate::model::ListTemplatesRequest::is_system].
        pub fn set_is_system<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::IsSystemFilter>,
        {
            self.0.request.is_system = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [is_system][crate::model::ListTemplatesRequest::is_system].
        pub fn set_or_clear_is_system<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::IsSystemFilter>,
        {
            self.0.request.is_system = v.map(|x| x.into());
            self
        }

        /// Sets the value of [category][crate::model::ListTemplatesRequest::category].
        pub fn set_category<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.category = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [category][crate::model::ListTemplatesRequest::category].
        pub fn set_or_clear_category<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.category = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListTemplatesRequest::sort_order].
        pub fn set_sort_order<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_order][crate::model::ListTemplatesRequest::sort_order].
        pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SortOrders>,
        {
            self.0.request.sort_order = v.map(|x| x.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListTemplatesRequest::sort_by].
        pub fn set_sort_by<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_templates_request::SortBy>,
        {
            self.0.request.sort_by = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [sort_by][crate::model::ListTemplatesRequest::sort_by].
        pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_templates_request::SortBy>,
        {
            self.0.request.sort_by = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListTemplatesRequest::limit].
        pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListTemplatesRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [page][crate::model::ListTemplatesRequest::page].
        pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [page][crate::model::ListTemplatesRequest::page].
        pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.page = v.map(|x| x.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListTemplatesRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::ListTemplatesRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListTemplates {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_template][crate::client::LogAnalytics::get_template] calls.
    #[derive(Clone, Debug)]
    pub struct GetTemplate(RequestBuilder<crate::model::GetTemplateRequest>);

    impl GetTemplate {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetTemplateRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsTemplate>> {
            (*self.0.stub)
                .get_template(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetTemplateRequest::namespace_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_namespace_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [template_id][crate::model::GetTemplateRequest::template_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_template_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.template_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetTemplateRequest::opc_request_id].
        pub fn set_opc_request_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [opc_request_id][crate::model::GetTemplateRequest::opc_request_id].
        pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.opc_request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetTemplate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
