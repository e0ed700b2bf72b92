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

/// A tenancy namespace, and its Logging Analytics onboarding status.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Namespace {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub namespace_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_onboarded: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_logs_source_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_archiving_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_data_ever_ingested: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Namespace {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::Namespace::namespace_name].
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::Namespace::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_onboarded][crate::model::Namespace::is_onboarded].
    pub fn set_is_onboarded<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_onboarded = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_logs_source_enabled][crate::model::Namespace::is_logs_source_enabled].
    pub fn set_is_logs_source_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_logs_source_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_archiving_enabled][crate::model::Namespace::is_archiving_enabled].
    pub fn set_is_archiving_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_archiving_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_data_ever_ingested][crate::model::Namespace::is_data_ever_ingested].
    pub fn set_is_data_ever_ingested<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_data_ever_ingested = std::option::Option::Some(v.into());
        self
    }
}

/// A namespace in a list of namespaces.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NamespaceSummary {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub namespace_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_onboarded: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_data_ever_ingested: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl NamespaceSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::NamespaceSummary::namespace_name].
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::NamespaceSummary::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_onboarded][crate::model::NamespaceSummary::is_onboarded].
    pub fn set_is_onboarded<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_onboarded = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_data_ever_ingested][crate::model::NamespaceSummary::is_data_ever_ingested].
    pub fn set_is_data_ever_ingested<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_data_ever_ingested = std::option::Option::Some(v.into());
        self
    }
}

/// A list of namespaces.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NamespaceCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::NamespaceSummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl NamespaceCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::NamespaceCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::NamespaceSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Optional settings to onboard a namespace.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OnboardNamespaceDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_logs_source_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl OnboardNamespaceDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [is_logs_source_enabled][crate::model::OnboardNamespaceDetails::is_logs_source_enabled].
    pub fn set_is_logs_source_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_logs_source_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::OnboardNamespaceDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::OnboardNamespaceDetails::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// An association between a log source and an entity.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsAssociation {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failure_message: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub agent_id: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_last_attempted: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub retry_count: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_type_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub life_cycle_state: std::option::Option<crate::model::AssociationStatus>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_type_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub host: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub agent_entity_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_type_display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_group_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_group_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_group_compartment: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsAssociation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [failure_message][crate::model::LogAnalyticsAssociation::failure_message].
    pub fn set_failure_message<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.failure_message = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [agent_id][crate::model::LogAnalyticsAssociation::agent_id].
    pub fn set_agent_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.agent_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_last_attempted][crate::model::LogAnalyticsAssociation::time_last_attempted].
    pub fn set_time_last_attempted<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_last_attempted = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [retry_count][crate::model::LogAnalyticsAssociation::retry_count].
    pub fn set_retry_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.retry_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_name][crate::model::LogAnalyticsAssociation::source_name].
    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_display_name][crate::model::LogAnalyticsAssociation::source_display_name].
    pub fn set_source_display_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_type_name][crate::model::LogAnalyticsAssociation::source_type_name].
    pub fn set_source_type_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_type_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [life_cycle_state][crate::model::LogAnalyticsAssociation::life_cycle_state].
    pub fn set_life_cycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::AssociationStatus>,
    {
        self.life_cycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_id][crate::model::LogAnalyticsAssociation::entity_id].
    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_name][crate::model::LogAnalyticsAssociation::entity_name].
    pub fn set_entity_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_type_name][crate::model::LogAnalyticsAssociation::entity_type_name].
    pub fn set_entity_type_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.entity_type_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [host][crate::model::LogAnalyticsAssociation::host].
    pub fn set_host<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.host = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [agent_entity_name][crate::model::LogAnalyticsAssociation::agent_entity_name].
    pub fn set_agent_entity_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.agent_entity_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_type_display_name][crate::model::LogAnalyticsAssociation::entity_type_display_name].
    pub fn set_entity_type_display_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.entity_type_display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_group_id][crate::model::LogAnalyticsAssociation::log_group_id].
    pub fn set_log_group_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_group_name][crate::model::LogAnalyticsAssociation::log_group_name].
    pub fn set_log_group_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_group_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_group_compartment][crate::model::LogAnalyticsAssociation::log_group_compartment].
    pub fn set_log_group_compartment<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_group_compartment = std::option::Option::Some(v.into());
        self
    }
}

/// A list of source associations.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsAssociationCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsAssociation>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsAssociationCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsAssociationCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsAssociation>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// An association to create or update.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpsertLogAnalyticsAssociation {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub agent_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_type_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_type_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub host: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_group_id: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpsertLogAnalyticsAssociation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [agent_id][crate::model::UpsertLogAnalyticsAssociation::agent_id].
    pub fn set_agent_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.agent_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_name][crate::model::UpsertLogAnalyticsAssociation::source_name].
    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_type_name][crate::model::UpsertLogAnalyticsAssociation::source_type_name].
    pub fn set_source_type_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_type_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_id][crate::model::UpsertLogAnalyticsAssociation::entity_id].
    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_name][crate::model::UpsertLogAnalyticsAssociation::entity_name].
    pub fn set_entity_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_type_name][crate::model::UpsertLogAnalyticsAssociation::entity_type_name].
    pub fn set_entity_type_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.entity_type_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [host][crate::model::UpsertLogAnalyticsAssociation::host].
    pub fn set_host<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.host = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_group_id][crate::model::UpsertLogAnalyticsAssociation::log_group_id].
    pub fn set_log_group_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_group_id = std::option::Option::Some(v.into());
        self
    }
}

/// A batch of associations to create or update.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpsertLogAnalyticsAssociationDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::UpsertLogAnalyticsAssociation>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpsertLogAnalyticsAssociationDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::UpsertLogAnalyticsAssociationDetails::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [items][crate::model::UpsertLogAnalyticsAssociationDetails::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::UpsertLogAnalyticsAssociation>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// An association to delete.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteLogAnalyticsAssociation {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub agent_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_type_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_type_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub host: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_group_id: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteLogAnalyticsAssociation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [agent_id][crate::model::DeleteLogAnalyticsAssociation::agent_id].
    pub fn set_agent_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.agent_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_name][crate::model::DeleteLogAnalyticsAssociation::source_name].
    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_type_name][crate::model::DeleteLogAnalyticsAssociation::source_type_name].
    pub fn set_source_type_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_type_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_id][crate::model::DeleteLogAnalyticsAssociation::entity_id].
    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_type_name][crate::model::DeleteLogAnalyticsAssociation::entity_type_name].
    pub fn set_entity_type_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.entity_type_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [host][crate::model::DeleteLogAnalyticsAssociation::host].
    pub fn set_host<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.host = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_group_id][crate::model::DeleteLogAnalyticsAssociation::log_group_id].
    pub fn set_log_group_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_group_id = std::option::Option::Some(v.into());
        self
    }
}

/// A batch of associations to delete.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteLogAnalyticsAssociationDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::DeleteLogAnalyticsAssociation>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteLogAnalyticsAssociationDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::DeleteLogAnalyticsAssociationDetails::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [items][crate::model::DeleteLogAnalyticsAssociationDetails::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::DeleteLogAnalyticsAssociation>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The result of validating the parameters of an association.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsAssociationParameter {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub agent_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_type: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub missing_properties: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsAssociationParameter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [agent_id][crate::model::LogAnalyticsAssociationParameter::agent_id].
    pub fn set_agent_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.agent_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_type][crate::model::LogAnalyticsAssociationParameter::entity_type].
    pub fn set_entity_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_id][crate::model::LogAnalyticsAssociationParameter::entity_id].
    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_id][crate::model::LogAnalyticsAssociationParameter::source_id].
    pub fn set_source_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_name][crate::model::LogAnalyticsAssociationParameter::source_name].
    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::LogAnalyticsAssociationParameter::status].
    pub fn set_status<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [missing_properties][crate::model::LogAnalyticsAssociationParameter::missing_properties].
    pub fn set_missing_properties<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.missing_properties = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A list of association parameter validations.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsAssociationParameterCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsAssociationParameter>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsAssociationParameterCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsAssociationParameterCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsAssociationParameter>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The number of associations in each state.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AssociationSummaryReport {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub association_count: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failed_count: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub succeeded_count: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub pending_count: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub in_progress_count: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl AssociationSummaryReport {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [association_count][crate::model::AssociationSummaryReport::association_count].
    pub fn set_association_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.association_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [failed_count][crate::model::AssociationSummaryReport::failed_count].
    pub fn set_failed_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.failed_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [succeeded_count][crate::model::AssociationSummaryReport::succeeded_count].
    pub fn set_succeeded_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.succeeded_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [pending_count][crate::model::AssociationSummaryReport::pending_count].
    pub fn set_pending_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.pending_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [in_progress_count][crate::model::AssociationSummaryReport::in_progress_count].
    pub fn set_in_progress_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.in_progress_count = std::option::Option::Some(v.into());
        self
    }
}

/// A category used to group sources, parsers and other resources.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsCategory {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_system: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsCategory {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::LogAnalyticsCategory::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::LogAnalyticsCategory::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::LogAnalyticsCategory::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [type][crate::model::LogAnalyticsCategory::type].
    pub fn set_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_system][crate::model::LogAnalyticsCategory::is_system].
    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }
}

/// A list of categories.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsCategoryCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsCategory>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsCategoryCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsCategoryCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsCategory>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The assignment of a category to a resource.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsResourceCategory {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_type: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub category_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_system: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsResourceCategory {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource_id][crate::model::LogAnalyticsResourceCategory::resource_id].
    pub fn set_resource_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [resource_type][crate::model::LogAnalyticsResourceCategory::resource_type].
    pub fn set_resource_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [category_name][crate::model::LogAnalyticsResourceCategory::category_name].
    pub fn set_category_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.category_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_system][crate::model::LogAnalyticsResourceCategory::is_system].
    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }
}

/// A list of resource categories.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsResourceCategoryCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub categories: std::vec::Vec<crate::model::LogAnalyticsCategory>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsResourceCategory>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsResourceCategoryCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [categories][crate::model::LogAnalyticsResourceCategoryCollection::categories].
    pub fn set_categories<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsCategory>,
    {
        self.categories = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [items][crate::model::LogAnalyticsResourceCategoryCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsResourceCategory>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A list of category assignments to add or remove.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsCategoriesListDetails {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub categories: std::vec::Vec<crate::model::LogAnalyticsResourceCategory>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsCategoriesListDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [categories][crate::model::LogAnalyticsCategoriesListDetails::categories].
    pub fn set_categories<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsResourceCategory>,
    {
        self.categories = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A work request for a configuration change.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ConfigWorkRequest {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub operation_type: std::option::Option<crate::model::ConfigWorkRequestOperationType>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub percent_complete: std::option::Option<i64>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_accepted: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_started: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_finished: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_state: std::option::Option<crate::model::ConfigWorkRequestLifecycleState>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub total_associations: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub associations_succeeded: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub associations_failed: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub payload: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ConfigWorkRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::ConfigWorkRequest::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::ConfigWorkRequest::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [operation_type][crate::model::ConfigWorkRequest::operation_type].
    pub fn set_operation_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ConfigWorkRequestOperationType>,
    {
        self.operation_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [percent_complete][crate::model::ConfigWorkRequest::percent_complete].
    pub fn set_percent_complete<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.percent_complete = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_accepted][crate::model::ConfigWorkRequest::time_accepted].
    pub fn set_time_accepted<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_accepted = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_started][crate::model::ConfigWorkRequest::time_started].
    pub fn set_time_started<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_started = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_finished][crate::model::ConfigWorkRequest::time_finished].
    pub fn set_time_finished<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_finished = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::ConfigWorkRequest::lifecycle_state].
    pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ConfigWorkRequestLifecycleState>,
    {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [total_associations][crate::model::ConfigWorkRequest::total_associations].
    pub fn set_total_associations<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.total_associations = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [associations_succeeded][crate::model::ConfigWorkRequest::associations_succeeded].
    pub fn set_associations_succeeded<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.associations_succeeded = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [associations_failed][crate::model::ConfigWorkRequest::associations_failed].
    pub fn set_associations_failed<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.associations_failed = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [payload][crate::model::ConfigWorkRequest::payload].
    pub fn set_payload<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.payload = std::option::Option::Some(v.into());
        self
    }
}

/// A configuration work request in a list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ConfigWorkRequestSummary {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub operation_type: std::option::Option<crate::model::ConfigWorkRequestOperationType>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub percent_complete: std::option::Option<i64>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_accepted: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_finished: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_state: std::option::Option<crate::model::ConfigWorkRequestLifecycleState>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ConfigWorkRequestSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::ConfigWorkRequestSummary::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::ConfigWorkRequestSummary::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [operation_type][crate::model::ConfigWorkRequestSummary::operation_type].
    pub fn set_operation_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ConfigWorkRequestOperationType>,
    {
        self.operation_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [percent_complete][crate::model::ConfigWorkRequestSummary::percent_complete].
    pub fn set_percent_complete<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.percent_complete = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_accepted][crate::model::ConfigWorkRequestSummary::time_accepted].
    pub fn set_time_accepted<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_accepted = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_finished][crate::model::ConfigWorkRequestSummary::time_finished].
    pub fn set_time_finished<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_finished = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::ConfigWorkRequestSummary::lifecycle_state].
    pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ConfigWorkRequestLifecycleState>,
    {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }
}

/// A list of configuration work requests.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ConfigWorkRequestCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::ConfigWorkRequestSummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ConfigWorkRequestCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::ConfigWorkRequestCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ConfigWorkRequestSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The result of importing custom content.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsImportCustomContent {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub parser_names: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub source_names: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub field_names: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub change_list: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsImportCustomContent {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parser_names][crate::model::LogAnalyticsImportCustomContent::parser_names].
    pub fn set_parser_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.parser_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [source_names][crate::model::LogAnalyticsImportCustomContent::source_names].
    pub fn set_source_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.source_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [field_names][crate::model::LogAnalyticsImportCustomContent::field_names].
    pub fn set_field_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.field_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [change_list][crate::model::LogAnalyticsImportCustomContent::change_list].
    pub fn set_change_list<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.change_list = std::option::Option::Some(v.into());
        self
    }
}

/// The content to export.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportContent {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub field_names: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub parser_names: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub source_names: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub entity_type_names: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ExportContent {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [field_names][crate::model::ExportContent::field_names].
    pub fn set_field_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.field_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [parser_names][crate::model::ExportContent::parser_names].
    pub fn set_parser_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.parser_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [source_names][crate::model::ExportContent::source_names].
    pub fn set_source_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.source_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [entity_type_names][crate::model::ExportContent::entity_type_names].
    pub fn set_entity_type_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.entity_type_names = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A bridge that imports entities from Enterprise Manager.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEmBridge {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub em_entities_compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub bucket_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_state: std::option::Option<crate::model::EmBridgeLifecycleStates>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_details: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_import_processing_status:
        std::option::Option<crate::model::EmBridgeLatestImportProcessingStatus>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_import_processing_details: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_import_last_processed: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_em_data_last_extracted: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsEmBridge {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::LogAnalyticsEmBridge::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::LogAnalyticsEmBridge::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::LogAnalyticsEmBridge::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [em_entities_compartment_id][crate::model::LogAnalyticsEmBridge::em_entities_compartment_id].
    pub fn set_em_entities_compartment_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.em_entities_compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [bucket_name][crate::model::LogAnalyticsEmBridge::bucket_name].
    pub fn set_bucket_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.bucket_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::LogAnalyticsEmBridge::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::LogAnalyticsEmBridge::lifecycle_state].
    pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::EmBridgeLifecycleStates>,
    {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_details][crate::model::LogAnalyticsEmBridge::lifecycle_details].
    pub fn set_lifecycle_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.lifecycle_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [last_import_processing_status][crate::model::LogAnalyticsEmBridge::last_import_processing_status].
    pub fn set_last_import_processing_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::EmBridgeLatestImportProcessingStatus>,
    {
        self.last_import_processing_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [last_import_processing_details][crate::model::LogAnalyticsEmBridge::last_import_processing_details].
    pub fn set_last_import_processing_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.last_import_processing_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_import_last_processed][crate::model::LogAnalyticsEmBridge::time_import_last_processed].
    pub fn set_time_import_last_processed<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_import_last_processed = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_em_data_last_extracted][crate::model::LogAnalyticsEmBridge::time_em_data_last_extracted].
    pub fn set_time_em_data_last_extracted<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_em_data_last_extracted = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::LogAnalyticsEmBridge::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::LogAnalyticsEmBridge::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::LogAnalyticsEmBridge::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::LogAnalyticsEmBridge::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// An Enterprise Manager bridge in a list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEmBridgeSummary {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub em_entities_compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub bucket_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_state: std::option::Option<crate::model::EmBridgeLifecycleStates>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_import_processing_status:
        std::option::Option<crate::model::EmBridgeLatestImportProcessingStatus>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsEmBridgeSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::LogAnalyticsEmBridgeSummary::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::LogAnalyticsEmBridgeSummary::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::LogAnalyticsEmBridgeSummary::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [em_entities_compartment_id][crate::model::LogAnalyticsEmBridgeSummary::em_entities_compartment_id].
    pub fn set_em_entities_compartment_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.em_entities_compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [bucket_name][crate::model::LogAnalyticsEmBridgeSummary::bucket_name].
    pub fn set_bucket_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.bucket_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::LogAnalyticsEmBridgeSummary::lifecycle_state].
    pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::EmBridgeLifecycleStates>,
    {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [last_import_processing_status][crate::model::LogAnalyticsEmBridgeSummary::last_import_processing_status].
    pub fn set_last_import_processing_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::EmBridgeLatestImportProcessingStatus>,
    {
        self.last_import_processing_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::LogAnalyticsEmBridgeSummary::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::LogAnalyticsEmBridgeSummary::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::LogAnalyticsEmBridgeSummary::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::LogAnalyticsEmBridgeSummary::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// A list of Enterprise Manager bridges.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEmBridgeCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsEmBridgeSummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsEmBridgeCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsEmBridgeCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsEmBridgeSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The settings for a new Enterprise Manager bridge.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateLogAnalyticsEmBridgeDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub em_entities_compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub bucket_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateLogAnalyticsEmBridgeDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][crate::model::CreateLogAnalyticsEmBridgeDetails::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::CreateLogAnalyticsEmBridgeDetails::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [em_entities_compartment_id][crate::model::CreateLogAnalyticsEmBridgeDetails::em_entities_compartment_id].
    pub fn set_em_entities_compartment_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.em_entities_compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [bucket_name][crate::model::CreateLogAnalyticsEmBridgeDetails::bucket_name].
    pub fn set_bucket_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.bucket_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::CreateLogAnalyticsEmBridgeDetails::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::CreateLogAnalyticsEmBridgeDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::CreateLogAnalyticsEmBridgeDetails::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// The changes to an Enterprise Manager bridge.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateLogAnalyticsEmBridgeDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateLogAnalyticsEmBridgeDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][crate::model::UpdateLogAnalyticsEmBridgeDetails::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::UpdateLogAnalyticsEmBridgeDetails::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::UpdateLogAnalyticsEmBridgeDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::UpdateLogAnalyticsEmBridgeDetails::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// The number of Enterprise Manager bridges in each state.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEmBridgeSummaryReport {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub active_em_bridge_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creating_em_bridge_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub needs_attention_em_bridge_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub deleted_em_bridge_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub total_em_bridge_count: std::option::Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsEmBridgeSummaryReport {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::LogAnalyticsEmBridgeSummaryReport::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [active_em_bridge_count][crate::model::LogAnalyticsEmBridgeSummaryReport::active_em_bridge_count].
    pub fn set_active_em_bridge_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.active_em_bridge_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [creating_em_bridge_count][crate::model::LogAnalyticsEmBridgeSummaryReport::creating_em_bridge_count].
    pub fn set_creating_em_bridge_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.creating_em_bridge_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [needs_attention_em_bridge_count][crate::model::LogAnalyticsEmBridgeSummaryReport::needs_attention_em_bridge_count].
    pub fn set_needs_attention_em_bridge_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.needs_attention_em_bridge_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [deleted_em_bridge_count][crate::model::LogAnalyticsEmBridgeSummaryReport::deleted_em_bridge_count].
    pub fn set_deleted_em_bridge_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.deleted_em_bridge_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [total_em_bridge_count][crate::model::LogAnalyticsEmBridgeSummaryReport::total_em_bridge_count].
    pub fn set_total_em_bridge_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_em_bridge_count = std::option::Option::Some(v.into());
        self
    }
}

/// A monitored resource, such as a host or a database.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEntity {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_type_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_type_internal_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_state: std::option::Option<crate::model::EntityLifecycleStates>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_details: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub management_agent_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub management_agent_display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub management_agent_compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timezone_region: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub properties: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_source: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub are_logs_collected: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cloud_resource_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_id: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_last_discovered: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hostname: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsEntity {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::LogAnalyticsEntity::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [name][crate::model::LogAnalyticsEntity::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::LogAnalyticsEntity::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_type_name][crate::model::LogAnalyticsEntity::entity_type_name].
    pub fn set_entity_type_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.entity_type_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_type_internal_name][crate::model::LogAnalyticsEntity::entity_type_internal_name].
    pub fn set_entity_type_internal_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.entity_type_internal_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::LogAnalyticsEntity::lifecycle_state].
    pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::EntityLifecycleStates>,
    {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_details][crate::model::LogAnalyticsEntity::lifecycle_details].
    pub fn set_lifecycle_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.lifecycle_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::LogAnalyticsEntity::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::LogAnalyticsEntity::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [management_agent_id][crate::model::LogAnalyticsEntity::management_agent_id].
    pub fn set_management_agent_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.management_agent_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [management_agent_display_name][crate::model::LogAnalyticsEntity::management_agent_display_name].
    pub fn set_management_agent_display_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.management_agent_display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [management_agent_compartment_id][crate::model::LogAnalyticsEntity::management_agent_compartment_id].
    pub fn set_management_agent_compartment_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.management_agent_compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [timezone_region][crate::model::LogAnalyticsEntity::timezone_region].
    pub fn set_timezone_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.timezone_region = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [properties][crate::model::LogAnalyticsEntity::properties].
    pub fn set_properties<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.properties = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [creation_source][crate::model::LogAnalyticsEntity::creation_source].
    pub fn set_creation_source<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.creation_source = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [are_logs_collected][crate::model::LogAnalyticsEntity::are_logs_collected].
    pub fn set_are_logs_collected<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.are_logs_collected = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [cloud_resource_id][crate::model::LogAnalyticsEntity::cloud_resource_id].
    pub fn set_cloud_resource_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.cloud_resource_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_id][crate::model::LogAnalyticsEntity::source_id].
    pub fn set_source_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_last_discovered][crate::model::LogAnalyticsEntity::time_last_discovered].
    pub fn set_time_last_discovered<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_last_discovered = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [hostname][crate::model::LogAnalyticsEntity::hostname].
    pub fn set_hostname<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.hostname = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::LogAnalyticsEntity::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::LogAnalyticsEntity::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// An entity in a list of entities.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEntitySummary {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_type_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_type_internal_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_state: std::option::Option<crate::model::EntityLifecycleStates>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub management_agent_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cloud_resource_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timezone_region: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub are_logs_collected: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hostname: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsEntitySummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::LogAnalyticsEntitySummary::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [name][crate::model::LogAnalyticsEntitySummary::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::LogAnalyticsEntitySummary::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_type_name][crate::model::LogAnalyticsEntitySummary::entity_type_name].
    pub fn set_entity_type_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.entity_type_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_type_internal_name][crate::model::LogAnalyticsEntitySummary::entity_type_internal_name].
    pub fn set_entity_type_internal_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.entity_type_internal_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::LogAnalyticsEntitySummary::lifecycle_state].
    pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::EntityLifecycleStates>,
    {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::LogAnalyticsEntitySummary::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::LogAnalyticsEntitySummary::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [management_agent_id][crate::model::LogAnalyticsEntitySummary::management_agent_id].
    pub fn set_management_agent_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.management_agent_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [cloud_resource_id][crate::model::LogAnalyticsEntitySummary::cloud_resource_id].
    pub fn set_cloud_resource_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.cloud_resource_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [timezone_region][crate::model::LogAnalyticsEntitySummary::timezone_region].
    pub fn set_timezone_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.timezone_region = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [are_logs_collected][crate::model::LogAnalyticsEntitySummary::are_logs_collected].
    pub fn set_are_logs_collected<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.are_logs_collected = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_id][crate::model::LogAnalyticsEntitySummary::source_id].
    pub fn set_source_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [hostname][crate::model::LogAnalyticsEntitySummary::hostname].
    pub fn set_hostname<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.hostname = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::LogAnalyticsEntitySummary::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::LogAnalyticsEntitySummary::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// A list of entities.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEntityCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsEntitySummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsEntityCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsEntityCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsEntitySummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The settings for a new entity.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateLogAnalyticsEntityDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_type_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub management_agent_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cloud_resource_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timezone_region: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hostname: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub properties: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_last_discovered: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateLogAnalyticsEntityDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::CreateLogAnalyticsEntityDetails::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::CreateLogAnalyticsEntityDetails::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_type_name][crate::model::CreateLogAnalyticsEntityDetails::entity_type_name].
    pub fn set_entity_type_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.entity_type_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [management_agent_id][crate::model::CreateLogAnalyticsEntityDetails::management_agent_id].
    pub fn set_management_agent_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.management_agent_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [cloud_resource_id][crate::model::CreateLogAnalyticsEntityDetails::cloud_resource_id].
    pub fn set_cloud_resource_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.cloud_resource_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [timezone_region][crate::model::CreateLogAnalyticsEntityDetails::timezone_region].
    pub fn set_timezone_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.timezone_region = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [hostname][crate::model::CreateLogAnalyticsEntityDetails::hostname].
    pub fn set_hostname<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.hostname = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_id][crate::model::CreateLogAnalyticsEntityDetails::source_id].
    pub fn set_source_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [properties][crate::model::CreateLogAnalyticsEntityDetails::properties].
    pub fn set_properties<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.properties = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [time_last_discovered][crate::model::CreateLogAnalyticsEntityDetails::time_last_discovered].
    pub fn set_time_last_discovered<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_last_discovered = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::CreateLogAnalyticsEntityDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::CreateLogAnalyticsEntityDetails::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// The changes to an entity.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateLogAnalyticsEntityDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub management_agent_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timezone_region: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hostname: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub properties: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_last_discovered: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateLogAnalyticsEntityDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::UpdateLogAnalyticsEntityDetails::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [management_agent_id][crate::model::UpdateLogAnalyticsEntityDetails::management_agent_id].
    pub fn set_management_agent_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.management_agent_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [timezone_region][crate::model::UpdateLogAnalyticsEntityDetails::timezone_region].
    pub fn set_timezone_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.timezone_region = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [hostname][crate::model::UpdateLogAnalyticsEntityDetails::hostname].
    pub fn set_hostname<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.hostname = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [properties][crate::model::UpdateLogAnalyticsEntityDetails::properties].
    pub fn set_properties<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.properties = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [time_last_discovered][crate::model::UpdateLogAnalyticsEntityDetails::time_last_discovered].
    pub fn set_time_last_discovered<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_last_discovered = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::UpdateLogAnalyticsEntityDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::UpdateLogAnalyticsEntityDetails::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// The number of entities in each state.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEntitySummaryReport {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub active_entities_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entities_with_has_logs_collected_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entities_with_management_agent_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsEntitySummaryReport {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [active_entities_count][crate::model::LogAnalyticsEntitySummaryReport::active_entities_count].
    pub fn set_active_entities_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.active_entities_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entities_with_has_logs_collected_count][crate::model::LogAnalyticsEntitySummaryReport::entities_with_has_logs_collected_count].
    pub fn set_entities_with_has_logs_collected_count<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.entities_with_has_logs_collected_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entities_with_management_agent_count][crate::model::LogAnalyticsEntitySummaryReport::entities_with_management_agent_count].
    pub fn set_entities_with_management_agent_count<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.entities_with_management_agent_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::LogAnalyticsEntitySummaryReport::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }
}

/// The compartment to move an entity to.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ChangeLogAnalyticsEntityCompartmentDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ChangeLogAnalyticsEntityCompartmentDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::ChangeLogAnalyticsEntityCompartmentDetails::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }
}

/// The entities to associate with an entity.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AddEntityAssociationDetails {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub association_entities: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl AddEntityAssociationDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [association_entities][crate::model::AddEntityAssociationDetails::association_entities].
    pub fn set_association_entities<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.association_entities = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The entities to dissociate from an entity.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RemoveEntityAssociationsDetails {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub association_entities: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl RemoveEntityAssociationsDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [association_entities][crate::model::RemoveEntityAssociationsDetails::association_entities].
    pub fn set_association_entities<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.association_entities = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A link between two entities.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEntityTopologyLink {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_entity_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub destination_entity_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub contexts: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsEntityTopologyLink {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [source_entity_id][crate::model::LogAnalyticsEntityTopologyLink::source_entity_id].
    pub fn set_source_entity_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_entity_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [destination_entity_id][crate::model::LogAnalyticsEntityTopologyLink::destination_entity_id].
    pub fn set_destination_entity_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.destination_entity_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [contexts][crate::model::LogAnalyticsEntityTopologyLink::contexts].
    pub fn set_contexts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.contexts = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The entities and links in a topology.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEntityTopologySummary {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub nodes: std::vec::Vec<crate::model::LogAnalyticsEntitySummary>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub links: std::vec::Vec<crate::model::LogAnalyticsEntityTopologyLink>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsEntityTopologySummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [nodes][crate::model::LogAnalyticsEntityTopologySummary::nodes].
    pub fn set_nodes<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsEntitySummary>,
    {
        self.nodes = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [links][crate::model::LogAnalyticsEntityTopologySummary::links].
    pub fn set_links<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsEntityTopologyLink>,
    {
        self.links = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The topology of an entity.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEntityTopologyCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsEntityTopologySummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsEntityTopologyCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsEntityTopologyCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsEntityTopologySummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A property of an entity type.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EntityTypeProperty {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl EntityTypeProperty {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::EntityTypeProperty::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::EntityTypeProperty::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }
}

/// A kind of entity, such as a host or a database.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEntityType {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub internal_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub category: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cloud_type: std::option::Option<crate::model::EntityCloudType>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub properties: std::vec::Vec<crate::model::EntityTypeProperty>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_state: std::option::Option<crate::model::EntityLifecycleStates>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub management_agent_eligibility_status: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsEntityType {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::LogAnalyticsEntityType::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [internal_name][crate::model::LogAnalyticsEntityType::internal_name].
    pub fn set_internal_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.internal_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [category][crate::model::LogAnalyticsEntityType::category].
    pub fn set_category<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.category = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [cloud_type][crate::model::LogAnalyticsEntityType::cloud_type].
    pub fn set_cloud_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::EntityCloudType>,
    {
        self.cloud_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [properties][crate::model::LogAnalyticsEntityType::properties].
    pub fn set_properties<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EntityTypeProperty>,
    {
        self.properties = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::LogAnalyticsEntityType::lifecycle_state].
    pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::EntityLifecycleStates>,
    {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::LogAnalyticsEntityType::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::LogAnalyticsEntityType::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [management_agent_eligibility_status][crate::model::LogAnalyticsEntityType::management_agent_eligibility_status].
    pub fn set_management_agent_eligibility_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.management_agent_eligibility_status = std::option::Option::Some(v.into());
        self
    }
}

/// An entity type in a list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEntityTypeSummary {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub internal_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub category: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cloud_type: std::option::Option<crate::model::EntityCloudType>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_state: std::option::Option<crate::model::EntityLifecycleStates>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsEntityTypeSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::LogAnalyticsEntityTypeSummary::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [internal_name][crate::model::LogAnalyticsEntityTypeSummary::internal_name].
    pub fn set_internal_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.internal_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [category][crate::model::LogAnalyticsEntityTypeSummary::category].
    pub fn set_category<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.category = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [cloud_type][crate::model::LogAnalyticsEntityTypeSummary::cloud_type].
    pub fn set_cloud_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::EntityCloudType>,
    {
        self.cloud_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::LogAnalyticsEntityTypeSummary::lifecycle_state].
    pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::EntityLifecycleStates>,
    {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::LogAnalyticsEntityTypeSummary::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::LogAnalyticsEntityTypeSummary::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }
}

/// A list of entity types.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEntityTypeCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsEntityTypeSummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsEntityTypeCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsEntityTypeCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsEntityTypeSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The settings for a new entity type.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateLogAnalyticsEntityTypeDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub category: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub properties: std::vec::Vec<crate::model::EntityTypeProperty>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateLogAnalyticsEntityTypeDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::CreateLogAnalyticsEntityTypeDetails::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [category][crate::model::CreateLogAnalyticsEntityTypeDetails::category].
    pub fn set_category<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.category = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [properties][crate::model::CreateLogAnalyticsEntityTypeDetails::properties].
    pub fn set_properties<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EntityTypeProperty>,
    {
        self.properties = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The changes to an entity type.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateLogAnalyticsEntityTypeDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub category: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub properties: std::vec::Vec<crate::model::EntityTypeProperty>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateLogAnalyticsEntityTypeDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [category][crate::model::UpdateLogAnalyticsEntityTypeDetails::category].
    pub fn set_category<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.category = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [properties][crate::model::UpdateLogAnalyticsEntityTypeDetails::properties].
    pub fn set_properties<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EntityTypeProperty>,
    {
        self.properties = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A group of logs with common access policies.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsLogGroup {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsLogGroup {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::LogAnalyticsLogGroup::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::LogAnalyticsLogGroup::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::LogAnalyticsLogGroup::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::LogAnalyticsLogGroup::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::LogAnalyticsLogGroup::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::LogAnalyticsLogGroup::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::LogAnalyticsLogGroup::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::LogAnalyticsLogGroup::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// A log group in a list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsLogGroupSummary {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsLogGroupSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::LogAnalyticsLogGroupSummary::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::LogAnalyticsLogGroupSummary::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::LogAnalyticsLogGroupSummary::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::LogAnalyticsLogGroupSummary::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::LogAnalyticsLogGroupSummary::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::LogAnalyticsLogGroupSummary::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::LogAnalyticsLogGroupSummary::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::LogAnalyticsLogGroupSummary::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// A list of log groups.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsLogGroupSummaryCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsLogGroupSummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsLogGroupSummaryCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsLogGroupSummaryCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsLogGroupSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The settings for a new log group.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateLogAnalyticsLogGroupDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateLogAnalyticsLogGroupDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][crate::model::CreateLogAnalyticsLogGroupDetails::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::CreateLogAnalyticsLogGroupDetails::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::CreateLogAnalyticsLogGroupDetails::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::CreateLogAnalyticsLogGroupDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::CreateLogAnalyticsLogGroupDetails::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// The changes to a log group.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateLogAnalyticsLogGroupDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateLogAnalyticsLogGroupDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][crate::model::UpdateLogAnalyticsLogGroupDetails::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::UpdateLogAnalyticsLogGroupDetails::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::UpdateLogAnalyticsLogGroupDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::UpdateLogAnalyticsLogGroupDetails::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// The compartment to move a log group to.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ChangeLogAnalyticsLogGroupCompartmentDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ChangeLogAnalyticsLogGroupCompartmentDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::ChangeLogAnalyticsLogGroupCompartmentDetails::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }
}

/// The number of log groups in a compartment.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogGroupSummaryReport {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub count: std::option::Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogGroupSummaryReport {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [count][crate::model::LogGroupSummaryReport::count].
    pub fn set_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.count = std::option::Option::Some(v.into());
        self
    }
}

/// Overrides a property for objects matching a pattern.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PropertyOverride {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub match_type: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub match_value: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub property_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub property_value: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl PropertyOverride {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [match_type][crate::model::PropertyOverride::match_type].
    pub fn set_match_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.match_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [match_value][crate::model::PropertyOverride::match_value].
    pub fn set_match_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.match_value = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [property_name][crate::model::PropertyOverride::property_name].
    pub fn set_property_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.property_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [property_value][crate::model::PropertyOverride::property_value].
    pub fn set_property_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.property_value = std::option::Option::Some(v.into());
        self
    }
}

/// A rule to collect logs from an Object Storage bucket.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsObjectCollectionRule {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub os_namespace: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub os_bucket_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub collection_type: std::option::Option<crate::model::ObjectCollectionRuleCollectionTypes>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub poll_since: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub poll_till: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_group_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_source_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub char_encoding: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timezone: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_set: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_set_key: std::option::Option<crate::model::LogSetKeyTypes>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_set_ext_regex: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub overrides: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub object_name_filters: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_type: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_force_historic_collection: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_state: std::option::Option<crate::model::ObjectCollectionRuleLifecycleStates>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_details: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsObjectCollectionRule {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::LogAnalyticsObjectCollectionRule::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [name][crate::model::LogAnalyticsObjectCollectionRule::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::LogAnalyticsObjectCollectionRule::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::LogAnalyticsObjectCollectionRule::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [os_namespace][crate::model::LogAnalyticsObjectCollectionRule::os_namespace].
    pub fn set_os_namespace<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.os_namespace = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [os_bucket_name][crate::model::LogAnalyticsObjectCollectionRule::os_bucket_name].
    pub fn set_os_bucket_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.os_bucket_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [collection_type][crate::model::LogAnalyticsObjectCollectionRule::collection_type].
    pub fn set_collection_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ObjectCollectionRuleCollectionTypes>,
    {
        self.collection_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [poll_since][crate::model::LogAnalyticsObjectCollectionRule::poll_since].
    pub fn set_poll_since<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.poll_since = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [poll_till][crate::model::LogAnalyticsObjectCollectionRule::poll_till].
    pub fn set_poll_till<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.poll_till = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_group_id][crate::model::LogAnalyticsObjectCollectionRule::log_group_id].
    pub fn set_log_group_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_source_name][crate::model::LogAnalyticsObjectCollectionRule::log_source_name].
    pub fn set_log_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_source_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_id][crate::model::LogAnalyticsObjectCollectionRule::entity_id].
    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [char_encoding][crate::model::LogAnalyticsObjectCollectionRule::char_encoding].
    pub fn set_char_encoding<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.char_encoding = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [timezone][crate::model::LogAnalyticsObjectCollectionRule::timezone].
    pub fn set_timezone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.timezone = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_set][crate::model::LogAnalyticsObjectCollectionRule::log_set].
    pub fn set_log_set<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_set = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_set_key][crate::model::LogAnalyticsObjectCollectionRule::log_set_key].
    pub fn set_log_set_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::LogSetKeyTypes>,
    {
        self.log_set_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_set_ext_regex][crate::model::LogAnalyticsObjectCollectionRule::log_set_ext_regex].
    pub fn set_log_set_ext_regex<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_set_ext_regex = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [overrides][crate::model::LogAnalyticsObjectCollectionRule::overrides].
    pub fn set_overrides<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.overrides = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [object_name_filters][crate::model::LogAnalyticsObjectCollectionRule::object_name_filters].
    pub fn set_object_name_filters<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.object_name_filters = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [log_type][crate::model::LogAnalyticsObjectCollectionRule::log_type].
    pub fn set_log_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_force_historic_collection][crate::model::LogAnalyticsObjectCollectionRule::is_force_historic_collection].
    pub fn set_is_force_historic_collection<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_force_historic_collection = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::LogAnalyticsObjectCollectionRule::lifecycle_state].
    pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ObjectCollectionRuleLifecycleStates>,
    {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_details][crate::model::LogAnalyticsObjectCollectionRule::lifecycle_details].
    pub fn set_lifecycle_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.lifecycle_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::LogAnalyticsObjectCollectionRule::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::LogAnalyticsObjectCollectionRule::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_enabled][crate::model::LogAnalyticsObjectCollectionRule::is_enabled].
    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::LogAnalyticsObjectCollectionRule::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::LogAnalyticsObjectCollectionRule::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// An object collection rule in a list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsObjectCollectionRuleSummary {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub os_namespace: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub os_bucket_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub collection_type: std::option::Option<crate::model::ObjectCollectionRuleCollectionTypes>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_state: std::option::Option<crate::model::ObjectCollectionRuleLifecycleStates>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsObjectCollectionRuleSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::LogAnalyticsObjectCollectionRuleSummary::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [name][crate::model::LogAnalyticsObjectCollectionRuleSummary::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::LogAnalyticsObjectCollectionRuleSummary::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::LogAnalyticsObjectCollectionRuleSummary::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [os_namespace][crate::model::LogAnalyticsObjectCollectionRuleSummary::os_namespace].
    pub fn set_os_namespace<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.os_namespace = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [os_bucket_name][crate::model::LogAnalyticsObjectCollectionRuleSummary::os_bucket_name].
    pub fn set_os_bucket_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.os_bucket_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [collection_type][crate::model::LogAnalyticsObjectCollectionRuleSummary::collection_type].
    pub fn set_collection_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ObjectCollectionRuleCollectionTypes>,
    {
        self.collection_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::LogAnalyticsObjectCollectionRuleSummary::lifecycle_state].
    pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ObjectCollectionRuleLifecycleStates>,
    {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::LogAnalyticsObjectCollectionRuleSummary::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::LogAnalyticsObjectCollectionRuleSummary::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_enabled][crate::model::LogAnalyticsObjectCollectionRuleSummary::is_enabled].
    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::LogAnalyticsObjectCollectionRuleSummary::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::LogAnalyticsObjectCollectionRuleSummary::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// A list of object collection rules.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsObjectCollectionRuleCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsObjectCollectionRuleSummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsObjectCollectionRuleCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsObjectCollectionRuleCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsObjectCollectionRuleSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The settings for a new object collection rule.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateLogAnalyticsObjectCollectionRuleDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub os_namespace: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub os_bucket_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub collection_type: std::option::Option<crate::model::ObjectCollectionRuleCollectionTypes>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub poll_since: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub poll_till: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_group_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_source_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub char_encoding: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timezone: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_set: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_set_key: std::option::Option<crate::model::LogSetKeyTypes>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_set_ext_regex: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub overrides: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub object_name_filters: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_type: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_force_historic_collection: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateLogAnalyticsObjectCollectionRuleDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::CreateLogAnalyticsObjectCollectionRuleDetails::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::CreateLogAnalyticsObjectCollectionRuleDetails::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::CreateLogAnalyticsObjectCollectionRuleDetails::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [os_namespace][crate::model::CreateLogAnalyticsObjectCollectionRuleDetails::os_namespace].
    pub fn set_os_namespace<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.os_namespace = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [os_bucket_name][crate::model::CreateLogAnalyticsObjectCollectionRuleDetails::os_bucket_name].
    pub fn set_os_bucket_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.os_bucket_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [collection_type][crate::model::CreateLogAnalyticsObjectCollectionRuleDetails::collection_type].
    pub fn set_collection_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ObjectCollectionRuleCollectionTypes>,
    {
        self.collection_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [poll_since][crate::model::CreateLogAnalyticsObjectCollectionRuleDetails::poll_since].
    pub fn set_poll_since<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.poll_since = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [poll_till][crate::model::CreateLogAnalyticsObjectCollectionRuleDetails::poll_till].
    pub fn set_poll_till<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.poll_till = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_group_id][crate::model::CreateLogAnalyticsObjectCollectionRuleDetails::log_group_id].
    pub fn set_log_group_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_source_name][crate::model::CreateLogAnalyticsObjectCollectionRuleDetails::log_source_name].
    pub fn set_log_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_source_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_id][crate::model::CreateLogAnalyticsObjectCollectionRuleDetails::entity_id].
    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [char_encoding][crate::model::CreateLogAnalyticsObjectCollectionRuleDetails::char_encoding].
    pub fn set_char_encoding<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.char_encoding = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [timezone][crate::model::CreateLogAnalyticsObjectCollectionRuleDetails::timezone].
    pub fn set_timezone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.timezone = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_set][crate::model::CreateLogAnalyticsObjectCollectionRuleDetails::log_set].
    pub fn set_log_set<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_set = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_set_key][crate::model::CreateLogAnalyticsObjectCollectionRuleDetails::log_set_key].
    pub fn set_log_set_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::LogSetKeyTypes>,
    {
        self.log_set_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_set_ext_regex][crate::model::CreateLogAnalyticsObjectCollectionRuleDetails::log_set_ext_regex].
    pub fn set_log_set_ext_regex<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_set_ext_regex = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [overrides][crate::model::CreateLogAnalyticsObjectCollectionRuleDetails::overrides].
    pub fn set_overrides<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.overrides = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [object_name_filters][crate::model::CreateLogAnalyticsObjectCollectionRuleDetails::object_name_filters].
    pub fn set_object_name_filters<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.object_name_filters = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [log_type][crate::model::CreateLogAnalyticsObjectCollectionRuleDetails::log_type].
    pub fn set_log_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_enabled][crate::model::CreateLogAnalyticsObjectCollectionRuleDetails::is_enabled].
    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_force_historic_collection][crate::model::CreateLogAnalyticsObjectCollectionRuleDetails::is_force_historic_collection].
    pub fn set_is_force_historic_collection<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_force_historic_collection = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::CreateLogAnalyticsObjectCollectionRuleDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::CreateLogAnalyticsObjectCollectionRuleDetails::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// The changes to an object collection rule.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateLogAnalyticsObjectCollectionRuleDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_group_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_source_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub char_encoding: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timezone: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_set: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_set_key: std::option::Option<crate::model::LogSetKeyTypes>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_set_ext_regex: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub overrides: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub object_name_filters: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_type: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateLogAnalyticsObjectCollectionRuleDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [description][crate::model::UpdateLogAnalyticsObjectCollectionRuleDetails::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_group_id][crate::model::UpdateLogAnalyticsObjectCollectionRuleDetails::log_group_id].
    pub fn set_log_group_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_source_name][crate::model::UpdateLogAnalyticsObjectCollectionRuleDetails::log_source_name].
    pub fn set_log_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_source_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_id][crate::model::UpdateLogAnalyticsObjectCollectionRuleDetails::entity_id].
    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [char_encoding][crate::model::UpdateLogAnalyticsObjectCollectionRuleDetails::char_encoding].
    pub fn set_char_encoding<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.char_encoding = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [timezone][crate::model::UpdateLogAnalyticsObjectCollectionRuleDetails::timezone].
    pub fn set_timezone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.timezone = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_set][crate::model::UpdateLogAnalyticsObjectCollectionRuleDetails::log_set].
    pub fn set_log_set<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_set = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_set_key][crate::model::UpdateLogAnalyticsObjectCollectionRuleDetails::log_set_key].
    pub fn set_log_set_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::LogSetKeyTypes>,
    {
        self.log_set_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_set_ext_regex][crate::model::UpdateLogAnalyticsObjectCollectionRuleDetails::log_set_ext_regex].
    pub fn set_log_set_ext_regex<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_set_ext_regex = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [overrides][crate::model::UpdateLogAnalyticsObjectCollectionRuleDetails::overrides].
    pub fn set_overrides<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.overrides = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [object_name_filters][crate::model::UpdateLogAnalyticsObjectCollectionRuleDetails::object_name_filters].
    pub fn set_object_name_filters<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.object_name_filters = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [log_type][crate::model::UpdateLogAnalyticsObjectCollectionRuleDetails::log_type].
    pub fn set_log_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_enabled][crate::model::UpdateLogAnalyticsObjectCollectionRuleDetails::is_enabled].
    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::UpdateLogAnalyticsObjectCollectionRuleDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::UpdateLogAnalyticsObjectCollectionRuleDetails::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// The compartment to move an object collection rule to.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ChangeLogAnalyticsObjectCollectionRuleCompartmentDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ChangeLogAnalyticsObjectCollectionRuleCompartmentDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentDetails::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }
}

/// The condition of an ingest time rule.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct IngestTimeRuleCondition {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<crate::model::ConditionKind>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub field_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub field_operator: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub field_value: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub additional_conditions: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl IngestTimeRuleCondition {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [kind][crate::model::IngestTimeRuleCondition::kind].
    pub fn set_kind<T: std::convert::Into<crate::model::ConditionKind>>(mut self, v: T) -> Self {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [field_name][crate::model::IngestTimeRuleCondition::field_name].
    pub fn set_field_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [field_operator][crate::model::IngestTimeRuleCondition::field_operator].
    pub fn set_field_operator<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_operator = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [field_value][crate::model::IngestTimeRuleCondition::field_value].
    pub fn set_field_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_value = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [additional_conditions][crate::model::IngestTimeRuleCondition::additional_conditions].
    pub fn set_additional_conditions<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<serde_json::Value>,
    {
        self.additional_conditions = std::option::Option::Some(v.into());
        self
    }
}

/// An action taken when an ingest time rule matches.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct IngestTimeRuleAction {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub namespace: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub metric_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_group: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub dimensions: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl IngestTimeRuleAction {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [type][crate::model::IngestTimeRuleAction::type].
    pub fn set_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::IngestTimeRuleAction::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [namespace][crate::model::IngestTimeRuleAction::namespace].
    pub fn set_namespace<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [metric_name][crate::model::IngestTimeRuleAction::metric_name].
    pub fn set_metric_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.metric_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [resource_group][crate::model::IngestTimeRuleAction::resource_group].
    pub fn set_resource_group<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_group = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [dimensions][crate::model::IngestTimeRuleAction::dimensions].
    pub fn set_dimensions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.dimensions = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A rule evaluated on log records as they are ingested.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct IngestTimeRule {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_state: std::option::Option<crate::model::ConcreteLifecycleState>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub conditions: std::option::Option<crate::model::IngestTimeRuleCondition>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub actions: std::vec::Vec<crate::model::IngestTimeRuleAction>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl IngestTimeRule {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::IngestTimeRule::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::IngestTimeRule::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::IngestTimeRule::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::IngestTimeRule::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::IngestTimeRule::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::IngestTimeRule::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::IngestTimeRule::lifecycle_state].
    pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ConcreteLifecycleState>,
    {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_enabled][crate::model::IngestTimeRule::is_enabled].
    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [conditions][crate::model::IngestTimeRule::conditions].
    pub fn set_conditions<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::IngestTimeRuleCondition>,
    {
        self.conditions = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [actions][crate::model::IngestTimeRule::actions].
    pub fn set_actions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::IngestTimeRuleAction>,
    {
        self.actions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [freeform_tags][crate::model::IngestTimeRule::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::IngestTimeRule::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// An ingest time rule in a list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct IngestTimeRuleSummary {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_state: std::option::Option<crate::model::ConcreteLifecycleState>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub condition_kind: std::option::Option<crate::model::ConditionKind>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub field_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub field_value: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl IngestTimeRuleSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::IngestTimeRuleSummary::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::IngestTimeRuleSummary::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::IngestTimeRuleSummary::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::IngestTimeRuleSummary::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::IngestTimeRuleSummary::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::IngestTimeRuleSummary::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::IngestTimeRuleSummary::lifecycle_state].
    pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ConcreteLifecycleState>,
    {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_enabled][crate::model::IngestTimeRuleSummary::is_enabled].
    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [condition_kind][crate::model::IngestTimeRuleSummary::condition_kind].
    pub fn set_condition_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ConditionKind>,
    {
        self.condition_kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [field_name][crate::model::IngestTimeRuleSummary::field_name].
    pub fn set_field_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [field_value][crate::model::IngestTimeRuleSummary::field_value].
    pub fn set_field_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_value = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::IngestTimeRuleSummary::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::IngestTimeRuleSummary::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// A list of ingest time rules.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct IngestTimeRuleSummaryCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::IngestTimeRuleSummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl IngestTimeRuleSummaryCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::IngestTimeRuleSummaryCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::IngestTimeRuleSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The settings for a new ingest time rule.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateIngestTimeRuleDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub conditions: std::option::Option<crate::model::IngestTimeRuleCondition>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub actions: std::vec::Vec<crate::model::IngestTimeRuleAction>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateIngestTimeRuleDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::CreateIngestTimeRuleDetails::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::CreateIngestTimeRuleDetails::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::CreateIngestTimeRuleDetails::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [conditions][crate::model::CreateIngestTimeRuleDetails::conditions].
    pub fn set_conditions<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::IngestTimeRuleCondition>,
    {
        self.conditions = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [actions][crate::model::CreateIngestTimeRuleDetails::actions].
    pub fn set_actions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::IngestTimeRuleAction>,
    {
        self.actions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [freeform_tags][crate::model::CreateIngestTimeRuleDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::CreateIngestTimeRuleDetails::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// The changes to an ingest time rule.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateIngestTimeRuleDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub conditions: std::option::Option<crate::model::IngestTimeRuleCondition>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub actions: std::vec::Vec<crate::model::IngestTimeRuleAction>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateIngestTimeRuleDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][crate::model::UpdateIngestTimeRuleDetails::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::UpdateIngestTimeRuleDetails::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [conditions][crate::model::UpdateIngestTimeRuleDetails::conditions].
    pub fn set_conditions<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::IngestTimeRuleCondition>,
    {
        self.conditions = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [actions][crate::model::UpdateIngestTimeRuleDetails::actions].
    pub fn set_actions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::IngestTimeRuleAction>,
    {
        self.actions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [freeform_tags][crate::model::UpdateIngestTimeRuleDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::UpdateIngestTimeRuleDetails::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// The compartment to move an ingest time rule to.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ChangeIngestTimeRuleCompartmentDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ChangeIngestTimeRuleCompartmentDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::ChangeIngestTimeRuleCompartmentDetails::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }
}

/// A detection rule in a list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RuleSummary {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<crate::model::RuleKind>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub target_service: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_state: std::option::Option<crate::model::ConcreteLifecycleState>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_execution_status: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_last_executed: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl RuleSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::RuleSummary::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::RuleSummary::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::RuleSummary::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::RuleSummary::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [kind][crate::model::RuleSummary::kind].
    pub fn set_kind<T: std::convert::Into<crate::model::RuleKind>>(mut self, v: T) -> Self {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [target_service][crate::model::RuleSummary::target_service].
    pub fn set_target_service<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.target_service = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::RuleSummary::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::RuleSummary::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::RuleSummary::lifecycle_state].
    pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ConcreteLifecycleState>,
    {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_enabled][crate::model::RuleSummary::is_enabled].
    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [last_execution_status][crate::model::RuleSummary::last_execution_status].
    pub fn set_last_execution_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.last_execution_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_last_executed][crate::model::RuleSummary::time_last_executed].
    pub fn set_time_last_executed<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_last_executed = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::RuleSummary::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::RuleSummary::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// A list of detection rules.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RuleSummaryCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::RuleSummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl RuleSummaryCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::RuleSummaryCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::RuleSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The number of detection rules of each kind.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RuleSummaryReport {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub total_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ingest_time_rules_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub saved_search_rules_count: std::option::Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl RuleSummaryReport {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [total_count][crate::model::RuleSummaryReport::total_count].
    pub fn set_total_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [ingest_time_rules_count][crate::model::RuleSummaryReport::ingest_time_rules_count].
    pub fn set_ingest_time_rules_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.ingest_time_rules_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [saved_search_rules_count][crate::model::RuleSummaryReport::saved_search_rules_count].
    pub fn set_saved_search_rules_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.saved_search_rules_count = std::option::Option::Some(v.into());
        self
    }
}

/// A field extracted from log records.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsField {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_type: std::option::Option<crate::model::ValueType>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_multi_valued: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_facet_eligible: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_high_cardinality: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_large_data: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_system: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_summarizable: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_table_eligible: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_keep_duplicates: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub unit_type: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sources: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parsers: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsField {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::LogAnalyticsField::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::LogAnalyticsField::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::LogAnalyticsField::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [data_type][crate::model::LogAnalyticsField::data_type].
    pub fn set_data_type<T: std::convert::Into<crate::model::ValueType>>(mut self, v: T) -> Self {
        self.data_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_multi_valued][crate::model::LogAnalyticsField::is_multi_valued].
    pub fn set_is_multi_valued<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_multi_valued = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_facet_eligible][crate::model::LogAnalyticsField::is_facet_eligible].
    pub fn set_is_facet_eligible<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_facet_eligible = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_high_cardinality][crate::model::LogAnalyticsField::is_high_cardinality].
    pub fn set_is_high_cardinality<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_high_cardinality = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_large_data][crate::model::LogAnalyticsField::is_large_data].
    pub fn set_is_large_data<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_large_data = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_system][crate::model::LogAnalyticsField::is_system].
    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_summarizable][crate::model::LogAnalyticsField::is_summarizable].
    pub fn set_is_summarizable<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_summarizable = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_table_eligible][crate::model::LogAnalyticsField::is_table_eligible].
    pub fn set_is_table_eligible<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_table_eligible = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_keep_duplicates][crate::model::LogAnalyticsField::is_keep_duplicates].
    pub fn set_is_keep_duplicates<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_keep_duplicates = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [unit_type][crate::model::LogAnalyticsField::unit_type].
    pub fn set_unit_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.unit_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [sources][crate::model::LogAnalyticsField::sources].
    pub fn set_sources<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.sources = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [parsers][crate::model::LogAnalyticsField::parsers].
    pub fn set_parsers<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.parsers = std::option::Option::Some(v.into());
        self
    }
}

/// A field in a list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsFieldSummary {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_type: std::option::Option<crate::model::ValueType>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_multi_valued: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_system: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsFieldSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::LogAnalyticsFieldSummary::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::LogAnalyticsFieldSummary::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::LogAnalyticsFieldSummary::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [data_type][crate::model::LogAnalyticsFieldSummary::data_type].
    pub fn set_data_type<T: std::convert::Into<crate::model::ValueType>>(mut self, v: T) -> Self {
        self.data_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_multi_valued][crate::model::LogAnalyticsFieldSummary::is_multi_valued].
    pub fn set_is_multi_valued<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_multi_valued = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_system][crate::model::LogAnalyticsFieldSummary::is_system].
    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }
}

/// A list of fields.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsFieldCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsFieldSummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsFieldCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsFieldCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsFieldSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A field to create or update.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpsertLogAnalyticsFieldDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_type: std::option::Option<crate::model::ValueType>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_multi_valued: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_keep_duplicates: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub unit_type: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpsertLogAnalyticsFieldDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::UpsertLogAnalyticsFieldDetails::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::UpsertLogAnalyticsFieldDetails::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::UpsertLogAnalyticsFieldDetails::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [data_type][crate::model::UpsertLogAnalyticsFieldDetails::data_type].
    pub fn set_data_type<T: std::convert::Into<crate::model::ValueType>>(mut self, v: T) -> Self {
        self.data_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_multi_valued][crate::model::UpsertLogAnalyticsFieldDetails::is_multi_valued].
    pub fn set_is_multi_valued<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_multi_valued = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_keep_duplicates][crate::model::UpsertLogAnalyticsFieldDetails::is_keep_duplicates].
    pub fn set_is_keep_duplicates<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_keep_duplicates = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [unit_type][crate::model::UpsertLogAnalyticsFieldDetails::unit_type].
    pub fn set_unit_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.unit_type = std::option::Option::Some(v.into());
        self
    }
}

/// The number of fields of each kind.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FieldSummaryReport {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub shipped: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub custom: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub summary_details: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl FieldSummaryReport {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [shipped][crate::model::FieldSummaryReport::shipped].
    pub fn set_shipped<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.shipped = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [custom][crate::model::FieldSummaryReport::custom].
    pub fn set_custom<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.custom = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [summary_details][crate::model::FieldSummaryReport::summary_details].
    pub fn set_summary_details<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.summary_details = std::option::Option::Some(v.into());
        self
    }
}

/// The paths of the fields in a structured log sample.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExtractLogFieldResults {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub field_paths: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ExtractLogFieldResults {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [field_paths][crate::model::ExtractLogFieldResults::field_paths].
    pub fn set_field_paths<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.field_paths = std::option::Option::Some(v.into());
        self
    }
}

/// The header paths in a structured log sample.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExtractLogHeaderResults {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub field_paths: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ExtractLogHeaderResults {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [field_paths][crate::model::ExtractLogHeaderResults::field_paths].
    pub fn set_field_paths<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.field_paths = std::option::Option::Some(v.into());
        self
    }
}

/// A label applied to log records matching a condition.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsLabel {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub edit_version: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub impact: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_system: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub priority: std::option::Option<crate::model::LabelPriorityValue>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub recommendation: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_user_deleted: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub count_usage_in_source: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub aliases: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub suggest_type: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sources: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsLabel {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::LogAnalyticsLabel::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::LogAnalyticsLabel::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::LogAnalyticsLabel::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [edit_version][crate::model::LogAnalyticsLabel::edit_version].
    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [impact][crate::model::LogAnalyticsLabel::impact].
    pub fn set_impact<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.impact = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_system][crate::model::LogAnalyticsLabel::is_system].
    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [priority][crate::model::LogAnalyticsLabel::priority].
    pub fn set_priority<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::LabelPriorityValue>,
    {
        self.priority = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [recommendation][crate::model::LogAnalyticsLabel::recommendation].
    pub fn set_recommendation<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.recommendation = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [type][crate::model::LogAnalyticsLabel::type].
    pub fn set_type<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_user_deleted][crate::model::LogAnalyticsLabel::is_user_deleted].
    pub fn set_is_user_deleted<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_user_deleted = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [count_usage_in_source][crate::model::LogAnalyticsLabel::count_usage_in_source].
    pub fn set_count_usage_in_source<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.count_usage_in_source = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [aliases][crate::model::LogAnalyticsLabel::aliases].
    pub fn set_aliases<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.aliases = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [suggest_type][crate::model::LogAnalyticsLabel::suggest_type].
    pub fn set_suggest_type<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.suggest_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [sources][crate::model::LogAnalyticsLabel::sources].
    pub fn set_sources<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.sources = std::option::Option::Some(v.into());
        self
    }
}

/// A label in a list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsLabelSummary {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_system: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub priority: std::option::Option<crate::model::LabelPriorityValue>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub count_usage_in_source: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsLabelSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::LogAnalyticsLabelSummary::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::LogAnalyticsLabelSummary::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::LogAnalyticsLabelSummary::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_system][crate::model::LogAnalyticsLabelSummary::is_system].
    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [priority][crate::model::LogAnalyticsLabelSummary::priority].
    pub fn set_priority<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::LabelPriorityValue>,
    {
        self.priority = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [count_usage_in_source][crate::model::LogAnalyticsLabelSummary::count_usage_in_source].
    pub fn set_count_usage_in_source<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.count_usage_in_source = std::option::Option::Some(v.into());
        self
    }
}

/// A list of labels.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsLabelCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsLabelSummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsLabelCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsLabelCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsLabelSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A label definition to create or update.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsLabelDefinition {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub edit_version: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub impact: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub priority: std::option::Option<crate::model::LabelPriorityValue>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub recommendation: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub aliases: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsLabelDefinition {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::LogAnalyticsLabelDefinition::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::LogAnalyticsLabelDefinition::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::LogAnalyticsLabelDefinition::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [edit_version][crate::model::LogAnalyticsLabelDefinition::edit_version].
    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [impact][crate::model::LogAnalyticsLabelDefinition::impact].
    pub fn set_impact<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.impact = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [priority][crate::model::LogAnalyticsLabelDefinition::priority].
    pub fn set_priority<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::LabelPriorityValue>,
    {
        self.priority = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [recommendation][crate::model::LogAnalyticsLabelDefinition::recommendation].
    pub fn set_recommendation<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.recommendation = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [type][crate::model::LogAnalyticsLabelDefinition::type].
    pub fn set_type<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [aliases][crate::model::LogAnalyticsLabelDefinition::aliases].
    pub fn set_aliases<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.aliases = std::option::Option::Some(v.into());
        self
    }
}

/// The number of labels of each kind.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LabelSummaryReport {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub count: std::option::Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LabelSummaryReport {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [count][crate::model::LabelSummaryReport::count].
    pub fn set_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.count = std::option::Option::Some(v.into());
        self
    }
}

/// A label priority.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LabelPriority {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LabelPriority {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::LabelPriority::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }
}

/// A list of label priorities.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LabelPriorityCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LabelPriority>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LabelPriorityCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LabelPriorityCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LabelPriority>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A source using a label.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LabelSourceSummary {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub label_field_display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub label_field_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub label_operator_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub condition_string: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_id: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LabelSourceSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [label_field_display_name][crate::model::LabelSourceSummary::label_field_display_name].
    pub fn set_label_field_display_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_field_display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [label_field_name][crate::model::LabelSourceSummary::label_field_name].
    pub fn set_label_field_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_field_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [label_operator_name][crate::model::LabelSourceSummary::label_operator_name].
    pub fn set_label_operator_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_operator_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [condition_string][crate::model::LabelSourceSummary::condition_string].
    pub fn set_condition_string<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.condition_string = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_display_name][crate::model::LabelSourceSummary::source_display_name].
    pub fn set_source_display_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_name][crate::model::LabelSourceSummary::source_name].
    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_id][crate::model::LabelSourceSummary::source_id].
    pub fn set_source_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.source_id = std::option::Option::Some(v.into());
        self
    }
}

/// A list of sources using a label.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LabelSourceCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LabelSourceSummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LabelSourceCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LabelSourceCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LabelSourceSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A list of label names.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LabelNames {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub label_names: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LabelNames {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [label_names][crate::model::LabelNames::label_names].
    pub fn set_label_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.label_names = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The basic information about a label.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BasicLabel {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub priority: std::option::Option<crate::model::LabelPriorityValue>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_system: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl BasicLabel {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::BasicLabel::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::BasicLabel::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [priority][crate::model::BasicLabel::priority].
    pub fn set_priority<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::LabelPriorityValue>,
    {
        self.priority = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_system][crate::model::BasicLabel::is_system].
    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }
}

/// The basic information about a list of labels.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsLabelBasicCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::BasicLabel>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub total_count: std::option::Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsLabelBasicCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsLabelBasicCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::BasicLabel>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [total_count][crate::model::LogAnalyticsLabelBasicCollection::total_count].
    pub fn set_total_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_count = std::option::Option::Some(v.into());
        self
    }
}

/// A column in a lookup.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LookupField {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub common_field_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub default_match_value: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_common_field_name_editable: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_user_defined: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub position: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LookupField {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [common_field_name][crate::model::LookupField::common_field_name].
    pub fn set_common_field_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.common_field_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [default_match_value][crate::model::LookupField::default_match_value].
    pub fn set_default_match_value<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.default_match_value = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::LookupField::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_common_field_name_editable][crate::model::LookupField::is_common_field_name_editable].
    pub fn set_is_common_field_name_editable<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_common_field_name_editable = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_user_defined][crate::model::LookupField::is_user_defined].
    pub fn set_is_user_defined<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_user_defined = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [name][crate::model::LookupField::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [position][crate::model::LookupField::position].
    pub fn set_position<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.position = std::option::Option::Some(v.into());
        self
    }
}

/// The status of the last lookup operation.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StatusSummary {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub chunks_processed: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failure_details: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filename: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub total_chunks: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl StatusSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [chunks_processed][crate::model::StatusSummary::chunks_processed].
    pub fn set_chunks_processed<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.chunks_processed = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [failure_details][crate::model::StatusSummary::failure_details].
    pub fn set_failure_details<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.failure_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [filename][crate::model::StatusSummary::filename].
    pub fn set_filename<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filename = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::StatusSummary::status].
    pub fn set_status<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [total_chunks][crate::model::StatusSummary::total_chunks].
    pub fn set_total_chunks<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.total_chunks = std::option::Option::Some(v.into());
        self
    }
}

/// A table used to enrich log records.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsLookup {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub active_edit_version: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub canonical_link: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub edit_version: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub fields: std::vec::Vec<crate::model::LookupField>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lookup_reference: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lookup_reference_string: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lookup_display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_built_in: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_hidden: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<crate::model::LookupType>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_summary: std::option::Option<crate::model::StatusSummary>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub categories: std::vec::Vec<crate::model::LogAnalyticsCategory>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_matches: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsLookup {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [active_edit_version][crate::model::LogAnalyticsLookup::active_edit_version].
    pub fn set_active_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.active_edit_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [canonical_link][crate::model::LogAnalyticsLookup::canonical_link].
    pub fn set_canonical_link<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.canonical_link = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::LogAnalyticsLookup::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [edit_version][crate::model::LogAnalyticsLookup::edit_version].
    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [fields][crate::model::LogAnalyticsLookup::fields].
    pub fn set_fields<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LookupField>,
    {
        self.fields = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [lookup_reference][crate::model::LogAnalyticsLookup::lookup_reference].
    pub fn set_lookup_reference<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.lookup_reference = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lookup_reference_string][crate::model::LogAnalyticsLookup::lookup_reference_string].
    pub fn set_lookup_reference_string<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.lookup_reference_string = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lookup_display_name][crate::model::LogAnalyticsLookup::lookup_display_name].
    pub fn set_lookup_display_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.lookup_display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [name][crate::model::LogAnalyticsLookup::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_built_in][crate::model::LogAnalyticsLookup::is_built_in].
    pub fn set_is_built_in<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.is_built_in = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_hidden][crate::model::LogAnalyticsLookup::is_hidden].
    pub fn set_is_hidden<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_hidden = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [type][crate::model::LogAnalyticsLookup::type].
    pub fn set_type<T: std::convert::Into<crate::model::LookupType>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [status_summary][crate::model::LogAnalyticsLookup::status_summary].
    pub fn set_status_summary<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::StatusSummary>,
    {
        self.status_summary = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::LogAnalyticsLookup::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [categories][crate::model::LogAnalyticsLookup::categories].
    pub fn set_categories<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsCategory>,
    {
        self.categories = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [max_matches][crate::model::LogAnalyticsLookup::max_matches].
    pub fn set_max_matches<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.max_matches = std::option::Option::Some(v.into());
        self
    }
}

/// A list of lookups.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsLookupCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsLookup>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub total_count: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsLookupCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsLookupCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsLookup>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [total_count][crate::model::LogAnalyticsLookupCollection::total_count].
    pub fn set_total_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.total_count = std::option::Option::Some(v.into());
        self
    }
}

/// The changes to the metadata of a lookup.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateLookupMetadataDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub default_match_value: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub fields: std::vec::Vec<crate::model::LookupField>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_matches: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub categories: std::vec::Vec<crate::model::LogAnalyticsCategory>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateLookupMetadataDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [default_match_value][crate::model::UpdateLookupMetadataDetails::default_match_value].
    pub fn set_default_match_value<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.default_match_value = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::UpdateLookupMetadataDetails::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [fields][crate::model::UpdateLookupMetadataDetails::fields].
    pub fn set_fields<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LookupField>,
    {
        self.fields = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [max_matches][crate::model::UpdateLookupMetadataDetails::max_matches].
    pub fn set_max_matches<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.max_matches = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [categories][crate::model::UpdateLookupMetadataDetails::categories].
    pub fn set_categories<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsCategory>,
    {
        self.categories = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The number of lookups of each kind.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LookupSummaryReport {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub user_created_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub oracle_defined_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub total_count: std::option::Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LookupSummaryReport {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [user_created_count][crate::model::LookupSummaryReport::user_created_count].
    pub fn set_user_created_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.user_created_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [oracle_defined_count][crate::model::LookupSummaryReport::oracle_defined_count].
    pub fn set_oracle_defined_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.oracle_defined_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [total_count][crate::model::LookupSummaryReport::total_count].
    pub fn set_total_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_count = std::option::Option::Some(v.into());
        self
    }
}

/// A kind of log source.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsMetaSourceType {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub built_in: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_entity_type_mandatory: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsMetaSourceType {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::LogAnalyticsMetaSourceType::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [built_in][crate::model::LogAnalyticsMetaSourceType::built_in].
    pub fn set_built_in<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.built_in = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::LogAnalyticsMetaSourceType::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_entity_type_mandatory][crate::model::LogAnalyticsMetaSourceType::is_entity_type_mandatory].
    pub fn set_is_entity_type_mandatory<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_entity_type_mandatory = std::option::Option::Some(v.into());
        self
    }
}

/// A list of source types.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsMetaSourceTypeCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsMetaSourceType>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsMetaSourceTypeCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsMetaSourceTypeCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsMetaSourceType>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A function applied by a parser.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsParserFunction {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parser_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parser_function_id: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parser_function_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parser_function_priority: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parser_meta_plugin_name: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsParserFunction {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parser_name][crate::model::LogAnalyticsParserFunction::parser_name].
    pub fn set_parser_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parser_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_enabled][crate::model::LogAnalyticsParserFunction::is_enabled].
    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [parser_function_id][crate::model::LogAnalyticsParserFunction::parser_function_id].
    pub fn set_parser_function_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.parser_function_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [parser_function_name][crate::model::LogAnalyticsParserFunction::parser_function_name].
    pub fn set_parser_function_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.parser_function_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [parser_function_priority][crate::model::LogAnalyticsParserFunction::parser_function_priority].
    pub fn set_parser_function_priority<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.parser_function_priority = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [parser_meta_plugin_name][crate::model::LogAnalyticsParserFunction::parser_meta_plugin_name].
    pub fn set_parser_meta_plugin_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.parser_meta_plugin_name = std::option::Option::Some(v.into());
        self
    }
}

/// A list of parser functions.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsParserFunctionCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsParserFunction>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsParserFunctionCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsParserFunctionCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsParserFunction>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A plugin available to parsers.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsParserMetaPlugin {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_user_deleted: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsParserMetaPlugin {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::LogAnalyticsParserMetaPlugin::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::LogAnalyticsParserMetaPlugin::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::LogAnalyticsParserMetaPlugin::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_user_deleted][crate::model::LogAnalyticsParserMetaPlugin::is_user_deleted].
    pub fn set_is_user_deleted<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_user_deleted = std::option::Option::Some(v.into());
        self
    }
}

/// A list of parser plugins.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsParserMetaPluginCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsParserMetaPlugin>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsParserMetaPluginCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsParserMetaPluginCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsParserMetaPlugin>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A list of supported character encodings.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CharEncodingCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CharEncodingCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::CharEncodingCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A timezone.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Timezone {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Timezone {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Timezone::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::Timezone::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }
}

/// A list of timezones.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TimezoneCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::Timezone>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl TimezoneCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::TimezoneCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Timezone>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A function available to sources.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsSourceMetaFunction {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub component: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub edit_version: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub java_class_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_meta_function_id: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsSourceMetaFunction {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [component][crate::model::LogAnalyticsSourceMetaFunction::component].
    pub fn set_component<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.component = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::LogAnalyticsSourceMetaFunction::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [edit_version][crate::model::LogAnalyticsSourceMetaFunction::edit_version].
    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [java_class_name][crate::model::LogAnalyticsSourceMetaFunction::java_class_name].
    pub fn set_java_class_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.java_class_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [name][crate::model::LogAnalyticsSourceMetaFunction::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_meta_function_id][crate::model::LogAnalyticsSourceMetaFunction::source_meta_function_id].
    pub fn set_source_meta_function_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.source_meta_function_id = std::option::Option::Some(v.into());
        self
    }
}

/// A list of source functions.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsSourceMetaFunctionCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsSourceMetaFunction>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsSourceMetaFunctionCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsSourceMetaFunctionCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsSourceMetaFunction>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A file pattern of a log source.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsSourcePattern {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub converted_text: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub db_parser_id: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub db_pattern_date_time_columns: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub db_pattern_date_time_field: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub db_pattern_sql_query: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_default: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_include: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_system: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub pattern_id: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub pattern_text: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_id: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub entity_type: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsSourcePattern {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [converted_text][crate::model::LogAnalyticsSourcePattern::converted_text].
    pub fn set_converted_text<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.converted_text = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [db_parser_id][crate::model::LogAnalyticsSourcePattern::db_parser_id].
    pub fn set_db_parser_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.db_parser_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [db_pattern_date_time_columns][crate::model::LogAnalyticsSourcePattern::db_pattern_date_time_columns].
    pub fn set_db_pattern_date_time_columns<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.db_pattern_date_time_columns = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [db_pattern_date_time_field][crate::model::LogAnalyticsSourcePattern::db_pattern_date_time_field].
    pub fn set_db_pattern_date_time_field<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.db_pattern_date_time_field = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [db_pattern_sql_query][crate::model::LogAnalyticsSourcePattern::db_pattern_sql_query].
    pub fn set_db_pattern_sql_query<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.db_pattern_sql_query = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_default][crate::model::LogAnalyticsSourcePattern::is_default].
    pub fn set_is_default<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_default = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_enabled][crate::model::LogAnalyticsSourcePattern::is_enabled].
    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_include][crate::model::LogAnalyticsSourcePattern::is_include].
    pub fn set_is_include<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_include = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_system][crate::model::LogAnalyticsSourcePattern::is_system].
    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [pattern_id][crate::model::LogAnalyticsSourcePattern::pattern_id].
    pub fn set_pattern_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.pattern_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [pattern_text][crate::model::LogAnalyticsSourcePattern::pattern_text].
    pub fn set_pattern_text<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.pattern_text = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_id][crate::model::LogAnalyticsSourcePattern::source_id].
    pub fn set_source_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.source_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_type][crate::model::LogAnalyticsSourcePattern::entity_type].
    pub fn set_entity_type<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.entity_type = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A list of source patterns.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsSourcePatternCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsSourcePattern>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsSourcePatternCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsSourcePatternCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsSourcePattern>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// An operator used in label conditions.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsLabelOperator {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsLabelOperator {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][crate::model::LogAnalyticsLabelOperator::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [name][crate::model::LogAnalyticsLabelOperator::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }
}

/// A list of label operators.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsLabelOperatorCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsLabelOperator>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsLabelOperatorCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsLabelOperatorCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsLabelOperator>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A field extracted by a source from another field.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsSourceExtendedFieldDefinition {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub base_field_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub base_field_log_text: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub condition_data_type: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub condition_field: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub condition_operator: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub condition_value: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub converted_regular_expression: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub extended_field_definition_id: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub field_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_system: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub regular_expression: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_id: std::option::Option<i64>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsSourceExtendedFieldDefinition {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [base_field_name][crate::model::LogAnalyticsSourceExtendedFieldDefinition::base_field_name].
    pub fn set_base_field_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.base_field_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [base_field_log_text][crate::model::LogAnalyticsSourceExtendedFieldDefinition::base_field_log_text].
    pub fn set_base_field_log_text<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.base_field_log_text = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [condition_data_type][crate::model::LogAnalyticsSourceExtendedFieldDefinition::condition_data_type].
    pub fn set_condition_data_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.condition_data_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [condition_field][crate::model::LogAnalyticsSourceExtendedFieldDefinition::condition_field].
    pub fn set_condition_field<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.condition_field = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [condition_operator][crate::model::LogAnalyticsSourceExtendedFieldDefinition::condition_operator].
    pub fn set_condition_operator<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.condition_operator = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [condition_value][crate::model::LogAnalyticsSourceExtendedFieldDefinition::condition_value].
    pub fn set_condition_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.condition_value = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [converted_regular_expression][crate::model::LogAnalyticsSourceExtendedFieldDefinition::converted_regular_expression].
    pub fn set_converted_regular_expression<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.converted_regular_expression = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [extended_field_definition_id][crate::model::LogAnalyticsSourceExtendedFieldDefinition::extended_field_definition_id].
    pub fn set_extended_field_definition_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.extended_field_definition_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [field_name][crate::model::LogAnalyticsSourceExtendedFieldDefinition::field_name].
    pub fn set_field_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_enabled][crate::model::LogAnalyticsSourceExtendedFieldDefinition::is_enabled].
    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_system][crate::model::LogAnalyticsSourceExtendedFieldDefinition::is_system].
    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [regular_expression][crate::model::LogAnalyticsSourceExtendedFieldDefinition::regular_expression].
    pub fn set_regular_expression<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.regular_expression = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_id][crate::model::LogAnalyticsSourceExtendedFieldDefinition::source_id].
    pub fn set_source_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.source_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::LogAnalyticsSourceExtendedFieldDefinition::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }
}

/// A list of extended field definitions.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsSourceExtendedFieldDefinitionCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsSourceExtendedFieldDefinition>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsSourceExtendedFieldDefinitionCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsSourceExtendedFieldDefinitionCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsSourceExtendedFieldDefinition>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The effective value of a configuration property.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EffectivePropertySummary {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub value: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub effective_level: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub patterns: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl EffectivePropertySummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::EffectivePropertySummary::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [value][crate::model::EffectivePropertySummary::value].
    pub fn set_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.value = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [effective_level][crate::model::EffectivePropertySummary::effective_level].
    pub fn set_effective_level<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.effective_level = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [patterns][crate::model::EffectivePropertySummary::patterns].
    pub fn set_patterns<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.patterns = std::option::Option::Some(v.into());
        self
    }
}

/// A list of effective properties.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EffectivePropertyCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::EffectivePropertySummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl EffectivePropertyCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::EffectivePropertyCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EffectivePropertySummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The metadata of a configuration property.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PropertyMetadataSummary {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub default_value: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub levels: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl PropertyMetadataSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::PropertyMetadataSummary::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::PropertyMetadataSummary::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::PropertyMetadataSummary::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [default_value][crate::model::PropertyMetadataSummary::default_value].
    pub fn set_default_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.default_value = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [levels][crate::model::PropertyMetadataSummary::levels].
    pub fn set_levels<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.levels = std::option::Option::Some(v.into());
        self
    }
}

/// A list of property metadata.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PropertyMetadataSummaryCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::PropertyMetadataSummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl PropertyMetadataSummaryCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::PropertyMetadataSummaryCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::PropertyMetadataSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A field extracted by a parser.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsParserField {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub field: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parser_field_id: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parser_field_expression: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parser_field_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub storage_field_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parser_field_integrator_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parser_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parser_field_sequence: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub structured_column_info: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsParserField {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [field][crate::model::LogAnalyticsParserField::field].
    pub fn set_field<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.field = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [parser_field_id][crate::model::LogAnalyticsParserField::parser_field_id].
    pub fn set_parser_field_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.parser_field_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [parser_field_expression][crate::model::LogAnalyticsParserField::parser_field_expression].
    pub fn set_parser_field_expression<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.parser_field_expression = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [parser_field_name][crate::model::LogAnalyticsParserField::parser_field_name].
    pub fn set_parser_field_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.parser_field_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [storage_field_name][crate::model::LogAnalyticsParserField::storage_field_name].
    pub fn set_storage_field_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.storage_field_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [parser_field_integrator_name][crate::model::LogAnalyticsParserField::parser_field_integrator_name].
    pub fn set_parser_field_integrator_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.parser_field_integrator_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [parser_name][crate::model::LogAnalyticsParserField::parser_name].
    pub fn set_parser_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parser_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [parser_field_sequence][crate::model::LogAnalyticsParserField::parser_field_sequence].
    pub fn set_parser_field_sequence<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.parser_field_sequence = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [structured_column_info][crate::model::LogAnalyticsParserField::structured_column_info].
    pub fn set_structured_column_info<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<serde_json::Value>,
    {
        self.structured_column_info = std::option::Option::Some(v.into());
        self
    }
}

/// A parser that extracts fields from log records.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsParser {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub content: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub edit_version: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub encoding: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub example_content: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub field_maps: std::vec::Vec<crate::model::LogAnalyticsParserField>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub footer_content: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub header_content: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_default: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_single_line_content: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_system: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub language: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_type_test_request_version: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parser_ignoreline_characters: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_hidden: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parser_sequence: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parser_timezone: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_parser_written_once: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub parser_functions: std::vec::Vec<crate::model::LogAnalyticsParserFunction>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sources_count: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub should_tokenize_original_text: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub field_delimiter: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub field_qualifier: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<crate::model::ParserType>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_user_deleted: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_namespace_aware: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub categories: std::vec::Vec<crate::model::LogAnalyticsCategory>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_position_aware: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsParser {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [content][crate::model::LogAnalyticsParser::content].
    pub fn set_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::LogAnalyticsParser::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::LogAnalyticsParser::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [edit_version][crate::model::LogAnalyticsParser::edit_version].
    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [encoding][crate::model::LogAnalyticsParser::encoding].
    pub fn set_encoding<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.encoding = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [example_content][crate::model::LogAnalyticsParser::example_content].
    pub fn set_example_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.example_content = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [field_maps][crate::model::LogAnalyticsParser::field_maps].
    pub fn set_field_maps<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsParserField>,
    {
        self.field_maps = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [footer_content][crate::model::LogAnalyticsParser::footer_content].
    pub fn set_footer_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.footer_content = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [header_content][crate::model::LogAnalyticsParser::header_content].
    pub fn set_header_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.header_content = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [name][crate::model::LogAnalyticsParser::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_default][crate::model::LogAnalyticsParser::is_default].
    pub fn set_is_default<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_default = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_single_line_content][crate::model::LogAnalyticsParser::is_single_line_content].
    pub fn set_is_single_line_content<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_single_line_content = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_system][crate::model::LogAnalyticsParser::is_system].
    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [language][crate::model::LogAnalyticsParser::language].
    pub fn set_language<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.language = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::LogAnalyticsParser::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_type_test_request_version][crate::model::LogAnalyticsParser::log_type_test_request_version].
    pub fn set_log_type_test_request_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.log_type_test_request_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [parser_ignoreline_characters][crate::model::LogAnalyticsParser::parser_ignoreline_characters].
    pub fn set_parser_ignoreline_characters<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.parser_ignoreline_characters = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_hidden][crate::model::LogAnalyticsParser::is_hidden].
    pub fn set_is_hidden<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_hidden = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [parser_sequence][crate::model::LogAnalyticsParser::parser_sequence].
    pub fn set_parser_sequence<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.parser_sequence = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [parser_timezone][crate::model::LogAnalyticsParser::parser_timezone].
    pub fn set_parser_timezone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parser_timezone = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_parser_written_once][crate::model::LogAnalyticsParser::is_parser_written_once].
    pub fn set_is_parser_written_once<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_parser_written_once = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [parser_functions][crate::model::LogAnalyticsParser::parser_functions].
    pub fn set_parser_functions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsParserFunction>,
    {
        self.parser_functions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [sources_count][crate::model::LogAnalyticsParser::sources_count].
    pub fn set_sources_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.sources_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [should_tokenize_original_text][crate::model::LogAnalyticsParser::should_tokenize_original_text].
    pub fn set_should_tokenize_original_text<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.should_tokenize_original_text = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [field_delimiter][crate::model::LogAnalyticsParser::field_delimiter].
    pub fn set_field_delimiter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_delimiter = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [field_qualifier][crate::model::LogAnalyticsParser::field_qualifier].
    pub fn set_field_qualifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_qualifier = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [type][crate::model::LogAnalyticsParser::type].
    pub fn set_type<T: std::convert::Into<crate::model::ParserType>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_user_deleted][crate::model::LogAnalyticsParser::is_user_deleted].
    pub fn set_is_user_deleted<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_user_deleted = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_namespace_aware][crate::model::LogAnalyticsParser::is_namespace_aware].
    pub fn set_is_namespace_aware<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_namespace_aware = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [categories][crate::model::LogAnalyticsParser::categories].
    pub fn set_categories<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsCategory>,
    {
        self.categories = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [is_position_aware][crate::model::LogAnalyticsParser::is_position_aware].
    pub fn set_is_position_aware<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_position_aware = std::option::Option::Some(v.into());
        self
    }
}

/// A parser in a list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsParserSummary {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_system: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<crate::model::ParserType>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sources_count: std::option::Option<i64>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsParserSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::LogAnalyticsParserSummary::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::LogAnalyticsParserSummary::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::LogAnalyticsParserSummary::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_system][crate::model::LogAnalyticsParserSummary::is_system].
    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [type][crate::model::LogAnalyticsParserSummary::type].
    pub fn set_type<T: std::convert::Into<crate::model::ParserType>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [sources_count][crate::model::LogAnalyticsParserSummary::sources_count].
    pub fn set_sources_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.sources_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::LogAnalyticsParserSummary::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }
}

/// A list of parsers.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsParserCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsParserSummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsParserCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsParserCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsParserSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A parser to create or update.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpsertLogAnalyticsParserDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub content: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub edit_version: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub encoding: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub example_content: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub field_maps: std::vec::Vec<crate::model::LogAnalyticsParserField>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub footer_content: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub header_content: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_default: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_single_line_content: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_system: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub language: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_type_test_request_version: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parser_ignoreline_characters: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parser_sequence: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parser_timezone: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_parser_written_once: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub parser_functions: std::vec::Vec<crate::model::LogAnalyticsParserFunction>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub should_tokenize_original_text: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub field_delimiter: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub field_qualifier: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<crate::model::ParserType>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_namespace_aware: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub categories: std::vec::Vec<crate::model::LogAnalyticsCategory>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_position_aware: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpsertLogAnalyticsParserDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [content][crate::model::UpsertLogAnalyticsParserDetails::content].
    pub fn set_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::UpsertLogAnalyticsParserDetails::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::UpsertLogAnalyticsParserDetails::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [edit_version][crate::model::UpsertLogAnalyticsParserDetails::edit_version].
    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [encoding][crate::model::UpsertLogAnalyticsParserDetails::encoding].
    pub fn set_encoding<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.encoding = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [example_content][crate::model::UpsertLogAnalyticsParserDetails::example_content].
    pub fn set_example_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.example_content = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [field_maps][crate::model::UpsertLogAnalyticsParserDetails::field_maps].
    pub fn set_field_maps<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsParserField>,
    {
        self.field_maps = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [footer_content][crate::model::UpsertLogAnalyticsParserDetails::footer_content].
    pub fn set_footer_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.footer_content = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [header_content][crate::model::UpsertLogAnalyticsParserDetails::header_content].
    pub fn set_header_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.header_content = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [name][crate::model::UpsertLogAnalyticsParserDetails::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_default][crate::model::UpsertLogAnalyticsParserDetails::is_default].
    pub fn set_is_default<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_default = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_single_line_content][crate::model::UpsertLogAnalyticsParserDetails::is_single_line_content].
    pub fn set_is_single_line_content<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_single_line_content = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_system][crate::model::UpsertLogAnalyticsParserDetails::is_system].
    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [language][crate::model::UpsertLogAnalyticsParserDetails::language].
    pub fn set_language<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.language = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_type_test_request_version][crate::model::UpsertLogAnalyticsParserDetails::log_type_test_request_version].
    pub fn set_log_type_test_request_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.log_type_test_request_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [parser_ignoreline_characters][crate::model::UpsertLogAnalyticsParserDetails::parser_ignoreline_characters].
    pub fn set_parser_ignoreline_characters<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.parser_ignoreline_characters = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [parser_sequence][crate::model::UpsertLogAnalyticsParserDetails::parser_sequence].
    pub fn set_parser_sequence<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.parser_sequence = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [parser_timezone][crate::model::UpsertLogAnalyticsParserDetails::parser_timezone].
    pub fn set_parser_timezone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parser_timezone = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_parser_written_once][crate::model::UpsertLogAnalyticsParserDetails::is_parser_written_once].
    pub fn set_is_parser_written_once<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_parser_written_once = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [parser_functions][crate::model::UpsertLogAnalyticsParserDetails::parser_functions].
    pub fn set_parser_functions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsParserFunction>,
    {
        self.parser_functions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [should_tokenize_original_text][crate::model::UpsertLogAnalyticsParserDetails::should_tokenize_original_text].
    pub fn set_should_tokenize_original_text<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.should_tokenize_original_text = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [field_delimiter][crate::model::UpsertLogAnalyticsParserDetails::field_delimiter].
    pub fn set_field_delimiter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_delimiter = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [field_qualifier][crate::model::UpsertLogAnalyticsParserDetails::field_qualifier].
    pub fn set_field_qualifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_qualifier = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [type][crate::model::UpsertLogAnalyticsParserDetails::type].
    pub fn set_type<T: std::convert::Into<crate::model::ParserType>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_namespace_aware][crate::model::UpsertLogAnalyticsParserDetails::is_namespace_aware].
    pub fn set_is_namespace_aware<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_namespace_aware = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [categories][crate::model::UpsertLogAnalyticsParserDetails::categories].
    pub fn set_categories<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsCategory>,
    {
        self.categories = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [is_position_aware][crate::model::UpsertLogAnalyticsParserDetails::is_position_aware].
    pub fn set_is_position_aware<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_position_aware = std::option::Option::Some(v.into());
        self
    }
}

/// The number of parsers of each kind.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ParserSummaryReport {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub shipped: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub custom: std::option::Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ParserSummaryReport {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [shipped][crate::model::ParserSummaryReport::shipped].
    pub fn set_shipped<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.shipped = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [custom][crate::model::ParserSummaryReport::custom].
    pub fn set_custom<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.custom = std::option::Option::Some(v.into());
        self
    }
}

/// The result of testing a parser.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ParserTestResult {
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub additional_info: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entries: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub example_content: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lines: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub named_capture_groups: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ParserTestResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [additional_info][crate::model::ParserTestResult::additional_info].
    pub fn set_additional_info<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.additional_info = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [entries][crate::model::ParserTestResult::entries].
    pub fn set_entries<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.entries = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [example_content][crate::model::ParserTestResult::example_content].
    pub fn set_example_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.example_content = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lines][crate::model::ParserTestResult::lines].
    pub fn set_lines<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.lines = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [named_capture_groups][crate::model::ParserTestResult::named_capture_groups].
    pub fn set_named_capture_groups<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.named_capture_groups = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The log content to test a parser against.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TestParserPayloadDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub content: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub encoding: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub example_content: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub field_maps: std::vec::Vec<crate::model::LogAnalyticsParserField>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub footer_content: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub header_content: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_default: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_single_line_content: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_system: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub language: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<crate::model::ParserType>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl TestParserPayloadDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [content][crate::model::TestParserPayloadDetails::content].
    pub fn set_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::TestParserPayloadDetails::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::TestParserPayloadDetails::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [encoding][crate::model::TestParserPayloadDetails::encoding].
    pub fn set_encoding<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.encoding = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [example_content][crate::model::TestParserPayloadDetails::example_content].
    pub fn set_example_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.example_content = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [field_maps][crate::model::TestParserPayloadDetails::field_maps].
    pub fn set_field_maps<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsParserField>,
    {
        self.field_maps = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [footer_content][crate::model::TestParserPayloadDetails::footer_content].
    pub fn set_footer_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.footer_content = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [header_content][crate::model::TestParserPayloadDetails::header_content].
    pub fn set_header_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.header_content = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [name][crate::model::TestParserPayloadDetails::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_default][crate::model::TestParserPayloadDetails::is_default].
    pub fn set_is_default<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_default = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_single_line_content][crate::model::TestParserPayloadDetails::is_single_line_content].
    pub fn set_is_single_line_content<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_single_line_content = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_system][crate::model::TestParserPayloadDetails::is_system].
    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [language][crate::model::TestParserPayloadDetails::language].
    pub fn set_language<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.language = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [type][crate::model::TestParserPayloadDetails::type].
    pub fn set_type<T: std::convert::Into<crate::model::ParserType>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }
}

/// A namespace preference.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsPreference {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub value: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsPreference {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::LogAnalyticsPreference::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [value][crate::model::LogAnalyticsPreference::value].
    pub fn set_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.value = std::option::Option::Some(v.into());
        self
    }
}

/// A list of namespace preferences.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsPreferenceCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsPreference>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsPreferenceCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsPreferenceCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsPreference>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A list of preferences to update or remove.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsPreferenceDetails {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsPreference>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsPreferenceDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsPreferenceDetails::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsPreference>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A time range for a query.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TimeRange {
    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_start: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_end: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub time_zone: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl TimeRange {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [time_start][crate::model::TimeRange::time_start].
    pub fn set_time_start<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_start = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_end][crate::model::TimeRange::time_end].
    pub fn set_time_end<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_end = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_zone][crate::model::TimeRange::time_zone].
    pub fn set_time_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.time_zone = std::option::Option::Some(v.into());
        self
    }
}

/// A filter limiting the scope of a query.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ScopeFilter {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub field_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub value: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_negation: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ScopeFilter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [field_name][crate::model::ScopeFilter::field_name].
    pub fn set_field_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [value][crate::model::ScopeFilter::value].
    pub fn set_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.value = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_negation][crate::model::ScopeFilter::is_negation].
    pub fn set_is_negation<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_negation = std::option::Option::Some(v.into());
        self
    }
}

/// The details of a query.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id_in_subtree: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub saved_search_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub query_string: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sub_system: std::option::Option<crate::model::SubSystemName>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_total_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub time_filter: std::option::Option<crate::model::TimeRange>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub scope_filters: std::vec::Vec<crate::model::ScopeFilter>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub query_timeout_in_seconds: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub should_run_async: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub async_mode: std::option::Option<crate::model::JobMode>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub should_include_total_count: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub should_include_columns: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub should_include_fields: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub should_use_acceleration: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl QueryDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::QueryDetails::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id_in_subtree][crate::model::QueryDetails::compartment_id_in_subtree].
    pub fn set_compartment_id_in_subtree<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.compartment_id_in_subtree = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [saved_search_id][crate::model::QueryDetails::saved_search_id].
    pub fn set_saved_search_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.saved_search_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [query_string][crate::model::QueryDetails::query_string].
    pub fn set_query_string<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.query_string = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [sub_system][crate::model::QueryDetails::sub_system].
    pub fn set_sub_system<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::SubSystemName>,
    {
        self.sub_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [max_total_count][crate::model::QueryDetails::max_total_count].
    pub fn set_max_total_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.max_total_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_filter][crate::model::QueryDetails::time_filter].
    pub fn set_time_filter<T: std::convert::Into<crate::model::TimeRange>>(mut self, v: T) -> Self {
        self.time_filter = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [scope_filters][crate::model::QueryDetails::scope_filters].
    pub fn set_scope_filters<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ScopeFilter>,
    {
        self.scope_filters = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [query_timeout_in_seconds][crate::model::QueryDetails::query_timeout_in_seconds].
    pub fn set_query_timeout_in_seconds<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.query_timeout_in_seconds = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [should_run_async][crate::model::QueryDetails::should_run_async].
    pub fn set_should_run_async<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.should_run_async = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [async_mode][crate::model::QueryDetails::async_mode].
    pub fn set_async_mode<T: std::convert::Into<crate::model::JobMode>>(mut self, v: T) -> Self {
        self.async_mode = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [should_include_total_count][crate::model::QueryDetails::should_include_total_count].
    pub fn set_should_include_total_count<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.should_include_total_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [should_include_columns][crate::model::QueryDetails::should_include_columns].
    pub fn set_should_include_columns<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.should_include_columns = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [should_include_fields][crate::model::QueryDetails::should_include_fields].
    pub fn set_should_include_fields<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.should_include_fields = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [should_use_acceleration][crate::model::QueryDetails::should_use_acceleration].
    pub fn set_should_use_acceleration<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.should_use_acceleration = std::option::Option::Some(v.into());
        self
    }
}

/// A column of a query result.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FieldInfo {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub value_type: std::option::Option<crate::model::FieldValueType>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_list_of_values: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_multi_valued: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_case_sensitive: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_groupable: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_numeric: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_evaluable: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl FieldInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::FieldInfo::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::FieldInfo::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [value_type][crate::model::FieldInfo::value_type].
    pub fn set_value_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::FieldValueType>,
    {
        self.value_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_list_of_values][crate::model::FieldInfo::is_list_of_values].
    pub fn set_is_list_of_values<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_list_of_values = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_multi_valued][crate::model::FieldInfo::is_multi_valued].
    pub fn set_is_multi_valued<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_multi_valued = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_case_sensitive][crate::model::FieldInfo::is_case_sensitive].
    pub fn set_is_case_sensitive<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_case_sensitive = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_groupable][crate::model::FieldInfo::is_groupable].
    pub fn set_is_groupable<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_groupable = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_numeric][crate::model::FieldInfo::is_numeric].
    pub fn set_is_numeric<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_numeric = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_evaluable][crate::model::FieldInfo::is_evaluable].
    pub fn set_is_evaluable<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_evaluable = std::option::Option::Some(v.into());
        self
    }
}

/// The results of a query.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryAggregation {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub total_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub total_matched_count: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub are_partial_results: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub partial_result_reason: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_content_hidden: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub columns: std::vec::Vec<crate::model::FieldInfo>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub fields: std::vec::Vec<crate::model::FieldInfo>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub items: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub query_execution_time_in_ms: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl QueryAggregation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [total_count][crate::model::QueryAggregation::total_count].
    pub fn set_total_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [total_matched_count][crate::model::QueryAggregation::total_matched_count].
    pub fn set_total_matched_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.total_matched_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [are_partial_results][crate::model::QueryAggregation::are_partial_results].
    pub fn set_are_partial_results<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.are_partial_results = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [partial_result_reason][crate::model::QueryAggregation::partial_result_reason].
    pub fn set_partial_result_reason<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.partial_result_reason = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_content_hidden][crate::model::QueryAggregation::is_content_hidden].
    pub fn set_is_content_hidden<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_content_hidden = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [columns][crate::model::QueryAggregation::columns].
    pub fn set_columns<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::FieldInfo>,
    {
        self.columns = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [fields][crate::model::QueryAggregation::fields].
    pub fn set_fields<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::FieldInfo>,
    {
        self.fields = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [items][crate::model::QueryAggregation::items].
    pub fn set_items<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.items = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [query_execution_time_in_ms][crate::model::QueryAggregation::query_execution_time_in_ms].
    pub fn set_query_execution_time_in_ms<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.query_execution_time_in_ms = std::option::Option::Some(v.into());
        self
    }
}

/// The query to export, and the export format.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id_in_subtree: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub query_string: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sub_system: std::option::Option<crate::model::SubSystemName>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub time_filter: std::option::Option<crate::model::TimeRange>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub scope_filters: std::vec::Vec<crate::model::ScopeFilter>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_total_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub output_format: std::option::Option<crate::model::ResultFormat>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub query_timeout_in_seconds: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub should_localize: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub should_use_acceleration: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ExportDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::ExportDetails::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id_in_subtree][crate::model::ExportDetails::compartment_id_in_subtree].
    pub fn set_compartment_id_in_subtree<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.compartment_id_in_subtree = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [query_string][crate::model::ExportDetails::query_string].
    pub fn set_query_string<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.query_string = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [sub_system][crate::model::ExportDetails::sub_system].
    pub fn set_sub_system<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::SubSystemName>,
    {
        self.sub_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_filter][crate::model::ExportDetails::time_filter].
    pub fn set_time_filter<T: std::convert::Into<crate::model::TimeRange>>(mut self, v: T) -> Self {
        self.time_filter = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [scope_filters][crate::model::ExportDetails::scope_filters].
    pub fn set_scope_filters<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ScopeFilter>,
    {
        self.scope_filters = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [max_total_count][crate::model::ExportDetails::max_total_count].
    pub fn set_max_total_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.max_total_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [output_format][crate::model::ExportDetails::output_format].
    pub fn set_output_format<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ResultFormat>,
    {
        self.output_format = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [query_timeout_in_seconds][crate::model::ExportDetails::query_timeout_in_seconds].
    pub fn set_query_timeout_in_seconds<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.query_timeout_in_seconds = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [should_localize][crate::model::ExportDetails::should_localize].
    pub fn set_should_localize<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.should_localize = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [should_use_acceleration][crate::model::ExportDetails::should_use_acceleration].
    pub fn set_should_use_acceleration<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.should_use_acceleration = std::option::Option::Some(v.into());
        self
    }
}

/// A query, and the filters to add to it.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FilterDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub query_string: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sub_system: std::option::Option<crate::model::SubSystemName>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filters: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl FilterDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::FilterDetails::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [query_string][crate::model::FilterDetails::query_string].
    pub fn set_query_string<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.query_string = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [sub_system][crate::model::FilterDetails::sub_system].
    pub fn set_sub_system<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::SubSystemName>,
    {
        self.sub_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [filters][crate::model::FilterDetails::filters].
    pub fn set_filters<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.filters = std::option::Option::Some(v.into());
        self
    }
}

/// A query with filters added.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FilterOutput {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_query_string: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub internal_query_string: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub response_time_in_ms: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl FilterOutput {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_query_string][crate::model::FilterOutput::display_query_string].
    pub fn set_display_query_string<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.display_query_string = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [internal_query_string][crate::model::FilterOutput::internal_query_string].
    pub fn set_internal_query_string<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.internal_query_string = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [response_time_in_ms][crate::model::FilterOutput::response_time_in_ms].
    pub fn set_response_time_in_ms<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.response_time_in_ms = std::option::Option::Some(v.into());
        self
    }
}

/// A query to parse.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ParseQueryDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub query_string: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sub_system: std::option::Option<crate::model::SubSystemName>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub saved_search_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub scope_filters: std::vec::Vec<crate::model::ScopeFilter>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ParseQueryDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [query_string][crate::model::ParseQueryDetails::query_string].
    pub fn set_query_string<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.query_string = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [sub_system][crate::model::ParseQueryDetails::sub_system].
    pub fn set_sub_system<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::SubSystemName>,
    {
        self.sub_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [saved_search_id][crate::model::ParseQueryDetails::saved_search_id].
    pub fn set_saved_search_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.saved_search_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [scope_filters][crate::model::ParseQueryDetails::scope_filters].
    pub fn set_scope_filters<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ScopeFilter>,
    {
        self.scope_filters = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The result of parsing a query.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ParseQueryOutput {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_query_string: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub internal_query_string: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub columns: std::vec::Vec<crate::model::FieldInfo>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub response_time_in_ms: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ParseQueryOutput {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_query_string][crate::model::ParseQueryOutput::display_query_string].
    pub fn set_display_query_string<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.display_query_string = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [internal_query_string][crate::model::ParseQueryOutput::internal_query_string].
    pub fn set_internal_query_string<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.internal_query_string = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [columns][crate::model::ParseQueryOutput::columns].
    pub fn set_columns<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::FieldInfo>,
    {
        self.columns = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [response_time_in_ms][crate::model::ParseQueryOutput::response_time_in_ms].
    pub fn set_response_time_in_ms<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.response_time_in_ms = std::option::Option::Some(v.into());
        self
    }
}

/// A partial query to complete.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SuggestDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id_in_subtree: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub query_string: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sub_system: std::option::Option<crate::model::SubSystemName>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl SuggestDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::SuggestDetails::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id_in_subtree][crate::model::SuggestDetails::compartment_id_in_subtree].
    pub fn set_compartment_id_in_subtree<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.compartment_id_in_subtree = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [query_string][crate::model::SuggestDetails::query_string].
    pub fn set_query_string<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.query_string = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [sub_system][crate::model::SuggestDetails::sub_system].
    pub fn set_sub_system<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::SubSystemName>,
    {
        self.sub_system = std::option::Option::Some(v.into());
        self
    }
}

/// The completions of a partial query.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SuggestOutput {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub response_time_in_ms: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub items: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl SuggestOutput {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [response_time_in_ms][crate::model::SuggestOutput::response_time_in_ms].
    pub fn set_response_time_in_ms<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.response_time_in_ms = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [items][crate::model::SuggestOutput::items].
    pub fn set_items<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.items = std::option::Option::Some(v.into());
        self
    }
}

/// A work request for a query running in the background.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryWorkRequest {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_started: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_accepted: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_finished: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_expires: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub percent_complete: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::OperationStatus>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub operation_type: std::option::Option<crate::model::QueryOperationType>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sub_system: std::option::Option<crate::model::SubSystemName>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_query_string: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub internal_query_string: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_background_accepted: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub time_filter: std::option::Option<crate::model::TimeRange>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub mode: std::option::Option<crate::model::JobMode>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl QueryWorkRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::QueryWorkRequest::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::QueryWorkRequest::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_started][crate::model::QueryWorkRequest::time_started].
    pub fn set_time_started<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_started = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_accepted][crate::model::QueryWorkRequest::time_accepted].
    pub fn set_time_accepted<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_accepted = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_finished][crate::model::QueryWorkRequest::time_finished].
    pub fn set_time_finished<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_finished = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_expires][crate::model::QueryWorkRequest::time_expires].
    pub fn set_time_expires<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_expires = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [percent_complete][crate::model::QueryWorkRequest::percent_complete].
    pub fn set_percent_complete<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.percent_complete = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::QueryWorkRequest::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::OperationStatus>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [operation_type][crate::model::QueryWorkRequest::operation_type].
    pub fn set_operation_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::QueryOperationType>,
    {
        self.operation_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [sub_system][crate::model::QueryWorkRequest::sub_system].
    pub fn set_sub_system<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::SubSystemName>,
    {
        self.sub_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_query_string][crate::model::QueryWorkRequest::display_query_string].
    pub fn set_display_query_string<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.display_query_string = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [internal_query_string][crate::model::QueryWorkRequest::internal_query_string].
    pub fn set_internal_query_string<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.internal_query_string = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_background_accepted][crate::model::QueryWorkRequest::time_background_accepted].
    pub fn set_time_background_accepted<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_background_accepted = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_filter][crate::model::QueryWorkRequest::time_filter].
    pub fn set_time_filter<T: std::convert::Into<crate::model::TimeRange>>(mut self, v: T) -> Self {
        self.time_filter = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [mode][crate::model::QueryWorkRequest::mode].
    pub fn set_mode<T: std::convert::Into<crate::model::JobMode>>(mut self, v: T) -> Self {
        self.mode = std::option::Option::Some(v.into());
        self
    }
}

/// A query work request in a list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryWorkRequestSummary {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_started: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_accepted: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_finished: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_expires: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub percent_complete: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::OperationStatus>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub operation_type: std::option::Option<crate::model::QueryOperationType>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub mode: std::option::Option<crate::model::JobMode>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_query_string: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl QueryWorkRequestSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::QueryWorkRequestSummary::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::QueryWorkRequestSummary::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_started][crate::model::QueryWorkRequestSummary::time_started].
    pub fn set_time_started<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_started = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_accepted][crate::model::QueryWorkRequestSummary::time_accepted].
    pub fn set_time_accepted<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_accepted = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_finished][crate::model::QueryWorkRequestSummary::time_finished].
    pub fn set_time_finished<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_finished = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_expires][crate::model::QueryWorkRequestSummary::time_expires].
    pub fn set_time_expires<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_expires = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [percent_complete][crate::model::QueryWorkRequestSummary::percent_complete].
    pub fn set_percent_complete<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.percent_complete = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::QueryWorkRequestSummary::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::OperationStatus>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [operation_type][crate::model::QueryWorkRequestSummary::operation_type].
    pub fn set_operation_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::QueryOperationType>,
    {
        self.operation_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [mode][crate::model::QueryWorkRequestSummary::mode].
    pub fn set_mode<T: std::convert::Into<crate::model::JobMode>>(mut self, v: T) -> Self {
        self.mode = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_query_string][crate::model::QueryWorkRequestSummary::display_query_string].
    pub fn set_display_query_string<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.display_query_string = std::option::Option::Some(v.into());
        self
    }
}

/// A list of query work requests.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryWorkRequestCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::QueryWorkRequestSummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl QueryWorkRequestCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::QueryWorkRequestCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::QueryWorkRequestSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// When a scheduled task runs.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Schedule {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub misfire_policy: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_of_first_execution: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub expression: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub recurring_interval: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub repeat_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub time_zone: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub query_offset_secs: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Schedule {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [type][crate::model::Schedule::type].
    pub fn set_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [misfire_policy][crate::model::Schedule::misfire_policy].
    pub fn set_misfire_policy<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.misfire_policy = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_of_first_execution][crate::model::Schedule::time_of_first_execution].
    pub fn set_time_of_first_execution<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_of_first_execution = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [expression][crate::model::Schedule::expression].
    pub fn set_expression<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.expression = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [recurring_interval][crate::model::Schedule::recurring_interval].
    pub fn set_recurring_interval<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.recurring_interval = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [repeat_count][crate::model::Schedule::repeat_count].
    pub fn set_repeat_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.repeat_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_zone][crate::model::Schedule::time_zone].
    pub fn set_time_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.time_zone = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [query_offset_secs][crate::model::Schedule::query_offset_secs].
    pub fn set_query_offset_secs<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.query_offset_secs = std::option::Option::Some(v.into());
        self
    }
}

/// What a scheduled task does.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Action {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<crate::model::ActionType>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub query_string: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_type: std::option::Option<crate::model::StorageDataType>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub purge_compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub purge_duration: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id_in_subtree: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub saved_search_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub metric_extraction: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub saved_search_duration: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Action {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [type][crate::model::Action::type].
    pub fn set_type<T: std::convert::Into<crate::model::ActionType>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [query_string][crate::model::Action::query_string].
    pub fn set_query_string<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.query_string = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [data_type][crate::model::Action::data_type].
    pub fn set_data_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::StorageDataType>,
    {
        self.data_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [purge_compartment_id][crate::model::Action::purge_compartment_id].
    pub fn set_purge_compartment_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.purge_compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [purge_duration][crate::model::Action::purge_duration].
    pub fn set_purge_duration<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.purge_duration = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id_in_subtree][crate::model::Action::compartment_id_in_subtree].
    pub fn set_compartment_id_in_subtree<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.compartment_id_in_subtree = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [saved_search_id][crate::model::Action::saved_search_id].
    pub fn set_saved_search_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.saved_search_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [metric_extraction][crate::model::Action::metric_extraction].
    pub fn set_metric_extraction<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.metric_extraction = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [saved_search_duration][crate::model::Action::saved_search_duration].
    pub fn set_saved_search_duration<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.saved_search_duration = std::option::Option::Some(v.into());
        self
    }
}

/// A task that runs on a schedule, such as a saved search or a purge.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ScheduledTask {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<crate::model::ScheduledTaskKind>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub task_type: std::option::Option<crate::model::ScheduledTaskTaskType>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub schedules: std::vec::Vec<crate::model::Schedule>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub action: std::option::Option<crate::model::Action>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub task_status: std::option::Option<crate::model::ScheduledTaskTaskStatus>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub pause_reason: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub work_request_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub num_occurrences: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_of_next_execution: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_state: std::option::Option<crate::model::ConcreteLifecycleState>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ScheduledTask {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::ScheduledTask::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::ScheduledTask::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [kind][crate::model::ScheduledTask::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ScheduledTaskKind>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [task_type][crate::model::ScheduledTask::task_type].
    pub fn set_task_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ScheduledTaskTaskType>,
    {
        self.task_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [schedules][crate::model::ScheduledTask::schedules].
    pub fn set_schedules<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Schedule>,
    {
        self.schedules = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [action][crate::model::ScheduledTask::action].
    pub fn set_action<T: std::convert::Into<crate::model::Action>>(mut self, v: T) -> Self {
        self.action = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [task_status][crate::model::ScheduledTask::task_status].
    pub fn set_task_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ScheduledTaskTaskStatus>,
    {
        self.task_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [pause_reason][crate::model::ScheduledTask::pause_reason].
    pub fn set_pause_reason<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.pause_reason = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [work_request_id][crate::model::ScheduledTask::work_request_id].
    pub fn set_work_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.work_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [num_occurrences][crate::model::ScheduledTask::num_occurrences].
    pub fn set_num_occurrences<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.num_occurrences = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::ScheduledTask::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::ScheduledTask::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::ScheduledTask::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_of_next_execution][crate::model::ScheduledTask::time_of_next_execution].
    pub fn set_time_of_next_execution<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_of_next_execution = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::ScheduledTask::lifecycle_state].
    pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ConcreteLifecycleState>,
    {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::ScheduledTask::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::ScheduledTask::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::ScheduledTask::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// A scheduled task in a list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ScheduledTaskSummary {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub task_type: std::option::Option<crate::model::ScheduledTaskTaskType>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub task_status: std::option::Option<crate::model::ScheduledTaskTaskStatus>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub pause_reason: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub work_request_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_state: std::option::Option<crate::model::ConcreteLifecycleState>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_execution_status: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_last_executed: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub target_service: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ScheduledTaskSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::ScheduledTaskSummary::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::ScheduledTaskSummary::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [task_type][crate::model::ScheduledTaskSummary::task_type].
    pub fn set_task_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ScheduledTaskTaskType>,
    {
        self.task_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [task_status][crate::model::ScheduledTaskSummary::task_status].
    pub fn set_task_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ScheduledTaskTaskStatus>,
    {
        self.task_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [pause_reason][crate::model::ScheduledTaskSummary::pause_reason].
    pub fn set_pause_reason<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.pause_reason = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [work_request_id][crate::model::ScheduledTaskSummary::work_request_id].
    pub fn set_work_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.work_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::ScheduledTaskSummary::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::ScheduledTaskSummary::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::ScheduledTaskSummary::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::ScheduledTaskSummary::lifecycle_state].
    pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ConcreteLifecycleState>,
    {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [last_execution_status][crate::model::ScheduledTaskSummary::last_execution_status].
    pub fn set_last_execution_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.last_execution_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_last_executed][crate::model::ScheduledTaskSummary::time_last_executed].
    pub fn set_time_last_executed<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_last_executed = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [target_service][crate::model::ScheduledTaskSummary::target_service].
    pub fn set_target_service<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.target_service = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::ScheduledTaskSummary::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::ScheduledTaskSummary::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// A list of scheduled tasks.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ScheduledTaskCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::ScheduledTaskSummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ScheduledTaskCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::ScheduledTaskCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ScheduledTaskSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The settings for a new scheduled task.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateScheduledTaskDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<crate::model::ScheduledTaskKind>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub task_type: std::option::Option<crate::model::ScheduledTaskTaskType>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub schedules: std::vec::Vec<crate::model::Schedule>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub action: std::option::Option<crate::model::Action>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub saved_search_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateScheduledTaskDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [kind][crate::model::CreateScheduledTaskDetails::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ScheduledTaskKind>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::CreateScheduledTaskDetails::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::CreateScheduledTaskDetails::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [task_type][crate::model::CreateScheduledTaskDetails::task_type].
    pub fn set_task_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ScheduledTaskTaskType>,
    {
        self.task_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [schedules][crate::model::CreateScheduledTaskDetails::schedules].
    pub fn set_schedules<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Schedule>,
    {
        self.schedules = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [action][crate::model::CreateScheduledTaskDetails::action].
    pub fn set_action<T: std::convert::Into<crate::model::Action>>(mut self, v: T) -> Self {
        self.action = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::CreateScheduledTaskDetails::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [saved_search_id][crate::model::CreateScheduledTaskDetails::saved_search_id].
    pub fn set_saved_search_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.saved_search_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::CreateScheduledTaskDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::CreateScheduledTaskDetails::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// The changes to a scheduled task.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateScheduledTaskDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kind: std::option::Option<crate::model::ScheduledTaskKind>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub schedules: std::vec::Vec<crate::model::Schedule>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateScheduledTaskDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [kind][crate::model::UpdateScheduledTaskDetails::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ScheduledTaskKind>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::UpdateScheduledTaskDetails::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::UpdateScheduledTaskDetails::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [schedules][crate::model::UpdateScheduledTaskDetails::schedules].
    pub fn set_schedules<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Schedule>,
    {
        self.schedules = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [freeform_tags][crate::model::UpdateScheduledTaskDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::UpdateScheduledTaskDetails::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// The compartment to move a scheduled task to.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ChangeScheduledTaskCompartmentDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ChangeScheduledTaskCompartmentDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::ChangeScheduledTaskCompartmentDetails::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }
}

/// A log source, describing how to collect and parse a log.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsSource {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub label_conditions: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub association_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub association_entity: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_filter_definitions: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub database_credential: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub extended_field_definitions:
        std::vec::Vec<crate::model::LogAnalyticsSourceExtendedFieldDefinition>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_for_cloud: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub labels: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub metric_definitions: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub metrics: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub oob_parsers: std::vec::Vec<crate::model::LogAnalyticsParser>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parameters: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub pattern_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub patterns: std::vec::Vec<crate::model::LogAnalyticsSourcePattern>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub edit_version: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub functions: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_id: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_secure_content: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_system: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub parsers: std::vec::Vec<crate::model::LogAnalyticsParser>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_auto_association_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_auto_association_override: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub rule_id: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub type_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub type_display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning_config: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub metadata_fields: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub label_definitions: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_types: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_timezone_override: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub user_parsers: std::vec::Vec<crate::model::LogAnalyticsParser>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_types: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub categories: std::vec::Vec<crate::model::LogAnalyticsCategory>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoints: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_properties: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsSource {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [label_conditions][crate::model::LogAnalyticsSource::label_conditions].
    pub fn set_label_conditions<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.label_conditions = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [association_count][crate::model::LogAnalyticsSource::association_count].
    pub fn set_association_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.association_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [association_entity][crate::model::LogAnalyticsSource::association_entity].
    pub fn set_association_entity<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<serde_json::Value>,
    {
        self.association_entity = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [data_filter_definitions][crate::model::LogAnalyticsSource::data_filter_definitions].
    pub fn set_data_filter_definitions<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<serde_json::Value>,
    {
        self.data_filter_definitions = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [database_credential][crate::model::LogAnalyticsSource::database_credential].
    pub fn set_database_credential<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.database_credential = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [extended_field_definitions][crate::model::LogAnalyticsSource::extended_field_definitions].
    pub fn set_extended_field_definitions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsSourceExtendedFieldDefinition>,
    {
        self.extended_field_definitions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [is_for_cloud][crate::model::LogAnalyticsSource::is_for_cloud].
    pub fn set_is_for_cloud<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_for_cloud = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [labels][crate::model::LogAnalyticsSource::labels].
    pub fn set_labels<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.labels = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [metric_definitions][crate::model::LogAnalyticsSource::metric_definitions].
    pub fn set_metric_definitions<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<serde_json::Value>,
    {
        self.metric_definitions = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [metrics][crate::model::LogAnalyticsSource::metrics].
    pub fn set_metrics<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.metrics = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [oob_parsers][crate::model::LogAnalyticsSource::oob_parsers].
    pub fn set_oob_parsers<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsParser>,
    {
        self.oob_parsers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [parameters][crate::model::LogAnalyticsSource::parameters].
    pub fn set_parameters<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.parameters = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [pattern_count][crate::model::LogAnalyticsSource::pattern_count].
    pub fn set_pattern_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.pattern_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [patterns][crate::model::LogAnalyticsSource::patterns].
    pub fn set_patterns<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsSourcePattern>,
    {
        self.patterns = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [description][crate::model::LogAnalyticsSource::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::LogAnalyticsSource::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [edit_version][crate::model::LogAnalyticsSource::edit_version].
    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [functions][crate::model::LogAnalyticsSource::functions].
    pub fn set_functions<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.functions = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_id][crate::model::LogAnalyticsSource::source_id].
    pub fn set_source_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.source_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [name][crate::model::LogAnalyticsSource::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_secure_content][crate::model::LogAnalyticsSource::is_secure_content].
    pub fn set_is_secure_content<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_secure_content = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_system][crate::model::LogAnalyticsSource::is_system].
    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [parsers][crate::model::LogAnalyticsSource::parsers].
    pub fn set_parsers<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsParser>,
    {
        self.parsers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [is_auto_association_enabled][crate::model::LogAnalyticsSource::is_auto_association_enabled].
    pub fn set_is_auto_association_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_auto_association_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_auto_association_override][crate::model::LogAnalyticsSource::is_auto_association_override].
    pub fn set_is_auto_association_override<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_auto_association_override = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [rule_id][crate::model::LogAnalyticsSource::rule_id].
    pub fn set_rule_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.rule_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [type_name][crate::model::LogAnalyticsSource::type_name].
    pub fn set_type_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.type_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [type_display_name][crate::model::LogAnalyticsSource::type_display_name].
    pub fn set_type_display_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.type_display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [warning_config][crate::model::LogAnalyticsSource::warning_config].
    pub fn set_warning_config<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.warning_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [metadata_fields][crate::model::LogAnalyticsSource::metadata_fields].
    pub fn set_metadata_fields<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.metadata_fields = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [label_definitions][crate::model::LogAnalyticsSource::label_definitions].
    pub fn set_label_definitions<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.label_definitions = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_types][crate::model::LogAnalyticsSource::entity_types].
    pub fn set_entity_types<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.entity_types = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_timezone_override][crate::model::LogAnalyticsSource::is_timezone_override].
    pub fn set_is_timezone_override<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_timezone_override = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [user_parsers][crate::model::LogAnalyticsSource::user_parsers].
    pub fn set_user_parsers<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsParser>,
    {
        self.user_parsers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [time_updated][crate::model::LogAnalyticsSource::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [event_types][crate::model::LogAnalyticsSource::event_types].
    pub fn set_event_types<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.event_types = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [categories][crate::model::LogAnalyticsSource::categories].
    pub fn set_categories<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsCategory>,
    {
        self.categories = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [endpoints][crate::model::LogAnalyticsSource::endpoints].
    pub fn set_endpoints<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.endpoints = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_properties][crate::model::LogAnalyticsSource::source_properties].
    pub fn set_source_properties<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.source_properties = std::option::Option::Some(v.into());
        self
    }
}

/// A log source in a list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsSourceSummary {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub association_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub edit_version: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_id: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_system: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_auto_association_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub type_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub type_display_name: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub pattern_count: std::option::Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsSourceSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [association_count][crate::model::LogAnalyticsSourceSummary::association_count].
    pub fn set_association_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.association_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::LogAnalyticsSourceSummary::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::LogAnalyticsSourceSummary::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [edit_version][crate::model::LogAnalyticsSourceSummary::edit_version].
    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_id][crate::model::LogAnalyticsSourceSummary::source_id].
    pub fn set_source_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.source_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [name][crate::model::LogAnalyticsSourceSummary::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_system][crate::model::LogAnalyticsSourceSummary::is_system].
    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_auto_association_enabled][crate::model::LogAnalyticsSourceSummary::is_auto_association_enabled].
    pub fn set_is_auto_association_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_auto_association_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [type_name][crate::model::LogAnalyticsSourceSummary::type_name].
    pub fn set_type_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.type_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [type_display_name][crate::model::LogAnalyticsSourceSummary::type_display_name].
    pub fn set_type_display_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.type_display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::LogAnalyticsSourceSummary::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [pattern_count][crate::model::LogAnalyticsSourceSummary::pattern_count].
    pub fn set_pattern_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.pattern_count = std::option::Option::Some(v.into());
        self
    }
}

/// A list of log sources.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsSourceCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsSourceSummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsSourceCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsSourceCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsSourceSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A log source to create or update.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpsertLogAnalyticsSourceDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub label_conditions: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_filter_definitions: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub database_credential: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub extended_field_definitions:
        std::vec::Vec<crate::model::LogAnalyticsSourceExtendedFieldDefinition>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_for_cloud: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub labels: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub metric_definitions: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub metrics: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub oob_parsers: std::vec::Vec<crate::model::LogAnalyticsParser>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parameters: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub patterns: std::vec::Vec<crate::model::LogAnalyticsSourcePattern>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub edit_version: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub functions: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_id: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_secure_content: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_system: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub parsers: std::vec::Vec<crate::model::LogAnalyticsParser>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub rule_id: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub type_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning_config: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub metadata_fields: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub label_definitions: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_types: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_timezone_override: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub user_parsers: std::vec::Vec<crate::model::LogAnalyticsParser>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub categories: std::vec::Vec<crate::model::LogAnalyticsCategory>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoints: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_properties: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpsertLogAnalyticsSourceDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [label_conditions][crate::model::UpsertLogAnalyticsSourceDetails::label_conditions].
    pub fn set_label_conditions<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.label_conditions = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [data_filter_definitions][crate::model::UpsertLogAnalyticsSourceDetails::data_filter_definitions].
    pub fn set_data_filter_definitions<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<serde_json::Value>,
    {
        self.data_filter_definitions = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [database_credential][crate::model::UpsertLogAnalyticsSourceDetails::database_credential].
    pub fn set_database_credential<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.database_credential = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [extended_field_definitions][crate::model::UpsertLogAnalyticsSourceDetails::extended_field_definitions].
    pub fn set_extended_field_definitions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsSourceExtendedFieldDefinition>,
    {
        self.extended_field_definitions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [is_for_cloud][crate::model::UpsertLogAnalyticsSourceDetails::is_for_cloud].
    pub fn set_is_for_cloud<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_for_cloud = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [labels][crate::model::UpsertLogAnalyticsSourceDetails::labels].
    pub fn set_labels<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.labels = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [metric_definitions][crate::model::UpsertLogAnalyticsSourceDetails::metric_definitions].
    pub fn set_metric_definitions<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<serde_json::Value>,
    {
        self.metric_definitions = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [metrics][crate::model::UpsertLogAnalyticsSourceDetails::metrics].
    pub fn set_metrics<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.metrics = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [oob_parsers][crate::model::UpsertLogAnalyticsSourceDetails::oob_parsers].
    pub fn set_oob_parsers<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsParser>,
    {
        self.oob_parsers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [parameters][crate::model::UpsertLogAnalyticsSourceDetails::parameters].
    pub fn set_parameters<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.parameters = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [patterns][crate::model::UpsertLogAnalyticsSourceDetails::patterns].
    pub fn set_patterns<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsSourcePattern>,
    {
        self.patterns = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [description][crate::model::UpsertLogAnalyticsSourceDetails::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::UpsertLogAnalyticsSourceDetails::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [edit_version][crate::model::UpsertLogAnalyticsSourceDetails::edit_version].
    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [functions][crate::model::UpsertLogAnalyticsSourceDetails::functions].
    pub fn set_functions<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.functions = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_id][crate::model::UpsertLogAnalyticsSourceDetails::source_id].
    pub fn set_source_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.source_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [name][crate::model::UpsertLogAnalyticsSourceDetails::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_secure_content][crate::model::UpsertLogAnalyticsSourceDetails::is_secure_content].
    pub fn set_is_secure_content<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_secure_content = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_system][crate::model::UpsertLogAnalyticsSourceDetails::is_system].
    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [parsers][crate::model::UpsertLogAnalyticsSourceDetails::parsers].
    pub fn set_parsers<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsParser>,
    {
        self.parsers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [rule_id][crate::model::UpsertLogAnalyticsSourceDetails::rule_id].
    pub fn set_rule_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.rule_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [type_name][crate::model::UpsertLogAnalyticsSourceDetails::type_name].
    pub fn set_type_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.type_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [warning_config][crate::model::UpsertLogAnalyticsSourceDetails::warning_config].
    pub fn set_warning_config<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.warning_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [metadata_fields][crate::model::UpsertLogAnalyticsSourceDetails::metadata_fields].
    pub fn set_metadata_fields<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.metadata_fields = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [label_definitions][crate::model::UpsertLogAnalyticsSourceDetails::label_definitions].
    pub fn set_label_definitions<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.label_definitions = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_types][crate::model::UpsertLogAnalyticsSourceDetails::entity_types].
    pub fn set_entity_types<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.entity_types = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_timezone_override][crate::model::UpsertLogAnalyticsSourceDetails::is_timezone_override].
    pub fn set_is_timezone_override<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_timezone_override = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [user_parsers][crate::model::UpsertLogAnalyticsSourceDetails::user_parsers].
    pub fn set_user_parsers<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsParser>,
    {
        self.user_parsers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [categories][crate::model::UpsertLogAnalyticsSourceDetails::categories].
    pub fn set_categories<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsCategory>,
    {
        self.categories = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [endpoints][crate::model::UpsertLogAnalyticsSourceDetails::endpoints].
    pub fn set_endpoints<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.endpoints = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_properties][crate::model::UpsertLogAnalyticsSourceDetails::source_properties].
    pub fn set_source_properties<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.source_properties = std::option::Option::Some(v.into());
        self
    }
}

/// The result of validating a log source.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SourceValidateResults {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub results: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub validation_errors: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl SourceValidateResults {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [status][crate::model::SourceValidateResults::status].
    pub fn set_status<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [results][crate::model::SourceValidateResults::results].
    pub fn set_results<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.results = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [message][crate::model::SourceValidateResults::message].
    pub fn set_message<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.message = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [validation_errors][crate::model::SourceValidateResults::validation_errors].
    pub fn set_validation_errors<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.validation_errors = std::option::Option::Some(v.into());
        self
    }
}

/// The result of validating an extended field definition.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsSourceExtendedFieldDefinitionValidation {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub extended_field_definitions:
        std::vec::Vec<crate::model::LogAnalyticsSourceExtendedFieldDefinition>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsSourceExtendedFieldDefinitionValidation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [extended_field_definitions][crate::model::LogAnalyticsSourceExtendedFieldDefinitionValidation::extended_field_definitions].
    pub fn set_extended_field_definitions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsSourceExtendedFieldDefinition>,
    {
        self.extended_field_definitions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [status][crate::model::LogAnalyticsSourceExtendedFieldDefinitionValidation::status].
    pub fn set_status<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [message][crate::model::LogAnalyticsSourceExtendedFieldDefinitionValidation::message].
    pub fn set_message<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.message = std::option::Option::Some(v.into());
        self
    }
}

/// The settings to enable auto association.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EnableAutoAssociationDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl EnableAutoAssociationDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::EnableAutoAssociationDetails::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }
}

/// The settings to disable auto association.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DisableAutoAssociationDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DisableAutoAssociationDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::DisableAutoAssociationDetails::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }
}

/// The result of enabling auto association.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EnableAutoAssociationResult {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_reason: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl EnableAutoAssociationResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [status][crate::model::EnableAutoAssociationResult::status].
    pub fn set_status<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [status_reason][crate::model::EnableAutoAssociationResult::status_reason].
    pub fn set_status_reason<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status_reason = std::option::Option::Some(v.into());
        self
    }
}

/// The result of disabling auto association.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DisableAutoAssociationResult {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_reason: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DisableAutoAssociationResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [status][crate::model::DisableAutoAssociationResult::status].
    pub fn set_status<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [status_reason][crate::model::DisableAutoAssociationResult::status_reason].
    pub fn set_status_reason<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status_reason = std::option::Option::Some(v.into());
        self
    }
}

/// An auto association setting of a log source.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AutoAssociation {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_auto_association_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub level: std::option::Option<crate::model::AutoAssociationLevel>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub reference_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub reference_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub reference_type: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl AutoAssociation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [is_auto_association_enabled][crate::model::AutoAssociation::is_auto_association_enabled].
    pub fn set_is_auto_association_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_auto_association_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [level][crate::model::AutoAssociation::level].
    pub fn set_level<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::AutoAssociationLevel>,
    {
        self.level = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [reference_id][crate::model::AutoAssociation::reference_id].
    pub fn set_reference_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.reference_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [reference_name][crate::model::AutoAssociation::reference_name].
    pub fn set_reference_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.reference_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [reference_type][crate::model::AutoAssociation::reference_type].
    pub fn set_reference_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.reference_type = std::option::Option::Some(v.into());
        self
    }
}

/// A list of auto association settings.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AutoAssociationCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::AutoAssociation>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl AutoAssociationCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::AutoAssociationCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::AutoAssociation>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A problem detected while collecting or parsing logs.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsWarning {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub agent_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub host_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub rule_display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_name: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_collected: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning_id: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_of_initial_warning: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_active: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_suppressed: std::option::Option<bool>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_of_latest_warning: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning_level: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning_message: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub pattern_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub pattern_text: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub rule_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub suppressed_by: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_type: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_type_display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub type_display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub type_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub severity: std::option::Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsWarning {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [agent_id][crate::model::LogAnalyticsWarning::agent_id].
    pub fn set_agent_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.agent_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [host_name][crate::model::LogAnalyticsWarning::host_name].
    pub fn set_host_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.host_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [rule_display_name][crate::model::LogAnalyticsWarning::rule_display_name].
    pub fn set_rule_display_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.rule_display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_name][crate::model::LogAnalyticsWarning::source_name].
    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::LogAnalyticsWarning::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_display_name][crate::model::LogAnalyticsWarning::source_display_name].
    pub fn set_source_display_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_name][crate::model::LogAnalyticsWarning::entity_name].
    pub fn set_entity_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_collected][crate::model::LogAnalyticsWarning::time_collected].
    pub fn set_time_collected<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_collected = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [warning_id][crate::model::LogAnalyticsWarning::warning_id].
    pub fn set_warning_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.warning_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_of_initial_warning][crate::model::LogAnalyticsWarning::time_of_initial_warning].
    pub fn set_time_of_initial_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_of_initial_warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_active][crate::model::LogAnalyticsWarning::is_active].
    pub fn set_is_active<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_active = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_suppressed][crate::model::LogAnalyticsWarning::is_suppressed].
    pub fn set_is_suppressed<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_suppressed = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_of_latest_warning][crate::model::LogAnalyticsWarning::time_of_latest_warning].
    pub fn set_time_of_latest_warning<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_of_latest_warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [warning_level][crate::model::LogAnalyticsWarning::warning_level].
    pub fn set_warning_level<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.warning_level = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [warning_message][crate::model::LogAnalyticsWarning::warning_message].
    pub fn set_warning_message<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.warning_message = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [pattern_id][crate::model::LogAnalyticsWarning::pattern_id].
    pub fn set_pattern_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.pattern_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [pattern_text][crate::model::LogAnalyticsWarning::pattern_text].
    pub fn set_pattern_text<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.pattern_text = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [rule_id][crate::model::LogAnalyticsWarning::rule_id].
    pub fn set_rule_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.rule_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_id][crate::model::LogAnalyticsWarning::source_id].
    pub fn set_source_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [suppressed_by][crate::model::LogAnalyticsWarning::suppressed_by].
    pub fn set_suppressed_by<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.suppressed_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_id][crate::model::LogAnalyticsWarning::entity_id].
    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_type][crate::model::LogAnalyticsWarning::entity_type].
    pub fn set_entity_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_type_display_name][crate::model::LogAnalyticsWarning::entity_type_display_name].
    pub fn set_entity_type_display_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.entity_type_display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [type_display_name][crate::model::LogAnalyticsWarning::type_display_name].
    pub fn set_type_display_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.type_display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [type_name][crate::model::LogAnalyticsWarning::type_name].
    pub fn set_type_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.type_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [severity][crate::model::LogAnalyticsWarning::severity].
    pub fn set_severity<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.severity = std::option::Option::Some(v.into());
        self
    }
}

/// A list of warnings.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsWarningCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsWarning>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsWarningCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsWarningCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsWarning>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The warnings to suppress or unsuppress.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WarningReferenceDetails {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub warning_references: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl WarningReferenceDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [warning_references][crate::model::WarningReferenceDetails::warning_references].
    pub fn set_warning_references<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.warning_references = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// When data is moved to archival storage.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ArchivingConfiguration {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub active_storage_duration: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub archival_storage_duration: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ArchivingConfiguration {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [active_storage_duration][crate::model::ArchivingConfiguration::active_storage_duration].
    pub fn set_active_storage_duration<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.active_storage_duration = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [archival_storage_duration][crate::model::ArchivingConfiguration::archival_storage_duration].
    pub fn set_archival_storage_duration<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.archival_storage_duration = std::option::Option::Some(v.into());
        self
    }
}

/// The storage settings of a namespace.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Storage {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_archiving_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub archiving_configuration: std::option::Option<crate::model::ArchivingConfiguration>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Storage {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [is_archiving_enabled][crate::model::Storage::is_archiving_enabled].
    pub fn set_is_archiving_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_archiving_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [archiving_configuration][crate::model::Storage::archiving_configuration].
    pub fn set_archiving_configuration<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ArchivingConfiguration>,
    {
        self.archiving_configuration = std::option::Option::Some(v.into());
        self
    }
}

/// The changes to the storage settings.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateStorageDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub archiving_configuration: std::option::Option<crate::model::ArchivingConfiguration>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateStorageDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [archiving_configuration][crate::model::UpdateStorageDetails::archiving_configuration].
    pub fn set_archiving_configuration<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ArchivingConfiguration>,
    {
        self.archiving_configuration = std::option::Option::Some(v.into());
        self
    }
}

/// The storage used by a namespace.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StorageUsage {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub active_data_size_in_bytes: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub archived_data_size_in_bytes: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub recalled_archived_data_size_in_bytes: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl StorageUsage {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [active_data_size_in_bytes][crate::model::StorageUsage::active_data_size_in_bytes].
    pub fn set_active_data_size_in_bytes<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.active_data_size_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [archived_data_size_in_bytes][crate::model::StorageUsage::archived_data_size_in_bytes].
    pub fn set_archived_data_size_in_bytes<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.archived_data_size_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [recalled_archived_data_size_in_bytes][crate::model::StorageUsage::recalled_archived_data_size_in_bytes].
    pub fn set_recalled_archived_data_size_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.recalled_archived_data_size_in_bytes = std::option::Option::Some(v.into());
        self
    }
}

/// The data to purge.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PurgeStorageDataDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id_in_subtree: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub purge_query_string: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_type: std::option::Option<crate::model::StorageDataType>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl PurgeStorageDataDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::PurgeStorageDataDetails::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_data_ended][crate::model::PurgeStorageDataDetails::time_data_ended].
    pub fn set_time_data_ended<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id_in_subtree][crate::model::PurgeStorageDataDetails::compartment_id_in_subtree].
    pub fn set_compartment_id_in_subtree<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.compartment_id_in_subtree = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [purge_query_string][crate::model::PurgeStorageDataDetails::purge_query_string].
    pub fn set_purge_query_string<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.purge_query_string = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [data_type][crate::model::PurgeStorageDataDetails::data_type].
    pub fn set_data_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::StorageDataType>,
    {
        self.data_type = std::option::Option::Some(v.into());
        self
    }
}

/// The archived data to recall.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RecallArchivedDataDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_data_started: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_type: std::option::Option<crate::model::StorageDataType>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_sets: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub query: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_recall_new_data_only: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_use_recommended_data_set: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub collection_name: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl RecallArchivedDataDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::RecallArchivedDataDetails::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_data_ended][crate::model::RecallArchivedDataDetails::time_data_ended].
    pub fn set_time_data_ended<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_data_started][crate::model::RecallArchivedDataDetails::time_data_started].
    pub fn set_time_data_started<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_started = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [data_type][crate::model::RecallArchivedDataDetails::data_type].
    pub fn set_data_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::StorageDataType>,
    {
        self.data_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_sets][crate::model::RecallArchivedDataDetails::log_sets].
    pub fn set_log_sets<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_sets = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [query][crate::model::RecallArchivedDataDetails::query].
    pub fn set_query<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.query = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_recall_new_data_only][crate::model::RecallArchivedDataDetails::is_recall_new_data_only].
    pub fn set_is_recall_new_data_only<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_recall_new_data_only = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_use_recommended_data_set][crate::model::RecallArchivedDataDetails::is_use_recommended_data_set].
    pub fn set_is_use_recommended_data_set<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_use_recommended_data_set = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [collection_name][crate::model::RecallArchivedDataDetails::collection_name].
    pub fn set_collection_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.collection_name = std::option::Option::Some(v.into());
        self
    }
}

/// The recalled data to release.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ReleaseRecalledDataDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_data_started: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_type: std::option::Option<crate::model::StorageDataType>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_sets: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub query: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub collection_id: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ReleaseRecalledDataDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::ReleaseRecalledDataDetails::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_data_ended][crate::model::ReleaseRecalledDataDetails::time_data_ended].
    pub fn set_time_data_ended<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_data_started][crate::model::ReleaseRecalledDataDetails::time_data_started].
    pub fn set_time_data_started<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_started = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [data_type][crate::model::ReleaseRecalledDataDetails::data_type].
    pub fn set_data_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::StorageDataType>,
    {
        self.data_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_sets][crate::model::ReleaseRecalledDataDetails::log_sets].
    pub fn set_log_sets<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_sets = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [query][crate::model::ReleaseRecalledDataDetails::query].
    pub fn set_query<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.query = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [collection_id][crate::model::ReleaseRecalledDataDetails::collection_id].
    pub fn set_collection_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.collection_id = std::option::Option::Some(v.into());
        self
    }
}

/// The data to estimate a purge for.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EstimatePurgeDataSizeDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id_in_subtree: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub purge_query_string: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_type: std::option::Option<crate::model::StorageDataType>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl EstimatePurgeDataSizeDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::EstimatePurgeDataSizeDetails::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_data_ended][crate::model::EstimatePurgeDataSizeDetails::time_data_ended].
    pub fn set_time_data_ended<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id_in_subtree][crate::model::EstimatePurgeDataSizeDetails::compartment_id_in_subtree].
    pub fn set_compartment_id_in_subtree<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.compartment_id_in_subtree = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [purge_query_string][crate::model::EstimatePurgeDataSizeDetails::purge_query_string].
    pub fn set_purge_query_string<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.purge_query_string = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [data_type][crate::model::EstimatePurgeDataSizeDetails::data_type].
    pub fn set_data_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::StorageDataType>,
    {
        self.data_type = std::option::Option::Some(v.into());
        self
    }
}

/// The estimated size of a purge.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EstimatePurgeDataSizeResult {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub estimated_size: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl EstimatePurgeDataSizeResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [estimated_size][crate::model::EstimatePurgeDataSizeResult::estimated_size].
    pub fn set_estimated_size<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.estimated_size = std::option::Option::Some(v.into());
        self
    }
}

/// The data to estimate a recall for.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EstimateRecallDataSizeDetails {
    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_data_started: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub log_sets: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_recall_new_data_only: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl EstimateRecallDataSizeDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [time_data_started][crate::model::EstimateRecallDataSizeDetails::time_data_started].
    pub fn set_time_data_started<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_started = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_data_ended][crate::model::EstimateRecallDataSizeDetails::time_data_ended].
    pub fn set_time_data_ended<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_sets][crate::model::EstimateRecallDataSizeDetails::log_sets].
    pub fn set_log_sets<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.log_sets = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [is_recall_new_data_only][crate::model::EstimateRecallDataSizeDetails::is_recall_new_data_only].
    pub fn set_is_recall_new_data_only<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_recall_new_data_only = std::option::Option::Some(v.into());
        self
    }
}

/// The estimated size of a recall.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EstimateRecallDataSizeResult {
    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_data_started: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub size_in_bytes: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub estimated_recallable_data_size_in_bytes: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub estimated_recalled_data_size_in_bytes: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_overlapping_with_existing_recalls: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub core_group_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub core_group_count_limit: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub size_limit_in_bytes: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl EstimateRecallDataSizeResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [time_data_started][crate::model::EstimateRecallDataSizeResult::time_data_started].
    pub fn set_time_data_started<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_started = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_data_ended][crate::model::EstimateRecallDataSizeResult::time_data_ended].
    pub fn set_time_data_ended<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [size_in_bytes][crate::model::EstimateRecallDataSizeResult::size_in_bytes].
    pub fn set_size_in_bytes<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.size_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [estimated_recallable_data_size_in_bytes][crate::model::EstimateRecallDataSizeResult::estimated_recallable_data_size_in_bytes].
    pub fn set_estimated_recallable_data_size_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.estimated_recallable_data_size_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [estimated_recalled_data_size_in_bytes][crate::model::EstimateRecallDataSizeResult::estimated_recalled_data_size_in_bytes].
    pub fn set_estimated_recalled_data_size_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.estimated_recalled_data_size_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_overlapping_with_existing_recalls][crate::model::EstimateRecallDataSizeResult::is_overlapping_with_existing_recalls].
    pub fn set_is_overlapping_with_existing_recalls<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_overlapping_with_existing_recalls = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [core_group_count][crate::model::EstimateRecallDataSizeResult::core_group_count].
    pub fn set_core_group_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.core_group_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [core_group_count_limit][crate::model::EstimateRecallDataSizeResult::core_group_count_limit].
    pub fn set_core_group_count_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.core_group_count_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [size_limit_in_bytes][crate::model::EstimateRecallDataSizeResult::size_limit_in_bytes].
    pub fn set_size_limit_in_bytes<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.size_limit_in_bytes = std::option::Option::Some(v.into());
        self
    }
}

/// The data to estimate a release for.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EstimateReleaseDataSizeDetails {
    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_data_started: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl EstimateReleaseDataSizeDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [time_data_started][crate::model::EstimateReleaseDataSizeDetails::time_data_started].
    pub fn set_time_data_started<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_started = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_data_ended][crate::model::EstimateReleaseDataSizeDetails::time_data_ended].
    pub fn set_time_data_ended<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }
}

/// The estimated size of a release.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EstimateReleaseDataSizeResult {
    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_data_started: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub size_in_bytes: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub has_recalled_data_in_range: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl EstimateReleaseDataSizeResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [time_data_started][crate::model::EstimateReleaseDataSizeResult::time_data_started].
    pub fn set_time_data_started<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_started = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_data_ended][crate::model::EstimateReleaseDataSizeResult::time_data_ended].
    pub fn set_time_data_ended<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [size_in_bytes][crate::model::EstimateReleaseDataSizeResult::size_in_bytes].
    pub fn set_size_in_bytes<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.size_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [has_recalled_data_in_range][crate::model::EstimateReleaseDataSizeResult::has_recalled_data_in_range].
    pub fn set_has_recalled_data_in_range<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.has_recalled_data_in_range = std::option::Option::Some(v.into());
        self
    }
}

/// A work request for a storage operation.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StorageWorkRequest {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub operation_type: std::option::Option<crate::model::StorageOperationType>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::OperationStatus>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_accepted: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_started: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_finished: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_expires: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub percent_complete: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_type: std::option::Option<crate::model::StorageDataType>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_details: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub policy_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub policy_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub storage_usage_in_bytes: std::option::Option<i64>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_data_started: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub purge_query_string: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_sets: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub query: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub recall_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub collection_id: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl StorageWorkRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::StorageWorkRequest::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [operation_type][crate::model::StorageWorkRequest::operation_type].
    pub fn set_operation_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::StorageOperationType>,
    {
        self.operation_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::StorageWorkRequest::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::OperationStatus>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::StorageWorkRequest::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_accepted][crate::model::StorageWorkRequest::time_accepted].
    pub fn set_time_accepted<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_accepted = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_started][crate::model::StorageWorkRequest::time_started].
    pub fn set_time_started<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_started = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_finished][crate::model::StorageWorkRequest::time_finished].
    pub fn set_time_finished<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_finished = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_expires][crate::model::StorageWorkRequest::time_expires].
    pub fn set_time_expires<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_expires = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [percent_complete][crate::model::StorageWorkRequest::percent_complete].
    pub fn set_percent_complete<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.percent_complete = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [data_type][crate::model::StorageWorkRequest::data_type].
    pub fn set_data_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::StorageDataType>,
    {
        self.data_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [status_details][crate::model::StorageWorkRequest::status_details].
    pub fn set_status_details<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [policy_name][crate::model::StorageWorkRequest::policy_name].
    pub fn set_policy_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [policy_id][crate::model::StorageWorkRequest::policy_id].
    pub fn set_policy_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [storage_usage_in_bytes][crate::model::StorageWorkRequest::storage_usage_in_bytes].
    pub fn set_storage_usage_in_bytes<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.storage_usage_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_data_started][crate::model::StorageWorkRequest::time_data_started].
    pub fn set_time_data_started<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_started = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_data_ended][crate::model::StorageWorkRequest::time_data_ended].
    pub fn set_time_data_ended<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [purge_query_string][crate::model::StorageWorkRequest::purge_query_string].
    pub fn set_purge_query_string<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.purge_query_string = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_sets][crate::model::StorageWorkRequest::log_sets].
    pub fn set_log_sets<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_sets = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [query][crate::model::StorageWorkRequest::query].
    pub fn set_query<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.query = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [recall_count][crate::model::StorageWorkRequest::recall_count].
    pub fn set_recall_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.recall_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [collection_id][crate::model::StorageWorkRequest::collection_id].
    pub fn set_collection_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.collection_id = std::option::Option::Some(v.into());
        self
    }
}

/// A storage work request in a list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StorageWorkRequestSummary {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub operation_type: std::option::Option<crate::model::StorageOperationType>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::OperationStatus>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_accepted: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_started: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_finished: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_expires: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub percent_complete: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_type: std::option::Option<crate::model::StorageDataType>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_details: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub policy_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub policy_id: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl StorageWorkRequestSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::StorageWorkRequestSummary::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [operation_type][crate::model::StorageWorkRequestSummary::operation_type].
    pub fn set_operation_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::StorageOperationType>,
    {
        self.operation_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::StorageWorkRequestSummary::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::OperationStatus>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::StorageWorkRequestSummary::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_accepted][crate::model::StorageWorkRequestSummary::time_accepted].
    pub fn set_time_accepted<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_accepted = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_started][crate::model::StorageWorkRequestSummary::time_started].
    pub fn set_time_started<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_started = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_finished][crate::model::StorageWorkRequestSummary::time_finished].
    pub fn set_time_finished<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_finished = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_expires][crate::model::StorageWorkRequestSummary::time_expires].
    pub fn set_time_expires<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_expires = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [percent_complete][crate::model::StorageWorkRequestSummary::percent_complete].
    pub fn set_percent_complete<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.percent_complete = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [data_type][crate::model::StorageWorkRequestSummary::data_type].
    pub fn set_data_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::StorageDataType>,
    {
        self.data_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [status_details][crate::model::StorageWorkRequestSummary::status_details].
    pub fn set_status_details<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [policy_name][crate::model::StorageWorkRequestSummary::policy_name].
    pub fn set_policy_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [policy_id][crate::model::StorageWorkRequestSummary::policy_id].
    pub fn set_policy_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_id = std::option::Option::Some(v.into());
        self
    }
}

/// A list of storage work requests.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StorageWorkRequestCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::StorageWorkRequestSummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl StorageWorkRequestCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::StorageWorkRequestCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::StorageWorkRequestSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// An error reported by a work request.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkRequestError {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub code: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub timestamp: std::option::Option<time::OffsetDateTime>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl WorkRequestError {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [code][crate::model::WorkRequestError::code].
    pub fn set_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.code = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [message][crate::model::WorkRequestError::message].
    pub fn set_message<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.message = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [timestamp][crate::model::WorkRequestError::timestamp].
    pub fn set_timestamp<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.timestamp = std::option::Option::Some(v.into());
        self
    }
}

/// A list of work request errors.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkRequestErrorCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::WorkRequestError>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl WorkRequestErrorCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::WorkRequestErrorCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::WorkRequestError>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The number of recalls in a namespace.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RecallCount {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub recall_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub recall_succeeded: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub recall_failed: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub recall_pending: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub recall_limit: std::option::Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl RecallCount {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [recall_count][crate::model::RecallCount::recall_count].
    pub fn set_recall_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.recall_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [recall_succeeded][crate::model::RecallCount::recall_succeeded].
    pub fn set_recall_succeeded<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.recall_succeeded = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [recall_failed][crate::model::RecallCount::recall_failed].
    pub fn set_recall_failed<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.recall_failed = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [recall_pending][crate::model::RecallCount::recall_pending].
    pub fn set_recall_pending<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.recall_pending = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [recall_limit][crate::model::RecallCount::recall_limit].
    pub fn set_recall_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.recall_limit = std::option::Option::Some(v.into());
        self
    }
}

/// The size of the recalled data in a time range.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RecalledDataSize {
    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_data_started: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub recalled_data_in_bytes: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub not_recalled_data_in_bytes: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl RecalledDataSize {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [time_data_started][crate::model::RecalledDataSize::time_data_started].
    pub fn set_time_data_started<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_started = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_data_ended][crate::model::RecalledDataSize::time_data_ended].
    pub fn set_time_data_ended<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [recalled_data_in_bytes][crate::model::RecalledDataSize::recalled_data_in_bytes].
    pub fn set_recalled_data_in_bytes<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.recalled_data_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [not_recalled_data_in_bytes][crate::model::RecalledDataSize::not_recalled_data_in_bytes].
    pub fn set_not_recalled_data_in_bytes<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.not_recalled_data_in_bytes = std::option::Option::Some(v.into());
        self
    }
}

/// A range of recalled data.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RecalledData {
    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_data_started: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_started: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::RecalledDataStatus>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub recall_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub storage_usage_in_bytes: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub not_recalled_data_in_bytes: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub purpose: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub query_string: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_sets: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub created_by: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub collection_id: std::option::Option<i64>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_recalled_data_started: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_recalled_data_ended: std::option::Option<time::OffsetDateTime>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl RecalledData {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [time_data_ended][crate::model::RecalledData::time_data_ended].
    pub fn set_time_data_ended<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_data_started][crate::model::RecalledData::time_data_started].
    pub fn set_time_data_started<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_started = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_started][crate::model::RecalledData::time_started].
    pub fn set_time_started<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_started = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::RecalledData::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::RecalledDataStatus>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [recall_count][crate::model::RecalledData::recall_count].
    pub fn set_recall_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.recall_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [storage_usage_in_bytes][crate::model::RecalledData::storage_usage_in_bytes].
    pub fn set_storage_usage_in_bytes<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.storage_usage_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [not_recalled_data_in_bytes][crate::model::RecalledData::not_recalled_data_in_bytes].
    pub fn set_not_recalled_data_in_bytes<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.not_recalled_data_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [purpose][crate::model::RecalledData::purpose].
    pub fn set_purpose<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.purpose = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [query_string][crate::model::RecalledData::query_string].
    pub fn set_query_string<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.query_string = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_sets][crate::model::RecalledData::log_sets].
    pub fn set_log_sets<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_sets = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [created_by][crate::model::RecalledData::created_by].
    pub fn set_created_by<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.created_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [collection_id][crate::model::RecalledData::collection_id].
    pub fn set_collection_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.collection_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_recalled_data_started][crate::model::RecalledData::time_recalled_data_started].
    pub fn set_time_recalled_data_started<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_recalled_data_started = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_recalled_data_ended][crate::model::RecalledData::time_recalled_data_ended].
    pub fn set_time_recalled_data_ended<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_recalled_data_ended = std::option::Option::Some(v.into());
        self
    }
}

/// A list of recalled data ranges.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RecalledDataCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::RecalledData>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl RecalledDataCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::RecalledDataCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::RecalledData>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A recall overlapping with a time range.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OverlappingRecallSummary {
    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_data_started: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_started: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::RecalledDataStatus>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub purpose: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub query_string: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_sets: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub created_by: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub collection_id: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl OverlappingRecallSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [time_data_started][crate::model::OverlappingRecallSummary::time_data_started].
    pub fn set_time_data_started<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_started = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_data_ended][crate::model::OverlappingRecallSummary::time_data_ended].
    pub fn set_time_data_ended<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_started][crate::model::OverlappingRecallSummary::time_started].
    pub fn set_time_started<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_started = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::OverlappingRecallSummary::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::RecalledDataStatus>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [purpose][crate::model::OverlappingRecallSummary::purpose].
    pub fn set_purpose<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.purpose = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [query_string][crate::model::OverlappingRecallSummary::query_string].
    pub fn set_query_string<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.query_string = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_sets][crate::model::OverlappingRecallSummary::log_sets].
    pub fn set_log_sets<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_sets = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [created_by][crate::model::OverlappingRecallSummary::created_by].
    pub fn set_created_by<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.created_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [collection_id][crate::model::OverlappingRecallSummary::collection_id].
    pub fn set_collection_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.collection_id = std::option::Option::Some(v.into());
        self
    }
}

/// A list of overlapping recalls.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OverlappingRecallCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::OverlappingRecallSummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl OverlappingRecallCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::OverlappingRecallCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::OverlappingRecallSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The bucket storing data that could not be processed.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UnprocessedDataBucket {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub namespace: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub bucket: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_enabled: std::option::Option<bool>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UnprocessedDataBucket {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace][crate::model::UnprocessedDataBucket::namespace].
    pub fn set_namespace<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [bucket][crate::model::UnprocessedDataBucket::bucket].
    pub fn set_bucket<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.bucket = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_enabled][crate::model::UnprocessedDataBucket::is_enabled].
    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::UnprocessedDataBucket::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::UnprocessedDataBucket::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }
}

/// A list of log sets.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogSetCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogSet>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogSetCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogSetCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogSet>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A log set.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogSet {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogSet {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::LogSet::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }
}

/// The number of log sets in a namespace.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogSetsCount {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_sets_count: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogSetsCount {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [log_sets_count][crate::model::LogSetsCount::log_sets_count].
    pub fn set_log_sets_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.log_sets_count = std::option::Option::Some(v.into());
        self
    }
}

/// A batch of files uploaded on demand.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Upload {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub reference: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_earliest_log_entry: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_latest_log_entry: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warnings_count: std::option::Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Upload {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [reference][crate::model::Upload::reference].
    pub fn set_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.reference = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [name][crate::model::Upload::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::Upload::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::Upload::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_earliest_log_entry][crate::model::Upload::time_earliest_log_entry].
    pub fn set_time_earliest_log_entry<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_earliest_log_entry = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_latest_log_entry][crate::model::Upload::time_latest_log_entry].
    pub fn set_time_latest_log_entry<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_latest_log_entry = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [warnings_count][crate::model::Upload::warnings_count].
    pub fn set_warnings_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.warnings_count = std::option::Option::Some(v.into());
        self
    }
}

/// An upload in a list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UploadSummary {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub reference: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_earliest_log_entry: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_latest_log_entry: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warnings_count: std::option::Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UploadSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [reference][crate::model::UploadSummary::reference].
    pub fn set_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.reference = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [name][crate::model::UploadSummary::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::UploadSummary::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::UploadSummary::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_earliest_log_entry][crate::model::UploadSummary::time_earliest_log_entry].
    pub fn set_time_earliest_log_entry<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_earliest_log_entry = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_latest_log_entry][crate::model::UploadSummary::time_latest_log_entry].
    pub fn set_time_latest_log_entry<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_latest_log_entry = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [warnings_count][crate::model::UploadSummary::warnings_count].
    pub fn set_warnings_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.warnings_count = std::option::Option::Some(v.into());
        self
    }
}

/// A list of uploads.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UploadCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::UploadSummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UploadCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::UploadCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::UploadSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A file in an upload.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UploadFileSummary {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub reference: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_started: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub total_chunks: std::option::Option<f64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub chunks_consumed: std::option::Option<f64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub chunks_success: std::option::Option<f64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub chunks_fail: std::option::Option<f64>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_type: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_namespace: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_group_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub log_group_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::UploadFileStatus>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failure_details: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UploadFileSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [reference][crate::model::UploadFileSummary::reference].
    pub fn set_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.reference = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [name][crate::model::UploadFileSummary::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_started][crate::model::UploadFileSummary::time_started].
    pub fn set_time_started<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_started = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [total_chunks][crate::model::UploadFileSummary::total_chunks].
    pub fn set_total_chunks<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.total_chunks = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [chunks_consumed][crate::model::UploadFileSummary::chunks_consumed].
    pub fn set_chunks_consumed<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.chunks_consumed = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [chunks_success][crate::model::UploadFileSummary::chunks_success].
    pub fn set_chunks_success<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.chunks_success = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [chunks_fail][crate::model::UploadFileSummary::chunks_fail].
    pub fn set_chunks_fail<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.chunks_fail = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::UploadFileSummary::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [source_name][crate::model::UploadFileSummary::source_name].
    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_type][crate::model::UploadFileSummary::entity_type].
    pub fn set_entity_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [entity_name][crate::model::UploadFileSummary::entity_name].
    pub fn set_entity_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_namespace][crate::model::UploadFileSummary::log_namespace].
    pub fn set_log_namespace<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_namespace = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_group_id][crate::model::UploadFileSummary::log_group_id].
    pub fn set_log_group_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [log_group_name][crate::model::UploadFileSummary::log_group_name].
    pub fn set_log_group_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_group_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::UploadFileSummary::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::UploadFileStatus>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [failure_details][crate::model::UploadFileSummary::failure_details].
    pub fn set_failure_details<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.failure_details = std::option::Option::Some(v.into());
        self
    }
}

/// A list of uploaded files.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UploadFileCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::UploadFileSummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UploadFileCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::UploadFileCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::UploadFileSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A warning about an upload.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UploadWarningSummary {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub reference: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_details: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warning_message: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UploadWarningSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [reference][crate::model::UploadWarningSummary::reference].
    pub fn set_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.reference = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [status_details][crate::model::UploadWarningSummary::status_details].
    pub fn set_status_details<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::UploadWarningSummary::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [warning_message][crate::model::UploadWarningSummary::warning_message].
    pub fn set_warning_message<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.warning_message = std::option::Option::Some(v.into());
        self
    }
}

/// A list of upload warnings.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UploadWarningCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::UploadWarningSummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UploadWarningCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::UploadWarningCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::UploadWarningSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A template for dashboards and saved searches.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsTemplate {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_system: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<crate::model::TemplateType>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub facets: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub content_format: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub content: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parameters: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parameters_format: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parameters_metadata: std::option::Option<std::string::String>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_state: std::option::Option<crate::model::ConcreteLifecycleState>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsTemplate {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::LogAnalyticsTemplate::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [name][crate::model::LogAnalyticsTemplate::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::LogAnalyticsTemplate::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_system][crate::model::LogAnalyticsTemplate::is_system].
    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::LogAnalyticsTemplate::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [type][crate::model::LogAnalyticsTemplate::type].
    pub fn set_type<T: std::convert::Into<crate::model::TemplateType>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [facets][crate::model::LogAnalyticsTemplate::facets].
    pub fn set_facets<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.facets = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [content_format][crate::model::LogAnalyticsTemplate::content_format].
    pub fn set_content_format<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content_format = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [content][crate::model::LogAnalyticsTemplate::content].
    pub fn set_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [parameters][crate::model::LogAnalyticsTemplate::parameters].
    pub fn set_parameters<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.parameters = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [parameters_format][crate::model::LogAnalyticsTemplate::parameters_format].
    pub fn set_parameters_format<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.parameters_format = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [parameters_metadata][crate::model::LogAnalyticsTemplate::parameters_metadata].
    pub fn set_parameters_metadata<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.parameters_metadata = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::LogAnalyticsTemplate::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::LogAnalyticsTemplate::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::LogAnalyticsTemplate::lifecycle_state].
    pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ConcreteLifecycleState>,
    {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::LogAnalyticsTemplate::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::LogAnalyticsTemplate::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// A template in a list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsTemplateSummary {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_system: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<crate::model::TemplateType>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(
        skip_serializing_if = "std::option::Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_state: std::option::Option<crate::model::ConcreteLifecycleState>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub defined_tags: std::option::Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsTemplateSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::LogAnalyticsTemplateSummary::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [name][crate::model::LogAnalyticsTemplateSummary::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::LogAnalyticsTemplateSummary::compartment_id].
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [is_system][crate::model::LogAnalyticsTemplateSummary::is_system].
    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::LogAnalyticsTemplateSummary::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [type][crate::model::LogAnalyticsTemplateSummary::type].
    pub fn set_type<T: std::convert::Into<crate::model::TemplateType>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_created][crate::model::LogAnalyticsTemplateSummary::time_created].
    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [time_updated][crate::model::LogAnalyticsTemplateSummary::time_updated].
    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::LogAnalyticsTemplateSummary::lifecycle_state].
    pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ConcreteLifecycleState>,
    {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][crate::model::LogAnalyticsTemplateSummary::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [defined_tags][crate::model::LogAnalyticsTemplateSummary::defined_tags].
    pub fn set_defined_tags<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.defined_tags = std::option::Option::Some(v.into());
        self
    }
}

/// A list of templates.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsTemplateCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<crate::model::LogAnalyticsTemplateSummary>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogAnalyticsTemplateCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][crate::model::LogAnalyticsTemplateCollection::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogAnalyticsTemplateSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request message for [LogAnalytics::list_namespaces][crate::client::LogAnalytics::list_namespaces].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListNamespacesRequest {
    /// The OCID of the compartment.
    pub compartment_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListNamespacesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][crate::model::ListNamespacesRequest::compartment_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListNamespacesRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListNamespacesRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_namespace][crate::client::LogAnalytics::get_namespace].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetNamespaceRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetNamespaceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetNamespaceRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetNamespaceRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetNamespaceRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::onboard_namespace][crate::client::LogAnalytics::onboard_namespace].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct OnboardNamespaceRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// Optional settings to onboard a namespace.
    pub onboard_namespace_details: std::option::Option<crate::model::OnboardNamespaceDetails>,
}

impl OnboardNamespaceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::OnboardNamespaceRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::OnboardNamespaceRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::OnboardNamespaceRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::OnboardNamespaceRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::OnboardNamespaceRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [onboard_namespace_details][crate::model::OnboardNamespaceRequest::onboard_namespace_details].
    pub fn set_onboard_namespace_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::OnboardNamespaceDetails>,
    {
        self.onboard_namespace_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [onboard_namespace_details][crate::model::OnboardNamespaceRequest::onboard_namespace_details].
    pub fn set_or_clear_onboard_namespace_details<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::OnboardNamespaceDetails>,
    {
        self.onboard_namespace_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::offboard_namespace][crate::client::LogAnalytics::offboard_namespace].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct OffboardNamespaceRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,
}

impl OffboardNamespaceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::OffboardNamespaceRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::OffboardNamespaceRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::OffboardNamespaceRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::OffboardNamespaceRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::OffboardNamespaceRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_entity_source_associations][crate::client::LogAnalytics::list_entity_source_associations].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListEntitySourceAssociationsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment.
    pub compartment_id: std::string::String,

    /// The OCID of the entity.
    pub entity_id: std::string::String,

    /// Filters by entity type.
    pub entity_type: std::option::Option<std::string::String>,

    pub entity_type_display_name: std::option::Option<std::string::String>,

    pub life_cycle_state: std::option::Option<crate::model::AssociationStatus>,

    /// Include the total number of items in the `opc-total-items` response header.
    pub is_show_total: std::option::Option<bool>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_entity_source_associations_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListEntitySourceAssociationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListEntitySourceAssociationsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [compartment_id][crate::model::ListEntitySourceAssociationsRequest::compartment_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [entity_id][crate::model::ListEntitySourceAssociationsRequest::entity_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = v.into();
        self
    }

    /// Sets the value of [entity_type][crate::model::ListEntitySourceAssociationsRequest::entity_type].
    pub fn set_entity_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [entity_type][crate::model::ListEntitySourceAssociationsRequest::entity_type].
    pub fn set_or_clear_entity_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.entity_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [entity_type_display_name][crate::model::ListEntitySourceAssociationsRequest::entity_type_display_name].
    pub fn set_entity_type_display_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.entity_type_display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [entity_type_display_name][crate::model::ListEntitySourceAssociationsRequest::entity_type_display_name].
    pub fn set_or_clear_entity_type_display_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.entity_type_display_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [life_cycle_state][crate::model::ListEntitySourceAssociationsRequest::life_cycle_state].
    pub fn set_life_cycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::AssociationStatus>,
    {
        self.life_cycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [life_cycle_state][crate::model::ListEntitySourceAssociationsRequest::life_cycle_state].
    pub fn set_or_clear_life_cycle_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::AssociationStatus>,
    {
        self.life_cycle_state = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_show_total][crate::model::ListEntitySourceAssociationsRequest::is_show_total].
    pub fn set_is_show_total<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_show_total = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_show_total][crate::model::ListEntitySourceAssociationsRequest::is_show_total].
    pub fn set_or_clear_is_show_total<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_show_total = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListEntitySourceAssociationsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListEntitySourceAssociationsRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListEntitySourceAssociationsRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_entity_source_associations_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListEntitySourceAssociationsRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_entity_source_associations_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListEntitySourceAssociationsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListEntitySourceAssociationsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListEntitySourceAssociationsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListEntitySourceAssociationsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListEntitySourceAssociationsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListEntitySourceAssociationsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListEntitySourceAssociationsRequest].
pub mod list_entity_source_associations_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        EntityName,
        TimeLastAttempted,
        SourceName,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::EntityName => "entityName",
                Self::TimeLastAttempted => "timeLastAttempted",
                Self::SourceName => "sourceName",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "entityName" => Self::EntityName,
                "timeLastAttempted" => Self::TimeLastAttempted,
                "sourceName" => Self::SourceName,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] =
            &["entityName", "timeLastAttempted", "sourceName"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::list_source_associations][crate::client::LogAnalytics::list_source_associations].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListSourceAssociationsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the source.
    pub source_name: std::string::String,

    /// The OCID of the compartment.
    pub compartment_id: std::string::String,

    /// The OCID of the entity.
    pub entity_id: std::option::Option<std::string::String>,

    pub life_cycle_state: std::option::Option<crate::model::AssociationStatus>,

    /// Include the total number of items in the `opc-total-items` response header.
    pub is_show_total: std::option::Option<bool>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_source_associations_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListSourceAssociationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListSourceAssociationsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [source_name][crate::model::ListSourceAssociationsRequest::source_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = v.into();
        self
    }

    /// Sets the value of [compartment_id][crate::model::ListSourceAssociationsRequest::compartment_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [entity_id][crate::model::ListSourceAssociationsRequest::entity_id].
    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [entity_id][crate::model::ListSourceAssociationsRequest::entity_id].
    pub fn set_or_clear_entity_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.entity_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [life_cycle_state][crate::model::ListSourceAssociationsRequest::life_cycle_state].
    pub fn set_life_cycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::AssociationStatus>,
    {
        self.life_cycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [life_cycle_state][crate::model::ListSourceAssociationsRequest::life_cycle_state].
    pub fn set_or_clear_life_cycle_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::AssociationStatus>,
    {
        self.life_cycle_state = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_show_total][crate::model::ListSourceAssociationsRequest::is_show_total].
    pub fn set_is_show_total<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_show_total = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_show_total][crate::model::ListSourceAssociationsRequest::is_show_total].
    pub fn set_or_clear_is_show_total<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_show_total = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListSourceAssociationsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListSourceAssociationsRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListSourceAssociationsRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_source_associations_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListSourceAssociationsRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_source_associations_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListSourceAssociationsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListSourceAssociationsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListSourceAssociationsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListSourceAssociationsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListSourceAssociationsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListSourceAssociationsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListSourceAssociationsRequest].
pub mod list_source_associations_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        EntityName,
        TimeLastAttempted,
        Status,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::EntityName => "entityName",
                Self::TimeLastAttempted => "timeLastAttempted",
                Self::Status => "status",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "entityName" => Self::EntityName,
                "timeLastAttempted" => Self::TimeLastAttempted,
                "status" => Self::Status,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] =
            &["entityName", "timeLastAttempted", "status"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::get_association_summary][crate::client::LogAnalytics::get_association_summary].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetAssociationSummaryRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment.
    pub compartment_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetAssociationSummaryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetAssociationSummaryRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [compartment_id][crate::model::GetAssociationSummaryRequest::compartment_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetAssociationSummaryRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetAssociationSummaryRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::upsert_associations][crate::client::LogAnalytics::upsert_associations].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpsertAssociationsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub is_from_republish: std::option::Option<bool>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// A batch of associations to create or update.
    pub upsert_log_analytics_association_details:
        std::option::Option<crate::model::UpsertLogAnalyticsAssociationDetails>,
}

impl UpsertAssociationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::UpsertAssociationsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [is_from_republish][crate::model::UpsertAssociationsRequest::is_from_republish].
    pub fn set_is_from_republish<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_from_republish = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_from_republish][crate::model::UpsertAssociationsRequest::is_from_republish].
    pub fn set_or_clear_is_from_republish<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_from_republish = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::UpsertAssociationsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::UpsertAssociationsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::UpsertAssociationsRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::UpsertAssociationsRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [upsert_log_analytics_association_details][crate::model::UpsertAssociationsRequest::upsert_log_analytics_association_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_upsert_log_analytics_association_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::UpsertLogAnalyticsAssociationDetails>,
    {
        self.upsert_log_analytics_association_details = std::option::Option::Some(v.into());
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
        self.upsert_log_analytics_association_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_associations][crate::client::LogAnalytics::delete_associations].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteAssociationsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// A batch of associations to delete.
    pub delete_log_analytics_association_details:
        std::option::Option<crate::model::DeleteLogAnalyticsAssociationDetails>,
}

impl DeleteAssociationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::DeleteAssociationsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::DeleteAssociationsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::DeleteAssociationsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::DeleteAssociationsRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::DeleteAssociationsRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [delete_log_analytics_association_details][crate::model::DeleteAssociationsRequest::delete_log_analytics_association_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_delete_log_analytics_association_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DeleteLogAnalyticsAssociationDetails>,
    {
        self.delete_log_analytics_association_details = std::option::Option::Some(v.into());
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
        self.delete_log_analytics_association_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::validate_association_parameters][crate::client::LogAnalytics::validate_association_parameters].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ValidateAssociationParametersRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::validate_association_parameters_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// A batch of associations to create or update.
    pub upsert_log_analytics_association_details:
        std::option::Option<crate::model::UpsertLogAnalyticsAssociationDetails>,
}

impl ValidateAssociationParametersRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ValidateAssociationParametersRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [sort_order][crate::model::ValidateAssociationParametersRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ValidateAssociationParametersRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ValidateAssociationParametersRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::validate_association_parameters_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ValidateAssociationParametersRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::validate_association_parameters_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ValidateAssociationParametersRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ValidateAssociationParametersRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ValidateAssociationParametersRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ValidateAssociationParametersRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ValidateAssociationParametersRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ValidateAssociationParametersRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::ValidateAssociationParametersRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::ValidateAssociationParametersRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [upsert_log_analytics_association_details][crate::model::ValidateAssociationParametersRequest::upsert_log_analytics_association_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_upsert_log_analytics_association_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::UpsertLogAnalyticsAssociationDetails>,
    {
        self.upsert_log_analytics_association_details = std::option::Option::Some(v.into());
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
        self.upsert_log_analytics_association_details = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ValidateAssociationParametersRequest].
pub mod validate_association_parameters_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        SourceDisplayName,
        Status,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::SourceDisplayName => "sourceDisplayName",
                Self::Status => "status",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "sourceDisplayName" => Self::SourceDisplayName,
                "status" => Self::Status,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["sourceDisplayName", "status"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::list_categories][crate::client::LogAnalytics::list_categories].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListCategoriesRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub category_display_text: std::option::Option<std::string::String>,

    pub category_type: std::option::Option<std::string::String>,

    /// Filters by exact name.
    pub name: std::option::Option<std::string::String>,

    /// Filters by origin, built-in or custom.
    pub is_system: std::option::Option<bool>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_categories_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListCategoriesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListCategoriesRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [category_display_text][crate::model::ListCategoriesRequest::category_display_text].
    pub fn set_category_display_text<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.category_display_text = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [category_display_text][crate::model::ListCategoriesRequest::category_display_text].
    pub fn set_or_clear_category_display_text<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.category_display_text = v.map(|x| x.into());
        self
    }

    /// Sets the value of [category_type][crate::model::ListCategoriesRequest::category_type].
    pub fn set_category_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.category_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [category_type][crate::model::ListCategoriesRequest::category_type].
    pub fn set_or_clear_category_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.category_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::ListCategoriesRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::ListCategoriesRequest::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_system][crate::model::ListCategoriesRequest::is_system].
    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_system][crate::model::ListCategoriesRequest::is_system].
    pub fn set_or_clear_is_system<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_system = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListCategoriesRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListCategoriesRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListCategoriesRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_categories_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListCategoriesRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_categories_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListCategoriesRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListCategoriesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListCategoriesRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListCategoriesRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListCategoriesRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListCategoriesRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListCategoriesRequest].
pub mod list_categories_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        Name,
        Description,
        Type,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::Name => "name",
                Self::Description => "description",
                Self::Type => "type",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "name" => Self::Name,
                "description" => Self::Description,
                "type" => Self::Type,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["name", "description", "type"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::get_category][crate::client::LogAnalytics::get_category].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetCategoryRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the category.
    pub category_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetCategoryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetCategoryRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [category_name][crate::model::GetCategoryRequest::category_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_category_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.category_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetCategoryRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetCategoryRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_category][crate::client::LogAnalytics::delete_category].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteCategoryRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the category.
    pub category_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl DeleteCategoryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::DeleteCategoryRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [category_name][crate::model::DeleteCategoryRequest::category_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_category_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.category_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::DeleteCategoryRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::DeleteCategoryRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_resource_categories][crate::client::LogAnalytics::list_resource_categories].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListResourceCategoriesRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub categories: std::option::Option<std::string::String>,

    pub resource_types: std::option::Option<std::string::String>,

    pub resource_ids: std::option::Option<std::string::String>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_resource_categories_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListResourceCategoriesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListResourceCategoriesRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [categories][crate::model::ListResourceCategoriesRequest::categories].
    pub fn set_categories<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.categories = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [categories][crate::model::ListResourceCategoriesRequest::categories].
    pub fn set_or_clear_categories<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.categories = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_types][crate::model::ListResourceCategoriesRequest::resource_types].
    pub fn set_resource_types<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_types = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_types][crate::model::ListResourceCategoriesRequest::resource_types].
    pub fn set_or_clear_resource_types<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_types = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_ids][crate::model::ListResourceCategoriesRequest::resource_ids].
    pub fn set_resource_ids<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_ids = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_ids][crate::model::ListResourceCategoriesRequest::resource_ids].
    pub fn set_or_clear_resource_ids<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_ids = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListResourceCategoriesRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListResourceCategoriesRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListResourceCategoriesRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_resource_categories_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListResourceCategoriesRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_resource_categories_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListResourceCategoriesRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListResourceCategoriesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListResourceCategoriesRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListResourceCategoriesRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListResourceCategoriesRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListResourceCategoriesRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListResourceCategoriesRequest].
pub mod list_resource_categories_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        ResourceType,
        CategoryName,
        ResourceId,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::ResourceType => "resourceType",
                Self::CategoryName => "categoryName",
                Self::ResourceId => "resourceId",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "resourceType" => Self::ResourceType,
                "categoryName" => Self::CategoryName,
                "resourceId" => Self::ResourceId,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] =
            &["resourceType", "categoryName", "resourceId"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::update_resource_categories][crate::client::LogAnalytics::update_resource_categories].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateResourceCategoriesRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// A list of category assignments to add or remove.
    pub log_analytics_categories_list_details:
        std::option::Option<crate::model::LogAnalyticsCategoriesListDetails>,
}

impl UpdateResourceCategoriesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::UpdateResourceCategoriesRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::UpdateResourceCategoriesRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::UpdateResourceCategoriesRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::UpdateResourceCategoriesRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::UpdateResourceCategoriesRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [log_analytics_categories_list_details][crate::model::UpdateResourceCategoriesRequest::log_analytics_categories_list_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_categories_list_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::LogAnalyticsCategoriesListDetails>,
    {
        self.log_analytics_categories_list_details = std::option::Option::Some(v.into());
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
        self.log_analytics_categories_list_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::remove_resource_categories][crate::client::LogAnalytics::remove_resource_categories].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RemoveResourceCategoriesRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// A list of category assignments to add or remove.
    pub log_analytics_categories_list_details:
        std::option::Option<crate::model::LogAnalyticsCategoriesListDetails>,
}

impl RemoveResourceCategoriesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::RemoveResourceCategoriesRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::RemoveResourceCategoriesRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::RemoveResourceCategoriesRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::RemoveResourceCategoriesRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::RemoveResourceCategoriesRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [log_analytics_categories_list_details][crate::model::RemoveResourceCategoriesRequest::log_analytics_categories_list_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_categories_list_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::LogAnalyticsCategoriesListDetails>,
    {
        self.log_analytics_categories_list_details = std::option::Option::Some(v.into());
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
        self.log_analytics_categories_list_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_config_work_request][crate::client::LogAnalytics::get_config_work_request].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetConfigWorkRequestRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the work request.
    pub work_request_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetConfigWorkRequestRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetConfigWorkRequestRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [work_request_id][crate::model::GetConfigWorkRequestRequest::work_request_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_work_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.work_request_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetConfigWorkRequestRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetConfigWorkRequestRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_config_work_requests][crate::client::LogAnalytics::list_config_work_requests].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListConfigWorkRequestsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment.
    pub compartment_id: std::string::String,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_config_work_requests_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListConfigWorkRequestsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListConfigWorkRequestsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [compartment_id][crate::model::ListConfigWorkRequestsRequest::compartment_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [sort_order][crate::model::ListConfigWorkRequestsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListConfigWorkRequestsRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListConfigWorkRequestsRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_config_work_requests_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListConfigWorkRequestsRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_config_work_requests_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListConfigWorkRequestsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListConfigWorkRequestsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListConfigWorkRequestsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListConfigWorkRequestsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListConfigWorkRequestsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListConfigWorkRequestsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListConfigWorkRequestsRequest].
pub mod list_config_work_requests_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        TimeAccepted,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::TimeAccepted => "timeAccepted",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "timeAccepted" => Self::TimeAccepted,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["timeAccepted"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::export_custom_content][crate::client::LogAnalytics::export_custom_content].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ExportCustomContentRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// The content to export.
    pub export_content: std::option::Option<crate::model::ExportContent>,
}

impl ExportCustomContentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ExportCustomContentRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ExportCustomContentRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ExportCustomContentRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::ExportCustomContentRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::ExportCustomContentRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [export_content][crate::model::ExportCustomContentRequest::export_content].
    ///
    /// This is a **required** field for requests.
    pub fn set_export_content<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ExportContent>,
    {
        self.export_content = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [export_content][crate::model::ExportCustomContentRequest::export_content].
    pub fn set_or_clear_export_content<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ExportContent>,
    {
        self.export_content = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::import_custom_content][crate::client::LogAnalytics::import_custom_content].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ImportCustomContentRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// Replace existing content with the same names.
    pub is_overwrite: std::option::Option<bool>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// Set to `100-continue` to request preliminary verification before the payload is sent.
    pub expect: std::option::Option<std::string::String>,

    /// The media type of the payload. Defaults to `application/octet-stream`.
    pub content_type: std::option::Option<std::string::String>,

    /// The payload to upload.
    pub body: std::option::Option<bytes::Bytes>,
}

impl ImportCustomContentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ImportCustomContentRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [is_overwrite][crate::model::ImportCustomContentRequest::is_overwrite].
    pub fn set_is_overwrite<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_overwrite = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_overwrite][crate::model::ImportCustomContentRequest::is_overwrite].
    pub fn set_or_clear_is_overwrite<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_overwrite = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ImportCustomContentRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ImportCustomContentRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::ImportCustomContentRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::ImportCustomContentRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [expect][crate::model::ImportCustomContentRequest::expect].
    pub fn set_expect<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.expect = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [expect][crate::model::ImportCustomContentRequest::expect].
    pub fn set_or_clear_expect<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.expect = v.map(|x| x.into());
        self
    }

    /// Sets the value of [content_type][crate::model::ImportCustomContentRequest::content_type].
    pub fn set_content_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [content_type][crate::model::ImportCustomContentRequest::content_type].
    pub fn set_or_clear_content_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.content_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [body][crate::model::ImportCustomContentRequest::body].
    ///
    /// This is a **required** field for requests.
    pub fn set_body<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.body = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [body][crate::model::ImportCustomContentRequest::body].
    pub fn set_or_clear_body<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bytes::Bytes>,
    {
        self.body = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::create_log_analytics_em_bridge][crate::client::LogAnalytics::create_log_analytics_em_bridge].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateLogAnalyticsEmBridgeRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// The settings for a new Enterprise Manager bridge.
    pub create_log_analytics_em_bridge_details:
        std::option::Option<crate::model::CreateLogAnalyticsEmBridgeDetails>,
}

impl CreateLogAnalyticsEmBridgeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::CreateLogAnalyticsEmBridgeRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::CreateLogAnalyticsEmBridgeRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::CreateLogAnalyticsEmBridgeRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::CreateLogAnalyticsEmBridgeRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::CreateLogAnalyticsEmBridgeRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [create_log_analytics_em_bridge_details][crate::model::CreateLogAnalyticsEmBridgeRequest::create_log_analytics_em_bridge_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_create_log_analytics_em_bridge_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CreateLogAnalyticsEmBridgeDetails>,
    {
        self.create_log_analytics_em_bridge_details = std::option::Option::Some(v.into());
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
        self.create_log_analytics_em_bridge_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_log_analytics_em_bridge][crate::client::LogAnalytics::get_log_analytics_em_bridge].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLogAnalyticsEmBridgeRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the Enterprise Manager bridge.
    pub log_analytics_em_bridge_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetLogAnalyticsEmBridgeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetLogAnalyticsEmBridgeRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [log_analytics_em_bridge_id][crate::model::GetLogAnalyticsEmBridgeRequest::log_analytics_em_bridge_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_em_bridge_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_analytics_em_bridge_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetLogAnalyticsEmBridgeRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetLogAnalyticsEmBridgeRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_log_analytics_em_bridges][crate::client::LogAnalytics::list_log_analytics_em_bridges].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLogAnalyticsEmBridgesRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment.
    pub compartment_id: std::string::String,

    /// Filters by exact display name.
    pub display_name: std::option::Option<std::string::String>,

    /// Filters by lifecycle state.
    pub lifecycle_state: std::vec::Vec<crate::model::EmBridgeLifecycleStates>,

    pub lifecycle_details_contains: std::option::Option<std::string::String>,

    pub import_status: std::vec::Vec<crate::model::EmBridgeLatestImportProcessingStatus>,

    pub em_entities_compartment_id: std::option::Option<std::string::String>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_log_analytics_em_bridges_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListLogAnalyticsEmBridgesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListLogAnalyticsEmBridgesRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [compartment_id][crate::model::ListLogAnalyticsEmBridgesRequest::compartment_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::ListLogAnalyticsEmBridgesRequest::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [display_name][crate::model::ListLogAnalyticsEmBridgesRequest::display_name].
    pub fn set_or_clear_display_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.display_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::ListLogAnalyticsEmBridgesRequest::lifecycle_state].
    pub fn set_lifecycle_state<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EmBridgeLifecycleStates>,
    {
        self.lifecycle_state = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [lifecycle_details_contains][crate::model::ListLogAnalyticsEmBridgesRequest::lifecycle_details_contains].
    pub fn set_lifecycle_details_contains<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.lifecycle_details_contains = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [lifecycle_details_contains][crate::model::ListLogAnalyticsEmBridgesRequest::lifecycle_details_contains].
    pub fn set_or_clear_lifecycle_details_contains<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.lifecycle_details_contains = v.map(|x| x.into());
        self
    }

    /// Sets the value of [import_status][crate::model::ListLogAnalyticsEmBridgesRequest::import_status].
    pub fn set_import_status<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EmBridgeLatestImportProcessingStatus>,
    {
        self.import_status = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [em_entities_compartment_id][crate::model::ListLogAnalyticsEmBridgesRequest::em_entities_compartment_id].
    pub fn set_em_entities_compartment_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.em_entities_compartment_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [em_entities_compartment_id][crate::model::ListLogAnalyticsEmBridgesRequest::em_entities_compartment_id].
    pub fn set_or_clear_em_entities_compartment_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.em_entities_compartment_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListLogAnalyticsEmBridgesRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListLogAnalyticsEmBridgesRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListLogAnalyticsEmBridgesRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_log_analytics_em_bridges_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListLogAnalyticsEmBridgesRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_log_analytics_em_bridges_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListLogAnalyticsEmBridgesRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListLogAnalyticsEmBridgesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListLogAnalyticsEmBridgesRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListLogAnalyticsEmBridgesRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListLogAnalyticsEmBridgesRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListLogAnalyticsEmBridgesRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListLogAnalyticsEmBridgesRequest].
pub mod list_log_analytics_em_bridges_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        TimeCreated,
        TimeUpdated,
        DisplayName,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::TimeCreated => "timeCreated",
                Self::TimeUpdated => "timeUpdated",
                Self::DisplayName => "displayName",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "timeCreated" => Self::TimeCreated,
                "timeUpdated" => Self::TimeUpdated,
                "displayName" => Self::DisplayName,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] =
            &["timeCreated", "timeUpdated", "displayName"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::update_log_analytics_em_bridge][crate::client::LogAnalytics::update_log_analytics_em_bridge].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateLogAnalyticsEmBridgeRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the Enterprise Manager bridge.
    pub log_analytics_em_bridge_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// The changes to an Enterprise Manager bridge.
    pub update_log_analytics_em_bridge_details:
        std::option::Option<crate::model::UpdateLogAnalyticsEmBridgeDetails>,
}

impl UpdateLogAnalyticsEmBridgeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::UpdateLogAnalyticsEmBridgeRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [log_analytics_em_bridge_id][crate::model::UpdateLogAnalyticsEmBridgeRequest::log_analytics_em_bridge_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_em_bridge_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_analytics_em_bridge_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::UpdateLogAnalyticsEmBridgeRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::UpdateLogAnalyticsEmBridgeRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::UpdateLogAnalyticsEmBridgeRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::UpdateLogAnalyticsEmBridgeRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_log_analytics_em_bridge_details][crate::model::UpdateLogAnalyticsEmBridgeRequest::update_log_analytics_em_bridge_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_update_log_analytics_em_bridge_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::UpdateLogAnalyticsEmBridgeDetails>,
    {
        self.update_log_analytics_em_bridge_details = std::option::Option::Some(v.into());
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
        self.update_log_analytics_em_bridge_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_log_analytics_em_bridge][crate::client::LogAnalytics::delete_log_analytics_em_bridge].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteLogAnalyticsEmBridgeRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the Enterprise Manager bridge.
    pub log_analytics_em_bridge_id: std::string::String,

    pub is_delete_entities: std::option::Option<bool>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DeleteLogAnalyticsEmBridgeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::DeleteLogAnalyticsEmBridgeRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [log_analytics_em_bridge_id][crate::model::DeleteLogAnalyticsEmBridgeRequest::log_analytics_em_bridge_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_em_bridge_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_analytics_em_bridge_id = v.into();
        self
    }

    /// Sets the value of [is_delete_entities][crate::model::DeleteLogAnalyticsEmBridgeRequest::is_delete_entities].
    pub fn set_is_delete_entities<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_delete_entities = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_delete_entities][crate::model::DeleteLogAnalyticsEmBridgeRequest::is_delete_entities].
    pub fn set_or_clear_is_delete_entities<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_delete_entities = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::DeleteLogAnalyticsEmBridgeRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::DeleteLogAnalyticsEmBridgeRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::DeleteLogAnalyticsEmBridgeRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::DeleteLogAnalyticsEmBridgeRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_log_analytics_em_bridge_summary][crate::client::LogAnalytics::get_log_analytics_em_bridge_summary].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLogAnalyticsEmBridgeSummaryRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment.
    pub compartment_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetLogAnalyticsEmBridgeSummaryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetLogAnalyticsEmBridgeSummaryRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [compartment_id][crate::model::GetLogAnalyticsEmBridgeSummaryRequest::compartment_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetLogAnalyticsEmBridgeSummaryRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetLogAnalyticsEmBridgeSummaryRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::create_log_analytics_entity][crate::client::LogAnalytics::create_log_analytics_entity].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateLogAnalyticsEntityRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// The settings for a new entity.
    pub create_log_analytics_entity_details:
        std::option::Option<crate::model::CreateLogAnalyticsEntityDetails>,
}

impl CreateLogAnalyticsEntityRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::CreateLogAnalyticsEntityRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::CreateLogAnalyticsEntityRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::CreateLogAnalyticsEntityRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::CreateLogAnalyticsEntityRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::CreateLogAnalyticsEntityRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [create_log_analytics_entity_details][crate::model::CreateLogAnalyticsEntityRequest::create_log_analytics_entity_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_create_log_analytics_entity_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CreateLogAnalyticsEntityDetails>,
    {
        self.create_log_analytics_entity_details = std::option::Option::Some(v.into());
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
        self.create_log_analytics_entity_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_log_analytics_entity][crate::client::LogAnalytics::get_log_analytics_entity].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLogAnalyticsEntityRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the entity.
    pub log_analytics_entity_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetLogAnalyticsEntityRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetLogAnalyticsEntityRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [log_analytics_entity_id][crate::model::GetLogAnalyticsEntityRequest::log_analytics_entity_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_entity_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_analytics_entity_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetLogAnalyticsEntityRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetLogAnalyticsEntityRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_log_analytics_entities][crate::client::LogAnalytics::list_log_analytics_entities].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLogAnalyticsEntitiesRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment.
    pub compartment_id: std::string::String,

    /// Filters by exact name.
    pub name: std::option::Option<std::string::String>,

    pub name_contains: std::option::Option<std::string::String>,

    /// The name of the entity type.
    pub entity_type_name: std::vec::Vec<std::string::String>,

    pub cloud_resource_id: std::option::Option<std::string::String>,

    /// Filters by lifecycle state.
    pub lifecycle_state: std::option::Option<crate::model::EntityLifecycleStates>,

    pub lifecycle_details_contains: std::option::Option<std::string::String>,

    pub is_management_agent_id_null:
        std::option::Option<
            crate::model::list_log_analytics_entities_request::IsManagementAgentIdNull,
        >,

    pub hostname: std::option::Option<std::string::String>,

    pub hostname_contains: std::option::Option<std::string::String>,

    pub source_id: std::option::Option<std::string::String>,

    pub creation_source_type:
        std::vec::Vec<crate::model::list_log_analytics_entities_request::CreationSourceType>,

    pub creation_source_details: std::option::Option<std::string::String>,

    pub is_show_associated_sources_count: std::option::Option<bool>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_log_analytics_entities_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListLogAnalyticsEntitiesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListLogAnalyticsEntitiesRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [compartment_id][crate::model::ListLogAnalyticsEntitiesRequest::compartment_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::ListLogAnalyticsEntitiesRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::ListLogAnalyticsEntitiesRequest::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name_contains][crate::model::ListLogAnalyticsEntitiesRequest::name_contains].
    pub fn set_name_contains<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name_contains = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name_contains][crate::model::ListLogAnalyticsEntitiesRequest::name_contains].
    pub fn set_or_clear_name_contains<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name_contains = v.map(|x| x.into());
        self
    }

    /// Sets the value of [entity_type_name][crate::model::ListLogAnalyticsEntitiesRequest::entity_type_name].
    pub fn set_entity_type_name<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.entity_type_name = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [cloud_resource_id][crate::model::ListLogAnalyticsEntitiesRequest::cloud_resource_id].
    pub fn set_cloud_resource_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.cloud_resource_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cloud_resource_id][crate::model::ListLogAnalyticsEntitiesRequest::cloud_resource_id].
    pub fn set_or_clear_cloud_resource_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.cloud_resource_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::ListLogAnalyticsEntitiesRequest::lifecycle_state].
    pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::EntityLifecycleStates>,
    {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [lifecycle_state][crate::model::ListLogAnalyticsEntitiesRequest::lifecycle_state].
    pub fn set_or_clear_lifecycle_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::EntityLifecycleStates>,
    {
        self.lifecycle_state = v.map(|x| x.into());
        self
    }

    /// Sets the value of [lifecycle_details_contains][crate::model::ListLogAnalyticsEntitiesRequest::lifecycle_details_contains].
    pub fn set_lifecycle_details_contains<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.lifecycle_details_contains = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [lifecycle_details_contains][crate::model::ListLogAnalyticsEntitiesRequest::lifecycle_details_contains].
    pub fn set_or_clear_lifecycle_details_contains<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.lifecycle_details_contains = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_management_agent_id_null][crate::model::ListLogAnalyticsEntitiesRequest::is_management_agent_id_null].
    pub fn set_is_management_agent_id_null<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<
            crate::model::list_log_analytics_entities_request::IsManagementAgentIdNull,
        >,
    {
        self.is_management_agent_id_null = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_management_agent_id_null][crate::model::ListLogAnalyticsEntitiesRequest::is_management_agent_id_null].
    pub fn set_or_clear_is_management_agent_id_null<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<
            crate::model::list_log_analytics_entities_request::IsManagementAgentIdNull,
        >,
    {
        self.is_management_agent_id_null = v.map(|x| x.into());
        self
    }

    /// Sets the value of [hostname][crate::model::ListLogAnalyticsEntitiesRequest::hostname].
    pub fn set_hostname<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.hostname = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [hostname][crate::model::ListLogAnalyticsEntitiesRequest::hostname].
    pub fn set_or_clear_hostname<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.hostname = v.map(|x| x.into());
        self
    }

    /// Sets the value of [hostname_contains][crate::model::ListLogAnalyticsEntitiesRequest::hostname_contains].
    pub fn set_hostname_contains<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.hostname_contains = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [hostname_contains][crate::model::ListLogAnalyticsEntitiesRequest::hostname_contains].
    pub fn set_or_clear_hostname_contains<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.hostname_contains = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_id][crate::model::ListLogAnalyticsEntitiesRequest::source_id].
    pub fn set_source_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_id][crate::model::ListLogAnalyticsEntitiesRequest::source_id].
    pub fn set_or_clear_source_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_id = v.map(|x| x.into());
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
        self.creation_source_type = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [creation_source_details][crate::model::ListLogAnalyticsEntitiesRequest::creation_source_details].
    pub fn set_creation_source_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_source_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [creation_source_details][crate::model::ListLogAnalyticsEntitiesRequest::creation_source_details].
    pub fn set_or_clear_creation_source_details<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_source_details = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_show_associated_sources_count][crate::model::ListLogAnalyticsEntitiesRequest::is_show_associated_sources_count].
    pub fn set_is_show_associated_sources_count<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_show_associated_sources_count = std::option::Option::Some(v.into());
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
        self.is_show_associated_sources_count = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListLogAnalyticsEntitiesRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListLogAnalyticsEntitiesRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListLogAnalyticsEntitiesRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_log_analytics_entities_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListLogAnalyticsEntitiesRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_log_analytics_entities_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListLogAnalyticsEntitiesRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListLogAnalyticsEntitiesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListLogAnalyticsEntitiesRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListLogAnalyticsEntitiesRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListLogAnalyticsEntitiesRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListLogAnalyticsEntitiesRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListLogAnalyticsEntitiesRequest].
pub mod list_log_analytics_entities_request {
    #[allow(unused_imports)]
    use super::*;

    /// The values accepted by the `isManagementAgentIdNull` parameter.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum IsManagementAgentIdNull {
        True,
        False,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl IsManagementAgentIdNull {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::True => "true",
                Self::False => "false",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for IsManagementAgentIdNull {
        fn from(value: &str) -> Self {
            match value {
                "true" => Self::True,
                "false" => Self::False,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for IsManagementAgentIdNull {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for IsManagementAgentIdNull {
        const KNOWN_VALUES: &'static [&'static str] = &["true", "false"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for IsManagementAgentIdNull {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for IsManagementAgentIdNull {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }

    /// The values accepted by the `creationSourceType` parameter.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum CreationSourceType {
        EmBridge,
        BulkDiscovery,
        ServiceConnectorHub,
        Discovery,
        None,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl CreationSourceType {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::EmBridge => "EM_BRIDGE",
                Self::BulkDiscovery => "BULK_DISCOVERY",
                Self::ServiceConnectorHub => "SERVICE_CONNECTOR_HUB",
                Self::Discovery => "DISCOVERY",
                Self::None => "NONE",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for CreationSourceType {
        fn from(value: &str) -> Self {
            match value {
                "EM_BRIDGE" => Self::EmBridge,
                "BULK_DISCOVERY" => Self::BulkDiscovery,
                "SERVICE_CONNECTOR_HUB" => Self::ServiceConnectorHub,
                "DISCOVERY" => Self::Discovery,
                "NONE" => Self::None,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for CreationSourceType {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for CreationSourceType {
        const KNOWN_VALUES: &'static [&'static str] = &[
            "EM_BRIDGE",
            "BULK_DISCOVERY",
            "SERVICE_CONNECTOR_HUB",
            "DISCOVERY",
            "NONE",
        ];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for CreationSourceType {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for CreationSourceType {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        TimeCreated,
        TimeUpdated,
        Name,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::TimeCreated => "timeCreated",
                Self::TimeUpdated => "timeUpdated",
                Self::Name => "name",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "timeCreated" => Self::TimeCreated,
                "timeUpdated" => Self::TimeUpdated,
                "name" => Self::Name,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["timeCreated", "timeUpdated", "name"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::update_log_analytics_entity][crate::client::LogAnalytics::update_log_analytics_entity].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateLogAnalyticsEntityRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the entity.
    pub log_analytics_entity_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// The changes to an entity.
    pub update_log_analytics_entity_details:
        std::option::Option<crate::model::UpdateLogAnalyticsEntityDetails>,
}

impl UpdateLogAnalyticsEntityRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::UpdateLogAnalyticsEntityRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [log_analytics_entity_id][crate::model::UpdateLogAnalyticsEntityRequest::log_analytics_entity_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_entity_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_analytics_entity_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::UpdateLogAnalyticsEntityRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::UpdateLogAnalyticsEntityRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::UpdateLogAnalyticsEntityRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::UpdateLogAnalyticsEntityRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_log_analytics_entity_details][crate::model::UpdateLogAnalyticsEntityRequest::update_log_analytics_entity_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_update_log_analytics_entity_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::UpdateLogAnalyticsEntityDetails>,
    {
        self.update_log_analytics_entity_details = std::option::Option::Some(v.into());
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
        self.update_log_analytics_entity_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_log_analytics_entity][crate::client::LogAnalytics::delete_log_analytics_entity].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteLogAnalyticsEntityRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the entity.
    pub log_analytics_entity_id: std::string::String,

    /// Delete the entity even if it is referenced elsewhere.
    pub is_force_delete: std::option::Option<bool>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DeleteLogAnalyticsEntityRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::DeleteLogAnalyticsEntityRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [log_analytics_entity_id][crate::model::DeleteLogAnalyticsEntityRequest::log_analytics_entity_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_entity_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_analytics_entity_id = v.into();
        self
    }

    /// Sets the value of [is_force_delete][crate::model::DeleteLogAnalyticsEntityRequest::is_force_delete].
    pub fn set_is_force_delete<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_force_delete = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_force_delete][crate::model::DeleteLogAnalyticsEntityRequest::is_force_delete].
    pub fn set_or_clear_is_force_delete<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_force_delete = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::DeleteLogAnalyticsEntityRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::DeleteLogAnalyticsEntityRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::DeleteLogAnalyticsEntityRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::DeleteLogAnalyticsEntityRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_log_analytics_entities_summary][crate::client::LogAnalytics::get_log_analytics_entities_summary].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLogAnalyticsEntitiesSummaryRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment.
    pub compartment_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetLogAnalyticsEntitiesSummaryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetLogAnalyticsEntitiesSummaryRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [compartment_id][crate::model::GetLogAnalyticsEntitiesSummaryRequest::compartment_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetLogAnalyticsEntitiesSummaryRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetLogAnalyticsEntitiesSummaryRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::change_log_analytics_entity_compartment][crate::client::LogAnalytics::change_log_analytics_entity_compartment].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ChangeLogAnalyticsEntityCompartmentRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the entity.
    pub log_analytics_entity_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// The compartment to move an entity to.
    pub change_log_analytics_entity_compartment_details:
        std::option::Option<crate::model::ChangeLogAnalyticsEntityCompartmentDetails>,
}

impl ChangeLogAnalyticsEntityCompartmentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ChangeLogAnalyticsEntityCompartmentRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [log_analytics_entity_id][crate::model::ChangeLogAnalyticsEntityCompartmentRequest::log_analytics_entity_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_entity_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_analytics_entity_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ChangeLogAnalyticsEntityCompartmentRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ChangeLogAnalyticsEntityCompartmentRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::ChangeLogAnalyticsEntityCompartmentRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::ChangeLogAnalyticsEntityCompartmentRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::ChangeLogAnalyticsEntityCompartmentRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::ChangeLogAnalyticsEntityCompartmentRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of [change_log_analytics_entity_compartment_details][crate::model::ChangeLogAnalyticsEntityCompartmentRequest::change_log_analytics_entity_compartment_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_change_log_analytics_entity_compartment_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ChangeLogAnalyticsEntityCompartmentDetails>,
    {
        self.change_log_analytics_entity_compartment_details = std::option::Option::Some(v.into());
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
        self.change_log_analytics_entity_compartment_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::add_entity_association][crate::client::LogAnalytics::add_entity_association].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct AddEntityAssociationRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the entity.
    pub log_analytics_entity_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// The entities to associate with an entity.
    pub add_entity_association_details:
        std::option::Option<crate::model::AddEntityAssociationDetails>,
}

impl AddEntityAssociationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::AddEntityAssociationRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [log_analytics_entity_id][crate::model::AddEntityAssociationRequest::log_analytics_entity_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_entity_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_analytics_entity_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::AddEntityAssociationRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::AddEntityAssociationRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::AddEntityAssociationRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::AddEntityAssociationRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::AddEntityAssociationRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::AddEntityAssociationRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of [add_entity_association_details][crate::model::AddEntityAssociationRequest::add_entity_association_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_add_entity_association_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::AddEntityAssociationDetails>,
    {
        self.add_entity_association_details = std::option::Option::Some(v.into());
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
        self.add_entity_association_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::remove_entity_associations][crate::client::LogAnalytics::remove_entity_associations].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RemoveEntityAssociationsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the entity.
    pub log_analytics_entity_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// The entities to dissociate from an entity.
    pub remove_entity_associations_details:
        std::option::Option<crate::model::RemoveEntityAssociationsDetails>,
}

impl RemoveEntityAssociationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::RemoveEntityAssociationsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [log_analytics_entity_id][crate::model::RemoveEntityAssociationsRequest::log_analytics_entity_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_entity_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_analytics_entity_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::RemoveEntityAssociationsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::RemoveEntityAssociationsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::RemoveEntityAssociationsRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::RemoveEntityAssociationsRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::RemoveEntityAssociationsRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::RemoveEntityAssociationsRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of [remove_entity_associations_details][crate::model::RemoveEntityAssociationsRequest::remove_entity_associations_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_remove_entity_associations_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::RemoveEntityAssociationsDetails>,
    {
        self.remove_entity_associations_details = std::option::Option::Some(v.into());
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
        self.remove_entity_associations_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_entity_associations][crate::client::LogAnalytics::list_entity_associations].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListEntityAssociationsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the entity.
    pub log_analytics_entity_id: std::string::String,

    pub direct_associated_entity_type_name: std::vec::Vec<std::string::String>,

    pub association_depth: std::option::Option<i32>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_entity_associations_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListEntityAssociationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListEntityAssociationsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [log_analytics_entity_id][crate::model::ListEntityAssociationsRequest::log_analytics_entity_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_entity_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_analytics_entity_id = v.into();
        self
    }

    /// Sets the value of [direct_associated_entity_type_name][crate::model::ListEntityAssociationsRequest::direct_associated_entity_type_name].
    pub fn set_direct_associated_entity_type_name<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.direct_associated_entity_type_name = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [association_depth][crate::model::ListEntityAssociationsRequest::association_depth].
    pub fn set_association_depth<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.association_depth = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [association_depth][crate::model::ListEntityAssociationsRequest::association_depth].
    pub fn set_or_clear_association_depth<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.association_depth = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListEntityAssociationsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListEntityAssociationsRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListEntityAssociationsRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_entity_associations_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListEntityAssociationsRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_entity_associations_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListEntityAssociationsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListEntityAssociationsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListEntityAssociationsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListEntityAssociationsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListEntityAssociationsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListEntityAssociationsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListEntityAssociationsRequest].
pub mod list_entity_associations_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        TimeCreated,
        TimeUpdated,
        Name,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::TimeCreated => "timeCreated",
                Self::TimeUpdated => "timeUpdated",
                Self::Name => "name",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "timeCreated" => Self::TimeCreated,
                "timeUpdated" => Self::TimeUpdated,
                "name" => Self::Name,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["timeCreated", "timeUpdated", "name"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::list_log_analytics_entity_topology][crate::client::LogAnalytics::list_log_analytics_entity_topology].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLogAnalyticsEntityTopologyRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the entity.
    pub log_analytics_entity_id: std::string::String,

    /// Filters by lifecycle state.
    pub lifecycle_state: std::option::Option<crate::model::EntityLifecycleStates>,

    pub metadata_equals: std::vec::Vec<std::string::String>,

    pub context: std::option::Option<std::string::String>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by:
        std::option::Option<crate::model::list_log_analytics_entity_topology_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListLogAnalyticsEntityTopologyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListLogAnalyticsEntityTopologyRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [log_analytics_entity_id][crate::model::ListLogAnalyticsEntityTopologyRequest::log_analytics_entity_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_entity_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_analytics_entity_id = v.into();
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::ListLogAnalyticsEntityTopologyRequest::lifecycle_state].
    pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::EntityLifecycleStates>,
    {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [lifecycle_state][crate::model::ListLogAnalyticsEntityTopologyRequest::lifecycle_state].
    pub fn set_or_clear_lifecycle_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::EntityLifecycleStates>,
    {
        self.lifecycle_state = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metadata_equals][crate::model::ListLogAnalyticsEntityTopologyRequest::metadata_equals].
    pub fn set_metadata_equals<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.metadata_equals = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [context][crate::model::ListLogAnalyticsEntityTopologyRequest::context].
    pub fn set_context<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.context = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [context][crate::model::ListLogAnalyticsEntityTopologyRequest::context].
    pub fn set_or_clear_context<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.context = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListLogAnalyticsEntityTopologyRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListLogAnalyticsEntityTopologyRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListLogAnalyticsEntityTopologyRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_log_analytics_entity_topology_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListLogAnalyticsEntityTopologyRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_log_analytics_entity_topology_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListLogAnalyticsEntityTopologyRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListLogAnalyticsEntityTopologyRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListLogAnalyticsEntityTopologyRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListLogAnalyticsEntityTopologyRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListLogAnalyticsEntityTopologyRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListLogAnalyticsEntityTopologyRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListLogAnalyticsEntityTopologyRequest].
pub mod list_log_analytics_entity_topology_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        TimeCreated,
        TimeUpdated,
        Name,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::TimeCreated => "timeCreated",
                Self::TimeUpdated => "timeUpdated",
                Self::Name => "name",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "timeCreated" => Self::TimeCreated,
                "timeUpdated" => Self::TimeUpdated,
                "name" => Self::Name,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["timeCreated", "timeUpdated", "name"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::create_log_analytics_entity_type][crate::client::LogAnalytics::create_log_analytics_entity_type].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateLogAnalyticsEntityTypeRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// The settings for a new entity type.
    pub create_log_analytics_entity_type_details:
        std::option::Option<crate::model::CreateLogAnalyticsEntityTypeDetails>,
}

impl CreateLogAnalyticsEntityTypeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::CreateLogAnalyticsEntityTypeRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::CreateLogAnalyticsEntityTypeRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::CreateLogAnalyticsEntityTypeRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::CreateLogAnalyticsEntityTypeRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::CreateLogAnalyticsEntityTypeRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [create_log_analytics_entity_type_details][crate::model::CreateLogAnalyticsEntityTypeRequest::create_log_analytics_entity_type_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_create_log_analytics_entity_type_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CreateLogAnalyticsEntityTypeDetails>,
    {
        self.create_log_analytics_entity_type_details = std::option::Option::Some(v.into());
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
        self.create_log_analytics_entity_type_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_log_analytics_entity_type][crate::client::LogAnalytics::get_log_analytics_entity_type].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLogAnalyticsEntityTypeRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the entity type.
    pub entity_type_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetLogAnalyticsEntityTypeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetLogAnalyticsEntityTypeRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [entity_type_name][crate::model::GetLogAnalyticsEntityTypeRequest::entity_type_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_entity_type_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.entity_type_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetLogAnalyticsEntityTypeRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetLogAnalyticsEntityTypeRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_log_analytics_entity_types][crate::client::LogAnalytics::list_log_analytics_entity_types].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLogAnalyticsEntityTypesRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// Filters by exact name.
    pub name: std::option::Option<std::string::String>,

    pub name_contains: std::option::Option<std::string::String>,

    pub cloud_type: std::option::Option<crate::model::EntityCloudType>,

    /// Filters by lifecycle state.
    pub lifecycle_state: std::option::Option<crate::model::EntityLifecycleStates>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_log_analytics_entity_types_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListLogAnalyticsEntityTypesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListLogAnalyticsEntityTypesRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [name][crate::model::ListLogAnalyticsEntityTypesRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::ListLogAnalyticsEntityTypesRequest::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name_contains][crate::model::ListLogAnalyticsEntityTypesRequest::name_contains].
    pub fn set_name_contains<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name_contains = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name_contains][crate::model::ListLogAnalyticsEntityTypesRequest::name_contains].
    pub fn set_or_clear_name_contains<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name_contains = v.map(|x| x.into());
        self
    }

    /// Sets the value of [cloud_type][crate::model::ListLogAnalyticsEntityTypesRequest::cloud_type].
    pub fn set_cloud_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::EntityCloudType>,
    {
        self.cloud_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cloud_type][crate::model::ListLogAnalyticsEntityTypesRequest::cloud_type].
    pub fn set_or_clear_cloud_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::EntityCloudType>,
    {
        self.cloud_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::ListLogAnalyticsEntityTypesRequest::lifecycle_state].
    pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::EntityLifecycleStates>,
    {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [lifecycle_state][crate::model::ListLogAnalyticsEntityTypesRequest::lifecycle_state].
    pub fn set_or_clear_lifecycle_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::EntityLifecycleStates>,
    {
        self.lifecycle_state = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListLogAnalyticsEntityTypesRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListLogAnalyticsEntityTypesRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListLogAnalyticsEntityTypesRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_log_analytics_entity_types_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListLogAnalyticsEntityTypesRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_log_analytics_entity_types_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListLogAnalyticsEntityTypesRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListLogAnalyticsEntityTypesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListLogAnalyticsEntityTypesRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListLogAnalyticsEntityTypesRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListLogAnalyticsEntityTypesRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListLogAnalyticsEntityTypesRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListLogAnalyticsEntityTypesRequest].
pub mod list_log_analytics_entity_types_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        TimeCreated,
        TimeUpdated,
        Name,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::TimeCreated => "timeCreated",
                Self::TimeUpdated => "timeUpdated",
                Self::Name => "name",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "timeCreated" => Self::TimeCreated,
                "timeUpdated" => Self::TimeUpdated,
                "name" => Self::Name,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["timeCreated", "timeUpdated", "name"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::update_log_analytics_entity_type][crate::client::LogAnalytics::update_log_analytics_entity_type].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateLogAnalyticsEntityTypeRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the entity type.
    pub entity_type_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// The changes to an entity type.
    pub update_log_analytics_entity_type_details:
        std::option::Option<crate::model::UpdateLogAnalyticsEntityTypeDetails>,
}

impl UpdateLogAnalyticsEntityTypeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::UpdateLogAnalyticsEntityTypeRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [entity_type_name][crate::model::UpdateLogAnalyticsEntityTypeRequest::entity_type_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_entity_type_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.entity_type_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::UpdateLogAnalyticsEntityTypeRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::UpdateLogAnalyticsEntityTypeRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::UpdateLogAnalyticsEntityTypeRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::UpdateLogAnalyticsEntityTypeRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_log_analytics_entity_type_details][crate::model::UpdateLogAnalyticsEntityTypeRequest::update_log_analytics_entity_type_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_update_log_analytics_entity_type_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::UpdateLogAnalyticsEntityTypeDetails>,
    {
        self.update_log_analytics_entity_type_details = std::option::Option::Some(v.into());
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
        self.update_log_analytics_entity_type_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_log_analytics_entity_type][crate::client::LogAnalytics::delete_log_analytics_entity_type].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteLogAnalyticsEntityTypeRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the entity type.
    pub entity_type_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DeleteLogAnalyticsEntityTypeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::DeleteLogAnalyticsEntityTypeRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [entity_type_name][crate::model::DeleteLogAnalyticsEntityTypeRequest::entity_type_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_entity_type_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.entity_type_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::DeleteLogAnalyticsEntityTypeRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::DeleteLogAnalyticsEntityTypeRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::DeleteLogAnalyticsEntityTypeRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::DeleteLogAnalyticsEntityTypeRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::create_log_analytics_log_group][crate::client::LogAnalytics::create_log_analytics_log_group].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateLogAnalyticsLogGroupRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// The settings for a new log group.
    pub create_log_analytics_log_group_details:
        std::option::Option<crate::model::CreateLogAnalyticsLogGroupDetails>,
}

impl CreateLogAnalyticsLogGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::CreateLogAnalyticsLogGroupRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::CreateLogAnalyticsLogGroupRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::CreateLogAnalyticsLogGroupRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::CreateLogAnalyticsLogGroupRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::CreateLogAnalyticsLogGroupRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [create_log_analytics_log_group_details][crate::model::CreateLogAnalyticsLogGroupRequest::create_log_analytics_log_group_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_create_log_analytics_log_group_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CreateLogAnalyticsLogGroupDetails>,
    {
        self.create_log_analytics_log_group_details = std::option::Option::Some(v.into());
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
        self.create_log_analytics_log_group_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_log_analytics_log_group][crate::client::LogAnalytics::get_log_analytics_log_group].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLogAnalyticsLogGroupRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the log group.
    pub log_analytics_log_group_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetLogAnalyticsLogGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetLogAnalyticsLogGroupRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [log_analytics_log_group_id][crate::model::GetLogAnalyticsLogGroupRequest::log_analytics_log_group_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_log_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_analytics_log_group_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetLogAnalyticsLogGroupRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetLogAnalyticsLogGroupRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_log_analytics_log_groups][crate::client::LogAnalytics::list_log_analytics_log_groups].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLogAnalyticsLogGroupsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment.
    pub compartment_id: std::string::String,

    /// Filters by exact display name.
    pub display_name: std::option::Option<std::string::String>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_log_analytics_log_groups_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListLogAnalyticsLogGroupsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListLogAnalyticsLogGroupsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [compartment_id][crate::model::ListLogAnalyticsLogGroupsRequest::compartment_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::ListLogAnalyticsLogGroupsRequest::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [display_name][crate::model::ListLogAnalyticsLogGroupsRequest::display_name].
    pub fn set_or_clear_display_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.display_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListLogAnalyticsLogGroupsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListLogAnalyticsLogGroupsRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListLogAnalyticsLogGroupsRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_log_analytics_log_groups_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListLogAnalyticsLogGroupsRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_log_analytics_log_groups_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListLogAnalyticsLogGroupsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListLogAnalyticsLogGroupsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListLogAnalyticsLogGroupsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListLogAnalyticsLogGroupsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListLogAnalyticsLogGroupsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListLogAnalyticsLogGroupsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListLogAnalyticsLogGroupsRequest].
pub mod list_log_analytics_log_groups_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        TimeCreated,
        TimeUpdated,
        DisplayName,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::TimeCreated => "timeCreated",
                Self::TimeUpdated => "timeUpdated",
                Self::DisplayName => "displayName",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "timeCreated" => Self::TimeCreated,
                "timeUpdated" => Self::TimeUpdated,
                "displayName" => Self::DisplayName,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] =
            &["timeCreated", "timeUpdated", "displayName"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::update_log_analytics_log_group][crate::client::LogAnalytics::update_log_analytics_log_group].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateLogAnalyticsLogGroupRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the log group.
    pub log_analytics_log_group_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// The changes to a log group.
    pub update_log_analytics_log_group_details:
        std::option::Option<crate::model::UpdateLogAnalyticsLogGroupDetails>,
}

impl UpdateLogAnalyticsLogGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::UpdateLogAnalyticsLogGroupRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [log_analytics_log_group_id][crate::model::UpdateLogAnalyticsLogGroupRequest::log_analytics_log_group_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_log_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_analytics_log_group_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::UpdateLogAnalyticsLogGroupRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::UpdateLogAnalyticsLogGroupRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::UpdateLogAnalyticsLogGroupRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::UpdateLogAnalyticsLogGroupRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_log_analytics_log_group_details][crate::model::UpdateLogAnalyticsLogGroupRequest::update_log_analytics_log_group_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_update_log_analytics_log_group_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::UpdateLogAnalyticsLogGroupDetails>,
    {
        self.update_log_analytics_log_group_details = std::option::Option::Some(v.into());
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
        self.update_log_analytics_log_group_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_log_analytics_log_group][crate::client::LogAnalytics::delete_log_analytics_log_group].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteLogAnalyticsLogGroupRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the log group.
    pub log_analytics_log_group_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DeleteLogAnalyticsLogGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::DeleteLogAnalyticsLogGroupRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [log_analytics_log_group_id][crate::model::DeleteLogAnalyticsLogGroupRequest::log_analytics_log_group_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_log_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_analytics_log_group_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::DeleteLogAnalyticsLogGroupRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::DeleteLogAnalyticsLogGroupRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::DeleteLogAnalyticsLogGroupRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::DeleteLogAnalyticsLogGroupRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::change_log_analytics_log_group_compartment][crate::client::LogAnalytics::change_log_analytics_log_group_compartment].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ChangeLogAnalyticsLogGroupCompartmentRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the log group.
    pub log_analytics_log_group_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// The compartment to move a log group to.
    pub change_log_analytics_log_group_compartment_details:
        std::option::Option<crate::model::ChangeLogAnalyticsLogGroupCompartmentDetails>,
}

impl ChangeLogAnalyticsLogGroupCompartmentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [log_analytics_log_group_id][crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest::log_analytics_log_group_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_log_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_analytics_log_group_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of [change_log_analytics_log_group_compartment_details][crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest::change_log_analytics_log_group_compartment_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_change_log_analytics_log_group_compartment_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ChangeLogAnalyticsLogGroupCompartmentDetails>,
    {
        self.change_log_analytics_log_group_compartment_details =
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
        self.change_log_analytics_log_group_compartment_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_log_analytics_log_groups_summary][crate::client::LogAnalytics::get_log_analytics_log_groups_summary].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLogAnalyticsLogGroupsSummaryRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment.
    pub compartment_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetLogAnalyticsLogGroupsSummaryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetLogAnalyticsLogGroupsSummaryRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [compartment_id][crate::model::GetLogAnalyticsLogGroupsSummaryRequest::compartment_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetLogAnalyticsLogGroupsSummaryRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetLogAnalyticsLogGroupsSummaryRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::create_log_analytics_object_collection_rule][crate::client::LogAnalytics::create_log_analytics_object_collection_rule].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateLogAnalyticsObjectCollectionRuleRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// The settings for a new object collection rule.
    pub create_log_analytics_object_collection_rule_details:
        std::option::Option<crate::model::CreateLogAnalyticsObjectCollectionRuleDetails>,
}

impl CreateLogAnalyticsObjectCollectionRuleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::CreateLogAnalyticsObjectCollectionRuleRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::CreateLogAnalyticsObjectCollectionRuleRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::CreateLogAnalyticsObjectCollectionRuleRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::CreateLogAnalyticsObjectCollectionRuleRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::CreateLogAnalyticsObjectCollectionRuleRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [create_log_analytics_object_collection_rule_details][crate::model::CreateLogAnalyticsObjectCollectionRuleRequest::create_log_analytics_object_collection_rule_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_create_log_analytics_object_collection_rule_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CreateLogAnalyticsObjectCollectionRuleDetails>,
    {
        self.create_log_analytics_object_collection_rule_details =
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
        self.create_log_analytics_object_collection_rule_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_log_analytics_object_collection_rule][crate::client::LogAnalytics::get_log_analytics_object_collection_rule].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLogAnalyticsObjectCollectionRuleRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the object collection rule.
    pub log_analytics_object_collection_rule_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetLogAnalyticsObjectCollectionRuleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetLogAnalyticsObjectCollectionRuleRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [log_analytics_object_collection_rule_id][crate::model::GetLogAnalyticsObjectCollectionRuleRequest::log_analytics_object_collection_rule_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_object_collection_rule_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_analytics_object_collection_rule_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetLogAnalyticsObjectCollectionRuleRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetLogAnalyticsObjectCollectionRuleRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_log_analytics_object_collection_rules][crate::client::LogAnalytics::list_log_analytics_object_collection_rules].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLogAnalyticsObjectCollectionRulesRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment.
    pub compartment_id: std::string::String,

    /// Filters by exact name.
    pub name: std::option::Option<std::string::String>,

    /// Filters by lifecycle state.
    pub lifecycle_state: std::option::Option<crate::model::ObjectCollectionRuleLifecycleStates>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by:
        std::option::Option<
            crate::model::list_log_analytics_object_collection_rules_request::SortBy,
        >,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListLogAnalyticsObjectCollectionRulesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [compartment_id][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::compartment_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::lifecycle_state].
    pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ObjectCollectionRuleLifecycleStates>,
    {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [lifecycle_state][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::lifecycle_state].
    pub fn set_or_clear_lifecycle_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ObjectCollectionRuleLifecycleStates>,
    {
        self.lifecycle_state = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<
            crate::model::list_log_analytics_object_collection_rules_request::SortBy,
        >,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<
            crate::model::list_log_analytics_object_collection_rules_request::SortBy,
        >,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListLogAnalyticsObjectCollectionRulesRequest].
pub mod list_log_analytics_object_collection_rules_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        TimeCreated,
        TimeUpdated,
        Name,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::TimeCreated => "timeCreated",
                Self::TimeUpdated => "timeUpdated",
                Self::Name => "name",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "timeCreated" => Self::TimeCreated,
                "timeUpdated" => Self::TimeUpdated,
                "name" => Self::Name,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["timeCreated", "timeUpdated", "name"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::update_log_analytics_object_collection_rule][crate::client::LogAnalytics::update_log_analytics_object_collection_rule].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateLogAnalyticsObjectCollectionRuleRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the object collection rule.
    pub log_analytics_object_collection_rule_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// The changes to an object collection rule.
    pub update_log_analytics_object_collection_rule_details:
        std::option::Option<crate::model::UpdateLogAnalyticsObjectCollectionRuleDetails>,
}

impl UpdateLogAnalyticsObjectCollectionRuleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [log_analytics_object_collection_rule_id][crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest::log_analytics_object_collection_rule_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_object_collection_rule_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_analytics_object_collection_rule_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_log_analytics_object_collection_rule_details][crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest::update_log_analytics_object_collection_rule_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_update_log_analytics_object_collection_rule_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::UpdateLogAnalyticsObjectCollectionRuleDetails>,
    {
        self.update_log_analytics_object_collection_rule_details =
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
        self.update_log_analytics_object_collection_rule_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_log_analytics_object_collection_rule][crate::client::LogAnalytics::delete_log_analytics_object_collection_rule].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteLogAnalyticsObjectCollectionRuleRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the object collection rule.
    pub log_analytics_object_collection_rule_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DeleteLogAnalyticsObjectCollectionRuleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [log_analytics_object_collection_rule_id][crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest::log_analytics_object_collection_rule_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_object_collection_rule_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_analytics_object_collection_rule_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::change_log_analytics_object_collection_rule_compartment][crate::client::LogAnalytics::change_log_analytics_object_collection_rule_compartment].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the object collection rule.
    pub log_analytics_object_collection_rule_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// The compartment to move an object collection rule to.
    pub change_log_analytics_object_collection_rule_compartment_details:
        std::option::Option<crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentDetails>,
}

impl ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [log_analytics_object_collection_rule_id][crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest::log_analytics_object_collection_rule_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_object_collection_rule_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_analytics_object_collection_rule_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
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
        self.change_log_analytics_object_collection_rule_compartment_details =
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
        self.change_log_analytics_object_collection_rule_compartment_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::create_ingest_time_rule][crate::client::LogAnalytics::create_ingest_time_rule].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateIngestTimeRuleRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// The settings for a new ingest time rule.
    pub create_ingest_time_rule_details:
        std::option::Option<crate::model::CreateIngestTimeRuleDetails>,
}

impl CreateIngestTimeRuleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::CreateIngestTimeRuleRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::CreateIngestTimeRuleRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::CreateIngestTimeRuleRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::CreateIngestTimeRuleRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::CreateIngestTimeRuleRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [create_ingest_time_rule_details][crate::model::CreateIngestTimeRuleRequest::create_ingest_time_rule_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_create_ingest_time_rule_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CreateIngestTimeRuleDetails>,
    {
        self.create_ingest_time_rule_details = std::option::Option::Some(v.into());
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
        self.create_ingest_time_rule_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_ingest_time_rule][crate::client::LogAnalytics::get_ingest_time_rule].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetIngestTimeRuleRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the ingest time rule.
    pub ingest_time_rule_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetIngestTimeRuleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetIngestTimeRuleRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [ingest_time_rule_id][crate::model::GetIngestTimeRuleRequest::ingest_time_rule_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_ingest_time_rule_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ingest_time_rule_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetIngestTimeRuleRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetIngestTimeRuleRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_ingest_time_rules][crate::client::LogAnalytics::list_ingest_time_rules].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListIngestTimeRulesRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment.
    pub compartment_id: std::string::String,

    /// Filters by exact display name.
    pub display_name: std::option::Option<std::string::String>,

    /// Filters by lifecycle state.
    pub lifecycle_state: std::option::Option<crate::model::ConcreteLifecycleState>,

    pub condition_kind:
        std::option::Option<crate::model::list_ingest_time_rules_request::ConditionKind>,

    /// The name of the field.
    pub field_name: std::option::Option<std::string::String>,

    pub field_value: std::option::Option<std::string::String>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_ingest_time_rules_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListIngestTimeRulesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListIngestTimeRulesRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [compartment_id][crate::model::ListIngestTimeRulesRequest::compartment_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::ListIngestTimeRulesRequest::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [display_name][crate::model::ListIngestTimeRulesRequest::display_name].
    pub fn set_or_clear_display_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.display_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::ListIngestTimeRulesRequest::lifecycle_state].
    pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ConcreteLifecycleState>,
    {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [lifecycle_state][crate::model::ListIngestTimeRulesRequest::lifecycle_state].
    pub fn set_or_clear_lifecycle_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ConcreteLifecycleState>,
    {
        self.lifecycle_state = v.map(|x| x.into());
        self
    }

    /// Sets the value of [condition_kind][crate::model::ListIngestTimeRulesRequest::condition_kind].
    pub fn set_condition_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_ingest_time_rules_request::ConditionKind>,
    {
        self.condition_kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [condition_kind][crate::model::ListIngestTimeRulesRequest::condition_kind].
    pub fn set_or_clear_condition_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_ingest_time_rules_request::ConditionKind>,
    {
        self.condition_kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [field_name][crate::model::ListIngestTimeRulesRequest::field_name].
    pub fn set_field_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [field_name][crate::model::ListIngestTimeRulesRequest::field_name].
    pub fn set_or_clear_field_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.field_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [field_value][crate::model::ListIngestTimeRulesRequest::field_value].
    pub fn set_field_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_value = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [field_value][crate::model::ListIngestTimeRulesRequest::field_value].
    pub fn set_or_clear_field_value<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.field_value = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListIngestTimeRulesRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListIngestTimeRulesRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListIngestTimeRulesRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_ingest_time_rules_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListIngestTimeRulesRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_ingest_time_rules_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListIngestTimeRulesRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListIngestTimeRulesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListIngestTimeRulesRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListIngestTimeRulesRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListIngestTimeRulesRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListIngestTimeRulesRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListIngestTimeRulesRequest].
pub mod list_ingest_time_rules_request {
    #[allow(unused_imports)]
    use super::*;

    /// The values accepted by the `conditionKind` parameter.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum ConditionKind {
        Field,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl ConditionKind {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::Field => "FIELD",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for ConditionKind {
        fn from(value: &str) -> Self {
            match value {
                "FIELD" => Self::Field,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for ConditionKind {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for ConditionKind {
        const KNOWN_VALUES: &'static [&'static str] = &["FIELD"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for ConditionKind {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for ConditionKind {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        TimeCreated,
        TimeUpdated,
        DisplayName,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::TimeCreated => "timeCreated",
                Self::TimeUpdated => "timeUpdated",
                Self::DisplayName => "displayName",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "timeCreated" => Self::TimeCreated,
                "timeUpdated" => Self::TimeUpdated,
                "displayName" => Self::DisplayName,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] =
            &["timeCreated", "timeUpdated", "displayName"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::update_ingest_time_rule][crate::client::LogAnalytics::update_ingest_time_rule].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateIngestTimeRuleRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the ingest time rule.
    pub ingest_time_rule_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// The changes to an ingest time rule.
    pub update_ingest_time_rule_details:
        std::option::Option<crate::model::UpdateIngestTimeRuleDetails>,
}

impl UpdateIngestTimeRuleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::UpdateIngestTimeRuleRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [ingest_time_rule_id][crate::model::UpdateIngestTimeRuleRequest::ingest_time_rule_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_ingest_time_rule_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ingest_time_rule_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::UpdateIngestTimeRuleRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::UpdateIngestTimeRuleRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::UpdateIngestTimeRuleRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::UpdateIngestTimeRuleRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_ingest_time_rule_details][crate::model::UpdateIngestTimeRuleRequest::update_ingest_time_rule_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_update_ingest_time_rule_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::UpdateIngestTimeRuleDetails>,
    {
        self.update_ingest_time_rule_details = std::option::Option::Some(v.into());
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
        self.update_ingest_time_rule_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_ingest_time_rule][crate::client::LogAnalytics::delete_ingest_time_rule].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteIngestTimeRuleRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the ingest time rule.
    pub ingest_time_rule_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DeleteIngestTimeRuleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::DeleteIngestTimeRuleRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [ingest_time_rule_id][crate::model::DeleteIngestTimeRuleRequest::ingest_time_rule_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_ingest_time_rule_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ingest_time_rule_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::DeleteIngestTimeRuleRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::DeleteIngestTimeRuleRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::DeleteIngestTimeRuleRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::DeleteIngestTimeRuleRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::enable_ingest_time_rule][crate::client::LogAnalytics::enable_ingest_time_rule].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct EnableIngestTimeRuleRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the ingest time rule.
    pub ingest_time_rule_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl EnableIngestTimeRuleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::EnableIngestTimeRuleRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [ingest_time_rule_id][crate::model::EnableIngestTimeRuleRequest::ingest_time_rule_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_ingest_time_rule_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ingest_time_rule_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::EnableIngestTimeRuleRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::EnableIngestTimeRuleRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::EnableIngestTimeRuleRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::EnableIngestTimeRuleRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::disable_ingest_time_rule][crate::client::LogAnalytics::disable_ingest_time_rule].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DisableIngestTimeRuleRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the ingest time rule.
    pub ingest_time_rule_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DisableIngestTimeRuleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::DisableIngestTimeRuleRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [ingest_time_rule_id][crate::model::DisableIngestTimeRuleRequest::ingest_time_rule_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_ingest_time_rule_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ingest_time_rule_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::DisableIngestTimeRuleRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::DisableIngestTimeRuleRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::DisableIngestTimeRuleRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::DisableIngestTimeRuleRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::change_ingest_time_rule_compartment][crate::client::LogAnalytics::change_ingest_time_rule_compartment].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ChangeIngestTimeRuleCompartmentRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the ingest time rule.
    pub ingest_time_rule_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// The compartment to move an ingest time rule to.
    pub change_ingest_time_rule_compartment_details:
        std::option::Option<crate::model::ChangeIngestTimeRuleCompartmentDetails>,
}

impl ChangeIngestTimeRuleCompartmentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ChangeIngestTimeRuleCompartmentRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [ingest_time_rule_id][crate::model::ChangeIngestTimeRuleCompartmentRequest::ingest_time_rule_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_ingest_time_rule_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ingest_time_rule_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ChangeIngestTimeRuleCompartmentRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ChangeIngestTimeRuleCompartmentRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::ChangeIngestTimeRuleCompartmentRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::ChangeIngestTimeRuleCompartmentRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of [change_ingest_time_rule_compartment_details][crate::model::ChangeIngestTimeRuleCompartmentRequest::change_ingest_time_rule_compartment_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_change_ingest_time_rule_compartment_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ChangeIngestTimeRuleCompartmentDetails>,
    {
        self.change_ingest_time_rule_compartment_details = std::option::Option::Some(v.into());
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
        self.change_ingest_time_rule_compartment_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_rules][crate::client::LogAnalytics::list_rules].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListRulesRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment.
    pub compartment_id: std::string::String,

    /// Filters by exact display name.
    pub display_name: std::option::Option<std::string::String>,

    pub kind: std::option::Option<crate::model::list_rules_request::Kind>,

    pub target_service: std::option::Option<std::string::String>,

    /// Filters by lifecycle state.
    pub lifecycle_state: std::option::Option<crate::model::ConcreteLifecycleState>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_rules_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListRulesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListRulesRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [compartment_id][crate::model::ListRulesRequest::compartment_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::ListRulesRequest::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [display_name][crate::model::ListRulesRequest::display_name].
    pub fn set_or_clear_display_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.display_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kind][crate::model::ListRulesRequest::kind].
    pub fn set_kind<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_rules_request::Kind>,
    {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kind][crate::model::ListRulesRequest::kind].
    pub fn set_or_clear_kind<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_rules_request::Kind>,
    {
        self.kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [target_service][crate::model::ListRulesRequest::target_service].
    pub fn set_target_service<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.target_service = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [target_service][crate::model::ListRulesRequest::target_service].
    pub fn set_or_clear_target_service<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_service = v.map(|x| x.into());
        self
    }

    /// Sets the value of [lifecycle_state][crate::model::ListRulesRequest::lifecycle_state].
    pub fn set_lifecycle_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ConcreteLifecycleState>,
    {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [lifecycle_state][crate::model::ListRulesRequest::lifecycle_state].
    pub fn set_or_clear_lifecycle_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ConcreteLifecycleState>,
    {
        self.lifecycle_state = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListRulesRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListRulesRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListRulesRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_rules_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListRulesRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_rules_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListRulesRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListRulesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListRulesRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListRulesRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListRulesRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListRulesRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListRulesRequest].
pub mod list_rules_request {
    #[allow(unused_imports)]
    use super::*;

    /// The values accepted by the `kind` parameter.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum Kind {
        All,
        IngestTime,
        SavedSearch,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl Kind {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::All => "ALL",
                Self::IngestTime => "INGEST_TIME",
                Self::SavedSearch => "SAVED_SEARCH",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for Kind {
        fn from(value: &str) -> Self {
            match value {
                "ALL" => Self::All,
                "INGEST_TIME" => Self::IngestTime,
                "SAVED_SEARCH" => Self::SavedSearch,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for Kind {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for Kind {
        const KNOWN_VALUES: &'static [&'static str] = &["ALL", "INGEST_TIME", "SAVED_SEARCH"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for Kind {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Kind {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        TimeCreated,
        TimeUpdated,
        DisplayName,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::TimeCreated => "timeCreated",
                Self::TimeUpdated => "timeUpdated",
                Self::DisplayName => "displayName",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "timeCreated" => Self::TimeCreated,
                "timeUpdated" => Self::TimeUpdated,
                "displayName" => Self::DisplayName,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] =
            &["timeCreated", "timeUpdated", "displayName"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::get_rules_summary][crate::client::LogAnalytics::get_rules_summary].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetRulesSummaryRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment.
    pub compartment_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetRulesSummaryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetRulesSummaryRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [compartment_id][crate::model::GetRulesSummaryRequest::compartment_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetRulesSummaryRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetRulesSummaryRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_fields][crate::client::LogAnalytics::list_fields].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListFieldsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub is_match_all: std::option::Option<bool>,

    pub source_ids: std::option::Option<std::string::String>,

    pub source_names: std::option::Option<std::string::String>,

    pub parser_type: std::option::Option<crate::model::list_fields_request::ParserType>,

    pub parser_ids: std::option::Option<std::string::String>,

    pub parser_names: std::option::Option<std::string::String>,

    pub is_include_parser: std::option::Option<bool>,

    pub filter: std::option::Option<std::string::String>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_fields_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListFieldsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListFieldsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [is_match_all][crate::model::ListFieldsRequest::is_match_all].
    pub fn set_is_match_all<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_match_all = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_match_all][crate::model::ListFieldsRequest::is_match_all].
    pub fn set_or_clear_is_match_all<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_match_all = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_ids][crate::model::ListFieldsRequest::source_ids].
    pub fn set_source_ids<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_ids = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_ids][crate::model::ListFieldsRequest::source_ids].
    pub fn set_or_clear_source_ids<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_ids = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_names][crate::model::ListFieldsRequest::source_names].
    pub fn set_source_names<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_names = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_names][crate::model::ListFieldsRequest::source_names].
    pub fn set_or_clear_source_names<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_names = v.map(|x| x.into());
        self
    }

    /// Sets the value of [parser_type][crate::model::ListFieldsRequest::parser_type].
    pub fn set_parser_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_fields_request::ParserType>,
    {
        self.parser_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [parser_type][crate::model::ListFieldsRequest::parser_type].
    pub fn set_or_clear_parser_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_fields_request::ParserType>,
    {
        self.parser_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [parser_ids][crate::model::ListFieldsRequest::parser_ids].
    pub fn set_parser_ids<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parser_ids = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [parser_ids][crate::model::ListFieldsRequest::parser_ids].
    pub fn set_or_clear_parser_ids<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.parser_ids = v.map(|x| x.into());
        self
    }

    /// Sets the value of [parser_names][crate::model::ListFieldsRequest::parser_names].
    pub fn set_parser_names<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parser_names = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [parser_names][crate::model::ListFieldsRequest::parser_names].
    pub fn set_or_clear_parser_names<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.parser_names = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_include_parser][crate::model::ListFieldsRequest::is_include_parser].
    pub fn set_is_include_parser<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_include_parser = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_include_parser][crate::model::ListFieldsRequest::is_include_parser].
    pub fn set_or_clear_is_include_parser<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_include_parser = v.map(|x| x.into());
        self
    }

    /// Sets the value of [filter][crate::model::ListFieldsRequest::filter].
    pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filter = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [filter][crate::model::ListFieldsRequest::filter].
    pub fn set_or_clear_filter<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.filter = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListFieldsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListFieldsRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListFieldsRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_fields_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListFieldsRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_fields_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListFieldsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListFieldsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListFieldsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListFieldsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListFieldsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListFieldsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListFieldsRequest].
pub mod list_fields_request {
    #[allow(unused_imports)]
    use super::*;

    /// The values accepted by the `parserType` parameter.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum ParserType {
        All,
        Regex,
        Xml,
        Json,
        Delimited,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl ParserType {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::All => "ALL",
                Self::Regex => "REGEX",
                Self::Xml => "XML",
                Self::Json => "JSON",
                Self::Delimited => "DELIMITED",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for ParserType {
        fn from(value: &str) -> Self {
            match value {
                "ALL" => Self::All,
                "REGEX" => Self::Regex,
                "XML" => Self::Xml,
                "JSON" => Self::Json,
                "DELIMITED" => Self::Delimited,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for ParserType {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for ParserType {
        const KNOWN_VALUES: &'static [&'static str] = &["ALL", "REGEX", "XML", "JSON", "DELIMITED"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for ParserType {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for ParserType {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        Name,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::Name => "name",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "name" => Self::Name,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["name"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::get_field][crate::client::LogAnalytics::get_field].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetFieldRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the field.
    pub field_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetFieldRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetFieldRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [field_name][crate::model::GetFieldRequest::field_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_field_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetFieldRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetFieldRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::upsert_field][crate::client::LogAnalytics::upsert_field].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpsertFieldRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// A field to create or update.
    pub upsert_log_analytics_field_details:
        std::option::Option<crate::model::UpsertLogAnalyticsFieldDetails>,
}

impl UpsertFieldRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::UpsertFieldRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::UpsertFieldRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::UpsertFieldRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::UpsertFieldRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::UpsertFieldRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::UpsertFieldRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::UpsertFieldRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of [upsert_log_analytics_field_details][crate::model::UpsertFieldRequest::upsert_log_analytics_field_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_upsert_log_analytics_field_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::UpsertLogAnalyticsFieldDetails>,
    {
        self.upsert_log_analytics_field_details = std::option::Option::Some(v.into());
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
        self.upsert_log_analytics_field_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_field][crate::client::LogAnalytics::delete_field].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteFieldRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the field.
    pub field_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl DeleteFieldRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::DeleteFieldRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [field_name][crate::model::DeleteFieldRequest::field_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_field_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::DeleteFieldRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::DeleteFieldRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_fields_summary][crate::client::LogAnalytics::get_fields_summary].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetFieldsSummaryRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub is_show_detail: std::option::Option<bool>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetFieldsSummaryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetFieldsSummaryRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [is_show_detail][crate::model::GetFieldsSummaryRequest::is_show_detail].
    pub fn set_is_show_detail<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_show_detail = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_show_detail][crate::model::GetFieldsSummaryRequest::is_show_detail].
    pub fn set_or_clear_is_show_detail<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_show_detail = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetFieldsSummaryRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetFieldsSummaryRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::extract_structured_log_field_paths][crate::client::LogAnalytics::extract_structured_log_field_paths].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ExtractStructuredLogFieldPathsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub parser_type:
        std::option::Option<crate::model::extract_structured_log_field_paths_request::ParserType>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// A parser that extracts fields from log records.
    pub log_analytics_parser: std::option::Option<crate::model::LogAnalyticsParser>,
}

impl ExtractStructuredLogFieldPathsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ExtractStructuredLogFieldPathsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [parser_type][crate::model::ExtractStructuredLogFieldPathsRequest::parser_type].
    pub fn set_parser_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::extract_structured_log_field_paths_request::ParserType>,
    {
        self.parser_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [parser_type][crate::model::ExtractStructuredLogFieldPathsRequest::parser_type].
    pub fn set_or_clear_parser_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::extract_structured_log_field_paths_request::ParserType>,
    {
        self.parser_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ExtractStructuredLogFieldPathsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ExtractStructuredLogFieldPathsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::ExtractStructuredLogFieldPathsRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::ExtractStructuredLogFieldPathsRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [log_analytics_parser][crate::model::ExtractStructuredLogFieldPathsRequest::log_analytics_parser].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_parser<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::LogAnalyticsParser>,
    {
        self.log_analytics_parser = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [log_analytics_parser][crate::model::ExtractStructuredLogFieldPathsRequest::log_analytics_parser].
    pub fn set_or_clear_log_analytics_parser<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::LogAnalyticsParser>,
    {
        self.log_analytics_parser = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ExtractStructuredLogFieldPathsRequest].
pub mod extract_structured_log_field_paths_request {
    #[allow(unused_imports)]
    use super::*;

    /// The values accepted by the `parserType` parameter.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum ParserType {
        Xml,
        Json,
        Delimited,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl ParserType {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::Xml => "XML",
                Self::Json => "JSON",
                Self::Delimited => "DELIMITED",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for ParserType {
        fn from(value: &str) -> Self {
            match value {
                "XML" => Self::Xml,
                "JSON" => Self::Json,
                "DELIMITED" => Self::Delimited,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for ParserType {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for ParserType {
        const KNOWN_VALUES: &'static [&'static str] = &["XML", "JSON", "DELIMITED"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for ParserType {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for ParserType {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::extract_structured_log_header_paths][crate::client::LogAnalytics::extract_structured_log_header_paths].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ExtractStructuredLogHeaderPathsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub parser_type:
        std::option::Option<crate::model::extract_structured_log_header_paths_request::ParserType>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// A parser that extracts fields from log records.
    pub log_analytics_parser: std::option::Option<crate::model::LogAnalyticsParser>,
}

impl ExtractStructuredLogHeaderPathsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ExtractStructuredLogHeaderPathsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [parser_type][crate::model::ExtractStructuredLogHeaderPathsRequest::parser_type].
    pub fn set_parser_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<
            crate::model::extract_structured_log_header_paths_request::ParserType,
        >,
    {
        self.parser_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [parser_type][crate::model::ExtractStructuredLogHeaderPathsRequest::parser_type].
    pub fn set_or_clear_parser_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<
            crate::model::extract_structured_log_header_paths_request::ParserType,
        >,
    {
        self.parser_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ExtractStructuredLogHeaderPathsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ExtractStructuredLogHeaderPathsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::ExtractStructuredLogHeaderPathsRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::ExtractStructuredLogHeaderPathsRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [log_analytics_parser][crate::model::ExtractStructuredLogHeaderPathsRequest::log_analytics_parser].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_parser<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::LogAnalyticsParser>,
    {
        self.log_analytics_parser = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [log_analytics_parser][crate::model::ExtractStructuredLogHeaderPathsRequest::log_analytics_parser].
    pub fn set_or_clear_log_analytics_parser<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::LogAnalyticsParser>,
    {
        self.log_analytics_parser = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ExtractStructuredLogHeaderPathsRequest].
pub mod extract_structured_log_header_paths_request {
    #[allow(unused_imports)]
    use super::*;

    /// The values accepted by the `parserType` parameter.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum ParserType {
        Xml,
        Json,
        Delimited,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl ParserType {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::Xml => "XML",
                Self::Json => "JSON",
                Self::Delimited => "DELIMITED",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for ParserType {
        fn from(value: &str) -> Self {
            match value {
                "XML" => Self::Xml,
                "JSON" => Self::Json,
                "DELIMITED" => Self::Delimited,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for ParserType {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for ParserType {
        const KNOWN_VALUES: &'static [&'static str] = &["XML", "JSON", "DELIMITED"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for ParserType {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for ParserType {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::test_parser][crate::client::LogAnalytics::test_parser].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct TestParserRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub scope: std::option::Option<crate::model::test_parser_request::Scope>,

    pub req_origin_module: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// The log content to test a parser against.
    pub test_parser_payload_details: std::option::Option<crate::model::TestParserPayloadDetails>,
}

impl TestParserRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::TestParserRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [scope][crate::model::TestParserRequest::scope].
    pub fn set_scope<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::test_parser_request::Scope>,
    {
        self.scope = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scope][crate::model::TestParserRequest::scope].
    pub fn set_or_clear_scope<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::test_parser_request::Scope>,
    {
        self.scope = v.map(|x| x.into());
        self
    }

    /// Sets the value of [req_origin_module][crate::model::TestParserRequest::req_origin_module].
    pub fn set_req_origin_module<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.req_origin_module = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [req_origin_module][crate::model::TestParserRequest::req_origin_module].
    pub fn set_or_clear_req_origin_module<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.req_origin_module = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::TestParserRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::TestParserRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::TestParserRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::TestParserRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [test_parser_payload_details][crate::model::TestParserRequest::test_parser_payload_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_test_parser_payload_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::TestParserPayloadDetails>,
    {
        self.test_parser_payload_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [test_parser_payload_details][crate::model::TestParserRequest::test_parser_payload_details].
    pub fn set_or_clear_test_parser_payload_details<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::TestParserPayloadDetails>,
    {
        self.test_parser_payload_details = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [TestParserRequest].
pub mod test_parser_request {
    #[allow(unused_imports)]
    use super::*;

    /// The values accepted by the `scope` parameter.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum Scope {
        LogLines,
        LogEntries,
        LogLinesLogEntries,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl Scope {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::LogLines => "LOG_LINES",
                Self::LogEntries => "LOG_ENTRIES",
                Self::LogLinesLogEntries => "LOG_LINES_LOG_ENTRIES",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for Scope {
        fn from(value: &str) -> Self {
            match value {
                "LOG_LINES" => Self::LogLines,
                "LOG_ENTRIES" => Self::LogEntries,
                "LOG_LINES_LOG_ENTRIES" => Self::LogLinesLogEntries,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for Scope {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for Scope {
        const KNOWN_VALUES: &'static [&'static str] =
            &["LOG_LINES", "LOG_ENTRIES", "LOG_LINES_LOG_ENTRIES"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for Scope {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Scope {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::list_labels][crate::client::LogAnalytics::list_labels].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLabelsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the label.
    pub label_name: std::option::Option<std::string::String>,

    pub label_display_text: std::option::Option<std::string::String>,

    /// Filters by origin, built-in or custom.
    pub is_system: std::option::Option<crate::model::IsSystemFilter>,

    pub label_priority: std::option::Option<crate::model::list_labels_request::LabelPriority>,

    pub is_count_pop: std::option::Option<bool>,

    pub is_alias_pop: std::option::Option<bool>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_labels_request::SortBy>,

    pub label_source_name: std::option::Option<std::string::String>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListLabelsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListLabelsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [label_name][crate::model::ListLabelsRequest::label_name].
    pub fn set_label_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.label_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [label_name][crate::model::ListLabelsRequest::label_name].
    pub fn set_or_clear_label_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [label_display_text][crate::model::ListLabelsRequest::label_display_text].
    pub fn set_label_display_text<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_display_text = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [label_display_text][crate::model::ListLabelsRequest::label_display_text].
    pub fn set_or_clear_label_display_text<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_display_text = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_system][crate::model::ListLabelsRequest::is_system].
    pub fn set_is_system<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::IsSystemFilter>,
    {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_system][crate::model::ListLabelsRequest::is_system].
    pub fn set_or_clear_is_system<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::IsSystemFilter>,
    {
        self.is_system = v.map(|x| x.into());
        self
    }

    /// Sets the value of [label_priority][crate::model::ListLabelsRequest::label_priority].
    pub fn set_label_priority<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_labels_request::LabelPriority>,
    {
        self.label_priority = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [label_priority][crate::model::ListLabelsRequest::label_priority].
    pub fn set_or_clear_label_priority<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_labels_request::LabelPriority>,
    {
        self.label_priority = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_count_pop][crate::model::ListLabelsRequest::is_count_pop].
    pub fn set_is_count_pop<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_count_pop = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_count_pop][crate::model::ListLabelsRequest::is_count_pop].
    pub fn set_or_clear_is_count_pop<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_count_pop = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_alias_pop][crate::model::ListLabelsRequest::is_alias_pop].
    pub fn set_is_alias_pop<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_alias_pop = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_alias_pop][crate::model::ListLabelsRequest::is_alias_pop].
    pub fn set_or_clear_is_alias_pop<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_alias_pop = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListLabelsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListLabelsRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListLabelsRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_labels_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListLabelsRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_labels_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [label_source_name][crate::model::ListLabelsRequest::label_source_name].
    pub fn set_label_source_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_source_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [label_source_name][crate::model::ListLabelsRequest::label_source_name].
    pub fn set_or_clear_label_source_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_source_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListLabelsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListLabelsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListLabelsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListLabelsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListLabelsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListLabelsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListLabelsRequest].
pub mod list_labels_request {
    #[allow(unused_imports)]
    use super::*;

    /// The values accepted by the `labelPriority` parameter.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum LabelPriority {
        None,
        Low,
        Medium,
        High,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl LabelPriority {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::None => "NONE",
                Self::Low => "LOW",
                Self::Medium => "MEDIUM",
                Self::High => "HIGH",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for LabelPriority {
        fn from(value: &str) -> Self {
            match value {
                "NONE" => Self::None,
                "LOW" => Self::Low,
                "MEDIUM" => Self::Medium,
                "HIGH" => Self::High,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for LabelPriority {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for LabelPriority {
        const KNOWN_VALUES: &'static [&'static str] = &["NONE", "LOW", "MEDIUM", "HIGH"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for LabelPriority {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for LabelPriority {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        Name,
        Priority,
        SourceUsing,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::Name => "name",
                Self::Priority => "priority",
                Self::SourceUsing => "sourceUsing",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "name" => Self::Name,
                "priority" => Self::Priority,
                "sourceUsing" => Self::SourceUsing,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["name", "priority", "sourceUsing"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::get_label][crate::client::LogAnalytics::get_label].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLabelRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the label.
    pub label_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetLabelRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetLabelRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [label_name][crate::model::GetLabelRequest::label_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_label_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.label_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetLabelRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetLabelRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::upsert_label][crate::client::LogAnalytics::upsert_label].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpsertLabelRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// A label definition to create or update.
    pub log_analytics_label_definition:
        std::option::Option<crate::model::LogAnalyticsLabelDefinition>,
}

impl UpsertLabelRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::UpsertLabelRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::UpsertLabelRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::UpsertLabelRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::UpsertLabelRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::UpsertLabelRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::UpsertLabelRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::UpsertLabelRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of [log_analytics_label_definition][crate::model::UpsertLabelRequest::log_analytics_label_definition].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_label_definition<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::LogAnalyticsLabelDefinition>,
    {
        self.log_analytics_label_definition = std::option::Option::Some(v.into());
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
        self.log_analytics_label_definition = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_label][crate::client::LogAnalytics::delete_label].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteLabelRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the label.
    pub label_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl DeleteLabelRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::DeleteLabelRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [label_name][crate::model::DeleteLabelRequest::label_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_label_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.label_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::DeleteLabelRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::DeleteLabelRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_label_summary][crate::client::LogAnalytics::get_label_summary].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLabelSummaryRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetLabelSummaryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetLabelSummaryRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetLabelSummaryRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetLabelSummaryRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_label_priorities][crate::client::LogAnalytics::list_label_priorities].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLabelPrioritiesRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListLabelPrioritiesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListLabelPrioritiesRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [limit][crate::model::ListLabelPrioritiesRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListLabelPrioritiesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListLabelPrioritiesRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListLabelPrioritiesRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListLabelPrioritiesRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListLabelPrioritiesRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_label_source_details][crate::client::LogAnalytics::list_label_source_details].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLabelSourceDetailsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the label.
    pub label_name: std::option::Option<std::string::String>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_label_source_details_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListLabelSourceDetailsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListLabelSourceDetailsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [label_name][crate::model::ListLabelSourceDetailsRequest::label_name].
    pub fn set_label_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.label_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [label_name][crate::model::ListLabelSourceDetailsRequest::label_name].
    pub fn set_or_clear_label_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.label_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListLabelSourceDetailsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListLabelSourceDetailsRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListLabelSourceDetailsRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_label_source_details_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListLabelSourceDetailsRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_label_source_details_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListLabelSourceDetailsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListLabelSourceDetailsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListLabelSourceDetailsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListLabelSourceDetailsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListLabelSourceDetailsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListLabelSourceDetailsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListLabelSourceDetailsRequest].
pub mod list_label_source_details_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        SourceDisplayName,
        LabelFieldDisplayName,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::SourceDisplayName => "sourceDisplayName",
                Self::LabelFieldDisplayName => "labelFieldDisplayName",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "sourceDisplayName" => Self::SourceDisplayName,
                "labelFieldDisplayName" => Self::LabelFieldDisplayName,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] =
            &["sourceDisplayName", "labelFieldDisplayName"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::batch_get_basic_info][crate::client::LogAnalytics::batch_get_basic_info].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct BatchGetBasicInfoRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// Include labels that were deleted.
    pub is_include_deleted: std::option::Option<bool>,

    pub basic_label_sort_by:
        std::option::Option<crate::model::batch_get_basic_info_request::BasicLabelSortBy>,

    pub basic_label_sort_sequence: std::option::Option<crate::model::SortOrders>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A list of label names.
    pub label_names: std::option::Option<crate::model::LabelNames>,
}

impl BatchGetBasicInfoRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::BatchGetBasicInfoRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [is_include_deleted][crate::model::BatchGetBasicInfoRequest::is_include_deleted].
    ///
    /// This is a **required** field for requests.
    pub fn set_is_include_deleted<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_include_deleted = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_include_deleted][crate::model::BatchGetBasicInfoRequest::is_include_deleted].
    pub fn set_or_clear_is_include_deleted<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_include_deleted = v.map(|x| x.into());
        self
    }

    /// Sets the value of [basic_label_sort_by][crate::model::BatchGetBasicInfoRequest::basic_label_sort_by].
    pub fn set_basic_label_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::batch_get_basic_info_request::BasicLabelSortBy>,
    {
        self.basic_label_sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [basic_label_sort_by][crate::model::BatchGetBasicInfoRequest::basic_label_sort_by].
    pub fn set_or_clear_basic_label_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::batch_get_basic_info_request::BasicLabelSortBy>,
    {
        self.basic_label_sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [basic_label_sort_sequence][crate::model::BatchGetBasicInfoRequest::basic_label_sort_sequence].
    pub fn set_basic_label_sort_sequence<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.basic_label_sort_sequence = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [basic_label_sort_sequence][crate::model::BatchGetBasicInfoRequest::basic_label_sort_sequence].
    pub fn set_or_clear_basic_label_sort_sequence<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.basic_label_sort_sequence = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::BatchGetBasicInfoRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::BatchGetBasicInfoRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::BatchGetBasicInfoRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::BatchGetBasicInfoRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::BatchGetBasicInfoRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::BatchGetBasicInfoRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [label_names][crate::model::BatchGetBasicInfoRequest::label_names].
    ///
    /// This is a **required** field for requests.
    pub fn set_label_names<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::LabelNames>,
    {
        self.label_names = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [label_names][crate::model::BatchGetBasicInfoRequest::label_names].
    pub fn set_or_clear_label_names<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::LabelNames>,
    {
        self.label_names = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [BatchGetBasicInfoRequest].
pub mod batch_get_basic_info_request {
    #[allow(unused_imports)]
    use super::*;

    /// The values accepted by the `basicLabelSortBy` parameter.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum BasicLabelSortBy {
        Name,
        Priority,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl BasicLabelSortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::Name => "name",
                Self::Priority => "priority",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for BasicLabelSortBy {
        fn from(value: &str) -> Self {
            match value {
                "name" => Self::Name,
                "priority" => Self::Priority,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for BasicLabelSortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for BasicLabelSortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["name", "priority"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for BasicLabelSortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for BasicLabelSortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::register_lookup][crate::client::LogAnalytics::register_lookup].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RegisterLookupRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The kind of lookup.
    pub r#type: std::option::Option<crate::model::RegisterLookupType>,

    /// Filters by exact name.
    pub name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    /// The character encoding of the uploaded file.
    pub char_encoding: std::option::Option<std::string::String>,

    pub is_hidden: std::option::Option<bool>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// Set to `100-continue` to request preliminary verification before the payload is sent.
    pub expect: std::option::Option<std::string::String>,

    /// The media type of the payload. Defaults to `application/octet-stream`.
    pub content_type: std::option::Option<std::string::String>,

    /// The payload to upload.
    pub body: std::option::Option<bytes::Bytes>,
}

impl RegisterLookupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::RegisterLookupRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [type][crate::model::RegisterLookupRequest::type].
    ///
    /// This is a **required** field for requests.
    pub fn set_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::RegisterLookupType>,
    {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [type][crate::model::RegisterLookupRequest::type].
    pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::RegisterLookupType>,
    {
        self.r#type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::RegisterLookupRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::RegisterLookupRequest::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::RegisterLookupRequest::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::RegisterLookupRequest::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [char_encoding][crate::model::RegisterLookupRequest::char_encoding].
    pub fn set_char_encoding<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.char_encoding = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [char_encoding][crate::model::RegisterLookupRequest::char_encoding].
    pub fn set_or_clear_char_encoding<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.char_encoding = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_hidden][crate::model::RegisterLookupRequest::is_hidden].
    pub fn set_is_hidden<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_hidden = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_hidden][crate::model::RegisterLookupRequest::is_hidden].
    pub fn set_or_clear_is_hidden<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_hidden = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::RegisterLookupRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::RegisterLookupRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::RegisterLookupRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::RegisterLookupRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [expect][crate::model::RegisterLookupRequest::expect].
    pub fn set_expect<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.expect = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [expect][crate::model::RegisterLookupRequest::expect].
    pub fn set_or_clear_expect<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.expect = v.map(|x| x.into());
        self
    }

    /// Sets the value of [content_type][crate::model::RegisterLookupRequest::content_type].
    pub fn set_content_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [content_type][crate::model::RegisterLookupRequest::content_type].
    pub fn set_or_clear_content_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.content_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [body][crate::model::RegisterLookupRequest::body].
    ///
    /// This is a **required** field for requests.
    pub fn set_body<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.body = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [body][crate::model::RegisterLookupRequest::body].
    pub fn set_or_clear_body<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bytes::Bytes>,
    {
        self.body = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::update_lookup][crate::client::LogAnalytics::update_lookup].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateLookupRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the lookup.
    pub lookup_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// The changes to the metadata of a lookup.
    pub update_lookup_metadata_details:
        std::option::Option<crate::model::UpdateLookupMetadataDetails>,
}

impl UpdateLookupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::UpdateLookupRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [lookup_name][crate::model::UpdateLookupRequest::lookup_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_lookup_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.lookup_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::UpdateLookupRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::UpdateLookupRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::UpdateLookupRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::UpdateLookupRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_lookup_metadata_details][crate::model::UpdateLookupRequest::update_lookup_metadata_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_update_lookup_metadata_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::UpdateLookupMetadataDetails>,
    {
        self.update_lookup_metadata_details = std::option::Option::Some(v.into());
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
        self.update_lookup_metadata_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::update_lookup_data][crate::client::LogAnalytics::update_lookup_data].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateLookupDataRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the lookup.
    pub lookup_name: std::string::String,

    /// Apply the change even if it conflicts with the current state.
    pub is_force: std::option::Option<bool>,

    /// The character encoding of the uploaded file.
    pub char_encoding: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// Set to `100-continue` to request preliminary verification before the payload is sent.
    pub expect: std::option::Option<std::string::String>,

    /// The media type of the payload. Defaults to `application/octet-stream`.
    pub content_type: std::option::Option<std::string::String>,

    /// The payload to upload.
    pub body: std::option::Option<bytes::Bytes>,
}

impl UpdateLookupDataRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::UpdateLookupDataRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [lookup_name][crate::model::UpdateLookupDataRequest::lookup_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_lookup_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.lookup_name = v.into();
        self
    }

    /// Sets the value of [is_force][crate::model::UpdateLookupDataRequest::is_force].
    pub fn set_is_force<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_force = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_force][crate::model::UpdateLookupDataRequest::is_force].
    pub fn set_or_clear_is_force<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_force = v.map(|x| x.into());
        self
    }

    /// Sets the value of [char_encoding][crate::model::UpdateLookupDataRequest::char_encoding].
    pub fn set_char_encoding<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.char_encoding = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [char_encoding][crate::model::UpdateLookupDataRequest::char_encoding].
    pub fn set_or_clear_char_encoding<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.char_encoding = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::UpdateLookupDataRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::UpdateLookupDataRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::UpdateLookupDataRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::UpdateLookupDataRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::UpdateLookupDataRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::UpdateLookupDataRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of [expect][crate::model::UpdateLookupDataRequest::expect].
    pub fn set_expect<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.expect = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [expect][crate::model::UpdateLookupDataRequest::expect].
    pub fn set_or_clear_expect<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.expect = v.map(|x| x.into());
        self
    }

    /// Sets the value of [content_type][crate::model::UpdateLookupDataRequest::content_type].
    pub fn set_content_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [content_type][crate::model::UpdateLookupDataRequest::content_type].
    pub fn set_or_clear_content_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.content_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [body][crate::model::UpdateLookupDataRequest::body].
    ///
    /// This is a **required** field for requests.
    pub fn set_body<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.body = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [body][crate::model::UpdateLookupDataRequest::body].
    pub fn set_or_clear_body<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bytes::Bytes>,
    {
        self.body = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::append_lookup_data][crate::client::LogAnalytics::append_lookup_data].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct AppendLookupDataRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the lookup.
    pub lookup_name: std::string::String,

    /// Apply the change even if it conflicts with the current state.
    pub is_force: std::option::Option<bool>,

    /// The character encoding of the uploaded file.
    pub char_encoding: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// Set to `100-continue` to request preliminary verification before the payload is sent.
    pub expect: std::option::Option<std::string::String>,

    /// The media type of the payload. Defaults to `application/octet-stream`.
    pub content_type: std::option::Option<std::string::String>,

    /// The payload to upload.
    pub body: std::option::Option<bytes::Bytes>,
}

impl AppendLookupDataRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::AppendLookupDataRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [lookup_name][crate::model::AppendLookupDataRequest::lookup_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_lookup_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.lookup_name = v.into();
        self
    }

    /// Sets the value of [is_force][crate::model::AppendLookupDataRequest::is_force].
    pub fn set_is_force<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_force = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_force][crate::model::AppendLookupDataRequest::is_force].
    pub fn set_or_clear_is_force<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_force = v.map(|x| x.into());
        self
    }

    /// Sets the value of [char_encoding][crate::model::AppendLookupDataRequest::char_encoding].
    pub fn set_char_encoding<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.char_encoding = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [char_encoding][crate::model::AppendLookupDataRequest::char_encoding].
    pub fn set_or_clear_char_encoding<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.char_encoding = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::AppendLookupDataRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::AppendLookupDataRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::AppendLookupDataRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::AppendLookupDataRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::AppendLookupDataRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::AppendLookupDataRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of [expect][crate::model::AppendLookupDataRequest::expect].
    pub fn set_expect<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.expect = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [expect][crate::model::AppendLookupDataRequest::expect].
    pub fn set_or_clear_expect<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.expect = v.map(|x| x.into());
        self
    }

    /// Sets the value of [content_type][crate::model::AppendLookupDataRequest::content_type].
    pub fn set_content_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [content_type][crate::model::AppendLookupDataRequest::content_type].
    pub fn set_or_clear_content_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.content_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [body][crate::model::AppendLookupDataRequest::body].
    ///
    /// This is a **required** field for requests.
    pub fn set_body<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.body = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [body][crate::model::AppendLookupDataRequest::body].
    pub fn set_or_clear_body<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bytes::Bytes>,
    {
        self.body = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_lookup][crate::client::LogAnalytics::delete_lookup].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteLookupRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the lookup.
    pub lookup_name: std::string::String,

    /// Apply the change even if it conflicts with the current state.
    pub is_force: std::option::Option<bool>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DeleteLookupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::DeleteLookupRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [lookup_name][crate::model::DeleteLookupRequest::lookup_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_lookup_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.lookup_name = v.into();
        self
    }

    /// Sets the value of [is_force][crate::model::DeleteLookupRequest::is_force].
    pub fn set_is_force<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_force = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_force][crate::model::DeleteLookupRequest::is_force].
    pub fn set_or_clear_is_force<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_force = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::DeleteLookupRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::DeleteLookupRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::DeleteLookupRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::DeleteLookupRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_lookup][crate::client::LogAnalytics::get_lookup].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLookupRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the lookup.
    pub lookup_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetLookupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetLookupRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [lookup_name][crate::model::GetLookupRequest::lookup_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_lookup_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.lookup_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetLookupRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetLookupRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_lookups][crate::client::LogAnalytics::list_lookups].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLookupsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The kind of lookup.
    pub r#type: std::option::Option<crate::model::LookupType>,

    pub lookup_display_text: std::option::Option<std::string::String>,

    /// Filters by origin, built-in or custom.
    pub is_system: std::option::Option<crate::model::IsSystemFilter>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_lookups_request::SortBy>,

    pub categories: std::option::Option<std::string::String>,

    pub status: std::option::Option<crate::model::list_lookups_request::Status>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    pub is_hide_special: std::option::Option<bool>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListLookupsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListLookupsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [type][crate::model::ListLookupsRequest::type].
    ///
    /// This is a **required** field for requests.
    pub fn set_type<T: std::convert::Into<crate::model::LookupType>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [type][crate::model::ListLookupsRequest::type].
    pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::LookupType>,
    {
        self.r#type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [lookup_display_text][crate::model::ListLookupsRequest::lookup_display_text].
    pub fn set_lookup_display_text<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.lookup_display_text = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [lookup_display_text][crate::model::ListLookupsRequest::lookup_display_text].
    pub fn set_or_clear_lookup_display_text<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.lookup_display_text = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_system][crate::model::ListLookupsRequest::is_system].
    pub fn set_is_system<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::IsSystemFilter>,
    {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_system][crate::model::ListLookupsRequest::is_system].
    pub fn set_or_clear_is_system<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::IsSystemFilter>,
    {
        self.is_system = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListLookupsRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_lookups_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListLookupsRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_lookups_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [categories][crate::model::ListLookupsRequest::categories].
    pub fn set_categories<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.categories = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [categories][crate::model::ListLookupsRequest::categories].
    pub fn set_or_clear_categories<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.categories = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][crate::model::ListLookupsRequest::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_lookups_request::Status>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::ListLookupsRequest::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_lookups_request::Status>,
    {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListLookupsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListLookupsRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_hide_special][crate::model::ListLookupsRequest::is_hide_special].
    pub fn set_is_hide_special<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_hide_special = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_hide_special][crate::model::ListLookupsRequest::is_hide_special].
    pub fn set_or_clear_is_hide_special<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_hide_special = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListLookupsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListLookupsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListLookupsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListLookupsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListLookupsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListLookupsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListLookupsRequest].
pub mod list_lookups_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        DisplayName,
        Status,
        Type,
        UpdatedTime,
        CreationType,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::DisplayName => "displayName",
                Self::Status => "status",
                Self::Type => "type",
                Self::UpdatedTime => "updatedTime",
                Self::CreationType => "creationType",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "displayName" => Self::DisplayName,
                "status" => Self::Status,
                "type" => Self::Type,
                "updatedTime" => Self::UpdatedTime,
                "creationType" => Self::CreationType,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &[
            "displayName",
            "status",
            "type",
            "updatedTime",
            "creationType",
        ];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }

    /// The values accepted by the `status` parameter.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum Status {
        All,
        Successful,
        Failed,
        Inprogress,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl Status {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::All => "ALL",
                Self::Successful => "SUCCESSFUL",
                Self::Failed => "FAILED",
                Self::Inprogress => "INPROGRESS",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for Status {
        fn from(value: &str) -> Self {
            match value {
                "ALL" => Self::All,
                "SUCCESSFUL" => Self::Successful,
                "FAILED" => Self::Failed,
                "INPROGRESS" => Self::Inprogress,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for Status {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for Status {
        const KNOWN_VALUES: &'static [&'static str] =
            &["ALL", "SUCCESSFUL", "FAILED", "INPROGRESS"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for Status {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Status {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::export_lookup][crate::client::LogAnalytics::export_lookup].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ExportLookupRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the lookup.
    pub lookup_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ExportLookupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ExportLookupRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [lookup_name][crate::model::ExportLookupRequest::lookup_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_lookup_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.lookup_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ExportLookupRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ExportLookupRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_lookup_summary][crate::client::LogAnalytics::get_lookup_summary].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLookupSummaryRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetLookupSummaryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetLookupSummaryRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetLookupSummaryRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetLookupSummaryRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_meta_source_types][crate::client::LogAnalytics::list_meta_source_types].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListMetaSourceTypesRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_meta_source_types_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListMetaSourceTypesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListMetaSourceTypesRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [sort_order][crate::model::ListMetaSourceTypesRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListMetaSourceTypesRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListMetaSourceTypesRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_meta_source_types_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListMetaSourceTypesRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_meta_source_types_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListMetaSourceTypesRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListMetaSourceTypesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListMetaSourceTypesRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListMetaSourceTypesRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListMetaSourceTypesRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListMetaSourceTypesRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListMetaSourceTypesRequest].
pub mod list_meta_source_types_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        Name,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::Name => "name",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "name" => Self::Name,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["name"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::list_parser_functions][crate::client::LogAnalytics::list_parser_functions].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListParserFunctionsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the parser.
    pub parser_name: std::option::Option<std::string::String>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_parser_functions_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListParserFunctionsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListParserFunctionsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [parser_name][crate::model::ListParserFunctionsRequest::parser_name].
    pub fn set_parser_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parser_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [parser_name][crate::model::ListParserFunctionsRequest::parser_name].
    pub fn set_or_clear_parser_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.parser_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListParserFunctionsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListParserFunctionsRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListParserFunctionsRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_parser_functions_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListParserFunctionsRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_parser_functions_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListParserFunctionsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListParserFunctionsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListParserFunctionsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListParserFunctionsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListParserFunctionsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListParserFunctionsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListParserFunctionsRequest].
pub mod list_parser_functions_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        Name,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::Name => "name",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "name" => Self::Name,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["name"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::list_parser_meta_plugins][crate::client::LogAnalytics::list_parser_meta_plugins].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListParserMetaPluginsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_parser_meta_plugins_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListParserMetaPluginsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListParserMetaPluginsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [sort_order][crate::model::ListParserMetaPluginsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListParserMetaPluginsRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListParserMetaPluginsRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_parser_meta_plugins_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListParserMetaPluginsRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_parser_meta_plugins_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListParserMetaPluginsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListParserMetaPluginsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListParserMetaPluginsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListParserMetaPluginsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListParserMetaPluginsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListParserMetaPluginsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListParserMetaPluginsRequest].
pub mod list_parser_meta_plugins_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        Name,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::Name => "name",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "name" => Self::Name,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["name"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::list_supported_char_encodings][crate::client::LogAnalytics::list_supported_char_encodings].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListSupportedCharEncodingsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListSupportedCharEncodingsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListSupportedCharEncodingsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [limit][crate::model::ListSupportedCharEncodingsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListSupportedCharEncodingsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListSupportedCharEncodingsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListSupportedCharEncodingsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListSupportedCharEncodingsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListSupportedCharEncodingsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_supported_timezones][crate::client::LogAnalytics::list_supported_timezones].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListSupportedTimezonesRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListSupportedTimezonesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListSupportedTimezonesRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [limit][crate::model::ListSupportedTimezonesRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListSupportedTimezonesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListSupportedTimezonesRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListSupportedTimezonesRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListSupportedTimezonesRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListSupportedTimezonesRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_source_meta_functions][crate::client::LogAnalytics::list_source_meta_functions].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListSourceMetaFunctionsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_source_meta_functions_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListSourceMetaFunctionsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListSourceMetaFunctionsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [sort_order][crate::model::ListSourceMetaFunctionsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListSourceMetaFunctionsRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListSourceMetaFunctionsRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_source_meta_functions_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListSourceMetaFunctionsRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_source_meta_functions_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListSourceMetaFunctionsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListSourceMetaFunctionsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListSourceMetaFunctionsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListSourceMetaFunctionsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListSourceMetaFunctionsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListSourceMetaFunctionsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListSourceMetaFunctionsRequest].
pub mod list_source_meta_functions_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        Name,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::Name => "name",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "name" => Self::Name,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["name"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::list_source_patterns][crate::client::LogAnalytics::list_source_patterns].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListSourcePatternsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the source.
    pub source_name: std::string::String,

    pub is_include: std::option::Option<bool>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_source_patterns_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListSourcePatternsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListSourcePatternsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [source_name][crate::model::ListSourcePatternsRequest::source_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = v.into();
        self
    }

    /// Sets the value of [is_include][crate::model::ListSourcePatternsRequest::is_include].
    pub fn set_is_include<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_include = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_include][crate::model::ListSourcePatternsRequest::is_include].
    pub fn set_or_clear_is_include<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_include = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListSourcePatternsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListSourcePatternsRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListSourcePatternsRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_source_patterns_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListSourcePatternsRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_source_patterns_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListSourcePatternsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListSourcePatternsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListSourcePatternsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListSourcePatternsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListSourcePatternsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListSourcePatternsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListSourcePatternsRequest].
pub mod list_source_patterns_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        PatternText,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::PatternText => "patternText",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "patternText" => Self::PatternText,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["patternText"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::list_source_label_operators][crate::client::LogAnalytics::list_source_label_operators].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListSourceLabelOperatorsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_source_label_operators_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListSourceLabelOperatorsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListSourceLabelOperatorsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [sort_order][crate::model::ListSourceLabelOperatorsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListSourceLabelOperatorsRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListSourceLabelOperatorsRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_source_label_operators_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListSourceLabelOperatorsRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_source_label_operators_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListSourceLabelOperatorsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListSourceLabelOperatorsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListSourceLabelOperatorsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListSourceLabelOperatorsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListSourceLabelOperatorsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListSourceLabelOperatorsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListSourceLabelOperatorsRequest].
pub mod list_source_label_operators_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        Name,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::Name => "name",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "name" => Self::Name,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["name"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::list_source_extended_field_definitions][crate::client::LogAnalytics::list_source_extended_field_definitions].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListSourceExtendedFieldDefinitionsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the source.
    pub source_name: std::string::String,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by:
        std::option::Option<crate::model::list_source_extended_field_definitions_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListSourceExtendedFieldDefinitionsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListSourceExtendedFieldDefinitionsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [source_name][crate::model::ListSourceExtendedFieldDefinitionsRequest::source_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = v.into();
        self
    }

    /// Sets the value of [sort_order][crate::model::ListSourceExtendedFieldDefinitionsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListSourceExtendedFieldDefinitionsRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListSourceExtendedFieldDefinitionsRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_source_extended_field_definitions_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListSourceExtendedFieldDefinitionsRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_source_extended_field_definitions_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListSourceExtendedFieldDefinitionsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListSourceExtendedFieldDefinitionsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListSourceExtendedFieldDefinitionsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListSourceExtendedFieldDefinitionsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListSourceExtendedFieldDefinitionsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListSourceExtendedFieldDefinitionsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListSourceExtendedFieldDefinitionsRequest].
pub mod list_source_extended_field_definitions_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        BaseFieldName,
        RegularExpression,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::BaseFieldName => "baseFieldName",
                Self::RegularExpression => "regularExpression",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "baseFieldName" => Self::BaseFieldName,
                "regularExpression" => Self::RegularExpression,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["baseFieldName", "regularExpression"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::list_effective_properties][crate::client::LogAnalytics::list_effective_properties].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListEffectivePropertiesRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub agent_id: std::option::Option<std::string::String>,

    /// The name of the source.
    pub source_name: std::option::Option<std::string::String>,

    pub is_include_patterns: std::option::Option<bool>,

    /// The OCID of the entity.
    pub entity_id: std::option::Option<std::string::String>,

    pub pattern_id: std::option::Option<i32>,

    pub pattern_id_long: std::option::Option<i64>,

    /// Filters by exact name.
    pub name: std::option::Option<std::string::String>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_effective_properties_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListEffectivePropertiesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListEffectivePropertiesRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [agent_id][crate::model::ListEffectivePropertiesRequest::agent_id].
    pub fn set_agent_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.agent_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [agent_id][crate::model::ListEffectivePropertiesRequest::agent_id].
    pub fn set_or_clear_agent_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.agent_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_name][crate::model::ListEffectivePropertiesRequest::source_name].
    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_name][crate::model::ListEffectivePropertiesRequest::source_name].
    pub fn set_or_clear_source_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_include_patterns][crate::model::ListEffectivePropertiesRequest::is_include_patterns].
    pub fn set_is_include_patterns<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_include_patterns = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_include_patterns][crate::model::ListEffectivePropertiesRequest::is_include_patterns].
    pub fn set_or_clear_is_include_patterns<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_include_patterns = v.map(|x| x.into());
        self
    }

    /// Sets the value of [entity_id][crate::model::ListEffectivePropertiesRequest::entity_id].
    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [entity_id][crate::model::ListEffectivePropertiesRequest::entity_id].
    pub fn set_or_clear_entity_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.entity_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [pattern_id][crate::model::ListEffectivePropertiesRequest::pattern_id].
    pub fn set_pattern_id<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.pattern_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [pattern_id][crate::model::ListEffectivePropertiesRequest::pattern_id].
    pub fn set_or_clear_pattern_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.pattern_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [pattern_id_long][crate::model::ListEffectivePropertiesRequest::pattern_id_long].
    pub fn set_pattern_id_long<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.pattern_id_long = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [pattern_id_long][crate::model::ListEffectivePropertiesRequest::pattern_id_long].
    pub fn set_or_clear_pattern_id_long<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.pattern_id_long = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::ListEffectivePropertiesRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::ListEffectivePropertiesRequest::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListEffectivePropertiesRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListEffectivePropertiesRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListEffectivePropertiesRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_effective_properties_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListEffectivePropertiesRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_effective_properties_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListEffectivePropertiesRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListEffectivePropertiesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListEffectivePropertiesRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListEffectivePropertiesRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListEffectivePropertiesRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListEffectivePropertiesRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListEffectivePropertiesRequest].
pub mod list_effective_properties_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        Name,
        DisplayName,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::Name => "name",
                Self::DisplayName => "displayName",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "name" => Self::Name,
                "displayName" => Self::DisplayName,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["name", "displayName"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::list_properties_metadata][crate::client::LogAnalytics::list_properties_metadata].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListPropertiesMetadataRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// Filters by exact name.
    pub name: std::option::Option<std::string::String>,

    pub display_text: std::option::Option<std::string::String>,

    pub level: std::option::Option<std::string::String>,

    pub constraints: std::option::Option<std::string::String>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_properties_metadata_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListPropertiesMetadataRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListPropertiesMetadataRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [name][crate::model::ListPropertiesMetadataRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::ListPropertiesMetadataRequest::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [display_text][crate::model::ListPropertiesMetadataRequest::display_text].
    pub fn set_display_text<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_text = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [display_text][crate::model::ListPropertiesMetadataRequest::display_text].
    pub fn set_or_clear_display_text<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.display_text = v.map(|x| x.into());
        self
    }

    /// Sets the value of [level][crate::model::ListPropertiesMetadataRequest::level].
    pub fn set_level<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.level = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [level][crate::model::ListPropertiesMetadataRequest::level].
    pub fn set_or_clear_level<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.level = v.map(|x| x.into());
        self
    }

    /// Sets the value of [constraints][crate::model::ListPropertiesMetadataRequest::constraints].
    pub fn set_constraints<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.constraints = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [constraints][crate::model::ListPropertiesMetadataRequest::constraints].
    pub fn set_or_clear_constraints<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.constraints = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListPropertiesMetadataRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListPropertiesMetadataRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListPropertiesMetadataRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_properties_metadata_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListPropertiesMetadataRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_properties_metadata_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListPropertiesMetadataRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListPropertiesMetadataRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListPropertiesMetadataRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListPropertiesMetadataRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListPropertiesMetadataRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListPropertiesMetadataRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListPropertiesMetadataRequest].
pub mod list_properties_metadata_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        Name,
        DisplayName,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::Name => "name",
                Self::DisplayName => "displayName",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "name" => Self::Name,
                "displayName" => Self::DisplayName,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["name", "displayName"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::list_log_sets][crate::client::LogAnalytics::list_log_sets].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLogSetsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub log_set_name_contains: std::option::Option<std::string::String>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListLogSetsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListLogSetsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [log_set_name_contains][crate::model::ListLogSetsRequest::log_set_name_contains].
    pub fn set_log_set_name_contains<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_set_name_contains = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [log_set_name_contains][crate::model::ListLogSetsRequest::log_set_name_contains].
    pub fn set_or_clear_log_set_name_contains<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_set_name_contains = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListLogSetsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListLogSetsRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListLogSetsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListLogSetsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListLogSetsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListLogSetsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListLogSetsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListLogSetsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_log_sets_count][crate::client::LogAnalytics::get_log_sets_count].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLogSetsCountRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetLogSetsCountRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetLogSetsCountRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetLogSetsCountRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetLogSetsCountRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_parser][crate::client::LogAnalytics::delete_parser].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteParserRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the parser.
    pub parser_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl DeleteParserRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::DeleteParserRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [parser_name][crate::model::DeleteParserRequest::parser_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_parser_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parser_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::DeleteParserRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::DeleteParserRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_parser][crate::client::LogAnalytics::get_parser].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetParserRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the parser.
    pub parser_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetParserRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetParserRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [parser_name][crate::model::GetParserRequest::parser_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_parser_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parser_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetParserRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetParserRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_parsers][crate::client::LogAnalytics::list_parsers].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListParsersRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub is_match_all: std::option::Option<bool>,

    pub source_type: std::option::Option<crate::model::SourceType>,

    /// The name of the parser.
    pub parser_name: std::option::Option<std::string::String>,

    pub parser_display_text: std::option::Option<std::string::String>,

    pub parser_type: std::option::Option<crate::model::list_parsers_request::ParserType>,

    pub categories: std::option::Option<std::string::String>,

    /// Filters by origin, built-in or custom.
    pub is_system: std::option::Option<crate::model::IsSystemFilter>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_parsers_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListParsersRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListParsersRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [is_match_all][crate::model::ListParsersRequest::is_match_all].
    pub fn set_is_match_all<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_match_all = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_match_all][crate::model::ListParsersRequest::is_match_all].
    pub fn set_or_clear_is_match_all<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_match_all = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_type][crate::model::ListParsersRequest::source_type].
    pub fn set_source_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::SourceType>,
    {
        self.source_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_type][crate::model::ListParsersRequest::source_type].
    pub fn set_or_clear_source_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SourceType>,
    {
        self.source_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [parser_name][crate::model::ListParsersRequest::parser_name].
    pub fn set_parser_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parser_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [parser_name][crate::model::ListParsersRequest::parser_name].
    pub fn set_or_clear_parser_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.parser_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [parser_display_text][crate::model::ListParsersRequest::parser_display_text].
    pub fn set_parser_display_text<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.parser_display_text = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [parser_display_text][crate::model::ListParsersRequest::parser_display_text].
    pub fn set_or_clear_parser_display_text<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.parser_display_text = v.map(|x| x.into());
        self
    }

    /// Sets the value of [parser_type][crate::model::ListParsersRequest::parser_type].
    pub fn set_parser_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_parsers_request::ParserType>,
    {
        self.parser_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [parser_type][crate::model::ListParsersRequest::parser_type].
    pub fn set_or_clear_parser_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_parsers_request::ParserType>,
    {
        self.parser_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [categories][crate::model::ListParsersRequest::categories].
    pub fn set_categories<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.categories = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [categories][crate::model::ListParsersRequest::categories].
    pub fn set_or_clear_categories<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.categories = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_system][crate::model::ListParsersRequest::is_system].
    pub fn set_is_system<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::IsSystemFilter>,
    {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_system][crate::model::ListParsersRequest::is_system].
    pub fn set_or_clear_is_system<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::IsSystemFilter>,
    {
        self.is_system = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListParsersRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListParsersRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListParsersRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_parsers_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListParsersRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_parsers_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListParsersRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListParsersRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListParsersRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListParsersRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListParsersRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListParsersRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListParsersRequest].
pub mod list_parsers_request {
    #[allow(unused_imports)]
    use super::*;

    /// The values accepted by the `parserType` parameter.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum ParserType {
        All,
        Regex,
        Xml,
        Json,
        Odl,
        Delimited,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl ParserType {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::All => "ALL",
                Self::Regex => "REGEX",
                Self::Xml => "XML",
                Self::Json => "JSON",
                Self::Odl => "ODL",
                Self::Delimited => "DELIMITED",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for ParserType {
        fn from(value: &str) -> Self {
            match value {
                "ALL" => Self::All,
                "REGEX" => Self::Regex,
                "XML" => Self::Xml,
                "JSON" => Self::Json,
                "ODL" => Self::Odl,
                "DELIMITED" => Self::Delimited,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for ParserType {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for ParserType {
        const KNOWN_VALUES: &'static [&'static str] =
            &["ALL", "REGEX", "XML", "JSON", "ODL", "DELIMITED"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for ParserType {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for ParserType {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        Name,
        Type,
        SourcesCount,
        TimeUpdated,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::Name => "name",
                Self::Type => "type",
                Self::SourcesCount => "sourcesCount",
                Self::TimeUpdated => "timeUpdated",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "name" => Self::Name,
                "type" => Self::Type,
                "sourcesCount" => Self::SourcesCount,
                "timeUpdated" => Self::TimeUpdated,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] =
            &["name", "type", "sourcesCount", "timeUpdated"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::upsert_parser][crate::client::LogAnalytics::upsert_parser].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpsertParserRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// A parser to create or update.
    pub upsert_log_analytics_parser_details:
        std::option::Option<crate::model::UpsertLogAnalyticsParserDetails>,
}

impl UpsertParserRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::UpsertParserRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::UpsertParserRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::UpsertParserRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::UpsertParserRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::UpsertParserRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::UpsertParserRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::UpsertParserRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of [upsert_log_analytics_parser_details][crate::model::UpsertParserRequest::upsert_log_analytics_parser_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_upsert_log_analytics_parser_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::UpsertLogAnalyticsParserDetails>,
    {
        self.upsert_log_analytics_parser_details = std::option::Option::Some(v.into());
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
        self.upsert_log_analytics_parser_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_parser_summary][crate::client::LogAnalytics::get_parser_summary].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetParserSummaryRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetParserSummaryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetParserSummaryRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetParserSummaryRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetParserSummaryRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_preferences][crate::client::LogAnalytics::list_preferences].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListPreferencesRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_preferences_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListPreferencesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListPreferencesRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [sort_order][crate::model::ListPreferencesRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListPreferencesRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListPreferencesRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_preferences_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListPreferencesRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_preferences_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListPreferencesRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListPreferencesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListPreferencesRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListPreferencesRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListPreferencesRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListPreferencesRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListPreferencesRequest].
pub mod list_preferences_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        Name,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::Name => "name",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "name" => Self::Name,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["name"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::update_preferences][crate::client::LogAnalytics::update_preferences].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdatePreferencesRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// A list of preferences to update or remove.
    pub log_analytics_preference_details:
        std::option::Option<crate::model::LogAnalyticsPreferenceDetails>,
}

impl UpdatePreferencesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::UpdatePreferencesRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::UpdatePreferencesRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::UpdatePreferencesRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::UpdatePreferencesRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::UpdatePreferencesRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [log_analytics_preference_details][crate::model::UpdatePreferencesRequest::log_analytics_preference_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_preference_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::LogAnalyticsPreferenceDetails>,
    {
        self.log_analytics_preference_details = std::option::Option::Some(v.into());
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
        self.log_analytics_preference_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::remove_preferences][crate::client::LogAnalytics::remove_preferences].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RemovePreferencesRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// A list of preferences to update or remove.
    pub log_analytics_preference_details:
        std::option::Option<crate::model::LogAnalyticsPreferenceDetails>,
}

impl RemovePreferencesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::RemovePreferencesRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::RemovePreferencesRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::RemovePreferencesRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::RemovePreferencesRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::RemovePreferencesRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [log_analytics_preference_details][crate::model::RemovePreferencesRequest::log_analytics_preference_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_preference_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::LogAnalyticsPreferenceDetails>,
    {
        self.log_analytics_preference_details = std::option::Option::Some(v.into());
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
        self.log_analytics_preference_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::query][crate::client::LogAnalytics::query].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct QueryRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub should_include_total_count: std::option::Option<bool>,

    pub should_include_columns: std::option::Option<bool>,

    pub should_include_fields: std::option::Option<bool>,

    pub output_mode: std::option::Option<crate::model::OutputMode>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// The details of a query.
    pub query_details: std::option::Option<crate::model::QueryDetails>,
}

impl QueryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::QueryRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [should_include_total_count][crate::model::QueryRequest::should_include_total_count].
    pub fn set_should_include_total_count<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.should_include_total_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [should_include_total_count][crate::model::QueryRequest::should_include_total_count].
    pub fn set_or_clear_should_include_total_count<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.should_include_total_count = v.map(|x| x.into());
        self
    }

    /// Sets the value of [should_include_columns][crate::model::QueryRequest::should_include_columns].
    pub fn set_should_include_columns<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.should_include_columns = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [should_include_columns][crate::model::QueryRequest::should_include_columns].
    pub fn set_or_clear_should_include_columns<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.should_include_columns = v.map(|x| x.into());
        self
    }

    /// Sets the value of [should_include_fields][crate::model::QueryRequest::should_include_fields].
    pub fn set_should_include_fields<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.should_include_fields = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [should_include_fields][crate::model::QueryRequest::should_include_fields].
    pub fn set_or_clear_should_include_fields<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.should_include_fields = v.map(|x| x.into());
        self
    }

    /// Sets the value of [output_mode][crate::model::QueryRequest::output_mode].
    pub fn set_output_mode<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::OutputMode>,
    {
        self.output_mode = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [output_mode][crate::model::QueryRequest::output_mode].
    pub fn set_or_clear_output_mode<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::OutputMode>,
    {
        self.output_mode = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::QueryRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::QueryRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::QueryRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::QueryRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::QueryRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::QueryRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::QueryRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::QueryRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [query_details][crate::model::QueryRequest::query_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_query_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::QueryDetails>,
    {
        self.query_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [query_details][crate::model::QueryRequest::query_details].
    pub fn set_or_clear_query_details<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::QueryDetails>,
    {
        self.query_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_query_result][crate::client::LogAnalytics::get_query_result].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetQueryResultRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the work request.
    pub work_request_id: std::string::String,

    pub should_include_columns: std::option::Option<bool>,

    pub should_include_fields: std::option::Option<bool>,

    pub output_mode: std::option::Option<crate::model::OutputMode>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetQueryResultRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetQueryResultRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [work_request_id][crate::model::GetQueryResultRequest::work_request_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_work_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.work_request_id = v.into();
        self
    }

    /// Sets the value of [should_include_columns][crate::model::GetQueryResultRequest::should_include_columns].
    pub fn set_should_include_columns<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.should_include_columns = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [should_include_columns][crate::model::GetQueryResultRequest::should_include_columns].
    pub fn set_or_clear_should_include_columns<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.should_include_columns = v.map(|x| x.into());
        self
    }

    /// Sets the value of [should_include_fields][crate::model::GetQueryResultRequest::should_include_fields].
    pub fn set_should_include_fields<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.should_include_fields = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [should_include_fields][crate::model::GetQueryResultRequest::should_include_fields].
    pub fn set_or_clear_should_include_fields<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.should_include_fields = v.map(|x| x.into());
        self
    }

    /// Sets the value of [output_mode][crate::model::GetQueryResultRequest::output_mode].
    pub fn set_output_mode<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::OutputMode>,
    {
        self.output_mode = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [output_mode][crate::model::GetQueryResultRequest::output_mode].
    pub fn set_or_clear_output_mode<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::OutputMode>,
    {
        self.output_mode = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::GetQueryResultRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::GetQueryResultRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::GetQueryResultRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::GetQueryResultRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetQueryResultRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetQueryResultRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::export_query_result][crate::client::LogAnalytics::export_query_result].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ExportQueryResultRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// The query to export, and the export format.
    pub export_details: std::option::Option<crate::model::ExportDetails>,
}

impl ExportQueryResultRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ExportQueryResultRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ExportQueryResultRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ExportQueryResultRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [export_details][crate::model::ExportQueryResultRequest::export_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_export_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ExportDetails>,
    {
        self.export_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [export_details][crate::model::ExportQueryResultRequest::export_details].
    pub fn set_or_clear_export_details<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ExportDetails>,
    {
        self.export_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::filter][crate::client::LogAnalytics::filter].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct FilterRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A query, and the filters to add to it.
    pub filter_details: std::option::Option<crate::model::FilterDetails>,
}

impl FilterRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::FilterRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::FilterRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::FilterRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [filter_details][crate::model::FilterRequest::filter_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_filter_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::FilterDetails>,
    {
        self.filter_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [filter_details][crate::model::FilterRequest::filter_details].
    pub fn set_or_clear_filter_details<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::FilterDetails>,
    {
        self.filter_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::parse_query][crate::client::LogAnalytics::parse_query].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ParseQueryRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A query to parse.
    pub parse_query_details: std::option::Option<crate::model::ParseQueryDetails>,
}

impl ParseQueryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ParseQueryRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ParseQueryRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ParseQueryRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [parse_query_details][crate::model::ParseQueryRequest::parse_query_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_parse_query_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ParseQueryDetails>,
    {
        self.parse_query_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [parse_query_details][crate::model::ParseQueryRequest::parse_query_details].
    pub fn set_or_clear_parse_query_details<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ParseQueryDetails>,
    {
        self.parse_query_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::suggest][crate::client::LogAnalytics::suggest].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct SuggestRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A partial query to complete.
    pub suggest_details: std::option::Option<crate::model::SuggestDetails>,
}

impl SuggestRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::SuggestRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::SuggestRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::SuggestRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [suggest_details][crate::model::SuggestRequest::suggest_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_suggest_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::SuggestDetails>,
    {
        self.suggest_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [suggest_details][crate::model::SuggestRequest::suggest_details].
    pub fn set_or_clear_suggest_details<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SuggestDetails>,
    {
        self.suggest_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_query_work_request][crate::client::LogAnalytics::get_query_work_request].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetQueryWorkRequestRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the work request.
    pub work_request_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetQueryWorkRequestRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetQueryWorkRequestRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [work_request_id][crate::model::GetQueryWorkRequestRequest::work_request_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_work_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.work_request_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetQueryWorkRequestRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetQueryWorkRequestRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_query_work_request][crate::client::LogAnalytics::delete_query_work_request].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteQueryWorkRequestRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the work request.
    pub work_request_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DeleteQueryWorkRequestRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::DeleteQueryWorkRequestRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [work_request_id][crate::model::DeleteQueryWorkRequestRequest::work_request_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_work_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.work_request_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::DeleteQueryWorkRequestRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::DeleteQueryWorkRequestRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::DeleteQueryWorkRequestRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::DeleteQueryWorkRequestRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_query_work_requests][crate::client::LogAnalytics::list_query_work_requests].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListQueryWorkRequestsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment.
    pub compartment_id: std::string::String,

    pub mode: std::option::Option<crate::model::QueryWorkRequestModeFilter>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_query_work_requests_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListQueryWorkRequestsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListQueryWorkRequestsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [compartment_id][crate::model::ListQueryWorkRequestsRequest::compartment_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [mode][crate::model::ListQueryWorkRequestsRequest::mode].
    pub fn set_mode<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::QueryWorkRequestModeFilter>,
    {
        self.mode = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [mode][crate::model::ListQueryWorkRequestsRequest::mode].
    pub fn set_or_clear_mode<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::QueryWorkRequestModeFilter>,
    {
        self.mode = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListQueryWorkRequestsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListQueryWorkRequestsRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListQueryWorkRequestsRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_query_work_requests_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListQueryWorkRequestsRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_query_work_requests_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListQueryWorkRequestsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListQueryWorkRequestsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListQueryWorkRequestsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListQueryWorkRequestsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListQueryWorkRequestsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListQueryWorkRequestsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListQueryWorkRequestsRequest].
pub mod list_query_work_requests_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        TimeStarted,
        TimeExpires,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::TimeStarted => "timeStarted",
                Self::TimeExpires => "timeExpires",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "timeStarted" => Self::TimeStarted,
                "timeExpires" => Self::TimeExpires,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["timeStarted", "timeExpires"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::create_scheduled_task][crate::client::LogAnalytics::create_scheduled_task].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateScheduledTaskRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// The settings for a new scheduled task.
    pub create_scheduled_task_details:
        std::option::Option<crate::model::CreateScheduledTaskDetails>,
}

impl CreateScheduledTaskRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::CreateScheduledTaskRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::CreateScheduledTaskRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::CreateScheduledTaskRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::CreateScheduledTaskRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::CreateScheduledTaskRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [create_scheduled_task_details][crate::model::CreateScheduledTaskRequest::create_scheduled_task_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_create_scheduled_task_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CreateScheduledTaskDetails>,
    {
        self.create_scheduled_task_details = std::option::Option::Some(v.into());
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
        self.create_scheduled_task_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_scheduled_task][crate::client::LogAnalytics::get_scheduled_task].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetScheduledTaskRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the scheduled task.
    pub scheduled_task_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetScheduledTaskRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetScheduledTaskRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [scheduled_task_id][crate::model::GetScheduledTaskRequest::scheduled_task_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_scheduled_task_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scheduled_task_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetScheduledTaskRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetScheduledTaskRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_scheduled_tasks][crate::client::LogAnalytics::list_scheduled_tasks].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListScheduledTasksRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The kind of scheduled task.
    pub task_type: std::option::Option<crate::model::ScheduledTaskTaskType>,

    /// The OCID of the compartment.
    pub compartment_id: std::string::String,

    /// Filters by exact display name.
    pub display_name: std::option::Option<std::string::String>,

    pub target_service: std::option::Option<std::string::String>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_scheduled_tasks_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListScheduledTasksRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListScheduledTasksRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [task_type][crate::model::ListScheduledTasksRequest::task_type].
    ///
    /// This is a **required** field for requests.
    pub fn set_task_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ScheduledTaskTaskType>,
    {
        self.task_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [task_type][crate::model::ListScheduledTasksRequest::task_type].
    pub fn set_or_clear_task_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ScheduledTaskTaskType>,
    {
        self.task_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [compartment_id][crate::model::ListScheduledTasksRequest::compartment_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::ListScheduledTasksRequest::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [display_name][crate::model::ListScheduledTasksRequest::display_name].
    pub fn set_or_clear_display_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.display_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [target_service][crate::model::ListScheduledTasksRequest::target_service].
    pub fn set_target_service<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.target_service = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [target_service][crate::model::ListScheduledTasksRequest::target_service].
    pub fn set_or_clear_target_service<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_service = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListScheduledTasksRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListScheduledTasksRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListScheduledTasksRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_scheduled_tasks_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListScheduledTasksRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_scheduled_tasks_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListScheduledTasksRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListScheduledTasksRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListScheduledTasksRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListScheduledTasksRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListScheduledTasksRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListScheduledTasksRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListScheduledTasksRequest].
pub mod list_scheduled_tasks_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        TimeCreated,
        TimeUpdated,
        DisplayName,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::TimeCreated => "timeCreated",
                Self::TimeUpdated => "timeUpdated",
                Self::DisplayName => "displayName",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "timeCreated" => Self::TimeCreated,
                "timeUpdated" => Self::TimeUpdated,
                "displayName" => Self::DisplayName,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] =
            &["timeCreated", "timeUpdated", "displayName"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::update_scheduled_task][crate::client::LogAnalytics::update_scheduled_task].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateScheduledTaskRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the scheduled task.
    pub scheduled_task_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// The changes to a scheduled task.
    pub update_scheduled_task_details:
        std::option::Option<crate::model::UpdateScheduledTaskDetails>,
}

impl UpdateScheduledTaskRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::UpdateScheduledTaskRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [scheduled_task_id][crate::model::UpdateScheduledTaskRequest::scheduled_task_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_scheduled_task_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scheduled_task_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::UpdateScheduledTaskRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::UpdateScheduledTaskRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::UpdateScheduledTaskRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::UpdateScheduledTaskRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_scheduled_task_details][crate::model::UpdateScheduledTaskRequest::update_scheduled_task_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_update_scheduled_task_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::UpdateScheduledTaskDetails>,
    {
        self.update_scheduled_task_details = std::option::Option::Some(v.into());
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
        self.update_scheduled_task_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_scheduled_task][crate::client::LogAnalytics::delete_scheduled_task].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteScheduledTaskRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the scheduled task.
    pub scheduled_task_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DeleteScheduledTaskRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::DeleteScheduledTaskRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [scheduled_task_id][crate::model::DeleteScheduledTaskRequest::scheduled_task_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_scheduled_task_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scheduled_task_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::DeleteScheduledTaskRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::DeleteScheduledTaskRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::DeleteScheduledTaskRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::DeleteScheduledTaskRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::pause_scheduled_task][crate::client::LogAnalytics::pause_scheduled_task].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PauseScheduledTaskRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the scheduled task.
    pub scheduled_task_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl PauseScheduledTaskRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::PauseScheduledTaskRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [scheduled_task_id][crate::model::PauseScheduledTaskRequest::scheduled_task_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_scheduled_task_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scheduled_task_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::PauseScheduledTaskRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::PauseScheduledTaskRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::PauseScheduledTaskRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::PauseScheduledTaskRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::PauseScheduledTaskRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::PauseScheduledTaskRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::resume_scheduled_task][crate::client::LogAnalytics::resume_scheduled_task].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ResumeScheduledTaskRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the scheduled task.
    pub scheduled_task_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl ResumeScheduledTaskRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ResumeScheduledTaskRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [scheduled_task_id][crate::model::ResumeScheduledTaskRequest::scheduled_task_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_scheduled_task_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scheduled_task_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ResumeScheduledTaskRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ResumeScheduledTaskRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::ResumeScheduledTaskRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::ResumeScheduledTaskRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::ResumeScheduledTaskRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::ResumeScheduledTaskRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::change_scheduled_task_compartment][crate::client::LogAnalytics::change_scheduled_task_compartment].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ChangeScheduledTaskCompartmentRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the scheduled task.
    pub scheduled_task_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// The compartment to move a scheduled task to.
    pub change_scheduled_task_compartment_details:
        std::option::Option<crate::model::ChangeScheduledTaskCompartmentDetails>,
}

impl ChangeScheduledTaskCompartmentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ChangeScheduledTaskCompartmentRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [scheduled_task_id][crate::model::ChangeScheduledTaskCompartmentRequest::scheduled_task_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_scheduled_task_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scheduled_task_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ChangeScheduledTaskCompartmentRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ChangeScheduledTaskCompartmentRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::ChangeScheduledTaskCompartmentRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::ChangeScheduledTaskCompartmentRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of [change_scheduled_task_compartment_details][crate::model::ChangeScheduledTaskCompartmentRequest::change_scheduled_task_compartment_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_change_scheduled_task_compartment_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ChangeScheduledTaskCompartmentDetails>,
    {
        self.change_scheduled_task_compartment_details = std::option::Option::Some(v.into());
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
        self.change_scheduled_task_compartment_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_source][crate::client::LogAnalytics::delete_source].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteSourceRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the source.
    pub source_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl DeleteSourceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::DeleteSourceRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [source_name][crate::model::DeleteSourceRequest::source_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::DeleteSourceRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::DeleteSourceRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_source][crate::client::LogAnalytics::get_source].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetSourceRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the source.
    pub source_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetSourceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetSourceRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [source_name][crate::model::GetSourceRequest::source_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetSourceRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetSourceRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_sources][crate::client::LogAnalytics::list_sources].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListSourcesRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// Filters by entity type.
    pub entity_type: std::option::Option<std::string::String>,

    pub source_display_text: std::option::Option<std::string::String>,

    /// Filters by origin, built-in or custom.
    pub is_system: std::option::Option<crate::model::IsSystemFilter>,

    pub is_auto_association_enabled: std::option::Option<bool>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_sources_request::SortBy>,

    /// Filters by exact name.
    pub name: std::option::Option<std::string::String>,

    pub categories: std::option::Option<std::string::String>,

    pub is_simplified: std::option::Option<bool>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListSourcesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListSourcesRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [entity_type][crate::model::ListSourcesRequest::entity_type].
    pub fn set_entity_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [entity_type][crate::model::ListSourcesRequest::entity_type].
    pub fn set_or_clear_entity_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.entity_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_display_text][crate::model::ListSourcesRequest::source_display_text].
    pub fn set_source_display_text<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_display_text = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_display_text][crate::model::ListSourcesRequest::source_display_text].
    pub fn set_or_clear_source_display_text<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_display_text = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_system][crate::model::ListSourcesRequest::is_system].
    pub fn set_is_system<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::IsSystemFilter>,
    {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_system][crate::model::ListSourcesRequest::is_system].
    pub fn set_or_clear_is_system<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::IsSystemFilter>,
    {
        self.is_system = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_auto_association_enabled][crate::model::ListSourcesRequest::is_auto_association_enabled].
    pub fn set_is_auto_association_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_auto_association_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_auto_association_enabled][crate::model::ListSourcesRequest::is_auto_association_enabled].
    pub fn set_or_clear_is_auto_association_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_auto_association_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListSourcesRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListSourcesRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListSourcesRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_sources_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListSourcesRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_sources_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::ListSourcesRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::ListSourcesRequest::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [categories][crate::model::ListSourcesRequest::categories].
    pub fn set_categories<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.categories = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [categories][crate::model::ListSourcesRequest::categories].
    pub fn set_or_clear_categories<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.categories = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_simplified][crate::model::ListSourcesRequest::is_simplified].
    pub fn set_is_simplified<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_simplified = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_simplified][crate::model::ListSourcesRequest::is_simplified].
    pub fn set_or_clear_is_simplified<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_simplified = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListSourcesRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListSourcesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListSourcesRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListSourcesRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListSourcesRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListSourcesRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListSourcesRequest].
pub mod list_sources_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        Name,
        TimeUpdated,
        AssociationCount,
        SourceType,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::Name => "name",
                Self::TimeUpdated => "timeUpdated",
                Self::AssociationCount => "associationCount",
                Self::SourceType => "sourceType",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "name" => Self::Name,
                "timeUpdated" => Self::TimeUpdated,
                "associationCount" => Self::AssociationCount,
                "sourceType" => Self::SourceType,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] =
            &["name", "timeUpdated", "associationCount", "sourceType"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::upsert_source][crate::client::LogAnalytics::upsert_source].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpsertSourceRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub create_like_source_id: std::option::Option<i64>,

    pub is_incremental: std::option::Option<bool>,

    pub is_ignore_warning: std::option::Option<bool>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// A log source to create or update.
    pub upsert_log_analytics_source_details:
        std::option::Option<crate::model::UpsertLogAnalyticsSourceDetails>,
}

impl UpsertSourceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::UpsertSourceRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [create_like_source_id][crate::model::UpsertSourceRequest::create_like_source_id].
    pub fn set_create_like_source_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.create_like_source_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [create_like_source_id][crate::model::UpsertSourceRequest::create_like_source_id].
    pub fn set_or_clear_create_like_source_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.create_like_source_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_incremental][crate::model::UpsertSourceRequest::is_incremental].
    pub fn set_is_incremental<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_incremental = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_incremental][crate::model::UpsertSourceRequest::is_incremental].
    pub fn set_or_clear_is_incremental<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_incremental = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_ignore_warning][crate::model::UpsertSourceRequest::is_ignore_warning].
    pub fn set_is_ignore_warning<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_ignore_warning = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_ignore_warning][crate::model::UpsertSourceRequest::is_ignore_warning].
    pub fn set_or_clear_is_ignore_warning<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_ignore_warning = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::UpsertSourceRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::UpsertSourceRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::UpsertSourceRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::UpsertSourceRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::UpsertSourceRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::UpsertSourceRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of [upsert_log_analytics_source_details][crate::model::UpsertSourceRequest::upsert_log_analytics_source_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_upsert_log_analytics_source_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::UpsertLogAnalyticsSourceDetails>,
    {
        self.upsert_log_analytics_source_details = std::option::Option::Some(v.into());
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
        self.upsert_log_analytics_source_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::validate_source][crate::client::LogAnalytics::validate_source].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ValidateSourceRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// A log source to create or update.
    pub upsert_log_analytics_source_details:
        std::option::Option<crate::model::UpsertLogAnalyticsSourceDetails>,
}

impl ValidateSourceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ValidateSourceRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ValidateSourceRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ValidateSourceRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::ValidateSourceRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::ValidateSourceRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [upsert_log_analytics_source_details][crate::model::ValidateSourceRequest::upsert_log_analytics_source_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_upsert_log_analytics_source_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::UpsertLogAnalyticsSourceDetails>,
    {
        self.upsert_log_analytics_source_details = std::option::Option::Some(v.into());
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
        self.upsert_log_analytics_source_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::validate_source_extended_field_details][crate::client::LogAnalytics::validate_source_extended_field_details].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ValidateSourceExtendedFieldDetailsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// A log source, describing how to collect and parse a log.
    pub log_analytics_source: std::option::Option<crate::model::LogAnalyticsSource>,
}

impl ValidateSourceExtendedFieldDetailsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ValidateSourceExtendedFieldDetailsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ValidateSourceExtendedFieldDetailsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ValidateSourceExtendedFieldDetailsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::ValidateSourceExtendedFieldDetailsRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::ValidateSourceExtendedFieldDetailsRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [log_analytics_source][crate::model::ValidateSourceExtendedFieldDetailsRequest::log_analytics_source].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_analytics_source<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::LogAnalyticsSource>,
    {
        self.log_analytics_source = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [log_analytics_source][crate::model::ValidateSourceExtendedFieldDetailsRequest::log_analytics_source].
    pub fn set_or_clear_log_analytics_source<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::LogAnalyticsSource>,
    {
        self.log_analytics_source = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::enable_auto_association][crate::client::LogAnalytics::enable_auto_association].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct EnableAutoAssociationRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the source.
    pub source_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// The settings to enable auto association.
    pub enable_auto_association_details:
        std::option::Option<crate::model::EnableAutoAssociationDetails>,
}

impl EnableAutoAssociationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::EnableAutoAssociationRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [source_name][crate::model::EnableAutoAssociationRequest::source_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::EnableAutoAssociationRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::EnableAutoAssociationRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::EnableAutoAssociationRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::EnableAutoAssociationRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enable_auto_association_details][crate::model::EnableAutoAssociationRequest::enable_auto_association_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_enable_auto_association_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::EnableAutoAssociationDetails>,
    {
        self.enable_auto_association_details = std::option::Option::Some(v.into());
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
        self.enable_auto_association_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::disable_auto_association][crate::client::LogAnalytics::disable_auto_association].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DisableAutoAssociationRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the source.
    pub source_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// The settings to disable auto association.
    pub disable_auto_association_details:
        std::option::Option<crate::model::DisableAutoAssociationDetails>,
}

impl DisableAutoAssociationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::DisableAutoAssociationRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [source_name][crate::model::DisableAutoAssociationRequest::source_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::DisableAutoAssociationRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::DisableAutoAssociationRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::DisableAutoAssociationRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::DisableAutoAssociationRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disable_auto_association_details][crate::model::DisableAutoAssociationRequest::disable_auto_association_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_disable_auto_association_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DisableAutoAssociationDetails>,
    {
        self.disable_auto_association_details = std::option::Option::Some(v.into());
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
        self.disable_auto_association_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_auto_associations][crate::client::LogAnalytics::list_auto_associations].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListAutoAssociationsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the source.
    pub source_name: std::string::String,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_auto_associations_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListAutoAssociationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListAutoAssociationsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [source_name][crate::model::ListAutoAssociationsRequest::source_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = v.into();
        self
    }

    /// Sets the value of [sort_order][crate::model::ListAutoAssociationsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListAutoAssociationsRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListAutoAssociationsRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_auto_associations_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListAutoAssociationsRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_auto_associations_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListAutoAssociationsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListAutoAssociationsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListAutoAssociationsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListAutoAssociationsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListAutoAssociationsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListAutoAssociationsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListAutoAssociationsRequest].
pub mod list_auto_associations_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        TimeUpdated,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::TimeUpdated => "timeUpdated",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "timeUpdated" => Self::TimeUpdated,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["timeUpdated"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::suppress_warning][crate::client::LogAnalytics::suppress_warning].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct SuppressWarningRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment.
    pub compartment_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// The warnings to suppress or unsuppress.
    pub warning_reference_details: std::option::Option<crate::model::WarningReferenceDetails>,
}

impl SuppressWarningRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::SuppressWarningRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [compartment_id][crate::model::SuppressWarningRequest::compartment_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::SuppressWarningRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::SuppressWarningRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [warning_reference_details][crate::model::SuppressWarningRequest::warning_reference_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_warning_reference_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::WarningReferenceDetails>,
    {
        self.warning_reference_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning_reference_details][crate::model::SuppressWarningRequest::warning_reference_details].
    pub fn set_or_clear_warning_reference_details<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::WarningReferenceDetails>,
    {
        self.warning_reference_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::unsuppress_warning][crate::client::LogAnalytics::unsuppress_warning].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UnsuppressWarningRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment.
    pub compartment_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// The warnings to suppress or unsuppress.
    pub warning_reference_details: std::option::Option<crate::model::WarningReferenceDetails>,
}

impl UnsuppressWarningRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::UnsuppressWarningRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [compartment_id][crate::model::UnsuppressWarningRequest::compartment_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::UnsuppressWarningRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::UnsuppressWarningRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [warning_reference_details][crate::model::UnsuppressWarningRequest::warning_reference_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_warning_reference_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::WarningReferenceDetails>,
    {
        self.warning_reference_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning_reference_details][crate::model::UnsuppressWarningRequest::warning_reference_details].
    pub fn set_or_clear_warning_reference_details<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::WarningReferenceDetails>,
    {
        self.warning_reference_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_warnings][crate::client::LogAnalytics::list_warnings].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListWarningsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment.
    pub compartment_id: std::string::String,

    pub warning_state: std::option::Option<crate::model::WarningStateFilter>,

    /// The name of the source.
    pub source_name: std::option::Option<std::string::String>,

    pub source_pattern: std::option::Option<std::string::String>,

    pub warning_message: std::option::Option<std::string::String>,

    pub entity_name: std::option::Option<std::string::String>,

    /// Filters by entity type.
    pub entity_type: std::option::Option<std::string::String>,

    pub warning_type: std::option::Option<std::string::String>,

    pub is_no_source: std::option::Option<bool>,

    pub start_time: std::option::Option<std::string::String>,

    pub end_time: std::option::Option<std::string::String>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_warnings_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListWarningsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListWarningsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [compartment_id][crate::model::ListWarningsRequest::compartment_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [warning_state][crate::model::ListWarningsRequest::warning_state].
    pub fn set_warning_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::WarningStateFilter>,
    {
        self.warning_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning_state][crate::model::ListWarningsRequest::warning_state].
    pub fn set_or_clear_warning_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::WarningStateFilter>,
    {
        self.warning_state = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_name][crate::model::ListWarningsRequest::source_name].
    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_name][crate::model::ListWarningsRequest::source_name].
    pub fn set_or_clear_source_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_pattern][crate::model::ListWarningsRequest::source_pattern].
    pub fn set_source_pattern<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_pattern = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_pattern][crate::model::ListWarningsRequest::source_pattern].
    pub fn set_or_clear_source_pattern<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_pattern = v.map(|x| x.into());
        self
    }

    /// Sets the value of [warning_message][crate::model::ListWarningsRequest::warning_message].
    pub fn set_warning_message<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.warning_message = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning_message][crate::model::ListWarningsRequest::warning_message].
    pub fn set_or_clear_warning_message<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.warning_message = v.map(|x| x.into());
        self
    }

    /// Sets the value of [entity_name][crate::model::ListWarningsRequest::entity_name].
    pub fn set_entity_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [entity_name][crate::model::ListWarningsRequest::entity_name].
    pub fn set_or_clear_entity_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.entity_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [entity_type][crate::model::ListWarningsRequest::entity_type].
    pub fn set_entity_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [entity_type][crate::model::ListWarningsRequest::entity_type].
    pub fn set_or_clear_entity_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.entity_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [warning_type][crate::model::ListWarningsRequest::warning_type].
    pub fn set_warning_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.warning_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warning_type][crate::model::ListWarningsRequest::warning_type].
    pub fn set_or_clear_warning_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.warning_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_no_source][crate::model::ListWarningsRequest::is_no_source].
    pub fn set_is_no_source<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_no_source = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_no_source][crate::model::ListWarningsRequest::is_no_source].
    pub fn set_or_clear_is_no_source<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_no_source = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start_time][crate::model::ListWarningsRequest::start_time].
    pub fn set_start_time<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.start_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start_time][crate::model::ListWarningsRequest::start_time].
    pub fn set_or_clear_start_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [end_time][crate::model::ListWarningsRequest::end_time].
    pub fn set_end_time<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.end_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [end_time][crate::model::ListWarningsRequest::end_time].
    pub fn set_or_clear_end_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.end_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListWarningsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListWarningsRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListWarningsRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_warnings_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListWarningsRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_warnings_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListWarningsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListWarningsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListWarningsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListWarningsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListWarningsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListWarningsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListWarningsRequest].
pub mod list_warnings_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        EntityType,
        SourceName,
        PatternText,
        FirstReported,
        WarningMessage,
        Host,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::EntityType => "EntityType",
                Self::SourceName => "SourceName",
                Self::PatternText => "PatternText",
                Self::FirstReported => "FirstReported",
                Self::WarningMessage => "WarningMessage",
                Self::Host => "Host",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "EntityType" => Self::EntityType,
                "SourceName" => Self::SourceName,
                "PatternText" => Self::PatternText,
                "FirstReported" => Self::FirstReported,
                "WarningMessage" => Self::WarningMessage,
                "Host" => Self::Host,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &[
            "EntityType",
            "SourceName",
            "PatternText",
            "FirstReported",
            "WarningMessage",
            "Host",
        ];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::get_storage][crate::client::LogAnalytics::get_storage].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetStorageRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetStorageRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetStorageRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetStorageRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetStorageRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::update_storage][crate::client::LogAnalytics::update_storage].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateStorageRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// The changes to the storage settings.
    pub update_storage_details: std::option::Option<crate::model::UpdateStorageDetails>,
}

impl UpdateStorageRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::UpdateStorageRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::UpdateStorageRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::UpdateStorageRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::UpdateStorageRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::UpdateStorageRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_storage_details][crate::model::UpdateStorageRequest::update_storage_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_update_storage_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::UpdateStorageDetails>,
    {
        self.update_storage_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_storage_details][crate::model::UpdateStorageRequest::update_storage_details].
    pub fn set_or_clear_update_storage_details<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::UpdateStorageDetails>,
    {
        self.update_storage_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_storage_usage][crate::client::LogAnalytics::get_storage_usage].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetStorageUsageRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetStorageUsageRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetStorageUsageRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetStorageUsageRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetStorageUsageRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::estimate_purge_data_size][crate::client::LogAnalytics::estimate_purge_data_size].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct EstimatePurgeDataSizeRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// The data to estimate a purge for.
    pub estimate_purge_data_size_details:
        std::option::Option<crate::model::EstimatePurgeDataSizeDetails>,
}

impl EstimatePurgeDataSizeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::EstimatePurgeDataSizeRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::EstimatePurgeDataSizeRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::EstimatePurgeDataSizeRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::EstimatePurgeDataSizeRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::EstimatePurgeDataSizeRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [estimate_purge_data_size_details][crate::model::EstimatePurgeDataSizeRequest::estimate_purge_data_size_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_estimate_purge_data_size_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::EstimatePurgeDataSizeDetails>,
    {
        self.estimate_purge_data_size_details = std::option::Option::Some(v.into());
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
        self.estimate_purge_data_size_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::estimate_recall_data_size][crate::client::LogAnalytics::estimate_recall_data_size].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct EstimateRecallDataSizeRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// The data to estimate a recall for.
    pub estimate_recall_data_size_details:
        std::option::Option<crate::model::EstimateRecallDataSizeDetails>,
}

impl EstimateRecallDataSizeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::EstimateRecallDataSizeRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::EstimateRecallDataSizeRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::EstimateRecallDataSizeRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::EstimateRecallDataSizeRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::EstimateRecallDataSizeRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [estimate_recall_data_size_details][crate::model::EstimateRecallDataSizeRequest::estimate_recall_data_size_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_estimate_recall_data_size_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::EstimateRecallDataSizeDetails>,
    {
        self.estimate_recall_data_size_details = std::option::Option::Some(v.into());
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
        self.estimate_recall_data_size_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::estimate_release_data_size][crate::client::LogAnalytics::estimate_release_data_size].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct EstimateReleaseDataSizeRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// The data to estimate a release for.
    pub estimate_release_data_size_details:
        std::option::Option<crate::model::EstimateReleaseDataSizeDetails>,
}

impl EstimateReleaseDataSizeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::EstimateReleaseDataSizeRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::EstimateReleaseDataSizeRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::EstimateReleaseDataSizeRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::EstimateReleaseDataSizeRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::EstimateReleaseDataSizeRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [estimate_release_data_size_details][crate::model::EstimateReleaseDataSizeRequest::estimate_release_data_size_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_estimate_release_data_size_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::EstimateReleaseDataSizeDetails>,
    {
        self.estimate_release_data_size_details = std::option::Option::Some(v.into());
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
        self.estimate_release_data_size_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::purge_storage_data][crate::client::LogAnalytics::purge_storage_data].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PurgeStorageDataRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// The data to purge.
    pub purge_storage_data_details: std::option::Option<crate::model::PurgeStorageDataDetails>,
}

impl PurgeStorageDataRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::PurgeStorageDataRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::PurgeStorageDataRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::PurgeStorageDataRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::PurgeStorageDataRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::PurgeStorageDataRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [purge_storage_data_details][crate::model::PurgeStorageDataRequest::purge_storage_data_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_purge_storage_data_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::PurgeStorageDataDetails>,
    {
        self.purge_storage_data_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [purge_storage_data_details][crate::model::PurgeStorageDataRequest::purge_storage_data_details].
    pub fn set_or_clear_purge_storage_data_details<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::PurgeStorageDataDetails>,
    {
        self.purge_storage_data_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::recall_archived_data][crate::client::LogAnalytics::recall_archived_data].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RecallArchivedDataRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// The archived data to recall.
    pub recall_archived_data_details: std::option::Option<crate::model::RecallArchivedDataDetails>,
}

impl RecallArchivedDataRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::RecallArchivedDataRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::RecallArchivedDataRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::RecallArchivedDataRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::RecallArchivedDataRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::RecallArchivedDataRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [recall_archived_data_details][crate::model::RecallArchivedDataRequest::recall_archived_data_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_recall_archived_data_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::RecallArchivedDataDetails>,
    {
        self.recall_archived_data_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [recall_archived_data_details][crate::model::RecallArchivedDataRequest::recall_archived_data_details].
    pub fn set_or_clear_recall_archived_data_details<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::RecallArchivedDataDetails>,
    {
        self.recall_archived_data_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::release_recalled_data][crate::client::LogAnalytics::release_recalled_data].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ReleaseRecalledDataRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// The recalled data to release.
    pub release_recalled_data_details:
        std::option::Option<crate::model::ReleaseRecalledDataDetails>,
}

impl ReleaseRecalledDataRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ReleaseRecalledDataRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ReleaseRecalledDataRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ReleaseRecalledDataRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::ReleaseRecalledDataRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::ReleaseRecalledDataRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [release_recalled_data_details][crate::model::ReleaseRecalledDataRequest::release_recalled_data_details].
    ///
    /// This is a **required** field for requests.
    pub fn set_release_recalled_data_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ReleaseRecalledDataDetails>,
    {
        self.release_recalled_data_details = std::option::Option::Some(v.into());
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
        self.release_recalled_data_details = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_storage_work_request][crate::client::LogAnalytics::get_storage_work_request].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetStorageWorkRequestRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the work request.
    pub work_request_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetStorageWorkRequestRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetStorageWorkRequestRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [work_request_id][crate::model::GetStorageWorkRequestRequest::work_request_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_work_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.work_request_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetStorageWorkRequestRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetStorageWorkRequestRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_storage_work_requests][crate::client::LogAnalytics::list_storage_work_requests].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListStorageWorkRequestsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment.
    pub compartment_id: std::string::String,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_storage_work_requests_request::SortBy>,

    pub operation_type: std::option::Option<crate::model::StorageOperationType>,

    pub status: std::option::Option<crate::model::OperationStatus>,

    pub time_started_greater_than_or_equal: std::option::Option<time::OffsetDateTime>,

    pub time_finished_less_than_or_equal: std::option::Option<time::OffsetDateTime>,

    pub policy_name: std::option::Option<std::string::String>,

    pub policy_id: std::option::Option<std::string::String>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListStorageWorkRequestsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListStorageWorkRequestsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [compartment_id][crate::model::ListStorageWorkRequestsRequest::compartment_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [sort_order][crate::model::ListStorageWorkRequestsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListStorageWorkRequestsRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListStorageWorkRequestsRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_storage_work_requests_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListStorageWorkRequestsRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_storage_work_requests_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [operation_type][crate::model::ListStorageWorkRequestsRequest::operation_type].
    pub fn set_operation_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::StorageOperationType>,
    {
        self.operation_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [operation_type][crate::model::ListStorageWorkRequestsRequest::operation_type].
    pub fn set_or_clear_operation_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::StorageOperationType>,
    {
        self.operation_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][crate::model::ListStorageWorkRequestsRequest::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::OperationStatus>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::ListStorageWorkRequestsRequest::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::OperationStatus>,
    {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [time_started_greater_than_or_equal][crate::model::ListStorageWorkRequestsRequest::time_started_greater_than_or_equal].
    pub fn set_time_started_greater_than_or_equal<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_started_greater_than_or_equal = std::option::Option::Some(v.into());
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
        self.time_started_greater_than_or_equal = v.map(|x| x.into());
        self
    }

    /// Sets the value of [time_finished_less_than_or_equal][crate::model::ListStorageWorkRequestsRequest::time_finished_less_than_or_equal].
    pub fn set_time_finished_less_than_or_equal<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_finished_less_than_or_equal = std::option::Option::Some(v.into());
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
        self.time_finished_less_than_or_equal = v.map(|x| x.into());
        self
    }

    /// Sets the value of [policy_name][crate::model::ListStorageWorkRequestsRequest::policy_name].
    pub fn set_policy_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [policy_name][crate::model::ListStorageWorkRequestsRequest::policy_name].
    pub fn set_or_clear_policy_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.policy_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [policy_id][crate::model::ListStorageWorkRequestsRequest::policy_id].
    pub fn set_policy_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [policy_id][crate::model::ListStorageWorkRequestsRequest::policy_id].
    pub fn set_or_clear_policy_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.policy_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListStorageWorkRequestsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListStorageWorkRequestsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListStorageWorkRequestsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListStorageWorkRequestsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListStorageWorkRequestsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListStorageWorkRequestsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListStorageWorkRequestsRequest].
pub mod list_storage_work_requests_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        TimeAccepted,
        TimeExpires,
        TimeFinished,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::TimeAccepted => "timeAccepted",
                Self::TimeExpires => "timeExpires",
                Self::TimeFinished => "timeFinished",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "timeAccepted" => Self::TimeAccepted,
                "timeExpires" => Self::TimeExpires,
                "timeFinished" => Self::TimeFinished,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] =
            &["timeAccepted", "timeExpires", "timeFinished"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::list_storage_work_request_errors][crate::client::LogAnalytics::list_storage_work_request_errors].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListStorageWorkRequestErrorsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the work request.
    pub work_request_id: std::string::String,

    /// The OCID of the compartment.
    pub compartment_id: std::string::String,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by:
        std::option::Option<crate::model::list_storage_work_request_errors_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListStorageWorkRequestErrorsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListStorageWorkRequestErrorsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [work_request_id][crate::model::ListStorageWorkRequestErrorsRequest::work_request_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_work_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.work_request_id = v.into();
        self
    }

    /// Sets the value of [compartment_id][crate::model::ListStorageWorkRequestErrorsRequest::compartment_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [sort_order][crate::model::ListStorageWorkRequestErrorsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListStorageWorkRequestErrorsRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListStorageWorkRequestErrorsRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_storage_work_request_errors_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListStorageWorkRequestErrorsRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_storage_work_request_errors_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListStorageWorkRequestErrorsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListStorageWorkRequestErrorsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListStorageWorkRequestErrorsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListStorageWorkRequestErrorsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListStorageWorkRequestErrorsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListStorageWorkRequestErrorsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListStorageWorkRequestErrorsRequest].
pub mod list_storage_work_request_errors_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        TimeCreated,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::TimeCreated => "timeCreated",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "timeCreated" => Self::TimeCreated,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["timeCreated"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::get_recall_count][crate::client::LogAnalytics::get_recall_count].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetRecallCountRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetRecallCountRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetRecallCountRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetRecallCountRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetRecallCountRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_recalled_data_size][crate::client::LogAnalytics::get_recalled_data_size].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetRecalledDataSizeRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The start of the time range, inclusive.
    pub time_data_started: std::option::Option<time::OffsetDateTime>,

    /// The end of the time range, exclusive.
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetRecalledDataSizeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetRecalledDataSizeRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [time_data_started][crate::model::GetRecalledDataSizeRequest::time_data_started].
    pub fn set_time_data_started<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_started = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [time_data_started][crate::model::GetRecalledDataSizeRequest::time_data_started].
    pub fn set_or_clear_time_data_started<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_started = v.map(|x| x.into());
        self
    }

    /// Sets the value of [time_data_ended][crate::model::GetRecalledDataSizeRequest::time_data_ended].
    pub fn set_time_data_ended<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [time_data_ended][crate::model::GetRecalledDataSizeRequest::time_data_ended].
    pub fn set_or_clear_time_data_ended<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_ended = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetRecalledDataSizeRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetRecalledDataSizeRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_recalled_data][crate::client::LogAnalytics::list_recalled_data].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListRecalledDataRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_recalled_data_request::SortBy>,

    pub time_data_started_greater_than_or_equal: std::option::Option<time::OffsetDateTime>,

    pub time_data_ended_less_than: std::option::Option<time::OffsetDateTime>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListRecalledDataRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListRecalledDataRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [sort_order][crate::model::ListRecalledDataRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListRecalledDataRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListRecalledDataRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_recalled_data_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListRecalledDataRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_recalled_data_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [time_data_started_greater_than_or_equal][crate::model::ListRecalledDataRequest::time_data_started_greater_than_or_equal].
    pub fn set_time_data_started_greater_than_or_equal<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_started_greater_than_or_equal = std::option::Option::Some(v.into());
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
        self.time_data_started_greater_than_or_equal = v.map(|x| x.into());
        self
    }

    /// Sets the value of [time_data_ended_less_than][crate::model::ListRecalledDataRequest::time_data_ended_less_than].
    pub fn set_time_data_ended_less_than<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_ended_less_than = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [time_data_ended_less_than][crate::model::ListRecalledDataRequest::time_data_ended_less_than].
    pub fn set_or_clear_time_data_ended_less_than<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_ended_less_than = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListRecalledDataRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListRecalledDataRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListRecalledDataRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListRecalledDataRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListRecalledDataRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListRecalledDataRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListRecalledDataRequest].
pub mod list_recalled_data_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        TimeStarted,
        TimeDataStarted,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::TimeStarted => "timeStarted",
                Self::TimeDataStarted => "timeDataStarted",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "timeStarted" => Self::TimeStarted,
                "timeDataStarted" => Self::TimeDataStarted,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["timeStarted", "timeDataStarted"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::list_overlapping_recalls][crate::client::LogAnalytics::list_overlapping_recalls].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListOverlappingRecallsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_overlapping_recalls_request::SortBy>,

    /// The start of the time range, inclusive.
    pub time_data_started: std::option::Option<time::OffsetDateTime>,

    /// The end of the time range, exclusive.
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListOverlappingRecallsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListOverlappingRecallsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [sort_order][crate::model::ListOverlappingRecallsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListOverlappingRecallsRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListOverlappingRecallsRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_overlapping_recalls_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListOverlappingRecallsRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_overlapping_recalls_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [time_data_started][crate::model::ListOverlappingRecallsRequest::time_data_started].
    pub fn set_time_data_started<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_started = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [time_data_started][crate::model::ListOverlappingRecallsRequest::time_data_started].
    pub fn set_or_clear_time_data_started<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_started = v.map(|x| x.into());
        self
    }

    /// Sets the value of [time_data_ended][crate::model::ListOverlappingRecallsRequest::time_data_ended].
    pub fn set_time_data_ended<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [time_data_ended][crate::model::ListOverlappingRecallsRequest::time_data_ended].
    pub fn set_or_clear_time_data_ended<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<time::OffsetDateTime>,
    {
        self.time_data_ended = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListOverlappingRecallsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListOverlappingRecallsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListOverlappingRecallsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListOverlappingRecallsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListOverlappingRecallsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListOverlappingRecallsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListOverlappingRecallsRequest].
pub mod list_overlapping_recalls_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        TimeStarted,
        TimeDataStarted,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::TimeStarted => "timeStarted",
                Self::TimeDataStarted => "timeDataStarted",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "timeStarted" => Self::TimeStarted,
                "timeDataStarted" => Self::TimeDataStarted,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["timeStarted", "timeDataStarted"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::set_unprocessed_data_bucket][crate::client::LogAnalytics::set_unprocessed_data_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct SetUnprocessedDataBucketRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the Object Storage bucket.
    pub bucket_name: std::string::String,

    /// Enable or disable the setting.
    pub is_enabled: std::option::Option<bool>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,
}

impl SetUnprocessedDataBucketRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::SetUnprocessedDataBucketRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [bucket_name][crate::model::SetUnprocessedDataBucketRequest::bucket_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_bucket_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.bucket_name = v.into();
        self
    }

    /// Sets the value of [is_enabled][crate::model::SetUnprocessedDataBucketRequest::is_enabled].
    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_enabled][crate::model::SetUnprocessedDataBucketRequest::is_enabled].
    pub fn set_or_clear_is_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::SetUnprocessedDataBucketRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::SetUnprocessedDataBucketRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::SetUnprocessedDataBucketRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::SetUnprocessedDataBucketRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_unprocessed_data_bucket][crate::client::LogAnalytics::get_unprocessed_data_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetUnprocessedDataBucketRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetUnprocessedDataBucketRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetUnprocessedDataBucketRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetUnprocessedDataBucketRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetUnprocessedDataBucketRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::enable_archiving][crate::client::LogAnalytics::enable_archiving].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct EnableArchivingRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl EnableArchivingRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::EnableArchivingRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::EnableArchivingRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::EnableArchivingRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::EnableArchivingRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::EnableArchivingRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::EnableArchivingRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::EnableArchivingRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::disable_archiving][crate::client::LogAnalytics::disable_archiving].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DisableArchivingRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DisableArchivingRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::DisableArchivingRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::DisableArchivingRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::DisableArchivingRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::DisableArchivingRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::DisableArchivingRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::DisableArchivingRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::DisableArchivingRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::upload_log_file][crate::client::LogAnalytics::upload_log_file].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UploadLogFileRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The name of the upload, files uploaded with the same name are grouped together.
    pub upload_name: std::string::String,

    /// The name of the source used to parse the file.
    pub log_source_name: std::string::String,

    /// The name of the file.
    pub filename: std::string::String,

    /// The OCID of the entity.
    pub entity_id: std::option::Option<std::string::String>,

    /// The timezone used for log records without one.
    pub timezone: std::option::Option<std::string::String>,

    /// The character encoding of the uploaded file.
    pub char_encoding: std::option::Option<std::string::String>,

    /// The date format of the log records, used when the source cannot detect it.
    pub date_format: std::option::Option<std::string::String>,

    /// The year of the log records, for timestamps without one.
    pub date_year: std::option::Option<std::string::String>,

    /// Discard cached data for the upload before processing the file.
    pub invalidate_cache: std::option::Option<bool>,

    /// The log set of the uploaded data.
    pub log_set: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// The OCID of the log group receiving the uploaded data.
    pub opc_meta_loggrpid: std::string::String,

    /// The base-64 encoded MD5 hash of the payload, used for an integrity check.
    pub content_md5: std::option::Option<std::string::String>,

    /// Set to `100-continue` to request preliminary verification before the payload is sent.
    pub expect: std::option::Option<std::string::String>,

    /// Metadata applied to the uploaded data, as comma separated `name:value` pairs.
    pub opc_meta_properties: std::option::Option<std::string::String>,

    /// The media type of the payload. Defaults to `application/octet-stream`.
    pub content_type: std::option::Option<std::string::String>,

    /// The payload to upload.
    pub body: std::option::Option<bytes::Bytes>,
}

impl UploadLogFileRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::UploadLogFileRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [upload_name][crate::model::UploadLogFileRequest::upload_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_upload_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.upload_name = v.into();
        self
    }

    /// Sets the value of [log_source_name][crate::model::UploadLogFileRequest::log_source_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_source_name = v.into();
        self
    }

    /// Sets the value of [filename][crate::model::UploadLogFileRequest::filename].
    ///
    /// This is a **required** field for requests.
    pub fn set_filename<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filename = v.into();
        self
    }

    /// Sets the value of [entity_id][crate::model::UploadLogFileRequest::entity_id].
    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [entity_id][crate::model::UploadLogFileRequest::entity_id].
    pub fn set_or_clear_entity_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.entity_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [timezone][crate::model::UploadLogFileRequest::timezone].
    pub fn set_timezone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.timezone = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [timezone][crate::model::UploadLogFileRequest::timezone].
    pub fn set_or_clear_timezone<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.timezone = v.map(|x| x.into());
        self
    }

    /// Sets the value of [char_encoding][crate::model::UploadLogFileRequest::char_encoding].
    pub fn set_char_encoding<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.char_encoding = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [char_encoding][crate::model::UploadLogFileRequest::char_encoding].
    pub fn set_or_clear_char_encoding<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.char_encoding = v.map(|x| x.into());
        self
    }

    /// Sets the value of [date_format][crate::model::UploadLogFileRequest::date_format].
    pub fn set_date_format<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.date_format = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [date_format][crate::model::UploadLogFileRequest::date_format].
    pub fn set_or_clear_date_format<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.date_format = v.map(|x| x.into());
        self
    }

    /// Sets the value of [date_year][crate::model::UploadLogFileRequest::date_year].
    pub fn set_date_year<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.date_year = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [date_year][crate::model::UploadLogFileRequest::date_year].
    pub fn set_or_clear_date_year<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.date_year = v.map(|x| x.into());
        self
    }

    /// Sets the value of [invalidate_cache][crate::model::UploadLogFileRequest::invalidate_cache].
    pub fn set_invalidate_cache<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.invalidate_cache = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [invalidate_cache][crate::model::UploadLogFileRequest::invalidate_cache].
    pub fn set_or_clear_invalidate_cache<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.invalidate_cache = v.map(|x| x.into());
        self
    }

    /// Sets the value of [log_set][crate::model::UploadLogFileRequest::log_set].
    pub fn set_log_set<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_set = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [log_set][crate::model::UploadLogFileRequest::log_set].
    pub fn set_or_clear_log_set<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_set = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::UploadLogFileRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::UploadLogFileRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::UploadLogFileRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::UploadLogFileRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_meta_loggrpid][crate::model::UploadLogFileRequest::opc_meta_loggrpid].
    ///
    /// This is a **required** field for requests.
    pub fn set_opc_meta_loggrpid<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_meta_loggrpid = v.into();
        self
    }

    /// Sets the value of [content_md5][crate::model::UploadLogFileRequest::content_md5].
    pub fn set_content_md5<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content_md5 = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [content_md5][crate::model::UploadLogFileRequest::content_md5].
    pub fn set_or_clear_content_md5<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.content_md5 = v.map(|x| x.into());
        self
    }

    /// Sets the value of [expect][crate::model::UploadLogFileRequest::expect].
    pub fn set_expect<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.expect = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [expect][crate::model::UploadLogFileRequest::expect].
    pub fn set_or_clear_expect<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.expect = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_meta_properties][crate::model::UploadLogFileRequest::opc_meta_properties].
    pub fn set_opc_meta_properties<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_meta_properties = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_meta_properties][crate::model::UploadLogFileRequest::opc_meta_properties].
    pub fn set_or_clear_opc_meta_properties<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_meta_properties = v.map(|x| x.into());
        self
    }

    /// Sets the value of [content_type][crate::model::UploadLogFileRequest::content_type].
    pub fn set_content_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [content_type][crate::model::UploadLogFileRequest::content_type].
    pub fn set_or_clear_content_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.content_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [body][crate::model::UploadLogFileRequest::body].
    ///
    /// This is a **required** field for requests.
    pub fn set_body<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.body = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [body][crate::model::UploadLogFileRequest::body].
    pub fn set_or_clear_body<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bytes::Bytes>,
    {
        self.body = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::upload_log_events_file][crate::client::LogAnalytics::upload_log_events_file].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UploadLogEventsFileRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the log group receiving the data.
    pub log_group_id: std::string::String,

    /// The log set of the uploaded data.
    pub log_set: std::option::Option<std::string::String>,

    /// The encoding of the payload.
    pub payload_type: std::option::Option<crate::model::PayloadType>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// Metadata applied to the uploaded data, as comma separated `name:value` pairs.
    pub opc_meta_properties: std::option::Option<std::string::String>,

    /// Set to `100-continue` to request preliminary verification before the payload is sent.
    pub expect: std::option::Option<std::string::String>,

    /// The media type of the payload. Defaults to `application/octet-stream`.
    pub content_type: std::option::Option<std::string::String>,

    /// The payload to upload.
    pub body: std::option::Option<bytes::Bytes>,
}

impl UploadLogEventsFileRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::UploadLogEventsFileRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [log_group_id][crate::model::UploadLogEventsFileRequest::log_group_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_log_group_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_group_id = v.into();
        self
    }

    /// Sets the value of [log_set][crate::model::UploadLogEventsFileRequest::log_set].
    pub fn set_log_set<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_set = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [log_set][crate::model::UploadLogEventsFileRequest::log_set].
    pub fn set_or_clear_log_set<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_set = v.map(|x| x.into());
        self
    }

    /// Sets the value of [payload_type][crate::model::UploadLogEventsFileRequest::payload_type].
    pub fn set_payload_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::PayloadType>,
    {
        self.payload_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [payload_type][crate::model::UploadLogEventsFileRequest::payload_type].
    pub fn set_or_clear_payload_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::PayloadType>,
    {
        self.payload_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::UploadLogEventsFileRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::UploadLogEventsFileRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::UploadLogEventsFileRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::UploadLogEventsFileRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_meta_properties][crate::model::UploadLogEventsFileRequest::opc_meta_properties].
    pub fn set_opc_meta_properties<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_meta_properties = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_meta_properties][crate::model::UploadLogEventsFileRequest::opc_meta_properties].
    pub fn set_or_clear_opc_meta_properties<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_meta_properties = v.map(|x| x.into());
        self
    }

    /// Sets the value of [expect][crate::model::UploadLogEventsFileRequest::expect].
    pub fn set_expect<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.expect = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [expect][crate::model::UploadLogEventsFileRequest::expect].
    pub fn set_or_clear_expect<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.expect = v.map(|x| x.into());
        self
    }

    /// Sets the value of [content_type][crate::model::UploadLogEventsFileRequest::content_type].
    pub fn set_content_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [content_type][crate::model::UploadLogEventsFileRequest::content_type].
    pub fn set_or_clear_content_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.content_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [body][crate::model::UploadLogEventsFileRequest::body].
    ///
    /// This is a **required** field for requests.
    pub fn set_body<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.body = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [body][crate::model::UploadLogEventsFileRequest::body].
    pub fn set_or_clear_body<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bytes::Bytes>,
    {
        self.body = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::upload_discovery_data][crate::client::LogAnalytics::upload_discovery_data].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UploadDiscoveryDataRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub discovery_data_type: std::option::Option<crate::model::DiscoveryDataType>,

    /// The OCID of the log group receiving the data.
    pub log_group_id: std::option::Option<std::string::String>,

    /// The encoding of the payload.
    pub payload_type: std::option::Option<crate::model::PayloadType>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request, so it can be retried after a
    /// timeout or server error without the risk of executing the same action
    /// twice.
    ///
    /// The client generates a token when none is set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// Metadata applied to the uploaded data, as comma separated `name:value` pairs.
    pub opc_meta_properties: std::option::Option<std::string::String>,

    /// Set to `100-continue` to request preliminary verification before the payload is sent.
    pub expect: std::option::Option<std::string::String>,

    /// The media type of the payload. Defaults to `application/octet-stream`.
    pub content_type: std::option::Option<std::string::String>,

    /// The payload to upload.
    pub body: std::option::Option<bytes::Bytes>,
}

impl UploadDiscoveryDataRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::UploadDiscoveryDataRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [discovery_data_type][crate::model::UploadDiscoveryDataRequest::discovery_data_type].
    pub fn set_discovery_data_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DiscoveryDataType>,
    {
        self.discovery_data_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [discovery_data_type][crate::model::UploadDiscoveryDataRequest::discovery_data_type].
    pub fn set_or_clear_discovery_data_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::DiscoveryDataType>,
    {
        self.discovery_data_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [log_group_id][crate::model::UploadDiscoveryDataRequest::log_group_id].
    pub fn set_log_group_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [log_group_id][crate::model::UploadDiscoveryDataRequest::log_group_id].
    pub fn set_or_clear_log_group_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.log_group_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [payload_type][crate::model::UploadDiscoveryDataRequest::payload_type].
    pub fn set_payload_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::PayloadType>,
    {
        self.payload_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [payload_type][crate::model::UploadDiscoveryDataRequest::payload_type].
    pub fn set_or_clear_payload_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::PayloadType>,
    {
        self.payload_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::UploadDiscoveryDataRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::UploadDiscoveryDataRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_retry_token][crate::model::UploadDiscoveryDataRequest::opc_retry_token].
    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_retry_token][crate::model::UploadDiscoveryDataRequest::opc_retry_token].
    pub fn set_or_clear_opc_retry_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_retry_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_meta_properties][crate::model::UploadDiscoveryDataRequest::opc_meta_properties].
    pub fn set_opc_meta_properties<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_meta_properties = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_meta_properties][crate::model::UploadDiscoveryDataRequest::opc_meta_properties].
    pub fn set_or_clear_opc_meta_properties<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_meta_properties = v.map(|x| x.into());
        self
    }

    /// Sets the value of [expect][crate::model::UploadDiscoveryDataRequest::expect].
    pub fn set_expect<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.expect = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [expect][crate::model::UploadDiscoveryDataRequest::expect].
    pub fn set_or_clear_expect<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.expect = v.map(|x| x.into());
        self
    }

    /// Sets the value of [content_type][crate::model::UploadDiscoveryDataRequest::content_type].
    pub fn set_content_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [content_type][crate::model::UploadDiscoveryDataRequest::content_type].
    pub fn set_or_clear_content_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.content_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [body][crate::model::UploadDiscoveryDataRequest::body].
    ///
    /// This is a **required** field for requests.
    pub fn set_body<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.body = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [body][crate::model::UploadDiscoveryDataRequest::body].
    pub fn set_or_clear_body<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bytes::Bytes>,
    {
        self.body = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::get_upload][crate::client::LogAnalytics::get_upload].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetUploadRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The reference of the upload.
    pub upload_reference: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetUploadRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetUploadRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [upload_reference][crate::model::GetUploadRequest::upload_reference].
    ///
    /// This is a **required** field for requests.
    pub fn set_upload_reference<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.upload_reference = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetUploadRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetUploadRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_uploads][crate::client::LogAnalytics::list_uploads].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListUploadsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// Filters by exact name.
    pub name: std::option::Option<std::string::String>,

    pub name_contains: std::option::Option<std::string::String>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_uploads_request::SortBy>,

    pub warnings_filter: std::option::Option<crate::model::list_uploads_request::WarningsFilter>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListUploadsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListUploadsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [name][crate::model::ListUploadsRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::ListUploadsRequest::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name_contains][crate::model::ListUploadsRequest::name_contains].
    pub fn set_name_contains<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name_contains = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name_contains][crate::model::ListUploadsRequest::name_contains].
    pub fn set_or_clear_name_contains<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name_contains = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListUploadsRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListUploadsRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListUploadsRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_uploads_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListUploadsRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_uploads_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [warnings_filter][crate::model::ListUploadsRequest::warnings_filter].
    pub fn set_warnings_filter<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_uploads_request::WarningsFilter>,
    {
        self.warnings_filter = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [warnings_filter][crate::model::ListUploadsRequest::warnings_filter].
    pub fn set_or_clear_warnings_filter<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_uploads_request::WarningsFilter>,
    {
        self.warnings_filter = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListUploadsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListUploadsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListUploadsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListUploadsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListUploadsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListUploadsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListUploadsRequest].
pub mod list_uploads_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        TimeCreated,
        TimeUpdated,
        Name,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::TimeCreated => "timeCreated",
                Self::TimeUpdated => "timeUpdated",
                Self::Name => "name",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "timeCreated" => Self::TimeCreated,
                "timeUpdated" => Self::TimeUpdated,
                "name" => Self::Name,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["timeCreated", "timeUpdated", "name"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }

    /// The values accepted by the `warningsFilter` parameter.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum WarningsFilter {
        WithWarnings,
        WithoutWarnings,
        All,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl WarningsFilter {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::WithWarnings => "WITH_WARNINGS",
                Self::WithoutWarnings => "WITHOUT_WARNINGS",
                Self::All => "ALL",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for WarningsFilter {
        fn from(value: &str) -> Self {
            match value {
                "WITH_WARNINGS" => Self::WithWarnings,
                "WITHOUT_WARNINGS" => Self::WithoutWarnings,
                "ALL" => Self::All,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for WarningsFilter {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for WarningsFilter {
        const KNOWN_VALUES: &'static [&'static str] = &["WITH_WARNINGS", "WITHOUT_WARNINGS", "ALL"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for WarningsFilter {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for WarningsFilter {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::delete_upload][crate::client::LogAnalytics::delete_upload].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteUploadRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The reference of the upload.
    pub upload_reference: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DeleteUploadRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::DeleteUploadRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [upload_reference][crate::model::DeleteUploadRequest::upload_reference].
    ///
    /// This is a **required** field for requests.
    pub fn set_upload_reference<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.upload_reference = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::DeleteUploadRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::DeleteUploadRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::DeleteUploadRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::DeleteUploadRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_upload_files][crate::client::LogAnalytics::list_upload_files].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListUploadFilesRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The reference of the upload.
    pub upload_reference: std::string::String,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_upload_files_request::SortBy>,

    pub search_str: std::option::Option<std::string::String>,

    pub status: std::vec::Vec<crate::model::UploadFileStatus>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListUploadFilesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListUploadFilesRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [upload_reference][crate::model::ListUploadFilesRequest::upload_reference].
    ///
    /// This is a **required** field for requests.
    pub fn set_upload_reference<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.upload_reference = v.into();
        self
    }

    /// Sets the value of [sort_order][crate::model::ListUploadFilesRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListUploadFilesRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListUploadFilesRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_upload_files_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListUploadFilesRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_upload_files_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [search_str][crate::model::ListUploadFilesRequest::search_str].
    pub fn set_search_str<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.search_str = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [search_str][crate::model::ListUploadFilesRequest::search_str].
    pub fn set_or_clear_search_str<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.search_str = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][crate::model::ListUploadFilesRequest::status].
    pub fn set_status<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::UploadFileStatus>,
    {
        self.status = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [limit][crate::model::ListUploadFilesRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListUploadFilesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListUploadFilesRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListUploadFilesRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListUploadFilesRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListUploadFilesRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListUploadFilesRequest].
pub mod list_upload_files_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        TimeStarted,
        Name,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::TimeStarted => "timeStarted",
                Self::Name => "name",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "timeStarted" => Self::TimeStarted,
                "name" => Self::Name,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["timeStarted", "name"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::delete_upload_file][crate::client::LogAnalytics::delete_upload_file].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteUploadFileRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The reference of the upload.
    pub upload_reference: std::string::String,

    /// The reference of the uploaded file.
    pub file_reference: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted
    /// only if the etag you provide matches its current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DeleteUploadFileRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::DeleteUploadFileRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [upload_reference][crate::model::DeleteUploadFileRequest::upload_reference].
    ///
    /// This is a **required** field for requests.
    pub fn set_upload_reference<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.upload_reference = v.into();
        self
    }

    /// Sets the value of [file_reference][crate::model::DeleteUploadFileRequest::file_reference].
    ///
    /// This is a **required** field for requests.
    pub fn set_file_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.file_reference = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::DeleteUploadFileRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::DeleteUploadFileRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [if_match][crate::model::DeleteUploadFileRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [if_match][crate::model::DeleteUploadFileRequest::if_match].
    pub fn set_or_clear_if_match<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.if_match = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_upload_warnings][crate::client::LogAnalytics::list_upload_warnings].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListUploadWarningsRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The reference of the upload.
    pub upload_reference: std::string::String,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListUploadWarningsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListUploadWarningsRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [upload_reference][crate::model::ListUploadWarningsRequest::upload_reference].
    ///
    /// This is a **required** field for requests.
    pub fn set_upload_reference<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.upload_reference = v.into();
        self
    }

    /// Sets the value of [limit][crate::model::ListUploadWarningsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListUploadWarningsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListUploadWarningsRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListUploadWarningsRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListUploadWarningsRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListUploadWarningsRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_upload_warning][crate::client::LogAnalytics::delete_upload_warning].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteUploadWarningRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The reference of the upload.
    pub upload_reference: std::string::String,

    /// The reference of the upload warning.
    pub warning_reference: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl DeleteUploadWarningRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::DeleteUploadWarningRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [upload_reference][crate::model::DeleteUploadWarningRequest::upload_reference].
    ///
    /// This is a **required** field for requests.
    pub fn set_upload_reference<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.upload_reference = v.into();
        self
    }

    /// Sets the value of [warning_reference][crate::model::DeleteUploadWarningRequest::warning_reference].
    ///
    /// This is a **required** field for requests.
    pub fn set_warning_reference<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.warning_reference = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::DeleteUploadWarningRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::DeleteUploadWarningRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogAnalytics::list_templates][crate::client::LogAnalytics::list_templates].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListTemplatesRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment.
    pub compartment_id: std::string::String,

    /// The kind of lookup.
    pub r#type: std::option::Option<crate::model::TemplateType>,

    /// Filters by exact name.
    pub name: std::option::Option<std::string::String>,

    pub template_display_text: std::option::Option<std::string::String>,

    /// Filters by origin, built-in or custom.
    pub is_system: std::option::Option<crate::model::IsSystemFilter>,

    pub category: std::option::Option<std::string::String>,

    /// The sort order, either ascending (`ASC`) or descending (`DESC`).
    pub sort_order: std::option::Option<crate::model::SortOrders>,

    /// The field to sort by. Only one sort order may be provided.
    pub sort_by: std::option::Option<crate::model::list_templates_request::SortBy>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page to fetch, as returned in the `opc-next-page` header of a previous response.
    pub page: std::option::Option<std::string::String>,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListTemplatesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::ListTemplatesRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [compartment_id][crate::model::ListTemplatesRequest::compartment_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = v.into();
        self
    }

    /// Sets the value of [type][crate::model::ListTemplatesRequest::type].
    pub fn set_type<T: std::convert::Into<crate::model::TemplateType>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [type][crate::model::ListTemplatesRequest::type].
    pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::TemplateType>,
    {
        self.r#type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::ListTemplatesRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::ListTemplatesRequest::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [template_display_text][crate::model::ListTemplatesRequest::template_display_text].
    pub fn set_template_display_text<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.template_display_text = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [template_display_text][crate::model::ListTemplatesRequest::template_display_text].
    pub fn set_or_clear_template_display_text<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.template_display_text = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_system][crate::model::ListTemplatesRequest::is_system].
    pub fn set_is_system<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::IsSystemFilter>,
    {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_system][crate::model::ListTemplatesRequest::is_system].
    pub fn set_or_clear_is_system<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::IsSystemFilter>,
    {
        self.is_system = v.map(|x| x.into());
        self
    }

    /// Sets the value of [category][crate::model::ListTemplatesRequest::category].
    pub fn set_category<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.category = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [category][crate::model::ListTemplatesRequest::category].
    pub fn set_or_clear_category<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.category = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_order][crate::model::ListTemplatesRequest::sort_order].
    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrders>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_order][crate::model::ListTemplatesRequest::sort_order].
    pub fn set_or_clear_sort_order<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SortOrders>,
    {
        self.sort_order = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort_by][crate::model::ListTemplatesRequest::sort_by].
    pub fn set_sort_by<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_templates_request::SortBy>,
    {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sort_by][crate::model::ListTemplatesRequest::sort_by].
    pub fn set_or_clear_sort_by<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_templates_request::SortBy>,
    {
        self.sort_by = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListTemplatesRequest::limit].
    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListTemplatesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][crate::model::ListTemplatesRequest::page].
    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [page][crate::model::ListTemplatesRequest::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [opc_request_id][crate::model::ListTemplatesRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::ListTemplatesRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// Defines additional types related to [ListTemplatesRequest].
pub mod list_templates_request {
    #[allow(unused_imports)]
    use super::*;

    /// The fields that may be used to sort the results.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum SortBy {
        TimeCreated,
        TimeUpdated,
        Name,
        /// A value not known to this version of the client library.
        UnknownValue(std::string::String),
    }

    impl SortBy {
        /// The value as it appears in requests and responses.
        pub fn name(&self) -> &str {
            match self {
                Self::TimeCreated => "timeCreated",
                Self::TimeUpdated => "timeUpdated",
                Self::Name => "name",
                Self::UnknownValue(v) => v,
            }
        }
    }

    impl std::convert::From<&str> for SortBy {
        fn from(value: &str) -> Self {
            match value {
                "timeCreated" => Self::TimeCreated,
                "timeUpdated" => Self::TimeUpdated,
                "name" => Self::Name,
                v => Self::UnknownValue(v.to_string()),
            }
        }
    }

    impl std::fmt::Display for SortBy {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl gaxi::enums::ServiceEnum for SortBy {
        const KNOWN_VALUES: &'static [&'static str] = &["timeCreated", "timeUpdated", "name"];
        fn name(&self) -> &str {
            Self::name(self)
        }
    }

    impl serde::ser::Serialize for SortBy {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for SortBy {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The request message for [LogAnalytics::get_template][crate::client::LogAnalytics::get_template].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetTemplateRequest {
    /// The Logging Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the template.
    pub template_id: std::string::String,

    /// The client request id for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetTemplateRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace_name][crate::model::GetTemplateRequest::namespace_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [template_id][crate::model::GetTemplateRequest::template_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_template_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.template_id = v.into();
        self
    }

    /// Sets the value of [opc_request_id][crate::model::GetTemplateRequest::opc_request_id].
    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [opc_request_id][crate::model::GetTemplateRequest::opc_request_id].
    pub fn set_or_clear_opc_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.opc_request_id = v.map(|x| x.into());
        self
    }
}

/// The action a scheduled task performs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ActionType {
    Stream,
    Purge,
    Acceleration,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl ActionType {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Stream => "STREAM",
            Self::Purge => "PURGE",
            Self::Acceleration => "ACCELERATION",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for ActionType {
    fn from(value: &str) -> Self {
        match value {
            "STREAM" => Self::Stream,
            "PURGE" => Self::Purge,
            "ACCELERATION" => Self::Acceleration,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for ActionType {
    const KNOWN_VALUES: &'static [&'static str] = &["STREAM", "PURGE", "ACCELERATION"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for ActionType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for ActionType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The archival state of a data range.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ArchivalState {
    Recalled,
    Pending,
    Failed,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl ArchivalState {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Recalled => "RECALLED",
            Self::Pending => "PENDING",
            Self::Failed => "FAILED",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for ArchivalState {
    fn from(value: &str) -> Self {
        match value {
            "RECALLED" => Self::Recalled,
            "PENDING" => Self::Pending,
            "FAILED" => Self::Failed,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for ArchivalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for ArchivalState {
    const KNOWN_VALUES: &'static [&'static str] = &["RECALLED", "PENDING", "FAILED"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for ArchivalState {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for ArchivalState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The status of a source association.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AssociationStatus {
    Accepted,
    InProgress,
    Succeeded,
    Failed,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl AssociationStatus {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Accepted => "ACCEPTED",
            Self::InProgress => "IN_PROGRESS",
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for AssociationStatus {
    fn from(value: &str) -> Self {
        match value {
            "ACCEPTED" => Self::Accepted,
            "IN_PROGRESS" => Self::InProgress,
            "SUCCEEDED" => Self::Succeeded,
            "FAILED" => Self::Failed,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for AssociationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for AssociationStatus {
    const KNOWN_VALUES: &'static [&'static str] =
        &["ACCEPTED", "IN_PROGRESS", "SUCCEEDED", "FAILED"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for AssociationStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for AssociationStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The levels at which auto association may be configured.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AutoAssociationLevel {
    Tenancy,
    Entity,
    Source,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl AutoAssociationLevel {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Tenancy => "TENANCY",
            Self::Entity => "ENTITY",
            Self::Source => "SOURCE",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for AutoAssociationLevel {
    fn from(value: &str) -> Self {
        match value {
            "TENANCY" => Self::Tenancy,
            "ENTITY" => Self::Entity,
            "SOURCE" => Self::Source,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for AutoAssociationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for AutoAssociationLevel {
    const KNOWN_VALUES: &'static [&'static str] = &["TENANCY", "ENTITY", "SOURCE"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for AutoAssociationLevel {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for AutoAssociationLevel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The kinds of resources a category applies to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CategoryType {
    Parser,
    Source,
    Lookup,
    Label,
    EntityType,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl CategoryType {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Parser => "PARSER",
            Self::Source => "SOURCE",
            Self::Lookup => "LOOKUP",
            Self::Label => "LABEL",
            Self::EntityType => "ENTITY_TYPE",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for CategoryType {
    fn from(value: &str) -> Self {
        match value {
            "PARSER" => Self::Parser,
            "SOURCE" => Self::Source,
            "LOOKUP" => Self::Lookup,
            "LABEL" => Self::Label,
            "ENTITY_TYPE" => Self::EntityType,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for CategoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for CategoryType {
    const KNOWN_VALUES: &'static [&'static str] =
        &["PARSER", "SOURCE", "LOOKUP", "LABEL", "ENTITY_TYPE"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for CategoryType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for CategoryType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The lifecycle states of configuration resources.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConcreteLifecycleState {
    Active,
    Deleted,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl ConcreteLifecycleState {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Active => "ACTIVE",
            Self::Deleted => "DELETED",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for ConcreteLifecycleState {
    fn from(value: &str) -> Self {
        match value {
            "ACTIVE" => Self::Active,
            "DELETED" => Self::Deleted,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for ConcreteLifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for ConcreteLifecycleState {
    const KNOWN_VALUES: &'static [&'static str] = &["ACTIVE", "DELETED"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for ConcreteLifecycleState {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for ConcreteLifecycleState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The condition kinds of an ingest time rule.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConditionKind {
    Field,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl ConditionKind {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Field => "FIELD",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for ConditionKind {
    fn from(value: &str) -> Self {
        match value {
            "FIELD" => Self::Field,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for ConditionKind {
    const KNOWN_VALUES: &'static [&'static str] = &["FIELD"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for ConditionKind {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for ConditionKind {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The lifecycle states of a configuration work request.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConfigWorkRequestLifecycleState {
    Accepted,
    InProgress,
    Succeeded,
    Failed,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl ConfigWorkRequestLifecycleState {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Accepted => "ACCEPTED",
            Self::InProgress => "IN_PROGRESS",
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for ConfigWorkRequestLifecycleState {
    fn from(value: &str) -> Self {
        match value {
            "ACCEPTED" => Self::Accepted,
            "IN_PROGRESS" => Self::InProgress,
            "SUCCEEDED" => Self::Succeeded,
            "FAILED" => Self::Failed,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for ConfigWorkRequestLifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for ConfigWorkRequestLifecycleState {
    const KNOWN_VALUES: &'static [&'static str] =
        &["ACCEPTED", "IN_PROGRESS", "SUCCEEDED", "FAILED"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for ConfigWorkRequestLifecycleState {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for ConfigWorkRequestLifecycleState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The kinds of configuration work requests.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConfigWorkRequestOperationType {
    CreateAssociations,
    DeleteAssociations,
    AppendLookupData,
    DeleteLookup,
    UpdateLookupData,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl ConfigWorkRequestOperationType {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::CreateAssociations => "CREATE_ASSOCIATIONS",
            Self::DeleteAssociations => "DELETE_ASSOCIATIONS",
            Self::AppendLookupData => "APPEND_LOOKUP_DATA",
            Self::DeleteLookup => "DELETE_LOOKUP",
            Self::UpdateLookupData => "UPDATE_LOOKUP_DATA",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for ConfigWorkRequestOperationType {
    fn from(value: &str) -> Self {
        match value {
            "CREATE_ASSOCIATIONS" => Self::CreateAssociations,
            "DELETE_ASSOCIATIONS" => Self::DeleteAssociations,
            "APPEND_LOOKUP_DATA" => Self::AppendLookupData,
            "DELETE_LOOKUP" => Self::DeleteLookup,
            "UPDATE_LOOKUP_DATA" => Self::UpdateLookupData,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for ConfigWorkRequestOperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for ConfigWorkRequestOperationType {
    const KNOWN_VALUES: &'static [&'static str] = &[
        "CREATE_ASSOCIATIONS",
        "DELETE_ASSOCIATIONS",
        "APPEND_LOOKUP_DATA",
        "DELETE_LOOKUP",
        "UPDATE_LOOKUP_DATA",
    ];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for ConfigWorkRequestOperationType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for ConfigWorkRequestOperationType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The kinds of discovery data.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DiscoveryDataType {
    Entity,
    K8sObjects,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl DiscoveryDataType {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Entity => "ENTITY",
            Self::K8sObjects => "K8S_OBJECTS",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for DiscoveryDataType {
    fn from(value: &str) -> Self {
        match value {
            "ENTITY" => Self::Entity,
            "K8S_OBJECTS" => Self::K8sObjects,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for DiscoveryDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for DiscoveryDataType {
    const KNOWN_VALUES: &'static [&'static str] = &["ENTITY", "K8S_OBJECTS"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for DiscoveryDataType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for DiscoveryDataType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The status of the last import processed by an Enterprise Manager bridge.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum EmBridgeLatestImportProcessingStatus {
    NotStarted,
    Success,
    InProgress,
    Failed,
    PartialSuccess,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl EmBridgeLatestImportProcessingStatus {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::NotStarted => "NOT_STARTED",
            Self::Success => "SUCCESS",
            Self::InProgress => "IN_PROGRESS",
            Self::Failed => "FAILED",
            Self::PartialSuccess => "PARTIAL_SUCCESS",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for EmBridgeLatestImportProcessingStatus {
    fn from(value: &str) -> Self {
        match value {
            "NOT_STARTED" => Self::NotStarted,
            "SUCCESS" => Self::Success,
            "IN_PROGRESS" => Self::InProgress,
            "FAILED" => Self::Failed,
            "PARTIAL_SUCCESS" => Self::PartialSuccess,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for EmBridgeLatestImportProcessingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for EmBridgeLatestImportProcessingStatus {
    const KNOWN_VALUES: &'static [&'static str] = &[
        "NOT_STARTED",
        "SUCCESS",
        "IN_PROGRESS",
        "FAILED",
        "PARTIAL_SUCCESS",
    ];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for EmBridgeLatestImportProcessingStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for EmBridgeLatestImportProcessingStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The lifecycle states of an Enterprise Manager bridge.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum EmBridgeLifecycleStates {
    Creating,
    Active,
    Deleted,
    NeedsAttention,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl EmBridgeLifecycleStates {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Creating => "CREATING",
            Self::Active => "ACTIVE",
            Self::Deleted => "DELETED",
            Self::NeedsAttention => "NEEDS_ATTENTION",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for EmBridgeLifecycleStates {
    fn from(value: &str) -> Self {
        match value {
            "CREATING" => Self::Creating,
            "ACTIVE" => Self::Active,
            "DELETED" => Self::Deleted,
            "NEEDS_ATTENTION" => Self::NeedsAttention,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for EmBridgeLifecycleStates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for EmBridgeLifecycleStates {
    const KNOWN_VALUES: &'static [&'static str] =
        &["CREATING", "ACTIVE", "DELETED", "NEEDS_ATTENTION"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for EmBridgeLifecycleStates {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for EmBridgeLifecycleStates {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// Where a resource runs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum EntityCloudType {
    Cloud,
    NonCloud,
    All,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl EntityCloudType {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Cloud => "CLOUD",
            Self::NonCloud => "NON_CLOUD",
            Self::All => "ALL",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for EntityCloudType {
    fn from(value: &str) -> Self {
        match value {
            "CLOUD" => Self::Cloud,
            "NON_CLOUD" => Self::NonCloud,
            "ALL" => Self::All,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for EntityCloudType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for EntityCloudType {
    const KNOWN_VALUES: &'static [&'static str] = &["CLOUD", "NON_CLOUD", "ALL"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for EntityCloudType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for EntityCloudType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The lifecycle states of a Log Analytics entity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum EntityLifecycleStates {
    Active,
    Deleted,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl EntityLifecycleStates {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Active => "ACTIVE",
            Self::Deleted => "DELETED",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for EntityLifecycleStates {
    fn from(value: &str) -> Self {
        match value {
            "ACTIVE" => Self::Active,
            "DELETED" => Self::Deleted,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for EntityLifecycleStates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for EntityLifecycleStates {
    const KNOWN_VALUES: &'static [&'static str] = &["ACTIVE", "DELETED"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for EntityLifecycleStates {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for EntityLifecycleStates {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The value types of a field in a query result.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FieldValueType {
    Boolean,
    String,
    Double,
    Float,
    Long,
    Integer,
    Timestamp,
    Facet,
    Table,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl FieldValueType {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Boolean => "BOOLEAN",
            Self::String => "STRING",
            Self::Double => "DOUBLE",
            Self::Float => "FLOAT",
            Self::Long => "LONG",
            Self::Integer => "INTEGER",
            Self::Timestamp => "TIMESTAMP",
            Self::Facet => "FACET",
            Self::Table => "TABLE",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for FieldValueType {
    fn from(value: &str) -> Self {
        match value {
            "BOOLEAN" => Self::Boolean,
            "STRING" => Self::String,
            "DOUBLE" => Self::Double,
            "FLOAT" => Self::Float,
            "LONG" => Self::Long,
            "INTEGER" => Self::Integer,
            "TIMESTAMP" => Self::Timestamp,
            "FACET" => Self::Facet,
            "TABLE" => Self::Table,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for FieldValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for FieldValueType {
    const KNOWN_VALUES: &'static [&'static str] = &[
        "BOOLEAN",
        "STRING",
        "DOUBLE",
        "FLOAT",
        "LONG",
        "INTEGER",
        "TIMESTAMP",
        "FACET",
        "TABLE",
    ];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for FieldValueType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for FieldValueType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// Filters resources by origin.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum IsSystemFilter {
    All,
    Custom,
    BuiltIn,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl IsSystemFilter {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::All => "ALL",
            Self::Custom => "CUSTOM",
            Self::BuiltIn => "BUILT_IN",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for IsSystemFilter {
    fn from(value: &str) -> Self {
        match value {
            "ALL" => Self::All,
            "CUSTOM" => Self::Custom,
            "BUILT_IN" => Self::BuiltIn,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for IsSystemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for IsSystemFilter {
    const KNOWN_VALUES: &'static [&'static str] = &["ALL", "CUSTOM", "BUILT_IN"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for IsSystemFilter {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for IsSystemFilter {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// How a query runs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum JobMode {
    Foreground,
    Background,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl JobMode {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Foreground => "FOREGROUND",
            Self::Background => "BACKGROUND",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for JobMode {
    fn from(value: &str) -> Self {
        match value {
            "FOREGROUND" => Self::Foreground,
            "BACKGROUND" => Self::Background,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for JobMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for JobMode {
    const KNOWN_VALUES: &'static [&'static str] = &["FOREGROUND", "BACKGROUND"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for JobMode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for JobMode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The priority of a label.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum LabelPriorityValue {
    None,
    Low,
    Medium,
    High,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl LabelPriorityValue {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::None => "NONE",
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for LabelPriorityValue {
    fn from(value: &str) -> Self {
        match value {
            "NONE" => Self::None,
            "LOW" => Self::Low,
            "MEDIUM" => Self::Medium,
            "HIGH" => Self::High,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for LabelPriorityValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for LabelPriorityValue {
    const KNOWN_VALUES: &'static [&'static str] = &["NONE", "LOW", "MEDIUM", "HIGH"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for LabelPriorityValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for LabelPriorityValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// Where the log set of an object is stored.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum LogSetKeyTypes {
    ObjectMetadata,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl LogSetKeyTypes {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::ObjectMetadata => "OBJECT_METADATA",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for LogSetKeyTypes {
    fn from(value: &str) -> Self {
        match value {
            "OBJECT_METADATA" => Self::ObjectMetadata,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for LogSetKeyTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for LogSetKeyTypes {
    const KNOWN_VALUES: &'static [&'static str] = &["OBJECT_METADATA"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for LogSetKeyTypes {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for LogSetKeyTypes {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The kinds of lookups.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum LookupType {
    Lookup,
    Dictionary,
    Module,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl LookupType {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Lookup => "Lookup",
            Self::Dictionary => "Dictionary",
            Self::Module => "Module",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for LookupType {
    fn from(value: &str) -> Self {
        match value {
            "Lookup" => Self::Lookup,
            "Dictionary" => Self::Dictionary,
            "Module" => Self::Module,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for LookupType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for LookupType {
    const KNOWN_VALUES: &'static [&'static str] = &["Lookup", "Dictionary", "Module"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for LookupType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for LookupType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// How objects are collected from a bucket.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ObjectCollectionRuleCollectionTypes {
    Live,
    Historic,
    HistoricLive,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl ObjectCollectionRuleCollectionTypes {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Live => "LIVE",
            Self::Historic => "HISTORIC",
            Self::HistoricLive => "HISTORIC_LIVE",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for ObjectCollectionRuleCollectionTypes {
    fn from(value: &str) -> Self {
        match value {
            "LIVE" => Self::Live,
            "HISTORIC" => Self::Historic,
            "HISTORIC_LIVE" => Self::HistoricLive,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for ObjectCollectionRuleCollectionTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for ObjectCollectionRuleCollectionTypes {
    const KNOWN_VALUES: &'static [&'static str] = &["LIVE", "HISTORIC", "HISTORIC_LIVE"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for ObjectCollectionRuleCollectionTypes {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for ObjectCollectionRuleCollectionTypes {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The lifecycle states of an object collection rule.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ObjectCollectionRuleLifecycleStates {
    Active,
    Deleted,
    Inactive,
    Updating,
    Creating,
    Failed,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl ObjectCollectionRuleLifecycleStates {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Active => "ACTIVE",
            Self::Deleted => "DELETED",
            Self::Inactive => "INACTIVE",
            Self::Updating => "UPDATING",
            Self::Creating => "CREATING",
            Self::Failed => "FAILED",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for ObjectCollectionRuleLifecycleStates {
    fn from(value: &str) -> Self {
        match value {
            "ACTIVE" => Self::Active,
            "DELETED" => Self::Deleted,
            "INACTIVE" => Self::Inactive,
            "UPDATING" => Self::Updating,
            "CREATING" => Self::Creating,
            "FAILED" => Self::Failed,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for ObjectCollectionRuleLifecycleStates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for ObjectCollectionRuleLifecycleStates {
    const KNOWN_VALUES: &'static [&'static str] = &[
        "ACTIVE", "DELETED", "INACTIVE", "UPDATING", "CREATING", "FAILED",
    ];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for ObjectCollectionRuleLifecycleStates {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for ObjectCollectionRuleLifecycleStates {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The status of a storage or query work request.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum OperationStatus {
    Accepted,
    Canceled,
    Failed,
    InProgress,
    Succeeded,
    Canceling,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl OperationStatus {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Accepted => "ACCEPTED",
            Self::Canceled => "CANCELED",
            Self::Failed => "FAILED",
            Self::InProgress => "IN_PROGRESS",
            Self::Succeeded => "SUCCEEDED",
            Self::Canceling => "CANCELING",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for OperationStatus {
    fn from(value: &str) -> Self {
        match value {
            "ACCEPTED" => Self::Accepted,
            "CANCELED" => Self::Canceled,
            "FAILED" => Self::Failed,
            "IN_PROGRESS" => Self::InProgress,
            "SUCCEEDED" => Self::Succeeded,
            "CANCELING" => Self::Canceling,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for OperationStatus {
    const KNOWN_VALUES: &'static [&'static str] = &[
        "ACCEPTED",
        "CANCELED",
        "FAILED",
        "IN_PROGRESS",
        "SUCCEEDED",
        "CANCELING",
    ];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for OperationStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for OperationStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// How query results are returned.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum OutputMode {
    JsonRows,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl OutputMode {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::JsonRows => "JSON_ROWS",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for OutputMode {
    fn from(value: &str) -> Self {
        match value {
            "JSON_ROWS" => Self::JsonRows,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for OutputMode {
    const KNOWN_VALUES: &'static [&'static str] = &["JSON_ROWS"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for OutputMode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for OutputMode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The kinds of parsers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParserType {
    Xml,
    Json,
    Regex,
    Odl,
    Delimited,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl ParserType {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Xml => "XML",
            Self::Json => "JSON",
            Self::Regex => "REGEX",
            Self::Odl => "ODL",
            Self::Delimited => "DELIMITED",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for ParserType {
    fn from(value: &str) -> Self {
        match value {
            "XML" => Self::Xml,
            "JSON" => Self::Json,
            "REGEX" => Self::Regex,
            "ODL" => Self::Odl,
            "DELIMITED" => Self::Delimited,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for ParserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for ParserType {
    const KNOWN_VALUES: &'static [&'static str] = &["XML", "JSON", "REGEX", "ODL", "DELIMITED"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for ParserType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for ParserType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The encoding of an uploaded payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PayloadType {
    Json,
    Gzip,
    Zip,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl PayloadType {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Json => "JSON",
            Self::Gzip => "GZIP",
            Self::Zip => "ZIP",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for PayloadType {
    fn from(value: &str) -> Self {
        match value {
            "JSON" => Self::Json,
            "GZIP" => Self::Gzip,
            "ZIP" => Self::Zip,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for PayloadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for PayloadType {
    const KNOWN_VALUES: &'static [&'static str] = &["JSON", "GZIP", "ZIP"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for PayloadType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for PayloadType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The level a property applies to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PropertyLevel {
    Tenancy,
    Source,
    Pattern,
    Entity,
    LogGroup,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl PropertyLevel {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Tenancy => "TENANCY",
            Self::Source => "SOURCE",
            Self::Pattern => "PATTERN",
            Self::Entity => "ENTITY",
            Self::LogGroup => "LOG_GROUP",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for PropertyLevel {
    fn from(value: &str) -> Self {
        match value {
            "TENANCY" => Self::Tenancy,
            "SOURCE" => Self::Source,
            "PATTERN" => Self::Pattern,
            "ENTITY" => Self::Entity,
            "LOG_GROUP" => Self::LogGroup,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for PropertyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for PropertyLevel {
    const KNOWN_VALUES: &'static [&'static str] =
        &["TENANCY", "SOURCE", "PATTERN", "ENTITY", "LOG_GROUP"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for PropertyLevel {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for PropertyLevel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The kinds of query work requests.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum QueryOperationType {
    ExecuteQueryJob,
    ExecutePurgeJob,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl QueryOperationType {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::ExecuteQueryJob => "EXECUTE_QUERY_JOB",
            Self::ExecutePurgeJob => "EXECUTE_PURGE_JOB",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for QueryOperationType {
    fn from(value: &str) -> Self {
        match value {
            "EXECUTE_QUERY_JOB" => Self::ExecuteQueryJob,
            "EXECUTE_PURGE_JOB" => Self::ExecutePurgeJob,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for QueryOperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for QueryOperationType {
    const KNOWN_VALUES: &'static [&'static str] = &["EXECUTE_QUERY_JOB", "EXECUTE_PURGE_JOB"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for QueryOperationType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for QueryOperationType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// Filters query work requests by mode.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum QueryWorkRequestModeFilter {
    All,
    Foreground,
    Background,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl QueryWorkRequestModeFilter {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::All => "ALL",
            Self::Foreground => "FOREGROUND",
            Self::Background => "BACKGROUND",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for QueryWorkRequestModeFilter {
    fn from(value: &str) -> Self {
        match value {
            "ALL" => Self::All,
            "FOREGROUND" => Self::Foreground,
            "BACKGROUND" => Self::Background,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for QueryWorkRequestModeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for QueryWorkRequestModeFilter {
    const KNOWN_VALUES: &'static [&'static str] = &["ALL", "FOREGROUND", "BACKGROUND"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for QueryWorkRequestModeFilter {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for QueryWorkRequestModeFilter {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The status of recalled data.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RecalledDataStatus {
    Recalled,
    Pending,
    Failed,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl RecalledDataStatus {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Recalled => "RECALLED",
            Self::Pending => "PENDING",
            Self::Failed => "FAILED",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for RecalledDataStatus {
    fn from(value: &str) -> Self {
        match value {
            "RECALLED" => Self::Recalled,
            "PENDING" => Self::Pending,
            "FAILED" => Self::Failed,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for RecalledDataStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for RecalledDataStatus {
    const KNOWN_VALUES: &'static [&'static str] = &["RECALLED", "PENDING", "FAILED"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for RecalledDataStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for RecalledDataStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The kinds of lookups that may be registered.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RegisterLookupType {
    Lookup,
    Dictionary,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl RegisterLookupType {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Lookup => "Lookup",
            Self::Dictionary => "Dictionary",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for RegisterLookupType {
    fn from(value: &str) -> Self {
        match value {
            "Lookup" => Self::Lookup,
            "Dictionary" => Self::Dictionary,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for RegisterLookupType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for RegisterLookupType {
    const KNOWN_VALUES: &'static [&'static str] = &["Lookup", "Dictionary"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for RegisterLookupType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for RegisterLookupType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The format of an exported query result.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ResultFormat {
    Csv,
    Json,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl ResultFormat {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Csv => "CSV",
            Self::Json => "JSON",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for ResultFormat {
    fn from(value: &str) -> Self {
        match value {
            "CSV" => Self::Csv,
            "JSON" => Self::Json,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for ResultFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for ResultFormat {
    const KNOWN_VALUES: &'static [&'static str] = &["CSV", "JSON"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for ResultFormat {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for ResultFormat {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The kinds of detection rules.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RuleKind {
    IngestTime,
    SavedSearch,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl RuleKind {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::IngestTime => "INGEST_TIME",
            Self::SavedSearch => "SAVED_SEARCH",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for RuleKind {
    fn from(value: &str) -> Self {
        match value {
            "INGEST_TIME" => Self::IngestTime,
            "SAVED_SEARCH" => Self::SavedSearch,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for RuleKind {
    const KNOWN_VALUES: &'static [&'static str] = &["INGEST_TIME", "SAVED_SEARCH"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for RuleKind {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for RuleKind {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The kind of a scheduled task definition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ScheduledTaskKind {
    Acceleration,
    Standard,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl ScheduledTaskKind {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Acceleration => "ACCELERATION",
            Self::Standard => "STANDARD",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for ScheduledTaskKind {
    fn from(value: &str) -> Self {
        match value {
            "ACCELERATION" => Self::Acceleration,
            "STANDARD" => Self::Standard,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for ScheduledTaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for ScheduledTaskKind {
    const KNOWN_VALUES: &'static [&'static str] = &["ACCELERATION", "STANDARD"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for ScheduledTaskKind {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for ScheduledTaskKind {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The status of the last run of a scheduled task.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ScheduledTaskTaskStatus {
    Ready,
    Paused,
    Completed,
    Blocked,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl ScheduledTaskTaskStatus {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Ready => "READY",
            Self::Paused => "PAUSED",
            Self::Completed => "COMPLETED",
            Self::Blocked => "BLOCKED",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for ScheduledTaskTaskStatus {
    fn from(value: &str) -> Self {
        match value {
            "READY" => Self::Ready,
            "PAUSED" => Self::Paused,
            "COMPLETED" => Self::Completed,
            "BLOCKED" => Self::Blocked,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for ScheduledTaskTaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for ScheduledTaskTaskStatus {
    const KNOWN_VALUES: &'static [&'static str] = &["READY", "PAUSED", "COMPLETED", "BLOCKED"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for ScheduledTaskTaskStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for ScheduledTaskTaskStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The kinds of scheduled tasks.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ScheduledTaskTaskType {
    SavedSearch,
    Acceleration,
    Purge,
    AccelerationMaintenance,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl ScheduledTaskTaskType {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::SavedSearch => "SAVED_SEARCH",
            Self::Acceleration => "ACCELERATION",
            Self::Purge => "PURGE",
            Self::AccelerationMaintenance => "ACCELERATION_MAINTENANCE",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for ScheduledTaskTaskType {
    fn from(value: &str) -> Self {
        match value {
            "SAVED_SEARCH" => Self::SavedSearch,
            "ACCELERATION" => Self::Acceleration,
            "PURGE" => Self::Purge,
            "ACCELERATION_MAINTENANCE" => Self::AccelerationMaintenance,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for ScheduledTaskTaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for ScheduledTaskTaskType {
    const KNOWN_VALUES: &'static [&'static str] = &[
        "SAVED_SEARCH",
        "ACCELERATION",
        "PURGE",
        "ACCELERATION_MAINTENANCE",
    ];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for ScheduledTaskTaskType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for ScheduledTaskTaskType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The sort order, ascending or descending.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SortOrders {
    Asc,
    Desc,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl SortOrders {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for SortOrders {
    fn from(value: &str) -> Self {
        match value {
            "ASC" => Self::Asc,
            "DESC" => Self::Desc,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for SortOrders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for SortOrders {
    const KNOWN_VALUES: &'static [&'static str] = &["ASC", "DESC"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for SortOrders {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for SortOrders {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The kinds of log sources.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SourceType {
    OsFile,
    Syslog,
    Odl,
    OsWindowsSys,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl SourceType {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::OsFile => "OS_FILE",
            Self::Syslog => "SYSLOG",
            Self::Odl => "ODL",
            Self::OsWindowsSys => "OS_WINDOWS_SYS",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for SourceType {
    fn from(value: &str) -> Self {
        match value {
            "OS_FILE" => Self::OsFile,
            "SYSLOG" => Self::Syslog,
            "ODL" => Self::Odl,
            "OS_WINDOWS_SYS" => Self::OsWindowsSys,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for SourceType {
    const KNOWN_VALUES: &'static [&'static str] = &["OS_FILE", "SYSLOG", "ODL", "OS_WINDOWS_SYS"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for SourceType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for SourceType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The kind of data in a storage operation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum StorageDataType {
    Log,
    Lookup,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl StorageDataType {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Log => "LOG",
            Self::Lookup => "LOOKUP",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for StorageDataType {
    fn from(value: &str) -> Self {
        match value {
            "LOG" => Self::Log,
            "LOOKUP" => Self::Lookup,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for StorageDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for StorageDataType {
    const KNOWN_VALUES: &'static [&'static str] = &["LOG", "LOOKUP"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for StorageDataType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for StorageDataType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The kinds of storage work requests.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum StorageOperationType {
    OffboardTenancy,
    PurgeStorageData,
    RecallArchivedStorageData,
    ReleaseRecalledStorageData,
    PurgeArchivalData,
    ArchiveStorageData,
    CleanupArchivalStorageData,
    EncryptActiveData,
    EncryptArchivalData,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl StorageOperationType {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::OffboardTenancy => "OFFBOARD_TENANCY",
            Self::PurgeStorageData => "PURGE_STORAGE_DATA",
            Self::RecallArchivedStorageData => "RECALL_ARCHIVED_STORAGE_DATA",
            Self::ReleaseRecalledStorageData => "RELEASE_RECALLED_STORAGE_DATA",
            Self::PurgeArchivalData => "PURGE_ARCHIVAL_DATA",
            Self::ArchiveStorageData => "ARCHIVE_STORAGE_DATA",
            Self::CleanupArchivalStorageData => "CLEANUP_ARCHIVAL_STORAGE_DATA",
            Self::EncryptActiveData => "ENCRYPT_ACTIVE_DATA",
            Self::EncryptArchivalData => "ENCRYPT_ARCHIVAL_DATA",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for StorageOperationType {
    fn from(value: &str) -> Self {
        match value {
            "OFFBOARD_TENANCY" => Self::OffboardTenancy,
            "PURGE_STORAGE_DATA" => Self::PurgeStorageData,
            "RECALL_ARCHIVED_STORAGE_DATA" => Self::RecallArchivedStorageData,
            "RELEASE_RECALLED_STORAGE_DATA" => Self::ReleaseRecalledStorageData,
            "PURGE_ARCHIVAL_DATA" => Self::PurgeArchivalData,
            "ARCHIVE_STORAGE_DATA" => Self::ArchiveStorageData,
            "CLEANUP_ARCHIVAL_STORAGE_DATA" => Self::CleanupArchivalStorageData,
            "ENCRYPT_ACTIVE_DATA" => Self::EncryptActiveData,
            "ENCRYPT_ARCHIVAL_DATA" => Self::EncryptArchivalData,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for StorageOperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for StorageOperationType {
    const KNOWN_VALUES: &'static [&'static str] = &[
        "OFFBOARD_TENANCY",
        "PURGE_STORAGE_DATA",
        "RECALL_ARCHIVED_STORAGE_DATA",
        "RELEASE_RECALLED_STORAGE_DATA",
        "PURGE_ARCHIVAL_DATA",
        "ARCHIVE_STORAGE_DATA",
        "CLEANUP_ARCHIVAL_STORAGE_DATA",
        "ENCRYPT_ACTIVE_DATA",
        "ENCRYPT_ARCHIVAL_DATA",
    ];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for StorageOperationType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for StorageOperationType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The subsystem a query targets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SubSystemName {
    Log,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl SubSystemName {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Log => "LOG",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for SubSystemName {
    fn from(value: &str) -> Self {
        match value {
            "LOG" => Self::Log,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for SubSystemName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for SubSystemName {
    const KNOWN_VALUES: &'static [&'static str] = &["LOG"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for SubSystemName {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for SubSystemName {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The kinds of query suggestions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SuggestType {
    Command,
    Field,
    Fieldvalue,
    Term,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl SuggestType {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Command => "COMMAND",
            Self::Field => "FIELD",
            Self::Fieldvalue => "FIELDVALUE",
            Self::Term => "TERM",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for SuggestType {
    fn from(value: &str) -> Self {
        match value {
            "COMMAND" => Self::Command,
            "FIELD" => Self::Field,
            "FIELDVALUE" => Self::Fieldvalue,
            "TERM" => Self::Term,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for SuggestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for SuggestType {
    const KNOWN_VALUES: &'static [&'static str] = &["COMMAND", "FIELD", "FIELDVALUE", "TERM"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for SuggestType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for SuggestType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The kinds of templates.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TemplateType {
    Dashboard,
    Search,
    SavedSearch,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl TemplateType {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Dashboard => "DASHBOARD",
            Self::Search => "SEARCH",
            Self::SavedSearch => "SAVED_SEARCH",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for TemplateType {
    fn from(value: &str) -> Self {
        match value {
            "DASHBOARD" => Self::Dashboard,
            "SEARCH" => Self::Search,
            "SAVED_SEARCH" => Self::SavedSearch,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for TemplateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for TemplateType {
    const KNOWN_VALUES: &'static [&'static str] = &["DASHBOARD", "SEARCH", "SAVED_SEARCH"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for TemplateType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for TemplateType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The time filter applied to a list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TimeFilterType {
    TimeCreated,
    TimeUpdated,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl TimeFilterType {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::TimeCreated => "timeCreated",
            Self::TimeUpdated => "timeUpdated",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for TimeFilterType {
    fn from(value: &str) -> Self {
        match value {
            "timeCreated" => Self::TimeCreated,
            "timeUpdated" => Self::TimeUpdated,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for TimeFilterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for TimeFilterType {
    const KNOWN_VALUES: &'static [&'static str] = &["timeCreated", "timeUpdated"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for TimeFilterType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for TimeFilterType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The processing status of an uploaded file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum UploadFileStatus {
    InProgress,
    Successful,
    Failed,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl UploadFileStatus {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::InProgress => "IN_PROGRESS",
            Self::Successful => "SUCCESSFUL",
            Self::Failed => "FAILED",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for UploadFileStatus {
    fn from(value: &str) -> Self {
        match value {
            "IN_PROGRESS" => Self::InProgress,
            "SUCCESSFUL" => Self::Successful,
            "FAILED" => Self::Failed,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for UploadFileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for UploadFileStatus {
    const KNOWN_VALUES: &'static [&'static str] = &["IN_PROGRESS", "SUCCESSFUL", "FAILED"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for UploadFileStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for UploadFileStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The data types of fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValueType {
    Boolean,
    String,
    Double,
    Float,
    Long,
    Integer,
    Timestamp,
    Facet,
    Table,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl ValueType {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Boolean => "BOOLEAN",
            Self::String => "STRING",
            Self::Double => "DOUBLE",
            Self::Float => "FLOAT",
            Self::Long => "LONG",
            Self::Integer => "INTEGER",
            Self::Timestamp => "TIMESTAMP",
            Self::Facet => "FACET",
            Self::Table => "TABLE",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for ValueType {
    fn from(value: &str) -> Self {
        match value {
            "BOOLEAN" => Self::Boolean,
            "STRING" => Self::String,
            "DOUBLE" => Self::Double,
            "FLOAT" => Self::Float,
            "LONG" => Self::Long,
            "INTEGER" => Self::Integer,
            "TIMESTAMP" => Self::Timestamp,
            "FACET" => Self::Facet,
            "TABLE" => Self::Table,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for ValueType {
    const KNOWN_VALUES: &'static [&'static str] = &[
        "BOOLEAN",
        "STRING",
        "DOUBLE",
        "FLOAT",
        "LONG",
        "INTEGER",
        "TIMESTAMP",
        "FACET",
        "TABLE",
    ];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for ValueType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for ValueType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// Filters warnings by suppression state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum WarningStateFilter {
    All,
    Suppressed,
    Unsuppressed,
    /// A value not known to this version of the client library.
    UnknownValue(std::string::String),
}

impl WarningStateFilter {
    /// The value as it appears in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::All => "ALL",
            Self::Suppressed => "SUPPRESSED",
            Self::Unsuppressed => "UNSUPPRESSED",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::convert::From<&str> for WarningStateFilter {
    fn from(value: &str) -> Self {
        match value {
            "ALL" => Self::All,
            "SUPPRESSED" => Self::Suppressed,
            "UNSUPPRESSED" => Self::Unsuppressed,
            v => Self::UnknownValue(v.to_string()),
        }
    }
}

impl std::fmt::Display for WarningStateFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl gaxi::enums::ServiceEnum for WarningStateFilter {
    const KNOWN_VALUES: &'static [&'static str] = &["ALL", "SUPPRESSED", "UNSUPPRESSED"];
    fn name(&self) -> &str {
        Self::name(self)
    }
}

impl serde::ser::Serialize for WarningStateFilter {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for WarningStateFilter {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::de::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

impl gax::paginator::PageItems for LogAnalyticsAssociationCollection {
    type PageItem = crate::model::LogAnalyticsAssociation;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsAssociationParameterCollection {
    type PageItem = crate::model::LogAnalyticsAssociationParameter;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsCategoryCollection {
    type PageItem = crate::model::LogAnalyticsCategory;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsResourceCategoryCollection {
    type PageItem = crate::model::LogAnalyticsResourceCategory;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for ConfigWorkRequestCollection {
    type PageItem = crate::model::ConfigWorkRequestSummary;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsEmBridgeCollection {
    type PageItem = crate::model::LogAnalyticsEmBridgeSummary;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsEntityCollection {
    type PageItem = crate::model::LogAnalyticsEntitySummary;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsEntityTopologyCollection {
    type PageItem = crate::model::LogAnalyticsEntityTopologySummary;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsEntityTypeCollection {
    type PageItem = crate::model::LogAnalyticsEntityTypeSummary;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsLogGroupSummaryCollection {
    type PageItem = crate::model::LogAnalyticsLogGroupSummary;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsObjectCollectionRuleCollection {
    type PageItem = crate::model::LogAnalyticsObjectCollectionRuleSummary;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for IngestTimeRuleSummaryCollection {
    type PageItem = crate::model::IngestTimeRuleSummary;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for RuleSummaryCollection {
    type PageItem = crate::model::RuleSummary;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsFieldCollection {
    type PageItem = crate::model::LogAnalyticsFieldSummary;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsLabelCollection {
    type PageItem = crate::model::LogAnalyticsLabelSummary;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LabelPriorityCollection {
    type PageItem = crate::model::LabelPriority;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LabelSourceCollection {
    type PageItem = crate::model::LabelSourceSummary;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsLabelBasicCollection {
    type PageItem = crate::model::BasicLabel;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsLookupCollection {
    type PageItem = crate::model::LogAnalyticsLookup;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsMetaSourceTypeCollection {
    type PageItem = crate::model::LogAnalyticsMetaSourceType;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsParserFunctionCollection {
    type PageItem = crate::model::LogAnalyticsParserFunction;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsParserMetaPluginCollection {
    type PageItem = crate::model::LogAnalyticsParserMetaPlugin;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for CharEncodingCollection {
    type PageItem = std::string::String;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for TimezoneCollection {
    type PageItem = crate::model::Timezone;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsSourceMetaFunctionCollection {
    type PageItem = crate::model::LogAnalyticsSourceMetaFunction;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsSourcePatternCollection {
    type PageItem = crate::model::LogAnalyticsSourcePattern;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsLabelOperatorCollection {
    type PageItem = crate::model::LogAnalyticsLabelOperator;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsSourceExtendedFieldDefinitionCollection {
    type PageItem = crate::model::LogAnalyticsSourceExtendedFieldDefinition;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for EffectivePropertyCollection {
    type PageItem = crate::model::EffectivePropertySummary;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for PropertyMetadataSummaryCollection {
    type PageItem = crate::model::PropertyMetadataSummary;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogSetCollection {
    type PageItem = crate::model::LogSet;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsParserCollection {
    type PageItem = crate::model::LogAnalyticsParserSummary;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsPreferenceCollection {
    type PageItem = crate::model::LogAnalyticsPreference;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for QueryWorkRequestCollection {
    type PageItem = crate::model::QueryWorkRequestSummary;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for ScheduledTaskCollection {
    type PageItem = crate::model::ScheduledTaskSummary;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsSourceCollection {
    type PageItem = crate::model::LogAnalyticsSourceSummary;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for AutoAssociationCollection {
    type PageItem = crate::model::AutoAssociation;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsWarningCollection {
    type PageItem = crate::model::LogAnalyticsWarning;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for StorageWorkRequestCollection {
    type PageItem = crate::model::StorageWorkRequestSummary;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for WorkRequestErrorCollection {
    type PageItem = crate::model::WorkRequestError;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for RecalledDataCollection {
    type PageItem = crate::model::RecalledData;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for OverlappingRecallCollection {
    type PageItem = crate::model::OverlappingRecallSummary;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for UploadCollection {
    type PageItem = crate::model::UploadSummary;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for UploadFileCollection {
    type PageItem = crate::model::UploadFileSummary;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for UploadWarningCollection {
    type PageItem = crate::model::UploadWarningSummary;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl gax::paginator::PageItems for LogAnalyticsTemplateCollection {
    type PageItem = crate::model::LogAnalyticsTemplateSummary;

    fn into_items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }
}

impl lro::internal::WorkRequestStatus for StorageWorkRequest {
    fn state(&self) -> lro::internal::WorkRequestState {
        operation_state(
            self.status.as_ref(),
            self.percent_complete.map(|p| p as f32),
            self.status_details.as_deref(),
        )
    }
}

impl lro::internal::WorkRequestStatus for QueryWorkRequest {
    fn state(&self) -> lro::internal::WorkRequestState {
        operation_state(
            self.status.as_ref(),
            self.percent_complete.map(|p| p as f32),
            None,
        )
    }
}

impl lro::internal::WorkRequestStatus for ConfigWorkRequest {
    fn state(&self) -> lro::internal::WorkRequestState {
        use lro::internal::WorkRequestState;
        match &self.lifecycle_state {
            Some(ConfigWorkRequestLifecycleState::Succeeded) => WorkRequestState::Succeeded,
            Some(ConfigWorkRequestLifecycleState::Failed) => WorkRequestState::Failed(std::format!(
                "{} of {} associations failed",
                self.associations_failed.unwrap_or_default(),
                self.total_associations.unwrap_or_default()
            )),
            _ => WorkRequestState::Pending(self.percent_complete.map(|p| p as f32)),
        }
    }
}

fn operation_state(
    status: Option<&OperationStatus>,
    percent_complete: Option<f32>,
    details: Option<&str>,
) -> lro::internal::WorkRequestState {
    use lro::internal::WorkRequestState;
    match status {
        Some(OperationStatus::Succeeded) => WorkRequestState::Succeeded,
        Some(s @ (OperationStatus::Failed | OperationStatus::Canceled)) => {
            WorkRequestState::Failed(match details {
                Some(d) => d.to_string(),
                None => std::format!("the work request completed with status {s}"),
            })
        }
        _ => WorkRequestState::Pending(percent_complete),
    }
}
