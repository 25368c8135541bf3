use serde::{Deserialize, Serialize};

use crate::models::common::{ErrorMsgs, LogInUrls, LogOutUrls, NotEnforcedUrls};
use crate::models::envelope::BaseRequest;
use crate::xml::Message;

/// One user-attribute to agent-property mapping entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AttributeMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AttrMappingValue {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mapping: Vec<AttributeMapping>,
}

impl AttrMappingValue {
    pub fn new(mapping: Vec<AttributeMapping>) -> Self {
        Self { mapping }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListValue {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<String>,
}

impl ListValue {
    pub fn new(value: Vec<String>) -> Self {
        Self { value }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileAttributeMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_mapping_value: Option<AttrMappingValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionAttributeMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_mapping_value: Option<AttrMappingValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResponseAttributeMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_mapping_value: Option<AttrMappingValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Property {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MiscellaneousProperty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MiscellaneousProperties {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub miscellaneous_property: Vec<MiscellaneousProperty>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResponseProperties {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub property: Vec<Property>,
}

/// Registration request for an OpenSSO agent.
///
/// The OpenSSO forms interleave `agentBaseUrl` between the envelope's
/// `hostIdentifier` and `agentName`; `agentType` (J2EE or WebAgent) is a
/// separate element from the envelope's `type` discriminator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpenSSOCreate {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub server_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_base_url: Option<String>,
    pub agent_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_session: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_debug_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_debug_file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_audit_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_audit_file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_encode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sso_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_denied_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_in_urls: Option<LogInUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_out_urls: Option<LogOutUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_enforced_urls: Option<NotEnforcedUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id_param_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id_param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_mapping_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_attribute_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_principal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_attribute_fetch_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_attribute_mapping: Option<ProfileAttributeMapping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_attribute_fetch_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_attribute_mapping: Option<SessionAttributeMapping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_attribute_fetch_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_attribute_mapping: Option<ResponseAttributeMapping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miscellaneous_properties: Option<MiscellaneousProperties>,
}

impl OpenSSOCreate {
    pub fn new(
        mode: impl Into<String>,
        server_address: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        agent_name: impl Into<String>,
    ) -> Self {
        Self {
            type_: Some(BaseRequest::TYPE_OPENSSO.to_string()),
            mode: Some(mode.into()),
            username: Some(username.into()),
            password: Some(password.into()),
            server_address: server_address.into(),
            agent_name: agent_name.into(),
            ..Self::default()
        }
    }
}

impl Message for OpenSSOCreate {
    const LOCAL: &'static str = "OpenSSORegRequest";
}

/// Update request for an existing OpenSSO agent registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpenSSOUpdate {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub server_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_base_url: Option<String>,
    pub agent_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_access_client_passwd_flag: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_session: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_debug_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_debug_file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_audit_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_audit_file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_encode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sso_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_denied_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_in_urls: Option<LogInUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_out_urls: Option<LogOutUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_enforced_urls: Option<NotEnforcedUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id_param_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id_param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_mapping_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_attribute_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_principal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_attribute_fetch_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_attribute_mapping: Option<ProfileAttributeMapping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_attribute_fetch_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_attribute_mapping: Option<SessionAttributeMapping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_attribute_fetch_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_attribute_mapping: Option<ResponseAttributeMapping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miscellaneous_properties: Option<MiscellaneousProperties>,
}

impl OpenSSOUpdate {
    pub fn new(
        mode: impl Into<String>,
        server_address: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        agent_name: impl Into<String>,
    ) -> Self {
        Self {
            type_: Some(BaseRequest::TYPE_OPENSSO.to_string()),
            mode: Some(mode.into()),
            username: Some(username.into()),
            password: Some(password.into()),
            server_address: server_address.into(),
            agent_name: agent_name.into(),
            ..Self::default()
        }
    }
}

impl Message for OpenSSOUpdate {
    const LOCAL: &'static str = "OpenSSOUpdateAgentRegRequest";
}

/// Registration outcome for an OpenSSO agent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpenSSOResponse {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    pub username: String,
    pub password: String,
    pub agent_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_encryption_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_debug_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_audit_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_audit_file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_server_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_denied_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_out_urls: Option<LogOutUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_timeout_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_encode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_in_urls: Option<LogInUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_mapping_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_attribute_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_principal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_attribute_fetch_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_attribute_fetch_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_attribute_fetch_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_attribute_mapping: Option<ProfileAttributeMapping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_attribute_mapping: Option<SessionAttributeMapping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_attribute_mapping: Option<ResponseAttributeMapping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_properties: Option<ResponseProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_msgs: Option<ErrorMsgs>,
}

impl Message for OpenSSOResponse {
    const LOCAL: &'static str = "OpenSSORegResponse";
}
