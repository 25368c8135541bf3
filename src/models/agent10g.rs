use serde::{Deserialize, Serialize};

use crate::models::common::{
    ErrorMsgs, ExcludedResourcesList, HostPortVariationsList, IpValidationExceptions, LogOutUrls,
    PrimaryServerList, ProtectedResourcesList, PublicResourcesList, SecondaryServerList,
    UserDefinedParameters,
};
use crate::models::envelope::BaseRequest;
use crate::models::policy::RregApplicationDomain;
use crate::xml::{base64_binary, Message};

/// Registration request for a 10g webgate.
///
/// Field order is the schema `sequence` order of the `OAMRegRequest`
/// document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Agent10gCreate {
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
    pub agent_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_host: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_port_variations_list: Option<HostPortVariationsList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_create_policy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_client_passwd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_cookie_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cache_elems: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_session_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_session_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_session_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_threshold: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aaa_timeout_threshold: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_for: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deny_on_not_protected: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_management_operations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_pragma_header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_control_header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_validation: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_validation_exceptions: Option<IpValidationExceptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_out_urls: Option<LogOutUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logout_target_url_param_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_server_list: Option<PrimaryServerList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_server_list: Option<SecondaryServerList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected_resources_list: Option<ProtectedResourcesList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_resources_list: Option<PublicResourcesList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_resources_list: Option<ExcludedResourcesList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected_authn_scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_authn_scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_defined_parameters: Option<UserDefinedParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rreg_application_domain: Option<RregApplicationDomain>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fusion_app_registration: Option<bool>,
}

impl Agent10gCreate {
    pub fn new(
        mode: impl Into<String>,
        server_address: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        agent_name: impl Into<String>,
    ) -> Self {
        Self {
            type_: Some(BaseRequest::TYPE_AGENT10.to_string()),
            mode: Some(mode.into()),
            username: Some(username.into()),
            password: Some(password.into()),
            server_address: server_address.into(),
            agent_name: agent_name.into(),
            ..Self::default()
        }
    }
}

impl Message for Agent10gCreate {
    const LOCAL: &'static str = "OAMRegRequest";
}

/// Update request for an existing 10g webgate registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Agent10gUpdate {
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
    pub agent_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_client_passwd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_access_client_passwd_flag: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_cookie_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cache_elems: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_session_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_session_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_session_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_threshold: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aaa_timeout_threshold: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_out_urls: Option<LogOutUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logout_target_url_param_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_server_list: Option<PrimaryServerList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_server_list: Option<SecondaryServerList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_defined_parameters: Option<UserDefinedParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_for: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_pragma_header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_control_header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_validation: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_validation_exceptions: Option<IpValidationExceptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deny_on_not_protected: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_management_operations: Option<bool>,
}

impl Agent10gUpdate {
    pub fn new(
        mode: impl Into<String>,
        server_address: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        agent_name: impl Into<String>,
    ) -> Self {
        Self {
            type_: Some(BaseRequest::TYPE_AGENT10.to_string()),
            mode: Some(mode.into()),
            username: Some(username.into()),
            password: Some(password.into()),
            server_address: server_address.into(),
            agent_name: agent_name.into(),
            ..Self::default()
        }
    }
}

impl Message for Agent10gUpdate {
    const LOCAL: &'static str = "OAMUpdateAgentRegRequest";
}

/// Registration outcome for a 10g webgate, carrying the generated agent
/// profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Agent10gResponse {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    pub username: String,
    pub password: String,
    pub agent_name: String,
    pub access_client_passwd: String,
    pub primary_cookie_domain: String,
    pub preferred_host: String,
    pub state: String,
    pub max_cache_elems: i32,
    pub cache_timeout: i32,
    pub cookie_session_time: i32,
    pub max_connections: i32,
    pub max_session_time: i32,
    pub idle_session_timeout: i32,
    pub failover_threshold: i32,
    pub aaa_timeout_threshold: i32,
    pub sleep_for: i32,
    pub debug: bool,
    pub security: String,
    pub deny_on_not_protected: i32,
    pub allow_management_operations: bool,
    pub cache_pragma_header: String,
    pub cache_control_header: String,
    pub ip_validation: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_validation_exceptions: Option<IpValidationExceptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_passphrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_out_urls: Option<LogOutUrls>,
    pub primary_server_list: PrimaryServerList,
    pub secondary_server_list: SecondaryServerList,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_msgs: Option<ErrorMsgs>,
    #[serde(skip_serializing_if = "Option::is_none", with = "base64_binary")]
    pub cert: Option<Vec<u8>>,
    #[serde(
        rename = "cert-key",
        skip_serializing_if = "Option::is_none",
        with = "base64_binary"
    )]
    pub cert_key: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_defined_parameters: Option<UserDefinedParameters>,
}

impl Message for Agent10gResponse {
    const LOCAL: &'static str = "OAMRegResponse";
}

#[cfg(test)]
mod tests {
    use super::{Agent10gCreate, Agent10gResponse};
    use crate::models::envelope::BaseRequest;
    use crate::xml::Message;

    #[test]
    fn new_sets_discriminator_and_envelope() {
        let request = Agent10gCreate::new(
            "OPEN",
            "http://oam.example.com:5575",
            "admin",
            "secret",
            "legacyAgent",
        );
        assert_eq!(request.type_.as_deref(), Some(BaseRequest::TYPE_AGENT10));
        assert_eq!(request.agent_name, "legacyAgent");
        assert_eq!(request.security, None);
        assert_eq!(request.primary_cookie_domain, None);
    }

    #[test]
    fn response_defaults_absent_primitives_to_zero_values() {
        let xml = concat!(
            "<OAMRegResponse>",
            "<agentName>legacyAgent</agentName>",
            "<state>valid</state>",
            "</OAMRegResponse>",
        );
        let response = Agent10gResponse::from_xml(xml).expect("parse");
        assert_eq!(response.agent_name, "legacyAgent");
        assert_eq!(response.state, "valid");
        assert_eq!(response.max_cache_elems, 0);
        assert!(!response.debug);
        assert!(response.primary_server_list.server.is_empty());
        assert_eq!(response.cert, None);
    }
}
