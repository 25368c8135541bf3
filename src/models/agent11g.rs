use serde::{Deserialize, Serialize};

use crate::models::common::{
    ErrorMsgs, ExcludedResourcesList, HostPortVariationsList, IpValidationExceptions, LogOutUrls,
    PrimaryServerList, ProtectedResourcesList, PublicResourcesList, SecondaryServerList,
    UserDefinedParameters,
};
use crate::models::envelope::BaseRequest;
use crate::models::policy::RregApplicationDomain;
use crate::xml::{base64_binary, Message};

/// Registration request for an 11g webgate.
///
/// Superset of the 10g form: adds token validity and the credential
/// collector / token operation switches, drops the 10g cookie-session
/// fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Agent11gCreate {
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
    pub preferred_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cache_elems: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_validity_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_session_time: Option<i32>,
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
    pub allow_token_scope_operations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_master_token_retrieval: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_credential_collector_operations: Option<bool>,
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
    pub logout_callback_url: Option<String>,
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

impl Agent11gCreate {
    pub fn new(
        mode: impl Into<String>,
        server_address: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        agent_name: impl Into<String>,
    ) -> Self {
        Self {
            type_: Some(BaseRequest::TYPE_AGENT11.to_string()),
            mode: Some(mode.into()),
            username: Some(username.into()),
            password: Some(password.into()),
            server_address: server_address.into(),
            agent_name: agent_name.into(),
            ..Self::default()
        }
    }
}

impl Message for Agent11gCreate {
    const LOCAL: &'static str = "OAM11GRegRequest";
}

/// Update request for an existing 11g webgate registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Agent11gUpdate {
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
    pub max_cache_elems: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_validity_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_session_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_threshold: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aaa_timeout_threshold: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_out_urls: Option<LogOutUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logout_callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logout_redirect_url: Option<String>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_token_scope_operations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_master_token_retrieval: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_credential_collector_operations: Option<bool>,
}

impl Agent11gUpdate {
    pub fn new(
        mode: impl Into<String>,
        server_address: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        agent_name: impl Into<String>,
    ) -> Self {
        Self {
            type_: Some(BaseRequest::TYPE_AGENT11.to_string()),
            mode: Some(mode.into()),
            username: Some(username.into()),
            password: Some(password.into()),
            server_address: server_address.into(),
            agent_name: agent_name.into(),
            ..Self::default()
        }
    }
}

impl Message for Agent11gUpdate {
    const LOCAL: &'static str = "OAM11GUpdateAgentRegRequest";
}

/// Registration outcome for an 11g webgate, carrying the generated agent
/// profile and artifacts (secret key, certificate material in `cert` mode).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Agent11gResponse {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    pub username: String,
    pub password: String,
    pub agent_name: String,
    pub access_client_passwd: String,
    pub preferred_host: String,
    pub state: String,
    pub max_cache_elems: i32,
    pub cache_timeout: i32,
    pub token_validity_period: i32,
    pub max_connections: i32,
    pub max_session_time: i32,
    pub failover_threshold: i32,
    pub aaa_timeout_threshold: i32,
    pub sleep_for: i32,
    pub debug: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<String>,
    pub deny_on_not_protected: i32,
    pub allow_management_operations: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_token_scope_operations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_master_token_retrieval: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_credential_collector_operations: Option<bool>,
    pub cache_pragma_header: String,
    pub cache_control_header: String,
    pub ip_validation: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_validation_exceptions: Option<IpValidationExceptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_passphrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_out_urls: Option<LogOutUrls>,
    pub logout_redirect_url: String,
    pub logout_callback_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logout_target_url_param_name: Option<String>,
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

impl Message for Agent11gResponse {
    const LOCAL: &'static str = "OAM11GRegResponse";
}

#[cfg(test)]
mod tests {
    use super::{Agent11gCreate, Agent11gResponse};
    use crate::models::common::Server;
    use crate::models::envelope::BaseRequest;
    use crate::xml::Message;

    #[test]
    fn new_reproduces_envelope_and_sets_discriminator() {
        let request = Agent11gCreate::new(
            "OPEN",
            "http://oam.example.com:5575",
            "admin",
            "secret",
            "myAgent",
        );
        assert_eq!(request.agent_name, "myAgent");
        assert_eq!(request.mode.as_deref(), Some("OPEN"));
        assert_eq!(request.server_address, "http://oam.example.com:5575");
        assert_eq!(request.username.as_deref(), Some("admin"));
        assert_eq!(request.password.as_deref(), Some("secret"));
        assert_eq!(request.type_.as_deref(), Some(BaseRequest::TYPE_AGENT11));
        assert_eq!(request.security, None);
    }

    #[test]
    fn optional_fields_stay_unset_until_assigned() {
        let mut request = Agent11gCreate::default();
        assert_eq!(request.token_validity_period, None);
        request.token_validity_period = Some(3600);
        assert_eq!(request.token_validity_period, Some(3600));
    }

    #[test]
    fn serialized_sequence_keeps_schema_order() {
        let mut request = Agent11gCreate::new(
            "OPEN",
            "http://oam.example.com:5575",
            "admin",
            "secret",
            "myAgent",
        );
        request.agent_base_url = Some("http://app.example.com:7777".to_string());
        request.auto_create_policy = Some(true);
        request.security = Some("open".to_string());
        let xml = request.to_xml().expect("serialize");
        let order = [
            "<agentName>",
            "<agentBaseUrl>",
            "<autoCreatePolicy>",
            "<security>",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|tag| xml.find(tag).unwrap_or_else(|| panic!("missing {tag}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "order: {xml}");
    }

    #[test]
    fn response_round_trips_server_lists_in_order() {
        let mut response = Agent11gResponse::default();
        for port in [5575, 5576, 5577] {
            response.primary_server_list.server.push(Server {
                server_host: Some("oam.example.com".to_string()),
                server_port: Some(port),
                connection_max: None,
            });
        }
        let xml = response.to_xml().expect("serialize");
        let parsed = Agent11gResponse::from_xml(&xml).expect("parse");
        let ports: Vec<i32> = parsed
            .primary_server_list
            .server
            .iter()
            .filter_map(|s| s.server_port)
            .collect();
        assert_eq!(ports, vec![5575, 5576, 5577]);
    }
}
