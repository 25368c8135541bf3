use serde::{Deserialize, Serialize};

use crate::models::common::{
    ErrorMsgs, ExcludedResourcesList, ProtectedResourcesList, PublicResourcesList,
};
use crate::models::envelope::BaseRequest;
use crate::xml::Message;

/// Registration request for an Oracle SSO (mod_osso) agent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrclSSOCreate {
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
    pub application_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_create_policy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sso_server_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oracle_home_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_host: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logout_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected_resources_list: Option<ProtectedResourcesList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_resources_list: Option<PublicResourcesList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_resources_list: Option<ExcludedResourcesList>,
}

impl OrclSSOCreate {
    pub fn new(
        mode: impl Into<String>,
        server_address: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        agent_name: impl Into<String>,
    ) -> Self {
        Self {
            type_: Some(BaseRequest::TYPE_ORCLSSO.to_string()),
            mode: Some(mode.into()),
            username: Some(username.into()),
            password: Some(password.into()),
            server_address: server_address.into(),
            agent_name: agent_name.into(),
            ..Self::default()
        }
    }
}

impl Message for OrclSSOCreate {
    const LOCAL: &'static str = "OSSORegRequest";
}

/// Update request for an existing Oracle SSO agent registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrclSSOUpdate {
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
    pub sso_server_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oracle_home_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_host: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logout_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl OrclSSOUpdate {
    pub fn new(
        mode: impl Into<String>,
        server_address: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        agent_name: impl Into<String>,
    ) -> Self {
        Self {
            type_: Some(BaseRequest::TYPE_ORCLSSO.to_string()),
            mode: Some(mode.into()),
            username: Some(username.into()),
            password: Some(password.into()),
            server_address: server_address.into(),
            agent_name: agent_name.into(),
            ..Self::default()
        }
    }
}

impl Message for OrclSSOUpdate {
    const LOCAL: &'static str = "OSSOUpdateAgentRegRequest";
}

/// Registration outcome for an Oracle SSO agent, carrying the mod_osso
/// bootstrap material the partner application writes into its osso.conf.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrclSSOResponse {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    pub username: String,
    pub password: String,
    pub agent_name: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sso_server_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logout_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_msgs: Option<ErrorMsgs>,
}

impl Message for OrclSSOResponse {
    const LOCAL: &'static str = "OSSORegResponse";
}

#[cfg(test)]
mod tests {
    use super::{OrclSSOCreate, OrclSSOResponse};
    use crate::models::envelope::BaseRequest;
    use crate::xml::Message;

    #[test]
    fn new_sets_osso_discriminator() {
        let request = OrclSSOCreate::new(
            "OPEN",
            "http://oam.example.com:5575",
            "admin",
            "secret",
            "ossoAgent",
        );
        assert_eq!(request.type_.as_deref(), Some(BaseRequest::TYPE_ORCLSSO));
        assert_eq!(request.oracle_home_path, None);
        assert_eq!(request.admin_info, None);
    }

    #[test]
    fn response_parses_bootstrap_material() {
        let xml = concat!(
            "<OSSORegResponse>",
            "<agentName>ossoAgent</agentName>",
            "<state>valid</state>",
            "<siteId>1234</siteId>",
            "<siteToken>T0KEN</siteToken>",
            "<loginUrl>http://oam.example.com/sso/auth</loginUrl>",
            "</OSSORegResponse>",
        );
        let response = OrclSSOResponse::from_xml(xml).expect("parse");
        assert_eq!(response.state, "valid");
        assert_eq!(response.site_id.as_deref(), Some("1234"));
        assert_eq!(response.site_token.as_deref(), Some("T0KEN"));
        assert_eq!(response.login_url.as_deref(), Some("http://oam.example.com/sso/auth"));
        assert_eq!(response.cancel_url, None);
    }
}
