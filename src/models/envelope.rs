use serde::{Deserialize, Serialize};

use crate::models::common::ErrorMsgs;
use crate::xml::Message;

/// Plain request envelope.
///
/// Carries the fields every registration request starts with. The concrete
/// create/update records repeat these at the head of their element sequence;
/// this type is also a complete payload of its own, used by the agent report
/// and validation operations where no variant-specific fields are needed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BaseRequest {
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
}

impl BaseRequest {
    /// Discriminator for 10g webgate requests.
    pub const TYPE_AGENT10: &'static str = "OAM10G";
    /// Discriminator for 11g webgate requests.
    pub const TYPE_AGENT11: &'static str = "OAM11G";
    /// Discriminator for Oracle SSO (mod_osso) requests.
    pub const TYPE_ORCLSSO: &'static str = "OSSO";
    /// Discriminator for OpenSSO requests.
    pub const TYPE_OPENSSO: &'static str = "OpenSSO";

    pub fn new(
        mode: impl Into<String>,
        server_address: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        agent_name: impl Into<String>,
    ) -> Self {
        Self {
            type_: None,
            mode: Some(mode.into()),
            username: Some(username.into()),
            password: Some(password.into()),
            server_address: server_address.into(),
            host_identifier: None,
            agent_name: agent_name.into(),
        }
    }

    pub fn with_type(
        agent_type: impl Into<String>,
        mode: impl Into<String>,
        server_address: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        agent_name: impl Into<String>,
    ) -> Self {
        let mut request = Self::new(mode, server_address, username, password, agent_name);
        request.type_ = Some(agent_type.into());
        request
    }
}

impl Message for BaseRequest {
    const LOCAL: &'static str = "OAMRegRequest";
}

/// Plain response envelope.
///
/// Every response repeats these fields; the standalone form is what the
/// report and validation operations return, and what error bodies are
/// parsed as.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BaseResponse {
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
    pub error_msgs: Option<ErrorMsgs>,
}

impl Message for BaseResponse {
    const LOCAL: &'static str = "OAMRegResponse";
}

#[cfg(test)]
mod tests {
    use super::BaseRequest;
    use crate::xml::Message;

    #[test]
    fn new_reproduces_envelope_values() {
        let request = BaseRequest::new(
            "OPEN",
            "http://oam.example.com:5575",
            "admin",
            "secret",
            "myAgent",
        );
        assert_eq!(request.mode.as_deref(), Some("OPEN"));
        assert_eq!(request.server_address, "http://oam.example.com:5575");
        assert_eq!(request.username.as_deref(), Some("admin"));
        assert_eq!(request.password.as_deref(), Some("secret"));
        assert_eq!(request.agent_name, "myAgent");
        assert_eq!(request.type_, None);
        assert_eq!(request.host_identifier, None);
    }

    #[test]
    fn default_request_serializes_required_elements_empty() {
        let xml = BaseRequest::default().to_xml().expect("serialize");
        assert!(xml.contains("<serverAddress/>"));
        assert!(xml.contains("<agentName/>"));
        assert!(!xml.contains("<mode>"));
        assert!(!xml.contains("<type>"));
    }

    #[test]
    fn element_order_follows_schema_sequence() {
        let request = BaseRequest::with_type(
            BaseRequest::TYPE_AGENT11,
            "OPEN",
            "http://oam.example.com:5575",
            "admin",
            "secret",
            "myAgent",
        );
        let xml = request.to_xml().expect("serialize");
        let order = [
            "<type>",
            "<mode>",
            "<username>",
            "<password>",
            "<serverAddress>",
            "<agentName>",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|tag| xml.find(tag).unwrap_or_else(|| panic!("missing {tag}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "order: {xml}");
    }
}
