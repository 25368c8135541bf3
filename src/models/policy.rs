use serde::{Deserialize, Serialize};

use crate::models::common::{
    DeletedUriList, ErrorMsgs, ExcludedResourcesList, ProtectedResourcesList, PublicResourcesList,
    UriList,
};
use crate::xml::Message;

/// Response attribute published on policy success (header, cookie or
/// session variable).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuccessResponse {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuccessResponseList {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub success_response: Vec<SuccessResponse>,
}

/// Identity condition: the principals a rule applies to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Identity {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub member: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ip4Range {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_ip: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ip4RangeList {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ip4_range: Vec<Ip4Range>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DayOfWeek {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub day: Vec<String>,
}

/// Temporal condition: time window and weekdays a rule is active.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Temporal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<DayOfWeek>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AttributeCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attribute_value: Vec<String>,
}

/// A named authorization condition of one of the four kinds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Condition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip4_range_list: Option<Ip4RangeList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporal: Option<Temporal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_condition: Option<AttributeCondition>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConditionsList {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub condition: Vec<Condition>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConditionNameList {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub condition_name: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CombinerMode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConditionCombiner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combiner_mode: Option<CombinerMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

/// Allow or deny rule over named conditions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Rule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_name_list: Option<ConditionNameList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_combiner: Option<ConditionCombiner>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Rules {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_rule: Option<Rule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deny_rule: Option<Rule>,
}

/// Authentication policy of an application domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RregAuthenticationPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_scheme_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri_list: Option<UriList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_uri_list: Option<DeletedUriList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_response_list: Option<SuccessResponseList>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RregAuthenticationPolicies {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rreg_authentication_policy: Vec<RregAuthenticationPolicy>,
}

/// Authorization policy of an application domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RregAuthorizationPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri_list: Option<UriList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_uri_list: Option<DeletedUriList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions_list: Option<ConditionsList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Rules>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_response_list: Option<SuccessResponseList>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RregAuthorizationPolicies {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rreg_authorization_policy: Vec<RregAuthorizationPolicy>,
}

/// Application domain payload carried inside agent-create and policy
/// requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RregApplicationDomain {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_identifier_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rreg_authentication_policies: Option<RregAuthenticationPolicies>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rreg_authorization_policies: Option<RregAuthorizationPolicies>,
}

/// Application-domain policy registration request.
///
/// Unlike the agent forms, the policy form addresses a host identifier
/// rather than an agent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicyRequest {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub server_address: String,
    pub host_identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_domain_name: Option<String>,
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
    pub rreg_application_domain: Option<RregApplicationDomain>,
}

impl PolicyRequest {
    pub fn new(
        mode: impl Into<String>,
        server_address: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        host_identifier: impl Into<String>,
        application_domain_name: impl Into<String>,
    ) -> Self {
        Self {
            mode: Some(mode.into()),
            username: Some(username.into()),
            password: Some(password.into()),
            server_address: server_address.into(),
            host_identifier: host_identifier.into(),
            application_domain_name: Some(application_domain_name.into()),
            ..Self::default()
        }
    }
}

impl Message for PolicyRequest {
    const LOCAL: &'static str = "PolicyRegRequest";
}

/// Outcome of a policy registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicyResponse {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_domain_name: Option<String>,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_msgs: Option<ErrorMsgs>,
}

impl Message for PolicyResponse {
    const LOCAL: &'static str = "PolicyRegResponse";
}

#[cfg(test)]
mod tests {
    use super::{
        PolicyRequest, RregApplicationDomain, RregAuthenticationPolicies,
        RregAuthenticationPolicy,
    };
    use crate::models::common::{UriList, UriResource};
    use crate::xml::Message;

    #[test]
    fn new_reproduces_host_identifier_and_domain() {
        let request = PolicyRequest::new(
            "CREATE",
            "http://oam.example.com:5575",
            "admin",
            "secret",
            "payrollHost",
            "PayrollDomain",
        );
        assert_eq!(request.host_identifier, "payrollHost");
        assert_eq!(
            request.application_domain_name.as_deref(),
            Some("PayrollDomain")
        );
        assert!(request.rreg_application_domain.is_none());
    }

    #[test]
    fn application_domain_round_trips_nested_policies() {
        let mut request = PolicyRequest::new(
            "CREATE",
            "http://oam.example.com:5575",
            "admin",
            "secret",
            "payrollHost",
            "PayrollDomain",
        );
        request.rreg_application_domain = Some(RregApplicationDomain {
            name: Some("PayrollDomain".to_string()),
            host_identifier_name: Some("payrollHost".to_string()),
            rreg_authentication_policies: Some(RregAuthenticationPolicies {
                rreg_authentication_policy: vec![RregAuthenticationPolicy {
                    name: Some("Protected Resource Policy".to_string()),
                    authentication_scheme_name: Some("LDAPScheme".to_string()),
                    uri_list: Some(UriList::new(vec![
                        UriResource::new("/payroll/**", "payroll pages", ""),
                        UriResource::new("/reports/**", "report pages", ""),
                    ])),
                    ..Default::default()
                }],
            }),
            rreg_authorization_policies: None,
        });
        let xml = request.to_xml().expect("serialize");
        let parsed = PolicyRequest::from_xml(&xml).expect("parse");
        let domain = parsed.rreg_application_domain.expect("domain");
        let policies = domain
            .rreg_authentication_policies
            .expect("policies")
            .rreg_authentication_policy;
        assert_eq!(policies.len(), 1);
        let uris: Vec<_> = policies[0]
            .uri_list
            .as_ref()
            .expect("uri list")
            .uri_resource
            .iter()
            .filter_map(|u| u.uri.as_deref())
            .collect();
        assert_eq!(uris, vec!["/payroll/**", "/reports/**"]);
    }
}
