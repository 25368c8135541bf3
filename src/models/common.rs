use serde::{Deserialize, Serialize};

/// Access Server endpoint entry of a primary/secondary server list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Server {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_max: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrimaryServerList {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub server: Vec<Server>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecondaryServerList {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub server: Vec<Server>,
}

/// One host:port spelling under which a protected site is reachable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostPortVariations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostPortVariationsList {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub host_port_variations: Vec<HostPortVariations>,
}

/// Resource URI entry of an application-domain policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UriResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_string: Option<String>,
}

impl UriResource {
    pub fn new(
        uri: impl Into<String>,
        description: impl Into<String>,
        query_string: impl Into<String>,
    ) -> Self {
        Self {
            uri: Some(uri.into()),
            description: Some(description.into()),
            query_string: Some(query_string.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UriList {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uri_resource: Vec<UriResource>,
}

impl UriList {
    pub fn new(uri_resource: Vec<UriResource>) -> Self {
        Self { uri_resource }
    }
}

/// Resources removed from a policy on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeletedUriList {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uri_resource: Vec<UriResource>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogInUrls {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub url: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogOutUrls {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub url: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotEnforcedUrls {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub url: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtectedResourcesList {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resource: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PublicResourcesList {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resource: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExcludedResourcesList {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resource: Vec<String>,
}

/// Addresses exempt from agent IP validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IpValidationExceptions {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ip_address: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserDefinedParam {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserDefinedParameters {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_defined_param: Vec<UserDefinedParam>,
}

/// Server-side failure detail attached to a response envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ErrorMsgs {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub message: Vec<String>,
}
