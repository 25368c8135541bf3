use super::RregAsyncClient;
use crate::error::Error;
use crate::models::{
    Agent10gCreate, Agent10gResponse, Agent10gUpdate, Agent11gCreate, Agent11gResponse,
    Agent11gUpdate, BaseRequest, BaseResponse, OpenSSOCreate, OpenSSOResponse, OpenSSOUpdate,
    OrclSSOCreate, OrclSSOResponse, OrclSSOUpdate,
};
use crate::rreg::common;

impl RregAsyncClient {
    /// Registers a 10g webgate.
    pub async fn register_agent_10g(
        &self,
        request: &Agent10gCreate,
    ) -> Result<Agent10gResponse, Error> {
        self.post_xml(common::ENDPOINT_AGENT, request).await
    }

    /// Updates an existing 10g webgate registration.
    pub async fn update_agent_10g(
        &self,
        request: &Agent10gUpdate,
    ) -> Result<Agent10gResponse, Error> {
        self.post_xml(common::ENDPOINT_AGENT, request).await
    }

    /// Registers an 11g webgate.
    pub async fn register_agent_11g(
        &self,
        request: &Agent11gCreate,
    ) -> Result<Agent11gResponse, Error> {
        self.post_xml(common::ENDPOINT_AGENT, request).await
    }

    /// Updates an existing 11g webgate registration.
    pub async fn update_agent_11g(
        &self,
        request: &Agent11gUpdate,
    ) -> Result<Agent11gResponse, Error> {
        self.post_xml(common::ENDPOINT_AGENT, request).await
    }

    /// Registers an Oracle SSO (mod_osso) agent.
    pub async fn register_orclsso(
        &self,
        request: &OrclSSOCreate,
    ) -> Result<OrclSSOResponse, Error> {
        self.post_xml(common::ENDPOINT_AGENT, request).await
    }

    /// Updates an existing Oracle SSO agent registration.
    pub async fn update_orclsso(
        &self,
        request: &OrclSSOUpdate,
    ) -> Result<OrclSSOResponse, Error> {
        self.post_xml(common::ENDPOINT_AGENT, request).await
    }

    /// Registers an OpenSSO agent.
    pub async fn register_opensso(
        &self,
        request: &OpenSSOCreate,
    ) -> Result<OpenSSOResponse, Error> {
        self.post_xml(common::ENDPOINT_AGENT, request).await
    }

    /// Updates an existing OpenSSO agent registration.
    pub async fn update_opensso(
        &self,
        request: &OpenSSOUpdate,
    ) -> Result<OpenSSOResponse, Error> {
        self.post_xml(common::ENDPOINT_AGENT, request).await
    }

    /// Fetches the registration detail of an existing agent.
    pub async fn agent_report(&self, request: &BaseRequest) -> Result<BaseResponse, Error> {
        self.post_xml(common::ENDPOINT_AGENT, request).await
    }

    /// Asks the server whether an agent registration of the given name and
    /// variant exists and is consistent.
    pub async fn validate_agent(&self, request: &BaseRequest) -> Result<BaseResponse, Error> {
        self.post_xml(common::ENDPOINT_AGENT, request).await
    }
}
