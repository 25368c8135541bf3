use super::RregAsyncClient;
use crate::error::Error;
use crate::models::{PolicyRequest, PolicyResponse};
use crate::rreg::common;

impl RregAsyncClient {
    /// Registers application-domain policies for a host identifier.
    pub async fn register_policy(&self, request: &PolicyRequest) -> Result<PolicyResponse, Error> {
        self.post_xml(common::ENDPOINT_POLICY, request).await
    }

    /// Updates previously registered application-domain policies.
    pub async fn update_policy(&self, request: &PolicyRequest) -> Result<PolicyResponse, Error> {
        self.post_xml(common::ENDPOINT_POLICY, request).await
    }
}
