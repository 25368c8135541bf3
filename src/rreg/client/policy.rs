use super::RregClient;
use crate::error::Error;
use crate::models::{PolicyRequest, PolicyResponse};
use crate::rreg::common;

impl RregClient {
    /// Registers application-domain policies for a host identifier.
    pub fn register_policy(&self, request: &PolicyRequest) -> Result<PolicyResponse, Error> {
        self.post_xml(common::ENDPOINT_POLICY, request)
    }

    /// Updates previously registered application-domain policies.
    pub fn update_policy(&self, request: &PolicyRequest) -> Result<PolicyResponse, Error> {
        self.post_xml(common::ENDPOINT_POLICY, request)
    }
}
