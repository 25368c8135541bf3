use crate::client_defaults::DEFAULT_TIMEOUT;
use crate::error::{read_body_with_limit, registration_error, Error, MAX_ERROR_BODY_BYTES};
use crate::xml::Message;
use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Certificate, Identity, StatusCode};
use std::time::Duration;
use url::Url;

use super::common;

mod agent;
mod policy;

/// Builder for [`RregClient`].
///
/// The base URL is the registration root of the Access Server, e.g.
/// `https://oam.example.com:7001/oam/services/rest/11.1.2.0.0/rreg`.
/// No transport-level authentication is configured here: the administrator
/// credentials travel inside each request envelope.
pub struct RregClientBuilder {
    base_url: Url,
    timeout: Option<Duration>,
    disable_redirect: bool,
    identity: Option<Identity>,
    ca_certs: Vec<Certificate>,
}

impl RregClientBuilder {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, Error> {
        Ok(Self {
            base_url: Url::parse(base_url.as_ref())?,
            timeout: Some(DEFAULT_TIMEOUT),
            disable_redirect: false,
            identity: None,
            ca_certs: Vec::new(),
        })
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn disable_redirect(mut self, disable: bool) -> Self {
        self.disable_redirect = disable;
        self
    }

    pub fn mtls_identity_from_pem(mut self, identity_pem: &[u8]) -> Result<Self, Error> {
        self.identity = Some(Identity::from_pem(identity_pem)?);
        Ok(self)
    }

    pub fn mtls_identity_from_parts(
        mut self,
        cert_pem: &[u8],
        key_pem: &[u8],
    ) -> Result<Self, Error> {
        let mut combined = Vec::new();
        combined.extend_from_slice(cert_pem);
        if !combined.ends_with(b"\n") {
            combined.push(b'\n');
        }
        combined.extend_from_slice(key_pem);
        self.identity = Some(Identity::from_pem(&combined)?);
        Ok(self)
    }

    pub fn add_ca_cert_pem(mut self, ca_pem: &[u8]) -> Result<Self, Error> {
        self.ca_certs.push(Certificate::from_pem(ca_pem)?);
        Ok(self)
    }

    pub fn build(self) -> Result<RregClient, Error> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if self.disable_redirect {
            builder = builder.redirect(reqwest::redirect::Policy::none());
        }
        if let Some(identity) = self.identity {
            builder = builder.identity(identity);
        }
        for cert in self.ca_certs {
            builder = builder.add_root_certificate(cert);
        }
        let http = builder.build()?;
        Ok(RregClient {
            base_url: self.base_url,
            http,
        })
    }
}

/// Blocking client for the Access Server's remote registration endpoint.
pub struct RregClient {
    base_url: Url,
    http: HttpClient,
}

impl RregClient {
    pub fn builder(base_url: impl AsRef<str>) -> Result<RregClientBuilder, Error> {
        RregClientBuilder::new(base_url)
    }

    fn build_url(&self, segments: &[&str]) -> Result<Url, Error> {
        common::build_url(
            &self.base_url,
            segments,
            common::BuildUrlOptions::SYNC_CLIENT,
        )
    }

    /// Marshals the request, POSTs it to the given endpoint segment and
    /// unmarshals the response document.
    fn post_xml<Q, R>(&self, segment: &str, request: &Q) -> Result<R, Error>
    where
        Q: Message,
        R: Message,
    {
        let url = self.build_url(&[segment])?;
        let body = request.to_xml()?;
        log::debug!("POST {url} ({})", Q::LOCAL);
        let resp = self
            .http
            .post(url)
            .header(CONTENT_TYPE, common::CONTENT_TYPE_XML)
            .body(body)
            .send()?;
        self.expect_ok_xml(resp)
    }

    fn expect_ok_xml<R: Message>(&self, resp: Response) -> Result<R, Error> {
        if resp.status() == StatusCode::OK {
            R::from_xml(&resp.text()?)
        } else {
            self.parse_error(resp)
        }
    }

    fn parse_error<T>(&self, mut resp: Response) -> Result<T, Error> {
        let status = resp.status();
        let body = read_body_with_limit(&mut resp, MAX_ERROR_BODY_BYTES)?;
        Err(registration_error(status, &body))
    }
}
