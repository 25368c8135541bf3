use crate::client_defaults::DEFAULT_TIMEOUT;
use crate::error::{read_body_with_limit_async, registration_error, Error, MAX_ERROR_BODY_BYTES};
use crate::rreg::common;
use crate::xml::Message;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Certificate, Client as HttpClient, Identity, Response, StatusCode};
use std::time::Duration;
use url::Url;

mod agent;
mod policy;

/// Builder for [`RregAsyncClient`].
///
/// Available when the `async-client` feature is enabled. The `base_url` is
/// the registration root of the Access Server, for example
/// `https://oam.example.com:7001/oam/services/rest/11.1.2.0.0/rreg`.
pub struct RregAsyncClientBuilder {
    base_url: Url,
    timeout: Option<Duration>,
    disable_redirect: bool,
    identity: Option<Identity>,
    ca_certs: Vec<Certificate>,
}

impl RregAsyncClientBuilder {
    /// Creates a builder for the provided base URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, Error> {
        Ok(Self {
            base_url: Url::parse(base_url.as_ref())?,
            timeout: Some(DEFAULT_TIMEOUT),
            disable_redirect: false,
            identity: None,
            ca_certs: Vec::new(),
        })
    }

    /// Sets the request timeout for the underlying HTTP client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Control whether HTTP redirects should be followed. Registration
    /// requests carry administrator credentials in their body, so following
    /// redirects to another host is usually unwanted.
    pub fn follow_redirects(mut self, follow_redirects: bool) -> Self {
        self.disable_redirect = !follow_redirects;
        self
    }

    /// Configure mutual TLS identity from a single PEM bundle containing the
    /// certificate and private key.
    pub fn mtls_identity_from_pem(mut self, identity_pem: &[u8]) -> Result<Self, Error> {
        self.identity = Some(Identity::from_pem(identity_pem)?);
        Ok(self)
    }

    /// Configure mutual TLS identity from separate PEM-encoded certificate
    /// and private key. The inputs are concatenated with a newline if needed.
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

    /// Adds a PEM-encoded CA certificate to the trust store.
    pub fn add_ca_cert_pem(mut self, ca_pem: &[u8]) -> Result<Self, Error> {
        self.ca_certs.push(Certificate::from_pem(ca_pem)?);
        Ok(self)
    }

    /// Builds the client.
    pub fn build(self) -> Result<RregAsyncClient, Error> {
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
        Ok(RregAsyncClient {
            base_url: self.base_url,
            http,
        })
    }
}

/// Async client for the Access Server's remote registration endpoint.
pub struct RregAsyncClient {
    base_url: Url,
    http: HttpClient,
}

impl RregAsyncClient {
    /// Returns a builder for the provided base URL.
    pub fn builder(base_url: impl AsRef<str>) -> Result<RregAsyncClientBuilder, Error> {
        RregAsyncClientBuilder::new(base_url)
    }

    fn build_url(&self, segments: &[&str]) -> Result<Url, Error> {
        common::build_url(
            &self.base_url,
            segments,
            common::BuildUrlOptions::ASYNC_CLIENT,
        )
    }

    async fn post_xml<Q, R>(&self, segment: &str, request: &Q) -> Result<R, Error>
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
            .send()
            .await?;
        self.expect_ok_xml(resp).await
    }

    async fn expect_ok_xml<R: Message>(&self, resp: Response) -> Result<R, Error> {
        if resp.status() == StatusCode::OK {
            R::from_xml(&resp.text().await?)
        } else {
            self.parse_error(resp).await
        }
    }

    async fn parse_error<T>(&self, resp: Response) -> Result<T, Error> {
        let status = resp.status();
        let body = read_body_with_limit_async(resp, MAX_ERROR_BODY_BYTES).await?;
        Err(registration_error(status, &body))
    }
}
