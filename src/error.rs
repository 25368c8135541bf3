use std::fmt;
use std::io::Read;

use reqwest::StatusCode;

use crate::models::BaseResponse;
use crate::xml::Message;

/// Upper bound on how much of a failed response body is read back for
/// diagnostics.
pub(crate) const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;

/// Failure reported by the Access Server for a registration operation.
///
/// The server answers rejected registrations with an HTTP error status and,
/// when the request got far enough, a response document whose `state` and
/// `errorMsgs` elements describe the failure. Both are carried here; when the
/// body is not a parseable response document the raw text ends up as a single
/// message.
#[derive(Debug, Clone, Default)]
pub struct RegistrationError {
    pub status: u16,
    pub state: Option<String>,
    pub messages: Vec<String>,
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status={}", self.status)?;
        if let Some(ref state) = self.state {
            write!(f, ", state={state}")?;
        }
        if !self.messages.is_empty() {
            write!(f, ", message={}", self.messages.join("; "))?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("xml write error: {0}")]
    XmlWrite(#[from] quick_xml::se::SeError),
    #[error("xml read error: {0}")]
    XmlRead(#[from] quick_xml::de::DeError),
    #[error("registration rejected: {0}")]
    Api(RegistrationError),
}

pub(crate) fn read_body_with_limit(
    resp: &mut reqwest::blocking::Response,
    limit: usize,
) -> Result<Vec<u8>, Error> {
    let mut body = Vec::new();
    resp.take(limit as u64).read_to_end(&mut body)?;
    Ok(body)
}

#[cfg(feature = "async-client")]
pub(crate) async fn read_body_with_limit_async(
    resp: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, Error> {
    let mut body = resp.bytes().await?.to_vec();
    body.truncate(limit);
    Ok(body)
}

/// Builds the `Api` error for a non-success status, salvaging `state` and
/// `errorMsgs` when the body parses as a response document.
pub(crate) fn registration_error(status: StatusCode, body: &[u8]) -> Error {
    let text = String::from_utf8_lossy(body);
    let mut err = RegistrationError {
        status: status.as_u16(),
        state: None,
        messages: Vec::new(),
    };
    if let Ok(resp) = BaseResponse::from_xml(&text) {
        err.state = resp.state;
        if let Some(msgs) = resp.error_msgs {
            err.messages = msgs.message;
        }
    }
    if err.messages.is_empty() {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            err.messages.push(trimmed.to_string());
        }
    }
    Error::Api(err)
}

#[cfg(test)]
mod tests {
    use super::{registration_error, Error};
    use reqwest::StatusCode;

    #[test]
    fn salvages_state_and_messages_from_response_body() {
        let body = concat!(
            "<OAMRegResponse>",
            "<state>failed</state>",
            "<errorMsgs><message>agent exists</message><message>bad mode</message></errorMsgs>",
            "</OAMRegResponse>",
        );
        let err = registration_error(StatusCode::BAD_REQUEST, body.as_bytes());
        match err {
            Error::Api(err) => {
                assert_eq!(err.status, 400);
                assert_eq!(err.state.as_deref(), Some("failed"));
                assert_eq!(err.messages, vec!["agent exists", "bad mode"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn falls_back_to_raw_body_text() {
        let err = registration_error(StatusCode::INTERNAL_SERVER_ERROR, b"boom");
        match err {
            Error::Api(err) => {
                assert_eq!(err.status, 500);
                assert_eq!(err.state, None);
                assert_eq!(err.messages, vec!["boom"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
