use url::Url;

use crate::error::Error;

/// Path segment of the agent registration endpoint.
pub(crate) const ENDPOINT_AGENT: &str = "agent";
/// Path segment of the application-domain policy endpoint.
pub(crate) const ENDPOINT_POLICY: &str = "policy";

pub(crate) const CONTENT_TYPE_XML: &str = "application/xml";

pub(crate) use crate::build_url::BuildUrlOptions;

pub(crate) fn build_url(
    base_url: &Url,
    segments: &[&str],
    options: BuildUrlOptions,
) -> Result<Url, Error> {
    let mut url = base_url.clone();
    if options.clear_query {
        url.set_query(None);
    }
    if options.clear_fragment {
        url.set_fragment(None);
    }
    {
        let mut path_segments = url
            .path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrl(base_url.to_string()))?;
        if options.pop_if_empty {
            path_segments.pop_if_empty();
        }
        for segment in segments {
            path_segments.push(segment);
        }
    }
    Ok(url)
}
