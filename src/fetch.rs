//! HTTP fetching.
//!
//! A single GET with merged default and custom headers and a bounded
//! timeout. There is no retry here; retry policy, if any, belongs to the
//! caller. The fetcher is stateless across invocations.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::encoding;
use crate::error::{Error, Result};
use crate::headers::HeaderSet;

/// A successfully fetched page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Decoded response body.
    pub body: String,
    /// Headers of the response.
    pub response_headers: HeaderSet,
    /// The request headers actually sent: defaults overridden by the
    /// caller's custom headers. These go into the persisted rule so the
    /// harvester can replay the request that worked.
    pub effective_headers: HeaderSet,
}

/// Issue one GET for `url` and decode the body.
///
/// Any transport failure or non-2xx status is a whole-operation error; no
/// partial body is ever returned.
pub fn fetch_page(
    url: &str,
    custom_headers: Option<&HeaderSet>,
    timeout: Duration,
) -> Result<FetchedPage> {
    let defaults = HeaderSet::default_request_headers();
    let effective = match custom_headers {
        Some(custom) => defaults.merged(custom),
        None => defaults,
    };

    debug!(url, header_count = effective.len(), "fetching page");

    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(Error::Client)?;

    let mut request = client.get(url);
    for (name, value) in effective.iter() {
        request = request.header(name, value);
    }

    let response = request.send().map_err(|source| Error::Fetch {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_string(),
            status,
        });
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let mut response_headers = HeaderSet::new();
    for (name, value) in response.headers() {
        response_headers.insert(
            name.as_str(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        );
    }

    let bytes = response.bytes().map_err(|source| Error::Fetch {
        url: url.to_string(),
        source,
    })?;
    let body = encoding::decode_body(&bytes, content_type.as_deref());

    info!(url, status = status.as_u16(), bytes = bytes.len(), "page fetched");

    Ok(FetchedPage {
        body,
        response_headers,
        effective_headers: effective,
    })
}
