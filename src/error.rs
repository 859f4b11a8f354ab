//! Error types for rule sniffing.
//!
//! Only the network fetch can fail the whole operation. Inference itself
//! degrades field-by-field: a missing title, content or image locator is
//! reported as an absent field on the result, never as an error.

/// Error type for sniff operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP client could not be constructed.
    #[error("HTTP client construction failed: {0}")]
    Client(#[source] reqwest::Error),

    /// The request failed in transport (DNS, connect, timeout, invalid URL).
    #[error("fetch failed for {url}: {source}")]
    Fetch {
        /// The URL the request was issued against.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status code.
    #[error("fetch failed for {url}: HTTP status {status}")]
    Status {
        /// The URL the request was issued against.
        url: String,
        /// The status code of the response.
        status: reqwest::StatusCode,
    },
}

/// Result type alias for sniff operations.
pub type Result<T> = std::result::Result<T, Error>;
