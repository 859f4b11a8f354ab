//! Result types for sniffing output.

use serde::Serialize;

use crate::headers::HeaderSet;

/// The outcome of one sniffing run against a single page.
///
/// Locator fields are independently optional: a tier finding nothing for
/// its field never fails the run, it just leaves the field absent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InferenceResult {
    /// URL the page was fetched from.
    pub url: String,

    /// Locator for the page title node.
    pub title_locator: Option<String>,

    /// Locator for the main content container.
    pub content_locator: Option<String>,

    /// Generic pattern matching the page's dominant image placement.
    pub image_locator: Option<String>,

    /// The request headers the successful fetch was sent with; persisted so
    /// the harvester can replay the request that worked.
    pub request_headers: HeaderSet,

    /// Headers of the response.
    pub response_headers: HeaderSet,
}

/// The network-free inference output, for callers that already hold the
/// HTML of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocatorSet {
    /// Locator for the page title node.
    pub title_locator: Option<String>,

    /// Locator for the main content container.
    pub content_locator: Option<String>,

    /// Generic pattern matching the page's dominant image placement.
    pub image_locator: Option<String>,
}
