//! # rulesniff
//!
//! Heuristic DOM locator inference for reusable web scraping rules.
//!
//! Point the sniffer at a web page and it derives an extraction rule: a
//! locator for the page title, a locator for the main body content, a
//! generic locator for representative images, and the HTTP request headers
//! that successfully retrieved the page. A scraping subsystem replays the
//! rule against many pages of the same site without per-site manual
//! locator authoring.
//!
//! ## Quick Start
//!
//! ```rust
//! use rulesniff::{infer_locators, Options};
//!
//! let body = "Sniffing pages for reusable extraction rules. ".repeat(10);
//! let html = format!(
//!     "<html><body><h1>Example</h1><div>{body}</div></body></html>"
//! );
//!
//! let locators = infer_locators(&html, &Options::default());
//! assert_eq!(locators.title_locator.as_deref(), Some("//h1[1]"));
//! assert_eq!(locators.content_locator.as_deref(), Some("//div[1]"));
//! ```
//!
//! Fetching and inferring in one call:
//!
//! ```rust,no_run
//! use rulesniff::{sniff, CrawlerRule};
//!
//! let result = sniff("https://example.com/news/1")?;
//! let rule = CrawlerRule::from_inference("example", "Example News", &result);
//! assert!(rule.enabled);
//! # Ok::<(), rulesniff::Error>(())
//! ```
//!
//! ## How it works
//!
//! - **Fetch**: one GET with a browser-like default header set, overridden
//!   key-by-key by custom headers, bounded by a timeout. No retries.
//! - **Boilerplate filter**: navigation, sidebars, ads and friends are
//!   pruned from a clone of the document before content scoring.
//! - **Title**: tiered strategies: target-string match ranked by tag
//!   priority, falling back to `<title>`/`h1`/`h2`.
//! - **Content**: candidate containers scored by text length, text
//!   density, paragraph count and link density, with a proximity pass
//!   favoring containers just after the title.
//! - **Image**: the dominant parent tag of the document's images becomes a
//!   generic `//parent/img` pattern.
//! - **Locators**: id match, exact class match, or tag with document-order
//!   index; ambiguous nodes degrade to a bare tag pattern.
//!
//! Absent fields are reported as `None`, never as errors; only the network
//! fetch can fail a run.

mod error;
mod options;
mod result;
mod rule;
mod sniff;
mod source;

/// Boilerplate detection and pruning.
pub mod boilerplate;

/// Main content container inference.
pub mod content;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Response body charset handling.
pub mod encoding;

/// HTTP fetching.
pub mod fetch;

/// Ordered HTTP header sets.
pub mod headers;

/// Representative image pattern inference.
pub mod image;

/// Locator synthesis and resolution.
pub mod locator;

/// Title node inference.
pub mod title;

// Public API - re-exports
pub use error::{Error, Result};
pub use headers::HeaderSet;
pub use options::Options;
pub use result::{InferenceResult, LocatorSet};
pub use rule::CrawlerRule;
pub use source::{ScrapedRecord, SearchSource};

/// Sniff a URL with default options.
///
/// Fetches the page once and infers the three locators from the body.
#[allow(clippy::missing_errors_doc)]
pub fn sniff(url: &str) -> Result<InferenceResult> {
    sniff_with_options(url, &Options::default())
}

/// Sniff a URL with custom options.
///
/// # Example
///
/// ```rust,no_run
/// use rulesniff::{sniff_with_options, Options};
///
/// let options = Options {
///     target_title: Some("Known Article Title".to_string()),
///     ..Options::default()
/// };
/// let result = sniff_with_options("https://example.com/article", &options)?;
/// # Ok::<(), rulesniff::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn sniff_with_options(url: &str, options: &Options) -> Result<InferenceResult> {
    sniff::run(url, options)
}

/// Infer locators from an HTML string without touching the network.
#[must_use]
pub fn infer_locators(html: &str, options: &Options) -> LocatorSet {
    sniff::infer(html, options)
}

/// Host component of a URL, used to label sources.
///
/// # Example
///
/// ```rust
/// assert_eq!(
///     rulesniff::domain_of("https://news.example.com/a/b"),
///     Some("news.example.com".to_string())
/// );
/// assert_eq!(rulesniff::domain_of("not a url"), None);
/// ```
#[must_use]
pub fn domain_of(url: &str) -> Option<String> {
    url::Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
}
