//! Search-source adapter contract.
//!
//! Keyword-search scrapers live outside this crate. Each one implements
//! this uniform interface, so callers dispatch through the trait instead of
//! branching on source names; the inference engine itself never sees a
//! source-specific code path.

use serde::{Deserialize, Serialize};

/// One harvested record from a source's keyword search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedRecord {
    /// Record title.
    pub title: String,

    /// Short summary or snippet.
    pub summary: String,

    /// Representative image URL, when the source exposes one.
    pub image_url: Option<String>,

    /// Link to the full record.
    pub url: String,
}

/// Uniform contract for per-site keyword search adapters.
pub trait SearchSource {
    /// Stable identifier of the source site.
    fn id(&self) -> &str;

    /// Human-readable source name.
    fn name(&self) -> &str;

    /// Run a keyword search across `page_count` result pages.
    fn search(&self, keyword: &str, page_count: u32) -> crate::Result<Vec<ScrapedRecord>>;
}
