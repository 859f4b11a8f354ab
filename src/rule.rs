//! Crawler rule records.
//!
//! The record shape the external rule store persists, one row per source
//! site. Persistence, identifiers and the enable/disable lifecycle belong
//! to the store; this crate only assembles the record from an inference
//! outcome.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::result::InferenceResult;

/// A reusable extraction rule for one source site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerRule {
    /// Stable identifier of the source site.
    pub source_id: String,

    /// Human-readable source name.
    pub source_name: String,

    /// Locator for the page title node, if inferred.
    pub title_locator: Option<String>,

    /// Locator for the main content container, if inferred.
    pub content_locator: Option<String>,

    /// Generic image pattern, if inferred.
    pub image_locator: Option<String>,

    /// Locator for per-record links on list pages. List-page tooling fills
    /// this in later; inference leaves it empty.
    pub url_locator: String,

    /// Request headers as a JSON object string, replayed by the harvester.
    pub request_headers: String,

    /// When the rule was inferred.
    pub created_at: DateTime<Utc>,

    /// Whether the harvester should use this rule. New rules start enabled.
    pub enabled: bool,
}

impl CrawlerRule {
    /// Assemble a rule record from an inference outcome.
    #[must_use]
    pub fn from_inference(
        source_id: impl Into<String>,
        source_name: impl Into<String>,
        inference: &InferenceResult,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            source_name: source_name.into(),
            title_locator: inference.title_locator.clone(),
            content_locator: inference.content_locator.clone(),
            image_locator: inference.image_locator.clone(),
            url_locator: String::new(),
            request_headers: inference.request_headers.to_json(),
            created_at: Utc::now(),
            enabled: true,
        }
    }
}
