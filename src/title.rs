//! Title node inference.
//!
//! Strategies form an ordered list of tiers with explicit preconditions;
//! the first tier that produces a node wins:
//!
//! 1. Target match (needs a target title): elements whose direct text
//!    contains the target verbatim, falling back to a prefix match with a
//!    bounded surrounding-text length. Candidates rank by tag priority,
//!    then document order.
//! 2. Tag fallback: `<title>`, else the first `h1`, else the first `h2`.
//!
//! A run where no tier succeeds is not an error; content and image
//! inference proceed without the title.

use dom_query::{Document, NodeRef, Selection};
use tracing::{debug, warn};

use crate::dom;
use crate::options::Options;

/// Tag ranking for target-matched candidates. Headings beat the document
/// title, which beats generic containers.
const TITLE_TAG_PRIORITY: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "title", "div", "span", "p",
];

/// Find the most plausible title node of `doc`.
#[must_use]
pub fn find_title_node<'a>(doc: &'a Document, options: &Options) -> Option<NodeRef<'a>> {
    if let Some(target) = options.target_title.as_deref() {
        let target = target.trim();
        if !target.is_empty() {
            if let Some(node) = find_by_target(doc, target, options) {
                return Some(node);
            }
            debug!(target, "no element matched the target title, trying tag fallback");
        }
    }

    find_by_tag(doc)
}

/// Target-match tier: exact containment first, then a prefix match that
/// only accepts short surrounding text (rejects whole-page blobs).
fn find_by_target<'a>(doc: &'a Document, target: &str, options: &Options) -> Option<NodeRef<'a>> {
    let mut candidates = matching_elements(doc, |own_text| own_text.contains(target));

    if candidates.is_empty() {
        let prefix: String = target.chars().take(options.partial_title_prefix_len).collect();
        let max_context = options.partial_title_context_max;
        candidates = matching_elements(doc, |own_text| {
            own_text.contains(prefix.as_str()) && own_text.trim().chars().count() < max_context
        });
    }

    if candidates.is_empty() {
        return None;
    }

    // Tag priority first; within the same tag the earliest node in document
    // order wins.
    for &tag in TITLE_TAG_PRIORITY {
        if let Some(node) = candidates
            .iter()
            .find(|node| dom::node_tag(node).as_deref() == Some(tag))
        {
            debug!(tag, "title node selected by target match");
            return Some(*node);
        }
    }

    // No candidate carries a priority tag: take the one whose text length is
    // numerically closest to the target's.
    let target_len = target.chars().count();
    candidates
        .into_iter()
        .min_by_key(|node| dom::text_len(&Selection::from(*node)).abs_diff(target_len))
}

/// Elements whose immediate (direct-child) text matches `predicate`, in
/// document order.
fn matching_elements<'a>(
    doc: &'a Document,
    predicate: impl Fn(&str) -> bool,
) -> Vec<NodeRef<'a>> {
    doc.select("*")
        .nodes()
        .iter()
        .filter(|node| {
            let own_text = Selection::from(**node).immediate_text();
            !own_text.trim().is_empty() && predicate(&own_text)
        })
        .copied()
        .collect()
}

/// Tag-fallback tier for runs without a target title.
fn find_by_tag(doc: &Document) -> Option<NodeRef<'_>> {
    for selector in ["title", "h1", "h2"] {
        if let Some(node) = doc.select(selector).nodes().first() {
            debug!(tag = selector, "title node selected by tag fallback");
            return Some(*node);
        }
    }

    warn!("no title node found");
    None
}
