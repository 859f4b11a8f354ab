//! Boilerplate detection and pruning.
//!
//! Navigation bars, sidebars, ad slots, comment sections and share widgets
//! carry lots of markup and links but no body content; content scoring
//! ignores them entirely. Detection is a fixed tag set plus a fixed set of
//! class-name keywords matched as case-insensitive substrings.

use dom_query::{Document, Selection};
use tracing::debug;

use crate::dom;

/// Tags whose subtrees never contain main content.
pub const EXCLUDED_TAGS: &[&str] = &[
    "header", "nav", "aside", "footer", "script", "style", "iframe",
];

/// Class-name keywords marking a subtree as boilerplate.
pub const EXCLUDED_CLASS_KEYWORDS: &[&str] = &[
    "header",
    "nav",
    "aside",
    "footer",
    "sidebar",
    "advertisement",
    "ad",
    "comment",
    "related",
    "share",
    "social",
];

/// Check whether a single element is boilerplate by tag or class keyword.
#[must_use]
pub fn is_boilerplate(sel: &Selection) -> bool {
    if let Some(tag) = dom::tag_name(sel) {
        if EXCLUDED_TAGS.contains(&tag.as_str()) {
            return true;
        }
    }

    match dom::class_name(sel) {
        Some(class) => {
            let class = class.to_lowercase();
            EXCLUDED_CLASS_KEYWORDS
                .iter()
                .any(|keyword| class.contains(keyword))
        }
        None => false,
    }
}

/// Remove every boilerplate subtree from `doc`.
///
/// Destructive. Callers keep the shared document intact by pruning a clone
/// (see `dom::clone_document`); the clone is what content scoring walks.
pub fn prune(doc: &Document) {
    let mut removed = 0usize;
    for node in doc.select("*").nodes().to_vec() {
        let sel = Selection::from(node);
        if is_boilerplate(&sel) {
            sel.remove();
            removed += 1;
        }
    }
    debug!(removed, "boilerplate subtrees pruned");
}
