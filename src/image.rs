//! Representative image pattern inference.
//!
//! Unlike title and content, the image locator is not a path to one node:
//! list-style pages repeat the same image placement per record, so the
//! useful output is a pattern matching every image under the dominant
//! parent tag.

use dom_query::{Document, Selection};
use tracing::{debug, warn};

use crate::dom;

/// Infer a generic locator for the document's dominant image placement.
///
/// Builds a frequency table of the immediate parent tag of every `<img>`
/// and returns `//parent/img` for the most common parent; the first parent
/// tag seen wins ties. `None` when the document has no images.
#[must_use]
pub fn infer_image_locator(doc: &Document) -> Option<String> {
    let images = doc.select("img");
    if images.is_empty() {
        warn!("no image elements in document");
        return None;
    }

    // Insertion-ordered frequency table so the earliest parent wins ties.
    let mut parent_counts: Vec<(String, usize)> = Vec::new();
    for node in images.nodes() {
        let parent = Selection::from(*node).parent();
        let Some(tag) = dom::tag_name(&parent) else { continue };
        match parent_counts.iter_mut().find(|(name, _)| *name == tag) {
            Some(entry) => entry.1 += 1,
            None => parent_counts.push((tag, 1)),
        }
    }

    let mut best: Option<&(String, usize)> = None;
    for entry in &parent_counts {
        match best {
            Some(current) if entry.1 <= current.1 => {}
            _ => best = Some(entry),
        }
    }

    match best {
        Some((parent, count)) => {
            debug!(parent = %parent, images = count, "image pattern inferred");
            Some(format!("//{parent}/img"))
        }
        // Parentless images only; degrade to the bare pattern.
        None => Some("//img".to_string()),
    }
}
