//! DOM adapter over the `dom_query` crate.
//!
//! Thin wrappers for the operations the inference engine needs: tag,
//! attribute and text access, document-order traversal, and whole-document
//! cloning. Node identity is the arena `NodeId`; parent links are the
//! arena's non-owning back-references, so nodes are cheap `Copy` handles
//! whose lifetime is bound to their `Document`.

// Re-export core types for the rest of the crate.
pub use dom_query::{Document, NodeRef, Selection};
pub use tendril::StrTendril;

use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Tag name (lowercase) of the first node in the selection.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|tag| tag.to_string())
}

/// Tag name (lowercase) of a node.
#[inline]
#[must_use]
pub fn node_tag(node: &NodeRef) -> Option<String> {
    node.node_name().map(|tag| tag.to_string())
}

/// `id` attribute value, if the attribute is present (possibly empty).
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|value| value.to_string())
}

/// `class` attribute value, if the attribute is present (possibly empty).
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|value| value.to_string())
}

/// Combined text of the node and its descendants.
///
/// Returns `StrTendril` for zero-copy passing; convert only when owned
/// storage is needed.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Serialized (outer) HTML of the subtree.
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

/// Trimmed character count of the subtree text.
#[must_use]
pub fn text_len(sel: &Selection) -> usize {
    sel.text().trim().chars().count()
}

/// Subtree text with whitespace runs collapsed to single spaces and the
/// ends trimmed. Used wherever two renderings of the same content must
/// compare equal despite formatting differences.
#[must_use]
pub fn normalized_text(sel: &Selection) -> String {
    let text = sel.text();
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// All elements of the document in document order.
#[must_use]
pub fn descendants(doc: &Document) -> Vec<NodeRef<'_>> {
    doc.select("*").nodes().to_vec()
}

/// Clone a document by re-serializing and re-parsing it.
///
/// The clone owns its own arena; pruning it leaves the original intact.
#[must_use]
pub fn clone_document(doc: &Document) -> Document {
    Document::from(doc.html().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_read_attributes() {
        let doc = parse(r#"<div id="main" class="container wide">content</div>"#);
        let div = doc.select("div");

        assert_eq!(tag_name(&div), Some("div".to_string()));
        assert_eq!(id(&div), Some("main".to_string()));
        assert_eq!(class_name(&div), Some("container wide".to_string()));
    }

    #[test]
    fn missing_attributes_are_none() {
        let doc = parse("<p>plain</p>");
        let p = doc.select("p");

        assert_eq!(id(&p), None);
        assert_eq!(class_name(&p), None);
    }

    #[test]
    fn empty_attribute_is_present() {
        let doc = parse(r#"<div id="">text</div>"#);
        let div = doc.select("div");
        assert_eq!(id(&div), Some(String::new()));
    }

    #[test]
    fn text_len_counts_trimmed_chars() {
        let doc = parse("<p>  héllo  </p>");
        let p = doc.select("p");
        assert_eq!(text_len(&p), 5);
    }

    #[test]
    fn normalized_text_collapses_whitespace() {
        let doc = parse("<div>  one\n\t two   <span>three</span> </div>");
        let div = doc.select("div");
        assert_eq!(normalized_text(&div), "one two three");
    }

    #[test]
    fn descendants_are_in_document_order() {
        let doc = parse("<html><body><section><p>a</p></section><div>b</div></body></html>");
        let tags: Vec<String> = descendants(&doc)
            .iter()
            .filter_map(node_tag)
            .collect();

        let section = tags.iter().position(|t| t == "section").unwrap();
        let p = tags.iter().position(|t| t == "p").unwrap();
        let div = tags.iter().position(|t| t == "div").unwrap();
        assert!(section < p, "section before its child p");
        assert!(p < div, "nested p before later sibling div");
    }

    #[test]
    fn clone_is_independent() {
        let doc = parse(r#"<div id="original">content</div>"#);
        let cloned = clone_document(&doc);

        cloned.select("#original").remove();

        assert!(doc.select("#original").exists());
        assert!(cloned.select("#original").is_empty());
    }
}
