//! Locator synthesis and resolution.
//!
//! A locator is a path expression identifying a node, meant to be replayed
//! against structurally similar future documents. Synthesis prefers stable
//! anchors and degrades in order: an `id` attribute, the exact class
//! string, a 1-based document-order index among same-tag nodes, and as a
//! last resort the bare tag pattern (ambiguous, low-confidence).
//!
//! The class strategy matches the attribute value verbatim. A re-render
//! that reorders the class list breaks such a locator; the behavior is kept
//! because the replaying harvester matches the same way.

use dom_query::{Document, NodeRef, Selection};
use tracing::warn;

use crate::dom;

/// Synthesize a locator for `node` within `doc`.
#[must_use]
pub fn synthesize(doc: &Document, node: NodeRef) -> String {
    let sel = Selection::from(node);
    let tag = dom::tag_name(&sel).unwrap_or_else(|| "*".to_string());

    if let Some(id) = dom::id(&sel) {
        return format!("//{tag}[@id='{id}']");
    }

    if let Some(class) = dom::class_name(&sel) {
        return format!("//{tag}[@class='{class}']");
    }

    let same_tag = doc.select(&tag);
    if let Some(index) = same_tag.nodes().iter().position(|n| n.id == node.id) {
        return format!("//{tag}[{}]", index + 1);
    }

    // Last resort: matches the first occurrence on replay.
    warn!(tag = %tag, "node missing from same-tag set, degrading to bare tag locator");
    format!("//{tag}")
}

/// Resolve a synthesized locator against a document.
///
/// Understands the four synthesized node forms plus the two-step image
/// pattern `//parent/img`. Returns every matching node in document order;
/// an unparseable expression resolves to nothing.
#[must_use]
pub fn resolve<'a>(doc: &'a Document, locator: &str) -> Vec<NodeRef<'a>> {
    let Some(expr) = locator.strip_prefix("//") else {
        return Vec::new();
    };

    if !expr.contains('[') {
        // Two-step pattern, e.g. `//figure/img`.
        if let Some((parent, child)) = expr.split_once('/') {
            if parent.is_empty() || child.is_empty() {
                return Vec::new();
            }
            let css = format!("{parent} > {child}");
            return doc.select(&css).nodes().to_vec();
        }
        // Bare tag: every occurrence; replay takes the first.
        return doc.select(expr).nodes().to_vec();
    }

    let Some((tag, predicate)) = expr.split_once('[') else {
        return Vec::new();
    };
    let Some(predicate) = predicate.strip_suffix(']') else {
        return Vec::new();
    };

    if let Some(value) = attr_predicate(predicate, "id") {
        return find_by_attr(doc, tag, "id", value);
    }
    if let Some(value) = attr_predicate(predicate, "class") {
        return find_by_attr(doc, tag, "class", value);
    }

    if let Ok(index) = predicate.parse::<usize>() {
        if index >= 1 {
            if let Some(node) = doc.select(tag).nodes().get(index - 1) {
                return vec![*node];
            }
        }
    }

    Vec::new()
}

/// Parse an `@name='value'` predicate, returning the value.
fn attr_predicate<'e>(predicate: &'e str, name: &str) -> Option<&'e str> {
    predicate
        .strip_prefix('@')?
        .strip_prefix(name)?
        .strip_prefix("='")?
        .strip_suffix('\'')
}

fn find_by_attr<'a>(doc: &'a Document, tag: &str, name: &str, value: &str) -> Vec<NodeRef<'a>> {
    doc.select(tag)
        .nodes()
        .iter()
        .filter(|node| Selection::from(**node).attr(name).as_deref() == Some(value))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_strategy_wins_over_class() {
        let doc = dom::parse(r#"<div id="main" class="wide">text</div>"#);
        let node = *doc.select("div").nodes().first().unwrap();

        assert_eq!(synthesize(&doc, node), "//div[@id='main']");
    }

    #[test]
    fn class_strategy_uses_exact_class_string() {
        let doc = dom::parse(r#"<article class="story body-copy">text</article>"#);
        let node = *doc.select("article").nodes().first().unwrap();

        assert_eq!(synthesize(&doc, node), "//article[@class='story body-copy']");
    }

    #[test]
    fn positional_strategy_indexes_same_tag_nodes() {
        let doc = dom::parse("<html><body><p>one</p><p>two</p><p>three</p></body></html>");
        let second = doc.select("p").nodes()[1];

        assert_eq!(synthesize(&doc, second), "//p[2]");
    }

    #[test]
    fn id_round_trip_resolves_to_the_same_node() {
        let doc = dom::parse(
            r#"<html><body><div>first</div><div id="target">second</div></body></html>"#,
        );
        let node = *doc.select("#target").nodes().first().unwrap();

        let locator = synthesize(&doc, node);
        let resolved = resolve(&doc, &locator);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, node.id);
    }

    #[test]
    fn class_round_trip_resolves_to_the_same_node() {
        let doc = dom::parse(
            r#"<html><body><span class="a b">x</span><span class="b a">y</span></body></html>"#,
        );
        let node = *doc.select("span").nodes().first().unwrap();

        let locator = synthesize(&doc, node);
        assert_eq!(locator, "//span[@class='a b']");

        // Exact string match: the reordered class list does not resolve.
        let resolved = resolve(&doc, &locator);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, node.id);
    }

    #[test]
    fn positional_round_trip_resolves_to_the_same_node() {
        let doc = dom::parse("<html><body><p>one</p><p>two</p><p>three</p></body></html>");
        let second = doc.select("p").nodes()[1];

        let locator = synthesize(&doc, second);
        let resolved = resolve(&doc, &locator);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, second.id);
        assert_eq!(Selection::from(resolved[0]).text().as_ref(), "two");
    }

    #[test]
    fn bare_tag_resolves_to_all_occurrences() {
        let doc = dom::parse("<html><body><p>one</p><p>two</p></body></html>");
        assert_eq!(resolve(&doc, "//p").len(), 2);
    }

    #[test]
    fn two_step_pattern_resolves_direct_children() {
        let doc = dom::parse(
            "<html><body>\
             <figure><img src=\"a.jpg\"></figure>\
             <div><figure><img src=\"b.jpg\"></figure></div>\
             <div><img src=\"c.jpg\"></div>\
             </body></html>",
        );

        let resolved = resolve(&doc, "//figure/img");
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn out_of_range_index_resolves_to_nothing() {
        let doc = dom::parse("<html><body><p>only</p></body></html>");
        assert!(resolve(&doc, "//p[2]").is_empty());
        assert!(resolve(&doc, "//p[0]").is_empty());
    }

    #[test]
    fn garbage_locator_resolves_to_nothing() {
        let doc = dom::parse("<html><body><p>text</p></body></html>");
        assert!(resolve(&doc, "p").is_empty());
        assert!(resolve(&doc, "//p[@data-x='1']").is_empty());
        assert!(resolve(&doc, "//p[not-a-number]").is_empty());
    }
}
