//! Main content container inference.
//!
//! Candidates are containers with enough text to plausibly be a body; each
//! is scored by a composite of text length, text density, paragraph count
//! and link density, so that long prose-heavy containers rise and
//! navigation-like link farms sink. When a title node is known, a
//! proximity pass can swap in a container sitting just after the title,
//! but never one meaningfully worse than the global best.
//!
//! Scoring walks a boilerplate-pruned clone of the document; the winner is
//! re-anchored in the shared document before locator synthesis so the
//! synthesized path stays valid for replay.

use dom_query::{Document, NodeRef, Selection};
use tracing::{debug, warn};

use crate::boilerplate;
use crate::dom;
use crate::options::Options;

/// Tags that can host the main body text.
const CANDIDATE_TAGS: &[&str] = &["article", "main", "section", "div", "p"];

// Composite score weights. Text length dominates; link density is the only
// negative term.
const TEXT_LENGTH_WEIGHT: f64 = 0.4;
const TEXT_DENSITY_WEIGHT: f64 = 0.3;
const PARAGRAPH_WEIGHT: f64 = 0.2;
const LINK_DENSITY_PENALTY: f64 = 0.1;

/// Number of normalized characters used to re-anchor the winning container
/// in the shared document.
const REANCHOR_SAMPLE_LEN: usize = 50;

/// A scored content container.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    /// The container node (within the pruned scoring document).
    pub node: NodeRef<'a>,
    /// Composite score; higher is better.
    pub score: f64,
    /// Trimmed character count of the subtree text.
    pub text_length: usize,
    /// Character count of the serialized subtree.
    pub html_length: usize,
    /// `text_length / html_length`; share of the markup that is prose.
    pub text_density: f64,
    /// Number of descendant paragraph nodes.
    pub paragraph_count: usize,
    /// Share of the text sitting inside anchors; high values mean a menu.
    pub link_density: f64,
}

impl<'a> Candidate<'a> {
    /// Measure a container. `None` when its text does not clear the floor.
    fn measure(node: NodeRef<'a>, min_text_len: usize) -> Option<Self> {
        let sel = Selection::from(node);

        let text = dom::text_content(&sel);
        let text_length = text.trim().chars().count();
        if text_length <= min_text_len {
            return None;
        }

        let html_length = dom::outer_html(&sel).chars().count();
        let text_density = if html_length > 0 {
            text_length as f64 / html_length as f64
        } else {
            0.0
        };

        let paragraph_count = sel.select("p").length();

        let link_text_length: usize = sel
            .select("a")
            .iter()
            .map(|anchor| anchor.text().chars().count())
            .sum();
        let link_density = if text_length > 0 {
            link_text_length as f64 / text_length as f64
        } else {
            0.0
        };

        let score = TEXT_LENGTH_WEIGHT * text_length as f64
            + TEXT_DENSITY_WEIGHT * (text_density * 1000.0)
            + PARAGRAPH_WEIGHT * (paragraph_count as f64 * 10.0)
            - LINK_DENSITY_PENALTY * (link_density * 1000.0);

        Some(Candidate {
            node,
            score,
            text_length,
            html_length,
            text_density,
            paragraph_count,
            link_density,
        })
    }
}

/// Collect and score every candidate container, best first.
///
/// The sort is stable, so equal scores keep the collection order: candidate
/// tags are grouped in `CANDIDATE_TAGS` order, document order within a tag.
fn scored_candidates(doc: &Document, min_text_len: usize) -> Vec<Candidate<'_>> {
    let mut candidates = Vec::new();
    for &tag in CANDIDATE_TAGS {
        for node in doc.select(tag).nodes() {
            if let Some(candidate) = Candidate::measure(*node, min_text_len) {
                candidates.push(candidate);
            }
        }
    }
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates
}

/// Infer the main content node of `doc`.
///
/// Returns a node of the shared document, or `None` when no container
/// clears the text floor ("content not found", not an error).
#[must_use]
pub fn find_content_node<'a>(
    doc: &'a Document,
    title_node: Option<NodeRef<'_>>,
    options: &Options,
) -> Option<NodeRef<'a>> {
    let pruned = dom::clone_document(doc);
    boilerplate::prune(&pruned);

    let candidates = scored_candidates(&pruned, options.min_content_text_len);
    if candidates.is_empty() {
        warn!("no content container cleared the text length floor");
        return None;
    }

    let mut winner = &candidates[0];

    if candidates.len() > 1 {
        if let Some(title) = title_node {
            let title_text = Selection::from(title).text().trim().to_string();
            if let Some(nearby) = nearby_override(&pruned, &candidates, &title_text, options) {
                winner = nearby;
            }
        }
    }

    debug!(
        score = winner.score,
        text_length = winner.text_length,
        paragraphs = winner.paragraph_count,
        link_density = winner.link_density,
        "content container selected"
    );

    reanchor(doc, winner)
}

/// Proximity refinement: among candidates strictly after the title node and
/// within the proximity window, the best one replaces the global winner if
/// its score reaches `proximity_score_ratio` of the global best.
fn nearby_override<'c, 'p>(
    pruned: &Document,
    candidates: &'c [Candidate<'p>],
    title_text: &str,
    options: &Options,
) -> Option<&'c Candidate<'p>> {
    if title_text.is_empty() {
        return None;
    }

    // Re-locate the title inside the pruned clone by its text.
    let elements = dom::descendants(pruned);
    let title_index = elements
        .iter()
        .position(|node| Selection::from(*node).immediate_text().trim() == title_text)?;

    // Candidates are already score-ordered, so the first nearby one is the
    // best nearby one.
    let nearby = candidates.iter().find(|candidate| {
        elements
            .iter()
            .position(|node| node.id == candidate.node.id)
            .is_some_and(|index| {
                index > title_index && index - title_index < options.proximity_window
            })
    })?;

    let global_best = candidates.first()?.score;
    if nearby.score >= global_best * options.proximity_score_ratio {
        debug!(
            score = nearby.score,
            global_best, "title-adjacent container overrides global best"
        );
        Some(nearby)
    } else {
        None
    }
}

/// Map a winner chosen in the pruned clone back to the same container in
/// the shared document: same tag, normalized text containing the winner's
/// leading sample, closest total text length.
fn reanchor<'a>(doc: &'a Document, winner: &Candidate<'_>) -> Option<NodeRef<'a>> {
    let winner_sel = Selection::from(winner.node);
    let tag = dom::tag_name(&winner_sel)?;

    let normalized = dom::normalized_text(&winner_sel);
    let sample: String = normalized.chars().take(REANCHOR_SAMPLE_LEN).collect();
    if sample.is_empty() {
        return None;
    }

    let matches: Vec<NodeRef<'a>> = doc
        .select(&tag)
        .nodes()
        .iter()
        .filter(|node| dom::normalized_text(&Selection::from(**node)).contains(&sample))
        .copied()
        .collect();

    if matches.is_empty() {
        warn!(tag = %tag, "selected container could not be re-anchored in the document");
        return None;
    }

    matches.into_iter().min_by_key(|node| {
        dom::text_len(&Selection::from(*node)).abs_diff(winner.text_length)
    })
}
