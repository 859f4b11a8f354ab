//! End-to-end inference over HTML strings, exercising the public API.

use rulesniff::{dom, infer_locators, locator, Options};

fn filler(n: usize) -> String {
    "Paragraphs of perfectly ordinary article text go here. ".repeat(n)
}

#[test]
fn h1_is_selected_without_a_target_title() {
    let html = "<html><body><h1>The Headline</h1><p>short body</p></body></html>";

    let locators = infer_locators(html, &Options::default());

    let doc = dom::parse(html);
    let resolved = locator::resolve(&doc, locators.title_locator.as_deref().unwrap());
    assert_eq!(resolved.len(), 1);
    assert_eq!(dom::node_tag(&resolved[0]).as_deref(), Some("h1"));
}

#[test]
fn minimal_document_yields_title_and_content() {
    // An h1 plus one container over the length floor: the classic smallest
    // sniffable page.
    let body = "x".repeat(350);
    let html = format!("<html><body><h1>Example</h1><div>{body}</div></body></html>");

    let locators = infer_locators(&html, &Options::default());

    let doc = dom::parse(&html);

    let title_nodes = locator::resolve(&doc, locators.title_locator.as_deref().unwrap());
    assert_eq!(title_nodes.len(), 1);
    assert_eq!(dom::node_tag(&title_nodes[0]).as_deref(), Some("h1"));

    let content_nodes = locator::resolve(&doc, locators.content_locator.as_deref().unwrap());
    assert_eq!(content_nodes.len(), 1);
    assert_eq!(dom::node_tag(&content_nodes[0]).as_deref(), Some("div"));

    assert!(locators.image_locator.is_none());
}

#[test]
fn strictly_higher_score_wins_without_proximity() {
    // No title element anywhere, so no proximity override can apply.
    let strong = filler(12);
    let weak = filler(7);
    let html = format!(
        "<html><body>\
         <div id=\"weak\">{weak}</div>\
         <div id=\"strong\">{strong}</div>\
         </body></html>"
    );

    let locators = infer_locators(&html, &Options::default());
    assert_eq!(
        locators.content_locator.as_deref(),
        Some("//div[@id='strong']")
    );
}

#[test]
fn containers_at_the_length_floor_are_never_selected() {
    let exactly_300 = "y".repeat(300);
    let html = format!("<html><body><div>{exactly_300}</div></body></html>");

    let locators = infer_locators(&html, &Options::default());
    assert!(locators.content_locator.is_none());
}

#[test]
fn fully_linked_container_scores_below_plain_twin() {
    // Two containers with comparable text volume; one holds all of its
    // text inside anchors.
    let plain = filler(7);
    let linked: String = (0..7)
        .map(|i| {
            format!("<a href=\"/p/{i}\">Section navigation entry number {i} pointing elsewhere entirely. </a>")
        })
        .collect();
    let html = format!(
        "<html><body>\
         <div id=\"menu\">{linked}</div>\
         <div id=\"article\">{plain}</div>\
         </body></html>"
    );

    let locators = infer_locators(&html, &Options::default());
    assert_eq!(
        locators.content_locator.as_deref(),
        Some("//div[@id='article']")
    );
}

#[test]
fn five_images_under_one_parent_yield_that_parent_pattern() {
    let imgs: String = (1..=5)
        .map(|i| format!("<figure><img src=\"{i}.jpg\"></figure>"))
        .collect();
    let html = format!("<html><body>{imgs}</body></html>");

    let locators = infer_locators(&html, &Options::default());
    assert_eq!(locators.image_locator.as_deref(), Some("//figure/img"));
}

#[test]
fn zero_images_yield_no_image_locator() {
    let locators = infer_locators(
        "<html><body><p>text only</p></body></html>",
        &Options::default(),
    );
    assert!(locators.image_locator.is_none());
}

#[test]
fn target_title_steers_title_inference() {
    let body = filler(8);
    let html = format!(
        "<html><head><title>Site Name - Exact Post Title</title></head><body>\
         <div class=\"post-heading\">Exact Post Title</div>\
         <h2>Exact Post Title</h2>\
         <div>{body}</div>\
         </body></html>"
    );

    let options = Options {
        target_title: Some("Exact Post Title".to_string()),
        ..Options::default()
    };
    let locators = infer_locators(&html, &options);

    // h2 outranks both the <title> element and the div.
    assert_eq!(locators.title_locator.as_deref(), Some("//h2[1]"));
}

#[test]
fn boilerplate_regions_never_win_content() {
    let noise = filler(20);
    let body = filler(8);
    let html = format!(
        "<html><body>\
         <div class=\"sidebar\">{noise}</div>\
         <footer>{noise}</footer>\
         <article id=\"story\">{body}</article>\
         </body></html>"
    );

    let locators = infer_locators(&html, &Options::default());
    assert_eq!(
        locators.content_locator.as_deref(),
        Some("//article[@id='story']")
    );
}

#[test]
fn proximity_pulls_content_toward_the_title() {
    let before = filler(11);
    let after = filler(10);
    let html = format!(
        "<html><body>\
         <div id=\"lead-in\">{before}</div>\
         <h1>Tonight's Main Story</h1>\
         <div id=\"story-body\">{after}</div>\
         </body></html>"
    );

    let locators = infer_locators(&html, &Options::default());
    assert_eq!(
        locators.content_locator.as_deref(),
        Some("//div[@id='story-body']")
    );
}

#[test]
fn every_field_absent_is_still_a_result() {
    let locators = infer_locators("<html><body></body></html>", &Options::default());

    assert!(locators.title_locator.is_none());
    assert!(locators.content_locator.is_none());
    assert!(locators.image_locator.is_none());
}
