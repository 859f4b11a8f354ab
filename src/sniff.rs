//! The sniffing pipeline.
//!
//! One call = one page: fetch, parse, infer the three locators, assemble
//! the result. Each call builds and discards its own document; there is no
//! state shared across calls, so concurrent callers just run their own
//! calls on their own threads.

use tracing::info;

use crate::content;
use crate::dom;
use crate::error::Result;
use crate::fetch;
use crate::image;
use crate::locator;
use crate::options::Options;
use crate::result::{InferenceResult, LocatorSet};
use crate::title;

/// Run the full pipeline for one URL.
pub(crate) fn run(url: &str, options: &Options) -> Result<InferenceResult> {
    let page = fetch::fetch_page(url, options.custom_headers.as_ref(), options.timeout)?;
    let locators = infer(&page.body, options);

    info!(
        url,
        title = locators.title_locator.is_some(),
        content = locators.content_locator.is_some(),
        image = locators.image_locator.is_some(),
        "inference complete"
    );

    Ok(InferenceResult {
        url: url.to_string(),
        title_locator: locators.title_locator,
        content_locator: locators.content_locator,
        image_locator: locators.image_locator,
        request_headers: page.effective_headers,
        response_headers: page.response_headers,
    })
}

/// Network-free inference over an HTML string.
///
/// Title inference runs first so content inference can rank candidates
/// near the located title. Every locator is synthesized against the same
/// shared document the nodes were found in.
pub(crate) fn infer(html: &str, options: &Options) -> LocatorSet {
    let doc = dom::parse(html);

    let title_node = title::find_title_node(&doc, options);
    let content_node = content::find_content_node(&doc, title_node, options);

    LocatorSet {
        title_locator: title_node.map(|node| locator::synthesize(&doc, node)),
        content_locator: content_node.map(|node| locator::synthesize(&doc, node)),
        image_locator: image::infer_image_locator(&doc),
    }
}
