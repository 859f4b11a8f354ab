//! Simple CLI that sniffs one URL and prints the assembled crawler rule
//! as JSON to stdout.

use rulesniff::{domain_of, sniff_with_options, CrawlerRule, Options};
use std::env;

fn main() {
    let mut args = env::args().skip(1);
    let Some(url) = args.next() else {
        eprintln!("usage: sniff_url <url> [target-title]");
        std::process::exit(2);
    };
    let target_title = args.next();

    let options = Options {
        target_title,
        ..Options::default()
    };

    match sniff_with_options(&url, &options) {
        Ok(result) => {
            let source = domain_of(&url).unwrap_or_else(|| url.clone());
            let rule = CrawlerRule::from_inference(source.as_str(), source.as_str(), &result);
            println!("{}", serde_json::to_string_pretty(&rule).unwrap_or_default());
        }
        Err(err) => {
            eprintln!("sniff failed: {err}");
            std::process::exit(1);
        }
    }
}
