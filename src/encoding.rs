//! Response body decoding.
//!
//! Pages declare their charset in the Content-Type response header, in a
//! `<meta>` tag, or not at all. The charset is resolved in that order,
//! defaulting to UTF-8, and decoding is lossy: a bad byte becomes � instead
//! of failing the whole fetch.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Matches the charset parameter inside a `<meta>` tag, covering both
/// `<meta charset="...">` and the http-equiv Content-Type form.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>]+)"#).expect("meta charset regex")
});

/// Matches the charset parameter of a Content-Type header value.
#[allow(clippy::expect_used)]
static HEADER_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*"?([^\s;"]+)"#).expect("header charset regex"));

/// Decode a fetched body to UTF-8.
///
/// `content_type` is the raw Content-Type response header value, if any.
#[must_use]
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_from_header)
        .or_else(|| charset_from_meta(bytes))
        .unwrap_or(UTF_8);

    let (decoded, _, _) = encoding.decode(bytes);
    decoded.into_owned()
}

fn charset_from_header(content_type: &str) -> Option<&'static Encoding> {
    HEADER_CHARSET
        .captures(content_type)
        .and_then(|captures| captures.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
}

/// Sniff a `<meta>` charset declaration from the first 1024 bytes.
fn charset_from_meta(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(1024)];
    let head = String::from_utf8_lossy(head);

    META_CHARSET
        .captures(&head)
        .and_then(|captures| captures.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
}
