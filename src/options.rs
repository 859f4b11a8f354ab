//! Configuration options for rule sniffing.
//!
//! The `Options` struct carries the per-call inputs (target title, custom
//! headers) and the tunable inference thresholds. Use `Default::default()`
//! for standard settings.

use std::time::Duration;

use crate::headers::HeaderSet;

/// Configuration options for a sniffing run.
///
/// # Example
///
/// ```rust
/// use rulesniff::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     target_title: Some("Example Domain".to_string()),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Known title of the target page, when the operator has one. Enables
    /// the target-match tier of title inference.
    ///
    /// Default: `None`
    pub target_title: Option<String>,

    /// Extra request headers merged over the defaults, caller wins per key.
    ///
    /// Default: `None`
    pub custom_headers: Option<HeaderSet>,

    /// Timeout for the single GET.
    ///
    /// Default: 10 seconds
    pub timeout: Duration,

    /// Hard floor on candidate text length (characters). Containers at or
    /// below this never become content candidates.
    ///
    /// Default: `300`
    pub min_content_text_len: usize,

    /// Maximum document-order distance (in element positions) between the
    /// title node and a "nearby" content candidate.
    ///
    /// Default: `100`
    pub proximity_window: usize,

    /// Minimum share of the global best score a nearby candidate needs to
    /// replace the global winner.
    ///
    /// Default: `0.8`
    pub proximity_score_ratio: f64,

    /// Number of leading characters of the target title used for partial
    /// matching when no element contains the full title.
    ///
    /// Default: `20`
    pub partial_title_prefix_len: usize,

    /// Ceiling on the surrounding text length accepted for a partial title
    /// match; rejects whole-page text blobs.
    ///
    /// Default: `200`
    pub partial_title_context_max: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            target_title: None,
            custom_headers: None,
            timeout: Duration::from_secs(10),
            min_content_text_len: 300,
            proximity_window: 100,
            proximity_score_ratio: 0.8,
            partial_title_prefix_len: 20,
            partial_title_context_max: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds() {
        let options = Options::default();

        assert!(options.target_title.is_none());
        assert!(options.custom_headers.is_none());
        assert_eq!(options.timeout, Duration::from_secs(10));
        assert_eq!(options.min_content_text_len, 300);
        assert_eq!(options.proximity_window, 100);
        assert!((options.proximity_score_ratio - 0.8).abs() < f64::EPSILON);
        assert_eq!(options.partial_title_prefix_len, 20);
        assert_eq!(options.partial_title_context_max, 200);
    }

    #[test]
    fn fields_can_be_customized() {
        let options = Options {
            target_title: Some("A Title".to_string()),
            min_content_text_len: 500,
            proximity_window: 50,
            ..Options::default()
        };

        assert_eq!(options.target_title.as_deref(), Some("A Title"));
        assert_eq!(options.min_content_text_len, 500);
        assert_eq!(options.proximity_window, 50);
    }
}
