//! Engine settings, capacity limits, and derived reference URLs.
//!
//! Settings are passed explicitly into [`crate::Library`]; nothing in the
//! engine reads ambient process state, which keeps embedding and testing
//! free of hidden dependencies.

/// Base URL of the public Gesetze im Internet mirror.
pub const GESETZE_IM_INTERNET_URL: &str = "https://www.gesetze-im-internet.de";

/// Maximum number of laws that can be registered simultaneously.
///
/// The German federal corpus is roughly 6,500 statutes and ordinances;
/// 10,000 leaves headroom while still bounding memory.
pub const MAX_LOADED_LAWS: usize = 10_000;

/// Maximum input document size in bytes (10 MB).
///
/// The largest federal law texts are a few megabytes of Markdown; anything
/// beyond this is not a law document.
pub const MAX_DOCUMENT_SIZE: usize = 10 * 1024 * 1024;

/// Minimum similarity score (0-100 scale) for a fuzzy title match.
pub const FUZZY_SCORE_CUTOFF: f64 = 60.0;

/// Maximum number of fuzzy matches returned per query.
pub const FUZZY_MATCH_LIMIT: usize = 50;

/// Maximum snippet length (in characters) for full-text search results.
pub const SNIPPET_MAX_CHARS: usize = 160;

/// Runtime settings for a [`crate::Library`].
#[derive(Debug, Clone)]
pub struct Settings {
    /// Documents with at most this many provisions are not treated as real
    /// statutes and are silently skipped during loads. Filters stray or
    /// incomplete documents out of bulk imports.
    pub min_provisions: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self { min_provisions: 5 }
    }
}

/// Build the public reference URL for a provision.
///
/// # Arguments
/// * `code_lower` - Lowercased law short title (e.g. "bgb")
/// * `provision_id` - Provision number (e.g. "823", "14a")
///
/// # Examples
/// ```
/// use gesetze_engine::config::provision_url;
///
/// assert_eq!(
///     provision_url("bgb", "823"),
///     "https://www.gesetze-im-internet.de/bgb/__823.html"
/// );
/// ```
pub fn provision_url(code_lower: &str, provision_id: &str) -> String {
    format!("{GESETZE_IM_INTERNET_URL}/{code_lower}/__{provision_id}.html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        assert_eq!(Settings::default().min_provisions, 5);
    }

    #[test]
    fn test_provision_url() {
        assert_eq!(
            provision_url("hgb", "9b"),
            "https://www.gesetze-im-internet.de/hgb/__9b.html"
        );
        assert_eq!(
            provision_url("estg", "14a"),
            "https://www.gesetze-im-internet.de/estg/__14a.html"
        );
    }

    #[test]
    fn test_limits_are_reasonable() {
        assert!(MAX_LOADED_LAWS >= 7_000, "Should hold the federal corpus");
        assert!(MAX_DOCUMENT_SIZE >= 1024 * 1024, "Should allow 1MB+ laws");
        assert!((0.0..=100.0).contains(&FUZZY_SCORE_CUTOFF));
        assert!(FUZZY_MATCH_LIMIT >= 10);
    }
}
