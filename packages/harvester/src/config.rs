//! Configuration constants and validation functions for the harvester.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{HarvesterError, Result};

/// Raw-file base URL of the bundestag/gesetze mirror.
pub const GITHUB_RAW_BASE: &str =
    "https://raw.githubusercontent.com/bundestag/gesetze/refs/heads/master";

/// HTTP timeout in seconds.
///
/// Large codifications (BGB, EStG) run to a few megabytes of Markdown.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// File name of a law document inside its directory, both in the mirror
/// and in local folder trees.
pub const LAW_FILE_NAME: &str = "index.md";

/// Law code pattern: lowercase mirror slug, e.g. `bgb`, `sgb_5`, `1-bimschv`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LAW_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-zäöüß][0-9a-zäöüß_.\-]*$").expect("valid regex")
});

/// Validate a mirror law code (compared lowercased).
///
/// # Examples
/// ```
/// use gesetze_harvester::config::validate_law_code;
///
/// assert!(validate_law_code("bgb").is_ok());
/// assert!(validate_law_code("SGB_5").is_ok());
/// assert!(validate_law_code("no spaces").is_err());
/// ```
pub fn validate_law_code(code: &str) -> Result<()> {
    if LAW_CODE_PATTERN.is_match(&code.to_lowercase()) {
        Ok(())
    } else {
        Err(HarvesterError::InvalidLawCode(code.to_string()))
    }
}

/// Build the raw-file URL of a law inside an arbitrary mirror base.
///
/// The mirror shards laws by the first character of their code:
/// `<base>/<b>/<bgb>/index.md`.
pub fn index_url(base: &str, code: &str) -> String {
    let code = code.to_lowercase();
    debug_assert!(
        LAW_CODE_PATTERN.is_match(&code),
        "code should be validated before calling index_url"
    );
    let shard = code.chars().next().map(String::from).unwrap_or_default();
    format!("{base}/{shard}/{code}/{LAW_FILE_NAME}")
}

/// Build the raw-file URL of a law in the bundestag/gesetze mirror.
///
/// # Examples
/// ```
/// use gesetze_harvester::config::github_index_url;
///
/// assert_eq!(
///     github_index_url("bgb"),
///     "https://raw.githubusercontent.com/bundestag/gesetze/refs/heads/master/b/bgb/index.md"
/// );
/// ```
pub fn github_index_url(code: &str) -> String {
    index_url(GITHUB_RAW_BASE, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_law_code_valid() {
        assert!(validate_law_code("bgb").is_ok());
        assert!(validate_law_code("sgb_5").is_ok());
        assert!(validate_law_code("1-bimschv").is_ok());
        assert!(validate_law_code("estg").is_ok());
        // Uppercase input is accepted; the lookup key is lowercased anyway.
        assert!(validate_law_code("BGB").is_ok());
    }

    #[test]
    fn test_validate_law_code_invalid() {
        assert!(validate_law_code("").is_err());
        assert!(validate_law_code("no spaces").is_err());
        assert!(validate_law_code("_bgb").is_err());
        assert!(validate_law_code("bgb/../../etc").is_err());
    }

    #[test]
    fn test_github_index_url() {
        assert_eq!(
            github_index_url("hgb"),
            "https://raw.githubusercontent.com/bundestag/gesetze/refs/heads/master/h/hgb/index.md"
        );
    }

    #[test]
    fn test_github_index_url_lowercases() {
        assert_eq!(github_index_url("BGB"), github_index_url("bgb"));
    }

    #[test]
    fn test_index_url_with_custom_base() {
        assert_eq!(
            index_url("http://localhost:8080", "stgb"),
            "http://localhost:8080/s/stgb/index.md"
        );
    }
}
