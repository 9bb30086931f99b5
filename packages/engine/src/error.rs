//! Error types for the gesetze engine.

use thiserror::Error;

/// Main error type for engine operations.
///
/// Every failure path carries enough context for a caller to self-correct:
/// a missing law suggests similarly named ones, a missing Absatz lists the
/// numbers that do exist.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Parsed document has no `jurabk` short title, so it cannot be indexed.
    #[error("Document has no short title (jurabk) and cannot be registered")]
    MissingShortTitle,

    /// Requested law code is not in the library.
    #[error("Law '{code}' not available{}", format_suggestions(.suggestions))]
    LawNotFound {
        code: String,
        /// Similarly named law codes, best match first.
        suggestions: Vec<String>,
    },

    /// Law found, but it has no provision with the requested number.
    #[error("§ {provision} not found in '{law}'")]
    ProvisionNotFound { law: String, provision: String },

    /// Provision found, but the requested Absatz marker is absent.
    #[error("Absatz {clause} not found in § {provision} of '{law}'. Available: {}", format_available(.available))]
    ClauseNotFound {
        law: String,
        provision: String,
        clause: String,
        /// Absatz numbers actually present in the provision.
        available: Vec<String>,
    },

    /// A document source failed to supply raw text.
    #[error("Failed to fetch document from '{origin}': {reason}")]
    SourceFetch { origin: String, reason: String },

    /// Input document exceeds the size limit.
    #[error("Document too large: {size} bytes (maximum {max})")]
    DocumentTooLarge { size: usize, max: usize },

    /// Registering another law would exceed the capacity limit.
    #[error("Maximum number of laws exceeded ({max})")]
    TooManyLaws { max: usize },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(". Did you mean: {}?", suggestions.join(", "))
    }
}

fn format_available(available: &[String]) -> String {
    if available.is_empty() {
        "none".to_string()
    } else {
        available.join(", ")
    }
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_law_not_found_display_with_suggestions() {
        let err = EngineError::LawNotFound {
            code: "bggb".to_string(),
            suggestions: vec!["bgb".to_string(), "hgb".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Law 'bggb' not available. Did you mean: bgb, hgb?"
        );
    }

    #[test]
    fn test_law_not_found_display_without_suggestions() {
        let err = EngineError::LawNotFound {
            code: "xyz".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "Law 'xyz' not available");
    }

    #[test]
    fn test_clause_not_found_display() {
        let err = EngineError::ClauseNotFound {
            law: "bgb".to_string(),
            provision: "2".to_string(),
            clause: "9".to_string(),
            available: vec!["1".to_string(), "2".to_string(), "3".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Absatz 9 not found in § 2 of 'bgb'. Available: 1, 2, 3"
        );
    }

    #[test]
    fn test_clause_not_found_display_empty() {
        let err = EngineError::ClauseNotFound {
            law: "bgb".to_string(),
            provision: "1".to_string(),
            clause: "1".to_string(),
            available: Vec::new(),
        };
        assert!(err.to_string().ends_with("Available: none"));
    }
}
