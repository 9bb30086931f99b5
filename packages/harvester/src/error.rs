//! Error types for the harvester.

use thiserror::Error;

/// Main error type for the harvester library.
#[derive(Debug, Error)]
pub enum HarvesterError {
    /// Invalid law code format.
    #[error("Invalid law code: '{0}'. Expected a lowercase mirror slug (e.g. bgb, sgb_5)")]
    InvalidLawCode(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Transient failures persisted across all retry attempts.
    #[error("Request failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the engine (parsing, lookup, extraction).
    #[error(transparent)]
    Engine(#[from] gesetze_engine::EngineError),
}

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, HarvesterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_law_code_display() {
        let err = HarvesterError::InvalidLawCode("NO SPACES".to_string());
        assert!(err.to_string().contains("NO SPACES"));
        assert!(err.to_string().contains("sgb_5"));
    }

    #[test]
    fn test_engine_error_is_transparent() {
        let err = HarvesterError::Engine(gesetze_engine::EngineError::MissingShortTitle);
        assert_eq!(
            err.to_string(),
            "Document has no short title (jurabk) and cannot be registered"
        );
    }
}
