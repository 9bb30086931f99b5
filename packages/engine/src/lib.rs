//! Gesetze Engine
//!
//! Document model and query engine for German federal law texts published
//! as Markdown. This library provides functionality for:
//! - Parsing law documents (front-matter + `§`-headed provisions)
//! - Indexing parsed laws by short title (jurabk)
//! - Resolving law / provision / Absatz queries with self-correcting errors
//! - Approximate title lookup and full-text search
//!
//! # Example
//!
//! ```
//! use gesetze_engine::{Library, Settings};
//!
//! let raw = "---\nTitle: Test Law\nJurabk: TestG\n---\n\n# § 1 Scope\nInhalt.\n";
//!
//! let mut library = Library::with_settings(Settings { min_provisions: 0 });
//! library.load_from_text(raw)?;
//!
//! let record = library.get("testg", "1", None)?;
//! assert_eq!(record.law, "TestG");
//! assert_eq!(record.text, "Inhalt.");
//! # Ok::<(), gesetze_engine::EngineError>(())
//! ```

pub mod absatz;
pub mod config;
pub mod document;
pub mod error;
pub mod fuzzy;
pub mod library;
pub mod parser;
pub mod source;

// Re-export commonly used items
pub use config::Settings;
pub use document::{DocumentNode, Law, NodeKind};
pub use error::{EngineError, Result};
pub use library::{
    LawListing, Library, LoadOutcome, LoadReport, ProvisionRecord, SearchHit,
};
pub use source::{DocumentSource, MemorySource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }

    #[test]
    fn test_reexports() {
        // Verify re-exports work
        let _lib = Library::new();
        let _src = MemorySource::new();
        let _err = EngineError::MissingShortTitle;
    }
}
