//! Document source boundary.
//!
//! The library performs no I/O of its own; bulk loads pull raw document
//! text from a [`DocumentSource`]. Concrete sources (a local folder tree,
//! the GitHub mirror of the federal corpus) live outside the engine;
//! [`MemorySource`] backs tests and embedded use.

use std::collections::BTreeMap;

use crate::error::{EngineError, Result};

/// Supplier of raw law documents.
///
/// A source enumerates its document origins (file paths, law codes, URLs)
/// and fetches the raw Markdown text of each. Implementations decide what
/// an origin string means; the library only threads it through logs and
/// error payloads.
pub trait DocumentSource {
    /// Short name identifying this source in logs.
    fn name(&self) -> &str;

    /// Enumerate the origins this source can fetch.
    fn list(&self) -> Result<Vec<String>>;

    /// Fetch the raw Markdown text of one origin.
    fn fetch(&self, origin: &str) -> Result<String>;
}

/// In-memory document source.
///
/// Origins enumerate in sorted order, so bulk loads over a `MemorySource`
/// are deterministic.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: BTreeMap<String, String>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document under the given origin, replacing any existing one.
    pub fn insert(&mut self, origin: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(origin.into(), text.into());
    }

    /// Number of documents held.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True if the source holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.documents.keys().cloned().collect())
    }

    fn fetch(&self, origin: &str) -> Result<String> {
        self.documents
            .get(origin)
            .cloned()
            .ok_or_else(|| EngineError::SourceFetch {
                origin: origin.to_string(),
                reason: "no such document".to_string(),
            })
    }
}
