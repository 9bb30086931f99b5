//! Document source backed by a local folder tree.

use std::fs;
use std::path::PathBuf;

use walkdir::WalkDir;

use gesetze_engine::{DocumentSource, EngineError};

use crate::config;

/// Enumerates one `index.md` per law directory under a root folder.
///
/// This is the layout the GitHub mirror uses and the layout the `fetch`
/// command produces, so a downloaded tree can be re-read without network
/// access.
pub struct FolderSource {
    root: PathBuf,
}

impl FolderSource {
    /// Create a source over the given root folder.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DocumentSource for FolderSource {
    fn name(&self) -> &str {
        "folder"
    }

    fn list(&self) -> gesetze_engine::Result<Vec<String>> {
        let mut origins = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|e| EngineError::SourceFetch {
                origin: self.root.display().to_string(),
                reason: e.to_string(),
            })?;
            if entry.file_type().is_file() && entry.file_name() == config::LAW_FILE_NAME {
                origins.push(entry.path().display().to_string());
            }
        }
        tracing::debug!(root = %self.root.display(), count = origins.len(), "Enumerated law files");
        Ok(origins)
    }

    fn fetch(&self, origin: &str) -> gesetze_engine::Result<String> {
        fs::read_to_string(origin).map_err(|e| EngineError::SourceFetch {
            origin: origin.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_missing_root_is_source_error() {
        let source = FolderSource::new("/definitely/not/here");
        let err = source.list().unwrap_err();
        assert!(matches!(err, EngineError::SourceFetch { .. }));
    }

    #[test]
    fn test_lists_only_index_files() {
        let dir = tempfile::tempdir().unwrap();
        let law_dir = dir.path().join("b").join("bgb");
        fs::create_dir_all(&law_dir).unwrap();
        fs::write(law_dir.join("index.md"), "# § 1 A\nx\n").unwrap();
        fs::write(law_dir.join("README.md"), "not a law").unwrap();

        let source = FolderSource::new(dir.path());
        let origins = source.list().unwrap();
        assert_eq!(origins.len(), 1);
        assert!(Path::new(&origins[0]).ends_with("b/bgb/index.md"));
    }

    #[test]
    fn test_fetch_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("index.md");
        fs::write(&file, "# § 1 A\nInhalt.\n").unwrap();

        let source = FolderSource::new(dir.path());
        let text = source.fetch(&file.display().to_string()).unwrap();
        assert_eq!(text, "# § 1 A\nInhalt.\n");
    }
}
