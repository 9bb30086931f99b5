//! Parsed document model for statutory texts.
//!
//! A law arrives as one Markdown document and is parsed into a [`Law`]:
//! front-matter metadata plus a map from provision number to
//! [`DocumentNode`]. Content lines are stored verbatim, blank lines
//! included, so retrieving a provision reproduces the original formatting.

use std::collections::HashMap;

/// Kind of a node in a parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Container for the document itself; carries no citable text.
    Root,
    /// A numbered provision (§), the addressable unit of a law.
    Provision,
}

/// A single node of a parsed law document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentNode {
    /// Node kind.
    pub kind: NodeKind,
    /// Provision number as written in the heading (e.g. "1", "9b", "14a").
    /// `None` for the root node.
    pub id: Option<String>,
    /// Heading text after the number, if any.
    pub name: Option<String>,
    /// Raw content lines, blank lines included.
    pub content_lines: Vec<String>,
}

impl DocumentNode {
    /// Create the root node of a document.
    pub fn root() -> Self {
        Self {
            kind: NodeKind::Root,
            id: None,
            name: None,
            content_lines: Vec::new(),
        }
    }

    /// Create an empty provision node.
    pub fn provision(id: impl Into<String>, name: Option<String>) -> Self {
        Self {
            kind: NodeKind::Provision,
            id: Some(id.into()),
            name,
            content_lines: Vec::new(),
        }
    }

    /// Append a raw content line.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.content_lines.push(line.into());
    }

    /// Full text of the node, original line breaks preserved.
    pub fn text(&self) -> String {
        self.content_lines.join("\n")
    }
}

/// A parsed law: front-matter metadata plus its provisions keyed by number.
///
/// `short_title` may be absent after parsing. The [`crate::Library`] refuses
/// to register such a document because it has no lookup key, but the parser
/// itself does not fail on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Law {
    /// Official abbreviation from the `jurabk` front-matter key, original
    /// casing preserved for display.
    pub short_title: Option<String>,
    /// Human-readable title from the `title` front-matter key.
    pub full_title: Option<String>,
    /// Root node for the document itself.
    pub root: DocumentNode,
    /// Provisions keyed by number. A repeated number in the source replaces
    /// the earlier entry.
    pub provisions: HashMap<String, DocumentNode>,
}

impl Law {
    /// Create an empty law with no metadata.
    pub fn new() -> Self {
        Self {
            short_title: None,
            full_title: None,
            root: DocumentNode::root(),
            provisions: HashMap::new(),
        }
    }

    /// Lowercased lookup key, if the document carries a short title.
    pub fn key(&self) -> Option<String> {
        self.short_title.as_ref().map(|s| s.to_lowercase())
    }

    /// Look up a provision by number.
    pub fn provision(&self, id: &str) -> Option<&DocumentNode> {
        self.provisions.get(id)
    }
}

impl Default for Law {
    fn default() -> Self {
        Self::new()
    }
}
