//! Gesetze Harvester - Fetch German federal law texts and query them.
//!
//! This crate provides the document sources for the
//! [`gesetze_engine`] library: a local folder tree of Markdown law texts
//! and the GitHub mirror of the federal corpus (bundestag/gesetze). A
//! small CLI wires the sources and the engine together.
//!
//! # Example
//!
//! ```
//! use gesetze_harvester::config;
//!
//! // Validate a mirror law code and derive its raw-file URL
//! assert!(config::validate_law_code("bgb").is_ok());
//! assert!(config::github_index_url("bgb").ends_with("/b/bgb/index.md"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, law-code validation, URL building
//! - [`error`]: Error types and Result alias
//! - [`http`]: HTTP client for downloading from the mirror
//! - [`github`]: `DocumentSource` over the GitHub mirror
//! - [`folder`]: `DocumentSource` over a local folder tree
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod folder;
pub mod github;
pub mod http;

// Re-export commonly used items
pub use config::{github_index_url, validate_law_code};
pub use error::{HarvesterError, Result};
pub use folder::FolderSource;
pub use github::GithubSource;
