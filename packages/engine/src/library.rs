//! Law library: registry and query surface over parsed laws.
//!
//! The library owns all parsed laws keyed by lowercased short title and
//! answers three kinds of queries: direct lookup of a provision (optionally
//! narrowed to one Absatz), approximate title listing, and full-text search
//! across provisions.
//!
//! # Concurrency
//!
//! Queries borrow the library immutably and may run concurrently; loads
//! require an exclusive borrow. A reload is "parse fully, then replace the
//! map entry", so a law is always either the complete old version or the
//! complete new one — never a partially built entry.

use std::collections::HashMap;

use serde::Serialize;

use crate::absatz;
use crate::config::{self, Settings};
use crate::document::Law;
use crate::error::{EngineError, Result};
use crate::fuzzy;
use crate::parser;
use crate::source::DocumentSource;

/// Result record for a provision (or single Absatz) lookup.
///
/// Field names are part of the exchange contract with downstream consumers
/// and must not change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionRecord {
    /// Law short title, original casing.
    pub law: String,
    /// Full human-readable title of the law.
    pub law_title: Option<String>,
    /// Provision number.
    pub provision: String,
    /// Provision heading text, if any.
    pub name: Option<String>,
    /// Absatz number, present only when a sub-clause was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clause: Option<String>,
    /// Provision or Absatz text, original formatting preserved.
    pub text: String,
    /// Canonical public reference URL.
    pub url: String,
}

/// One entry of a law listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LawListing {
    /// Lowercased law code.
    pub code: String,
    /// Full human-readable title.
    pub title: Option<String>,
    /// Similarity score (0-100), present only for fuzzy-query listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

/// One full-text search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    /// Lowercased law code.
    pub law: String,
    /// Provision number.
    pub paragraph: String,
    /// Provision heading text, if any.
    pub title: Option<String>,
    /// Matching content line, trimmed and capped.
    pub snippet: String,
}

/// Outcome of loading a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Registered under this short title (original casing).
    Loaded(String),
    /// Parsed fine but had too few provisions to count as a statute.
    Skipped,
}

/// Summary of a bulk load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Short titles of successfully registered laws, in load order.
    pub loaded: Vec<String>,
    /// Documents below the provision threshold.
    pub skipped: usize,
    /// Documents that failed to fetch or parse.
    pub failed: usize,
}

/// Registry of parsed laws with lookup, fuzzy listing, and search.
pub struct Library {
    settings: Settings,
    /// Laws keyed by lowercased short title.
    laws: HashMap<String, Law>,
}

impl Library {
    /// Create an empty library with default [`Settings`].
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create an empty library with explicit settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            laws: HashMap::new(),
        }
    }

    /// Number of registered laws.
    pub fn len(&self) -> usize {
        self.laws.len()
    }

    /// True if no laws are registered.
    pub fn is_empty(&self) -> bool {
        self.laws.is_empty()
    }

    /// True if a law is registered under the given code (case-insensitive).
    pub fn contains(&self, law_code: &str) -> bool {
        self.laws.contains_key(&law_code.to_lowercase())
    }

    /// Parse one raw document and register it.
    ///
    /// Documents at or below the provision threshold are skipped, not
    /// registered and not an error — bulk imports contain stray files that
    /// are not statutes. A document without a `jurabk` short title cannot
    /// be keyed and is a hard error.
    pub fn load_from_text(&mut self, raw: &str) -> Result<LoadOutcome> {
        let law = parser::parse(raw)?;

        if law.provisions.len() <= self.settings.min_provisions {
            tracing::debug!(
                provisions = law.provisions.len(),
                threshold = self.settings.min_provisions,
                "Skipping document with too few provisions"
            );
            return Ok(LoadOutcome::Skipped);
        }

        let Some(short_title) = law.short_title.clone() else {
            return Err(EngineError::MissingShortTitle);
        };
        let key = short_title.to_lowercase();

        if !self.laws.contains_key(&key) && self.laws.len() >= config::MAX_LOADED_LAWS {
            return Err(EngineError::TooManyLaws {
                max: config::MAX_LOADED_LAWS,
            });
        }

        // The law is fully built at this point; the insert below is the
        // publish step, so readers only ever observe complete entries.
        if self.laws.insert(key.clone(), law).is_some() {
            tracing::debug!(code = %key, "Replaced existing law");
        } else {
            tracing::debug!(code = %key, total = self.laws.len(), "Law loaded");
        }
        Ok(LoadOutcome::Loaded(short_title))
    }

    /// Load every document a source enumerates.
    ///
    /// Partial success is the norm: a document that fails to fetch or parse
    /// is logged and counted, never propagated, so one bad source entry
    /// cannot abort the batch.
    pub fn load_many(&mut self, source: &dyn DocumentSource) -> LoadReport {
        let mut report = LoadReport::default();

        let origins = match source.list() {
            Ok(origins) => origins,
            Err(e) => {
                tracing::warn!(source = source.name(), error = %e, "Source enumeration failed");
                report.failed += 1;
                return report;
            }
        };

        for origin in origins {
            match source
                .fetch(&origin)
                .and_then(|raw| self.load_from_text(&raw))
            {
                Ok(LoadOutcome::Loaded(code)) => report.loaded.push(code),
                Ok(LoadOutcome::Skipped) => report.skipped += 1,
                Err(e) => {
                    tracing::warn!(
                        source = source.name(),
                        origin = %origin,
                        error = %e,
                        "Failed to load document"
                    );
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            source = source.name(),
            loaded = report.loaded.len(),
            skipped = report.skipped,
            failed = report.failed,
            "Bulk load finished"
        );
        report
    }

    /// Retrieve a provision, optionally narrowed to one Absatz.
    ///
    /// The law code is matched case-insensitively. A miss at any level
    /// returns the corresponding not-found error: an unknown law carries
    /// fuzzy suggestions, an unknown Absatz carries the numbers present.
    pub fn get(
        &self,
        law_code: &str,
        provision_id: &str,
        clause_id: Option<&str>,
    ) -> Result<ProvisionRecord> {
        let key = law_code.to_lowercase();

        let Some(law) = self.laws.get(&key) else {
            let suggestions = fuzzy::best_matches(law_code, self.sorted_codes())
                .into_iter()
                .map(|m| m.candidate)
                .collect();
            return Err(EngineError::LawNotFound {
                code: law_code.to_string(),
                suggestions,
            });
        };

        let Some(node) = law.provision(provision_id) else {
            return Err(EngineError::ProvisionNotFound {
                law: key,
                provision: provision_id.to_string(),
            });
        };

        let text = match clause_id {
            Some(clause) => absatz::extract(&key, node, clause)?,
            None => node.text(),
        };

        Ok(ProvisionRecord {
            law: law.short_title.clone().unwrap_or_else(|| key.clone()),
            law_title: law.full_title.clone(),
            provision: provision_id.to_string(),
            name: node.name.clone(),
            clause: clause_id.map(str::to_string),
            text,
            url: config::provision_url(&key, provision_id),
        })
    }

    /// List registered laws.
    ///
    /// With no query (or an empty one), every law is returned, sorted by
    /// code. With a query, only approximate title matches above the score
    /// cutoff are returned, best first, annotated with their score.
    pub fn list_available(&self, query: Option<&str>) -> Vec<LawListing> {
        match query {
            None | Some("") => {
                let mut all: Vec<LawListing> = self
                    .laws
                    .iter()
                    .map(|(code, law)| LawListing {
                        code: code.clone(),
                        title: law.full_title.clone(),
                        similarity: None,
                    })
                    .collect();
                all.sort_by(|a, b| a.code.cmp(&b.code));
                all
            }
            Some(q) => fuzzy::best_matches(q, self.sorted_codes())
                .into_iter()
                .map(|m| LawListing {
                    title: self.laws.get(&m.candidate).and_then(|l| l.full_title.clone()),
                    code: m.candidate,
                    similarity: Some(m.score),
                })
                .collect(),
        }
    }

    /// Full-text search across provisions.
    ///
    /// Case-insensitive substring match over provision names and content,
    /// optionally restricted to the given law codes. One hit per matching
    /// provision, ordered by law code and provision number.
    pub fn search(&self, query: &str, law_codes: Option<&[String]>) -> Vec<SearchHit> {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let filter: Option<Vec<String>> =
            law_codes.map(|codes| codes.iter().map(|c| c.to_lowercase()).collect());

        let mut hits = Vec::new();
        for (code, law) in &self.laws {
            if let Some(filter) = &filter {
                if !filter.contains(code) {
                    continue;
                }
            }
            for (id, node) in &law.provisions {
                let name_match = node
                    .name
                    .as_ref()
                    .is_some_and(|n| n.to_lowercase().contains(&needle));
                let line_match = node
                    .content_lines
                    .iter()
                    .find(|l| l.to_lowercase().contains(&needle));
                if !name_match && line_match.is_none() {
                    continue;
                }
                // Matched on the name alone: show the start of the provision.
                let snippet_line = line_match
                    .map(String::as_str)
                    .or_else(|| {
                        node.content_lines
                            .iter()
                            .map(String::as_str)
                            .find(|l| !l.trim().is_empty())
                    })
                    .unwrap_or("");
                hits.push(SearchHit {
                    law: code.clone(),
                    paragraph: id.clone(),
                    title: node.name.clone(),
                    snippet: snippet(snippet_line),
                });
            }
        }

        hits.sort_by(|a, b| {
            a.law
                .cmp(&b.law)
                .then_with(|| provision_sort_key(&a.paragraph).cmp(&provision_sort_key(&b.paragraph)))
        });
        hits
    }

    /// Registered law codes in sorted order, for deterministic ranking.
    fn sorted_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.laws.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort key for provision numbers: numeric prefix first, then the suffix,
/// so "9b" sorts before "14a".
fn provision_sort_key(id: &str) -> (u64, String) {
    let digits: String = id.chars().take_while(|c| c.is_ascii_digit()).collect();
    let number = digits.parse().unwrap_or(u64::MAX);
    (number, id[digits.len()..].to_string())
}

/// Trim and cap a content line for use as a search snippet.
fn snippet(line: &str) -> String {
    let trimmed = line.trim();
    if trimmed.chars().count() <= config::SNIPPET_MAX_CHARS {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(config::SNIPPET_MAX_CHARS).collect();
    format!("{cut}…")
}
