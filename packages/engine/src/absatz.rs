//! Absatz (sub-clause) extraction within a provision.
//!
//! Sub-clauses are marked inline by a parenthesized number at the start of
//! a line, e.g. `(1) Wer ...`. A second marker form, `$$<n>$$` alone on a
//! line, only delimits where a clause ends and is never part of the text.
//! Both forms terminate clause collection.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::DocumentNode;
use crate::error::{EngineError, Result};

/// `(<digits>)` at the start of a line.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PAREN_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\((\d+)\)").expect("valid regex"));

/// `$$<digits>$$` alone on a line.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DOLLAR_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$\$(\d+)\$\$$").expect("valid regex"));

/// True if a trimmed line starts the next sub-clause (either marker form).
fn is_boundary(line: &str) -> bool {
    PAREN_MARKER_RE.is_match(line) || DOLLAR_MARKER_RE.is_match(line)
}

/// Sub-clause numbers detectable in the node's content, in order of first
/// appearance, deduplicated. Both marker forms count.
pub fn detect(node: &DocumentNode) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for line in &node.content_lines {
        let trimmed = line.trim();
        let number = PAREN_MARKER_RE
            .captures(trimmed)
            .or_else(|| DOLLAR_MARKER_RE.captures(trimmed))
            .map(|c| c[1].to_string());
        if let Some(n) = number {
            if !seen.contains(&n) {
                seen.push(n);
            }
        }
    }
    seen
}

/// Extract the text of one sub-clause, original line breaks preserved.
///
/// Scans for a line starting with `(<clause_id>)`, takes the rest of that
/// line as the first fragment, and collects subsequent lines until the next
/// sub-clause boundary (exclusive) or the end of the provision.
///
/// # Errors
///
/// [`EngineError::ClauseNotFound`] when no such marker exists; its payload
/// lists the sub-clause numbers that were detected instead.
pub fn extract(law_code: &str, node: &DocumentNode, clause_id: &str) -> Result<String> {
    let marker = format!("({clause_id})");
    let lines = &node.content_lines;

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim_start();
        if !trimmed.starts_with(marker.as_str()) {
            continue;
        }

        let mut collected: Vec<String> = Vec::new();
        let first = trimmed[marker.len()..].trim_start();
        if !first.is_empty() {
            collected.push(first.to_string());
        }
        for rest in &lines[i + 1..] {
            if is_boundary(rest.trim()) {
                break;
            }
            collected.push(rest.clone());
        }
        return Ok(collected.join("\n"));
    }

    Err(EngineError::ClauseNotFound {
        law: law_code.to_string(),
        provision: node.id.clone().unwrap_or_default(),
        clause: clause_id.to_string(),
        available: detect(node),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_node() -> DocumentNode {
        let mut node = DocumentNode::provision("2", Some("Details".to_string()));
        node.push_line("(1) First.");
        node.push_line("(2) Second.");
        node.push_line("$$3$$");
        node.push_line("(3) Third with marker.");
        node
    }

    #[test]
    fn test_extract_stops_at_dollar_boundary() {
        let node = sample_node();
        assert_eq!(extract("testg", &node, "2").unwrap(), "Second.");
    }

    #[test]
    fn test_extract_after_dollar_marker() {
        let node = sample_node();
        assert_eq!(extract("testg", &node, "3").unwrap(), "Third with marker.");
    }

    #[test]
    fn test_extract_stops_at_paren_boundary() {
        let node = sample_node();
        assert_eq!(extract("testg", &node, "1").unwrap(), "First.");
    }

    #[test]
    fn test_extract_multi_line_clause() {
        let mut node = DocumentNode::provision("1", None);
        node.push_line("(1) Erster Satz.");
        node.push_line("Zweiter Satz desselben Absatzes.");
        node.push_line("");
        node.push_line("Dritter Satz nach Leerzeile.");
        node.push_line("(2) Nächster Absatz.");
        assert_eq!(
            extract("bgb", &node, "1").unwrap(),
            "Erster Satz.\nZweiter Satz desselben Absatzes.\n\nDritter Satz nach Leerzeile."
        );
    }

    #[test]
    fn test_extract_runs_to_end_without_boundary() {
        let mut node = DocumentNode::provision("1", None);
        node.push_line("(2) Letzter Absatz.");
        node.push_line("Noch eine Zeile.");
        assert_eq!(
            extract("bgb", &node, "2").unwrap(),
            "Letzter Absatz.\nNoch eine Zeile."
        );
    }

    #[test]
    fn test_marker_prefix_does_not_match_longer_number() {
        let mut node = DocumentNode::provision("1", None);
        node.push_line("(12) Zwölfter Absatz.");
        let err = extract("bgb", &node, "1").unwrap_err();
        match err {
            EngineError::ClauseNotFound { available, .. } => {
                assert_eq!(available, vec!["12".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_clause_reports_alternatives() {
        let node = sample_node();
        let err = extract("testg", &node, "9").unwrap_err();
        match err {
            EngineError::ClauseNotFound {
                law,
                provision,
                clause,
                available,
            } => {
                assert_eq!(law, "testg");
                assert_eq!(provision, "2");
                assert_eq!(clause, "9");
                assert_eq!(available, vec!["1", "2", "3"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_detect_both_marker_forms() {
        let node = sample_node();
        assert_eq!(detect(&node), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_detect_empty_content() {
        let node = DocumentNode::provision("1", None);
        assert!(detect(&node).is_empty());
    }
}
