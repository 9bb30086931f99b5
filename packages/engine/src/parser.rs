//! Markdown parser for German statutory texts.
//!
//! Turns one law document (optional `---` front-matter block followed by
//! `§`-headed provisions) into a [`Law`]. Only provision headings are
//! structural: any other heading ends the current provision and the text
//! under it is dropped. Content lines are kept verbatim (trailing
//! whitespace stripped, blank lines preserved) so the original formatting
//! survives retrieval.

use std::sync::LazyLock;

use regex::Regex;

use crate::config;
use crate::document::{DocumentNode, Law};
use crate::error::{EngineError, Result};

/// Heading line: one or more `#` markers followed by text.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static HEADLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s*(.+)$").expect("valid regex"));

/// Provision heading text: `§ <number> <optional name>`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PROVISION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^§\s*(?P<number>[0-9A-Za-z]+)\s*(?P<name>.*)$").expect("valid regex")
});

/// Front-matter `key: value` line.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static KEY_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<key>\w+):\s*(?P<value>.+)$").expect("valid regex"));

/// Parse one raw Markdown document into a [`Law`].
///
/// Never fails on malformed structure: missing front-matter, an unclosed
/// front-matter block, or a document without any provision headings all
/// produce a (possibly empty) law. The only hard error is an input above
/// [`config::MAX_DOCUMENT_SIZE`].
pub fn parse(raw: &str) -> Result<Law> {
    if raw.len() > config::MAX_DOCUMENT_SIZE {
        return Err(EngineError::DocumentTooLarge {
            size: raw.len(),
            max: config::MAX_DOCUMENT_SIZE,
        });
    }

    let lines: Vec<&str> = raw.lines().collect();
    let (front_matter, body) = split_front_matter(&lines);

    let mut law = Law::new();
    parse_front_matter(front_matter, &mut law);
    parse_body(body, &mut law);
    Ok(law)
}

/// Split a document into front-matter lines and body lines.
///
/// Front-matter is only recognized when the first line opens it with `---`.
/// An opening delimiter that is never closed means the whole input is body.
fn split_front_matter<'a>(lines: &'a [&'a str]) -> (&'a [&'a str], &'a [&'a str]) {
    let opens = lines
        .first()
        .is_some_and(|l| l.trim_end().starts_with("---"));
    if !opens {
        return (&lines[0..0], lines);
    }
    for (i, line) in lines.iter().enumerate().skip(1) {
        if line.trim_end().starts_with("---") {
            return (&lines[1..i], &lines[i + 1..]);
        }
    }
    (&lines[0..0], lines)
}

/// Extract `title` and `jurabk` from front-matter lines.
///
/// Keys are case-insensitive; unrecognized keys are ignored. A line without
/// a `key:` prefix continues the most recent `title` value, so multi-line
/// titles join into one string with single spaces.
fn parse_front_matter(lines: &[&str], law: &mut Law) {
    let mut title_lines: Vec<String> = Vec::new();
    let mut current_key: Option<String> = None;

    for line in lines {
        if let Some(caps) = KEY_VALUE_RE.captures(line) {
            let key = caps["key"].to_lowercase();
            let value = caps["value"].trim().to_string();
            match key.as_str() {
                "title" => title_lines = vec![value],
                "jurabk" => law.short_title = Some(value),
                _ => {}
            }
            current_key = Some(key);
        } else if current_key.as_deref() == Some("title") {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                title_lines.push(trimmed.to_string());
            }
        }
    }

    if !title_lines.is_empty() {
        law.full_title = Some(title_lines.join(" "));
    }
}

/// Body state machine: one piece of state, the provision currently being
/// accumulated. Text before the first provision heading is dropped.
fn parse_body(lines: &[&str], law: &mut Law) {
    let mut current: Option<String> = None;

    for raw_line in lines {
        let line = raw_line.trim_end();

        if line.is_empty() {
            // Blank lines inside a provision are kept so formatting
            // round-trips exactly.
            if let Some(id) = &current {
                if let Some(node) = law.provisions.get_mut(id) {
                    node.push_line("");
                }
            }
            continue;
        }

        if let Some(caps) = HEADLINE_RE.captures(line) {
            if let Some(p) = PROVISION_RE.captures(&caps[1]) {
                let number = p["number"].to_string();
                let name = match p["name"].trim() {
                    "" => None,
                    n => Some(n.to_string()),
                };
                if law.provisions.contains_key(&number) {
                    // Repeated provision numbers replace the earlier entry.
                    tracing::debug!(provision = %number, "Replacing provision with repeated number");
                }
                law.provisions
                    .insert(number.clone(), DocumentNode::provision(number.clone(), name));
                current = Some(number);
            } else {
                // Any other heading ends the provision context.
                current = None;
            }
            continue;
        }

        if let Some(id) = &current {
            if let Some(node) = law.provisions.get_mut(id) {
                node.push_line(line);
            }
        }
    }
}
