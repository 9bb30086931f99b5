//! Approximate string matching for law titles.
//!
//! Backs both the `list_available` query path and the suggestion payload of
//! "law not found" errors. Scores are a normalized Levenshtein ratio on a
//! 0-100 scale; the cutoff and result cap live in [`crate::config`].

use crate::config;

/// Similarity ratio between two strings on a 0-100 scale.
///
/// 100 means identical; 0 means nothing in common.
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b) * 100.0
}

/// A fuzzy match candidate with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// The candidate string as supplied.
    pub candidate: String,
    /// Similarity score, 0-100.
    pub score: f64,
}

/// Rank `candidates` against `query`.
///
/// Both sides are compared lowercased. Scores below
/// [`config::FUZZY_SCORE_CUTOFF`] are dropped; the rest are sorted by
/// descending score (stable, so equal scores keep their input order) and
/// capped at [`config::FUZZY_MATCH_LIMIT`].
pub fn best_matches<'a, I>(query: &str, candidates: I) -> Vec<Match>
where
    I: IntoIterator<Item = &'a str>,
{
    let query = query.to_lowercase();
    let mut matches: Vec<Match> = candidates
        .into_iter()
        .map(|candidate| Match {
            score: similarity(&query, &candidate.to_lowercase()),
            candidate: candidate.to_string(),
        })
        .filter(|m| m.score >= config::FUZZY_SCORE_CUTOFF)
        .collect();

    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(config::FUZZY_MATCH_LIMIT);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_scores_100() {
        assert!((similarity("bgb", "bgb") - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_disjoint_scores_low() {
        assert!(similarity("bgb", "xyz") < config::FUZZY_SCORE_CUTOFF);
    }

    #[test]
    fn test_exact_match_ranked_first() {
        let matches = best_matches("bgb", ["hgb", "bgb"]);
        assert_eq!(matches[0].candidate, "bgb");
        assert!((matches[0].score - 100.0).abs() < f64::EPSILON);
        // "hgb" differs in one of three characters and still clears the cutoff.
        assert_eq!(matches[1].candidate, "hgb");
        assert!(matches[1].score < matches[0].score);
    }

    #[test]
    fn test_case_insensitive() {
        let matches = best_matches("BGB", ["bgb"]);
        assert_eq!(matches.len(), 1);
        assert!((matches[0].score - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cutoff_excludes_dissimilar() {
        let matches = best_matches("bgb", ["zustellungsverordnung"]);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_limit_caps_results() {
        let candidates: Vec<String> = (0..100).map(|i| format!("law{i}")).collect();
        let refs: Vec<&str> = candidates.iter().map(String::as_str).collect();
        let matches = best_matches("law", refs);
        assert_eq!(matches.len(), config::FUZZY_MATCH_LIMIT);
    }

    #[test]
    fn test_stable_on_ties() {
        let matches = best_matches("abcd", ["abcx", "abcy"]);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].candidate, "abcx");
        assert_eq!(matches[1].candidate, "abcy");
    }
}
