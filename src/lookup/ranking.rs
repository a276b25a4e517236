use std::collections::HashSet;

use strsim::jaro_winkler;

use crate::lookup::FoodMatch;

/// Score for a description missing one of the query words.
pub const NO_MATCH_SCORE: f64 = 99.0;

/// Score for a description that only matches fuzzily.
pub const FUZZY_MATCH_SCORE: f64 = 4.0;

/// Minimum Jaro-Winkler similarity for a fuzzy match.
pub const FUZZY_THRESHOLD: f64 = 0.85;

/// Per-word penalty favoring short, generic descriptions.
pub const LENGTH_PENALTY_PER_WORD: f64 = 0.05;

/// Number of ranked results kept for display.
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// Candidates requested from the lookup service before ranking.
pub const CANDIDATE_POOL: usize = 100;

/// A search hit ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedFood {
    /// Description with parenthesised fragments removed.
    pub label: String,
    pub id: String,
    pub score: f64,
}

/// How well `description` matches `query`; lower is better.
///
/// 0 exact, 1 prefix, 2 substring, 3 every word present, then the fuzzy
/// score, else [`NO_MATCH_SCORE`].
pub fn match_score(description: &str, query: &str) -> f64 {
    let desc = description.to_lowercase();
    let query = query.trim().to_lowercase();

    if query.split_whitespace().all(|word| desc.contains(word)) {
        if desc == query {
            return 0.0;
        }
        if desc.starts_with(&query) {
            return 1.0;
        }
        if desc.contains(&query) {
            return 2.0;
        }
        return 3.0;
    }

    if jaro_winkler(&desc, &query) >= FUZZY_THRESHOLD {
        FUZZY_MATCH_SCORE
    } else {
        NO_MATCH_SCORE
    }
}

/// Push processed and infant foods down, raw ingredients up.
pub fn priority_adjustment(description: &str) -> f64 {
    let desc = description.to_lowercase();
    let mut adjustment = 0.0;
    if desc.contains("babyfood") {
        adjustment += 2.0;
    }
    if desc.contains("dry mix") {
        adjustment += 2.0;
    }
    if desc.contains("raw") {
        adjustment -= 1.0;
    }
    adjustment
}

pub fn combined_score(description: &str, query: &str) -> f64 {
    let words = description.split_whitespace().count() as f64;
    match_score(description, query)
        + priority_adjustment(description)
        + LENGTH_PENALTY_PER_WORD * words
}

/// Remove every `(...)` fragment and the whitespace before it.
pub fn clean_label(description: &str) -> String {
    let mut out = String::with_capacity(description.len());
    let mut rest = description;

    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')') else {
            break;
        };
        out.push_str(rest[..open].trim_end());
        rest = &rest[open + close + 1..];
    }
    out.push_str(rest);
    out.trim().to_string()
}

/// Rank `candidates` for `query` and keep the best `limit`.
///
/// Ties keep the service's order. When two descriptions clean to the same
/// label only the better ranked one is kept.
pub fn rank(query: &str, candidates: Vec<FoodMatch>, limit: usize) -> Vec<RankedFood> {
    let mut scored: Vec<(f64, FoodMatch)> = candidates
        .into_iter()
        .map(|c| (combined_score(&c.name, query), c))
        .collect();

    scored.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut seen = HashSet::new();
    scored
        .into_iter()
        .take(limit)
        .filter_map(|(score, c)| {
            let label = clean_label(&c.name);
            seen.insert(label.to_lowercase()).then_some(RankedFood {
                label,
                id: c.id,
                score,
            })
        })
        .collect()
}
