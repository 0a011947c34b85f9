// src/analyze/keywords.rs
//! Keyword extraction: frequent but distinctive non-stopword terms.
//!
//! Candidates are non-stopword tokens longer than 2 characters. The top
//! `2×N` by frequency are considered; anything claiming ≥ 10% of the
//! filtered token stream is discarded as too common to be distinctive, and
//! the first `N` survivors are returned with their frequency fractions.

use std::collections::HashMap;

use crate::analyze::tokenize::is_stopword;

pub const KEYWORD_LIMIT: usize = 10;
pub const COMMONNESS_CEILING: f64 = 0.1;

pub fn extract(tokens: &[String]) -> Vec<(String, f64)> {
    let filtered: Vec<&str> = tokens
        .iter()
        .map(String::as_str)
        .filter(|w| !is_stopword(w) && w.chars().count() > 2)
        .collect();
    let total = filtered.len();
    if total == 0 {
        return Vec::new();
    }

    let mut freq: HashMap<&str, usize> = HashMap::new();
    for w in &filtered {
        *freq.entry(w).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = freq.into_iter().collect();
    // descending frequency; alphabetical tie-break keeps the order deterministic
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(2 * KEYWORD_LIMIT);

    ranked
        .into_iter()
        .map(|(w, c)| (w.to_string(), c as f64 / total as f64))
        .filter(|(_, fraction)| *fraction < COMMONNESS_CEILING)
        .take(KEYWORD_LIMIT)
        .collect()
}
