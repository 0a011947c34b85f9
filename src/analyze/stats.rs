// src/analyze/stats.rs
//! Descriptive statistics over the normalized token stream. Sentence counts
//! come from the punctuation-preserving sentence source, because the fully
//! normalized text has no boundaries left to split on.

use std::collections::HashSet;

use crate::analyze::tokenize::is_stopword;
use crate::report::{round2, round3, TextStatistics};

/// All ratios with a zero denominator come out as 0, never an error.
pub fn compute(tokens: &[String], sentences: &[String]) -> TextStatistics {
    let word_count = tokens.len();
    let sentence_count = sentences.len();
    let unique_words = tokens.iter().collect::<HashSet<_>>().len();

    let avg_word_length = if word_count > 0 {
        let chars: usize = tokens.iter().map(|w| w.chars().count()).sum();
        round2(chars as f64 / word_count as f64)
    } else {
        0.0
    };
    let avg_sentence_length = if sentence_count > 0 {
        round2(word_count as f64 / sentence_count as f64)
    } else {
        0.0
    };
    let stopword_count = tokens.iter().filter(|w| is_stopword(w)).count();
    let vocabulary_richness = if word_count > 0 {
        round3(unique_words as f64 / word_count as f64)
    } else {
        0.0
    };

    TextStatistics {
        word_count,
        sentence_count,
        unique_words,
        avg_word_length,
        avg_sentence_length,
        stopword_count,
        vocabulary_richness,
    }
}
