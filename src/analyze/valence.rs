// src/analyze/valence.rs
//! Valence-aware lexicon scorer. Wraps the VADER implementation, which
//! handles negation, capitalization, punctuation emphasis, and degree
//! modifiers internally, and reports a compound score in ⟨−1..1⟩ plus
//! positive/negative/neutral proportions summing to ~1.

use vader_sentiment::SentimentIntensityAnalyzer;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValenceScores {
    pub compound: f64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

pub struct ValenceScorer {
    inner: SentimentIntensityAnalyzer<'static>,
}

impl ValenceScorer {
    pub fn new() -> Self {
        Self {
            inner: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Score a text. Empty input short-circuits to all-zero scores instead of
    /// asking the lexicon about nothing.
    pub fn score(&self, text: &str) -> ValenceScores {
        if text.trim().is_empty() {
            return ValenceScores::default();
        }
        let scores = self.inner.polarity_scores(text);
        let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);
        ValenceScores {
            compound: get("compound"),
            positive: get("pos"),
            negative: get("neg"),
            neutral: get("neu"),
        }
    }
}

impl Default for ValenceScorer {
    fn default() -> Self {
        Self::new()
    }
}
