// src/analyze/mod.rs
//! Analysis pipeline entry: normalize once, then run the independent stages
//! (dual polarity scoring, emotion tally, statistics, keywords, readability)
//! against the single normalized result and assemble the report.

pub mod emotion;
pub mod keywords;
pub mod normalize;
pub mod polarity;
pub mod readability;
pub mod stats;
pub mod tokenize;
pub mod valence;

use crate::report::{
    now_rfc3339, round3, AnalysisResult, BasicSentiment, LexiconSentiment, Sentiment,
};
use self::polarity::PolarityScorer;
use self::valence::ValenceScorer;

/// The analyzer: an explicitly constructed, immutable bundle of lexicons.
/// All state is read-only after construction, so a single instance can be
/// shared (`Arc`) across concurrent requests without synchronization.
pub struct Analyzer {
    polarity: PolarityScorer,
    valence: ValenceScorer,
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            polarity: PolarityScorer::new(),
            valence: ValenceScorer::new(),
        }
    }

    /// Analyzer with an injected polarity lexicon (tests, other languages).
    pub fn with_polarity_lexicon(raw_json: &str) -> anyhow::Result<Self> {
        Ok(Self {
            polarity: PolarityScorer::from_json_str(raw_json)?,
            valence: ValenceScorer::new(),
        })
    }

    /// The sole operation of the core. Total: degenerate inputs produce the
    /// canonical zeroed report, never an error. With `advanced` unset only
    /// normalization and the two sentiment scorers run.
    pub fn analyze(&self, text: &str, advanced: bool) -> AnalysisResult {
        if text.trim().is_empty() {
            return AnalysisResult::empty(advanced);
        }

        let cleaned = normalize::normalize(text);
        let sentence_source = normalize::normalize_keep_sentences(text);
        let tokens = tokenize::tokenize_words(&cleaned);
        let sentences = tokenize::split_sentences(&sentence_source);

        let p = self.polarity.score(&cleaned);
        let polarity = round3(p.polarity);
        let basic_analysis = BasicSentiment {
            polarity,
            subjectivity: round3(p.subjectivity),
            sentiment: Sentiment::from_score(polarity),
            confidence: polarity.abs(),
        };

        let v = self.valence.score(&cleaned);
        let compound = round3(v.compound);
        let vader_analysis = LexiconSentiment {
            compound,
            positive: round3(v.positive),
            negative: round3(v.negative),
            neutral: round3(v.neutral),
            sentiment: Sentiment::from_score(compound),
        };

        let mut result = AnalysisResult {
            text: text.to_string(),
            cleaned_text: cleaned,
            timestamp: now_rfc3339(),
            basic_analysis,
            vader_analysis,
            emotion_analysis: None,
            text_statistics: None,
            keywords: None,
            readability_scores: None,
        };

        if advanced {
            result.emotion_analysis = Some(emotion::tally(&tokens));
            result.text_statistics = Some(stats::compute(&tokens, &sentences));
            result.keywords = Some(keywords::extract(&tokens));
            result.readability_scores = Some(readability::flesch_scores(&tokens, &sentences));
        }

        result
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
