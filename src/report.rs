//! report.rs — structures for the analysis report returned to callers.
//! The JSON shape is the service contract: `basic_analysis` and
//! `vader_analysis` are always present; the advanced blocks are omitted
//! entirely (not nulled field-by-field) when a caller asks for the basic
//! report only.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Three-way sentiment label shared by both scorers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    /// Hard contract: score ≥ 0.05 → Positive, score ≤ −0.05 → Negative,
    /// otherwise Neutral. Boundary values belong to the non-neutral side.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.05 {
            Self::Positive
        } else if score <= -0.05 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// Continuous polarity/subjectivity analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct BasicSentiment {
    pub polarity: f64,
    pub subjectivity: f64,
    pub sentiment: Sentiment,
    /// Confidence equals |polarity|.
    pub confidence: f64,
}

/// Valence-aware lexicon analysis (compound + proportions).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct LexiconSentiment {
    pub compound: f64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub sentiment: Sentiment,
}

/// Per-emotion fractions of total emotion-word hits. All zero when the text
/// contains no trigger words; otherwise the five fields sum to ~1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct EmotionProfile {
    #[serde(rename = "Happy")]
    pub happy: f64,
    #[serde(rename = "Angry")]
    pub angry: f64,
    #[serde(rename = "Surprise")]
    pub surprise: f64,
    #[serde(rename = "Sad")]
    pub sad: f64,
    #[serde(rename = "Fear")]
    pub fear: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct TextStatistics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub unique_words: usize,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    pub stopword_count: usize,
    pub vocabulary_richness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ReadabilityScores {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
}

/// The complete analysis report. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub text: String,
    pub cleaned_text: String,
    /// RFC 3339 timestamp of computation.
    pub timestamp: String,
    pub basic_analysis: BasicSentiment,
    pub vader_analysis: LexiconSentiment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion_analysis: Option<EmotionProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_statistics: Option<TextStatistics>,
    /// Up to 10 `(word, frequency-fraction)` pairs, descending by frequency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<(String, f64)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readability_scores: Option<ReadabilityScores>,
}

impl AnalysisResult {
    /// Canonical report for empty/whitespace-only input: zeros everywhere,
    /// Neutral labels, empty keyword list. With `advanced` unset the advanced
    /// blocks are omitted, matching the basic-report shape.
    pub fn empty(advanced: bool) -> Self {
        Self {
            text: String::new(),
            cleaned_text: String::new(),
            timestamp: now_rfc3339(),
            basic_analysis: BasicSentiment::default(),
            vader_analysis: LexiconSentiment::default(),
            emotion_analysis: advanced.then(EmotionProfile::default),
            text_statistics: advanced.then(TextStatistics::default),
            keywords: advanced.then(Vec::new),
            readability_scores: advanced.then(ReadabilityScores::default),
        }
    }
}

pub(crate) fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

pub(crate) fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_boundaries_are_exact() {
        assert_eq!(Sentiment::from_score(0.05), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(-0.05), Sentiment::Negative);
        assert_eq!(Sentiment::from_score(0.03), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(-0.03), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(0.0), Sentiment::Neutral);
    }

    #[test]
    fn empty_result_shape_basic_vs_advanced() {
        let basic = AnalysisResult::empty(false);
        assert!(basic.emotion_analysis.is_none());
        assert!(basic.keywords.is_none());
        assert_eq!(basic.basic_analysis.sentiment, Sentiment::Neutral);

        let advanced = AnalysisResult::empty(true);
        assert_eq!(advanced.emotion_analysis, Some(EmotionProfile::default()));
        assert_eq!(advanced.keywords.as_deref(), Some(&[][..]));
        assert_eq!(advanced.vader_analysis.compound, 0.0);
    }

    #[test]
    fn serialized_labels_use_title_case() {
        let v = serde_json::to_value(Sentiment::Positive).unwrap();
        assert_eq!(v, serde_json::json!("Positive"));
    }

    #[test]
    fn basic_report_omits_advanced_keys_in_json() {
        let v = serde_json::to_value(AnalysisResult::empty(false)).unwrap();
        assert!(v.get("emotion_analysis").is_none());
        assert!(v.get("text_statistics").is_none());
        assert!(v.get("keywords").is_none());
        assert!(v.get("readability_scores").is_none());
        assert!(v.get("basic_analysis").is_some());
    }

    #[test]
    fn rounding_helpers() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round3(0.33333), 0.333);
        assert_eq!(round3(-0.0005), -0.001);
    }
}
