// src/analyze/polarity.rs
//! Continuous polarity/subjectivity scorer over an embedded word lexicon.
//!
//! Each lexicon entry carries `(polarity, subjectivity)`. The text score is
//! the mean over matched words, with two rule adjustments:
//! - a negator within the previous 1..=3 tokens flips and dampens polarity (×−0.5);
//! - an intensifier directly before a matched word boosts polarity (×1.3).

use std::collections::HashMap;

use crate::analyze::tokenize::tokenize_words;

const EMBEDDED_LEXICON: &str = include_str!("../../polarity_lexicon.json");

const INTENSIFIER_BOOST: f64 = 1.3;
const NEGATION_FACTOR: f64 = -0.5;

/// Scores produced by [`PolarityScorer::score`]: polarity in ⟨−1..1⟩,
/// subjectivity in ⟨0..1⟩. No lexicon hits → both 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarityScore {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Immutable lexicon holder. Constructed once and shared by reference;
/// tests inject fixture lexicons via [`PolarityScorer::from_json_str`].
#[derive(Debug, Clone)]
pub struct PolarityScorer {
    lexicon: HashMap<String, (f64, f64)>,
}

impl PolarityScorer {
    /// Build from the lexicon compiled into the binary.
    pub fn new() -> Self {
        Self::from_json_str(EMBEDDED_LEXICON).expect("valid embedded polarity lexicon")
    }

    /// Build from a JSON string of `{"word": [polarity, subjectivity], ...}`.
    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        let entries: HashMap<String, [f64; 2]> = serde_json::from_str(raw)?;
        let lexicon = entries
            .into_iter()
            .map(|(word, [pol, subj])| (word, (pol.clamp(-1.0, 1.0), subj.clamp(0.0, 1.0))))
            .collect();
        Ok(Self { lexicon })
    }

    #[inline]
    fn entry(&self, word: &str) -> Option<(f64, f64)> {
        self.lexicon.get(word).copied()
    }

    pub fn score(&self, text: &str) -> PolarityScore {
        let tokens = tokenize_words(text);

        let mut pol_sum = 0.0f64;
        let mut subj_sum = 0.0f64;
        let mut hits = 0usize;

        for i in 0..tokens.len() {
            let Some((base_pol, base_subj)) = self.entry(tokens[i].as_str()) else {
                continue;
            };

            let mut pol = base_pol;
            if i >= 1 && is_intensifier(tokens[i - 1].as_str()) {
                pol *= INTENSIFIER_BOOST;
            }
            // negator anywhere in the previous 1..=3 tokens
            let negated = (1..=3).any(|k| i >= k && is_negator(tokens[i - k].as_str()));
            if negated {
                pol *= NEGATION_FACTOR;
            }

            pol_sum += pol.clamp(-1.0, 1.0);
            subj_sum += base_subj;
            hits += 1;
        }

        if hits == 0 {
            return PolarityScore::default();
        }
        PolarityScore {
            polarity: (pol_sum / hits as f64).clamp(-1.0, 1.0),
            subjectivity: (subj_sum / hits as f64).clamp(0.0, 1.0),
        }
    }
}

impl Default for PolarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Negator set covers both apostrophized tokens and the apostrophe-free forms
/// the normalizer produces ("isn't" arrives as "isnt").
fn is_negator(tok: &str) -> bool {
    matches!(
        tok,
        "not"
            | "no"
            | "never"
            | "neither"
            | "nor"
            | "cannot"
            | "without"
            | "isnt"
            | "wasnt"
            | "arent"
            | "wont"
            | "cant"
            | "dont"
            | "didnt"
            | "doesnt"
            | "isn't"
            | "wasn't"
            | "aren't"
            | "won't"
            | "can't"
            | "don't"
            | "didn't"
            | "doesn't"
    )
}

fn is_intensifier(tok: &str) -> bool {
    matches!(
        tok,
        "very" | "really" | "extremely" | "so" | "incredibly" | "absolutely" | "totally"
            | "super" | "highly"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> PolarityScorer {
        PolarityScorer::new()
    }

    #[test]
    fn positive_text_scores_positive() {
        let s = scorer().score("what a wonderful and happy day");
        assert!(s.polarity > 0.5, "got {:?}", s);
        assert!(s.subjectivity > 0.5);
    }

    #[test]
    fn negation_flips_and_dampens() {
        let sc = scorer();
        let plain = sc.score("the food was good");
        let negated = sc.score("the food was not good");
        assert!(plain.polarity > 0.0);
        assert!(negated.polarity < 0.0);
        assert!(negated.polarity.abs() < plain.polarity.abs());
    }

    #[test]
    fn negation_window_reaches_three_tokens_back() {
        let sc = scorer();
        // "not" sits exactly 3 tokens before "good"
        let near = sc.score("not at all good");
        assert!(near.polarity < 0.0, "got {:?}", near);
        // 4 tokens back is outside the window
        let far = sc.score("not that it was ever good");
        assert!(far.polarity > 0.0, "got {:?}", far);
    }

    #[test]
    fn intensifier_boosts_magnitude() {
        let sc = scorer();
        let plain = sc.score("a nice idea");
        let boosted = sc.score("a very nice idea");
        assert!(boosted.polarity > plain.polarity);
    }

    #[test]
    fn no_hits_yield_zero_zero() {
        let s = scorer().score("quarterly accounting spreadsheet");
        assert_eq!(s, PolarityScore::default());
        let e = scorer().score("");
        assert_eq!(e, PolarityScore::default());
    }

    #[test]
    fn fixture_lexicon_injection() {
        let sc = PolarityScorer::from_json_str(r#"{"zork": [1.0, 1.0]}"#).expect("fixture");
        let s = sc.score("zork");
        assert!((s.polarity - 1.0).abs() < 1e-9);
        assert!((s.subjectivity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_fixture_values_are_clamped() {
        let sc = PolarityScorer::from_json_str(r#"{"zork": [5.0, -2.0]}"#).expect("fixture");
        let s = sc.score("zork");
        assert!((s.polarity - 1.0).abs() < 1e-9);
        assert_eq!(s.subjectivity, 0.0);
    }
}
