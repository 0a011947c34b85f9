// src/analyze/readability.rs
//! Flesch readability from a vowel-group syllable heuristic.
//!
//! The heuristic is English-specific and approximate: count transitions into
//! vowel groups ("aeiouy"), subtract a trailing silent "e", floor at one
//! syllable per word. Swap this module out behind the same signatures if
//! another language ever needs scoring.

use crate::report::{round2, ReadabilityScores};

const FLESCH_BASE: f64 = 206.835;
const FLESCH_SENTENCE_WEIGHT: f64 = 1.015;
const FLESCH_SYLLABLE_WEIGHT: f64 = 84.6;
const FK_SENTENCE_WEIGHT: f64 = 0.39;
const FK_SYLLABLE_WEIGHT: f64 = 11.8;
const FK_OFFSET: f64 = 15.59;

/// Approximate syllable count: leading vowel counts one, every
/// non-vowel→vowel transition counts one, trailing "e" subtracts one,
/// minimum one syllable per non-empty word.
pub fn count_syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let chars: Vec<char> = lower.chars().collect();
    if chars.is_empty() {
        return 0;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut count = 0usize;
    if is_vowel(chars[0]) {
        count += 1;
    }
    for i in 1..chars.len() {
        if is_vowel(chars[i]) && !is_vowel(chars[i - 1]) {
            count += 1;
        }
    }
    if lower.ends_with('e') {
        count = count.saturating_sub(1);
    }
    count.max(1)
}

/// Flesch Reading Ease and Flesch-Kincaid Grade Level. Zero words or zero
/// sentences report as 0/0 rather than dividing by nothing.
pub fn flesch_scores(tokens: &[String], sentences: &[String]) -> ReadabilityScores {
    if tokens.is_empty() || sentences.is_empty() {
        return ReadabilityScores::default();
    }

    let words = tokens.len() as f64;
    let sents = sentences.len() as f64;
    let syllables: usize = tokens.iter().map(|w| count_syllables(w)).sum();
    let syl = syllables as f64;

    let ease = FLESCH_BASE - FLESCH_SENTENCE_WEIGHT * (words / sents) - FLESCH_SYLLABLE_WEIGHT * (syl / words);
    let grade = FK_SENTENCE_WEIGHT * (words / sents) + FK_SYLLABLE_WEIGHT * (syl / words) - FK_OFFSET;

    ReadabilityScores {
        flesch_reading_ease: round2(ease),
        flesch_kincaid_grade: round2(grade),
    }
}
