// src/analyze/emotion.rs
//! Emotion tally over a fixed trigger-word table. Hits are exact token
//! matches (never substrings); each emotion's count is normalized by the
//! total number of emotion-word hits across all five categories.

use crate::report::{round3, EmotionProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Emotion {
    Happy,
    Angry,
    Surprise,
    Sad,
    Fear,
}

/// Static trigger table — configuration, not behavior.
const EMOTION_TRIGGERS: &[(Emotion, &[&str])] = &[
    (
        Emotion::Happy,
        &["happy", "joy", "excited", "pleased", "delighted", "wonderful", "great", "awesome"],
    ),
    (
        Emotion::Angry,
        &["angry", "mad", "furious", "outraged", "annoyed", "irritated", "frustrated"],
    ),
    (
        Emotion::Surprise,
        &["surprised", "amazed", "astonished", "shocked", "wow", "unexpected"],
    ),
    (
        Emotion::Sad,
        &["sad", "unhappy", "depressed", "miserable", "sorrow", "grief", "heartbroken"],
    ),
    (
        Emotion::Fear,
        &["afraid", "scared", "fearful", "terrified", "anxious", "worried", "nervous"],
    ),
];

/// Tally emotion hits over already-tokenized text. Zero hits produce an
/// all-zero profile (never NaN).
pub fn tally(tokens: &[String]) -> EmotionProfile {
    let mut counts = [0usize; 5];
    for tok in tokens {
        for (emotion, triggers) in EMOTION_TRIGGERS {
            if triggers.contains(&tok.as_str()) {
                counts[*emotion as usize] += 1;
            }
        }
    }

    let total: usize = counts.iter().sum();
    if total == 0 {
        return EmotionProfile::default();
    }

    let frac = |e: Emotion| round3(counts[e as usize] as f64 / total as f64);
    EmotionProfile {
        happy: frac(Emotion::Happy),
        angry: frac(Emotion::Angry),
        surprise: frac(Emotion::Surprise),
        sad: frac(Emotion::Sad),
        fear: frac(Emotion::Fear),
    }
}
