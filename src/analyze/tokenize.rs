// src/analyze/tokenize.rs
//! Word/sentence tokenizers and the stopword set shared by the pipeline stages.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Alphanumeric tokens, lower-cased. Splitting on everything else keeps the
/// tokenizer in lockstep with the normalizer, which deletes punctuation.
pub fn tokenize_words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

static RE_SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence-boundary regex"));

/// Split on terminal punctuation runs; segments that trim to nothing are
/// dropped, so `"..."` yields zero sentences.
pub fn split_sentences(text: &str) -> Vec<String> {
    RE_SENTENCE_END
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// English stopwords. The list carries both apostrophized forms ("don't") and
/// the apostrophe-free forms ("dont") that come out of the normalizer, which
/// deletes punctuation before tokenization.
const STOPWORD_LIST: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such",
    "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
    "will", "just", "don", "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain",
    "aren", "couldn", "didn", "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn",
    "mustn", "needn", "shan", "shouldn", "wasn", "weren", "won", "wouldn",
    // apostrophized forms
    "you're", "you've", "you'll", "you'd", "she's", "it's", "that'll", "don't", "should've",
    "aren't", "couldn't", "didn't", "doesn't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "needn't", "shan't", "shouldn't", "wasn't", "weren't", "won't",
    "wouldn't", "i'm", "i've", "i'll", "i'd",
    // apostrophe-free forms produced by the normalizer
    "youre", "youve", "youll", "youd", "shes", "thatll", "dont", "shouldve", "arent",
    "couldnt", "didnt", "doesnt", "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt",
    "neednt", "shant", "shouldnt", "wasnt", "werent", "wont", "wouldnt", "im", "ive", "ill",
    "id", "cant", "cannot",
];

static STOPWORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOPWORD_LIST.iter().copied().collect());

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizer_lowercases_and_splits_on_non_alphanumerics() {
        let toks = tokenize_words("The movie was great, wasn't it?");
        assert_eq!(toks, vec!["the", "movie", "was", "great", "wasn", "t", "it"]);
    }

    #[test]
    fn tokenizer_handles_empty_input() {
        assert!(tokenize_words("").is_empty());
        assert!(tokenize_words("  ...  ").is_empty());
    }

    #[test]
    fn sentences_split_on_terminal_punctuation_runs() {
        let s = split_sentences("hello world. how are you?! fine");
        assert_eq!(s, vec!["hello world", "how are you", "fine"]);
    }

    #[test]
    fn punctuation_only_input_yields_zero_sentences() {
        assert!(split_sentences("...").is_empty());
        assert!(split_sentences("?!?!").is_empty());
    }

    #[test]
    fn stopwords_cover_normalizer_output() {
        assert!(is_stopword("the"));
        assert!(is_stopword("dont"));
        assert!(is_stopword("don't"));
        assert!(!is_stopword("market"));
    }
}
