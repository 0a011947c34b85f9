// src/analyze/normalize.rs
//! Input normalization: HTML hygiene, URL/social-marker stripping, punctuation
//! removal, lower-casing, whitespace collapse. Pure and idempotent — running
//! the normalizer on its own output is a no-op.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)</?[^>]+>").expect("tag regex"));
static RE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:https?://|www\.)\S+").expect("url regex"));
static RE_SOCIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[@#]\w+").expect("social regex"));

/// Shared hygiene pass: decode HTML entities, strip markup tags, normalize
/// curly quotes to ASCII, drop URLs and `@mention`/`#hashtag` markers.
fn strip_markup(text: &str) -> String {
    let decoded = html_escape::decode_html_entities(text);
    let no_tags = RE_TAGS.replace_all(&decoded, " ");
    let ascii_quotes = no_tags
        .replace(['\u{201C}', '\u{201D}', '\u{00AB}', '\u{00BB}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'");
    let no_urls = RE_URL.replace_all(&ascii_quotes, " ");
    RE_SOCIAL.replace_all(&no_urls, " ").into_owned()
}

/// Lower-case and collapse whitespace runs into single spaces.
/// With `strip_punct`, ASCII punctuation characters are deleted outright
/// ("don't" becomes "dont"), matching what the scorers and tokenizer expect.
fn collapse_and_lower(input: &str, strip_punct: bool) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last_space = true; // swallows leading whitespace
    for ch in input.chars() {
        if strip_punct && ch.is_ascii_punctuation() {
            continue;
        }
        if ch.is_whitespace() {
            if !last_space {
                out.push(' ');
                last_space = true;
            }
        } else {
            out.extend(ch.to_lowercase());
            last_space = false;
        }
    }
    out.trim_end().to_string()
}

/// Full normalization: the single text every scoring stage consumes.
/// Empty or whitespace-only input yields the empty string.
pub fn normalize(text: &str) -> String {
    collapse_and_lower(&strip_markup(text), true)
}

/// Same hygiene and casing, but terminal punctuation survives so the sentence
/// tokenizer has boundaries to find. Statistics and readability take their
/// sentence counts from this text rather than from the fully stripped form.
pub fn normalize_keep_sentences(text: &str) -> String {
    collapse_and_lower(&strip_markup(text), false)
}
