//! Word tokenization on Unicode word boundaries (UAX #29)
//!
//! Whitespace segments are dropped; every other segment becomes a token, so
//! punctuation marks are tokens of their own while contractions and
//! possessives (`he's`, `men's`) stay whole.

use unicode_segmentation::UnicodeSegmentation;

/// Split a sentence into lowercase word tokens
pub fn split_words(sentence: &str) -> Vec<String> {
    sentence
        .split_word_bounds()
        .filter(|segment| !segment.chars().all(char::is_whitespace))
        .map(str::to_lowercase)
        .collect()
}
