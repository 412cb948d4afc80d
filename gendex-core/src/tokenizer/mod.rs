//! Tokenization: text → sentences → lowercase word tokens

mod segmenter;
mod words;

use std::sync::Arc;

use crate::language::{default_rules, LanguageRules};

pub use segmenter::split_sentences;
pub use words::split_words;

/// An ordered sequence of lowercase word tokens from one sentence
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sentence {
    tokens: Vec<String>,
}

impl Sentence {
    /// Wrap already-lowercased tokens
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Tokenize a single sentence string
    pub fn from_text(sentence: &str) -> Self {
        Self::new(split_words(sentence))
    }

    /// Raw token count, duplicates included
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Sentence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Sentence segmenter plus word tokenizer bound to a rule set
#[derive(Clone)]
pub struct Tokenizer {
    rules: Arc<dyn LanguageRules>,
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("language", &self.rules.code())
            .finish()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl Tokenizer {
    pub fn new(rules: Arc<dyn LanguageRules>) -> Self {
        Self { rules }
    }

    /// Rules this tokenizer segments with
    pub fn rules(&self) -> &dyn LanguageRules {
        self.rules.as_ref()
    }

    /// Split text into sentences of lowercase tokens, in text order.
    ///
    /// Never fails: empty or whitespace-only text yields no sentences and
    /// text without terminators yields one.
    pub fn tokenize(&self, text: &str) -> Vec<Sentence> {
        split_sentences(text, self.rules.as_ref())
            .into_iter()
            .map(Sentence::from_text)
            .collect()
    }

    /// Tokenize raw bytes; undecodable input yields no sentences
    pub fn tokenize_bytes(&self, bytes: &[u8]) -> Vec<Sentence> {
        match std::str::from_utf8(bytes) {
            Ok(text) => self.tokenize(text),
            Err(e) => {
                log::warn!("Skipping input that is not valid UTF-8: {e}");
                Vec::new()
            }
        }
    }
}

/// Tokenize with the default English rules
pub fn tokenize(text: &str) -> Vec<Sentence> {
    Tokenizer::default().tokenize(text)
}
