//! Sentence starters detection for boundary decision after abbreviations
//!
//! When an abbreviation is followed by a word that usually opens a sentence
//! ("Mr. Smith left at 5 p.m. He was tired."), the abbreviation dot also
//! ends the sentence.

use std::collections::{HashMap, HashSet};

/// Sentence starters lookup table (case-sensitive)
#[derive(Debug, Clone, Default)]
pub struct SentenceStarterTable {
    starters: HashSet<String>,
}

impl SentenceStarterTable {
    /// Create from categorized word lists
    pub fn from_categories(categories: &HashMap<String, Vec<String>>) -> Self {
        Self {
            starters: categories.values().flatten().cloned().collect(),
        }
    }

    /// Check if a word is a sentence starter
    pub fn is_sentence_starter(&self, word: &str) -> bool {
        self.starters.contains(word)
    }

    /// Get the next alphabetic word after whitespace following `after_pos`
    pub fn next_word(text: &str, after_pos: usize) -> Option<&str> {
        let remaining = text.get(after_pos..)?;
        let trimmed = remaining.trim_start();
        let word_end = trimmed
            .char_indices()
            .find(|(_, ch)| !ch.is_alphabetic())
            .map(|(i, _)| i)
            .unwrap_or(trimmed.len());

        (word_end > 0).then(|| &trimmed[..word_end])
    }

    /// Check if position after an abbreviation should be a boundary
    /// because a sentence starter (or end of text) follows
    pub fn check_after_abbreviation(&self, text: &str, after_abbrev_pos: usize) -> bool {
        let remaining = match text.get(after_abbrev_pos..) {
            Some(rest) => rest,
            None => return true,
        };

        if remaining.trim().is_empty() {
            return true;
        }

        Self::next_word(text, after_abbrev_pos).is_some_and(|word| self.is_sentence_starter(word))
    }
}
