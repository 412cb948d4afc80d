//! Gendered word lists used for sentence classification
//!
//! The built-in lists are materialized once per process and shared
//! read-only; a [`Lexicon`] is what the classifier is handed.

mod words;

use std::collections::HashSet;
use std::sync::OnceLock;

pub use words::{FEMALE_WORDS, MALE_WORDS};

/// Immutable set of lowercase words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Build from words; entries are lowercased on the way in
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Exact lookup of an already-lowercased token
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Size of the intersection between this list and a token set
    pub fn intersection_len<'a>(&self, tokens: &HashSet<&'a str>) -> usize {
        tokens.iter().filter(|token| self.contains(token)).count()
    }
}

/// The pair of word lists the classifier matches against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    male: WordList,
    female: WordList,
}

static BUILTIN: OnceLock<Lexicon> = OnceLock::new();

impl Lexicon {
    pub fn new(male: WordList, female: WordList) -> Self {
        Self { male, female }
    }

    /// Process-wide lexicon built from [`MALE_WORDS`] and [`FEMALE_WORDS`]
    pub fn builtin() -> &'static Lexicon {
        BUILTIN.get_or_init(|| Lexicon::new(WordList::new(MALE_WORDS), WordList::new(FEMALE_WORDS)))
    }

    pub fn male(&self) -> &WordList {
        &self.male
    }

    pub fn female(&self) -> &WordList {
        &self.female
    }

    /// Distinct `(male, female)` matches among `tokens`
    pub fn matches<'a, I>(&self, tokens: I) -> (usize, usize)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let distinct: HashSet<&str> = tokens.into_iter().collect();
        (
            self.male.intersection_len(&distinct),
            self.female.intersection_len(&distinct),
        )
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sizes() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.male().len(), MALE_WORDS.len());
        assert_eq!(lexicon.female().len(), FEMALE_WORDS.len());
    }

    #[test]
    fn test_lists_are_disjoint() {
        let lexicon = Lexicon::builtin();
        assert!(MALE_WORDS.iter().all(|w| !lexicon.female().contains(w)));
    }

    #[test]
    fn test_contractions_listed() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.male().contains("he's"));
        assert!(lexicon.female().contains("women's"));
        assert!(lexicon.female().contains("queens"));
        assert!(!lexicon.female().contains("queen"));
    }

    #[test]
    fn test_wordlist_lowercases_entries() {
        let list = WordList::new(["King", "QUEEN"]);
        assert!(list.contains("king"));
        assert!(list.contains("queen"));
        assert!(!list.contains("King"));
    }

    #[test]
    fn test_matches_counts_distinct_tokens() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.matches(["he", "he", "him"]), (2, 0));
        assert_eq!(lexicon.matches(["she", "and", "he"]), (1, 1));
        assert_eq!(lexicon.matches(Vec::<&str>::new()), (0, 0));
    }
}
