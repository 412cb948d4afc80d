//! Abbreviation trie for backward lookups at a dot
//!
//! Nodes live in one contiguous vector and refer to children by index.
//! Matching is case-insensitive.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, u32>,
    is_end: bool,
}

/// Case-insensitive abbreviation trie
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    /// Treat a lone letter before a dot as an abbreviation ("J. Smith")
    initials: bool,
}

impl Trie {
    /// Create empty trie
    pub fn new(initials: bool) -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            initials,
        }
    }

    /// Build from configuration categories
    pub fn from_categories(categories: &HashMap<String, Vec<String>>, initials: bool) -> Self {
        let mut trie = Self::new(initials);
        for abbr in categories.values().flatten() {
            trie.insert(abbr.trim_end_matches('.'));
        }
        trie
    }

    /// Insert abbreviation (without trailing dot)
    pub fn insert(&mut self, abbreviation: &str) {
        if abbreviation.is_empty() {
            return;
        }

        let mut current = 0usize;
        for ch in abbreviation.chars().flat_map(char::to_lowercase) {
            current = match self.nodes[current].children.get(&ch) {
                Some(&child) => child as usize,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children.insert(ch, child as u32);
                    child
                }
            };
        }
        self.nodes[current].is_end = true;
    }

    /// Check whether the word ending at the dot `text[dot_pos]` is an
    /// abbreviation.
    pub fn find_abbrev(&self, text: &str, dot_pos: usize) -> bool {
        if dot_pos == 0 || dot_pos > text.len() || !text.is_char_boundary(dot_pos) {
            return false;
        }

        let before = &text[..dot_pos];
        let start = before
            .char_indices()
            .rev()
            .find(|&(_, ch)| !(ch.is_alphanumeric() || ch == '.'))
            .map(|(i, ch)| i + ch.len_utf8())
            .unwrap_or(0);
        let word = &before[start..];

        if word.is_empty() {
            return false;
        }

        if self.initials && is_initial(word) {
            return true;
        }

        self.match_word(word)
    }

    fn match_word(&self, word: &str) -> bool {
        let mut current = 0usize;
        for ch in word.chars().flat_map(char::to_lowercase) {
            match self.nodes[current].children.get(&ch) {
                Some(&child) => current = child as usize,
                None => return false,
            }
        }
        self.nodes[current].is_end
    }
}

/// A lone capital letter, except the pronoun "I"
fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(ch), None) if ch.is_uppercase() && ch != 'I')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_abbreviations() {
        let mut trie = Trie::new(false);
        trie.insert("Dr");
        trie.insert("Mr");

        // dot_pos is the byte offset of the dot
        assert!(trie.find_abbrev("Dr.", 2));
        assert!(trie.find_abbrev("Hello Mr.", 8));
        assert!(!trie.find_abbrev("Ms.", 2));
        assert!(!trie.find_abbrev("Drum.", 4));
    }

    #[test]
    fn test_multi_period_abbreviations() {
        let mut categories = HashMap::new();
        categories.insert(
            "locations".to_string(),
            vec!["U.S".to_string(), "e.g.".to_string()],
        );
        let trie = Trie::from_categories(&categories, false);

        assert!(trie.find_abbrev("from the U.S.", 12));
        assert!(trie.find_abbrev("fruit, e.g.", 10));
        assert!(!trie.find_abbrev("the U.", 5));
    }

    #[test]
    fn test_case_insensitive() {
        let mut trie = Trie::new(false);
        trie.insert("Dr");

        assert!(trie.find_abbrev("dr.", 2));
        assert!(trie.find_abbrev("DR.", 2));
    }

    #[test]
    fn test_initials() {
        let trie = Trie::new(true);
        assert!(trie.find_abbrev("J.", 1));
        assert!(trie.find_abbrev("by J.", 4));
        assert!(!trie.find_abbrev("by j.", 4));
        assert!(!trie.find_abbrev("So did I.", 8));
        assert!(!Trie::new(false).find_abbrev("J.", 1));
    }

    #[test]
    fn test_empty_and_out_of_range() {
        let trie = Trie::new(false);
        assert!(!trie.find_abbrev(".", 0));
        assert!(!trie.find_abbrev("Dr.", 10));
    }
}
