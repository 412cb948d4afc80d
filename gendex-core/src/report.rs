//! Aggregated per-category results

use serde::{Deserialize, Serialize};

use crate::classifier::Category;

/// Counts and word share for one category
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryStats {
    /// Sentences classified into this category
    pub sentence_count: usize,
    /// Tokens in those sentences (raw count, punctuation included)
    pub word_count: usize,
    /// `word_count / total_words`, or 0.0 when there are no words
    pub word_fraction: f64,
}

/// Final report for one text.
///
/// All four categories are always present. When the text has no words at
/// all every fraction is 0.0 and [`Report::has_words`] is false.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Report {
    male: CategoryStats,
    female: CategoryStats,
    both: CategoryStats,
    unknown: CategoryStats,
    total_sentences: usize,
    total_words: usize,
}

impl Report {
    /// Build from per-category `(sentence_count, word_count)` indexed like
    /// [`Category::ALL`]
    pub(crate) fn from_counts(sentences: [usize; 4], words: [usize; 4]) -> Self {
        let total_words: usize = words.iter().sum();
        let total_sentences: usize = sentences.iter().sum();

        let stats = |category: Category| {
            let i = category.index();
            let word_fraction = if total_words > 0 {
                words[i] as f64 / total_words as f64
            } else {
                0.0
            };
            CategoryStats {
                sentence_count: sentences[i],
                word_count: words[i],
                word_fraction,
            }
        };

        Self {
            male: stats(Category::Male),
            female: stats(Category::Female),
            both: stats(Category::Both),
            unknown: stats(Category::Unknown),
            total_sentences,
            total_words,
        }
    }

    pub fn get(&self, category: Category) -> &CategoryStats {
        match category {
            Category::Male => &self.male,
            Category::Female => &self.female,
            Category::Both => &self.both,
            Category::Unknown => &self.unknown,
        }
    }

    pub fn sentence_count(&self, category: Category) -> usize {
        self.get(category).sentence_count
    }

    pub fn word_count(&self, category: Category) -> usize {
        self.get(category).word_count
    }

    pub fn word_fraction(&self, category: Category) -> f64 {
        self.get(category).word_fraction
    }

    /// Word share as a percentage (0.0 - 100.0)
    pub fn percent(&self, category: Category) -> f64 {
        self.word_fraction(category) * 100.0
    }

    pub fn total_sentences(&self) -> usize {
        self.total_sentences
    }

    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// False when the fractions carry no information (zero total words)
    pub fn has_words(&self) -> bool {
        self.total_words > 0
    }

    /// Category with the largest word share, if any words were seen
    pub fn dominant(&self) -> Option<Category> {
        if !self.has_words() {
            return None;
        }
        Category::ALL
            .into_iter()
            .max_by_key(|&category| (self.word_count(category), std::cmp::Reverse(category)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryStats)> {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractions_from_counts() {
        let report = Report::from_counts([1, 1, 0, 2], [5, 5, 0, 10]);
        assert_eq!(report.total_words(), 20);
        assert_eq!(report.total_sentences(), 4);
        assert_eq!(report.word_fraction(Category::Male), 0.25);
        assert_eq!(report.word_fraction(Category::Unknown), 0.5);
        assert_eq!(report.word_fraction(Category::Both), 0.0);
        assert_eq!(report.percent(Category::Female), 25.0);
    }

    #[test]
    fn test_zero_total_policy() {
        let report = Report::from_counts([0; 4], [0; 4]);
        assert!(!report.has_words());
        assert_eq!(report, Report::default());
        assert!(report.iter().all(|(_, stats)| stats.word_fraction == 0.0));
        assert_eq!(report.dominant(), None);
    }

    #[test]
    fn test_dominant_prefers_earlier_category_on_tie() {
        let report = Report::from_counts([1, 1, 0, 0], [5, 5, 0, 0]);
        assert_eq!(report.dominant(), Some(Category::Male));

        let report = Report::from_counts([1, 0, 0, 3], [4, 0, 0, 9]);
        assert_eq!(report.dominant(), Some(Category::Unknown));
    }

    #[test]
    fn test_iter_covers_all_categories_in_order() {
        let report = Report::default();
        let order: Vec<Category> = report.iter().map(|(c, _)| c).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn test_serialize_shape() {
        let report = Report::from_counts([0, 0, 1, 0], [0, 0, 4, 0]);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["both"]["sentence_count"], 1);
        assert_eq!(value["both"]["word_fraction"], 1.0);
        assert_eq!(value["total_words"], 4);
    }
}
