//! Reduce classified sentences into a [`Report`]
//!
//! [`Tally`] is a commutative monoid: `Tally::default()` is the identity and
//! [`Tally::combine`] is associative and order independent. Chunks of a text
//! can be tallied independently and merged in any order, which is what the
//! parallel path relies on.

use crate::classifier::{classify, Category};
use crate::lexicon::Lexicon;
use crate::report::Report;
use crate::tokenizer::Sentence;

/// Running per-category sentence and word counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    sentences: [usize; 4],
    words: [usize; 4],
}

impl Tally {
    /// Tally holding a single classified sentence
    pub fn single(category: Category, words: usize) -> Self {
        let mut tally = Self::default();
        tally.record(category, words);
        tally
    }

    /// Count one sentence of `words` tokens under `category`
    pub fn record(&mut self, category: Category, words: usize) {
        let i = category.index();
        self.sentences[i] += 1;
        self.words[i] += words;
    }

    /// Classify and count a sentence
    pub fn add_sentence(&mut self, sentence: &Sentence, lexicon: &Lexicon) {
        self.record(classify(sentence, lexicon), sentence.len());
    }

    pub fn combine(self, other: Self) -> Self {
        let mut sentences = self.sentences;
        let mut words = self.words;
        for i in 0..4 {
            sentences[i] += other.sentences[i];
            words[i] += other.words[i];
        }
        Self { sentences, words }
    }

    pub fn sentence_total(&self) -> usize {
        self.sentences.iter().sum()
    }

    pub fn word_total(&self) -> usize {
        self.words.iter().sum()
    }

    pub fn into_report(self) -> Report {
        Report::from_counts(self.sentences, self.words)
    }
}

impl Extend<(Category, usize)> for Tally {
    fn extend<I: IntoIterator<Item = (Category, usize)>>(&mut self, iter: I) {
        for (category, words) in iter {
            self.record(category, words);
        }
    }
}

impl FromIterator<(Category, usize)> for Tally {
    fn from_iter<I: IntoIterator<Item = (Category, usize)>>(iter: I) -> Self {
        let mut tally = Self::default();
        tally.extend(iter);
        tally
    }
}

/// Classify every sentence and build the report
pub fn aggregate<'a, I>(sentences: I, lexicon: &Lexicon) -> Report
where
    I: IntoIterator<Item = &'a Sentence>,
{
    sentences
        .into_iter()
        .fold(Tally::default(), |mut tally, sentence| {
            tally.add_sentence(sentence, lexicon);
            tally
        })
        .into_report()
}

/// Same result as [`aggregate`], classifying sentences on the rayon pool
#[cfg(feature = "parallel")]
pub fn aggregate_parallel(sentences: &[Sentence], lexicon: &Lexicon) -> Report {
    use rayon::prelude::*;

    sentences
        .par_iter()
        .map(|sentence| Tally::single(classify(sentence, lexicon), sentence.len()))
        .reduce(Tally::default, Tally::combine)
        .into_report()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    #[test]
    fn test_aggregate_two_sentences() {
        let sentences = tokenize("He is a king. She is a queen.");
        let report = aggregate(&sentences, Lexicon::builtin());

        // "queen" is not in the female list but "she" is
        assert_eq!(report.sentence_count(Category::Male), 1);
        assert_eq!(report.sentence_count(Category::Female), 1);
        assert_eq!(report.word_count(Category::Male), 5);
        assert_eq!(report.total_words(), 10);
        assert_eq!(report.word_fraction(Category::Male), 0.5);
        assert_eq!(report.word_fraction(Category::Female), 0.5);
        assert_eq!(report.word_fraction(Category::Both), 0.0);
        assert_eq!(report.word_fraction(Category::Unknown), 0.0);
    }

    #[test]
    fn test_aggregate_empty() {
        let report = aggregate(&[], Lexicon::builtin());
        assert!(!report.has_words());
        assert_eq!(report.total_sentences(), 0);
    }

    #[test]
    fn test_combine_identity_and_commutativity() {
        let a = Tally::single(Category::Male, 4);
        let b = Tally::single(Category::Unknown, 7);
        assert_eq!(a.combine(Tally::default()), a);
        assert_eq!(a.combine(b), b.combine(a));
        assert_eq!(a.combine(b).word_total(), 11);
        assert_eq!(a.combine(b).sentence_total(), 2);
    }

    #[test]
    fn test_from_iter_matches_record() {
        let tally: Tally = [(Category::Both, 3), (Category::Both, 2)].into_iter().collect();
        let report = tally.into_report();
        assert_eq!(report.sentence_count(Category::Both), 2);
        assert_eq!(report.word_fraction(Category::Both), 1.0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let text = "He ran. She ran. They ran. My brother and sister ran. \
                    The queen waved. His uncle laughed.";
        let sentences = tokenize(text);
        assert_eq!(
            aggregate_parallel(&sentences, Lexicon::builtin()),
            aggregate(&sentences, Lexicon::builtin())
        );
    }
}
