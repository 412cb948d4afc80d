//! Sentence-level gendered language classification
//!
//! Text is split into sentences and lowercase word tokens, each sentence is
//! tagged male, female, both or unknown by intersecting its tokens with two
//! fixed word lists, and the tags are folded into a [`Report`] holding each
//! category's sentence count and share of the total words.
//!
//! # Architecture
//!
//! - **tokenizer**: rule-driven sentence segmentation plus UAX #29 words
//! - **classifier**: the per-sentence decision table
//! - **aggregator**: the [`Tally`] monoid and [`aggregate`]
//! - **api**: [`GenderAnalyzer`], its [`Config`] and [`Input`] sources
//! - **adapter**: the record boundary used by embedding hosts
//!
//! # Example
//!
//! ```rust
//! use gendex_core::{analyze, Category};
//!
//! let report = analyze("He is a king. She is a queen.");
//!
//! assert_eq!(report.sentence_count(Category::Male), 1);
//! assert_eq!(report.sentence_count(Category::Female), 1);
//! assert_eq!(report.word_fraction(Category::Male), 0.5);
//! assert_eq!(report.word_fraction(Category::Unknown), 0.0);
//! ```

pub mod adapter;
pub mod aggregator;
pub mod api;
pub mod classifier;
pub mod error;
pub mod language;
pub mod lexicon;
pub mod report;
pub mod tokenizer;

pub use adapter::{process_record, JsonRecordAdapter, RecordAdapter, ScoreFields, OUTPUT_FIELDS};
pub use aggregator::{aggregate, Tally};
pub use api::{Config, ConfigBuilder, GenderAnalyzer, Input};
pub use classifier::{classify, Category};
pub use error::{Error, Result};
pub use language::{ConfigurableLanguageRules, LanguageRules};
pub use lexicon::{Lexicon, WordList};
pub use report::{CategoryStats, Report};
pub use tokenizer::{tokenize, Sentence, Tokenizer};

/// Analyze text with the default English rules and built-in word lists
pub fn analyze(text: &str) -> Report {
    aggregate(&tokenize(text), Lexicon::builtin())
}
