//! Per-sentence gender classification

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::tokenizer::Sentence;

/// Category assigned to a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Male,
    Female,
    Both,
    Unknown,
}

impl Category {
    /// All categories, in report order
    pub const ALL: [Category; 4] = [
        Category::Male,
        Category::Female,
        Category::Both,
        Category::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Male => "male",
            Category::Female => "female",
            Category::Both => "both",
            Category::Unknown => "unknown",
        }
    }

    /// Apply the decision table to match counts
    pub fn from_matches(male: usize, female: usize) -> Self {
        match (male > 0, female > 0) {
            (true, false) => Category::Male,
            (false, true) => Category::Female,
            (true, true) => Category::Both,
            (false, false) => Category::Unknown,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Category::Male),
            "female" => Ok(Category::Female),
            "both" => Ok(Category::Both),
            "unknown" => Ok(Category::Unknown),
            other => Err(format!("Unknown category: {other}")),
        }
    }
}

/// Classify a sentence by set intersection with the lexicon.
///
/// Total over any token sequence; an empty sentence is [`Category::Unknown`].
pub fn classify(sentence: &Sentence, lexicon: &Lexicon) -> Category {
    let (male, female) = lexicon.matches(sentence.iter());
    Category::from_matches(male, female)
}
