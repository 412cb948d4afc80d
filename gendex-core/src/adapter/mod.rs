//! Record adapter boundary
//!
//! Hosts that move records around (tables, JSON lines, ...) plug in through
//! [`RecordAdapter`]. The core only sees a text value in and a
//! [`ScoreFields`] row out; the null-input branch lives in
//! [`process_record`], never in the analyzer.

mod json;

use serde::{Deserialize, Serialize};

use crate::api::GenderAnalyzer;
use crate::classifier::Category;
use crate::report::Report;

pub use json::JsonRecordAdapter;

/// Output field names in schema order
pub const OUTPUT_FIELDS: [&str; 8] = [
    "female_score",
    "male_score",
    "both_score",
    "unknown_score",
    "female_sentences",
    "male_sentences",
    "both_sentences",
    "unknown_sentences",
];

/// The eight output fields written back to a record.
///
/// Scores are word fractions in `[0, 1]`. `None` is a null field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreFields {
    pub female_score: Option<f64>,
    pub male_score: Option<f64>,
    pub both_score: Option<f64>,
    pub unknown_score: Option<f64>,
    pub female_sentences: Option<i64>,
    pub male_sentences: Option<i64>,
    pub both_sentences: Option<i64>,
    pub unknown_sentences: Option<i64>,
}

impl ScoreFields {
    /// Row for a record whose text field is null
    pub fn null() -> Self {
        Self::default()
    }

    pub fn is_null(&self) -> bool {
        *self == Self::null()
    }

    pub fn score(&self, category: Category) -> Option<f64> {
        match category {
            Category::Male => self.male_score,
            Category::Female => self.female_score,
            Category::Both => self.both_score,
            Category::Unknown => self.unknown_score,
        }
    }

    pub fn sentences(&self, category: Category) -> Option<i64> {
        match category {
            Category::Male => self.male_sentences,
            Category::Female => self.female_sentences,
            Category::Both => self.both_sentences,
            Category::Unknown => self.unknown_sentences,
        }
    }

    /// `(name, value)` pairs in [`OUTPUT_FIELDS`] order
    pub fn entries(&self) -> [(&'static str, FieldValue); 8] {
        [
            (OUTPUT_FIELDS[0], FieldValue::Float(self.female_score)),
            (OUTPUT_FIELDS[1], FieldValue::Float(self.male_score)),
            (OUTPUT_FIELDS[2], FieldValue::Float(self.both_score)),
            (OUTPUT_FIELDS[3], FieldValue::Float(self.unknown_score)),
            (OUTPUT_FIELDS[4], FieldValue::Int(self.female_sentences)),
            (OUTPUT_FIELDS[5], FieldValue::Int(self.male_sentences)),
            (OUTPUT_FIELDS[6], FieldValue::Int(self.both_sentences)),
            (OUTPUT_FIELDS[7], FieldValue::Int(self.unknown_sentences)),
        ]
    }
}

/// A single nullable output value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Float(Option<f64>),
    Int(Option<i64>),
}

impl From<&Report> for ScoreFields {
    fn from(report: &Report) -> Self {
        let count = |c: Category| Some(report.sentence_count(c) as i64);
        Self {
            female_score: Some(report.word_fraction(Category::Female)),
            male_score: Some(report.word_fraction(Category::Male)),
            both_score: Some(report.word_fraction(Category::Both)),
            unknown_score: Some(report.word_fraction(Category::Unknown)),
            female_sentences: count(Category::Female),
            male_sentences: count(Category::Male),
            both_sentences: count(Category::Both),
            unknown_sentences: count(Category::Unknown),
        }
    }
}

/// Host-specific record access
pub trait RecordAdapter {
    /// Host record type
    type Record;

    /// Text to analyze, or `None` when the field is null or absent
    fn read_text_field(&self, record: &Self::Record) -> Option<String>;

    /// Write all eight output fields; other fields stay untouched
    fn write_report_fields(&self, record: &mut Self::Record, fields: &ScoreFields);
}

/// Analyze one record in place.
///
/// A null text field yields the all-null row; anything else is analyzed and
/// written as a populated row (zero-filled when the text has no words).
pub fn process_record<A>(
    adapter: &A,
    analyzer: &GenderAnalyzer,
    record: &mut A::Record,
) -> ScoreFields
where
    A: RecordAdapter + ?Sized,
{
    let fields = match adapter.read_text_field(record) {
        Some(text) => ScoreFields::from(&analyzer.analyze(&text)),
        None => ScoreFields::null(),
    };
    adapter.write_report_fields(record, &fields);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Minimal in-memory host used to exercise the trait contract
    struct MapAdapter;

    impl RecordAdapter for MapAdapter {
        type Record = HashMap<String, Option<String>>;

        fn read_text_field(&self, record: &Self::Record) -> Option<String> {
            record.get("text").cloned().flatten()
        }

        fn write_report_fields(&self, record: &mut Self::Record, fields: &ScoreFields) {
            for (name, value) in fields.entries() {
                let rendered = match value {
                    FieldValue::Float(v) => v.map(|v| v.to_string()),
                    FieldValue::Int(v) => v.map(|v| v.to_string()),
                };
                record.insert(name.to_string(), rendered);
            }
        }
    }

    #[test]
    fn test_null_text_writes_null_row() {
        let mut record = HashMap::from([("text".to_string(), None)]);
        let fields = process_record(&MapAdapter, &GenderAnalyzer::new(), &mut record);

        assert!(fields.is_null());
        assert_eq!(record.len(), 9);
        assert!(OUTPUT_FIELDS.iter().all(|name| record[*name].is_none()));
    }

    #[test]
    fn test_populated_row() {
        let mut record = HashMap::from([
            ("text".to_string(), Some("He is a king. She is a queen.".to_string())),
            ("id".to_string(), Some("7".to_string())),
        ]);
        let fields = process_record(&MapAdapter, &GenderAnalyzer::new(), &mut record);

        assert_eq!(fields.male_score, Some(0.5));
        assert_eq!(fields.female_sentences, Some(1));
        assert_eq!(fields.both_sentences, Some(0));
        assert_eq!(record["id"].as_deref(), Some("7"));
        assert_eq!(record["unknown_score"].as_deref(), Some("0"));
    }

    #[test]
    fn test_empty_text_is_zero_filled_not_null() {
        let fields = ScoreFields::from(&GenderAnalyzer::new().analyze(""));
        assert!(!fields.is_null());
        for category in Category::ALL {
            assert_eq!(fields.score(category), Some(0.0));
            assert_eq!(fields.sentences(category), Some(0));
        }
    }

    #[test]
    fn test_entries_follow_schema_order() {
        let names: Vec<&str> = ScoreFields::null().entries().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, OUTPUT_FIELDS);
    }
}
