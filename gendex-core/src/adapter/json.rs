//! JSON object records (`serde_json::Map`)

use serde_json::{Map, Number, Value};

use super::{FieldValue, RecordAdapter, ScoreFields};
use crate::error::{Error, Result};

/// Adapter over JSON objects with one selected text field
#[derive(Debug, Clone)]
pub struct JsonRecordAdapter {
    field: String,
}

impl JsonRecordAdapter {
    /// Select the field to analyze; an empty name is a configuration error
    pub fn new(field: impl Into<String>) -> Result<Self> {
        let field = field.into();
        if field.trim().is_empty() {
            return Err(Error::Configuration(
                "please select a field to analyze".into(),
            ));
        }
        Ok(Self { field })
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

impl RecordAdapter for JsonRecordAdapter {
    type Record = Map<String, Value>;

    fn read_text_field(&self, record: &Self::Record) -> Option<String> {
        match record.get(&self.field)? {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            // Any other value is read in its string form
            other => Some(other.to_string()),
        }
    }

    fn write_report_fields(&self, record: &mut Self::Record, fields: &ScoreFields) {
        for (name, value) in fields.entries() {
            let value = match value {
                FieldValue::Float(v) => v.and_then(Number::from_f64).map(Value::Number),
                FieldValue::Int(v) => v.map(|v| Value::Number(v.into())),
            };
            record.insert(name.to_string(), value.unwrap_or(Value::Null));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{process_record, OUTPUT_FIELDS};
    use crate::api::GenderAnalyzer;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_empty_field_rejected() {
        let err = JsonRecordAdapter::new("").unwrap_err();
        assert!(err.to_string().contains("please select a field to analyze"));
    }

    #[test]
    fn test_read_text_field_variants() {
        let adapter = JsonRecordAdapter::new("body").unwrap();
        assert_eq!(
            adapter.read_text_field(&record(json!({"body": "He ran."}))),
            Some("He ran.".to_string())
        );
        assert_eq!(adapter.read_text_field(&record(json!({"body": null}))), None);
        assert_eq!(adapter.read_text_field(&record(json!({"other": "x"}))), None);
        assert_eq!(
            adapter.read_text_field(&record(json!({"body": 42}))),
            Some("42".to_string())
        );
    }

    #[test]
    fn test_process_appends_fields_and_keeps_others() {
        let adapter = JsonRecordAdapter::new("body").unwrap();
        let mut rec = record(json!({"id": 1, "body": "My brother and sister went home."}));
        process_record(&adapter, &GenderAnalyzer::new(), &mut rec);

        assert_eq!(rec["id"], json!(1));
        assert_eq!(rec["both_score"], json!(1.0));
        assert_eq!(rec["both_sentences"], json!(1));
        assert_eq!(rec["male_score"], json!(0.0));
        assert_eq!(rec.len(), 2 + OUTPUT_FIELDS.len());
    }

    #[test]
    fn test_process_null_record() {
        let adapter = JsonRecordAdapter::new("body").unwrap();
        let mut rec = record(json!({"body": null}));
        process_record(&adapter, &GenderAnalyzer::new(), &mut rec);
        assert!(OUTPUT_FIELDS.iter().all(|name| rec[*name].is_null()));
    }
}
