//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use gendex_core::{Category, CategoryStats, Report};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;

/// JSON formatter - outputs all reports as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    entries: Vec<FileReport>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct FileReport {
    /// Source the report was computed from
    pub file: String,
    pub total_sentences: usize,
    pub total_words: usize,
    /// Per-category stats keyed by lowercase category name
    pub categories: BTreeMap<Category, CategoryStats>,
}

impl FileReport {
    pub fn new(file: impl Into<String>, report: &Report) -> Self {
        Self {
            file: file.into(),
            total_sentences: report.total_sentences(),
            total_words: report.total_words(),
            categories: report.iter().map(|(c, stats)| (c, *stats)).collect(),
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            entries: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, source: &str, report: &Report) -> Result<()> {
        self.entries.push(FileReport::new(source, report));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.entries)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_json_shape() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, false);
            formatter
                .format_report("a.txt", &gendex_core::analyze("The cat sat."))
                .unwrap();
            formatter
                .format_report("b.txt", &gendex_core::analyze(""))
                .unwrap();
            formatter.finish().unwrap();
        }

        let value: Value = serde_json::from_slice(&buffer).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["file"], "a.txt");
        assert_eq!(entries[0]["total_sentences"], 1);
        assert_eq!(entries[0]["categories"]["unknown"]["word_fraction"], 1.0);
        assert_eq!(entries[1]["total_words"], 0);
        assert_eq!(entries[1]["categories"]["male"]["word_fraction"], 0.0);
    }

    #[test]
    fn test_empty_array() {
        let mut buffer = Vec::new();
        JsonFormatter::new(&mut buffer, true).finish().unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().trim(), "[]");
    }
}
