//! Records command implementation
//!
//! Reads JSON Lines, scores the selected text field of every record and
//! writes the records back out with the eight output fields appended.

use anyhow::{Context, Result};
use clap::Args;
use gendex_core::{process_record, JsonRecordAdapter};
use rayon::prelude::*;
use serde_json::{Map, Value};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::{build_analyzer, build_pool, init_logging};
use crate::config::CliConfig;
use crate::input::FileReader;
use crate::output::open_output;
use crate::progress::ProgressReporter;
use crate::CliError;

/// Arguments for the records command
#[derive(Debug, Args)]
pub struct RecordsArgs {
    /// JSON Lines input file, or `-` for stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Record field holding the text to analyze
    #[arg(long, value_name = "NAME")]
    pub field: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Built-in segmentation rules code
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// Number of worker threads (default: one per CPU)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl RecordsArgs {
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let config = CliConfig::load(self.config.as_deref())?;
        let field = self
            .field
            .clone()
            .or_else(|| config.processing.text_field.clone())
            .unwrap_or_default();
        let adapter = JsonRecordAdapter::new(field).map_err(CliError::from)?;

        let language = self
            .language
            .as_deref()
            .unwrap_or(&config.processing.language);
        let analyzer = build_analyzer(language, None)?;
        let pool = build_pool(self.threads.unwrap_or_else(|| config.worker_threads()))?;

        let mut records = read_records(FileReader::open_lines(&self.input)?)?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init(records.len() as u64, "records");

        let null_rows = pool.install(|| {
            records
                .par_iter_mut()
                .map(|record| {
                    let fields = process_record(&adapter, &analyzer, record);
                    progress.inc();
                    fields
                })
                .filter(|fields| fields.is_null())
                .count()
        });
        progress.finish();

        let mut writer = open_output(self.output.as_deref())?;
        for record in &records {
            serde_json::to_writer(&mut writer, record)?;
            writeln!(writer)?;
        }
        writer.flush()?;

        log::info!(
            "Processed {} records ({} with null {})",
            records.len(),
            null_rows,
            adapter.field()
        );
        Ok(())
    }
}

/// Parse JSON Lines into object records, skipping blank lines
pub fn read_records(reader: impl BufRead) -> Result<Vec<Map<String, Value>>> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(&line) {
            Ok(Value::Object(record)) => records.push(record),
            Ok(_) => {
                return Err(CliError::ProcessingError(format!(
                    "line {line_no}: expected a JSON object"
                ))
                .into())
            }
            Err(e) => {
                return Err(CliError::ProcessingError(format!("line {line_no}: {e}")).into())
            }
        }
    }

    log::debug!("Read {} records", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_records_skips_blank_lines() {
        let input = "{\"text\": \"He ran.\"}\n\n{\"text\": null}\n";
        let records = read_records(Cursor::new(input)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["text"], Value::Null);
    }

    #[test]
    fn test_read_records_rejects_non_objects() {
        let err = read_records(Cursor::new("{\"a\":1}\n[1,2]\n")).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_read_records_rejects_bad_json() {
        let err = read_records(Cursor::new("{oops\n")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ProcessingError(_))
        ));
    }

    #[test]
    fn test_execute_requires_field() {
        let args = RecordsArgs {
            input: PathBuf::from("-"),
            field: None,
            output: None,
            language: None,
            threads: Some(1),
            config: None,
            quiet: true,
            verbose: 0,
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("please select a field to analyze"));
    }
}
