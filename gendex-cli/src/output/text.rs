//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use gendex_core::Report;
use std::io::Write;

/// Plain text formatter - one line per category
pub struct TextFormatter<W: Write> {
    writer: W,
    precision: usize,
    headers: bool,
}

impl<W: Write> TextFormatter<W> {
    pub fn new(writer: W, precision: usize) -> Self {
        Self {
            writer,
            precision,
            headers: false,
        }
    }

    /// Print a `==> source <==` line before each report
    pub fn with_headers(mut self, headers: bool) -> Self {
        self.headers = headers;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, source: &str, report: &Report) -> Result<()> {
        if self.headers {
            writeln!(self.writer, "==> {source} <==")?;
        }
        for (category, stats) in report.iter() {
            writeln!(
                self.writer,
                "{:.prec$}% {} ({} sentences)",
                stats.word_fraction * 100.0,
                category,
                stats.sentence_count,
                prec = self.precision
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
