//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use gendex_core::Report;
use std::io::Write;

/// Markdown formatter - outputs one table per source
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    precision: usize,
    report_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    pub fn new(writer: W, precision: usize) -> Self {
        Self {
            writer,
            precision,
            report_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, source: &str, report: &Report) -> Result<()> {
        self.report_count += 1;
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Category | Sentences | Words | Share |")?;
        writeln!(self.writer, "|----------|----------:|------:|------:|")?;
        for (category, stats) in report.iter() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {:.prec$}% |",
                category,
                stats.sentence_count,
                stats.word_count,
                stats.word_fraction * 100.0,
                prec = self.precision
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total reports: {}*", self.report_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
