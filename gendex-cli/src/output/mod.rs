//! Output formatting module

use anyhow::{Context, Result};
use gendex_core::Report;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Trait for report formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the report for one source
    fn format_report(&mut self, source: &str, report: &Report) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Open the output destination (default: stdout)
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
