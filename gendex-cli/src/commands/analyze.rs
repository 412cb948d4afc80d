//! Analyze command implementation

use anyhow::Result;
use clap::{Args, ValueEnum};
use gendex_core::{Input, Report};
use rayon::prelude::*;
use std::io::Write;
use std::path::PathBuf;

use super::{build_analyzer, build_pool, init_logging};
use crate::config::{CliConfig, OutputConfig};
use crate::input::resolve_patterns;
use crate::output::{
    open_output, JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter,
};
use crate::progress::ProgressReporter;
use crate::CliError;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: text, or the config file's choice)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Built-in segmentation rules code
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// Segmentation rules file (TOML) replacing the built-in rules
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

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

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per category with share and sentence count
    Text,
    /// JSON array with one object per file
    Json,
    /// Markdown table per file
    Markdown,
}

impl OutputFormat {
    /// Parse a format name from a config file
    pub fn parse(name: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(name, true)
            .map_err(|_| CliError::ConfigError(format!("Unknown output format: {name}")).into())
    }
}

impl AnalyzeArgs {
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let config = CliConfig::load(self.config.as_deref())?;
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::parse(&config.output.format)?,
        };
        let language = self
            .language
            .as_deref()
            .unwrap_or(&config.processing.language);

        let files = resolve_patterns(&self.input)?;
        log::info!("Analyzing {} files", files.len());

        let analyzer = build_analyzer(language, self.language_config.as_deref())?;
        let pool = build_pool(self.threads.unwrap_or_else(|| config.worker_threads()))?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let reports: Vec<Report> = pool.install(|| {
            files
                .par_iter()
                .map(|path| -> Result<Report> {
                    let report = analyzer
                        .analyze_input(Input::from_file(path))
                        .map_err(CliError::from)?;
                    progress.file_completed(&path.display().to_string());
                    Ok(report)
                })
                .collect::<Result<Vec<_>>>()
        })?;
        progress.finish();

        let writer = open_output(self.output.as_deref())?;
        let mut formatter = create_formatter(format, writer, &config.output, files.len() > 1);
        for (path, report) in files.iter().zip(&reports) {
            formatter.format_report(&path.display().to_string(), report)?;
        }
        formatter.finish()?;

        log::info!("Wrote {} reports", reports.len());
        Ok(())
    }
}

/// Create the formatter for a format and destination
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    output: &OutputConfig,
    multiple: bool,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => {
            Box::new(TextFormatter::new(writer, output.precision).with_headers(multiple))
        }
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, output.pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, output.precision)),
    }
}
