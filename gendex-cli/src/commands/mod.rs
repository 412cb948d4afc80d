//! CLI command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::Path;
use std::sync::Arc;

use gendex_core::adapter::OUTPUT_FIELDS;
use gendex_core::language::SUPPORTED_CODES;
use gendex_core::{Category, Config, ConfigurableLanguageRules, GenderAnalyzer};

use crate::CliError;

pub mod analyze;
pub mod records;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze text files and report gendered language per category
    Analyze(analyze::AnalyzeArgs),

    /// Score a text field of JSON Lines records
    Records(records::RecordsArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a segmentation rules file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List sentence categories
    Categories,

    /// List available output formats
    Formats,

    /// List the fields written to each record
    Fields,

    /// List built-in segmentation rules codes
    Languages,
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::Records(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Text printed for the listing
    pub fn render(&self) -> String {
        match self {
            ListCommands::Categories => {
                let mut out = String::from("Sentence categories:\n");
                for category in Category::ALL {
                    out.push_str(&format!("  {category}\n"));
                }
                out
            }
            ListCommands::Formats => String::from(
                "Output formats:\n  \
                 text      - one line per category: share, name, sentence count\n  \
                 json      - JSON array with one object per file\n  \
                 markdown  - one table per file\n",
            ),
            ListCommands::Fields => {
                let mut out = String::from("Record output fields:\n");
                for name in OUTPUT_FIELDS {
                    let kind = if name.ends_with("_score") {
                        "float"
                    } else {
                        "int"
                    };
                    out.push_str(&format!("  {name} ({kind})\n"));
                }
                out
            }
            ListCommands::Languages => {
                let mut out = String::from("Built-in segmentation rules:\n");
                for code in SUPPORTED_CODES {
                    out.push_str(&format!("  {code}\n"));
                }
                out.push_str("Use --language-config FILE for custom rules\n");
                out
            }
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed (tests run commands in-process)
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

/// Build an analyzer for a rules code, or from a rules file when given
pub(crate) fn build_analyzer(
    language: &str,
    language_config: Option<&Path>,
) -> Result<GenderAnalyzer> {
    let config = Config::builder()
        .language(language)
        .build()
        .map_err(CliError::from)?;
    let analyzer = GenderAnalyzer::with_config(config).map_err(CliError::from)?;

    match language_config {
        Some(path) => {
            let rules = ConfigurableLanguageRules::from_file(path)
                .map_err(CliError::from)
                .with_context(|| format!("Failed to load language config: {}", path.display()))?;
            log::info!("Using segmentation rules from {}", path.display());
            Ok(analyzer.with_rules(Arc::new(rules)))
        }
        None => Ok(analyzer),
    }
}

/// Build the worker pool used for files and records
pub(crate) fn build_pool(threads: usize) -> Result<rayon::ThreadPool> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| CliError::ConfigError(format!("Failed to build thread pool: {e}")))?;
    log::debug!("Using {threads} worker threads");
    Ok(pool)
}
