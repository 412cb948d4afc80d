//! gendex CLI library
//!
//! Command-line front end for the gendex classifier: file and record
//! input, report formatting, progress and configuration.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
