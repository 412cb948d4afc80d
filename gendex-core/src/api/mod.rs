//! Analyzer facade: configuration, input sources and the [`GenderAnalyzer`]

mod analyzer;
mod config;
mod input;

pub use analyzer::GenderAnalyzer;
pub use config::{Config, ConfigBuilder, DEFAULT_LANGUAGE};
pub use input::Input;
