//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Load when a path was given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Worker threads, with 0 meaning one per CPU
    pub fn worker_threads(&self) -> usize {
        match self.performance.worker_threads {
            0 => num_cpus::get(),
            n => n,
        }
    }
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Segmentation rules code
    pub language: String,

    /// Record field to analyze in `records` mode
    pub text_field: Option<String>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            language: gendex_core::api::DEFAULT_LANGUAGE.to_string(),
            text_field: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Decimal places for percentages
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            pretty_json: true,
            precision: 3,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.processing.language, "en");
        assert_eq!(config.output.format, "text");
        assert_eq!(config.output.precision, 3);
        assert!(config.worker_threads() >= 1);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = CliConfig::from_toml_str(
            r#"
[processing]
text_field = "body"

[performance]
worker_threads = 2
"#,
        )
        .unwrap();

        assert_eq!(config.processing.text_field.as_deref(), Some("body"));
        assert_eq!(config.processing.language, "en");
        assert!(config.output.pretty_json);
        assert_eq!(config.worker_threads(), 2);
    }

    #[test]
    fn test_invalid_toml() {
        let err = CliConfig::from_toml_str("[output\nformat = 1").unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gendex.toml");
        std::fs::write(&path, "[output]\nformat = \"json\"\nprecision = 1\n").unwrap();

        let config = CliConfig::from_file(&path).unwrap();
        assert_eq!(config.output.format, "json");
        assert_eq!(config.output.precision, 1);
    }
}
