//! Analyzer configuration

use crate::error::{Error, Result};
use crate::language::get_rules;

/// Default language rules code
pub const DEFAULT_LANGUAGE: &str = "en";

/// Analyzer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) language: String,
    pub(crate) threads: Option<usize>, // None = rayon's global pool
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            threads: None,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(Error::Configuration(
                    "threads must be greater than 0".into(),
                ));
            }
        }

        get_rules(&self.language)?;
        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    language: Option<String>,
    threads: Option<usize>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the segmentation rules by language code
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Set the number of batch worker threads (None = global pool)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(code) = self.language {
            config.language = code.to_lowercase();
        }

        if self.threads.is_some() {
            config.threads = self.threads;
        }

        config.validate()?;
        Ok(config)
    }
}
