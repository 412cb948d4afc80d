//! Configuration structures and validation
//!
//! This module defines the TOML schema for segmentation rules.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    pub terminators: Terminators,
    #[serde(default)]
    pub ellipsis: Ellipsis,
    #[serde(default)]
    pub enclosures: Enclosures,
    #[serde(default)]
    pub suppression: Suppression,
    #[serde(default)]
    pub abbreviations: Abbreviations,
    #[serde(default)]
    pub initials: Initials,
    #[serde(default)]
    pub sentence_starters: SentenceStarters,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Terminator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terminators {
    pub chars: Vec<char>,
}

/// Ellipsis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ellipsis {
    #[serde(default = "default_true")]
    pub treat_as_boundary: bool,
    /// Only split after an ellipsis when the next word is capitalized
    #[serde(default = "default_true")]
    pub require_capital: bool,
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl Default for Ellipsis {
    fn default() -> Self {
        Self {
            treat_as_boundary: true,
            require_capital: true,
            patterns: vec!["...".to_string(), "…".to_string()],
        }
    }
}

/// Enclosure configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Enclosures {
    #[serde(default)]
    pub pairs: Vec<EnclosurePair>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnclosurePair {
    pub open: char,
    pub close: char,
    #[serde(default)]
    pub symmetric: bool,
}

/// Suppression configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Suppression {
    #[serde(default)]
    pub regex_patterns: Vec<RegexPattern>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegexPattern {
    pub pattern: String,
    pub description: String,
}

/// Abbreviation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Abbreviations {
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

/// Single-letter initials ("J. R. R. Tolkien")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Initials {
    #[serde(default)]
    pub enabled: bool,
}

/// Sentence starters configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentenceStarters {
    /// Categories of sentence starters
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

fn default_true() -> bool {
    true
}

impl LanguageConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("Language code must not be empty".to_string());
        }

        if self.terminators.chars.is_empty() {
            return Err("No terminator characters defined".to_string());
        }

        if self.enclosures.pairs.len() > 255 {
            return Err("Too many enclosure pairs (max 255)".to_string());
        }

        if let Some(ch) = self
            .terminators
            .chars
            .iter()
            .find(|ch| ch.is_alphanumeric() || ch.is_whitespace())
        {
            return Err(format!("Invalid terminator character: {ch:?}"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[metadata]
code = "test"
name = "Test"

[terminators]
chars = [".", "!"]
"#;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: LanguageConfig = toml::from_str(MINIMAL).unwrap();
        assert!(config.validate().is_ok());
        assert!(config.ellipsis.treat_as_boundary);
        assert!(config.abbreviations.categories.is_empty());
        assert!(!config.initials.enabled);
    }

    #[test]
    fn test_abbreviation_categories_flatten() {
        let toml_str = format!("{MINIMAL}\n[abbreviations]\ntitles = [\"Mr\", \"Dr\"]\n");
        let config: LanguageConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.abbreviations.categories["titles"].len(), 2);
    }

    #[test]
    fn test_validation_failures() {
        let mut config: LanguageConfig = toml::from_str(MINIMAL).unwrap();
        config.terminators.chars.clear();
        assert!(config.validate().is_err());

        let mut config: LanguageConfig = toml::from_str(MINIMAL).unwrap();
        config.metadata.code = " ".to_string();
        assert!(config.validate().is_err());

        let mut config: LanguageConfig = toml::from_str(MINIMAL).unwrap();
        config.terminators.chars.push('a');
        assert!(config.validate().is_err());
    }
}
