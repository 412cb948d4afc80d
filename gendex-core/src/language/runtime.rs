//! Runtime implementation of language rules
//!
//! Bridges a parsed [`LanguageConfig`] and the [`LanguageRules`] trait the
//! segmenter calls into.

use std::path::Path;

use crate::error::{Error, Result};
use crate::language::{
    config::LanguageConfig,
    interface::{BoundaryDecision, EnclosureInfo, LanguageRules, SuppressedSpans},
    tables::*,
};

/// Configurable language rules implementation
#[derive(Debug, Clone)]
pub struct ConfigurableLanguageRules {
    code: String,
    name: String,

    term_table: TermTable,
    enclosures: EncTable,
    abbv_trie: Trie,
    ellipsis: EllipsisSet,
    suppress: Suppresser,
    sentence_starters: SentenceStarterTable,
}

impl ConfigurableLanguageRules {
    /// Create from configuration
    pub fn from_config(config: &LanguageConfig) -> Result<Self> {
        config.validate().map_err(Error::LanguageConfig)?;

        let suppress = Suppresser::new(
            config
                .suppression
                .regex_patterns
                .iter()
                .map(|p| p.pattern.as_str()),
        )
        .map_err(Error::LanguageConfig)?;

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            term_table: TermTable::new(&config.terminators.chars),
            enclosures: EncTable::new(
                config
                    .enclosures
                    .pairs
                    .iter()
                    .map(|p| (p.open, p.close, p.symmetric)),
            ),
            abbv_trie: Trie::from_categories(
                &config.abbreviations.categories,
                config.initials.enabled,
            ),
            ellipsis: EllipsisSet::new(
                config.ellipsis.patterns.clone(),
                config.ellipsis.treat_as_boundary,
                config.ellipsis.require_capital,
            ),
            suppress,
            sentence_starters: SentenceStarterTable::from_categories(
                &config.sentence_starters.categories,
            ),
        })
    }

    /// Parse and build rules from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: LanguageConfig = toml::from_str(toml_str)
            .map_err(|e| Error::LanguageConfig(format!("Failed to parse config: {e}")))?;
        Self::from_config(&config)
    }

    /// Load rules from an external TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Infrastructure(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Human-readable language name
    pub fn language_name(&self) -> &str {
        &self.name
    }
}

impl LanguageRules for ConfigurableLanguageRules {
    fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    fn is_terminator_char(&self, ch: char) -> bool {
        self.term_table.is_terminator(ch)
    }

    #[inline]
    fn enclosure_info(&self, ch: char) -> Option<EnclosureInfo> {
        self.enclosures.get(ch)
    }

    fn suppressed_spans(&self, text: &str) -> SuppressedSpans {
        self.suppress.spans(text)
    }

    fn boundary_decision(&self, text: &str, run_start: usize, run_end: usize) -> BoundaryDecision {
        let Some(run) = text.get(run_start..run_end) else {
            return BoundaryDecision::Reject;
        };
        if run.is_empty() {
            return BoundaryDecision::Reject;
        }

        if self.ellipsis.is_ellipsis(run) {
            return if self.ellipsis.ends_sentence(text, run_end) {
                BoundaryDecision::Accept
            } else {
                BoundaryDecision::Reject
            };
        }

        // Abbreviations only apply to a lone dot; "Mr.?" is still a question.
        if run == "." && self.abbv_trie.find_abbrev(text, run_start) {
            return if self.sentence_starters.check_after_abbreviation(text, run_end) {
                BoundaryDecision::Accept
            } else {
                BoundaryDecision::Reject
            };
        }

        BoundaryDecision::Accept
    }
}
