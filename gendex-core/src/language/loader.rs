//! Language configuration loader
//!
//! Embedded rule sets are parsed once on first access and shared.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::{Error, Result};
use crate::language::{
    interface::{BoundaryDecision, EnclosureInfo, LanguageRules},
    runtime::ConfigurableLanguageRules,
};

/// Embedded language configurations
static EMBEDDED: OnceLock<HashMap<&'static str, Arc<dyn LanguageRules>>> = OnceLock::new();

const ENGLISH_TOML: &str = include_str!("../../configs/languages/english.toml");

/// Codes accepted by [`get_rules`]
pub const SUPPORTED_CODES: &[&str] = &["en", "english"];

/// Load language rules by code
pub fn get_rules(code: &str) -> Result<Arc<dyn LanguageRules>> {
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map: HashMap<&'static str, Arc<dyn LanguageRules>> = HashMap::new();

        match ConfigurableLanguageRules::from_toml_str(ENGLISH_TOML) {
            Ok(rules) => {
                let rules: Arc<dyn LanguageRules> = Arc::new(rules);
                map.insert("en", rules.clone());
                map.insert("english", rules);
            }
            Err(e) => {
                log::error!("Failed to load embedded English rules: {e}");
            }
        }

        map
    });

    embedded
        .get(code.to_lowercase().as_str())
        .cloned()
        .ok_or_else(|| Error::InvalidLanguage(format!("Unknown language code: {code}")))
}

/// Embedded English rules, or bare punctuation rules if they failed to load
pub fn default_rules() -> Arc<dyn LanguageRules> {
    get_rules("en").unwrap_or_else(|_| Arc::new(SimpleRules))
}

/// Bare `.`/`!`/`?` splitting with no abbreviation handling
#[derive(Debug, Clone, Copy)]
struct SimpleRules;

impl LanguageRules for SimpleRules {
    fn code(&self) -> &str {
        "simple"
    }

    fn is_terminator_char(&self, ch: char) -> bool {
        matches!(ch, '.' | '!' | '?')
    }

    fn enclosure_info(&self, ch: char) -> Option<EnclosureInfo> {
        match ch {
            ')' => Some(EnclosureInfo {
                delta: -1,
                symmetric: false,
            }),
            '"' => Some(EnclosureInfo {
                delta: 0,
                symmetric: true,
            }),
            _ => None,
        }
    }

    fn boundary_decision(&self, _: &str, _: usize, _: usize) -> BoundaryDecision {
        BoundaryDecision::Accept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_english_loads() {
        let rules = get_rules("en").unwrap();
        assert_eq!(rules.code(), "en");
        assert!(rules.is_terminator_char('.'));

        let by_name = get_rules("English").unwrap();
        assert_eq!(by_name.code(), "en");
    }

    #[test]
    fn test_default_rules_are_english() {
        assert_eq!(default_rules().code(), "en");
    }

    #[test]
    fn test_simple_rules() {
        let rules = SimpleRules;
        assert!(rules.is_terminator_char('?'));
        assert!(!rules.is_terminator_char('…'));
        assert!(rules.is_closing_char(')'));
        assert!(rules.boundary_decision("Mr. X", 2, 3).is_boundary());
    }

    #[test]
    fn test_unknown_code() {
        assert!(matches!(get_rules("xx"), Err(Error::InvalidLanguage(_))));
    }
}
