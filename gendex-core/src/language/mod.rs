//! Language-specific rules for sentence segmentation
//!
//! Rules are data driven: a TOML document describes terminators,
//! abbreviations, enclosures and suppression patterns, and
//! [`ConfigurableLanguageRules`] turns it into lookup tables.

pub mod interface;

pub(crate) mod config;
pub(crate) mod loader;
pub(crate) mod runtime;
pub(crate) mod tables;

pub use config::LanguageConfig;
pub use interface::*;
pub use loader::{default_rules, get_rules, SUPPORTED_CODES};
pub use runtime::ConfigurableLanguageRules;
