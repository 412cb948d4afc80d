//! Runtime tables for language rules
//!
//! All tables are built once from a [`LanguageConfig`](crate::language::LanguageConfig)
//! and are allocation-free during lookup.

pub mod abbreviation;
pub mod ellipsis;
pub mod enclosure;
pub mod sentence_starters;
pub mod suppression;
pub mod terminator;

pub use abbreviation::Trie;
pub use ellipsis::EllipsisSet;
pub use enclosure::EncTable;
pub use sentence_starters::SentenceStarterTable;
pub use suppression::Suppresser;
pub use terminator::TermTable;
