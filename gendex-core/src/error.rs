//! Error types for gendex-core
//!
//! Analysis itself is total; these errors only surface at the fallible
//! edges: configuration, rule loading and input reading.

use thiserror::Error;

/// Error type for library operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unknown language rules code
    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    /// Segmentation rules file could not be parsed or failed validation
    #[error("Language config error: {0}")]
    LanguageConfig(String),

    /// Infrastructure error (I/O, etc.)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Infrastructure(err.to_string())
    }
}

/// Result type for library operations
pub type Result<T> = std::result::Result<T, Error>;
