//! Input abstraction for the analyzer

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Text source for a single analysis
pub enum Input {
    /// Direct text input
    Text(String),
    /// File path input
    File(PathBuf),
    /// Raw bytes input
    Bytes(Vec<u8>),
    /// Reader input (boxed for object safety)
    Reader(Box<dyn Read + Send + Sync>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl Input {
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the whole source into memory.
    ///
    /// Only I/O can fail here; decoding is left to the tokenizer, which
    /// treats invalid UTF-8 as empty text.
    pub(crate) fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            Input::Text(text) => Ok(text.into_bytes()),
            Input::Bytes(bytes) => Ok(bytes),
            Input::File(path) => std::fs::read(&path).map_err(|e| {
                Error::Infrastructure(format!("Failed to read file {}: {}", path.display(), e))
            }),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(|e| {
                    Error::Infrastructure(format!("Failed to read from reader: {}", e))
                })?;
                Ok(buffer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_text_and_bytes() {
        assert_eq!(Input::from_text("abc").into_bytes().unwrap(), b"abc");
        assert_eq!(
            Input::from_bytes(vec![0xff]).into_bytes().unwrap(),
            vec![0xff]
        );
    }

    #[test]
    fn test_reader() {
        let input = Input::from_reader(Cursor::new(b"He ran.".to_vec()));
        assert_eq!(input.into_bytes().unwrap(), b"He ran.");
    }

    #[test]
    fn test_missing_file() {
        let result = Input::from_file("/definitely/not/here.txt").into_bytes();
        assert!(matches!(result, Err(Error::Infrastructure(_))));
    }

    #[test]
    fn test_debug_hides_content() {
        let debug = format!("{:?}", Input::from_text("secret text"));
        assert!(debug.contains("length"));
        assert!(!debug.contains("secret"));
    }
}
