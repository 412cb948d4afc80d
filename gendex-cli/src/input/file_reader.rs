//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Path that selects standard input
pub const STDIN_PATH: &str = "-";

/// Line-oriented reader over files or stdin
pub struct FileReader;

impl FileReader {
    /// Open a file, or stdin for `-`, as buffered lines
    pub fn open_lines(path: &Path) -> Result<Box<dyn BufRead>> {
        if path == Path::new(STDIN_PATH) {
            return Ok(Box::new(BufReader::new(io::stdin())));
        }

        let file = fs::File::open(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;
        Ok(Box::new(BufReader::new(file)))
    }
}
