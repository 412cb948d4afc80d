//! Regex-driven boundary suppression
//!
//! A terminator is suppressed when any configured pattern matches a span
//! that covers it, e.g. list markers like `1.` at the start of a line.
//! Every pattern runs over the text once; candidates are then looked up in
//! the collected spans.

use regex::Regex;

use crate::language::interface::SuppressedSpans;

/// Compiled suppression patterns
#[derive(Debug, Clone, Default)]
pub struct Suppresser {
    patterns: Vec<Regex>,
}

impl Suppresser {
    /// Compile patterns; the first invalid pattern aborts construction
    pub fn new<'a>(patterns: impl IntoIterator<Item = &'a str>) -> Result<Self, String> {
        let patterns = patterns
            .into_iter()
            .map(|p| Regex::new(p).map_err(|e| format!("Invalid suppression pattern {p:?}: {e}")))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// All suppressed byte spans of `text`
    pub fn spans(&self, text: &str) -> SuppressedSpans {
        if self.patterns.is_empty() {
            return SuppressedSpans::default();
        }

        SuppressedSpans::new(
            self.patterns
                .iter()
                .flat_map(|re| re.find_iter(text).map(|m| m.range()))
                .collect(),
        )
    }
}
