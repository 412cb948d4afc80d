//! Public contract for sentence segmentation rules
//!
//! The segmenter walks the text once and asks the rules two questions:
//! whether a character can end a sentence, and whether a run of such
//! characters at a given position actually does. Spans where no boundary
//! may fall are computed once per text up front.

use std::ops::Range;

/// Information about an enclosure character (bracket, quote, etc.)
#[derive(Debug, Copy, Clone)]
pub struct EnclosureInfo {
    /// +1 for opening, -1 for closing, 0 for symmetric quotes
    pub delta: i8,
    /// true if identical char can mean both open/close (straight quote)
    pub symmetric: bool,
}

impl EnclosureInfo {
    /// Whether this character can close an enclosure
    #[inline]
    pub fn can_close(&self) -> bool {
        self.symmetric || self.delta < 0
    }
}

/// Decision about a potential boundary
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BoundaryDecision {
    /// The run ends a sentence
    Accept,
    /// Reject - not a boundary
    Reject,
}

impl BoundaryDecision {
    /// Whether the decision ends a sentence
    #[inline]
    pub fn is_boundary(&self) -> bool {
        matches!(self, BoundaryDecision::Accept)
    }
}

/// Sorted, non-overlapping byte ranges in which no terminator ends a
/// sentence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuppressedSpans {
    spans: Vec<Range<usize>>,
}

impl SuppressedSpans {
    /// Build from ranges in any order; overlapping or touching ranges merge
    pub fn new(mut spans: Vec<Range<usize>>) -> Self {
        spans.retain(|span| span.start < span.end);
        spans.sort_unstable_by_key(|span| span.start);

        let mut merged: Vec<Range<usize>> = Vec::with_capacity(spans.len());
        for span in spans {
            match merged.last_mut() {
                Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
                _ => merged.push(span),
            }
        }
        Self { spans: merged }
    }

    /// O(log n): is byte `pos` inside a suppressed span?
    pub fn contains(&self, pos: usize) -> bool {
        let i = self.spans.partition_point(|span| span.end <= pos);
        self.spans.get(i).is_some_and(|span| span.start <= pos)
    }
}

/// Language-specific rules for sentence boundary detection
pub trait LanguageRules: Send + Sync + 'static {
    /// Language code these rules were built for
    fn code(&self) -> &str;

    /// O(1): can this character end a sentence?
    fn is_terminator_char(&self, ch: char) -> bool;

    /// O(1): enclosure lookup; None if `ch` is not any bracket/quote
    fn enclosure_info(&self, ch: char) -> Option<EnclosureInfo>;

    /// Spans of `text` where terminators never end a sentence. Called once
    /// per text before scanning.
    fn suppressed_spans(&self, _text: &str) -> SuppressedSpans {
        SuppressedSpans::default()
    }

    /// Decide whether the terminator run `text[run_start..run_end]` ends a
    /// sentence.
    ///
    /// `run_start` and `run_end` are byte offsets; the run is guaranteed to
    /// consist of terminator characters only, to start outside every
    /// suppressed span and to be followed by whitespace, closing enclosures
    /// or end of text.
    fn boundary_decision(&self, text: &str, run_start: usize, run_end: usize) -> BoundaryDecision;

    /// Check if character closes an enclosure (closing bracket or quote)
    #[inline]
    fn is_closing_char(&self, ch: char) -> bool {
        self.enclosure_info(ch).is_some_and(|info| info.can_close())
    }
}
