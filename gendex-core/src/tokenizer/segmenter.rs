//! Sentence boundary detection
//!
//! A single forward scan over the text. Each maximal run of terminator
//! characters is a boundary candidate; closing quotes and brackets directly
//! after the run stay with the sentence they close. A candidate is only
//! considered when whitespace or end of text follows, which keeps
//! `example.com` and `3.14` intact before the rules are consulted.
//! Suppressed spans are collected once up front and probed per candidate.

use crate::language::LanguageRules;

/// Split `text` into trimmed, non-empty sentence slices in text order
pub fn split_sentences<'a>(text: &'a str, rules: &dyn LanguageRules) -> Vec<&'a str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let suppressed = rules.suppressed_spans(text);
    let mut chars = text.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if !rules.is_terminator_char(ch) {
            continue;
        }

        let run_start = pos;
        let mut run_end = pos + ch.len_utf8();
        while let Some(&(next_pos, next)) = chars.peek() {
            if !rules.is_terminator_char(next) {
                break;
            }
            run_end = next_pos + next.len_utf8();
            chars.next();
        }

        let mut end = run_end;
        while let Some(&(next_pos, next)) = chars.peek() {
            if !rules.is_closing_char(next) {
                break;
            }
            end = next_pos + next.len_utf8();
            chars.next();
        }

        let at_break = text[end..].chars().next().map_or(true, char::is_whitespace);
        if !at_break || suppressed.contains(run_start) {
            continue;
        }

        if rules
            .boundary_decision(text, run_start, run_end)
            .is_boundary()
        {
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}
