//! Highlighting of known history keys inside rendered text.
//!
//! Works on plain strings only so any front end can decide how a span is
//! drawn. Nothing here depends on the history ring itself.

use std::ops::Range;
use termion::{color, style};

/// Finds every occurrence of a known key in `text`.
///
/// Returned byte ranges are sorted and never overlap. Where several keys
/// match at the same offset the longest one wins. Empty keys are ignored.
pub fn highlight_spans<S: AsRef<str>>(keys: &[S], text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut offset = 0;

    while offset < text.len() {
        let rest = &text[offset..];
        let longest = keys
            .iter()
            .map(|key| -> &str { key.as_ref() })
            .filter(|key| !key.is_empty() && rest.starts_with(*key))
            .map(str::len)
            .max();

        match longest {
            Some(len) => {
                spans.push(offset..offset + len);
                offset += len;
            }
            None => {
                // Advance by one char, not one byte
                offset += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    spans
}

/// Renders `text` with the given spans emphasized for a terminal.
///
/// Spans must come from [`highlight_spans`] on the same text.
pub fn render_highlighted(text: &str, spans: &[Range<usize>]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for span in spans {
        out.push_str(&text[last..span.start]);
        out.push_str(&format!(
            "{}{}{}{}",
            style::Bold,
            color::Fg(color::Yellow),
            &text[span.clone()],
            style::Reset
        ));
        last = span.end;
    }
    out.push_str(&text[last..]);
    out
}
