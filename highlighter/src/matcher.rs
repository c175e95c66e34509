//! Literal, case-insensitive span matching.

use crate::span::Span;
use crate::text::{fold_graphemes, SearchText};

/// Find every non-overlapping occurrence of `token` in `text`, leftmost first.
///
/// After each hit the search resumes at the hit's end, so occurrences that
/// overlap an earlier one are skipped ("aa" occurs twice in "aaaa", not three
/// times). An empty token matches nothing.
pub fn find_all(token: &str, text: &SearchText<'_>) -> Vec<Span> {
    let needle = fold_graphemes(token);
    if needle.is_empty() {
        return Vec::new();
    }

    let haystack = text.folded();
    let end = haystack.len();
    let mut spans = Vec::new();
    let mut left = 0;

    while left < end {
        match find_from(haystack, &needle, left) {
            Some(hit) => {
                let span = Span::new(hit, hit + needle.len());
                spans.push(span);
                left = span.end;
            }
            None => break,
        }
    }
    spans
}

/// Match every token, concatenating spans in token order.
///
/// Conjunctive: if any token has no occurrence the whole result is empty,
/// as is the result for an empty token list.
pub fn find_all_tokens<S: AsRef<str>>(tokens: &[S], text: &SearchText<'_>) -> Vec<Span> {
    let mut spans = Vec::new();
    for token in tokens {
        let found = find_all(token.as_ref(), text);
        if found.is_empty() {
            tracing::trace!(token = token.as_ref(), "token absent from text");
            return Vec::new();
        }
        spans.extend(found);
    }
    spans
}

fn find_from(haystack: &[String], needle: &[String], from: usize) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    let last_start = haystack.len() - needle.len();
    (from..=last_start).find(|&i| haystack[i..i + needle.len()] == *needle)
}
