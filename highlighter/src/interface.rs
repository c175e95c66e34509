//! Highlighter FFI Interface Definition
//!
//! This file defines the public interface exposed to foreign UI layers via UniFFI.
//! It acts as the source of truth for shared types.

use serde::Serialize;
use thiserror::Error;

use crate::config::HighlightConfig;
use crate::pipeline::Highlighter;

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDS (Structs)
// ═══════════════════════════════════════════════════════════════════════════════

/// A highlight range in user-perceived characters, with the matching UTF-16
/// offsets for consumers that slice NSString/JS strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, uniffi::Record)]
pub struct HighlightRange {
    pub start: u64,
    pub end: u64,
    pub utf16_start: u64,
    pub utf16_end: u64,
}

/// Rendered snippet for a single text.
///
/// # Display Contract
///
/// - `text` is the window of the source text, with the configured ellipsis
///   prepended when the window does not start at the beginning and appended
///   when it does not reach the end.
/// - `highlights` index into `text` (leading ellipsis included) and only cover
///   the visible part of each match.
/// - `full_text_highlights` index the source text and cover every merged match,
///   for preview panes that show the whole content.
///
/// ```text
/// Source:     "Plz 2 snip snip me"   query "snip"   max_count 10
/// Window:     [3, 13)  ->  text "... 2 snip sn..."
/// highlights: [6, 10) ("snip"), [11, 13) ("sn")
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, uniffi::Record)]
pub struct SnippetMatch {
    pub text: String,
    pub highlights: Vec<HighlightRange>,
    pub full_text_highlights: Vec<HighlightRange>,
    /// Window bounds in the source text
    pub window: HighlightRange,
    pub truncated_start: bool,
    pub truncated_end: bool,
}

/// Error type for highlighter operations
#[derive(Debug, Error, uniffi::Error)]
pub enum HighlightError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for HighlightError {
    fn from(e: serde_json::Error) -> Self {
        HighlightError::InvalidConfig(e.to_string())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// EXPORTED FUNCTIONS
// ═══════════════════════════════════════════════════════════════════════════════

/// Highlight `query` in `text` with the default markers. Returns `None` when
/// any query word is missing from the text. Negative budgets clamp to 0.
#[uniffi::export]
pub fn highlight_snippet(query: String, text: String, max_count: i64) -> Option<SnippetMatch> {
    let config = HighlightConfig::default().with_max_count(max_count.max(0) as usize);
    Highlighter::new(config).snippet(&query, &text)
}

/// Like `highlight_snippet`, with a JSON-encoded `HighlightConfig`.
#[uniffi::export]
pub fn highlight_snippet_with_config(
    query: String,
    text: String,
    config_json: String,
) -> Result<Option<SnippetMatch>, HighlightError> {
    let config = HighlightConfig::from_json_str(&config_json)?;
    Ok(Highlighter::new(config).snippet(&query, &text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_snippet_negative_budget_clamps() {
        let m = highlight_snippet("snip".into(), "Plz 2 snip snip me".into(), -5).unwrap();
        assert_eq!(m.text, "...snip...");
        assert_eq!((m.window.start, m.window.end), (6, 10));
    }

    #[test]
    fn test_highlight_snippet_no_match() {
        assert!(highlight_snippet("plz xyz".into(), "Plz 2 snip snip me".into(), 10).is_none());
    }

    #[test]
    fn test_highlight_snippet_with_bad_config() {
        let err = highlight_snippet_with_config("snip".into(), "snip".into(), "{".into()).unwrap_err();
        assert!(err.to_string().starts_with("Invalid config"));
    }
}
