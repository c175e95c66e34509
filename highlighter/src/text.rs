//! Grapheme-indexed text with memoized case-folded view.
//!
//! Module isolation ensures no code outside this module can mutate `content`
//! after construction, so the `OnceLock` cache can never go stale.

use std::sync::OnceLock;

use unicode_segmentation::UnicodeSegmentation;

use crate::span::Span;

/// Source text addressed by user-perceived character (extended grapheme
/// cluster) positions. `folded()` is computed on first access and cached,
/// so matching several tokens against the same text lowercases it once.
#[derive(Debug, Clone)]
pub struct SearchText<'a> {
    content: &'a str,
    /// Byte offset of every grapheme start, plus `content.len()` as sentinel.
    boundaries: Vec<usize>,
    /// UTF-16 code units before every grapheme, same shape as `boundaries`.
    utf16_boundaries: Vec<usize>,
    folded: OnceLock<Vec<String>>,
}

impl<'a> SearchText<'a> {
    pub fn new(content: &'a str) -> Self {
        let mut boundaries = Vec::new();
        let mut utf16_boundaries = Vec::new();
        let mut units = 0;
        for (i, grapheme) in content.grapheme_indices(true) {
            boundaries.push(i);
            utf16_boundaries.push(units);
            units += grapheme.encode_utf16().count();
        }
        boundaries.push(content.len());
        utf16_boundaries.push(units);
        Self {
            content,
            boundaries,
            utf16_boundaries,
            folded: OnceLock::new(),
        }
    }

    /// Number of graphemes.
    pub fn len(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Span covering the whole text.
    pub fn full_span(&self) -> Span {
        Span::new(0, self.len())
    }

    /// Lowercased graphemes, one entry per position.
    pub fn folded(&self) -> &[String] {
        self.folded.get_or_init(|| fold_graphemes(self.content))
    }

    /// Byte range of `span`, with both bounds clamped to the text.
    pub fn byte_range(&self, span: Span) -> std::ops::Range<usize> {
        let last = self.len();
        self.boundaries[span.start.min(last)]..self.boundaries[span.end.min(last)]
    }

    /// UTF-16 code units before grapheme `position` (clamped to the text),
    /// for NSRange-style consumers.
    pub fn utf16_offset(&self, position: usize) -> usize {
        self.utf16_boundaries[position.min(self.len())]
    }

    /// Borrow the text covered by `span`.
    pub fn slice(&self, span: Span) -> &'a str {
        let content = self.content;
        &content[self.byte_range(span)]
    }

    /// Iterate `(position, grapheme)` pairs inside `span`.
    pub fn graphemes_in(&self, span: Span) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        let content = self.content;
        let boundaries = &self.boundaries;
        let end = span.end.min(self.len());
        (span.start.min(end)..end).map(move |i| (i, &content[boundaries[i]..boundaries[i + 1]]))
    }
}

/// Segment `s` into graphemes and lowercase each one independently. Applying
/// the same procedure to tokens and text keeps their positions comparable.
pub(crate) fn fold_graphemes(s: &str) -> Vec<String> {
    s.graphemes(true).map(|g| g.to_lowercase()).collect()
}
