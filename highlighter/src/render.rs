//! Presentation of a highlight result.
//!
//! The pipeline only decides *what* to show: the sorted match spans and one
//! window. A `Renderer` decides *how*. `present` drives any renderer through
//! the same sequence: mark every span clipped to the window, slice to the
//! window, then add the ellipsis markers on the truncated sides.

use crate::config::HighlightConfig;
use crate::interface::{HighlightRange, SnippetMatch};
use crate::reducer::merge_sweep;
use crate::span::Span;
use crate::text::SearchText;

/// Capability interface implemented per target UI stack.
pub trait Renderer {
    type Output;

    /// Mark `span` (source positions, already clipped to the window).
    fn mark(&mut self, span: Span);
    /// Restrict output to `window` (source positions).
    fn slice(&mut self, window: Span);
    fn prepend_ellipsis(&mut self);
    fn append_ellipsis(&mut self);
    fn finish(self) -> Self::Output;
}

/// Drive `renderer` over `spans` and `window` for a text of `text_len` positions.
pub fn present<R: Renderer>(mut renderer: R, spans: &[Span], window: Span, text_len: usize) -> R::Output {
    for span in spans {
        if let Some(clipped) = span.clip(&window) {
            renderer.mark(clipped);
        }
    }
    renderer.slice(window);
    if window.start != 0 {
        renderer.prepend_ellipsis();
    }
    if window.end != text_len {
        renderer.append_ellipsis();
    }
    renderer.finish()
}

// ─────────────────────────────────────────────────────────────────────────────
// Markup
// ─────────────────────────────────────────────────────────────────────────────

/// Renders to a plain `String`, wrapping each highlighted run in
/// `mark_open`/`mark_close` (e.g. `**snip**` or `<mark>snip</mark>`).
pub struct MarkupRenderer<'t, 'a> {
    text: &'t SearchText<'a>,
    marks: Vec<Span>,
    window: Span,
    leading: bool,
    trailing: bool,
    ellipsis: &'t str,
    open: &'t str,
    close: &'t str,
}

impl<'t, 'a> MarkupRenderer<'t, 'a> {
    pub fn new(text: &'t SearchText<'a>, config: &'t HighlightConfig) -> Self {
        Self {
            text,
            marks: Vec::new(),
            window: text.full_span(),
            leading: false,
            trailing: false,
            ellipsis: &config.ellipsis,
            open: &config.mark_open,
            close: &config.mark_close,
        }
    }
}

impl Renderer for MarkupRenderer<'_, '_> {
    type Output = String;

    fn mark(&mut self, span: Span) {
        self.marks.push(span);
    }

    fn slice(&mut self, window: Span) {
        self.window = window;
    }

    fn prepend_ellipsis(&mut self) {
        self.leading = true;
    }

    fn append_ellipsis(&mut self) {
        self.trailing = true;
    }

    fn finish(self) -> String {
        // Overlapping marks (single-pass merge) render as one run
        let runs = merge_sweep(&self.marks);
        let mut runs = runs.iter().peekable();

        let mut out = String::with_capacity(self.text.slice(self.window).len() + 16);
        if self.leading {
            out.push_str(self.ellipsis);
        }
        for (pos, grapheme) in self.text.graphemes_in(self.window) {
            if runs.peek().is_some_and(|run| run.start == pos) {
                out.push_str(self.open);
            }
            out.push_str(grapheme);
            if runs.next_if(|run| run.end == pos + 1).is_some() {
                out.push_str(self.close);
            }
        }
        if self.trailing {
            out.push_str(self.ellipsis);
        }
        out
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Snippet record
// ─────────────────────────────────────────────────────────────────────────────

/// Renders to a `SnippetMatch`: plain excerpt text plus highlight ranges
/// adjusted to it, for UI layers that apply their own styling.
pub struct SnippetRenderer<'t, 'a> {
    text: &'t SearchText<'a>,
    spans: &'t [Span],
    marks: Vec<Span>,
    window: Span,
    leading: bool,
    trailing: bool,
    ellipsis: &'t str,
}

impl<'t, 'a> SnippetRenderer<'t, 'a> {
    /// `spans` are the full-text matches, reported unclipped in
    /// `full_text_highlights`.
    pub fn new(text: &'t SearchText<'a>, spans: &'t [Span], config: &'t HighlightConfig) -> Self {
        Self {
            text,
            spans,
            marks: Vec::new(),
            window: text.full_span(),
            leading: false,
            trailing: false,
            ellipsis: &config.ellipsis,
        }
    }

    fn source_range(&self, span: Span) -> HighlightRange {
        HighlightRange {
            start: span.start as u64,
            end: span.end as u64,
            utf16_start: self.text.utf16_offset(span.start) as u64,
            utf16_end: self.text.utf16_offset(span.end) as u64,
        }
    }
}

impl Renderer for SnippetRenderer<'_, '_> {
    type Output = SnippetMatch;

    fn mark(&mut self, span: Span) {
        self.marks.push(span);
    }

    fn slice(&mut self, window: Span) {
        self.window = window;
    }

    fn prepend_ellipsis(&mut self) {
        self.leading = true;
    }

    fn append_ellipsis(&mut self) {
        self.trailing = true;
    }

    fn finish(self) -> SnippetMatch {
        let body = self.text.slice(self.window);
        let (prefix_chars, prefix_utf16) = if self.leading {
            (SearchText::new(self.ellipsis).len(), self.ellipsis.encode_utf16().count())
        } else {
            (0, 0)
        };

        let mut text = String::with_capacity(body.len() + 2 * self.ellipsis.len());
        if self.leading {
            text.push_str(self.ellipsis);
        }
        text.push_str(body);
        if self.trailing {
            text.push_str(self.ellipsis);
        }

        let window_utf16 = self.text.utf16_offset(self.window.start);
        let highlights = self
            .marks
            .iter()
            .map(|mark| HighlightRange {
                start: (mark.start - self.window.start + prefix_chars) as u64,
                end: (mark.end - self.window.start + prefix_chars) as u64,
                utf16_start: (self.text.utf16_offset(mark.start) - window_utf16 + prefix_utf16) as u64,
                utf16_end: (self.text.utf16_offset(mark.end) - window_utf16 + prefix_utf16) as u64,
            })
            .collect();

        let full_text_highlights = self.spans.iter().map(|&span| self.source_range(span)).collect();

        SnippetMatch {
            text,
            highlights,
            full_text_highlights,
            window: self.source_range(self.window),
            truncated_start: self.leading,
            truncated_end: self.trailing,
        }
    }
}
