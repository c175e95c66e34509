//! Highlight pipeline: tokenize, match, reduce, window.
//!
//! Every stage is a pure function of its inputs. The pipeline stops with
//! `None` as soon as a stage cannot be satisfied: an empty query, a query word
//! missing from the text, or (defensively) nothing left after merging.

use crate::config::HighlightConfig;
use crate::interface::SnippetMatch;
use crate::matcher::find_all_tokens;
use crate::reducer::reduce;
use crate::render::{present, MarkupRenderer, Renderer, SnippetRenderer};
use crate::span::Span;
use crate::text::SearchText;
use crate::tokenizer::tokenize;
use crate::window::compute_window;

/// Sorted, merged matches and the window around the first of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub spans: Vec<Span>,
    pub window: Span,
    /// Length of the source text in user-perceived characters
    pub text_len: usize,
}

impl Highlight {
    /// The match the window was built around.
    pub fn anchor(&self) -> Option<Span> {
        self.spans.first().copied()
    }

    pub fn truncated_start(&self) -> bool {
        self.window.start != 0
    }

    pub fn truncated_end(&self) -> bool {
        self.window.end != self.text_len
    }

    pub fn render<R: Renderer>(&self, renderer: R) -> R::Output {
        present(renderer, &self.spans, self.window, self.text_len)
    }
}

/// Immutable highlighter holding its configuration.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    config: HighlightConfig,
}

impl Highlighter {
    pub fn new(config: HighlightConfig) -> Self {
        Self { config }
    }

    /// Highlight the whitespace-separated words of `query` in `text`.
    pub fn highlight(&self, query: &str, text: &str) -> Option<Highlight> {
        self.highlight_tokens(&tokenize(query), text)
    }

    /// Highlight pre-tokenized input.
    pub fn highlight_tokens<S: AsRef<str>>(&self, tokens: &[S], text: &str) -> Option<Highlight> {
        self.highlight_in(tokens, &SearchText::new(text))
    }

    /// Highlight against an already segmented text, reusing its folded cache.
    pub fn highlight_in<S: AsRef<str>>(&self, tokens: &[S], text: &SearchText<'_>) -> Option<Highlight> {
        if tokens.is_empty() {
            tracing::debug!("empty query, nothing to highlight");
            return None;
        }

        #[cfg(feature = "perf-log")]
        let t0 = std::time::Instant::now();
        let matches = find_all_tokens(tokens, text);
        if matches.is_empty() {
            tracing::debug!(tokens = tokens.len(), "not every query word occurs in text");
            return None;
        }

        #[cfg(feature = "perf-log")]
        let t1 = std::time::Instant::now();
        let spans = reduce(&matches, self.config.merge);
        let anchor = match spans.first() {
            Some(first) => *first,
            None => {
                tracing::debug!("no spans left after merging");
                return None;
            }
        };

        let window = compute_window(text.len(), anchor, self.config.max_count);

        #[cfg(feature = "perf-log")]
        {
            let t2 = std::time::Instant::now();
            tracing::debug!(
                match_ms = (t1 - t0).as_secs_f64() * 1000.0,
                reduce_window_ms = (t2 - t1).as_secs_f64() * 1000.0,
                text_len = text.len(),
                "highlight timings"
            );
        }

        tracing::trace!(
            matches = matches.len(),
            spans = spans.len(),
            window_start = window.start,
            window_end = window.end,
            "highlighted"
        );

        Some(Highlight {
            spans,
            window,
            text_len: text.len(),
        })
    }

    /// Highlight and render as markup, e.g. `... 2 **snip** **sn**...`.
    pub fn markup(&self, query: &str, text: &str) -> Option<String> {
        let text = SearchText::new(text);
        let highlight = self.highlight_in(&tokenize(query), &text)?;
        Some(highlight.render(MarkupRenderer::new(&text, &self.config)))
    }

    /// Highlight and render as a `SnippetMatch` record.
    pub fn snippet(&self, query: &str, text: &str) -> Option<SnippetMatch> {
        let text = SearchText::new(text);
        let highlight = self.highlight_in(&tokenize(query), &text)?;
        Some(highlight.render(SnippetRenderer::new(&text, &highlight.spans, &self.config)))
    }
}

/// One-shot entry point with the default configuration and `max_count`.
pub fn highlight(query: &str, text: &str, max_count: usize) -> Option<Highlight> {
    Highlighter::new(HighlightConfig::default().with_max_count(max_count)).highlight(query, text)
}
