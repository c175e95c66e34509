//! Highlighter - match-highlighted snippets for search results
//!
//! Finds every query word in a text (literal, case-insensitive, grapheme-aware),
//! unions overlapping matches, and cuts a bounded window around the first match.
//! Rendering is left to a `Renderer`; markup and FFI record renderers ship here.
//!
//! Types are exported via UniFFI proc-macros (#[derive(uniffi::Record)]).

pub mod config;
pub mod interface;
pub mod matcher;
pub mod pipeline;
pub mod reducer;
pub mod render;
pub mod span;
pub mod text;
pub mod tokenizer;
pub mod window;

pub use config::HighlightConfig;
pub use interface::*;
pub use pipeline::{highlight, Highlight, Highlighter};
pub use reducer::MergeStrategy;
pub use render::{present, MarkupRenderer, Renderer, SnippetRenderer};
pub use span::Span;
pub use text::SearchText;

uniffi::setup_scaffolding!("highlighter");
