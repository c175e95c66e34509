//! Highlighter configuration.
//!
//! Every field has a default, so partial JSON such as `{"max_count": 40}` is
//! accepted. Callers that build a config by hand should run `validate()`.

use serde::{Deserialize, Serialize};

use crate::interface::HighlightError;
use crate::reducer::MergeStrategy;

/// Character budget used when none is configured.
pub const DEFAULT_MAX_COUNT: usize = 100;

/// Marker inserted where the snippet cuts the source text.
pub const DEFAULT_ELLIPSIS: &str = "...";

/// Markup wrapped around highlighted runs by `MarkupRenderer`.
pub const DEFAULT_MARK: &str = "**";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Maximum snippet length in user-perceived characters. `0` disables
    /// expansion around the first match.
    pub max_count: usize,
    pub merge: MergeStrategy,
    pub ellipsis: String,
    pub mark_open: String,
    pub mark_close: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            max_count: DEFAULT_MAX_COUNT,
            merge: MergeStrategy::default(),
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
            mark_open: DEFAULT_MARK.to_string(),
            mark_close: DEFAULT_MARK.to_string(),
        }
    }
}

impl HighlightConfig {
    /// Parse from JSON and validate.
    pub fn from_json_str(json: &str) -> Result<Self, HighlightError> {
        let config: HighlightConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), HighlightError> {
        if self.ellipsis.is_empty() {
            return Err(HighlightError::InvalidConfig("ellipsis must not be empty".into()));
        }
        if self.mark_open.is_empty() != self.mark_close.is_empty() {
            return Err(HighlightError::InvalidConfig(
                "mark_open and mark_close must both be set or both be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    pub fn with_merge(mut self, merge: MergeStrategy) -> Self {
        self.merge = merge;
        self
    }

    pub fn with_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    pub fn with_marks(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.mark_open = open.into();
        self.mark_close = close.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HighlightConfig::default();
        assert_eq!(config.max_count, DEFAULT_MAX_COUNT);
        assert_eq!(config.merge, MergeStrategy::Sweep);
        assert_eq!(config.ellipsis, "...");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = HighlightConfig::from_json_str(r#"{"max_count": 10, "merge": "single_pass"}"#).unwrap();
        assert_eq!(config.max_count, 10);
        assert_eq!(config.merge, MergeStrategy::SinglePass);
        assert_eq!(config.mark_open, DEFAULT_MARK);
    }

    #[test]
    fn test_malformed_json_is_invalid_config() {
        let err = HighlightConfig::from_json_str(r#"{"max_count": -3}"#).unwrap_err();
        assert!(matches!(err, HighlightError::InvalidConfig(_)));
        let err = HighlightConfig::from_json_str(r#"{"merge": "fixpoint"}"#).unwrap_err();
        assert!(matches!(err, HighlightError::InvalidConfig(_)));
    }

    #[test]
    fn test_validation_rules() {
        let empty_ellipsis = HighlightConfig::default().with_ellipsis("");
        assert!(empty_ellipsis.validate().is_err());

        let half_marks = HighlightConfig::default().with_marks("<b>", "");
        assert!(half_marks.validate().is_err());

        let no_marks = HighlightConfig::default().with_marks("", "");
        assert!(no_marks.validate().is_ok());
    }
}
