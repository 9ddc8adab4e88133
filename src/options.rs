//! Parser options

use crate::error::{ParseError, Result};
use serde::{Deserialize, Serialize};

/// Tuning knobs for signature block scoring.
///
/// The defaults are the empirically tuned values and should rarely need to
/// change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Percentage of signature-like lines that must be exceeded
    pub match_threshold: usize,

    /// A trailing run with fewer non-empty lines than this is an attached
    /// disclaimer and does not count against the block
    pub disclaimer_max_lines: usize,

    /// Upper bound on lines scanned ahead of a signature candidate
    pub max_scan_lines: Option<usize>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            match_threshold: 70,
            disclaimer_max_lines: 6,
            max_scan_lines: None,
        }
    }
}

impl ParserOptions {
    /// Read options from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reject values the scorer cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.match_threshold > 100 {
            return Err(ParseError::InvalidOptions(format!(
                "match_threshold must be at most 100, got {}",
                self.match_threshold
            )));
        }
        if self.disclaimer_max_lines == 0 {
            return Err(ParseError::InvalidOptions(
                "disclaimer_max_lines must be at least 1".into(),
            ));
        }
        if self.max_scan_lines == Some(0) {
            return Err(ParseError::InvalidOptions(
                "max_scan_lines must be at least 1 when set".into(),
            ));
        }
        Ok(())
    }
}
