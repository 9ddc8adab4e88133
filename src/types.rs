//! Core types for extracted replies

use crate::line::{normalize, split_lines};
use crate::quote::{HeaderMatch, quote_header_at};
use crate::signature::SignatureStart;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the quoted previous message sits relative to the new text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Quoted message first, reply below it
    QuoteOnTop,
    /// Reply first, quoted message below it
    QuoteOnBottom,
}

impl Orientation {
    /// A body whose first non-blank line opens a quote header is quote-on-top.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        let lines = split_lines(&normalize(text));
        if quote_header_at(&lines, 0) == HeaderMatch::MultiLine {
            Self::QuoteOnTop
        } else {
            Self::QuoteOnBottom
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuoteOnTop => write!(f, "quote-on-top"),
            Self::QuoteOnBottom => write!(f, "quote-on-bottom"),
        }
    }
}

/// Why assembly stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// `--` signature delimiter
    Delimiter,
    /// Closing salutation
    Greeting,
    /// Mobile client footer
    SentFrom,
    /// Scored signature block
    SignatureBlock,
    /// Header of a quoted message
    QuoteHeader,
}

impl From<SignatureStart> for StopReason {
    fn from(start: SignatureStart) -> Self {
        match start {
            SignatureStart::Delimiter => Self::Delimiter,
            SignatureStart::Greeting => Self::Greeting,
            SignatureStart::SentFrom => Self::SentFrom,
            SignatureStart::Block => Self::SignatureBlock,
        }
    }
}

/// The line at which assembly stopped (excluded from the reply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    /// 0-based index into the input's lines
    pub line: usize,

    pub reason: StopReason,
}

/// Result of extracting the reply from a body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// Reply text, trimmed
    pub text: String,

    /// Layout of the body
    pub orientation: Orientation,

    /// Where assembly stopped; `None` when it ran to the end
    pub stop: Option<Stop>,
}

impl Reply {
    /// Whether assembly stopped before the end of the body.
    #[must_use]
    pub const fn stopped_early(&self) -> bool {
        self.stop.is_some()
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
