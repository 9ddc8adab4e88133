//! Reply extraction

use crate::error::Result;
use crate::line::{Line, split_lines, trim_blank};
use crate::options::ParserOptions;
use crate::quote::{HeaderMatch, quote_header_at};
use crate::signature::signature_start;
use crate::types::{Orientation, Reply, Stop, StopReason};
use tracing::debug;

/// Extract the new reply text from a plain-text body.
#[must_use]
pub fn parse(text: &str) -> String {
    ReplyParser::default().parse(text)
}

/// Extract the reply along with the layout and where assembly stopped.
#[must_use]
pub fn parse_reply(text: &str) -> Reply {
    ReplyParser::default().parse_reply(text)
}

/// Reply extractor with custom [`ParserOptions`].
#[derive(Debug, Clone, Default)]
pub struct ReplyParser {
    options: ParserOptions,
}

impl ReplyParser {
    #[must_use]
    pub const fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Like [`ReplyParser::new`] but rejects out-of-range options.
    pub fn try_new(options: ParserOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    #[must_use]
    pub const fn options(&self) -> &ParserOptions {
        &self.options
    }

    #[must_use]
    pub fn parse(&self, text: &str) -> String {
        self.parse_reply(text).text
    }

    #[must_use]
    pub fn parse_reply(&self, text: &str) -> Reply {
        let lines = split_lines(text);
        let orientation = Orientation::detect(text);

        let (kept, stop) = match orientation {
            Orientation::QuoteOnTop => assemble_quote_on_top(&lines, &self.options),
            Orientation::QuoteOnBottom => assemble_quote_on_bottom(&lines, &self.options),
        };

        debug!(
            %orientation,
            lines = lines.len(),
            kept = kept.len(),
            stop = ?stop,
            "extracted reply"
        );

        Reply {
            text: trim_blank(&kept.join("\n")),
            orientation,
            stop,
        }
    }
}

/// Keep lines until the first quote header or signature.
fn assemble_quote_on_bottom<'a>(
    lines: &'a [Line],
    options: &ParserOptions,
) -> (Vec<&'a str>, Option<Stop>) {
    let mut kept = Vec::new();

    for line in lines {
        if quote_header_at(lines, line.index) == HeaderMatch::MultiLine {
            let stop = Stop {
                line: line.index,
                reason: StopReason::QuoteHeader,
            };
            return (kept, Some(stop));
        }
        if let Some(start) = signature_start(lines, line.index, options) {
            let stop = Stop {
                line: line.index,
                reason: start.into(),
            };
            return (kept, Some(stop));
        }
        kept.push(line.raw.as_str());
    }

    (kept, None)
}

/// Skip the quote header and the quoted block, then keep lines from the
/// first unquoted text until a signature.
fn assemble_quote_on_top<'a>(
    lines: &'a [Line],
    options: &ParserOptions,
) -> (Vec<&'a str>, Option<Stop>) {
    let mut kept = Vec::new();
    let mut quoted_start_seen = false;
    let mut normal_line_seen = false;
    let mut skip_next = false;

    for line in lines {
        if !normal_line_seen {
            match quote_header_at(lines, line.index) {
                HeaderMatch::MultiLine => {
                    quoted_start_seen = true;
                    skip_next = true;
                    continue;
                }
                HeaderMatch::SingleLine => {
                    quoted_start_seen = true;
                    continue;
                }
                HeaderMatch::None => {}
            }
            // second half of a wrapped header
            if skip_next {
                skip_next = false;
                continue;
            }
            if !quoted_start_seen || line.is_quoted || line.is_empty {
                continue;
            }
            normal_line_seen = true;
        }

        if let Some(start) = signature_start(lines, line.index, options) {
            let stop = Stop {
                line: line.index,
                reason: start.into(),
            };
            return (kept, Some(stop));
        }
        kept.push(line.raw.as_str());
    }

    (kept, None)
}
