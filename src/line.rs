//! Line tokenizer

use serde::{Deserialize, Serialize};

/// One physical line of a message body.
///
/// Created once per parse and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Position in the original body (0-based)
    pub index: usize,

    /// Line as it appeared in the input, used for output
    pub raw: String,

    /// Whitespace-collapsed, emphasis-stripped and trimmed content
    pub normalized: String,

    /// Line starts with the `>` citation marker
    pub is_quoted: bool,

    /// Normalized content is blank
    pub is_empty: bool,
}

impl Line {
    #[must_use]
    pub fn new(index: usize, raw: &str) -> Self {
        let normalized = normalize(raw);
        Self {
            index,
            is_quoted: raw.starts_with('>'),
            is_empty: normalized.trim().is_empty(),
            normalized,
            raw: raw.to_string(),
        }
    }

    /// Lowercased normalized content, the form every keyword test uses.
    #[must_use]
    pub fn lower(&self) -> String {
        self.normalized.to_lowercase()
    }
}

/// Split a body on line feeds into [`Line`]s.
///
/// Every segment is kept, including a trailing empty one, so an empty input
/// yields a single empty line.
#[must_use]
pub fn split_lines(text: &str) -> Vec<Line> {
    text.split('\n')
        .enumerate()
        .map(|(index, raw)| Line::new(index, raw))
        .collect()
}

/// Collapse tabs and runs of spaces to one space, drop `*` emphasis markers
/// and trim.
///
/// Repeats until the text stops changing: removing a marker can bring two
/// spaces together again.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = current.replace('\t', " ").replace("  ", " ").replace('*', "");
        if next == current {
            break;
        }
        current = next;
    }
    current.trim().to_string()
}

/// Trim surrounding whitespace and blank lines from assembled output.
#[must_use]
pub fn trim_blank(text: &str) -> String {
    text.trim().to_string()
}
