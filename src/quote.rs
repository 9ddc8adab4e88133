//! Quote header detection ("On Mon, Aug 26, 2019 ... wrote:")

use crate::keywords::{ON, WROTE, contains_one_of, starts_with_one_of};
use crate::line::Line;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::trace;

static NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// How a line matched the quote header check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeaderMatch {
    /// Not a quote header
    None,
    /// Matched with the following line appended; that line is taken to be
    /// the rest of the header
    MultiLine,
    /// Matched on its own while the following line is a header of its own
    SingleLine,
}

impl HeaderMatch {
    #[must_use]
    pub const fn is_match(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Maximal digit runs in `text`.
#[must_use]
pub fn find_numbers(text: &str) -> Vec<&str> {
    NUMBER_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}

/// Whether `text` contains an address rendered as `Name <addr>`.
#[must_use]
pub fn has_quoted_address(text: &str) -> bool {
    text.contains('@') && text.contains('<') && text.contains('>')
}

/// Whether lowercased `text` reads like a quote header.
///
/// Either "on ... wrote" framing a date, or an address in angle brackets
/// next to a date. A date needs at least three numbers, one of them four
/// digits long.
#[must_use]
pub fn is_quote_header(text: &str) -> bool {
    let starts_with_on = starts_with_one_of(text, ON, true).is_some();
    let contains_wrote = contains_one_of(text, WROTE, true);
    let dated = is_dated(text);

    (starts_with_on && contains_wrote && dated) || (has_quoted_address(text) && dated)
}

fn is_dated(text: &str) -> bool {
    let numbers = find_numbers(text);
    let contains_year = numbers.iter().any(|n| n.len() == 4);
    let enough_numbers = numbers.len() >= 3;
    enough_numbers && contains_year
}

/// Classify the line at `index`, allowing the header to wrap onto the next
/// line.
#[must_use]
pub fn quote_header_at(lines: &[Line], index: usize) -> HeaderMatch {
    let Some(line) = lines.get(index) else {
        return HeaderMatch::None;
    };
    let current = line.lower();
    let next = lines.get(index + 1).map(Line::lower);

    let joined = next
        .as_ref()
        .map_or_else(|| current.clone(), |next| format!("{current}{next}"));
    if is_quote_header(&joined) {
        trace!(line = index, "quote header spans into next line");
        return HeaderMatch::MultiLine;
    }

    // The next line must not be counted twice: once as the tail of this
    // header and once as a header of its own.
    let next_is_header = next
        .as_deref()
        .is_some_and(|next| has_quoted_address(next) && is_dated(next));
    if !next_is_header && is_quote_header(&current) {
        trace!(line = index, "single line quote header");
        return HeaderMatch::SingleLine;
    }

    HeaderMatch::None
}
