//! Signature and disclaimer detection
//!
//! A signature is found in two steps. First every line is tested on its own
//! against a handful of cheap shape checks (a name, a phone number, an
//! address, a separator rule, ...). A line passing any of them is a
//! *possible signature line*. Then, for a possible line, the lines that
//! follow it up to the quoted text are scored: when enough of them are
//! possible signature lines as well, the block starts there.
//!
//! A short run of prose after the last signature-like line is taken to be a
//! disclaimer attached to the signature and is left out of the score.

use crate::greeting::{is_greeting, is_sent_from};
use crate::keywords::LABELS;
use crate::line::Line;
use crate::options::ParserOptions;
use crate::quote::quote_header_at;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::trace;

static WEBSITE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[a-z]{2,6}(?:[/:?#>),\]]|$)").unwrap());

/// Characters that never appear in a first or last name.
const SPECIAL_CHARACTERS: &[char] = &[
    '[', '!', '@', '#', '$', '%', '&', '*', '(', ')', '_', '+', '=', '|', '<', '>', '?', '{', '}',
    ']', '~', '-',
];

/// Separators between a name and a job title, tried in order.
const NAME_SEPARATORS: &[char] = &['|', '-', ','];

/// Digits a token needs before it counts as a phone, account or registry
/// number.
const LONG_NUMBER_DIGITS: usize = 5;

/// Why a line starts the signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignatureStart {
    /// The conventional `--` delimiter
    Delimiter,
    /// A closing salutation
    Greeting,
    /// A mobile client footer
    SentFrom,
    /// A scored block of contact details
    Block,
}

/// Whether the line at `index` starts the signature, and why.
///
/// The first line of a message never does.
#[must_use]
pub fn signature_start(
    lines: &[Line],
    index: usize,
    options: &ParserOptions,
) -> Option<SignatureStart> {
    if index == 0 {
        return None;
    }
    let line = lines.get(index)?;

    if line.normalized == "--" {
        Some(SignatureStart::Delimiter)
    } else if is_greeting(&line.normalized) {
        Some(SignatureStart::Greeting)
    } else if is_sent_from(&line.normalized) {
        Some(SignatureStart::SentFrom)
    } else if is_signature_block(lines, index, options) {
        Some(SignatureStart::Block)
    } else {
        None
    }
}

/// Score the run of lines after `index` and decide whether a signature
/// block starts at `index`.
#[must_use]
pub fn is_signature_block(lines: &[Line], index: usize, options: &ParserOptions) -> bool {
    let Some(line) = lines.get(index) else {
        return false;
    };
    if !is_possible_signature_line(&line.normalized) {
        return false;
    }

    let window = lines_until_quote(lines, index + 1, options);
    let Some(last_match) = window
        .iter()
        .rposition(|l| is_possible_signature_line(&l.normalized))
    else {
        return false;
    };
    let matches = window
        .iter()
        .filter(|l| is_possible_signature_line(&l.normalized))
        .count();

    let disclaimer_lines = count_filled(&window[last_match + 1..]);
    let mut filled = count_filled(window);
    if disclaimer_lines < options.disclaimer_max_lines {
        filled = filled.saturating_sub(disclaimer_lines);
    }
    if filled == 0 {
        return false;
    }

    trace!(
        line = index,
        matches, filled, disclaimer_lines, "scored signature candidate"
    );
    // matches / filled > threshold %, without rounding the ratio down
    matches * 100 > options.match_threshold * filled
}

/// Lines from `start` up to the first quoted line or quote header.
fn lines_until_quote<'a>(lines: &'a [Line], start: usize, options: &ParserOptions) -> &'a [Line] {
    let Some(rest) = lines.get(start..) else {
        return &[];
    };
    let limit = options.max_scan_lines.map_or(rest.len(), |max| max.min(rest.len()));
    let end = (0..limit)
        .find(|&offset| {
            rest[offset].is_quoted || quote_header_at(lines, start + offset).is_match()
        })
        .unwrap_or(limit);
    &rest[..end]
}

fn count_filled(lines: &[Line]) -> usize {
    lines.iter().filter(|l| !l.is_empty).count()
}

/// Whether `text` has the shape of any typical signature line.
#[must_use]
pub fn is_possible_signature_line(text: &str) -> bool {
    is_name(text)
        || is_logo(text)
        || is_separator(text)
        || is_label_with_value(text)
        || is_number_signature(text)
        || is_email_line(text)
        || is_website_line(text)
}

/// A name with an optional job title: "Richard Lindhout | Software
/// Engineer", "Jan de Smit", "-Abhishek Kona".
#[must_use]
pub fn is_name(text: &str) -> bool {
    let text = text.trim().trim_start_matches('-').trim_start();
    let (name, function) = split_name_and_function(text);

    let parts: Vec<&str> = name.split_whitespace().collect();
    let (Some(first), Some(last)) = (parts.first(), parts.last()) else {
        return false;
    };
    if parts.len() > 3 {
        return false;
    }

    if let Some(function) = function {
        let function = function.trim();
        if function.chars().count() > 3 && function.split_whitespace().count() > 3 {
            return false;
        }
    }

    let capitalized = starts_uppercase(first) && starts_uppercase(last);
    let long_enough = first.chars().count() > 3 || last.chars().count() > 3;
    let clean = !first.contains(SPECIAL_CHARACTERS) && !last.contains(SPECIAL_CHARACTERS);
    capitalized && long_enough && clean
}

fn split_name_and_function(text: &str) -> (&str, Option<&str>) {
    NAME_SEPARATORS
        .iter()
        .find(|&&separator| text.matches(separator).count() == 1)
        .and_then(|&separator| text.split_once(separator))
        .map_or((text, None), |(name, function)| (name, Some(function)))
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// An inline image placeholder such as "[image: logo webridge]".
#[must_use]
pub fn is_logo(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    lower.starts_with("[image") && lower.ends_with(']')
}

/// A rule made of dashes or underscores.
#[must_use]
pub fn is_separator(text: &str) -> bool {
    let text = text.trim();
    !text.is_empty() && (text.chars().all(|c| c == '-') || text.chars().all(|c| c == '_'))
}

/// A label followed by a contact value: "Tel: +44423423423423", "KVK
/// 50000000", "WEB webridge.nl".
///
/// Any first word is accepted as label when the value is at most two
/// words holding an email address, a website or a long number. A known
/// label is enough on its own for a line of at most four words.
#[must_use]
pub fn is_label_with_value(text: &str) -> bool {
    let merged = merge_digit_groups(text.trim());
    let Some((label, value)) = merged.split_once(' ') else {
        return false;
    };

    let label = label.trim_end_matches(':').to_lowercase();
    if LABELS.contains(&label.as_str()) && merged.matches(' ').count() <= 3 {
        return true;
    }

    let value = value.trim();
    value.matches(' ').count() <= 1
        && (contains_email(value) || contains_website(value) || has_long_number(value))
}

/// A short line carrying a phone, account or registry number.
#[must_use]
pub fn is_number_signature(text: &str) -> bool {
    let merged = merge_digit_groups(text.trim());
    has_long_number(&merged) && merged.matches(' ').count() <= 3
}

/// A short line carrying an email address.
#[must_use]
pub fn is_email_line(text: &str) -> bool {
    contains_email(text) && text.trim().matches(' ').count() <= 2
}

/// A short line carrying a website.
#[must_use]
pub fn is_website_line(text: &str) -> bool {
    contains_website(text) && text.trim().matches(' ').count() <= 2
}

fn contains_email(text: &str) -> bool {
    text.split_whitespace()
        .any(|word| word.contains('@') && word.contains('.'))
}

fn contains_website(text: &str) -> bool {
    text.split_whitespace().any(|word| {
        let word = word.to_lowercase();
        WEBSITE_REGEX.is_match(&word)
            && (word.contains('/')
                || word.contains('.')
                || word.contains("http")
                || word.contains("www"))
    })
}

fn has_long_number(text: &str) -> bool {
    text.split_whitespace()
        .any(|word| word.chars().filter(char::is_ascii_digit).count() > LONG_NUMBER_DIGITS)
}

/// Remove spaces between digits so grouped numbers read as one token.
///
/// "Mijn nummer is 0166 66 42 42 45 67" becomes "Mijn nummer is
/// 01666642424567".
#[must_use]
pub fn merge_digit_groups(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            let between_digits = i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).is_some_and(char::is_ascii_digit);
            !(c == ' ' && between_digits)
        })
        .map(|(_, &c)| c)
        .collect()
}
