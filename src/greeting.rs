//! Closing greeting and mobile footer detection

use crate::keywords::{GREETINGS, MAIL_PROGRAMS, SENT, contains_one_of, starts_with_one_of};

/// Characters allowed after a greeting phrase, e.g. a trailing comma.
const GREETING_TRAILING_CHARS: usize = 2;

/// Whether `text` is a closing salutation such as "Best regards,".
///
/// Also matches when the first word is dropped, so "Met vriendelijke
/// groeten" is caught through "vriendelijke groeten".
#[must_use]
pub fn is_greeting(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    if starts_with_greeting(&lower) {
        return true;
    }
    lower
        .split_once(' ')
        .is_some_and(|(_, rest)| starts_with_greeting(rest))
}

fn starts_with_greeting(text: &str) -> bool {
    GREETINGS.iter().any(|greeting| {
        text.strip_prefix(greeting)
            .is_some_and(|rest| rest.chars().count() <= GREETING_TRAILING_CHARS)
    })
}

/// Whether `text` is a client footer like `Sent from my iPhone`.
#[must_use]
pub fn is_sent_from(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    starts_with_one_of(&lower, SENT, true).is_some()
        && contains_one_of(&lower, MAIL_PROGRAMS, false)
}
