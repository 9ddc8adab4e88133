//! Multilingual keyword tables used by the line detectors.
//!
//! All entries are lowercase; detectors lowercase their input before
//! comparing.

/// Closing salutations that start a signature.
pub const GREETINGS: &[&str] = &[
    // English
    "regards",
    "best regards",
    // French
    "meilleures salutations",
    "cordialement",
    // Polish
    "pozdrowienia",
    "z poważaniem",
    // Dutch
    "groeten",
    "vriendelijke groeten",
    // German
    "freundliche grüße",
    "grüße",
    // Portuguese
    "cumprimentos",
    "saudações",
    // Norwegian
    "med vennlig hilsen",
    "hilsen",
    // Swedish
    "hälsningar",
    "vänliga hälsningar",
    // Danish
    "med venlig hilsen",
    // Vietnamese
    "trân trọng",
];

/// Labels that prefix a contact value in a signature ("tel 0166...").
///
/// Only English and Dutch for now.
pub const LABELS: &[&str] = &["bel", "call", "tel", "email", "mail", "kvk", "vat", "btw"];

/// Words that open a quote header ("On Mon, ... wrote:").
pub const ON: &[&str] = &[
    // English
    "on",
    // French
    "le",
    // Polish
    "w dni",
    // Dutch
    "op",
    // German
    "am",
    // Portuguese
    "em",
    // Norwegian
    "på",
    // Swedish, Danish
    "den",
    // Vietnamese
    "vào",
];

/// Verb forms that close a quote header.
pub const WROTE: &[&str] = &[
    // English
    "wrote",
    "sent",
    // French
    "a écrit",
    // Polish
    "napisał",
    // Dutch
    "schreef",
    "verzond",
    "geschreven",
    // German
    "schrieb",
    // Portuguese
    "escreve",
    // Norwegian, Swedish
    "skrev",
    // Vietnamese
    "đã viết",
];

/// Words that open a mobile client footer (`Sent from my iPhone`).
pub const SENT: &[&str] = &[
    // English
    "sent",
    // French
    "envoyé",
    // Polish
    "wysłane",
    // Dutch
    "verzonden",
    "verstuurd",
    // German
    "geschickt",
    // Portuguese
    "enviei",
    // Norwegian, Swedish
    "sendt",
    "skickas",
    // Vietnamese
    "gởi",
];

/// Mail programs and devices named in client footers.
pub const MAIL_PROGRAMS: &[&str] = &[
    "iphone",
    "galaxy",
    "samsung",
    "mail",
    "blackberry",
    "ipad",
    "apple mail",
    "yahoo! mail",
    "outlook",
    "outlook.com",
];

/// Returns the first entry of `table` that `text` starts with.
///
/// With `space_after` the entry must be followed by a space, so "on" does
/// not match "once".
#[must_use]
pub fn starts_with_one_of(
    text: &str,
    table: &[&'static str],
    space_after: bool,
) -> Option<&'static str> {
    table.iter().copied().find(|word| {
        text.strip_prefix(word)
            .is_some_and(|rest| !space_after || rest.starts_with(' '))
    })
}

/// Whether `text` contains any entry of `table`, optionally preceded by a
/// space.
#[must_use]
pub fn contains_one_of(text: &str, table: &[&str], space_before: bool) -> bool {
    table.iter().any(|word| {
        if space_before {
            text.contains(&format!(" {word}"))
        } else {
            text.contains(word)
        }
    })
}
