// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Reply Extractor
//!
//! Extracts the text a sender actually wrote from a plain-text email body,
//! dropping quoted earlier messages and trailing signatures or disclaimers.
//! Headers and MIME structure are expected to be stripped already.
//!
//! # Features
//!
//! - Quote-on-bottom and quote-on-top layouts
//! - Multilingual quote headers ("On ... wrote:", "Op ... schreef:")
//! - Scored signature blocks with attached disclaimers
//! - Closing greetings and `Sent from my iPhone` footers
//!
//! # Example
//!
//! ```rust
//! use email_reply_extract::parse;
//!
//! let body = "Sounds good, see you then.\n\n\
//!             On Mon, Aug 26, 2019 at 4:37 PM Jane <jane@example.com> wrote:\n\
//!             > Shall we meet on Friday?";
//!
//! assert_eq!(parse(body), "Sounds good, see you then.");
//! ```

mod error;
mod greeting;
pub mod keywords;
mod line;
mod options;
mod parser;
mod quote;
mod signature;
mod types;

pub use error::{ParseError, Result};
pub use greeting::{is_greeting, is_sent_from};
pub use line::{Line, normalize, split_lines};
pub use options::ParserOptions;
pub use parser::{ReplyParser, parse, parse_reply};
pub use quote::{HeaderMatch, find_numbers, has_quoted_address, is_quote_header, quote_header_at};
pub use signature::{
    SignatureStart, is_email_line, is_label_with_value, is_logo, is_name, is_number_signature,
    is_possible_signature_line, is_separator, is_signature_block, is_website_line,
    merge_digit_groups, signature_start,
};
pub use types::*;
