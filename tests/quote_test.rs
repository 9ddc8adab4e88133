use email_reply_extract::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("On Monday, November 4, 2013 4:29 PM, John Smith <john.smith@example.org> wrote:")]
#[case("2013/11/1 John Smith <john@smith.org>")]
#[case("On Oct 1, 2012, at 11:55 PM, Dave Tapley wrote:")]
#[case(
    "on mon, aug 26, 2019 at 4:37 pm the hiring engine <a-really-long-automated-email+1234556@humanresources.com> wrote:"
)]
#[case("Op za 8 mei 2021 om 12:09 schreef Richard Lindhout <richardlindhout96@gmail.com>:")]
#[case("Am 26.08.2019 um 16:37 schrieb Max Mustermann <max@example.de>:")]
fn test_is_quote_header(#[case] line: &str) {
    assert!(is_quote_header(&line.to_lowercase()), "{line}");
}

#[rstest]
#[case("since on Monday, November 4, John Smith wrote me this message")]
#[case("You see this this the problem")]
#[case("On monday we wrote 3 tests")]
#[case("")]
fn test_is_not_quote_header(#[case] line: &str) {
    assert!(!is_quote_header(&line.to_lowercase()), "{line}");
}

#[test]
fn test_find_numbers() {
    assert_eq!(
        find_numbers("on mon, aug 26, 2019 at 4:37 pm"),
        vec!["26", "2019", "4", "37"]
    );
    assert!(find_numbers("no digits here").is_empty());
}

#[test]
fn test_quoted_address() {
    assert!(has_quoted_address("john smith <john@smith.org>"));
    assert!(!has_quoted_address("john@smith.org"));
}

#[test]
fn test_header_wrapped_over_two_lines() {
    let lines = split_lines(
        "On Mon, Aug 26, 2019 at 4:37 PM The Hiring Engine <\n\
         a-really-long-automated-email+1234556@humanresources.com> wrote:\n\
         > dd",
    );

    assert_eq!(quote_header_at(&lines, 0), HeaderMatch::MultiLine);
    assert_eq!(quote_header_at(&lines, 1), HeaderMatch::None);
    assert_eq!(quote_header_at(&lines, 2), HeaderMatch::None);
    assert_eq!(quote_header_at(&lines, 3), HeaderMatch::None);
}

#[test]
fn test_header_on_last_line() {
    let lines = split_lines("Hi\nOn Mon, Aug 26, 2019 at 4:37 PM Bob <bob@example.com> wrote:");

    assert_eq!(quote_header_at(&lines, 1), HeaderMatch::MultiLine);
    assert!(quote_header_at(&lines, 1).is_match());
}

#[test]
fn test_single_line_header() {
    // the year runs into the number on the next line once joined
    let lines = split_lines("On Jan 3, 4 PM, Bob wrote 2019\n5 things to discuss");

    assert_eq!(quote_header_at(&lines, 0), HeaderMatch::SingleLine);
}

#[test]
fn test_single_line_header_yields_to_next_header() {
    let lines = split_lines("On Jan 3, 4 PM, Ann wrote 2019\n2013/11/1 John Smith <john@smith.org>");

    assert_eq!(quote_header_at(&lines, 0), HeaderMatch::None);
    assert_eq!(quote_header_at(&lines, 1), HeaderMatch::MultiLine);
}
