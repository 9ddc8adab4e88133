use email_reply_extract::*;
use pretty_assertions::assert_eq;

#[test]
fn test_default_options() {
    let options = ParserOptions::default();

    assert_eq!(options.match_threshold, 70);
    assert_eq!(options.disclaimer_max_lines, 6);
    assert_eq!(options.max_scan_lines, None);
    assert!(options.validate().is_ok());
}

#[test]
fn test_options_from_json() {
    assert_eq!(
        ParserOptions::from_json("{}").unwrap(),
        ParserOptions::default()
    );

    let options = ParserOptions::from_json(r#"{"match_threshold": 80, "max_scan_lines": 50}"#)
        .unwrap();
    assert_eq!(options.match_threshold, 80);
    assert_eq!(options.disclaimer_max_lines, 6);
    assert_eq!(options.max_scan_lines, Some(50));
}

#[test]
fn test_invalid_options() {
    assert!(matches!(
        ParserOptions::from_json(r#"{"match_threshold": 150}"#),
        Err(ParseError::InvalidOptions(_))
    ));
    assert!(matches!(
        ParserOptions::from_json("not json"),
        Err(ParseError::Options(_))
    ));
    assert!(matches!(
        ParserOptions::from_json(r#"{"max_scan_lines": 0}"#),
        Err(ParseError::InvalidOptions(_))
    ));

    let options = ParserOptions {
        disclaimer_max_lines: 0,
        ..ParserOptions::default()
    };
    assert!(ReplyParser::try_new(options).is_err());
}

#[test]
fn test_error_messages() {
    let err = ParserOptions::from_json(r#"{"match_threshold": 150}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid parser options: match_threshold must be at most 100, got 150"
    );
}

#[test]
fn test_parser_keeps_options() {
    let options = ParserOptions {
        match_threshold: 50,
        ..ParserOptions::default()
    };
    let parser = ReplyParser::try_new(options.clone()).unwrap();

    assert_eq!(parser.options(), &options);
}
