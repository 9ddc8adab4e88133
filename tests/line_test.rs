use email_reply_extract::*;
use pretty_assertions::assert_eq;

#[test]
fn test_split_keeps_every_segment() {
    let lines = split_lines("a\nb\n");

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2].raw, "");
    assert!(lines[2].is_empty);
    assert!(lines.iter().enumerate().all(|(i, l)| l.index == i));
}

#[test]
fn test_split_empty_input() {
    let lines = split_lines("");

    assert_eq!(lines.len(), 1);
    assert!(lines[0].is_empty);
    assert!(!lines[0].is_quoted);
}

#[test]
fn test_normalize() {
    assert_eq!(normalize("*KVK      50000000*"), "KVK 50000000");
    assert_eq!(normalize("  a\t\tb  * *c "), "a b c");
    assert_eq!(normalize(""), "");
}

#[test]
fn test_line_flags() {
    let quoted = Line::new(4, "> quoted  text");
    assert!(quoted.is_quoted);
    assert_eq!(quoted.index, 4);
    assert_eq!(quoted.normalized, "> quoted text");
    assert_eq!(quoted.raw, "> quoted  text");

    assert!(!Line::new(0, " > indented").is_quoted);
    assert!(Line::new(0, " \t ").is_empty);
    assert!(Line::new(0, "**").is_empty);
    assert_eq!(Line::new(0, "*Richard Lindhout*").lower(), "richard lindhout");
}
