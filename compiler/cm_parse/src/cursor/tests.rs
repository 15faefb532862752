use super::*;

#[test]
fn current_character() {
    let cursor = Cursor::new("ab");
    assert_eq!(cursor.current(), Some('a'));
    assert_eq!(cursor.rest(), "ab");
    assert!(!cursor.is_eof());
}

#[test]
fn advance_through_entire_source() {
    let mut cursor = Cursor::new("hi");
    cursor.advance();
    assert_eq!(cursor.current(), Some('i'));
    assert_eq!(cursor.rest(), "i");
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), None);

    // Advancing at EOF stays put.
    cursor.advance();
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn advance_steps_over_multibyte_chars() {
    let mut cursor = Cursor::new("é!");
    cursor.advance();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), Some('!'));
}

#[test]
fn eat_only_matching_char() {
    let mut cursor = Cursor::new("[x");
    assert!(!cursor.eat('{'));
    assert!(cursor.eat('['));
    assert_eq!(cursor.rest(), "x");
}

#[test]
fn eat_while_returns_consumed_text() {
    let mut cursor = Cursor::new("abc123 rest");
    assert_eq!(cursor.eat_while(char::is_alphabetic), "abc");
    assert_eq!(cursor.eat_while(|c| c.is_ascii_digit()), "123");
    assert_eq!(cursor.rest(), " rest");
}

#[test]
fn eat_whitespace_handles_unicode_spaces() {
    let mut cursor = Cursor::new(" \t\n\u{00a0}\u{2003}x");
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), Some('x'));
}

#[test]
fn spans_use_byte_offsets() {
    let mut cursor = Cursor::new("ab é");
    let start = cursor.pos();
    cursor.eat_while(|c| c != ' ');
    assert_eq!(cursor.span_from(start), Span::new(0, 2));
    cursor.eat_whitespace();
    assert_eq!(cursor.current_span(), Span::new(3, 5));
    cursor.advance();
    assert_eq!(cursor.current_span(), Span::point(5));
}

#[test]
fn rest_span_covers_unconsumed_input() {
    let mut cursor = Cursor::new("x yz");
    cursor.advance();
    assert_eq!(cursor.rest_span(), Span::new(1, 4));
}
