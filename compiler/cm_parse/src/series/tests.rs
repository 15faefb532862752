use super::*;
use pretty_assertions::assert_eq;

#[test]
fn comma_config_defaults() {
    let config = SeriesConfig::comma('(', ')', ErrorContext::Function);
    assert_eq!(config.separator, ',');
    assert_eq!(config.terminator, ')');
    assert_eq!(config.blanks, Blanks::Forbidden);
    assert_eq!(config.expected(), "`,` or `)`");
}

#[test]
fn arrays_allow_blanks_objects_do_not() {
    let array = SeriesConfig::array();
    assert_eq!((array.open, array.terminator), ('[', ']'));
    assert_eq!(array.blanks, Blanks::Allowed);
    assert_eq!(array.context, ErrorContext::Array);

    let object = SeriesConfig::object();
    assert_eq!((object.open, object.terminator), ('{', '}'));
    assert_eq!(object.blanks, Blanks::Forbidden);
    assert_eq!(object.expected(), "`,` or `}`");
}

#[test]
fn series_collects_slots_in_order() {
    let mut parser = Parser::new("a, , b]");
    let items = parser
        .series(&SeriesConfig::array(), Span::new(0, 1), |p| {
            Ok(p.cursor.eat_while(char::is_alphabetic).to_string())
        })
        .unwrap_or_default();
    assert_eq!(
        items,
        vec![Some("a".to_string()), None, Some("b".to_string())]
    );
    assert!(parser.cursor.is_eof());
}

#[test]
fn series_trailing_separator_adds_nothing() {
    let mut parser = Parser::new("a,]");
    let items = parser
        .series(&SeriesConfig::array(), Span::new(0, 1), |p| {
            Ok(p.cursor.eat_while(char::is_alphabetic).len())
        })
        .unwrap_or_default();
    assert_eq!(items, vec![Some(1)]);
}

#[test]
fn series_reports_unclosed_list() {
    let mut parser = Parser::new("a, b");
    let result = parser.series(&SeriesConfig::object(), Span::new(0, 1), |p| {
        Ok(p.cursor.eat_while(char::is_alphabetic).len())
    });
    let Err(err) = result else {
        panic!("expected an unclosed error");
    };
    assert_eq!(
        err.kind,
        ParseErrorKind::Unclosed {
            open: '{',
            close: '}',
            open_span: Span::new(0, 1),
        }
    );
    assert_eq!(err.span, Span::point(4));
    assert_eq!(err.context, Some(ErrorContext::Object));
}
