//! Tests for RFC 4180 quoting

use super::*;
use crate::Error;
use crate::app::services::tokenizer::QuoteMode;
use crate::error::ParseErrorKind;

#[test]
fn test_quoted_field_keeps_delimiter() {
    let records = read_all("a,\"b,c\",d\n", TokenizerOptions::default()).unwrap();
    assert_eq!(records, rows(&[&["a", "b,c", "d"]]));

    let options = TokenizerOptions::default().with_delimiter('\t');
    let records = read_all("x\t\"tab\there\"\n", options).unwrap();
    assert_eq!(records, rows(&[&["x", "tab\there"]]));
}

#[test]
fn test_doubled_quotes_unescape() {
    let records = read_all("\"x\"\"y\",z\n\"\"\"\",\"\"\n", TokenizerOptions::default()).unwrap();

    assert_eq!(records, rows(&[&["x\"y", "z"], &["\"", ""]]));
}

#[test]
fn test_multiline_field_is_normalized() {
    let mut tokenizer = tokenizer("\"line1\r\nline2\",end\r\nnext,row\n", TokenizerOptions::default());

    let first = tokenizer.read_record().unwrap().unwrap();
    assert_eq!(first.record().to_vec(), vec!["line1\nline2", "end"]);
    assert_eq!(first.record().line(), 1);
    assert_eq!(tokenizer.line(), 2);

    let second = tokenizer.read_record().unwrap().unwrap();
    assert_eq!(second.record().line(), 3);
}

#[test]
fn test_quoted_field_at_end_of_input() {
    let records = read_all("a,\"b\"", TokenizerOptions::default()).unwrap();

    assert_eq!(records, rows(&[&["a", "b"]]));
}

#[test]
fn test_bare_quote_is_an_error_in_strict_mode() {
    match read_all("a,b\"c,d\n", TokenizerOptions::default()) {
        Err(Error::Parse { line, column, kind, .. }) => {
            assert_eq!(line, 1);
            assert_eq!(column, 4);
            assert_eq!(kind, ParseErrorKind::BareQuote);
        }
        other => panic!("expected bare quote error, got {:?}", other),
    }
}

#[test]
fn test_extraneous_quote_is_an_error_in_strict_mode() {
    match read_all("\"a\"b,c\n", TokenizerOptions::default()) {
        Err(Error::Parse { column, kind, .. }) => {
            assert_eq!(column, 4);
            assert_eq!(kind, ParseErrorKind::Quote);
        }
        other => panic!("expected quote error, got {:?}", other),
    }
}

#[test]
fn test_lazy_quotes_keep_stray_quotes() {
    let options = TokenizerOptions::default().with_quoting(QuoteMode::Lazy);
    let records = read_all("\"a\"b\",c\nx\"y,z\n", options).unwrap();

    assert_eq!(records, rows(&[&["a\"b", "c"], &["x\"y", "z"]]));
}

#[test]
fn test_unterminated_quote_reports_start_line() {
    let options = TokenizerOptions::default().with_field_count(
        crate::app::services::tokenizer::FieldCountPolicy::Unchecked,
    );
    match read_all("x\n\"abc\ndef\n", options.clone()) {
        Err(Error::Parse {
            start_line,
            line,
            kind,
            ..
        }) => {
            assert_eq!(start_line, 2);
            assert_eq!(line, 3);
            assert_eq!(kind, ParseErrorKind::Quote);
        }
        other => panic!("expected unterminated quote error, got {:?}", other),
    }

    let lazy = options.with_quoting(QuoteMode::Lazy);
    let records = read_all("x\n\"abc\ndef\n", lazy).unwrap();
    assert_eq!(records, rows(&[&["x"], &["abc\ndef\n"]]));
}

#[test]
fn test_disabled_quoting_treats_quotes_as_data() {
    let options = TokenizerOptions::geonames_dump();
    let records = read_all("\"quoted\tname\"\tb\n", options).unwrap();

    assert_eq!(records, rows(&[&["\"quoted", "name\"", "b"]]));
}
