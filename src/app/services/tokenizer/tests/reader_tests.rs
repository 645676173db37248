//! Tests for line reading, comment skipping and buffer reuse

use super::*;
use crate::Error;
use crate::error::ParseErrorKind;

#[test]
fn test_comment_lines_are_skipped() {
    let options = TokenizerOptions::default().with_comment(Some('#'));
    let records = read_all("# header\nA,B,C\n#x,y\n1,2,3\n", options).unwrap();

    assert_eq!(records, rows(&[&["A", "B", "C"], &["1", "2", "3"]]));
}

#[test]
fn test_comment_character_elsewhere_is_data() {
    let options = TokenizerOptions::default().with_comment(Some('#'));
    let records = read_all("a,#b,c\n #d,e,f\n", options).unwrap();

    assert_eq!(records, rows(&[&["a", "#b", "c"], &[" #d", "e", "f"]]));
}

#[test]
fn test_blank_lines_are_skipped() {
    let records = read_all("a\n\n\r\nb\n\n", TokenizerOptions::default()).unwrap();

    assert_eq!(records, rows(&[&["a"], &["b"]]));
}

#[test]
fn test_crlf_is_normalized() {
    let records = read_all("a,b\r\nc,d\r\n", TokenizerOptions::default()).unwrap();
    assert_eq!(records, rows(&[&["a", "b"], &["c", "d"]]));

    let records = read_all("a,b\r", TokenizerOptions::default()).unwrap();
    assert_eq!(records, rows(&[&["a", "b"]]));
}

#[test]
fn test_final_line_without_newline_is_a_record() {
    let records = read_all("a,b\nc,d", TokenizerOptions::default()).unwrap();

    assert_eq!(records, rows(&[&["a", "b"], &["c", "d"]]));
}

#[test]
fn test_empty_input_and_comment_only_input() {
    let mut empty = tokenizer("", TokenizerOptions::default());
    assert!(empty.read_record().unwrap().is_none());
    assert!(empty.read_record().unwrap().is_none());

    let options = TokenizerOptions::default().with_comment(Some('#'));
    let mut comments = tokenizer("# one\n# two\n", options);
    assert!(comments.read_record().unwrap().is_none());
    assert_eq!(comments.line(), 2);
}

#[test]
fn test_empty_fields_are_kept() {
    let options = TokenizerOptions::geonames_dump();
    let records = read_all("1\t\t\tx\t\n", options).unwrap();

    assert_eq!(records, rows(&[&["1", "", "", "x", ""]]));
}

#[test]
fn test_trim_leading_space() {
    let options = TokenizerOptions::default().with_trim_leading_space();
    let records = read_all("a,  b,\t c\n", options).unwrap();
    assert_eq!(records, rows(&[&["a", "b", "c"]]));

    // whitespace delimiters are trimmed away as well
    let options = TokenizerOptions::default()
        .with_delimiter('\t')
        .with_trim_leading_space();
    let records = read_all("a\t  b\t\tc\n", options).unwrap();
    assert_eq!(records, rows(&[&["a", "b", "c"]]));
}

#[test]
fn test_multibyte_delimiter() {
    let options = TokenizerOptions::default().with_delimiter('→');
    let records = read_all("a→b→ç\n", options).unwrap();

    assert_eq!(records, rows(&[&["a", "b", "ç"]]));
}

#[test]
fn test_invalid_configuration_is_rejected_before_reading() {
    let options = TokenizerOptions::default().with_delimiter('\n');
    let result = Tokenizer::from_reader("a\nb\n".as_bytes(), options);

    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_invalid_utf8_reports_line() {
    let input: &[u8] = b"ok\n\xff\xfe\n";
    let mut tokenizer = Tokenizer::from_reader(input, TokenizerOptions::default()).unwrap();

    let first = tokenizer.read_record().unwrap().unwrap();
    assert_eq!(&first.record()[0], "ok");

    match tokenizer.read_record() {
        Err(Error::Parse {
            start_line,
            line,
            column,
            kind,
        }) => {
            assert_eq!(start_line, 2);
            assert_eq!(line, 2);
            assert_eq!(column, 1);
            assert_eq!(kind, ParseErrorKind::InvalidUtf8);
        }
        other => panic!("expected UTF-8 error, got {:?}", other),
    }
}

#[test]
fn test_record_start_lines() {
    let options = TokenizerOptions::default().with_comment(Some('#'));
    let mut tokenizer = tokenizer("#c\na\n\nb\n", options);

    let first = tokenizer.read_record().unwrap().unwrap();
    assert_eq!(first.record().line(), 2);

    let second = tokenizer.read_record().unwrap().unwrap();
    assert_eq!(second.record().line(), 4);
}

#[test]
fn test_reused_buffer_does_not_corrupt_copied_values() {
    let options = TokenizerOptions::default().with_reuse_record(true);
    let mut tokenizer = tokenizer("42,first name\n7,x\n", options);

    let first = tokenizer.read_record().unwrap().unwrap().into_result().unwrap();
    let id: i64 = first[0].parse().unwrap();
    let name = first[1].to_string();
    let first_ptr = first.as_str().as_ptr() as usize;

    let second = tokenizer.read_record().unwrap().unwrap().into_result().unwrap();
    assert_eq!(second.to_vec(), vec!["7", "x"]);
    // the shorter second record lives in the same allocation
    assert_eq!(second.as_str().as_ptr() as usize, first_ptr);

    assert_eq!(id, 42);
    assert_eq!(name, "first name");
}

#[test]
fn test_owned_records_are_independent() {
    let mut tokenizer = tokenizer("a,b\nc,d\n", TokenizerOptions::default());

    let first = tokenizer.read_record_owned().unwrap().unwrap();
    let second = tokenizer.read_record_owned().unwrap().unwrap();

    assert_eq!(first.to_vec(), vec!["a", "b"]);
    assert_eq!(second.to_vec(), vec!["c", "d"]);
    assert!(tokenizer.read_record_owned().unwrap().is_none());
}

#[test]
fn test_owned_records_with_reuse_are_copies() {
    let options = TokenizerOptions::default().with_reuse_record(true);
    let records: Vec<RawRecord> = tokenizer("a,b\nc,d\n", options)
        .into_records()
        .collect::<Result<_>>()
        .unwrap();

    assert_eq!(records[0].to_vec(), vec!["a", "b"]);
    assert_eq!(records[1].to_vec(), vec!["c", "d"]);
}
