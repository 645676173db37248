//! Test utilities for the tokenizer

use super::{RawRecord, Tokenizer, TokenizerOptions};
use crate::Result;

mod quoting_tests;
mod reader_tests;

/// Build a tokenizer over an in-memory string
pub fn tokenizer(input: &str, options: TokenizerOptions) -> Tokenizer<std::io::BufReader<&[u8]>> {
    Tokenizer::from_reader(input.as_bytes(), options).unwrap()
}

/// Read every record, failing on the first error or mismatch
pub fn read_all(input: &str, options: TokenizerOptions) -> Result<Vec<Vec<String>>> {
    tokenizer(input, options)
        .into_records()
        .map(|record| record.map(|r: RawRecord| r.to_vec()))
        .collect()
}

/// Shorthand for expected rows
pub fn rows(expected: &[&[&str]]) -> Vec<Vec<String>> {
    expected
        .iter()
        .map(|row| row.iter().map(|field| field.to_string()).collect())
        .collect()
}
