//! Core tokenizer implementation
//!
//! Reads physical lines from a buffered byte source, skips comment and blank
//! lines, splits the remaining lines into fields and checks each record
//! against the configured field count policy.

use std::io::{BufRead, BufReader, Read};
use tracing::trace;

use super::options::{FieldCountPolicy, QuoteMode, TokenizerOptions};
use super::record::RawRecord;
use crate::constants::READ_BUFFER_CAPACITY;
use crate::error::ParseErrorKind;
use crate::{Error, Result};

/// A record whose field count disagreed with the expected count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCountMismatch {
    /// Line on which the record starts
    pub line: usize,
    /// Count required by the policy
    pub expected: usize,
    /// Count actually read
    pub found: usize,
}

impl From<FieldCountMismatch> for Error {
    fn from(mismatch: FieldCountMismatch) -> Self {
        Error::field_count(mismatch.line, mismatch.expected, mismatch.found)
    }
}

/// Outcome of one successful [`Tokenizer::read_record`] call
///
/// The record is always present; a field count mismatch is reported next to
/// it so the caller decides whether to tolerate it.
#[derive(Debug)]
pub struct ReadRecord<'a> {
    record: &'a RawRecord,
    mismatch: Option<FieldCountMismatch>,
}

impl<'a> ReadRecord<'a> {
    /// The tokenized record
    pub fn record(&self) -> &'a RawRecord {
        self.record
    }

    /// Field count mismatch, if any
    pub fn mismatch(&self) -> Option<FieldCountMismatch> {
        self.mismatch
    }

    /// Turn a mismatch into an error
    pub fn into_result(self) -> Result<&'a RawRecord> {
        match self.mismatch {
            Some(mismatch) => Err(mismatch.into()),
            None => Ok(self.record),
        }
    }
}

/// Delimited-record tokenizer over a buffered byte source
#[derive(Debug)]
pub struct Tokenizer<R> {
    reader: R,
    options: TokenizerOptions,
    expected_fields: Option<usize>,
    line: usize,
    line_buffer: String,
    record: RawRecord,
}

impl<R: Read> Tokenizer<BufReader<R>> {
    /// Wrap an unbuffered source
    pub fn from_reader(reader: R, options: TokenizerOptions) -> Result<Self> {
        Tokenizer::new(
            BufReader::with_capacity(READ_BUFFER_CAPACITY, reader),
            options,
        )
    }
}

impl<R: BufRead> Tokenizer<R> {
    /// Create a tokenizer, validating the options before anything is read
    pub fn new(reader: R, options: TokenizerOptions) -> Result<Self> {
        options.validate()?;

        let expected_fields = match options.field_count {
            FieldCountPolicy::Fixed(count) => Some(count),
            FieldCountPolicy::Infer | FieldCountPolicy::Unchecked => None,
        };

        Ok(Self {
            reader,
            options,
            expected_fields,
            line: 0,
            line_buffer: String::new(),
            record: RawRecord::new(),
        })
    }

    /// Options in effect
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Number of physical lines consumed so far
    pub fn line(&self) -> usize {
        self.line
    }

    /// Field count currently enforced, once known
    pub fn expected_fields(&self) -> Option<usize> {
        match self.options.field_count {
            FieldCountPolicy::Unchecked => None,
            _ => self.expected_fields,
        }
    }

    /// Read the next record
    ///
    /// Returns `Ok(None)` at end of input. With buffer reuse enabled the
    /// returned record shares storage with the previous one; the borrow ends
    /// at the next call.
    pub fn read_record(&mut self) -> Result<Option<ReadRecord<'_>>> {
        if !self.parse_record()? {
            return Ok(None);
        }

        let mismatch = self.check_field_count();
        trace!(
            "line {}: {} fields",
            self.record.line(),
            self.record.len()
        );

        Ok(Some(ReadRecord {
            record: &self.record,
            mismatch,
        }))
    }

    /// Read the next record as an owned value, failing on a field count mismatch
    pub fn read_record_owned(&mut self) -> Result<Option<RawRecord>> {
        let reuse = self.options.reuse_record;
        match self.read_record()? {
            None => Ok(None),
            Some(read) => {
                read.into_result()?;
                if reuse {
                    Ok(Some(self.record.clone()))
                } else {
                    Ok(Some(std::mem::take(&mut self.record)))
                }
            }
        }
    }

    /// Iterate over owned records
    pub fn into_records(self) -> Records<R> {
        Records {
            tokenizer: self,
            done: false,
        }
    }

    fn check_field_count(&mut self) -> Option<FieldCountMismatch> {
        let found = self.record.len();
        match (self.options.field_count, self.expected_fields) {
            (FieldCountPolicy::Unchecked, _) => None,
            (_, Some(expected)) if expected != found => Some(FieldCountMismatch {
                line: self.record.line(),
                expected,
                found,
            }),
            (_, Some(_)) => None,
            (_, None) => {
                self.expected_fields = Some(found);
                None
            }
        }
    }

    /// Read one physical line into the line buffer, normalizing `\r\n` to `\n`
    ///
    /// Returns `false` at end of input.
    fn read_line(&mut self) -> Result<bool> {
        let mut bytes = std::mem::take(&mut self.line_buffer).into_bytes();
        bytes.clear();

        let read = self.reader.read_until(b'\n', &mut bytes).map_err(|e| {
            Error::io(format!("failed to read line {}", self.line + 1), e)
        })?;
        if read == 0 {
            self.line_buffer = String::from_utf8(bytes).unwrap_or_default();
            return Ok(false);
        }
        self.line += 1;

        let len = bytes.len();
        if bytes.ends_with(b"\r\n") {
            bytes.truncate(len - 2);
            bytes.push(b'\n');
        } else if bytes.last() == Some(&b'\r') {
            // only possible on a final line without a newline
            bytes.truncate(len - 1);
        }

        match String::from_utf8(bytes) {
            Ok(line) => {
                self.line_buffer = line;
                Ok(true)
            }
            Err(e) => {
                let column = e.utf8_error().valid_up_to() + 1;
                let mut bytes = e.into_bytes();
                bytes.clear();
                self.line_buffer = String::from_utf8(bytes).unwrap_or_default();
                Err(Error::parse(
                    self.line,
                    self.line,
                    column,
                    ParseErrorKind::InvalidUtf8,
                ))
            }
        }
    }

    fn is_skippable_line(&self) -> bool {
        if let Some(comment) = self.options.comment {
            if self.line_buffer.starts_with(comment) {
                return true;
            }
        }
        self.line_buffer.len() == newline_len(&self.line_buffer)
    }

    /// Parse the next record into `self.record`; `false` at end of input
    fn parse_record(&mut self) -> Result<bool> {
        loop {
            if !self.read_line()? {
                return Ok(false);
            }
            if !self.is_skippable_line() {
                break;
            }
        }

        let start_line = self.line;
        if self.options.reuse_record {
            self.record.clear();
        } else {
            self.record = RawRecord::new();
        }
        self.record.set_line(start_line);

        let delimiter = self.options.delimiter;
        let delimiter_len = delimiter.len_utf8();
        let quoting = self.options.quoting;
        let mut pos = 0;

        'field: loop {
            if self.options.trim_leading_space {
                let rest = &self.line_buffer[pos..];
                pos += rest.len() - rest.trim_start().len();
            }

            let rest = &self.line_buffer[pos..];
            if quoting == QuoteMode::Disabled || !rest.starts_with('"') {
                let (field_len, next) = match rest.find(delimiter) {
                    Some(i) => (i, Some(i + delimiter_len)),
                    None => (rest.len() - newline_len(rest), None),
                };
                let field = &rest[..field_len];

                if quoting == QuoteMode::Strict {
                    if let Some(quote) = field.find('"') {
                        let column = column_at(&self.line_buffer, pos + quote);
                        return Err(Error::parse(
                            start_line,
                            self.line,
                            column,
                            ParseErrorKind::BareQuote,
                        ));
                    }
                }

                self.record.buffer_mut().push_str(field);
                self.record.end_field();

                match next {
                    Some(advance) => {
                        pos += advance;
                        continue 'field;
                    }
                    None => break 'field,
                }
            }

            // Quoted field
            pos += 1;
            loop {
                let rest = &self.line_buffer[pos..];
                if let Some(i) = rest.find('"') {
                    self.record.buffer_mut().push_str(&rest[..i]);
                    pos += i + 1;

                    let rest = &self.line_buffer[pos..];
                    if rest.starts_with('"') {
                        // `""` sequence
                        self.record.buffer_mut().push('"');
                        pos += 1;
                    } else if rest.starts_with(delimiter) {
                        pos += delimiter_len;
                        self.record.end_field();
                        continue 'field;
                    } else if rest.len() == newline_len(rest) {
                        self.record.end_field();
                        break 'field;
                    } else if quoting == QuoteMode::Lazy {
                        self.record.buffer_mut().push('"');
                    } else {
                        let column = column_at(&self.line_buffer, pos);
                        return Err(Error::parse(
                            start_line,
                            self.line,
                            column,
                            ParseErrorKind::Quote,
                        ));
                    }
                } else if !rest.is_empty() {
                    // the field continues on the next physical line
                    self.record.buffer_mut().push_str(rest);
                    if !self.read_line()? {
                        return self.finish_unterminated_quote(start_line);
                    }
                    pos = 0;
                } else {
                    return self.finish_unterminated_quote(start_line);
                }
            }
        }

        Ok(true)
    }

    fn finish_unterminated_quote(&mut self, start_line: usize) -> Result<bool> {
        if self.options.quoting == QuoteMode::Lazy {
            self.record.end_field();
            return Ok(true);
        }
        let column = self.line_buffer.chars().count() + 1;
        Err(Error::parse(
            start_line,
            self.line,
            column,
            ParseErrorKind::Quote,
        ))
    }
}

/// Iterator over owned records, stopping at the first error
pub struct Records<R> {
    tokenizer: Tokenizer<R>,
    done: bool,
}

impl<R> Records<R> {
    /// The underlying tokenizer
    pub fn tokenizer(&self) -> &Tokenizer<R> {
        &self.tokenizer
    }
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.tokenizer.read_record_owned() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Length of the trailing newline (0 or 1)
fn newline_len(s: &str) -> usize {
    if s.ends_with('\n') { 1 } else { 0 }
}

/// 1-indexed character column of a byte offset
fn column_at(line: &str, byte_pos: usize) -> usize {
    line[..byte_pos].chars().count() + 1
}
