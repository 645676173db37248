//! Error handling for GeoNames stream decoding.
//!
//! Provides one error type covering configuration, tokenizing, archive
//! scanning and record decoding failures, with constructor helpers that
//! attach context.

use std::fmt;
use thiserror::Error;

/// Comprehensive error types for stream decoding operations
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation on the byte source failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid tokenizer or pipeline configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A record had an unexpected number of fields
    #[error("record on line {line}: wrong number of fields (expected {expected}, found {found})")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Malformed delimited text
    #[error("{}", format_parse_position(.start_line, .line, .column, .kind))]
    Parse {
        start_line: usize,
        line: usize,
        column: usize,
        kind: ParseErrorKind,
    },

    /// A column failed type coercion
    #[error("column {column} ('{name}'): cannot decode '{value}': {reason}")]
    Decode {
        column: usize,
        name: &'static str,
        value: String,
        reason: String,
    },

    /// Record arity differs from the target schema
    #[error("Schema mismatch: expected {expected} columns, found {found}")]
    SchemaMismatch { expected: usize, found: usize },

    /// A decoder accessor disagreed with the declared schema
    #[error("Schema error: {message}")]
    Schema { message: String },

    /// The archive never contained the requested entry
    #[error("Archive does not contain the file {name}")]
    EntryNotFound { name: String },

    /// The archive uses a feature the streaming reader cannot handle
    #[error("Unsupported archive: {message}")]
    UnsupportedArchive { message: String },

    /// Dump file name missing from the catalogue
    #[error("Unknown dump file: {name}")]
    UnknownDump { name: String },
}

/// Kinds of tokenizer syntax errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A `"` appeared inside an unquoted field
    BareQuote,
    /// A stray `"` followed a closing quote, or the quote was never closed
    Quote,
    /// The line is not valid UTF-8
    InvalidUtf8,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::BareQuote => write!(f, "bare \" in non-quoted field"),
            ParseErrorKind::Quote => write!(f, "extraneous or missing \" in quoted field"),
            ParseErrorKind::InvalidUtf8 => write!(f, "invalid UTF-8"),
        }
    }
}

fn format_parse_position(
    start_line: &usize,
    line: &usize,
    column: &usize,
    kind: &ParseErrorKind,
) -> String {
    if start_line != line {
        format!(
            "record on line {}; parse error on line {}, column {}: {}",
            start_line, line, column, kind
        )
    } else {
        format!("parse error on line {}, column {}: {}", line, column, kind)
    }
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a field count error
    pub fn field_count(line: usize, expected: usize, found: usize) -> Self {
        Self::FieldCount {
            line,
            expected,
            found,
        }
    }

    /// Create a tokenizer syntax error
    pub fn parse(start_line: usize, line: usize, column: usize, kind: ParseErrorKind) -> Self {
        Self::Parse {
            start_line,
            line,
            column,
            kind,
        }
    }

    /// Create a column decode error
    pub fn decode(
        column: usize,
        name: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Decode {
            column,
            name,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a schema error
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    /// Create an entry not found error
    pub fn entry_not_found(name: impl Into<String>) -> Self {
        Self::EntryNotFound { name: name.into() }
    }

    /// Create an unsupported archive error
    pub fn unsupported_archive(message: impl Into<String>) -> Self {
        Self::UnsupportedArchive {
            message: message.into(),
        }
    }

    /// Create an unknown dump error
    pub fn unknown_dump(name: impl Into<String>) -> Self {
        Self::UnknownDump { name: name.into() }
    }

    /// Whether the caller may tolerate this error and keep reading
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::FieldCount { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            message: source.to_string(),
            source,
        }
    }
}

/// Result type alias for stream decoding
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_messages() {
        let same_line = Error::parse(3, 3, 7, ParseErrorKind::BareQuote);
        assert_eq!(
            same_line.to_string(),
            "parse error on line 3, column 7: bare \" in non-quoted field"
        );

        let spanning = Error::parse(3, 5, 1, ParseErrorKind::Quote);
        assert_eq!(
            spanning.to_string(),
            "record on line 3; parse error on line 5, column 1: extraneous or missing \" in quoted field"
        );
    }

    #[test]
    fn test_field_count_message_and_recoverability() {
        let err = Error::field_count(12, 19, 18);
        assert_eq!(
            err.to_string(),
            "record on line 12: wrong number of fields (expected 19, found 18)"
        );
        assert!(err.is_recoverable());
        assert!(!Error::entry_not_found("a.txt").is_recoverable());
    }

    #[test]
    fn test_io_conversion_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short read");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }
}
