//! Tokenizer configuration
//!
//! Delimiter, comment character, quoting and field-count settings, with
//! validation performed before any record is read.

use serde::{Deserialize, Serialize};

use crate::constants::{DUMP_COMMENT, DUMP_DELIMITER};
use crate::{Error, Result};

/// How many fields each record is expected to carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FieldCountPolicy {
    /// Learn the count from the first record, then enforce it
    #[default]
    Infer,
    /// Every record must have exactly this many fields
    Fixed(usize),
    /// Records may have any number of fields
    Unchecked,
}

/// Treatment of the `"` character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuoteMode {
    /// RFC 4180 quoting; stray quotes are syntax errors
    #[default]
    Strict,
    /// Quoted fields are honoured but stray quotes are kept as data
    Lazy,
    /// Quotes are ordinary characters
    Disabled,
}

/// Tokenizer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenizerOptions {
    /// Field delimiter
    pub delimiter: char,

    /// Lines starting with this character are skipped
    pub comment: Option<char>,

    /// Strip leading whitespace from each field, even if the delimiter is whitespace
    pub trim_leading_space: bool,

    /// Expected field count per record
    pub field_count: FieldCountPolicy,

    /// Keep one record allocation alive across reads
    pub reuse_record: bool,

    /// Quote handling
    pub quoting: QuoteMode,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            comment: None,
            trim_leading_space: false,
            field_count: FieldCountPolicy::Infer,
            reuse_record: false,
            quoting: QuoteMode::Strict,
        }
    }
}

impl TokenizerOptions {
    /// Settings used by the tab-separated GeoNames dumps
    ///
    /// Names in the dumps contain bare quotes, so quoting is disabled.
    pub fn geonames_dump() -> Self {
        Self {
            delimiter: DUMP_DELIMITER,
            comment: Some(DUMP_COMMENT),
            trim_leading_space: false,
            field_count: FieldCountPolicy::Infer,
            reuse_record: true,
            quoting: QuoteMode::Disabled,
        }
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the comment character
    pub fn with_comment(mut self, comment: Option<char>) -> Self {
        self.comment = comment;
        self
    }

    /// Enable leading whitespace trimming
    pub fn with_trim_leading_space(mut self) -> Self {
        self.trim_leading_space = true;
        self
    }

    /// Set the field count policy
    pub fn with_field_count(mut self, field_count: FieldCountPolicy) -> Self {
        self.field_count = field_count;
        self
    }

    /// Enable record buffer reuse
    pub fn with_reuse_record(mut self, reuse_record: bool) -> Self {
        self.reuse_record = reuse_record;
        self
    }

    /// Set the quote handling
    pub fn with_quoting(mut self, quoting: QuoteMode) -> Self {
        self.quoting = quoting;
        self
    }

    /// Check delimiter and comment characters for consistency
    pub fn validate(&self) -> Result<()> {
        if !is_valid_delimiter(self.delimiter) {
            return Err(Error::configuration(format!(
                "invalid field delimiter {:?}",
                self.delimiter
            )));
        }

        if let Some(comment) = self.comment {
            if !is_valid_delimiter(comment) {
                return Err(Error::configuration(format!(
                    "invalid comment character {:?}",
                    comment
                )));
            }
            if comment == self.delimiter {
                return Err(Error::configuration(format!(
                    "comment character {:?} equals the field delimiter",
                    comment
                )));
            }
        }

        if let FieldCountPolicy::Fixed(0) = self.field_count {
            return Err(Error::configuration(
                "fixed field count must be greater than 0",
            ));
        }

        Ok(())
    }
}

fn is_valid_delimiter(c: char) -> bool {
    c != '\0' && c != '"' && c != '\r' && c != '\n' && c != char::REPLACEMENT_CHARACTER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_valid() {
        assert!(TokenizerOptions::default().validate().is_ok());
        assert!(TokenizerOptions::geonames_dump().validate().is_ok());
    }

    #[test]
    fn test_rejects_line_break_delimiters() {
        for bad in ['\r', '\n', '"', '\0', char::REPLACEMENT_CHARACTER] {
            let options = TokenizerOptions::default().with_delimiter(bad);
            assert!(
                matches!(options.validate(), Err(Error::Configuration { .. })),
                "delimiter {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_rejects_comment_equal_to_delimiter() {
        let options = TokenizerOptions::default()
            .with_delimiter('\t')
            .with_comment(Some('\t'));
        assert!(matches!(options.validate(), Err(Error::Configuration { .. })));

        let options = TokenizerOptions::default().with_comment(Some('\n'));
        assert!(matches!(options.validate(), Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_rejects_zero_fixed_count() {
        let options = TokenizerOptions::default().with_field_count(FieldCountPolicy::Fixed(0));
        assert!(options.validate().is_err());
    }
}
