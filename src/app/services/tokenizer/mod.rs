//! Delimited-record tokenizer
//!
//! Turns a byte stream into records of raw text fields. The format is
//! RFC 4180 with a configurable delimiter, an optional comment character,
//! optional quoting and `\r\n` normalization, including inside quoted
//! multi-line values.
//!
//! ## Architecture
//!
//! - [`options`] - Delimiter, comment, quoting and field-count settings
//! - [`record`] - [`RawRecord`], one contiguous buffer plus field end offsets
//! - [`reader`] - [`Tokenizer`], the line reader and field splitter
//!
//! ## Usage
//!
//! ```rust
//! use geonames_stream::app::services::tokenizer::{Tokenizer, TokenizerOptions};
//!
//! # fn example() -> geonames_stream::Result<()> {
//! let data = "# comment\n1\tAndorra\n2\tFrance\n";
//! let options = TokenizerOptions::default()
//!     .with_delimiter('\t')
//!     .with_comment(Some('#'));
//! let mut tokenizer = Tokenizer::from_reader(data.as_bytes(), options)?;
//!
//! while let Some(read) = tokenizer.read_record()? {
//!     let record = read.into_result()?;
//!     println!("{} -> {}", &record[0], &record[1]);
//! }
//! # Ok(())
//! # }
//! ```

pub mod options;
pub mod reader;
pub mod record;

#[cfg(test)]
mod tests;

pub use options::{FieldCountPolicy, QuoteMode, TokenizerOptions};
pub use reader::{FieldCountMismatch, ReadRecord, Records, Tokenizer};
pub use record::{Fields, RawRecord};
