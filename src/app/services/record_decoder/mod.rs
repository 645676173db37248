//! Positional record decoder
//!
//! Maps the raw text fields of a record onto a typed record kind. Each kind
//! implements [`FromRecord`] with a static column schema; decoding checks the
//! record width against the schema and then reads every column through a
//! kind-checked [`Columns`] accessor.
//!
//! ## Architecture
//!
//! - [`schema`] - [`FieldSchema`], [`FieldKind`] and the decoding traits
//! - [`columns`] - Coercions for text, numbers, flags, lists and dates
//! - [`dates`] - The accepted date formats, in match order
//! - [`encode`] - Inverse helpers used by [`EncodeRecord`] implementations

pub mod columns;
pub mod dates;
pub mod encode;
pub mod schema;

#[cfg(test)]
mod tests;

pub use columns::Columns;
pub use dates::{DATE_FORMATS, DateFormat, format_date, parse_date};
pub use encode::{format_flag, format_float, format_list};
pub use schema::{EncodeRecord, FieldKind, FieldSchema, FromRecord};

use crate::Result;
use crate::app::services::tokenizer::RawRecord;
use crate::config::DecoderOptions;

/// Decode one raw record into `T`
///
/// Fails with a schema mismatch when the record width differs from
/// `T::SCHEMA`, or with a decode error for the first column that does not
/// coerce.
pub fn decode<T: FromRecord>(record: &RawRecord, options: &DecoderOptions) -> Result<T> {
    let columns = Columns::new(record, T::SCHEMA, options)?;
    T::from_columns(&columns)
}
