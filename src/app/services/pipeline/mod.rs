//! Streaming decode pipeline
//!
//! Pulls one record at a time from the tokenizer, decodes it into the
//! requested record kind and hands it to a caller-supplied handler. Nothing
//! beyond the current record is held in memory.
//!
//! ## Usage
//!
//! ```rust
//! use geonames_stream::app::models::TimeZone;
//! use geonames_stream::app::services::pipeline::{Flow, stream_records};
//! use geonames_stream::config::StreamConfig;
//!
//! # fn example() -> geonames_stream::Result<()> {
//! let data = "CountryCode\tTimeZoneId\tGMT\tDST\tRaw\nAD\tEurope/Andorra\t1.0\t2.0\t1.0\n";
//! let config = StreamConfig::default().with_skip_header(true);
//!
//! let mut zones = Vec::new();
//! let stats = stream_records(data.as_bytes(), &config, |zone: TimeZone| {
//!     zones.push(zone.id);
//!     Ok(Flow::Continue)
//! })?;
//!
//! assert_eq!(zones, vec!["Europe/Andorra"]);
//! assert_eq!(stats.records_decoded, 1);
//! # Ok(())
//! # }
//! ```

pub mod stats;
pub mod stream;

#[cfg(test)]
mod tests;

pub use stats::StreamStats;
pub use stream::{Flow, stream_archive, stream_dump, stream_dump_with_config, stream_records};
