//! Streaming ZIP entry reader
//!
//! GeoNames publishes its large dumps as ZIP archives holding one text file
//! each (plus a `readme.txt` in a few of them). This module reads such an
//! archive front to back from any byte stream, without seeking, and hands
//! the decompressed bytes of a single named entry to a consumer.
//!
//! ## Architecture
//!
//! - [`header`] - Local file header and data descriptor parsing, ZIP64 sizes
//! - [`entry`] - [`EntryReader`], decompression (stored or deflate) and CRC check
//! - [`stream`] - [`ZipStream`], entry iteration and skipping, [`stream_entry`]
//!
//! Only stored and deflate entries can be opened. Entries in other formats
//! are skipped when their compressed length is in the local header.

pub mod entry;
pub mod header;
pub mod stream;

#[cfg(test)]
pub mod tests;

pub use entry::EntryReader;
pub use header::{CompressionMethod, DataDescriptor, EntryHeader};
pub use stream::{ZipStream, stream_entry};
