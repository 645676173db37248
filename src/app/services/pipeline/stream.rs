//! Tokenizer to decoder to handler driver

use std::any::type_name;
use std::io::Read;
use tracing::{debug, info, trace, warn};

use super::stats::StreamStats;
use crate::app::models::DumpFile;
use crate::app::services::archive::stream_entry;
use crate::app::services::record_decoder::{FromRecord, decode};
use crate::app::services::tokenizer::{FieldCountPolicy, Tokenizer};
use crate::config::{MismatchPolicy, StreamConfig};
use crate::Result;

/// Handler verdict after each record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Deliver the next record
    Continue,
    /// End the stream now, successfully
    Stop,
}

/// Decode every record of a delimited byte stream into `T`
///
/// The handler receives owned records one at a time. It ends the stream early
/// with [`Flow::Stop`] or aborts it by returning an error, which is passed
/// through unchanged. An inferred field count is taken from the schema of
/// `T`. Field count mismatches follow the configured [`MismatchPolicy`];
/// every other tokenizer or decode failure aborts.
pub fn stream_records<T, R, F>(reader: R, config: &StreamConfig, mut handler: F) -> Result<StreamStats>
where
    T: FromRecord,
    R: Read,
    F: FnMut(T) -> Result<Flow>,
{
    config.validate()?;

    let record_type = type_name::<T>().rsplit("::").next().unwrap_or_default();
    info!("Streaming {} records", record_type);

    // the schema width is known up front, so a short first row is a mismatch
    let mut options = config.tokenizer.clone();
    if options.field_count == FieldCountPolicy::Infer {
        options = options.with_field_count(FieldCountPolicy::Fixed(T::SCHEMA.len()));
    }

    let mut tokenizer = Tokenizer::from_reader(reader, options)?;
    let mut stats = StreamStats::new();
    let mut header_pending = config.skip_header;

    while let Some(read) = tokenizer.read_record()? {
        stats.records_read += 1;
        let record = read.record();

        if header_pending {
            header_pending = false;
            debug!(
                "Skipping header row on line {} ({} columns)",
                record.line(),
                record.len()
            );
            continue;
        }

        if let Some(mismatch) = read.mismatch() {
            match config.mismatch_policy {
                MismatchPolicy::Fail => return Err(mismatch.into()),
                MismatchPolicy::Skip => {
                    warn!(
                        "Skipping record on line {}: expected {} fields, found {}",
                        mismatch.line, mismatch.expected, mismatch.found
                    );
                    stats.records_skipped += 1;
                    continue;
                }
            }
        }

        trace!("Decoding record on line {}", record.line());
        let decoded: T = decode(record, &config.decoder)?;
        stats.records_decoded += 1;

        if handler(decoded)? == Flow::Stop {
            debug!("Handler stopped the stream after {} records", stats.records_decoded);
            stats.stopped_early = true;
            break;
        }
    }

    stats.lines_read = tokenizer.line();
    info!(
        "Finished streaming {} records: {} decoded, {} skipped, {} lines",
        record_type, stats.records_decoded, stats.records_skipped, stats.lines_read
    );
    Ok(stats)
}

/// Decode the records of one entry of a ZIP archive
pub fn stream_archive<T, R, F>(
    source: R,
    entry_name: &str,
    config: &StreamConfig,
    handler: F,
) -> Result<StreamStats>
where
    T: FromRecord,
    R: Read,
    F: FnMut(T) -> Result<Flow>,
{
    config.validate()?;
    stream_entry(source, entry_name, |entry| stream_records(entry, config, handler))
}

/// Decode a catalogued dump file with its preset configuration
///
/// Archives are opened at their text entry, plain files are read directly.
pub fn stream_dump<T, R, F>(source: R, dump: &DumpFile, handler: F) -> Result<StreamStats>
where
    T: FromRecord,
    R: Read,
    F: FnMut(T) -> Result<Flow>,
{
    let config = StreamConfig::for_dump(dump)?;
    stream_dump_with_config(source, dump, &config, handler)
}

/// Decode a dump file with an explicit configuration
pub fn stream_dump_with_config<T, R, F>(
    source: R,
    dump: &DumpFile,
    config: &StreamConfig,
    handler: F,
) -> Result<StreamStats>
where
    T: FromRecord,
    R: Read,
    F: FnMut(T) -> Result<Flow>,
{
    if dump.is_archive() {
        let entry_name = dump.text_filename();
        debug!("Reading entry {} of archive {}", entry_name, dump);
        stream_archive(source, &entry_name, config, handler)
    } else {
        debug!("Reading plain dump file {}", dump);
        stream_records(source, config, handler)
    }
}
