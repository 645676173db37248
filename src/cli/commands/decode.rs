//! Decode command implementation
//!
//! Streams one dump file through the decode pipeline and writes every record
//! to stdout in the requested format.

use anyhow::{Context, Result};
use colored::*;
use indicatif::ProgressBar;
use serde::Serialize;
use std::fmt::Debug;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::{Duration, Instant};
use tracing::info;

use super::shared::{create_spinner, format_count, setup_logging};
use crate::app::models::{
    AdminCode5, AdminDivision, AdminSubdivision, AlternateName, AlternateNameDelete,
    AlternateNameModification, Country, DumpFile, FeatureCode, Geoname, GeonameDelete, Hierarchy,
    Language, RecordKind, Shape, TimeZone, UserTag,
};
use crate::app::services::pipeline::{Flow, StreamStats, stream_archive, stream_records};
use crate::app::services::record_decoder::{EncodeRecord, FromRecord};
use crate::cli::args::{DecodeArgs, OutputFormat};
use crate::config::StreamConfig;
use crate::Error;

/// Writes decoded records and enforces the record limit
struct RecordSink<W: Write> {
    out: W,
    format: OutputFormat,
    limit: Option<usize>,
    written: usize,
    progress: ProgressBar,
}

impl<W: Write> RecordSink<W> {
    fn write<T>(&mut self, record: &T) -> crate::Result<Flow>
    where
        T: EncodeRecord + Serialize + Debug,
    {
        if self.limit_reached() {
            return Ok(Flow::Stop);
        }

        self.write_record(record)
            .map_err(|e| Error::io(format!("failed to write record {}", self.written + 1), e))?;
        self.written += 1;
        self.progress.inc(1);

        if self.limit_reached() {
            Ok(Flow::Stop)
        } else {
            Ok(Flow::Continue)
        }
    }

    fn write_record<T>(&mut self, record: &T) -> io::Result<()>
    where
        T: EncodeRecord + Serialize + Debug,
    {
        match self.format {
            OutputFormat::Human => writeln!(self.out, "{:?}", record),
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, record)?;
                writeln!(self.out)
            }
            OutputFormat::Tsv => writeln!(self.out, "{}", record.encode().join("\t")),
        }
    }

    fn limit_reached(&self) -> bool {
        self.limit.is_some_and(|limit| self.written >= limit)
    }

    fn finish(mut self) -> io::Result<()> {
        self.progress.finish_and_clear();
        self.out.flush()
    }
}

/// Run the decode command
pub fn run_decode(args: DecodeArgs) -> Result<StreamStats> {
    setup_logging(args.get_log_level(), args.quiet)?;

    let dump = args.dump_file();
    let kind = args.record_kind().with_context(|| {
        format!(
            "cannot tell the record kind of {}; pass --kind",
            args.file.display()
        )
    })?;
    let config = args.stream_config()?;
    info!("Decoding {} as {} records", args.file.display(), kind);

    let source = File::open(&args.file)
        .with_context(|| format!("failed to open {}", args.file.display()))?;

    let stdout = io::stdout();
    let mut sink = RecordSink {
        out: BufWriter::new(stdout.lock()),
        format: args.format,
        limit: args.limit,
        written: 0,
        progress: create_spinner(dump.name(), args.show_progress()),
    };

    let start = Instant::now();
    let entry = args.entry.as_deref();
    let stats = match kind {
        RecordKind::Geoname => decode_as::<Geoname, _>(source, &dump, entry, &config, &mut sink),
        RecordKind::GeonameDelete => {
            decode_as::<GeonameDelete, _>(source, &dump, entry, &config, &mut sink)
        }
        RecordKind::AlternateName => {
            decode_as::<AlternateName, _>(source, &dump, entry, &config, &mut sink)
        }
        RecordKind::AlternateNameModification => {
            decode_as::<AlternateNameModification, _>(source, &dump, entry, &config, &mut sink)
        }
        RecordKind::AlternateNameDelete => {
            decode_as::<AlternateNameDelete, _>(source, &dump, entry, &config, &mut sink)
        }
        RecordKind::Country => decode_as::<Country, _>(source, &dump, entry, &config, &mut sink),
        RecordKind::Language => decode_as::<Language, _>(source, &dump, entry, &config, &mut sink),
        RecordKind::TimeZone => decode_as::<TimeZone, _>(source, &dump, entry, &config, &mut sink),
        RecordKind::FeatureCode => {
            decode_as::<FeatureCode, _>(source, &dump, entry, &config, &mut sink)
        }
        RecordKind::Hierarchy => {
            decode_as::<Hierarchy, _>(source, &dump, entry, &config, &mut sink)
        }
        RecordKind::Shape => decode_as::<Shape, _>(source, &dump, entry, &config, &mut sink),
        RecordKind::UserTag => decode_as::<UserTag, _>(source, &dump, entry, &config, &mut sink),
        RecordKind::AdminDivision => {
            decode_as::<AdminDivision, _>(source, &dump, entry, &config, &mut sink)
        }
        RecordKind::AdminSubdivision => {
            decode_as::<AdminSubdivision, _>(source, &dump, entry, &config, &mut sink)
        }
        RecordKind::AdminCode5 => {
            decode_as::<AdminCode5, _>(source, &dump, entry, &config, &mut sink)
        }
    };

    let progress = sink.progress.clone();
    let stats = match stats {
        Ok(stats) => stats,
        Err(e) => {
            progress.abandon();
            return Err(e).with_context(|| format!("failed to decode {}", args.file.display()));
        }
    };
    sink.finish().context("failed to flush output")?;

    if args.show_progress() {
        print_summary(&dump, kind, &stats, start.elapsed());
    }
    Ok(stats)
}

fn decode_as<T, W>(
    source: File,
    dump: &DumpFile,
    entry: Option<&str>,
    config: &StreamConfig,
    sink: &mut RecordSink<W>,
) -> crate::Result<StreamStats>
where
    T: FromRecord + EncodeRecord + Serialize + Debug,
    W: Write,
{
    let handler = |record: T| sink.write(&record);

    match entry {
        Some(entry_name) => stream_archive(source, entry_name, config, handler),
        None if dump.is_archive() => stream_archive(source, &dump.text_filename(), config, handler),
        None => stream_records(source, config, handler),
    }
}

fn print_summary(dump: &DumpFile, kind: RecordKind, stats: &StreamStats, elapsed: Duration) {
    eprintln!();
    eprintln!("{}", format!("Decoded {}", dump).green().bold());
    eprintln!("   • Record kind: {}", kind.to_string().cyan());
    eprintln!("   • Lines read: {}", format_count(stats.lines_read));
    eprintln!(
        "   • Records decoded: {}",
        format_count(stats.records_decoded).bold()
    );
    if stats.records_skipped > 0 {
        eprintln!(
            "   • {}",
            format!(
                "Records skipped: {} ({:.2}%)",
                format_count(stats.records_skipped),
                stats.skip_rate()
            )
            .yellow()
        );
    }
    if stats.stopped_early {
        eprintln!("   • Stopped at the record limit");
    }
    eprintln!("   • Elapsed: {:.2?}", elapsed);
}
