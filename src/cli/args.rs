//! Command-line argument definitions for the GeoNames stream decoder
//!
//! This module defines the CLI interface using the clap derive API.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::Result;
use crate::app::models::{DumpFile, RecordKind};
use crate::config::{DatePolicy, MismatchPolicy, StreamConfig};

/// CLI arguments for the GeoNames dump decoder
///
/// Streams a GeoNames export file (plain text or ZIP archive) through the
/// tokenizer and record decoder and prints the typed records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "geonames-stream",
    version,
    about = "Stream and decode GeoNames export dumps",
    long_about = "Decodes GeoNames export files one record at a time, straight from the ZIP \
                  archive when the dump is compressed, and prints the typed records as text, \
                  JSON lines or tab-separated values."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Decode a dump file and print its records
    Decode(DecodeArgs),
    /// List the catalogue of known dump files
    Files(FilesArgs),
}

/// Output format for decoded records and reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// One JSON object per line
    Json,
    /// Tab-separated columns, as in the dumps
    Tsv,
}

/// Arguments for the decode command
#[derive(Debug, Clone, Parser)]
pub struct DecodeArgs {
    /// Dump file to read, e.g. cities500.zip or timeZones.txt
    ///
    /// The file name selects the record kind and whether the first row is a
    /// header, unless `--kind` is given.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Record kind to decode (defaults to the kind catalogued for FILE)
    #[arg(short = 'k', long = "kind", value_name = "KIND")]
    pub kind: Option<RecordKind>,

    /// Archive entry to read (defaults to FILE with .zip replaced by .txt)
    #[arg(short = 'e', long = "entry", value_name = "NAME")]
    pub entry: Option<String>,

    /// Stop after this many records
    #[arg(short = 'n', long = "limit", value_name = "COUNT")]
    pub limit: Option<usize>,

    /// Output format for decoded records
    #[arg(long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Treat unrecognised dates as absent instead of failing
    #[arg(long = "lenient-dates")]
    pub lenient_dates: bool,

    /// Skip records with the wrong number of columns instead of failing
    #[arg(long = "skip-mismatched")]
    pub skip_mismatched: bool,

    /// The first row is a column header (overrides the catalogue)
    #[arg(long = "header")]
    pub header: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress the progress spinner and summary
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except records and errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the files command
#[derive(Debug, Clone, Parser)]
pub struct FilesArgs {
    /// Output format for the catalogue
    #[arg(long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,
}

impl DecodeArgs {
    /// Get log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Dump file named by the input path
    pub fn dump_file(&self) -> DumpFile {
        let name = self
            .file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file.to_string_lossy().into_owned());
        DumpFile::new(name)
    }

    /// Record kind from the flag or the catalogue
    pub fn record_kind(&self) -> Result<RecordKind> {
        match self.kind {
            Some(kind) => Ok(kind),
            None => Ok(self.dump_file().info()?.kind),
        }
    }

    /// Stream configuration: the catalogue preset with the flags applied
    pub fn stream_config(&self) -> Result<StreamConfig> {
        let dump = self.dump_file();
        let mut config = match dump.info() {
            Ok(_) => StreamConfig::for_dump(&dump)?,
            Err(_) => StreamConfig::default(),
        };

        if self.header {
            config = config.with_skip_header(true);
        }
        if self.lenient_dates {
            config = config.with_date_policy(DatePolicy::Lenient);
        }
        if self.skip_mismatched {
            config = config.with_mismatch_policy(MismatchPolicy::Skip);
        }

        config.validate()?;
        Ok(config)
    }
}
