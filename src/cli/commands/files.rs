//! Files command implementation
//!
//! Prints the catalogue of known GeoNames dump files.

use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::io::{self, Write};

use crate::app::models::{DumpFile, DumpFileInfo, RecordKind};
use crate::cli::args::{FilesArgs, OutputFormat};
use crate::constants::DUMP_FILES;

/// One catalogue row as printed by the command
#[derive(Debug, Serialize)]
struct CatalogueEntry {
    name: &'static str,
    kind: RecordKind,
    archive: bool,
    header: bool,
    dated: bool,
    url: String,
}

impl From<&DumpFileInfo> for CatalogueEntry {
    fn from(info: &DumpFileInfo) -> Self {
        let dump = DumpFile::from(info);
        Self {
            name: info.name,
            kind: info.kind,
            archive: dump.is_archive(),
            header: info.has_header,
            dated: info.is_dated(),
            url: dump.url(),
        }
    }
}

/// Run the files command
pub fn run_files(args: FilesArgs) -> Result<()> {
    let entries: Vec<CatalogueEntry> = DUMP_FILES.iter().map(CatalogueEntry::from).collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_catalogue(&mut out, &entries, args.format).context("failed to write catalogue")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

fn write_catalogue<W: Write>(
    out: &mut W,
    entries: &[CatalogueEntry],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Human => {
            writeln!(out, "{}", "GeoNames dump files".green().bold())?;
            writeln!(out, "{}", "===================".green())?;
            for entry in entries {
                let mut notes = Vec::new();
                if entry.archive {
                    notes.push("zip");
                }
                if entry.header {
                    notes.push("header row");
                }
                if entry.dated {
                    notes.push("daily");
                }
                writeln!(
                    out,
                    "  {:<40} {:<28} {}",
                    entry.name,
                    entry.kind.to_string().cyan(),
                    notes.join(", ").dimmed()
                )?;
            }
            writeln!(out)?;
            writeln!(out, "{} files", entries.len())
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, entries)?;
            writeln!(out)
        }
        OutputFormat::Tsv => {
            writeln!(out, "name\tkind\tarchive\theader\turl")?;
            for entry in entries {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}\t{}",
                    entry.name, entry.kind, entry.archive, entry.header, entry.url
                )?;
            }
            Ok(())
        }
    }
}
