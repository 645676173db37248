//! Command implementations for the GeoNames stream CLI
//!
//! Each command lives in its own module:
//! - `decode`: stream a dump file and print its records
//! - `files`: list the dump catalogue

pub mod decode;
pub mod files;
pub mod shared;

use anyhow::Result;

use crate::cli::args::Commands;

/// Dispatch a parsed subcommand
pub fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Decode(decode_args) => decode::run_decode(decode_args).map(|_| ()),
        Commands::Files(files_args) => files::run_files(files_args),
    }
}
