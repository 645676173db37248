use clap::{CommandFactory, Parser};
use geonames_stream::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    match commands::run(command) {
        Ok(()) => process::exit(0),
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("GeoNames Stream - Streaming decoder for GeoNames export dumps");
    println!("=============================================================");
    println!();
    let _ = Args::command().print_help();
    println!();
    println!("EXAMPLES:");
    println!("    # Print the first ten places of a zipped dump:");
    println!("    geonames-stream decode cities500.zip --limit 10");
    println!();
    println!("    # Decode a renamed file as alternate names, as JSON lines:");
    println!("    geonames-stream decode names.txt --kind alternate-name --format json");
    println!();
    println!("    # List the known dump files:");
    println!("    geonames-stream files");
}
