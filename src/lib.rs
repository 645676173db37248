//! GeoNames Stream Library
//!
//! A Rust library for decoding GeoNames export dumps into typed records one
//! row at a time, reading zipped dumps straight from the archive bytes.
//!
//! This library provides tools for:
//! - Tokenizing tab-separated text with configurable quoting and field counts
//! - Scanning ZIP archives forward-only and streaming a single entry
//! - Decoding raw records into typed models for every dump file kind
//! - Driving record handlers with early stop and mismatch policies

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod archive;
        pub mod pipeline;
        pub mod record_decoder;
        pub mod tokenizer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{DumpFile, RecordKind};
pub use app::services::pipeline::{Flow, StreamStats};
pub use config::StreamConfig;
pub use error::{Error, ParseErrorKind, Result};
