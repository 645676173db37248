//! Configuration management and validation.
//!
//! Provides the settings of the decode pipeline: tokenizer options, decoder
//! options and the policies applied when a record does not fit, plus presets
//! derived from the dump catalogue.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::models::DumpFile;
use crate::app::services::tokenizer::{FieldCountPolicy, TokenizerOptions};
use crate::{Error, Result};

/// What to do with a date column that matches none of the known formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DatePolicy {
    /// Fail the record with a decode error
    #[default]
    Strict,
    /// Decode as an absent date and log a warning
    Lenient,
}

/// What the pipeline does with a record of the wrong width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MismatchPolicy {
    /// Abort the stream with a field count error
    #[default]
    Fail,
    /// Log, count and skip the record
    Skip,
}

/// Record decoder settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecoderOptions {
    /// Handling of unrecognised dates
    pub date_policy: DatePolicy,
}

impl DecoderOptions {
    /// Decode unrecognised dates as absent instead of failing
    pub fn lenient_dates(mut self) -> Self {
        self.date_policy = DatePolicy::Lenient;
        self
    }
}

/// Complete configuration of one decode stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Tokenizer settings
    pub tokenizer: TokenizerOptions,

    /// Decoder settings
    pub decoder: DecoderOptions,

    /// Field count mismatch handling
    pub mismatch_policy: MismatchPolicy,

    /// The first record is a column header row
    pub skip_header: bool,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerOptions::geonames_dump(),
            decoder: DecoderOptions::default(),
            mismatch_policy: MismatchPolicy::Fail,
            skip_header: false,
        }
    }
}

impl StreamConfig {
    /// Preset for a catalogued dump file
    pub fn for_dump(dump: &DumpFile) -> Result<Self> {
        let info = dump.info()?;
        let config = Self::default().with_skip_header(info.has_header);
        debug!(
            "Configuration for {}: kind {:?}, header row: {}",
            dump.name(),
            info.kind,
            info.has_header
        );
        Ok(config)
    }

    /// Replace the tokenizer settings
    pub fn with_tokenizer(mut self, tokenizer: TokenizerOptions) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Replace the decoder settings
    pub fn with_decoder(mut self, decoder: DecoderOptions) -> Self {
        self.decoder = decoder;
        self
    }

    /// Set the date policy
    pub fn with_date_policy(mut self, date_policy: DatePolicy) -> Self {
        self.decoder.date_policy = date_policy;
        self
    }

    /// Set the field count mismatch policy
    pub fn with_mismatch_policy(mut self, mismatch_policy: MismatchPolicy) -> Self {
        self.mismatch_policy = mismatch_policy;
        self
    }

    /// Treat the first record as a header row
    pub fn with_skip_header(mut self, skip_header: bool) -> Self {
        self.skip_header = skip_header;
        self
    }

    /// Validate the configuration as a whole
    pub fn validate(&self) -> Result<()> {
        self.tokenizer.validate()?;

        if self.mismatch_policy == MismatchPolicy::Skip
            && self.tokenizer.field_count == FieldCountPolicy::Unchecked
        {
            return Err(Error::configuration(
                "skipping mismatched records requires a checked field count",
            ));
        }

        Ok(())
    }
}
