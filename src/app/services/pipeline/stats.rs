//! Counters reported at the end of a decode stream

use serde::{Deserialize, Serialize};

/// Progress of one stream
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamStats {
    /// Physical lines consumed, comments and blank lines included
    pub lines_read: usize,

    /// Records produced by the tokenizer, header row included
    pub records_read: usize,

    /// Records decoded and handed to the handler
    pub records_decoded: usize,

    /// Records dropped for a field count mismatch
    pub records_skipped: usize,

    /// The handler asked to stop before the end of input
    pub stopped_early: bool,
}

impl StreamStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of data records that were skipped, as a percentage
    pub fn skip_rate(&self) -> f64 {
        let data_records = self.records_decoded + self.records_skipped;
        if data_records == 0 {
            0.0
        } else {
            (self.records_skipped as f64 / data_records as f64) * 100.0
        }
    }

    /// Every data record was decoded
    pub fn is_clean(&self) -> bool {
        self.records_skipped == 0
    }
}
