//! Dump file names and the catalogue lookup
//!
//! A [`DumpFile`] is the name of one file in the GeoNames export directory.
//! Its catalogue entry says which record kind it holds and whether the first
//! row is a column header.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::RecordKind;
use crate::constants::{
    ARCHIVE_EXTENSION, DATE_PLACEHOLDER, DUMP_BASE_URL, DUMP_FILES, TEXT_EXTENSION,
};
use crate::{Error, Result};

/// Catalogue entry for one dump file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DumpFileInfo {
    /// File name, with `{date}` for the daily change files
    pub name: &'static str,

    /// Record kind of every row
    pub kind: RecordKind,

    /// The first row holds column names
    pub has_header: bool,
}

impl DumpFileInfo {
    /// Name contains the date placeholder
    pub fn is_dated(&self) -> bool {
        self.name.contains(DATE_PLACEHOLDER)
    }

    /// Whether `name` is this entry, filling the date placeholder if present
    fn matches(&self, name: &str) -> bool {
        match self.name.split_once(DATE_PLACEHOLDER) {
            None => self.name == name,
            Some((prefix, suffix)) => {
                name.len() > prefix.len() + suffix.len()
                    && name.starts_with(prefix)
                    && name.ends_with(suffix)
                    && NaiveDate::parse_from_str(
                        &name[prefix.len()..name.len() - suffix.len()],
                        "%Y-%m-%d",
                    )
                    .is_ok()
            }
        }
    }
}

/// Name of a file in the dump directory
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DumpFile(String);

impl DumpFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The file name as given
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Catalogue entry, matching dated names against their pattern
    pub fn info(&self) -> Result<&'static DumpFileInfo> {
        let base = self.base_name();
        DUMP_FILES
            .iter()
            .find(|info| info.matches(base))
            .ok_or_else(|| Error::unknown_dump(self.name()))
    }

    /// The file is a ZIP archive
    pub fn is_archive(&self) -> bool {
        self.base_name().ends_with(ARCHIVE_EXTENSION)
    }

    /// Name of the text entry: `.zip` becomes `.txt` on the base name
    pub fn text_filename(&self) -> String {
        let base = self.base_name();
        match base.strip_suffix(ARCHIVE_EXTENSION) {
            Some(stem) => format!("{}{}", stem, TEXT_EXTENSION),
            None => base.to_string(),
        }
    }

    /// Download URL in the public export directory
    pub fn url(&self) -> String {
        format!("{}{}", DUMP_BASE_URL, self.base_name())
    }

    /// Fill the `{date}` placeholder of a daily change file
    pub fn for_date(&self, date: NaiveDate) -> Self {
        Self(
            self.0
                .replace(DATE_PLACEHOLDER, &date.format("%Y-%m-%d").to_string()),
        )
    }

    fn base_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl From<&DumpFileInfo> for DumpFile {
    fn from(info: &DumpFileInfo) -> Self {
        Self::new(info.name)
    }
}

impl fmt::Display for DumpFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
