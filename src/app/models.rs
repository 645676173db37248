//! Data models for GeoNames dump records
//!
//! One struct per record kind found in the export directory, each with its
//! positional column schema, plus the dump file catalogue types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

pub mod admin;
pub mod alternate_name;
pub mod country;
pub mod dump;
pub mod feature;
pub mod geoname;

pub use admin::{AdminCode5, AdminDivision, AdminSubdivision};
pub use alternate_name::{AlternateName, AlternateNameDelete, AlternateNameModification};
pub use country::{Country, Language, TimeZone};
pub use dump::{DumpFile, DumpFileInfo};
pub use feature::{FeatureCode, Hierarchy, Shape, UserTag};
pub use geoname::{Geoname, GeonameDelete};

// =============================================================================
// Record Kinds
// =============================================================================

/// Record kinds held by the dump files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    Geoname,
    GeonameDelete,
    AlternateName,
    AlternateNameModification,
    AlternateNameDelete,
    Country,
    Language,
    TimeZone,
    FeatureCode,
    Hierarchy,
    Shape,
    UserTag,
    AdminDivision,
    AdminSubdivision,
    AdminCode5,
}

impl RecordKind {
    /// Every kind, in catalogue order
    pub const ALL: [RecordKind; 15] = [
        RecordKind::Geoname,
        RecordKind::GeonameDelete,
        RecordKind::AlternateName,
        RecordKind::AlternateNameModification,
        RecordKind::AlternateNameDelete,
        RecordKind::Country,
        RecordKind::Language,
        RecordKind::TimeZone,
        RecordKind::FeatureCode,
        RecordKind::Hierarchy,
        RecordKind::Shape,
        RecordKind::UserTag,
        RecordKind::AdminDivision,
        RecordKind::AdminSubdivision,
        RecordKind::AdminCode5,
    ];

    /// Kebab-case name, as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::Geoname => "geoname",
            RecordKind::GeonameDelete => "geoname-delete",
            RecordKind::AlternateName => "alternate-name",
            RecordKind::AlternateNameModification => "alternate-name-modification",
            RecordKind::AlternateNameDelete => "alternate-name-delete",
            RecordKind::Country => "country",
            RecordKind::Language => "language",
            RecordKind::TimeZone => "time-zone",
            RecordKind::FeatureCode => "feature-code",
            RecordKind::Hierarchy => "hierarchy",
            RecordKind::Shape => "shape",
            RecordKind::UserTag => "user-tag",
            RecordKind::AdminDivision => "admin-division",
            RecordKind::AdminSubdivision => "admin-subdivision",
            RecordKind::AdminCode5 => "admin-code5",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RecordKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                Error::configuration(format!(
                    "unknown record kind '{}' (expected one of: {})",
                    s,
                    RecordKind::ALL
                        .iter()
                        .map(RecordKind::name)
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}
