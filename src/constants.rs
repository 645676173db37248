//! Application constants for GeoNames stream decoding
//!
//! This module contains the dump catalogue, the textual conventions of the
//! dump files and the buffer sizes used by the streaming readers.

use crate::app::models::{DumpFileInfo, RecordKind};

// =============================================================================
// Dump Location
// =============================================================================

/// Base URL of the public GeoNames export directory
pub const DUMP_BASE_URL: &str = "https://download.geonames.org/export/dump/";

/// Placeholder replaced by a `YYYY-MM-DD` date in the daily change files
pub const DATE_PLACEHOLDER: &str = "{date}";

/// Extension of archived dumps
pub const ARCHIVE_EXTENSION: &str = ".zip";

/// Extension of the text entry inside an archived dump
pub const TEXT_EXTENSION: &str = ".txt";

// =============================================================================
// Dump Text Conventions
// =============================================================================

/// Column delimiter of every dump file
pub const DUMP_DELIMITER: char = '\t';

/// Comment marker at the start of a line
pub const DUMP_COMMENT: char = '#';

/// Value of a set boolean column
pub const FLAG_TOKEN: &str = "1";

/// Separator inside list columns
pub const LIST_SEPARATOR: char = ',';

// =============================================================================
// Streaming Buffers
// =============================================================================

/// Capacity of the buffered reader in front of the tokenizer
pub const READ_BUFFER_CAPACITY: usize = 64 * 1024;

// =============================================================================
// ZIP Container Format
// =============================================================================

/// Local file header signature, `PK\x03\x04`
pub const ZIP_LOCAL_HEADER_SIGNATURE: u32 = 0x0403_4b50;

/// Central directory file header signature
pub const ZIP_CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x0201_4b50;

/// End of central directory record signature
pub const ZIP_END_OF_CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x0605_4b50;

/// ZIP64 end of central directory record signature
pub const ZIP64_END_OF_CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x0606_4b50;

/// Optional signature in front of a data descriptor
pub const ZIP_DATA_DESCRIPTOR_SIGNATURE: u32 = 0x0807_4b50;

/// Extra field id of the ZIP64 extended information
pub const ZIP64_EXTRA_FIELD_ID: u16 = 0x0001;

/// General purpose flag: entry is encrypted
pub const ZIP_FLAG_ENCRYPTED: u16 = 0x0001;

/// General purpose flag: sizes and CRC follow the data in a descriptor
pub const ZIP_FLAG_DATA_DESCRIPTOR: u16 = 0x0008;

// =============================================================================
// Dump Catalogue
// =============================================================================

const fn dump(name: &'static str, kind: RecordKind) -> DumpFileInfo {
    DumpFileInfo {
        name,
        kind,
        has_header: false,
    }
}

const fn dump_with_header(name: &'static str, kind: RecordKind) -> DumpFileInfo {
    DumpFileInfo {
        name,
        kind,
        has_header: true,
    }
}

/// Every known dump file
///
/// Daily change files carry [`DATE_PLACEHOLDER`] in their name.
pub const DUMP_FILES: &[DumpFileInfo] = &[
    // Gazetteer extracts
    dump("cities500.zip", RecordKind::Geoname),
    dump("cities1000.zip", RecordKind::Geoname),
    dump("cities5000.zip", RecordKind::Geoname),
    dump("cities15000.zip", RecordKind::Geoname),
    dump("allCountries.zip", RecordKind::Geoname),
    dump("no-country.zip", RecordKind::Geoname),
    dump("alternateNamesV2.zip", RecordKind::AlternateName),
    // Reference tables
    dump_with_header("iso-languagecodes.txt", RecordKind::Language),
    dump_with_header("timeZones.txt", RecordKind::TimeZone),
    dump("countryInfo.txt", RecordKind::Country),
    dump("featureCodes_bg.txt", RecordKind::FeatureCode),
    dump("featureCodes_en.txt", RecordKind::FeatureCode),
    dump("featureCodes_nb.txt", RecordKind::FeatureCode),
    dump("featureCodes_nn.txt", RecordKind::FeatureCode),
    dump("featureCodes_no.txt", RecordKind::FeatureCode),
    dump("featureCodes_ru.txt", RecordKind::FeatureCode),
    dump("featureCodes_sv.txt", RecordKind::FeatureCode),
    dump("hierarchy.zip", RecordKind::Hierarchy),
    dump_with_header("shapes_all_low.zip", RecordKind::Shape),
    dump("userTags.zip", RecordKind::UserTag),
    dump("admin1CodesASCII.txt", RecordKind::AdminDivision),
    dump("admin2Codes.txt", RecordKind::AdminSubdivision),
    dump("adminCode5.zip", RecordKind::AdminCode5),
    // Daily changes
    dump(
        "alternateNamesDeletes-{date}.txt",
        RecordKind::AlternateNameDelete,
    ),
    dump(
        "alternateNamesModifications-{date}.txt",
        RecordKind::AlternateNameModification,
    ),
    dump("deletes-{date}.txt", RecordKind::GeonameDelete),
    dump("modifications-{date}.txt", RecordKind::Geoname),
];
