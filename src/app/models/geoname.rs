//! Gazetteer records: `allCountries`, the city extracts and their daily changes

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::app::services::record_decoder::{
    Columns, EncodeRecord, FieldSchema, FromRecord, format_date, format_float, format_list,
};

// =============================================================================
// Geoname
// =============================================================================

/// One geographical point from the main gazetteer table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geoname {
    /// Integer id of the record in the GeoNames database
    pub id: u32,

    /// Name of the point (UTF-8)
    pub name: String,

    /// Name in plain ASCII characters
    pub ascii_name: String,

    /// Alternate names, including automatic ASCII transliterations
    pub alternate_names: Vec<String>,

    /// WGS84 decimal degrees
    pub latitude: f64,
    pub longitude: f64,

    /// Feature class, one character (see the GeoNames feature codes)
    pub feature_class: String,
    pub feature_code: String,

    /// ISO-3166 two-letter country code
    pub country_code: String,

    /// Alternate ISO-3166 country codes
    pub alternate_country_codes: Vec<String>,

    pub admin1_code: String,
    pub admin2_code: String,
    pub admin3_code: String,
    pub admin4_code: String,

    pub population: i64,

    /// Elevation in meters, zero when unknown
    pub elevation: i32,

    /// Digital elevation model value in meters (srtm3 or gtopo30)
    pub dem: i32,

    /// IANA time zone id
    pub timezone: String,

    /// Date of last modification
    pub modification_date: Option<NaiveDate>,
}

impl FromRecord for Geoname {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::integer("geonameid").required(),
        FieldSchema::text("name").required(),
        FieldSchema::text("asciiname"),
        FieldSchema::list("alternatenames"),
        FieldSchema::float("latitude"),
        FieldSchema::float("longitude"),
        FieldSchema::text("feature class"),
        FieldSchema::text("feature code"),
        FieldSchema::text("country code"),
        FieldSchema::list("cc2"),
        FieldSchema::text("admin1 code"),
        FieldSchema::text("admin2 code"),
        FieldSchema::text("admin3 code"),
        FieldSchema::text("admin4 code"),
        FieldSchema::integer("population"),
        FieldSchema::integer("elevation"),
        FieldSchema::integer("dem"),
        FieldSchema::text("timezone"),
        FieldSchema::date("modification date"),
    ];

    fn from_columns(columns: &Columns<'_>) -> Result<Self> {
        Ok(Self {
            id: columns.integer(0)?,
            name: columns.text(1)?,
            ascii_name: columns.text(2)?,
            alternate_names: columns.list(3)?,
            latitude: columns.float(4)?,
            longitude: columns.float(5)?,
            feature_class: columns.text(6)?,
            feature_code: columns.text(7)?,
            country_code: columns.text(8)?,
            alternate_country_codes: columns.list(9)?,
            admin1_code: columns.text(10)?,
            admin2_code: columns.text(11)?,
            admin3_code: columns.text(12)?,
            admin4_code: columns.text(13)?,
            population: columns.integer(14)?,
            elevation: columns.integer(15)?,
            dem: columns.integer(16)?,
            timezone: columns.text(17)?,
            modification_date: columns.date(18)?,
        })
    }
}

impl EncodeRecord for Geoname {
    fn encode(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.ascii_name.clone(),
            format_list(&self.alternate_names),
            format_float(self.latitude),
            format_float(self.longitude),
            self.feature_class.clone(),
            self.feature_code.clone(),
            self.country_code.clone(),
            format_list(&self.alternate_country_codes),
            self.admin1_code.clone(),
            self.admin2_code.clone(),
            self.admin3_code.clone(),
            self.admin4_code.clone(),
            self.population.to_string(),
            self.elevation.to_string(),
            self.dem.to_string(),
            self.timezone.clone(),
            format_date(self.modification_date),
        ]
    }
}

// =============================================================================
// Deleted Geoname
// =============================================================================

/// A gazetteer record removed on a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeonameDelete {
    pub id: u32,
    pub name: String,
    pub comment: String,
}

impl FromRecord for GeonameDelete {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::integer("geonameId").required(),
        FieldSchema::text("name").required(),
        FieldSchema::text("comment"),
    ];

    fn from_columns(columns: &Columns<'_>) -> Result<Self> {
        Ok(Self {
            id: columns.integer(0)?,
            name: columns.text(1)?,
            comment: columns.text(2)?,
        })
    }
}

impl EncodeRecord for GeonameDelete {
    fn encode(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone(), self.comment.clone()]
    }
}
