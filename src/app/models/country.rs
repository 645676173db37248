//! Country, language and time zone reference tables

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::app::services::record_decoder::{
    Columns, EncodeRecord, FieldSchema, FromRecord, format_float, format_list,
};

// =============================================================================
// Country
// =============================================================================

/// One row of `countryInfo.txt`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub iso2_code: String,
    pub iso3_code: String,
    pub iso_numeric: String,
    pub fips: String,
    pub name: String,
    pub capital: String,

    /// Area in square kilometres
    pub area: f64,

    pub population: i64,
    pub continent: String,
    pub tld: String,
    pub currency_code: String,
    pub currency_name: String,
    pub phone: String,
    pub postal_code_format: String,
    pub postal_code_regex: String,

    /// Spoken languages, most used first
    pub languages: Vec<String>,

    pub geoname_id: u32,

    /// ISO codes of bordering countries
    pub neighbours: Vec<String>,

    pub equivalent_fips_code: String,
}

impl FromRecord for Country {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::text("ISO").required(),
        FieldSchema::text("ISO3").required(),
        FieldSchema::text("ISO-Numeric").required(),
        FieldSchema::text("fips"),
        FieldSchema::text("Country").required(),
        FieldSchema::text("Capital"),
        FieldSchema::float("Area(in sq km)"),
        FieldSchema::integer("Population"),
        FieldSchema::text("Continent").required(),
        FieldSchema::text("tld"),
        FieldSchema::text("CurrencyCode"),
        FieldSchema::text("CurrencyName"),
        FieldSchema::text("Phone"),
        FieldSchema::text("Postal Code Format"),
        FieldSchema::text("Postal Code Regex"),
        FieldSchema::list("Languages"),
        FieldSchema::integer("geonameid").required(),
        FieldSchema::list("neighbours"),
        FieldSchema::text("EquivalentFipsCode"),
    ];

    fn from_columns(columns: &Columns<'_>) -> Result<Self> {
        Ok(Self {
            iso2_code: columns.text(0)?,
            iso3_code: columns.text(1)?,
            iso_numeric: columns.text(2)?,
            fips: columns.text(3)?,
            name: columns.text(4)?,
            capital: columns.text(5)?,
            area: columns.float(6)?,
            population: columns.integer(7)?,
            continent: columns.text(8)?,
            tld: columns.text(9)?,
            currency_code: columns.text(10)?,
            currency_name: columns.text(11)?,
            phone: columns.text(12)?,
            postal_code_format: columns.text(13)?,
            postal_code_regex: columns.text(14)?,
            languages: columns.list(15)?,
            geoname_id: columns.integer(16)?,
            neighbours: columns.list(17)?,
            equivalent_fips_code: columns.text(18)?,
        })
    }
}

impl EncodeRecord for Country {
    fn encode(&self) -> Vec<String> {
        vec![
            self.iso2_code.clone(),
            self.iso3_code.clone(),
            self.iso_numeric.clone(),
            self.fips.clone(),
            self.name.clone(),
            self.capital.clone(),
            format_float(self.area),
            self.population.to_string(),
            self.continent.clone(),
            self.tld.clone(),
            self.currency_code.clone(),
            self.currency_name.clone(),
            self.phone.clone(),
            self.postal_code_format.clone(),
            self.postal_code_regex.clone(),
            format_list(&self.languages),
            self.geoname_id.to_string(),
            format_list(&self.neighbours),
            self.equivalent_fips_code.clone(),
        ]
    }
}

// =============================================================================
// Language
// =============================================================================

/// One row of `iso-languagecodes.txt`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub iso639_3: String,
    pub iso639_2: String,
    pub iso639_1: String,
    pub name: String,
}

impl FromRecord for Language {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::text("ISO 639-3"),
        FieldSchema::text("ISO 639-2"),
        FieldSchema::text("ISO 639-1"),
        FieldSchema::text("Language Name"),
    ];

    fn from_columns(columns: &Columns<'_>) -> Result<Self> {
        Ok(Self {
            iso639_3: columns.text(0)?,
            iso639_2: columns.text(1)?,
            iso639_1: columns.text(2)?,
            name: columns.text(3)?,
        })
    }
}

impl EncodeRecord for Language {
    fn encode(&self) -> Vec<String> {
        vec![
            self.iso639_3.clone(),
            self.iso639_2.clone(),
            self.iso639_1.clone(),
            self.name.clone(),
        ]
    }
}

// =============================================================================
// Time Zone
// =============================================================================

/// One row of `timeZones.txt`; offsets are in hours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeZone {
    pub country_code: String,
    pub id: String,

    /// GMT offset on 1 January
    pub gmt_offset: f64,

    /// DST offset on 1 July
    pub dst_offset: f64,

    /// Offset independent of DST
    pub raw_offset: f64,
}

impl FromRecord for TimeZone {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::text("CountryCode").required(),
        FieldSchema::text("TimeZoneId").required(),
        FieldSchema::float("GMT offset").required(),
        FieldSchema::float("DST offset").required(),
        FieldSchema::float("rawOffset").required(),
    ];

    fn from_columns(columns: &Columns<'_>) -> Result<Self> {
        Ok(Self {
            country_code: columns.text(0)?,
            id: columns.text(1)?,
            gmt_offset: columns.float(2)?,
            dst_offset: columns.float(3)?,
            raw_offset: columns.float(4)?,
        })
    }
}

impl EncodeRecord for TimeZone {
    fn encode(&self) -> Vec<String> {
        vec![
            self.country_code.clone(),
            self.id.clone(),
            format_float(self.gmt_offset),
            format_float(self.dst_offset),
            format_float(self.raw_offset),
        ]
    }
}
