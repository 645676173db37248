//! Alternate names and their daily changes

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::app::services::record_decoder::{
    Columns, EncodeRecord, FieldSchema, FromRecord, format_date, format_flag,
};

/// A name variant of a geoname
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternateName {
    pub id: u32,
    pub geoname_id: u32,

    /// ISO 639 language code, or a pseudo code such as `post`, `iata`,
    /// `link` or `wkdt`
    pub iso_language: String,

    pub name: String,
    pub is_preferred: bool,
    pub is_short: bool,
    pub is_colloquial: bool,
    pub is_historic: bool,

    /// Period in which the name was used
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl AlternateName {
    /// Language column holds an ISO 639-1 code
    pub fn is_alpha2(&self) -> bool {
        self.iso_language.len() == 2
    }

    /// Language column holds an ISO 639-2/3 code
    pub fn is_alpha3(&self) -> bool {
        self.iso_language.len() == 3
    }
}

impl FromRecord for AlternateName {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::integer("alternateNameId").required(),
        FieldSchema::integer("geonameid").required(),
        FieldSchema::text("isolanguage"),
        FieldSchema::text("alternate name").required(),
        FieldSchema::flag("isPreferredName"),
        FieldSchema::flag("isShortName"),
        FieldSchema::flag("isColloquial"),
        FieldSchema::flag("isHistoric"),
        FieldSchema::date("from"),
        FieldSchema::date("to"),
    ];

    fn from_columns(columns: &Columns<'_>) -> Result<Self> {
        Ok(Self {
            id: columns.integer(0)?,
            geoname_id: columns.integer(1)?,
            iso_language: columns.text(2)?,
            name: columns.text(3)?,
            is_preferred: columns.flag(4)?,
            is_short: columns.flag(5)?,
            is_colloquial: columns.flag(6)?,
            is_historic: columns.flag(7)?,
            from: columns.date(8)?,
            to: columns.date(9)?,
        })
    }
}

impl EncodeRecord for AlternateName {
    fn encode(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.geoname_id.to_string(),
            self.iso_language.clone(),
            self.name.clone(),
            format_flag(self.is_preferred),
            format_flag(self.is_short),
            format_flag(self.is_colloquial),
            format_flag(self.is_historic),
            format_date(self.from),
            format_date(self.to),
        ]
    }
}

/// An alternate name added or changed on a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternateNameModification {
    pub id: u32,
    pub geoname_id: u32,
    pub iso_language: String,
    pub name: String,
    pub is_preferred: bool,
    pub is_short: bool,
    pub is_colloquial: bool,
    pub is_historic: bool,
}

impl FromRecord for AlternateNameModification {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::integer("alternateNameId").required(),
        FieldSchema::integer("geonameid").required(),
        FieldSchema::text("isolanguage"),
        FieldSchema::text("alternate name").required(),
        FieldSchema::flag("isPreferredName"),
        FieldSchema::flag("isShortName"),
        FieldSchema::flag("isColloquial"),
        FieldSchema::flag("isHistoric"),
    ];

    fn from_columns(columns: &Columns<'_>) -> Result<Self> {
        Ok(Self {
            id: columns.integer(0)?,
            geoname_id: columns.integer(1)?,
            iso_language: columns.text(2)?,
            name: columns.text(3)?,
            is_preferred: columns.flag(4)?,
            is_short: columns.flag(5)?,
            is_colloquial: columns.flag(6)?,
            is_historic: columns.flag(7)?,
        })
    }
}

impl EncodeRecord for AlternateNameModification {
    fn encode(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.geoname_id.to_string(),
            self.iso_language.clone(),
            self.name.clone(),
            format_flag(self.is_preferred),
            format_flag(self.is_short),
            format_flag(self.is_colloquial),
            format_flag(self.is_historic),
        ]
    }
}

/// An alternate name removed on a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternateNameDelete {
    pub id: u32,
    pub geoname_id: u32,
    pub name: String,
    pub comment: String,
}

impl FromRecord for AlternateNameDelete {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::integer("alternateNameId").required(),
        FieldSchema::integer("geonameId").required(),
        FieldSchema::text("name").required(),
        FieldSchema::text("comment"),
    ];

    fn from_columns(columns: &Columns<'_>) -> Result<Self> {
        Ok(Self {
            id: columns.integer(0)?,
            geoname_id: columns.integer(1)?,
            name: columns.text(2)?,
            comment: columns.text(3)?,
        })
    }
}

impl EncodeRecord for AlternateNameDelete {
    fn encode(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.geoname_id.to_string(),
            self.name.clone(),
            self.comment.clone(),
        ]
    }
}
