//! Administrative division code tables

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::app::services::record_decoder::{Columns, EncodeRecord, FieldSchema, FromRecord};

/// First-level division from `admin1CodesASCII.txt`; code is `CC.A1`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminDivision {
    pub code: String,
    pub name: String,
    pub ascii_name: String,
    pub geoname_id: u32,
}

impl FromRecord for AdminDivision {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::text("code").required(),
        FieldSchema::text("name"),
        FieldSchema::text("ascii name").required(),
        FieldSchema::integer("geonameId").required(),
    ];

    fn from_columns(columns: &Columns<'_>) -> Result<Self> {
        Ok(Self {
            code: columns.text(0)?,
            name: columns.text(1)?,
            ascii_name: columns.text(2)?,
            geoname_id: columns.integer(3)?,
        })
    }
}

impl EncodeRecord for AdminDivision {
    fn encode(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            self.ascii_name.clone(),
            self.geoname_id.to_string(),
        ]
    }
}

/// Second-level division from `admin2Codes.txt`; code is `CC.A1.A2`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSubdivision {
    pub code: String,
    pub name: String,
    pub ascii_name: String,
    pub geoname_id: u32,
}

impl AdminSubdivision {
    /// Code of the enclosing first-level division
    pub fn parent_code(&self) -> Option<&str> {
        self.code.rsplit_once('.').map(|(parent, _)| parent)
    }
}

impl FromRecord for AdminSubdivision {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::text("concatenated codes").required(),
        FieldSchema::text("name").required(),
        FieldSchema::text("asciiname").required(),
        FieldSchema::integer("geonameId").required(),
    ];

    fn from_columns(columns: &Columns<'_>) -> Result<Self> {
        Ok(Self {
            code: columns.text(0)?,
            name: columns.text(1)?,
            ascii_name: columns.text(2)?,
            geoname_id: columns.integer(3)?,
        })
    }
}

impl EncodeRecord for AdminSubdivision {
    fn encode(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            self.ascii_name.clone(),
            self.geoname_id.to_string(),
        ]
    }
}

/// Fifth-level administrative code of a geoname
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminCode5 {
    pub geoname_id: u32,
    pub code: String,
}

impl FromRecord for AdminCode5 {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::integer("geonameId").required(),
        FieldSchema::text("adm5code").required(),
    ];

    fn from_columns(columns: &Columns<'_>) -> Result<Self> {
        Ok(Self {
            geoname_id: columns.integer(0)?,
            code: columns.text(1)?,
        })
    }
}

impl EncodeRecord for AdminCode5 {
    fn encode(&self) -> Vec<String> {
        vec![self.geoname_id.to_string(), self.code.clone()]
    }
}
