//! Feature codes, hierarchy links, shapes and user tags

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::app::services::record_decoder::{Columns, EncodeRecord, FieldSchema, FromRecord};

/// Feature class and code description, e.g. `P.PPLC`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCode {
    pub code: String,
    pub name: String,
    pub description: String,
}

impl FeatureCode {
    /// Feature class letter, the part before the dot
    pub fn class(&self) -> &str {
        self.code.split('.').next().unwrap_or_default()
    }
}

impl FromRecord for FeatureCode {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::text("code").required(),
        FieldSchema::text("name").required(),
        FieldSchema::text("description"),
    ];

    fn from_columns(columns: &Columns<'_>) -> Result<Self> {
        Ok(Self {
            code: columns.text(0)?,
            name: columns.text(1)?,
            description: columns.text(2)?,
        })
    }
}

impl EncodeRecord for FeatureCode {
    fn encode(&self) -> Vec<String> {
        vec![self.code.clone(), self.name.clone(), self.description.clone()]
    }
}

/// Parent/child link between two geonames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hierarchy {
    pub parent: u32,
    pub child: u32,

    /// `ADM` for administrative links, free text otherwise
    pub link_type: String,
}

impl FromRecord for Hierarchy {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::integer("parent").required(),
        FieldSchema::integer("child").required(),
        FieldSchema::text("type"),
    ];

    fn from_columns(columns: &Columns<'_>) -> Result<Self> {
        Ok(Self {
            parent: columns.integer(0)?,
            child: columns.integer(1)?,
            link_type: columns.text(2)?,
        })
    }
}

impl EncodeRecord for Hierarchy {
    fn encode(&self) -> Vec<String> {
        vec![
            self.parent.to_string(),
            self.child.to_string(),
            self.link_type.clone(),
        ]
    }
}

/// Country outline as a GeoJSON geometry string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub geoname_id: u32,
    pub geo_json: String,
}

impl FromRecord for Shape {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::integer("geoNameId").required(),
        FieldSchema::text("geoJSON").required(),
    ];

    fn from_columns(columns: &Columns<'_>) -> Result<Self> {
        Ok(Self {
            geoname_id: columns.integer(0)?,
            geo_json: columns.text(1)?,
        })
    }
}

impl EncodeRecord for Shape {
    fn encode(&self) -> Vec<String> {
        vec![self.geoname_id.to_string(), self.geo_json.clone()]
    }
}

/// Tag attached to a geoname by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTag {
    pub geoname_id: u32,
    pub tag: String,
}

impl FromRecord for UserTag {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::integer("geonameId").required(),
        FieldSchema::text("tag").required(),
    ];

    fn from_columns(columns: &Columns<'_>) -> Result<Self> {
        Ok(Self {
            geoname_id: columns.integer(0)?,
            tag: columns.text(1)?,
        })
    }
}

impl EncodeRecord for UserTag {
    fn encode(&self) -> Vec<String> {
        vec![self.geoname_id.to_string(), self.tag.clone()]
    }
}
