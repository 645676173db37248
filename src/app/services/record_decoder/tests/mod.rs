//! Test utilities for the record decoder

use chrono::NaiveDate;

use super::{Columns, EncodeRecord, FieldSchema, FromRecord, format_date, format_flag, format_float, format_list};
use crate::Result;
use crate::app::services::tokenizer::RawRecord;


/// Small record kind covering every column kind
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub id: u32,
    pub name: String,
    pub population: i64,
    pub latitude: f64,
    pub preferred: bool,
    pub codes: Vec<String>,
    pub updated: Option<NaiveDate>,
}

impl FromRecord for Sample {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::integer("id").required(),
        FieldSchema::text("name").required(),
        FieldSchema::integer("population"),
        FieldSchema::float("latitude"),
        FieldSchema::flag("preferred"),
        FieldSchema::list("codes"),
        FieldSchema::date("updated"),
    ];

    fn from_columns(columns: &Columns<'_>) -> Result<Self> {
        Ok(Self {
            id: columns.integer(0)?,
            name: columns.text(1)?,
            population: columns.integer(2)?,
            latitude: columns.float(3)?,
            preferred: columns.flag(4)?,
            codes: columns.list(5)?,
            updated: columns.date(6)?,
        })
    }
}

impl EncodeRecord for Sample {
    fn encode(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.population.to_string(),
            format_float(self.latitude),
            format_flag(self.preferred),
            format_list(&self.codes),
            format_date(self.updated),
        ]
    }
}

/// Raw record from literal fields
pub fn raw(fields: &[&str]) -> RawRecord {
    RawRecord::from_fields(fields.iter().copied())
}
