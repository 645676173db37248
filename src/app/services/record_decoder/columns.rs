//! Positional, schema-checked access to the columns of a raw record
//!
//! Each accessor reads column `index`, checks that the schema declares the
//! matching kind, and applies the coercion rules of that kind.

use chrono::NaiveDate;
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

use super::dates::parse_date;
use super::schema::{FieldKind, FieldSchema};
use crate::app::services::tokenizer::RawRecord;
use crate::config::{DatePolicy, DecoderOptions};
use crate::{Error, Result};

/// Columns of one record, bound to a schema
#[derive(Debug)]
pub struct Columns<'a> {
    record: &'a RawRecord,
    schema: &'static [FieldSchema],
    options: &'a DecoderOptions,
}

impl<'a> Columns<'a> {
    /// Bind a record to a schema; their lengths must agree
    pub fn new(
        record: &'a RawRecord,
        schema: &'static [FieldSchema],
        options: &'a DecoderOptions,
    ) -> Result<Self> {
        if record.len() != schema.len() {
            return Err(Error::SchemaMismatch {
                expected: schema.len(),
                found: record.len(),
            });
        }
        Ok(Self {
            record,
            schema,
            options,
        })
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.schema.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schema.is_empty()
    }

    /// Raw text of a column, without any coercion
    pub fn raw(&self, index: usize) -> Option<&'a str> {
        self.record.get(index)
    }

    fn column(&self, index: usize, expected: &'static str) -> Result<(&'static FieldSchema, &'a str)> {
        let schema = self.schema.get(index).ok_or_else(|| {
            Error::schema(format!(
                "column {} is outside the {}-column schema",
                index,
                self.schema.len()
            ))
        })?;

        if schema.kind.label() != expected {
            return Err(Error::schema(format!(
                "column {} ('{}') is declared as {} but read as {}",
                index,
                schema.name,
                schema.kind.label(),
                expected
            )));
        }

        // lengths were checked in `new`
        let value = self.record.get(index).unwrap_or_default();
        Ok((schema, value))
    }

    fn empty_required(index: usize, schema: &FieldSchema) -> Error {
        Error::decode(index, schema.name, "", "required column is empty")
    }

    /// Text column
    pub fn text(&self, index: usize) -> Result<String> {
        let (schema, value) = self.column(index, "text")?;
        if schema.required && value.is_empty() {
            return Err(Self::empty_required(index, schema));
        }
        Ok(value.to_string())
    }

    /// Integer column; empty optional columns decode to zero
    pub fn integer<T>(&self, index: usize) -> Result<T>
    where
        T: FromStr + Default,
        T::Err: Display,
    {
        let (schema, value) = self.column(index, "integer")?;
        parse_number(index, schema, value)
    }

    /// Float column; empty optional columns decode to zero
    pub fn float(&self, index: usize) -> Result<f64> {
        let (schema, value) = self.column(index, "float")?;
        parse_number(index, schema, value)
    }

    /// Presence flag; anything but the schema token is false
    pub fn flag(&self, index: usize) -> Result<bool> {
        let (schema, value) = self.column(index, "flag")?;
        match schema.kind {
            FieldKind::Flag { token } => Ok(value == token),
            _ => Ok(false),
        }
    }

    /// Separator-split list; an empty column is an empty list
    pub fn list(&self, index: usize) -> Result<Vec<String>> {
        let (schema, value) = self.column(index, "list")?;
        if value.is_empty() {
            if schema.required {
                return Err(Self::empty_required(index, schema));
            }
            return Ok(Vec::new());
        }
        match schema.kind {
            FieldKind::List { separator } => {
                Ok(value.split(separator).map(str::to_string).collect())
            }
            _ => Ok(vec![value.to_string()]),
        }
    }

    /// Date column; empty is `None`, unknown formats follow the date policy
    pub fn date(&self, index: usize) -> Result<Option<NaiveDate>> {
        let (schema, value) = self.column(index, "date")?;
        if value.is_empty() {
            return Ok(None);
        }
        if let Some(date) = parse_date(value) {
            return Ok(Some(date));
        }

        match self.options.date_policy {
            DatePolicy::Strict => Err(Error::decode(
                index,
                schema.name,
                value,
                "no known date format matches",
            )),
            DatePolicy::Lenient => {
                warn!(
                    "line {}: column {} ('{}') has unrecognised date '{}', treating as absent",
                    self.record.line(),
                    index,
                    schema.name,
                    value
                );
                Ok(None)
            }
        }
    }
}

fn parse_number<T>(index: usize, schema: &FieldSchema, value: &str) -> Result<T>
where
    T: FromStr + Default,
    T::Err: Display,
{
    if value.is_empty() {
        if schema.required {
            return Err(Columns::empty_required(index, schema));
        }
        return Ok(T::default());
    }
    value
        .parse::<T>()
        .map_err(|e| Error::decode(index, schema.name, value, e.to_string()))
}
