//! Field schemas and the record decoding traits
//!
//! A schema is a static, positional list of [`FieldSchema`] entries, one per
//! column. Record kinds declare theirs through [`FromRecord::SCHEMA`].

use super::columns::Columns;
use crate::Result;
use crate::constants::{FLAG_TOKEN, LIST_SEPARATOR};

/// Semantic type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Float,
    /// True when the column equals `token`, false otherwise
    Flag { token: &'static str },
    /// Split on `separator`; an empty column is an empty list
    List { separator: char },
    /// Date in one of the accepted formats; empty is absent
    Date,
}

impl FieldKind {
    /// Short label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::Flag { .. } => "flag",
            FieldKind::List { .. } => "list",
            FieldKind::Date => "date",
        }
    }
}

/// How one column is decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSchema {
    const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    pub const fn text(name: &'static str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    pub const fn float(name: &'static str) -> Self {
        Self::new(name, FieldKind::Float)
    }

    /// Flag column using the dump's truthy token
    pub const fn flag(name: &'static str) -> Self {
        Self::new(name, FieldKind::Flag { token: FLAG_TOKEN })
    }

    /// List column using the dump's comma separator
    pub const fn list(name: &'static str) -> Self {
        Self::new(
            name,
            FieldKind::List {
                separator: LIST_SEPARATOR,
            },
        )
    }

    pub const fn date(name: &'static str) -> Self {
        Self::new(name, FieldKind::Date)
    }

    /// Mark the column as required (empty text is rejected)
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// A record kind that can be decoded positionally from raw fields
pub trait FromRecord: Sized {
    /// Column layout, in file order
    const SCHEMA: &'static [FieldSchema];

    /// Build the record from schema-checked columns
    fn from_columns(columns: &Columns<'_>) -> Result<Self>;
}

/// Inverse of [`FromRecord`]: the textual columns of a record
pub trait EncodeRecord {
    fn encode(&self) -> Vec<String>;
}
