//! Text encoders for decoded column values
//!
//! Each helper produces the column text that decodes back to the same value.

use crate::constants::{FLAG_TOKEN, LIST_SEPARATOR};

pub use super::dates::format_date;

/// Flag column text: the token when set, empty otherwise
pub fn format_flag(value: bool) -> String {
    if value {
        FLAG_TOKEN.to_string()
    } else {
        String::new()
    }
}

/// List column text joined with the dump separator
pub fn format_list(values: &[String]) -> String {
    values.join(&LIST_SEPARATOR.to_string())
}

/// Shortest text that parses back to the same float
pub fn format_float(value: f64) -> String {
    value.to_string()
}
