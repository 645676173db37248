//! Date formats found in the dumps
//!
//! Most columns use `YYYY-MM-DD`, but the alternate name periods carry a mix
//! of human readable, partial and compact dates. Formats are tried in a fixed
//! order and the first match wins.

use chrono::NaiveDate;

/// One accepted date encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `2018-02-02`
    Iso,
    /// `02 February 2018`, two-digit day and full month name only
    DayMonthName,
    /// `2018`, read as January 1st
    Year,
    /// `201802`, read as the first of the month
    YearMonth,
    /// `20180202`
    Compact,
    /// `02-02-2018`
    DayMonthYearDashed,
}

/// Formats in the order they are attempted
pub const DATE_FORMATS: [DateFormat; 6] = [
    DateFormat::Iso,
    DateFormat::DayMonthName,
    DateFormat::Year,
    DateFormat::YearMonth,
    DateFormat::Compact,
    DateFormat::DayMonthYearDashed,
];

impl DateFormat {
    /// Parse `value` in this format only
    pub fn parse(self, value: &str) -> Option<NaiveDate> {
        let bytes = value.as_bytes();
        if self != DateFormat::DayMonthName && !value.is_ascii() {
            return None;
        }
        match self {
            DateFormat::Iso => {
                if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
                    return None;
                }
                ymd(&value[0..4], &value[5..7], &value[8..10])
            }
            DateFormat::DayMonthName => {
                // chrono also takes abbreviated names and one-digit days
                let date = NaiveDate::parse_from_str(value, "%d %B %Y").ok()?;
                (date.format("%d %B %Y").to_string() == value).then_some(date)
            }
            DateFormat::Year => {
                if bytes.len() != 4 {
                    return None;
                }
                ymd(value, "01", "01")
            }
            DateFormat::YearMonth => {
                if bytes.len() != 6 {
                    return None;
                }
                ymd(&value[0..4], &value[4..6], "01")
            }
            DateFormat::Compact => {
                if bytes.len() != 8 {
                    return None;
                }
                ymd(&value[0..4], &value[4..6], &value[6..8])
            }
            DateFormat::DayMonthYearDashed => {
                if bytes.len() != 10 || bytes[2] != b'-' || bytes[5] != b'-' {
                    return None;
                }
                ymd(&value[6..10], &value[3..5], &value[0..2])
            }
        }
    }
}

/// Parse with the first matching format
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS.iter().find_map(|format| format.parse(value))
}

/// Canonical text of an optional date; absent dates are empty
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    if ![year, month, day]
        .iter()
        .all(|part| part.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}
