//! Test utilities for the decode pipeline

use crate::app::models::Geoname;
use crate::app::services::record_decoder::EncodeRecord;

mod stats_tests;

/// The Andorra la Vella row with its 19 columns
pub const ANDORRA_LA_VELLA: &str = "1\tAndorra la Vella\tAndorra la Vella\tAndorra,Andorra la Vieja\t42.50779\t1.52109\tP\tPPLC\tAD\t\t07\t\t\t\t20430\t\t1037\tEurope/Andorra\t2023-01-01\n";

/// The same row with the last column missing
pub const SHORT_ROW: &str = "2\tEncamp\tEncamp\t\t42.53474\t1.58014\tP\tPPLA\tAD\t\t03\t\t\t\t11224\t\t1257\tEurope/Andorra\n";

/// Tab-delimited line for a record
pub fn line<T: EncodeRecord>(record: &T) -> String {
    let mut line = record.encode().join("\t");
    line.push('\n');
    line
}

/// A geoname row with the given id and name
pub fn geoname_row(id: u32, name: &str) -> String {
    format!(
        "{}\t{}\t{}\t\t42.5\t1.5\tP\tPPL\tAD\t\t07\t\t\t\t0\t\t1000\tEurope/Andorra\t2020-05-17\n",
        id, name, name
    )
}

/// Names of the decoded geonames
pub fn names(records: &[Geoname]) -> Vec<&str> {
    records.iter().map(|g| g.name.as_str()).collect()
}
