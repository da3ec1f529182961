//! CSV and JSON rendering of record groups.
//!
//! Both renderings serialize [`NameRecord`] directly, so field names and
//! field order are defined once on the struct.

use crate::constants::CSV_HEADER;
use crate::error::{RankingError, Result};
use crate::models::NameRecord;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::Serialize;
use std::io;

/// JSON envelope: the year as a string plus the ordered records
#[derive(Serialize)]
struct YearReport<'r> {
    year: &'r str,
    items: &'r [&'r NameRecord],
}

/// Render records as CSV: a header line, then one unquoted line per record.
///
/// Lines are newline-separated with no newline after the last record. An
/// empty group renders as the header followed by a newline.
pub fn render_csv(records: &[&NameRecord]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| RankingError::Io(e.into_error()))?;
    let mut csv = String::from_utf8(bytes)
        .map_err(|e| RankingError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;

    if !records.is_empty() && csv.ends_with('\n') {
        csv.pop();
    }

    Ok(csv)
}

/// Render records as pretty-printed JSON (2-space indent) inside a year envelope
pub fn render_json(records: &[&NameRecord], year: &str) -> Result<String> {
    let report = YearReport {
        year,
        items: records,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
