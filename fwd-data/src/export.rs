//! CSV export of a filtered record set.
//!
//! Layout: a `Year,Value,Unit` header, one line per record, `\n` between
//! lines and no trailing newline. Fields are written through the `csv`
//! crate with [`QuoteStyle::Necessary`]: a field is only quoted when it
//! contains a comma, a quote or a line break, so ordinary rows come out
//! exactly as a plain comma join would produce them.

use crate::record::Record;
use crate::view::{format_value, TABLE_HEADER};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io;

/// File name offered to the browser and used as the CLI default.
pub const CSV_FILE_NAME: &str = "data.csv";

/// MIME type of the export.
pub const CSV_MIME: &str = "text/csv";

fn write_csv<W: io::Write>(records: &[&Record], out: W) -> csv::Result<()> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    wtr.write_record(TABLE_HEADER)?;
    for record in records {
        let year = record.year.to_string();
        let value = format_value(record.value);
        wtr.write_record([year.as_str(), value.as_str(), record.unit.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Serialize `records` as CSV text.
pub fn to_csv(records: &[&Record]) -> String {
    let mut buf = Vec::new();
    if let Err(e) = write_csv(records, &mut buf) {
        log::error!("[FWD] export: CSV serialization failed: {}", e);
    }
    let mut text = String::from_utf8_lossy(&buf).into_owned();
    if text.ends_with('\n') {
        text.pop();
    }
    log::info!("[FWD] export: Serialized {} records", records.len());
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_matches_plain_join_for_ordinary_rows() {
        let a = Record::new("Econ", "GDP", "US", 2020, 100.0, "USD");
        let b = Record::new("Econ", "GDP", "US", 2021, 110.0, "USD");
        assert_eq!(
            to_csv(&[&a, &b]),
            "Year,Value,Unit\n2020,100,USD\n2021,110,USD"
        );
    }

    #[test]
    fn export_has_one_line_per_record_plus_header() {
        let records: Vec<Record> = (0..5)
            .map(|i| Record::new("T", "I", "G", 2000 + i, i as f64 * 1.5, "u"))
            .collect();
        let refs: Vec<&Record> = records.iter().collect();
        let csv = to_csv(&refs);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Year,Value,Unit");
        assert_eq!(lines[2], "2001,1.5,u");
    }

    #[test]
    fn empty_export_is_header_only() {
        assert_eq!(to_csv(&[]), "Year,Value,Unit");
    }

    #[test]
    fn units_with_commas_are_quoted() {
        let r = Record::new("Health", "Physicians", "CA", 2019, 2.7, "per 1,000 people");
        assert_eq!(
            to_csv(&[&r]),
            "Year,Value,Unit\n2019,2.7,\"per 1,000 people\""
        );
    }
}
