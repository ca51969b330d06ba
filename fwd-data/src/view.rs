//! View models handed to the rendering adapter.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use crate::record::{Record, Year};
use serde::Serialize;

/// Column headers of the table view and of the CSV export.
pub const TABLE_HEADER: [&str; 3] = ["Year", "Value", "Unit"];

/// Render a value the way a reader expects: `100`, not `100.0`.
pub fn format_value(value: f64) -> String {
    value.to_string()
}

/// One (year, value) point of the line series.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LinePoint {
    pub year: Year,
    pub value: f64,
}

/// A single-series line chart: year on x, value on y.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct LineChart {
    /// Legend label, the indicator of the first point's record.
    pub label: String,
    pub points: Vec<LinePoint>,
}

impl LineChart {
    pub fn from_records(records: &[&Record]) -> Self {
        Self {
            label: records
                .first()
                .map(|r| r.indicator.clone())
                .unwrap_or_default(),
            points: records
                .iter()
                .map(|r| LinePoint {
                    year: r.year,
                    value: r.value,
                })
                .collect(),
        }
    }

    /// x-axis labels in series order.
    pub fn labels(&self) -> Vec<Year> {
        self.points.iter().map(|p| p.year).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One table row, already formatted for display.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableRow {
    pub year: String,
    pub value: String,
    pub unit: String,
}

impl TableRow {
    pub fn from_record(record: &Record) -> Self {
        Self {
            year: record.year.to_string(),
            value: format_value(record.value),
            unit: record.unit.clone(),
        }
    }

    /// Cells in [`TABLE_HEADER`] order.
    pub fn cells(&self) -> [&str; 3] {
        [self.year.as_str(), self.value.as_str(), self.unit.as_str()]
    }
}

pub fn table_rows(records: &[&Record]) -> Vec<TableRow> {
    records.iter().map(|r| TableRow::from_record(r)).collect()
}
