//! Filter application and text reports for the CLI.

use crate::Filters;
use anyhow::Context;
use fwd_data::{Dataset, Explorer, TABLE_HEADER};
use log::{info, warn};
use std::fmt::Write as _;

fn warn_unless_offered(kind: &str, value: &str, options: &[String]) {
    if !options.iter().any(|o| o == value) {
        warn!("{} {:?} does not occur in the dataset; no records will match", kind, value);
    }
}

/// Build an explorer and apply `filters` in selector order: topic first, so
/// that its indicator reset happens before an explicit `--indicator`.
pub fn explorer_with(dataset: Dataset, filters: &Filters) -> anyhow::Result<Explorer> {
    let mut explorer = Explorer::new(dataset);

    if let Some(topic) = &filters.topic {
        warn_unless_offered("Topic", topic, explorer.topic_options());
        explorer.select_topic(topic);
    }
    if let Some(indicator) = &filters.indicator {
        warn_unless_offered("Indicator", indicator, explorer.indicator_options());
        explorer.select_indicator(indicator);
    }
    if let Some(geography) = &filters.geography {
        warn_unless_offered("Geography", geography, explorer.geography_options());
        explorer.select_geography(geography);
    }
    if let Some(year) = &filters.year {
        explorer
            .select_year_text(year)
            .with_context(|| format!("Invalid --year {:?}", year))?;
    }

    info!("Selection: {:?}", explorer.selection());
    Ok(explorer)
}

fn option_line(out: &mut String, name: &str, selected: &str, options: &[String]) {
    let rendered: Vec<String> = options
        .iter()
        .map(|o| {
            if o == selected {
                format!("[{}]", o)
            } else {
                o.clone()
            }
        })
        .collect();
    let _ = writeln!(out, "{:<11}{}", format!("{}:", name), rendered.join(", "));
}

/// Selector contents, current choice in brackets.
pub fn options_report(explorer: &Explorer) -> String {
    let sel = explorer.selection();
    let years: Vec<String> = explorer
        .year_options()
        .iter()
        .map(|y| y.to_string())
        .collect();

    let mut out = String::new();
    option_line(&mut out, "Topic", &sel.topic, explorer.topic_options());
    option_line(&mut out, "Indicator", &sel.indicator, explorer.indicator_options());
    option_line(&mut out, "Geography", &sel.geography, explorer.geography_options());
    option_line(&mut out, "Year", &sel.year.to_string(), &years);
    out
}

/// Filtered records as an aligned Year / Value / Unit table.
pub fn table_report(explorer: &Explorer) -> String {
    let rows = explorer.table_rows();
    let mut widths = TABLE_HEADER.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.cells()) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    let mut line = |cells: [&str; 3]| {
        let _ = writeln!(
            out,
            "{:<w0$}  {:>w1$}  {}",
            cells[0],
            cells[1],
            cells[2],
            w0 = widths[0],
            w1 = widths[1]
        );
    };
    line(TABLE_HEADER);
    for row in &rows {
        line(row.cells());
    }
    let _ = writeln!(out, "({} records)", rows.len());
    out
}

/// Write the CSV export of the filtered set to `path`.
pub fn export_to(explorer: &Explorer, path: &str) -> anyhow::Result<()> {
    let csv = explorer.export_csv();
    std::fs::write(path, &csv).with_context(|| format!("Failed to write {}", path))?;
    info!(
        "Exported {} records to {}",
        explorer.filtered().len(),
        path
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Dataset {
        Dataset::from_json(include_str!("../../fixtures/sample_app_data.json")).unwrap()
    }

    fn filters(topic: &str, indicator: &str, geography: &str, year: &str) -> Filters {
        let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Filters {
            topic: opt(topic),
            indicator: opt(indicator),
            geography: opt(geography),
            year: opt(year),
        }
    }

    #[test]
    fn no_filters_keeps_initial_selection() {
        let explorer = explorer_with(fixture(), &Filters::default()).unwrap();
        let sel = explorer.selection();
        assert_eq!(sel.topic, "Economy");
        assert_eq!(sel.indicator, "GDP");
        assert_eq!(sel.geography, "United States");
        assert_eq!(explorer.filtered().len(), 4);
    }

    #[test]
    fn topic_is_applied_before_indicator() {
        let explorer =
            explorer_with(fixture(), &filters("Health", "", "Canada", "")).unwrap();
        assert_eq!(explorer.selection().indicator, "Life expectancy");

        let explorer = explorer_with(
            fixture(),
            &filters("Health", "Physicians per 1,000", "Canada", ""),
        )
        .unwrap();
        assert_eq!(explorer.selection().indicator, "Physicians per 1,000");
        assert_eq!(
            explorer.export_csv(),
            "Year,Value,Unit\n2019,2.7,\"per 1,000 people\""
        );
    }

    #[test]
    fn string_years_in_the_dataset_match_numeric_selection() {
        let explorer = explorer_with(
            fixture(),
            &filters("Economy", "Unemployment rate", "Canada", "2019"),
        )
        .unwrap();
        let filtered = explorer.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].value, 5.7);
    }

    #[test]
    fn invalid_year_is_an_error() {
        let err = explorer_with(fixture(), &filters("", "", "", "twenty")).unwrap_err();
        assert!(err.to_string().contains("Invalid --year"));
    }

    #[test]
    fn options_report_brackets_current_choice() {
        let explorer = explorer_with(fixture(), &Filters::default()).unwrap();
        let report = options_report(&explorer);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Topic:     [Economy], Health");
        assert_eq!(lines[1], "Indicator: [GDP], Unemployment rate");
        assert_eq!(lines[3], "Year:      [All], 2018, 2019, 2020, 2021");
    }

    #[test]
    fn table_report_lists_rows_in_order() {
        let explorer = explorer_with(fixture(), &Filters::default()).unwrap();
        let report = table_report(&explorer);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Year"));
        assert!(lines[1].starts_with("2018"));
        assert!(lines[1].contains("20.5"));
        assert!(lines[4].starts_with("2021"));
        assert_eq!(lines[5], "(4 records)");
    }

    #[test]
    fn export_writes_csv_file() {
        let explorer =
            explorer_with(fixture(), &filters("", "", "Canada", "2020")).unwrap();
        let path = std::env::temp_dir().join(format!("fwd-export-{}.csv", std::process::id()));
        let path_str = path.to_string_lossy().to_string();

        export_to(&explorer, &path_str).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(written, "Year,Value,Unit\n2020,1.65,USD trillions");
    }
}
