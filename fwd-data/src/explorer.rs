//! The explorer state object: records, selector state and view mode.
//!
//! Every user interaction maps onto one method here. Nothing in this module
//! touches a rendering surface; the UI crate reads [`Explorer::line_chart`]
//! and [`Explorer::table_rows`] and draws them.

use crate::dataset::Dataset;
use crate::export;
use crate::record::{ParseYearError, Record};
use crate::selection::{Selection, YearFilter};
use crate::view::{self, LineChart, TableRow};
use std::fmt;
use std::rc::Rc;

/// Which surface is visible. Exactly one is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Chart,
    Table,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Chart, ViewMode::Table];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Chart => "Chart",
            ViewMode::Table => "Table",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Dataset plus everything the user has chosen so far.
///
/// Cloning is cheap: the record collection is shared behind an `Rc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Explorer {
    dataset: Rc<Dataset>,
    topics: Vec<String>,
    indicators: Vec<String>,
    geographies: Vec<String>,
    years: Vec<YearFilter>,
    selection: Selection,
    view_mode: ViewMode,
}

impl Explorer {
    /// Derive all selector options and pick the first entry of each, the
    /// way a freshly populated dropdown does. Year starts at `All`.
    pub fn new(dataset: Dataset) -> Self {
        let topics = dataset.topics();
        let geographies = dataset.geographies();
        let years = dataset.year_options();
        let selection = Selection {
            topic: topics.first().cloned().unwrap_or_default(),
            geography: geographies.first().cloned().unwrap_or_default(),
            ..Selection::default()
        };

        let mut explorer = Self {
            dataset: Rc::new(dataset),
            topics,
            indicators: Vec::new(),
            geographies,
            years,
            selection,
            view_mode: ViewMode::default(),
        };
        explorer.refresh_indicators();
        log::info!(
            "[FWD] explorer: {} topics, {} geographies, {} years",
            explorer.topics.len(),
            explorer.geographies.len(),
            explorer.years.len() - 1
        );
        explorer
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn topic_options(&self) -> &[String] {
        &self.topics
    }

    /// Indicators of the selected topic.
    pub fn indicator_options(&self) -> &[String] {
        &self.indicators
    }

    pub fn geography_options(&self) -> &[String] {
        &self.geographies
    }

    /// `All` followed by every year in the dataset.
    pub fn year_options(&self) -> &[YearFilter] {
        &self.years
    }

    /// Select a topic. The indicator list is rebuilt for the new topic and the
    /// indicator selection falls back to its first entry.
    pub fn select_topic(&mut self, topic: &str) {
        self.selection.topic = topic.to_string();
        self.refresh_indicators();
    }

    pub fn select_indicator(&mut self, indicator: &str) {
        self.selection.indicator = indicator.to_string();
    }

    pub fn select_geography(&mut self, geography: &str) {
        self.selection.geography = geography.to_string();
    }

    pub fn select_year(&mut self, year: YearFilter) {
        self.selection.year = year;
    }

    /// Select a year from selector text (`"All"` or a year number).
    /// On a parse error the selection is left unchanged.
    pub fn select_year_text(&mut self, text: &str) -> Result<(), ParseYearError> {
        let year = text.parse()?;
        self.select_year(year);
        Ok(())
    }

    /// Switch the visible surface. The filtered data is not touched.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    fn refresh_indicators(&mut self) {
        self.indicators = self.dataset.indicators_for(&self.selection.topic);
        self.selection.indicator = self.indicators.first().cloned().unwrap_or_default();
    }

    /// Records matching the current selection, in dataset order.
    pub fn filtered(&self) -> Vec<&Record> {
        self.dataset
            .records()
            .iter()
            .filter(|r| self.selection.matches(r))
            .collect()
    }

    pub fn line_chart(&self) -> LineChart {
        LineChart::from_records(&self.filtered())
    }

    pub fn table_rows(&self) -> Vec<TableRow> {
        view::table_rows(&self.filtered())
    }

    /// CSV of the current filtered set, recomputed on every call.
    pub fn export_csv(&self) -> String {
        export::to_csv(&self.filtered())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Year;

    fn gdp_two_years() -> Dataset {
        Dataset::new(vec![
            Record::new("Econ", "GDP", "US", 2020, 100.0, "USD"),
            Record::new("Econ", "GDP", "US", 2021, 110.0, "USD"),
        ])
    }

    fn mixed() -> Dataset {
        Dataset::new(vec![
            Record::new("Econ", "GDP", "US", 2020, 100.0, "USD"),
            Record::new("Health", "Obesity", "US", 2020, 31.0, "%"),
            Record::new("Econ", "Unemployment", "US", 2020, 8.1, "%"),
            Record::new("Econ", "GDP", "CA", 2020, 1.6, "USD"),
            Record::new("Econ", "GDP", "US", 2021, 110.0, "USD"),
            Record::new("Health", "Obesity", "US", 2021, 32.0, "%"),
            Record::new("Econ", "GDP", "US", 2019, 95.0, "USD"),
        ])
    }

    #[test]
    fn initial_selection_takes_first_options() {
        let explorer = Explorer::new(mixed());
        let sel = explorer.selection();
        assert_eq!(sel.topic, "Econ");
        assert_eq!(sel.indicator, "GDP");
        assert_eq!(sel.geography, "US");
        assert_eq!(sel.year, YearFilter::All);
        assert_eq!(explorer.view_mode(), ViewMode::Chart);
    }

    #[test]
    fn worked_example_filters_and_exports() {
        let explorer = Explorer::new(gdp_two_years());
        let filtered = explorer.filtered();
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].year, Year::new(2020));
        assert_eq!(filtered[1].year, Year::new(2021));
        assert_eq!(
            explorer.export_csv(),
            "Year,Value,Unit\n2020,100,USD\n2021,110,USD"
        );
    }

    #[test]
    fn changing_topic_resets_indicator_to_first_of_new_topic() {
        let mut explorer = Explorer::new(mixed());
        explorer.select_indicator("Unemployment");
        explorer.select_topic("Health");
        assert_eq!(explorer.indicator_options(), ["Obesity".to_string()]);
        assert_eq!(explorer.selection().indicator, "Obesity");

        explorer.select_topic("Econ");
        assert_eq!(explorer.selection().indicator, "GDP");
    }

    #[test]
    fn unknown_topic_empties_indicators_and_results() {
        let mut explorer = Explorer::new(mixed());
        explorer.select_topic("Nope");
        assert!(explorer.indicator_options().is_empty());
        assert_eq!(explorer.selection().indicator, "");
        assert!(explorer.filtered().is_empty());
        assert_eq!(explorer.export_csv(), "Year,Value,Unit");
    }

    #[test]
    fn filtered_records_match_every_selection() {
        let mut explorer = Explorer::new(mixed());
        explorer.select_year_text("2020").unwrap();
        let filtered = explorer.filtered();
        assert_eq!(filtered.len(), 1);
        assert!(filtered.iter().all(|r| explorer.selection().matches(r)));
        assert_eq!(filtered[0].value, 100.0);
    }

    #[test]
    fn all_years_is_union_of_single_years() {
        let mut explorer = Explorer::new(mixed());
        let all: Vec<Record> = explorer.filtered().into_iter().cloned().collect();

        let mut union = Vec::new();
        for year in explorer.year_options().to_vec() {
            if year == YearFilter::All {
                continue;
            }
            explorer.select_year(year);
            union.extend(explorer.filtered().into_iter().cloned());
        }

        assert_eq!(all.len(), union.len());
        for record in &all {
            assert!(union.contains(record));
        }
        // Dataset order is kept within the unfiltered year view.
        let years: Vec<i32> = all.iter().map(|r| r.year.get()).collect();
        assert_eq!(years, vec![2020, 2021, 2019]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let explorer = Explorer::new(mixed());
        assert_eq!(explorer.filtered(), explorer.filtered());
    }

    #[test]
    fn view_mode_toggle_does_not_touch_data() {
        let mut explorer = Explorer::new(mixed());
        let before: Vec<Record> = explorer.filtered().into_iter().cloned().collect();
        let selection = explorer.selection().clone();

        explorer.set_view_mode(ViewMode::Table);
        assert_eq!(explorer.view_mode(), ViewMode::Table);
        explorer.set_view_mode(ViewMode::Chart);

        let after: Vec<Record> = explorer.filtered().into_iter().cloned().collect();
        assert_eq!(before, after);
        assert_eq!(&selection, explorer.selection());
    }

    #[test]
    fn bad_year_text_keeps_previous_year() {
        let mut explorer = Explorer::new(mixed());
        explorer.select_year(YearFilter::Only(Year::new(2021)));
        assert!(explorer.select_year_text("last year").is_err());
        assert_eq!(explorer.selection().year, YearFilter::Only(Year::new(2021)));
    }

    #[test]
    fn chart_and_table_follow_filtered_order() {
        let explorer = Explorer::new(mixed());
        let chart = explorer.line_chart();
        assert_eq!(chart.label, "GDP");
        assert_eq!(chart.values(), vec![100.0, 110.0, 95.0]);

        let rows = explorer.table_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].cells(), ["2019", "95", "USD"]);
    }

    #[test]
    fn empty_dataset_is_a_valid_explorer() {
        let explorer = Explorer::new(Dataset::default());
        assert!(explorer.topic_options().is_empty());
        assert_eq!(explorer.year_options(), [YearFilter::All]);
        assert!(explorer.filtered().is_empty());
        assert_eq!(explorer.line_chart().label, "");
    }

    #[test]
    fn export_is_recomputed_after_selection_change() {
        let mut explorer = Explorer::new(gdp_two_years());
        explorer.select_year_text("2021").unwrap();
        assert_eq!(explorer.export_csv(), "Year,Value,Unit\n2021,110,USD");
    }
}
