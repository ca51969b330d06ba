//! Selector state: the four active filter values.

use crate::record::{ParseYearError, Record, Year};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Year selection. `All` disables the year filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum YearFilter {
    #[default]
    All,
    Only(Year),
}

impl YearFilter {
    /// Text shown for (and parsed back into) [`YearFilter::All`].
    pub const ALL_LABEL: &'static str = "All";

    pub fn matches(self, year: Year) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Only(selected) => selected == year,
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::All => f.write_str(Self::ALL_LABEL),
            YearFilter::Only(year) => write!(f, "{}", year),
        }
    }
}

impl FromStr for YearFilter {
    type Err = ParseYearError;

    /// Selector values arrive as text; this is the one place they become years.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == Self::ALL_LABEL {
            Ok(YearFilter::All)
        } else {
            s.parse().map(YearFilter::Only)
        }
    }
}

/// Current values of the topic, indicator, geography and year selectors.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Selection {
    pub topic: String,
    pub indicator: String,
    pub geography: String,
    pub year: YearFilter,
}

impl Selection {
    /// Exact match on the three string fields plus the year filter.
    pub fn matches(&self, record: &Record) -> bool {
        record.topic == self.topic
            && record.indicator == self.indicator
            && record.geography == self.geography
            && self.year.matches(record.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_filter_round_trips_through_selector_text() {
        assert_eq!("All".parse::<YearFilter>(), Ok(YearFilter::All));
        assert_eq!(
            "2020".parse::<YearFilter>(),
            Ok(YearFilter::Only(Year::new(2020)))
        );
        assert_eq!(YearFilter::All.to_string(), "All");
        assert_eq!(YearFilter::Only(Year::new(2020)).to_string(), "2020");
        assert!("all years".parse::<YearFilter>().is_err());
    }

    #[test]
    fn all_matches_every_year() {
        assert!(YearFilter::All.matches(Year::new(1900)));
        assert!(YearFilter::Only(Year::new(2020)).matches(Year::new(2020)));
        assert!(!YearFilter::Only(Year::new(2020)).matches(Year::new(2021)));
    }

    #[test]
    fn selection_requires_exact_string_match() {
        let record = Record::new("Econ", "GDP", "US", 2020, 100.0, "USD");
        let mut selection = Selection {
            topic: "Econ".into(),
            indicator: "GDP".into(),
            geography: "US".into(),
            year: YearFilter::All,
        };
        assert!(selection.matches(&record));

        selection.geography = "us".into();
        assert!(!selection.matches(&record));
    }
}
