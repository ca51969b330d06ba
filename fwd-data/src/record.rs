//! The record model: one data point per (topic, indicator, geography, year).
//!
//! Datasets in the wild carry `year` either as a JSON number or as a numeric
//! string. Both are normalized to [`Year`] when the dataset is loaded, so
//! every later comparison is between integers.

use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Canonical year of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Year(i32);

impl Year {
    pub fn new(year: i32) -> Self {
        Self(year)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Text that does not describe an integral year.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("not a year: {0:?}")]
pub struct ParseYearError(pub String);

impl FromStr for Year {
    type Err = ParseYearError;

    /// Accepts `"2020"`, `" 2020 "` and `"2020.0"`; rejects fractions and words.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(year) = trimmed.parse::<i32>() {
            return Ok(Year(year));
        }
        match trimmed.parse::<f64>() {
            Ok(f) => integral_year(f).ok_or_else(|| ParseYearError(s.to_string())),
            Err(_) => Err(ParseYearError(s.to_string())),
        }
    }
}

fn integral_year(f: f64) -> Option<Year> {
    if f.is_finite() && f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64 {
        Some(Year(f as i32))
    } else {
        None
    }
}

/// One data point of the dataset. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub topic: String,
    pub indicator: String,
    pub geography: String,
    pub year: Year,
    pub value: f64,
    pub unit: String,
}

impl Record {
    pub fn new(
        topic: &str,
        indicator: &str,
        geography: &str,
        year: i32,
        value: f64,
        unit: &str,
    ) -> Self {
        Self {
            topic: topic.to_string(),
            indicator: indicator.to_string(),
            geography: geography.to_string(),
            year: Year(year),
            value,
            unit: unit.to_string(),
        }
    }
}

/// `year` as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawYear {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for RawYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawYear::Int(i) => write!(f, "{}", i),
            RawYear::Float(x) => write!(f, "{}", x),
            RawYear::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl RawYear {
    fn normalize(&self) -> Option<Year> {
        match self {
            RawYear::Int(i) => i32::try_from(*i).ok().map(Year),
            RawYear::Float(x) => integral_year(*x),
            RawYear::Text(s) => s.parse().ok(),
        }
    }
}

/// A record exactly as deserialized from the dataset JSON.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawRecord {
    pub topic: String,
    pub indicator: String,
    pub geography: String,
    pub year: RawYear,
    pub value: f64,
    pub unit: String,
}

impl RawRecord {
    /// Normalize into a [`Record`]. `index` only feeds the error message.
    pub fn into_record(self, index: usize) -> Result<Record, LoadError> {
        let year = self.year.normalize().ok_or_else(|| {
            LoadError::InvalidYear(format!("record {}: {}", index, self.year))
        })?;
        Ok(Record {
            topic: self.topic,
            indicator: self.indicator,
            geography: self.geography,
            year,
            value: self.value,
            unit: self.unit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_parses_integral_text() {
        assert_eq!("2020".parse::<Year>(), Ok(Year(2020)));
        assert_eq!(" 2021 ".parse::<Year>(), Ok(Year(2021)));
        assert_eq!("2022.0".parse::<Year>(), Ok(Year(2022)));
    }

    #[test]
    fn year_rejects_fractions_and_words() {
        assert!("2020.5".parse::<Year>().is_err());
        assert!("All".parse::<Year>().is_err());
        assert!("".parse::<Year>().is_err());
    }

    #[test]
    fn raw_year_accepts_number_and_string() {
        let json = r#"[
            {"topic":"T","indicator":"I","geography":"G","year":2020,"value":1,"unit":"u"},
            {"topic":"T","indicator":"I","geography":"G","year":"2021","value":2.5,"unit":"u"},
            {"topic":"T","indicator":"I","geography":"G","year":2022.0,"value":3,"unit":"u"}
        ]"#;
        let raw: Vec<RawRecord> = serde_json::from_str(json).unwrap();
        let years: Vec<Year> = raw
            .into_iter()
            .enumerate()
            .map(|(i, r)| r.into_record(i).unwrap().year)
            .collect();
        assert_eq!(years, vec![Year(2020), Year(2021), Year(2022)]);
    }

    #[test]
    fn raw_year_rejects_non_numeric_string() {
        let json = r#"{"topic":"T","indicator":"I","geography":"G","year":"FY20","value":1,"unit":"u"}"#;
        let raw: RawRecord = serde_json::from_str(json).unwrap();
        match raw.into_record(7) {
            Err(LoadError::InvalidYear(msg)) => assert!(msg.contains("record 7")),
            other => panic!("expected InvalidYear, got {:?}", other),
        }
    }

    #[test]
    fn year_displays_as_plain_integer() {
        assert_eq!(Year::new(1999).to_string(), "1999");
    }
}
