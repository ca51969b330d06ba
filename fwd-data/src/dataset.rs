//! The loaded record collection and option derivation.
//!
//! Option lists are the distinct values of a field in **first-seen order**.
//! Dropdowns are populated straight from these lists, so the order users see
//! is the order the dataset lists things in, never a sort order.

use crate::error::LoadError;
use crate::record::{RawRecord, Record, Year};
use crate::selection::YearFilter;
use std::collections::HashSet;
use std::hash::Hash;

/// String-valued record fields that can populate a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Topic,
    Indicator,
    Geography,
    Unit,
}

impl Field {
    pub fn of(self, record: &Record) -> &str {
        match self {
            Field::Topic => &record.topic,
            Field::Indicator => &record.indicator,
            Field::Geography => &record.geography,
            Field::Unit => &record.unit,
        }
    }
}

/// Distinct items of `iter`, keeping the first occurrence of each.
fn distinct_in_order<T, I>(iter: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    iter.into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Read-only collection of records, fetched once per session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Parse a dataset from its JSON form: an array of record objects.
    ///
    /// Years are normalized here; a record whose year is not an integer
    /// fails the whole load with [`LoadError::InvalidYear`].
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let raw: Vec<RawRecord> = serde_json::from_str(json)?;
        let records = raw
            .into_iter()
            .enumerate()
            .map(|(i, r)| r.into_record(i))
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("[FWD] dataset: Loaded {} records", records.len());
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct values of `field` across all records.
    pub fn derive_options(&self, field: Field) -> Vec<String> {
        self.derive_options_where(field, |_| true)
    }

    /// Distinct values of `field` across the records accepted by `predicate`.
    pub fn derive_options_where<P>(&self, field: Field, predicate: P) -> Vec<String>
    where
        P: Fn(&Record) -> bool,
    {
        distinct_in_order(
            self.records
                .iter()
                .filter(|r| predicate(*r))
                .map(|r| field.of(r)),
        )
        .into_iter()
        .map(str::to_string)
        .collect()
    }

    pub fn topics(&self) -> Vec<String> {
        self.derive_options(Field::Topic)
    }

    /// Indicators that occur together with `topic`.
    pub fn indicators_for(&self, topic: &str) -> Vec<String> {
        self.derive_options_where(Field::Indicator, |r| r.topic == topic)
    }

    pub fn geographies(&self) -> Vec<String> {
        self.derive_options(Field::Geography)
    }

    /// Distinct years in first-seen order.
    pub fn years(&self) -> Vec<Year> {
        distinct_in_order(self.records.iter().map(|r| r.year))
    }

    /// Year selector contents: the `All` sentinel followed by [`years`](Self::years).
    pub fn year_options(&self) -> Vec<YearFilter> {
        std::iter::once(YearFilter::All)
            .chain(self.years().into_iter().map(YearFilter::Only))
            .collect()
    }
}
