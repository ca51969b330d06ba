//! Record model, filtering and CSV export for the dataset explorer.
//!
//! This crate has no browser dependency. It provides:
//! - `record` / `dataset`: the loaded collection and option derivation
//! - `selection` / `explorer`: selector state, view mode and filtering
//! - `view` / `export`: chart and table view models, CSV serialization
//! - `chart`: single-instance ownership of a charting library's chart
//!
//! # Usage
//!
//! ```rust
//! use fwd_data::{Dataset, Explorer};
//!
//! let json = r#"[
//!   {"topic":"Econ","indicator":"GDP","geography":"US","year":2020,"value":100,"unit":"USD"},
//!   {"topic":"Econ","indicator":"GDP","geography":"US","year":"2021","value":110,"unit":"USD"}
//! ]"#;
//! let explorer = Explorer::new(Dataset::from_json(json).unwrap());
//! assert_eq!(explorer.filtered().len(), 2);
//! assert_eq!(explorer.export_csv(), "Year,Value,Unit\n2020,100,USD\n2021,110,USD");
//! ```

pub mod chart;
pub mod dataset;
pub mod error;
pub mod explorer;
pub mod export;
pub mod record;
pub mod selection;
pub mod view;

pub use chart::{ChartBackend, ChartSlot};
pub use dataset::{Dataset, Field};
pub use error::LoadError;
pub use explorer::{Explorer, ViewMode};
pub use record::{Record, Year};
pub use selection::{Selection, YearFilter};
pub use view::{LineChart, TableRow, TABLE_HEADER};
