//! Shared Dioxus components and D3.js bridge for the dataset explorer.
//!
//! This crate is the only layer that touches the browser. It provides:
//! - `js_bridge`: D3.js chart calls, dataset fetch and CSV download
//! - `d3_chart`: the D3-backed `ChartBackend` used by `ChartSlot`
//! - `config`: runtime configuration from the page URL
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: reusable RSX components (selectors, tabs, table, ...)

pub mod components;
pub mod config;
pub mod d3_chart;
pub mod js_bridge;
pub mod state;
