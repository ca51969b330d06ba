//! Dataset Explorer
//!
//! Fetches a JSON dataset of (topic, indicator, geography, year, value, unit)
//! records and lets the user narrow it down with four dropdowns. The filtered
//! records are shown as a D3.js line chart or as a table, and can be
//! downloaded as `data.csv`.
//!
//! Data flow:
//! 1. On mount, the dataset is fetched from `DEFAULT_DATA_URL` (or the
//!    `?data=` query parameter) and parsed into an `Explorer`.
//! 2. Selector options and initial selections come from the explorer.
//! 3. Whenever the selection changes, the line chart is rebuilt through a
//!    `ChartSlot`, so the previous chart is destroyed first, and the table
//!    rows are recomputed.
//! 4. The Chart/Table tabs only toggle visibility.

use dioxus::prelude::*;
use fwd_chart_ui::components::{
    ChartContainer, ChartHeader, DataTable, ErrorDisplay, ExplorerControls, LoadingSpinner,
    ViewTabs,
};
use fwd_chart_ui::d3_chart::D3LineChart;
use fwd_chart_ui::state::AppState;
use fwd_chart_ui::{config, js_bridge};
use fwd_data::{ChartSlot, Dataset, Explorer, LoadError, ViewMode};
use std::cell::RefCell;
use std::rc::Rc;

/// Dataset fetched when the page does not name one.
const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/danghenry/dataprojects/refs/heads/main/sample_app_data.json";

/// Chart container DOM element ID used by D3.js to render into.
const CHART_ID: &str = "fwd-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("fwd-data-explorer"))
        .launch(App);
}

async fn load_dataset(url: &str) -> Result<Dataset, LoadError> {
    let body = js_bridge::fetch_text(url).await?;
    Dataset::from_json(&body)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let chart = use_hook(|| {
        let backend = D3LineChart::new(
            CHART_ID,
            serde_json::json!({
                "color": "#2196F3",
                "height": 400,
                "emptyMessage": "No records match the current selection.",
            }),
        );
        Rc::new(RefCell::new(ChartSlot::new(backend)))
    });

    // ─── Effect 1: fetch and parse the dataset once on mount ───
    use_effect(move || {
        spawn(async move {
            let url = config::data_url(DEFAULT_DATA_URL);
            log::info!("[FWD] app: Fetching dataset from {}", url);
            match load_dataset(&url).await {
                Ok(dataset) => {
                    state.explorer.set(Some(Explorer::new(dataset)));
                    js_bridge::init_charts();
                }
                Err(e) => {
                    log::error!("[FWD] app: {}", e);
                    state.error_msg.set(Some(e.to_string()));
                }
            }
            state.loading.set(false);
        });
    });

    // Only selection changes recompute the filtered set; a view toggle
    // produces an equal selection and stops here.
    let selection = use_memo(move || {
        state
            .explorer
            .read()
            .as_ref()
            .map(|e| e.selection().clone())
    });
    let line_chart = use_memo(move || {
        selection();
        state.explorer.peek().as_ref().map(|e| e.line_chart())
    });
    let rows = use_memo(move || {
        selection();
        state
            .explorer
            .peek()
            .as_ref()
            .map(|e| e.table_rows())
            .unwrap_or_default()
    });

    // ─── Effect 2: redraw the chart whenever the filtered set changes ───
    use_effect(move || {
        if let Some(line) = line_chart() {
            chart.borrow_mut().replace(&line);
        }
    });

    let view_mode = state
        .explorer
        .read()
        .as_ref()
        .map(|e| e.view_mode())
        .unwrap_or_default();
    let total = state
        .explorer
        .read()
        .as_ref()
        .map(|e| e.dataset().len())
        .unwrap_or(0);
    let subtitle = format!("{} of {} records", rows.read().len(), total);

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = (state.error_msg)() {
                ChartHeader { title: "Dataset Explorer".to_string() }
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                ChartHeader {
                    title: "Dataset Explorer".to_string(),
                    subtitle: subtitle,
                }

                ExplorerControls {}

                ViewTabs {}

                ChartContainer {
                    id: CHART_ID.to_string(),
                    visible: view_mode == ViewMode::Chart,
                    min_height: 400,
                }

                DataTable {
                    rows: rows(),
                    visible: view_mode == ViewMode::Table,
                }
            }
        }
    }
}
