//! The four explorer filters plus the export button.

use super::{DownloadButton, FilterSelect};
use crate::state::AppState;
use dioxus::prelude::*;

/// Topic, indicator, geography and year selectors.
/// Reads options and selections from AppState and writes changes back.
#[component]
pub fn ExplorerControls() -> Element {
    let mut state = use_context::<AppState>();

    let (selection, topics, indicators, geographies, years) = match &*state.explorer.read() {
        Some(explorer) => (
            explorer.selection().clone(),
            explorer.topic_options().to_vec(),
            explorer.indicator_options().to_vec(),
            explorer.geography_options().to_vec(),
            explorer
                .year_options()
                .iter()
                .map(|y| y.to_string())
                .collect::<Vec<_>>(),
        ),
        None => return rsx! {},
    };

    rsx! {
        div {
            class: "fwd-controls",
            style: "display: flex; gap: 12px; flex-wrap: wrap; align-items: flex-end; margin: 8px 0;",
            FilterSelect {
                id: "topic-select".to_string(),
                label: "Topic".to_string(),
                options: topics,
                selected: selection.topic.clone(),
                on_change: move |topic: String| state.update(|e| e.select_topic(&topic)),
            }
            FilterSelect {
                id: "indicator-select".to_string(),
                label: "Indicator".to_string(),
                options: indicators,
                selected: selection.indicator.clone(),
                on_change: move |indicator: String| state.update(|e| e.select_indicator(&indicator)),
            }
            FilterSelect {
                id: "geo-select".to_string(),
                label: "Geography".to_string(),
                options: geographies,
                selected: selection.geography.clone(),
                on_change: move |geography: String| state.update(|e| e.select_geography(&geography)),
            }
            FilterSelect {
                id: "year-select".to_string(),
                label: "Year".to_string(),
                options: years,
                selected: selection.year.to_string(),
                on_change: move |year: String| {
                    state.update(|e| {
                        if let Err(err) = e.select_year_text(&year) {
                            log::warn!("[FWD] controls: ignoring year selection: {}", err);
                        }
                    })
                },
            }
            DownloadButton {}
        }
    }
}
