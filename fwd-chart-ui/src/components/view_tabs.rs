//! Chart / Table switch.

use crate::state::AppState;
use dioxus::prelude::*;
use fwd_data::ViewMode;

fn tab_id(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Chart => "chart-tab",
        ViewMode::Table => "table-tab",
    }
}

fn tab_style(active: bool) -> &'static str {
    if active {
        "padding: 6px 14px; border: 1px solid #2196F3; background: #2196F3; color: #fff; cursor: pointer;"
    } else {
        "padding: 6px 14px; border: 1px solid #BDBDBD; background: #fff; color: #333; cursor: pointer;"
    }
}

/// Two buttons selecting which surface is visible.
#[component]
pub fn ViewTabs() -> Element {
    let mut state = use_context::<AppState>();
    let current = state
        .explorer
        .read()
        .as_ref()
        .map(|e| e.view_mode())
        .unwrap_or_default();

    rsx! {
        div {
            class: "fwd-tabs",
            style: "display: flex; gap: 4px; margin: 8px 0;",
            for mode in ViewMode::ALL {
                button {
                    key: "{mode}",
                    id: tab_id(mode),
                    style: tab_style(mode == current),
                    onclick: move |_| state.update(|e| e.set_view_mode(mode)),
                    "{mode}"
                }
            }
        }
    }
}
