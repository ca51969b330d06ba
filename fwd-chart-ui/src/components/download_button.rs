//! CSV export button.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use fwd_data::export::{CSV_FILE_NAME, CSV_MIME};

/// Downloads the current filtered set as `data.csv`.
#[component]
pub fn DownloadButton() -> Element {
    let state = use_context::<AppState>();

    let on_click = move |_| {
        let csv = match &*state.explorer.read() {
            Some(explorer) => explorer.export_csv(),
            None => return,
        };
        if let Err(e) = js_bridge::download_text(CSV_FILE_NAME, CSV_MIME, &csv) {
            log::error!("[FWD] export: download failed: {:?}", e);
        }
    };

    rsx! {
        button {
            id: "download-btn",
            style: "padding: 6px 14px; cursor: pointer;",
            onclick: on_click,
            "Download CSV"
        }
    }
}
