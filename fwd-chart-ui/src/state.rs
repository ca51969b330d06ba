//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use fwd_data::Explorer;
use dioxus::prelude::*;

/// Shared application state for the explorer widget.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Explorer (None until the dataset is loaded)
    pub explorer: Signal<Option<Explorer>>,
    /// Whether the dataset is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            explorer: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }

    /// Apply `f` to the loaded explorer. No-op before the dataset arrives.
    pub fn update(&mut self, f: impl FnOnce(&mut Explorer)) {
        if let Some(explorer) = self.explorer.write().as_mut() {
            f(explorer);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
