//! Reusable Dioxus RSX components for the dataset explorer.

mod chart_container;
mod chart_header;
mod data_table;
mod download_button;
mod error_display;
mod explorer_controls;
mod filter_select;
mod loading_spinner;
mod view_tabs;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use data_table::DataTable;
pub use download_button::DownloadButton;
pub use error_display::ErrorDisplay;
pub use explorer_controls::ExplorerControls;
pub use filter_select::FilterSelect;
pub use loading_spinner::LoadingSpinner;
pub use view_tabs::ViewTabs;
