//! Runtime configuration read from the page URL.

/// Query parameter that overrides the dataset location, e.g. `?data=./my.json`.
pub const DATA_URL_PARAM: &str = "data";

/// The dataset URL: the `data` query parameter when present, else `default`.
pub fn data_url(default: &str) -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get(DATA_URL_PARAM))
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
