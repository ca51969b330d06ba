//! Typed wrappers around JS interop.
//!
//! D3.js chart functions live in `assets/js/*.js` and are evaluated as
//! globals once D3 is available (no ES modules), then promoted to `window.*`.
//! This module serializes data for those globals and also owns the two other
//! browser side effects of the explorer: fetching the dataset and offering
//! the CSV export as a download.

use fwd_data::LoadError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Response, Url};

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('FWD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `s` as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are evaluated at global scope via indirect eval once D3 is
/// ready, and each function is then promoted to `window.*` explicitly.
/// Calling this more than once is harmless.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, LINE_CHART_JS].join("\n");

    let store_js = format!(
        "if (!window.__fwdChartsReady) {{ window.__fwdChartScripts = {}; }}",
        js_string(&all_js)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__fwdChartsReady || window.__fwdChartsPolling) return;
            window.__fwdChartsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__fwdChartScripts);
                    delete window.__fwdChartScripts;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof destroyLineChart !== 'undefined') window.destroyLineChart = destroyLineChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__fwdChartsReady = true;
                    console.log('FWD charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render a line chart into `container_id` once D3, the chart scripts and the
/// container element are all present.
///
/// `generation` tags the pending render. A newer render or a
/// [`destroy_line_chart`] on the same container retires the tag, and a
/// retired render stops polling without drawing.
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str, generation: u64) {
    let id = js_string(container_id);
    let data = js_string(data_json);
    let config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            window.__fwdChartGen = window.__fwdChartGen || {{}};
            window.__fwdChartGen[{id}] = {generation};
            var poll = setInterval(function() {{
                if (window.__fwdChartGen[{id}] !== {generation}) {{
                    clearInterval(poll);
                    return;
                }}
                if (window.__fwdChartsReady &&
                    typeof window.renderLineChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderLineChart({id}, {data}, {config});
                    }} catch(e) {{ console.error('[FWD] renderLineChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Tear down the chart in `container_id` and cancel any render still waiting.
pub fn destroy_line_chart(container_id: &str) {
    let id = js_string(container_id);
    call_js(&format!(
        r#"
        if (window.__fwdChartGen) delete window.__fwdChartGen[{id}];
        if (typeof window.destroyLineChart !== 'undefined') {{
            window.destroyLineChart({id});
        }} else {{
            var el = document.getElementById({id}); if (el) el.innerHTML = '';
        }}
        "#,
    ));
}

fn fetch_error(e: JsValue) -> LoadError {
    LoadError::Fetch(
        e.as_string()
            .unwrap_or_else(|| format!("{:?}", e)),
    )
}

/// GET `url` and return the body as text.
pub async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let window =
        web_sys::window().ok_or_else(|| LoadError::Fetch("no window object".to_string()))?;

    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(fetch_error)?
        .dyn_into()
        .map_err(fetch_error)?;

    if !response.ok() {
        return Err(LoadError::Status {
            status: response.status(),
        });
    }

    let body = JsFuture::from(response.text().map_err(fetch_error)?)
        .await
        .map_err(fetch_error)?;
    body.as_string()
        .ok_or_else(|| LoadError::Fetch("response body is not text".to_string()))
}

/// Offer `text` to the user as a file download named `filename`.
pub fn download_text(filename: &str, mime: &str, text: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(text));

    let opts = BlobPropertyBag::new();
    opts.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("anchor cast failed"))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Url::revoke_object_url(&url)?;
    Ok(())
}
