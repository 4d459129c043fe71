//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The charting widget itself is loaded by the page template as a global;
//! `assets/js/report-chart.js` adapts our declarative descriptors to its
//! `generate`/`load`/`destroy` API and is evaluated at runtime. This module
//! provides safe Rust wrappers that serialize descriptors and call those
//! globals.

// Embed the widget adapter at compile time
static REPORT_CHART_JS: &str = include_str!("../assets/js/report-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('KBR JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the chart adapter with a wait-for-widget polling loop.
///
/// The adapter defines functions like `renderReportChart(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), we evaluate them
/// at global scope via a separate `eval()` call once the widget library
/// is ready, and then explicitly promote each function to `window.*`.
pub fn init_charts() {
    // Store the script on window so the polling callback can eval it
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__kbrChartScript = {};",
        serde_json::to_string(REPORT_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForWidget = setInterval(function() {
                if (typeof c3 !== 'undefined') {
                    clearInterval(waitForWidget);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__kbrChartScript);
                    delete window.__kbrChartScript;
                    // Promote function declarations to window explicitly
                    if (typeof renderReportChart !== 'undefined') window.renderReportChart = renderReportChart;
                    if (typeof reloadReportChart !== 'undefined') window.reloadReportChart = reloadReportChart;
                    if (typeof destroyReportChart !== 'undefined') window.destroyReportChart = destroyReportChart;
                    window.__kbrChartsReady = true;
                    console.log('KBR chart adapter initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render a fresh chart from a full widget configuration descriptor.
///
/// Uses a polling loop to wait for the widget library to load, the adapter
/// to initialize, and the container DOM element to exist before rendering.
pub fn render_chart(container_id: &str, descriptor_json: &str) {
    let escaped = descriptor_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__kbrChartsReady &&
                    typeof window.renderReportChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderReportChart('{container_id}', '{escaped}');
                    }} catch(e) {{ console.error('[KBR] renderReportChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Update an existing chart in place with a data-load descriptor.
///
/// Only called after a render, so the adapter and the container are known
/// to exist; no polling.
pub fn reload_chart(container_id: &str, load_json: &str) {
    let escaped = load_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        "window.reloadReportChart('{container_id}', '{escaped}');"
    ));
}

/// Destroy/clean up the chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!("window.destroyReportChart('{}');", container_id));
}
