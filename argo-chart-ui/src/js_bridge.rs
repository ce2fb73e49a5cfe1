//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart and Leaflet map functions live in `assets/js/*.js` and are
//! embedded at compile time. They are evaluated as globals (no ES modules)
//! and exposed via `window.*`. This module serializes Rust data and calls
//! those globals.

use argo_core::{ChartSeries, Field, SeriesAxis};
use argo_view::{fit_bounds, MapFocus, Marker};

use crate::config;

// Embed all chart/map JS files at compile time
static PROFILE_CHART_JS: &str = include_str!("../assets/js/profile-chart.js");
static FLOAT_MAP_JS: &str = include_str!("../assets/js/float-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Argo JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Load D3.js and Leaflet if the page has not, then initialize the chart
/// and map scripts once both are available.
///
/// The scripts are evaluated at global scope via indirect eval so their
/// `function` declarations become globals. Safe to call on every render;
/// only the first call does any work.
pub fn init_charts() {
    let all_js = [PROFILE_CHART_JS, FLOAT_MAP_JS].join("\n");

    let store_js = format!(
        "if (!window.__argoScriptsQueued) {{ window.__argoScriptsQueued = true; window.__argoChartScripts = {}; }}",
        js_string(&all_js)
    );
    let _ = js_sys::eval(&store_js);

    call_js(&format!(
        r#"
        if (typeof d3 === 'undefined' && !document.getElementById('argo-d3')) {{
            var d3s = document.createElement('script'); d3s.id = 'argo-d3'; d3s.src = {d3};
            document.head.appendChild(d3s);
        }}
        if (typeof L === 'undefined' && !document.getElementById('argo-leaflet')) {{
            var css = document.createElement('link'); css.rel = 'stylesheet'; css.href = {leaflet_css};
            document.head.appendChild(css);
            var ls = document.createElement('script'); ls.id = 'argo-leaflet'; ls.src = {leaflet};
            document.head.appendChild(ls);
        }}
        "#,
        d3 = js_string(config::D3_SCRIPT_URL),
        leaflet_css = js_string(config::LEAFLET_CSS_URL),
        leaflet = js_string(config::LEAFLET_SCRIPT_URL),
    ));

    let init_js = r#"
        (function() {
            if (window.__argoInitStarted) return;
            window.__argoInitStarted = true;
            var waitForLibs = setInterval(function() {
                if (typeof d3 !== 'undefined' && typeof L !== 'undefined') {
                    clearInterval(waitForLibs);
                    (0, eval)(window.__argoChartScripts);
                    delete window.__argoChartScripts;
                    if (typeof renderProfileChart !== 'undefined') window.renderProfileChart = renderProfileChart;
                    if (typeof renderFloatMap !== 'undefined') window.renderFloatMap = renderFloatMap;
                    window.__argoChartsReady = true;
                    console.log('Argo charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render a temperature or salinity line chart. An empty series clears the
/// container instead.
pub fn render_profile_chart(container_id: &str, series: &ChartSeries, field: Field) {
    if series.is_empty() {
        destroy_chart(container_id);
        return;
    }
    let data_json = serde_json::to_string(series).unwrap_or_default();
    let config_json = profile_chart_config(field, series.axis).to_string();
    call_js(&deferred_call(
        "renderProfileChart",
        container_id,
        &data_json,
        &config_json,
    ));
}

/// Render the float map: all markers, then either fit them all or center
/// on `focus`.
pub fn render_float_map(container_id: &str, markers: &[Marker], focus: MapFocus, fit_all: bool) {
    let markers_json = serde_json::to_string(markers).unwrap_or_default();
    let config_json = map_config(markers, focus, fit_all).to_string();
    call_js(&deferred_call(
        "renderFloatMap",
        container_id,
        &markers_json,
        &config_json,
    ));
}

/// Destroy/clean up a chart in the given container. Renders still queued
/// for the container are cancelled.
pub fn destroy_chart(container_id: &str) {
    call_js(&clear_script(container_id));
}

/// Quote `s` as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// JS that advances the render generation of a container and leaves the
/// new value in `gen`. Only the newest queued call for a container runs.
fn next_generation(id: &str) -> String {
    format!(
        "window.__argoRenderGen = window.__argoRenderGen || {{}}; \
         var gen = (window.__argoRenderGen[{id}] || 0) + 1; \
         window.__argoRenderGen[{id}] = gen;"
    )
}

fn clear_script(container_id: &str) -> String {
    let id = js_string(container_id);
    format!(
        "(function() {{ {} var el = document.getElementById({id}); if (el) el.innerHTML = ''; }})();",
        next_generation(&id)
    )
}

/// Poll until the scripts are initialized and the container exists, then
/// call `window[function](container_id, data, config)`. A later render or
/// clear of the same container cancels the poll.
fn deferred_call(function: &str, container_id: &str, data_json: &str, config_json: &str) -> String {
    let id = js_string(container_id);
    let data = js_string(data_json);
    let config = js_string(config_json);
    let generation = next_generation(&id);
    format!(
        r#"
        (function() {{
            {generation}
            var poll = setInterval(function() {{
                if (window.__argoRenderGen[{id}] !== gen) {{
                    clearInterval(poll);
                    return;
                }}
                if (window.__argoChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({id}, {data}, {config});
                    }} catch(e) {{ console.error('[Argo] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

fn profile_chart_config(field: Field, axis: SeriesAxis) -> serde_json::Value {
    let (line_color, value_label) = match field {
        Field::Temperature => (config::TEMPERATURE_LINE_COLOR, "Temperature (°C)"),
        Field::Salinity => (config::SALINITY_LINE_COLOR, "Salinity (PSU)"),
    };
    serde_json::json!({
        "title": format!("{} Profile", field.label()),
        "valueLabel": value_label,
        "axis": axis,
        "axisLabel": match axis {
            SeriesAxis::Pressure => "Pressure (dbar)",
            SeriesAxis::Time => "Sample time (UTC)",
        },
        "lineColor": line_color,
    })
}

fn map_config(markers: &[Marker], focus: MapFocus, fit_all: bool) -> serde_json::Value {
    serde_json::json!({
        "center": [focus.center.latitude, focus.center.longitude],
        "zoom": focus.zoom,
        "bounds": if fit_all { fit_bounds(markers) } else { None },
        "tileUrl": config::TILE_URL_TEMPLATE,
        "attribution": config::TILE_ATTRIBUTION,
    })
}
