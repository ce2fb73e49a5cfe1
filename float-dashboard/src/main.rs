//! Argo Float Dashboard
//!
//! Search a float by ID and see its temperature and salinity profiles next
//! to a map centered on its position.
//!
//! Data flow:
//! 1. On mount, the static dataset is fetched once from `config::DATASET_URL`.
//! 2. The user types an ID and presses Enter (or Search).
//! 3. `AppState::search()` runs lookup -> series extraction -> view binding.
//! 4. A render effect pushes the derived `ViewState` to D3.js and Leaflet.
//!
//! A failed load shows an error banner above an inert page: the search box
//! still works, but every search reports "not found".

use argo_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, FloatSearch, LoadingSpinner, MapContainer,
    SearchStatus,
};
use argo_chart_ui::state::AppState;
use argo_chart_ui::{config, fetch, js_bridge};
use argo_core::{DatasetStore, Field};
use dioxus::prelude::*;

/// DOM element IDs that D3.js and Leaflet render into.
const TEMPERATURE_CHART_ID: &str = "float-temperature-chart";
const SALINITY_CHART_ID: &str = "float-salinity-chart";
const MAP_ID: &str = "float-dashboard-map";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("float-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Fetch the dataset once on mount
    use_effect(move || {
        spawn(async move {
            match fetch::fetch_dataset(config::DATASET_URL).await {
                Ok(store) => state.store.set(Some(store)),
                Err(e) => {
                    log::error!("Failed to load dataset: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load float data: {}", e)));
                    state.store.set(Some(DatasetStore::empty()));
                }
            }
            state.loading.set(false);
        });
    });

    // Re-render charts and map whenever the view changes
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let view = state.view.read().clone();
        let store = state.store.read().clone().unwrap_or_default();

        js_bridge::init_charts();

        for (field, chart_id) in [
            (Field::Temperature, TEMPERATURE_CHART_ID),
            (Field::Salinity, SALINITY_CHART_ID),
        ] {
            match view.series(field) {
                Some(series) => js_bridge::render_profile_chart(chart_id, series, field),
                None => js_bridge::destroy_chart(chart_id),
            }
        }

        let markers = argo_view::markers(store.dataset(), view.highlighted.as_deref());
        js_bridge::render_float_map(MAP_ID, &markers, view.map_focus(), false);
    });

    let view = state.view.read().clone();
    let temperature_empty = view.temperature.as_ref().is_some_and(|s| s.is_empty());
    let salinity_empty = view.salinity.as_ref().is_some_and(|s| s.is_empty());

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Argo Float Dashboard".to_string(),
                subtitle: "Temperature (°C) and salinity (PSU) by pressure (dbar) for the first profile of a float".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            }

            if (state.loading)() {
                LoadingSpinner {}
            } else {
                FloatSearch {}
                SearchStatus {}

                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px;",
                    div {
                        style: "flex: 1 1 360px;",
                        ChartContainer {
                            id: TEMPERATURE_CHART_ID.to_string(),
                            empty: temperature_empty,
                        }
                    }
                    div {
                        style: "flex: 1 1 360px;",
                        ChartContainer {
                            id: SALINITY_CHART_ID.to_string(),
                            empty: salinity_empty,
                        }
                    }
                }

                div {
                    style: "margin-top: 16px;",
                    MapContainer { id: MAP_ID.to_string(), height: 420 }
                }
            }
        }
    }
}
