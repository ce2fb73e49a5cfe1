//! Argo Float Map
//!
//! Plots every positioned profile in the dataset as a circle marker and
//! fits the view to all of them. Each popup lists the float ID, position
//! and a depth-wise measurement table.

use argo_chart_ui::components::{ChartHeader, ErrorDisplay, LoadingSpinner, MapContainer};
use argo_chart_ui::state::AppState;
use argo_chart_ui::{config, fetch, js_bridge};
use argo_core::DatasetStore;
use argo_view::MapFocus;
use dioxus::prelude::*;

const MAP_ID: &str = "float-map";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("float-map-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

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

    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let store = state.store.read().clone().unwrap_or_default();
        let markers = argo_view::markers(store.dataset(), None);
        log::info!("Rendering {} float markers", markers.len());

        js_bridge::init_charts();
        js_bridge::render_float_map(MAP_ID, &markers, MapFocus::default(), true);
    });

    let float_count = state
        .store
        .read()
        .as_ref()
        .map(|store| store.dataset().len())
        .unwrap_or(0);

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Argo Float Positions".to_string(),
                subtitle: format!("{} floats; click a marker for its depth-wise measurements", float_count),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            }

            if (state.loading)() {
                LoadingSpinner {}
            } else {
                MapContainer { id: MAP_ID.to_string(), height: 640 }
            }
        }
    }
}
