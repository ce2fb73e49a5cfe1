//! Reusable Dioxus RSX components for the Argo float apps.

mod chart_container;
mod chart_header;
mod chat_panel;
mod error_display;
mod float_search;
mod loading_spinner;
mod map_container;
mod search_status;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use chat_panel::ChatPanel;
pub use error_display::ErrorDisplay;
pub use float_search::FloatSearch;
pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use search_status::SearchStatus;
