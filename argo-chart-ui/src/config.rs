//! Compile-time settings shared by the web apps.

/// Static dataset served next to the app bundle.
pub const DATASET_URL: &str = "/data/argo_profiles.json";

/// Chatbot webhook receiving `{"text": ...}` posts.
pub const CHAT_WEBHOOK_URL: &str = "/webhook/chat";

pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

pub const TEMPERATURE_LINE_COLOR: &str = "#D84315";
pub const SALINITY_LINE_COLOR: &str = "#1565C0";

pub const D3_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/d3@7";
pub const LEAFLET_SCRIPT_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
pub const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
