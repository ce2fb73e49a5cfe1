//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use argo_core::DatasetStore;
use argo_view::{ChatTranscript, ViewState};
use dioxus::prelude::*;

/// Shared application state for all Argo float apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded dataset (None until the fetch settles; empty after a failure)
    pub store: Signal<Option<DatasetStore>>,
    /// Whether the dataset fetch is still pending
    pub loading: Signal<bool>,
    /// Load error message, shown above an inert view
    pub error_msg: Signal<Option<String>>,
    /// Text currently in the search box
    pub query: Signal<String>,
    /// Charts, map focus and notice derived from the latest search
    pub view: Signal<ViewState>,
    /// Chatbot history
    pub transcript: Signal<ChatTranscript>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            store: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            query: Signal::new(String::new()),
            view: Signal::new(ViewState::default()),
            transcript: Signal::new(ChatTranscript::new()),
        }
    }

    /// Run the current query against the store and replace the view.
    ///
    /// Before the dataset settles this searches an empty store, so every
    /// query misses.
    pub fn search(&mut self) {
        let store = self.store.read().clone().unwrap_or_default();
        let query = (self.query)();
        let result = store.find(&query);
        log::info!(
            "[Argo] search '{}' -> {}",
            query.trim(),
            if result.is_found() { "found" } else { "not found" }
        );
        self.view.set(ViewState::from_result(&result));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
