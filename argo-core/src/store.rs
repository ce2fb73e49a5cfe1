//! The session's dataset, loaded once and read thereafter.
//!
//! `DatasetStore` wraps the parsed dataset in an `Rc` so it can be cloned
//! freely across Dioxus components in single-threaded WASM. There is no
//! mutation API: a new load produces a new store.

use crate::dataset::FloatDataset;
use crate::error::LoadError;
use crate::lookup::{find, LookupResult};
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    dataset: Rc<FloatDataset>,
}

impl DatasetStore {
    pub fn new(dataset: FloatDataset) -> Self {
        Self {
            dataset: Rc::new(dataset),
        }
    }

    /// The inert store used after a failed load. Every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json(body: &str) -> Result<Self, LoadError> {
        let dataset = FloatDataset::from_json_str(body)?;
        log::info!("[Argo] store: loaded {} floats", dataset.len());
        Ok(Self::new(dataset))
    }

    /// Interpret a completed HTTP exchange. Any non-2xx status is a load
    /// error regardless of the body.
    pub fn from_http_response(status: u16, body: &str) -> Result<Self, LoadError> {
        if !(200..300).contains(&status) {
            return Err(LoadError::Status { status });
        }
        Self::from_json(body)
    }

    /// Fetch and parse the dataset from `source` in a single attempt.
    ///
    /// `http://` and `https://` sources are fetched with a GET; anything else
    /// is treated as a filesystem path (an optional `file://` prefix is
    /// stripped).
    #[cfg(feature = "api")]
    pub async fn load(source: &str) -> Result<Self, LoadError> {
        if source.starts_with("http://") || source.starts_with("https://") {
            let response = reqwest::get(source)
                .await
                .map_err(|e| LoadError::Transport(e.to_string()))?;
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| LoadError::Transport(e.to_string()))?;
            Self::from_http_response(status, &body)
        } else {
            let path = source.strip_prefix("file://").unwrap_or(source);
            let body = tokio::fs::read_to_string(path).await?;
            Self::from_json(&body)
        }
    }

    pub fn dataset(&self) -> &FloatDataset {
        &self.dataset
    }

    pub fn find(&self, raw_id: &str) -> LookupResult {
        find(&self.dataset, raw_id)
    }
}
