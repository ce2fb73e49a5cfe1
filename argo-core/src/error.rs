use thiserror::Error;

/// Failure to produce a dataset from the static JSON resource.
///
/// Consumers render an inert view (no charts, no markers) on any of these.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset request returned HTTP {status}")]
    Status { status: u16 },

    #[error("dataset request failed: {0}")]
    Transport(String),

    #[error("dataset is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("dataset has an unexpected shape: {0}")]
    Shape(String),

    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
}
