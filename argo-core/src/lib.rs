//! Core types and data pipeline for Argo float telemetry.
//!
//! This crate provides:
//! - `dataset`: the canonical float data model and the JSON ingestion boundary
//! - `store`: the immutable `DatasetStore` loaded once per session
//! - `lookup`: case-insensitive identifier lookup producing a `LookupResult`
//! - `series`: depth/time series extraction for line charts
//! - `chat`: request/response shapes for the chatbot webhook
//!
//! Native HTTP transport (reqwest) is behind the `api` feature so the crate
//! stays usable from WASM front ends, which bring their own `fetch`.

pub mod chat;
pub mod dataset;
pub mod error;
pub mod lookup;
pub mod series;
pub mod store;

pub use dataset::{
    Coordinates, DepthSample, FlatRecord, FloatDataset, FloatEntry, FloatRecord,
    MeasurementSample, Profile,
};
pub use error::LoadError;
pub use lookup::{find, FoundFloat, LookupResult};
pub use series::{extract_series, ChartSeries, Field, SeriesAxis, SeriesPoint};
pub use store::DatasetStore;
