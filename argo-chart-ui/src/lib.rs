//! Shared Dioxus components and JS bridge for the Argo float apps.
//!
//! This crate provides:
//! - `config`: compile-time URLs and map settings
//! - `fetch`: single-attempt browser `fetch` for the dataset and chat webhook
//! - `js_bridge`: Rust wrappers for D3.js and Leaflet functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (search box, containers, chat, etc.)

pub mod components;
pub mod config;
pub mod fetch;
pub mod js_bridge;
pub mod state;
