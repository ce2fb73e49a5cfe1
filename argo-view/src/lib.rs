//! Derived view state for the Argo float front ends.
//!
//! Nothing here owns data. Every type is recomputed from a
//! [`LookupResult`](argo_core::LookupResult) or the loaded dataset, so the
//! web apps and the CLI can share one pure `lookup -> extract -> bind`
//! pipeline.

pub mod binding;
pub mod chat;
pub mod map;

pub use binding::{MapFocus, NotFoundNotice, ViewState, DEFAULT_ZOOM, FOCUS_ZOOM};
pub use chat::{ChatMessage, ChatTranscript, Sender, GREETING};
pub use map::{fit_bounds, markers, popup_rows, Bounds, Marker, PopupRow};
