//! Found/not-found line under the search box.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn SearchStatus() -> Element {
    let state = use_context::<AppState>();
    let view = state.view.read().clone();

    if let Some(notice) = view.notice {
        return rsx! {
            div {
                style: "padding: 8px 12px; margin: 8px 0; background: #FFF8E1; color: #8D6E00; border-radius: 4px; border: 1px solid #FFE082;",
                "{notice.message()}"
            }
        };
    }

    match (view.highlighted, view.focus) {
        (Some(id), Some(focus)) => {
            let lat = format!("{:.3}", focus.center.latitude);
            let lng = format!("{:.3}", focus.center.longitude);
            rsx! {
                div {
                    style: "margin: 8px 0; font-size: 13px; color: #2E7D32;",
                    strong { "Float {id}" }
                    " at {lat}, {lng}"
                }
            }
        }
        _ => rsx! {},
    }
}
