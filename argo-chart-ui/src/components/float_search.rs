//! Float ID search box.

use crate::state::AppState;
use dioxus::prelude::*;

/// Text input bound to `AppState::query`. Enter or the button runs the
/// search; typing alone does not.
#[component]
pub fn FloatSearch() -> Element {
    let mut state = use_context::<AppState>();
    let query = (state.query)();
    let disabled = (state.loading)();

    let on_input = move |evt: Event<FormData>| {
        state.query.set(evt.value());
    };

    let on_keydown = move |evt: Event<KeyboardData>| {
        if evt.key() == Key::Enter {
            state.search();
        }
    };

    let on_click = move |_| {
        state.search();
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center;",
            label {
                r#for: "float-search",
                style: "font-weight: bold;",
                "Float ID: "
            }
            input {
                id: "float-search",
                r#type: "text",
                value: "{query}",
                placeholder: "e.g. 2902746",
                style: "padding: 4px 8px; width: 200px;",
                oninput: on_input,
                onkeydown: on_keydown,
            }
            button {
                disabled: disabled,
                style: "padding: 4px 12px;",
                onclick: on_click,
                "Search"
            }
        }
    }
}
