//! Argonauts Chatbot
//!
//! Free-text questions are posted to the chat webhook; replies (or a fixed
//! fallback on failure) are appended to the conversation.

use argo_chart_ui::components::ChatPanel;
use argo_chart_ui::state::AppState;
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("float-chatbot-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AppState::new);

    rsx! {
        div {
            style: "padding: 24px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            ChatPanel {}
        }
    }
}
