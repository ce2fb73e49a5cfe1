//! Chatbot widget.

use crate::state::AppState;
use crate::{config, fetch, js_bridge};
use argo_core::chat::reply_text;
use argo_view::Sender;
use dioxus::prelude::*;

const CHAT_END_ID: &str = "chat-end";

const USER_ROW_STYLE: &str = "display: flex; justify-content: flex-end;";
const BOT_ROW_STYLE: &str = "display: flex; justify-content: flex-start;";
const USER_BUBBLE_STYLE: &str =
    "max-width: 70%; padding: 8px 14px; border-radius: 16px; background: #1565C0; color: white;";
const BOT_BUBBLE_STYLE: &str =
    "max-width: 70%; padding: 8px 14px; border-radius: 16px; background: #EEEEEE; color: #212121;";

/// Message list plus input row. Each send is an independent webhook call;
/// replies are appended as they arrive.
#[component]
pub fn ChatPanel() -> Element {
    let mut state = use_context::<AppState>();
    let mut draft = use_signal(String::new);
    let messages: Vec<(u64, String, &'static str, &'static str)> = state
        .transcript
        .read()
        .messages()
        .iter()
        .map(|m| {
            let (row, bubble) = match m.sender {
                Sender::User => (USER_ROW_STYLE, USER_BUBBLE_STYLE),
                Sender::Bot => (BOT_ROW_STYLE, BOT_BUBBLE_STYLE),
            };
            (m.id, m.text.clone(), row, bubble)
        })
        .collect();

    // Keep the latest message in view
    use_effect(move || {
        let _ = state.transcript.read().messages().len();
        js_bridge::call_js(&format!(
            "var el = document.getElementById('{}'); if (el) el.scrollIntoView({{ behavior: 'smooth' }});",
            CHAT_END_ID
        ));
    });

    let mut send = move || {
        let input = draft();
        let Some(text) = state.transcript.write().submit(&input) else {
            return;
        };
        draft.set(String::new());
        spawn(async move {
            let reply = reply_text(fetch::send_chat(config::CHAT_WEBHOOK_URL, &text).await);
            state.transcript.write().receive(reply);
        });
    };

    rsx! {
        div {
            style: "max-width: 720px; margin: 0 auto; border: 1px solid #E0E0E0; border-radius: 12px; overflow: hidden;",
            div {
                style: "background: #1565C0; color: white; padding: 12px 16px;",
                h3 { style: "margin: 0;", "Argonauts Chatbot" }
                p { style: "margin: 4px 0 0 0; font-size: 12px;", "Ask me anything about Argo floats!" }
            }
            div {
                style: "height: 384px; overflow-y: auto; padding: 16px; display: flex; flex-direction: column; gap: 12px;",
                for (id, text, row_style, bubble_style) in messages.into_iter() {
                    div {
                        key: "{id}",
                        style: row_style,
                        div {
                            style: bubble_style,
                            "{text}"
                        }
                    }
                }
                div { id: CHAT_END_ID }
            }
            div {
                style: "display: flex; gap: 8px; padding: 12px; border-top: 1px solid #E0E0E0;",
                input {
                    r#type: "text",
                    value: "{draft}",
                    placeholder: "Type your message here...",
                    style: "flex: 1; padding: 8px 12px; border-radius: 8px; border: 1px solid #BDBDBD;",
                    oninput: move |evt: Event<FormData>| draft.set(evt.value()),
                    onkeydown: move |evt: Event<KeyboardData>| {
                        if evt.key() == Key::Enter {
                            evt.prevent_default();
                            send();
                        }
                    },
                }
                button {
                    style: "padding: 8px 20px; border-radius: 8px; background: #1565C0; color: white; border: none;",
                    onclick: move |_| send(),
                    "Send"
                }
            }
        }
    }
}
