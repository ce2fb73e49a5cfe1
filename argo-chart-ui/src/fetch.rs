//! Browser `fetch` transport.
//!
//! One attempt per call, no timeout, no retry. Status and body are handed to
//! the pure interpreters in `argo-core` so native and browser builds agree on
//! what counts as a failure.

use argo_core::chat::{parse_reply, ChatError, ChatReply, ChatRequest};
use argo_core::{DatasetStore, LoadError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// GET the static dataset and parse it.
pub async fn fetch_dataset(url: &str) -> Result<DatasetStore, LoadError> {
    let (status, body) = fetch_text(url, None)
        .await
        .map_err(LoadError::Transport)?;
    DatasetStore::from_http_response(status, &body)
}

/// POST one chat message to the webhook.
pub async fn send_chat(url: &str, text: &str) -> Result<ChatReply, ChatError> {
    let payload = serde_json::to_string(&ChatRequest {
        text: text.to_string(),
    })?;
    let (status, body) = fetch_text(url, Some(&payload))
        .await
        .map_err(ChatError::Transport)?;
    parse_reply(status, &body)
}

async fn fetch_text(url: &str, json_body: Option<&str>) -> Result<(u16, String), String> {
    let window = web_sys::window().ok_or_else(|| "no window available".to_string())?;

    let opts = RequestInit::new();
    match json_body {
        Some(body) => {
            opts.set_method("POST");
            opts.set_body(&JsValue::from_str(body));
        }
        None => opts.set_method("GET"),
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    if json_body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
    }

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    let status = response.status();
    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    Ok((status, text.as_string().unwrap_or_default()))
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
