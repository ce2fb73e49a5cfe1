//! One-shot chatbot client.

use argo_core::chat::{reply_text, ChatClient};
use log::info;

/// Send `message` to the webhook and print the reply, or the fallback text
/// when the call fails.
pub async fn run_chat(webhook: &str, message: &str) -> anyhow::Result<()> {
    if message.trim().is_empty() {
        anyhow::bail!("message is empty");
    }
    info!("Posting chat message to {}", webhook);
    let client = ChatClient::new(webhook);
    println!("{}", reply_text(client.send(message).await));
    Ok(())
}
