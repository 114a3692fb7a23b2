use anyhow::{anyhow, Result};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{trace, warn};

use crate::prompt::ChatMessage;

pub const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatContent,
}

#[derive(Deserialize)]
struct ChatContent {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Chat completion body for plain-text replies.
pub fn build_chat_body(model: &str, messages: &[ChatMessage]) -> Value {
    json!({
        "model": model,
        "temperature": 0,
        "messages": messages,
    })
}

/// Send an authorized request and turn non-2xx statuses into errors.
pub async fn send_openai_request(
    api_key: &str,
    builder: reqwest::RequestBuilder,
) -> Result<reqwest::Response> {
    let resp = builder.bearer_auth(api_key).send().await?;
    if !resp.status().is_success() {
        let status = resp.status();
        let err_text = resp.text().await.unwrap_or_default();
        warn!(%status, "OpenAI API error");
        return Err(anyhow!("OpenAI API error {status}: {err_text}"));
    }
    Ok(resp)
}

/// Extract the first choice's message text from a chat completion body.
pub fn parse_chat_content(raw: &str) -> Result<String> {
    trace!(raw = %raw, "chat response");
    let chat: ChatResponse = serde_json::from_str(raw)?;
    let content = chat
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("missing chat choice"))?
        .message
        .content
        .unwrap_or_default();
    Ok(content.trim().to_string())
}
