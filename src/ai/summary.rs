use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

use crate::ai::common::{build_chat_body, parse_chat_content, send_openai_request, OPENAI_CHAT_URL};
use crate::ai::config::AiConfig;
use crate::catalog::Catalog;
use crate::decoder::parse_summary_text;
use crate::order::OrderSummary;
use crate::prompt::{build_summary_prompt, ChatMessage, OrderConfirmRequest};

/// Ask the model for a summary and return its raw reply text.
#[instrument(level = "trace", skip(ai, messages))]
pub async fn request_summary_text(ai: &AiConfig, messages: &[ChatMessage; 2]) -> Result<String> {
    let url = ai.openai_chat_url.as_deref().unwrap_or(OPENAI_CHAT_URL);
    let body = build_chat_body(&ai.summary_model, messages);

    debug!(url, model = %ai.summary_model, "sending summary request");

    let client = reqwest::Client::new();
    let builder = client.post(url).json(&body);
    let resp = send_openai_request(&ai.api_key, builder).await?;

    let raw = resp.text().await?;
    let snippet: String = raw.chars().take(200).collect();
    debug!(snippet = %snippet, "summary response body");
    parse_chat_content(&raw)
}

/// Build the prompt for a confirmed conversation, call the model and decode
/// its reply.
#[instrument(level = "trace", skip_all)]
pub async fn summarize_order(
    ai: &AiConfig,
    catalog: &Catalog,
    request: &OrderConfirmRequest,
    assumed_date: &str,
) -> Result<OrderSummary> {
    let messages = build_summary_prompt(
        catalog,
        &request.history,
        request.final_message.as_deref().unwrap_or_default(),
        assumed_date,
    );
    let reply = request_summary_text(ai, &messages).await?;
    let summary = parse_summary_text(&reply).context("failed to decode summary reply")?;
    info!(items = summary.order_items.len(), "Order summarized");
    Ok(summary)
}
