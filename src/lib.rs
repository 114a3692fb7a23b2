use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

pub mod ai;
pub mod catalog;
mod cli;
mod config;
pub mod decoder;
pub mod guide;
pub mod order;
pub mod prompt;
mod text_utils;

pub use catalog::{extract_menu_key, normalize_menu_key, Catalog, CatalogRecord};
pub use config::Config;
pub use decoder::{parse_summary_text, DecodeError};
pub use guide::{build_menu_item_guide, build_style_guide};
pub use order::{MenuComponent, OrderItem, OrderSummary};
pub use prompt::{build_summary_prompt, ChatMessage, OrderConfirmRequest, Role};

use cli::{Cli, Command};

// ──────────────────────────────────────────────────────────────
// Command line entry point
// ──────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Prompt { request } => {
            let request = read_request(&request)?;
            let catalog = Catalog::load(&config.catalog_path)?;
            let messages = build_summary_prompt(
                &catalog,
                &request.history,
                request.final_message.as_deref().unwrap_or_default(),
                &config.assumed_date,
            );
            println!("{}", serde_json::to_string_pretty(&messages)?);
        }
        Command::Decode { reply } => {
            let raw = match reply {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read reply {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let summary = parse_summary_text(&raw)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Command::Summarize { request } => {
            let ai = config
                .ai
                .as_ref()
                .ok_or_else(|| anyhow!("OPENAI_API_KEY is not set"))?;
            let request = read_request(&request)?;
            let catalog = Catalog::load(&config.catalog_path)?;
            let summary =
                ai::summary::summarize_order(ai, &catalog, &request, &config.assumed_date).await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}

fn read_request(path: &Path) -> Result<OrderConfirmRequest> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read request {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid request {}", path.display()))
}
