use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "order-summary", version, about = "Turn order conversations into order summaries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the summary prompt for a conversation as JSON messages.
    Prompt {
        /// JSON file with `history` and optional `finalMessage`.
        request: PathBuf,
    },
    /// Decode a model reply (stdin when no file is given) and print it as JSON.
    Decode { reply: Option<PathBuf> },
    /// Build the prompt, ask the configured model and print the decoded summary.
    Summarize { request: PathBuf },
}
