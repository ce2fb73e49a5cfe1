//! Command implementations for the Argo CLI.
//!
//! Provides subcommands that run the same load -> lookup -> extract
//! pipeline as the web dashboard, plus a one-shot chat client.

use argo_core::Field;
use clap::Subcommand;

pub mod chat;
pub mod search;

#[derive(Subcommand)]
pub enum Command {
    /// Look up a float and print its position and both profile series
    Search {
        /// Dataset location: http(s) URL or file path
        #[arg(short = 's', long, env = "ARGO_DATASET")]
        source: String,

        /// Float identifier (case-insensitive)
        id: String,

        /// Print the lookup result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one series of a float, or write it to CSV
    Series {
        /// Dataset location: http(s) URL or file path
        #[arg(short = 's', long, env = "ARGO_DATASET")]
        source: String,

        /// Float identifier (case-insensitive)
        id: String,

        /// temperature or salinity
        #[arg(short = 'f', long, default_value = "temperature")]
        field: Field,

        /// Output path for an `x,y` CSV instead of printing
        #[arg(long)]
        csv: Option<String>,
    },

    /// List every map marker and the bounds that fit them
    Markers {
        /// Dataset location: http(s) URL or file path
        #[arg(short = 's', long, env = "ARGO_DATASET")]
        source: String,
    },

    /// Send one message to the chatbot webhook
    Chat {
        /// Webhook URL
        #[arg(short = 'w', long, env = "ARGO_CHAT_WEBHOOK")]
        webhook: String,

        /// Message text
        message: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Search { source, id, json } => search::run_search(&source, &id, json).await,
        Command::Series {
            source,
            id,
            field,
            csv,
        } => search::run_series(&source, &id, field, csv.as_deref()).await,
        Command::Markers { source } => search::run_markers(&source).await,
        Command::Chat { webhook, message } => chat::run_chat(&webhook, &message).await,
    }
}
