//! CLI entry point for cleverbot.

pub mod chat;

use clap::{Parser, Subcommand};

/// Cleverbot CLI
#[derive(Parser, Debug)]
#[command(name = "cleverbot", version, about = "Chat with cleverbot.com from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chat line by line over stdin
    Chat(ChatArgs),
}

/// Arguments for the `chat` subcommand.
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Use the official REST API instead of the web endpoint
    #[arg(long)]
    pub official: bool,

    /// API key for the official API (defaults to CLEVERBOT_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Override the host (defaults to CLEVERBOT_BASE_URL / CLEVERBOT_API_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Wackiness 0-100 (official API only)
    #[arg(long)]
    pub wackiness: Option<u32>,

    /// Talkativeness 0-100 (official API only)
    #[arg(long)]
    pub talkativeness: Option<u32>,

    /// Attentiveness 0-100 (official API only)
    #[arg(long)]
    pub attentiveness: Option<u32>,
}
