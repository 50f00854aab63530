//! Cleverbot CLI binary entry point.

use clap::Parser;
use cleverbot::cli::{chat, ChatArgs, Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Chat(chat_args) => handle_chat(chat_args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn handle_chat(args: ChatArgs) -> cleverbot::error::Result<()> {
    let mut bot = chat::connect(&args).await?;
    tracing::debug!(backend = bot.backend_name(), "connected");

    println!("Press CTRL-C to exit.");

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    chat::run(bot.as_mut(), stdin, tokio::io::stdout()).await
}
