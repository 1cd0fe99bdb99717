//! Main entry point for the Quadslator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod core;
mod store;

use cli::commands::Commands;

/// Quadslator - translate text through a chat-completion endpoint
#[derive(Parser, Debug)]
#[command(name = "quadslator", version, about, long_about = None)]
struct Args {
    /// Path to the JSON configuration file
    /// (default: QUADSLATOR_CONFIG env var, then quadslator.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the translation store file
    /// (default: QUADSLATOR_STORE env var, then quadslator-store.json)
    #[arg(long)]
    store: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Resolve a path from a CLI flag, an environment variable, or a default
fn resolve_path(flag: Option<PathBuf>, env_var: &str, default: &str) -> PathBuf {
    flag.or_else(|| std::env::var_os(env_var).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(default))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={}", env!("CARGO_PKG_NAME"), log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = resolve_path(args.config, "QUADSLATOR_CONFIG", "quadslator.json");
    let store_path = resolve_path(args.store, "QUADSLATOR_STORE", "quadslator-store.json");

    match args.command {
        Commands::Translate {
            text,
            target,
            no_save,
        } => {
            cli::commands::handle_translate(text, target, no_save, &config_path, &store_path)
                .await?;
        }
        Commands::History { limit } => {
            cli::commands::handle_history(limit, &store_path).await?;
        }
    }

    Ok(())
}
