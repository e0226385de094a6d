//! Pasteburn CLI
//!
//! Command-line front-end for creating and reading burn-after-reading pastes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use pasteburn_client::ServiceConfig;

mod commands;
mod ui;

#[derive(Parser)]
#[command(name = "pasteburn")]
#[command(about = "Pasteburn CLI - share text that is deleted on first read", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Paste service URL (can also be set via PASTEBURN_URL env var)
    #[arg(long, global = true)]
    server: Option<String>,

    /// Request timeout in seconds (can also be set via PASTEBURN_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a new paste and print its id
    Create {
        /// 32-character access key
        #[arg(short, long)]
        key: String,

        /// Paste text
        #[arg(short, long, conflicts_with = "file")]
        body: Option<String>,

        /// Read the paste text from a file
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Read a paste (this burns it)
    View {
        /// 32-character access key
        #[arg(short, long)]
        key: String,

        /// Document id returned by `create`
        #[arg(short, long)]
        id: String,

        /// Print the raw service response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a random 32-character access key
    GenKey,

    /// Interactive session
    Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("pasteburn=debug,pasteburn_client=debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("pasteburn=info,pasteburn_client=warn")
            .with_writer(std::io::stderr)
            .init();
    }

    let mut config = ServiceConfig::from_env();
    if let Some(server) = cli.server {
        config.base_url = server;
    }
    if let Some(timeout) = cli.timeout {
        config = config.with_timeout(timeout);
    }
    tracing::debug!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "service config");

    match cli.command {
        Commands::Create { key, body, file } => {
            commands::create::run(&config, key, body, file, cli.verbose).await?;
        }
        Commands::View { key, id, json } => {
            commands::view::run(&config, key, id, json, cli.verbose).await?;
        }
        Commands::GenKey => {
            commands::gen_key::run(cli.verbose)?;
        }
        Commands::Shell => {
            commands::shell::run(&config).await?;
        }
    }

    Ok(())
}
