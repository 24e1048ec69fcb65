//! BookCrew CLI — the main entry point.
//!
//! Commands:
//! - `demo` — ingest a built-in sample story and run scripted questions
//! - `chat` — ingest a document and answer questions interactively

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "bookcrew",
    about = "BookCrew — multi-agent document question answering",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in demo: sample story plus scripted questions
    Demo,

    /// Ingest a document and answer questions interactively
    Chat {
        /// Path to the document to ingest
        #[arg(short, long)]
        book: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Demo => commands::demo::run().await?,
        Commands::Chat { book } => commands::chat::run(&book).await?,
    }

    Ok(())
}
