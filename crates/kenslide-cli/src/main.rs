use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kenslide_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "kenslide")]
#[command(author, version, about = "A smooth-scrolling terminal image carousel")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory of images to show (shorthand for `run`)
    dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the carousel on a directory of images
    Run {
        /// Directory to scan (defaults to the current directory)
        dir: Option<PathBuf>,
    },
    /// Print the images the carousel would show, in order
    List {
        /// Directory to scan (defaults to the current directory)
        dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    match cli.command {
        Some(Commands::Run { dir }) => commands::run::run(config, resolve_dir(dir)).await,
        Some(Commands::List { dir }) => commands::list::run(&resolve_dir(dir)),
        None => commands::run::run(config, resolve_dir(cli.dir)).await,
    }
}

fn resolve_dir(dir: Option<PathBuf>) -> PathBuf {
    dir.unwrap_or_else(|| PathBuf::from("."))
}
