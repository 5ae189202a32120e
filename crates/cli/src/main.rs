//! Treasured Touch CLI - catalog seeding and checking tools.
//!
//! # Usage
//!
//! ```bash
//! # Write a sample catalog into the data directory
//! tt-cli seed --data-dir data
//!
//! # Overwrite an existing catalog
//! tt-cli seed --data-dir data --force
//!
//! # Parse the catalog files and report integrity problems
//! tt-cli check --data-dir data
//! ```
//!
//! # Commands
//!
//! - `seed` - Write a sample catalog (refuses to overwrite without `--force`)
//! - `check` - Parse the catalog and report duplicate ids and dangling references

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tt-cli")]
#[command(author, version, about = "Treasured Touch CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample catalog into the data directory
    Seed {
        /// Catalog data directory
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// Overwrite catalog files that already exist
        #[arg(long)]
        force: bool,
    },
    /// Parse the catalog files and report integrity problems
    Check {
        /// Catalog data directory
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { data_dir, force } => commands::seed::run(&data_dir, force).await?,
        Commands::Check { data_dir } => commands::check::run(&data_dir).await?,
    }
    Ok(())
}
