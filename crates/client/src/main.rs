//! Arena client binary.
//!
//! Loads content, assembles the battle service and runs one subcommand.
//!
//! # Examples
//!
//! ```bash
//! arena roster
//! arena battle alice-kyuu bob-shimi --seed 42
//! arena replay alice-kyuu bob-shimi --seed 42
//! arena series alice bob -n 10
//! ```

use std::path::PathBuf;

use anyhow::Result;
use arena_client::{Command, logging};
use clap::Parser;
use client_bootstrap::{ArenaBuilder, ArenaConfig};

/// PvP arena battle simulator
#[derive(Parser)]
#[command(name = "arena")]
#[command(about = "Simulate and audit PvP battles", long_about = None)]
#[command(version)]
struct Cli {
    /// Content data directory (overrides CONTENT_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let mut config = ArenaConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }

    logging::setup_logging(config.log_dir.as_deref(), cli.verbose)?;

    let setup = ArenaBuilder::new(config).build()?;
    cli.command.execute(setup.service).await
}
