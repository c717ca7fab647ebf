mod commands;
mod config;
mod processor;
mod util;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "navgen")]
#[command(version, about = "NavGen CLI - type-safe Compose navigation from a screen manifest", long_about = None)]
struct Cli {
    /// Screen manifest
    #[arg(short, long, global = true, default_value = "navgen.toml")]
    manifest: PathBuf,

    /// More logging (-v debug, -vv trace); RUST_LOG applies otherwise
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one source file per screen
    Generate {
        /// Output root; files land under their package directories
        #[arg(short, long, default_value = "generated")]
        out: PathBuf,
    },

    /// Print the route pattern of every screen
    Routes,

    /// Validate every screen without writing files
    Check,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Logs go to stderr so `routes` output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate { out } => {
            commands::generate::execute(&cli.manifest, &out)?;
        }
        Commands::Routes => {
            commands::routes::execute(&cli.manifest)?;
        }
        Commands::Check => {
            commands::check::execute(&cli.manifest)?;
        }
    }

    Ok(())
}
