//! vpad CLI - Inspect virtual controller layouts without a renderer
//!
//! # Commands
//!
//! - `vpad layout` - Lay the overlay out for a viewport and print every region
//! - `vpad dpad-map` - Print the d-pad direction map as ASCII
//! - `vpad probe` - Press (and optionally drag) a pointer and print the resulting actions
//! - `vpad init-config` - Write a config file holding the default settings
//!
//! # Usage
//!
//! ```bash
//! # Regions of a six-button system with separate triggers on a 1280x720 screen
//! vpad layout --system triggers --width 1280 --height 720
//!
//! # What a touch at (700, 560) presses
//! vpad probe 700 560
//! ```

mod dpad_map;
mod init;
mod layout;
mod overlay;
mod probe;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// vpad CLI - Inspect virtual controller layouts
#[derive(Parser)]
#[command(name = "vpad")]
#[command(about = "Inspect virtual controller overlay layouts")]
#[command(version)]
struct Cli {
    /// Config file to use instead of the platform config directory
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay the overlay out and print control regions
    Layout(layout::LayoutArgs),

    /// Print the d-pad direction map
    DpadMap(dpad_map::DpadMapArgs),

    /// Send a pointer press through the overlay and print the actions
    Probe(probe::ProbeArgs),

    /// Write the default settings to a config file
    InitConfig(init::InitArgs),
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = overlay::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Layout(args) => layout::execute(args, &config),
        Commands::DpadMap(args) => dpad_map::execute(args, &config),
        Commands::Probe(args) => probe::execute(args, &config),
        Commands::InitConfig(args) => init::execute(args, cli.config),
    }
}
