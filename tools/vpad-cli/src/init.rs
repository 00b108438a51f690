//! Init-config command - write the default settings

use anyhow::{Context, Result, bail};
use clap::Args;
use std::path::PathBuf;
use vpad_core::{Config, config};

/// Arguments for the init-config command
#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

/// Execute the init-config command
pub fn execute(args: InitArgs, path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => config::config_dir()
            .context("Could not determine the config directory")?
            .join("config.toml"),
    };
    if path.exists() && !args.force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    config::save_to(&Config::default(), &path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
