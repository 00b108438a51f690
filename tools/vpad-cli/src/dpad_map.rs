//! D-pad map command - visualize direction zones

use anyhow::{Result, bail};
use clap::Args;
use vpad_core::Config;
use vpad_core::config::MAX_BUTTON_SIZE;
use vpad_core::controls::DPad;

/// Arguments for the dpad-map command
#[derive(Args)]
pub struct DpadMapArgs {
    /// Button size the pad is derived from (defaults to the config value)
    #[arg(long)]
    pub button_size: Option<i32>,

    /// Deadzone radius in pixels (defaults to the config value)
    #[arg(long)]
    pub deadzone: Option<i32>,

    /// Diagonal sensitivity (defaults to the config value)
    #[arg(long)]
    pub sensitivity: Option<f32>,

    /// Sample every N pixels
    #[arg(long, default_value_t = 8)]
    pub step: usize,
}

pub fn build_map(args: &DpadMapArgs, config: &Config) -> Result<String> {
    let button_size = args.button_size.unwrap_or(config.layout.button_size as i32);
    if button_size <= 0 || button_size > MAX_BUTTON_SIZE as i32 {
        bail!("Button size must be 1-{}, got {}", MAX_BUTTON_SIZE, button_size);
    }
    let sensitivity = args
        .sensitivity
        .unwrap_or(config.layout.dpad_diagonal_sensitivity);
    if !(sensitivity > 0.0) {
        bail!("Sensitivity must be positive, got {}", sensitivity);
    }
    let mut dpad = DPad::new(
        args.deadzone.unwrap_or(config.layout.dpad_deadzone),
        sensitivity,
    );
    dpad.set_size(DPad::size_for_button(button_size));
    Ok(dpad.build_input_map().to_ascii(args.step))
}

/// Execute the dpad-map command
pub fn execute(args: DpadMapArgs, config: &Config) -> Result<()> {
    print!("{}", build_map(&args, config)?);
    println!(". none   + cardinal   x diagonal");
    Ok(())
}
