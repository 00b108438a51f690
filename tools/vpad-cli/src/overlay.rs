//! Shared setup: config loading and building a laid-out controller

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use std::path::Path;
use vpad_core::geometry::Rect;
use vpad_core::{Config, LayoutContext, SystemInputLayout, VController, config};

/// Built-in system descriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SystemPreset {
    /// Two face buttons, select and start
    TwoButton,
    /// Four face buttons plus two shoulder triggers
    Triggers,
    /// Two face buttons and an on-screen keyboard
    Computer,
}

/// Viewport and system options shared by every command
#[derive(Args, Debug, Clone)]
pub struct OverlayArgs {
    /// Viewport width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: i32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: i32,

    /// System to lay out
    #[arg(short, long, value_enum, default_value = "two-button")]
    pub system: SystemPreset,

    /// Override the number of face buttons (2, 3, 4, 6 or 8)
    #[arg(long)]
    pub face_buttons: Option<u8>,

    /// Override the number of center buttons (1 or 2)
    #[arg(long)]
    pub center_buttons: Option<u8>,

    /// Swap the visual face button order
    #[arg(long)]
    pub reversed: bool,

    /// Lay triggers out with the face buttons
    #[arg(long)]
    pub triggers_inline: bool,
}

impl OverlayArgs {
    pub fn system(&self) -> Result<SystemInputLayout> {
        let mut system = match self.system {
            SystemPreset::TwoButton => SystemInputLayout::two_button(),
            SystemPreset::Triggers => SystemInputLayout::with_triggers(),
            SystemPreset::Computer => SystemInputLayout::computer(),
        };
        if let Some(count) = self.face_buttons {
            if !matches!(count, 2 | 3 | 4 | 6 | 8) {
                bail!("Unsupported face button count: {}", count);
            }
            system.face_buttons = count;
        }
        if let Some(count) = self.center_buttons {
            if !(1..=2).contains(&count) {
                bail!("Unsupported center button count: {}", count);
            }
            system.center_buttons = count;
        }
        if system.has_trigger_buttons && system.face_buttons < 4 {
            bail!("Systems with triggers need at least 4 face buttons");
        }
        system.reversed_face_layout = self.reversed;
        Ok(system)
    }

    pub fn context(&self) -> Result<LayoutContext> {
        if self.width <= 0 || self.height <= 0 {
            bail!("Viewport must be non-empty, got {}x{}", self.width, self.height);
        }
        Ok(LayoutContext::new(Rect::new(0, 0, self.width, self.height)))
    }

    /// Controller sized from `config` and placed at the default positions
    pub fn build(&self, config: &Config) -> Result<(VController, LayoutContext)> {
        let ctx = self.context()?;
        let mut config = config.clone();
        if self.triggers_inline {
            config.layout.triggers_inline = true;
        }
        let mut ctrl = VController::new(self.system()?, &config);
        ctrl.resize(&ctx);
        ctrl.apply_default_layout(&ctx);
        tracing::debug!("laid out {} controls", ctrl.num_elements());
        Ok((ctrl, ctx))
    }
}

/// Load an explicit config file, or the user's config with defaults as
/// fallback
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) if path.exists() => config::load_from(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        Some(path) => {
            tracing::info!("{} does not exist, using defaults", path.display());
            Ok(Config::default())
        }
        None => Ok(config::load()),
    }
}
