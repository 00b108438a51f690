//! Configuration management (~/.config/vpad/config.toml)
//!
//! Handles loading, saving, and providing defaults for overlay settings.
//! Settings are stored in TOML format in the platform-specific config directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Largest accepted button size in pixels
pub const MAX_BUTTON_SIZE: u32 = 1024;

/// Errors produced while reading or writing the configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read or written
    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// File contents are not valid TOML for [`Config`]
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be encoded
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value is outside its accepted range
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Overlay configuration.
///
/// Serialized to/from TOML format for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Button sizes and arrangement
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Touch feedback and repeat settings
    #[serde(default)]
    pub input: InputConfig,
}

/// Layout parameters read on every layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Gamepad button size in pixels (default: 64)
    #[serde(default = "default_button_size")]
    pub button_size: u32,
    /// Menu and fast-forward button size in pixels (default: 48)
    #[serde(default = "default_ui_button_size")]
    pub ui_button_size: u32,
    /// Gap between face buttons in pixels (default: 8)
    #[serde(default = "default_button_spacing")]
    pub button_spacing: i32,
    /// Horizontal shift between face button rows in pixels (default: 0)
    #[serde(default)]
    pub row_shift: i32,
    /// Vertical stagger between neighbouring face buttons in pixels (default: 0)
    #[serde(default)]
    pub stagger: i32,
    /// Extra hit width as a fraction of the button size (default: 0.2)
    #[serde(default = "default_extra_x_size")]
    pub extra_x_size: f32,
    /// Extra hit height for single-row layouts (default: 0.4)
    #[serde(default = "default_extra_y_size")]
    pub extra_y_size: f32,
    /// Extra hit height for multi-row layouts (default: 0.2)
    #[serde(default = "default_extra_y_size_multi_row")]
    pub extra_y_size_multi_row: f32,
    /// D-pad deadzone radius in pixels (default: 24)
    #[serde(default = "default_dpad_deadzone")]
    pub dpad_deadzone: i32,
    /// Divisor applied to the diagonal deadzone growth (default: 1.75)
    #[serde(default = "default_dpad_diagonal_sensitivity")]
    pub dpad_diagonal_sensitivity: f32,
    /// Lay trigger buttons out in the face button rows (default: false)
    #[serde(default)]
    pub triggers_inline: bool,
    /// Overlay opacity (default: 0.5, range: 0.0-1.0)
    #[serde(default = "default_alpha")]
    pub alpha: f32,
    /// Draw hit regions on top of the controls (default: false)
    #[serde(default)]
    pub show_bounding_area: bool,
}

/// Touch feedback configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Vibrate briefly when a virtual button is pressed (default: true)
    #[serde(default = "default_true")]
    pub vibrate_on_push: bool,
    /// Vibration length in milliseconds (default: 32)
    #[serde(default = "default_vibration_ms")]
    pub vibration_ms: u64,
    /// Frames per turbo press/release cycle (default: 4)
    #[serde(default = "default_turbo_frames")]
    pub turbo_frames: u32,
}

fn default_button_size() -> u32 {
    64
}
fn default_ui_button_size() -> u32 {
    48
}
fn default_button_spacing() -> i32 {
    8
}
fn default_extra_x_size() -> f32 {
    0.2
}
fn default_extra_y_size() -> f32 {
    0.4
}
fn default_extra_y_size_multi_row() -> f32 {
    0.2
}
fn default_dpad_deadzone() -> i32 {
    24
}
fn default_dpad_diagonal_sensitivity() -> f32 {
    1.75
}
fn default_alpha() -> f32 {
    0.5
}
fn default_true() -> bool {
    true
}
fn default_vibration_ms() -> u64 {
    32
}
fn default_turbo_frames() -> u32 {
    4
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            button_size: default_button_size(),
            ui_button_size: default_ui_button_size(),
            button_spacing: default_button_spacing(),
            row_shift: 0,
            stagger: 0,
            extra_x_size: default_extra_x_size(),
            extra_y_size: default_extra_y_size(),
            extra_y_size_multi_row: default_extra_y_size_multi_row(),
            dpad_deadzone: default_dpad_deadzone(),
            dpad_diagonal_sensitivity: default_dpad_diagonal_sensitivity(),
            triggers_inline: false,
            alpha: default_alpha(),
            show_bounding_area: false,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            vibrate_on_push: default_true(),
            vibration_ms: default_vibration_ms(),
            turbo_frames: default_turbo_frames(),
        }
    }
}

impl LayoutConfig {
    /// Check ranges that would otherwise break the layout math
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_button_size("layout.button_size", self.button_size)?;
        check_button_size("layout.ui_button_size", self.ui_button_size)?;
        if self.button_spacing < 0 {
            return Err(ConfigError::Invalid {
                field: "layout.button_spacing",
                reason: format!("{} is negative", self.button_spacing),
            });
        }
        if self.dpad_deadzone < 0 {
            return Err(ConfigError::Invalid {
                field: "layout.dpad_deadzone",
                reason: format!("{} is negative", self.dpad_deadzone),
            });
        }
        if !(self.dpad_diagonal_sensitivity > 0.0) {
            return Err(ConfigError::Invalid {
                field: "layout.dpad_diagonal_sensitivity",
                reason: format!("{} must be positive", self.dpad_diagonal_sensitivity),
            });
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(ConfigError::Invalid {
                field: "layout.alpha",
                reason: format!("{} is outside 0.0-1.0", self.alpha),
            });
        }
        Ok(())
    }
}

fn check_button_size(field: &'static str, size: u32) -> Result<(), ConfigError> {
    if size == 0 || size > MAX_BUTTON_SIZE {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("{size} is outside 1-{MAX_BUTTON_SIZE}"),
        });
    }
    Ok(())
}

impl InputConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.turbo_frames < 2 {
            return Err(ConfigError::Invalid {
                field: "input.turbo_frames",
                reason: format!("{} is below the 2 frame minimum", self.turbo_frames),
            });
        }
        Ok(())
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()?;
        self.input.validate()
    }
}

/// Returns the platform-specific configuration directory.
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.vpad", "", "vpad").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Loads the configuration from the platform config directory.
///
/// Returns default values if the file doesn't exist or cannot be parsed.
pub fn load() -> Config {
    match config_dir() {
        Some(dir) => match load_from(&dir.join("config.toml")) {
            Ok(config) => config,
            Err(ConfigError::Io(_)) => Config::default(),
            Err(e) => {
                tracing::warn!("Ignoring config file: {}", e);
                Config::default()
            }
        },
        None => Config::default(),
    }
}

/// Reads and validates a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or
/// holds out-of-range values.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Writes the configuration to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file
/// cannot be written.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Saves the configuration to the platform config directory.
pub fn save(config: &Config) -> Result<(), ConfigError> {
    match config_dir() {
        Some(dir) => save_to(config, &dir.join("config.toml")),
        None => Ok(()),
    }
}
