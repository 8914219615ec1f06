//! Configuration file support for mapdraw.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/mapdraw/config.toml`. Settings include draw tool behavior,
//! the extent preview symbol and the tooltip style.
//!
//! If no config file exists, defaults matching the stock draw tools are used.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{ExtentSymbolConfig, ToolsConfig, TooltipConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [tools]
/// show_tooltips = true
/// tooltip_offset = 15
///
/// [extent_symbol]
/// fill_color = [30, 144, 255]
/// fill_opacity = 0.4
/// style = "solid"
/// outline_color = "royalblue"
/// outline_width = 1.0
///
/// [tooltip]
/// text_color = "#49b0f2"
/// background_color = "white"
/// font_size_rem = 0.8
/// padding_px = 5
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Draw tool behavior
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Preview rectangle symbol for the extent tool
    #[serde(default)]
    pub extent_symbol: ExtentSymbolConfig,

    /// Tooltip label appearance
    #[serde(default)]
    pub tooltip: TooltipConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    /// Non-finite numbers (`nan`, `inf`) fall back to their defaults.
    ///
    /// Validated ranges:
    /// - `tools.tooltip_offset`: 0 - 200
    /// - `extent_symbol.fill_opacity`: 0.0 - 1.0
    /// - `extent_symbol.outline_width`: 0.0 - 20.0
    /// - `tooltip.font_size_rem`: 0.5 - 4.0
    /// - `tooltip.padding_px`: 0 - 50
    pub fn validate_and_clamp(&mut self) {
        if !(0..=200).contains(&self.tools.tooltip_offset) {
            log::warn!(
                "Invalid tooltip_offset {}, clamping to 0-200 range",
                self.tools.tooltip_offset
            );
            self.tools.tooltip_offset = self.tools.tooltip_offset.clamp(0, 200);
        }

        let defaults = Self::default();
        reset_non_finite(
            "fill_opacity",
            &mut self.extent_symbol.fill_opacity,
            defaults.extent_symbol.fill_opacity,
        );
        reset_non_finite(
            "outline_width",
            &mut self.extent_symbol.outline_width,
            defaults.extent_symbol.outline_width,
        );
        reset_non_finite(
            "tooltip font_size_rem",
            &mut self.tooltip.font_size_rem,
            defaults.tooltip.font_size_rem,
        );

        if !(0.0..=1.0).contains(&self.extent_symbol.fill_opacity) {
            log::warn!(
                "Invalid fill_opacity {:.2}, clamping to 0.0-1.0 range",
                self.extent_symbol.fill_opacity
            );
            self.extent_symbol.fill_opacity = self.extent_symbol.fill_opacity.clamp(0.0, 1.0);
        }

        if !(0.0..=20.0).contains(&self.extent_symbol.outline_width) {
            log::warn!(
                "Invalid outline_width {:.1}, clamping to 0.0-20.0 range",
                self.extent_symbol.outline_width
            );
            self.extent_symbol.outline_width = self.extent_symbol.outline_width.clamp(0.0, 20.0);
        }

        if !(0.5..=4.0).contains(&self.tooltip.font_size_rem) {
            log::warn!(
                "Invalid tooltip font_size_rem {:.2}, clamping to 0.5-4.0 range",
                self.tooltip.font_size_rem
            );
            self.tooltip.font_size_rem = self.tooltip.font_size_rem.clamp(0.5, 4.0);
        }

        if self.tooltip.padding_px > 50 {
            log::warn!(
                "Invalid tooltip padding_px {}, clamping to 50",
                self.tooltip.padding_px
            );
            self.tooltip.padding_px = 50;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/mapdraw/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("mapdraw");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses a config from TOML text without validation.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

fn reset_non_finite(name: &str, value: &mut f64, default: f64) {
    if !value.is_finite() {
        log::warn!("Invalid {name} {value}, using default {default}");
        *value = default;
    }
}
