//! Configuration file support for roughboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/roughboard/config.toml`. Settings include the pen, the
//! hand-drawn style and the canvas surface.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, RoughConfig};

use crate::draw::{Color, StrokeStyle};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "graphite"
/// stroke_width = 2.0
/// default_tool = "rectangle"
///
/// [rough]
/// roughness = 1.5
/// seed = 7
///
/// [canvas]
/// width = 1280
/// height = 720
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Pen and tool defaults
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Hand-drawn style
    #[serde(default)]
    pub rough: RoughConfig,

    /// Canvas surface
    #[serde(default)]
    pub canvas: CanvasConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `stroke_width`: 1.0 - 20.0
    /// - `roughness`, `bowing`: 0.0 - 10.0
    /// - `canvas.width`, `canvas.height`: 16 - 8192
    pub fn validate_and_clamp(&mut self) {
        if !(1.0..=20.0).contains(&self.drawing.stroke_width) {
            log::warn!(
                "Invalid stroke_width {:.1}, clamping to 1.0-20.0 range",
                self.drawing.stroke_width
            );
            self.drawing.stroke_width = self.drawing.stroke_width.clamp(1.0, 20.0);
        }

        if !(0.0..=10.0).contains(&self.rough.roughness) {
            log::warn!(
                "Invalid roughness {:.2}, clamping to 0.0-10.0 range",
                self.rough.roughness
            );
            self.rough.roughness = self.rough.roughness.clamp(0.0, 10.0);
        }

        if !(0.0..=10.0).contains(&self.rough.bowing) {
            log::warn!(
                "Invalid bowing {:.2}, clamping to 0.0-10.0 range",
                self.rough.bowing
            );
            self.rough.bowing = self.rough.bowing.clamp(0.0, 10.0);
        }

        for (name, value) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !(16..=8192).contains(&*value) {
                log::warn!("Invalid canvas {name} {value}, clamping to 16-8192 range");
                *value = (*value).clamp(16, 8192);
            }
        }
    }

    /// Pen used to paint every shape.
    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.drawing.default_color.to_color(),
            width: self.drawing.stroke_width,
        }
    }

    pub fn background_color(&self) -> Color {
        Color::from_rgb8(self.canvas.background)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/roughboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("roughboard");

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

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Writes the documented example config to the default location.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Tool;

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.drawing.stroke_width, 2.0);
        assert_eq!(config.drawing.default_tool, Tool::Segment);
        assert_eq!(config.drawing.max_shapes, 0);
        assert!(config.rough.double_stroke);
        assert_eq!(config.canvas.width, 1280);
    }

    #[test]
    fn parses_sections() {
        let config: Config = toml::from_str(
            r#"
            [drawing]
            default_color = [10, 20, 30]
            default_tool = "rect"
            max_shapes = 12

            [rough]
            roughness = 0.0
            seed = 99
            "#,
        )
        .unwrap();

        assert_eq!(config.drawing.default_color, ColorSpec::Rgb([10, 20, 30]));
        assert_eq!(config.drawing.default_tool, Tool::Rectangle);
        assert_eq!(config.drawing.max_shapes, 12);
        assert_eq!(config.rough.roughness, 0.0);
        assert_eq!(config.rough.seed, 99);
        assert_eq!(config.rough.bowing, 1.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::default();
        config.drawing.stroke_width = 0.2;
        config.rough.roughness = 42.0;
        config.rough.bowing = -1.0;
        config.canvas.width = 4;
        config.canvas.height = 100_000;

        config.validate_and_clamp();

        assert_eq!(config.drawing.stroke_width, 1.0);
        assert_eq!(config.rough.roughness, 10.0);
        assert_eq!(config.rough.bowing, 0.0);
        assert_eq!(config.canvas.width, 16);
        assert_eq!(config.canvas.height, 8192);
    }

    #[test]
    fn example_config_parses() {
        let config: Config = toml::from_str(include_str!("../../config.example.toml")).unwrap();
        assert_eq!(config.drawing.stroke_width, 2.0);
        assert_eq!(config.drawing.default_tool, Tool::Segment);
    }

    #[test]
    fn load_from_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn schema_mentions_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("drawing"));
        assert!(schema.contains("roughness"));
    }
}
