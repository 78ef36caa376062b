//! Configuration file support for sketchboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchboard/config.toml`. Settings include paint defaults,
//! pen behavior, text box metrics, and how strictly drawing documents are decoded.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DrawingConfig, PenConfig, SerializationConfig, TextConfig};

use crate::draw::{DecodeMode, FontDescriptor, PaintSettings};
use crate::input::{TextToolOptions, ToolOptions};
use anyhow::{Context, Result};
use log::{debug, info, warn};
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
/// stroke_color = "red"
/// fill_color = "#ffee0080"
/// stroke_width = 4.0
/// font_family = "Sans"
/// font_size = 18.0
///
/// [pen]
/// velocity_based_width = true
/// velocity_adjustment = 600.0
///
/// [text]
/// min_width = 44.0
/// default_max_width = 320.0
/// handle_size = 36.0
///
/// [serialization]
/// strict_decode = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Paint defaults (colors, stroke width, font)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Freehand pen behavior
    #[serde(default)]
    pub pen: PenConfig,

    /// Text box layout and handles
    #[serde(default)]
    pub text: TextConfig,

    /// Drawing document decoding
    #[serde(default)]
    pub serialization: SerializationConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `stroke_width`: 0.5 - 100.0
    /// - `font_size`: 6.0 - 144.0
    /// - `velocity_adjustment`: 1.0 - 10000.0
    /// - `text.min_width`: 8.0 - 400.0
    /// - `text.default_max_width`: `text.min_width` - 8192.0
    /// - `text.handle_size`: 8.0 - 128.0
    pub fn validate_and_clamp(&mut self) {
        clamp_setting("stroke_width", &mut self.drawing.stroke_width, 0.5, 100.0);
        clamp_setting("font_size", &mut self.drawing.font_size, 6.0, 144.0);
        clamp_setting(
            "velocity_adjustment",
            &mut self.pen.velocity_adjustment,
            1.0,
            10000.0,
        );
        clamp_setting("text.min_width", &mut self.text.min_width, 8.0, 400.0);
        let min_width = self.text.min_width;
        clamp_setting(
            "text.default_max_width",
            &mut self.text.default_max_width,
            min_width,
            8192.0,
        );
        clamp_setting("text.handle_size", &mut self.text.handle_size, 8.0, 128.0);

        if self.drawing.stroke_color.parse().is_none() {
            warn!(
                "Invalid stroke_color {:?}, falling back to 'black'",
                self.drawing.stroke_color
            );
            self.drawing.stroke_color = ColorSpec::from("black");
        }

        if let Some(fill) = &self.drawing.fill_color
            && fill.parse().is_none()
        {
            warn!("Invalid fill_color {fill:?}, disabling fill");
            self.drawing.fill_color = None;
        }

        // Validate font weight is reasonable
        let valid_weight = matches!(
            self.drawing.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .drawing
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.drawing.font_weight
            );
            self.drawing.font_weight = "normal".to_string();
        }

        // Validate font style
        if !matches!(
            self.drawing.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.drawing.font_style
            );
            self.drawing.font_style = "normal".to_string();
        }
    }

    /// Paint settings a new editor starts with.
    pub fn paint_settings(&self) -> PaintSettings {
        let drawing = &self.drawing;
        PaintSettings {
            stroke_color: Some(drawing.stroke_color.to_color()),
            fill_color: drawing.fill_color.as_ref().map(ColorSpec::to_color),
            stroke_width: drawing.stroke_width,
            font: FontDescriptor::new(
                drawing.font_family.clone(),
                drawing.font_weight.clone(),
                drawing.font_style.clone(),
            ),
            font_size: drawing.font_size,
        }
    }

    /// Options used when building tools.
    pub fn tool_options(&self) -> ToolOptions {
        ToolOptions {
            velocity_based_width: self.pen.velocity_based_width,
            velocity_adjustment: self.pen.velocity_adjustment,
            text: TextToolOptions {
                min_width: self.text.min_width,
                default_max_width: self.text.default_max_width,
                handle_size: self.text.handle_size,
            },
        }
    }

    pub fn decode_mode(&self) -> DecodeMode {
        DecodeMode::from_strict(self.serialization.strict_decode)
    }

    /// JSON schema describing the config file, for editors and validators.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchboard");

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
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does not exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }
}

fn clamp_setting(name: &str, value: &mut f64, min: f64, max: f64) {
    if !value.is_finite() {
        warn!("Invalid {name} {value}, using {min:.1}");
        *value = min;
    } else if !(min..=max).contains(value) {
        warn!("Invalid {name} {value:.1}, clamping to {min:.1}-{max:.1} range");
        *value = value.clamp(min, max);
    }
}
