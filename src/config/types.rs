//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::font::{DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE};
use crate::draw::style::DEFAULT_STROKE_WIDTH;
use crate::draw::text::{DEFAULT_MAX_TEXT_WIDTH, MIN_TEXT_WIDTH};
use crate::input::text_handles::DEFAULT_HANDLE_SIZE;
use crate::util::DEFAULT_VELOCITY_ADJUSTMENT;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Paint settings a new editor starts with.
///
/// Hosts can change these at runtime through `Editor::update_settings`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Stroke color - a named color (red, green, blue, yellow, orange, pink, white, black),
    /// a hex string like `"#ff0000"` or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_stroke_color")]
    pub stroke_color: ColorSpec,

    /// Fill color for closed shapes; omit for unfilled shapes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<ColorSpec>,

    /// Stroke width in canvas units (valid range: 0.5 - 100.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Font family name for text shapes (e.g., "Sans", "Monospace", "Helvetica Neue")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", or numeric 100-900)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,

    /// Font size for text shapes in points (valid range: 6.0 - 144.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            stroke_color: default_stroke_color(),
            fill_color: None,
            stroke_width: default_stroke_width(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
            font_size: default_font_size(),
        }
    }
}

/// Freehand pen behavior.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PenConfig {
    /// Thin the stroke as the pointer moves faster
    #[serde(default = "default_velocity_based_width")]
    pub velocity_based_width: bool,

    /// Speed divisor for width thinning; larger values thin less (valid range: 1.0 - 10000.0)
    #[serde(default = "default_velocity_adjustment")]
    pub velocity_adjustment: f64,
}

impl Default for PenConfig {
    fn default() -> Self {
        Self {
            velocity_based_width: default_velocity_based_width(),
            velocity_adjustment: default_velocity_adjustment(),
        }
    }
}

/// Text box layout and editing handles.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TextConfig {
    /// Narrowest text box width (valid range: 8.0 - 400.0)
    #[serde(default = "default_text_min_width")]
    pub min_width: f64,

    /// Auto-fit width limit; the canvas width is used when larger (valid range: min_width - 8192.0)
    #[serde(default = "default_text_max_width")]
    pub default_max_width: f64,

    /// Side length of the delete, resize and width handles (valid range: 8.0 - 128.0)
    #[serde(default = "default_handle_size")]
    pub handle_size: f64,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            min_width: default_text_min_width(),
            default_max_width: default_text_max_width(),
            handle_size: default_handle_size(),
        }
    }
}

/// Drawing document decoding.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SerializationConfig {
    /// Fail on the first unknown or malformed shape instead of skipping it
    #[serde(default)]
    pub strict_decode: bool,
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_stroke_width() -> f64 {
    DEFAULT_STROKE_WIDTH
}

fn default_font_family() -> String {
    DEFAULT_FONT_NAME.to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_font_size() -> f64 {
    DEFAULT_FONT_SIZE
}

fn default_velocity_based_width() -> bool {
    true
}

fn default_velocity_adjustment() -> f64 {
    DEFAULT_VELOCITY_ADJUSTMENT
}

fn default_text_min_width() -> f64 {
    MIN_TEXT_WIDTH
}

fn default_text_max_width() -> f64 {
    DEFAULT_MAX_TEXT_WIDTH
}

fn default_handle_size() -> f64 {
    DEFAULT_HANDLE_SIZE
}
