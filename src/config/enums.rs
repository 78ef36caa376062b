//! Configuration enum types.

use crate::draw::{BLACK, Color};
use crate::util::name_to_color;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, a hex string or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// stroke_color = "red"
///
/// # Hex color, optionally with alpha
/// stroke_color = "#ff8000"
///
/// # Custom RGB color (0-255 per component)
/// stroke_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black, clear)
    /// or a `#rrggbb` / `#rrggbbaa` hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Parses the specification, returning `None` for unknown names and bad hex.
    pub fn parse(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(name) if name.trim_start().starts_with('#') => Color::from_hex(name),
            ColorSpec::Name(name) => name_to_color(name),
            ColorSpec::Rgb([r, g, b]) => Some(Color::new(
                *r as f64 / 255.0,
                *g as f64 / 255.0,
                *b as f64 / 255.0,
                1.0,
            )),
        }
    }

    /// Converts the color specification to a [`Color`].
    ///
    /// Unknown names and malformed hex fall back to black with a warning.
    pub fn to_color(&self) -> Color {
        self.parse().unwrap_or_else(|| {
            warn!("Unknown color {:?}, using black", self);
            BLACK
        })
    }
}

impl From<&str> for ColorSpec {
    fn from(value: &str) -> Self {
        ColorSpec::Name(value.to_string())
    }
}
