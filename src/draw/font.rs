//! Font descriptor for text shapes.

use serde::{Deserialize, Serialize};

/// Font used for text shapes, stored on the shape as a single font name.
///
/// The name is a Pango-style description without the size, for example
/// `"Sans Bold"` or `"Helvetica Neue Italic"`. Sizes travel separately so that
/// resizing a text shape never rewrites its font name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Monospace", "Helvetica Neue")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,
}

/// Font name given to text shapes when nothing else is configured.
pub const DEFAULT_FONT_NAME: &str = "Helvetica Neue";

/// Default text size in points.
pub const DEFAULT_FONT_SIZE: f64 = 24.0;

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_NAME.to_string(), "normal".to_string(), "normal".to_string())
    }
}

impl FontDescriptor {
    /// Creates a new font descriptor with the specified parameters.
    pub fn new(family: String, weight: String, style: String) -> Self {
        Self {
            family,
            weight,
            style,
        }
    }

    /// Font name as stored on text shapes: "Family Style Weight".
    pub fn font_name(&self) -> String {
        let mut parts = vec![self.family.clone()];

        if self.style.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.style));
        }

        if self.weight.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.weight));
        }

        parts.join(" ")
    }
}

/// Joins a stored font name and a point size into a Pango description.
pub fn pango_string(font_name: &str, size: f64) -> String {
    format!("{} {}", font_name.trim(), size.round().max(1.0) as i32)
}

/// Capitalizes the first letter of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_font_name_is_plain_family() {
        let font = FontDescriptor::default();
        assert_eq!(font.font_name(), "Helvetica Neue");
        assert_eq!(pango_string(&font.font_name(), 24.0), "Helvetica Neue 24");
    }

    #[test]
    fn style_and_weight_are_appended() {
        let font = FontDescriptor::new(
            "Monospace".to_string(),
            "bold".to_string(),
            "italic".to_string(),
        );
        assert_eq!(
            pango_string(&font.font_name(), 16.4),
            "Monospace Italic Bold 16"
        );
    }

    #[test]
    fn pango_string_never_emits_zero_size() {
        assert_eq!(pango_string("Sans ", 0.2), "Sans 1");
    }
}
