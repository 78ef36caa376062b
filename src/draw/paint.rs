//! Ambient paint settings that tools copy onto the shapes they create or edit.

use super::color::{BLACK, Color};
use super::font::{DEFAULT_FONT_SIZE, FontDescriptor};
use super::style::DEFAULT_STROKE_WIDTH;

/// Current stroke/fill/width/font choices, owned by the host.
///
/// Tools read these when they create shapes. When the host changes them the
/// active tool re-applies them to its live or selected shape.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintSettings {
    pub stroke_color: Option<Color>,
    pub fill_color: Option<Color>,
    pub stroke_width: f64,
    pub font: FontDescriptor,
    pub font_size: f64,
}

impl Default for PaintSettings {
    fn default() -> Self {
        Self {
            stroke_color: Some(BLACK),
            fill_color: None,
            stroke_width: DEFAULT_STROKE_WIDTH,
            font: FontDescriptor::default(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl PaintSettings {
    /// Stroke color for shapes that always need ink.
    pub fn ink(&self) -> Color {
        self.stroke_color.unwrap_or(BLACK)
    }
}
