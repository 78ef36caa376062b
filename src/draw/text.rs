//! Text shapes and their externally measured bounds.

use super::color::{BLACK, Color};
use super::context::TextMeasurer;
use super::font::{DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE};
use super::paint::PaintSettings;
use super::shape::ShapeId;
use super::transform::Transform;
use crate::util::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Narrowest box a text shape is given, so empty text stays grabbable.
pub const MIN_TEXT_WIDTH: f64 = 44.0;
/// Auto-fit width limit used before the canvas size is known.
pub const DEFAULT_MAX_TEXT_WIDTH: f64 = 320.0;

/// A block of text positioned by its transform.
///
/// The bounding rect is centered on the local origin and cached, because the
/// layout engine lives outside the model. Call [`TextShape::fit_bounds`]
/// after changing text, font or width.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextShape {
    pub id: ShapeId,
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_font_name")]
    pub font_name: String,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    /// Glyph color
    #[serde(default = "default_text_color")]
    pub fill_color: Color,
    /// Fixed wrap width; `None` sizes the box to the text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_width: Option<f64>,
    #[serde(default)]
    pub bounding_rect: Rect,
    #[serde(default, skip_serializing_if = "Transform::is_identity")]
    pub transform: Transform,
    /// Set while an editor overlay owns the text; such shapes are not rendered
    #[serde(skip)]
    pub is_being_edited: bool,
}

fn default_font_name() -> String {
    DEFAULT_FONT_NAME.to_string()
}

fn default_font_size() -> f64 {
    DEFAULT_FONT_SIZE
}

fn default_text_color() -> Color {
    BLACK
}

/// Limits used when fitting a text box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextLayoutLimits {
    pub min_width: f64,
    pub max_width: f64,
}

impl Default for TextLayoutLimits {
    fn default() -> Self {
        Self {
            min_width: MIN_TEXT_WIDTH,
            max_width: DEFAULT_MAX_TEXT_WIDTH,
        }
    }
}

impl TextShape {
    pub fn new() -> Self {
        Self {
            id: ShapeId::new(),
            text: String::new(),
            font_name: default_font_name(),
            font_size: DEFAULT_FONT_SIZE,
            fill_color: BLACK,
            explicit_width: None,
            bounding_rect: Rect::ZERO,
            transform: Transform::IDENTITY,
            is_being_edited: false,
        }
    }

    /// Measures the text and returns a box centered on the local origin.
    ///
    /// With an explicit width the box takes that width. Otherwise it shrinks
    /// so the placed box stays inside `[0, limits.max_width]` horizontally.
    pub fn compute_bounds(&self, measurer: &dyn TextMeasurer, limits: TextLayoutLimits) -> Rect {
        let measure = |max_width: f64| {
            measurer.measure(&self.text, &self.font_name, self.font_size, Some(max_width))
        };
        let centered = |width: f64, height: f64| Rect::new(-width / 2.0, -height / 2.0, width, height);

        if let Some(explicit) = self.explicit_width {
            let size = measure(explicit.max(1.0));
            return centered(explicit.max(limits.min_width), size.height);
        }

        let size = measure(limits.max_width);
        let mut width = size.width.max(limits.min_width);
        let left = self.transform.translation.x - width / 2.0;
        if left < 0.0 {
            width += left;
        }
        let right = self.transform.translation.x + width / 2.0;
        if right > limits.max_width {
            width -= right - limits.max_width;
        }

        let fitted = measure(width.max(1.0));
        centered(fitted.width.max(limits.min_width), fitted.height)
    }

    /// Recomputes and stores the cached bounds.
    pub fn fit_bounds(&mut self, measurer: &dyn TextMeasurer, limits: TextLayoutLimits) {
        self.bounding_rect = self.compute_bounds(measurer, limits);
    }

    /// Tests a canvas-space point against the transformed bounds.
    pub fn hit_test(&self, point: Point) -> bool {
        self.transform
            .invert(point)
            .is_some_and(|local| self.bounding_rect.contains(local))
    }

    pub fn apply(&mut self, settings: &PaintSettings) {
        self.fill_color = settings.ink();
        self.font_name = settings.font.font_name();
        self.font_size = settings.font_size;
    }
}

impl Default for TextShape {
    fn default() -> Self {
        Self::new()
    }
}
