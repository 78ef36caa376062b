//! Freehand pen and eraser strokes.

use super::color::{BLACK, Color};
use super::paint::PaintSettings;
use super::shape::ShapeId;
use super::style::DEFAULT_STROKE_WIDTH;
use crate::util::{Point, Rect};
use serde::{Deserialize, Serialize};

/// One sampled step of a stroke, with its own width.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PenLineSegment {
    pub a: Point,
    pub b: Point,
    pub width: f64,
}

impl PenLineSegment {
    pub fn midpoint(&self) -> Point {
        self.a.midpoint(self.b)
    }
}

/// Freehand stroke: a start point followed by width-carrying segments.
///
/// Rendered as quadratic curves through segment midpoints. An eraser stroke
/// clears pixels instead of painting them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenShape {
    pub id: ShapeId,
    pub start: Point,
    #[serde(default = "default_pen_color")]
    pub stroke_color: Color,
    #[serde(default = "default_pen_width")]
    pub stroke_width: f64,
    #[serde(default)]
    pub segments: Vec<PenLineSegment>,
    #[serde(default = "default_finished")]
    pub is_finished: bool,
    #[serde(default)]
    pub is_eraser: bool,
}

fn default_pen_color() -> Color {
    BLACK
}

fn default_pen_width() -> f64 {
    DEFAULT_STROKE_WIDTH
}

fn default_finished() -> bool {
    true
}

impl PenShape {
    /// Starts an unfinished stroke at `start`.
    pub fn new(start: Point) -> Self {
        Self {
            id: ShapeId::new(),
            start,
            stroke_color: BLACK,
            stroke_width: DEFAULT_STROKE_WIDTH,
            segments: Vec::new(),
            is_finished: false,
            is_eraser: false,
        }
    }

    pub fn add_segment(&mut self, segment: PenLineSegment) {
        self.segments.push(segment);
    }

    /// End of the stroke so far.
    pub fn last_point(&self) -> Point {
        self.segments.last().map(|s| s.b).unwrap_or(self.start)
    }

    /// Width of the newest segment, or the nominal width before any segment.
    pub fn last_width(&self) -> f64 {
        self.segments
            .last()
            .map(|s| s.width)
            .unwrap_or(self.stroke_width)
    }

    /// Stroke without segments; rendered as a dot.
    pub fn is_dot(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn bounding_rect(&self) -> Rect {
        let points = std::iter::once(self.start).chain(self.segments.iter().flat_map(|s| [s.a, s.b]));
        let widest = self
            .segments
            .iter()
            .map(|s| s.width)
            .fold(self.stroke_width, f64::max);
        Rect::bounding(points)
            .unwrap_or_default()
            .inflate(widest / 2.0)
    }

    pub fn apply(&mut self, settings: &PaintSettings) {
        self.stroke_color = settings.ink();
        self.stroke_width = settings.stroke_width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(a: (f64, f64), b: (f64, f64), width: f64) -> PenLineSegment {
        PenLineSegment {
            a: Point::new(a.0, a.1),
            b: Point::new(b.0, b.1),
            width,
        }
    }

    #[test]
    fn dot_bounds_cover_stroke_width() {
        let mut pen = PenShape::new(Point::new(10.0, 10.0));
        pen.stroke_width = 4.0;
        assert!(pen.is_dot());
        assert_eq!(pen.bounding_rect(), Rect::new(8.0, 8.0, 4.0, 4.0));
    }

    #[test]
    fn bounds_use_widest_segment() {
        let mut pen = PenShape::new(Point::ZERO);
        pen.stroke_width = 2.0;
        pen.add_segment(segment((0.0, 0.0), (10.0, 0.0), 6.0));
        assert_eq!(pen.bounding_rect(), Rect::new(-3.0, -3.0, 16.0, 6.0));
        assert_eq!(pen.last_point(), Point::new(10.0, 0.0));
        assert_eq!(pen.last_width(), 6.0);
    }

    #[test]
    fn decode_defaults_to_finished_ink_stroke() {
        let pen: PenShape =
            serde_json::from_str(r#"{"id":"p1","start":[1,2],"segments":[]}"#).unwrap();
        assert!(pen.is_finished);
        assert!(!pen.is_eraser);
        assert_eq!(pen.stroke_color, BLACK);
    }
}
