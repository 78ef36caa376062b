//! Shape identity and the closed set of shape kinds.

use super::angle::AngleShape;
use super::context::DrawContext;
use super::paint::PaintSettings;
use super::pen::PenShape;
use super::render;
use super::text::TextShape;
use super::transform::Transform;
use super::two_point::{TwoPointKind, TwoPointShape};
use crate::util::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identity of a shape, preserved across undo/redo and serialization.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(String);

impl ShapeId {
    /// Generates a fresh random id.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ShapeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents a drawable shape on the canvas.
///
/// Every variant carries its own id and paint so it renders independently.
/// The codec maps each variant (and each two-point kind) to a stable `type` tag.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Line, arrow, rectangle, ellipse, polygon or star
    TwoPoint(TwoPointShape),
    /// Angle measurement with a vertex and two arms
    Angle(AngleShape),
    /// Freehand pen or eraser stroke
    Pen(PenShape),
    /// Text block
    Text(TextShape),
}

impl Shape {
    pub fn id(&self) -> &ShapeId {
        match self {
            Shape::TwoPoint(shape) => &shape.id,
            Shape::Angle(shape) => &shape.id,
            Shape::Pen(shape) => &shape.id,
            Shape::Text(shape) => &shape.id,
        }
    }

    /// Wire tag written as the `type` field.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Shape::TwoPoint(shape) => match shape.kind {
                TwoPointKind::Line | TwoPointKind::Arrow => "Line",
                TwoPointKind::Rectangle => "Rectangle",
                TwoPointKind::Ellipse => "Ellipse",
                TwoPointKind::Ngon(_) => "Ngon",
                TwoPointKind::Star => "Star",
            },
            Shape::Angle(_) => "Angle",
            Shape::Pen(_) => "Pen",
            Shape::Text(_) => "Text",
        }
    }

    /// Bounds in the shape's local space, before its transform.
    pub fn bounding_rect(&self) -> Rect {
        match self {
            Shape::TwoPoint(shape) => shape.bounding_rect(),
            Shape::Angle(shape) => shape.bounding_rect(),
            Shape::Pen(shape) => shape.bounding_rect(),
            Shape::Text(shape) => shape.bounding_rect,
        }
    }

    /// Axis-aligned canvas-space bounds, after the transform.
    ///
    /// Suitable for damage tracking.
    pub fn canvas_bounds(&self) -> Rect {
        let local = self.bounding_rect();
        match self.transform() {
            Some(transform) if !transform.is_identity() => {
                Rect::bounding(local.corners().map(|p| transform.apply(p))).unwrap_or(local)
            }
            _ => local,
        }
    }

    pub fn transform(&self) -> Option<&Transform> {
        match self {
            Shape::TwoPoint(shape) => Some(&shape.transform),
            Shape::Angle(shape) => Some(&shape.transform),
            Shape::Text(shape) => Some(&shape.transform),
            Shape::Pen(_) => None,
        }
    }

    pub fn transform_mut(&mut self) -> Option<&mut Transform> {
        match self {
            Shape::TwoPoint(shape) => Some(&mut shape.transform),
            Shape::Angle(shape) => Some(&mut shape.transform),
            Shape::Text(shape) => Some(&mut shape.transform),
            Shape::Pen(_) => None,
        }
    }

    /// Replaces the transform; returns `false` for shapes without one.
    pub fn set_transform(&mut self, transform: Transform) -> bool {
        match self.transform_mut() {
            Some(slot) => {
                *slot = transform;
                true
            }
            None => false,
        }
    }

    /// Shapes the selection tool may pick up.
    pub fn is_selectable(&self) -> bool {
        self.transform().is_some()
    }

    /// Tests `point` (canvas space) against the bounding rect after undoing
    /// the shape's transform. Freehand strokes never hit.
    pub fn hit_test(&self, point: Point) -> bool {
        let Some(transform) = self.transform() else {
            return false;
        };
        transform
            .invert(point)
            .is_some_and(|local| self.bounding_rect().contains(local))
    }

    /// Copies the current paint settings onto the shape.
    pub fn apply(&mut self, settings: &PaintSettings) {
        match self {
            Shape::TwoPoint(shape) => shape.apply(settings),
            Shape::Angle(shape) => shape.apply(settings),
            Shape::Pen(shape) => shape.apply(settings),
            Shape::Text(shape) => shape.apply(settings),
        }
    }

    pub fn render(&self, ctx: &mut dyn DrawContext) {
        render::render_shape(ctx, self);
    }

    pub fn as_text(&self) -> Option<&TextShape> {
        match self {
            Shape::Text(shape) => Some(shape),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextShape> {
        match self {
            Shape::Text(shape) => Some(shape),
            _ => None,
        }
    }
}

impl From<TwoPointShape> for Shape {
    fn from(shape: TwoPointShape) -> Self {
        Shape::TwoPoint(shape)
    }
}

impl From<AngleShape> for Shape {
    fn from(shape: AngleShape) -> Self {
        Shape::Angle(shape)
    }
}

impl From<PenShape> for Shape {
    fn from(shape: PenShape) -> Self {
        Shape::Pen(shape)
    }
}

impl From<TextShape> for Shape {
    fn from(shape: TextShape) -> Self {
        Shape::Text(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn square(a: (f64, f64), b: (f64, f64), width: f64) -> TwoPointShape {
        let mut shape = TwoPointShape::new(TwoPointKind::Rectangle, Point::new(a.0, a.1));
        shape.b = Point::new(b.0, b.1);
        shape.style.stroke_width = width;
        shape
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(ShapeId::new(), ShapeId::new());
    }

    #[test]
    fn hit_test_respects_rotation_about_center() {
        let mut shape = square((0.0, 0.0), (10.0, 10.0), 2.0);
        // 180 degrees about (5, 5): p -> -p + (10, 10)
        shape.transform = Transform::new(Point::new(10.0, 10.0), PI, 1.0);
        let shape = Shape::from(shape);
        assert!(shape.hit_test(Point::new(0.0, 0.0)));
        assert!(shape.hit_test(Point::new(10.5, 10.5)));
        assert!(!shape.hit_test(Point::new(-2.0, -2.0)));
    }

    #[test]
    fn hit_test_uses_inverse_transform() {
        let mut shape = square((0.0, 0.0), (10.0, 4.0), 0.0);
        shape.transform = Transform::new(Point::ZERO, PI / 2.0, 1.0);
        let shape = Shape::from(shape);
        // Rotated 90 degrees the rect covers x in [-4, 0] and y in [0, 10].
        assert!(shape.hit_test(Point::new(-2.0, 8.0)));
        assert!(!shape.hit_test(Point::new(8.0, 2.0)));
    }

    #[test]
    fn degenerate_scale_never_hits() {
        let mut shape = square((0.0, 0.0), (10.0, 10.0), 2.0);
        shape.transform = Transform::IDENTITY.scaled(0.0);
        assert!(!Shape::from(shape).hit_test(Point::ZERO));
    }

    #[test]
    fn pen_strokes_are_not_selectable() {
        let pen = Shape::from(PenShape::new(Point::new(1.0, 1.0)));
        assert!(!pen.is_selectable());
        assert!(!pen.hit_test(Point::new(1.0, 1.0)));
    }

    #[test]
    fn canvas_bounds_follow_translation() {
        let mut shape = square((0.0, 0.0), (10.0, 10.0), 0.0);
        shape.transform = Transform::IDENTITY.translated(Point::new(5.0, -5.0));
        let bounds = Shape::from(shape).canvas_bounds();
        assert_eq!(bounds, Rect::new(5.0, -5.0, 10.0, 10.0));
    }

    #[test]
    fn arrow_and_line_share_the_line_tag() {
        let arrow = Shape::from(TwoPointShape::new(TwoPointKind::Arrow, Point::ZERO));
        assert_eq!(arrow.type_tag(), "Line");
    }
}
