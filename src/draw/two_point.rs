//! Shapes defined by two corner points: lines, arrows, rectangles, ellipses,
//! regular polygons and stars.

use super::paint::PaintSettings;
use super::shape::ShapeId;
use super::style::StrokeStyle;
use super::transform::Transform;
use crate::util::{self, Point, Rect};
use serde::{Deserialize, Serialize};

/// Which figure a [`TwoPointShape`] draws between its corners.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TwoPointKind {
    #[default]
    Line,
    /// Line with a V head at `b`
    Arrow,
    Rectangle,
    Ellipse,
    /// Regular polygon with the given number of sides (at least 3)
    Ngon(u32),
    /// Five-pointed star
    Star,
}

impl TwoPointKind {
    /// Closed figures get a fill pass.
    pub fn is_closed(&self) -> bool {
        !matches!(self, TwoPointKind::Line | TwoPointKind::Arrow)
    }

    /// Polygons and stars are drawn inside the square inscribed in the corners.
    pub fn uses_square(&self) -> bool {
        matches!(self, TwoPointKind::Ngon(_) | TwoPointKind::Star)
    }
}

/// A shape spanned by corner points `a` and `b`.
///
/// `kind` is not part of the serialized object; the codec writes it as the
/// `type` tag (plus `sides` / `arrowStyle`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TwoPointShape {
    pub id: ShapeId,
    #[serde(skip)]
    pub kind: TwoPointKind,
    pub a: Point,
    pub b: Point,
    #[serde(flatten)]
    pub style: StrokeStyle,
    #[serde(default, skip_serializing_if = "Transform::is_identity")]
    pub transform: Transform,
}

/// Arrowhead opening angle in degrees.
const ARROW_ANGLE_DEGREES: f64 = 30.0;
/// Star tips sit this many times further out than its valleys.
pub const STAR_POINTINESS: f64 = 2.5;

impl TwoPointShape {
    /// Creates a degenerate shape at `point` with default paint.
    pub fn new(kind: TwoPointKind, point: Point) -> Self {
        Self {
            id: ShapeId::new(),
            kind,
            a: point,
            b: point,
            style: StrokeStyle::default(),
            transform: Transform::IDENTITY,
        }
    }

    /// Normalized rectangle between the two corners.
    pub fn rect(&self) -> Rect {
        Rect::from_points(self.a, self.b)
    }

    /// Local-space bounds: the corner rectangle grown by half the stroke, or the
    /// inscribed square for polygons and stars.
    pub fn bounding_rect(&self) -> Rect {
        if self.kind.uses_square() {
            return self.rect().centered_square();
        }
        let mut rect = self.rect();
        if self.kind == TwoPointKind::Arrow {
            for p in self.arrowhead() {
                rect = rect.union(&Rect::new(p.x, p.y, 0.0, 0.0));
            }
        }
        rect.inflate(self.style.stroke_width / 2.0)
    }

    /// Arrowhead endpoints at `b`, scaled with the stroke width.
    pub fn arrowhead(&self) -> [Point; 2] {
        let length = (self.style.stroke_width * 4.0).max(12.0);
        util::arrowhead_points(self.b, self.a, length, ARROW_ANGLE_DEGREES)
    }

    /// Outline vertices for polygons and stars, inset so the stroke stays
    /// inside the square.
    pub fn polygon(&self) -> Vec<Point> {
        let square = self.rect().centered_square();
        let radius = ((square.width - self.style.stroke_width) / 2.0).max(0.0);
        match self.kind {
            TwoPointKind::Ngon(sides) => util::polygon_points(square.center(), radius, sides),
            TwoPointKind::Star => {
                util::star_points(square.center(), radius / STAR_POINTINESS, 5, STAR_POINTINESS)
            }
            _ => Vec::new(),
        }
    }

    pub fn apply(&mut self, settings: &PaintSettings) {
        self.style.stroke_color = settings.stroke_color;
        self.style.stroke_width = settings.stroke_width;
        if self.kind.is_closed() {
            self.style.fill_color = settings.fill_color;
        } else {
            // Open paths have nothing to fill and always need ink.
            self.style.stroke_color = Some(settings.ink());
        }
    }
}
