//! Three-point angle measurement shape.

use super::paint::PaintSettings;
use super::shape::ShapeId;
use super::style::StrokeStyle;
use super::transform::Transform;
use crate::util::{self, Point, Rect};
use serde::{Deserialize, Serialize};

/// Two arms meeting at vertex `b`, one ending at `a` and one at `c`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AngleShape {
    pub id: ShapeId,
    pub a: Point,
    pub b: Point,
    pub c: Point,
    #[serde(flatten)]
    pub style: StrokeStyle,
    #[serde(default, skip_serializing_if = "Transform::is_identity")]
    pub transform: Transform,
}

/// Radius of the arc drawn at the vertex.
pub const ARC_RADIUS: f64 = 24.0;
/// Distance from the vertex to the degree label.
pub const LABEL_RADIUS: f64 = 44.0;
pub const LABEL_FONT_SIZE: f64 = 14.0;

impl AngleShape {
    /// Creates an angle with all three points at `point`.
    pub fn new(point: Point) -> Self {
        Self {
            id: ShapeId::new(),
            a: point,
            b: point,
            c: point,
            style: StrokeStyle::default(),
            transform: Transform::IDENTITY,
        }
    }

    pub fn bounding_rect(&self) -> Rect {
        Rect::bounding([self.a, self.b, self.c])
            .unwrap_or_default()
            .inflate(self.style.stroke_width / 2.0)
    }

    /// Whole degrees between the two arms.
    pub fn degrees(&self) -> i32 {
        util::degrees_between(self.a, self.b, self.c)
    }

    /// Start and end angles (radians) of the arc at the vertex. The end is
    /// always larger, so sweeping with increasing angle covers the interior.
    pub fn arc_angles(&self) -> (f64, f64) {
        use std::f64::consts::{PI, TAU};
        let start = (self.a - self.b).angle();
        let mut sweep = (self.c - self.b).angle() - start;
        if sweep <= -PI {
            sweep += TAU;
        } else if sweep > PI {
            sweep -= TAU;
        }
        if sweep >= 0.0 {
            (start, start + sweep)
        } else {
            (start + sweep, start)
        }
    }

    /// Top-left of the degree label, placed on the bisector of the arc.
    pub fn label_origin(&self) -> Point {
        let (start, end) = self.arc_angles();
        let center_angle = (start + end) / 2.0;
        Point::new(
            self.b.x + center_angle.cos() * LABEL_RADIUS - LABEL_FONT_SIZE / 2.0,
            self.b.y + center_angle.sin() * LABEL_RADIUS - LABEL_FONT_SIZE / 2.0,
        )
    }

    pub fn apply(&mut self, settings: &PaintSettings) {
        self.style.stroke_color = Some(settings.ink());
        self.style.stroke_width = settings.stroke_width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_angle_measures_ninety_degrees() {
        let mut angle = AngleShape::new(Point::ZERO);
        angle.b = Point::new(10.0, 0.0);
        angle.c = Point::new(10.0, 10.0);
        assert_eq!(angle.degrees(), 90);
    }

    #[test]
    fn bounds_cover_all_three_points() {
        let mut angle = AngleShape::new(Point::ZERO);
        angle.style.stroke_width = 2.0;
        angle.b = Point::new(10.0, 0.0);
        angle.c = Point::new(10.0, 10.0);
        assert_eq!(angle.bounding_rect(), Rect::new(-1.0, -1.0, 12.0, 12.0));
    }

    #[test]
    fn label_sits_between_the_arms() {
        let mut angle = AngleShape::new(Point::new(-10.0, 0.0));
        angle.b = Point::ZERO;
        angle.c = Point::new(0.0, -10.0);
        let label = angle.label_origin();
        let center = Point::new(
            label.x + LABEL_FONT_SIZE / 2.0,
            label.y + LABEL_FONT_SIZE / 2.0,
        );
        assert!(center.x < 0.0 && center.y < 0.0);
    }

    #[test]
    fn arc_sweeps_the_interior_angle() {
        let mut angle = AngleShape::new(Point::ZERO);
        angle.a = Point::new(10.0, 0.0);
        angle.c = Point::new(0.0, 10.0);
        let (start, end) = angle.arc_angles();
        assert!((end - start - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }
}
