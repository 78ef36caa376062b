//! Geometry primitives and small numeric helpers.
//!
//! This module provides:
//! - [`Point`], [`Size`] and [`Rect`] in canvas units (serialized as plain arrays)
//! - Arrowhead, polygon and star vertex calculations
//! - Angle measurement between three points
//! - Velocity-based stroke width modulation for the pen tool
//! - Named color lookup used by the configuration system

use crate::draw::{Color, color::*};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

// ============================================================================
// Points and sizes
// ============================================================================

/// A point or 2D vector in canvas coordinates.
///
/// Serializes as `[x, y]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length when the point is read as a vector.
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (other - self).length()
    }

    /// Angle of the vector in radians, measured from the positive x axis.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Rotates the vector around the origin.
    pub fn rotated(self, radians: f64) -> Point {
        let (sin, cos) = radians.sin_cos();
        Point::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    pub fn approx_eq(self, other: Point) -> bool {
        (self.x - other.x).abs() < 1e-9 && (self.y - other.y).abs() < 1e-9
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Canvas dimensions. Serializes as `[width, height]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Pixel dimensions for raster buffers (at least 1x1).
    pub fn to_pixels(self) -> (i32, i32) {
        (
            self.width.ceil().max(1.0) as i32,
            self.height.ceil().max(1.0) as i32,
        )
    }
}

impl From<[f64; 2]> for Size {
    fn from([width, height]: [f64; 2]) -> Self {
        Self { width, height }
    }
}

impl From<Size> for [f64; 2] {
    fn from(size: Size) -> Self {
        [size.width, size.height]
    }
}

// ============================================================================
// Rectangles
// ============================================================================

/// Axis-aligned rectangle described by origin and size.
///
/// Serializes as `[x, y, width, height]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<[f64; 4]> for Rect {
    fn from([x, y, width, height]: [f64; 4]) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl From<Rect> for [f64; 4] {
    fn from(rect: Rect) -> Self {
        [rect.x, rect.y, rect.width, rect.height]
    }
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds the normalized rectangle spanned by two corner points.
    pub fn from_points(a: Point, b: Point) -> Self {
        Self::from_min_max(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    pub fn from_min_max(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Smallest rectangle containing every point, or `None` for an empty iterator.
    pub fn bounding<I: IntoIterator<Item = Point>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in iter {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self::from_min_max(min_x, min_y, max_x, max_y))
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Grows the rectangle by `amount` on every side (shrinks when negative).
    pub fn inflate(&self, amount: f64) -> Rect {
        Rect::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }

    pub fn offset(&self, delta: Point) -> Rect {
        Rect::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.max_x() && point.y >= self.y && point.y <= self.max_y()
    }

    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_min_max(
            self.x.min(other.x),
            self.y.min(other.y),
            self.max_x().max(other.max_x()),
            self.max_y().max(other.max_y()),
        )
    }

    /// The largest square centered inside this rectangle.
    pub fn centered_square(&self) -> Rect {
        let side = self.width.min(self.height);
        let center = self.center();
        Rect::new(center.x - side / 2.0, center.y - side / 2.0, side, side)
    }

    /// Corners in clockwise order starting at the origin.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.max_x(), self.y),
            Point::new(self.max_x(), self.max_y()),
            Point::new(self.x, self.max_y()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Returns `true` when all components are finite and the size is non-negative.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }

    /// Rounds outward to whole pixels, clipped to a `width` x `height` surface.
    pub fn to_pixel_bounds(&self, width: i32, height: i32) -> Option<Rect> {
        if !self.is_valid() {
            return None;
        }
        let min_x = self.x.floor().max(0.0);
        let min_y = self.y.floor().max(0.0);
        let max_x = self.max_x().ceil().min(width as f64);
        let max_y = self.max_y().ceil().min(height as f64);
        if max_x <= min_x || max_y <= min_y {
            return None;
        }
        Some(Rect::from_min_max(min_x, min_y, max_x, max_y))
    }
}

// ============================================================================
// Arrowhead Geometry
// ============================================================================

/// Calculates arrowhead points with custom length and angle.
///
/// Creates a V-shaped arrowhead at `tip` pointing away from `tail`. The arrowhead
/// length is capped at 30% of the line length so short arrows stay readable.
///
/// # Arguments
/// * `tip` - Point the arrow points at
/// * `tail` - Opposite end of the arrow shaft
/// * `length` - Desired arrowhead length (capped at 30% of line length)
/// * `angle_degrees` - Angle between each arrowhead line and the shaft
///
/// # Returns
/// `[left, right]` endpoints of the arrowhead lines. Both equal `tip` when the
/// line is shorter than one unit.
pub fn arrowhead_points(tip: Point, tail: Point, length: f64, angle_degrees: f64) -> [Point; 2] {
    let direction = tip - tail;
    let line_length = direction.length();

    if line_length < 1.0 {
        return [tip, tip];
    }

    let ux = direction.x / line_length;
    let uy = direction.y / line_length;
    let arrow_length = length.min(line_length * 0.3);
    let (sin_a, cos_a) = angle_degrees.to_radians().sin_cos();

    let left = Point::new(
        tip.x - arrow_length * (ux * cos_a - uy * sin_a),
        tip.y - arrow_length * (uy * cos_a + ux * sin_a),
    );
    let right = Point::new(
        tip.x - arrow_length * (ux * cos_a + uy * sin_a),
        tip.y - arrow_length * (uy * cos_a - ux * sin_a),
    );

    [left, right]
}

// ============================================================================
// Polygons
// ============================================================================

/// Vertices of a regular polygon with its first vertex pointing straight up.
pub fn polygon_points(center: Point, radius: f64, sides: u32) -> Vec<Point> {
    let sides = sides.max(3);
    let step = std::f64::consts::TAU / sides as f64;
    let offset = std::f64::consts::FRAC_PI_2;
    (0..sides)
        .map(|i| {
            let angle = step * i as f64 - offset;
            Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}

/// Vertices of a star alternating between an inner and outer radius.
///
/// `inner_radius` is the distance to the valleys; tips sit at
/// `inner_radius * pointiness`. The first tip points straight up.
pub fn star_points(center: Point, inner_radius: f64, points: u32, pointiness: f64) -> Vec<Point> {
    let points = points.max(3);
    let step = std::f64::consts::PI / points as f64;
    let offset = std::f64::consts::FRAC_PI_2;
    (0..points * 2)
        .map(|i| {
            let radius = if i % 2 == 0 {
                inner_radius * pointiness
            } else {
                inner_radius
            };
            let angle = step * i as f64 - offset;
            Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}

/// Whole degrees of the angle at `vertex` between the arms to `a` and `c`.
///
/// Returns 0 when either arm has zero length.
pub fn degrees_between(a: Point, vertex: Point, c: Point) -> i32 {
    let ab = (vertex - a).length().powi(2);
    let cb = (vertex - c).length().powi(2);
    let ac = (c - a).length().powi(2);
    if ab == 0.0 || cb == 0.0 {
        return 0;
    }
    let cos = ((ab + cb - ac) / (4.0 * ab * cb).sqrt()).clamp(-1.0, 1.0);
    cos.acos().to_degrees() as i32
}

// ============================================================================
// Stroke width modulation
// ============================================================================

/// Speed divisor applied to pointer velocity before modulating width.
pub const DEFAULT_VELOCITY_ADJUSTMENT: f64 = 600.0;

/// Thins a pen segment as the pointer speeds up.
///
/// The raw width is `width / (0.6 * speed + 0.4 * previous_speed)`, limited to
/// within 25% of `previous_width` and then to `[0.2 * width, width]`.
///
/// # Arguments
/// * `width` - Nominal stroke width
/// * `velocity` - Current pointer velocity
/// * `previous_velocity` - Velocity of the previous sample
/// * `previous_width` - Width assigned to the previous segment
/// * `velocity_adjustment` - Divisor converting velocity into a unitless speed
pub fn modulated_width(
    width: f64,
    velocity: Point,
    previous_velocity: Point,
    previous_width: f64,
    velocity_adjustment: f64,
) -> f64 {
    let adjustment = if velocity_adjustment > 0.0 {
        velocity_adjustment
    } else {
        DEFAULT_VELOCITY_ADJUSTMENT
    };
    let speed = velocity.length() / adjustment;
    let previous_speed = previous_velocity.length() / adjustment;

    let modulated = width / (0.6 * speed + 0.4 * previous_speed);
    let limited = if modulated.is_nan() {
        previous_width
    } else {
        modulated
            .max(previous_width * 0.75)
            .min(previous_width * 1.25)
    };
    limited.max(width * 0.2).min(width)
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
/// - "clear" / "transparent" for a fully transparent color
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "clear" | "transparent" => Some(TRANSPARENT),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_from_points_normalizes() {
        let rect = Rect::from_points(Point::new(10.0, 20.0), Point::new(0.0, 5.0));
        assert_eq!(rect, Rect::new(0.0, 5.0, 10.0, 15.0));
    }

    #[test]
    fn centered_square_uses_short_side() {
        let rect = Rect::new(0.0, 0.0, 40.0, 20.0).centered_square();
        assert_eq!(rect, Rect::new(10.0, 0.0, 20.0, 20.0));
    }

    #[test]
    fn pixel_bounds_round_outward_and_clip() {
        let rect = Rect::new(-2.5, 1.2, 10.0, 3.3);
        assert_eq!(
            rect.to_pixel_bounds(5, 100),
            Some(Rect::new(0.0, 1.0, 5.0, 4.0))
        );
        assert_eq!(Rect::new(50.0, 50.0, 1.0, 1.0).to_pixel_bounds(10, 10), None);
    }

    #[test]
    fn arrowhead_short_line_collapses_to_tip() {
        let tip = Point::new(5.0, 5.0);
        let points = arrowhead_points(tip, Point::new(5.2, 5.0), 20.0, 30.0);
        assert_eq!(points, [tip, tip]);
    }

    #[test]
    fn arrowhead_is_symmetric_about_shaft() {
        let points = arrowhead_points(Point::new(100.0, 0.0), Point::ZERO, 10.0, 30.0);
        assert!((points[0].x - points[1].x).abs() < 1e-9);
        assert!((points[0].y + points[1].y).abs() < 1e-9);
        assert!(points[0].x < 100.0);
    }

    #[test]
    fn polygon_first_vertex_points_up() {
        let points = polygon_points(Point::ZERO, 10.0, 3);
        assert_eq!(points.len(), 3);
        assert!(points[0].approx_eq(Point::new(0.0, -10.0)));
    }

    #[test]
    fn star_alternates_radii() {
        let points = star_points(Point::ZERO, 4.0, 5, 2.5);
        assert_eq!(points.len(), 10);
        assert!((points[0].length() - 10.0).abs() < 1e-9);
        assert!((points[1].length() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn degrees_between_right_angle() {
        let degrees = degrees_between(Point::ZERO, Point::new(10.0, 0.0), Point::new(10.0, 10.0));
        assert_eq!(degrees, 90);
        assert_eq!(degrees_between(Point::ZERO, Point::ZERO, Point::new(1.0, 0.0)), 0);
    }

    #[test]
    fn modulated_width_stays_in_bounds() {
        let width = 10.0;
        let mut previous_width = width;
        let mut previous_velocity = Point::ZERO;
        for speed in [0.0, 5.0, 120.0, 900.0, 4000.0, 20000.0, 30.0, 0.0] {
            let velocity = Point::new(speed, speed / 2.0);
            let next = modulated_width(
                width,
                velocity,
                previous_velocity,
                previous_width,
                DEFAULT_VELOCITY_ADJUSTMENT,
            );
            assert!(next >= width * 0.2 - 1e-9 && next <= width + 1e-9);
            assert!(next >= previous_width * 0.75 - 1e-9);
            assert!(next <= previous_width * 1.25 + 1e-9);
            previous_width = next;
            previous_velocity = velocity;
        }
    }

    #[test]
    fn modulated_width_at_rest_keeps_full_width() {
        let width = modulated_width(8.0, Point::ZERO, Point::ZERO, 8.0, 600.0);
        assert_eq!(width, 8.0);
    }

    #[test]
    fn name_to_color_is_case_insensitive() {
        assert_eq!(name_to_color("ReD"), Some(RED));
        assert_eq!(name_to_color("clear"), Some(TRANSPARENT));
        assert_eq!(name_to_color("teal"), None);
    }
}
