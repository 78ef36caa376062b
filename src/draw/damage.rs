//! Damage tracking for incremental presentation.
//!
//! Collects canvas-space rectangles that changed between two presented frames.

use super::Shape;
use crate::util::Rect;

/// Extra margin around shape bounds to cover antialiasing.
const SHAPE_MARGIN: f64 = 2.0;

/// Tracks damaged rectangles accumulated between frames.
#[derive(Debug, Default)]
pub struct DamageTracker {
    regions: Vec<Rect>,
    force_full: bool,
}

impl DamageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entire surface as damaged. Clears any accumulated rectangles.
    pub fn mark_full(&mut self) {
        self.force_full = true;
        self.regions.clear();
    }

    /// Adds a damaged rectangle unless the tracker is already full.
    pub fn mark_rect(&mut self, rect: Rect) {
        if !rect.is_valid() || rect.is_empty() || self.force_full {
            return;
        }
        self.regions.push(rect);
    }

    /// Adds the canvas bounds of `shape`.
    ///
    /// Pen strokes and eraser strokes are covered the same way: their bounds
    /// already include the widest segment.
    pub fn mark_shape(&mut self, shape: &Shape) {
        let bounds = shape.canvas_bounds();
        if bounds.is_valid() {
            self.mark_rect(bounds.inflate(SHAPE_MARGIN));
        } else {
            self.mark_full();
        }
    }

    pub fn is_clean(&self) -> bool {
        !self.force_full && self.regions.is_empty()
    }

    /// Drains the damage gathered so far as whole-pixel rectangles clipped to
    /// a `width` x `height` surface.
    ///
    /// Full damage comes back as a single rectangle covering the surface.
    pub fn take_regions(&mut self, width: i32, height: i32) -> Vec<Rect> {
        if self.force_full {
            self.force_full = false;
            self.regions.clear();
            return Rect::new(0.0, 0.0, width as f64, height as f64)
                .to_pixel_bounds(width, height)
                .into_iter()
                .collect();
        }
        self.regions
            .drain(..)
            .filter_map(|rect| rect.to_pixel_bounds(width, height))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{TwoPointKind, TwoPointShape};
    use crate::util::Point;

    fn line(a: (f64, f64), b: (f64, f64)) -> Shape {
        let mut shape = TwoPointShape::new(TwoPointKind::Line, Point::new(a.0, a.1));
        shape.b = Point::new(b.0, b.1);
        shape.style.stroke_width = 2.0;
        Shape::from(shape)
    }

    #[test]
    fn mark_shape_records_rectangles() {
        let mut tracker = DamageTracker::new();
        tracker.mark_shape(&line((0.0, 0.0), (10.0, 10.0)));

        let rects = tracker.take_regions(100, 100);
        assert_eq!(rects.len(), 1);
        assert!(rects[0].width > 10.0);
        assert!(rects[0].height > 10.0);
        assert!(tracker.is_clean());
    }

    #[test]
    fn mark_full_takes_precedence() {
        let mut tracker = DamageTracker::new();
        tracker.mark_shape(&line((5.0, 5.0), (15.0, 15.0)));
        tracker.mark_full();
        tracker.mark_shape(&line((20.0, 20.0), (35.0, 35.0)));

        let rects = tracker.take_regions(200, 100);
        assert_eq!(rects, vec![Rect::new(0.0, 0.0, 200.0, 100.0)]);
    }

    #[test]
    fn offscreen_damage_is_dropped() {
        let mut tracker = DamageTracker::new();
        tracker.mark_rect(Rect::new(500.0, 500.0, 10.0, 10.0));
        assert!(tracker.take_regions(100, 100).is_empty());
    }
}
