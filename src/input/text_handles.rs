//! Control handles drawn around a text shape while it is edited.

use crate::draw::TextShape;
use crate::util::{Point, Rect};

/// Side length of each square handle.
pub const DEFAULT_HANDLE_SIZE: f64 = 36.0;

/// Which control (if any) a point falls on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleArea {
    None,
    Delete,
    ResizeAndRotate,
    ChangeWidth,
}

/// Handle layout in the shape's local space, around its bounding rect `r`:
/// delete above-left, resize/rotate below-right, change-width above-right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextHandles {
    pub size: f64,
}

impl Default for TextHandles {
    fn default() -> Self {
        Self {
            size: DEFAULT_HANDLE_SIZE,
        }
    }
}

impl TextHandles {
    pub fn new(size: f64) -> Self {
        Self { size }
    }

    pub fn delete_rect(&self, r: Rect) -> Rect {
        Rect::new(r.x - self.size, r.y - 3.0 - self.size, self.size, self.size)
    }

    pub fn resize_rect(&self, r: Rect) -> Rect {
        Rect::new(r.max_x() + 5.0, r.max_y() + 4.0, self.size, self.size)
    }

    pub fn width_rect(&self, r: Rect) -> Rect {
        Rect::new(r.max_x() + 5.0, r.y - 4.0 - self.size, self.size, self.size)
    }

    /// Classifies a canvas-space point against the shape's handles.
    ///
    /// The point is mapped into local space first, so handles follow the
    /// shape's rotation and scale.
    pub fn area_at(&self, shape: &TextShape, point: Point) -> HandleArea {
        let Some(local) = shape.transform.invert(point) else {
            return HandleArea::None;
        };
        let r = shape.bounding_rect;
        if self.delete_rect(r).contains(local) {
            HandleArea::Delete
        } else if self.resize_rect(r).contains(local) {
            HandleArea::ResizeAndRotate
        } else if self.width_rect(r).contains(local) {
            HandleArea::ChangeWidth
        } else {
            HandleArea::None
        }
    }
}
