//! Translate/rotate/scale transform carried by every movable shape.

use crate::util::Point;
use serde::{Deserialize, Serialize};

/// Affine placement of a shape: scale first, then rotate, then translate.
///
/// Copied by value whenever it changes, so operations can hold the old and new
/// transform side by side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Offset applied last
    #[serde(default)]
    pub translation: Point,
    /// Rotation in radians
    #[serde(default)]
    pub rotation: f64,
    /// Uniform scale factor
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_scale() -> f64 {
    1.0
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Point::ZERO,
        rotation: 0.0,
        scale: 1.0,
    };

    pub fn new(translation: Point, rotation: f64, scale: f64) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Maps a shape-local point into canvas space.
    pub fn apply(&self, point: Point) -> Point {
        (point * self.scale).rotated(self.rotation) + self.translation
    }

    /// Maps a canvas point back into shape-local space.
    ///
    /// Returns `None` for a degenerate (zero or non-finite) scale.
    pub fn invert(&self, point: Point) -> Option<Point> {
        if self.scale == 0.0 || !self.scale.is_finite() {
            return None;
        }
        Some((point - self.translation).rotated(-self.rotation) * (1.0 / self.scale))
    }

    pub fn translated(&self, delta: Point) -> Transform {
        Transform {
            translation: self.translation + delta,
            ..*self
        }
    }

    pub fn rotated(&self, radians: f64) -> Transform {
        Transform {
            rotation: self.rotation + radians,
            ..*self
        }
    }

    pub fn scaled(&self, factor: f64) -> Transform {
        Transform {
            scale: self.scale * factor,
            ..*self
        }
    }

    /// Row-major affine coefficients `(xx, yx, xy, yy, x0, y0)` in Cairo's order.
    pub fn matrix(&self) -> [f64; 6] {
        let (sin, cos) = self.rotation.sin_cos();
        [
            cos * self.scale,
            sin * self.scale,
            -sin * self.scale,
            cos * self.scale,
            self.translation.x,
            self.translation.y,
        ]
    }
}
