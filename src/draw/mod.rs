//! Shape model, drawing container and rendering (Cairo-based backend).
//!
//! This module defines the core drawing types of the editor:
//! - [`Shape`]: the closed set of annotation kinds, each with its own paint
//! - [`Drawing`]: ordered shape list that queues [`DrawingEvent`]s
//! - [`DrawContext`] / [`TextMeasurer`]: backend seams, implemented for Cairo/Pango
//! - [`codec`]: JSON document encoding with lenient or strict decoding
//! - Rendering functions that walk shapes into a [`DrawContext`]

pub mod angle;
pub mod cairo_backend;
pub mod codec;
pub mod color;
pub mod context;
pub mod damage;
pub mod drawing;
pub mod font;
pub mod paint;
pub mod pen;
pub mod render;
pub mod shape;
pub mod style;
pub mod text;
pub mod transform;
pub mod two_point;

// Re-export commonly used types at module level
pub use angle::AngleShape;
pub use cairo_backend::{CairoContext, PangoMeasurer};
pub use codec::{DecodeError, DecodeMode, decode_drawing, drawing_to_string, encode_drawing};
pub use color::Color;
pub use context::{CompositeMode, DrawContext, FixedMetrics, TextMeasurer, TextRun};
pub use damage::DamageTracker;
pub use drawing::{Drawing, DrawingEvent};
pub use font::FontDescriptor;
pub use paint::PaintSettings;
pub use pen::{PenLineSegment, PenShape};
pub use render::{
    render_angle, render_pen, render_pen_latest_segment, render_shape, render_shapes,
    render_two_point,
};
pub use shape::{Shape, ShapeId};
pub use style::{Dash, LineCap, LineJoin, StrokeStyle};
pub use text::{TextLayoutLimits, TextShape};
pub use transform::Transform;
pub use two_point::{TwoPointKind, TwoPointShape};

// Re-export color constants for public API
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
