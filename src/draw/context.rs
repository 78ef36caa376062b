//! Backend seams: the 2D drawing context shapes render into, and text measurement.

use super::color::Color;
use super::style::{Dash, LineCap, LineJoin};
use super::transform::Transform;
use crate::util::{Point, Rect, Size};

/// How new paint combines with what is already in the target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompositeMode {
    /// Paint over existing pixels
    #[default]
    Over,
    /// Erase existing pixels wherever the path covers them
    Clear,
}

/// Text draw request handed to the backend.
#[derive(Clone, Copy, Debug)]
pub struct TextRun<'a> {
    pub text: &'a str,
    pub font_name: &'a str,
    pub font_size: f64,
    pub color: Color,
    /// Top-left origin of the layout box
    pub origin: Point,
    /// Wrap width; `None` lays the text out on unbounded lines
    pub wrap_width: Option<f64>,
}

/// Path-based 2D drawing surface.
///
/// Mirrors the subset of Cairo that shapes need. Path construction calls
/// accumulate into a current path consumed by [`stroke`](Self::stroke) or
/// [`fill`](Self::fill).
pub trait DrawContext {
    fn save(&mut self);
    fn restore(&mut self);

    /// Multiplies the current transformation by `transform`.
    fn concat(&mut self, transform: &Transform);
    fn set_composite(&mut self, mode: CompositeMode);

    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_line_join(&mut self, join: LineJoin);
    fn set_dash(&mut self, dash: Option<&Dash>);

    fn move_to(&mut self, point: Point);
    fn line_to(&mut self, point: Point);
    fn quad_to(&mut self, control: Point, to: Point);
    /// Circular arc, clockwise in screen coordinates from `start` to `end` radians.
    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64);
    fn rectangle(&mut self, rect: Rect);
    fn ellipse(&mut self, rect: Rect);
    fn close_path(&mut self);

    fn stroke(&mut self);
    fn fill(&mut self);

    fn draw_text(&mut self, run: &TextRun<'_>);
}

/// External text layout used to size text shapes.
pub trait TextMeasurer {
    /// Size of `text` laid out in `font_name` at `font_size`, wrapped at
    /// `max_width` when given.
    fn measure(&self, text: &str, font_name: &str, font_size: f64, max_width: Option<f64>)
    -> Size;
}

/// Measurer with fixed glyph metrics: every character is `0.6 * size` wide and
/// each line `1.2 * size` tall. Useful where no font backend is available.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedMetrics;

impl TextMeasurer for FixedMetrics {
    fn measure(
        &self,
        text: &str,
        _font_name: &str,
        font_size: f64,
        max_width: Option<f64>,
    ) -> Size {
        let advance = font_size * 0.6;
        let line_height = font_size * 1.2;
        let mut width: f64 = 0.0;
        let mut lines = 0usize;
        for line in text.split('\n') {
            let natural = line.chars().count() as f64 * advance;
            match max_width {
                Some(max) if max > 0.0 && natural > max => {
                    let per_line = (max / advance).floor().max(1.0);
                    let wrapped = (line.chars().count() as f64 / per_line).ceil() as usize;
                    lines += wrapped.max(1);
                    width = width.max(per_line * advance);
                }
                _ => {
                    lines += 1;
                    width = width.max(natural);
                }
            }
        }
        Size::new(width, lines.max(1) as f64 * line_height)
    }
}
