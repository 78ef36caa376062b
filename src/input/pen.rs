//! Freehand pen and eraser.

use super::context::ToolContext;
use super::tool::Tool;
use crate::draw::{DrawContext, PenLineSegment, PenShape, Shape, render_pen_latest_segment};
use crate::history::Operation;
use crate::util::{self, Point};

/// Progressive freehand tool. The eraser variant paints in clear mode and
/// never modulates width.
pub struct PenTool {
    is_eraser: bool,
    velocity_based_width: bool,
    velocity_adjustment: f64,
    shape_in_progress: Option<PenShape>,
    last_velocity: Point,
}

impl PenTool {
    /// # Arguments
    /// * `velocity_based_width` - Thin segments as the pointer speeds up
    /// * `velocity_adjustment` - Speed divisor passed to [`util::modulated_width`]
    pub fn pen(velocity_based_width: bool, velocity_adjustment: f64) -> Self {
        Self {
            is_eraser: false,
            velocity_based_width,
            velocity_adjustment,
            shape_in_progress: None,
            last_velocity: Point::ZERO,
        }
    }

    pub fn eraser() -> Self {
        Self {
            is_eraser: true,
            velocity_based_width: false,
            velocity_adjustment: util::DEFAULT_VELOCITY_ADJUSTMENT,
            shape_in_progress: None,
            last_velocity: Point::ZERO,
        }
    }

    fn make_shape(&self, ctx: &ToolContext<'_>, point: Point) -> PenShape {
        let mut shape = PenShape::new(point);
        shape.apply(ctx.settings);
        shape.is_eraser = self.is_eraser;
        shape
    }

    pub fn shape_in_progress(&self) -> Option<&PenShape> {
        self.shape_in_progress.as_ref()
    }
}

impl Tool for PenTool {
    fn name(&self) -> &'static str {
        if self.is_eraser { "Eraser" } else { "Pen" }
    }

    fn is_progressive(&self) -> bool {
        true
    }

    fn deactivate(&mut self, _ctx: &mut ToolContext<'_>) {
        self.shape_in_progress = None;
    }

    /// Commits a single dot.
    fn tap(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        let mut shape = self.make_shape(ctx, point);
        shape.is_finished = true;
        ctx.apply(Operation::AddShape {
            shape: Shape::from(shape),
        });
    }

    fn drag_start(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        self.last_velocity = Point::ZERO;
        self.shape_in_progress = Some(self.make_shape(ctx, point));
    }

    fn drag_continue(&mut self, _ctx: &mut ToolContext<'_>, point: Point, velocity: Point) {
        let Some(shape) = &mut self.shape_in_progress else {
            return;
        };
        let width = if self.velocity_based_width {
            util::modulated_width(
                shape.stroke_width,
                velocity,
                self.last_velocity,
                shape.last_width(),
                self.velocity_adjustment,
            )
        } else {
            shape.stroke_width
        };
        let a = shape.last_point();
        shape.add_segment(PenLineSegment { a, b: point, width });
        self.last_velocity = velocity;
    }

    fn drag_end(&mut self, ctx: &mut ToolContext<'_>, _point: Point) {
        let Some(mut shape) = self.shape_in_progress.take() else {
            return;
        };
        shape.is_finished = true;
        ctx.apply(Operation::AddShape {
            shape: Shape::from(shape),
        });
    }

    fn drag_cancel(&mut self, _ctx: &mut ToolContext<'_>, _point: Point) {
        self.shape_in_progress = None;
    }

    fn apply_settings(&mut self, ctx: &mut ToolContext<'_>) {
        if let Some(shape) = &mut self.shape_in_progress {
            shape.apply(ctx.settings);
        }
    }

    fn render_in_progress(&self, ctx: &mut dyn DrawContext) {
        if let Some(shape) = &self.shape_in_progress {
            render_pen_latest_segment(ctx, shape);
        }
    }
}
