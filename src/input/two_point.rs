//! Drag-from-corner-to-corner tools: line, arrow, rectangle, ellipse,
//! polygons and star.

use super::context::ToolContext;
use super::tool::Tool;
use crate::draw::{DrawContext, Shape, TwoPointKind, TwoPointShape, render_two_point};
use crate::history::Operation;
use crate::util::Point;

/// Creates one [`TwoPointShape`] per drag.
pub struct TwoPointTool {
    name: &'static str,
    kind: TwoPointKind,
    shape_in_progress: Option<TwoPointShape>,
}

impl TwoPointTool {
    pub fn new(name: &'static str, kind: TwoPointKind) -> Self {
        Self {
            name,
            kind,
            shape_in_progress: None,
        }
    }

    fn make_shape(&self, ctx: &ToolContext<'_>, point: Point) -> TwoPointShape {
        let mut shape = TwoPointShape::new(self.kind, point);
        shape.apply(ctx.settings);
        shape
    }

    pub fn shape_in_progress(&self) -> Option<&TwoPointShape> {
        self.shape_in_progress.as_ref()
    }
}

impl Tool for TwoPointTool {
    fn name(&self) -> &'static str {
        self.name
    }

    fn deactivate(&mut self, _ctx: &mut ToolContext<'_>) {
        self.shape_in_progress = None;
    }

    /// A bare tap commits a zero-size shape at the tap point.
    fn tap(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        let shape = self.make_shape(ctx, point);
        ctx.apply(Operation::AddShape {
            shape: Shape::from(shape),
        });
    }

    fn drag_start(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        self.shape_in_progress = Some(self.make_shape(ctx, point));
    }

    fn drag_continue(&mut self, _ctx: &mut ToolContext<'_>, point: Point, _velocity: Point) {
        if let Some(shape) = &mut self.shape_in_progress {
            shape.b = point;
        }
    }

    fn drag_end(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        let Some(mut shape) = self.shape_in_progress.take() else {
            return;
        };
        shape.b = point;
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
        ctx.mark_persistent_dirty();
    }

    fn render_in_progress(&self, ctx: &mut dyn DrawContext) {
        if let Some(shape) = &self.shape_in_progress {
            render_two_point(ctx, shape);
        }
    }
}
