//! Three-point angle tool.
//!
//! The first drag places the arm `a`→`b` (with `c` folded onto `a`) and
//! commits the shape. A
//! second drag right after moves `c`; on release the first add is undone and
//! one add with all three points takes its place, so the undo stack only ever
//! holds one entry per angle.

use super::context::ToolContext;
use super::tool::Tool;
use crate::draw::{AngleShape, DrawContext, Shape, ShapeId, render_angle};
use crate::history::Operation;
use crate::util::Point;
use log::warn;

#[derive(Default)]
pub struct AngleTool {
    shape_in_progress: Option<AngleShape>,
    drag_end_count: u32,
    /// Id of the first-drag commit that the second drag replaces
    committed: Option<ShapeId>,
    /// Where `c` sat before the second drag began
    c_before_drag: Option<Point>,
}

impl AngleTool {
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        self.shape_in_progress = None;
        self.drag_end_count = 0;
        self.committed = None;
        self.c_before_drag = None;
    }

    /// Whether the top of the undo stack is still our first commit.
    fn first_commit_on_top(&self, ctx: &ToolContext<'_>) -> bool {
        match (ctx.history.last_undo(), &self.committed) {
            (Some(Operation::AddShape { shape }), Some(id)) => shape.id() == id,
            _ => false,
        }
    }

    fn finish_second_drag(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        let Some(mut shape) = self.shape_in_progress.take() else {
            self.reset();
            return;
        };
        shape.c = point;
        if self.first_commit_on_top(ctx) {
            ctx.undo();
            ctx.apply(Operation::AddShape {
                shape: Shape::from(shape),
            });
        } else {
            warn!(
                "Angle {} is no longer the latest edit; keeping its first two points",
                shape.id
            );
        }
        self.reset();
    }
}

impl Tool for AngleTool {
    fn name(&self) -> &'static str {
        "Angle"
    }

    fn deactivate(&mut self, _ctx: &mut ToolContext<'_>) {
        self.reset();
    }

    fn tap(&mut self, _ctx: &mut ToolContext<'_>, _point: Point) {}

    fn drag_start(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        if self.drag_end_count == 0 {
            let mut shape = AngleShape::new(point);
            shape.apply(ctx.settings);
            self.shape_in_progress = Some(shape);
        } else if let Some(shape) = &mut self.shape_in_progress {
            self.c_before_drag = Some(shape.c);
            shape.c = point;
        }
    }

    fn drag_continue(&mut self, _ctx: &mut ToolContext<'_>, point: Point, _velocity: Point) {
        let Some(shape) = &mut self.shape_in_progress else {
            return;
        };
        if self.drag_end_count == 0 {
            shape.b = point;
        } else {
            shape.c = point;
        }
    }

    fn drag_end(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        if self.drag_end_count > 0 {
            self.finish_second_drag(ctx, point);
            return;
        }
        let Some(shape) = &mut self.shape_in_progress else {
            return;
        };
        shape.b = point;
        self.committed = Some(shape.id.clone());
        self.drag_end_count = 1;
        ctx.apply(Operation::AddShape {
            shape: Shape::from(shape.clone()),
        });
    }

    /// Drops the drag in flight. A cancelled first drag commits nothing; a
    /// cancelled second drag leaves the first commit as it was.
    fn drag_cancel(&mut self, _ctx: &mut ToolContext<'_>, _point: Point) {
        if self.drag_end_count == 0 {
            self.reset();
            return;
        }
        if let (Some(shape), Some(c)) = (&mut self.shape_in_progress, self.c_before_drag.take()) {
            shape.c = c;
        }
    }

    fn apply_settings(&mut self, ctx: &mut ToolContext<'_>) {
        if let Some(shape) = &mut self.shape_in_progress {
            shape.apply(ctx.settings);
        }
        ctx.mark_persistent_dirty();
    }

    fn render_in_progress(&self, ctx: &mut dyn DrawContext) {
        if let Some(shape) = &self.shape_in_progress {
            render_angle(ctx, shape);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::test_support::Harness;

    fn drag(tool: &mut AngleTool, ctx: &mut ToolContext<'_>, from: Point, to: Point) {
        tool.drag_start(ctx, from);
        tool.drag_continue(ctx, to, Point::ZERO);
        tool.drag_end(ctx, to);
    }

    fn only_angle(harness: &Harness) -> AngleShape {
        assert_eq!(harness.drawing.len(), 1);
        match &harness.drawing.shapes()[0] {
            Shape::Angle(shape) => shape.clone(),
            other => panic!("expected an angle, got {other:?}"),
        }
    }

    #[test]
    fn two_drags_leave_one_undo_entry() {
        let mut harness = Harness::new();
        let mut tool = AngleTool::new();
        harness.with(|ctx| {
            drag(&mut tool, ctx, Point::new(0.0, 0.0), Point::new(50.0, 0.0));
            drag(&mut tool, ctx, Point::new(50.0, 0.0), Point::new(50.0, 40.0));
        });

        assert_eq!(harness.history.undo_depth(), 1);
        let angle = only_angle(&harness);
        assert_eq!(angle.a, Point::new(0.0, 0.0));
        assert_eq!(angle.b, Point::new(50.0, 0.0));
        assert_eq!(angle.c, Point::new(50.0, 40.0));

        harness.with(|ctx| ctx.undo());
        assert!(harness.drawing.is_empty());
    }

    #[test]
    fn first_drag_alone_commits() {
        let mut harness = Harness::new();
        let mut tool = AngleTool::new();
        harness.with(|ctx| drag(&mut tool, ctx, Point::ZERO, Point::new(10.0, 0.0)));
        let angle = only_angle(&harness);
        assert_eq!(angle.a, angle.c);
    }

    #[test]
    fn interleaved_edit_keeps_the_first_commit() {
        let mut harness = Harness::new();
        let mut tool = AngleTool::new();
        harness.with(|ctx| drag(&mut tool, ctx, Point::ZERO, Point::new(10.0, 0.0)));

        let mut other = crate::draw::TwoPointShape::new(crate::draw::TwoPointKind::Line, Point::ZERO);
        other.b = Point::new(1.0, 1.0);
        harness.with(|ctx| {
            ctx.apply(Operation::AddShape {
                shape: Shape::from(other),
            })
        });
        harness.with(|ctx| drag(&mut tool, ctx, Point::new(10.0, 0.0), Point::new(10.0, 10.0)));

        assert_eq!(harness.drawing.len(), 2);
        assert_eq!(harness.history.undo_depth(), 2);
    }

    #[test]
    fn cancelled_first_drag_commits_nothing() {
        let mut harness = Harness::new();
        let mut tool = AngleTool::new();
        harness.with(|ctx| {
            tool.drag_start(ctx, Point::ZERO);
            tool.drag_continue(ctx, Point::new(30.0, 0.0), Point::ZERO);
            tool.drag_cancel(ctx, Point::new(30.0, 0.0));
        });
        assert!(harness.drawing.is_empty());
        assert_eq!(harness.history.undo_depth(), 0);

        // The next drag starts a fresh angle.
        harness.with(|ctx| drag(&mut tool, ctx, Point::new(5.0, 5.0), Point::new(25.0, 5.0)));
        let angle = only_angle(&harness);
        assert_eq!(angle.a, Point::new(5.0, 5.0));
    }

    #[test]
    fn cancelled_second_drag_keeps_the_first_commit() {
        let mut harness = Harness::new();
        let mut tool = AngleTool::new();
        harness.with(|ctx| {
            drag(&mut tool, ctx, Point::ZERO, Point::new(50.0, 0.0));
            tool.drag_start(ctx, Point::new(50.0, 0.0));
            tool.drag_continue(ctx, Point::new(50.0, 40.0), Point::ZERO);
            tool.drag_cancel(ctx, Point::new(50.0, 40.0));
        });
        assert_eq!(harness.history.undo_depth(), 1);
        let angle = only_angle(&harness);
        assert_eq!(angle.c, angle.a);

        // A later second drag still replaces the first commit.
        harness.with(|ctx| drag(&mut tool, ctx, Point::new(50.0, 0.0), Point::new(50.0, 20.0)));
        assert_eq!(harness.history.undo_depth(), 1);
        assert_eq!(only_angle(&harness).c, Point::new(50.0, 20.0));
    }

    #[test]
    fn deactivate_forgets_the_first_drag() {
        let mut harness = Harness::new();
        let mut tool = AngleTool::new();
        harness.with(|ctx| {
            drag(&mut tool, ctx, Point::ZERO, Point::new(10.0, 0.0));
            tool.deactivate(ctx);
            drag(&mut tool, ctx, Point::new(20.0, 20.0), Point::new(30.0, 20.0));
        });
        assert_eq!(harness.drawing.len(), 2);
        assert_eq!(harness.history.undo_depth(), 2);
    }
}
