//! Selection tool: pick a shape and drag it around.

use super::context::{ToolContext, ToolSignal};
use super::tool::Tool;
use crate::draw::{Shape, ShapeId, Transform};
use crate::history::Operation;
use crate::util::Point;

struct MoveDrag {
    id: ShapeId,
    original: Transform,
    start: Point,
}

#[derive(Default)]
pub struct SelectionTool {
    drag: Option<MoveDrag>,
}

impl SelectionTool {
    pub fn new() -> Self {
        Self::default()
    }

    fn moved(drag: &MoveDrag, point: Point) -> Transform {
        drag.original.translated(point - drag.start)
    }
}

impl Tool for SelectionTool {
    fn name(&self) -> &'static str {
        "Selection"
    }

    fn deactivate(&mut self, ctx: &mut ToolContext<'_>) {
        self.drag = None;
        ctx.select(None);
    }

    /// Selects the topmost selectable shape under `point`. Tapping the shape
    /// that is already selected deselects it and raises
    /// [`ToolSignal::AlreadySelected`].
    fn tap(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        let selectable = |shape: &Shape| shape.is_selectable();
        let hit = ctx
            .drawing
            .shape_at(point, Some(&selectable))
            .map(|shape| shape.id().clone());

        match hit {
            Some(id) if ctx.selected() == Some(&id) => {
                ctx.signal(ToolSignal::AlreadySelected(id));
                ctx.select(None);
            }
            other => ctx.select(other),
        }
    }

    fn drag_start(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        self.drag = None;
        let Some(id) = ctx.selected().cloned() else {
            return;
        };
        let Some(shape) = ctx.drawing.get(&id) else {
            return;
        };
        if !shape.hit_test(point) {
            return;
        }
        if let Some(original) = shape.transform().copied() {
            self.drag = Some(MoveDrag {
                id,
                original,
                start: point,
            });
        }
    }

    fn drag_continue(&mut self, ctx: &mut ToolContext<'_>, point: Point, _velocity: Point) {
        let Some(drag) = &self.drag else {
            return;
        };
        let transform = Self::moved(drag, point);
        ctx.drawing.modify(&drag.id, |shape| {
            shape.set_transform(transform);
        });
        ctx.mark_persistent_dirty();
    }

    fn drag_end(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let transform = Self::moved(&drag, point);
        ctx.apply(Operation::ChangeTransform {
            id: drag.id,
            original: drag.original,
            transform,
        });
        ctx.mark_persistent_dirty();
    }

    fn drag_cancel(&mut self, ctx: &mut ToolContext<'_>, _point: Point) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        ctx.drawing.modify(&drag.id, |shape| {
            shape.set_transform(drag.original);
        });
        ctx.mark_persistent_dirty();
    }

    fn apply_settings(&mut self, ctx: &mut ToolContext<'_>) {
        let Some(id) = ctx.selected().cloned() else {
            return;
        };
        let settings = ctx.settings;
        ctx.drawing.modify(&id, |shape| shape.apply(settings));
        ctx.mark_persistent_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{TwoPointKind, TwoPointShape};
    use crate::input::test_support::Harness;

    fn add_square(harness: &mut Harness, id: &str, a: (f64, f64), b: (f64, f64)) {
        let mut shape = TwoPointShape::new(TwoPointKind::Rectangle, Point::new(a.0, a.1));
        shape.id = ShapeId::from(id);
        shape.b = Point::new(b.0, b.1);
        shape.style.stroke_width = 2.0;
        harness.drawing.add(Shape::from(shape));
    }

    fn translation(harness: &Harness, id: &str) -> Point {
        harness
            .drawing
            .get(&ShapeId::from(id))
            .and_then(|s| s.transform())
            .map(|t| t.translation)
            .unwrap()
    }

    #[test]
    fn tap_selects_topmost_and_signals_on_retap() {
        let mut harness = Harness::new();
        add_square(&mut harness, "low", (0.0, 0.0), (20.0, 20.0));
        add_square(&mut harness, "high", (10.0, 10.0), (30.0, 30.0));
        let mut tool = SelectionTool::new();

        harness.with(|ctx| tool.tap(ctx, Point::new(15.0, 15.0)));
        assert_eq!(harness.state.selected, Some(ShapeId::from("high")));

        harness.with(|ctx| tool.tap(ctx, Point::new(15.0, 15.0)));
        assert_eq!(harness.state.selected, None);
        assert_eq!(
            harness.state.take_signals(),
            vec![ToolSignal::AlreadySelected(ShapeId::from("high"))]
        );

        harness.with(|ctx| tool.tap(ctx, Point::new(15.0, 15.0)));
        harness.with(|ctx| tool.tap(ctx, Point::new(90.0, 90.0)));
        assert_eq!(harness.state.selected, None);
    }

    #[test]
    fn drag_moves_live_and_commits_once() {
        let mut harness = Harness::new();
        add_square(&mut harness, "a", (0.0, 0.0), (20.0, 20.0));
        let mut tool = SelectionTool::new();
        harness.with(|ctx| {
            tool.tap(ctx, Point::new(5.0, 5.0));
            tool.drag_start(ctx, Point::new(5.0, 5.0));
            tool.drag_continue(ctx, Point::new(10.0, 8.0), Point::ZERO);
        });
        assert_eq!(translation(&harness, "a"), Point::new(5.0, 3.0));
        assert!(!harness.history.can_undo());

        harness.with(|ctx| tool.drag_end(ctx, Point::new(15.0, 15.0)));
        assert_eq!(translation(&harness, "a"), Point::new(10.0, 10.0));
        assert_eq!(harness.history.undo_depth(), 1);

        harness.with(|ctx| ctx.undo());
        assert_eq!(translation(&harness, "a"), Point::ZERO);
    }

    #[test]
    fn cancel_restores_the_original_transform() {
        let mut harness = Harness::new();
        add_square(&mut harness, "a", (0.0, 0.0), (20.0, 20.0));
        let before = harness.drawing.shapes().to_vec();
        let mut tool = SelectionTool::new();
        harness.with(|ctx| {
            tool.tap(ctx, Point::new(5.0, 5.0));
            tool.drag_start(ctx, Point::new(5.0, 5.0));
            tool.drag_continue(ctx, Point::new(50.0, 50.0), Point::ZERO);
            tool.drag_cancel(ctx, Point::new(50.0, 50.0));
        });
        assert_eq!(harness.drawing.shapes(), before.as_slice());
        assert!(!harness.history.can_undo());
    }

    #[test]
    fn drag_outside_the_selection_does_nothing() {
        let mut harness = Harness::new();
        add_square(&mut harness, "a", (0.0, 0.0), (20.0, 20.0));
        let mut tool = SelectionTool::new();
        harness.with(|ctx| {
            tool.tap(ctx, Point::new(5.0, 5.0));
            tool.drag_start(ctx, Point::new(60.0, 60.0));
            tool.drag_continue(ctx, Point::new(70.0, 70.0), Point::ZERO);
            tool.drag_end(ctx, Point::new(70.0, 70.0));
        });
        assert_eq!(translation(&harness, "a"), Point::ZERO);
        assert!(!harness.history.can_undo());
    }

    #[test]
    fn pen_strokes_cannot_be_selected() {
        let mut harness = Harness::new();
        harness
            .drawing
            .add(Shape::from(crate::draw::PenShape::new(Point::new(5.0, 5.0))));
        let mut tool = SelectionTool::new();
        harness.with(|ctx| tool.tap(ctx, Point::new(5.0, 5.0)));
        assert_eq!(harness.state.selected, None);
    }
}
