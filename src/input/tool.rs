//! The tool lifecycle every interaction mode implements.

use super::context::ToolContext;
use crate::draw::{DrawContext, ShapeId};
use crate::util::Point;

/// An interchangeable interaction mode.
///
/// The editor drives each tool in a fixed order per gesture:
/// `activate` → any number of {`tap` | `drag_start` → `drag_continue`* →
/// (`drag_end` | `drag_cancel`)} → `deactivate`.
///
/// Tools hold only gesture scratch state (the shape in progress, the transform
/// at drag start). Committed edits go through [`ToolContext::apply`], and live
/// previews of committed shapes go through [`Drawing`](crate::draw::Drawing)
/// methods so the editor sees every change.
///
/// Pointer handlers never fail: degenerate input falls back to a no-op.
pub trait Tool {
    /// Stable display name.
    fn name(&self) -> &'static str;

    /// Progressive tools draw only their newest fragment each frame and the
    /// editor folds every frame into the drag backdrop. Everyone else redraws
    /// the whole in-progress shape over an untouched backdrop.
    fn is_progressive(&self) -> bool {
        false
    }

    /// The tool became active, optionally with a shape to start editing.
    fn activate(&mut self, _ctx: &mut ToolContext<'_>, _shape: Option<&ShapeId>) {}

    /// The tool is being replaced. Finish or drop any pending edit.
    fn deactivate(&mut self, _ctx: &mut ToolContext<'_>) {}

    fn tap(&mut self, ctx: &mut ToolContext<'_>, point: Point);

    fn drag_start(&mut self, ctx: &mut ToolContext<'_>, point: Point);

    /// `velocity` is the pointer velocity in canvas units per second.
    fn drag_continue(&mut self, ctx: &mut ToolContext<'_>, point: Point, velocity: Point);

    fn drag_end(&mut self, ctx: &mut ToolContext<'_>, point: Point);

    /// The gesture was aborted. Must leave the drawing as it was before
    /// `drag_start`.
    fn drag_cancel(&mut self, ctx: &mut ToolContext<'_>, point: Point);

    /// Paint settings changed; update the in-progress or selected shape.
    fn apply_settings(&mut self, _ctx: &mut ToolContext<'_>) {}

    /// Draws the shape that is not yet part of the drawing.
    fn render_in_progress(&self, _ctx: &mut dyn DrawContext) {}

    /// Host text input for the shape being edited. Returns `false` when the
    /// tool is not editing text.
    fn input_text(&mut self, _ctx: &mut ToolContext<'_>, _text: &str) -> bool {
        false
    }
}
