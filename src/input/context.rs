//! What a tool may touch while handling one input event.

use crate::draw::{Drawing, PaintSettings, ShapeId, TextLayoutLimits, TextMeasurer};
use crate::history::{Operation, OperationStack};
use crate::util::Point;

/// Notification a tool raises for the host, re-emitted by the editor.
#[derive(Clone, Debug, PartialEq)]
pub enum ToolSignal {
    /// The selection tool was tapped on the shape that is already selected.
    AlreadySelected(ShapeId),
    /// The text tool was tapped away from the shape it was editing.
    TextTappedAway(Point),
}

/// Tool-facing state that outlives a single tool.
#[derive(Debug, Default)]
pub struct ToolState {
    pub selected: Option<ShapeId>,
    /// Set when the persistent buffer no longer matches the drawing
    pub persistent_dirty: bool,
    pub signals: Vec<ToolSignal>,
}

impl ToolState {
    pub fn take_signals(&mut self) -> Vec<ToolSignal> {
        std::mem::take(&mut self.signals)
    }
}

/// Borrowed view of the editor handed to tool handlers.
pub struct ToolContext<'a> {
    pub drawing: &'a mut Drawing,
    pub history: &'a mut OperationStack,
    pub settings: &'a PaintSettings,
    pub state: &'a mut ToolState,
    pub measurer: &'a dyn TextMeasurer,
}

impl ToolContext<'_> {
    /// Commits `op` through the operation stack.
    pub fn apply(&mut self, op: Operation) {
        self.history.apply(op, self.drawing);
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo(self.drawing)
    }

    pub fn mark_persistent_dirty(&mut self) {
        self.state.persistent_dirty = true;
    }

    pub fn selected(&self) -> Option<&ShapeId> {
        self.state.selected.as_ref()
    }

    pub fn select(&mut self, id: Option<ShapeId>) {
        self.state.selected = id;
    }

    pub fn signal(&mut self, signal: ToolSignal) {
        self.state.signals.push(signal);
    }

    /// Text box limits for this drawing: auto-fit may use the wider of
    /// `default_max_width` and the canvas.
    pub fn text_limits(&self, min_width: f64, default_max_width: f64) -> TextLayoutLimits {
        TextLayoutLimits {
            min_width,
            max_width: default_max_width.max(self.drawing.size().width),
        }
    }
}
