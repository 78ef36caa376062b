//! Notifications the editor delivers to host observers.

use crate::draw::{DrawingEvent, ShapeId};
use crate::history::HistoryEvent;
use crate::input::ToolKind;
use crate::util::Point;

/// Every event is delivered synchronously, after the input step that caused
/// it has finished mutating the editor.
#[derive(Clone, Debug, PartialEq)]
pub enum EditorEvent {
    /// A shape was added, updated or removed
    Drawing(DrawingEvent),
    /// An operation was applied, undone or redone
    History(HistoryEvent),
    /// A whole new drawing was loaded
    DrawingReplaced,
    ToolSwitched { from: ToolKind, to: ToolKind },
    SelectionChanged(Option<ShapeId>),
    /// The selection tool was tapped on the shape that was already selected
    AlreadySelected(ShapeId),
    /// The text tool stopped editing because the user tapped elsewhere
    TextTappedAway(Point),
}

/// A tool switch requested from inside an observer callback.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingTool {
    pub kind: ToolKind,
    /// Shape to hand to the new tool's `activate`
    pub shape: Option<ShapeId>,
}

/// Requests an observer may make while handling an event. They are applied
/// before the next input event reaches a tool.
#[derive(Debug, Default)]
pub struct EditorRequests {
    pub(crate) pending_tool: Option<PendingTool>,
}

impl EditorRequests {
    /// Asks the editor to switch tools before the next input event.
    pub fn schedule_tool(&mut self, kind: ToolKind, shape: Option<ShapeId>) {
        self.pending_tool = Some(PendingTool { kind, shape });
    }
}
