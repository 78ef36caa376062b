//! Tool state machine.
//!
//! Tools translate tap and drag gestures into shape creation and edits. Each
//! tool gets a [`ToolContext`] per event and commits through the operation
//! stack; the editor owns everything the context borrows.

pub mod angle;
pub mod context;
pub mod kind;
pub mod pen;
pub mod selection;
pub mod text;
pub mod text_handles;
pub mod tool;
pub mod two_point;

// Re-export commonly used types at module level
pub use angle::AngleTool;
pub use context::{ToolContext, ToolSignal, ToolState};
pub use kind::{ToolKind, ToolOptions};
pub use pen::PenTool;
pub use selection::SelectionTool;
pub use text::{TextTool, TextToolOptions};
pub use text_handles::{HandleArea, TextHandles};
pub use tool::Tool;
pub use two_point::TwoPointTool;
