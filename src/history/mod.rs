//! Command-based undo/redo for the drawing.
//!
//! Every user edit is an [`Operation`] pushed through [`OperationStack::apply`];
//! tools never mutate a committed shape any other way.

pub mod operation;
pub mod stack;

pub use operation::Operation;
pub use stack::{HistoryEvent, OperationStack};
