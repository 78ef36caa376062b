//! Undo/redo stack with text-edit coalescing.

use super::operation::Operation;
use crate::draw::{Drawing, Shape};
use log::debug;

/// Notification queued by the stack for every applied, undone or redone
/// operation.
#[derive(Clone, Debug, PartialEq)]
pub enum HistoryEvent {
    Applied(Operation),
    Undone(Operation),
    Redone(Operation),
}

impl HistoryEvent {
    pub fn operation(&self) -> &Operation {
        match self {
            HistoryEvent::Applied(op) | HistoryEvent::Undone(op) | HistoryEvent::Redone(op) => op,
        }
    }
}

/// Manages the undo and redo stacks for one drawing.
#[derive(Debug, Default)]
pub struct OperationStack {
    undo: Vec<Operation>,
    redo: Vec<Operation>,
    events: Vec<HistoryEvent>,
}

impl OperationStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `op` to `drawing` and records it for undo.
    ///
    /// A new edit clears the redo stack. An edit of a freshly added, still
    /// empty text shape is folded into that add instead of being recorded, so
    /// undo never lands on an empty text box.
    pub fn apply(&mut self, op: Operation, drawing: &mut Drawing) {
        if self.coalesce(&op, drawing) {
            debug!("Merged {} into the pending add", op.name());
            return;
        }
        op.apply(drawing);
        self.undo.push(op.clone());
        self.redo.clear();
        self.events.push(HistoryEvent::Applied(op));
    }

    /// Returns `true` when `op` was merged into the top add operation.
    fn coalesce(&mut self, op: &Operation, drawing: &mut Drawing) -> bool {
        let Operation::EditText {
            id, original_text, ..
        } = op
        else {
            return false;
        };
        if !original_text.is_empty() {
            return false;
        }
        let Some(Operation::AddShape { shape: added }) = self.undo.last_mut() else {
            return false;
        };
        if added.id() != id {
            return false;
        }

        op.apply(drawing);
        if let Some(current) = drawing.get(id) {
            let mut snapshot: Shape = current.clone();
            if let Some(text) = snapshot.as_text_mut() {
                text.is_being_edited = false;
            }
            *added = snapshot;
        }
        true
    }

    /// Reverts the latest operation, if any.
    pub fn undo(&mut self, drawing: &mut Drawing) -> bool {
        let Some(mut op) = self.undo.pop() else {
            return false;
        };
        op.refresh(drawing);
        op.revert(drawing);
        self.redo.push(op.clone());
        self.events.push(HistoryEvent::Undone(op));
        true
    }

    /// Re-applies the most recently undone operation, if any.
    pub fn redo(&mut self, drawing: &mut Drawing) -> bool {
        let Some(mut op) = self.redo.pop() else {
            return false;
        };
        op.refresh(drawing);
        op.apply(drawing);
        self.undo.push(op.clone());
        self.events.push(HistoryEvent::Redone(op));
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// The operation the next [`undo`](Self::undo) would revert.
    pub fn last_undo(&self) -> Option<&Operation> {
        self.undo.last()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Drops both stacks, e.g. after loading a different document.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Drains the notifications queued so far.
    pub fn take_events(&mut self) -> Vec<HistoryEvent> {
        std::mem::take(&mut self.events)
    }
}
