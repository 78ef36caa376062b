//! Undoable edits to a [`Drawing`].

use crate::draw::{Drawing, Shape, ShapeId, Transform};
use crate::util::Rect;

/// One atomic, exactly revertible edit.
///
/// Each variant stores owned snapshots of whatever it needs to restore, so
/// applying and reverting never depend on state outside the drawing.
#[derive(Clone, Debug, PartialEq)]
pub enum Operation {
    /// Add a shape on top. Reverting removes it again.
    AddShape { shape: Shape },
    /// Remove a shape. Reverting puts it back at its former index.
    RemoveShape { shape: Shape, index: usize },
    /// Replace a shape's transform.
    ChangeTransform {
        id: ShapeId,
        original: Transform,
        transform: Transform,
    },
    /// Replace a text shape's text (and the bounds measured for it).
    EditText {
        id: ShapeId,
        original_text: String,
        text: String,
        original_rect: Rect,
        rect: Rect,
    },
    /// Set or clear a text shape's explicit wrap width.
    ChangeExplicitWidth {
        id: ShapeId,
        original_width: Option<f64>,
        width: Option<f64>,
        original_rect: Rect,
        rect: Rect,
    },
}

impl Operation {
    /// Snapshot a removal of the shape currently stored under `id`.
    pub fn remove(drawing: &Drawing, id: &ShapeId) -> Option<Self> {
        let index = drawing.index_of(id)?;
        Some(Operation::RemoveShape {
            shape: drawing.shapes()[index].clone(),
            index,
        })
    }

    /// Id of the shape this operation touches.
    pub fn shape_id(&self) -> &ShapeId {
        match self {
            Operation::AddShape { shape } | Operation::RemoveShape { shape, .. } => shape.id(),
            Operation::ChangeTransform { id, .. }
            | Operation::EditText { id, .. }
            | Operation::ChangeExplicitWidth { id, .. } => id,
        }
    }

    /// Short name for logs and observers.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::AddShape { .. } => "add shape",
            Operation::RemoveShape { .. } => "remove shape",
            Operation::ChangeTransform { .. } => "change transform",
            Operation::EditText { .. } => "edit text",
            Operation::ChangeExplicitWidth { .. } => "change width",
        }
    }

    /// Re-snapshots the shape an add or remove carries from its live copy in
    /// `drawing`.
    ///
    /// Paint changes made to a committed shape are not recorded as operations,
    /// so the copy taken at commit time goes stale.
    pub fn refresh(&mut self, drawing: &Drawing) {
        match self {
            Operation::AddShape { shape } => {
                if let Some(current) = drawing.get(shape.id()) {
                    *shape = settled(current);
                }
            }
            Operation::RemoveShape { shape, index } => {
                if let Some(at) = drawing.index_of(shape.id()) {
                    *shape = settled(&drawing.shapes()[at]);
                    *index = at;
                }
            }
            _ => {}
        }
    }

    pub fn apply(&self, drawing: &mut Drawing) {
        match self {
            Operation::AddShape { shape } => drawing.add(shape.clone()),
            Operation::RemoveShape { shape, .. } => {
                drawing.remove(shape.id());
            }
            Operation::ChangeTransform { id, transform, .. } => {
                set_transform(drawing, id, *transform);
            }
            Operation::EditText { id, text, rect, .. } => set_text(drawing, id, text, *rect),
            Operation::ChangeExplicitWidth { id, width, rect, .. } => {
                set_width(drawing, id, *width, *rect)
            }
        }
    }

    pub fn revert(&self, drawing: &mut Drawing) {
        match self {
            Operation::AddShape { shape } => {
                drawing.remove(shape.id());
            }
            Operation::RemoveShape { shape, index } => drawing.insert(*index, shape.clone()),
            Operation::ChangeTransform { id, original, .. } => {
                set_transform(drawing, id, *original);
            }
            Operation::EditText {
                id,
                original_text,
                original_rect,
                ..
            } => set_text(drawing, id, original_text, *original_rect),
            Operation::ChangeExplicitWidth {
                id,
                original_width,
                original_rect,
                ..
            } => set_width(drawing, id, *original_width, *original_rect),
        }
    }
}

/// A stored copy of `shape` with no text edit in progress.
fn settled(shape: &Shape) -> Shape {
    let mut shape = shape.clone();
    if let Some(text) = shape.as_text_mut() {
        text.is_being_edited = false;
    }
    shape
}

fn set_transform(drawing: &mut Drawing, id: &ShapeId, transform: Transform) {
    drawing.modify(id, |shape| {
        shape.set_transform(transform);
    });
}

fn set_text(drawing: &mut Drawing, id: &ShapeId, text: &str, rect: Rect) {
    drawing.modify(id, |shape| {
        if let Some(shape) = shape.as_text_mut() {
            shape.text = text.to_string();
            shape.bounding_rect = rect;
        }
    });
}

fn set_width(drawing: &mut Drawing, id: &ShapeId, width: Option<f64>, rect: Rect) {
    drawing.modify(id, |shape| {
        if let Some(shape) = shape.as_text_mut() {
            shape.explicit_width = width;
            shape.bounding_rect = rect;
        }
    });
}
