//! Text tool: create, edit, move, resize/rotate, re-wrap and delete text.
//!
//! While a text shape is being edited its `is_being_edited` flag is set so the
//! renderer skips it; the host draws its own editor on top and forwards typed
//! text through [`Tool::input_text`].

use super::context::{ToolContext, ToolSignal};
use super::text_handles::{HandleArea, TextHandles};
use super::tool::Tool;
use crate::draw::{Shape, ShapeId, TextShape, Transform};
use crate::history::Operation;
use crate::util::{Point, Rect};
use log::debug;

/// Sizing knobs for text boxes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextToolOptions {
    pub min_width: f64,
    pub default_max_width: f64,
    pub handle_size: f64,
}

impl Default for TextToolOptions {
    fn default() -> Self {
        Self {
            min_width: crate::draw::text::MIN_TEXT_WIDTH,
            default_max_width: crate::draw::text::DEFAULT_MAX_TEXT_WIDTH,
            handle_size: super::text_handles::DEFAULT_HANDLE_SIZE,
        }
    }
}

struct Editing {
    id: ShapeId,
    original_text: String,
    original_rect: Rect,
}

enum TextDrag {
    Move {
        original: Transform,
        start: Point,
    },
    ResizeAndRotate {
        original: Transform,
        start: Point,
    },
    ChangeWidth {
        original_width: Option<f64>,
        original_rect: Rect,
    },
}

pub struct TextTool {
    options: TextToolOptions,
    handles: TextHandles,
    editing: Option<Editing>,
    drag: Option<TextDrag>,
}

impl TextTool {
    pub fn new(options: TextToolOptions) -> Self {
        Self {
            options,
            handles: TextHandles::new(options.handle_size),
            editing: None,
            drag: None,
        }
    }

    /// Id of the text shape currently being edited.
    pub fn editing_id(&self) -> Option<&ShapeId> {
        self.editing.as_ref().map(|editing| &editing.id)
    }

    pub fn handles(&self) -> TextHandles {
        self.handles
    }

    fn editing_shape<'c>(&self, ctx: &'c ToolContext<'_>) -> Option<&'c TextShape> {
        let editing = self.editing.as_ref()?;
        ctx.drawing.get(&editing.id)?.as_text()
    }

    /// Re-measures the shape's bounds after its text, font or width changed.
    fn refit(&self, ctx: &mut ToolContext<'_>, id: &ShapeId) {
        let limits = ctx.text_limits(self.options.min_width, self.options.default_max_width);
        let measurer = ctx.measurer;
        ctx.drawing.modify(id, |shape| {
            if let Some(text) = shape.as_text_mut() {
                text.fit_bounds(measurer, limits);
            }
        });
    }

    fn set_editing_flag(ctx: &mut ToolContext<'_>, id: &ShapeId, editing: bool) {
        ctx.drawing.modify(id, |shape| {
            if let Some(text) = shape.as_text_mut() {
                text.is_being_edited = editing;
            }
        });
    }

    fn begin_editing(&mut self, ctx: &mut ToolContext<'_>, id: ShapeId) {
        Self::set_editing_flag(ctx, &id, true);
        self.refit(ctx, &id);
        let Some(shape) = ctx.drawing.get(&id).and_then(Shape::as_text) else {
            return;
        };
        debug!("Editing text shape {id}");
        self.editing = Some(Editing {
            original_text: shape.text.clone(),
            original_rect: shape.bounding_rect,
            id: id.clone(),
        });
        ctx.select(Some(id));
        ctx.mark_persistent_dirty();
    }

    /// Records the text edit (if any) and stops editing.
    fn finish_editing(&mut self, ctx: &mut ToolContext<'_>) {
        let Some(editing) = self.editing.take() else {
            return;
        };
        self.drag = None;
        if let Some(shape) = ctx.drawing.get(&editing.id).and_then(Shape::as_text) {
            if shape.text != editing.original_text {
                let op = Operation::EditText {
                    id: editing.id.clone(),
                    original_text: editing.original_text,
                    text: shape.text.clone(),
                    original_rect: editing.original_rect,
                    rect: shape.bounding_rect,
                };
                ctx.apply(op);
            }
        }
        Self::set_editing_flag(ctx, &editing.id, false);
        ctx.select(None);
        ctx.mark_persistent_dirty();
    }

    fn remove_editing_shape(&mut self, ctx: &mut ToolContext<'_>) {
        let Some(editing) = self.editing.take() else {
            return;
        };
        self.drag = None;
        Self::set_editing_flag(ctx, &editing.id, false);
        if let Some(op) = Operation::remove(ctx.drawing, &editing.id) {
            ctx.apply(op);
        }
        ctx.select(None);
        ctx.mark_persistent_dirty();
    }

    fn create_shape(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        let mut shape = TextShape::new();
        shape.apply(ctx.settings);
        shape.transform = Transform::IDENTITY.translated(point);
        let limits = ctx.text_limits(self.options.min_width, self.options.default_max_width);
        shape.fit_bounds(ctx.measurer, limits);
        let id = shape.id.clone();
        ctx.apply(Operation::AddShape {
            shape: Shape::from(shape),
        });
        self.begin_editing(ctx, id);
    }

    fn start_drag(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        self.drag = None;
        let Some(shape) = self.editing_shape(ctx) else {
            return;
        };
        let drag = match self.handles.area_at(shape, point) {
            HandleArea::ResizeAndRotate => TextDrag::ResizeAndRotate {
                original: shape.transform,
                start: point,
            },
            HandleArea::ChangeWidth => TextDrag::ChangeWidth {
                original_width: shape.explicit_width,
                original_rect: shape.bounding_rect,
            },
            _ if shape.hit_test(point) => TextDrag::Move {
                original: shape.transform,
                start: point,
            },
            _ => return,
        };
        if let TextDrag::ChangeWidth { original_rect, .. } = &drag {
            let width = shape.explicit_width.unwrap_or(original_rect.width);
            let id = shape.id.clone();
            ctx.drawing.modify(&id, |shape| {
                if let Some(text) = shape.as_text_mut() {
                    text.explicit_width = Some(width);
                }
            });
        }
        self.drag = Some(drag);
    }

    /// Transform for a resize/rotate drag: scale by the distance ratio and
    /// rotate by the angle change, both measured from the shape's center.
    /// A start point on the center leaves the transform unchanged.
    fn resize_and_rotate(original: Transform, start: Point, point: Point) -> Transform {
        let original_delta = start - original.translation;
        let new_delta = point - original.translation;
        let original_distance = original_delta.length();
        if original_distance <= f64::EPSILON {
            return original;
        }
        let scale_change = new_delta.length() / original_distance;
        let angle_change = new_delta.angle() - original_delta.angle();
        original.scaled(scale_change).rotated(angle_change)
    }

    fn drag_transform(drag: &TextDrag, point: Point) -> Option<Transform> {
        match drag {
            TextDrag::Move { original, start } => Some(original.translated(point - *start)),
            TextDrag::ResizeAndRotate { original, start } => {
                Some(Self::resize_and_rotate(*original, *start, point))
            }
            TextDrag::ChangeWidth { .. } => None,
        }
    }

    fn update_width(&self, ctx: &mut ToolContext<'_>, point: Point) {
        let Some(shape) = self.editing_shape(ctx) else {
            return;
        };
        let center = shape.bounding_rect.center() + shape.transform.translation;
        let scale = if shape.transform.scale.abs() > f64::EPSILON {
            shape.transform.scale
        } else {
            1.0
        };
        let desired = ((point.distance_to(center) - self.handles.size / 2.0) * 2.0 / scale)
            .max(self.options.min_width);
        let id = shape.id.clone();
        ctx.drawing.modify(&id, |shape| {
            if let Some(text) = shape.as_text_mut() {
                text.explicit_width = Some(desired);
            }
        });
        self.refit(ctx, &id);
    }
}

impl Tool for TextTool {
    fn name(&self) -> &'static str {
        "Text"
    }

    /// Starts editing `shape` right away when it is a text shape.
    fn activate(&mut self, ctx: &mut ToolContext<'_>, shape: Option<&ShapeId>) {
        let Some(id) = shape else {
            return;
        };
        if ctx.drawing.get(id).and_then(Shape::as_text).is_some() {
            self.begin_editing(ctx, id.clone());
        }
    }

    fn deactivate(&mut self, ctx: &mut ToolContext<'_>) {
        self.finish_editing(ctx);
    }

    fn tap(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        if let Some(shape) = self.editing_shape(ctx) {
            match self.handles.area_at(shape, point) {
                HandleArea::Delete => {
                    self.remove_editing_shape(ctx);
                    ctx.signal(ToolSignal::TextTappedAway(point));
                }
                _ if shape.hit_test(point) => {}
                _ => {
                    self.finish_editing(ctx);
                    ctx.signal(ToolSignal::TextTappedAway(point));
                }
            }
            return;
        }

        let is_text = |shape: &Shape| shape.as_text().is_some();
        let tapped = ctx
            .drawing
            .shape_at(point, Some(&is_text))
            .map(|shape| shape.id().clone());
        match tapped {
            Some(id) => self.begin_editing(ctx, id),
            None => self.create_shape(ctx, point),
        }
    }

    fn drag_start(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        self.start_drag(ctx, point);
    }

    fn drag_continue(&mut self, ctx: &mut ToolContext<'_>, point: Point, _velocity: Point) {
        if self.drag.is_none() {
            // Let a drag that began just off a handle pick it up.
            let over_handle = self.editing_shape(ctx).is_some_and(|shape| {
                matches!(
                    self.handles.area_at(shape, point),
                    HandleArea::ResizeAndRotate | HandleArea::ChangeWidth
                )
            });
            if over_handle {
                self.start_drag(ctx, point);
            }
            return;
        }
        let (Some(drag), Some(id)) = (&self.drag, self.editing_id().cloned()) else {
            return;
        };
        match Self::drag_transform(drag, point) {
            Some(transform) => {
                ctx.drawing.modify(&id, |shape| {
                    shape.set_transform(transform);
                });
            }
            None => self.update_width(ctx, point),
        }
    }

    fn drag_end(&mut self, ctx: &mut ToolContext<'_>, point: Point) {
        if let (Some(drag), Some(id)) = (self.drag.take(), self.editing_id().cloned()) {
            match drag {
                TextDrag::Move { original, .. } | TextDrag::ResizeAndRotate { original, .. } => {
                    let transform = Self::drag_transform(&drag, point).unwrap_or(original);
                    ctx.apply(Operation::ChangeTransform {
                        id,
                        original,
                        transform,
                    });
                }
                TextDrag::ChangeWidth {
                    original_width,
                    original_rect,
                } => {
                    if let Some(shape) = ctx.drawing.get(&id).and_then(Shape::as_text) {
                        let op = Operation::ChangeExplicitWidth {
                            id: id.clone(),
                            original_width,
                            width: shape.explicit_width,
                            original_rect,
                            rect: shape.bounding_rect,
                        };
                        ctx.apply(op);
                    }
                }
            }
        }
        ctx.mark_persistent_dirty();
    }

    fn drag_cancel(&mut self, ctx: &mut ToolContext<'_>, _point: Point) {
        let (Some(drag), Some(id)) = (self.drag.take(), self.editing_id().cloned()) else {
            return;
        };
        ctx.drawing.modify(&id, |shape| match drag {
            TextDrag::Move { original, .. } | TextDrag::ResizeAndRotate { original, .. } => {
                shape.set_transform(original);
            }
            TextDrag::ChangeWidth {
                original_width,
                original_rect,
            } => {
                if let Some(text) = shape.as_text_mut() {
                    text.explicit_width = original_width;
                    text.bounding_rect = original_rect;
                }
            }
        });
        ctx.mark_persistent_dirty();
    }

    fn apply_settings(&mut self, ctx: &mut ToolContext<'_>) {
        let Some(id) = self.editing_id().cloned() else {
            return;
        };
        let settings = ctx.settings;
        ctx.drawing.modify(&id, |shape| shape.apply(settings));
        self.refit(ctx, &id);
        ctx.mark_persistent_dirty();
    }

    fn input_text(&mut self, ctx: &mut ToolContext<'_>, text: &str) -> bool {
        let Some(id) = self.editing_id().cloned() else {
            return false;
        };
        ctx.drawing.modify(&id, |shape| {
            if let Some(shape) = shape.as_text_mut() {
                shape.text = text.to_string();
            }
        });
        self.refit(ctx, &id);
        true
    }
}
