//! The drawing: an ordered shape list with change notification.

use super::shape::{Shape, ShapeId};
use crate::util::{Point, Size};
use log::warn;

/// Change made to a [`Drawing`]; exactly one is queued per mutator call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawingEvent {
    /// A shape was inserted at `index` (the top when it equals `len - 1`)
    Added { id: ShapeId, index: usize },
    /// A shape's content or transform changed in place
    Updated { id: ShapeId },
    /// A shape was removed from `index`
    Removed { id: ShapeId, index: usize },
}

impl DrawingEvent {
    pub fn id(&self) -> &ShapeId {
        match self {
            DrawingEvent::Added { id, .. }
            | DrawingEvent::Updated { id }
            | DrawingEvent::Removed { id, .. } => id,
        }
    }
}

/// Container for all shapes in the current editing session.
///
/// Shapes are kept in paint order (first = bottom layer, last = top layer).
/// Mutators queue a [`DrawingEvent`]; the owner drains them with
/// [`take_events`](Self::take_events) after each input step. Queuing instead
/// of calling back keeps observers from re-entering the drawing.
#[derive(Debug, Clone, Default)]
pub struct Drawing {
    size: Size,
    shapes: Vec<Shape>,
    events: Vec<DrawingEvent>,
}

impl Drawing {
    /// Creates a new empty drawing of the given canvas size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            shapes: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Builds a drawing from already-decoded shapes without queuing events.
    pub fn with_shapes(size: Size, shapes: Vec<Shape>) -> Self {
        Self {
            size,
            shapes,
            events: Vec::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub fn index_of(&self, id: &ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| s.id() == id)
    }

    pub fn contains(&self, id: &ShapeId) -> bool {
        self.index_of(id).is_some()
    }

    /// Adds a shape on top of the existing ones.
    pub fn add(&mut self, shape: Shape) {
        let index = self.shapes.len();
        self.insert(index, shape);
    }

    /// Inserts a shape at `index` in paint order (clamped to the end).
    pub fn insert(&mut self, index: usize, shape: Shape) {
        if self.contains(shape.id()) {
            warn!("Shape {} is already in the drawing; replacing it", shape.id());
            self.update(shape);
            return;
        }
        let index = index.min(self.shapes.len());
        let id = shape.id().clone();
        self.shapes.insert(index, shape);
        self.events.push(DrawingEvent::Added { id, index });
    }

    /// Replaces the stored shape that has the same id.
    ///
    /// Returns `false` (and queues nothing) when no such shape exists.
    pub fn update(&mut self, shape: Shape) -> bool {
        let Some(index) = self.index_of(shape.id()) else {
            warn!("Ignoring update for unknown shape {}", shape.id());
            return false;
        };
        let id = shape.id().clone();
        self.shapes[index] = shape;
        self.events.push(DrawingEvent::Updated { id });
        true
    }

    /// Mutates a shape in place and queues a single update event.
    pub fn modify<F>(&mut self, id: &ShapeId, f: F) -> bool
    where
        F: FnOnce(&mut Shape),
    {
        let Some(index) = self.index_of(id) else {
            warn!("Ignoring modification of unknown shape {id}");
            return false;
        };
        f(&mut self.shapes[index]);
        self.events.push(DrawingEvent::Updated { id: id.clone() });
        true
    }

    /// Removes the shape with this id, returning it with its former index.
    pub fn remove(&mut self, id: &ShapeId) -> Option<(usize, Shape)> {
        let Some(index) = self.index_of(id) else {
            warn!("Ignoring removal of unknown shape {id}");
            return None;
        };
        let shape = self.shapes.remove(index);
        self.events.push(DrawingEvent::Removed {
            id: id.clone(),
            index,
        });
        Some((index, shape))
    }

    /// Returns the topmost shape under `point` that passes `filter`.
    pub fn shape_at(&self, point: Point, filter: Option<&dyn Fn(&Shape) -> bool>) -> Option<&Shape> {
        self.shapes
            .iter()
            .rev()
            .filter(|shape| filter.is_none_or(|f| f(shape)))
            .find(|shape| shape.hit_test(point))
    }

    /// Drains the change events queued so far.
    pub fn take_events(&mut self) -> Vec<DrawingEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{TextShape, Transform, TwoPointKind, TwoPointShape};
    use crate::util::Rect;

    fn rect_shape(id: &str, a: (f64, f64), b: (f64, f64)) -> Shape {
        let mut shape = TwoPointShape::new(TwoPointKind::Rectangle, Point::new(a.0, a.1));
        shape.id = ShapeId::from(id);
        shape.b = Point::new(b.0, b.1);
        shape.style.stroke_width = 0.0;
        Shape::from(shape)
    }

    #[test]
    fn each_mutator_queues_one_event() {
        let mut drawing = Drawing::new(Size::new(100.0, 100.0));
        let shape = rect_shape("a", (0.0, 0.0), (10.0, 10.0));
        drawing.add(shape.clone());
        drawing.update(shape);
        drawing.remove(&ShapeId::from("a"));

        let events = drawing.take_events();
        assert_eq!(
            events,
            vec![
                DrawingEvent::Added {
                    id: ShapeId::from("a"),
                    index: 0
                },
                DrawingEvent::Updated {
                    id: ShapeId::from("a")
                },
                DrawingEvent::Removed {
                    id: ShapeId::from("a"),
                    index: 0
                },
            ]
        );
        assert!(drawing.take_events().is_empty());
    }

    #[test]
    fn remove_compares_by_id_not_value() {
        let mut drawing = Drawing::new(Size::new(100.0, 100.0));
        drawing.add(rect_shape("a", (0.0, 0.0), (10.0, 10.0)));
        let (index, removed) = drawing.remove(&ShapeId::from("a")).unwrap();
        assert_eq!(index, 0);
        assert_eq!(removed.id().as_str(), "a");
        assert!(drawing.remove(&ShapeId::from("a")).is_none());
    }

    #[test]
    fn shape_at_prefers_topmost() {
        let mut drawing = Drawing::new(Size::new(100.0, 100.0));
        drawing.add(rect_shape("bottom", (0.0, 0.0), (20.0, 20.0)));
        drawing.add(rect_shape("top", (10.0, 10.0), (30.0, 30.0)));
        let hit = drawing.shape_at(Point::new(15.0, 15.0), None).unwrap();
        assert_eq!(hit.id().as_str(), "top");
        let hit = drawing.shape_at(Point::new(5.0, 5.0), None).unwrap();
        assert_eq!(hit.id().as_str(), "bottom");
        assert!(drawing.shape_at(Point::new(50.0, 50.0), None).is_none());
    }

    #[test]
    fn shape_at_applies_filter() {
        let mut drawing = Drawing::new(Size::new(100.0, 100.0));
        let mut text = TextShape::new();
        text.id = ShapeId::from("text");
        text.bounding_rect = Rect::new(-10.0, -10.0, 20.0, 20.0);
        text.transform = Transform::IDENTITY.translated(Point::new(15.0, 15.0));
        drawing.add(Shape::from(text));
        drawing.add(rect_shape("rect", (0.0, 0.0), (30.0, 30.0)));

        let only_text = |shape: &Shape| shape.as_text().is_some();
        let hit = drawing
            .shape_at(Point::new(15.0, 15.0), Some(&only_text))
            .unwrap();
        assert_eq!(hit.id().as_str(), "text");
    }

    #[test]
    fn insert_restores_paint_order() {
        let mut drawing = Drawing::new(Size::new(100.0, 100.0));
        drawing.add(rect_shape("a", (0.0, 0.0), (1.0, 1.0)));
        drawing.add(rect_shape("c", (0.0, 0.0), (1.0, 1.0)));
        drawing.insert(1, rect_shape("b", (0.0, 0.0), (1.0, 1.0)));
        let ids: Vec<_> = drawing.shapes().iter().map(|s| s.id().as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn modify_unknown_shape_is_ignored() {
        let mut drawing = Drawing::new(Size::new(10.0, 10.0));
        assert!(!drawing.modify(&ShapeId::from("ghost"), |_| {}));
        assert!(!drawing.has_pending_events());
    }
}
