//! The editor: owns a drawing and routes host input through the active tool.
//!
//! Each input event runs to completion before the next one:
//! 1. a tool switch scheduled by an observer is applied
//! 2. the event is dispatched to the active tool with a [`ToolContext`]
//! 3. queued drawing changes update the persistent buffer, incrementally for
//!    plain appends and with a full rebuild otherwise
//! 4. drawing, history and tool notifications are delivered to observers
//!
//! During a drag the host presents the composite buffer; otherwise the
//! persistent one. See [`buffers`].

pub mod buffers;
pub mod events;
pub mod observers;

pub use buffers::{BufferStats, Displayed, RenderBuffers, RenderError, rasterize, write_png};
pub use events::{EditorEvent, EditorRequests, PendingTool};
pub use observers::{ObserverId, Observers};

use crate::config::Config;
use crate::draw::{
    DecodeError, DecodeMode, Drawing, DrawingEvent, PaintSettings, PangoMeasurer, Shape, ShapeId,
    TextLayoutLimits, TextMeasurer, decode_drawing,
};
use crate::history::{Operation, OperationStack};
use crate::input::{Tool, ToolContext, ToolKind, ToolOptions, ToolSignal, ToolState};
use crate::util::{Point, Rect, Size};
use cairo::{Context, ImageSurface};
use log::{debug, warn};
use std::path::Path;
use thiserror::Error;

/// Tool active in a new editor.
pub const DEFAULT_TOOL: ToolKind = ToolKind::Pen;

/// Failures when replacing the drawing wholesale.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Interactive editing session over one [`Drawing`].
pub struct Editor {
    drawing: Drawing,
    history: OperationStack,
    settings: PaintSettings,
    state: ToolState,
    tool: Box<dyn Tool>,
    tool_kind: ToolKind,
    tool_options: ToolOptions,
    decode_mode: DecodeMode,
    measurer: Box<dyn TextMeasurer>,
    buffers: RenderBuffers,
    observers: Observers,
    requests: EditorRequests,
    /// Selection last reported to observers
    last_selected: Option<ShapeId>,
    /// Last pointer position of the drag in progress
    drag_point: Option<Point>,
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("shapes", &self.drawing.len())
            .field("tool", &self.tool_kind)
            .field("undo_depth", &self.history.undo_depth())
            .field("redo_depth", &self.history.redo_depth())
            .field("buffers", &self.buffers)
            .field("observers", &self.observers)
            .finish()
    }
}

impl Editor {
    /// Creates an editor with an empty canvas of `size`, default settings and
    /// Pango text measurement.
    pub fn new(size: Size) -> Result<Self, RenderError> {
        Self::with_options(
            size,
            PaintSettings::default(),
            ToolOptions::default(),
            DecodeMode::default(),
        )
    }

    /// Creates an editor whose paint settings and tool options come from `config`.
    pub fn with_config(size: Size, config: &Config) -> Result<Self, RenderError> {
        Self::with_options(
            size,
            config.paint_settings(),
            config.tool_options(),
            config.decode_mode(),
        )
    }

    fn with_options(
        size: Size,
        settings: PaintSettings,
        tool_options: ToolOptions,
        decode_mode: DecodeMode,
    ) -> Result<Self, RenderError> {
        let mut editor = Self {
            drawing: Drawing::new(size),
            history: OperationStack::new(),
            settings,
            state: ToolState::default(),
            tool: DEFAULT_TOOL.build(&tool_options),
            tool_kind: DEFAULT_TOOL,
            tool_options,
            decode_mode,
            measurer: Box::new(PangoMeasurer),
            buffers: RenderBuffers::new(size)?,
            observers: Observers::new(),
            requests: EditorRequests::default(),
            last_selected: None,
            drag_point: None,
        };
        editor.dispatch(|tool, ctx| tool.activate(ctx, None));
        editor.flush();
        Ok(editor)
    }

    /// Replaces the text measurer, e.g. with fixed metrics for headless use.
    pub fn with_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn history(&self) -> &OperationStack {
        &self.history
    }

    pub fn settings(&self) -> &PaintSettings {
        &self.settings
    }

    pub fn tool_kind(&self) -> ToolKind {
        self.tool_kind
    }

    pub fn tool(&self) -> &dyn Tool {
        self.tool.as_ref()
    }

    pub fn selected(&self) -> Option<&ShapeId> {
        self.state.selected.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_point.is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn buffer_stats(&self) -> BufferStats {
        self.buffers.stats()
    }

    /// The buffer the host should present.
    pub fn displayed(&self) -> &ImageSurface {
        self.buffers.displayed()
    }

    pub fn displayed_kind(&self) -> Displayed {
        self.buffers.displayed_kind()
    }

    /// Whether anything changed on screen since damage was last taken.
    pub fn has_damage(&self) -> bool {
        self.buffers.has_damage()
    }

    /// Drains the pixel regions that changed since the last call.
    pub fn take_damage(&mut self) -> Vec<Rect> {
        self.buffers.take_damage()
    }

    /// Paints the presented buffer into a host context.
    pub fn present(&self, ctx: &Context) -> Result<(), RenderError> {
        self.buffers.present(ctx)
    }

    /// Copies the presented buffer.
    pub fn snapshot(&self) -> Result<ImageSurface, RenderError> {
        self.buffers.snapshot()
    }

    pub fn write_png(&self, path: &Path) -> Result<(), RenderError> {
        write_png(self.buffers.displayed(), path)
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    pub fn subscribe<F>(&mut self, callback: F) -> ObserverId
    where
        F: FnMut(&EditorEvent, &mut EditorRequests) + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ------------------------------------------------------------------
    // Pointer input
    // ------------------------------------------------------------------

    pub fn tap(&mut self, point: Point) {
        self.apply_pending_tool();
        if self.drag_point.is_some() {
            debug!("Ignoring tap during a drag");
            return;
        }
        self.dispatch(|tool, ctx| tool.tap(ctx, point));
        self.flush();
    }

    pub fn drag_start(&mut self, point: Point) {
        self.apply_pending_tool();
        if let Some(previous) = self.drag_point {
            debug!("New drag started before the last one ended; cancelling it");
            self.drag_cancel(previous);
        }
        if let Err(err) = self.buffers.begin_drag() {
            warn!("Failed to allocate drag buffers: {err}");
        }
        self.drag_point = Some(point);
        self.dispatch(|tool, ctx| tool.drag_start(ctx, point));
        self.flush();
        self.render_frame();
    }

    /// `velocity` is the pointer velocity in canvas units per second.
    pub fn drag_continue(&mut self, point: Point, velocity: Point) {
        if self.drag_point.is_none() {
            debug!("Ignoring drag_continue without drag_start");
            return;
        }
        self.drag_point = Some(point);
        self.dispatch(|tool, ctx| tool.drag_continue(ctx, point, velocity));
        self.flush();
        self.render_frame();
    }

    pub fn drag_end(&mut self, point: Point) {
        if self.drag_point.take().is_none() {
            debug!("Ignoring drag_end without drag_start");
            return;
        }
        self.dispatch(|tool, ctx| tool.drag_end(ctx, point));
        self.flush();
        self.buffers.end_drag();
    }

    pub fn drag_cancel(&mut self, point: Point) {
        if self.drag_point.take().is_none() {
            debug!("Ignoring drag_cancel without drag_start");
            return;
        }
        self.dispatch(|tool, ctx| tool.drag_cancel(ctx, point));
        self.flush();
        self.buffers.end_drag();
    }

    /// Host text input for the text shape being edited.
    ///
    /// Returns `false` when the active tool is not editing text.
    pub fn input_text(&mut self, text: &str) -> bool {
        self.apply_pending_tool();
        let handled = self.dispatch(|tool, ctx| tool.input_text(ctx, text));
        self.flush();
        handled
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    pub fn undo(&mut self) -> bool {
        self.apply_pending_tool();
        if self.drag_point.is_some() {
            debug!("Ignoring undo during a drag");
            return false;
        }
        let undone = self.history.undo(&mut self.drawing);
        self.flush();
        undone
    }

    pub fn redo(&mut self) -> bool {
        self.apply_pending_tool();
        if self.drag_point.is_some() {
            debug!("Ignoring redo during a drag");
            return false;
        }
        let redone = self.history.redo(&mut self.drawing);
        self.flush();
        redone
    }

    /// Commits an operation built by the host.
    pub fn apply(&mut self, op: Operation) {
        self.apply_pending_tool();
        if self.drag_point.is_some() {
            debug!("Ignoring {} during a drag", op.name());
            return;
        }
        self.history.apply(op, &mut self.drawing);
        self.flush();
    }

    /// Replaces the paint settings and lets the active tool re-apply them.
    pub fn update_settings(&mut self, settings: PaintSettings) {
        self.settings = settings;
        self.dispatch(|tool, ctx| tool.apply_settings(ctx));
        self.flush();
        if self.drag_point.is_some() {
            self.render_frame();
        }
    }

    /// Switches tools now: the current tool is deactivated before the new one
    /// is activated with `shape`. A drag in progress is cancelled first.
    pub fn set_tool(&mut self, kind: ToolKind, shape: Option<ShapeId>) {
        if let Some(point) = self.drag_point {
            self.drag_cancel(point);
        }
        let from = self.tool_kind;
        debug!("Switching tool {from} -> {kind}");

        self.dispatch(|tool, ctx| tool.deactivate(ctx));
        self.flush();
        self.tool = kind.build(&self.tool_options);
        self.tool_kind = kind;
        self.dispatch(|tool, ctx| tool.activate(ctx, shape.as_ref()));
        self.flush();

        self.emit(&[EditorEvent::ToolSwitched { from, to: kind }]);
    }

    /// Switches tools before the next input event.
    pub fn schedule_tool(&mut self, kind: ToolKind, shape: Option<ShapeId>) {
        self.requests.schedule_tool(kind, shape);
    }

    /// Replaces the drawing, clearing history and selection.
    ///
    /// Text shapes that arrive without bounds are measured.
    pub fn load(&mut self, mut drawing: Drawing) -> Result<(), RenderError> {
        if let Some(point) = self.drag_point {
            self.drag_cancel(point);
        }
        self.dispatch(|tool, ctx| tool.deactivate(ctx));
        self.flush();

        self.measure_loaded_text(&mut drawing);
        drawing.take_events();
        if drawing.size() != self.drawing.size() {
            self.buffers = RenderBuffers::new(drawing.size())?;
        }
        self.drawing = drawing;
        self.history.clear();
        self.history.take_events();
        self.state = ToolState::default();
        self.last_selected = None;
        self.tool = self.tool_kind.build(&self.tool_options);
        if let Err(err) = self.buffers.rebuild(self.drawing.shapes()) {
            warn!("Failed to render loaded drawing: {err}");
        }
        debug!("Loaded drawing with {} shapes", self.drawing.len());

        self.emit(&[EditorEvent::DrawingReplaced]);
        self.dispatch(|tool, ctx| tool.activate(ctx, None));
        self.flush();
        Ok(())
    }

    /// Decodes a drawing document with the configured decode mode and loads it.
    pub fn load_json(&mut self, json: &str) -> Result<(), EditorError> {
        let drawing = decode_drawing(json, self.decode_mode)?;
        self.load(drawing)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn measure_loaded_text(&self, drawing: &mut Drawing) {
        let text_options = self.tool_options.text;
        let limits = TextLayoutLimits {
            min_width: text_options.min_width,
            max_width: text_options.default_max_width.max(drawing.size().width),
        };
        let unmeasured: Vec<ShapeId> = drawing
            .shapes()
            .iter()
            .filter_map(Shape::as_text)
            .filter(|text| text.bounding_rect.is_empty())
            .map(|text| text.id.clone())
            .collect();
        for id in unmeasured {
            drawing.modify(&id, |shape| {
                if let Some(text) = shape.as_text_mut() {
                    text.fit_bounds(self.measurer.as_ref(), limits);
                }
            });
        }
    }

    fn apply_pending_tool(&mut self) {
        if self.drag_point.is_some() {
            return;
        }
        if let Some(pending) = self.requests.pending_tool.take() {
            self.set_tool(pending.kind, pending.shape);
        }
    }

    /// Runs `f` against the active tool with a context borrowing the editor.
    fn dispatch<R>(&mut self, f: impl FnOnce(&mut dyn Tool, &mut ToolContext<'_>) -> R) -> R {
        let mut ctx = ToolContext {
            drawing: &mut self.drawing,
            history: &mut self.history,
            settings: &self.settings,
            state: &mut self.state,
            measurer: self.measurer.as_ref(),
        };
        f(self.tool.as_mut(), &mut ctx)
    }

    fn render_frame(&mut self) {
        if let Err(err) = self.buffers.render_frame(self.tool.as_ref()) {
            warn!("Failed to render drag frame: {err}");
        }
    }

    /// Brings the buffers up to date with queued changes and notifies observers.
    fn flush(&mut self) {
        let drawing_events = self.drawing.take_events();
        let dirty = std::mem::take(&mut self.state.persistent_dirty);
        if dirty || !drawing_events.is_empty() {
            self.refresh_persistent(&drawing_events, dirty);
        }

        if let Some(id) = &self.state.selected
            && !self.drawing.contains(id)
        {
            debug!("Selected shape {id} left the drawing");
            self.state.selected = None;
        }

        let mut events: Vec<EditorEvent> = drawing_events
            .into_iter()
            .map(EditorEvent::Drawing)
            .collect();
        events.extend(self.history.take_events().into_iter().map(EditorEvent::History));
        if self.state.selected != self.last_selected {
            self.last_selected = self.state.selected.clone();
            events.push(EditorEvent::SelectionChanged(self.last_selected.clone()));
        }
        events.extend(self.state.take_signals().into_iter().map(|signal| match signal {
            ToolSignal::AlreadySelected(id) => EditorEvent::AlreadySelected(id),
            ToolSignal::TextTappedAway(point) => EditorEvent::TextTappedAway(point),
        }));
        self.emit(&events);
    }

    fn refresh_persistent(&mut self, events: &[DrawingEvent], dirty: bool) {
        let shapes = self.drawing.shapes();
        let appended = if dirty {
            None
        } else {
            appended_count(events, shapes)
        };
        let result = match appended {
            Some(count) => self.buffers.add_shapes(&shapes[shapes.len() - count..]),
            None => self.buffers.rebuild(shapes).and_then(|()| {
                if self.tool.is_progressive() {
                    Ok(())
                } else {
                    self.buffers.resnapshot()
                }
            }),
        };
        if let Err(err) = result {
            warn!("Failed to update persistent buffer: {err}");
        }
    }

    fn emit(&mut self, events: &[EditorEvent]) {
        for event in events {
            self.observers.notify(event, &mut self.requests);
        }
    }
}

/// Number of trailing shapes that `events` appended, or `None` when the
/// events did anything other than push shapes onto the top.
fn appended_count(events: &[DrawingEvent], shapes: &[Shape]) -> Option<usize> {
    let count = events.len();
    if count == 0 || count > shapes.len() {
        return None;
    }
    let tail = &shapes[shapes.len() - count..];
    events
        .iter()
        .zip(tail)
        .all(|(event, shape)| matches!(event, DrawingEvent::Added { id, .. } if id == shape.id()))
        .then_some(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{FixedMetrics, TextShape, Transform, TwoPointKind, TwoPointShape};
    use crate::history::HistoryEvent;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn editor() -> Editor {
        Editor::new(Size::new(320.0, 240.0))
            .unwrap()
            .with_measurer(FixedMetrics)
    }

    fn record(editor: &mut Editor) -> Rc<RefCell<Vec<EditorEvent>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        editor.subscribe(move |event, _| sink.borrow_mut().push(event.clone()));
        seen
    }

    fn drag(editor: &mut Editor, from: (f64, f64), to: (f64, f64)) {
        editor.drag_start(Point::new(from.0, from.1));
        editor.drag_continue(Point::new(to.0, to.1), Point::ZERO);
        editor.drag_end(Point::new(to.0, to.1));
    }

    fn line(a: (f64, f64), b: (f64, f64)) -> Shape {
        let mut shape = TwoPointShape::new(TwoPointKind::Line, Point::new(a.0, a.1));
        shape.b = Point::new(b.0, b.1);
        Shape::from(shape)
    }

    #[test]
    fn appended_count_requires_pushes_on_top() {
        let shapes = [line((0.0, 0.0), (1.0, 1.0)), line((0.0, 0.0), (2.0, 2.0))];
        let added = |shape: &Shape, index| DrawingEvent::Added {
            id: shape.id().clone(),
            index,
        };
        assert_eq!(appended_count(&[added(&shapes[1], 1)], &shapes), Some(1));
        assert_eq!(
            appended_count(&[added(&shapes[0], 0), added(&shapes[1], 1)], &shapes),
            Some(2)
        );
        assert_eq!(appended_count(&[added(&shapes[0], 0)], &shapes), None);
        let updated = DrawingEvent::Updated {
            id: shapes[1].id().clone(),
        };
        assert_eq!(appended_count(&[updated], &shapes), None);
        assert_eq!(appended_count(&[], &shapes), None);
    }

    #[test]
    fn drawing_a_line_adds_incrementally() {
        let mut editor = editor();
        editor.set_tool(ToolKind::Line, None);
        let events = record(&mut editor);

        drag(&mut editor, (10.0, 10.0), (50.0, 50.0));

        assert_eq!(editor.drawing().len(), 1);
        assert_eq!(editor.displayed_kind(), Displayed::Persistent);
        let stats = editor.buffer_stats();
        assert_eq!(stats.incremental_adds, 1);
        let events = events.borrow();
        assert!(matches!(
            events.as_slice(),
            [
                EditorEvent::Drawing(DrawingEvent::Added { .. }),
                EditorEvent::History(HistoryEvent::Applied(Operation::AddShape { .. })),
            ]
        ));
    }

    #[test]
    fn undo_rebuilds_and_redo_restores() {
        let mut editor = editor();
        editor.set_tool(ToolKind::Rectangle, None);
        drag(&mut editor, (10.0, 10.0), (50.0, 50.0));
        let id = editor.drawing().shapes()[0].id().clone();
        let rebuilds = editor.buffer_stats().full_rebuilds;

        assert!(editor.undo());
        assert!(editor.drawing().is_empty());
        assert_eq!(editor.buffer_stats().full_rebuilds, rebuilds + 1);

        assert!(editor.redo());
        assert_eq!(editor.drawing().shapes()[0].id(), &id);
        assert!(!editor.redo());
    }

    #[test]
    fn drag_shows_composite_until_end() {
        let mut editor = editor();
        editor.set_tool(ToolKind::Ellipse, None);
        editor.drag_start(Point::new(10.0, 10.0));
        editor.drag_continue(Point::new(40.0, 40.0), Point::ZERO);
        assert!(editor.is_dragging());
        assert_eq!(editor.displayed_kind(), Displayed::Composite);
        editor.drag_cancel(Point::new(40.0, 40.0));
        assert_eq!(editor.displayed_kind(), Displayed::Persistent);
        assert!(editor.drawing().is_empty());
        assert!(!editor.can_undo());
    }

    #[test]
    fn stray_drag_events_are_ignored() {
        let mut editor = editor();
        editor.drag_continue(Point::new(1.0, 1.0), Point::ZERO);
        editor.drag_end(Point::new(1.0, 1.0));
        editor.drag_cancel(Point::new(1.0, 1.0));
        assert!(editor.drawing().is_empty());
        assert!(!editor.is_dragging());
    }

    #[test]
    fn tool_switch_is_reported_once() {
        let mut editor = editor();
        let events = record(&mut editor);
        editor.set_tool(ToolKind::Selection, None);
        assert_eq!(
            events.borrow().as_slice(),
            [EditorEvent::ToolSwitched {
                from: ToolKind::Pen,
                to: ToolKind::Selection
            }]
        );
        assert_eq!(editor.tool().name(), "Selection");
    }

    #[test]
    fn observer_can_switch_to_text_on_reselect() {
        let mut editor = editor();
        let mut text = TextShape::new();
        text.text = "hi".to_string();
        text.bounding_rect = Rect::new(-30.0, -15.0, 60.0, 30.0);
        text.transform = Transform::IDENTITY.translated(Point::new(100.0, 100.0));
        let id = text.id.clone();
        editor.apply(Operation::AddShape {
            shape: Shape::from(text),
        });
        editor.set_tool(ToolKind::Selection, None);
        editor.subscribe(|event, requests| {
            if let EditorEvent::AlreadySelected(id) = event {
                requests.schedule_tool(ToolKind::Text, Some(id.clone()));
            }
        });

        editor.tap(Point::new(100.0, 100.0));
        assert_eq!(editor.selected(), Some(&id));
        editor.tap(Point::new(100.0, 100.0));
        assert_eq!(editor.tool_kind(), ToolKind::Selection);

        // The switch lands before the next input.
        assert!(editor.input_text("hello"));
        assert_eq!(editor.tool_kind(), ToolKind::Text);
        let shape = editor.drawing().get(&id).and_then(Shape::as_text).unwrap();
        assert_eq!(shape.text, "hello");
    }

    #[test]
    fn scheduled_switch_lands_before_host_operation() {
        let mut editor = editor();
        editor.subscribe(|event, requests| {
            if let EditorEvent::Drawing(DrawingEvent::Added { .. }) = event {
                requests.schedule_tool(ToolKind::Rectangle, None);
            }
        });
        editor.apply(Operation::AddShape {
            shape: line((10.0, 10.0), (60.0, 60.0)),
        });
        assert_eq!(editor.tool_kind(), ToolKind::Pen);

        editor.apply(Operation::AddShape {
            shape: line((20.0, 20.0), (70.0, 70.0)),
        });
        assert_eq!(editor.tool_kind(), ToolKind::Rectangle);
        assert_eq!(editor.drawing().len(), 2);
    }

    #[test]
    fn selection_is_cleared_when_shape_is_undone() {
        let mut editor = editor();
        editor.apply(Operation::AddShape {
            shape: line((10.0, 10.0), (60.0, 60.0)),
        });
        editor.set_tool(ToolKind::Selection, None);
        let events = record(&mut editor);
        editor.tap(Point::new(30.0, 30.0));
        assert!(editor.selected().is_some());

        editor.undo();
        assert!(editor.selected().is_none());
        assert!(matches!(
            events.borrow().last(),
            Some(EditorEvent::SelectionChanged(None))
        ));
    }

    #[test]
    fn load_measures_text_and_clears_history() {
        let mut editor = editor();
        editor.apply(Operation::AddShape {
            shape: line((0.0, 0.0), (5.0, 5.0)),
        });
        let json = r##"{
            "size": [200, 100],
            "shapes": [
                { "type": "Text", "id": "T1", "text": "hello", "fontSize": 10 },
                { "type": "Squiggle", "id": "S1" }
            ]
        }"##;
        editor.load_json(json).unwrap();

        assert!(!editor.can_undo());
        assert_eq!(editor.drawing().size(), Size::new(200.0, 100.0));
        assert_eq!(editor.drawing().len(), 1);
        let text = editor.drawing().shapes()[0].as_text().unwrap();
        assert_eq!(text.bounding_rect.width, 44.0);
        assert_eq!(editor.displayed().width(), 200);
    }

    #[test]
    fn strict_mode_rejects_unknown_types() {
        let mut config = Config::default();
        config.serialization.strict_decode = true;
        let mut editor = Editor::with_config(Size::new(100.0, 100.0), &config).unwrap();
        let err = editor
            .load_json(r#"{ "size": [10, 10], "shapes": [{ "type": "Squiggle", "id": "S" }] }"#)
            .unwrap_err();
        assert!(err.to_string().contains("Squiggle"));
    }
}
