use cairo::ImageSurface;
use sketchboard::draw::{FixedMetrics, PaintSettings, Shape, WHITE};
use sketchboard::editor::{Displayed, Editor, EditorEvent};
use sketchboard::history::{HistoryEvent, Operation};
use sketchboard::input::ToolKind;
use sketchboard::util::{Point, Rect, Size};
use std::cell::RefCell;
use std::rc::Rc;

fn make_editor() -> Editor {
    Editor::new(Size::new(320.0, 240.0))
        .expect("editor buffers")
        .with_measurer(FixedMetrics)
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

fn alpha_at(surface: &mut ImageSurface, x: i32, y: i32) -> u8 {
    let stride = surface.stride() as usize;
    surface
        .data()
        .map(|data| data[y as usize * stride + x as usize * 4 + 3])
        .unwrap_or(0)
}

fn record_events(editor: &mut Editor) -> Rc<RefCell<Vec<EditorEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    editor.subscribe(move |event, _| sink.borrow_mut().push(event.clone()));
    events
}

fn drag(editor: &mut Editor, from: (f64, f64), to: (f64, f64)) {
    editor.drag_start(Point::new(from.0, from.1));
    editor.drag_continue(Point::new(to.0, to.1), Point::ZERO);
    editor.drag_end(Point::new(to.0, to.1));
}

fn shape_ids(editor: &Editor) -> Vec<String> {
    editor
        .drawing()
        .shapes()
        .iter()
        .map(|shape| shape.id().to_string())
        .collect()
}

#[test]
fn line_add_undo_redo_keeps_identity() {
    let mut editor = make_editor();
    editor.update_settings(PaintSettings {
        stroke_width: 5.0,
        ..PaintSettings::default()
    });
    editor.set_tool(ToolKind::Line, None);

    drag(&mut editor, (10.0, 10.0), (50.0, 50.0));
    assert_eq!(editor.drawing().len(), 1);
    let shape = &editor.drawing().shapes()[0];
    let id = shape.id().clone();
    assert_eq!(shape.bounding_rect(), Rect::new(7.5, 7.5, 45.0, 45.0));

    let mut shown = editor.snapshot().unwrap();
    assert!(alpha_at(&mut shown, 30, 30) > 0);

    assert!(editor.undo());
    assert!(editor.drawing().is_empty());
    let mut shown = editor.snapshot().unwrap();
    assert!(!surface_has_pixels(&mut shown));

    assert!(editor.redo());
    assert_eq!(editor.drawing().len(), 1);
    assert_eq!(editor.drawing().shapes()[0].id(), &id);
}

#[test]
fn angle_tool_commits_a_single_operation() {
    let mut editor = make_editor();
    editor.set_tool(ToolKind::Angle, None);

    drag(&mut editor, (0.0, 0.0), (10.0, 0.0));
    drag(&mut editor, (10.0, 0.0), (10.0, 10.0));

    assert_eq!(editor.history().undo_depth(), 1);
    assert_eq!(editor.drawing().len(), 1);
    let Shape::Angle(angle) = &editor.drawing().shapes()[0] else {
        panic!("expected an angle shape");
    };
    assert_eq!(angle.c, Point::new(10.0, 10.0));

    assert!(editor.undo());
    assert!(editor.drawing().is_empty());
    assert!(!editor.undo());
}

#[test]
fn cancelled_angle_drags_leave_the_drawing_alone() {
    let mut editor = make_editor();
    editor.set_tool(ToolKind::Angle, None);

    editor.drag_start(Point::new(0.0, 0.0));
    editor.drag_continue(Point::new(30.0, 0.0), Point::ZERO);
    editor.drag_cancel(Point::new(30.0, 0.0));
    assert!(editor.drawing().is_empty());
    assert_eq!(editor.history().undo_depth(), 0);
    assert_eq!(editor.displayed_kind(), Displayed::Persistent);

    drag(&mut editor, (0.0, 0.0), (30.0, 0.0));
    let first = editor.drawing().shapes().to_vec();
    editor.drag_start(Point::new(30.0, 0.0));
    editor.drag_continue(Point::new(30.0, 30.0), Point::ZERO);
    editor.drag_cancel(Point::new(30.0, 30.0));
    assert_eq!(editor.drawing().shapes(), first.as_slice());
    assert_eq!(editor.history().undo_depth(), 1);
}

#[test]
fn new_text_then_edit_undoes_in_one_step() {
    let mut editor = make_editor();
    editor.set_tool(ToolKind::Text, None);
    let events = record_events(&mut editor);

    editor.tap(Point::new(100.0, 100.0));
    assert_eq!(editor.drawing().len(), 1);
    assert!(editor.input_text("hello"));
    editor.tap(Point::new(300.0, 220.0));

    assert_eq!(editor.history().undo_depth(), 1);
    let text = editor.drawing().shapes()[0].as_text().unwrap();
    assert_eq!(text.text, "hello");
    assert!(!text.is_being_edited);
    assert!(
        events
            .borrow()
            .iter()
            .any(|event| matches!(event, EditorEvent::TextTappedAway(_)))
    );

    assert!(editor.undo());
    assert!(editor.drawing().is_empty());
    assert!(editor.redo());
    let text = editor.drawing().shapes()[0].as_text().unwrap();
    assert_eq!(text.text, "hello");
}

#[test]
fn undo_redo_sequence_is_an_inverse() {
    let mut editor = make_editor();
    editor.set_tool(ToolKind::Rectangle, None);
    drag(&mut editor, (10.0, 10.0), (40.0, 40.0));
    drag(&mut editor, (50.0, 50.0), (90.0, 80.0));
    editor.set_tool(ToolKind::Star, None);
    drag(&mut editor, (100.0, 100.0), (150.0, 150.0));
    let after = editor.drawing().shapes().to_vec();

    for _ in 0..3 {
        assert!(editor.undo());
    }
    assert!(editor.drawing().is_empty());
    assert!(!editor.undo());
    for _ in 0..3 {
        assert!(editor.redo());
    }
    assert_eq!(editor.drawing().shapes(), after.as_slice());
    assert!(!editor.redo());
}

#[test]
fn repainted_selection_survives_undo_and_redo() {
    let mut editor = make_editor();
    editor.set_tool(ToolKind::Rectangle, None);
    drag(&mut editor, (10.0, 10.0), (50.0, 50.0));
    editor.set_tool(ToolKind::Selection, None);
    editor.tap(Point::new(30.0, 30.0));
    assert!(editor.selected().is_some());

    editor.update_settings(PaintSettings {
        stroke_width: 9.0,
        ..PaintSettings::default()
    });
    let repainted = editor.drawing().shapes().to_vec();

    assert!(editor.undo());
    assert!(editor.drawing().is_empty());
    assert!(editor.redo());
    assert_eq!(editor.drawing().shapes(), repainted.as_slice());
    let Shape::TwoPoint(rect) = &editor.drawing().shapes()[0] else {
        panic!("expected a rectangle");
    };
    assert_eq!(rect.style.stroke_width, 9.0);
}

#[test]
fn new_edit_after_undo_clears_redo() {
    let mut editor = make_editor();
    editor.set_tool(ToolKind::Ellipse, None);
    drag(&mut editor, (10.0, 10.0), (40.0, 40.0));
    editor.undo();
    assert!(editor.can_redo());
    drag(&mut editor, (60.0, 60.0), (90.0, 90.0));
    assert!(!editor.can_redo());
}

#[test]
fn selection_drag_moves_and_cancel_restores() {
    let mut editor = make_editor();
    editor.set_tool(ToolKind::Rectangle, None);
    drag(&mut editor, (10.0, 10.0), (50.0, 50.0));
    let before = shape_ids(&editor);
    editor.set_tool(ToolKind::Selection, None);
    let events = record_events(&mut editor);

    editor.tap(Point::new(30.0, 30.0));
    assert!(editor.selected().is_some());

    editor.drag_start(Point::new(30.0, 30.0));
    editor.drag_continue(Point::new(130.0, 80.0), Point::ZERO);
    assert_eq!(editor.displayed_kind(), Displayed::Composite);
    let mut shown = editor.snapshot().unwrap();
    assert!(alpha_at(&mut shown, 110, 80) > 0);
    editor.drag_cancel(Point::new(130.0, 80.0));

    let shape = &editor.drawing().shapes()[0];
    assert!(shape.transform().unwrap().is_identity());
    assert_eq!(editor.history().undo_depth(), 1);

    editor.drag_start(Point::new(30.0, 30.0));
    editor.drag_continue(Point::new(130.0, 80.0), Point::ZERO);
    editor.drag_end(Point::new(130.0, 80.0));
    let shape = &editor.drawing().shapes()[0];
    assert_eq!(
        shape.transform().unwrap().translation,
        Point::new(100.0, 50.0)
    );
    assert_eq!(editor.history().undo_depth(), 2);
    assert_eq!(shape_ids(&editor), before);
    assert!(events.borrow().iter().any(|event| matches!(
        event,
        EditorEvent::History(HistoryEvent::Applied(Operation::ChangeTransform { .. }))
    )));

    let mut shown = editor.snapshot().unwrap();
    assert_eq!(editor.displayed_kind(), Displayed::Persistent);
    assert!(alpha_at(&mut shown, 110, 80) > 0);
    assert_eq!(alpha_at(&mut shown, 10, 30), 0);
}

#[test]
fn drag_outside_selection_does_nothing() {
    let mut editor = make_editor();
    editor.set_tool(ToolKind::Rectangle, None);
    drag(&mut editor, (10.0, 10.0), (50.0, 50.0));
    editor.set_tool(ToolKind::Selection, None);
    editor.tap(Point::new(30.0, 30.0));

    drag(&mut editor, (200.0, 200.0), (250.0, 220.0));
    assert!(editor.drawing().shapes()[0].transform().unwrap().is_identity());
    assert_eq!(editor.history().undo_depth(), 1);
}

#[test]
fn pen_drag_renders_progressively() {
    let mut editor = make_editor();
    editor.set_tool(ToolKind::Pen, None);

    editor.drag_start(Point::new(20.0, 20.0));
    for x in [40.0, 60.0, 80.0] {
        editor.drag_continue(Point::new(x, 20.0), Point::new(100.0, 0.0));
    }
    assert!(editor.drawing().is_empty());
    assert_eq!(editor.displayed_kind(), Displayed::Composite);
    let mut shown = editor.snapshot().unwrap();
    assert!(alpha_at(&mut shown, 20, 20) > 0);

    editor.drag_end(Point::new(80.0, 20.0));
    assert_eq!(editor.drawing().len(), 1);
    assert_eq!(editor.displayed_kind(), Displayed::Persistent);
    assert_eq!(editor.buffer_stats().incremental_adds, 1);
    let mut shown = editor.snapshot().unwrap();
    assert!(alpha_at(&mut shown, 20, 20) > 0);
}

#[test]
fn eraser_clears_persistent_pixels() {
    let mut editor = make_editor();
    editor.update_settings(PaintSettings {
        stroke_width: 20.0,
        stroke_color: Some(WHITE),
        ..PaintSettings::default()
    });
    editor.set_tool(ToolKind::Rectangle, None);
    drag(&mut editor, (20.0, 20.0), (100.0, 100.0));
    let mut shown = editor.snapshot().unwrap();
    assert!(alpha_at(&mut shown, 20, 60) > 0);

    editor.set_tool(ToolKind::Eraser, None);
    editor.drag_start(Point::new(20.0, 40.0));
    editor.drag_continue(Point::new(20.0, 60.0), Point::ZERO);
    editor.drag_continue(Point::new(20.0, 80.0), Point::ZERO);
    editor.drag_end(Point::new(20.0, 80.0));

    let mut shown = editor.snapshot().unwrap();
    assert_eq!(alpha_at(&mut shown, 20, 60), 0);
    assert_eq!(editor.drawing().len(), 2);
}

#[test]
fn damage_is_reported_per_change() {
    let mut editor = make_editor();
    editor.take_damage();
    assert!(!editor.has_damage());
    editor.set_tool(ToolKind::Line, None);
    editor.tap(Point::new(10.0, 10.0));
    assert!(editor.has_damage());
    let damage = editor.take_damage();
    assert_eq!(damage.len(), 1);
    assert!(damage[0].width < 320.0);
    assert!(!editor.has_damage());
    assert!(editor.take_damage().is_empty());

    editor.undo();
    assert_eq!(
        editor.take_damage(),
        vec![Rect::new(0.0, 0.0, 320.0, 240.0)]
    );
}
