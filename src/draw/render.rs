//! Rendering routines that turn shapes into drawing-context calls.

use super::angle::{ARC_RADIUS, AngleShape, LABEL_FONT_SIZE};
use super::color::Color;
use super::context::{CompositeMode, DrawContext, TextRun};
use super::font::DEFAULT_FONT_NAME;
use super::pen::PenShape;
use super::shape::Shape;
use super::style::{LineCap, LineJoin, StrokeStyle};
use super::text::TextShape;
use super::two_point::{TwoPointKind, TwoPointShape};
use crate::util::Point;

/// Renders all shapes in paint order (first shape = bottom layer).
pub fn render_shapes<'a, I>(ctx: &mut dyn DrawContext, shapes: I)
where
    I: IntoIterator<Item = &'a Shape>,
{
    for shape in shapes {
        render_shape(ctx, shape);
    }
}

/// Renders a single shape.
///
/// Dispatches to the routine for the shape's variant. Each routine saves and
/// restores the context so settings never leak between shapes.
pub fn render_shape(ctx: &mut dyn DrawContext, shape: &Shape) {
    match shape {
        Shape::TwoPoint(shape) => render_two_point(ctx, shape),
        Shape::Angle(shape) => render_angle(ctx, shape),
        Shape::Pen(shape) => render_pen(ctx, shape),
        Shape::Text(shape) => render_text(ctx, shape),
    }
}

fn apply_stroke_style(ctx: &mut dyn DrawContext, style: &StrokeStyle, color: Color) {
    ctx.set_stroke_color(color);
    ctx.set_line_width(style.stroke_width);
    ctx.set_line_cap(style.cap_style);
    ctx.set_line_join(style.join_style);
    ctx.set_dash(style.dash().as_ref());
}

fn add_closed_path(ctx: &mut dyn DrawContext, points: &[Point]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    ctx.move_to(*first);
    for p in rest {
        ctx.line_to(*p);
    }
    ctx.close_path();
}

fn add_two_point_path(ctx: &mut dyn DrawContext, shape: &TwoPointShape) {
    match shape.kind {
        TwoPointKind::Line => {
            ctx.move_to(shape.a);
            ctx.line_to(shape.b);
        }
        TwoPointKind::Arrow => {
            ctx.move_to(shape.a);
            ctx.line_to(shape.b);
            let [left, right] = shape.arrowhead();
            ctx.move_to(left);
            ctx.line_to(shape.b);
            ctx.line_to(right);
        }
        TwoPointKind::Rectangle => ctx.rectangle(shape.rect()),
        TwoPointKind::Ellipse => ctx.ellipse(shape.rect()),
        TwoPointKind::Ngon(_) | TwoPointKind::Star => add_closed_path(ctx, &shape.polygon()),
    }
}

/// Fill pass (closed kinds only) then stroke pass, under the shape transform.
pub fn render_two_point(ctx: &mut dyn DrawContext, shape: &TwoPointShape) {
    ctx.save();
    ctx.concat(&shape.transform);

    if shape.kind.is_closed() {
        if let Some(fill) = shape.style.visible_fill() {
            ctx.set_fill_color(fill);
            add_two_point_path(ctx, shape);
            ctx.fill();
        }
    }

    if let Some(stroke) = shape.style.visible_stroke() {
        apply_stroke_style(ctx, &shape.style, stroke);
        add_two_point_path(ctx, shape);
        ctx.stroke();
    }

    ctx.restore();
}

/// Both arms, then (when the arms differ) the vertex arc and degree label.
pub fn render_angle(ctx: &mut dyn DrawContext, shape: &AngleShape) {
    let Some(color) = shape.style.visible_stroke() else {
        return;
    };
    ctx.save();
    ctx.concat(&shape.transform);
    apply_stroke_style(ctx, &shape.style, color);

    ctx.move_to(shape.a);
    ctx.line_to(shape.b);
    ctx.line_to(shape.c);
    ctx.stroke();

    if !shape.a.approx_eq(shape.c) {
        let (start, end) = shape.arc_angles();
        ctx.set_line_width(shape.style.stroke_width / 2.0);
        ctx.set_dash(None);
        ctx.move_to(Point::new(
            shape.b.x + ARC_RADIUS * start.cos(),
            shape.b.y + ARC_RADIUS * start.sin(),
        ));
        ctx.arc(shape.b, ARC_RADIUS, start, end);
        ctx.stroke();

        let label = format!("{}°", shape.degrees());
        ctx.draw_text(&TextRun {
            text: &label,
            font_name: DEFAULT_FONT_NAME,
            font_size: LABEL_FONT_SIZE,
            color,
            origin: shape.label_origin(),
            wrap_width: None,
        });
    }

    ctx.restore();
}

fn begin_pen(ctx: &mut dyn DrawContext, shape: &PenShape) {
    ctx.save();
    if shape.is_eraser {
        ctx.set_composite(CompositeMode::Clear);
    }
    ctx.set_stroke_color(shape.stroke_color);
    ctx.set_fill_color(shape.stroke_color);
    ctx.set_line_cap(LineCap::Round);
    ctx.set_line_join(LineJoin::Round);
    ctx.set_dash(None);
}

fn render_dot(ctx: &mut dyn DrawContext, center: Point, width: f64) {
    ctx.move_to(Point::new(center.x + width / 2.0, center.y));
    ctx.arc(center, width / 2.0, 0.0, std::f64::consts::TAU);
    ctx.close_path();
    ctx.fill();
}

/// Draws the curve for segment `index`: from the previous midpoint (or the
/// stroke start) through the segment's first point to its midpoint.
fn render_pen_segment(ctx: &mut dyn DrawContext, shape: &PenShape, index: usize) {
    let segment = &shape.segments[index];
    let from = match index {
        0 => shape.start,
        _ => shape.segments[index - 1].midpoint(),
    };
    if from.approx_eq(segment.a) && segment.a.approx_eq(segment.b) {
        render_dot(ctx, segment.a, segment.width);
        return;
    }
    ctx.set_line_width(segment.width);
    ctx.move_to(from);
    ctx.quad_to(segment.a, segment.midpoint());
    ctx.stroke();
}

/// Renders a complete pen or eraser stroke.
///
/// A stroke with no segments is drawn as a dot one stroke width across.
pub fn render_pen(ctx: &mut dyn DrawContext, shape: &PenShape) {
    begin_pen(ctx, shape);
    if shape.is_dot() {
        render_dot(ctx, shape.start, shape.stroke_width);
    } else {
        for index in 0..shape.segments.len() {
            render_pen_segment(ctx, shape, index);
        }
    }
    ctx.restore();
}

/// Renders only the newest fragment of a stroke, for progressive drawing.
pub fn render_pen_latest_segment(ctx: &mut dyn DrawContext, shape: &PenShape) {
    begin_pen(ctx, shape);
    match shape.segments.len() {
        0 => render_dot(ctx, shape.start, shape.stroke_width),
        n => render_pen_segment(ctx, shape, n - 1),
    }
    ctx.restore();
}

/// Renders a text block inside its cached bounds. Skipped while being edited.
fn render_text(ctx: &mut dyn DrawContext, shape: &TextShape) {
    if shape.is_being_edited || shape.text.is_empty() {
        return;
    }
    let rect = shape.bounding_rect;
    ctx.save();
    ctx.concat(&shape.transform);
    ctx.draw_text(&TextRun {
        text: &shape.text,
        font_name: &shape.font_name,
        font_size: shape.font_size,
        color: shape.fill_color,
        origin: Point::new(rect.x, rect.y),
        // A little slack keeps measured single lines from wrapping.
        wrap_width: (rect.width > 0.0).then_some(rect.width.ceil() + 1.0),
    });
    ctx.restore();
}
