//! Cairo/Pango implementation of the drawing and measurement seams.

use super::color::{BLACK, Color, TRANSPARENT};
use super::context::{CompositeMode, DrawContext, TextMeasurer, TextRun};
use super::font::pango_string;
use super::style::{Dash, LineCap, LineJoin};
use super::transform::Transform;
use crate::util::{Point, Rect, Size};

/// Adapts a `cairo::Context` to [`DrawContext`].
///
/// Cairo has a single source, so stroke and fill colors are tracked here and
/// installed right before each stroke or fill. They follow `save`/`restore`.
pub struct CairoContext<'a> {
    ctx: &'a cairo::Context,
    stroke_color: Color,
    fill_color: Color,
    saved: Vec<(Color, Color)>,
}

impl<'a> CairoContext<'a> {
    pub fn new(ctx: &'a cairo::Context) -> Self {
        Self {
            ctx,
            stroke_color: BLACK,
            fill_color: TRANSPARENT,
            saved: Vec::new(),
        }
    }

    fn set_source(&self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }
}

impl DrawContext for CairoContext<'_> {
    fn save(&mut self) {
        self.ctx.save().ok();
        self.saved.push((self.stroke_color, self.fill_color));
    }

    fn restore(&mut self) {
        self.ctx.restore().ok();
        if let Some((stroke, fill)) = self.saved.pop() {
            self.stroke_color = stroke;
            self.fill_color = fill;
        }
    }

    fn concat(&mut self, transform: &Transform) {
        let [xx, yx, xy, yy, x0, y0] = transform.matrix();
        self.ctx.transform(cairo::Matrix::new(xx, yx, xy, yy, x0, y0));
    }

    fn set_composite(&mut self, mode: CompositeMode) {
        self.ctx.set_operator(match mode {
            CompositeMode::Over => cairo::Operator::Over,
            CompositeMode::Clear => cairo::Operator::Clear,
        });
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.ctx.set_line_cap(match cap {
            LineCap::Butt => cairo::LineCap::Butt,
            LineCap::Round => cairo::LineCap::Round,
            LineCap::Square => cairo::LineCap::Square,
        });
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.ctx.set_line_join(match join {
            LineJoin::Miter => cairo::LineJoin::Miter,
            LineJoin::Round => cairo::LineJoin::Round,
            LineJoin::Bevel => cairo::LineJoin::Bevel,
        });
    }

    fn set_dash(&mut self, dash: Option<&Dash>) {
        match dash {
            Some(dash) => self.ctx.set_dash(&dash.lengths, dash.phase),
            None => self.ctx.set_dash(&[], 0.0),
        }
    }

    fn move_to(&mut self, point: Point) {
        self.ctx.move_to(point.x, point.y);
    }

    fn line_to(&mut self, point: Point) {
        self.ctx.line_to(point.x, point.y);
    }

    fn quad_to(&mut self, control: Point, to: Point) {
        // Cairo only has cubic curves; elevate the quadratic.
        let from = match self.ctx.current_point() {
            Ok((x, y)) => Point::new(x, y),
            Err(_) => control,
        };
        let c1 = from + (control - from) * (2.0 / 3.0);
        let c2 = to + (control - to) * (2.0 / 3.0);
        self.ctx.curve_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y);
    }

    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) {
        self.ctx.arc(center.x, center.y, radius, start, end);
    }

    fn rectangle(&mut self, rect: Rect) {
        self.ctx.rectangle(rect.x, rect.y, rect.width, rect.height);
    }

    fn ellipse(&mut self, rect: Rect) {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let center = rect.center();
        self.ctx.save().ok();
        self.ctx.translate(center.x, center.y);
        self.ctx.scale(rect.width / 2.0, rect.height / 2.0);
        self.ctx.new_sub_path();
        self.ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
        self.ctx.close_path();
        self.ctx.restore().ok();
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn stroke(&mut self) {
        self.set_source(self.stroke_color);
        let _ = self.ctx.stroke();
    }

    fn fill(&mut self) {
        self.set_source(self.fill_color);
        let _ = self.ctx.fill();
    }

    fn draw_text(&mut self, run: &TextRun<'_>) {
        if run.text.is_empty() {
            return;
        }
        self.ctx.save().ok();
        // Gray antialiasing avoids color fringes on transparent surfaces.
        self.ctx.set_antialias(cairo::Antialias::Best);

        let layout = build_layout(self.ctx, run.text, run.font_name, run.font_size, run.wrap_width);
        self.set_source(run.color);
        self.ctx.move_to(run.origin.x, run.origin.y);
        pangocairo::functions::show_layout(self.ctx, &layout);
        self.ctx.new_path();

        self.ctx.restore().ok();
    }
}

fn build_layout(
    ctx: &cairo::Context,
    text: &str,
    font_name: &str,
    font_size: f64,
    wrap_width: Option<f64>,
) -> pango::Layout {
    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc = pango::FontDescription::from_string(&pango_string(font_name, font_size));
    layout.set_font_description(Some(&font_desc));
    if let Some(width) = wrap_width.filter(|w| *w > 0.0) {
        layout.set_width((width * pango::SCALE as f64) as i32);
        layout.set_wrap(pango::WrapMode::WordChar);
    }
    layout.set_text(text);
    layout
}

/// Measures text with Pango on a scratch 1x1 surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct PangoMeasurer;

impl TextMeasurer for PangoMeasurer {
    fn measure(
        &self,
        text: &str,
        font_name: &str,
        font_size: f64,
        max_width: Option<f64>,
    ) -> Size {
        let fallback = Size::new(0.0, font_size * 1.2);
        let Ok(surface) = cairo::ImageSurface::create(cairo::Format::ARgb32, 1, 1) else {
            return fallback;
        };
        let Ok(ctx) = cairo::Context::new(&surface) else {
            return fallback;
        };

        // An empty layout still reports one line of height.
        let layout = build_layout(&ctx, text, font_name, font_size, max_width);
        let (_ink_rect, logical_rect) = layout.extents();
        let scale = pango::SCALE as f64;
        Size::new(
            logical_rect.width() as f64 / scale,
            logical_rect.height() as f64 / scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;

    fn surface_has_pixels(surface: &mut cairo::ImageSurface) -> bool {
        surface
            .data()
            .map(|data| data.iter().any(|byte| *byte != 0))
            .unwrap_or(false)
    }

    #[test]
    fn stroke_uses_tracked_stroke_color() {
        let mut surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 20, 20).unwrap();
        {
            let ctx = cairo::Context::new(&surface).unwrap();
            let mut draw = CairoContext::new(&ctx);
            draw.set_stroke_color(RED);
            draw.set_line_width(4.0);
            draw.move_to(Point::new(0.0, 10.0));
            draw.line_to(Point::new(20.0, 10.0));
            draw.stroke();
        }
        surface.flush();
        assert!(surface_has_pixels(&mut surface));
    }

    #[test]
    fn restore_brings_back_previous_colors() {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 4, 4).unwrap();
        let ctx = cairo::Context::new(&surface).unwrap();
        let mut draw = CairoContext::new(&ctx);
        draw.set_fill_color(RED);
        draw.save();
        draw.set_fill_color(BLACK);
        draw.restore();
        assert_eq!(draw.fill_color, RED);
    }

    #[test]
    fn pango_measurer_grows_with_text() {
        let short = PangoMeasurer.measure("hi", "Sans", 20.0, None);
        let long = PangoMeasurer.measure("hello there", "Sans", 20.0, None);
        assert!(long.width > short.width);
        assert!(short.height > 0.0);
    }
}
