//! Raster buffers behind the editor.
//!
//! The persistent buffer holds every finished shape. A drag snapshots it into
//! the transient buffer, and each drag frame composes the transient buffer
//! with the active tool's in-progress shape into the composite buffer, which
//! is what the host presents until the drag ends.

use crate::draw::{CairoContext, Color, DamageTracker, DrawContext, Shape, render_shapes};
use crate::input::Tool;
use crate::util::{Rect, Size};
use cairo::{Context, ImageSurface};
use log::debug;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Failures while allocating or exporting raster buffers.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
}

/// Which buffer the host should present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Displayed {
    Persistent,
    Composite,
}

/// Counters for how the persistent buffer has been maintained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BufferStats {
    /// Rebuilds that re-rendered every shape
    pub full_rebuilds: usize,
    /// Shapes drawn on top without a rebuild
    pub incremental_adds: usize,
}

/// Persistent, transient and composite buffers plus damage tracking.
pub struct RenderBuffers {
    width: i32,
    height: i32,
    persistent: ImageSurface,
    transient: Option<ImageSurface>,
    composite: Option<ImageSurface>,
    displayed: Displayed,
    damage: DamageTracker,
    stats: BufferStats,
}

impl std::fmt::Debug for RenderBuffers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderBuffers")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("dragging", &self.is_dragging())
            .field("displayed", &self.displayed)
            .field("stats", &self.stats)
            .finish()
    }
}

impl RenderBuffers {
    /// Allocates a cleared persistent buffer covering `size`.
    pub fn new(size: Size) -> Result<Self, RenderError> {
        let (width, height) = size.to_pixels();
        Ok(Self {
            width,
            height,
            persistent: create_surface(width, height)?,
            transient: None,
            composite: None,
            displayed: Displayed::Persistent,
            damage: DamageTracker::new(),
            stats: BufferStats::default(),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn stats(&self) -> BufferStats {
        self.stats
    }

    pub fn displayed_kind(&self) -> Displayed {
        self.displayed
    }

    /// The buffer the host should present right now.
    pub fn displayed(&self) -> &ImageSurface {
        match (self.displayed, &self.composite) {
            (Displayed::Composite, Some(composite)) => composite,
            _ => &self.persistent,
        }
    }

    pub fn persistent(&self) -> &ImageSurface {
        &self.persistent
    }

    pub fn is_dragging(&self) -> bool {
        self.transient.is_some()
    }

    /// Re-renders every shape into the persistent buffer, in paint order.
    pub fn rebuild(&mut self, shapes: &[Shape]) -> Result<(), RenderError> {
        debug!("Rebuilding persistent buffer with {} shapes", shapes.len());
        let ctx = Context::new(&self.persistent)?;
        clear(&ctx)?;
        render_shapes(&mut CairoContext::new(&ctx), shapes);
        drop(ctx);
        self.persistent.flush();

        self.stats.full_rebuilds += 1;
        self.damage.mark_full();
        Ok(())
    }

    /// Draws newly added shapes on top of the persistent buffer.
    pub fn add_shapes(&mut self, shapes: &[Shape]) -> Result<(), RenderError> {
        let ctx = Context::new(&self.persistent)?;
        render_shapes(&mut CairoContext::new(&ctx), shapes);
        drop(ctx);
        self.persistent.flush();

        for shape in shapes {
            self.damage.mark_shape(shape);
        }
        self.stats.incremental_adds += shapes.len();
        Ok(())
    }

    /// Snapshots the persistent buffer as the drag backdrop.
    pub fn begin_drag(&mut self) -> Result<(), RenderError> {
        let transient = create_surface(self.width, self.height)?;
        copy_surface(&self.persistent, &transient)?;
        let composite = create_surface(self.width, self.height)?;
        copy_surface(&self.persistent, &composite)?;
        self.transient = Some(transient);
        self.composite = Some(composite);
        self.displayed = Displayed::Composite;
        Ok(())
    }

    /// Takes a fresh backdrop after the persistent buffer changed mid-drag.
    pub fn resnapshot(&mut self) -> Result<(), RenderError> {
        if let Some(transient) = &self.transient {
            copy_surface(&self.persistent, transient)?;
        }
        Ok(())
    }

    /// Composes one drag frame: the backdrop plus the tool's in-progress shape.
    ///
    /// A progressive tool's frame becomes the next frame's backdrop.
    pub fn render_frame(&mut self, tool: &dyn Tool) -> Result<(), RenderError> {
        let (Some(transient), Some(composite)) = (&self.transient, &self.composite) else {
            return Ok(());
        };
        copy_surface(transient, composite)?;

        let ctx = Context::new(composite)?;
        tool.render_in_progress(&mut CairoContext::new(&ctx));
        drop(ctx);
        composite.flush();

        if tool.is_progressive() {
            copy_surface(composite, transient)?;
        }
        self.displayed = Displayed::Composite;
        self.damage.mark_full();
        Ok(())
    }

    /// Drops the drag buffers and presents the persistent buffer again.
    pub fn end_drag(&mut self) {
        self.transient = None;
        self.composite = None;
        self.displayed = Displayed::Persistent;
        self.damage.mark_full();
    }

    pub fn has_damage(&self) -> bool {
        !self.damage.is_clean()
    }

    /// Drains damaged pixel rectangles since the last call.
    pub fn take_damage(&mut self) -> Vec<Rect> {
        self.damage.take_regions(self.width, self.height)
    }

    /// Copies the presented buffer into a new surface.
    pub fn snapshot(&self) -> Result<ImageSurface, RenderError> {
        let copy = create_surface(self.width, self.height)?;
        copy_surface(self.displayed(), &copy)?;
        Ok(copy)
    }

    /// Paints the presented buffer into a host context at the origin.
    pub fn present(&self, ctx: &Context) -> Result<(), RenderError> {
        ctx.set_source_surface(self.displayed(), 0.0, 0.0)?;
        ctx.paint()?;
        Ok(())
    }
}

fn create_surface(width: i32, height: i32) -> Result<ImageSurface, RenderError> {
    if width <= 0 || height <= 0 {
        return Err(RenderError::InvalidSize { width, height });
    }
    Ok(ImageSurface::create(cairo::Format::ARgb32, width, height)?)
}

fn clear(ctx: &Context) -> Result<(), RenderError> {
    ctx.set_operator(cairo::Operator::Clear);
    ctx.paint()?;
    ctx.set_operator(cairo::Operator::Over);
    Ok(())
}

/// Replaces the pixels of `dst` with those of `src`.
fn copy_surface(src: &ImageSurface, dst: &ImageSurface) -> Result<(), RenderError> {
    let ctx = Context::new(dst)?;
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_surface(src, 0.0, 0.0)?;
    ctx.paint()?;
    drop(ctx);
    dst.flush();
    Ok(())
}

/// Renders `shapes` into a standalone surface, for export.
///
/// # Arguments
/// * `shapes` - Shapes in paint order
/// * `size` - Canvas size in drawing units
/// * `scale` - Pixels per drawing unit
/// * `background` - Fill painted under the shapes, or transparent when `None`
pub fn rasterize(
    shapes: &[Shape],
    size: Size,
    scale: f64,
    background: Option<Color>,
) -> Result<ImageSurface, RenderError> {
    let (width, height) = Size::new(size.width * scale, size.height * scale).to_pixels();
    let surface = create_surface(width, height)?;
    let ctx = Context::new(&surface)?;
    if let Some(color) = background {
        ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        ctx.paint()?;
    }
    ctx.scale(scale, scale);
    {
        let mut target = CairoContext::new(&ctx);
        target.save();
        render_shapes(&mut target, shapes);
        target.restore();
    }
    drop(ctx);
    surface.flush();
    Ok(surface)
}

/// Writes `surface` to a PNG file.
pub fn write_png(surface: &ImageSurface, path: &Path) -> Result<(), RenderError> {
    let mut file = File::create(path)?;
    surface.write_to_png(&mut file)?;
    Ok(())
}
