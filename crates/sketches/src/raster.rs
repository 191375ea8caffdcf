//! Anti-aliased software rasterizer backed by a `tiny-skia` pixmap.

use sketchbook_core::renderer::STROKE_WIDTH;
use sketchbook_core::{Canvas, Color, Point, Renderer, SketchError};
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::pixel::demultiply_rgba;

/// Draws into an in-memory pixmap the size of the canvas.
///
/// Blending is source-over; stroke width is [`STROKE_WIDTH`].
pub struct RasterRenderer {
    pixmap: Pixmap,
}

impl RasterRenderer {
    /// Allocates a transparent pixmap for `canvas`.
    ///
    /// Returns `SketchError::RenderSurfaceUnavailable` if the surface cannot
    /// be allocated.
    pub fn new(canvas: &Canvas) -> Result<Self, SketchError> {
        let w = u32::try_from(canvas.width()).map_err(|_| SketchError::InvalidDimensions)?;
        let h = u32::try_from(canvas.height()).map_err(|_| SketchError::InvalidDimensions)?;
        let pixmap = Pixmap::new(w, h).ok_or_else(|| {
            SketchError::RenderSurfaceUnavailable(format!("cannot allocate a {w}x{h} pixmap"))
        })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight-alpha RGBA8 pixels, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        demultiply_rgba(self.pixmap.data())
    }
}

fn paint(color: Color) -> Paint<'static> {
    let [r, g, b, a] = color.to_rgba8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn stroke() -> Stroke {
    Stroke {
        width: STROKE_WIDTH as f32,
        ..Stroke::default()
    }
}

/// `None` for fewer than two points. Two points make an open segment.
fn polygon_path(points: &[Point]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for p in rest {
        pb.line_to(p.x as f32, p.y as f32);
    }
    if points.len() > 2 {
        pb.close();
    }
    pb.finish()
}

fn rect(width: f64, height: f64) -> Result<Rect, SketchError> {
    Rect::from_xywh(0.0, 0.0, width as f32, height as f32).ok_or_else(|| {
        SketchError::InvalidArgument(format!("cannot rasterize a {width}x{height} rect"))
    })
}

impl Renderer for RasterRenderer {
    fn stroke_polygon(&mut self, points: &[Point], color: Color) -> Result<(), SketchError> {
        if let Some(path) = polygon_path(points) {
            self.pixmap
                .stroke_path(&path, &paint(color), &stroke(), Transform::identity(), None);
        }
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) -> Result<(), SketchError> {
        if points.len() < 3 {
            return Ok(());
        }
        if let Some(path) = polygon_path(points) {
            self.pixmap.fill_path(
                &path,
                &paint(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
        Ok(())
    }

    fn stroke_rect(
        &mut self,
        origin: Point,
        width: f64,
        height: f64,
        rotation: f64,
        color: Color,
    ) -> Result<(), SketchError> {
        let path = PathBuilder::from_rect(rect(width, height)?);
        let transform = Transform::from_translate(origin.x as f32, origin.y as f32)
            .pre_rotate(rotation.to_degrees() as f32);
        self.pixmap
            .stroke_path(&path, &paint(color), &stroke(), transform, None);
        Ok(())
    }

    fn fill_rect(
        &mut self,
        origin: Point,
        width: f64,
        height: f64,
        color: Color,
    ) -> Result<(), SketchError> {
        let transform = Transform::from_translate(origin.x as f32, origin.y as f32);
        self.pixmap
            .fill_rect(rect(width, height)?, &paint(color), transform, None);
        Ok(())
    }
}
