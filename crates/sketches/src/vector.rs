//! SVG document renderer.
//!
//! Every call appends one element; nothing is merged or simplified, so the
//! document mirrors the shape list one to one.

use sketchbook_core::renderer::STROKE_WIDTH;
use sketchbook_core::{Canvas, Color, Point, Renderer, SketchError};
use svg::node::element::path::Data;
use svg::node::element::{Path, Rectangle};
use svg::{Document, Node};

/// Builds an SVG document whose size and `viewBox` equal the canvas.
pub struct SvgRenderer {
    document: Document,
}

impl SvgRenderer {
    pub fn new(canvas: &Canvas) -> Self {
        let (w, h) = (canvas.width(), canvas.height());
        let document = Document::new()
            .set("width", w)
            .set("height", h)
            .set("viewBox", format!("0 0 {w} {h}"));
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}

/// `#rrggbb`; opacity is carried separately.
fn rgb(color: Color) -> String {
    let [r, g, b, _] = color.to_rgba8();
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn polygon_data(points: &[Point]) -> Option<Data> {
    let (first, rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }
    let mut data = Data::new().move_to((first.x as f32, first.y as f32));
    for p in rest {
        data = data.line_to((p.x as f32, p.y as f32));
    }
    if points.len() > 2 {
        data = data.close();
    }
    Some(data)
}

fn check_size(width: f64, height: f64) -> Result<(), SketchError> {
    if width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0 {
        Ok(())
    } else {
        Err(SketchError::InvalidArgument(format!(
            "cannot draw a {width}x{height} rect"
        )))
    }
}

impl Renderer for SvgRenderer {
    fn stroke_polygon(&mut self, points: &[Point], color: Color) -> Result<(), SketchError> {
        if let Some(data) = polygon_data(points) {
            self.document.append(
                Path::new()
                    .set("d", data)
                    .set("fill", "none")
                    .set("stroke", rgb(color))
                    .set("stroke-opacity", color.a)
                    .set("stroke-width", STROKE_WIDTH),
            );
        }
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) -> Result<(), SketchError> {
        if points.len() < 3 {
            return Ok(());
        }
        if let Some(data) = polygon_data(points) {
            self.document.append(
                Path::new()
                    .set("d", data)
                    .set("fill", rgb(color))
                    .set("fill-opacity", color.a)
                    .set("stroke", "none"),
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
        check_size(width, height)?;
        self.document.append(
            Rectangle::new()
                .set("width", width)
                .set("height", height)
                .set(
                    "transform",
                    format!(
                        "translate({} {}) rotate({})",
                        origin.x,
                        origin.y,
                        rotation.to_degrees()
                    ),
                )
                .set("fill", "none")
                .set("stroke", rgb(color))
                .set("stroke-opacity", color.a)
                .set("stroke-width", STROKE_WIDTH),
        );
        Ok(())
    }

    fn fill_rect(
        &mut self,
        origin: Point,
        width: f64,
        height: f64,
        color: Color,
    ) -> Result<(), SketchError> {
        check_size(width, height)?;
        self.document.append(
            Rectangle::new()
                .set("x", origin.x)
                .set("y", origin.y)
                .set("width", width)
                .set("height", height)
                .set("fill", rgb(color))
                .set("fill-opacity", color.a)
                .set("stroke", "none"),
        );
        Ok(())
    }
}
