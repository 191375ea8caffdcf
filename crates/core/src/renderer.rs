//! The drawing capability consumed by shapes.
//!
//! A [`Renderer`] only needs to stroke and fill closed polygons and rects
//! with an explicit color; there is no ambient paint state. Implementations
//! live next to the export code (raster and SVG).

use crate::color::Color;
use crate::error::SketchError;
use crate::geometry::Point;

/// Stroke width used by every renderer, in canvas units.
pub const STROKE_WIDTH: f64 = 1.0;

/// Something that can draw solid-color polygons and rectangles.
///
/// Polygons are closed implicitly. A two-point polygon is a single segment.
/// Alpha is taken from the color.
pub trait Renderer {
    fn stroke_polygon(&mut self, points: &[Point], color: Color) -> Result<(), SketchError>;

    fn fill_polygon(&mut self, points: &[Point], color: Color) -> Result<(), SketchError>;

    /// Strokes a `width` x `height` rect whose top-left corner is `origin`,
    /// rotated by `rotation` radians about that corner.
    fn stroke_rect(
        &mut self,
        origin: Point,
        width: f64,
        height: f64,
        rotation: f64,
        color: Color,
    ) -> Result<(), SketchError>;

    fn fill_rect(
        &mut self,
        origin: Point,
        width: f64,
        height: f64,
        color: Color,
    ) -> Result<(), SketchError>;
}

#[cfg(test)]
pub(crate) mod recording {
    //! A renderer that records calls, for asserting draw order in tests.

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        StrokePolygon(Vec<Point>, Color),
        FillPolygon(Vec<Point>, Color),
        StrokeRect(Point, f64, f64, f64, Color),
        FillRect(Point, f64, f64, Color),
    }

    #[derive(Debug, Default)]
    pub struct RecordingRenderer {
        pub calls: Vec<Call>,
    }

    impl Renderer for RecordingRenderer {
        fn stroke_polygon(&mut self, points: &[Point], color: Color) -> Result<(), SketchError> {
            self.calls.push(Call::StrokePolygon(points.to_vec(), color));
            Ok(())
        }

        fn fill_polygon(&mut self, points: &[Point], color: Color) -> Result<(), SketchError> {
            self.calls.push(Call::FillPolygon(points.to_vec(), color));
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
            self.calls
                .push(Call::StrokeRect(origin, width, height, rotation, color));
            Ok(())
        }

        fn fill_rect(
            &mut self,
            origin: Point,
            width: f64,
            height: f64,
            color: Color,
        ) -> Result<(), SketchError> {
            self.calls.push(Call::FillRect(origin, width, height, color));
            Ok(())
        }
    }

    #[test]
    fn renderer_trait_is_object_safe() {
        let mut rec = RecordingRenderer::default();
        let r: &mut dyn Renderer = &mut rec;
        r.fill_rect(Point::ZERO, 2.0, 3.0, Color::WHITE).unwrap();
        assert_eq!(rec.calls.len(), 1);
    }
}
