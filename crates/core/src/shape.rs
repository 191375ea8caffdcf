//! Shape descriptors produced by the layouts.
//!
//! [`Shape`] is one tagged union over every primitive the sketches draw.
//! Each variant carries its own paint, so drawing a shape never depends on
//! what was drawn before it.

use crate::color::Color;
use crate::error::SketchError;
use crate::field::NoiseField;
use crate::geometry::{Point, Rect};
use crate::perturb::perturb;
use crate::renderer::Renderer;
use serde::{Deserialize, Serialize};

/// A filled quadrilateral.
///
/// Vertices are listed top-left, bottom-left, bottom-right, top-right of the
/// rectangle it was built from; perturbation moves them but keeps the order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    pub va: Point,
    pub vb: Point,
    pub vc: Point,
    pub vd: Point,
    pub fill: Color,
}

impl Quad {
    pub fn from_rect(rect: Rect, fill: Color) -> Self {
        let [va, vb, vc, vd] = rect.corners();
        Self {
            va,
            vb,
            vc,
            vd,
            fill,
        }
    }

    pub fn vertices(&self) -> [Point; 4] {
        [self.va, self.vb, self.vc, self.vd]
    }

    /// A copy with every vertex perturbed independently.
    pub fn perturbed(&self, field: &NoiseField, scale: f64) -> Self {
        let [va, vb, vc, vd] = self.vertices().map(|p| perturb(p, field, scale));
        Self {
            va,
            vb,
            vc,
            vd,
            fill: self.fill,
        }
    }
}

/// Everything a layout can emit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Filled with `quad.fill`, then stroked with `outline`.
    FilledQuad { quad: Quad, outline: Color },
    /// Square rotated by `angle` radians about `origin`; stroked only.
    RotatedSquare {
        origin: Point,
        size: f64,
        angle: f64,
        stroke: Color,
    },
    /// Axis-aligned rect; stroked only.
    StrokedRect {
        origin: Point,
        width: f64,
        height: f64,
        stroke: Color,
    },
    /// One chord of a sunburst ring.
    WedgeStroke { p1: Point, p2: Point, stroke: Color },
    /// The two translucent fans of a ring, each closed through `apex`.
    WedgeFill {
        outline1: Vec<Point>,
        outline2: Vec<Point>,
        apex: Point,
        fill: Color,
    },
    /// Successively inset quads drawn back to front.
    NestedQuadGroup { cells: Vec<Quad>, outline: Color },
}

impl Shape {
    /// Draws the shape with its own paint.
    pub fn draw(&self, renderer: &mut dyn Renderer) -> Result<(), SketchError> {
        match self {
            Shape::FilledQuad { quad, outline } => draw_quad(quad, *outline, renderer),
            Shape::RotatedSquare {
                origin,
                size,
                angle,
                stroke,
            } => renderer.stroke_rect(*origin, *size, *size, *angle, *stroke),
            Shape::StrokedRect {
                origin,
                width,
                height,
                stroke,
            } => renderer.stroke_rect(*origin, *width, *height, 0.0, *stroke),
            Shape::WedgeStroke { p1, p2, stroke } => renderer.stroke_polygon(&[*p1, *p2], *stroke),
            Shape::WedgeFill {
                outline1,
                outline2,
                apex,
                fill,
            } => {
                for outline in [outline1, outline2] {
                    if outline.is_empty() {
                        continue;
                    }
                    let mut fan = outline.clone();
                    fan.push(*apex);
                    renderer.fill_polygon(&fan, *fill)?;
                }
                Ok(())
            }
            Shape::NestedQuadGroup { cells, outline } => cells
                .iter()
                .try_for_each(|cell| draw_quad(cell, *outline, renderer)),
        }
    }
}

fn draw_quad(quad: &Quad, outline: Color, renderer: &mut dyn Renderer) -> Result<(), SketchError> {
    let vertices = quad.vertices();
    renderer.fill_polygon(&vertices, quad.fill)?;
    renderer.stroke_polygon(&vertices, outline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{Call, RecordingRenderer};

    fn unit_quad(fill: Color) -> Quad {
        Quad::from_rect(Rect::new(0.0, 0.0, 1.0, 1.0), fill)
    }

    #[test]
    fn quad_from_rect_uses_fixed_winding() {
        let q = Quad::from_rect(Rect::new(2.0, 3.0, 4.0, 5.0), Color::RED);
        assert_eq!(q.va, Point::new(2.0, 3.0));
        assert_eq!(q.vb, Point::new(2.0, 8.0));
        assert_eq!(q.vc, Point::new(6.0, 8.0));
        assert_eq!(q.vd, Point::new(6.0, 3.0));
    }

    #[test]
    fn perturbed_quad_keeps_fill_and_order() {
        let field = NoiseField::constant(10, 10, 1.0).unwrap();
        let q = unit_quad(Color::RED).perturbed(&field, 2.0);
        assert_eq!(q.fill, Color::RED);
        assert_eq!(q.va, Point::new(2.0, 2.0));
        assert_eq!(q.vb, Point::new(2.0, 3.0));
        assert_eq!(q.vc, Point::new(3.0, 3.0));
        assert_eq!(q.vd, Point::new(3.0, 2.0));
    }

    #[test]
    fn filled_quad_fills_then_strokes() {
        let shape = Shape::FilledQuad {
            quad: unit_quad(Color::RED),
            outline: Color::BLACK,
        };
        let mut rec = RecordingRenderer::default();
        shape.draw(&mut rec).unwrap();
        assert!(matches!(
            rec.calls[0],
            Call::FillPolygon(ref p, c) if p.len() == 4 && c == Color::RED
        ));
        assert!(matches!(rec.calls[1], Call::StrokePolygon(_, c) if c == Color::BLACK));
        assert_eq!(rec.calls.len(), 2);
    }

    #[test]
    fn rotated_square_strokes_a_rotated_rect() {
        let shape = Shape::RotatedSquare {
            origin: Point::new(5.0, 6.0),
            size: 20.0,
            angle: 0.1,
            stroke: Color::BLACK,
        };
        let mut rec = RecordingRenderer::default();
        shape.draw(&mut rec).unwrap();
        assert_eq!(
            rec.calls,
            vec![Call::StrokeRect(
                Point::new(5.0, 6.0),
                20.0,
                20.0,
                0.1,
                Color::BLACK
            )]
        );
    }

    #[test]
    fn wedge_fill_closes_each_outline_through_apex() {
        let apex = Point::new(50.0, 50.0);
        let shape = Shape::WedgeFill {
            outline1: vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
            outline2: vec![Point::new(9.0, 9.0)],
            apex,
            fill: Color::BLACK.with_alpha(0.2),
        };
        let mut rec = RecordingRenderer::default();
        shape.draw(&mut rec).unwrap();
        assert_eq!(rec.calls.len(), 2);
        // Fans are filled only; the closing edge gets no stroke.
        assert!(rec.calls.iter().all(|c| matches!(c, Call::FillPolygon(..))));
        match &rec.calls[0] {
            Call::FillPolygon(points, color) => {
                assert_eq!(points.len(), 3);
                assert_eq!(points.last(), Some(&apex));
                assert_eq!(color.a, 0.2);
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[test]
    fn wedge_fill_skips_empty_outlines() {
        let shape = Shape::WedgeFill {
            outline1: vec![],
            outline2: vec![],
            apex: Point::ZERO,
            fill: Color::BLACK,
        };
        let mut rec = RecordingRenderer::default();
        shape.draw(&mut rec).unwrap();
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn nested_group_draws_cells_in_order() {
        let shape = Shape::NestedQuadGroup {
            cells: vec![unit_quad(Color::WHITE), unit_quad(Color::RED)],
            outline: Color::BLACK,
        };
        let mut rec = RecordingRenderer::default();
        shape.draw(&mut rec).unwrap();
        assert_eq!(rec.calls.len(), 4);
        assert!(matches!(rec.calls[0], Call::FillPolygon(_, c) if c == Color::WHITE));
        assert!(matches!(rec.calls[2], Call::FillPolygon(_, c) if c == Color::RED));
    }

    #[test]
    fn shape_json_is_tagged_by_kind() {
        let shape = Shape::WedgeStroke {
            p1: Point::new(1.0, 2.0),
            p2: Point::new(3.0, 4.0),
            stroke: Color::BLACK,
        };
        let v = serde_json::to_value(&shape).unwrap();
        assert_eq!(v["kind"], "wedge_stroke");
        assert_eq!(v["stroke"], "#000000");
        let back: Shape = serde_json::from_value(v).unwrap();
        assert_eq!(back, shape);
    }
}
