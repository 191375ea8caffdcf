#![deny(unsafe_code)]
//! Long-rect sketch.
//!
//! Two bands of tall stroked rectangles scattered across the canvas. The
//! upper band's tops follow a shallow downward parabola in `x`, the lower
//! band's follow a flatter one arcing the other way, and every rectangle is
//! nudged by the noise field.

use serde_json::{json, Value};
use sketchbook_core::{
    perturb, Canvas, Color, NoiseField, Point, RandomSource, Shape, Sketch, SketchError,
};

const DEFAULT_COUNT: usize = 80;
const DEFAULT_RECT_WIDTH: usize = 20;
const DEFAULT_RECT_HEIGHT: usize = 180;
const DEFAULT_PADDING: usize = 20;
const DEFAULT_BOUND_WIDTH: usize = 600;
const DEFAULT_BOUND_HEIGHT: usize = 400;
/// Parabola divisor for the upper band.
const UPPER_ARC_DIVISOR: f64 = 2000.0;
/// Parabola divisor for the lower band.
const LOWER_ARC_DIVISOR: f64 = 10_000.0;
const DEFAULT_NOISE_SCALE: f64 = 10.0;

/// Layout constants for the long-rect pairs.
#[derive(Debug, Clone)]
pub struct LongRectsParams {
    /// Number of upper/lower pairs.
    pub count: usize,
    pub rect_width: usize,
    pub rect_height: usize,
    pub padding: usize,
    pub bound_width: usize,
    pub bound_height: usize,
    pub stroke: Color,
    pub background: Color,
    pub noise_scale: f64,
}

impl Default for LongRectsParams {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            rect_width: DEFAULT_RECT_WIDTH,
            rect_height: DEFAULT_RECT_HEIGHT,
            padding: DEFAULT_PADDING,
            bound_width: DEFAULT_BOUND_WIDTH,
            bound_height: DEFAULT_BOUND_HEIGHT,
            stroke: Color::RED,
            background: Color::rgb(0.926, 0.922, 0.913),
            noise_scale: DEFAULT_NOISE_SCALE,
        }
    }
}

impl LongRectsParams {
    /// Horizontal extent `[x1, x2]` the rectangles are scattered over.
    pub fn span(&self) -> (f64, f64) {
        let x1 = (self.padding * 2) as f64;
        let x2 = self.bound_width as f64 - (self.padding * 2) as f64;
        (x1, x2)
    }

    /// Height of the parabola through `x1` and `x2` at `x`.
    ///
    /// Zero at both ends of the span and largest at its midpoint.
    pub fn arc(&self, x: f64) -> f64 {
        let (x1, x2) = self.span();
        -x * x + x * (x1 + x2) - x1 * x2
    }

    /// Unperturbed top edge of an upper-band rect at `x`.
    pub fn upper_y(&self, x: f64) -> f64 {
        self.padding as f64 + self.arc(x) / UPPER_ARC_DIVISOR
    }

    /// Unperturbed top edge of a lower-band rect at `x`.
    pub fn lower_y(&self, x: f64) -> f64 {
        (self.padding / 2) as f64 + self.rect_height as f64 - self.arc(x) / LOWER_ARC_DIVISOR
    }
}

/// The long-rect sketch.
pub struct LongRects {
    params: LongRectsParams,
    canvas: Canvas,
}

impl LongRects {
    /// Returns `SketchError::InvalidArgument` if the padding leaves no room
    /// to scatter rectangles.
    pub fn new(params: LongRectsParams) -> Result<Self, SketchError> {
        let (x1, x2) = params.span();
        if x2 < x1 {
            return Err(SketchError::InvalidArgument(format!(
                "padding {} leaves no horizontal span in width {}",
                params.padding, params.bound_width
            )));
        }
        let canvas = Canvas::new(params.bound_width, params.bound_height, params.background)?;
        Ok(Self { params, canvas })
    }
}

/// Emits `count` pairs, upper rect first.
///
/// The two rects of a pair draw independent `x` positions.
pub fn generate(
    params: &LongRectsParams,
    rng: &mut dyn RandomSource,
    field: &NoiseField,
) -> Result<Vec<Shape>, SketchError> {
    let (x1, x2) = params.span();
    let rect = |origin: Point| Shape::StrokedRect {
        origin: perturb(origin, field, params.noise_scale),
        width: params.rect_width as f64,
        height: params.rect_height as f64,
        stroke: params.stroke,
    };

    let mut shapes = Vec::with_capacity(params.count * 2);
    for _ in 0..params.count {
        let ux = rng.sample_range(x1, x2);
        let lx = rng.sample_range(x1, x2);
        shapes.push(rect(Point::new(ux, params.upper_y(ux))));
        shapes.push(rect(Point::new(lx, params.lower_y(lx))));
    }
    Ok(shapes)
}

impl Sketch for LongRects {
    fn name(&self) -> &'static str {
        "long-rects"
    }

    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn noise_scale(&self) -> f64 {
        self.params.noise_scale
    }

    fn layout(
        &self,
        rng: &mut dyn RandomSource,
        field: &NoiseField,
    ) -> Result<Vec<Shape>, SketchError> {
        generate(&self.params, rng, field)
    }

    fn params(&self) -> Value {
        json!({
            "count": self.params.count,
            "rect_width": self.params.rect_width,
            "rect_height": self.params.rect_height,
            "padding": self.params.padding,
            "bound_width": self.params.bound_width,
            "bound_height": self.params.bound_height,
            "stroke": self.params.stroke,
            "noise_scale": self.params.noise_scale,
        })
    }
}
