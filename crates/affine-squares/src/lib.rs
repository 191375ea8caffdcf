#![deny(unsafe_code)]
//! Affine-square sketch.
//!
//! A grid of abutting stroked squares whose rotation grows with the square
//! of the distance from the top edge: the top rows sit almost straight and
//! the bottom rows tumble. Positions get a sub-pixel nudge; no noise field is
//! involved.

use serde_json::{json, Value};
use sketchbook_core::geometry::GridAxis;
use sketchbook_core::{Canvas, Color, NoiseField, Point, RandomSource, Shape, Sketch, SketchError};

/// Default square side.
const DEFAULT_LENGTH: usize = 20;
const DEFAULT_BOUND_WIDTH: usize = 410;
const DEFAULT_BOUND_HEIGHT: usize = 610;
/// Rotation bound in degrees is `y * y * ROTATION_GAIN`.
const DEFAULT_ROTATION_GAIN: f64 = 0.22 / 1000.0;
/// Positional jitter bound on each axis.
const DEFAULT_JITTER: f64 = 0.03;

/// Layout constants for the affine-square grid.
#[derive(Debug, Clone)]
pub struct AffineSquaresParams {
    pub length: usize,
    pub bound_width: usize,
    pub bound_height: usize,
    pub rotation_gain: f64,
    pub jitter: f64,
    pub stroke: Color,
    pub background: Color,
}

impl Default for AffineSquaresParams {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            bound_width: DEFAULT_BOUND_WIDTH,
            bound_height: DEFAULT_BOUND_HEIGHT,
            rotation_gain: DEFAULT_ROTATION_GAIN,
            jitter: DEFAULT_JITTER,
            stroke: Color::BLACK,
            background: Color::WHITE,
        }
    }
}

impl AffineSquaresParams {
    /// Largest rotation, in degrees, a square at row origin `y` may receive.
    pub fn rotation_bound(&self, y: f64) -> f64 {
        y * y * self.rotation_gain
    }

    /// Column and row axes of the grid.
    pub fn grid(&self) -> Result<(GridAxis, GridAxis), SketchError> {
        Ok((
            GridAxis::abutting(self.bound_width as i64, self.length as i64)?,
            GridAxis::abutting(self.bound_height as i64, self.length as i64)?,
        ))
    }
}

/// The affine-square sketch.
pub struct AffineSquares {
    params: AffineSquaresParams,
    canvas: Canvas,
}

impl AffineSquares {
    pub fn new(params: AffineSquaresParams) -> Result<Self, SketchError> {
        let canvas = Canvas::new(params.bound_width, params.bound_height, params.background)?;
        Ok(Self { params, canvas })
    }
}

/// Lays out the squares column by column.
///
/// Per square, three draws in order: the angle, the x nudge, the y nudge.
pub fn generate(
    params: &AffineSquaresParams,
    rng: &mut dyn RandomSource,
) -> Result<Vec<Shape>, SketchError> {
    let (cols, rows) = params.grid()?;
    let length = params.length as f64;

    let mut shapes = Vec::with_capacity((cols.count * rows.count) as usize);
    for i in 0..cols.count {
        for j in 0..rows.count {
            let x = cols.start(i) as f64;
            let y = rows.start(j) as f64;
            let r = params.rotation_bound(y);
            let angle = rng.sample_range(-r, r);
            let x = x + rng.sample_range(-params.jitter, params.jitter);
            let y = y + rng.sample_range(-params.jitter, params.jitter);
            shapes.push(Shape::RotatedSquare {
                origin: Point::new(x, y),
                size: length,
                angle: angle.to_radians(),
                stroke: params.stroke,
            });
        }
    }
    Ok(shapes)
}

impl Sketch for AffineSquares {
    fn name(&self) -> &'static str {
        "affine-squares"
    }

    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn noise_scale(&self) -> f64 {
        0.0
    }

    fn layout(
        &self,
        rng: &mut dyn RandomSource,
        _field: &NoiseField,
    ) -> Result<Vec<Shape>, SketchError> {
        generate(&self.params, rng)
    }

    fn params(&self) -> Value {
        json!({
            "length": self.params.length,
            "bound_width": self.params.bound_width,
            "bound_height": self.params.bound_height,
            "rotation_gain": self.params.rotation_gain,
            "jitter": self.params.jitter,
            "stroke": self.params.stroke,
        })
    }
}
