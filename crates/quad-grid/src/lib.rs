#![deny(unsafe_code)]
//! Quad-grid sketch.
//!
//! A centered grid of small square cells. Each cell is kept with a fixed
//! probability and filled with one of four palette colors; the kept cells'
//! corners are then nudged diagonally by the noise field, so the grid reads
//! as slightly hand-drawn.

use serde_json::{json, Value};
use sketchbook_core::geometry::{GridAxis, Rect};
use sketchbook_core::{Canvas, Color, NoiseField, Quad, RandomSource, Shape, Sketch, SketchError};

/// Default cell side in pixels.
const DEFAULT_CELL_SIZE: usize = 20;
/// Default gap between cells and around the grid.
const DEFAULT_PADDING: usize = 10;
/// Default canvas side.
const DEFAULT_BOUND: usize = 400;
/// Percentage of cells that receive a quad.
const DEFAULT_FILL_PERCENT: usize = 70;
/// Default diagonal noise displacement factor.
const DEFAULT_NOISE_SCALE: f64 = 3.0;

const CYAN: Color = Color::rgb(0.00, 0.94, 1.00);
const GREEN: Color = Color::rgb(0.53, 0.94, 0.55);
const GOLD: Color = Color::rgb(1.00, 0.84, 0.00);

/// Layout constants for the quad grid.
#[derive(Debug, Clone)]
pub struct QuadGridParams {
    pub cell_width: usize,
    pub cell_height: usize,
    pub padding: usize,
    pub bound_width: usize,
    pub bound_height: usize,
    /// A cell gets a quad when `next_bounded_int(100) < fill_percent`.
    pub fill_percent: usize,
    pub palette: Vec<Color>,
    pub outline: Color,
    pub background: Color,
    pub noise_scale: f64,
}

impl Default for QuadGridParams {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_SIZE,
            cell_height: DEFAULT_CELL_SIZE,
            padding: DEFAULT_PADDING,
            bound_width: DEFAULT_BOUND,
            bound_height: DEFAULT_BOUND,
            fill_percent: DEFAULT_FILL_PERCENT,
            palette: vec![CYAN, GREEN, GOLD, Color::BLACK],
            outline: Color::BLACK,
            background: GOLD,
            noise_scale: DEFAULT_NOISE_SCALE,
        }
    }
}

/// The quad-grid sketch.
pub struct QuadGrid {
    params: QuadGridParams,
    canvas: Canvas,
}

impl QuadGrid {
    /// Returns `SketchError::InvalidDimensions` for a zero-sized bound and
    /// `SketchError::InvalidArgument` for an empty palette.
    pub fn new(params: QuadGridParams) -> Result<Self, SketchError> {
        if params.palette.is_empty() {
            return Err(SketchError::InvalidArgument(
                "quad grid palette is empty".into(),
            ));
        }
        let canvas = Canvas::new(params.bound_width, params.bound_height, params.background)?;
        Ok(Self { params, canvas })
    }
}

/// Lays out the grid column by column.
///
/// Each cell costs one draw for the keep test and, when kept, one more for
/// the palette index.
pub fn generate(
    params: &QuadGridParams,
    rng: &mut dyn RandomSource,
    field: &NoiseField,
) -> Result<Vec<Shape>, SketchError> {
    let cols = GridAxis::padded(
        params.bound_width as i64,
        params.cell_width as i64,
        params.padding as i64,
    )?;
    let rows = GridAxis::padded(
        params.bound_height as i64,
        params.cell_height as i64,
        params.padding as i64,
    )?;

    let mut shapes = Vec::new();
    for i in 0..cols.count {
        for j in 0..rows.count {
            if rng.next_bounded_int(100)? >= params.fill_percent {
                continue;
            }
            let fill = params.palette[rng.next_bounded_int(params.palette.len())?];
            let rect = Rect::new(
                cols.start(i) as f64,
                rows.start(j) as f64,
                params.cell_width as f64,
                params.cell_height as f64,
            );
            shapes.push(Shape::FilledQuad {
                quad: Quad::from_rect(rect, fill).perturbed(field, params.noise_scale),
                outline: params.outline,
            });
        }
    }
    Ok(shapes)
}

impl Sketch for QuadGrid {
    fn name(&self) -> &'static str {
        "quad-grid"
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
            "cell_width": self.params.cell_width,
            "cell_height": self.params.cell_height,
            "padding": self.params.padding,
            "bound_width": self.params.bound_width,
            "bound_height": self.params.bound_height,
            "fill_percent": self.params.fill_percent,
            "palette": self.params.palette,
            "outline": self.params.outline,
            "noise_scale": self.params.noise_scale,
        })
    }
}
