#![deny(unsafe_code)]
//! Nested-quad sketch.
//!
//! A padded grid of cells, each holding a stack of 5 to 15 quads that shrink
//! inward by random insets. Every layer is a shade of one warm tint, so the
//! stacks read as small shaded wells. Each layer's vertices are then displaced
//! by the noise field on their own, so the layers of a stack drift apart.

use serde_json::{json, Value};
use sketchbook_core::geometry::{GridAxis, Rect};
use sketchbook_core::{Canvas, Color, NoiseField, Quad, RandomSource, Shape, Sketch, SketchError};

const DEFAULT_CELL_SIZE: usize = 35;
const DEFAULT_PADDING: usize = 1;
const DEFAULT_BOUND: usize = 600;
/// Minimum layers per cell; two more draws add `[0, 7)` and `[0, 5)`.
const MIN_LAYERS: usize = 5;
const EXTRA_LAYERS_A: usize = 7;
const EXTRA_LAYERS_B: usize = 5;
const DEFAULT_NOISE_SCALE: f64 = 2.0;
/// An inset never exceeds this fraction of the current smaller side.
const MAX_INSET_FRACTION: f64 = 0.25;

/// Layout constants for the nested quads.
#[derive(Debug, Clone)]
pub struct NestedQuadsParams {
    pub cell_width: usize,
    pub cell_height: usize,
    pub padding: usize,
    pub bound_width: usize,
    pub bound_height: usize,
    pub tint: Color,
    /// Per-layer shade offset `[low, high]`, added to every channel.
    pub shade_range: (f64, f64),
    pub outline: Color,
    pub background: Color,
    pub noise_scale: f64,
}

impl Default for NestedQuadsParams {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_SIZE,
            cell_height: DEFAULT_CELL_SIZE,
            padding: DEFAULT_PADDING,
            bound_width: DEFAULT_BOUND,
            bound_height: DEFAULT_BOUND,
            tint: Color::rgb(0.942, 0.919, 0.839),
            shade_range: (-0.2, 0.05),
            outline: Color::BLACK,
            background: Color::WHITE,
            noise_scale: DEFAULT_NOISE_SCALE,
        }
    }
}

/// The nested-quad sketch.
pub struct NestedQuads {
    params: NestedQuadsParams,
    canvas: Canvas,
}

impl NestedQuads {
    pub fn new(params: NestedQuadsParams) -> Result<Self, SketchError> {
        Rect::new(0.0, 0.0, params.cell_width as f64, params.cell_height as f64).validate()?;
        let canvas = Canvas::new(params.bound_width, params.bound_height, params.background)?;
        Ok(Self { params, canvas })
    }
}

/// Builds `count` successively inset quads inside `base`, unperturbed.
///
/// The nominal step is `base.width / count`; each layer insets by a uniform
/// fraction of it, capped at a quarter of the current smaller side so the
/// stack never collapses. Per layer the draws are the inset, then the shade.
pub fn inset_cells(
    params: &NestedQuadsParams,
    base: Rect,
    count: usize,
    rng: &mut dyn RandomSource,
) -> Result<Vec<Quad>, SketchError> {
    base.validate()?;
    if count == 0 {
        return Err(SketchError::InvalidArgument(
            "a nested cell needs at least one layer".into(),
        ));
    }
    let gap = base.width / count as f64;
    let (low, high) = params.shade_range;

    let mut rect = base;
    let mut cells = Vec::with_capacity(count);
    for layer in 0..count {
        let raw = rng.next_uniform() * gap;
        let cap = rect.min_side() * MAX_INSET_FRACTION;
        let inset = if raw >= cap {
            log::debug!("layer {layer}: inset {raw:.3} capped at {cap:.3}");
            cap
        } else {
            raw
        };
        rect = rect.inset(inset);
        let fill = params.tint.shifted(rng.sample_range(low, high));
        cells.push(Quad::from_rect(rect, fill));
    }
    Ok(cells)
}

/// Lays out one nested group per grid cell, column by column.
pub fn generate(
    params: &NestedQuadsParams,
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
    log::debug!(
        "nested quads: {}x{} cells, margins {}/{}",
        cols.count,
        rows.count,
        cols.margin,
        rows.margin
    );

    let mut shapes = Vec::with_capacity((cols.count * rows.count) as usize);
    for i in 0..cols.count {
        for j in 0..rows.count {
            let count = MIN_LAYERS
                + rng.next_bounded_int(EXTRA_LAYERS_A)?
                + rng.next_bounded_int(EXTRA_LAYERS_B)?;
            let base = Rect::new(
                cols.start(i) as f64,
                rows.start(j) as f64,
                params.cell_width as f64,
                params.cell_height as f64,
            );
            let cells = inset_cells(params, base, count, rng)?
                .iter()
                .map(|q| q.perturbed(field, params.noise_scale))
                .collect();
            shapes.push(Shape::NestedQuadGroup {
                cells,
                outline: params.outline,
            });
        }
    }
    Ok(shapes)
}

impl Sketch for NestedQuads {
    fn name(&self) -> &'static str {
        "nested-quads"
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
            "tint": self.params.tint,
            "shade_range": [self.params.shade_range.0, self.params.shade_range.1],
            "outline": self.params.outline,
            "noise_scale": self.params.noise_scale,
        })
    }
}
