#![deny(unsafe_code)]
//! Sketch registry: maps sketch names to layouts and runs them end to end.
//!
//! This crate sits between `sketchbook-core` (which defines the `Sketch`
//! trait) and the individual layout crates (`sketchbook-quad-grid`, etc.).
//! It also owns the concrete renderers and the export step, so the CLI only
//! has to pick a sketch, a seed and a destination.

pub mod pipeline;
pub mod pixel;
pub mod raster;
pub mod snapshot;
pub mod vector;

use serde_json::Value;
use sketchbook_affine_squares::{AffineSquares, AffineSquaresParams};
use sketchbook_core::{Canvas, NoiseField, RandomSource, Shape, Sketch, SketchError};
use sketchbook_long_rects::{LongRects, LongRectsParams};
use sketchbook_nested_quads::{NestedQuads, NestedQuadsParams};
use sketchbook_quad_grid::{QuadGrid, QuadGridParams};
use sketchbook_radial_wedges::{RadialWedges, RadialWedgesParams};

pub use pipeline::{generate, Artwork};
pub use snapshot::{export, ExportFormat};

/// All available sketch names, in export order.
const SKETCH_NAMES: &[&str] = &[
    "quad-grid",
    "affine-squares",
    "long-rects",
    "radial-wedges",
    "nested-quads",
];

/// Enumeration of the five sketches.
///
/// Wraps each layout and delegates `Sketch` trait methods. Use
/// [`SketchKind::from_name`] for string-based construction (CLI).
pub enum SketchKind {
    QuadGrid(QuadGrid),
    AffineSquares(AffineSquares),
    LongRects(LongRects),
    RadialWedges(RadialWedges),
    NestedQuads(NestedQuads),
}

impl SketchKind {
    /// Constructs a sketch with its default constants.
    ///
    /// Returns `SketchError::UnknownSketch` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, SketchError> {
        match name {
            "quad-grid" => Ok(SketchKind::QuadGrid(QuadGrid::new(QuadGridParams::default())?)),
            "affine-squares" => Ok(SketchKind::AffineSquares(AffineSquares::new(
                AffineSquaresParams::default(),
            )?)),
            "long-rects" => Ok(SketchKind::LongRects(LongRects::new(
                LongRectsParams::default(),
            )?)),
            "radial-wedges" => Ok(SketchKind::RadialWedges(RadialWedges::new(
                RadialWedgesParams::default(),
            )?)),
            "nested-quads" => Ok(SketchKind::NestedQuads(NestedQuads::new(
                NestedQuadsParams::default(),
            )?)),
            _ => Err(SketchError::UnknownSketch(name.to_string())),
        }
    }

    /// Returns a slice of all recognized sketch names.
    pub fn list_sketches() -> &'static [&'static str] {
        SKETCH_NAMES
    }

    /// File stem the sketch exports under.
    pub fn stem(&self) -> &'static str {
        match self {
            SketchKind::QuadGrid(_) => "foo",
            SketchKind::AffineSquares(_) => "ad002",
            SketchKind::LongRects(_) => "ad003",
            SketchKind::RadialWedges(_) => "ad004",
            SketchKind::NestedQuads(_) => "ad005",
        }
    }

    fn as_sketch(&self) -> &dyn Sketch {
        match self {
            SketchKind::QuadGrid(s) => s,
            SketchKind::AffineSquares(s) => s,
            SketchKind::LongRects(s) => s,
            SketchKind::RadialWedges(s) => s,
            SketchKind::NestedQuads(s) => s,
        }
    }
}

impl Sketch for SketchKind {
    fn name(&self) -> &'static str {
        self.as_sketch().name()
    }

    fn canvas(&self) -> Canvas {
        self.as_sketch().canvas()
    }

    fn noise_scale(&self) -> f64 {
        self.as_sketch().noise_scale()
    }

    fn layout(
        &self,
        rng: &mut dyn RandomSource,
        field: &NoiseField,
    ) -> Result<Vec<Shape>, SketchError> {
        self.as_sketch().layout(rng, field)
    }

    fn params(&self) -> Value {
        self.as_sketch().params()
    }
}
