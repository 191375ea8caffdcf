//! Two-dimensional noise field sampled once per sketch run.
//!
//! A [`NoiseField`] stores `width * height` f64 samples in row-major layout.
//! Construction is the expensive part (one fractal sample per pixel); lookups
//! are plain indexing. Coordinates are clamped into the field before reading,
//! so callers may pass rounded positions that drift slightly off-canvas.

use crate::error::SketchError;
use crate::field_source::{FieldSource, SeamlessPerlin};

/// A precomputed coherent scalar field, read-only after construction.
#[derive(Debug, Clone)]
pub struct NoiseField {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl NoiseField {
    /// Samples `source` at every pixel of a `width` x `height` grid.
    ///
    /// Pixel `(x, y)` maps to `(x / width, y / height)` so a seamless source
    /// yields a field whose period equals its size.
    ///
    /// Returns `SketchError::InvalidDimensions` if either dimension is zero
    /// or if `width * height` overflows `usize`.
    pub fn build(
        width: usize,
        height: usize,
        source: &dyn FieldSource,
    ) -> Result<Self, SketchError> {
        if width == 0 || height == 0 {
            return Err(SketchError::InvalidDimensions);
        }
        width
            .checked_mul(height)
            .ok_or(SketchError::InvalidDimensions)?;
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| source.sample(x as f64 / width as f64, y as f64 / height as f64))
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Builds the default seamless Perlin field for a canvas.
    pub fn seamless(width: usize, height: usize, seed: u32) -> Result<Self, SketchError> {
        Self::build(width, height, &SeamlessPerlin::new(seed, width, height))
    }

    /// Creates a field from pre-computed samples, validating that
    /// `data.len() == width * height`.
    pub fn from_data(width: usize, height: usize, data: Vec<f64>) -> Result<Self, SketchError> {
        if width == 0 || height == 0 {
            return Err(SketchError::InvalidDimensions);
        }
        let expected = width
            .checked_mul(height)
            .ok_or(SketchError::InvalidDimensions)?;
        if data.len() != expected {
            return Err(SketchError::InvalidArgument(format!(
                "expected {expected} samples for a {width}x{height} field, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A field that is `value` everywhere.
    pub fn constant(width: usize, height: usize, value: f64) -> Result<Self, SketchError> {
        let len = width
            .checked_mul(height)
            .ok_or(SketchError::InvalidDimensions)?;
        Self::from_data(width, height, vec![value; len])
    }

    /// Field width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the underlying row-major data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Returns the sample at `(x, y)`, clamping both coordinates into
    /// `[0, width) x [0, height)` first.
    pub fn value_at(&self, x: i64, y: i64) -> f64 {
        let xi = x.clamp(0, self.width as i64 - 1) as usize;
        let yi = y.clamp(0, self.height as i64 - 1) as usize;
        self.data[yi * self.width + xi]
    }
}
