//! Canvas dimensions and background for a sketch.
//!
//! The exported document is one page the size of the canvas, in points for
//! vector output and pixels for raster output.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::SketchError;

/// A canvas with dimensions and a background color.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    background: Color,
}

impl Canvas {
    /// Creates a new canvas with the given dimensions and background color.
    ///
    /// Returns `SketchError::InvalidDimensions` if width or height is zero,
    /// or if `width * height` would overflow `usize`.
    pub fn new(width: usize, height: usize, background: Color) -> Result<Self, SketchError> {
        if width == 0 || height == 0 {
            return Err(SketchError::InvalidDimensions);
        }
        width
            .checked_mul(height)
            .ok_or(SketchError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            background,
        })
    }

    /// Returns the canvas width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the canvas height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the background color.
    pub fn background(&self) -> Color {
        self.background
    }
}
