//! Points, axis-aligned rectangles and grid centering.

use crate::error::SketchError;
use serde::{Deserialize, Serialize};

/// A real-valued 2D coordinate.
pub type Point = glam::DVec2;

/// Axis-aligned rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left, bottom-left, bottom-right, top-right.
    pub fn corners(&self) -> [Point; 4] {
        let (x0, y0) = (self.x, self.y);
        let (x1, y1) = (self.x + self.width, self.y + self.height);
        [
            Point::new(x0, y0),
            Point::new(x0, y1),
            Point::new(x1, y1),
            Point::new(x1, y0),
        ]
    }

    /// Shrinks the rectangle by `d` on all four sides.
    pub fn inset(&self, d: f64) -> Rect {
        Rect::new(
            self.x + d,
            self.y + d,
            self.width - 2.0 * d,
            self.height - 2.0 * d,
        )
    }

    /// The smaller of width and height.
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Returns `SketchError::InvalidArgument` unless both sides are finite
    /// and strictly positive.
    pub fn validate(&self) -> Result<(), SketchError> {
        let ok = [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0;
        if ok {
            Ok(())
        } else {
            Err(SketchError::InvalidArgument(format!(
                "degenerate rectangle {}x{} at ({}, {})",
                self.width, self.height, self.x, self.y
            )))
        }
    }
}

/// One axis of a padded grid centered within a bound.
///
/// `count = (bound - padding) / (size + padding)` and
/// `margin = (bound - (count * (size + padding) + padding)) / 2`, both with
/// integer division truncating toward zero. Cell `i` starts at
/// `margin + padding + i * (size + padding)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridAxis {
    pub count: i64,
    pub margin: i64,
    pub size: i64,
    pub padding: i64,
}

impl GridAxis {
    /// Centers as many `size` cells separated by `padding` as fit in `bound`.
    pub fn padded(bound: i64, size: i64, padding: i64) -> Result<Self, SketchError> {
        if size + padding <= 0 {
            return Err(SketchError::InvalidArgument(format!(
                "grid pitch must be positive, got size {size} + padding {padding}"
            )));
        }
        let count = ((bound - padding) / (size + padding)).max(0);
        let margin = (bound - (count * (size + padding) + padding)) / 2;
        Ok(Self {
            count,
            margin,
            size,
            padding,
        })
    }

    /// Centers abutting `size` cells, leaving at least one cell of slack:
    /// `count = (bound - size) / size`, `margin = (bound - size * count) / 2`.
    pub fn abutting(bound: i64, size: i64) -> Result<Self, SketchError> {
        if size <= 0 {
            return Err(SketchError::InvalidArgument(format!(
                "cell size must be positive, got {size}"
            )));
        }
        let count = ((bound - size) / size).max(0);
        let margin = (bound - size * count) / 2;
        Ok(Self {
            count,
            margin,
            size,
            padding: 0,
        })
    }

    /// Start coordinate of cell `i`.
    pub fn start(&self, i: i64) -> i64 {
        self.margin + self.padding + i * (self.size + self.padding)
    }
}
