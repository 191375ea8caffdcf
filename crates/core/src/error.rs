//! Error types for the sketchbook core.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while generating, rendering or exporting a sketch.
///
/// Every variant is fatal to the current run: nothing is partially exported.
#[derive(Debug, Error)]
pub enum SketchError {
    /// A caller passed an unusable value (zero random bound, degenerate rectangle).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Width or height was zero when creating a noise field or canvas.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// The requested sketch name is not registered.
    #[error("unknown sketch: {0}")]
    UnknownSketch(String),

    /// The drawing surface could not be created.
    #[error("render surface unavailable: {0}")]
    RenderSurfaceUnavailable(String),

    /// Writing the exported document failed.
    #[error("failed to write {}: {reason}", path.display())]
    ExportWriteFailure { path: PathBuf, reason: String },
}
