//! Writing a rendered artwork to disk as PNG or SVG.
//!
//! Documents are written to a temporary file next to the destination and
//! renamed over it, so a failed export never leaves a truncated file behind.

use sketchbook_core::SketchError;
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use tempfile::NamedTempFile;

use crate::pipeline::Artwork;
use crate::raster::RasterRenderer;
use crate::vector::SvgRenderer;

/// Output document kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Raster image, one pixel per canvas unit.
    Png,
    /// Vector document, one user unit per canvas unit.
    Svg,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Svg => "svg",
        }
    }

    /// `<stem>.<extension>`.
    pub fn file_name(self, stem: &str) -> String {
        format!("{stem}.{}", self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "svg" => Ok(ExportFormat::Svg),
            other => Err(SketchError::InvalidArgument(format!(
                "unknown export format {other:?} (expected png or svg)"
            ))),
        }
    }
}

/// Renders `artwork` with the renderer matching `format` and writes it to
/// `path`, replacing any existing file.
///
/// Returns `SketchError::ExportWriteFailure` on any I/O or encoding failure.
pub fn export(artwork: &Artwork, format: ExportFormat, path: &Path) -> Result<(), SketchError> {
    match format {
        ExportFormat::Png => {
            let mut renderer = RasterRenderer::new(&artwork.canvas)?;
            artwork.render(&mut renderer)?;
            write_png(&renderer, path)?;
        }
        ExportFormat::Svg => {
            let mut renderer = SvgRenderer::new(&artwork.canvas);
            artwork.render(&mut renderer)?;
            write_svg(&renderer, path)?;
        }
    }
    log::info!(
        "exported {} (seed {}) to {}",
        artwork.seed.sketch,
        artwork.seed.seed,
        path.display()
    );
    Ok(())
}

/// Encodes the renderer's pixels as PNG at `path`.
pub fn write_png(renderer: &RasterRenderer, path: &Path) -> Result<(), SketchError> {
    let img = image::RgbaImage::from_raw(renderer.width(), renderer.height(), renderer.to_rgba8())
        .ok_or_else(|| failure(path, "RGBA buffer size mismatch"))?;
    write_atomically(path, |file| {
        img.write_to(file.as_file_mut(), image::ImageFormat::Png)
            .map_err(|e| e.to_string())
    })
}

/// Serializes the renderer's document at `path`.
pub fn write_svg(renderer: &SvgRenderer, path: &Path) -> Result<(), SketchError> {
    write_atomically(path, |file| {
        svg::write(&mut *file, renderer.document()).map_err(|e| e.to_string())?;
        file.flush().map_err(|e| e.to_string())
    })
}

fn failure(path: &Path, reason: impl Into<String>) -> SketchError {
    SketchError::ExportWriteFailure {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

fn write_atomically(
    path: &Path,
    write: impl FnOnce(&mut NamedTempFile) -> Result<(), String>,
) -> Result<(), SketchError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(|e| failure(path, e.to_string()))?;
    write(&mut file).map_err(|reason| failure(path, reason))?;
    file.persist(path)
        .map_err(|e| failure(path, e.error.to_string()))?;
    Ok(())
}
