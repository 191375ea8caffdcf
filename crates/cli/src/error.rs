//! What can go wrong in the `sketchbook` binary, and how the shell sees it.
//!
//! | code | cause |
//! |------|-------|
//! | 0    | success |
//! | 2    | argument parsing, reported by clap before `run` starts |
//! | 10   | sketch failure: unknown name, layout or render error |
//! | 11   | filesystem: seed record unreadable, export or directory write failed |
//! | 12   | input: unknown export format, malformed or empty seed record |
//! | 13   | JSON output could not be encoded |

use sketchbook_core::SketchError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Sketch(SketchError),

    #[error("{}: {reason}", path.display())]
    Io { path: PathBuf, reason: String },

    #[error("{0}")]
    Input(String),

    #[error("cannot encode output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Sketch(_) => 10,
            CliError::Io { .. } => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }

    pub fn io(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        CliError::Io {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Export write failures are filesystem trouble; the rest stay sketch errors.
impl From<SketchError> for CliError {
    fn from(e: SketchError) -> Self {
        match e {
            SketchError::ExportWriteFailure { path, reason } => CliError::Io { path, reason },
            other => CliError::Sketch(other),
        }
    }
}
