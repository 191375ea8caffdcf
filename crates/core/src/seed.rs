//! Reproducible record of a sketch run.
//!
//! A [`Seed`] captures everything that varies between runs: which sketch and
//! which PRNG seed. Layout parameters are constants of each sketch, so two
//! identical `Seed` values always produce the same shapes.

use crate::error::SketchError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seed {
    pub sketch: String,
    pub seed: u64,
}

impl Seed {
    pub fn new(sketch: &str, seed: u64) -> Self {
        Self {
            sketch: sketch.to_string(),
            seed,
        }
    }

    /// Seed for the noise field, folded down from the 64-bit run seed so the
    /// noise changes whenever the run seed does.
    pub fn noise_seed(&self) -> u32 {
        (self.seed ^ (self.seed >> 32)) as u32
    }

    /// Validates that the sketch name is non-empty.
    pub fn validate(&self) -> Result<(), SketchError> {
        if self.sketch.trim().is_empty() {
            return Err(SketchError::InvalidArgument("sketch name is empty".into()));
        }
        Ok(())
    }
}
