//! Field sources: coherent scalar noise generators that tile seamlessly.
//!
//! A [`FieldSource`] produces a scalar at normalized coordinates `(u, v)` in
//! [0, 1). [`SeamlessPerlin`] maps the unit square onto a 4D torus before
//! sampling fractal Perlin noise, so `u = 0` and `u = 1` (and likewise `v`)
//! land on the same point and the field wraps without a seam.
//!
//! All implementations are deterministic: same inputs produce the same output.

use noise::{NoiseFn, Perlin};
use std::f64::consts::TAU;

/// A source of coherent scalar values over the unit square.
pub trait FieldSource {
    /// Sample the source at normalized coordinates `(u, v)`.
    ///
    /// Values are roughly in [-1, 1] but not clamped.
    fn sample(&self, u: f64, v: f64) -> f64;
}

/// Number of fractal octaves summed per sample.
const OCTAVES: u32 = 6;
/// Amplitude multiplier between octaves.
const PERSISTENCE: f64 = 0.5;
/// Frequency multiplier between octaves.
const LACUNARITY: f64 = 2.0;
/// Approximate size in pixels of the coarsest noise feature.
const FEATURE_SIZE: f64 = 64.0;

/// Fractal Perlin noise sampled on a 4D torus.
///
/// The torus radii are chosen from the field size so one coarse feature
/// spans roughly [`FEATURE_SIZE`] pixels regardless of canvas dimensions.
pub struct SeamlessPerlin {
    noise: Perlin,
    radius_u: f64,
    radius_v: f64,
}

impl SeamlessPerlin {
    /// Creates a seamless source for a `width` x `height` pixel field.
    pub fn new(seed: u32, width: usize, height: usize) -> Self {
        Self {
            noise: Perlin::new(seed),
            radius_u: width as f64 / FEATURE_SIZE / TAU,
            radius_v: height as f64 / FEATURE_SIZE / TAU,
        }
    }
}

impl FieldSource for SeamlessPerlin {
    fn sample(&self, u: f64, v: f64) -> f64 {
        let (su, cu) = (u * TAU).sin_cos();
        let (sv, cv) = (v * TAU).sin_cos();
        let point = [
            cu * self.radius_u,
            su * self.radius_u,
            cv * self.radius_v,
            sv * self.radius_v,
        ];
        let (total, norm, _, _) =
            (0..OCTAVES).fold((0.0, 0.0, 1.0, 1.0), |(total, norm, amp, freq), _| {
                let p = point.map(|c| c * freq);
                (
                    total + self.noise.get(p) * amp,
                    norm + amp,
                    amp * PERSISTENCE,
                    freq * LACUNARITY,
                )
            });
        total / norm
    }
}
