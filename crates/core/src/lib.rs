#![deny(unsafe_code)]
//! Core types and traits for the sketchbook generative art sketches.
//!
//! Provides the `RandomSource` trait and `Xorshift64` PRNG, the seamless
//! `NoiseField`, point perturbation, geometry helpers, `Color`, the `Shape`
//! descriptors, the `Renderer` capability, `Canvas`, `Seed` and the `Sketch`
//! trait implemented by each layout crate.

pub mod canvas;
pub mod color;
pub mod error;
pub mod field;
pub mod field_source;
pub mod geometry;
pub mod perturb;
pub mod prng;
pub mod renderer;
pub mod seed;
pub mod shape;
pub mod sketch;

pub use canvas::Canvas;
pub use color::Color;
pub use error::SketchError;
pub use field::NoiseField;
pub use geometry::{GridAxis, Point, Rect};
pub use perturb::perturb;
pub use prng::{RandomSource, Xorshift64};
pub use renderer::Renderer;
pub use seed::Seed;
pub use shape::{Quad, Shape};
pub use sketch::Sketch;
