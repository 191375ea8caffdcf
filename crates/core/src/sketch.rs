//! The `Sketch` trait every layout implements.
//!
//! The trait is object-safe so the registry and pipeline can work with
//! `dyn Sketch` regardless of which layout runs.

use crate::canvas::Canvas;
use crate::error::SketchError;
use crate::field::NoiseField;
use crate::prng::RandomSource;
use crate::shape::Shape;
use serde_json::Value;

/// A generate-once layout over a fixed canvas.
pub trait Sketch {
    /// Registry name, e.g. `"quad-grid"`.
    fn name(&self) -> &'static str;

    /// Canvas the layout is designed for.
    fn canvas(&self) -> Canvas;

    /// Multiplier applied to noise samples when perturbing points.
    ///
    /// Layouts that apply no noise return `0.0`; the pipeline then skips
    /// sampling a real field.
    fn noise_scale(&self) -> f64;

    /// Produces the ordered shape list for one run.
    ///
    /// `field` must cover the canvas returned by [`Sketch::canvas`].
    fn layout(
        &self,
        rng: &mut dyn RandomSource,
        field: &NoiseField,
    ) -> Result<Vec<Shape>, SketchError>;

    /// The layout's constants as a JSON object.
    fn params(&self) -> Value;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::geometry::Point;
    use crate::prng::Xorshift64;
    use serde_json::json;

    /// Minimal sketch used to verify trait object safety.
    struct Dots;

    impl Sketch for Dots {
        fn name(&self) -> &'static str {
            "dots"
        }

        fn canvas(&self) -> Canvas {
            Canvas::new(8, 8, Color::WHITE).unwrap()
        }

        fn noise_scale(&self) -> f64 {
            0.0
        }

        fn layout(
            &self,
            rng: &mut dyn RandomSource,
            _field: &NoiseField,
        ) -> Result<Vec<Shape>, SketchError> {
            let count = rng.next_bounded_int(4)? + 1;
            Ok((0..count)
                .map(|i| Shape::StrokedRect {
                    origin: Point::new(i as f64, 0.0),
                    width: 1.0,
                    height: 1.0,
                    stroke: Color::BLACK,
                })
                .collect())
        }

        fn params(&self) -> Value {
            json!({"max_dots": 4})
        }
    }

    #[test]
    fn sketch_trait_is_object_safe() {
        let sketch: Box<dyn Sketch> = Box::new(Dots);
        assert_eq!(sketch.name(), "dots");
        assert_eq!(sketch.canvas().width(), 8);
    }

    #[test]
    fn layout_through_dyn_references() {
        let sketch: &dyn Sketch = &Dots;
        let field = NoiseField::constant(8, 8, 0.0).unwrap();
        let mut rng = Xorshift64::new(3);
        let shapes = sketch.layout(&mut rng, &field).unwrap();
        assert!((1..=4).contains(&shapes.len()));
        assert_eq!(sketch.params()["max_dots"], 4);
    }
}
