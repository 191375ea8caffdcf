#![deny(unsafe_code)]
//! Radial-wedge sketch.
//!
//! Ten concentric sunburst rings. Each ring sweeps a random arc in 5° steps,
//! stroking a chord through its (jittered) center at every step while the
//! radius random-walks. The chord endpoints on either side accumulate into
//! two outlines that are closed through the center and filled translucently,
//! giving each ring a pair of opposing fans.

use serde_json::{json, Value};
use sketchbook_core::{
    perturb, Canvas, Color, NoiseField, Point, RandomSource, Shape, Sketch, SketchError,
};
use std::f64::consts::PI;

const DEFAULT_SIDE: usize = 600;
const DEFAULT_RINGS: usize = 10;
/// Distance between the outermost ring and the canvas edge, before the first
/// ring's spacing step.
const DEFAULT_EDGE_MARGIN: f64 = 50.0;
const DEFAULT_RING_SPACING: f64 = 10.0;
/// Sweep step in whole degrees.
const DEFAULT_ANGLE_STEP: usize = 5;
const DEFAULT_CENTER_JITTER: f64 = 10.0;
const DEFAULT_RADIUS_WALK: f64 = 3.0;
const DEFAULT_FAN_ALPHA: f64 = 0.2;
const DEFAULT_NOISE_SCALE: f64 = 10.0;

/// Layout constants for the sunburst.
#[derive(Debug, Clone)]
pub struct RadialWedgesParams {
    pub width: usize,
    pub height: usize,
    pub rings: usize,
    pub edge_margin: f64,
    pub ring_spacing: f64,
    pub angle_step: usize,
    pub center_jitter: f64,
    pub radius_walk: f64,
    pub stroke: Color,
    /// Fan color; its alpha is the fan opacity.
    pub fan: Color,
    pub background: Color,
    pub noise_scale: f64,
}

impl Default for RadialWedgesParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIDE,
            height: DEFAULT_SIDE,
            rings: DEFAULT_RINGS,
            edge_margin: DEFAULT_EDGE_MARGIN,
            ring_spacing: DEFAULT_RING_SPACING,
            angle_step: DEFAULT_ANGLE_STEP,
            center_jitter: DEFAULT_CENTER_JITTER,
            radius_walk: DEFAULT_RADIUS_WALK,
            stroke: Color::BLACK,
            fan: Color::BLACK.with_alpha(DEFAULT_FAN_ALPHA),
            background: Color::rgb(0.942, 0.919, 0.839),
            noise_scale: DEFAULT_NOISE_SCALE,
        }
    }
}

impl RadialWedgesParams {
    /// Starting radius of ring `index` (0 is outermost).
    ///
    /// The spacing is subtracted before the first ring as well, so ring 0
    /// starts one spacing inside `width / 2 - edge_margin`.
    pub fn ring_radius(&self, index: usize) -> f64 {
        self.width as f64 / 2.0 - self.edge_margin - self.ring_spacing * (index + 1) as f64
    }
}

/// The radial-wedge sketch.
pub struct RadialWedges {
    params: RadialWedgesParams,
    canvas: Canvas,
}

impl RadialWedges {
    /// Returns `SketchError::InvalidArgument` for a zero angle step.
    pub fn new(params: RadialWedgesParams) -> Result<Self, SketchError> {
        if params.angle_step == 0 {
            return Err(SketchError::InvalidArgument(
                "angle step must be at least one degree".into(),
            ));
        }
        let canvas = Canvas::new(params.width, params.height, params.background)?;
        Ok(Self { params, canvas })
    }
}

/// Emits, per ring, its chords in sweep order followed by one fan pair.
///
/// Per ring the draws are: two angles, the center's x and y jitter, then
/// one radius step per chord. A ring whose two angles coincide sweeps
/// nothing and emits no shapes.
pub fn generate(
    params: &RadialWedgesParams,
    rng: &mut dyn RandomSource,
    field: &NoiseField,
) -> Result<Vec<Shape>, SketchError> {
    if params.angle_step == 0 {
        return Err(SketchError::InvalidArgument(
            "angle step must be at least one degree".into(),
        ));
    }
    let mid = Point::new(params.width as f64 / 2.0, params.height as f64 / 2.0);
    let mut shapes = Vec::new();

    for ring in 0..params.rings {
        let mut radius = params.ring_radius(ring);
        let angle_a = rng.next_bounded_int(360)?;
        let angle_b = rng.next_bounded_int(360)?;
        let (start, end) = if angle_a > angle_b {
            (angle_b, angle_a)
        } else {
            (angle_a, angle_b)
        };
        let jitter = params.center_jitter;
        let center = mid
            + Point::new(
                rng.sample_range(-jitter, jitter),
                rng.sample_range(-jitter, jitter),
            );

        let mut outline1 = Vec::new();
        let mut outline2 = Vec::new();
        for degrees in (start..end).step_by(params.angle_step) {
            let angle = (degrees as f64).to_radians();
            radius += rng.sample_range(-params.radius_walk, params.radius_walk);
            let p1 = perturb(
                center + Point::from_angle(angle) * radius,
                field,
                params.noise_scale,
            );
            let p2 = perturb(
                center + Point::from_angle(angle + PI) * radius,
                field,
                params.noise_scale,
            );
            shapes.push(Shape::WedgeStroke {
                p1,
                p2,
                stroke: params.stroke,
            });
            outline1.push(p1);
            outline2.push(p2);
        }

        if !outline1.is_empty() {
            shapes.push(Shape::WedgeFill {
                outline1,
                outline2,
                apex: center,
                fill: params.fan,
            });
        }
    }
    Ok(shapes)
}

impl Sketch for RadialWedges {
    fn name(&self) -> &'static str {
        "radial-wedges"
    }

    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn noise_scale(&self) -> f64 {
        self.params.noise_scale
    }

    fn layout(
        &self,
        rng: &mut dyn RandomSource,
        field: &NoiseField,
    ) -> Result<Vec<Shape>, SketchError> {
        generate(&self.params, rng, field)
    }

    fn params(&self) -> Value {
        json!({
            "width": self.params.width,
            "height": self.params.height,
            "rings": self.params.rings,
            "edge_margin": self.params.edge_margin,
            "ring_spacing": self.params.ring_spacing,
            "angle_step": self.params.angle_step,
            "center_jitter": self.params.center_jitter,
            "radius_walk": self.params.radius_walk,
            "stroke": self.params.stroke,
            "fan": self.params.fan,
            "noise_scale": self.params.noise_scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketchbook_core::Xorshift64;

    /// Replays a fixed list of raw values, then zeros.
    struct Script {
        values: Vec<u64>,
        next: usize,
    }

    impl Script {
        fn new(values: &[u64]) -> Self {
            Self {
                values: values.to_vec(),
                next: 0,
            }
        }
    }

    impl RandomSource for Script {
        fn next_u64(&mut self) -> u64 {
            let v = self.values.get(self.next).copied().unwrap_or(0);
            self.next += 1;
            v
        }
    }

    fn flat_field() -> NoiseField {
        NoiseField::constant(DEFAULT_SIDE, DEFAULT_SIDE, 0.0).unwrap()
    }

    #[test]
    fn ring_radii_start_one_spacing_inside_the_margin() {
        let params = RadialWedgesParams::default();
        assert_eq!(params.ring_radius(0), 240.0);
        assert_eq!(params.ring_radius(9), 150.0);
    }

    #[test]
    fn scripted_ring_produces_expected_chords() {
        // Angles 30 and 10 (swapped into 10..30), then zeros: center jitter
        // and radius steps all take their lower bound.
        let mut rng = Script::new(&[30, 10]);
        let shapes = generate(&RadialWedgesParams::default(), &mut rng, &flat_field()).unwrap();

        // Sweep 10, 15, 20, 25 then one fan; later rings draw 0..0 and emit nothing.
        assert_eq!(shapes.len(), 5);
        let center = Point::new(290.0, 290.0);
        let expected_radii = [237.0, 234.0, 231.0, 228.0];
        for (k, shape) in shapes[..4].iter().enumerate() {
            let angle = ((10 + 5 * k) as f64).to_radians();
            let r = expected_radii[k];
            match shape {
                Shape::WedgeStroke { p1, p2, stroke } => {
                    assert!(p1.abs_diff_eq(center + Point::from_angle(angle) * r, 1e-9));
                    assert!(p2.abs_diff_eq(center - Point::from_angle(angle) * r, 1e-9));
                    assert_eq!(*stroke, Color::BLACK);
                }
                other => panic!("unexpected shape {other:?}"),
            }
        }
        match &shapes[4] {
            Shape::WedgeFill {
                outline1,
                outline2,
                apex,
                fill,
            } => {
                assert_eq!(outline1.len(), 4);
                assert_eq!(outline2.len(), 4);
                assert_eq!(*apex, center);
                assert_eq!(fill.a, 0.2);
            }
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn coinciding_angles_emit_nothing() {
        let mut rng = Script::new(&[]);
        let shapes = generate(&RadialWedgesParams::default(), &mut rng, &flat_field()).unwrap();
        assert!(shapes.is_empty());
    }

    #[test]
    fn each_ring_ends_with_a_fan_matching_its_chords() {
        let shapes = generate(
            &RadialWedgesParams::default(),
            &mut Xorshift64::new(42),
            &flat_field(),
        )
        .unwrap();
        let mut chords = Vec::new();
        let mut fans = 0;
        for shape in &shapes {
            match shape {
                Shape::WedgeStroke { p1, p2, .. } => chords.push((*p1, *p2)),
                Shape::WedgeFill {
                    outline1,
                    outline2,
                    apex,
                    ..
                } => {
                    fans += 1;
                    assert_eq!(outline1.len(), chords.len());
                    assert_eq!(outline2.len(), chords.len());
                    for ((p1, p2), (o1, o2)) in chords.iter().zip(outline1.iter().zip(outline2)) {
                        assert_eq!(p1, o1);
                        assert_eq!(p2, o2);
                        // Without noise each chord passes through the ring center.
                        assert!(((*p1 + *p2) / 2.0).abs_diff_eq(*apex, 1e-9));
                    }
                    assert!((apex.x - 300.0).abs() <= 10.0);
                    assert!((apex.y - 300.0).abs() <= 10.0);
                    chords.clear();
                }
                other => panic!("unexpected shape {other:?}"),
            }
        }
        assert!(chords.is_empty(), "chords left without a fan");
        assert!(fans <= 10);
        assert!(fans > 0);
    }

    #[test]
    fn chord_count_follows_the_sweep() {
        // Angles 0 and 12: steps 0, 5, 10.
        let mut rng = Script::new(&[0, 12]);
        let shapes = generate(&RadialWedgesParams::default(), &mut rng, &flat_field()).unwrap();
        let strokes = shapes
            .iter()
            .filter(|s| matches!(s, Shape::WedgeStroke { .. }))
            .count();
        assert_eq!(strokes, 3);
    }

    #[test]
    fn chords_are_perturbed_but_apex_is_not() {
        let loud = NoiseField::constant(DEFAULT_SIDE, DEFAULT_SIDE, 0.3).unwrap();
        let params = RadialWedgesParams::default();
        let quiet = generate(&params, &mut Script::new(&[30, 10]), &flat_field()).unwrap();
        let moved = generate(&params, &mut Script::new(&[30, 10]), &loud).unwrap();
        match (&quiet[0], &moved[0]) {
            (Shape::WedgeStroke { p1: a, .. }, Shape::WedgeStroke { p1: b, .. }) => {
                assert!((*b - *a).abs_diff_eq(Point::splat(3.0), 1e-9));
            }
            other => panic!("unexpected shapes {other:?}"),
        }
        match (&quiet[4], &moved[4]) {
            (Shape::WedgeFill { apex: a, .. }, Shape::WedgeFill { apex: b, .. }) => {
                assert_eq!(a, b);
            }
            other => panic!("unexpected shapes {other:?}"),
        }
    }

    #[test]
    fn zero_angle_step_is_rejected() {
        let params = RadialWedgesParams {
            angle_step: 0,
            ..RadialWedgesParams::default()
        };
        assert!(RadialWedges::new(params.clone()).is_err());
        assert!(generate(&params, &mut Xorshift64::new(1), &flat_field()).is_err());
    }

    #[test]
    fn same_seed_same_shapes() {
        let field = NoiseField::seamless(DEFAULT_SIDE, DEFAULT_SIDE, 4).unwrap();
        let params = RadialWedgesParams::default();
        let a = generate(&params, &mut Xorshift64::new(19), &field).unwrap();
        let b = generate(&params, &mut Xorshift64::new(19), &field).unwrap();
        assert_eq!(a, b);
    }
}
