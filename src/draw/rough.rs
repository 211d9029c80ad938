//! Hand-drawn stroke generator.
//!
//! Every straight edge of a shape is traced as a slightly bowed polyline whose
//! endpoints wander by a small random offset, optionally drawn twice to mimic a
//! pencil going over the same line. The randomness is seeded from the
//! configured seed and the shape geometry, so re-rendering unchanged geometry
//! always produces the same strokes.

use super::primitive::{RenderPrimitive, ShapeRenderer};
use super::shape::{Coords, ShapeKind};
use crate::config::RoughConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Points per traced edge (inclusive of both ends is `SAMPLES + 1`).
const SAMPLES: usize = 8;

/// Upper bound of endpoint wander in board units at roughness 1.0.
const MAX_OFFSET: f64 = 2.0;

/// Deterministic sketchy renderer for segments and rectangles.
#[derive(Debug, Clone, PartialEq)]
pub struct RoughGenerator {
    /// Endpoint wander multiplier (0.0 = perfectly straight)
    pub roughness: f64,
    /// How far edges bow away from the straight line
    pub bowing: f64,
    /// Base seed mixed with the geometry for every render
    pub seed: u64,
    /// Trace every edge twice
    pub double_stroke: bool,
}

impl Default for RoughGenerator {
    fn default() -> Self {
        Self {
            roughness: 1.0,
            bowing: 1.0,
            seed: 1,
            double_stroke: true,
        }
    }
}

impl RoughGenerator {
    pub fn from_config(config: &RoughConfig) -> Self {
        Self {
            roughness: config.roughness,
            bowing: config.bowing,
            seed: config.seed,
            double_stroke: config.double_stroke,
        }
    }

    /// A generator that draws exact single straight strokes.
    pub fn precise() -> Self {
        Self {
            roughness: 0.0,
            bowing: 0.0,
            seed: 0,
            double_stroke: false,
        }
    }

    fn rng_for(&self, kind: ShapeKind, coords: Coords) -> StdRng {
        let mut hash = self.seed ^ kind as u64;
        for value in [coords.x1, coords.y1, coords.x2, coords.y2] {
            hash = hash.rotate_left(13) ^ value.to_bits();
            hash = hash.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        }
        StdRng::seed_from_u64(hash)
    }

    fn trace_edge(
        &self,
        rng: &mut StdRng,
        from: (f64, f64),
        to: (f64, f64),
        strokes: &mut Vec<Vec<(f64, f64)>>,
    ) {
        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        let length = (dx * dx + dy * dy).sqrt();

        // Short edges get proportionally less wobble so they stay readable.
        let spread = (self.roughness * MAX_OFFSET).min(length * 0.1);
        let (nx, ny) = if length > 0.0 {
            (-dy / length, dx / length)
        } else {
            (0.0, 0.0)
        };

        let passes = if self.double_stroke { 2 } else { 1 };
        for pass in 0..passes {
            let pass_spread = if pass == 0 { spread } else { spread * 0.5 };
            let bow = self.bowing * self.roughness * length / 200.0 * jitter(rng, 1.0);
            let start = (
                from.0 + jitter(rng, pass_spread),
                from.1 + jitter(rng, pass_spread),
            );
            let end = (
                to.0 + jitter(rng, pass_spread),
                to.1 + jitter(rng, pass_spread),
            );

            let stroke = (0..=SAMPLES)
                .map(|step| {
                    let t = step as f64 / SAMPLES as f64;
                    let sag = bow * 4.0 * t * (1.0 - t);
                    (
                        start.0 + (end.0 - start.0) * t + nx * sag,
                        start.1 + (end.1 - start.1) * t + ny * sag,
                    )
                })
                .collect();
            strokes.push(stroke);
        }
    }
}

fn jitter(rng: &mut StdRng, spread: f64) -> f64 {
    if spread <= 0.0 {
        0.0
    } else {
        rng.gen_range(-spread..spread)
    }
}

impl ShapeRenderer for RoughGenerator {
    fn render_shape(&self, kind: ShapeKind, coords: Coords) -> RenderPrimitive {
        let mut rng = self.rng_for(kind, coords);
        let mut strokes = Vec::new();
        let Coords { x1, y1, x2, y2 } = coords;

        match kind {
            ShapeKind::Segment => {
                self.trace_edge(&mut rng, (x1, y1), (x2, y2), &mut strokes);
            }
            ShapeKind::Rectangle => {
                let corners = [(x1, y1), (x2, y1), (x2, y2), (x1, y2)];
                for i in 0..corners.len() {
                    let next = corners[(i + 1) % corners.len()];
                    self.trace_edge(&mut rng, corners[i], next, &mut strokes);
                }
            }
        }

        RenderPrimitive::new(strokes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precise_segment_is_a_straight_stroke() {
        let primitive =
            RoughGenerator::precise().render_shape(ShapeKind::Segment, Coords::new(0.0, 0.0, 80.0, 40.0));

        assert_eq!(primitive.strokes().len(), 1);
        let stroke = &primitive.strokes()[0];
        assert_eq!(stroke.len(), SAMPLES + 1);
        assert_eq!(stroke[0], (0.0, 0.0));
        assert_eq!(stroke[SAMPLES], (80.0, 40.0));
        for &(x, y) in stroke {
            assert!((y - x / 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn rectangle_traces_four_edges_per_pass() {
        let single = RoughGenerator::precise()
            .render_shape(ShapeKind::Rectangle, Coords::new(10.0, 10.0, 50.0, 40.0));
        assert_eq!(single.strokes().len(), 4);

        let doubled = RoughGenerator::default()
            .render_shape(ShapeKind::Rectangle, Coords::new(10.0, 10.0, 50.0, 40.0));
        assert_eq!(doubled.strokes().len(), 8);
    }

    #[test]
    fn same_geometry_renders_identically() {
        let generator = RoughGenerator::default();
        let coords = Coords::new(12.5, 7.0, 300.0, 190.0);
        assert_eq!(
            generator.render_shape(ShapeKind::Segment, coords),
            generator.render_shape(ShapeKind::Segment, coords)
        );
    }

    #[test]
    fn rough_strokes_stay_near_the_edge() {
        let generator = RoughGenerator {
            roughness: 1.0,
            bowing: 1.0,
            seed: 42,
            double_stroke: true,
        };
        let primitive =
            generator.render_shape(ShapeKind::Segment, Coords::new(0.0, 100.0, 400.0, 100.0));

        let precise = RoughGenerator::precise()
            .render_shape(ShapeKind::Segment, Coords::new(0.0, 100.0, 400.0, 100.0));
        assert_ne!(primitive, precise);

        // Endpoint wander (2) plus maximum bow (400 / 200 = 2).
        for stroke in primitive.strokes() {
            for &(_, y) in stroke {
                assert!((y - 100.0).abs() <= 4.0 + 1e-9, "y = {y}");
            }
        }
    }

    #[test]
    fn degenerate_edge_collapses_to_point() {
        let primitive = RoughGenerator::default()
            .render_shape(ShapeKind::Segment, Coords::at_point(5.0, 5.0));
        for stroke in primitive.strokes() {
            assert!(stroke.iter().all(|&p| p == (5.0, 5.0)));
        }
    }
}
