//! Render primitives and the renderer seam.

use super::shape::{Coords, ShapeKind};

/// Drawable form of a shape: a set of polylines in board coordinates.
///
/// The engine treats this as opaque. It is produced by a [`ShapeRenderer`]
/// and consumed by the painter in [`render`](super::render).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderPrimitive {
    strokes: Vec<Vec<(f64, f64)>>,
}

impl RenderPrimitive {
    pub fn new(strokes: Vec<Vec<(f64, f64)>>) -> Self {
        Self { strokes }
    }

    pub fn strokes(&self) -> &[Vec<(f64, f64)>] {
        &self.strokes
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.iter().all(|stroke| stroke.len() < 2)
    }
}

/// Turns shape geometry into a drawable primitive.
pub trait ShapeRenderer {
    fn render_shape(&self, kind: ShapeKind, coords: Coords) -> RenderPrimitive;
}
