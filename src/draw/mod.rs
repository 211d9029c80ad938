//! Shape model, shape store and rendering.
//!
//! This module defines the core drawing types of the board:
//! - [`Shape`]: a segment or rectangle with its rendered strokes
//! - [`ShapeStore`]: append-only arena holding every shape in creation order
//! - [`RoughGenerator`]: the hand-drawn [`ShapeRenderer`]
//! - Cairo painting of [`RenderPrimitive`]s

pub mod color;
pub mod primitive;
pub mod render;
pub mod rough;
pub mod shape;
pub mod store;

// Re-export commonly used types at module level
pub use color::Color;
pub use primitive::{RenderPrimitive, ShapeRenderer};
pub use render::{StrokeStyle, draw_all, render_background, render_store};
pub use rough::RoughGenerator;
pub use shape::{Coords, Region, Shape, ShapeId, ShapeKind};
pub use store::ShapeStore;
