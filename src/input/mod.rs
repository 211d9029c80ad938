//! Pointer handling and the interaction state machine.
//!
//! This module translates host pointer events into edits of the shape store.
//! It tracks the active tool, hit-tests presses against existing shapes, and
//! drives the drawing/moving/resizing state machine.

pub mod events;
pub mod hit;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{PointerEvent, PointerKind};
pub use hit::{Hit, find_hit_shape};
pub use state::{Action, EditorState};
pub use tool::Tool;
