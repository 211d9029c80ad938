//! Geometric interaction engine for a hand-drawn sketch board.
//!
//! Exposes the shape model, the pointer-driven editing state machine and the
//! configuration types so that hosts (windowing front-ends, the replay binary,
//! tests) share one implementation.

pub mod config;
pub mod draw;
pub mod error;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
pub use error::EngineError;
pub use input::EditorState;
