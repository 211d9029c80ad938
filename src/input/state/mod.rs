mod core;
mod pointer;

pub use self::core::{Action, EditorState};
