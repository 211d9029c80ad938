//! Tool selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Active tool chosen in the tool picker.
///
/// The tool is read on every pointer-down: drawing tools create a new shape,
/// the selection tool grabs an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Straight line between press and release points
    #[default]
    #[serde(alias = "line")]
    Segment,
    /// Rectangle outline from corner to corner
    #[serde(alias = "rect")]
    Rectangle,
    /// Move or resize existing shapes
    Selection,
}

impl Tool {
    /// Returns true for tools that create shapes.
    pub fn draws(self) -> bool {
        !matches!(self, Tool::Selection)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tool::Segment => "segment",
            Tool::Rectangle => "rectangle",
            Tool::Selection => "selection",
        })
    }
}
