//! Pointer-event scripts replayed by the `roughboard` binary.
//!
//! A script is a TOML file made of `[[step]]` tables:
//!
//! ```toml
//! [[step]]
//! kind = "tool"
//! tool = "rectangle"
//!
//! [[step]]
//! kind = "down"
//! x = 10.0
//! y = 10.0
//! ```

use crate::input::{PointerEvent, Tool};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// One scripted input: a tool switch or a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ScriptStep {
    Tool {
        tool: Tool,
    },
    Down {
        x: f64,
        y: f64,
    },
    Move {
        x: f64,
        y: f64,
    },
    Up {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
}

impl ScriptStep {
    /// Pointer event carried by this step, `None` for tool switches.
    pub fn pointer_event(&self) -> Option<PointerEvent> {
        match *self {
            ScriptStep::Tool { .. } => None,
            ScriptStep::Down { x, y } => Some(PointerEvent::down(x, y)),
            ScriptStep::Move { x, y } => Some(PointerEvent::moved(x, y)),
            ScriptStep::Up { x, y } => Some(PointerEvent::up(x, y)),
        }
    }
}

impl fmt::Display for ScriptStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptStep::Tool { tool } => write!(f, "tool {tool}"),
            ScriptStep::Down { x, y } => write!(f, "down ({x}, {y})"),
            ScriptStep::Move { x, y } => write!(f, "move ({x}, {y})"),
            ScriptStep::Up { x, y } => write!(f, "up ({x}, {y})"),
        }
    }
}

/// Ordered list of scripted steps.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(rename = "step", default)]
    pub steps: Vec<ScriptStep>,
}

impl Script {
    pub fn parse(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script from {}", path.display()))?;
        let script = Self::parse(&source)
            .with_context(|| format!("Failed to parse script from {}", path.display()))?;
        log::debug!("Loaded {} steps from {}", script.steps.len(), path.display());
        Ok(script)
    }
}
