//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the pen and the tool that is active when the board opens.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Stroke color - either a named color (graphite, black, white, red, green, blue, orange)
    /// or an RGB array like `[30, 60, 200]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Stroke width in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Maximum number of shapes on the board (0 = unlimited)
    #[serde(default)]
    pub max_shapes: usize,

    /// Tool selected at startup (segment, rectangle, selection)
    #[serde(default)]
    pub default_tool: Tool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            stroke_width: default_stroke_width(),
            max_shapes: 0,
            default_tool: Tool::default(),
        }
    }
}

/// Hand-drawn style settings.
///
/// Set `roughness = 0.0` and `double_stroke = false` for clean geometric lines.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RoughConfig {
    /// How far stroke endpoints wander (valid range: 0.0 - 10.0)
    #[serde(default = "default_roughness")]
    pub roughness: f64,

    /// How strongly long edges bow outward (valid range: 0.0 - 10.0)
    #[serde(default = "default_bowing")]
    pub bowing: f64,

    /// Seed mixed into every stroke; change it for a different hand
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Trace each edge twice like a sketch pencil
    #[serde(default = "default_double_stroke")]
    pub double_stroke: bool,
}

impl Default for RoughConfig {
    fn default() -> Self {
        Self {
            roughness: default_roughness(),
            bowing: default_bowing(),
            seed: default_seed(),
            double_stroke: default_double_stroke(),
        }
    }
}

/// Canvas surface settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface width in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Surface height in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Background color [R, G, B] (0-255 per component)
    #[serde(default = "default_background")]
    pub background: [u8; 3],
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("graphite".to_string())
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_roughness() -> f64 {
    1.0
}

fn default_bowing() -> f64 {
    1.0
}

fn default_seed() -> u64 {
    1
}

fn default_double_stroke() -> bool {
    true
}

fn default_canvas_width() -> u32 {
    1280
}

fn default_canvas_height() -> u32 {
    720
}

fn default_background() -> [u8; 3] {
    [255, 255, 255]
}
