//! Configuration enum types.

use crate::draw::{Color, color::GRAPHITE};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "graphite"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [30, 60, 200]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: graphite, black, white, red, green, blue, orange
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown color names fall back to graphite with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using graphite", name);
                GRAPHITE
            }),
            ColorSpec::Rgb(rgb) => Color::from_rgb8(*rgb),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLUE;

    #[test]
    fn named_and_rgb_specs_resolve() {
        assert_eq!(ColorSpec::Name("blue".into()).to_color(), BLUE);
        assert_eq!(ColorSpec::Name("chartreuse".into()).to_color(), GRAPHITE);
        assert_eq!(
            ColorSpec::Rgb([255, 255, 255]).to_color(),
            Color::new(1.0, 1.0, 1.0, 1.0)
        );
    }
}
