//! RGBA color type and the named stroke palette.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use roughboard::draw::Color;
/// let ink = Color::from_rgb8([40, 40, 40]);
/// assert!(ink.r < 0.2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Builds an opaque color from 0-255 channel values.
    pub fn from_rgb8([r, g, b]: [u8; 3]) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
            a: 1.0,
        }
    }
}

// ============================================================================
// Named Palette
// ============================================================================

pub const RED: Color = Color {
    r: 0.88,
    g: 0.19,
    b: 0.19,
    a: 1.0,
};

pub const GREEN: Color = Color {
    r: 0.18,
    g: 0.62,
    b: 0.27,
    a: 1.0,
};

pub const BLUE: Color = Color {
    r: 0.11,
    g: 0.39,
    b: 0.85,
    a: 1.0,
};

pub const ORANGE: Color = Color {
    r: 0.96,
    g: 0.55,
    b: 0.12,
    a: 1.0,
};

/// Default ink, a soft graphite rather than pure black
pub const GRAPHITE: Color = Color {
    r: 0.12,
    g: 0.12,
    b: 0.14,
    a: 1.0,
};

pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};
