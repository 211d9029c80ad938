//! Utility functions for geometry, cursor feedback and colors.
//!
//! This module provides:
//! - Point-in-shape classification used by hit-testing
//! - Coordinate normalization after drawing or resizing
//! - Handle remapping while a corner or endpoint is dragged
//! - Cursor glyph selection and color-name mapping

use crate::draw::color::*;
use crate::draw::{Coords, Region, Shape, ShapeKind};
use crate::error::EngineError;
use std::fmt;

/// Maximum per-axis distance (exclusive) at which a pointer grabs a corner or endpoint.
pub const HANDLE_TOLERANCE: f64 = 30.0;

/// Allowed triangle-inequality slack for a pointer to count as on a segment.
pub const COLLINEAR_SLACK: f64 = 1.0;

// ============================================================================
// Point Tests
// ============================================================================

/// Returns true when both axis deltas are inside [`HANDLE_TOLERANCE`].
pub fn point_near_point(px: f64, py: f64, qx: f64, qy: f64) -> bool {
    (px - qx).abs() < HANDLE_TOLERANCE && (py - qy).abs() < HANDLE_TOLERANCE
}

/// Euclidean distance between two points.
pub fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

/// Approximate "point lies on segment" test.
///
/// Compares the segment length against the detour through `c`. This does not
/// compute a perpendicular distance, so the acceptance band is widest near the
/// middle of long segments and collapses toward the endpoints.
pub fn on_segment(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> bool {
    let offset = distance(a, b) - (distance(b, c) + distance(a, c));
    offset.abs() < COLLINEAR_SLACK
}

/// Determines which region of `shape`, if any, lies under the pointer.
///
/// Handles take priority over the interior. Rectangle corners are checked in
/// the order top-left, top-right, bottom-left, bottom-right and the first
/// match wins. The rectangle interior test assumes normalized anchors.
pub fn classify_point_on_shape(px: f64, py: f64, shape: &Shape) -> Option<Region> {
    let Coords { x1, y1, x2, y2 } = shape.coords();

    match shape.kind() {
        ShapeKind::Rectangle => {
            let corners = [
                (x1, y1, Region::TopLeft),
                (x2, y1, Region::TopRight),
                (x1, y2, Region::BottomLeft),
                (x2, y2, Region::BottomRight),
            ];
            corners
                .into_iter()
                .find(|&(cx, cy, _)| point_near_point(px, py, cx, cy))
                .map(|(_, _, region)| region)
                .or_else(|| {
                    let inside = px >= x1 && px <= x2 && py >= y1 && py <= y2;
                    inside.then_some(Region::Interior)
                })
        }
        ShapeKind::Segment => {
            if point_near_point(px, py, x1, y1) {
                Some(Region::Start)
            } else if point_near_point(px, py, x2, y2) {
                Some(Region::End)
            } else if on_segment((x1, y1), (x2, y2), (px, py)) {
                Some(Region::Interior)
            } else {
                None
            }
        }
    }
}

// ============================================================================
// Coordinate Normalization
// ============================================================================

/// Puts anchors into canonical order.
///
/// Rectangles end up with `x1 <= x2` and `y1 <= y2`. Segments keep their
/// endpoints but order them so the lexicographically smaller point (by x, then
/// y) comes first. Idempotent.
pub fn normalize_coordinates(kind: ShapeKind, coords: Coords) -> Coords {
    let Coords { x1, y1, x2, y2 } = coords;
    match kind {
        ShapeKind::Rectangle => coords.bounds(),
        ShapeKind::Segment => {
            if x1 < x2 || (x1 == x2 && y1 < y2) {
                coords
            } else {
                Coords::new(x2, y2, x1, y1)
            }
        }
    }
}

// ============================================================================
// Handle Remapping
// ============================================================================

/// Moves the anchor(s) owned by `region` to the pointer, keeping the opposite
/// anchor fixed.
///
/// `coords` must be the coordinates captured when the handle was grabbed so
/// that repeated moves never accumulate drift.
///
/// # Errors
/// Returns [`EngineError::InvalidHandleRegion`] for [`Region::Interior`].
pub fn remap_for_handle(
    px: f64,
    py: f64,
    region: Region,
    coords: Coords,
) -> Result<Coords, EngineError> {
    let Coords { x1, y1, x2, y2 } = coords;
    match region {
        Region::TopLeft | Region::Start => Ok(Coords::new(px, py, x2, y2)),
        Region::TopRight => Ok(Coords::new(x1, py, px, y2)),
        Region::BottomLeft => Ok(Coords::new(px, y1, x2, py)),
        Region::BottomRight | Region::End => Ok(Coords::new(x1, y1, px, py)),
        Region::Interior => Err(EngineError::InvalidHandleRegion(region)),
    }
}

// ============================================================================
// Cursor Feedback
// ============================================================================

/// Advisory pointer glyph for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorGlyph {
    /// Diagonal resize along the top-left / bottom-right axis
    ResizeDiagMain,
    /// Diagonal resize along the top-right / bottom-left axis
    ResizeDiagCross,
    /// Move cursor over a shape body, default cursor elsewhere
    #[default]
    MoveOrDefault,
}

impl CursorGlyph {
    pub fn as_str(self) -> &'static str {
        match self {
            CursorGlyph::ResizeDiagMain => "resize-diag-main",
            CursorGlyph::ResizeDiagCross => "resize-diag-cross",
            CursorGlyph::MoveOrDefault => "move-or-default",
        }
    }

    /// CSS cursor keyword for hosts that speak it.
    pub fn css_name(self) -> &'static str {
        match self {
            CursorGlyph::ResizeDiagMain => "nwse-resize",
            CursorGlyph::ResizeDiagCross => "nesw-resize",
            CursorGlyph::MoveOrDefault => "move",
        }
    }
}

impl fmt::Display for CursorGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a hovered region (or nothing) to its cursor glyph.
pub fn cursor_glyph(region: Option<Region>) -> CursorGlyph {
    match region {
        Some(Region::TopLeft | Region::BottomRight | Region::Start | Region::End) => {
            CursorGlyph::ResizeDiagMain
        }
        Some(Region::TopRight | Region::BottomLeft) => CursorGlyph::ResizeDiagCross,
        Some(Region::Interior) | None => CursorGlyph::MoveOrDefault,
    }
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "graphite", "black", "white", "red", "green", "blue", "orange"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "graphite" => Some(GRAPHITE),
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "orange" => Some(ORANGE),
        _ => None,
    }
}
