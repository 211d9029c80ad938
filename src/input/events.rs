//! Pointer event types delivered by the host.

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Primary button pressed
    Down,
    /// Pointer moved (button held or not)
    Move,
    /// Primary button released
    Up,
}

/// A single pointer sample in board coordinates.
///
/// The host delivers these in temporal order for one logical pointer, always
/// as `Down`, any number of `Move`s, then `Up`. Coordinates outside the canvas
/// are accepted as ordinary geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    pub fn down(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Down,
            x,
            y,
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Move,
            x,
            y,
        }
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Up,
            x,
            y,
        }
    }
}
