//! Shape records placed on the board.

use super::primitive::{RenderPrimitive, ShapeRenderer};
use crate::error::EngineError;
use crate::input::Tool;
use std::fmt;
use std::str::FromStr;

/// Stable handle for a shape, issued by [`ShapeStore`](super::ShapeStore).
///
/// Handles are never reused and are independent of where the shape sits in
/// storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(pub(crate) u32);

impl ShapeId {
    /// Raw numeric value of the handle.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The closed set of geometric shapes the board can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Straight line between two endpoints
    Segment,
    /// Axis-aligned rectangle spanned by two opposite corners
    Rectangle,
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Segment => "segment",
            ShapeKind::Rectangle => "rectangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "segment" | "line" => Ok(ShapeKind::Segment),
            "rectangle" | "rect" => Ok(ShapeKind::Rectangle),
            other => Err(EngineError::UnsupportedShapeKind(other.to_string())),
        }
    }
}

impl TryFrom<Tool> for ShapeKind {
    type Error = EngineError;

    /// Maps a drawing tool to the shape it creates. The selection tool creates
    /// nothing and is rejected.
    fn try_from(tool: Tool) -> Result<Self, Self::Error> {
        match tool {
            Tool::Segment => Ok(ShapeKind::Segment),
            Tool::Rectangle => Ok(ShapeKind::Rectangle),
            Tool::Selection => Err(EngineError::UnsupportedShapeKind(tool.to_string())),
        }
    }
}

/// Two anchor points of a shape.
///
/// For a segment these are the endpoints; for a rectangle two opposite corners.
/// While a shape is being edited the anchors may be in any order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coords {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Coords {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Degenerate anchors collapsed onto a single point.
    pub fn at_point(x: f64, y: f64) -> Self {
        Self::new(x, y, x, y)
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Min/max ordered copy of these anchors.
    pub fn bounds(&self) -> Coords {
        Coords {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }
}

/// Sub-area of a shape that a pointer engaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Body of the shape (drag to move)
    Interior,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// First endpoint of a segment
    Start,
    /// Second endpoint of a segment
    End,
}

impl Region {
    /// Returns true for corner and endpoint handles.
    pub fn is_handle(self) -> bool {
        !matches!(self, Region::Interior)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Region::Interior => "interior",
            Region::TopLeft => "top-left",
            Region::TopRight => "top-right",
            Region::BottomLeft => "bottom-left",
            Region::BottomRight => "bottom-right",
            Region::Start => "start",
            Region::End => "end",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A geometric record on the board together with its rendered strokes.
///
/// Coordinates are only writable through [`Shape::set_coords`], which
/// regenerates the render primitive in the same step.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    coords: Coords,
    primitive: RenderPrimitive,
}

impl Shape {
    pub fn new<R>(id: ShapeId, kind: ShapeKind, coords: Coords, renderer: &R) -> Self
    where
        R: ShapeRenderer + ?Sized,
    {
        let primitive = renderer.render_shape(kind, coords);
        Self {
            id,
            kind,
            coords,
            primitive,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn primitive(&self) -> &RenderPrimitive {
        &self.primitive
    }

    /// Replaces the anchors and re-renders the shape.
    pub fn set_coords<R>(&mut self, coords: Coords, renderer: &R)
    where
        R: ShapeRenderer + ?Sized,
    {
        self.coords = coords;
        self.primitive = renderer.render_shape(self.kind, coords);
    }

    /// Axis-aligned box covering both anchors, independent of their order.
    pub fn bounding_box(&self) -> Coords {
        self.coords.bounds()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.coords;
        write!(
            f,
            "{} {} ({}, {}) -> ({}, {})",
            self.id, self.kind, c.x1, c.y1, c.x2, c.y2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::RoughGenerator;

    #[test]
    fn kind_parses_aliases() {
        assert_eq!("line".parse::<ShapeKind>().unwrap(), ShapeKind::Segment);
        assert_eq!(" Rect ".parse::<ShapeKind>().unwrap(), ShapeKind::Rectangle);
    }

    #[test]
    fn unknown_kind_is_unsupported() {
        let err = "ellipse".parse::<ShapeKind>().unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedShapeKind(ref name) if name == "ellipse"));
    }

    #[test]
    fn selection_tool_has_no_shape_kind() {
        assert!(ShapeKind::try_from(Tool::Selection).is_err());
        assert_eq!(
            ShapeKind::try_from(Tool::Rectangle).unwrap(),
            ShapeKind::Rectangle
        );
    }

    #[test]
    fn set_coords_regenerates_primitive() {
        let renderer = RoughGenerator::precise();
        let mut shape = Shape::new(
            ShapeId(0),
            ShapeKind::Segment,
            Coords::at_point(5.0, 5.0),
            &renderer,
        );
        let before = shape.primitive().clone();

        shape.set_coords(Coords::new(5.0, 5.0, 80.0, 20.0), &renderer);

        assert_ne!(shape.primitive(), &before);
        assert_eq!(
            shape.primitive(),
            &renderer.render_shape(ShapeKind::Segment, shape.coords())
        );
    }

    #[test]
    fn bounding_box_orders_anchors() {
        let renderer = RoughGenerator::precise();
        let shape = Shape::new(
            ShapeId(3),
            ShapeKind::Rectangle,
            Coords::new(50.0, 40.0, 10.0, 10.0),
            &renderer,
        );
        assert_eq!(shape.bounding_box(), Coords::new(10.0, 10.0, 50.0, 40.0));
        assert_eq!(shape.to_string(), "#3 rectangle (50, 40) -> (10, 10)");
    }
}
