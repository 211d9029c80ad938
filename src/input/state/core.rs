//! Editor state and the interaction action type.

use crate::config::Config;
use crate::draw::{Coords, Region, RoughGenerator, ShapeId, ShapeRenderer, ShapeStore};
use crate::input::tool::Tool;
use crate::util::CursorGlyph;
use std::fmt;

/// Current interaction, carrying exactly the context each mode needs.
///
/// `origin` is the shape's coordinates at grab time. Moves and resizes are
/// always computed from it plus the live pointer, never from the already
/// mutated shape.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Action {
    /// Waiting for a pointer-down
    #[default]
    Idle,
    /// Dragging out a freshly created shape
    Drawing { shape: ShapeId },
    /// Translating a shape grabbed by its interior
    Moving {
        shape: ShapeId,
        /// Pointer position minus the shape's first anchor at grab time
        offset: (f64, f64),
        origin: Coords,
    },
    /// Dragging a corner or endpoint handle
    Resizing {
        shape: ShapeId,
        region: Region,
        origin: Coords,
    },
}

impl Action {
    pub fn is_idle(&self) -> bool {
        matches!(self, Action::Idle)
    }

    /// Shape engaged by the current action, if any.
    pub fn shape(&self) -> Option<ShapeId> {
        match self {
            Action::Idle => None,
            Action::Drawing { shape }
            | Action::Moving { shape, .. }
            | Action::Resizing { shape, .. } => Some(*shape),
        }
    }

    /// Where the engaged shape was grabbed (selection tool only).
    pub fn grab_region(&self) -> Option<Region> {
        match self {
            Action::Moving { .. } => Some(Region::Interior),
            Action::Resizing { region, .. } => Some(*region),
            Action::Idle | Action::Drawing { .. } => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Idle => "idle",
            Action::Drawing { .. } => "drawing",
            Action::Moving { .. } => "moving",
            Action::Resizing { .. } => "resizing",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Complete interaction state of the board.
///
/// Holds the shape store, the active tool, the current action and the advisory
/// cursor glyph. Pointer events are fed through [`EditorState::handle_event`]
/// (or the by-value [`EditorState::apply`]); after each call the host should
/// redraw the whole store when `needs_redraw` is set.
#[derive(Debug, Clone)]
pub struct EditorState<R: ShapeRenderer = RoughGenerator> {
    pub(super) store: ShapeStore,
    pub(super) tool: Tool,
    pub(super) action: Action,
    pub(super) cursor: CursorGlyph,
    pub(super) renderer: R,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Maximum number of shapes on the board (0 = unlimited)
    pub max_shapes: usize,
}

impl Default for EditorState<RoughGenerator> {
    fn default() -> Self {
        Self::new(RoughGenerator::default())
    }
}

impl EditorState<RoughGenerator> {
    /// Builds an editor from user configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_defaults(
            RoughGenerator::from_config(&config.rough),
            config.drawing.default_tool,
            config.drawing.max_shapes,
        )
    }
}

impl<R: ShapeRenderer> EditorState<R> {
    /// Creates an empty board using the segment tool and no shape limit.
    pub fn new(renderer: R) -> Self {
        Self::with_defaults(renderer, Tool::default(), 0)
    }

    pub fn with_defaults(renderer: R, tool: Tool, max_shapes: usize) -> Self {
        Self {
            store: ShapeStore::new(),
            tool,
            action: Action::Idle,
            cursor: CursorGlyph::default(),
            renderer,
            needs_redraw: true,
            max_shapes,
        }
    }

    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// Latest advisory cursor glyph.
    pub fn cursor(&self) -> CursorGlyph {
        self.cursor
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Switches the active tool. Takes effect on the next pointer-down.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool == tool {
            return;
        }
        log::debug!("Tool changed: {} -> {}", self.tool, tool);
        self.tool = tool;
        if tool != Tool::Selection {
            self.cursor = CursorGlyph::default();
        }
    }

    pub(super) fn update_shape(&mut self, id: ShapeId, coords: Coords) {
        if self.store.update(id, coords, &self.renderer) {
            self.needs_redraw = true;
        } else {
            log::warn!("Action references unknown shape {id}; ignoring update");
        }
    }
}
