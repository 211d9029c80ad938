use crate::draw::{Coords, Region, ShapeKind, ShapeRenderer};
use crate::error::EngineError;
use crate::input::events::{PointerEvent, PointerKind};
use crate::input::hit::find_hit_shape;
use crate::input::tool::Tool;
use crate::util;
use log::{debug, warn};

use super::{Action, EditorState};

impl<R: ShapeRenderer> EditorState<R> {
    /// Routes a pointer event to the matching handler.
    pub fn handle_event(&mut self, event: PointerEvent) -> Result<(), EngineError> {
        match event.kind {
            PointerKind::Down => self.on_pointer_down(event.x, event.y),
            PointerKind::Move => self.on_pointer_move(event.x, event.y),
            PointerKind::Up => {
                self.on_pointer_up();
                Ok(())
            }
        }
    }

    /// Consumes the state and returns the state after `event`.
    pub fn apply(mut self, event: PointerEvent) -> Result<Self, EngineError> {
        self.handle_event(event)?;
        Ok(self)
    }

    /// Processes a pointer press.
    ///
    /// # Behavior
    /// - Drawing tool: appends a zero-size shape at the pointer and starts drawing
    /// - Selection tool over a shape: starts moving (interior) or resizing (handle)
    /// - Selection tool over empty canvas: nothing happens
    ///
    /// A press while another action is still in progress is ignored.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) -> Result<(), EngineError> {
        if !self.action.is_idle() {
            debug!(
                "Ignoring pointer down at ({x}, {y}) while {} is in progress",
                self.action
            );
            return Ok(());
        }

        if self.tool.draws() {
            let kind = ShapeKind::try_from(self.tool)?;
            match self.store.try_push(
                kind,
                Coords::at_point(x, y),
                &self.renderer,
                self.max_shapes,
            ) {
                Some(shape) => {
                    debug!("Drawing {kind} {shape} from ({x}, {y})");
                    self.action = Action::Drawing { shape };
                    self.needs_redraw = true;
                }
                None => {
                    warn!(
                        "Shape limit ({}) reached; discarding new {kind}",
                        self.max_shapes
                    );
                }
            }
            return Ok(());
        }

        let Some(hit) = find_hit_shape(x, y, &self.store) else {
            return Ok(());
        };
        let Some(origin) = self.store.get(hit.shape).map(|shape| shape.coords()) else {
            return Ok(());
        };

        self.action = if hit.region == Region::Interior {
            Action::Moving {
                shape: hit.shape,
                offset: (x - origin.x1, y - origin.y1),
                origin,
            }
        } else {
            Action::Resizing {
                shape: hit.shape,
                region: hit.region,
                origin,
            }
        };
        debug!("Grabbed {} at {} ({})", hit.shape, hit.region, self.action);
        self.needs_redraw = true;
        Ok(())
    }

    /// Processes pointer motion.
    ///
    /// # Behavior
    /// - Drawing: the second anchor follows the pointer
    /// - Moving: the shape is translated so the grab offset is preserved
    /// - Resizing: the grabbed handle follows the pointer, opposite anchor fixed
    /// - Idle with the selection tool: only the cursor glyph is updated
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> Result<(), EngineError> {
        match self.action {
            Action::Idle => {
                if self.tool == Tool::Selection {
                    let region = find_hit_shape(x, y, &self.store).map(|hit| hit.region);
                    self.cursor = util::cursor_glyph(region);
                }
            }
            Action::Drawing { shape } => {
                if let Some(current) = self.store.get(shape).map(|s| s.coords()) {
                    self.update_shape(shape, Coords::new(current.x1, current.y1, x, y));
                }
            }
            Action::Moving {
                shape,
                offset,
                origin,
            } => {
                let nx = x - offset.0;
                let ny = y - offset.1;
                let moved = Coords::new(nx, ny, nx + origin.width(), ny + origin.height());
                self.update_shape(shape, moved);
            }
            Action::Resizing {
                shape,
                region,
                origin,
            } => {
                let resized = util::remap_for_handle(x, y, region, origin)?;
                self.update_shape(shape, resized);
            }
        }
        Ok(())
    }

    /// Processes a pointer release.
    ///
    /// Drawn and resized shapes get their anchors normalized; moved shapes are
    /// left as they are. The action always returns to idle.
    pub fn on_pointer_up(&mut self) {
        let action = std::mem::take(&mut self.action);

        match action {
            Action::Idle => return,
            Action::Drawing { shape } | Action::Resizing { shape, .. } => {
                if let Some(current) = self.store.get(shape) {
                    let normalized = util::normalize_coordinates(current.kind(), current.coords());
                    if normalized != current.coords() {
                        self.update_shape(shape, normalized);
                    }
                }
            }
            Action::Moving { .. } => {}
        }

        debug!("Finished {action}");
        self.needs_redraw = true;
    }
}
