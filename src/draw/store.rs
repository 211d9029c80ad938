//! Append-only arena of shapes.

use super::primitive::ShapeRenderer;
use super::shape::{Coords, Shape, ShapeId, ShapeKind};

/// Ordered collection of every shape on the board.
///
/// Shapes are kept in creation order (first = bottom, last = top) and are
/// addressed by [`ShapeId`] handles. The store is append-only: shapes can be
/// replaced in place but never removed or reordered, so handles stay valid for
/// the lifetime of the store.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
    next_id: u32,
}

impl ShapeStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// All shapes in creation order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Handle that the next appended shape will receive.
    pub fn next_id(&self) -> ShapeId {
        ShapeId(self.next_id)
    }

    // Handles are issued in increasing order and never removed, so the
    // backing vector is always sorted by id.
    fn position(&self, id: ShapeId) -> Option<usize> {
        self.shapes.binary_search_by_key(&id, Shape::id).ok()
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.position(id).map(|index| &self.shapes[index])
    }

    /// Appends a new shape, rendering it immediately.
    pub fn push<R>(&mut self, kind: ShapeKind, coords: Coords, renderer: &R) -> ShapeId
    where
        R: ShapeRenderer + ?Sized,
    {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.push(Shape::new(id, kind, coords, renderer));
        id
    }

    /// Attempts to append a shape, enforcing a maximum shape count when `max` > 0.
    ///
    /// Returns `None` if the limit would be exceeded.
    pub fn try_push<R>(
        &mut self,
        kind: ShapeKind,
        coords: Coords,
        renderer: &R,
        max: usize,
    ) -> Option<ShapeId>
    where
        R: ShapeRenderer + ?Sized,
    {
        if max == 0 || self.shapes.len() < max {
            Some(self.push(kind, coords, renderer))
        } else {
            None
        }
    }

    /// Replaces the anchors of an existing shape in place.
    ///
    /// Returns `false` if `id` does not belong to this store.
    pub fn update<R>(&mut self, id: ShapeId, coords: Coords, renderer: &R) -> bool
    where
        R: ShapeRenderer + ?Sized,
    {
        match self.position(id) {
            Some(index) => {
                self.shapes[index].set_coords(coords, renderer);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::RoughGenerator;

    #[test]
    fn push_issues_sequential_handles() {
        let renderer = RoughGenerator::precise();
        let mut store = ShapeStore::new();
        let a = store.push(ShapeKind::Segment, Coords::at_point(0.0, 0.0), &renderer);
        let b = store.push(ShapeKind::Rectangle, Coords::at_point(1.0, 1.0), &renderer);

        assert_eq!(a.get(), 0);
        assert_eq!(b.get(), 1);
        assert_eq!(store.next_id().get(), 2);
        let order: Vec<_> = store.iter().map(Shape::id).collect();
        assert_eq!(order, vec![a, b]);
    }

    #[test]
    fn update_replaces_in_place() {
        let renderer = RoughGenerator::precise();
        let mut store = ShapeStore::new();
        store.push(ShapeKind::Segment, Coords::at_point(0.0, 0.0), &renderer);
        let id = store.push(ShapeKind::Rectangle, Coords::at_point(1.0, 1.0), &renderer);

        assert!(store.update(id, Coords::new(1.0, 1.0, 9.0, 9.0), &renderer));

        assert_eq!(store.len(), 2);
        assert_eq!(store.shapes()[1].id(), id);
        assert_eq!(store.get(id).unwrap().coords(), Coords::new(1.0, 1.0, 9.0, 9.0));
    }

    #[test]
    fn update_unknown_handle_is_rejected() {
        let renderer = RoughGenerator::precise();
        let mut store = ShapeStore::new();
        assert!(!store.update(ShapeId(7), Coords::at_point(0.0, 0.0), &renderer));
        assert!(store.get(ShapeId(7)).is_none());
    }

    #[test]
    fn try_push_respects_limit() {
        let renderer = RoughGenerator::precise();
        let mut store = ShapeStore::new();
        assert!(
            store
                .try_push(ShapeKind::Segment, Coords::at_point(0.0, 0.0), &renderer, 1)
                .is_some()
        );
        assert!(
            store
                .try_push(ShapeKind::Segment, Coords::at_point(1.0, 1.0), &renderer, 1)
                .is_none()
        );
        assert_eq!(store.len(), 1);
    }
}
