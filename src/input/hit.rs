//! Hit-testing of pointer positions against the shape store.

use crate::draw::{Region, ShapeId, ShapeStore};
use crate::util;

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub shape: ShapeId,
    pub region: Region,
}

/// Finds the shape under the pointer.
///
/// Shapes are tested in store order and the first one with a region wins, so
/// the oldest shape is preferred when several overlap. Draw order does not act
/// as z-order here.
pub fn find_hit_shape(px: f64, py: f64, store: &ShapeStore) -> Option<Hit> {
    store.iter().find_map(|shape| {
        util::classify_point_on_shape(px, py, shape).map(|region| Hit {
            shape: shape.id(),
            region,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Coords, RoughGenerator, ShapeKind};

    fn store_with(shapes: &[(ShapeKind, Coords)]) -> ShapeStore {
        let renderer = RoughGenerator::precise();
        let mut store = ShapeStore::new();
        for &(kind, coords) in shapes {
            store.push(kind, coords, &renderer);
        }
        store
    }

    #[test]
    fn empty_store_has_no_hit() {
        assert_eq!(find_hit_shape(10.0, 10.0, &ShapeStore::new()), None);
    }

    #[test]
    fn overlapping_rectangles_prefer_lowest_id() {
        let store = store_with(&[
            (ShapeKind::Rectangle, Coords::new(0.0, 0.0, 200.0, 200.0)),
            (ShapeKind::Rectangle, Coords::new(50.0, 50.0, 250.0, 250.0)),
        ]);

        let hit = find_hit_shape(120.0, 120.0, &store).expect("point is inside both");
        assert_eq!(hit.shape.get(), 0);
        assert_eq!(hit.region, Region::Interior);
    }

    #[test]
    fn earlier_interior_beats_later_handle() {
        let store = store_with(&[
            (ShapeKind::Rectangle, Coords::new(0.0, 0.0, 200.0, 200.0)),
            (ShapeKind::Segment, Coords::new(100.0, 100.0, 300.0, 100.0)),
        ]);

        let hit = find_hit_shape(101.0, 101.0, &store).unwrap();
        assert_eq!(hit.shape.get(), 0);
        assert_eq!(hit.region, Region::Interior);
    }

    #[test]
    fn falls_through_to_later_shapes() {
        let store = store_with(&[
            (ShapeKind::Rectangle, Coords::new(0.0, 0.0, 40.0, 40.0)),
            (ShapeKind::Segment, Coords::new(300.0, 300.0, 500.0, 300.0)),
        ]);

        let hit = find_hit_shape(490.0, 305.0, &store).unwrap();
        assert_eq!(hit.shape.get(), 1);
        assert_eq!(hit.region, Region::End);
        assert_eq!(find_hit_shape(150.0, 150.0, &store), None);
    }
}
