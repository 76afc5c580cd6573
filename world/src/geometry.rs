//! Flyweight cache of immutable cell geometry.

use std::collections::HashMap;

use tokenfield_core::{CellBounds, CellCoord, TILE_DEGREES};

/// Memoizing factory for the spatial bounds of grid cells.
///
/// Each distinct coordinate is computed at most once per process lifetime and
/// the cached value is reused by every subsequent spawn of that coordinate.
/// There is no eviction; growth is bounded by the cells ever visited.
#[derive(Debug, Default)]
pub struct GeometryCache {
    bounds: HashMap<CellCoord, CellBounds>,
}

impl GeometryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bounds: HashMap::new(),
        }
    }

    /// Returns the bounds for a coordinate, computing them on first request.
    pub fn bounds_for(&mut self, cell: CellCoord) -> CellBounds {
        *self
            .bounds
            .entry(cell)
            .or_insert_with(|| compute_bounds(cell))
    }

    /// Number of distinct coordinates materialized so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    /// Reports whether any coordinate has been materialized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }
}

fn compute_bounds(cell: CellCoord) -> CellBounds {
    let south = f64::from(cell.i()) * TILE_DEGREES;
    let west = f64::from(cell.j()) * TILE_DEGREES;
    CellBounds::new(south, west, south + TILE_DEGREES, west + TILE_DEGREES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_requests_reuse_the_cached_entry() {
        let mut cache = GeometryCache::new();
        let cell = CellCoord::new(574_765, -42_252);

        let first = cache.bounds_for(cell);
        let second = cache.bounds_for(cell);

        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn distinct_coordinates_materialize_distinct_entries() {
        let mut cache = GeometryCache::new();
        let _ = cache.bounds_for(CellCoord::new(0, 0));
        let _ = cache.bounds_for(CellCoord::new(0, 1));
        let _ = cache.bounds_for(CellCoord::new(-1, 0));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn bounds_tile_the_plane_without_gaps() {
        let mut cache = GeometryCache::new();
        let cell = CellCoord::new(3, -4);
        let bounds = cache.bounds_for(cell);
        let north_neighbor = cache.bounds_for(CellCoord::new(4, -4));
        let east_neighbor = cache.bounds_for(CellCoord::new(3, -3));

        assert_eq!(bounds.north(), north_neighbor.south());
        assert_eq!(bounds.east(), east_neighbor.west());
        assert!((bounds.north() - bounds.south() - TILE_DEGREES).abs() < 1e-12);
    }

    #[test]
    fn the_center_lies_inside_the_cell() {
        let mut cache = GeometryCache::new();
        let cell = CellCoord::new(-7, 12);
        let bounds = cache.bounds_for(cell);
        let center = bounds.center();

        assert!(center.lat() > bounds.south() && center.lat() < bounds.north());
        assert!(center.lng() > bounds.west() && center.lng() < bounds.east());
        assert_eq!(CellCoord::containing(center), cell);
    }
}
