//! Uniform-grid spatial hash over point positions.
//!
//! Bins point indices into cubic cells. Rebuilt from scratch every soft-body
//! update; queried by the point-pair contact resolver to avoid scanning all
//! point pairs.

use std::collections::HashMap;

use pliant_math::Vec3;
use pliant_types::Scalar;

use crate::point::Point;

/// Spatial hash using a uniform grid.
#[derive(Debug, Clone)]
pub struct SpatialHash {
    cell_size: Scalar,
    /// Inverse cell size (cached).
    inv_cell_size: Scalar,
    /// Hash map from cell key to list of point indices.
    grid: HashMap<(i32, i32, i32), Vec<u32>>,
    /// Number of points inserted since the last clear.
    point_count: usize,
}

impl SpatialHash {
    /// Create a new spatial hash with the given cell size.
    pub fn new(cell_size: Scalar) -> Self {
        let cell_size = cell_size.max(1e-6);
        Self {
            cell_size,
            inv_cell_size: 1.0 / cell_size,
            grid: HashMap::new(),
            point_count: 0,
        }
    }

    #[inline]
    pub fn cell_size(&self) -> Scalar {
        self.cell_size
    }

    /// Number of indices stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.point_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.point_count == 0
    }

    /// Hash a position to a cell key.
    fn cell_key(&self, p: Vec3) -> (i32, i32, i32) {
        let cx = (p.x * self.inv_cell_size).floor() as i32;
        let cy = (p.y * self.inv_cell_size).floor() as i32;
        let cz = (p.z * self.inv_cell_size).floor() as i32;
        (cx, cy, cz)
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.point_count = 0;
    }

    pub fn insert(&mut self, position: Vec3, index: u32) {
        let key = self.cell_key(position);
        self.grid.entry(key).or_default().push(index);
        self.point_count += 1;
    }

    /// Clears the grid and inserts every point under its array index.
    pub fn rebuild(&mut self, points: &[Point]) {
        self.clear();
        for (i, p) in points.iter().enumerate() {
            self.insert(p.position, i as u32);
        }
    }

    /// Indices in every cell within `ceil(radius / cell_size)` cells of
    /// `position`'s cell.
    ///
    /// The result is a superset of the points within `radius`; callers
    /// still check exact distances.
    pub fn nearby(&self, position: Vec3, radius: Scalar) -> Vec<u32> {
        let mut result = Vec::new();
        let reach = (radius.max(0.0) * self.inv_cell_size).ceil() as i32;
        let (cx, cy, cz) = self.cell_key(position);

        for dx in -reach..=reach {
            for dy in -reach..=reach {
                for dz in -reach..=reach {
                    if let Some(indices) = self.grid.get(&(cx + dx, cy + dy, cz + dz)) {
                        result.extend_from_slice(indices);
                    }
                }
            }
        }

        result
    }
}
