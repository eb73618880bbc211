//! Core triangle mesh type with SoA (Structure of Arrays) layout.
//!
//! - `pos_x: [x0, x1, x2, ...]`
//! - `pos_y: [y0, y1, y2, ...]`
//! - `pos_z: [z0, z1, z2, ...]`

use serde::{Deserialize, Serialize};

use pliant_math::Vec3;
use pliant_types::{PliantError, PliantResult, Scalar};

/// A triangle mesh stored in Structure-of-Arrays layout.
///
/// The mesh is read once when a soft body is built. The undeformed
/// positions become the body's rest shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriangleMesh {
    /// X coordinates of all vertices.
    pub pos_x: Vec<Scalar>,
    /// Y coordinates of all vertices.
    pub pos_y: Vec<Scalar>,
    /// Z coordinates of all vertices.
    pub pos_z: Vec<Scalar>,

    /// Triangle indices, one `[v0, v1, v2]` per triangle.
    /// Stored flat: `[t0v0, t0v1, t0v2, t1v0, t1v1, t1v2, ...]`
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the position of vertex `i`.
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Iterates over all vertex positions in index order.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        (0..self.vertex_count()).map(move |i| self.position(i))
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Sets the position of vertex `i`.
    #[inline]
    pub fn set_position(&mut self, i: usize, p: Vec3) {
        self.pos_x[i] = p.x;
        self.pos_y[i] = p.y;
        self.pos_z[i] = p.z;
    }

    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            pos_x: Vec::with_capacity(vertex_capacity),
            pos_y: Vec::with_capacity(vertex_capacity),
            pos_z: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity * 3),
        }
    }

    /// Appends a vertex and returns its index.
    pub fn push_vertex(&mut self, p: Vec3) -> u32 {
        let index = self.pos_x.len() as u32;
        self.pos_x.push(p.x);
        self.pos_y.push(p.y);
        self.pos_z.push(p.z);
        index
    }

    /// Appends a triangle.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Returns a copy of the mesh shifted by `offset`.
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            pos_x: self.pos_x.iter().map(|x| x + offset.x).collect(),
            pos_y: self.pos_y.iter().map(|y| y + offset.y).collect(),
            pos_z: self.pos_z.iter().map(|z| z + offset.z).collect(),
            indices: self.indices.clone(),
        }
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - At least one vertex is present
    /// - All SoA arrays have the same length and hold finite values
    /// - Index count is a multiple of 3 and every index is in range
    /// - No degenerate triangles (repeated vertex indices)
    pub fn validate(&self) -> PliantResult<()> {
        let n = self.pos_x.len();

        if n == 0 {
            return Err(PliantError::InvalidMesh("mesh has no vertex data".into()));
        }

        if self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(PliantError::InvalidMesh(
                "Position arrays have inconsistent lengths".into(),
            ));
        }

        if let Some(i) = (0..n).find(|&i| !self.position(i).is_finite()) {
            return Err(PliantError::InvalidMesh(format!(
                "Vertex {} has a non-finite position",
                i
            )));
        }

        if self.indices.len() % 3 != 0 {
            return Err(PliantError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }

        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(PliantError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        for t in 0..self.triangle_count() {
            let [a, b, c] = self.triangle(t);
            if a == b || b == c || a == c {
                return Err(PliantError::InvalidMesh(format!(
                    "Triangle {} has repeated vertex indices: [{}, {}, {}]",
                    t, a, b, c
                )));
            }
        }

        Ok(())
    }

    /// Constructs a mesh from vertex positions and a flat index buffer.
    ///
    /// This is the entry point engine bindings use: positions are already
    /// in world space.
    pub fn from_positions(positions: &[Vec3], indices: &[u32]) -> PliantResult<Self> {
        let mut mesh = Self::with_capacity(positions.len(), indices.len() / 3);
        for &p in positions {
            mesh.push_vertex(p);
        }
        mesh.indices = indices.to_vec();
        mesh.validate()?;
        Ok(mesh)
    }

    /// Constructs a mesh from interleaved `[x0, y0, z0, x1, ...]` data.
    pub fn from_interleaved(positions: &[Scalar], indices: &[u32]) -> PliantResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(PliantError::InvalidMesh(
                "Interleaved positions length not divisible by 3".into(),
            ));
        }
        let points: Vec<Vec3> = positions
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
            .collect();
        Self::from_positions(&points, indices)
    }
}
