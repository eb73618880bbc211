//! Mesh topology queries.
//!
//! Builds the undirected edge set and the interior edges (edges shared by
//! exactly two triangles) from the triangle index buffer. Structural springs
//! come from `edges`, bending springs from the wing vertices of
//! `interior_edges`.

use std::collections::BTreeMap;

use crate::mesh::TriangleMesh;

/// Precomputed topology information for a triangle mesh.
///
/// Edge maps are ordered so that spring creation order, and with it the
/// floating-point summation order, is identical from run to run.
#[derive(Debug, Clone)]
pub struct Topology {
    /// Unique edges as `[v_min, v_max]` pairs, in first-seen order.
    pub edges: Vec<[u32; 2]>,

    /// Edges that have exactly 2 adjacent triangles.
    pub interior_edges: Vec<InteriorEdge>,
}

/// The two vertices opposite an edge shared by two triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteriorEdge {
    /// The vertex of the first triangle opposite the shared edge.
    pub wing_a: u32,
    /// The vertex of the second triangle opposite the shared edge.
    pub wing_b: u32,
}

impl Topology {
    /// Build topology from a triangle mesh.
    pub fn build(mesh: &TriangleMesh) -> Self {
        // Key: (min_vertex, max_vertex) to canonicalize edge direction.
        // Value: (first-seen order, adjacent triangles).
        let mut edge_map: BTreeMap<(u32, u32), (usize, Vec<u32>)> = BTreeMap::new();

        for t in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle(t);
            for (v0, v1) in [(a, b), (b, c), (c, a)] {
                let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };
                let next = edge_map.len();
                edge_map
                    .entry(key)
                    .or_insert_with(|| (next, Vec::new()))
                    .1
                    .push(t as u32);
            }
        }

        let mut ordered: Vec<((u32, u32), (usize, Vec<u32>))> = edge_map.into_iter().collect();
        ordered.sort_by_key(|(_, (order, _))| *order);

        let mut edges: Vec<[u32; 2]> = Vec::with_capacity(ordered.len());
        let mut interior_edges: Vec<InteriorEdge> = Vec::new();

        for ((v0, v1), (_, tris)) in ordered {
            if let &[tri_a, tri_b] = tris.as_slice() {
                interior_edges.push(InteriorEdge {
                    wing_a: find_wing_vertex(mesh, tri_a, v0, v1),
                    wing_b: find_wing_vertex(mesh, tri_b, v0, v1),
                });
            }
            edges.push([v0, v1]);
        }

        Self {
            edges,
            interior_edges,
        }
    }
}

/// Find the vertex in triangle `tri` that is not v0 or v1 (the "wing" vertex).
fn find_wing_vertex(mesh: &TriangleMesh, tri: u32, v0: u32, v1: u32) -> u32 {
    let [a, b, c] = mesh.triangle(tri as usize);
    if a != v0 && a != v1 {
        a
    } else if b != v0 && b != v1 {
        b
    } else {
        c
    }
}
