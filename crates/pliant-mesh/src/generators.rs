//! Procedural shape generators for scenarios and testing.
//!
//! All generators are deterministic. Closed shapes are welded (no seam or
//! pole duplicates), so every interior edge yields a bending spring.

use std::f64::consts::PI;

use pliant_math::Vec3;
use pliant_types::Scalar;

use crate::mesh::TriangleMesh;

/// Generates a flat rectangular quad grid in the XY plane.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]` in Y,
/// centered at the origin at Z=0.
///
/// # Example
/// ```
/// use pliant_mesh::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0);
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 quads × 2 tris each
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: Scalar, height: Scalar) -> TriangleMesh {
    let verts_x = cols + 1;
    let verts_y = rows + 1;
    let mut mesh = TriangleMesh::with_capacity(verts_x * verts_y, cols * rows * 2);

    let half_w = width / 2.0;
    let half_h = height / 2.0;

    for j in 0..verts_y {
        for i in 0..verts_x {
            let u = i as Scalar / cols.max(1) as Scalar;
            let v = j as Scalar / rows.max(1) as Scalar;
            mesh.push_vertex(Vec3::new(-half_w + u * width, half_h - v * height, 0.0));
        }
    }

    for j in 0..rows {
        for i in 0..cols {
            let top_left = (j * verts_x + i) as u32;
            let top_right = top_left + 1;
            let bot_left = top_left + verts_x as u32;
            let bot_right = bot_left + 1;

            mesh.push_triangle(top_left, bot_left, top_right);
            mesh.push_triangle(top_right, bot_left, bot_right);
        }
    }

    mesh
}

/// Generates a welded UV sphere centered at the origin.
///
/// One vertex per pole and `slices` vertices on each of the `stacks - 1`
/// latitude rings. `stacks` is clamped to at least 2 and `slices` to at
/// least 3.
pub fn uv_sphere(radius: Scalar, stacks: usize, slices: usize) -> TriangleMesh {
    let stacks = stacks.max(2);
    let slices = slices.max(3);
    let ring_count = stacks - 1;
    let mut mesh = TriangleMesh::with_capacity(2 + ring_count * slices, 2 * slices * ring_count);

    let top = mesh.push_vertex(Vec3::new(0.0, radius, 0.0));
    for i in 1..stacks {
        let phi = PI * i as Scalar / stacks as Scalar;
        for j in 0..slices {
            let theta = 2.0 * PI * j as Scalar / slices as Scalar;
            mesh.push_vertex(Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.cos(),
                radius * phi.sin() * theta.sin(),
            ));
        }
    }
    let bottom = mesh.push_vertex(Vec3::new(0.0, -radius, 0.0));

    let ring = |r: usize, j: usize| (1 + r * slices + (j % slices)) as u32;

    for j in 0..slices {
        mesh.push_triangle(top, ring(0, j + 1), ring(0, j));
    }
    for r in 0..ring_count - 1 {
        for j in 0..slices {
            let a = ring(r, j);
            let b = ring(r, j + 1);
            let c = ring(r + 1, j);
            let d = ring(r + 1, j + 1);
            mesh.push_triangle(a, b, c);
            mesh.push_triangle(b, d, c);
        }
    }
    for j in 0..slices {
        mesh.push_triangle(bottom, ring(ring_count - 1, j), ring(ring_count - 1, j + 1));
    }

    mesh
}

/// Generates a closed axis-aligned box centered at the origin.
///
/// 8 vertices, 12 triangles, outward winding.
pub fn box_mesh(size: Vec3) -> TriangleMesh {
    let h = size * 0.5;
    let mut mesh = TriangleMesh::with_capacity(8, 12);
    for (sx, sy, sz) in [
        (-1.0, -1.0, -1.0),
        (1.0, -1.0, -1.0),
        (1.0, 1.0, -1.0),
        (-1.0, 1.0, -1.0),
        (-1.0, -1.0, 1.0),
        (1.0, -1.0, 1.0),
        (1.0, 1.0, 1.0),
        (-1.0, 1.0, 1.0),
    ] {
        mesh.push_vertex(Vec3::new(sx * h.x, sy * h.y, sz * h.z));
    }
    for [a, b, c] in [
        [0, 2, 1],
        [0, 3, 2],
        [4, 5, 6],
        [4, 6, 7],
        [0, 1, 5],
        [0, 5, 4],
        [3, 7, 6],
        [3, 6, 2],
        [0, 4, 7],
        [0, 7, 3],
        [1, 2, 6],
        [1, 6, 5],
    ] {
        mesh.push_triangle(a, b, c);
    }
    mesh
}

/// Evenly spaced points on a circle of `radius` around `center` in the
/// XY plane, starting on the +X axis and running counter-clockwise.
pub fn circle_points(center: Vec3, radius: Scalar, count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let angle = 2.0 * PI * i as Scalar / count as Scalar;
            center + Vec3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
        })
        .collect()
}
