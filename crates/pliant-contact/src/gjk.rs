//! Boolean GJK overlap test on convex point sets.
//!
//! Works on the Minkowski difference `A − B`: the hulls intersect iff the
//! origin lies inside it. The simplex is kept newest-first, so `points[0]`
//! is always the vertex just added.

use pliant_math::Vec3;
use pliant_types::constants::EPSILON;
use pliant_types::Scalar;

use crate::narrow::NarrowPhase;

/// Search directions shorter than this count as "origin on the simplex".
const DIRECTION_EPSILON: Scalar = EPSILON * EPSILON;

/// GJK narrow phase.
#[derive(Debug, Clone, Copy)]
pub struct Gjk {
    /// Iteration cap. Running out counts as no intersection.
    pub max_iterations: u32,
}

impl Default for Gjk {
    fn default() -> Self {
        Self { max_iterations: 20 }
    }
}

impl Gjk {
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl NarrowPhase for Gjk {
    fn intersects(&self, hull_a: &[Vec3], hull_b: &[Vec3]) -> bool {
        gjk_intersects(hull_a, hull_b, self.max_iterations)
    }

    fn name(&self) -> &str {
        "gjk"
    }
}

/// Vertex of `verts` farthest along `dir`. `verts` must not be empty.
fn farthest(verts: &[Vec3], dir: Vec3) -> Vec3 {
    let mut best = verts[0];
    let mut best_dot = best.dot(dir);
    for &v in &verts[1..] {
        let d = v.dot(dir);
        if d > best_dot {
            best_dot = d;
            best = v;
        }
    }
    best
}

/// Support point of the Minkowski difference `A − B` along `dir`.
#[inline]
fn support(a: &[Vec3], b: &[Vec3], dir: Vec3) -> Vec3 {
    farthest(a, dir) - farthest(b, -dir)
}

/// `(a × b) × c`
#[inline]
fn triple(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    a.cross(b).cross(c)
}

#[derive(Debug, Clone, Copy)]
struct Simplex {
    points: [Vec3; 4],
    len: usize,
}

impl Simplex {
    fn new(first: Vec3) -> Self {
        Self {
            points: [first, Vec3::ZERO, Vec3::ZERO, Vec3::ZERO],
            len: 1,
        }
    }

    fn push_front(&mut self, p: Vec3) {
        self.points.copy_within(0..3, 1);
        self.points[0] = p;
        self.len = (self.len + 1).min(4);
    }

    fn set(&mut self, pts: &[Vec3]) {
        self.points[..pts.len()].copy_from_slice(pts);
        self.len = pts.len();
    }
}

/// Returns true if the convex hulls of `a` and `b` intersect.
pub fn gjk_intersects(a: &[Vec3], b: &[Vec3], max_iterations: u32) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    let mut dir = a[0] - b[0];
    if dir.length_squared() < DIRECTION_EPSILON {
        dir = Vec3::X;
    }

    let first = support(a, b, dir);
    let mut simplex = Simplex::new(first);
    dir = -first;

    for _ in 0..max_iterations {
        if dir.length_squared() < DIRECTION_EPSILON {
            // The origin lies on the current simplex.
            return true;
        }
        let p = support(a, b, dir);
        if p.dot(dir) < 0.0 {
            return false;
        }
        simplex.push_front(p);
        if evolve(&mut simplex, &mut dir) {
            return true;
        }
    }
    false
}

/// Reduces the simplex to the feature closest to the origin and updates the
/// search direction. Returns true once the origin is enclosed.
fn evolve(simplex: &mut Simplex, dir: &mut Vec3) -> bool {
    match simplex.len {
        2 => line(simplex, dir),
        3 => triangle(simplex, dir),
        _ => tetrahedron(simplex, dir),
    }
}

fn line(simplex: &mut Simplex, dir: &mut Vec3) -> bool {
    let [a, b, ..] = simplex.points;
    let ab = b - a;
    let ao = -a;
    if ab.dot(ao) > 0.0 {
        *dir = triple(ab, ao, ab);
        if dir.length_squared() < DIRECTION_EPSILON {
            return true;
        }
    } else {
        simplex.set(&[a]);
        *dir = ao;
    }
    false
}

fn triangle(simplex: &mut Simplex, dir: &mut Vec3) -> bool {
    let [a, b, c, _] = simplex.points;
    let ab = b - a;
    let ac = c - a;
    let ao = -a;
    let abc = ab.cross(ac);

    if abc.cross(ac).dot(ao) > 0.0 {
        if ac.dot(ao) > 0.0 {
            simplex.set(&[a, c]);
            *dir = triple(ac, ao, ac);
            return dir.length_squared() < DIRECTION_EPSILON;
        }
        simplex.set(&[a, b]);
        return line(simplex, dir);
    }

    if ab.cross(abc).dot(ao) > 0.0 {
        simplex.set(&[a, b]);
        return line(simplex, dir);
    }

    let side = abc.dot(ao);
    if side.abs() < EPSILON * abc.length().max(1.0) {
        // Origin in the triangle's plane and inside its edges.
        return true;
    }
    if side > 0.0 {
        *dir = abc;
    } else {
        // Keep (b - a) × (c - a) pointing at the origin.
        simplex.set(&[a, c, b]);
        *dir = -abc;
    }
    false
}

fn tetrahedron(simplex: &mut Simplex, dir: &mut Vec3) -> bool {
    let [a, b, c, d] = simplex.points;
    let ab = b - a;
    let ac = c - a;
    let ad = d - a;
    let ao = -a;

    // With the triangle case's winding these normals point outward.
    let abc = ab.cross(ac);
    let acd = ac.cross(ad);
    let adb = ad.cross(ab);

    if abc.dot(ao) > 0.0 {
        simplex.set(&[a, b, c]);
        return triangle(simplex, dir);
    }
    if acd.dot(ao) > 0.0 {
        simplex.set(&[a, c, d]);
        return triangle(simplex, dir);
    }
    if adb.dot(ao) > 0.0 {
        simplex.set(&[a, d, b]);
        return triangle(simplex, dir);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube(center: Vec3, half: Scalar) -> Vec<Vec3> {
        let mut pts = Vec::new();
        for x in [-1.0, 1.0] {
            for y in [-1.0, 1.0] {
                for z in [-1.0, 1.0] {
                    pts.push(center + Vec3::new(x, y, z) * half);
                }
            }
        }
        pts
    }

    #[test]
    fn support_is_extreme_difference() {
        let a = cube(Vec3::ZERO, 1.0);
        let b = cube(Vec3::new(5.0, 0.0, 0.0), 1.0);
        let s = support(&a, &b, Vec3::X);
        assert!((s.x - (1.0 - 4.0)).abs() < 1e-12);
    }

    #[test]
    fn line_case_points_towards_origin() {
        let mut simplex = Simplex::new(Vec3::new(-1.0, 1.0, 0.0));
        simplex.push_front(Vec3::new(1.0, 1.0, 0.0));
        let mut dir = Vec3::ZERO;
        assert!(!evolve(&mut simplex, &mut dir));
        assert_eq!(simplex.len, 2);
        assert!(dir.normalize().dot(Vec3::NEG_Y) > 0.999);
    }

    #[test]
    fn line_through_origin_is_contact() {
        let mut simplex = Simplex::new(Vec3::new(-1.0, 0.0, 0.0));
        simplex.push_front(Vec3::new(1.0, 0.0, 0.0));
        let mut dir = Vec3::ZERO;
        assert!(evolve(&mut simplex, &mut dir));
    }

    #[test]
    fn triangle_case_faces_origin() {
        let mut simplex = Simplex::new(Vec3::new(-1.0, -1.0, 1.0));
        simplex.push_front(Vec3::new(1.0, -1.0, 1.0));
        simplex.push_front(Vec3::new(0.0, 1.0, 1.0));
        let mut dir = Vec3::ZERO;
        assert!(!evolve(&mut simplex, &mut dir));
        assert_eq!(simplex.len, 3);
        assert!(dir.dot(Vec3::NEG_Z) > 0.0);
        let [a, b, c, _] = simplex.points;
        assert!((b - a).cross(c - a).dot(-a) > 0.0);
    }

    #[test]
    fn tetrahedron_enclosing_origin() {
        let mut simplex = Simplex::new(Vec3::new(1.0, -1.0, -1.0));
        simplex.push_front(Vec3::new(-1.0, -1.0, -1.0));
        simplex.push_front(Vec3::new(0.0, 1.0, -1.0));
        let mut dir = Vec3::ZERO;
        // Orient the base so the normal faces the origin, as the solver does.
        assert!(!evolve(&mut simplex, &mut dir));
        simplex.push_front(Vec3::new(0.0, 0.0, 2.0));
        assert!(evolve(&mut simplex, &mut dir));
    }

    #[test]
    fn overlapping_cubes() {
        let a = cube(Vec3::ZERO, 1.0);
        let b = cube(Vec3::new(1.5, 0.5, 0.2), 1.0);
        assert!(gjk_intersects(&a, &b, 20));
        assert!(gjk_intersects(&b, &a, 20));
    }

    #[test]
    fn separated_cubes() {
        let a = cube(Vec3::ZERO, 1.0);
        let b = cube(Vec3::new(2.5, 0.0, 0.0), 1.0);
        assert!(!gjk_intersects(&a, &b, 20));
    }

    #[test]
    fn identical_sets_intersect() {
        let a = cube(Vec3::new(3.0, 2.0, 1.0), 0.5);
        assert!(gjk_intersects(&a, &a, 20));
    }

    #[test]
    fn empty_hull_never_intersects() {
        let a = cube(Vec3::ZERO, 1.0);
        assert!(!gjk_intersects(&a, &[], 20));
        assert!(!gjk_intersects(&[], &a, 20));
    }
}
