//! Springs and the per-body spring network.
//!
//! Springs reference their endpoints by [`PointId`] into the owning body's
//! point array.

use pliant_math::Vec3;
use pliant_types::constants::MIN_SPRING_LENGTH;
use pliant_types::{PointId, Scalar, SpringId};

use crate::point::Point;

/// Origin of a spring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpringKind {
    /// Along a mesh edge or ring segment.
    Structural,
    /// Across two triangles sharing an edge, between the wing vertices.
    Bending,
}

/// A damped Hooke spring between two points of the same body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub a: PointId,
    pub b: PointId,
    rest_length: Scalar,
    pub stiffness: Scalar,
    pub damping: Scalar,
    pub is_active: bool,
    pub kind: SpringKind,
}

impl Spring {
    /// Creates a spring whose rest length is the current separation of
    /// its endpoints.
    pub fn between(
        points: &[Point],
        a: PointId,
        b: PointId,
        stiffness: Scalar,
        damping: Scalar,
        kind: SpringKind,
    ) -> Self {
        let rest_length = points[a.index()]
            .position
            .distance(points[b.index()].position);
        Self {
            a,
            b,
            rest_length,
            stiffness,
            damping,
            is_active: true,
            kind,
        }
    }

    /// Length at which the spring exerts no force. Fixed at construction.
    #[inline]
    pub fn rest_length(&self) -> Scalar {
        self.rest_length
    }

    /// Current endpoint separation.
    #[inline]
    pub fn length(&self, points: &[Point]) -> Scalar {
        points[self.a.index()]
            .position
            .distance(points[self.b.index()].position)
    }

    /// Relative elongation `(length − rest) / rest`. Zero for a zero rest length.
    pub fn stretch(&self, points: &[Point]) -> Scalar {
        if self.rest_length <= 0.0 {
            return 0.0;
        }
        (self.length(points) - self.rest_length) / self.rest_length
    }

    /// Force the spring exerts on endpoint `a`; `b` receives the negation.
    ///
    /// Returns `None` when the spring is inactive or its endpoints are
    /// closer than [`MIN_SPRING_LENGTH`], where the axis is undefined.
    pub fn force_on_a(&self, points: &[Point]) -> Option<Vec3> {
        if !self.is_active {
            return None;
        }
        let pa = &points[self.a.index()];
        let pb = &points[self.b.index()];
        let delta = pb.position - pa.position;
        let dist = delta.length();
        if dist < MIN_SPRING_LENGTH {
            return None;
        }
        let axis = delta / dist;
        let hooke = axis * (self.stiffness * (dist - self.rest_length));
        let damping = axis * ((pb.velocity - pa.velocity).dot(axis) * self.damping);
        Some(hooke + damping)
    }
}

/// All springs of a body plus the point → incident springs map.
#[derive(Debug, Clone, Default)]
pub struct SpringNetwork {
    springs: Vec<Spring>,
    point_springs: Vec<Vec<SpringId>>,
}

impl SpringNetwork {
    /// Builds the network for `point_count` points. The incidence map is
    /// built once here and never changes.
    pub fn new(point_count: usize, springs: Vec<Spring>) -> Self {
        let mut point_springs = vec![Vec::new(); point_count];
        for (i, spring) in springs.iter().enumerate() {
            point_springs[spring.a.index()].push(SpringId::from(i));
            point_springs[spring.b.index()].push(SpringId::from(i));
        }
        Self {
            springs,
            point_springs,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.springs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.springs.is_empty()
    }

    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    pub fn get(&self, id: SpringId) -> Option<&Spring> {
        self.springs.get(id.index())
    }

    /// Enables or disables a spring. Returns false for an unknown id.
    pub fn set_active(&mut self, id: SpringId, active: bool) -> bool {
        match self.springs.get_mut(id.index()) {
            Some(spring) => {
                spring.is_active = active;
                true
            }
            None => false,
        }
    }

    /// Springs touching point `id`.
    pub fn incident(&self, id: PointId) -> &[SpringId] {
        self.point_springs
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of springs with `is_active` set.
    pub fn active_count(&self) -> usize {
        self.springs.iter().filter(|s| s.is_active).count()
    }

    /// Sum of the spring forces acting on point `id`.
    pub fn force_on(&self, id: PointId, points: &[Point]) -> Vec3 {
        self.force_on_counted(id, points).0
    }

    /// Like [`force_on`](Self::force_on), also returning how many active
    /// incident springs were too short to evaluate.
    pub fn force_on_counted(&self, id: PointId, points: &[Point]) -> (Vec3, usize) {
        let mut total = Vec3::ZERO;
        let mut degenerate = 0;
        for &sid in self.incident(id) {
            let spring = &self.springs[sid.index()];
            if !spring.is_active {
                continue;
            }
            match spring.force_on_a(points) {
                Some(f) if spring.a == id => total += f,
                Some(f) => total -= f,
                None => degenerate += 1,
            }
        }
        (total, degenerate)
    }

    /// Adds every spring force to the endpoints' accumulators.
    ///
    /// Returns the number of degenerate springs skipped.
    pub fn accumulate(&self, points: &mut [Point]) -> usize {
        let mut skipped = 0;
        for spring in &self.springs {
            if !spring.is_active {
                continue;
            }
            match spring.force_on_a(points) {
                Some(f) => {
                    points[spring.a.index()].force += f;
                    points[spring.b.index()].force -= f;
                }
                None => skipped += 1,
            }
        }
        skipped
    }
}
