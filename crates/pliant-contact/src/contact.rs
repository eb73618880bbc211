//! Point-pair contact constraints.
//!
//! [`ContactConstraint`] describes a compliant distance constraint between
//! two points of different bodies. Constraints are gathered but not solved:
//! the point-pair resolver corrects positions directly. The `lambda`,
//! `compliance` and `damping` fields are there for a compliant solver.

use pliant_math::Vec3;
use pliant_solver::SimulationBody;
use pliant_types::constants::MIN_CONTACT_DISTANCE;
use pliant_types::{PointId, Scalar};

/// A contact between point `a` of one body and point `b` of another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactConstraint {
    pub a: PointId,
    pub b: PointId,
    /// Unit vector from `a` towards `b`.
    pub normal: Vec3,
    /// Separation the constraint tries to restore.
    pub rest_distance: Scalar,
    pub compliance: Scalar,
    pub damping: Scalar,
    /// Accumulated multiplier. Always zero when built.
    pub lambda: Scalar,
}

impl ContactConstraint {
    /// Signed constraint error `distance − rest_distance` for the given
    /// endpoint positions. Negative while the points are too close.
    pub fn error(&self, pa: Vec3, pb: Vec3) -> Scalar {
        pa.distance(pb) - self.rest_distance
    }
}

/// Collects a constraint for every point pair closer than `threshold`.
///
/// Pairs closer than [`MIN_CONTACT_DISTANCE`] have no usable normal and are
/// left out.
pub fn find_contact_constraints(
    a: &dyn SimulationBody,
    b: &dyn SimulationBody,
    threshold: Scalar,
    compliance: Scalar,
    damping: Scalar,
) -> Vec<ContactConstraint> {
    let mut constraints = Vec::new();
    for (i, pa) in a.points().iter().enumerate() {
        for (j, pb) in b.points().iter().enumerate() {
            let delta = pb.position - pa.position;
            let dist = delta.length();
            if dist < threshold && dist > MIN_CONTACT_DISTANCE {
                constraints.push(ContactConstraint {
                    a: PointId::from(i),
                    b: PointId::from(j),
                    normal: delta / dist,
                    rest_distance: threshold,
                    compliance,
                    damping,
                    lambda: 0.0,
                });
            }
        }
    }
    constraints
}
