//! Point masses.

use pliant_math::Vec3;
use pliant_types::Scalar;

/// A mass-bearing particle owned by exactly one body.
///
/// `force` is a transient accumulator: it is zero before and after every
/// integration call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub position: Vec3,
    /// Position at the start of the last integration step.
    pub previous_position: Vec3,
    pub velocity: Vec3,
    pub force: Vec3,
    pub mass: Scalar,
}

impl Point {
    /// A point at rest.
    pub fn new(position: Vec3, mass: Scalar) -> Self {
        Self {
            position,
            previous_position: position,
            velocity: Vec3::ZERO,
            force: Vec3::ZERO,
            mass,
        }
    }

    /// Kinetic energy `½·m·|v|²`.
    #[inline]
    pub fn kinetic_energy(&self) -> Scalar {
        0.5 * self.mass * self.velocity.length_squared()
    }
}

/// Mean velocity of a set of points. Zero for an empty set.
pub fn average_velocity(points: &[Point]) -> Vec3 {
    if points.is_empty() {
        return Vec3::ZERO;
    }
    points.iter().map(|p| p.velocity).sum::<Vec3>() / points.len() as Scalar
}

/// Mean position of a set of points. Zero for an empty set.
pub fn mean_position(points: &[Point]) -> Vec3 {
    pliant_math::vector::centroid(points.iter().map(|p| p.position))
}
