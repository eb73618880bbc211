//! Narrow phase collision detection trait.
//!
//! Confirms broad phase candidates with an exact overlap test between the
//! approximate convex hulls of two bodies.

use pliant_math::Vec3;

/// Trait for narrow phase collision detection.
///
/// # Implementations
/// - [`Gjk`](crate::gjk::Gjk) — Boolean GJK on point hulls
/// - [`NullNarrowPhase`] — Never reports overlap
pub trait NarrowPhase: Send + Sync {
    /// Returns true if the convex hulls of the two point sets intersect.
    /// Touching counts as intersecting. An empty set never intersects.
    fn intersects(&self, hull_a: &[Vec3], hull_b: &[Vec3]) -> bool;

    /// Returns the narrow phase strategy name.
    fn name(&self) -> &str;
}

/// No-op narrow phase for benchmarks without collision.
pub struct NullNarrowPhase;

impl NarrowPhase for NullNarrowPhase {
    fn intersects(&self, _hull_a: &[Vec3], _hull_b: &[Vec3]) -> bool {
        false
    }

    fn name(&self) -> &str {
        "null_narrow_phase"
    }
}
