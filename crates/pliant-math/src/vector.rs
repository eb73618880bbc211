//! Small vector helpers shared by the integrators and resolvers.

use pliant_types::Scalar;

use crate::Vec3;

/// Returns true if every component is finite and within `±bound`.
#[inline]
pub fn is_within_bounds(p: Vec3, bound: Scalar) -> bool {
    p.is_finite() && p.abs().max_element() <= bound
}

/// Linear interpolation with `t` clamped to `[0, 1]`.
#[inline]
pub fn lerp_clamped(a: Scalar, b: Scalar, t: Scalar) -> Scalar {
    let t = t.clamp(0.0, 1.0);
    a + (b - a) * t
}

/// Arithmetic mean of a set of positions. Zero for empty input.
pub fn centroid<I>(points: I) -> Vec3
where
    I: IntoIterator<Item = Vec3>,
{
    let mut sum = Vec3::ZERO;
    let mut count = 0_usize;
    for p in points {
        sum += p;
        count += 1;
    }
    if count == 0 {
        Vec3::ZERO
    } else {
        sum / count as Scalar
    }
}
