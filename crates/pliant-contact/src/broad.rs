//! Broad phase collision detection.
//!
//! Cheap bounding-box rejection between bodies. Only pairs whose boxes
//! touch go on to the narrow phase.

use pliant_math::Aabb;
use pliant_types::{BodyId, Scalar};

/// Candidate pair from the broad phase (indices into the body list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidatePair {
    /// First body (always the smaller index).
    pub a: BodyId,
    pub b: BodyId,
}

/// Trait for broad phase collision detection.
///
/// # Implementations
/// - [`AabbBroadPhase`] — All-pairs box test
/// - [`NullBroadPhase`] — Rejects everything
pub trait BroadPhase: Send + Sync {
    /// Returns true if two boxes may contain touching geometry.
    fn overlaps(&self, a: &Aabb, b: &Aabb) -> bool;

    /// All pairs of `boxes` that pass [`BroadPhase::overlaps`].
    fn candidates(&self, boxes: &[Aabb]) -> Vec<CandidatePair> {
        let mut pairs = Vec::new();
        for i in 0..boxes.len() {
            for j in (i + 1)..boxes.len() {
                if self.overlaps(&boxes[i], &boxes[j]) {
                    pairs.push(CandidatePair {
                        a: BodyId::from(i),
                        b: BodyId::from(j),
                    });
                }
            }
        }
        pairs
    }

    /// Returns the broad phase strategy name.
    fn name(&self) -> &str;
}

/// Inclusive axis-aligned box overlap.
#[inline]
pub fn aabb_overlap(a: &Aabb, b: &Aabb) -> bool {
    a.overlaps(b)
}

/// Axis-aligned box test, optionally inflated by a margin.
#[derive(Debug, Clone, Copy, Default)]
pub struct AabbBroadPhase {
    /// Added to every side of both boxes before testing.
    pub margin: Scalar,
}

impl AabbBroadPhase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_margin(margin: Scalar) -> Self {
        Self { margin }
    }
}

impl BroadPhase for AabbBroadPhase {
    fn overlaps(&self, a: &Aabb, b: &Aabb) -> bool {
        if self.margin > 0.0 {
            aabb_overlap(&a.expanded(self.margin), &b.expanded(self.margin))
        } else {
            aabb_overlap(a, b)
        }
    }

    fn name(&self) -> &str {
        "aabb"
    }
}

/// No-op broad phase for benchmarks that don't need collision.
pub struct NullBroadPhase;

impl BroadPhase for NullBroadPhase {
    fn overlaps(&self, _a: &Aabb, _b: &Aabb) -> bool {
        false
    }

    fn name(&self) -> &str {
        "null_broad_phase"
    }
}
