//! Contact resolution results.

use pliant_types::Scalar;

/// Result of contact response.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContactResult {
    /// Number of contacts resolved.
    pub resolved_count: u32,
    /// Deepest penetration found before correction.
    pub max_penetration: Scalar,
    /// Sum of the impulse magnitudes applied (per unit mass for point pairs).
    pub total_impulse: Scalar,
}

impl ContactResult {
    /// Folds another result into this one.
    pub fn merge(&mut self, other: &ContactResult) {
        self.resolved_count += other.resolved_count;
        self.max_penetration = self.max_penetration.max(other.max_penetration);
        self.total_impulse += other.total_impulse;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.resolved_count == 0
    }
}
