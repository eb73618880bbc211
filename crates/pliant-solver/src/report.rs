//! Per-step diagnostics returned by every body step.

/// Result of a body step.
///
/// Numerical resets and degenerate springs are recovered inside the step;
/// this is where callers learn that they happened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// True when the call only accumulated time and integrated nothing.
    pub skipped: bool,
    /// Integration substeps performed.
    pub substeps: u32,
    /// Points integrated in the last substep.
    pub active_points: usize,
    /// Points reset after leaving the finite/bounded range.
    pub numerical_resets: usize,
    /// Spring evaluations skipped because the endpoints coincided.
    pub degenerate_springs: usize,
}

impl StepReport {
    /// A report for a call that did no integration.
    pub fn skipped() -> Self {
        Self {
            skipped: true,
            ..Default::default()
        }
    }

    /// Folds a substep report into this one.
    pub fn absorb(&mut self, other: StepReport) {
        self.substeps += other.substeps;
        self.active_points = other.active_points;
        self.numerical_resets += other.numerical_resets;
        self.degenerate_springs += other.degenerate_springs;
    }
}
