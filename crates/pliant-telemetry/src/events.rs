//! Simulation event types.
//!
//! Events are lightweight value types emitted once per step or per
//! noteworthy occurrence. They carry just enough data for monitoring.

use serde::{Deserialize, Serialize};

/// A simulation event emitted by the runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Step number (0-indexed).
    pub step: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Which resolver produced a contact event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactKind {
    /// Sphere-sphere impulse between two balls.
    Ball,
    /// Point-pair correction between deformable bodies.
    PointPair,
    /// Ground plane.
    Ground,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Step started.
    StepBegin {
        /// Simulated time at the start of the step (seconds).
        sim_time: f64,
    },

    /// Step completed.
    StepEnd {
        /// Wall-clock time of the whole step (seconds).
        wall_time: f64,
    },

    /// Points of a body were reset after a blow-up.
    NumericalReset { body: String, count: u32 },

    /// Contacts resolved during the step.
    Contact {
        kind: ContactKind,
        /// Number of contacts resolved.
        resolved: u32,
        /// Deepest penetration before correction.
        max_penetration: f64,
    },

    /// A body accumulated deformation.
    Deformation { body: String, amount: f64 },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given step.
    pub fn new(step: u32, kind: EventKind) -> Self {
        Self { step, kind }
    }

    /// Short event name used in logs.
    pub fn name(&self) -> &'static str {
        match self.kind {
            EventKind::StepBegin { .. } => "step_begin",
            EventKind::StepEnd { .. } => "step_end",
            EventKind::NumericalReset { .. } => "numerical_reset",
            EventKind::Contact { .. } => "contact",
            EventKind::Deformation { .. } => "deformation",
            EventKind::Custom { .. } => "custom",
        }
    }
}
