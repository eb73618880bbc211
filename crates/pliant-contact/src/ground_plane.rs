//! Ground plane collision.
//!
//! Keeps points above a horizontal floor at `y = height` and bounces
//! downward velocity with a per-kind restitution.

use pliant_solver::{Body, SimulationBody};
use pliant_types::{PointId, Scalar};

use crate::config::GroundPlaneConfig;
use crate::response::ContactResult;

/// Ground plane collision at a fixed Y height.
#[derive(Debug, Clone)]
pub struct GroundPlane {
    pub config: GroundPlaneConfig,
}

impl GroundPlane {
    /// Creates a new ground plane at the given height.
    pub fn new(height: Scalar) -> Self {
        Self {
            config: GroundPlaneConfig::at(height),
        }
    }

    pub fn with_config(config: GroundPlaneConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn height(&self) -> Scalar {
        self.config.height
    }

    /// Restitution used for this kind of body.
    pub fn restitution_for(&self, body: &Body) -> Scalar {
        match body {
            Body::Rigid(_) => self.config.rigid_restitution,
            Body::Soft(_) => self.config.soft_restitution,
        }
    }

    /// Resolve ground contacts of a body.
    pub fn resolve(&self, body: &mut Body) -> ContactResult {
        let restitution = self.restitution_for(body);
        self.resolve_with(body, restitution)
    }

    /// Lifts every point below the plane onto it and reflects its downward
    /// velocity scaled by `restitution`.
    pub fn resolve_with(&self, body: &mut dyn SimulationBody, restitution: Scalar) -> ContactResult {
        let height = self.config.height;
        let mut result = ContactResult::default();
        let mut touched = Vec::new();

        for (i, p) in body.points_mut().iter_mut().enumerate() {
            let depth = height - p.position.y;
            if depth <= 0.0 {
                continue;
            }
            p.position.y = height;
            if p.velocity.y < 0.0 {
                let vy = p.velocity.y;
                p.velocity.y = -vy * restitution;
                result.total_impulse += (1.0 + restitution) * -vy * p.mass;
            }
            result.resolved_count += 1;
            result.max_penetration = result.max_penetration.max(depth);
            touched.push(i);
        }

        for i in touched {
            body.wake_point(PointId::from(i));
        }

        result
    }
}
