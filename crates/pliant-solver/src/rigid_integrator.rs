//! Uniform explicit integrator for rigid ring bodies.

use pliant_math::vector::is_within_bounds;
use pliant_math::Vec3;
use pliant_types::Scalar;

use crate::config::RigidConfig;
use crate::point::Point;
use crate::report::StepReport;
use crate::spring::SpringNetwork;

/// Integrates every point of a ball each step.
///
/// Force order per step: ring springs, then gravity, wind and the standing
/// external forces (all scaled by point mass), then quadratic drag.
#[derive(Debug, Clone)]
pub struct BallIntegrator {
    config: RigidConfig,
    external_forces: Vec<Vec3>,
    angular_velocity: Vec3,
    moment_of_inertia: Scalar,
}

impl BallIntegrator {
    pub fn new(config: RigidConfig, total_mass: Scalar) -> Self {
        let r = config.reference_radius;
        Self {
            moment_of_inertia: 0.4 * total_mass * r * r,
            config,
            external_forces: Vec::new(),
            angular_velocity: Vec3::ZERO,
        }
    }

    pub fn config(&self) -> &RigidConfig {
        &self.config
    }

    /// Visual spin estimate. Never feeds back into the translation.
    pub fn angular_velocity(&self) -> Vec3 {
        self.angular_velocity
    }

    pub fn moment_of_inertia(&self) -> Scalar {
        self.moment_of_inertia
    }

    pub fn external_forces(&self) -> &[Vec3] {
        &self.external_forces
    }

    pub fn add_external_force(&mut self, force: Vec3) {
        self.external_forces.push(force);
    }

    /// Removes one occurrence of `force`. Returns false if none was present.
    pub fn remove_external_force(&mut self, force: Vec3) -> bool {
        match self.external_forces.iter().position(|f| *f == force) {
            Some(i) => {
                self.external_forces.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn set_wind(&mut self, wind: Vec3) {
        self.config.environment.set_wind(wind);
    }

    /// Advances all points by `dt`.
    ///
    /// Points that leave the finite, bounded range are put back at
    /// `center + rest_offsets[i]` with zero velocity.
    pub fn integrate(
        &mut self,
        name: &str,
        points: &mut [Point],
        network: &SpringNetwork,
        center: Vec3,
        rest_offsets: &[Vec3],
        dt: Scalar,
    ) -> StepReport {
        let mut report = StepReport {
            substeps: 1,
            active_points: points.len(),
            ..Default::default()
        };

        report.degenerate_springs = network.accumulate(points);

        let cfg = &self.config;
        let gravity = cfg.environment.gravity;
        let wind = cfg.environment.wind_acceleration();
        let external: Vec3 = self.external_forces.iter().copied().sum();
        let drag_scale = 0.5 * cfg.air_density * cfg.drag_coefficient * cfg.cross_section_area();

        for (i, p) in points.iter_mut().enumerate() {
            p.force += (gravity + wind + external) * p.mass;

            let speed = p.velocity.length();
            if speed > cfg.drag_speed_threshold {
                p.force -= (p.velocity / speed) * (drag_scale * speed * speed);
            }

            let acceleration = p.force / p.mass;
            p.velocity += acceleration * dt;
            p.velocity *= cfg.damping.factor(p.velocity.length());
            p.previous_position = p.position;
            p.position += p.velocity * dt;

            let spin = (p.position - center).cross(p.velocity);
            self.angular_velocity += spin * dt / self.moment_of_inertia;
            self.angular_velocity *= cfg.angular_damping;

            if !is_within_bounds(p.position, cfg.position_bound) || !p.velocity.is_finite() {
                tracing::warn!(
                    body = name,
                    point = i,
                    position = ?p.position,
                    "point left the valid range, resetting to rest"
                );
                p.position = center + rest_offsets[i];
                p.previous_position = p.position;
                p.velocity = Vec3::ZERO;
                report.numerical_resets += 1;
            }

            p.force = Vec3::ZERO;
        }

        if !self.angular_velocity.is_finite() {
            self.angular_velocity = Vec3::ZERO;
        }

        report
    }
}
