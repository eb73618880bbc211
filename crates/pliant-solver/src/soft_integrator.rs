//! Soft-body integrator with sleeping points.
//!
//! Points that are both slow and close to their rest position are put to
//! sleep by a periodic sweep and skipped entirely until the next sweep or an
//! explicit wake-up. A point woken between two sweeps stays awake through
//! the next one, so it integrates for at least one full sweep interval.

use pliant_math::vector::is_within_bounds;
use pliant_math::Vec3;
use pliant_types::{PointId, Scalar};

use crate::config::SoftConfig;
use crate::point::Point;
use crate::report::StepReport;
use crate::spring::SpringNetwork;

#[derive(Debug, Clone)]
pub struct SoftIntegrator {
    config: SoftConfig,
    external_forces: Vec<Vec3>,
    active: Vec<bool>,
    /// Woken since the last sweep.
    woken: Vec<bool>,
    /// Simulated time since the last sleep sweep.
    since_sweep: Scalar,
}

impl SoftIntegrator {
    /// All points start awake.
    pub fn new(config: SoftConfig, point_count: usize) -> Self {
        Self {
            config,
            external_forces: Vec::new(),
            active: vec![true; point_count],
            woken: vec![false; point_count],
            since_sweep: 0.0,
        }
    }

    pub fn config(&self) -> &SoftConfig {
        &self.config
    }

    pub fn set_shape_retention(&mut self, stiffness: Scalar) {
        self.config.shape_retention = stiffness.max(0.0);
    }

    pub fn set_wind(&mut self, wind: Vec3) {
        self.config.environment.set_wind(wind);
        self.wake_all();
    }

    pub fn external_forces(&self) -> &[Vec3] {
        &self.external_forces
    }

    pub fn add_external_force(&mut self, force: Vec3) {
        self.external_forces.push(force);
        self.wake_all();
    }

    pub fn remove_external_force(&mut self, force: Vec3) -> bool {
        let Some(i) = self.external_forces.iter().position(|f| *f == force) else {
            return false;
        };
        self.external_forces.remove(i);
        self.wake_all();
        true
    }

    #[inline]
    pub fn is_active(&self, id: PointId) -> bool {
        self.active.get(id.index()).copied().unwrap_or(false)
    }

    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }

    pub fn wake_point(&mut self, id: PointId) {
        let i = id.index();
        if i < self.active.len() {
            self.active[i] = true;
            self.woken[i] = true;
        }
    }

    pub fn wake_all(&mut self) {
        self.active.fill(true);
        self.woken.fill(true);
    }

    /// Recomputes every sleep flag from the current state. Points woken
    /// since the previous sweep are kept awake.
    pub fn sweep(&mut self, points: &[Point], rest_positions: &[Vec3]) {
        let cfg = &self.config;
        for (i, p) in points.iter().enumerate() {
            let stable = p.velocity.length() < cfg.sleep_velocity
                && p.position.distance(rest_positions[i]) < cfg.sleep_displacement;
            self.active[i] = self.woken[i] || !stable;
        }
        self.woken.fill(false);
        self.since_sweep = 0.0;
    }

    /// One integration substep of length `dt`.
    pub fn substep(
        &mut self,
        name: &str,
        points: &mut [Point],
        network: &SpringNetwork,
        rest_positions: &[Vec3],
        dt: Scalar,
    ) -> StepReport {
        self.since_sweep += dt;
        if self.since_sweep > self.config.stability_check_interval {
            self.sweep(points, rest_positions);
        }

        let mut report = StepReport {
            substeps: 1,
            ..Default::default()
        };

        // Spring forces read positions from before this substep, so they
        // are gathered for every awake point before any point moves.
        let active_ids: Vec<PointId> = (0..points.len())
            .filter(|&i| self.active[i])
            .map(PointId::from)
            .collect();
        let mut spring_forces = Vec::with_capacity(active_ids.len());
        for &id in &active_ids {
            let (force, degenerate) = network.force_on_counted(id, points);
            report.degenerate_springs += degenerate;
            spring_forces.push(force);
        }

        let cfg = &self.config;
        let gravity = cfg.environment.gravity;
        let wind = cfg.environment.wind_acceleration();
        let external: Vec3 = self.external_forces.iter().copied().sum();

        for (&id, spring_force) in active_ids.iter().zip(spring_forces) {
            let i = id.index();
            let p = &mut points[i];
            report.active_points += 1;

            let mut force = spring_force + p.force;
            force += (wind + gravity + external) * p.mass;
            force += (rest_positions[i] - p.position) * cfg.shape_retention;
            force -= p.velocity * (cfg.air_resistance * p.mass);

            p.velocity += force / p.mass * dt;
            p.velocity *= cfg.damping.factor(p.velocity.length());
            p.previous_position = p.position;
            p.position += p.velocity * dt;
            p.force = Vec3::ZERO;

            if !is_within_bounds(p.position, cfg.position_bound) || !p.velocity.is_finite() {
                tracing::warn!(
                    body = name,
                    point = i,
                    position = ?p.position,
                    "point left the valid range, resetting to rest"
                );
                p.position = rest_positions[i];
                p.previous_position = p.position;
                p.velocity = Vec3::ZERO;
                self.active[i] = false;
                self.woken[i] = false;
                report.numerical_resets += 1;
            }
        }

        if report.degenerate_springs > 0 {
            tracing::debug!(body = name, skipped = report.degenerate_springs, "degenerate springs");
        }

        report
    }
}
