//! Rigid ring bodies ("balls").
//!
//! A ball is a closed ring of equal point masses in the XY plane around its
//! center, joined by structural springs between neighbours. Collision
//! treats it as a sphere of `radius`.

use std::sync::Arc;

use pliant_material::Material;
use pliant_math::Vec3;
use pliant_mesh::generators::circle_points;
use pliant_types::{PliantError, PliantResult, PointId, Scalar};

use crate::body::{check_timestep, SimulationBody};
use crate::config::RigidConfig;
use crate::point::{mean_position, Point};
use crate::report::StepReport;
use crate::rigid_integrator::BallIntegrator;
use crate::spring::{Spring, SpringKind, SpringNetwork};

/// Smallest ring that still encloses an area.
pub const MIN_RING_POINTS: usize = 3;

/// A ball approximated by a ring of points.
#[derive(Debug, Clone)]
pub struct RigidBody {
    name: String,
    center: Vec3,
    radius: Scalar,
    total_mass: Scalar,
    points: Vec<Point>,
    network: SpringNetwork,
    material: Arc<Material>,
    /// Undeformed point positions relative to `center`.
    rest_offsets: Vec<Vec3>,
    deformation: Scalar,
    integrator: BallIntegrator,
}

impl RigidBody {
    /// Builds a ball with the default configuration.
    pub fn new(
        center: Vec3,
        radius: Scalar,
        mass: Scalar,
        material: Arc<Material>,
        point_count: usize,
    ) -> PliantResult<Self> {
        Self::with_config(center, radius, mass, material, point_count, RigidConfig::default())
    }

    pub fn with_config(
        center: Vec3,
        radius: Scalar,
        mass: Scalar,
        material: Arc<Material>,
        point_count: usize,
        config: RigidConfig,
    ) -> PliantResult<Self> {
        if point_count < MIN_RING_POINTS {
            return Err(PliantError::InvalidBody(format!(
                "a ring needs at least {} points, got {}",
                MIN_RING_POINTS, point_count
            )));
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(PliantError::InvalidBody(format!(
                "mass must be positive and finite, got {}",
                mass
            )));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(PliantError::InvalidBody(format!(
                "radius must be positive and finite, got {}",
                radius
            )));
        }
        if !center.is_finite() {
            return Err(PliantError::InvalidBody("center must be finite".into()));
        }
        material.validate()?;
        config.validate()?;

        let point_mass = mass / point_count as Scalar;
        let points: Vec<Point> = circle_points(center, radius, point_count)
            .into_iter()
            .map(|p| Point::new(p, point_mass))
            .collect();
        let rest_offsets = points.iter().map(|p| p.position - center).collect();

        let stiffness = config.spring_stiffness * material.elasticity;
        let springs = (0..point_count)
            .map(|i| {
                Spring::between(
                    &points,
                    PointId::from(i),
                    PointId::from((i + 1) % point_count),
                    stiffness,
                    0.0,
                    SpringKind::Structural,
                )
            })
            .collect();
        let network = SpringNetwork::new(point_count, springs);

        Ok(Self {
            name: format!("ball:{}", material.name),
            center,
            radius,
            total_mass: mass,
            points,
            network,
            material,
            rest_offsets,
            deformation: 0.0,
            integrator: BallIntegrator::new(config, mass),
        })
    }

    /// Renames the body (used in logs and telemetry).
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[inline]
    pub fn radius(&self) -> Scalar {
        self.radius
    }

    pub fn springs(&self) -> &SpringNetwork {
        &self.network
    }

    pub fn integrator(&self) -> &BallIntegrator {
        &self.integrator
    }

    /// Undeformed position of point `i` at the current center.
    #[inline]
    pub fn rest_position(&self, i: usize) -> Vec3 {
        self.center + self.rest_offsets[i]
    }

    /// Adds `dv` to the velocity of every point.
    pub fn add_velocity(&mut self, dv: Vec3) {
        for p in &mut self.points {
            p.velocity += dv;
        }
    }

    /// Moves every point and the center by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        for p in &mut self.points {
            p.position += offset;
        }
        self.center += offset;
    }

    /// Sets every point's velocity.
    pub fn set_velocity(&mut self, velocity: Vec3) {
        for p in &mut self.points {
            p.velocity = velocity;
        }
    }
}

impl SimulationBody for RigidBody {
    fn name(&self) -> &str {
        &self.name
    }

    fn step(&mut self, dt: Scalar) -> PliantResult<StepReport> {
        if !check_timestep(dt)? {
            return Ok(StepReport::skipped());
        }
        let report = self.integrator.integrate(
            &self.name,
            &mut self.points,
            &self.network,
            self.center,
            &self.rest_offsets,
            dt,
        );
        self.center = mean_position(&self.points);
        tracing::trace!(body = %self.name, resets = report.numerical_resets, "ball step");
        Ok(report)
    }

    fn add_external_force(&mut self, force: Vec3) {
        self.integrator.add_external_force(force);
    }

    fn remove_external_force(&mut self, force: Vec3) -> bool {
        self.integrator.remove_external_force(force)
    }

    fn set_wind(&mut self, wind: Vec3) {
        self.integrator.set_wind(wind);
    }

    fn apply_deformation(&mut self, impact: Vec3, force: Scalar) -> bool {
        let Some(deformation) = self
            .integrator
            .config()
            .deformation
            .accumulate(self.deformation, force)
        else {
            return false;
        };
        self.deformation = deformation;

        let reach = 2.0 * self.radius;
        for i in 0..self.points.len() {
            let rest = self.rest_position(i);
            let p = &mut self.points[i];
            let d = p.position.distance(impact);
            if d < reach {
                let dir = (p.position - impact).normalize_or_zero();
                p.position = rest + dir * ((1.0 - d / reach) * deformation * self.radius);
            }
        }
        tracing::debug!(body = %self.name, force, deformation, "ball deformed");
        true
    }

    fn reset_deformation(&mut self) {
        self.deformation = 0.0;
        for i in 0..self.points.len() {
            self.points[i].position = self.rest_position(i);
        }
    }

    fn deformation(&self) -> Scalar {
        self.deformation
    }

    fn center(&self) -> Vec3 {
        self.center
    }

    fn points(&self) -> &[Point] {
        &self.points
    }

    fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    fn total_mass(&self) -> Scalar {
        self.total_mass
    }

    fn material(&self) -> &Arc<Material> {
        &self.material
    }
}
