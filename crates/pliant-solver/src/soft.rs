//! Soft bodies built from triangle meshes.
//!
//! Every unique mesh edge becomes a structural spring. Every interior edge
//! (shared by exactly two triangles) adds a bending spring between its two
//! wing vertices unless those vertices are already connected. A
//! shape-retention force pulls each point back to its rest position.

use std::collections::HashSet;
use std::sync::Arc;

use pliant_material::Material;
use pliant_math::vector::centroid;
use pliant_math::Vec3;
use pliant_mesh::{Topology, TriangleMesh};
use pliant_types::{PliantError, PliantResult, PointId, Scalar, SpringId};

use crate::body::{check_timestep, SimulationBody};
use crate::config::SoftConfig;
use crate::point::{mean_position, Point};
use crate::report::StepReport;
use crate::soft_integrator::SoftIntegrator;
use crate::spatial_hash::SpatialHash;
use crate::spring::{Spring, SpringKind, SpringNetwork};

/// A deformable body made of mesh-derived springs.
#[derive(Debug, Clone)]
pub struct SoftBody {
    name: String,
    points: Vec<Point>,
    network: SpringNetwork,
    /// Absolute rest positions. Shape retention pulls towards these.
    rest_positions: Vec<Vec3>,
    bounding_radius: Scalar,
    average_edge_length: Scalar,
    center: Vec3,
    total_mass: Scalar,
    material: Arc<Material>,
    deformation: Scalar,
    is_round: bool,
    spatial_hash: Option<SpatialHash>,
    /// Points moved since the hash was last rebuilt.
    hash_stale: bool,
    integrator: SoftIntegrator,
    /// Time passed to `step` but not yet integrated.
    pending_time: Scalar,
}

impl SoftBody {
    /// Builds a soft body with the default configuration.
    pub fn new(
        mesh: &TriangleMesh,
        mass: Scalar,
        material: Arc<Material>,
        is_round: bool,
    ) -> PliantResult<Self> {
        Self::with_config(mesh, mass, material, is_round, SoftConfig::default())
    }

    /// Builds a soft body from world-space positions and a flat index buffer.
    pub fn from_raw(
        positions: &[Vec3],
        indices: &[u32],
        mass: Scalar,
        material: Arc<Material>,
        is_round: bool,
    ) -> PliantResult<Self> {
        let mesh = TriangleMesh::from_positions(positions, indices)?;
        Self::new(&mesh, mass, material, is_round)
    }

    pub fn with_config(
        mesh: &TriangleMesh,
        mass: Scalar,
        material: Arc<Material>,
        is_round: bool,
        config: SoftConfig,
    ) -> PliantResult<Self> {
        mesh.validate()?;
        if !(mass.is_finite() && mass > 0.0) {
            return Err(PliantError::InvalidBody(format!(
                "mass must be positive and finite, got {}",
                mass
            )));
        }
        material.validate()?;
        config.validate()?;

        let n = mesh.vertex_count();
        let point_mass = mass / n as Scalar;
        let points: Vec<Point> = mesh.positions().map(|p| Point::new(p, point_mass)).collect();
        let rest_positions: Vec<Vec3> = points.iter().map(|p| p.position).collect();

        let (network, average_edge_length) = build_springs(mesh, &points, &material, &config);

        let rest_center = centroid(rest_positions.iter().copied());
        let bounding_radius = rest_positions
            .iter()
            .map(|p| p.distance(rest_center))
            .fold(0.0, Scalar::max);

        let spatial_hash = config
            .use_spatial_hash
            .then(|| SpatialHash::new(config.hash_cell_size));

        tracing::debug!(
            points = n,
            springs = network.len(),
            bending = network
                .springs()
                .iter()
                .filter(|s| s.kind == SpringKind::Bending)
                .count(),
            "soft body built"
        );

        Ok(Self {
            name: format!("soft:{}", material.name),
            integrator: SoftIntegrator::new(config, n),
            points,
            network,
            rest_positions,
            bounding_radius,
            average_edge_length,
            center: rest_center,
            total_mass: mass,
            material,
            deformation: 0.0,
            is_round,
            spatial_hash,
            hash_stale: true,
            pending_time: 0.0,
        })
    }

    /// Renames the body (used in logs and telemetry).
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn springs(&self) -> &SpringNetwork {
        &self.network
    }

    pub fn rest_positions(&self) -> &[Vec3] {
        &self.rest_positions
    }

    pub fn bounding_radius(&self) -> Scalar {
        self.bounding_radius
    }

    pub fn average_edge_length(&self) -> Scalar {
        self.average_edge_length
    }

    pub fn is_round(&self) -> bool {
        self.is_round
    }

    /// Spatial hash as of the last rebuild, if enabled. May lag behind
    /// point moves made by contact resolution.
    pub fn spatial_hash(&self) -> Option<&SpatialHash> {
        self.spatial_hash.as_ref()
    }

    pub fn integrator(&self) -> &SoftIntegrator {
        &self.integrator
    }

    /// Time accumulated towards the next update.
    pub fn pending_time(&self) -> Scalar {
        self.pending_time
    }

    pub fn is_point_active(&self, id: PointId) -> bool {
        self.integrator.is_active(id)
    }

    pub fn active_point_count(&self) -> usize {
        self.integrator.active_count()
    }

    pub fn active_spring_count(&self) -> usize {
        self.network.active_count()
    }

    /// Absolute relative stretch `|length − rest| / rest` of a spring.
    pub fn spring_stretch(&self, id: SpringId) -> Option<Scalar> {
        self.network
            .get(id)
            .map(|s| s.stretch(&self.points).abs())
    }

    /// Enables or disables a spring. Returns false for an unknown id.
    pub fn set_spring_active(&mut self, id: SpringId, active: bool) -> bool {
        self.network.set_active(id, active)
    }

    /// Gives every point the same velocity (launch speed).
    pub fn set_velocity(&mut self, velocity: Vec3) {
        for p in &mut self.points {
            p.velocity = velocity;
        }
        self.integrator.wake_all();
    }

    pub fn set_shape_retention(&mut self, stiffness: Scalar) {
        self.integrator.set_shape_retention(stiffness);
        self.integrator.wake_all();
    }

    pub fn wake_all(&mut self) {
        self.integrator.wake_all();
    }

    /// Radius around an impact inside which points are displaced.
    pub fn deformation_radius(&self) -> Scalar {
        let cfg = self.integrator.config();
        if self.is_round {
            self.bounding_radius * cfg.round_falloff_scale
        } else {
            self.average_edge_length * cfg.edge_falloff_scale
        }
    }
}

/// Structural springs per unique edge, then bending springs across interior
/// edges. Returns the network and the mean structural rest length.
fn build_springs(
    mesh: &TriangleMesh,
    points: &[Point],
    material: &Material,
    config: &SoftConfig,
) -> (SpringNetwork, Scalar) {
    let topology = Topology::build(mesh);
    let structural_k = config.structural_stiffness * material.elasticity;
    let bending_k = config.bending_stiffness * material.elasticity;

    let mut connected: HashSet<(u32, u32)> = HashSet::with_capacity(topology.edges.len());
    let mut springs = Vec::with_capacity(topology.edges.len() + topology.interior_edges.len());
    let mut total_length = 0.0;

    for &[a, b] in &topology.edges {
        connected.insert((a, b));
        let spring = Spring::between(
            points,
            PointId(a),
            PointId(b),
            structural_k,
            config.spring_damping,
            SpringKind::Structural,
        );
        total_length += spring.rest_length();
        springs.push(spring);
    }

    let structural_count = springs.len();
    let average_edge_length = if structural_count > 0 {
        total_length / structural_count as Scalar
    } else {
        1.0
    };

    for edge in &topology.interior_edges {
        let key = if edge.wing_a < edge.wing_b {
            (edge.wing_a, edge.wing_b)
        } else {
            (edge.wing_b, edge.wing_a)
        };
        if !connected.insert(key) {
            continue;
        }
        springs.push(Spring::between(
            points,
            PointId(key.0),
            PointId(key.1),
            bending_k,
            config.spring_damping,
            SpringKind::Bending,
        ));
    }

    (SpringNetwork::new(points.len(), springs), average_edge_length)
}

impl SimulationBody for SoftBody {
    fn name(&self) -> &str {
        &self.name
    }

    fn step(&mut self, dt: Scalar) -> PliantResult<StepReport> {
        if !check_timestep(dt)? {
            return Ok(StepReport::skipped());
        }
        self.pending_time += dt;
        if self.pending_time < self.integrator.config().update_interval {
            return Ok(StepReport::skipped());
        }
        let total = std::mem::take(&mut self.pending_time);

        let iterations = self.integrator.config().max_iterations.max(1);
        let h = total / iterations as Scalar;
        let mut report = StepReport::default();
        for _ in 0..iterations {
            let sub = self.integrator.substep(
                &self.name,
                &mut self.points,
                &self.network,
                &self.rest_positions,
                h,
            );
            report.absorb(sub);
        }

        self.center = mean_position(&self.points);
        if let Some(hash) = self.spatial_hash.as_mut() {
            hash.rebuild(&self.points);
        }
        self.hash_stale = false;
        tracing::trace!(
            body = %self.name,
            active = report.active_points,
            resets = report.numerical_resets,
            "soft step"
        );
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
        self.hash_stale = true;

        let radius = self.deformation_radius();
        for i in 0..self.points.len() {
            let p = &mut self.points[i];
            let d = p.position.distance(impact);
            if d < radius {
                let t = 1.0 - d / radius;
                let dir = (p.position - impact).normalize_or_zero();
                p.position = self.rest_positions[i] + dir * (t * t * deformation * radius * 0.5);
                self.integrator.wake_point(PointId::from(i));
            }
        }
        tracing::debug!(body = %self.name, force, deformation, radius, "soft body deformed");
        true
    }

    fn reset_deformation(&mut self) {
        self.deformation = 0.0;
        self.hash_stale = true;
        for (p, rest) in self.points.iter_mut().zip(&self.rest_positions) {
            p.position = *rest;
        }
        self.integrator.wake_all();
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
        self.hash_stale = true;
        &mut self.points
    }

    fn total_mass(&self) -> Scalar {
        self.total_mass
    }

    fn material(&self) -> &Arc<Material> {
        &self.material
    }

    fn wake_point(&mut self, id: PointId) {
        self.integrator.wake_point(id);
    }

    fn refreshed_spatial_hash(&mut self) -> Option<&SpatialHash> {
        let hash = self.spatial_hash.as_mut()?;
        if self.hash_stale {
            hash.rebuild(&self.points);
            self.hash_stale = false;
        }
        Some(hash)
    }
}
