//! The capability set shared by every simulated body.
//!
//! Collision code works against [`SimulationBody`] where it can and
//! dispatches on [`Body`] where the pair of kinds matters.

use std::sync::Arc;

use pliant_material::Material;
use pliant_math::{Aabb, Vec3};
use pliant_types::{PliantError, PliantResult, PointId, Scalar};

use crate::point::{average_velocity, mean_position, Point};
use crate::report::StepReport;
use crate::rigid::RigidBody;
use crate::soft::SoftBody;
use crate::spatial_hash::SpatialHash;

/// Fraction of the largest centroid distance a point must exceed to be
/// part of the approximate hull.
pub const HULL_SHELL_FRACTION: Scalar = 0.95;

/// Trait implemented by every steppable body.
///
/// ```text
/// body.add_external_force(f);
/// loop {
///     body.step(dt)?;
///     pipeline.resolve_pair(&mut a, &mut b, dt);
/// }
/// ```
pub trait SimulationBody: Send {
    /// Name used in logs and telemetry.
    fn name(&self) -> &str;

    /// Advances the body by `dt` seconds.
    ///
    /// Fails only for a negative or non-finite `dt`. A zero `dt` is a no-op.
    fn step(&mut self, dt: Scalar) -> PliantResult<StepReport>;

    /// Adds a standing force, applied every step as `force · point mass`.
    fn add_external_force(&mut self, force: Vec3);

    /// Removes one previously added force equal to `force`.
    fn remove_external_force(&mut self, force: Vec3) -> bool;

    /// Replaces the wind acceleration.
    fn set_wind(&mut self, wind: Vec3);

    /// Dents the body around `impact`. Returns false for sub-threshold
    /// impacts, which change nothing.
    fn apply_deformation(&mut self, impact: Vec3, force: Scalar) -> bool;

    /// Puts every point back at its rest position and clears the deformation.
    fn reset_deformation(&mut self);

    /// Accumulated deformation, within `[0, max_deformation]`.
    fn deformation(&self) -> Scalar;

    fn center(&self) -> Vec3;

    fn points(&self) -> &[Point];

    /// Mutable point access for contact resolvers.
    ///
    /// Callers that move points must also call [`SimulationBody::wake_point`].
    fn points_mut(&mut self) -> &mut [Point];

    fn total_mass(&self) -> Scalar;

    fn material(&self) -> &Arc<Material>;

    /// Re-enables integration of a point. No-op for bodies without sleeping.
    fn wake_point(&mut self, _id: PointId) {}

    /// The body's own point grid, rebuilt first if points moved since the
    /// last rebuild. `None` for bodies that keep no grid.
    fn refreshed_spatial_hash(&mut self) -> Option<&SpatialHash> {
        None
    }

    fn average_velocity(&self) -> Vec3 {
        average_velocity(self.points())
    }

    fn aabb(&self) -> Aabb {
        Aabb::from_points(self.points().iter().map(|p| p.position))
    }

    /// Outer-shell points approximating the convex hull.
    fn convex_hull_points(&self) -> Vec<Vec3> {
        hull_points(self.points())
    }

    /// Snapshot of the current point positions.
    fn positions(&self) -> Vec<Vec3> {
        self.points().iter().map(|p| p.position).collect()
    }

    fn kinetic_energy(&self) -> Scalar {
        self.points().iter().map(Point::kinetic_energy).sum()
    }
}

/// Points approximating the convex hull of a point cloud.
///
/// Fewer than four points are returned as-is. Otherwise only points farther
/// than [`HULL_SHELL_FRACTION`] of the maximum distance from the centroid are
/// kept.
pub fn hull_points(points: &[Point]) -> Vec<Vec3> {
    if points.len() < 4 {
        return points.iter().map(|p| p.position).collect();
    }
    let centroid = mean_position(points);
    let max_dist = points
        .iter()
        .map(|p| p.position.distance(centroid))
        .fold(0.0, Scalar::max);
    let cutoff = HULL_SHELL_FRACTION * max_dist;
    points
        .iter()
        .filter(|p| p.position.distance(centroid) > cutoff)
        .map(|p| p.position)
        .collect()
}

/// Validates a timestep. `Ok(false)` means "nothing to do".
pub(crate) fn check_timestep(dt: Scalar) -> PliantResult<bool> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(PliantError::InvalidTimestep(dt));
    }
    Ok(dt > 0.0)
}

/// The closed set of body kinds.
#[derive(Debug, Clone)]
pub enum Body {
    Rigid(RigidBody),
    Soft(SoftBody),
}

impl Body {
    /// Short kind label ("rigid" or "soft").
    pub fn kind_name(&self) -> &'static str {
        match self {
            Body::Rigid(_) => "rigid",
            Body::Soft(_) => "soft",
        }
    }

    pub fn as_rigid(&self) -> Option<&RigidBody> {
        match self {
            Body::Rigid(b) => Some(b),
            Body::Soft(_) => None,
        }
    }

    pub fn as_soft(&self) -> Option<&SoftBody> {
        match self {
            Body::Soft(b) => Some(b),
            Body::Rigid(_) => None,
        }
    }

    fn inner(&self) -> &dyn SimulationBody {
        match self {
            Body::Rigid(b) => b,
            Body::Soft(b) => b,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn SimulationBody {
        match self {
            Body::Rigid(b) => b,
            Body::Soft(b) => b,
        }
    }
}

impl From<RigidBody> for Body {
    fn from(b: RigidBody) -> Self {
        Body::Rigid(b)
    }
}

impl From<SoftBody> for Body {
    fn from(b: SoftBody) -> Self {
        Body::Soft(b)
    }
}

impl SimulationBody for Body {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn step(&mut self, dt: Scalar) -> PliantResult<StepReport> {
        self.inner_mut().step(dt)
    }

    fn add_external_force(&mut self, force: Vec3) {
        self.inner_mut().add_external_force(force)
    }

    fn remove_external_force(&mut self, force: Vec3) -> bool {
        self.inner_mut().remove_external_force(force)
    }

    fn set_wind(&mut self, wind: Vec3) {
        self.inner_mut().set_wind(wind)
    }

    fn apply_deformation(&mut self, impact: Vec3, force: Scalar) -> bool {
        self.inner_mut().apply_deformation(impact, force)
    }

    fn reset_deformation(&mut self) {
        self.inner_mut().reset_deformation()
    }

    fn deformation(&self) -> Scalar {
        self.inner().deformation()
    }

    fn center(&self) -> Vec3 {
        self.inner().center()
    }

    fn points(&self) -> &[Point] {
        self.inner().points()
    }

    fn points_mut(&mut self) -> &mut [Point] {
        self.inner_mut().points_mut()
    }

    fn total_mass(&self) -> Scalar {
        self.inner().total_mass()
    }

    fn material(&self) -> &Arc<Material> {
        self.inner().material()
    }

    fn wake_point(&mut self, id: PointId) {
        self.inner_mut().wake_point(id)
    }

    fn refreshed_spatial_hash(&mut self) -> Option<&SpatialHash> {
        self.inner_mut().refreshed_spatial_hash()
    }

    fn convex_hull_points(&self) -> Vec<Vec3> {
        self.inner().convex_hull_points()
    }
}
