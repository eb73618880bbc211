//! Contact configuration.

use serde::{Deserialize, Serialize};

use pliant_types::constants::MIN_CONTACT_DISTANCE;
use pliant_types::{PliantError, PliantResult, Scalar};

/// Parameters of the pairwise contact resolvers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Point pairs closer than this are pushed apart.
    pub point_threshold: Scalar,

    /// Restitution of point-pair contacts.
    pub point_restitution: Scalar,

    /// Point pairs closer than this have no usable normal and are skipped.
    pub min_distance: Scalar,

    /// Ball friction only acts above this tangential speed.
    pub friction_threshold: Scalar,

    /// Bin the second body's points before the point-pair scan.
    pub use_spatial_hash: bool,

    /// Cell size of that grid.
    pub hash_cell_size: Scalar,

    /// Feed ball-ball impulses into the deformation model.
    pub deform_on_impact: bool,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            point_threshold: 0.05,
            point_restitution: 0.5,
            min_distance: MIN_CONTACT_DISTANCE,
            friction_threshold: 1.0e-3,
            use_spatial_hash: true,
            hash_cell_size: 0.1,
            deform_on_impact: true,
        }
    }
}

impl ContactConfig {
    /// Brute-force point scan and no deformation.
    pub fn plain() -> Self {
        Self {
            use_spatial_hash: false,
            deform_on_impact: false,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> PliantResult<()> {
        if !(self.point_threshold.is_finite() && self.point_threshold > self.min_distance) {
            return Err(PliantError::InvalidConfig(format!(
                "point_threshold ({}) must exceed min_distance ({})",
                self.point_threshold, self.min_distance
            )));
        }
        if !(0.0..=1.0).contains(&self.point_restitution) {
            return Err(PliantError::InvalidConfig(format!(
                "point_restitution must be in [0, 1], got {}",
                self.point_restitution
            )));
        }
        if !(self.min_distance >= 0.0 && self.friction_threshold >= 0.0) {
            return Err(PliantError::InvalidConfig(
                "distance thresholds must be non-negative".into(),
            ));
        }
        if !(self.hash_cell_size.is_finite() && self.hash_cell_size > 0.0) {
            return Err(PliantError::InvalidConfig("hash_cell_size must be positive".into()));
        }
        Ok(())
    }
}

/// Horizontal floor at `y = height`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundPlaneConfig {
    pub height: Scalar,

    /// Bounce of soft-body points.
    pub soft_restitution: Scalar,

    /// Bounce of ball points.
    pub rigid_restitution: Scalar,
}

impl Default for GroundPlaneConfig {
    fn default() -> Self {
        Self {
            height: 0.0,
            soft_restitution: 0.5,
            rigid_restitution: 0.7,
        }
    }
}

impl GroundPlaneConfig {
    pub fn at(height: Scalar) -> Self {
        Self {
            height,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> PliantResult<()> {
        if !self.height.is_finite() {
            return Err(PliantError::InvalidConfig("ground height must be finite".into()));
        }
        for (field, value) in [
            ("soft_restitution", self.soft_restitution),
            ("rigid_restitution", self.rigid_restitution),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PliantError::InvalidConfig(format!(
                    "{} must be in [0, 1], got {}",
                    field, value
                )));
            }
        }
        Ok(())
    }
}
