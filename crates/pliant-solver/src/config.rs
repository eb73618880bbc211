//! Solver configuration.
//!
//! Every coefficient the integrators use lives here. Defaults reproduce the
//! tuned values of the ball and soft-body models; presets cover the common
//! variations.

use serde::{Deserialize, Serialize};

use pliant_math::vector::lerp_clamped;
use pliant_math::Vec3;
use pliant_types::constants::{
    AIR_DENSITY, DEFORMATION_FORCE_THRESHOLD, DEFORMATION_MAX_FORCE, GRAVITY, POSITION_BOUND,
    SPHERE_DRAG_COEFFICIENT,
};
use pliant_types::{PliantError, PliantResult, Scalar};

/// Global forces acting on every point of a body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Gravitational acceleration (m/s²).
    pub gravity: Vec3,

    /// Wind direction. Normalized before use; zero means no wind.
    pub wind_direction: Vec3,

    /// Wind acceleration magnitude (m/s²).
    pub wind_strength: Scalar,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -GRAVITY, 0.0),
            wind_direction: Vec3::ZERO,
            wind_strength: 0.0,
        }
    }
}

impl Environment {
    /// Environment without gravity or wind.
    pub fn zero_gravity() -> Self {
        Self {
            gravity: Vec3::ZERO,
            ..Default::default()
        }
    }

    /// Wind acceleration applied per unit mass.
    #[inline]
    pub fn wind_acceleration(&self) -> Vec3 {
        self.wind_direction.normalize_or_zero() * self.wind_strength
    }

    /// Replaces the wind with `wind`, interpreted as an acceleration.
    pub fn set_wind(&mut self, wind: Vec3) {
        self.wind_direction = wind.normalize_or_zero();
        self.wind_strength = if self.wind_direction == Vec3::ZERO {
            0.0
        } else {
            wind.length()
        };
    }

    pub fn validate(&self) -> PliantResult<()> {
        if !self.gravity.is_finite() || !self.wind_direction.is_finite() {
            return Err(PliantError::InvalidConfig(
                "environment vectors must be finite".into(),
            ));
        }
        if !self.wind_strength.is_finite() || self.wind_strength < 0.0 {
            return Err(PliantError::InvalidConfig(format!(
                "wind_strength must be finite and non-negative, got {}",
                self.wind_strength
            )));
        }
        Ok(())
    }
}

/// Speed-dependent velocity damping.
///
/// The per-substep multiplier moves from `base` at rest towards
/// `velocity_scaled` as the speed approaches `span`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DampingBlend {
    pub base: Scalar,
    pub velocity_scaled: Scalar,
    pub span: Scalar,
}

impl DampingBlend {
    /// Ball damping: 0.98 at rest, 0.95 at speed 10.
    pub fn rigid() -> Self {
        Self {
            base: 0.98,
            velocity_scaled: 0.95,
            span: 10.0,
        }
    }

    /// Soft-body damping: 0.9 at rest, 0.8 at speed 10.
    pub fn soft() -> Self {
        Self {
            base: 0.9,
            velocity_scaled: 0.8,
            span: 10.0,
        }
    }

    /// Velocity multiplier for a point moving at `speed`.
    #[inline]
    pub fn factor(&self, speed: Scalar) -> Scalar {
        lerp_clamped(self.base, self.velocity_scaled, speed / self.span)
    }

    pub fn validate(&self) -> PliantResult<()> {
        for (field, value) in [("base", self.base), ("velocity_scaled", self.velocity_scaled)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PliantError::InvalidConfig(format!(
                    "damping {} must be in [0, 1], got {}",
                    field, value
                )));
            }
        }
        if !(self.span.is_finite() && self.span > 0.0) {
            return Err(PliantError::InvalidConfig(format!(
                "damping span must be positive, got {}",
                self.span
            )));
        }
        Ok(())
    }
}

/// Impact deformation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeformationConfig {
    /// Impacts below this force are ignored.
    pub force_threshold: Scalar,

    /// Force that maps to a full increment.
    pub max_force: Scalar,

    /// Deformation added by a full-strength impact.
    pub increment: Scalar,

    /// Upper bound of the accumulated deformation.
    pub max_deformation: Scalar,
}

impl DeformationConfig {
    pub fn rigid() -> Self {
        Self {
            force_threshold: DEFORMATION_FORCE_THRESHOLD,
            max_force: DEFORMATION_MAX_FORCE,
            increment: 0.1,
            max_deformation: 0.5,
        }
    }

    pub fn soft() -> Self {
        Self {
            max_deformation: 1.0,
            ..Self::rigid()
        }
    }

    /// Deformation after an impact of `force` on a body currently deformed
    /// by `current`. Returns `None` for sub-threshold impacts.
    pub fn accumulate(&self, current: Scalar, force: Scalar) -> Option<Scalar> {
        if force.is_nan() || force < self.force_threshold {
            return None;
        }
        let normalized = (force / self.max_force).clamp(0.0, 1.0);
        Some((current + normalized * self.increment).min(self.max_deformation))
    }

    pub fn validate(&self) -> PliantResult<()> {
        let fields = [
            ("force_threshold", self.force_threshold),
            ("max_force", self.max_force),
            ("increment", self.increment),
            ("max_deformation", self.max_deformation),
        ];
        for (field, value) in fields {
            if !(value.is_finite() && value >= 0.0) {
                return Err(PliantError::InvalidConfig(format!(
                    "deformation {} must be finite and non-negative, got {}",
                    field, value
                )));
            }
        }
        if self.max_force <= 0.0 {
            return Err(PliantError::InvalidConfig("deformation max_force must be positive".into()));
        }
        Ok(())
    }
}

/// Configuration of a rigid ring body ("ball").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigidConfig {
    pub environment: Environment,

    /// Ring spring stiffness before scaling by the material elasticity.
    pub spring_stiffness: Scalar,

    /// Drag only acts above this speed.
    pub drag_speed_threshold: Scalar,

    /// Air density (kg/m³).
    pub air_density: Scalar,

    /// Drag coefficient.
    pub drag_coefficient: Scalar,

    /// Radius of the drag cross-section and of the inertia model.
    pub reference_radius: Scalar,

    pub damping: DampingBlend,

    /// Angular velocity multiplier applied once per point per step.
    pub angular_damping: Scalar,

    /// Positions beyond this magnitude count as a blow-up.
    pub position_bound: Scalar,

    pub deformation: DeformationConfig,
}

impl Default for RigidConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            spring_stiffness: 20.0,
            drag_speed_threshold: 0.1,
            air_density: AIR_DENSITY,
            drag_coefficient: SPHERE_DRAG_COEFFICIENT,
            reference_radius: 0.5,
            damping: DampingBlend::rigid(),
            angular_damping: 0.98,
            position_bound: POSITION_BOUND,
            deformation: DeformationConfig::rigid(),
        }
    }
}

impl RigidConfig {
    /// No gravity, no drag. Useful for isolated collision tests.
    pub fn vacuum() -> Self {
        Self {
            environment: Environment::zero_gravity(),
            air_density: 0.0,
            ..Default::default()
        }
    }

    /// Cross-sectional area used by the drag law.
    #[inline]
    pub fn cross_section_area(&self) -> Scalar {
        std::f64::consts::PI * self.reference_radius * self.reference_radius
    }

    pub fn validate(&self) -> PliantResult<()> {
        self.environment.validate()?;
        self.damping.validate()?;
        self.deformation.validate()?;
        let non_negative = [
            ("spring_stiffness", self.spring_stiffness),
            ("drag_speed_threshold", self.drag_speed_threshold),
            ("air_density", self.air_density),
            ("drag_coefficient", self.drag_coefficient),
            ("reference_radius", self.reference_radius),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(PliantError::InvalidConfig(format!(
                    "{} must be finite and non-negative, got {}",
                    field, value
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.angular_damping) {
            return Err(PliantError::InvalidConfig(format!(
                "angular_damping must be in [0, 1], got {}",
                self.angular_damping
            )));
        }
        if !(self.position_bound.is_finite() && self.position_bound > 0.0) {
            return Err(PliantError::InvalidConfig("position_bound must be positive".into()));
        }
        Ok(())
    }
}

/// Configuration of a mesh-built soft body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftConfig {
    pub environment: Environment,

    /// Edge spring stiffness before scaling by the material elasticity.
    pub structural_stiffness: Scalar,

    /// Bending spring stiffness before scaling by the material elasticity.
    pub bending_stiffness: Scalar,

    /// Axial damping of every spring.
    pub spring_damping: Scalar,

    /// Pull towards the rest position, per unit displacement.
    pub shape_retention: Scalar,

    /// Linear air resistance per unit mass.
    pub air_resistance: Scalar,

    pub damping: DampingBlend,

    /// Substeps per consumed update.
    pub max_iterations: u32,

    /// Minimum accumulated time before a step runs.
    pub update_interval: Scalar,

    /// Simulated time between sleep sweeps.
    pub stability_check_interval: Scalar,

    /// A point sleeps when slower than this ...
    pub sleep_velocity: Scalar,

    /// ... and closer than this to its rest position.
    pub sleep_displacement: Scalar,

    /// Rebuild a spatial hash of the points every update.
    pub use_spatial_hash: bool,

    pub hash_cell_size: Scalar,

    /// Falloff radius of round bodies as a fraction of the bounding radius.
    pub round_falloff_scale: Scalar,

    /// Falloff radius of other bodies in average edge lengths.
    pub edge_falloff_scale: Scalar,

    pub position_bound: Scalar,

    pub deformation: DeformationConfig,
}

impl Default for SoftConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            structural_stiffness: 3.0,
            bending_stiffness: 0.1,
            spring_damping: 0.1,
            shape_retention: 100.0,
            air_resistance: 0.05,
            damping: DampingBlend::soft(),
            max_iterations: 3,
            update_interval: 0.016,
            stability_check_interval: 0.1,
            sleep_velocity: 0.01,
            sleep_displacement: 0.1,
            use_spatial_hash: true,
            hash_cell_size: 2.0,
            round_falloff_scale: 0.8,
            edge_falloff_scale: 3.0,
            position_bound: POSITION_BOUND,
            deformation: DeformationConfig::soft(),
        }
    }
}

impl SoftConfig {
    /// Steps on every call regardless of how little time has passed.
    pub fn every_call() -> Self {
        Self {
            update_interval: 0.0,
            ..Default::default()
        }
    }

    /// Floppy preset: weak shape retention, so springs dominate.
    pub fn jelly() -> Self {
        Self {
            shape_retention: 5.0,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> PliantResult<()> {
        self.environment.validate()?;
        self.damping.validate()?;
        self.deformation.validate()?;
        if self.max_iterations == 0 {
            return Err(PliantError::InvalidConfig("max_iterations must be at least 1".into()));
        }
        let non_negative = [
            ("structural_stiffness", self.structural_stiffness),
            ("bending_stiffness", self.bending_stiffness),
            ("spring_damping", self.spring_damping),
            ("shape_retention", self.shape_retention),
            ("air_resistance", self.air_resistance),
            ("update_interval", self.update_interval),
            ("stability_check_interval", self.stability_check_interval),
            ("sleep_velocity", self.sleep_velocity),
            ("sleep_displacement", self.sleep_displacement),
            ("round_falloff_scale", self.round_falloff_scale),
            ("edge_falloff_scale", self.edge_falloff_scale),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(PliantError::InvalidConfig(format!(
                    "{} must be finite and non-negative, got {}",
                    field, value
                )));
            }
        }
        if !(self.hash_cell_size.is_finite() && self.hash_cell_size > 0.0) {
            return Err(PliantError::InvalidConfig("hash_cell_size must be positive".into()));
        }
        if !(self.position_bound.is_finite() && self.position_bound > 0.0) {
            return Err(PliantError::InvalidConfig("position_bound must be positive".into()));
        }
        Ok(())
    }
}
