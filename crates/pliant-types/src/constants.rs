//! Physical constants and simulation defaults.

use crate::scalar::Scalar;

/// Gravitational acceleration (m/s²).
pub const GRAVITY: Scalar = 9.81;

/// Default simulation timestep (seconds). 1/60th of a second.
pub const DEFAULT_DT: Scalar = 1.0 / 60.0;

/// Springs whose endpoints are closer than this are skipped for the step.
pub const MIN_SPRING_LENGTH: Scalar = 1.0e-3;

/// Point pairs closer than this have no usable contact normal.
pub const MIN_CONTACT_DISTANCE: Scalar = 1.0e-3;

/// Any position component beyond this magnitude is treated as a blow-up.
pub const POSITION_BOUND: Scalar = 1000.0;

/// Impacts weaker than this never deform a body.
pub const DEFORMATION_FORCE_THRESHOLD: Scalar = 0.1;

/// Impact force that maps to a full deformation increment.
pub const DEFORMATION_MAX_FORCE: Scalar = 10.0;

/// Air density at sea level (kg/m³).
pub const AIR_DENSITY: Scalar = 1.225;

/// Drag coefficient of a sphere.
pub const SPHERE_DRAG_COEFFICIENT: Scalar = 0.47;

/// Epsilon for floating-point comparisons.
pub const EPSILON: Scalar = 1.0e-9;
