//! Scalar type alias for the simulation.
//!
//! Point masses, lengths and stiffnesses are carried in double precision.
//! Stiff springs under large timesteps lose too much in `f32`.

/// The floating-point type used throughout the simulation.
pub type Scalar = f64;
