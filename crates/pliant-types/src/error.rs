//! Error types for the pliant core.
//!
//! All crates return `PliantResult<T>` from fallible operations.
//! Numerical blow-ups and degenerate elements are recovered inside the
//! step and never surface here.

use thiserror::Error;

/// Unified error type for the pliant core.
#[derive(Debug, Error)]
pub enum PliantError {
    /// Mesh data is missing, malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Material parameter is out of valid range.
    #[error("Invalid material parameter: {0}")]
    InvalidMaterial(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Body construction parameters are invalid (mass, radius, point count).
    #[error("Invalid body: {0}")]
    InvalidBody(String),

    /// Timestep is negative or not finite.
    #[error("Invalid timestep: {0}")]
    InvalidTimestep(f64),
}

/// Convenience alias for `Result<T, PliantError>`.
pub type PliantResult<T> = Result<T, PliantError>;
