//! # pliant-types
//!
//! Shared types, identifiers, error types, and physical constants
//! for the pliant mass-spring simulation core.
//!
//! This crate has zero domain logic. It defines the vocabulary
//! that all other pliant crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{PliantError, PliantResult};
pub use ids::{BodyId, PointId, SpringId};
pub use scalar::Scalar;
