//! # pliant-math
//!
//! Vector math primitives for the pliant simulation core.
//!
//! Provides:
//! - Re-exports of `glam` double-precision types (`Vec3` is `glam::DVec3`)
//! - Axis-aligned bounding boxes for the broad phase
//! - Numeric guards and interpolation helpers shared by the integrators

pub mod aabb;
pub mod vector;

pub use aabb::Aabb;

// Re-export glam types as the canonical math types for pliant.
pub use glam::DVec3 as Vec3;
