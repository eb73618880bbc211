//! # pliant-solver
//!
//! Point masses, springs and the per-body integrators.
//!
//! ## Key Types
//!
//! - [`Point`] / [`Spring`] / [`SpringNetwork`] — Index-based mass-spring data
//! - [`RigidBody`] — Ring-of-points ball with a uniform integrator
//! - [`SoftBody`] — Mesh-built body with bending springs, shape retention
//!   and sleeping points
//! - [`SimulationBody`] — Capabilities shared by every body kind
//! - [`Body`] — Closed set of body kinds for pairwise dispatch
//! - [`SpatialHash`] — Uniform grid over point positions

pub mod body;
pub mod config;
pub mod point;
pub mod report;
pub mod rigid;
pub mod rigid_integrator;
pub mod soft;
pub mod soft_integrator;
pub mod spatial_hash;
pub mod spring;

pub use body::{Body, SimulationBody};
pub use config::{DampingBlend, DeformationConfig, Environment, RigidConfig, SoftConfig};
pub use point::Point;
pub use report::StepReport;
pub use rigid::RigidBody;
pub use soft::SoftBody;
pub use spatial_hash::SpatialHash;
pub use spring::{Spring, SpringKind, SpringNetwork};
