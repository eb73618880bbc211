//! # pliant-mesh
//!
//! Input geometry for deformable bodies, stored in Structure-of-Arrays
//! layout.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`] — Vertex positions plus a flat triangle index buffer.
//!   This is the only geometry the simulation core consumes.
//! - [`Topology`] — Deduplicated edges and interior edges with their two
//!   wing vertices (the source of bending springs).
//! - Procedural generators for tests and scenarios (spheres, boxes, grids,
//!   point rings).

pub mod generators;
pub mod mesh;
pub mod topology;

pub use mesh::TriangleMesh;
pub use topology::Topology;
