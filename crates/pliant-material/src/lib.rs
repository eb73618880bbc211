//! # pliant-material
//!
//! Immutable material records and the built-in material catalog.
//!
//! A [`Material`] is a plain value bundle (density, elasticity, friction,
//! hardness, deformability). Bodies hold it behind an `Arc` and only ever
//! read from it. The [`MaterialDatabase`] stores named presets and hands
//! out shared handles.

pub mod database;
pub mod properties;

pub use database::MaterialDatabase;
pub use properties::{Material, MaterialKind};
