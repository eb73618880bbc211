//! Strongly-typed identifiers for simulation entities.
//!
//! Springs reference their endpoints through `PointId`s into the owning
//! body's point arena, never through pointers.

use serde::{Deserialize, Serialize};

/// Index into a body's point array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PointId(pub u32);

/// Index into a body's spring array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpringId(pub u32);

/// Index of a body inside a scene or scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

impl PointId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl SpringId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl BodyId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for PointId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<usize> for PointId {
    fn from(val: usize) -> Self {
        Self(val as u32)
    }
}

impl From<u32> for SpringId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<usize> for SpringId {
    fn from(val: usize) -> Self {
        Self(val as u32)
    }
}

impl From<u32> for BodyId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<usize> for BodyId {
    fn from(val: usize) -> Self {
        Self(val as u32)
    }
}
