//! Physical material properties.

use serde::{Deserialize, Serialize};

use pliant_types::{PliantError, PliantResult, Scalar};

/// Broad category of a material preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialKind {
    Metal,
    Wood,
    Plastic,
    Rubber,
    /// User-registered material outside the built-in catalog.
    Custom,
}

impl MaterialKind {
    /// Lower-case catalog name of the built-in kind.
    pub fn name(&self) -> &'static str {
        match self {
            MaterialKind::Metal => "metal",
            MaterialKind::Wood => "wood",
            MaterialKind::Plastic => "plastic",
            MaterialKind::Rubber => "rubber",
            MaterialKind::Custom => "custom",
        }
    }
}

/// Physical properties of a body material.
///
/// Values map onto simulation coefficients as follows:
///
/// | Field | Used by |
/// |---|---|
/// | `elasticity` | spring stiffness scale, contact restitution |
/// | `friction` | Coulomb coefficient in ball-ball contacts |
/// | `hardness` | informational, kept for callers |
/// | `deformability` | informational, kept for callers |
/// | `density` | informational, body mass is given explicitly |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Human-readable name (e.g., "rubber").
    pub name: String,

    /// Preset category.
    pub kind: MaterialKind,

    /// Density relative to water (g/cm³).
    pub density: Scalar,

    /// Elasticity in `[0, 1]`. Scales spring stiffness and restitution.
    pub elasticity: Scalar,

    /// Friction coefficient in `[0, 1]`.
    pub friction: Scalar,

    /// Hardness in `[0, 1]`.
    pub hardness: Scalar,

    /// Deformability in `[0, 1]`.
    pub deformability: Scalar,
}

impl Material {
    /// Checks that all normalized coefficients lie in `[0, 1]` and the
    /// density is positive.
    pub fn validate(&self) -> PliantResult<()> {
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(PliantError::InvalidMaterial(format!(
                "{}: density must be positive, got {}",
                self.name, self.density
            )));
        }
        let unit = [
            ("elasticity", self.elasticity),
            ("friction", self.friction),
            ("hardness", self.hardness),
            ("deformability", self.deformability),
        ];
        for (field, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(PliantError::InvalidMaterial(format!(
                    "{}: {} must be in [0, 1], got {}",
                    self.name, field, value
                )));
            }
        }
        Ok(())
    }

    /// Combined restitution of a contact: the less elastic material wins.
    pub fn restitution_with(&self, other: &Material) -> Scalar {
        self.elasticity.min(other.elasticity)
    }

    /// Combined Coulomb coefficient: geometric mean of both frictions.
    pub fn friction_with(&self, other: &Material) -> Scalar {
        (self.friction * other.friction).sqrt()
    }

    /// Metal: dense, stiff, barely deformable.
    pub fn metal() -> Self {
        Self {
            name: "metal".into(),
            kind: MaterialKind::Metal,
            density: 7.8,
            elasticity: 0.3,
            friction: 0.2,
            hardness: 0.8,
            deformability: 0.1,
        }
    }

    /// Wood: light, medium elasticity.
    pub fn wood() -> Self {
        Self {
            name: "wood".into(),
            kind: MaterialKind::Wood,
            density: 0.7,
            elasticity: 0.5,
            friction: 0.4,
            hardness: 0.3,
            deformability: 0.5,
        }
    }

    /// Plastic: the default for rigid balls.
    pub fn plastic() -> Self {
        Self {
            name: "plastic".into(),
            kind: MaterialKind::Plastic,
            density: 0.9,
            elasticity: 0.7,
            friction: 0.3,
            hardness: 0.4,
            deformability: 0.6,
        }
    }

    /// Rubber: bouncy, grippy, soft.
    pub fn rubber() -> Self {
        Self {
            name: "rubber".into(),
            kind: MaterialKind::Rubber,
            density: 0.9,
            elasticity: 0.9,
            friction: 0.8,
            hardness: 0.2,
            deformability: 0.8,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::plastic()
    }
}
