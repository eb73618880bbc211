//! Benchmark scenarios: bodies, contact setup and step count for each case.
//!
//! Four canonical scenarios for regression testing:
//! 1. **Ball drop** — A rubber ball falls onto the ground plane
//! 2. **Head-on** — Two balls collide along the X axis
//! 3. **Soft pair** — Two soft cubes drift into each other
//! 4. **Resting sheet** — A sheet at rest that should fall asleep

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use pliant_contact::{ContactConfig, GroundPlaneConfig};
use pliant_material::{Material, MaterialDatabase, MaterialKind};
use pliant_math::Vec3;
use pliant_mesh::generators::{box_mesh, quad_grid};
use pliant_solver::config::{Environment, RigidConfig, SoftConfig};
use pliant_solver::{Body, RigidBody, SimulationBody, SoftBody};
use pliant_types::constants::DEFAULT_DT;
use pliant_types::{PliantError, PliantResult, Scalar};

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    BallDrop,
    HeadOn,
    SoftPair,
    RestingSheet,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::BallDrop,
            ScenarioKind::HeadOn,
            ScenarioKind::SoftPair,
            ScenarioKind::RestingSheet,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::BallDrop => "ball_drop",
            ScenarioKind::HeadOn => "head_on",
            ScenarioKind::SoftPair => "soft_pair",
            ScenarioKind::RestingSheet => "resting_sheet",
        }
    }
}

/// A fully specified benchmark scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub kind: ScenarioKind,
    /// Bodies in their initial state. The runner works on copies.
    pub bodies: Vec<Body>,
    pub contact: ContactConfig,
    /// Ground plane, if the scenario has one.
    pub ground: Option<GroundPlaneConfig>,
    /// Number of steps to simulate.
    pub timesteps: u32,
    /// Step size (seconds).
    pub dt: Scalar,
}

fn zero_gravity_soft() -> SoftConfig {
    SoftConfig {
        environment: Environment::zero_gravity(),
        ..Default::default()
    }
}

/// Shared handle to a built-in material preset.
fn preset(kind: MaterialKind) -> PliantResult<Arc<Material>> {
    MaterialDatabase::with_defaults()
        .by_kind(kind)
        .ok_or_else(|| PliantError::InvalidMaterial(format!("no {} preset", kind.name())))
}

impl Scenario {
    /// A rubber ball of radius 0.5 dropped from 2 m onto the ground,
    /// 2 seconds at 60 fps.
    pub fn ball_drop() -> PliantResult<Self> {
        let ball = RigidBody::new(
            Vec3::new(0.0, 2.0, 0.0),
            0.5,
            1.0,
            preset(MaterialKind::Rubber)?,
            16,
        )?;
        Ok(Self {
            kind: ScenarioKind::BallDrop,
            bodies: vec![ball.named("drop").into()],
            contact: ContactConfig::default(),
            ground: Some(GroundPlaneConfig::default()),
            timesteps: 120,
            dt: DEFAULT_DT,
        })
    }

    /// Two plastic balls 3 m apart closing at 4 m/s, no gravity.
    pub fn head_on() -> PliantResult<Self> {
        let material = preset(MaterialKind::Plastic)?;
        let mut left = RigidBody::with_config(
            Vec3::new(-1.5, 0.0, 0.0),
            0.5,
            1.0,
            Arc::clone(&material),
            16,
            RigidConfig::vacuum(),
        )?
        .named("left");
        let mut right = RigidBody::with_config(
            Vec3::new(1.5, 0.0, 0.0),
            0.5,
            1.0,
            material,
            16,
            RigidConfig::vacuum(),
        )?
        .named("right");
        left.set_velocity(Vec3::new(2.0, 0.0, 0.0));
        right.set_velocity(Vec3::new(-2.0, 0.0, 0.0));

        Ok(Self {
            kind: ScenarioKind::HeadOn,
            bodies: vec![left.into(), right.into()],
            contact: ContactConfig::default(),
            ground: None,
            timesteps: 90,
            dt: DEFAULT_DT,
        })
    }

    /// Two unit rubber cubes with a 0.2 m gap drifting together at 2 m/s each.
    pub fn soft_pair() -> PliantResult<Self> {
        let material = preset(MaterialKind::Rubber)?;
        let cube = |x: Scalar, name: &str, vx: Scalar| -> PliantResult<Body> {
            let mesh = box_mesh(Vec3::ONE).translated(Vec3::new(x, 0.0, 0.0));
            let mut body = SoftBody::with_config(
                &mesh,
                1.0,
                Arc::clone(&material),
                false,
                zero_gravity_soft(),
            )?
            .named(name);
            body.set_velocity(Vec3::new(vx, 0.0, 0.0));
            Ok(body.into())
        };

        Ok(Self {
            kind: ScenarioKind::SoftPair,
            bodies: vec![cube(-0.6, "left", 2.0)?, cube(0.6, "right", -2.0)?],
            contact: ContactConfig::default(),
            ground: None,
            timesteps: 60,
            dt: DEFAULT_DT,
        })
    }

    /// A 1 m × 1 m sheet at 10×10 resolution lying flat in the XZ plane,
    /// weightless and at rest.
    pub fn resting_sheet() -> PliantResult<Self> {
        let mut mesh = quad_grid(10, 10, 1.0, 1.0);
        for i in 0..mesh.vertex_count() {
            let p = mesh.position(i);
            mesh.set_position(i, Vec3::new(p.x, 1.0, p.y));
        }
        let sheet = SoftBody::with_config(
            &mesh,
            0.5,
            preset(MaterialKind::Wood)?,
            false,
            zero_gravity_soft(),
        )?
        .named("sheet");

        Ok(Self {
            kind: ScenarioKind::RestingSheet,
            bodies: vec![sheet.into()],
            contact: ContactConfig::default(),
            ground: None,
            timesteps: 120,
            dt: DEFAULT_DT,
        })
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> PliantResult<Self> {
        match kind {
            ScenarioKind::BallDrop => Self::ball_drop(),
            ScenarioKind::HeadOn => Self::head_on(),
            ScenarioKind::SoftPair => Self::soft_pair(),
            ScenarioKind::RestingSheet => Self::resting_sheet(),
        }
    }

    /// Total point count over all bodies.
    pub fn point_count(&self) -> usize {
        self.bodies.iter().map(|b| b.points().len()).sum()
    }
}
