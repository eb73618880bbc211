//! Pairwise collision pipeline: broad → narrow → response.
//!
//! Ball pairs are resolved as spheres. Every other pair passes the AABB
//! test and the GJK test before the point-pair resolver runs.

use std::collections::HashSet;

use pliant_math::Aabb;
use pliant_solver::{Body, SimulationBody};
use pliant_types::{BodyId, Scalar};

use crate::ball_collision::resolve_ball_pair;
use crate::broad::{AabbBroadPhase, BroadPhase};
use crate::config::{ContactConfig, GroundPlaneConfig};
use crate::gjk::Gjk;
use crate::ground_plane::GroundPlane;
use crate::narrow::NarrowPhase;
use crate::point_pair::resolve_point_pairs;
use crate::response::ContactResult;

/// What happened to one body pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairOutcome {
    /// No contact needed resolving.
    Separated,
    /// Bounding boxes do not touch.
    BroadPhaseReject,
    /// Boxes touch but the hulls do not.
    NarrowPhaseReject,
    /// Contacts were resolved.
    Resolved(ContactResult),
}

/// Unified collision pipeline.
pub struct CollisionPipeline {
    /// Broad phase box test.
    pub broad: Box<dyn BroadPhase>,
    /// Narrow phase hull test.
    pub narrow: Box<dyn NarrowPhase>,
    /// Resolver parameters.
    pub config: ContactConfig,
    /// Optional ground plane.
    pub ground: Option<GroundPlane>,
}

impl Default for CollisionPipeline {
    fn default() -> Self {
        Self::new(
            Box::new(AabbBroadPhase::new()),
            Box::new(Gjk::default()),
            ContactConfig::default(),
        )
    }
}

impl CollisionPipeline {
    /// Create a new collision pipeline.
    pub fn new(
        broad: Box<dyn BroadPhase>,
        narrow: Box<dyn NarrowPhase>,
        config: ContactConfig,
    ) -> Self {
        Self {
            broad,
            narrow,
            config,
            ground: None,
        }
    }

    /// Add an optional ground plane.
    pub fn with_ground(mut self, config: GroundPlaneConfig) -> Self {
        self.ground = Some(GroundPlane::with_config(config));
        self
    }

    /// Resolves contact between two bodies.
    pub fn resolve_pair(&self, a: &mut Body, b: &mut Body, dt: Scalar) -> PairOutcome {
        if let (Body::Rigid(x), Body::Rigid(y)) = (&mut *a, &mut *b) {
            return sphere_outcome(resolve_ball_pair(x, y, dt, &self.config));
        }
        if !self.broad.overlaps(&a.aabb(), &b.aabb()) {
            tracing::debug!(a = a.name(), b = b.name(), phase = self.broad.name(), "broad phase reject");
            return PairOutcome::BroadPhaseReject;
        }
        self.confirm_and_resolve(a, b)
    }

    /// Narrow phase then point-pair resolution. The broad phase has passed.
    fn confirm_and_resolve(&self, a: &mut Body, b: &mut Body) -> PairOutcome {
        let hull_a = a.convex_hull_points();
        let hull_b = b.convex_hull_points();
        if !self.narrow.intersects(&hull_a, &hull_b) {
            tracing::debug!(a = a.name(), b = b.name(), phase = self.narrow.name(), "narrow phase reject");
            return PairOutcome::NarrowPhaseReject;
        }
        let result = resolve_point_pairs(a, b, &self.config);
        if result.is_empty() {
            PairOutcome::Separated
        } else {
            PairOutcome::Resolved(result)
        }
    }

    /// Resolves every unordered body pair once, then the ground plane.
    pub fn resolve_all(&self, bodies: &mut [Body], dt: Scalar) -> CollisionStepResult {
        let boxes: Vec<Aabb> = bodies.iter().map(|b| b.aabb()).collect();
        let candidates: HashSet<(BodyId, BodyId)> = self
            .broad
            .candidates(&boxes)
            .into_iter()
            .map(|c| (c.a.min(c.b), c.a.max(c.b)))
            .collect();

        let mut step = CollisionStepResult {
            candidate_pairs: candidates.len() as u32,
            ..Default::default()
        };

        for j in 1..bodies.len() {
            let (left, right) = bodies.split_at_mut(j);
            let b = &mut right[0];
            for (i, a) in left.iter_mut().enumerate() {
                step.pairs_tested += 1;
                let both_rigid = matches!((&*a, &*b), (Body::Rigid(_), Body::Rigid(_)));
                let outcome = if both_rigid {
                    self.resolve_pair(a, b, dt)
                } else if candidates.contains(&(BodyId::from(i), BodyId::from(j))) {
                    self.confirm_and_resolve(a, b)
                } else {
                    PairOutcome::BroadPhaseReject
                };
                step.record(outcome, both_rigid);
            }
        }

        if let Some(ground) = &self.ground {
            for body in bodies.iter_mut() {
                let r = ground.resolve(body);
                step.ground_result.merge(&r);
            }
        }

        tracing::trace!(
            pairs = step.pairs_tested,
            resolved = step.resolved_pairs,
            "collision pass"
        );
        step
    }
}

fn sphere_outcome(result: ContactResult) -> PairOutcome {
    if result.is_empty() {
        PairOutcome::Separated
    } else {
        PairOutcome::Resolved(result)
    }
}

/// Result of a full collision pass.
#[derive(Debug, Clone, Default)]
pub struct CollisionStepResult {
    /// Unordered body pairs examined.
    pub pairs_tested: u32,
    /// Pairs whose boxes overlapped at the start of the pass.
    pub candidate_pairs: u32,
    pub broad_rejects: u32,
    pub narrow_rejects: u32,
    /// Pairs with at least one resolved contact.
    pub resolved_pairs: u32,
    /// Merged ball-ball contact results.
    pub ball_result: ContactResult,
    /// Merged point-pair contact results.
    pub point_result: ContactResult,
    /// Ground plane resolution result.
    pub ground_result: ContactResult,
}

impl CollisionStepResult {
    fn record(&mut self, outcome: PairOutcome, ball_pair: bool) {
        match outcome {
            PairOutcome::Separated => {}
            PairOutcome::BroadPhaseReject => self.broad_rejects += 1,
            PairOutcome::NarrowPhaseReject => self.narrow_rejects += 1,
            PairOutcome::Resolved(r) => {
                self.resolved_pairs += 1;
                if ball_pair {
                    self.ball_result.merge(&r);
                } else {
                    self.point_result.merge(&r);
                }
            }
        }
    }

    /// All body-body contacts of the pass.
    pub fn contact_result(&self) -> ContactResult {
        let mut total = self.ball_result;
        total.merge(&self.point_result);
        total
    }
}
