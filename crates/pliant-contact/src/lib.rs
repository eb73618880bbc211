//! # pliant-contact
//!
//! Collision detection and contact response between pliant bodies.
//!
//! The collision pipeline is split into three phases:
//! 1. **Broad phase** — Axis-aligned bounding box rejection
//! 2. **Narrow phase** — GJK on approximate convex hulls
//! 3. **Contact response** — Sphere impulses for ball pairs, direct
//!    point-pair correction for everything else
//!
//! The broad and narrow phases are pluggable traits. A ground plane can be
//! attached to the pipeline and runs after all body pairs.

pub mod ball_collision;
pub mod broad;
pub mod collision_pipeline;
pub mod config;
pub mod contact;
pub mod gjk;
pub mod ground_plane;
pub mod narrow;
pub mod point_pair;
pub mod response;

pub use ball_collision::resolve_ball_pair;
pub use broad::{AabbBroadPhase, BroadPhase, CandidatePair, NullBroadPhase};
pub use collision_pipeline::{CollisionPipeline, CollisionStepResult, PairOutcome};
pub use config::{ContactConfig, GroundPlaneConfig};
pub use contact::{find_contact_constraints, ContactConstraint};
pub use gjk::{gjk_intersects, Gjk};
pub use ground_plane::GroundPlane;
pub use narrow::{NarrowPhase, NullNarrowPhase};
pub use point_pair::{count_close_pairs, resolve_point_pairs};
pub use response::ContactResult;
