//! Impulse-based contact between two balls.
//!
//! Balls collide as spheres: contact is decided by center distance alone.
//! The impulse is spread uniformly over each ball's points.

use pliant_solver::{RigidBody, SimulationBody};
use pliant_types::constants::EPSILON;
use pliant_types::Scalar;

use crate::config::ContactConfig;
use crate::response::ContactResult;

/// Resolves one ball-ball contact.
///
/// Applies, in order: restitution impulse, positional correction, impact
/// deformation and Coulomb friction. Pairs that do not overlap, have
/// coincident centers, or are already separating return an empty result.
pub fn resolve_ball_pair(
    a: &mut RigidBody,
    b: &mut RigidBody,
    dt: Scalar,
    config: &ContactConfig,
) -> ContactResult {
    let ca = a.center();
    let cb = b.center();
    let delta = cb - ca;
    let dist = delta.length();
    let min_dist = a.radius() + b.radius();

    if dist >= min_dist {
        return ContactResult::default();
    }
    if dist < EPSILON {
        tracing::debug!(a = a.name(), b = b.name(), "coincident ball centers, skipped");
        return ContactResult::default();
    }

    let normal = delta / dist;
    let rel_vel = a.average_velocity() - b.average_velocity();
    let vn = rel_vel.dot(normal);
    if vn <= 0.0 {
        return ContactResult::default();
    }

    let restitution = a.material().restitution_with(b.material());
    let inv_a = 1.0 / a.total_mass();
    let inv_b = 1.0 / b.total_mass();
    let inv_sum = inv_a + inv_b;

    let j = (1.0 + restitution) * vn / inv_sum;
    a.add_velocity(-normal * (j * inv_a));
    b.add_velocity(normal * (j * inv_b));

    let penetration = min_dist - dist;
    let correction = normal * (penetration * 0.5);
    a.translate(-correction);
    b.translate(correction);

    let mut total_impulse = j;

    if config.deform_on_impact && dt > 0.0 {
        let impact = ca + normal * a.radius();
        let force = j / dt;
        a.apply_deformation(impact, force);
        b.apply_deformation(impact, force);
    }

    let tangent = rel_vel - normal * vn;
    let tangent_speed = tangent.length();
    if tangent_speed > config.friction_threshold {
        let t = tangent / tangent_speed;
        let mu = a.material().friction_with(b.material());
        let jt = (rel_vel.dot(t) / inv_sum).clamp(0.0, mu * j);
        a.add_velocity(-t * (jt * inv_a));
        b.add_velocity(t * (jt * inv_b));
        total_impulse += jt;
    }

    tracing::debug!(
        a = a.name(),
        b = b.name(),
        impulse = j,
        penetration,
        "ball contact resolved"
    );

    ContactResult {
        resolved_count: 1,
        max_penetration: penetration,
        total_impulse,
    }
}
