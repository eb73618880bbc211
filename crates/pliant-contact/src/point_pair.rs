//! Direct point-pair contact resolution for deformable bodies.
//!
//! Every pair of points (one per body) closer than the contact threshold is
//! pushed apart to the threshold distance, and approaching pairs lose part
//! of their normal relative velocity. Pairs are handled one at a time; no
//! global system is solved.

use pliant_solver::{SimulationBody, SpatialHash};
use pliant_types::{PointId, Scalar};

use crate::config::ContactConfig;
use crate::response::ContactResult;

/// Resolves all close point pairs between `a` and `b`.
///
/// Every point that is moved is woken on its body.
pub fn resolve_point_pairs(
    a: &mut dyn SimulationBody,
    b: &mut dyn SimulationBody,
    config: &ContactConfig,
) -> ContactResult {
    let threshold = config.point_threshold;
    let half_bounce = (1.0 + config.point_restitution) * 0.5;

    // Query a little wider: earlier pairs may have moved points.
    let reach = 2.0 * threshold;
    let candidates = candidate_lists(a, b, config, reach);
    let every_b: Vec<u32> = match &candidates {
        Some(_) => Vec::new(),
        None => (0..b.points().len() as u32).collect(),
    };

    let mut result = ContactResult::default();
    let mut touched_a = vec![false; a.points().len()];
    let mut touched_b = vec![false; b.points().len()];

    {
        let pa = a.points_mut();
        let pb = b.points_mut();

        for i in 0..pa.len() {
            let nearby: &[u32] = match &candidates {
                Some(lists) => &lists[i],
                None => &every_b,
            };

            for &j in nearby {
                let j = j as usize;
                let delta = pb[j].position - pa[i].position;
                let dist = delta.length();
                if !(dist < threshold && dist > config.min_distance) {
                    continue;
                }

                let normal = delta / dist;
                let penetration = threshold - dist;
                let push = normal * (penetration * 0.5);
                pa[i].position -= push;
                pb[j].position += push;

                let vn = (pa[i].velocity - pb[j].velocity).dot(normal);
                if vn > 0.0 {
                    let dv = normal * (half_bounce * vn);
                    pa[i].velocity -= dv;
                    pb[j].velocity += dv;
                    result.total_impulse += 2.0 * half_bounce * vn;
                }

                touched_a[i] = true;
                touched_b[j] = true;
                result.resolved_count += 1;
                result.max_penetration = result.max_penetration.max(penetration);
            }
        }
    }

    wake_touched(a, &touched_a);
    wake_touched(b, &touched_b);

    if !result.is_empty() {
        tracing::debug!(
            a = a.name(),
            b = b.name(),
            pairs = result.resolved_count,
            max_penetration = result.max_penetration,
            "point pairs resolved"
        );
    }

    result
}

/// Per point of `a`, the indices of `b` points in nearby cells.
///
/// Uses `b`'s own grid when it keeps one, otherwise a throwaway grid.
/// `None` means every pair is checked.
fn candidate_lists(
    a: &dyn SimulationBody,
    b: &mut dyn SimulationBody,
    config: &ContactConfig,
    reach: Scalar,
) -> Option<Vec<Vec<u32>>> {
    if !config.use_spatial_hash {
        return None;
    }
    let query = |hash: &SpatialHash| -> Vec<Vec<u32>> {
        a.points()
            .iter()
            .map(|p| hash.nearby(p.position, reach))
            .collect()
    };
    if let Some(hash) = b.refreshed_spatial_hash() {
        return Some(query(hash));
    }
    let mut local = SpatialHash::new(config.hash_cell_size);
    local.rebuild(b.points());
    Some(query(&local))
}

fn wake_touched(body: &mut dyn SimulationBody, touched: &[bool]) {
    for (i, &t) in touched.iter().enumerate() {
        if t {
            body.wake_point(PointId::from(i));
        }
    }
}

/// Number of point pairs currently closer than `threshold`.
pub fn count_close_pairs(a: &dyn SimulationBody, b: &dyn SimulationBody, threshold: Scalar) -> usize {
    a.points()
        .iter()
        .map(|pa| {
            b.points()
                .iter()
                .filter(|pb| pa.position.distance(pb.position) < threshold)
                .count()
        })
        .sum()
}
