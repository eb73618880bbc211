//! Integration tests for pliant-solver.

use std::sync::Arc;

use pliant_material::Material;
use pliant_math::Vec3;
use pliant_mesh::generators::{box_mesh, quad_grid, uv_sphere};
use pliant_mesh::TriangleMesh;
use pliant_solver::body::hull_points;
use pliant_solver::config::{DampingBlend, DeformationConfig, Environment, RigidConfig, SoftConfig};
use pliant_solver::point::Point;
use pliant_solver::spring::{Spring, SpringKind, SpringNetwork};
use pliant_solver::{Body, RigidBody, SimulationBody, SoftBody, SpatialHash};
use pliant_types::{PliantError, PointId, SpringId};

fn plastic() -> Arc<Material> {
    Arc::new(Material::plastic())
}

fn vacuum_ball() -> RigidBody {
    RigidBody::with_config(Vec3::ZERO, 1.0, 1.0, plastic(), 20, RigidConfig::vacuum()).unwrap()
}

fn still_soft_config() -> SoftConfig {
    SoftConfig {
        environment: Environment::zero_gravity(),
        ..Default::default()
    }
}

fn soft_cube(config: SoftConfig) -> SoftBody {
    SoftBody::with_config(&box_mesh(Vec3::ONE), 1.0, plastic(), false, config).unwrap()
}

// ─── Spring Tests ─────────────────────────────────────────────

fn two_points(b: Vec3) -> Vec<Point> {
    vec![Point::new(Vec3::ZERO, 1.0), Point::new(b, 1.0)]
}

#[test]
fn spring_zero_force_at_rest_length() {
    let points = two_points(Vec3::new(1.0, 0.0, 0.0));
    let spring = Spring::between(&points, PointId(0), PointId(1), 5.0, 0.1, SpringKind::Structural);
    assert_eq!(spring.rest_length(), 1.0);
    let f = spring.force_on_a(&points).unwrap();
    assert!(f.length() < 1e-12);
}

#[test]
fn stretched_spring_pulls_endpoints_together() {
    let mut points = two_points(Vec3::new(1.0, 0.0, 0.0));
    let spring = Spring::between(&points, PointId(0), PointId(1), 2.0, 0.0, SpringKind::Structural);
    points[1].position = Vec3::new(2.0, 0.0, 0.0);
    let f = spring.force_on_a(&points).unwrap();
    assert!((f - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-12);
    assert!((spring.stretch(&points) - 1.0).abs() < 1e-12);
}

#[test]
fn spring_damping_opposes_separation_speed() {
    let mut points = two_points(Vec3::new(1.0, 0.0, 0.0));
    let spring = Spring::between(&points, PointId(0), PointId(1), 0.0, 0.5, SpringKind::Structural);
    points[1].velocity = Vec3::new(2.0, 0.0, 0.0);
    // b moving away drags a along.
    let f = spring.force_on_a(&points).unwrap();
    assert!((f - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-12);
}

#[test]
fn degenerate_spring_is_skipped() {
    let mut points = two_points(Vec3::new(1.0, 0.0, 0.0));
    let spring = Spring::between(&points, PointId(0), PointId(1), 5.0, 0.1, SpringKind::Structural);
    points[1].position = Vec3::new(1e-4, 0.0, 0.0);
    assert!(spring.force_on_a(&points).is_none());
}

#[test]
fn inactive_spring_gives_no_force() {
    let mut points = two_points(Vec3::new(1.0, 0.0, 0.0));
    let mut spring =
        Spring::between(&points, PointId(0), PointId(1), 5.0, 0.0, SpringKind::Structural);
    points[1].position = Vec3::new(3.0, 0.0, 0.0);
    spring.is_active = false;
    assert!(spring.force_on_a(&points).is_none());
}

#[test]
fn network_incidence_and_forces() {
    let mut points = vec![
        Point::new(Vec3::ZERO, 1.0),
        Point::new(Vec3::X, 1.0),
        Point::new(Vec3::Y, 1.0),
    ];
    let springs = vec![
        Spring::between(&points, PointId(0), PointId(1), 1.0, 0.0, SpringKind::Structural),
        Spring::between(&points, PointId(1), PointId(2), 1.0, 0.0, SpringKind::Structural),
    ];
    let mut network = SpringNetwork::new(3, springs);
    assert_eq!(network.incident(PointId(1)).len(), 2);
    assert_eq!(network.incident(PointId(0)), &[SpringId(0)]);
    assert!(network.incident(PointId(7)).is_empty());

    points[0].position = Vec3::new(-1.0, 0.0, 0.0);
    let f0 = network.force_on(PointId(0), &points);
    assert!((f0 - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-12);

    // Point 1 sees both springs; an active degenerate one is counted.
    points[2].position = points[1].position;
    let (_, degenerate) = network.force_on_counted(PointId(1), &points);
    assert_eq!(degenerate, 1);
    points[2].position = Vec3::Y;

    let skipped = network.accumulate(&mut points);
    assert_eq!(skipped, 0);
    let net: Vec3 = points.iter().map(|p| p.force).sum();
    assert!(net.length() < 1e-12, "spring forces must cancel");

    assert!(network.set_active(SpringId(1), false));
    assert_eq!(network.active_count(), 1);
    // Disabled springs are neither evaluated nor counted.
    points[2].position = points[1].position;
    let (_, degenerate) = network.force_on_counted(PointId(1), &points);
    assert_eq!(degenerate, 0);
    assert!(!network.set_active(SpringId(9), false));
}

// ─── Config Tests ─────────────────────────────────────────────

#[test]
fn damping_blend_interpolates_and_clamps() {
    let blend = DampingBlend::rigid();
    assert!((blend.factor(0.0) - 0.98).abs() < 1e-12);
    assert!((blend.factor(5.0) - 0.965).abs() < 1e-12);
    assert!((blend.factor(10.0) - 0.95).abs() < 1e-12);
    assert!((blend.factor(1000.0) - 0.95).abs() < 1e-12);

    let soft = DampingBlend::soft();
    assert!((soft.factor(0.0) - 0.9).abs() < 1e-12);
    assert!((soft.factor(20.0) - 0.8).abs() < 1e-12);
}

#[test]
fn deformation_accumulates_with_threshold_and_cap() {
    let cfg = DeformationConfig::rigid();
    assert_eq!(cfg.accumulate(0.0, 0.05), None);
    assert_eq!(cfg.accumulate(0.0, f64::NAN), None);
    assert!((cfg.accumulate(0.0, 5.0).unwrap() - 0.05).abs() < 1e-12);
    assert!((cfg.accumulate(0.0, 50.0).unwrap() - 0.1).abs() < 1e-12);
    assert!((cfg.accumulate(0.45, 10.0).unwrap() - 0.5).abs() < 1e-12);
    assert_eq!(DeformationConfig::soft().max_deformation, 1.0);
}

#[test]
fn environment_wind() {
    let mut env = Environment::default();
    assert_eq!(env.wind_acceleration(), Vec3::ZERO);
    env.set_wind(Vec3::new(3.0, 0.0, 4.0));
    assert!((env.wind_acceleration() - Vec3::new(3.0, 0.0, 4.0)).length() < 1e-12);
    env.set_wind(Vec3::ZERO);
    assert_eq!(env.wind_acceleration(), Vec3::ZERO);
}

#[test]
fn config_defaults() {
    let soft = SoftConfig::default();
    assert_eq!(soft.max_iterations, 3);
    assert!((soft.update_interval - 0.016).abs() < 1e-12);
    assert!((soft.shape_retention - 100.0).abs() < 1e-12);
    assert!((soft.hash_cell_size - 2.0).abs() < 1e-12);

    let rigid = RigidConfig::default();
    assert!((rigid.spring_stiffness - 20.0).abs() < 1e-12);
    assert!((rigid.environment.gravity.y + 9.81).abs() < 1e-12);
    assert!((rigid.cross_section_area() - std::f64::consts::PI * 0.25).abs() < 1e-12);
}

#[test]
fn config_validation() {
    assert!(SoftConfig::default().validate().is_ok());
    assert!(RigidConfig::default().validate().is_ok());

    let bad = SoftConfig {
        max_iterations: 0,
        ..Default::default()
    };
    assert!(matches!(bad.validate(), Err(PliantError::InvalidConfig(_))));

    let bad = RigidConfig {
        damping: DampingBlend {
            base: 1.5,
            velocity_scaled: 0.9,
            span: 10.0,
        },
        ..Default::default()
    };
    assert!(bad.validate().is_err());
}

#[test]
fn config_toml_roundtrip() {
    let config = SoftConfig::jelly();
    let text = toml::to_string(&config).unwrap();
    let recovered: SoftConfig = toml::from_str(&text).unwrap();
    assert_eq!(recovered, config);

    let config = RigidConfig::vacuum();
    let text = toml::to_string(&config).unwrap();
    let recovered: RigidConfig = toml::from_str(&text).unwrap();
    assert_eq!(recovered, config);
}

#[test]
fn config_json_roundtrip() {
    let config = SoftConfig::every_call();
    let json = serde_json::to_string(&config).unwrap();
    let recovered: SoftConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, config);
}

// ─── Spatial Hash Tests ───────────────────────────────────────

#[test]
fn spatial_hash_nearby() {
    let mut hash = SpatialHash::new(2.0);
    hash.insert(Vec3::new(0.5, 0.5, 0.5), 0);
    hash.insert(Vec3::new(2.5, 0.5, 0.5), 1);
    hash.insert(Vec3::new(20.0, 0.0, 0.0), 2);
    assert_eq!(hash.len(), 3);

    let mut near = hash.nearby(Vec3::new(0.5, 0.5, 0.5), 1.0);
    near.sort_unstable();
    assert_eq!(near, vec![0, 1]);

    assert!(hash.nearby(Vec3::new(-30.0, 0.0, 0.0), 1.0).is_empty());
}

#[test]
fn spatial_hash_rebuild_replaces_contents() {
    let mut hash = SpatialHash::new(2.0);
    hash.insert(Vec3::new(100.0, 0.0, 0.0), 9);
    let points = vec![Point::new(Vec3::ZERO, 1.0), Point::new(Vec3::X, 1.0)];
    hash.rebuild(&points);
    assert_eq!(hash.len(), 2);
    assert!(hash.nearby(Vec3::new(100.0, 0.0, 0.0), 0.5).is_empty());
    hash.clear();
    assert!(hash.is_empty());
}

// ─── Rigid Body Tests ─────────────────────────────────────────

#[test]
fn ball_construction() {
    let ball = vacuum_ball();
    assert_eq!(ball.points().len(), 20);
    assert_eq!(ball.springs().len(), 20);
    assert!((ball.points()[3].mass - 0.05).abs() < 1e-12);
    let k = ball.springs().springs()[0].stiffness;
    assert!((k - 20.0 * 0.7).abs() < 1e-12);
    for p in ball.points() {
        assert!((p.position.length() - 1.0).abs() < 1e-12);
        assert_eq!(p.position.z, 0.0);
    }
    assert!(ball.center().length() < 1e-12);
}

#[test]
fn ball_construction_errors() {
    let err = RigidBody::new(Vec3::ZERO, 1.0, 1.0, plastic(), 0).unwrap_err();
    assert!(matches!(err, PliantError::InvalidBody(_)));
    assert!(RigidBody::new(Vec3::ZERO, 1.0, 1.0, plastic(), 2).is_err());
    assert!(RigidBody::new(Vec3::ZERO, 1.0, 0.0, plastic(), 20).is_err());
    assert!(RigidBody::new(Vec3::ZERO, -1.0, 1.0, plastic(), 20).is_err());
    assert!(RigidBody::new(Vec3::ZERO, 1.0, f64::NAN, plastic(), 20).is_err());

    let mut bad = Material::rubber();
    bad.elasticity = 2.0;
    assert!(matches!(
        RigidBody::new(Vec3::ZERO, 1.0, 1.0, Arc::new(bad), 20),
        Err(PliantError::InvalidMaterial(_))
    ));
}

#[test]
fn ball_at_rest_without_gravity_stays_put() {
    let mut ball = vacuum_ball();
    let before = ball.positions();
    for _ in 0..100 {
        let report = ball.step(1.0 / 60.0).unwrap();
        assert_eq!(report.numerical_resets, 0);
    }
    for (a, b) in before.iter().zip(ball.positions()) {
        assert!((*a - b).length() < 1e-9);
    }
    assert!(ball.average_velocity().length() < 1e-9);
}

#[test]
fn ball_falls_under_gravity() {
    let mut ball = RigidBody::new(Vec3::new(0.0, 5.0, 0.0), 0.5, 1.0, plastic(), 12).unwrap();
    for _ in 0..30 {
        ball.step(1.0 / 60.0).unwrap();
    }
    assert!(ball.center().y < 5.0);
    assert!(ball.average_velocity().y < 0.0);
    for p in ball.points() {
        assert_eq!(p.force, Vec3::ZERO);
    }
}

#[test]
fn ball_timestep_validation() {
    let mut ball = vacuum_ball();
    assert!(matches!(ball.step(-0.1), Err(PliantError::InvalidTimestep(_))));
    assert!(ball.step(f64::INFINITY).is_err());
    let report = ball.step(0.0).unwrap();
    assert!(report.skipped);
}

#[test]
fn ball_external_forces() {
    let mut ball = vacuum_ball();
    let push = Vec3::new(2.0, 0.0, 0.0);
    ball.add_external_force(push);
    ball.step(0.01).unwrap();
    assert!(ball.average_velocity().x > 0.0);

    assert!(ball.remove_external_force(push));
    assert!(!ball.remove_external_force(push));
    assert!(ball.integrator().external_forces().is_empty());
}

#[test]
fn ball_wind_pushes_downwind() {
    let mut ball = vacuum_ball();
    ball.set_wind(Vec3::new(0.0, 0.0, -3.0));
    ball.step(0.01).unwrap();
    assert!(ball.average_velocity().z < 0.0);
}

#[test]
fn ball_subthreshold_deformation_is_noop() {
    let mut ball = vacuum_ball();
    let before = ball.positions();
    assert!(!ball.apply_deformation(Vec3::new(1.0, 0.0, 0.0), 0.05));
    assert_eq!(ball.deformation(), 0.0);
    assert_eq!(before, ball.positions());
}

#[test]
fn ball_deformation_is_monotone_and_bounded() {
    let mut ball = vacuum_ball();
    let impact = Vec3::new(1.0, 0.0, 0.0);
    let mut last = 0.0;
    for _ in 0..20 {
        assert!(ball.apply_deformation(impact, 10.0));
        let d = ball.deformation();
        assert!(d >= last);
        assert!(d <= 0.5 + 1e-12);
        last = d;
    }
    assert!((last - 0.5).abs() < 1e-12);
}

#[test]
fn ball_deformation_displaces_and_resets() {
    let mut ball = vacuum_ball();
    let rest = ball.positions();
    assert!(ball.apply_deformation(Vec3::new(1.0, 0.0, 0.0), 10.0));
    let moved = ball
        .positions()
        .iter()
        .zip(&rest)
        .filter(|(a, b)| (**a - **b).length() > 1e-6)
        .count();
    assert!(moved > 0);

    ball.reset_deformation();
    assert_eq!(ball.deformation(), 0.0);
    for (a, b) in ball.positions().iter().zip(&rest) {
        assert!((*a - *b).length() < 1e-12);
    }
}

#[test]
fn ball_nan_is_reset_to_finite_rest() {
    let mut ball = vacuum_ball();
    ball.points_mut()[0].velocity = Vec3::new(f64::NAN, 0.0, 0.0);
    let report = ball.step(0.016).unwrap();
    assert!(report.numerical_resets >= 1);
    for p in ball.points() {
        assert!(p.position.is_finite());
        assert!(p.velocity.is_finite());
    }
    assert!((ball.points()[0].position - ball.rest_position(0)).length() < 1e-9);
}

#[test]
fn ball_out_of_bounds_is_reset() {
    let mut ball = vacuum_ball();
    ball.points_mut()[5].position = Vec3::new(1.0e6, 0.0, 0.0);
    let report = ball.step(0.016).unwrap();
    assert!(report.numerical_resets >= 1);
    for p in ball.points() {
        assert!(p.position.abs().max_element() <= 1000.0);
    }
}

// ─── Soft Body Tests ──────────────────────────────────────────

#[test]
fn soft_cube_springs() {
    let body = soft_cube(SoftConfig::default());
    let springs = body.springs().springs();
    let structural = springs.iter().filter(|s| s.kind == SpringKind::Structural).count();
    let bending = springs.iter().filter(|s| s.kind == SpringKind::Bending).count();
    assert_eq!(structural, 18);
    assert!(bending > 0);

    let mut pairs = std::collections::HashSet::new();
    for s in springs {
        let key = (s.a.0.min(s.b.0), s.a.0.max(s.b.0));
        assert!(pairs.insert(key), "duplicate spring {:?}", key);
    }

    let k = springs[0].stiffness;
    assert!((k - 3.0 * 0.7).abs() < 1e-12);
    assert_eq!(body.active_spring_count(), springs.len());
}

#[test]
fn soft_body_geometry() {
    let mesh = uv_sphere(1.0, 6, 8);
    let body = SoftBody::new(&mesh, 2.0, plastic(), true).unwrap();
    assert_eq!(body.points().len(), mesh.vertex_count());
    let m = 2.0 / mesh.vertex_count() as f64;
    assert!((body.points()[0].mass - m).abs() < 1e-12);
    assert!((body.bounding_radius() - 1.0).abs() < 1e-9);
    assert!(body.center().length() < 1e-9);
    assert!((body.deformation_radius() - 0.8).abs() < 1e-9);
    assert!((body.total_mass() - 2.0).abs() < 1e-12);
}

#[test]
fn flat_sheet_average_edge_length() {
    let mesh = quad_grid(1, 1, 1.0, 1.0);
    let body = SoftBody::new(&mesh, 1.0, plastic(), false).unwrap();
    let expected = (4.0 + 2.0_f64.sqrt()) / 5.0;
    assert!((body.average_edge_length() - expected).abs() < 1e-12);
    assert!((body.deformation_radius() - 3.0 * expected).abs() < 1e-12);
}

#[test]
fn soft_construction_errors() {
    let empty = TriangleMesh::default();
    assert!(matches!(
        SoftBody::new(&empty, 1.0, plastic(), true),
        Err(PliantError::InvalidMesh(_))
    ));

    let positions = [Vec3::ZERO, Vec3::X, Vec3::Y];
    assert!(SoftBody::from_raw(&positions, &[0, 1], 1.0, plastic(), false).is_err());
    assert!(SoftBody::from_raw(&positions, &[0, 1, 5], 1.0, plastic(), false).is_err());
    assert!(SoftBody::from_raw(&positions, &[0, 1, 1], 1.0, plastic(), false).is_err());
    assert!(SoftBody::from_raw(&positions, &[0, 1, 2], 0.0, plastic(), false).is_err());
    assert!(SoftBody::from_raw(&positions, &[0, 1, 2], 1.0, plastic(), false).is_ok());
}

#[test]
fn soft_update_clock_accumulates() {
    let mut body = soft_cube(SoftConfig::default());
    let first = body.step(0.01).unwrap();
    assert!(first.skipped);
    assert!((body.pending_time() - 0.01).abs() < 1e-12);

    let second = body.step(0.01).unwrap();
    assert!(!second.skipped);
    assert_eq!(second.substeps, 3);
    assert_eq!(body.pending_time(), 0.0);
    assert!(body.spatial_hash().is_some_and(|h| h.len() == 8));
}

#[test]
fn soft_timestep_validation() {
    let mut body = soft_cube(SoftConfig::default());
    assert!(matches!(body.step(-1.0), Err(PliantError::InvalidTimestep(_))));
    assert!(body.step(f64::NAN).is_err());
    assert!(body.step(0.0).unwrap().skipped);
    assert_eq!(body.pending_time(), 0.0);
}

#[test]
fn soft_body_sags_under_gravity() {
    let mut body = soft_cube(SoftConfig::default());
    let start = body.center();
    for _ in 0..10 {
        body.step(1.0 / 60.0).unwrap();
    }
    assert!(body.center().y < start.y);
    for p in body.points() {
        assert!(p.position.is_finite());
        assert_eq!(p.force, Vec3::ZERO);
    }
}

fn settle(body: &mut SoftBody) {
    for _ in 0..20 {
        body.step(0.05).unwrap();
    }
}

#[test]
fn resting_body_falls_asleep() {
    let mut body = soft_cube(still_soft_config());
    assert_eq!(body.active_point_count(), 8);
    settle(&mut body);
    assert_eq!(body.active_point_count(), 0);
}

#[test]
fn sleeping_points_are_frozen() {
    let mut body = soft_cube(still_soft_config());
    settle(&mut body);
    assert_eq!(body.active_point_count(), 0);

    // Nudge a sleeping point without waking it: shape retention must not act.
    let nudged = body.points()[3].position + Vec3::new(0.05, 0.0, 0.0);
    body.points_mut()[3].position = nudged;
    settle(&mut body);
    assert_eq!(body.points()[3].position, nudged);
    assert!(!body.is_point_active(PointId(3)));
}

#[test]
fn deformation_wakes_sleeping_points() {
    let mut body = soft_cube(still_soft_config());
    settle(&mut body);
    assert_eq!(body.active_point_count(), 0);

    let corner = body.points()[0].position;
    assert!(body.apply_deformation(corner, 10.0));
    assert_eq!(body.active_point_count(), 8);
}

#[test]
fn forces_and_wind_wake_sleeping_points() {
    let mut body = soft_cube(still_soft_config());
    settle(&mut body);
    body.add_external_force(Vec3::X);
    assert_eq!(body.active_point_count(), 8);

    settle(&mut body);
    body.set_wind(Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(body.active_point_count(), 8);
}

#[test]
fn wake_up_survives_the_next_sleep_sweep() {
    let dt = 1.0 / 60.0;
    // Wake at every step offset within one sweep interval.
    for offset in 0..30 {
        let mut body = soft_cube(still_soft_config());
        settle(&mut body);
        assert_eq!(body.active_point_count(), 0);

        for _ in 0..offset {
            body.step(dt).unwrap();
        }
        let start = body.positions();
        body.add_external_force(Vec3::new(20.0, 0.0, 0.0));
        for _ in 0..120 {
            body.step(dt).unwrap();
        }

        let moved = body
            .positions()
            .iter()
            .zip(&start)
            .map(|(p, s)| p.distance(*s))
            .fold(0.0, f64::max);
        assert!(moved > 1e-3, "offset {offset}: standing force never acted");
    }
}

#[test]
fn contact_wake_survives_the_next_sleep_sweep() {
    let dt = 1.0 / 60.0;
    for offset in 0..30 {
        let mut body = soft_cube(still_soft_config());
        settle(&mut body);
        for _ in 0..offset {
            body.step(dt).unwrap();
        }

        body.points_mut()[0].velocity = Vec3::new(0.0, 1.0, 0.0);
        body.wake_point(PointId(0));
        let before = body.points()[0].position;
        for _ in 0..12 {
            body.step(dt).unwrap();
        }
        assert_ne!(body.points()[0].position, before, "offset {offset}");
    }
}

#[test]
fn wind_moves_soft_body_downwind() {
    let mut body = soft_cube(still_soft_config());
    body.set_wind(Vec3::new(5.0, 0.0, 0.0));
    for _ in 0..5 {
        body.step(1.0 / 60.0).unwrap();
    }
    assert!(body.center().x > 0.0);
}

#[test]
fn soft_subthreshold_deformation_is_noop() {
    let mut body = soft_cube(still_soft_config());
    let before = body.positions();
    assert!(!body.apply_deformation(Vec3::ZERO, 0.01));
    assert_eq!(body.deformation(), 0.0);
    assert_eq!(before, body.positions());
}

#[test]
fn soft_deformation_bounded_and_resettable() {
    let mut body = soft_cube(still_soft_config());
    let impact = body.points()[0].position;
    for _ in 0..30 {
        body.apply_deformation(impact, 10.0);
        assert!(body.deformation() <= 1.0 + 1e-12);
    }
    assert!((body.deformation() - 1.0).abs() < 1e-12);

    body.reset_deformation();
    assert_eq!(body.deformation(), 0.0);
    for (p, rest) in body.points().iter().zip(body.rest_positions()) {
        assert_eq!(p.position, *rest);
    }
}

#[test]
fn soft_nan_point_is_reset_and_slept() {
    let mut body = soft_cube(SoftConfig::every_call());
    body.points_mut()[0].velocity = Vec3::new(0.0, f64::NAN, 0.0);
    let report = body.step(0.016).unwrap();
    assert!(report.numerical_resets >= 1);
    for p in body.points() {
        assert!(p.position.is_finite());
        assert!(p.velocity.is_finite());
    }
    assert_eq!(body.points()[0].position, body.rest_positions()[0]);
    assert!(!body.is_point_active(PointId(0)));
}

#[test]
fn soft_extras() {
    let mut body = soft_cube(still_soft_config());
    assert_eq!(body.spring_stretch(SpringId(0)), Some(0.0));
    assert_eq!(body.spring_stretch(SpringId(10_000)), None);

    body.set_velocity(Vec3::new(0.0, 0.0, 2.0));
    assert!((body.average_velocity() - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-12);

    body.set_shape_retention(5.0);
    assert_eq!(body.integrator().config().shape_retention, 5.0);

    assert!(body.set_spring_active(SpringId(0), false));
    assert_eq!(body.active_spring_count(), body.springs().len() - 1);
}

// ─── Body / Hull Tests ────────────────────────────────────────

#[test]
fn hull_keeps_small_sets_whole() {
    let points = vec![Point::new(Vec3::ZERO, 1.0), Point::new(Vec3::X, 1.0)];
    assert_eq!(hull_points(&points).len(), 2);
}

#[test]
fn hull_drops_interior_points() {
    let mut points: Vec<Point> = box_mesh(Vec3::splat(2.0))
        .positions()
        .map(|p| Point::new(p, 1.0))
        .collect();
    points.push(Point::new(Vec3::ZERO, 1.0));
    let hull = hull_points(&points);
    assert_eq!(hull.len(), 8);
    assert!(!hull.contains(&Vec3::ZERO));
}

#[test]
fn body_enum_delegates() {
    let mut body = Body::from(vacuum_ball());
    assert_eq!(body.kind_name(), "rigid");
    assert_eq!(body.name(), "ball:plastic");
    assert!(body.as_rigid().is_some());
    assert!(body.as_soft().is_none());
    assert_eq!(body.points().len(), 20);
    assert!((body.total_mass() - 1.0).abs() < 1e-12);
    let aabb = body.aabb();
    assert!((aabb.max.x - 1.0).abs() < 1e-12);
    body.step(0.01).unwrap();

    let soft = Body::from(soft_cube(SoftConfig::default()).named("crate"));
    assert_eq!(soft.kind_name(), "soft");
    assert_eq!(soft.name(), "crate");
    assert_eq!(soft.convex_hull_points().len(), 8);
    assert_eq!(soft.material().name, "plastic");
}
