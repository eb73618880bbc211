//! Benchmark runner: executes scenarios and collects metrics.
//!
//! One step advances every body by `dt`, then runs the collision pipeline
//! over all pairs and the ground plane.

use std::time::Instant;

use pliant_contact::{CollisionPipeline, ContactResult};
use pliant_math::Vec3;
use pliant_solver::{Body, SimulationBody};
use pliant_telemetry::{ContactKind, EventBus, EventKind, SimulationEvent};
use pliant_types::{PliantResult, Scalar};

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario, emitting telemetry on `bus`.
    ///
    /// The scenario's bodies are cloned; the scenario itself is untouched.
    pub fn run(scenario: &Scenario, bus: &mut EventBus) -> PliantResult<BenchmarkMetrics> {
        let mut bodies = scenario.bodies.clone();
        let mut pipeline = CollisionPipeline::default();
        pipeline.config = scenario.contact.clone();
        if let Some(ground) = &scenario.ground {
            pipeline = pipeline.with_ground(ground.clone());
        }

        let initial: Vec<Vec<Vec3>> = bodies.iter().map(|b| b.positions()).collect();
        let mut step_times = Vec::with_capacity(scenario.timesteps as usize);
        let mut contacts: u64 = 0;
        let mut numerical_resets: u64 = 0;
        let mut sim_time: Scalar = 0.0;

        let total_start = Instant::now();

        for step in 0..scenario.timesteps {
            let step_start = Instant::now();
            bus.emit(SimulationEvent::new(step, EventKind::StepBegin { sim_time }));

            for body in bodies.iter_mut() {
                let report = body.step(scenario.dt)?;
                if report.numerical_resets > 0 {
                    numerical_resets += report.numerical_resets as u64;
                    bus.emit(SimulationEvent::new(
                        step,
                        EventKind::NumericalReset {
                            body: body.name().to_string(),
                            count: report.numerical_resets as u32,
                        },
                    ));
                }
            }

            let before: Vec<Scalar> = bodies.iter().map(|b| b.deformation()).collect();
            let collisions = pipeline.resolve_all(&mut bodies, scenario.dt);
            emit_contact(bus, step, ContactKind::Ball, &collisions.ball_result);
            emit_contact(bus, step, ContactKind::PointPair, &collisions.point_result);
            emit_contact(bus, step, ContactKind::Ground, &collisions.ground_result);
            contacts += (collisions.contact_result().resolved_count
                + collisions.ground_result.resolved_count) as u64;

            for (body, &old) in bodies.iter().zip(&before) {
                let amount = body.deformation();
                if amount > old {
                    bus.emit(SimulationEvent::new(
                        step,
                        EventKind::Deformation {
                            body: body.name().to_string(),
                            amount,
                        },
                    ));
                }
            }

            let wall_time = step_start.elapsed().as_secs_f64();
            step_times.push(wall_time);
            bus.emit(SimulationEvent::new(step, EventKind::StepEnd { wall_time }));
            bus.flush();
            sim_time += scenario.dt;
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();

        let final_kinetic_energy: Scalar = bodies.iter().map(|b| b.kinetic_energy()).sum();
        let max_displacement = bodies
            .iter()
            .zip(&initial)
            .flat_map(|(b, start)| {
                b.points()
                    .iter()
                    .zip(start)
                    .map(|(p, &s)| p.position.distance(s))
            })
            .fold(0.0, Scalar::max);
        let active_points: usize = bodies.iter().map(live_points).sum();

        let avg_step_time = if step_times.is_empty() {
            0.0
        } else {
            step_times.iter().sum::<f64>() / step_times.len() as f64
        };
        let min_step_time = step_times.iter().copied().fold(f64::MAX, f64::min);
        let max_step_time = step_times.iter().copied().fold(0.0, f64::max);

        tracing::debug!(
            scenario = scenario.kind.name(),
            steps = scenario.timesteps,
            contacts,
            total_wall_time,
            "benchmark finished"
        );

        Ok(BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            body_count: bodies.len(),
            point_count: scenario.point_count(),
            timesteps: scenario.timesteps,
            total_wall_time,
            avg_step_time,
            min_step_time,
            max_step_time,
            final_kinetic_energy,
            max_displacement,
            contacts,
            numerical_resets,
            active_points,
        })
    }

    /// Run all scenarios and return metrics for each.
    pub fn run_all(bus: &mut EventBus) -> PliantResult<Vec<BenchmarkMetrics>> {
        let mut results = Vec::new();
        for &kind in ScenarioKind::all() {
            let scenario = Scenario::from_kind(kind)?;
            results.push(Self::run(&scenario, bus)?);
        }
        Ok(results)
    }
}

fn emit_contact(bus: &EventBus, step: u32, kind: ContactKind, result: &ContactResult) {
    if result.is_empty() {
        return;
    }
    bus.emit(SimulationEvent::new(
        step,
        EventKind::Contact {
            kind,
            resolved: result.resolved_count,
            max_penetration: result.max_penetration,
        },
    ));
}

fn live_points(body: &Body) -> usize {
    match body {
        Body::Soft(soft) => soft.active_point_count(),
        Body::Rigid(ball) => ball.points().len(),
    }
}
