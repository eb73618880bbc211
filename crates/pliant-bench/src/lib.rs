//! # pliant-bench
//!
//! Benchmark suite for the pliant body simulation.
//!
//! Provides four procedural scenarios, a runner that steps bodies and the
//! collision pipeline together, and CSV export of the collected metrics.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{Scenario, ScenarioKind};
