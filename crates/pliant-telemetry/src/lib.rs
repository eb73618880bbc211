//! # pliant-telemetry
//!
//! Event bus for simulation telemetry. The runner emits structured events
//! (step timing, numerical resets, contacts, deformation) that are consumed
//! by pluggable sinks.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{ContactKind, EventKind, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
