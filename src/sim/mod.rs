//! Deterministic simulation module
//!
//! All echolocation logic lives here. This module must be pure and deterministic:
//! - Discrete ticks only, no clock
//! - Injected random source only
//! - Stable iteration order (obstacles keep their generation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod engine;
pub mod rng;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{detect, sweep};
pub use engine::SimulationEngine;
pub use rng::{SequenceSource, UniformSource};
pub use snapshot::{AgentView, ObstacleView, PulseView, StateSnapshot};
pub use state::{Agent, Obstacle, Pulse, SimulationState};
pub use tick::{TickEvents, tick};
