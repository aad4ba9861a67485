//! Echo Sim - A deterministic echolocation simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (agent, pulses, obstacles, tick loop)
//! - `config`: Simulation configuration and validation
//! - `renderer`: Snapshot consumer boundary (the engine never draws)
//! - `platform`: Fixed-cadence driving and the browser facade

pub mod config;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{PulseAnchor, SimConfig, Span, Species};
pub use error::{ConfigError, LifecycleError};
pub use renderer::RenderSink;
pub use sim::{SimulationEngine, StateSnapshot};

/// Simulation configuration constants
pub mod consts {
    /// Tick cadence of the page driver (20 Hz)
    pub const TICK_INTERVAL_MS: f64 = 50.0;
    /// Maximum ticks run per driver pump to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Simulation bounds
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 400.0;

    /// Agent defaults
    pub const DEFAULT_SPEED: f32 = 3.0;
    pub const DEFAULT_START_X: f32 = 100.0;

    /// Pulse defaults
    pub const DEFAULT_PULSE_GROWTH_FACTOR: f32 = 5.0;
    pub const DEFAULT_EMISSION_PROBABILITY: f32 = 0.05;
    pub const DEFAULT_INITIAL_PULSE_RADIUS: f32 = 10.0;

    /// Distance past the right bound before the agent re-enters on the left
    pub const DEFAULT_WRAPAROUND_MARGIN: f32 = 50.0;

    /// Obstacle placement defaults
    pub const DEFAULT_OBSTACLE_COUNT: i32 = 5;
    pub const OBSTACLE_X_MIN: f32 = 300.0;
    pub const OBSTACLE_X_MAX: f32 = 700.0;
    /// Vertical keep-out band at the top and bottom edges
    pub const OBSTACLE_Y_MARGIN: f32 = 50.0;
    pub const OBSTACLE_SIZE_MIN: f32 = 20.0;
    pub const OBSTACLE_SIZE_MAX: f32 = 50.0;
}
