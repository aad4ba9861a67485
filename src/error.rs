//! Error types for configuration and engine lifecycle

/// Rejected simulation configuration.
///
/// Returned synchronously by [`SimConfig::validate`](crate::SimConfig::validate)
/// and [`SimulationEngine::start`](crate::SimulationEngine::start). Never
/// retried internally; fix the configuration and start again.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Width or height is not a finite positive number.
    #[error("invalid bounds {width}x{height}: width and height must be finite and > 0")]
    InvalidBounds { width: f32, height: f32 },

    /// Agent speed is not a finite positive number.
    #[error("invalid speed {0}: must be finite and > 0")]
    InvalidSpeed(f32),

    #[error("invalid obstacle count {0}: must be >= 0")]
    NegativeObstacleCount(i32),

    #[error("invalid emission probability {0}: must be within [0, 1]")]
    InvalidEmissionProbability(f32),

    /// A real option is non-finite, or negative where only >= 0 makes sense.
    #[error("invalid {name} {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    /// A placement range is inverted or non-finite.
    #[error("invalid {name} range [{min}, {max}]")]
    InvalidSpan {
        name: &'static str,
        min: f32,
        max: f32,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

/// Engine used after [`SimulationEngine::stop`](crate::SimulationEngine::stop).
///
/// Signals caller misuse, not a transient condition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    #[error("simulation engine was stopped at tick {tick}; start a new engine to continue")]
    Stopped { tick: u64 },
}
