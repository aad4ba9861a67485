//! Simulation configuration
//!
//! Loaded from JSON (partial documents fill in defaults) and validated once
//! in [`SimulationEngine::start`](crate::SimulationEngine::start).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Animal being simulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Species {
    #[default]
    Bat,
    Dolphin,
}

impl Species {
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Bat => "Bat",
            Species::Dolphin => "Dolphin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bat" => Some(Species::Bat),
            "dolphin" => Some(Species::Dolphin),
            _ => None,
        }
    }

    /// Title for the simulation view
    pub fn title(&self) -> &'static str {
        match self {
            Species::Bat => "Bat echolocation",
            Species::Dolphin => "Dolphin echolocation",
        }
    }

    /// One-line description for the simulation view
    pub fn description(&self) -> &'static str {
        match self {
            Species::Bat => {
                "A bat emits ultrasonic pulses and judges the distance to objects from the reflected signal."
            }
            Species::Dolphin => {
                "Dolphins use ultrasound to navigate murky water and hunt fish."
            }
        }
    }
}

/// Where an active pulse is centered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PulseAnchor {
    /// Fixed at the agent's position when the pulse was emitted
    #[default]
    Emission,
    /// Re-centered on the agent before every pulse update
    Agent,
}

/// Closed sampling range `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Degenerate span that always samples `value`
    pub const fn fixed(value: f32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Map a uniform sample in [0, 1) onto the span
    #[inline]
    pub fn sample(&self, unit: f32) -> f32 {
        self.min + unit * (self.max - self.min)
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.min.is_finite() && self.max.is_finite() && self.min <= self.max {
            Ok(())
        } else {
            Err(ConfigError::InvalidSpan {
                name,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimConfig {
    // === Bounds ===
    pub width: f32,
    pub height: f32,

    // === Agent ===
    /// Horizontal velocity per tick
    pub speed: f32,
    /// Agent x at start and after reset
    pub start_x: f32,
    pub species: Species,

    // === Obstacles ===
    /// Obstacles generated at start (negative values are rejected)
    pub obstacle_count: i32,
    pub obstacle_x: Span,
    /// Vertical placement; derived from `height` when unset
    pub obstacle_y: Option<Span>,
    pub obstacle_width: Span,
    pub obstacle_height: Span,

    // === Pulse ===
    /// Radius increment per tick is `speed * pulse_growth_factor`
    pub pulse_growth_factor: f32,
    /// Per-tick chance of a new pulse while idle
    pub emission_probability: f32,
    pub initial_pulse_radius: f32,
    pub pulse_anchor: PulseAnchor,

    // === Wraparound ===
    pub wraparound_margin: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,

            speed: DEFAULT_SPEED,
            start_x: DEFAULT_START_X,
            species: Species::Bat,

            obstacle_count: DEFAULT_OBSTACLE_COUNT,
            obstacle_x: Span::new(OBSTACLE_X_MIN, OBSTACLE_X_MAX),
            obstacle_y: None,
            obstacle_width: Span::new(OBSTACLE_SIZE_MIN, OBSTACLE_SIZE_MAX),
            obstacle_height: Span::new(OBSTACLE_SIZE_MIN, OBSTACLE_SIZE_MAX),

            pulse_growth_factor: DEFAULT_PULSE_GROWTH_FACTOR,
            emission_probability: DEFAULT_EMISSION_PROBABILITY,
            initial_pulse_radius: DEFAULT_INITIAL_PULSE_RADIUS,
            pulse_anchor: PulseAnchor::Emission,

            wraparound_margin: DEFAULT_WRAPAROUND_MARGIN,
        }
    }
}

impl SimConfig {
    /// Default configuration for a species
    pub fn for_species(species: Species) -> Self {
        Self {
            species,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Vertical placement span, keeping clear of the top and bottom edges
    pub fn obstacle_y_span(&self) -> Span {
        self.obstacle_y.unwrap_or_else(|| {
            let margin = OBSTACLE_Y_MARGIN.min(self.height / 2.0);
            Span::new(margin, self.height - margin)
        })
    }

    /// Radius added to an active pulse each tick
    #[inline]
    pub fn pulse_growth(&self) -> f32 {
        self.speed * self.pulse_growth_factor
    }

    /// Check every option; the engine never runs on a config that fails this
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !(positive(self.width) && positive(self.height)) {
            return Err(ConfigError::InvalidBounds {
                width: self.width,
                height: self.height,
            });
        }
        if !positive(self.speed) {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        if self.obstacle_count < 0 {
            return Err(ConfigError::NegativeObstacleCount(self.obstacle_count));
        }
        if !(0.0..=1.0).contains(&self.emission_probability) {
            return Err(ConfigError::InvalidEmissionProbability(
                self.emission_probability,
            ));
        }

        if !self.start_x.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "startX",
                value: self.start_x,
            });
        }
        non_negative("pulseGrowthFactor", self.pulse_growth_factor)?;
        non_negative("initialPulseRadius", self.initial_pulse_radius)?;
        non_negative("wraparoundMargin", self.wraparound_margin)?;

        self.obstacle_x.validate("obstacleX")?;
        self.obstacle_y_span().validate("obstacleY")?;
        self.obstacle_width.validate("obstacleWidth")?;
        self.obstacle_height.validate("obstacleHeight")?;

        Ok(())
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter { name, value })
    }
}
