//! Simulation state and core entity types
//!
//! Everything a tick reads or writes lives in [`SimulationState`]; the
//! engine owns exactly one and never shares it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::UniformSource;
use crate::config::SimConfig;

/// The moving point source of pulses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Position; `y` never changes after construction
    pub pos: Vec2,
    /// Horizontal velocity per tick
    pub speed: f32,
}

impl Agent {
    pub fn new(x: f32, y: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            speed,
        }
    }

    /// Move one tick to the right
    #[inline]
    pub fn advance(&mut self) {
        self.pos.x += self.speed;
    }
}

/// A static rectangle that a pulse can detect by proximity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
    /// Set by a reaching pulse, cleared on wraparound
    pub detected: bool,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
            detected: false,
        }
    }

    /// Draw an obstacle from the configured placement spans (x, y, width, height)
    pub fn random(config: &SimConfig, rng: &mut impl UniformSource) -> Self {
        let y_span = config.obstacle_y_span();
        let x = config.obstacle_x.sample(rng.next_unit());
        let y = y_span.sample(rng.next_unit());
        let width = config.obstacle_width.sample(rng.next_unit());
        let height = config.obstacle_height.sample(rng.next_unit());
        Self::new(x, y, width, height)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Geometric center of the rectangle
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// A single expanding circular wavefront
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pulse {
    pub center: Vec2,
    /// Non-decreasing while active; always 0 when inactive
    pub radius: f32,
    pub active: bool,
    /// Number of emissions so far; identifies the current wavefront
    pub generation: u32,
}

impl Default for Pulse {
    fn default() -> Self {
        Self {
            center: Vec2::ZERO,
            radius: 0.0,
            active: false,
            generation: 0,
        }
    }
}

impl Pulse {
    /// Start a new wavefront at `center`
    pub fn emit(&mut self, center: Vec2, radius: f32) {
        self.center = center;
        self.radius = radius;
        self.active = true;
        self.generation = self.generation.wrapping_add(1);
    }

    #[inline]
    pub fn grow(&mut self, amount: f32) {
        self.radius += amount;
    }

    /// Collapse the pulse; keeps `active == false => radius == 0`
    pub fn deactivate(&mut self) {
        self.active = false;
        self.radius = 0.0;
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub agent: Agent,
    pub obstacles: Vec<Obstacle>,
    pub pulse: Pulse,
    /// Ticks elapsed since start/reset
    pub tick: u64,
}

impl SimulationState {
    /// Build the initial state, drawing the obstacle layout from `rng`
    pub fn new(config: &SimConfig, rng: &mut impl UniformSource) -> Self {
        let count = usize::try_from(config.obstacle_count).unwrap_or(0);
        let obstacles = (0..count).map(|_| Obstacle::random(config, rng)).collect();
        Self::with_obstacles(config, obstacles)
    }

    /// Build the initial state around a caller-supplied layout
    pub fn with_obstacles(config: &SimConfig, obstacles: Vec<Obstacle>) -> Self {
        Self {
            agent: Agent::new(config.start_x, config.height / 2.0, config.speed),
            obstacles,
            pulse: Pulse::default(),
            tick: 0,
        }
    }

    /// Clear every detection flag
    pub fn clear_detections(&mut self) {
        for obstacle in &mut self.obstacles {
            obstacle.detected = false;
        }
    }

    pub fn detected_count(&self) -> usize {
        self.obstacles.iter().filter(|o| o.detected).count()
    }
}
