//! Read-only copies of simulation state for render collaborators
//!
//! A [`StateSnapshot`] owns its data. Nothing in it aliases engine state,
//! so a consumer can keep, serialize, or drop it freely.

use serde::{Deserialize, Serialize};

use super::state::{Agent, Obstacle, Pulse, SimulationState};
use crate::config::Species;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentView {
    pub x: f32,
    pub y: f32,
}

impl From<&Agent> for AgentView {
    fn from(agent: &Agent) -> Self {
        Self {
            x: agent.pos.x,
            y: agent.pos.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub detected: bool,
}

impl From<&Obstacle> for ObstacleView {
    fn from(obstacle: &Obstacle) -> Self {
        Self {
            x: obstacle.pos.x,
            y: obstacle.pos.y,
            width: obstacle.width(),
            height: obstacle.height(),
            detected: obstacle.detected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PulseView {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
    pub active: bool,
    pub generation: u32,
}

impl From<&Pulse> for PulseView {
    fn from(pulse: &Pulse) -> Self {
        Self {
            center_x: pulse.center.x,
            center_y: pulse.center.y,
            radius: pulse.radius,
            active: pulse.active,
            generation: pulse.generation,
        }
    }
}

/// Immutable view of the simulation after a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub agent: AgentView,
    pub obstacles: Vec<ObstacleView>,
    pub pulse: PulseView,
    pub tick: u64,
    pub species: Species,
}

impl StateSnapshot {
    pub fn capture(state: &SimulationState, species: Species) -> Self {
        Self {
            agent: AgentView::from(&state.agent),
            obstacles: state.obstacles.iter().map(ObstacleView::from).collect(),
            pulse: PulseView::from(&state.pulse),
            tick: state.tick,
            species,
        }
    }

    pub fn detected_count(&self) -> usize {
        self.obstacles.iter().filter(|o| o.detected).count()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
