//! Simulation engine lifecycle
//!
//! [`SimulationEngine`] owns one isolated [`SimulationState`] plus its
//! random source. An external driver calls [`SimulationEngine::step`] at
//! whatever cadence it likes; the engine has no timer and never draws.

use rand_pcg::Pcg32;

use super::rng::{self, UniformSource};
use super::snapshot::StateSnapshot;
use super::state::{Obstacle, SimulationState};
use super::tick::{TickEvents, tick};
use crate::config::SimConfig;
use crate::error::{ConfigError, LifecycleError};

/// Handle to a running simulation
///
/// Not reentrant: `step` takes `&mut self`, so two steps on the same
/// engine can never overlap.
#[derive(Debug)]
pub struct SimulationEngine<R = Pcg32> {
    config: SimConfig,
    rng: R,
    state: SimulationState,
    /// Caller-supplied layout restored on reset instead of a fresh draw
    fixed_layout: Option<Vec<Obstacle>>,
    last_events: TickEvents,
    stopped: bool,
}

impl SimulationEngine<Pcg32> {
    /// Start with the production PCG source
    pub fn seeded(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        log::info!("Seeding simulation with {}", seed);
        Self::start(config, rng::seeded(seed))
    }
}

impl<R: UniformSource> SimulationEngine<R> {
    /// Validate `config` and build the initial state, drawing the obstacle layout from `rng`
    pub fn start(config: SimConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = SimulationState::new(&config, &mut rng);
        log::info!(
            "{} simulation started: {}x{}, speed {}, {} obstacles",
            config.species.as_str(),
            config.width,
            config.height,
            config.speed,
            state.obstacles.len()
        );
        Ok(Self {
            config,
            rng,
            state,
            fixed_layout: None,
            last_events: TickEvents::default(),
            stopped: false,
        })
    }

    /// Start around a fixed obstacle layout; `obstacle_count` and the placement spans are ignored
    pub fn start_with_obstacles(
        config: SimConfig,
        obstacles: Vec<Obstacle>,
        rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = SimulationState::with_obstacles(&config, obstacles.clone());
        log::info!(
            "{} simulation started with fixed layout of {} obstacles",
            config.species.as_str(),
            obstacles.len()
        );
        Ok(Self {
            config,
            rng,
            state,
            fixed_layout: Some(obstacles),
            last_events: TickEvents::default(),
            stopped: false,
        })
    }

    /// Advance `dt_ticks` ticks and return a snapshot of the result
    ///
    /// Zero ticks returns the current snapshot unchanged.
    pub fn step(&mut self, dt_ticks: u32) -> Result<StateSnapshot, LifecycleError> {
        self.ensure_running()?;

        for _ in 0..dt_ticks {
            let events = tick(&mut self.state, &self.config, &mut self.rng);
            self.log_events(&events);
            self.last_events = events;
        }

        Ok(self.snapshot())
    }

    /// Rebuild the initial state from the same config
    ///
    /// A random layout is redrawn from the engine's source, continuing its
    /// stream; a fixed layout is restored as given.
    pub fn reset(&mut self) -> Result<(), LifecycleError> {
        self.ensure_running()?;

        self.state = match &self.fixed_layout {
            Some(layout) => SimulationState::with_obstacles(&self.config, layout.clone()),
            None => SimulationState::new(&self.config, &mut self.rng),
        };
        self.last_events = TickEvents::default();
        log::info!("Simulation reset ({} obstacles)", self.state.obstacles.len());
        Ok(())
    }

    /// Put the engine into its terminal state
    ///
    /// Later `step`/`reset` calls fail with [`LifecycleError::Stopped`];
    /// [`snapshot`](Self::snapshot) keeps returning the final state.
    pub fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        self.fixed_layout = None;
        log::info!("Simulation stopped at tick {}", self.state.tick);
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::capture(&self.state, self.config.species)
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn tick_count(&self) -> u64 {
        self.state.tick
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Events of the most recent tick
    pub fn last_events(&self) -> &TickEvents {
        &self.last_events
    }

    fn ensure_running(&self) -> Result<(), LifecycleError> {
        if self.stopped {
            Err(LifecycleError::Stopped {
                tick: self.state.tick,
            })
        } else {
            Ok(())
        }
    }

    fn log_events(&self, events: &TickEvents) {
        let tick = self.state.tick;
        if events.expired {
            log::debug!("Tick {}: pulse {} expired", tick, self.state.pulse.generation);
        }
        if events.emitted {
            log::debug!(
                "Tick {}: pulse {} emitted at ({:.1}, {:.1})",
                tick,
                self.state.pulse.generation,
                self.state.pulse.center.x,
                self.state.pulse.center.y
            );
        }
        for &index in &events.detected {
            log::debug!("Tick {}: obstacle {} detected", tick, index);
        }
        if events.wrapped {
            log::debug!("Tick {}: agent wrapped, detections cleared", tick);
        }
        log::trace!(
            "Tick {}: agent x={:.1}, pulse r={:.1}",
            tick,
            self.state.agent.pos.x,
            self.state.pulse.radius
        );
    }
}
