//! Fixed tick state transition
//!
//! One call to [`tick`] advances the simulation by exactly one discrete
//! step. Given the same state, config, and sample sequence the result is
//! always the same.

use super::collision;
use super::rng::UniformSource;
use super::state::SimulationState;
use crate::config::{PulseAnchor, SimConfig};

/// What happened during a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// A new pulse was emitted
    pub emitted: bool,
    /// The active pulse grew past the bounds and collapsed
    pub expired: bool,
    /// The agent left the bounds and re-entered on the left
    pub wrapped: bool,
    /// Obstacle indices flagged this tick
    pub detected: Vec<usize>,
}

/// Advance the simulation state by one tick
///
/// Order: pulse update (grow, detect, expire), emission, agent advance,
/// wraparound, tick counter.
pub fn tick(
    state: &mut SimulationState,
    config: &SimConfig,
    rng: &mut impl UniformSource,
) -> TickEvents {
    let mut events = TickEvents::default();

    // Pulse update
    if state.pulse.active {
        if config.pulse_anchor == PulseAnchor::Agent {
            state.pulse.center = state.agent.pos;
        }
        state.pulse.grow(config.pulse_growth());

        events.detected = collision::sweep(&state.pulse, &mut state.obstacles);

        // Strict: a pulse exactly as wide as the bounds stays alive
        if state.pulse.radius > config.width {
            state.pulse.deactivate();
            events.expired = true;
        }
    }

    // Emission, one draw per idle tick
    if !state.pulse.active && rng.next_unit() < config.emission_probability {
        state.pulse.emit(state.agent.pos, config.initial_pulse_radius);
        events.emitted = true;
    }

    state.agent.advance();

    // Wraparound spends the detection sweep
    if state.agent.pos.x > config.width + config.wraparound_margin {
        state.agent.pos.x = -config.wraparound_margin;
        state.clear_detections();
        events.wrapped = true;
    }

    state.tick += 1;

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Span;
    use crate::sim::rng::SequenceSource;
    use crate::sim::state::Obstacle;
    use glam::Vec2;

    /// Single fixed obstacle at (500, 180) 20x20, agent at (100, 200)
    fn scenario_config() -> SimConfig {
        SimConfig {
            width: 800.0,
            height: 400.0,
            speed: 4.0,
            obstacle_count: 1,
            obstacle_x: Span::fixed(500.0),
            obstacle_y: Some(Span::fixed(180.0)),
            obstacle_width: Span::fixed(20.0),
            obstacle_height: Span::fixed(20.0),
            emission_probability: 1.0,
            initial_pulse_radius: 10.0,
            pulse_growth_factor: 5.0,
            wraparound_margin: 50.0,
            ..Default::default()
        }
    }

    fn scenario_state(config: &SimConfig) -> SimulationState {
        SimulationState::with_obstacles(config, vec![Obstacle::new(500.0, 180.0, 20.0, 20.0)])
    }

    #[test]
    fn test_first_tick_emits_then_moves() {
        let config = scenario_config();
        let mut state = scenario_state(&config);
        let mut rng = SequenceSource::constant(0.5);

        let events = tick(&mut state, &config, &mut rng);
        assert!(events.emitted);
        assert!(state.pulse.active);
        assert_eq!(state.pulse.center, Vec2::new(100.0, 200.0));
        assert_eq!(state.pulse.radius, 10.0);
        assert_eq!(state.agent.pos.x, 104.0);
        assert_eq!(state.tick, 1);
    }

    #[test]
    fn test_active_pulse_grows_without_emitting() {
        let config = scenario_config();
        let mut state = scenario_state(&config);
        let mut rng = SequenceSource::constant(0.5);

        tick(&mut state, &config, &mut rng);
        let events = tick(&mut state, &config, &mut rng);

        assert!(!events.emitted);
        assert_eq!(rng.draws(), 1);
        // growth = speed * factor = 20
        assert_eq!(state.pulse.radius, 30.0);
        assert_eq!(state.pulse.center, Vec2::new(100.0, 200.0));
        assert_eq!(state.agent.pos.x, 108.0);
        assert!(!state.obstacles[0].detected);
    }

    #[test]
    fn test_no_emission_when_sample_not_below_probability() {
        let config = SimConfig {
            emission_probability: 0.05,
            ..scenario_config()
        };
        let mut state = scenario_state(&config);
        let mut rng = SequenceSource::new([0.05, 0.9, 0.049]);

        assert!(!tick(&mut state, &config, &mut rng).emitted);
        assert!(!tick(&mut state, &config, &mut rng).emitted);
        assert!(tick(&mut state, &config, &mut rng).emitted);
        // Emitted at the agent's position before this tick's advance
        assert_eq!(state.pulse.center.x, 108.0);
    }

    #[test]
    fn test_pulse_expires_strictly_past_width() {
        let config = SimConfig {
            width: 100.0,
            speed: 1.0,
            wraparound_margin: 1000.0,
            ..scenario_config()
        };
        let mut state = SimulationState::with_obstacles(&config, Vec::new());
        state.pulse.emit(state.agent.pos, 95.0);
        // Never emit again
        let mut rng = SequenceSource::constant(0.99);
        let config = SimConfig {
            emission_probability: 0.5,
            ..config
        };

        tick(&mut state, &config, &mut rng);
        assert!(state.pulse.active);
        assert_eq!(state.pulse.radius, 100.0);

        let events = tick(&mut state, &config, &mut rng);
        assert!(events.expired);
        assert!(!state.pulse.active);
        assert_eq!(state.pulse.radius, 0.0);
    }

    #[test]
    fn test_expiry_and_reemission_in_same_tick() {
        let config = scenario_config();
        let mut state = scenario_state(&config);
        let mut rng = SequenceSource::constant(0.0);

        // Emission on tick 1, then 40 growths of 20 take radius past 800
        for _ in 0..40 {
            tick(&mut state, &config, &mut rng);
        }
        assert_eq!(state.pulse.radius, 790.0);
        assert_eq!(state.pulse.generation, 1);

        let events = tick(&mut state, &config, &mut rng);
        assert!(events.expired);
        assert!(events.emitted);
        assert_eq!(state.pulse.generation, 2);
        assert_eq!(state.pulse.radius, 10.0);
        assert_eq!(state.pulse.center.x, 100.0 + 40.0 * 4.0);
    }

    #[test]
    fn test_detection_reported_once() {
        let config = scenario_config();
        let mut state = scenario_state(&config);
        let mut rng = SequenceSource::constant(0.0);

        // Distance to obstacle center is ~410.1; reached when radius + 10 exceeds it
        let mut first_hit = None;
        for _ in 0..30 {
            let events = tick(&mut state, &config, &mut rng);
            if !events.detected.is_empty() {
                assert!(first_hit.is_none(), "obstacle reported twice");
                first_hit = Some(state.tick);
            }
        }
        assert_eq!(first_hit, Some(21));
        assert!(state.obstacles[0].detected);
    }

    #[test]
    fn test_wraparound_resets_agent_and_detections() {
        let config = scenario_config();
        let mut state = scenario_state(&config);
        state.agent.pos.x = 850.0;
        state.obstacles[0].detected = true;
        let mut rng = SequenceSource::constant(0.99);
        let config = SimConfig {
            emission_probability: 0.0,
            ..config
        };

        let events = tick(&mut state, &config, &mut rng);
        assert!(events.wrapped);
        assert_eq!(state.agent.pos.x, -50.0);
        assert_eq!(state.agent.pos.y, 200.0);
        assert!(!state.obstacles[0].detected);
    }

    #[test]
    fn test_agent_anchor_follows_agent() {
        let config = SimConfig {
            pulse_anchor: PulseAnchor::Agent,
            ..scenario_config()
        };
        let mut state = scenario_state(&config);
        let mut rng = SequenceSource::constant(0.0);

        tick(&mut state, &config, &mut rng);
        tick(&mut state, &config, &mut rng);
        // Re-centered on the agent (104) before growing, then the agent moved on
        assert_eq!(state.pulse.center, Vec2::new(104.0, 200.0));
        assert_eq!(state.pulse.radius, 30.0);
    }

    #[test]
    fn test_determinism() {
        let config = SimConfig::default();
        let mut rng1 = crate::sim::rng::seeded(99999);
        let mut rng2 = crate::sim::rng::seeded(99999);
        let mut state1 = SimulationState::new(&config, &mut rng1);
        let mut state2 = SimulationState::new(&config, &mut rng2);

        for _ in 0..500 {
            let e1 = tick(&mut state1, &config, &mut rng1);
            let e2 = tick(&mut state2, &config, &mut rng2);
            assert_eq!(e1, e2);
        }
        assert_eq!(state1, state2);
    }
}
