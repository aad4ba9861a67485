//! Fixed-cadence driving
//!
//! Wall-clock time arrives in irregular deltas (animation frames, timer
//! callbacks). [`FixedCadence`] turns those into a whole number of due
//! ticks and [`Driver`] runs them, handing each snapshot to a sink.

use crate::consts::{MAX_SUBSTEPS, TICK_INTERVAL_MS};
use crate::error::LifecycleError;
use crate::renderer::RenderSink;
use crate::sim::{SimulationEngine, UniformSource};

/// Accumulates elapsed time and releases ticks at a fixed interval
#[derive(Debug, Clone)]
pub struct FixedCadence {
    interval_ms: f64,
    max_substeps: u32,
    accumulator: f64,
}

impl Default for FixedCadence {
    fn default() -> Self {
        Self::new(TICK_INTERVAL_MS, MAX_SUBSTEPS)
    }
}

impl FixedCadence {
    /// `interval_ms` must be positive; `max_substeps` of 0 is treated as 1
    pub fn new(interval_ms: f64, max_substeps: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(f64::EPSILON),
            max_substeps: max_substeps.max(1),
            accumulator: 0.0,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Add `elapsed_ms` and return how many ticks are due now
    ///
    /// Long stalls (a backgrounded tab) are capped at `max_substeps` ticks
    /// instead of being replayed in a burst.
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        let cap = self.interval_ms * f64::from(self.max_substeps);
        let elapsed = if elapsed_ms.is_finite() {
            elapsed_ms.clamp(0.0, cap)
        } else {
            0.0
        };
        self.accumulator = (self.accumulator + elapsed).min(cap);

        let mut due = 0;
        while self.accumulator >= self.interval_ms && due < self.max_substeps {
            self.accumulator -= self.interval_ms;
            due += 1;
        }
        due
    }

    /// Drop any partial interval
    pub fn clear(&mut self) {
        self.accumulator = 0.0;
    }
}

/// Steps an engine on a cadence and feeds every snapshot to a sink
#[derive(Debug)]
pub struct Driver<R, S> {
    engine: SimulationEngine<R>,
    sink: S,
    cadence: FixedCadence,
}

impl<R: UniformSource, S: RenderSink> Driver<R, S> {
    pub fn new(engine: SimulationEngine<R>, sink: S) -> Self {
        Self::with_cadence(engine, sink, FixedCadence::default())
    }

    pub fn with_cadence(engine: SimulationEngine<R>, sink: S, cadence: FixedCadence) -> Self {
        Self {
            engine,
            sink,
            cadence,
        }
    }

    /// Account for `elapsed_ms` of wall time; returns the number of ticks run
    pub fn pump(&mut self, elapsed_ms: f64) -> Result<u32, LifecycleError> {
        let due = self.cadence.advance(elapsed_ms);
        self.run_ticks(due)?;
        Ok(due)
    }

    /// Run `ticks` steps back to back, presenting each one
    pub fn run_ticks(&mut self, ticks: u32) -> Result<(), LifecycleError> {
        for _ in 0..ticks {
            let snapshot = self.engine.step(1)?;
            self.sink.present(&snapshot);
        }
        Ok(())
    }

    /// Reset the engine and present the fresh state
    pub fn reset(&mut self) -> Result<(), LifecycleError> {
        self.engine.reset()?;
        self.cadence.clear();
        self.sink.present(&self.engine.snapshot());
        Ok(())
    }

    pub fn stop(&mut self) {
        self.engine.stop();
        self.cadence.clear();
    }

    pub fn engine(&self) -> &SimulationEngine<R> {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (SimulationEngine<R>, S) {
        (self.engine, self.sink)
    }
}
