//! Browser facade
//!
//! The page owns the timer (`setInterval` at 50 ms in the stock page) and the
//! canvas. It calls `step` and paints the returned JSON snapshot itself.

use rand_pcg::Pcg32;
use wasm_bindgen::prelude::*;

use crate::config::{SimConfig, Species};
use crate::sim::SimulationEngine;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) leaves the first logger in place
    let _ = console_log::init_with_level(log::Level::Info);
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// One simulation instance, driven from JavaScript
#[wasm_bindgen]
pub struct EchoSimulation {
    engine: SimulationEngine<Pcg32>,
}

#[wasm_bindgen]
impl EchoSimulation {
    /// Start from a (possibly partial) JSON config, seeded from the clock
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<EchoSimulation, JsValue> {
        let config = if config_json.trim().is_empty() {
            SimConfig::default()
        } else {
            SimConfig::from_json(config_json).map_err(js_error)?
        };
        let seed = js_sys::Date::now() as u64;
        let engine = SimulationEngine::seeded(config, seed).map_err(js_error)?;
        Ok(Self { engine })
    }

    /// Start with defaults for "bat" or "dolphin"
    #[wasm_bindgen(js_name = forSpecies)]
    pub fn for_species(species: &str) -> Result<EchoSimulation, JsValue> {
        let species = Species::from_str(species)
            .ok_or_else(|| js_error(format!("unknown species '{}'", species)))?;
        let seed = js_sys::Date::now() as u64;
        let engine = SimulationEngine::seeded(SimConfig::for_species(species), seed)
            .map_err(js_error)?;
        Ok(Self { engine })
    }

    /// Advance `ticks` ticks and return the snapshot as JSON
    pub fn step(&mut self, ticks: u32) -> Result<String, JsValue> {
        let snapshot = self.engine.step(ticks).map_err(js_error)?;
        snapshot.to_json().map_err(js_error)
    }

    /// Current snapshot as JSON
    pub fn snapshot(&self) -> Result<String, JsValue> {
        self.engine.snapshot().to_json().map_err(js_error)
    }

    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.engine.reset().map_err(js_error)
    }

    pub fn stop(&mut self) {
        self.engine.stop();
    }

    pub fn title(&self) -> String {
        self.engine.config().species.title().to_string()
    }

    pub fn description(&self) -> String {
        self.engine.config().species.description().to_string()
    }
}
