//! Echo Sim headless runner
//!
//! Usage: `echo-sim [config.json] [ticks]`
//!
//! Runs the simulation and writes one JSON snapshot per tick to stdout.
//! Set `RUST_LOG=debug` to see emissions, detections and wraparounds.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    if let Err(e) = native::run(std::env::args().skip(1).collect()) {
        log::error!("{}", e);
        eprintln!("echo-sim: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is echo_sim::platform::web::init, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::io::{self, BufWriter};
    use std::time::{SystemTime, UNIX_EPOCH};

    use echo_sim::SimConfig;
    use echo_sim::platform::Driver;
    use echo_sim::renderer::JsonLinesSink;
    use echo_sim::sim::SimulationEngine;

    const DEFAULT_TICKS: u32 = 200;

    pub fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
        let config = match args.first() {
            Some(path) => SimConfig::load(path)?,
            None => SimConfig::default(),
        };
        let ticks = match args.get(1) {
            Some(n) => n.parse::<u32>()?,
            None => DEFAULT_TICKS,
        };

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();

        log::info!("Echo Sim (native) starting: {} ticks", ticks);
        let engine = SimulationEngine::seeded(config, seed)?;
        let stdout = io::stdout();
        let mut driver = Driver::new(engine, JsonLinesSink::new(BufWriter::new(stdout.lock())));
        driver.run_ticks(ticks)?;

        let (engine, mut sink) = driver.into_parts();
        sink.flush()?;
        let snapshot = engine.snapshot();
        log::info!(
            "Finished at tick {}: {}/{} obstacles detected, {} snapshots written",
            snapshot.tick,
            snapshot.detected_count(),
            snapshot.obstacles.len(),
            sink.written()
        );
        if sink.failures() > 0 {
            return Err(format!("{} snapshots could not be written", sink.failures()).into());
        }
        Ok(())
    }
}
