//! Platform layer
//!
//! Owns the driving cadence the simulation itself knows nothing about:
//! - Fixed-interval tick scheduling from wall-clock deltas
//! - The browser facade (wasm32 only)

pub mod time;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use time::{Driver, FixedCadence};
