//! Uniform random sources for emission and obstacle placement
//!
//! The simulation never touches a global RNG. Every draw goes through a
//! [`UniformSource`] owned by the engine, so a fixed seed (or a fixed
//! sequence) reproduces a run exactly.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Capability providing uniform samples in `[0, 1)`
pub trait UniformSource {
    fn next_unit(&mut self) -> f32;
}

impl UniformSource for Pcg32 {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

impl<S: UniformSource + ?Sized> UniformSource for Box<S> {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        (**self).next_unit()
    }
}

/// Seeded PCG source, the production default
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed list of samples, cycling when exhausted
#[derive(Debug, Clone)]
pub struct SequenceSource {
    samples: Vec<f32>,
    cursor: usize,
}

impl SequenceSource {
    /// Samples are clamped into `[0, 1)` with non-finite samples mapped to `0.0`; an empty
    /// list yields `0.0` forever
    pub fn new(samples: impl IntoIterator<Item = f32>) -> Self {
        let samples = samples
            .into_iter()
            .map(|s| {
                if s.is_finite() {
                    s.clamp(0.0, 1.0 - f32::EPSILON)
                } else {
                    0.0
                }
            })
            .collect();
        Self { samples, cursor: 0 }
    }

    /// Always yields the same sample
    pub fn constant(sample: f32) -> Self {
        Self::new([sample])
    }

    /// Number of samples drawn so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for SequenceSource {
    fn next_unit(&mut self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sample = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        sample
    }
}
