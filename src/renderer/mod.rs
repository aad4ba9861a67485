//! Snapshot consumers
//!
//! The engine never draws. A driver hands each [`StateSnapshot`] to a
//! [`RenderSink`], which may only read it.

pub mod json;

pub use json::JsonLinesSink;

use crate::sim::StateSnapshot;

/// Consumer of one snapshot per engine step
pub trait RenderSink {
    fn present(&mut self, snapshot: &StateSnapshot);
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn present(&mut self, snapshot: &StateSnapshot) {
        (**self).present(snapshot);
    }
}

/// Keeps every snapshot it is shown (headless runs, tests)
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub frames: Vec<StateSnapshot>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&StateSnapshot> {
        self.frames.last()
    }
}

impl RenderSink for RecordingSink {
    fn present(&mut self, snapshot: &StateSnapshot) {
        self.frames.push(snapshot.clone());
    }
}
