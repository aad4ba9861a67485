//! Newline-delimited JSON snapshot output

use std::io::Write;

use super::RenderSink;
use crate::sim::StateSnapshot;

/// Writes one JSON document per snapshot
///
/// Write failures are logged and counted rather than propagated, so a
/// closed pipe never stalls the driver. Lines may sit in a buffered writer
/// until [`JsonLinesSink::flush`]; call it before trusting [`failures`](Self::failures).
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
    written: u64,
    failures: u64,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            written: 0,
            failures: 0,
        }
    }

    /// Lines handed to the writer (not necessarily flushed)
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn failures(&self) -> u64 {
        self.failures
    }

    /// Push buffered lines through; a failure here means they were lost
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush().inspect_err(|e| {
            self.failures += 1;
            log::warn!("Failed to flush snapshots: {}", e);
        })
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, snapshot: &StateSnapshot) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.writer, snapshot)?;
        self.writer.write_all(b"\n")
    }
}

impl<W: Write> RenderSink for JsonLinesSink<W> {
    fn present(&mut self, snapshot: &StateSnapshot) {
        match self.write_line(snapshot) {
            Ok(()) => self.written += 1,
            Err(e) => {
                self.failures += 1;
                log::warn!("Failed to write snapshot for tick {}: {}", snapshot.tick, e);
            }
        }
    }
}
