//! Per-turn JSONL trace.
//!
//! Writes one JSON object per turn with the turn facts and every ship's
//! decision and command, for offline replay analysis.

use std::io::Write;

use tracing::warn;

use crate::engine::TurnPlan;

/// Appends turn records to a writer, one line each.
pub struct TraceWriter {
    out: Box<dyn Write + Send>,
    failed: bool,
}

impl TraceWriter {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        TraceWriter { out, failed: false }
    }

    /// Records a turn. The first write error is logged and the trace is
    /// disabled for the rest of the game.
    pub fn record(&mut self, plan: &TurnPlan) {
        if self.failed {
            return;
        }
        let result = serde_json::to_writer(&mut self.out, plan)
            .map_err(std::io::Error::from)
            .and_then(|_| writeln!(self.out))
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!("turn trace disabled: {}", e);
            self.failed = true;
        }
    }
}
