//! Recording and replaying raw input streams.
//!
//! A trace is a JSON-lines file: one object per line with a millisecond
//! offset from the start of the recording and the raw event itself.
//! Replay drives the engine with a synthetic clock derived from those
//! offsets, so a recorded gesture sequence (including tap-window timing)
//! resolves identically on every run; `realtime` mode additionally sleeps
//! so the replay is watchable live.

use crate::gesture::{GestureError, GestureSink, PaintInput, RawEvent};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};
use thiserror::Error;

/// One recorded raw event, stamped with its offset from trace start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// Milliseconds since the first event of the recording.
    pub at_ms: u64,
    pub event: RawEvent,
}

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to read trace")]
    Io(#[from] std::io::Error),

    #[error("invalid trace entry on line {line}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },

    #[error("trace entry on line {line} goes back in time")]
    OutOfOrder { line: usize },

    #[error("failed to encode trace entry")]
    Encode(#[source] serde_json::Error),
}

/// Parses a JSON-lines trace. Blank lines are skipped; timestamps must be
/// non-decreasing.
pub fn read_trace<R: BufRead>(reader: R) -> Result<Vec<TraceEntry>, TraceError> {
    let mut entries: Vec<TraceEntry> = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let entry: TraceEntry = serde_json::from_str(&line).map_err(|source| TraceError::Parse {
            line: line_no,
            source,
        })?;
        if let Some(previous) = entries.last()
            && entry.at_ms < previous.at_ms
        {
            return Err(TraceError::OutOfOrder { line: line_no });
        }
        entries.push(entry);
    }
    Ok(entries)
}

/// Writes a trace in the format [`read_trace`] accepts.
pub fn write_trace<W: Write>(mut writer: W, entries: &[TraceEntry]) -> Result<(), TraceError> {
    for entry in entries {
        let line = serde_json::to_string(entry).map_err(TraceError::Encode)?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

/// Replays a trace through the engine.
///
/// Tap windows that expire between entries (or after the last one) are
/// pumped at their exact deadline, so debounced taps resolve just as they
/// would have live.
pub fn replay<S: GestureSink>(
    entries: &[TraceEntry],
    engine: &mut PaintInput<S>,
    realtime: bool,
) -> Result<(), GestureError> {
    let epoch = Instant::now();
    for entry in entries {
        let at = epoch + Duration::from_millis(entry.at_ms);
        pump_deadlines_until(engine, at);
        if realtime {
            let now = Instant::now();
            if at > now {
                std::thread::sleep(at - now);
            }
        }
        engine.handle(&entry.event, at)?;
    }
    // Let a still-open tap window resolve.
    if let Some(deadline) = engine.next_tap_deadline() {
        if realtime {
            let now = Instant::now();
            if deadline > now {
                std::thread::sleep(deadline - now);
            }
        }
        engine.pump_taps(deadline);
    }
    Ok(())
}

fn pump_deadlines_until<S: GestureSink>(engine: &mut PaintInput<S>, at: Instant) {
    while let Some(deadline) = engine.next_tap_deadline() {
        if deadline > at {
            break;
        }
        engine.pump_taps(deadline);
    }
}
