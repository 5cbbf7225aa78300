//! Time-windowed tap debouncing.
//!
//! A single finger tapping and three fingers tapping together arrive as
//! separate platform tap gestures; the only way to tell them apart is to
//! wait. The aggregator collects taps for a short quiescence window after
//! the first one, then the whole batch resolves at once.
//!
//! Everything else in the engine runs serially on the input thread, but the
//! window expiry may be driven from an independent timer thread, so the
//! pending set and its deadline live behind a mutex. `add_tap` runs on the
//! input thread; `take_expired` may run anywhere; whichever thread drains
//! the batch hands it back to the input pipeline for classification.

use super::device::DeviceInfo;
use crate::util::Point;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

#[derive(Default)]
struct Pending {
    taps: HashMap<DeviceInfo, Point>,
    deadline: Option<Instant>,
}

/// Groups near-simultaneous single-finger taps into one batch.
///
/// The aggregator is count-agnostic: it only collects and times out.
/// Classifying the batch (one entry → dot, several → multi-finger tap) is
/// the touch receiver's job.
pub struct TapAggregator {
    window: Duration,
    inner: Mutex<Pending>,
}

impl TapAggregator {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            inner: Mutex::new(Pending::default()),
        }
    }

    /// Records a pending tap and restarts the quiescence window.
    ///
    /// A second tap from the same device before expiry overwrites its
    /// pending position (last one wins) without disturbing other devices'
    /// entries; the window deadline restarts either way.
    pub fn add_tap(&self, device: DeviceInfo, position: Point, now: Instant) {
        let mut inner = self.inner.lock().unwrap();
        inner.taps.insert(device, position);
        inner.deadline = Some(now + self.window);
    }

    /// Number of taps currently waiting for the window to close.
    pub fn pending_count(&self) -> usize {
        self.inner.lock().unwrap().taps.len()
    }

    /// When the current window closes, if one is open. Hosts use this to
    /// schedule their next wakeup.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.inner.lock().unwrap().deadline
    }

    /// Atomically snapshots and clears the pending set once the window has
    /// closed. Returns `None` while the window is still open or no taps are
    /// pending. A lone tap still resolves here — it is never dropped.
    pub fn take_expired(&self, now: Instant) -> Option<HashMap<DeviceInfo, Point>> {
        let mut inner = self.inner.lock().unwrap();
        match inner.deadline {
            Some(deadline) if now >= deadline => {
                inner.deadline = None;
                Some(std::mem::take(&mut inner.taps))
            }
            _ => None,
        }
    }
}
