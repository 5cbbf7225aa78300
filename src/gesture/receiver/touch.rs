//! Touch channel: the ambiguous one.
//!
//! A touch contact going down could become a drag-stroke, a lone tap, part
//! of a multi-finger tap, a hold, or one finger of a manipulation. This
//! receiver carries the arbitration: it owns the tap-debounce aggregator,
//! gates everything on the processor's hold/manipulation mode, and decides
//! when a composite delta escalates to a manipulation.

use crate::gesture::device::DeviceInfo;
use crate::gesture::events::GestureSink;
use crate::gesture::processor::{GestureError, PaintProcessor};
use crate::gesture::raw::{ManipulationDelta, SystemGesture};
use crate::gesture::tap::TapAggregator;
use crate::util::Point;
use log::debug;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Translates touch-classified contacts into strokes, taps, holds and
/// manipulations.
pub struct TouchReceiver {
    taps: TapAggregator,
    /// When false, fingers never produce stroke or dot events; single-finger
    /// dragging escalates to manipulation instead.
    finger_painting: bool,
}

impl TouchReceiver {
    pub fn new(tap_window: Duration, finger_painting: bool) -> Self {
        Self {
            taps: TapAggregator::new(tap_window),
            finger_painting,
        }
    }

    pub fn finger_painting(&self) -> bool {
        self.finger_painting
    }

    pub fn set_finger_painting(&mut self, enabled: bool) {
        self.finger_painting = enabled;
    }

    pub fn next_tap_deadline(&self) -> Option<Instant> {
        self.taps.next_deadline()
    }

    /// Drains an expired tap window and classifies the batch: one entry is
    /// a single-finger tap (a dot, unless finger painting is off), two or
    /// more are a multi-finger tap.
    pub fn pump_taps<S: GestureSink>(&self, now: Instant, processor: &mut PaintProcessor<S>) {
        if let Some(batch) = self.taps.take_expired(now) {
            self.classify_taps(batch, processor);
        }
    }

    fn classify_taps<S: GestureSink>(
        &self,
        batch: HashMap<DeviceInfo, Point>,
        processor: &mut PaintProcessor<S>,
    ) {
        match batch.len() {
            0 => {}
            1 => {
                if self.finger_painting {
                    // Infallible: len() == 1.
                    if let Some((&device, &position)) = batch.iter().next() {
                        processor.place_dot(device, position);
                    }
                }
            }
            fingers => processor.tap_multi_finger(fingers),
        }
    }

    /// Touch-down itself carries no decision; the platform's gesture
    /// classification (drag/tap/hold) tells us what the contact became.
    pub fn on_contact_down<S: GestureSink>(
        &self,
        _device: DeviceInfo,
        _position: Point,
        _processor: &mut PaintProcessor<S>,
    ) -> Result<(), GestureError> {
        Ok(())
    }

    pub fn on_contact_move<S: GestureSink>(
        &self,
        device: DeviceInfo,
        position: Point,
        processor: &mut PaintProcessor<S>,
    ) -> Result<(), GestureError> {
        // Re-check: the stroke may have been preempted by a manipulation
        // since the last move.
        if processor.has_stroke(device.id) {
            processor.add_stroke_point(device.id, position)?;
        }
        Ok(())
    }

    pub fn on_contact_up<S: GestureSink>(
        &self,
        device: DeviceInfo,
        position: Point,
        processor: &mut PaintProcessor<S>,
    ) -> Result<(), GestureError> {
        if processor.held_finger() == Some(device.id) {
            processor.end_finger_hold();
        } else if processor.has_stroke(device.id) {
            processor.add_stroke_point(device.id, position)?;
            processor.complete_stroke(device.id)?;
        }
        Ok(())
    }

    pub fn on_gesture<S: GestureSink>(
        &self,
        device: DeviceInfo,
        position: Point,
        gesture: SystemGesture,
        now: Instant,
        processor: &mut PaintProcessor<S>,
    ) -> Result<(), GestureError> {
        match gesture {
            SystemGesture::Drag => {
                if !self.finger_painting
                    || processor.held_finger().is_some()
                    || processor.is_manipulating()
                {
                    return Ok(());
                }
                // Don't wait to see whether more fingers join: start drawing
                // immediately for fast tactile response, cancel later if the
                // gesture stops being a single-finger stroke.
                processor.start_stroke(device);
                processor.add_stroke_point(device.id, position)
            }
            SystemGesture::Tap => {
                if processor.held_finger().is_some() || processor.is_manipulating() {
                    return Ok(());
                }
                self.taps.add_tap(device, position, now);
                Ok(())
            }
            SystemGesture::HoldEnter => {
                if processor.is_manipulating() {
                    debug!("hold-enter ignored while manipulating");
                    return Ok(());
                }
                processor.start_finger_hold(device.id, position);
                Ok(())
            }
        }
    }

    /// Composite delta, reported once per frame while two or more fingers
    /// are down.
    ///
    /// Escalation to manipulation needs a tie-break: a perfectly translating
    /// pair of fingers is indistinguishable from two independent drags, so
    /// only nonzero rotation or non-unit scale counts as genuine two-finger
    /// motion. The exception is disabled finger painting with no tap
    /// pending, where any delta escalates.
    pub fn on_manipulation_delta<S: GestureSink>(
        &self,
        delta: &ManipulationDelta,
        processor: &mut PaintProcessor<S>,
    ) {
        if processor.is_manipulating() {
            processor.update_manipulation(delta);
            return;
        }
        if processor.held_finger().is_some() {
            // A pinned hold suppresses manipulation interpretation.
            return;
        }
        if (self.taps.pending_count() == 0 && !self.finger_painting) || delta.is_transforming() {
            processor.start_manipulation(delta);
        }
    }

    /// Platform-reported end of the composite gesture. A manipulation
    /// gesture may complete without ever crossing the escalation threshold,
    /// in which case this is a no-op.
    pub fn on_manipulation_completed<S: GestureSink>(&self, processor: &mut PaintProcessor<S>) {
        if processor.is_manipulating() {
            processor.end_manipulation();
        }
    }
}
