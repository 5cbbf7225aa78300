//! The central gesture authority.
//!
//! `PaintProcessor` owns every active stroke, the global hold/manipulation
//! mode, and is the sole emitter of semantic events. It performs no
//! device-classification policy — that lives in the receivers — it only
//! mutates state and arbitrates between conflicting interpretations.

use super::device::DeviceInfo;
use super::events::GestureSink;
use super::raw::ManipulationDelta;
use super::stroke::Stroke;
use crate::util::Point;
use log::debug;
use std::collections::HashMap;
use thiserror::Error;

/// Errors surfaced by stroke operations.
///
/// These indicate a receiver bug (out-of-order platform events), not a
/// recoverable runtime condition: receivers are expected to re-check
/// `has_stroke` before mutating, so a well-behaved pipeline never sees one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GestureError {
    #[error("device {device_id} has no active stroke")]
    NoActiveStroke { device_id: i32 },
}

/// Global exclusive interaction mode.
///
/// A held finger and an active manipulation are mutually exclusive by
/// construction; active strokes may coexist with `Idle` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureMode {
    #[default]
    Idle,
    /// A single finger is pinned as held; its id is excluded from
    /// tap/stroke/manipulation consideration while pinned.
    Holding(i32),
    /// A two-or-more-finger manipulation is in progress.
    Manipulating,
}

/// Tracks all active strokes keyed by device id plus the global mode, and
/// forwards every state change to the [`GestureSink`].
pub struct PaintProcessor<S> {
    strokes: HashMap<i32, Stroke>,
    mode: GestureMode,
    sink: S,
}

impl<S: GestureSink> PaintProcessor<S> {
    pub fn new(sink: S) -> Self {
        Self {
            strokes: HashMap::new(),
            mode: GestureMode::Idle,
            sink,
        }
    }

    /// Begins a new stroke for `device`.
    ///
    /// A device id may be legitimately reused by the platform for a new
    /// physical contact without an intervening release, so an existing
    /// stroke for the same id is canceled first.
    pub fn start_stroke(&mut self, device: DeviceInfo) {
        if self.strokes.contains_key(&device.id) {
            debug!("stroke restarted for busy device {device}, canceling previous");
            // Infallible: we just checked the entry exists.
            let _ = self.cancel_stroke(device.id);
        }
        debug!("stroke started for {device}");
        let stroke = Stroke::new(device);
        self.sink.stroke_started(&stroke);
        self.strokes.insert(device.id, stroke);
    }

    pub fn has_stroke(&self, device_id: i32) -> bool {
        self.strokes.contains_key(&device_id)
    }

    pub fn stroke(&self, device_id: i32) -> Option<&Stroke> {
        self.strokes.get(&device_id)
    }

    pub fn active_stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Appends a point to the active stroke for `device_id` and notifies the
    /// sink; the new point is the stroke's last.
    pub fn add_stroke_point(&mut self, device_id: i32, position: Point) -> Result<(), GestureError> {
        let stroke = self
            .strokes
            .get_mut(&device_id)
            .ok_or(GestureError::NoActiveStroke { device_id })?;
        stroke.add_point(position);
        self.sink.stroke_point_added(stroke);
        Ok(())
    }

    /// Emits stroke-completed and hands the stroke over to the sink.
    pub fn complete_stroke(&mut self, device_id: i32) -> Result<(), GestureError> {
        let stroke = self
            .strokes
            .remove(&device_id)
            .ok_or(GestureError::NoActiveStroke { device_id })?;
        debug!("stroke completed for {} ({} points)", stroke.device(), stroke.points().len());
        self.sink.stroke_completed(stroke);
        Ok(())
    }

    /// Emits stroke-canceled and hands the stroke over to the sink.
    pub fn cancel_stroke(&mut self, device_id: i32) -> Result<(), GestureError> {
        let stroke = self
            .strokes
            .remove(&device_id)
            .ok_or(GestureError::NoActiveStroke { device_id })?;
        debug!("stroke canceled for {}", stroke.device());
        self.sink.stroke_canceled(stroke);
        Ok(())
    }

    /// Emits a dot: a degenerate zero-length gesture, never stored as a
    /// stroke.
    pub fn place_dot(&mut self, device: DeviceInfo, position: Point) {
        debug!("dot placed by {device} at ({:.1}, {:.1})", position.x, position.y);
        self.sink.dot_placed(device, position);
    }

    pub fn tap_multi_finger(&mut self, fingers: usize) {
        debug!("multi-finger tap with {fingers} fingers");
        self.sink.multi_finger_tap(fingers);
    }

    /// Enters manipulation mode, preempting drawing: every active stroke is
    /// canceled (one emission each, order unspecified) before
    /// manipulation-started fires.
    pub fn start_manipulation(&mut self, delta: &ManipulationDelta) {
        let preempted = self.strokes.len();
        if preempted > 0 {
            debug!("manipulation preempts {preempted} active stroke(s)");
        }
        for (_, stroke) in self.strokes.drain() {
            self.sink.stroke_canceled(stroke);
        }
        self.mode = GestureMode::Manipulating;
        self.sink.manipulation_started(delta);
    }

    /// Forwards the cumulative delta; only meaningful while manipulating.
    pub fn update_manipulation(&mut self, delta: &ManipulationDelta) {
        self.sink.manipulation_updated(delta);
    }

    pub fn end_manipulation(&mut self) {
        debug!("manipulation ended");
        self.mode = GestureMode::Idle;
        self.sink.manipulation_ended();
    }

    pub fn is_manipulating(&self) -> bool {
        self.mode == GestureMode::Manipulating
    }

    /// Pins `finger_id` as the held finger. Does not touch the stroke table.
    pub fn start_finger_hold(&mut self, finger_id: i32, position: Point) {
        debug!("finger hold started by touch:{finger_id}");
        self.mode = GestureMode::Holding(finger_id);
        self.sink.hold_started(position);
    }

    pub fn end_finger_hold(&mut self) {
        debug!("finger hold ended");
        self.mode = GestureMode::Idle;
        self.sink.hold_ended();
    }

    /// The currently pinned finger id, if a hold is in progress.
    pub fn held_finger(&self) -> Option<i32> {
        match self.mode {
            GestureMode::Holding(id) => Some(id),
            _ => None,
        }
    }

    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
