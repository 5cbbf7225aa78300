//! Mouse channel: left-button drag strokes with dot reclassification.

use crate::gesture::device::MOUSE_DEVICE;
use crate::gesture::events::GestureSink;
use crate::gesture::processor::{GestureError, PaintProcessor};
use crate::gesture::raw::MouseButton;
use crate::util::Point;
use log::debug;

/// Translates the single mouse stream into stroke and dot gestures.
///
/// Ignores any mouse event flagged as stylus emulation — those contacts are
/// already handled by the pen or touch receiver. On release, a near-
/// stationary drag (net displacement within `dot_threshold`) is
/// reclassified as a dot: the provisional stroke is canceled so consumers
/// can roll back the points they already saw, and dot-placed is emitted at
/// the press position instead.
pub struct MouseReceiver {
    dot_threshold: f64,
}

impl MouseReceiver {
    pub fn new(dot_threshold: f64) -> Self {
        Self { dot_threshold }
    }

    pub fn on_press<S: GestureSink>(
        &self,
        button: MouseButton,
        position: Point,
        from_stylus: bool,
        processor: &mut PaintProcessor<S>,
    ) -> Result<(), GestureError> {
        if from_stylus || button != MouseButton::Left {
            return Ok(());
        }
        processor.start_stroke(MOUSE_DEVICE);
        processor.add_stroke_point(MOUSE_DEVICE.id, position)
    }

    pub fn on_motion<S: GestureSink>(
        &self,
        position: Point,
        left_held: bool,
        from_stylus: bool,
        processor: &mut PaintProcessor<S>,
    ) -> Result<(), GestureError> {
        if from_stylus || !processor.has_stroke(MOUSE_DEVICE.id) {
            return Ok(());
        }
        if left_held {
            processor.add_stroke_point(MOUSE_DEVICE.id, position)
        } else {
            // The release slipped past us (e.g. outside the window); a
            // completed gesture was never observed, so cancel.
            debug!("left button no longer held during move, canceling mouse stroke");
            processor.cancel_stroke(MOUSE_DEVICE.id)
        }
    }

    pub fn on_release<S: GestureSink>(
        &self,
        button: MouseButton,
        position: Point,
        from_stylus: bool,
        processor: &mut PaintProcessor<S>,
    ) -> Result<(), GestureError> {
        if from_stylus || button != MouseButton::Left || !processor.has_stroke(MOUSE_DEVICE.id) {
            return Ok(());
        }

        // First point is present: press always appends the initial position.
        let start = processor
            .stroke(MOUSE_DEVICE.id)
            .and_then(|stroke| stroke.first_point())
            .unwrap_or(position);

        if position.distance_to(start) <= self.dot_threshold {
            debug!("mouse release within dot threshold, reclassifying stroke as dot");
            processor.cancel_stroke(MOUSE_DEVICE.id)?;
            processor.place_dot(MOUSE_DEVICE, start);
            Ok(())
        } else {
            processor.add_stroke_point(MOUSE_DEVICE.id, position)?;
            processor.complete_stroke(MOUSE_DEVICE.id)
        }
    }
}
