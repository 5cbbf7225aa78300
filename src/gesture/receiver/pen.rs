//! Pen channel: stylus strokes and pen taps.

use crate::gesture::device::DeviceInfo;
use crate::gesture::events::GestureSink;
use crate::gesture::processor::{GestureError, PaintProcessor};
use crate::gesture::raw::SystemGesture;
use crate::util::Point;

/// Translates pen-classified contacts into strokes and dots.
///
/// The engine only routes pen-kind contacts here, so there is no ambiguity
/// to arbitrate: a press (or drag gesture) opens a stroke, a quick tap
/// places a dot directly.
pub struct PenReceiver;

impl PenReceiver {
    pub fn on_contact_down<S: GestureSink>(
        &self,
        device: DeviceInfo,
        position: Point,
        processor: &mut PaintProcessor<S>,
    ) -> Result<(), GestureError> {
        processor.start_stroke(device);
        processor.add_stroke_point(device.id, position)
    }

    pub fn on_contact_move<S: GestureSink>(
        &self,
        device: DeviceInfo,
        position: Point,
        processor: &mut PaintProcessor<S>,
    ) -> Result<(), GestureError> {
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
        if processor.has_stroke(device.id) {
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
        processor: &mut PaintProcessor<S>,
    ) -> Result<(), GestureError> {
        match gesture {
            SystemGesture::Drag => {
                processor.start_stroke(device);
                processor.add_stroke_point(device.id, position)
            }
            SystemGesture::Tap => {
                // Pen lifted quickly without producing drag events.
                processor.place_dot(device, position);
                Ok(())
            }
            // Holds are a touch concept.
            SystemGesture::HoldEnter => Ok(()),
        }
    }
}
