//! The outbound interface: semantic gesture notifications.

use super::device::DeviceInfo;
use super::raw::ManipulationDelta;
use super::stroke::Stroke;
use crate::util::Point;

/// Consumer of semantic gesture events.
///
/// The processor calls exactly one method per emission; every method has a
/// default empty body so consumers implement only what they care about.
/// Completed and canceled strokes are passed by value — the processor drops
/// its reference and the consumer may keep or discard the stroke.
pub trait GestureSink {
    /// A stroke began for `stroke.device()`. The point list is still empty;
    /// the initial press position arrives as the first point-added.
    fn stroke_started(&mut self, _stroke: &Stroke) {}

    /// A point was appended; it is `stroke.last_point()`.
    fn stroke_point_added(&mut self, _stroke: &Stroke) {}

    fn stroke_completed(&mut self, _stroke: Stroke) {}

    fn stroke_canceled(&mut self, _stroke: Stroke) {}

    /// A degenerate zero-length paint gesture. Never stored as a stroke.
    fn dot_placed(&mut self, _device: DeviceInfo, _position: Point) {}

    fn multi_finger_tap(&mut self, _fingers: usize) {}

    fn hold_started(&mut self, _position: Point) {}

    fn hold_ended(&mut self) {}

    fn manipulation_started(&mut self, _delta: &ManipulationDelta) {}

    fn manipulation_updated(&mut self, _delta: &ManipulationDelta) {}

    fn manipulation_ended(&mut self) {}
}

/// An owned record of one emitted gesture event.
///
/// Useful for tests and diagnostic consumers that want to inspect the whole
/// emission sequence after the fact; `Vec<PaintEvent>` implements
/// [`GestureSink`] directly.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintEvent {
    StrokeStarted { device: DeviceInfo },
    StrokePointAdded { device: DeviceInfo, point: Point },
    StrokeCompleted { stroke: Stroke },
    StrokeCanceled { stroke: Stroke },
    DotPlaced { device: DeviceInfo, position: Point },
    MultiFingerTap { fingers: usize },
    HoldStarted { position: Point },
    HoldEnded,
    ManipulationStarted { delta: ManipulationDelta },
    ManipulationUpdated { delta: ManipulationDelta },
    ManipulationEnded,
}

impl GestureSink for Vec<PaintEvent> {
    fn stroke_started(&mut self, stroke: &Stroke) {
        self.push(PaintEvent::StrokeStarted {
            device: stroke.device(),
        });
    }

    fn stroke_point_added(&mut self, stroke: &Stroke) {
        // A point-added always follows an append, so last_point is present.
        if let Some(point) = stroke.last_point() {
            self.push(PaintEvent::StrokePointAdded {
                device: stroke.device(),
                point,
            });
        }
    }

    fn stroke_completed(&mut self, stroke: Stroke) {
        self.push(PaintEvent::StrokeCompleted { stroke });
    }

    fn stroke_canceled(&mut self, stroke: Stroke) {
        self.push(PaintEvent::StrokeCanceled { stroke });
    }

    fn dot_placed(&mut self, device: DeviceInfo, position: Point) {
        self.push(PaintEvent::DotPlaced { device, position });
    }

    fn multi_finger_tap(&mut self, fingers: usize) {
        self.push(PaintEvent::MultiFingerTap { fingers });
    }

    fn hold_started(&mut self, position: Point) {
        self.push(PaintEvent::HoldStarted { position });
    }

    fn hold_ended(&mut self) {
        self.push(PaintEvent::HoldEnded);
    }

    fn manipulation_started(&mut self, delta: &ManipulationDelta) {
        self.push(PaintEvent::ManipulationStarted { delta: *delta });
    }

    fn manipulation_updated(&mut self, delta: &ManipulationDelta) {
        self.push(PaintEvent::ManipulationUpdated { delta: *delta });
    }

    fn manipulation_ended(&mut self) {
        self.push(PaintEvent::ManipulationEnded);
    }
}
