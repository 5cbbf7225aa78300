//! In-progress and completed freehand strokes.

use super::device::DeviceInfo;
use crate::util::Point;

/// The append-only point sequence of one freehand drawing gesture from one
/// device.
///
/// A stroke is owned by the processor while active and handed over by value
/// in the completion/cancellation notification; it is never mutated after
/// that hand-over. The point list is non-empty as soon as the receiver adds
/// the initial press position.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    device: DeviceInfo,
    points: Vec<Point>,
}

impl Stroke {
    pub fn new(device: DeviceInfo) -> Self {
        Self {
            device,
            points: Vec::new(),
        }
    }

    pub fn device(&self) -> DeviceInfo {
        self.device
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The most recently appended point, if any.
    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// The initial press position, if a point has been added yet.
    pub fn first_point(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub(crate) fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }
}
