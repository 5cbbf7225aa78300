//! Geometry helpers shared across the gesture engine.

use serde::{Deserialize, Serialize};

/// A position in the host's 2D coordinate space (screen pixels).
///
/// All raw input positions and all emitted gesture positions use this type.
/// Coordinates are `f64` because platforms deliver sub-pixel pointer data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    ///
    /// Used by the mouse receiver's dot threshold (a release within a few
    /// pixels of the press is a dot, not a drag).
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
