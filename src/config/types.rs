//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Gesture disambiguation settings.
///
/// These are the observable tuning knobs of the engine; changing them
/// changes product behavior, so the defaults match the reference values the
/// engine was designed around.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Quiescence window in milliseconds after a tap before the pending tap
    /// set resolves to a dot or a multi-finger tap (valid range: 16 - 1000)
    #[serde(default = "default_tap_window_ms")]
    pub tap_window_ms: u64,

    /// Maximum net displacement in pixels for a mouse drag to be
    /// reclassified as a dot on release (valid range: 0.0 - 20.0)
    #[serde(default = "default_dot_threshold_px")]
    pub dot_threshold_px: f64,

    /// Whether fingers may paint. When false a finger never causes stroke
    /// or dot events; single-finger dragging causes manipulation instead
    #[serde(default = "default_finger_painting")]
    pub finger_painting: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tap_window_ms: default_tap_window_ms(),
            dot_threshold_px: default_dot_threshold_px(),
            finger_painting: default_finger_painting(),
        }
    }
}

fn default_tap_window_ms() -> u64 {
    150
}

fn default_dot_threshold_px() -> f64 {
    3.0
}

fn default_finger_painting() -> bool {
    true
}
