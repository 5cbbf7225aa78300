//! Raw platform input events, the inbound side of the engine.
//!
//! These are the generic, backend-agnostic shapes a platform layer is
//! expected to translate its native events into: per-device press/move/
//! release, a discrete gesture classification per contact, and a composite
//! manipulation delta while two or more contacts are active. The types are
//! serializable so event streams can be recorded and replayed (see
//! [`crate::trace`]).

use super::device::DeviceInfo;
use crate::util::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Discrete gesture classification the platform reports per contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SystemGesture {
    /// The contact started moving; a drag-stroke may begin.
    Drag,
    /// The contact went down and up quickly without dragging.
    Tap,
    /// The contact stayed pressed in place long enough to become a hold.
    HoldEnter,
}

/// Cumulative two-finger manipulation state as reported by the platform
/// once per frame while two or more contacts are down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ManipulationDelta {
    #[serde(default)]
    pub translation: (f64, f64),
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "identity_scale")]
    pub scale: (f64, f64),
}

fn identity_scale() -> (f64, f64) {
    (1.0, 1.0)
}

impl Default for ManipulationDelta {
    fn default() -> Self {
        Self {
            translation: (0.0, 0.0),
            rotation: 0.0,
            scale: identity_scale(),
        }
    }
}

impl ManipulationDelta {
    /// True when the delta shows genuine two-finger motion: nonzero rotation
    /// or non-unit scale on either axis. Pure translation is not enough to
    /// tell a two-finger gesture apart from two independent drags.
    pub fn is_transforming(&self) -> bool {
        self.rotation != 0.0 || self.scale.0 != 1.0 || self.scale.1 != 1.0
    }
}

/// One raw input event from the platform layer.
///
/// Mouse events travel on their own channel and carry a `from_stylus` flag
/// so OS-level mouse emulation of pen/touch contacts can be ignored.
/// Contact events carry the originating [`DeviceInfo`]; the engine routes
/// them to the pen or touch receiver by kind so each event is handled
/// exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RawEvent {
    MouseDown {
        button: MouseButton,
        position: Point,
        #[serde(default)]
        from_stylus: bool,
    },
    MouseMove {
        position: Point,
        /// Whether the left button is still pressed during this move.
        #[serde(default)]
        left_held: bool,
        #[serde(default)]
        from_stylus: bool,
    },
    MouseUp {
        button: MouseButton,
        position: Point,
        #[serde(default)]
        from_stylus: bool,
    },
    ContactDown {
        device: DeviceInfo,
        position: Point,
    },
    ContactMove {
        device: DeviceInfo,
        position: Point,
    },
    ContactUp {
        device: DeviceInfo,
        position: Point,
    },
    Gesture {
        device: DeviceInfo,
        position: Point,
        gesture: SystemGesture,
    },
    ManipulationDelta {
        #[serde(default)]
        delta: ManipulationDelta,
    },
    ManipulationCompleted,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::device::DeviceKind;

    #[test]
    fn identity_delta_is_not_transforming() {
        assert!(!ManipulationDelta::default().is_transforming());
        let translated = ManipulationDelta {
            translation: (40.0, -3.0),
            ..Default::default()
        };
        assert!(!translated.is_transforming());
    }

    #[test]
    fn rotation_or_scale_is_transforming() {
        let rotated = ManipulationDelta {
            rotation: 0.5,
            ..Default::default()
        };
        assert!(rotated.is_transforming());
        let scaled = ManipulationDelta {
            scale: (1.1, 1.0),
            ..Default::default()
        };
        assert!(scaled.is_transforming());
    }

    #[test]
    fn raw_events_round_trip_through_json() {
        let event = RawEvent::Gesture {
            device: DeviceInfo::new(3, DeviceKind::Touch),
            position: Point::new(10.0, 20.0),
            gesture: SystemGesture::Tap,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"gesture\""));
        assert_eq!(serde_json::from_str::<RawEvent>(&json).unwrap(), event);
    }

    #[test]
    fn manipulation_delta_defaults_fill_missing_fields() {
        let event: RawEvent =
            serde_json::from_str(r#"{"type":"manipulation-delta","delta":{"rotation":2.0}}"#)
                .unwrap();
        match event {
            RawEvent::ManipulationDelta { delta } => {
                assert_eq!(delta.scale, (1.0, 1.0));
                assert_eq!(delta.rotation, 2.0);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
