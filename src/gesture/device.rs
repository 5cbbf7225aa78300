//! Physical input device identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of physical input source a raw event originated from.
///
/// The platform tags every contact with its origin; receivers use this tag
/// to claim events exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Mouse,
    Pen,
    Touch,
}

/// Identifies one physical input source: a mouse, a pen, or a single touch
/// contact.
///
/// Pen and touch ids come from the platform and are unique per active
/// contact; the platform may reuse an id after the contact is released.
/// Compared by value, usable as a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub id: i32,
    pub kind: DeviceKind,
}

impl DeviceInfo {
    pub fn new(id: i32, kind: DeviceKind) -> Self {
        Self { id, kind }
    }
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            DeviceKind::Mouse => "mouse",
            DeviceKind::Pen => "pen",
            DeviceKind::Touch => "touch",
        };
        write!(f, "{}:{}", kind, self.id)
    }
}

/// The single mouse stream. Only one mouse pointer exists, so it gets a
/// reserved sentinel id that platform contact ids never collide with.
pub const MOUSE_DEVICE: DeviceInfo = DeviceInfo {
    id: -1,
    kind: DeviceKind::Mouse,
};
