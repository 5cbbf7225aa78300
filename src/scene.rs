//! The scene collaborator interface.
//!
//! The engine itself never touches pixels; consumers turn dot positions and
//! stroke points into drawable locations by asking the scene layer to pick
//! whatever sits under a screen position. This module defines that seam and
//! a flat single-bitmap picker for the replay binary and tests.

use crate::util::Point;

/// Result of picking a screen position: the owning scene item and the texel
/// inside its bitmap that the position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick {
    pub item: u64,
    pub texel: (u32, u32),
}

/// Maps a screen position to a paintable location, if anything is there.
pub trait ScenePicker {
    fn pick(&self, position: Point) -> Option<Pick>;
}

/// A degenerate scene: one bitmap of `width` × `height` texels mapped 1:1
/// onto the screen at the origin.
pub struct FlatScene {
    width: u32,
    height: u32,
}

impl FlatScene {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl ScenePicker for FlatScene {
    fn pick(&self, position: Point) -> Option<Pick> {
        if position.x < 0.0 || position.y < 0.0 {
            return None;
        }
        let x = position.x as u32;
        let y = position.y as u32;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Pick {
            item: 0,
            texel: (x, y),
        })
    }
}
