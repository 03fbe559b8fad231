//! Movement domain: player components and walk-cycle bookkeeping.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

/// Direction the player sprite faces. The discriminant is the sprite-sheet row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Facing {
    #[default]
    Down = 0,
    Left = 1,
    Right = 2,
    Up = 3,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Down, Facing::Left, Facing::Right, Facing::Up];

    /// Sprite-sheet row for this facing.
    pub fn row(self) -> u32 {
        self as u32
    }
}

/// Looping walk animation driven by movement commands rather than elapsed time.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkCycle {
    pub frame_index: u32,
    pub facing: Facing,
    pub frame_count: u32,
}

impl Default for WalkCycle {
    fn default() -> Self {
        Self::new(4)
    }
}

impl WalkCycle {
    pub fn new(frame_count: u32) -> Self {
        Self {
            frame_index: 0,
            facing: Facing::default(),
            frame_count: frame_count.max(1),
        }
    }

    /// Face `facing` and step to the next frame, wrapping at `frame_count`.
    pub fn advance(&mut self, facing: Facing) {
        self.facing = facing;
        self.frame_index = (self.frame_index + 1) % self.frame_count.max(1);
    }
}
