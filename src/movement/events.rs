//! Movement domain: discrete directional commands.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::Facing;

/// One directional input. Produced by keys or on-screen buttons and applied
/// to the player body in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementCommand {
    Up,
    Down,
    Left,
    Right,
}

impl Message for MovementCommand {}

impl MovementCommand {
    pub const ALL: [MovementCommand; 4] = [
        MovementCommand::Up,
        MovementCommand::Down,
        MovementCommand::Left,
        MovementCommand::Right,
    ];

    /// Unit direction in world space (y-up).
    pub fn direction(self) -> Vec2 {
        match self {
            MovementCommand::Up => Vec2::Y,
            MovementCommand::Down => Vec2::NEG_Y,
            MovementCommand::Left => Vec2::NEG_X,
            MovementCommand::Right => Vec2::X,
        }
    }

    pub fn velocity(self, speed: f32) -> Vec2 {
        self.direction() * speed
    }

    pub fn facing(self) -> Facing {
        match self {
            MovementCommand::Up => Facing::Up,
            MovementCommand::Down => Facing::Down,
            MovementCommand::Left => Facing::Left,
            MovementCommand::Right => Facing::Right,
        }
    }
}
