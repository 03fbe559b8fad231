//! Movement domain: command application onto the player body.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{MovementCommand, MovementTuning, Player, WalkCycle};

/// Set the body velocity to the command vector and step the walk cycle.
/// The controller never slows the body down; drag belongs to the physics world.
pub fn apply_movement(
    command: MovementCommand,
    tuning: &MovementTuning,
    velocity: &mut LinearVelocity,
    cycle: &mut WalkCycle,
) {
    velocity.0 = command.velocity(tuning.speed);
    cycle.advance(command.facing());
}

pub(crate) fn apply_movement_commands(
    mut commands: MessageReader<MovementCommand>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut LinearVelocity, &mut WalkCycle), With<Player>>,
) {
    // Drain first so commands issued before the body exists are not replayed later.
    let pending: Vec<MovementCommand> = commands.read().copied().collect();
    if pending.is_empty() {
        return;
    }

    let Ok((mut velocity, mut cycle)) = query.single_mut() else {
        debug!(
            "Dropping {} movement command(s): no active player",
            pending.len()
        );
        return;
    };

    for command in pending {
        apply_movement(command, &tuning, &mut velocity, &mut cycle);
        debug!(
            "Move {:?}: velocity={:?}, frame={}, facing={:?}",
            command, velocity.0, cycle.frame_index, cycle.facing
        );
    }
}

pub(crate) fn sync_air_friction(
    tuning: Res<MovementTuning>,
    mut query: Query<&mut LinearDamping, With<Player>>,
) {
    if !tuning.is_changed() {
        return;
    }

    let damping = tuning.linear_damping();
    for mut linear_damping in &mut query {
        linear_damping.0 = damping;
    }
}
