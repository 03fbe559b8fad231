//! Movement domain: directional commands, player body and walk cycle.

mod bootstrap;
mod components;
mod events;
mod resources;
mod systems;


pub use components::*;
pub use events::MovementCommand;
pub use resources::*;
pub use systems::apply_movement;

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::bootstrap::{despawn_player, spawn_player};
use crate::movement::systems::{
    apply_movement_commands, read_keyboard_commands, sync_air_friction,
};

/// System set for everything that emits `MovementCommand`s.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandSources;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<KeyRepeat>()
            .add_message::<MovementCommand>()
            .add_systems(OnEnter(GameState::Run), spawn_player)
            .add_systems(OnExit(GameState::Run), despawn_player)
            .add_systems(
                Update,
                read_keyboard_commands
                    .in_set(CommandSources)
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(
                Update,
                (apply_movement_commands, sync_air_friction)
                    .chain()
                    .after(CommandSources),
            );
    }
}
