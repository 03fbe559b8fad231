//! Core domain: screen states, navigation and camera.

mod navigation;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use navigation::{Navigate, NavigateBack, ScreenHistory};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{back_on_escape, finish_boot, handle_navigation, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<ScreenHistory>()
            .add_message::<Navigate>()
            .add_message::<NavigateBack>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, finish_boot.run_if(in_state(GameState::Boot)))
            .add_systems(
                Update,
                back_on_escape.run_if(in_state(GameState::Run).or(in_state(GameState::Settings))),
            )
            .add_systems(Update, handle_navigation.after(back_on_escape));
    }
}
