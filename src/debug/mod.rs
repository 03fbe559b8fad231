//! Debug tooling, compiled with the `dev-tools` feature.
//!
//! Features:
//! - Toggle an overlay with the player's position, velocity and walk frame

mod systems;


pub use systems::format_player_info;

use bevy::prelude::*;

use crate::debug::systems::{toggle_debug_info, update_debug_info_overlay};

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the info overlay is visible
    pub show_info: bool,
}

/// Marker for debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (toggle_debug_info, update_debug_info_overlay).chain(),
        );
    }
}
