//! Sprites module: the player sprite sheet and frame selection.
//!
//! This module handles:
//! - Loading the sheet manifest from JSON
//! - Mapping walk frame and facing onto a sheet cell

pub mod animation;
pub mod manifest;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::*;
pub use manifest::*;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerSheet>()
            .add_systems(Startup, load_player_sheet)
            .add_systems(PostUpdate, sync_sprite_frame);
    }
}
