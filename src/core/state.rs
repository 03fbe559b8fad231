//! Core domain: screen state definitions.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum GameState {
    #[default]
    Boot,
    MainMenu,
    Settings,
    /// An active game session; the player body exists only here.
    Run,
}
