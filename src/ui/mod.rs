//! UI domain: menu, settings and in-game control screens.

mod controls;
mod menu;
mod palette;
mod settings_screen;

#[cfg(test)]
mod tests;

pub use controls::DirectionButton;
pub use palette::ButtonPalette;
pub use settings_screen::{SettingField, SettingsButton};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::CommandSources;
use crate::ui::controls::{cleanup_direction_pad, handle_direction_buttons, spawn_direction_pad};
use crate::ui::menu::{cleanup_main_menu, handle_menu_buttons, spawn_main_menu};
use crate::ui::palette::style_buttons;
use crate::ui::settings_screen::{
    cleanup_settings_ui, handle_settings_buttons, spawn_settings_ui, update_setting_values,
};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::MainMenu), spawn_main_menu)
            .add_systems(OnExit(GameState::MainMenu), cleanup_main_menu)
            .add_systems(OnEnter(GameState::Settings), spawn_settings_ui)
            .add_systems(OnExit(GameState::Settings), cleanup_settings_ui)
            .add_systems(OnEnter(GameState::Run), spawn_direction_pad)
            .add_systems(OnExit(GameState::Run), cleanup_direction_pad)
            .add_systems(
                Update,
                handle_menu_buttons.run_if(in_state(GameState::MainMenu)),
            )
            .add_systems(
                Update,
                (handle_settings_buttons, update_setting_values)
                    .chain()
                    .run_if(in_state(GameState::Settings)),
            )
            .add_systems(
                Update,
                handle_direction_buttons
                    .in_set(CommandSources)
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(Update, style_buttons);
    }
}
