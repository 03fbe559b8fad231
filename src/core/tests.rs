//! Core domain: tests for screen history and navigation.

use bevy::ecs::message::Messages;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use super::systems::handle_navigation;
use super::{GameState, Navigate, NavigateBack, ScreenHistory};

// -----------------------------------------------------------------------------
// ScreenHistory
// -----------------------------------------------------------------------------

#[test]
fn test_navigate_records_current_screen() {
    let mut history = ScreenHistory::default();

    assert_eq!(
        history.navigate(GameState::MainMenu, GameState::Settings),
        Some(GameState::Settings)
    );
    assert_eq!(history.depth(), 1);
    assert_eq!(history.back(GameState::Settings), Some(GameState::MainMenu));
    assert_eq!(history.depth(), 0);
}

#[test]
fn test_navigate_to_current_screen_is_noop() {
    let mut history = ScreenHistory::default();
    assert_eq!(history.navigate(GameState::Run, GameState::Run), None);
    assert_eq!(history.depth(), 0);
}

#[test]
fn test_boot_is_never_recorded() {
    let mut history = ScreenHistory::default();
    history.navigate(GameState::Boot, GameState::MainMenu);
    assert_eq!(history.depth(), 0);
}

#[test]
fn test_back_with_empty_history_goes_to_main_menu() {
    let mut history = ScreenHistory::default();
    assert_eq!(history.back(GameState::Run), Some(GameState::MainMenu));
    assert_eq!(history.back(GameState::MainMenu), None);
}

#[test]
fn test_back_walks_nested_screens() {
    let mut history = ScreenHistory::default();
    history.navigate(GameState::MainMenu, GameState::Run);
    history.navigate(GameState::Run, GameState::Settings);

    assert_eq!(history.back(GameState::Settings), Some(GameState::Run));
    assert_eq!(history.back(GameState::Run), Some(GameState::MainMenu));
    assert_eq!(history.back(GameState::MainMenu), None);
}

// -----------------------------------------------------------------------------
// Navigation system
// -----------------------------------------------------------------------------

fn navigation_app() -> App {
    let mut app = App::new();
    app.add_plugins(StatesPlugin)
        .init_state::<GameState>()
        .init_resource::<ScreenHistory>()
        .add_message::<Navigate>()
        .add_message::<NavigateBack>()
        .add_systems(Update, handle_navigation);
    app
}

fn current_state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

#[test]
fn test_navigate_and_back_switch_states() {
    let mut app = navigation_app();

    app.world_mut()
        .resource_mut::<Messages<Navigate>>()
        .write(Navigate(GameState::Settings));
    // Requested in Update, applied on the next frame's state transition.
    app.update();
    app.update();
    assert_eq!(current_state(&app), GameState::Settings);

    app.world_mut()
        .resource_mut::<Messages<NavigateBack>>()
        .write(NavigateBack);
    app.update();
    app.update();
    assert_eq!(current_state(&app), GameState::MainMenu);
}
