//! Core domain: screen flow systems and setup.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::navigation::{Navigate, NavigateBack, ScreenHistory};
use crate::core::state::GameState;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Leave Boot once startup loading has finished.
pub(crate) fn finish_boot(mut game_state: ResMut<NextState<GameState>>) {
    info!("Content loaded, showing main menu");
    game_state.set(GameState::MainMenu);
}

/// Resolve navigation requests against the history and switch screens.
pub(crate) fn handle_navigation(
    mut navigate: MessageReader<Navigate>,
    mut back: MessageReader<NavigateBack>,
    state: Res<State<GameState>>,
    mut history: ResMut<ScreenHistory>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let mut current = *state.get();
    let mut target = None;

    // Every Navigate in a frame resolves before any NavigateBack. The UI
    // sends at most one of either per frame, so the order never shows.
    for Navigate(to) in navigate.read() {
        if let Some(screen) = history.navigate(current, *to) {
            current = screen;
            target = Some(screen);
        }
    }

    for _ in back.read() {
        if let Some(screen) = history.back(current) {
            current = screen;
            target = Some(screen);
        }
    }

    if let Some(screen) = target {
        info!(
            "Navigating {:?} -> {:?} (history depth {})",
            state.get(),
            screen,
            history.depth()
        );
        next_state.set(screen);
    }
}

pub(crate) fn back_on_escape(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut back: MessageWriter<NavigateBack>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        back.write(NavigateBack);
    }
}
