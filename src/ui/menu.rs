//! UI domain: main menu screen.

use bevy::app::AppExit;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{GameState, Navigate};
use crate::settings::GameSettings;
use crate::ui::palette::{ButtonPalette, spawn_button};

/// Marker for the main menu UI root
#[derive(Component, Debug)]
pub struct MainMenuUI;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Start,
    Settings,
    Exit,
}

impl MenuButton {
    fn label(self) -> &'static str {
        match self {
            MenuButton::Start => "Start",
            MenuButton::Settings => "Settings",
            MenuButton::Exit => "Exit",
        }
    }
}

pub(crate) fn spawn_main_menu(mut commands: Commands, settings: Res<GameSettings>) {
    let palette = ButtonPalette::for_settings(&settings);

    commands
        .spawn((
            MainMenuUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(20.0),
                ..default()
            },
            BackgroundColor(Color::srgb(0.06, 0.08, 0.12)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Echo World"),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(50.0)),
                    ..default()
                },
            ));

            for button in [MenuButton::Start, MenuButton::Settings, MenuButton::Exit] {
                spawn_button(
                    parent,
                    button,
                    button.label(),
                    24.0,
                    Val::Px(220.0),
                    palette,
                );
            }
        });
}

pub(crate) fn cleanup_main_menu(mut commands: Commands, query: Query<Entity, With<MainMenuUI>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn handle_menu_buttons(
    button_query: Query<(&MenuButton, &Interaction), Changed<Interaction>>,
    mut navigate: MessageWriter<Navigate>,
    mut exit: MessageWriter<AppExit>,
) {
    for (button, interaction) in &button_query {
        if *interaction != Interaction::Pressed {
            continue;
        }

        info!("Main menu: {:?}", button);
        match button {
            MenuButton::Start => {
                navigate.write(Navigate(GameState::Run));
            }
            MenuButton::Settings => {
                navigate.write(Navigate(GameState::Settings));
            }
            MenuButton::Exit => {
                exit.write(AppExit::Success);
            }
        }
    }
}
