//! UI domain: on-screen direction pad for the game screen.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::MovementCommand;
use crate::settings::GameSettings;
use crate::ui::palette::{ButtonPalette, spawn_button};

/// Marker for the direction pad root
#[derive(Component, Debug)]
pub struct DirectionPadUI;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionButton(pub MovementCommand);

fn label(command: MovementCommand) -> &'static str {
    match command {
        MovementCommand::Up => "Up",
        MovementCommand::Down => "Down",
        MovementCommand::Left => "Left",
        MovementCommand::Right => "Right",
    }
}

pub(crate) fn spawn_direction_pad(mut commands: Commands, settings: Res<GameSettings>) {
    let palette = ButtonPalette::for_settings(&settings);

    commands
        .spawn((
            DirectionPadUI,
            Node {
                width: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                bottom: Val::Px(20.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    justify_content: JustifyContent::Center,
                    column_gap: Val::Px(10.0),
                    ..default()
                })
                .with_children(|row| {
                    for command in MovementCommand::ALL {
                        spawn_button(
                            row,
                            DirectionButton(command),
                            label(command),
                            16.0,
                            Val::Px(90.0),
                            palette,
                        );
                    }
                });

            parent.spawn((
                Text::new("Arrows / WASD to move, Esc for menu"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.7)),
            ));
        });
}

pub(crate) fn cleanup_direction_pad(
    mut commands: Commands,
    query: Query<Entity, With<DirectionPadUI>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Each press of a pad button issues exactly one command.
pub(crate) fn handle_direction_buttons(
    button_query: Query<(&DirectionButton, &Interaction), Changed<Interaction>>,
    mut writer: MessageWriter<MovementCommand>,
) {
    for (button, interaction) in &button_query {
        if *interaction == Interaction::Pressed {
            writer.write(button.0);
        }
    }
}
