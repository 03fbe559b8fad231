//! UI domain: settings screen with toggles and a volume stepper.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::NavigateBack;
use crate::settings::{GameSettings, VOLUME_STEP};
use crate::ui::palette::{ButtonPalette, spawn_button};

/// Marker for the settings UI root
#[derive(Component, Debug)]
pub struct SettingsUI;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    SoundEffects,
    MusicVolume,
    VoiceOver,
    ColorblindMode,
}

impl SettingField {
    fn label(self) -> &'static str {
        match self {
            SettingField::SoundEffects => "Sound Effects",
            SettingField::MusicVolume => "Music Volume",
            SettingField::VoiceOver => "Voice Over",
            SettingField::ColorblindMode => "Colorblind Mode",
        }
    }

    /// Current value as shown on screen.
    pub fn display(self, settings: &GameSettings) -> String {
        let on_off = |flag: bool| String::from(if flag { "On" } else { "Off" });
        match self {
            SettingField::SoundEffects => on_off(settings.sound_effects),
            SettingField::MusicVolume => format!("{:.0}%", settings.music_volume * 100.0),
            SettingField::VoiceOver => on_off(settings.voice_over),
            SettingField::ColorblindMode => on_off(settings.colorblind_mode),
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsButton {
    ToggleSoundEffects,
    ToggleVoiceOver,
    ToggleColorblindMode,
    VolumeDown,
    VolumeUp,
}

impl SettingsButton {
    /// The toggle button for an on/off field. `MusicVolume` uses the stepper.
    pub fn toggle_for(field: SettingField) -> Option<Self> {
        match field {
            SettingField::SoundEffects => Some(SettingsButton::ToggleSoundEffects),
            SettingField::VoiceOver => Some(SettingsButton::ToggleVoiceOver),
            SettingField::ColorblindMode => Some(SettingsButton::ToggleColorblindMode),
            SettingField::MusicVolume => None,
        }
    }

    pub fn apply(self, settings: &mut GameSettings) {
        match self {
            SettingsButton::ToggleSoundEffects => settings.sound_effects = !settings.sound_effects,
            SettingsButton::ToggleVoiceOver => settings.voice_over = !settings.voice_over,
            SettingsButton::ToggleColorblindMode => {
                settings.colorblind_mode = !settings.colorblind_mode
            }
            SettingsButton::VolumeDown => settings.adjust_music_volume(-VOLUME_STEP),
            SettingsButton::VolumeUp => settings.adjust_music_volume(VOLUME_STEP),
        }
    }
}

/// Leaves the settings screen without touching any setting
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsBackButton;

/// Text node showing the current value of a setting
#[derive(Component, Debug)]
pub struct SettingValueText(pub SettingField);

pub(crate) fn spawn_settings_ui(mut commands: Commands, settings: Res<GameSettings>) {
    let palette = ButtonPalette::for_settings(&settings);
    let text_color = Color::WHITE;

    commands
        .spawn((
            SettingsUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.1, 0.1, 0.1)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Settings"),
                TextFont {
                    font_size: 30.0,
                    ..default()
                },
                TextColor(text_color),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            for field in [
                SettingField::SoundEffects,
                SettingField::MusicVolume,
                SettingField::VoiceOver,
                SettingField::ColorblindMode,
            ] {
                spawn_setting_row(parent, field, &settings, palette, text_color);
            }

            parent
                .spawn(Node {
                    margin: UiRect::top(Val::Px(30.0)),
                    ..default()
                })
                .with_children(|row| {
                    spawn_button(
                        row,
                        SettingsBackButton,
                        "Back",
                        18.0,
                        Val::Px(140.0),
                        palette,
                    );
                });
        });
}

fn spawn_setting_row(
    parent: &mut ChildSpawnerCommands,
    field: SettingField,
    settings: &GameSettings,
    palette: ButtonPalette,
    text_color: Color,
) {
    parent
        .spawn(Node {
            width: Val::Percent(80.0),
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::Center,
            margin: UiRect::vertical(Val::Px(10.0)),
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Text::new(field.label()),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(text_color),
            ));

            row.spawn(Node {
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(12.0),
                ..default()
            })
            .with_children(|controls| {
                if field == SettingField::MusicVolume {
                    spawn_button(
                        controls,
                        SettingsButton::VolumeDown,
                        "-",
                        18.0,
                        Val::Px(48.0),
                        palette,
                    );
                }

                controls.spawn((
                    SettingValueText(field),
                    Text::new(field.display(settings)),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(text_color),
                ));

                if field == SettingField::MusicVolume {
                    spawn_button(
                        controls,
                        SettingsButton::VolumeUp,
                        "+",
                        18.0,
                        Val::Px(48.0),
                        palette,
                    );
                } else if let Some(toggle) = SettingsButton::toggle_for(field) {
                    spawn_button(
                        controls,
                        toggle,
                        "Toggle",
                        16.0,
                        Val::Px(100.0),
                        palette,
                    );
                }
            });
        });
}

pub(crate) fn cleanup_settings_ui(mut commands: Commands, query: Query<Entity, With<SettingsUI>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn handle_settings_buttons(
    button_query: Query<(&SettingsButton, &Interaction), Changed<Interaction>>,
    back_query: Query<&Interaction, (Changed<Interaction>, With<SettingsBackButton>)>,
    mut settings: ResMut<GameSettings>,
    mut back: MessageWriter<NavigateBack>,
) {
    for (button, interaction) in &button_query {
        if *interaction != Interaction::Pressed {
            continue;
        }

        button.apply(&mut settings);
        debug!("Settings updated via {:?}: {:?}", button, *settings);
    }

    if back_query.iter().any(|interaction| *interaction == Interaction::Pressed) {
        back.write(NavigateBack);
    }
}

pub(crate) fn update_setting_values(
    settings: Res<GameSettings>,
    mut query: Query<(&SettingValueText, &mut Text)>,
) {
    if !settings.is_changed() {
        return;
    }

    for (value, mut text) in &mut query {
        text.0 = value.0.display(&settings);
    }
}
