//! UI domain: tests for settings buttons, palette and direction pad.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::controls::handle_direction_buttons;
use super::settings_screen::{SettingsBackButton, handle_settings_buttons};
use super::{ButtonPalette, DirectionButton, SettingField, SettingsButton};
use crate::core::NavigateBack;
use crate::movement::MovementCommand;
use crate::settings::GameSettings;

#[test]
fn test_toggle_buttons_flip_their_flag() {
    let mut settings = GameSettings::default();

    SettingsButton::ToggleSoundEffects.apply(&mut settings);
    assert!(!settings.sound_effects);

    SettingsButton::ToggleVoiceOver.apply(&mut settings);
    assert!(!settings.voice_over);

    SettingsButton::ToggleColorblindMode.apply(&mut settings);
    assert!(settings.colorblind_mode);

    SettingsButton::ToggleColorblindMode.apply(&mut settings);
    assert!(!settings.colorblind_mode);
}

#[test]
fn test_only_on_off_fields_get_a_toggle() {
    assert_eq!(
        SettingsButton::toggle_for(SettingField::SoundEffects),
        Some(SettingsButton::ToggleSoundEffects)
    );
    assert_eq!(
        SettingsButton::toggle_for(SettingField::ColorblindMode),
        Some(SettingsButton::ToggleColorblindMode)
    );
    assert_eq!(SettingsButton::toggle_for(SettingField::MusicVolume), None);
}

#[test]
fn test_volume_buttons_step_and_clamp() {
    let mut settings = GameSettings::default();

    SettingsButton::VolumeUp.apply(&mut settings);
    assert!((settings.music_volume - 0.6).abs() < 1e-6);

    for _ in 0..20 {
        SettingsButton::VolumeUp.apply(&mut settings);
    }
    assert_eq!(settings.music_volume, 1.0);

    for _ in 0..20 {
        SettingsButton::VolumeDown.apply(&mut settings);
    }
    assert_eq!(settings.music_volume, 0.0);
}

#[test]
fn test_back_does_not_touch_settings() {
    let mut app = App::new();
    app.add_message::<NavigateBack>()
        .init_resource::<GameSettings>()
        .init_resource::<BackCount>()
        .add_systems(Update, (handle_settings_buttons, count_back).chain());

    app.world_mut()
        .spawn((SettingsBackButton, Interaction::Pressed));
    app.update();

    assert_eq!(app.world().resource::<BackCount>().0, 1);
    assert_eq!(*app.world().resource::<GameSettings>(), GameSettings::default());
}

#[test]
fn test_pressed_toggle_updates_settings() {
    let mut app = App::new();
    app.add_message::<NavigateBack>()
        .init_resource::<GameSettings>()
        .init_resource::<BackCount>()
        .add_systems(Update, (handle_settings_buttons, count_back).chain());

    app.world_mut()
        .spawn((SettingsButton::VolumeUp, Interaction::Pressed));
    app.world_mut()
        .spawn((SettingsButton::ToggleVoiceOver, Interaction::Hovered));
    app.update();

    let settings = app.world().resource::<GameSettings>();
    assert!((settings.music_volume - 0.6).abs() < 1e-6);
    assert!(settings.voice_over);
    assert_eq!(app.world().resource::<BackCount>().0, 0);
}

#[derive(Resource, Default)]
struct BackCount(usize);

fn count_back(mut reader: MessageReader<NavigateBack>, mut count: ResMut<BackCount>) {
    count.0 += reader.read().count();
}

#[test]
fn test_setting_display_values() {
    let settings = GameSettings::default();
    assert_eq!(SettingField::SoundEffects.display(&settings), "On");
    assert_eq!(SettingField::MusicVolume.display(&settings), "50%");
    assert_eq!(SettingField::ColorblindMode.display(&settings), "Off");
}

#[test]
fn test_palette_follows_colorblind_mode() {
    let mut settings = GameSettings::default();
    assert_eq!(
        ButtonPalette::for_settings(&settings),
        ButtonPalette::STANDARD
    );

    settings.colorblind_mode = true;
    let palette = ButtonPalette::for_settings(&settings);
    assert_eq!(palette, ButtonPalette::HIGH_CONTRAST);
    assert_eq!(palette.background(Interaction::Pressed), palette.pressed);
    assert_eq!(palette.background(Interaction::None), palette.normal);
}

#[derive(Resource, Default)]
struct Collected(Vec<MovementCommand>);

fn collect_commands(mut reader: MessageReader<MovementCommand>, mut collected: ResMut<Collected>) {
    collected.0.extend(reader.read().copied());
}

#[test]
fn test_pad_press_issues_one_command() {
    let mut app = App::new();
    app.add_message::<MovementCommand>()
        .init_resource::<Collected>()
        .add_systems(
            Update,
            (handle_direction_buttons, collect_commands).chain(),
        );

    app.world_mut()
        .spawn((DirectionButton(MovementCommand::Left), Interaction::Pressed));
    app.world_mut()
        .spawn((DirectionButton(MovementCommand::Up), Interaction::Hovered));
    app.update();
    app.update();

    assert_eq!(
        app.world().resource::<Collected>().0,
        vec![MovementCommand::Left]
    );
}
