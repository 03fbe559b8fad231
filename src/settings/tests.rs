//! Settings domain: tests for clamping and RON persistence.

use std::fs;
use std::path::PathBuf;

use bevy::prelude::*;

use super::{
    GameSettings, SettingsError, SettingsPath, load_settings, persist_settings, save_settings,
};

fn temp_settings_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("echo-world-tests-{}", std::process::id()));
    dir.join(name)
}

#[test]
fn test_volume_is_clamped() {
    let mut settings = GameSettings::default();

    settings.set_music_volume(1.7);
    assert_eq!(settings.music_volume, 1.0);

    settings.adjust_music_volume(-3.0);
    assert_eq!(settings.music_volume, 0.0);

    settings.set_music_volume(f32::NAN);
    assert_eq!(settings.music_volume, 0.0);
}

#[test]
fn test_sanitized_pulls_volume_into_range() {
    let settings = GameSettings {
        music_volume: 4.0,
        ..GameSettings::default()
    }
    .sanitized();
    assert_eq!(settings.music_volume, 1.0);

    let settings = GameSettings {
        music_volume: f32::INFINITY,
        ..GameSettings::default()
    }
    .sanitized();
    assert_eq!(settings.music_volume, 0.5);
}

#[test]
fn test_missing_file_yields_defaults() {
    let path = temp_settings_path("never-written.ron");
    assert_eq!(load_settings(&path).unwrap(), GameSettings::default());
}

#[test]
fn test_save_then_load() {
    let path = temp_settings_path("saved.ron");
    let settings = GameSettings {
        music_volume: 0.8,
        sound_effects: false,
        voice_over: true,
        colorblind_mode: true,
    };

    save_settings(&path, &settings).unwrap();
    assert_eq!(load_settings(&path).unwrap(), settings);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_malformed_file_is_a_parse_error() {
    let path = temp_settings_path("malformed.ron");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "(music_volume: \"loud\")").unwrap();

    let err = load_settings(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }));
    assert!(err.to_string().contains("malformed.ron"));

    let _ = fs::remove_file(&path);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let path = temp_settings_path("partial.ron");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "(colorblind_mode: true)").unwrap();

    let settings = load_settings(&path).unwrap();
    assert!(settings.colorblind_mode);
    assert_eq!(settings.music_volume, 0.5);
    assert!(settings.sound_effects);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_changes_are_persisted_after_startup() {
    let path = temp_settings_path("persisted.ron");
    let _ = fs::remove_file(&path);

    let mut app = App::new();
    app.init_resource::<GameSettings>()
        .insert_resource(SettingsPath(path.clone()))
        .add_systems(Update, persist_settings);

    // The first run only primes change tracking.
    app.update();
    assert!(!path.exists());

    app.world_mut()
        .resource_mut::<GameSettings>()
        .set_music_volume(0.2);
    app.update();

    assert_eq!(load_settings(&path).unwrap().music_volume, 0.2);
    let _ = fs::remove_file(&path);
}
