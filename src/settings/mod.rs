//! Settings domain: player preferences and their persistence.
//!
//! The movement core never reads these; they drive the settings screen and
//! the UI palette.

mod store;

#[cfg(test)]
mod tests;

pub use store::{SettingsError, load_settings, save_settings};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_SETTINGS_PATH: &str = "settings.ron";

/// Step used by the settings screen's volume buttons.
pub const VOLUME_STEP: f32 = 0.1;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameSettings {
    /// Music volume in [0, 1].
    pub music_volume: f32,
    pub sound_effects: bool,
    pub voice_over: bool,
    pub colorblind_mode: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            music_volume: 0.5,
            sound_effects: true,
            voice_over: true,
            colorblind_mode: false,
        }
    }
}

impl GameSettings {
    /// Set the music volume, clamped to [0, 1]. Non-finite values are ignored.
    pub fn set_music_volume(&mut self, volume: f32) {
        if volume.is_finite() {
            self.music_volume = volume.clamp(0.0, 1.0);
        }
    }

    pub fn adjust_music_volume(&mut self, delta: f32) {
        self.set_music_volume(self.music_volume + delta);
    }

    /// Copy with out-of-range values pulled back into range.
    pub fn sanitized(mut self) -> Self {
        let volume = self.music_volume;
        self.music_volume = Self::default().music_volume;
        self.set_music_volume(volume);
        self
    }
}

/// Where settings are loaded from and saved to.
#[derive(Resource, Debug, Clone)]
pub struct SettingsPath(pub PathBuf);

impl Default for SettingsPath {
    fn default() -> Self {
        Self(PathBuf::from(DEFAULT_SETTINGS_PATH))
    }
}

pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameSettings>()
            .init_resource::<SettingsPath>()
            .add_systems(Startup, load_settings_on_startup)
            .add_systems(Last, persist_settings);
    }
}

pub(crate) fn load_settings_on_startup(
    mut settings: ResMut<GameSettings>,
    path: Res<SettingsPath>,
) {
    match load_settings(&path.0) {
        Ok(loaded) => {
            info!("Loaded settings from {}: {:?}", path.0.display(), loaded);
            *settings = loaded;
        }
        Err(e) => warn!("{}; using default settings", e),
    }
}

/// Write settings back whenever they change after the initial load.
pub(crate) fn persist_settings(
    settings: Res<GameSettings>,
    path: Res<SettingsPath>,
    mut primed: Local<bool>,
) {
    if !*primed {
        *primed = true;
        return;
    }
    if !settings.is_changed() {
        return;
    }

    match save_settings(&path.0, &settings) {
        Ok(()) => debug!("Saved settings to {}", path.0.display()),
        Err(e) => error!("{}", e),
    }
}
