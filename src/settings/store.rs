//! Settings domain: RON persistence for player preferences.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ron::ser::PrettyConfig;

use super::GameSettings;
use crate::content::ron_options;

#[derive(Debug)]
pub enum SettingsError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, message: String },
    Serialize { message: String },
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io { path, source } => {
                write!(f, "Settings I/O error at {}: {}", path.display(), source)
            }
            SettingsError::Parse { path, message } => {
                write!(f, "Malformed settings file {}: {}", path.display(), message)
            }
            SettingsError::Serialize { message } => {
                write!(f, "Failed to serialize settings: {}", message)
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Read settings from `path`. A missing file is not an error and yields defaults.
pub fn load_settings(path: &Path) -> Result<GameSettings, SettingsError> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(GameSettings::default()),
        Err(e) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let settings: GameSettings =
        ron_options()
            .from_str(&contents)
            .map_err(|e| SettingsError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

    Ok(settings.sanitized())
}

pub fn save_settings(path: &Path, settings: &GameSettings) -> Result<(), SettingsError> {
    let contents = ron::ser::to_string_pretty(settings, PrettyConfig::default()).map_err(|e| {
        SettingsError::Serialize {
            message: e.to_string(),
        }
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SettingsError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(path, contents).map_err(|e| SettingsError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
