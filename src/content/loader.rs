//! Loader for RON and JSON content files at startup.

use ron::Options;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use super::data::GameplayDefaults;
use super::validation::validate_movement;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
pub(crate) fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse a single RON struct from `contents`; `file` is used for error context.
pub fn parse_ron<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: DeserializeOwned,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct from disk.
pub fn load_ron_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: DeserializeOwned,
{
    let contents = read_file(path)?;
    parse_ron(&path.display().to_string(), &contents)
}

/// Load a single JSON struct from disk.
pub fn load_json_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: DeserializeOwned,
{
    let contents = read_file(path)?;
    serde_json::from_str(&contents).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("Parse error: {}", e),
    })
}

/// Load gameplay.ron from `base_path`. Out-of-range values are reset to their
/// defaults and reported alongside the loaded data.
pub fn load_gameplay_defaults(
    base_path: &Path,
) -> Result<(GameplayDefaults, Vec<super::ValidationError>), ContentLoadError> {
    let path = base_path.join("gameplay.ron");
    let mut defaults: GameplayDefaults = load_ron_file(&path)?;
    let issues = validate_movement(&mut defaults.movement);
    Ok((defaults, issues))
}
