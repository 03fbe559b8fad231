//! Content domain: data-driven tuning loaded from assets/data at startup.

mod data;
mod loader;
mod validation;


pub use data::{GameplayDefaults, MovementDefs};
pub use loader::{
    ContentLoadError, load_gameplay_defaults, load_json_file, load_ron_file, parse_ron,
};
pub use validation::{ValidationError, validate_movement, validate_sheet_layout};

pub(crate) use loader::ron_options;

use bevy::prelude::*;
use std::path::Path;

use crate::movement::MovementTuning;

pub const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_gameplay_content);
    }
}

/// Apply gameplay.ron onto the movement tuning, keeping built-in defaults on failure.
fn load_gameplay_content(mut tuning: ResMut<MovementTuning>) {
    match load_gameplay_defaults(Path::new(CONTENT_DIR)) {
        Ok((defaults, issues)) => {
            for issue in &issues {
                warn!("gameplay.ron: {}", issue);
            }
            defaults.movement.apply_to(&mut tuning);
            info!(
                "Loaded gameplay content: speed={}, air_friction={}, repeat_interval={}",
                tuning.speed, tuning.air_friction, tuning.repeat_interval
            );
        }
        Err(e) => {
            warn!("{}; using built-in movement tuning", e);
        }
    }
}
