//! Serializable definitions for data-driven gameplay tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;

/// Top-level contents of gameplay.ron.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayDefaults {
    pub movement: MovementDefs,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementDefs {
    /// World units per second.
    pub speed: f32,
    /// Fraction of velocity lost per 60 Hz tick.
    pub air_friction: f32,
    /// Seconds between repeats of a held direction key.
    pub repeat_interval: f32,
    pub spawn: (f32, f32),
    pub body_size: (f32, f32),
}

impl Default for MovementDefs {
    fn default() -> Self {
        let tuning = MovementTuning::default();
        Self {
            speed: tuning.speed,
            air_friction: tuning.air_friction,
            repeat_interval: tuning.repeat_interval,
            spawn: (tuning.spawn.x, tuning.spawn.y),
            body_size: (tuning.body_size.x, tuning.body_size.y),
        }
    }
}

impl MovementDefs {
    pub fn apply_to(&self, tuning: &mut MovementTuning) {
        tuning.speed = self.speed;
        tuning.air_friction = self.air_friction;
        tuning.repeat_interval = self.repeat_interval;
        tuning.spawn = Vec2::new(self.spawn.0, self.spawn.1);
        tuning.body_size = Vec2::new(self.body_size.0, self.body_size.1);
    }
}
