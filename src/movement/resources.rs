//! Movement domain: tuning and input resources.

use bevy::prelude::*;

/// Reference tick rate the per-tick tuning values are expressed against.
pub const REFERENCE_TICK_RATE: f32 = 60.0;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MovementTuning {
    /// World units per second applied by each command.
    pub speed: f32,
    /// Fraction of velocity lost per reference tick (0 = no drag).
    pub air_friction: f32,
    /// Seconds between repeated commands while a key is held.
    pub repeat_interval: f32,
    pub spawn: Vec2,
    pub body_size: Vec2,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: 5.0 * REFERENCE_TICK_RATE,
            air_friction: 0.1,
            repeat_interval: 0.15,
            spawn: Vec2::ZERO,
            body_size: Vec2::splat(50.0),
        }
    }
}

impl MovementTuning {
    /// Linear damping coefficient equivalent to `air_friction` at the reference rate.
    pub fn linear_damping(&self) -> f32 {
        damping_coefficient(self.air_friction, REFERENCE_TICK_RATE)
    }
}

/// Convert a per-tick velocity loss fraction into a continuous damping
/// coefficient `c` such that `1 / (1 + c / tick_rate) == 1 - fraction`.
pub fn damping_coefficient(fraction: f32, tick_rate: f32) -> f32 {
    if !fraction.is_finite() || fraction <= 0.0 {
        return 0.0;
    }
    // Clamp just under 1.0 so a full stop stays finite.
    let fraction = fraction.min(0.999);
    tick_rate * (1.0 / (1.0 - fraction) - 1.0)
}

/// Auto-repeat state for held direction keys.
#[derive(Resource, Debug)]
pub struct KeyRepeat {
    pub timer: Timer,
}

impl Default for KeyRepeat {
    fn default() -> Self {
        Self::new(MovementTuning::default().repeat_interval)
    }
}

impl KeyRepeat {
    pub fn new(interval: f32) -> Self {
        Self {
            timer: Timer::from_seconds(interval.max(0.01), TimerMode::Repeating),
        }
    }
}
