//! Movement domain: system modules for locomotion updates.

pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::read_keyboard_commands;
pub use movement::apply_movement;
pub(crate) use movement::{apply_movement_commands, sync_air_friction};
