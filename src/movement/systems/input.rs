//! Movement domain: keyboard sampling into movement commands.

use std::time::Duration;

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{KeyRepeat, MovementCommand, MovementTuning};

pub(crate) fn command_keys(command: MovementCommand) -> [KeyCode; 2] {
    match command {
        MovementCommand::Up => [KeyCode::ArrowUp, KeyCode::KeyW],
        MovementCommand::Down => [KeyCode::ArrowDown, KeyCode::KeyS],
        MovementCommand::Left => [KeyCode::ArrowLeft, KeyCode::KeyA],
        MovementCommand::Right => [KeyCode::ArrowRight, KeyCode::KeyD],
    }
}

/// Emit a command on every fresh key press, then keep re-emitting at the
/// repeat interval while keys stay held.
pub(crate) fn read_keyboard_commands(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<MovementTuning>,
    mut repeat: ResMut<KeyRepeat>,
    mut writer: MessageWriter<MovementCommand>,
) {
    if tuning.is_changed() {
        let interval = Duration::from_secs_f32(tuning.repeat_interval.max(0.01));
        repeat.timer.set_duration(interval);
    }

    let mut fresh = false;
    let mut held = Vec::new();
    for command in MovementCommand::ALL {
        let keys = command_keys(command);
        if keyboard.any_just_pressed(keys) {
            writer.write(command);
            fresh = true;
        } else if keyboard.any_pressed(keys) {
            held.push(command);
        }
    }

    if fresh || held.is_empty() {
        repeat.timer.reset();
        return;
    }

    repeat.timer.tick(time.delta());
    if repeat.timer.just_finished() {
        for command in held {
            writer.write(command);
        }
    }
}
