//! Debug domain: info overlay for the player body and walk cycle.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::{DebugInfoOverlay, DebugState};
use crate::core::GameState;
use crate::movement::{Player, WalkCycle};

/// Toggle the info overlay with F3 or backtick
pub(crate) fn toggle_debug_info(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F3) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.show_info = !debug_state.show_info;
        info!("[DEBUG] Info overlay {}", if debug_state.show_info { "ON" } else { "OFF" });
    }
}

pub fn format_player_info(position: Vec2, velocity: Vec2, cycle: &WalkCycle) -> String {
    format!(
        "Pos: ({:.0}, {:.0})\nVel: ({:.1}, {:.1})\nFrame: {}/{}\nFacing: {:?} (row {})",
        position.x,
        position.y,
        velocity.x,
        velocity.y,
        cycle.frame_index,
        cycle.frame_count,
        cycle.facing,
        cycle.facing.row()
    )
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("No active player"),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            top: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    game_state: Res<State<GameState>>,
    player_query: Query<(&Transform, &LinearVelocity, &WalkCycle), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    let Ok(mut text) = overlay_query.single_mut() else {
        return;
    };

    **text = match player_query.iter().next() {
        Some((transform, velocity, cycle)) => {
            format_player_info(transform.translation.truncate(), velocity.0, cycle)
        }
        None => format!("Screen: {:?}\nNo active player", game_state.get()),
    };
}
