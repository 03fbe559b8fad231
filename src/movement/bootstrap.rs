//! Movement domain: player session lifecycle.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{Facing, MovementTuning, Player, WalkCycle};
use crate::sprites::PlayerSheet;

/// Spawn the player body when a game session starts.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    sheet: Res<PlayerSheet>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let cycle = WalkCycle::new(sheet.layout.columns);
    let rect = sheet
        .layout
        .frame_rect(cycle.frame_index, Facing::default())
        .map(|r| r.as_rect());

    info!(
        "Spawning player at {:?}: speed={}, air_friction={}, frames={}",
        tuning.spawn, tuning.speed, tuning.air_friction, cycle.frame_count
    );

    commands.spawn((
        Player,
        cycle,
        // Rendering
        Sprite {
            image: sheet.image.clone(),
            rect,
            custom_size: Some(sheet.layout.frame_size()),
            ..default()
        },
        Transform::from_xyz(tuning.spawn.x, tuning.spawn.y, 1.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(tuning.body_size.x, tuning.body_size.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            LinearDamping(tuning.linear_damping()),
            GravityScale(0.0),
            Friction::new(0.0),
        ),
    ));
}

/// Tear the player body down when the session ends.
pub(crate) fn despawn_player(mut commands: Commands, query: Query<Entity, With<Player>>) {
    for entity in &query {
        commands.entity(entity).despawn();
        info!("Player session ended");
    }
}
