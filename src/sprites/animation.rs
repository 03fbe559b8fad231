//! Walk-cycle to sprite-frame projection.

use bevy::prelude::*;

use super::PlayerSheet;
use crate::movement::{Player, WalkCycle};

/// Point each player sprite at the sheet cell for its current walk frame.
pub fn sync_sprite_frame(
    sheet: Res<PlayerSheet>,
    mut query: Query<(&WalkCycle, &mut Sprite), (With<Player>, Changed<WalkCycle>)>,
) {
    for (cycle, mut sprite) in &mut query {
        match sheet.layout.frame_rect(cycle.frame_index, cycle.facing) {
            Some(rect) => sprite.rect = Some(rect.as_rect()),
            None => warn!(
                "Walk frame {} facing {:?} is outside the {}x{} sheet",
                cycle.frame_index, cycle.facing, sheet.layout.columns, sheet.layout.rows
            ),
        }
    }
}
