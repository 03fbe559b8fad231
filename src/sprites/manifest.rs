//! Sprite sheet manifest loading and frame lookup.
//!
//! The player sheet is a fixed grid: one row per facing, one column per
//! walk phase. The manifest JSON names the image and describes the grid.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::content::{ContentLoadError, load_json_file, validate_sheet_layout};
use crate::movement::Facing;

pub const PLAYER_SHEET_MANIFEST: &str = "assets/sprites/player_sheet.json";
pub const DEFAULT_SHEET_IMAGE: &str = "sprites/player_sheet.png";

/// Grid layout of a sprite sheet, in pixels and cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SheetLayout {
    pub frame_width: u32,
    pub frame_height: u32,
    pub columns: u32,
    pub rows: u32,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            frame_width: 64,
            frame_height: 64,
            columns: 4,
            rows: 4,
        }
    }
}

impl SheetLayout {
    /// Sub-rectangle of the sheet showing `frame_index` for `facing`.
    /// Returns `None` when the pair falls outside the grid.
    pub fn frame_rect(&self, frame_index: u32, facing: Facing) -> Option<URect> {
        let row = facing.row();
        if frame_index >= self.columns || row >= self.rows {
            return None;
        }

        let x = frame_index * self.frame_width;
        let y = row * self.frame_height;
        Some(URect::new(
            x,
            y,
            x + self.frame_width,
            y + self.frame_height,
        ))
    }

    /// Display size of a single frame.
    pub fn frame_size(&self) -> Vec2 {
        Vec2::new(self.frame_width as f32, self.frame_height as f32)
    }
}

/// Raw manifest JSON structure.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SheetManifest {
    pub version: u32,
    /// Image path relative to assets/.
    pub image: String,
    #[serde(default)]
    pub layout: SheetLayout,
}

impl Default for SheetManifest {
    fn default() -> Self {
        Self {
            version: 1,
            image: DEFAULT_SHEET_IMAGE.to_string(),
            layout: SheetLayout::default(),
        }
    }
}

/// Resource holding the player's sheet layout and texture.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlayerSheet {
    pub layout: SheetLayout,
    pub image: Handle<Image>,
}

/// Read and validate a manifest. Invalid layout values are reset to defaults
/// and logged; read or parse failures are returned.
pub fn read_sheet_manifest(path: &Path) -> Result<SheetManifest, ContentLoadError> {
    let mut manifest: SheetManifest = load_json_file(path)?;

    for error in validate_sheet_layout(&mut manifest.layout) {
        warn!("{}: {}", path.display(), error);
    }

    Ok(manifest)
}

/// System to load the player sheet manifest at startup.
pub(crate) fn load_player_sheet(mut sheet: ResMut<PlayerSheet>, asset_server: Res<AssetServer>) {
    let manifest = match read_sheet_manifest(Path::new(PLAYER_SHEET_MANIFEST)) {
        Ok(manifest) => manifest,
        Err(e) => {
            warn!("{}; using the built-in sheet layout", e);
            SheetManifest::default()
        }
    };

    sheet.layout = manifest.layout;
    sheet.image = asset_server.load(manifest.image.clone());

    info!(
        "Loaded sprite sheet manifest v{}: {} ({}x{} frames of {}x{})",
        manifest.version,
        manifest.image,
        manifest.layout.columns,
        manifest.layout.rows,
        manifest.layout.frame_width,
        manifest.layout.frame_height
    );
}
