//! Sprites module: tests for sheet lookup and sprite syncing.

use std::fs;
use std::path::PathBuf;

use bevy::prelude::*;

use super::{PlayerSheet, SheetLayout, SheetManifest, read_sheet_manifest, sync_sprite_frame};
use crate::movement::{Facing, Player, WalkCycle};

#[test]
fn test_frame_rect_for_third_frame_facing_left() {
    let layout = SheetLayout::default();
    let rect = layout.frame_rect(2, Facing::Left);

    assert_eq!(rect, Some(URect::new(128, 64, 192, 128)));
    let rect = rect.unwrap();
    assert_eq!((rect.min.x, rect.min.y), (128, 64));
    assert_eq!((rect.width(), rect.height()), (64, 64));
}

#[test]
fn test_frame_rect_covers_whole_sheet() {
    let layout = SheetLayout::default();
    let sheet_width = layout.frame_width * layout.columns;
    let sheet_height = layout.frame_height * layout.rows;

    for facing in Facing::ALL {
        for frame in 0..layout.columns {
            let rect = layout.frame_rect(frame, facing).unwrap();
            assert!(rect.max.x <= sheet_width);
            assert!(rect.max.y <= sheet_height);
        }
    }
    assert_eq!(
        layout.frame_rect(layout.columns - 1, Facing::Up),
        Some(URect::new(192, 192, 256, 256))
    );
}

#[test]
fn test_frame_rect_out_of_range() {
    let layout = SheetLayout::default();
    assert_eq!(layout.frame_rect(4, Facing::Down), None);

    let short = SheetLayout {
        rows: 2,
        ..SheetLayout::default()
    };
    assert_eq!(short.frame_rect(0, Facing::Right), None);
    assert!(short.frame_rect(0, Facing::Left).is_some());
}

#[test]
fn test_shipped_manifest_parses() {
    let manifest: SheetManifest =
        serde_json::from_str(include_str!("../../assets/sprites/player_sheet.json")).unwrap();

    assert_eq!(manifest.layout, SheetLayout::default());
    assert!(manifest.image.ends_with(".png"));
}

#[test]
fn test_manifest_layout_defaults_when_omitted() {
    let manifest: SheetManifest =
        serde_json::from_str(r#"{ "version": 2, "image": "sprites/hero.png" }"#).unwrap();

    assert_eq!(manifest.version, 2);
    assert_eq!(manifest.layout, SheetLayout::default());
}

fn temp_manifest_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("echo-world-tests-{}", std::process::id()));
    dir.join(name)
}

#[test]
fn test_missing_manifest_is_an_io_error() {
    let path = temp_manifest_path("no_such_sheet.json");
    let _ = fs::remove_file(&path);

    let err = read_sheet_manifest(&path).unwrap_err();
    assert!(err.message.starts_with("IO error"), "{}", err.message);
}

#[test]
fn test_manifest_with_too_few_rows_falls_back() {
    let path = temp_manifest_path("short_sheet.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        r#"{
            "version": 1,
            "image": "sprites/player_sheet.png",
            "layout": { "frame_width": 32, "frame_height": 32, "columns": 6, "rows": 2 }
        }"#,
    )
    .unwrap();

    let manifest = read_sheet_manifest(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(manifest.layout.rows, 4);
    assert_eq!(manifest.layout.columns, 6);
    assert_eq!(manifest.layout.frame_width, 32);
    assert!(manifest.layout.frame_rect(0, Facing::Up).is_some());
}

#[test]
fn test_sync_sprite_frame_sets_rect() {
    let mut app = App::new();
    app.init_resource::<PlayerSheet>()
        .add_systems(Update, sync_sprite_frame);

    let player = app
        .world_mut()
        .spawn((
            Player,
            WalkCycle {
                frame_index: 2,
                facing: Facing::Left,
                frame_count: 4,
            },
            Sprite::default(),
        ))
        .id();
    app.update();

    let rect = app.world().get::<Sprite>(player).and_then(|s| s.rect);
    assert_eq!(rect, Some(Rect::new(128.0, 64.0, 192.0, 128.0)));

    app.world_mut()
        .get_mut::<WalkCycle>(player)
        .unwrap()
        .advance(Facing::Up);
    app.update();

    let rect = app.world().get::<Sprite>(player).and_then(|s| s.rect);
    assert_eq!(rect, Some(Rect::new(192.0, 192.0, 256.0, 256.0)));
}
