mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;
mod settings;
mod sprites;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Echo World".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    // Top-down: nothing falls.
    .insert_resource(Gravity(Vec2::ZERO))
    .insert_resource(ClearColor(Color::BLACK))
    .add_plugins((
        core::CorePlugin,
        settings::SettingsPlugin,
        content::ContentPlugin,
        sprites::SpritesPlugin,
        movement::MovementPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
