//! UI domain: button colors, with a high-contrast set for colorblind mode.

use bevy::prelude::*;

use crate::settings::GameSettings;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonPalette {
    pub normal: Color,
    pub hovered: Color,
    pub pressed: Color,
    pub border: Color,
    pub text: Color,
}

impl ButtonPalette {
    pub const STANDARD: ButtonPalette = ButtonPalette {
        normal: Color::srgba(0.0, 0.0, 0.0, 0.5),
        hovered: Color::srgba(0.95, 0.57, 0.43, 0.6),
        pressed: Color::srgb(0.95, 0.57, 0.43),
        border: Color::srgb(0.35, 0.35, 0.45),
        text: Color::WHITE,
    };

    pub const HIGH_CONTRAST: ButtonPalette = ButtonPalette {
        normal: Color::BLACK,
        hovered: Color::srgb(0.0, 0.25, 0.6),
        pressed: Color::srgb(0.0, 0.45, 0.9),
        border: Color::srgb(1.0, 0.85, 0.0),
        text: Color::WHITE,
    };

    pub fn for_settings(settings: &GameSettings) -> Self {
        if settings.colorblind_mode {
            Self::HIGH_CONTRAST
        } else {
            Self::STANDARD
        }
    }

    pub fn background(&self, interaction: Interaction) -> Color {
        match interaction {
            Interaction::Pressed => self.pressed,
            Interaction::Hovered => self.hovered,
            Interaction::None => self.normal,
        }
    }
}

pub(crate) fn spawn_button(
    parent: &mut ChildSpawnerCommands,
    marker: impl Bundle,
    label: &str,
    font_size: f32,
    width: Val,
    palette: ButtonPalette,
) {
    parent
        .spawn((
            marker,
            Button,
            Node {
                width,
                padding: UiRect::axes(Val::Px(16.0), Val::Px(10.0)),
                border: UiRect::all(Val::Px(2.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(palette.normal),
            BorderColor::all(palette.border),
        ))
        .with_child((
            Text::new(label),
            TextFont {
                font_size,
                ..default()
            },
            TextColor(palette.text),
        ));
}

/// Recolor buttons on hover/press, and all of them when the palette changes.
pub(crate) fn style_buttons(
    settings: Res<GameSettings>,
    mut query: Query<(Ref<Interaction>, &mut BackgroundColor, &mut BorderColor), With<Button>>,
) {
    let palette = ButtonPalette::for_settings(&settings);
    let restyle_all = settings.is_changed();

    for (interaction, mut bg_color, mut border_color) in &mut query {
        if !restyle_all && !interaction.is_changed() {
            continue;
        }
        *bg_color = BackgroundColor(palette.background(*interaction));
        *border_color = BorderColor::all(palette.border);
    }
}
