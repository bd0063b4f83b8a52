//! Scene and UI marker components

use bevy::prelude::*;

use super::FaceValue;

#[derive(Component)]
pub struct MainCamera;

/// The die entity whose rotation shows the rolled face
#[derive(Component)]
pub struct DieBody;

/// Textured quad on one side of the die
#[derive(Component)]
pub struct DieFaceQuad {
    pub face: FaceValue,
}

#[derive(Component)]
pub struct RollButton;

#[derive(Component)]
pub struct RollButtonLabel;

#[derive(Component)]
pub struct ResultText;

pub const ROLL_BUTTON_IDLE_BG: Color = Color::srgb(0.0, 0.48, 1.0);
pub const ROLL_BUTTON_HOVER_BG: Color = Color::srgb(0.1, 0.56, 1.0);
pub const ROLL_BUTTON_ROLLING_BG: Color = Color::srgb(0.55, 0.55, 0.58);
