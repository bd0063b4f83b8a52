//! Input handling systems
//!
//! Keyboard and on-screen button triggers. Both only write a
//! [`RollRequested`]; whether a roll actually starts is the engine's call.

use bevy::prelude::*;

use crate::die::types::*;

/// Space or Enter asks for a roll
pub fn handle_keyboard_roll(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut requests: MessageWriter<RollRequested>,
) {
    if keyboard.any_just_pressed([KeyCode::Space, KeyCode::Enter, KeyCode::NumpadEnter]) {
        requests.write(RollRequested {
            trigger: RollTrigger::Keyboard,
        });
    }
}

/// Clicking the roll button asks for a roll
pub fn handle_roll_button_click(
    button_query: Query<&Interaction, (Changed<Interaction>, With<RollButton>)>,
    mut requests: MessageWriter<RollRequested>,
) {
    for interaction in button_query.iter() {
        if *interaction == Interaction::Pressed {
            requests.write(RollRequested {
                trigger: RollTrigger::Button,
            });
        }
    }
}

/// Startup system queued by `--roll` / `diceapp://roll`
pub fn request_launch_roll(mut requests: MessageWriter<RollRequested>) {
    info!("Rolling on launch");
    requests.write(RollRequested {
        trigger: RollTrigger::Launch,
    });
}
