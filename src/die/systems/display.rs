//! Roll button and status line

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::die::engine::RollEngine;
use crate::die::l10n::Language;
use crate::die::types::*;

/// Grey out the button while rolling, show hover when idle
pub fn update_roll_button(
    engine: Res<RollEngine>,
    mut button_query: Query<(&Interaction, &mut BackgroundColor), With<RollButton>>,
) {
    for (interaction, mut bg) in button_query.iter_mut() {
        let color = if engine.is_rolling() {
            ROLL_BUTTON_ROLLING_BG
        } else if *interaction == Interaction::Hovered {
            ROLL_BUTTON_HOVER_BG
        } else {
            ROLL_BUTTON_IDLE_BG
        };
        if bg.0 != color {
            *bg = BackgroundColor(color);
        }
    }
}

/// Text for the status line under the die
pub fn status_text(language: Language, snapshot: &DieSnapshot) -> String {
    if snapshot.is_rolling() {
        language.text("status.rolling")
    } else {
        language.format("status.result", &[&snapshot.current_face])
    }
}

/// Refresh the status line whenever the engine changes
pub fn update_results_display(
    engine: Res<RollEngine>,
    language: Res<Language>,
    mut text_query: Query<&mut Text, With<ResultText>>,
) {
    if !engine.is_changed() || engine.is_added() {
        return;
    }

    let value = status_text(*language, &engine.snapshot());
    for mut text in text_query.iter_mut() {
        if text.0 != value {
            text.0 = value.clone();
        }
    }
}

/// Window title shown in the task bar: app name plus the last settled face
pub fn window_title(language: Language, face: Option<FaceValue>) -> String {
    match face {
        Some(face) => format!("{} - {}", language.text("app.title"), face),
        None => language.text("app.title"),
    }
}

/// Put the settled face in the window title
pub fn update_window_title(
    mut settled: MessageReader<DieSettled>,
    language: Res<Language>,
    mut window_query: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Some(last) = settled.read().last() else {
        return;
    };

    for mut window in window_query.iter_mut() {
        window.title = window_title(*language, Some(last.face));
    }
}
