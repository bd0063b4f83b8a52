//! Die plugin
//!
//! Wires the engine, settings, messages and systems into a Bevy app.

use bevy::prelude::*;

use crate::die::engine::RollEngine;
use crate::die::l10n::Language;
use crate::die::systems::*;
use crate::die::types::*;

pub struct DiePlugin {
    pub settings: AppSettings,
    /// Queue one roll at startup
    pub roll_on_launch: bool,
}

impl Default for DiePlugin {
    fn default() -> Self {
        Self {
            settings: AppSettings::default(),
            roll_on_launch: false,
        }
    }
}

impl Plugin for DiePlugin {
    fn build(&self, app: &mut App) {
        let preferred = Language::resolve(self.settings.language.as_deref());
        let language = preferred.for_window(self.settings.font_path.is_some());
        if language != preferred {
            warn!(
                "No font_path set for {} text, showing the window in {}",
                preferred.code(),
                language.code()
            );
        }
        info!("UI language: {}", language.code());

        app.add_message::<RollRequested>()
            .add_message::<DieSettled>()
            .insert_resource(RollEngine::from_settings(&self.settings))
            .insert_resource(self.settings.clone())
            .insert_resource(language)
            .add_systems(Startup, setup)
            .add_systems(
                Update,
                (
                    // Advance running rolls before starting new ones, so a roll
                    // begins counting on the frame after it was requested.
                    tick_roll_engine,
                    animate_die,
                    (handle_keyboard_roll, handle_roll_button_click),
                    process_roll_requests,
                    (update_roll_button, update_results_display, update_window_title),
                )
                    .chain(),
            );

        if self.roll_on_launch {
            app.add_systems(Startup, request_launch_roll.after(setup));
        }
    }
}
