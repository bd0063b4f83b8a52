//! Roll a die: one six-sided die, an animated roll and the logic behind it.
//!
//! The logical core lives in [`die::engine`] (roll state machine) and
//! [`die::geometry`] (pip layouts and upright rotations). Everything under
//! [`die::systems`] is Bevy glue that reads the engine and renders its result.

pub mod die;
