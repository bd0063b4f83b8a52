//! Bevy systems for the die
//!
//! This module is organized into submodules:
//! - `setup` - Scene and UI construction
//! - `input` - Keyboard, button and launch roll triggers
//! - `rolling` - Engine ticking and die animation
//! - `display` - Roll button styling and status line

pub mod display;
pub mod input;
pub mod rolling;
pub mod setup;

pub use display::*;
pub use input::*;
pub use rolling::*;
pub use setup::*;
