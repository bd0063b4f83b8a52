//! Type definitions for the die
//!
//! This module is organized into submodules:
//! - `face` - The face value type and its contract error
//! - `roll` - Roll state, snapshots, ids, and roll messages
//! - `settings` - Application settings loaded from JSON
//! - `ui` - Scene and UI marker components

pub mod face;
pub mod roll;
pub mod settings;
pub mod ui;

// Re-export all public types for convenient access
pub use face::*;
pub use roll::*;
pub use settings::*;
pub use ui::*;
