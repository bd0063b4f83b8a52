pub mod animation;
pub mod engine;
pub mod face_texture;
pub mod geometry;
pub mod l10n;
pub mod meshes;
pub mod plugin;
pub mod systems;
pub mod types;

pub use animation::*;
pub use engine::*;
pub use face_texture::*;
pub use geometry::*;
pub use l10n::*;
pub use meshes::*;
pub use plugin::*;
pub use systems::*;
pub use types::*;
