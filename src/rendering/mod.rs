//! Rendering module - sprite table, actor sprites, background, and shake.

mod actors;
mod camera;
mod plugin;
pub mod sprites;

pub use actors::{to_world, ActorSprite};
pub use camera::{GameCamera, ScreenShake};
pub use plugin::RenderingPlugin;
pub use sprites::{SheetEntry, SpriteTable};
