//! UI module - menus and the in-game HUD.

mod hud;
mod plugin;

pub use hud::{enemy_label, health_label};
pub use plugin::UiPlugin;
