//! Player module - the player character and its keyboard input.

mod components;
mod input;
mod plugin;

pub use components::*;
pub use input::{intents_from, read_player_input};
pub use plugin::PlayerPlugin;
