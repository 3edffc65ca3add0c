//! Paladin vs Dracula - a small top-down arena brawler in Bevy.
//!
//! A paladin clears a wave of vampire minions, then faces Dracula.
//!
//! # Architecture
//!
//! The whole game runs inside [`core::Simulation`], a plain resource with no
//! ECS access that can be driven headlessly. Plugins wrap it:
//!
//! - **Core**: Settings, the simulation tick, phase to `GameState` mirroring
//! - **Player**: Keyboard to player intents
//! - **Rendering**: Sprite table, actor sprites, background, screen shake
//! - **Audio**: Music per phase and effect cues
//! - **UI**: Menus, HUD
//!
//! Combat, enemies and the world layout are pure modules the simulation uses.

pub mod audio;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod player;
pub mod rendering;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct PaladinPlugin;

impl Plugin for PaladinPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Player input
            .add_plugins(player::PlayerPlugin)

            // Rendering systems
            .add_plugins(rendering::RenderingPlugin)

            // Music and effects
            .add_plugins(audio::GameAudioPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
