//! Paladin vs Dracula - Entry Point
//!
//! Controls:
//! - Arrows / WASD: Move
//! - Space: Attack
//! - Escape: Pause/Unpause

use bevy::prelude::*;

use paladin_vs_dracula::world::{ARENA_HEIGHT, ARENA_WIDTH};

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Paladin vs Dracula".to_string(),
                        resolution: (ARENA_WIDTH, ARENA_HEIGHT).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )

        // Our game plugin
        .add_plugins(paladin_vs_dracula::PaladinPlugin)

        .run();
}
