//! Rendering plugin - arena, actor sprites, and camera effects.

use bevy::prelude::*;

use super::actors::{despawn_actor_sprites, sync_actor_sprites};
use super::camera::*;
use super::sprites::{cut_loaded_sheets, load_sprite_table};
use crate::core::{arena_visible, GameState, SimulationSet};

/// Rendering plugin - draws whatever the simulation exposes.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .init_resource::<ScreenShake>()
            .add_systems(Startup, (spawn_camera, spawn_background, load_sprite_table))
            .add_systems(Update, (cut_loaded_sheets, fall_back_background))
            .add_systems(OnEnter(GameState::MainMenu), (hide_background, despawn_actor_sprites))
            .add_systems(OnExit(GameState::MainMenu), show_background)
            .add_systems(
                Update,
                (sync_actor_sprites, shake_on_player_hit, apply_screen_shake)
                    .chain()
                    .after(SimulationSet::Sync)
                    .run_if(arena_visible),
            );
    }
}
