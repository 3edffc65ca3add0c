//! One sprite entity per visible actor, rebuilt from the simulation's draw
//! states every frame.

use bevy::prelude::*;
use bevy::utils::HashMap;

use super::sprites::{placeholder, SpriteTable};
use crate::core::{ActorId, DrawState, Simulation};
use crate::world::{ARENA_HEIGHT, ARENA_WIDTH};

/// Depth of the back-most actor. Later draw states stack above it.
const ACTOR_BASE_Z: f32 = 1.0;
const ACTOR_Z_STEP: f32 = 0.01;

/// Links a sprite entity to the actor it shows.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorSprite(pub ActorId);

/// Screen space (origin top-left, y down) to world space (origin centre, y up).
pub fn to_world(position: Vec2, z: f32) -> Vec3 {
    Vec3::new(
        position.x - ARENA_WIDTH / 2.0,
        ARENA_HEIGHT / 2.0 - position.y,
        z,
    )
}

fn sprite_for(draw: &DrawState, table: &SpriteTable, asset_server: &AssetServer) -> Sprite {
    match table.resolve((draw.kind, draw.state, draw.facing), draw.frame, asset_server) {
        Ok(resolved) => Sprite::from_atlas_image(resolved.image, resolved.atlas),
        Err(_) => {
            let (color, size) = placeholder(draw.kind);
            Sprite::from_color(color, Vec2::splat(size))
        }
    }
}

/// Spawn, update and despawn actor sprites to match the simulation.
pub fn sync_actor_sprites(
    mut commands: Commands,
    simulation: Res<Simulation>,
    table: Res<SpriteTable>,
    asset_server: Res<AssetServer>,
    mut sprites: Query<(Entity, &ActorSprite, &mut Sprite, &mut Transform)>,
) {
    let draws = simulation.draw_states();
    let mut wanted: HashMap<ActorId, (usize, &DrawState)> =
        draws.iter().enumerate().map(|(i, d)| (d.id, (i, d))).collect();

    for (entity, actor, mut sprite, mut transform) in sprites.iter_mut() {
        match wanted.remove(&actor.0) {
            Some((order, draw)) => {
                *sprite = sprite_for(draw, &table, &asset_server);
                transform.translation = to_world(draw.position, depth(order));
            }
            None => commands.entity(entity).despawn(),
        }
    }

    for (order, draw) in wanted.into_values() {
        commands.spawn((
            sprite_for(draw, &table, &asset_server),
            Transform::from_translation(to_world(draw.position, depth(order))),
            ActorSprite(draw.id),
        ));
    }
}

fn depth(order: usize) -> f32 {
    ACTOR_BASE_Z + order as f32 * ACTOR_Z_STEP
}

/// Remove every actor sprite.
pub fn despawn_actor_sprites(mut commands: Commands, query: Query<Entity, With<ActorSprite>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
