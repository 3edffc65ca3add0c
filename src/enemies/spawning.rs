//! Enemy roster creation.

use super::components::Enemy;
use crate::world::{BOSS_SPAWN, MINION_SPAWNS};

/// Fresh minion roster in spawn order.
pub fn spawn_minion_roster() -> Vec<Enemy> {
    MINION_SPAWNS
        .iter()
        .enumerate()
        .map(|(index, &(col, row))| Enemy::minion(index as u32, col, row))
        .collect()
}

/// Fresh boss at its spawn tile.
pub fn spawn_boss() -> Enemy {
    Enemy::boss(BOSS_SPAWN.0, BOSS_SPAWN.1)
}
