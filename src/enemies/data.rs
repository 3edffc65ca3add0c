//! Fixed enemy definitions.

use crate::combat::HurtBox;
use crate::core::{ActorKind, ClipTable};
use crate::world::TILE_SIZE;

/// Vampire and Dracula sheets share the same clip lengths.
pub const ENEMY_CLIPS: ClipTable = ClipTable {
    idle: 4,
    walk: 6,
    run: 8,
    attack: 12,
    hurt: 4,
    death: 11,
};

/// Free policy: enemies stop closing in once this near the player.
pub const FREE_ARRIVE_DISTANCE: f32 = TILE_SIZE * 0.8;
/// Free policy: pursuit speed multiplier.
pub const FREE_PURSUIT_FACTOR: f32 = 1.5;

/// Stats and AI thresholds for one enemy type.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyProfile {
    pub kind: ActorKind,
    pub name: &'static str,
    pub max_health: u32,
    /// Units per tick.
    pub speed: f32,
    pub hurt_box: HurtBox,
    pub clips: ClipTable,
    /// Seconds of standing still between decisions (grid policy).
    pub think_delay: f32,
    /// Distance at which an attack is started.
    pub aggro_range: f32,
    /// Distance within which the blow still lands at the hit frame.
    pub hit_reach: f32,
    pub damage: u32,
    /// Pause after starting an attack before thinking again.
    pub recovery: f32,
    /// Seconds the corpse stays on its last frame before it is gone.
    pub linger: f32,
    /// Offset on the chosen axis that is tolerated without stepping.
    pub pursuit_slack: f32,
    /// Invulnerable and idle until the boss phase starts.
    pub waits_for_boss_phase: bool,
}

pub const MINION: EnemyProfile = EnemyProfile {
    kind: ActorKind::Minion,
    name: "vampire",
    max_health: 3,
    speed: 1.5,
    hurt_box: HurtBox::new(40.0, 60.0),
    clips: ENEMY_CLIPS,
    think_delay: 0.5,
    aggro_range: TILE_SIZE * 1.5,
    hit_reach: TILE_SIZE * 1.8,
    damage: 1,
    recovery: 1.0,
    linger: 2.0,
    pursuit_slack: TILE_SIZE,
    waits_for_boss_phase: false,
};

pub const BOSS: EnemyProfile = EnemyProfile {
    kind: ActorKind::Boss,
    name: "dracula",
    max_health: 20,
    speed: 2.0,
    hurt_box: HurtBox::new(48.0, 72.0),
    clips: ENEMY_CLIPS,
    think_delay: 0.3,
    aggro_range: TILE_SIZE * 1.8,
    hit_reach: TILE_SIZE * 2.5,
    damage: 2,
    recovery: 1.5,
    linger: 3.0,
    pursuit_slack: 0.0,
    waits_for_boss_phase: true,
};
