//! The shared actor interface and the per-tick context actors update against.
//!
//! Actors never reach into each other. Anything that affects another actor
//! (a swing, a blow on the player, an audio cue) is emitted as an [`Effect`]
//! and applied by the simulation right after the emitting actor's update, so
//! the player-first ordering inside a tick stays deterministic.

use bevy::math::{Rect, Vec2};

use super::animation::{AnimState, Facing};
use super::events::{Cue, PlayerInput};
use super::movement::MovementPolicy;
use crate::combat::Strike;
use crate::world::ObstacleMap;

/// Which kind of actor this is. Selects sprites and placeholder colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    Player,
    Minion,
    Boss,
}

/// Stable identity of an actor within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorId {
    Player,
    Boss,
    Minion(u32),
}

/// Everything the renderer needs to draw one actor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawState {
    pub id: ActorId,
    pub kind: ActorKind,
    pub position: Vec2,
    pub state: AnimState,
    pub facing: Facing,
    pub frame: u32,
}

/// What enemies may know about the player during their update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerView {
    pub position: Vec2,
    /// Tile the player is sliding toward (equal to `position` at rest).
    pub target: Vec2,
    pub hit_points: u32,
}

impl PlayerView {
    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }
}

/// Side effect of an actor update, applied by the simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Player swing to test against every vulnerable enemy.
    Strike(Strike),
    /// Damage dealt to the player.
    HitPlayer(u32),
    Cue(Cue),
}

/// Per-tick context handed to each actor in turn.
pub struct Tick<'a> {
    pub dt: f32,
    pub arena: &'a ObstacleMap,
    pub policy: MovementPolicy,
    pub input: PlayerInput,
    pub player: PlayerView,
    effects: Vec<Effect>,
}

impl<'a> Tick<'a> {
    pub fn new(
        dt: f32,
        arena: &'a ObstacleMap,
        policy: MovementPolicy,
        input: PlayerInput,
        player: PlayerView,
    ) -> Self {
        Self {
            dt,
            arena,
            policy,
            input,
            player,
            effects: Vec::new(),
        }
    }

    pub fn emit(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    pub fn cue(&mut self, cue: Cue) {
        self.effects.push(Effect::Cue(cue));
    }

    /// Drain effects emitted since the last call.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }
}

/// Uniform interface over the player, minions and the boss.
pub trait Actor {
    /// Advance one tick. Must be a no-op once the actor is gone.
    fn update(&mut self, tick: &mut Tick<'_>);

    fn draw_state(&self) -> DrawState;

    fn hurt_box(&self) -> Rect;

    /// Apply damage. No observable effect on a dying or gone actor.
    fn take_damage(&mut self, amount: u32);

    fn anim_state(&self) -> AnimState;

    fn is_gone(&self) -> bool {
        self.anim_state() == AnimState::Gone
    }

    /// Can be hit by a player swing right now.
    fn is_vulnerable(&self) -> bool {
        !self.anim_state().is_terminal()
    }
}
