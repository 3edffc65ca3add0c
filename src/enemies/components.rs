//! Enemy actor shared by minions and the boss.

use bevy::log::debug;
use bevy::math::{Rect, Vec2};

use super::ai::{decide_free, decide_grid, Decision};
use super::data::{EnemyProfile, BOSS, FREE_ARRIVE_DISTANCE, FREE_PURSUIT_FACTOR, MINION};
use crate::combat::{CombatState, Health, ENEMY_HIT_FRAME};
use crate::core::{
    free_slide, Actor, ActorId, AnimState, Animator, DrawState, Effect, Facing,
    GridMotion, MovementPolicy, Tick,
};
use crate::world::tile_center;

/// A minion or the boss.
#[derive(Debug, Clone)]
pub struct Enemy {
    id: ActorId,
    profile: &'static EnemyProfile,
    motion: GridMotion,
    facing: Facing,
    anim: Animator,
    health: Health,
    combat: CombatState,
    /// Accumulates while standing still; negative after an attack.
    think_timer: f32,
    /// Time spent on the final death frame.
    death_linger: f32,
    /// False only for a boss waiting for the minions to fall.
    engaged: bool,
}

impl Enemy {
    pub fn new(id: ActorId, profile: &'static EnemyProfile, col: i32, row: i32) -> Self {
        Self {
            id,
            profile,
            motion: GridMotion::new(tile_center(col, row), profile.speed),
            facing: Facing::Down,
            anim: Animator::new(profile.clips),
            health: Health::new(profile.max_health),
            combat: CombatState::default(),
            think_timer: 0.0,
            death_linger: 0.0,
            engaged: !profile.waits_for_boss_phase,
        }
    }

    pub fn minion(index: u32, col: i32, row: i32) -> Self {
        Self::new(ActorId::Minion(index), &MINION, col, row)
    }

    /// The boss starts idle, facing up, and invulnerable.
    pub fn boss(col: i32, row: i32) -> Self {
        let mut boss = Self::new(ActorId::Boss, &BOSS, col, row);
        boss.facing = Facing::Up;
        boss
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn position(&self) -> Vec2 {
        self.motion.position
    }

    pub fn is_moving(&self) -> bool {
        self.motion.moving
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn health(&self) -> Health {
        self.health
    }

    pub fn animator(&self) -> &Animator {
        &self.anim
    }

    pub fn damage_applied(&self) -> bool {
        self.combat.damage_applied
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Start acting and become vulnerable.
    pub fn engage(&mut self) {
        self.engaged = true;
    }

    /// Overwrite hit points, used by scripted scenarios.
    pub fn set_hit_points(&mut self, hit_points: u32) {
        self.health.current = hit_points.min(self.health.maximum);
    }

    /// Move to an arbitrary resting position, used by scripted scenarios.
    pub fn place_at(&mut self, position: Vec2) {
        self.motion = GridMotion::new(position, self.profile.speed);
    }

    fn start_attack(&mut self) {
        self.anim.restart(AnimState::Attack);
        self.combat.damage_applied = false;
        debug!("{} {:?} attacks", self.profile.name, self.id);
    }

    fn think_grid(&mut self, tick: &Tick<'_>) {
        if self.motion.moving {
            if self.motion.advance() {
                self.anim.transition(AnimState::Idle);
                self.think_timer = 0.0;
            }
            return;
        }

        self.think_timer += tick.dt;
        if self.anim.state() == AnimState::Attack || self.think_timer <= self.profile.think_delay {
            return;
        }

        match decide_grid(
            self.motion.position,
            tick.player.position,
            tick.player.target,
            self.profile.aggro_range,
            self.profile.pursuit_slack,
        ) {
            Decision::Attack => {
                self.start_attack();
                self.think_timer = -self.profile.recovery;
            }
            Decision::Step(dx, dy) => {
                if let Some(facing) = Facing::from_step(dx, dy) {
                    self.facing = facing;
                }
                if self.motion.command_step(dx, dy, tick.arena) {
                    self.anim.transition(AnimState::Run);
                }
            }
            _ => {}
        }
    }

    fn think_free(&mut self, tick: &Tick<'_>) {
        if self.combat.attack_cooldown > 0.0 {
            self.combat.attack_cooldown -= tick.dt;
        }
        if self.anim.state() == AnimState::Attack {
            return;
        }

        match decide_free(
            self.motion.position,
            tick.player.position,
            self.profile.aggro_range,
            self.combat.attack_cooldown <= 0.0,
            FREE_ARRIVE_DISTANCE,
            self.profile.speed * FREE_PURSUIT_FACTOR,
        ) {
            Decision::Attack => {
                self.start_attack();
                self.combat.attack_cooldown = self.profile.recovery + self.profile.think_delay;
            }
            Decision::Pursue(delta) => {
                if let Some(facing) = Facing::toward(delta) {
                    self.facing = facing;
                }
                self.motion.position = free_slide(self.motion.position, delta, tick.arena);
                self.motion.target = self.motion.position;
                self.anim.transition(AnimState::Walk);
            }
            Decision::Rest => {
                self.anim.transition(AnimState::Idle);
            }
            _ => {}
        }
    }

    /// Land the blow once per attack cycle, at the hit frame.
    fn land_blow(&mut self, tick: &mut Tick<'_>) {
        if self.combat.damage_applied || self.anim.cursor() < ENEMY_HIT_FRAME {
            return;
        }
        if self.motion.position.distance(tick.player.position) <= self.profile.hit_reach {
            tick.emit(Effect::HitPlayer(self.profile.damage));
        }
        self.combat.damage_applied = true;
    }

    fn animate(&mut self, dt: f32) {
        if let Some(AnimState::Attack | AnimState::Hurt) = self.anim.advance(dt) {
            self.combat.damage_applied = false;
        }
    }
}

impl Actor for Enemy {
    fn update(&mut self, tick: &mut Tick<'_>) {
        let dt = tick.dt;
        match self.anim.state() {
            AnimState::Gone => return,
            _ if !self.engaged => {
                self.anim.transition(AnimState::Idle);
                self.facing = Facing::Up;
                self.animate(dt);
                return;
            }
            AnimState::Death => {
                self.animate(dt);
                if self.anim.death_settled() {
                    self.death_linger += dt;
                    if self.death_linger > self.profile.linger {
                        self.anim.restart(AnimState::Gone);
                        debug!("{} {:?} is gone", self.profile.name, self.id);
                    }
                }
                return;
            }
            _ if !tick.player.is_alive() => {
                self.motion.halt();
                self.anim.transition(AnimState::Idle);
                self.animate(dt);
                return;
            }
            AnimState::Hurt => {
                self.animate(dt);
                return;
            }
            _ => {}
        }

        match tick.policy {
            MovementPolicy::Grid => self.think_grid(tick),
            MovementPolicy::Free => self.think_free(tick),
        }

        if self.anim.state() == AnimState::Attack {
            self.land_blow(tick);
        }
        self.animate(dt);
    }

    fn draw_state(&self) -> DrawState {
        DrawState {
            id: self.id,
            kind: self.profile.kind,
            position: self.motion.position,
            state: self.anim.state(),
            facing: self.facing,
            frame: self.anim.frame_index(),
        }
    }

    fn hurt_box(&self) -> Rect {
        self.profile.hurt_box.at(self.motion.position)
    }

    fn take_damage(&mut self, amount: u32) {
        if self.anim.state().is_terminal() || !self.engaged {
            return;
        }
        self.health.take_damage(amount);
        if self.health.is_dead() {
            self.motion.halt();
            self.death_linger = 0.0;
            self.anim.restart(AnimState::Death);
        } else {
            self.anim.restart(AnimState::Hurt);
        }
    }

    fn anim_state(&self) -> AnimState {
        self.anim.state()
    }

    fn is_vulnerable(&self) -> bool {
        self.engaged && !self.anim.state().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerInput, PlayerView};
    use crate::world::ObstacleMap;

    fn view_at(position: Vec2, hit_points: u32) -> PlayerView {
        PlayerView {
            position,
            target: position,
            hit_points,
        }
    }

    fn run_ticks(enemy: &mut Enemy, player: PlayerView, ticks: usize) -> Vec<Effect> {
        run_policy_ticks(enemy, player, ticks, MovementPolicy::Grid)
    }

    fn run_policy_ticks(
        enemy: &mut Enemy,
        player: PlayerView,
        ticks: usize,
        policy: MovementPolicy,
    ) -> Vec<Effect> {
        let arena = ObstacleMap::default();
        let mut effects = Vec::new();
        for _ in 0..ticks {
            let mut tick = Tick::new(0.1, &arena, policy, PlayerInput::default(), player);
            enemy.update(&mut tick);
            assert!(arena.is_position_free(enemy.position()));
            effects.extend(tick.take_effects());
        }
        effects
    }

    fn blows(effects: &[Effect]) -> usize {
        effects
            .iter()
            .filter(|e| matches!(e, Effect::HitPlayer(_)))
            .count()
    }

    #[test]
    fn damage_is_idempotent_once_dying() {
        let mut minion = Enemy::minion(0, 5, 7);
        minion.take_damage(1);
        assert_eq!(minion.anim_state(), AnimState::Hurt);
        minion.take_damage(5);
        assert_eq!(minion.health().current, 0);
        assert_eq!(minion.anim_state(), AnimState::Death);

        let cursor = minion.animator().cursor();
        minion.take_damage(1);
        assert_eq!(minion.health().current, 0);
        assert_eq!(minion.anim_state(), AnimState::Death);
        assert_eq!(minion.animator().cursor(), cursor);
    }

    #[test]
    fn idle_boss_is_invulnerable() {
        let mut boss = Enemy::boss(8, 12);
        boss.take_damage(5);
        assert_eq!(boss.health().current, BOSS.max_health);
        assert_eq!(boss.anim_state(), AnimState::Idle);
        assert!(!boss.is_vulnerable());

        boss.engage();
        boss.take_damage(5);
        assert_eq!(boss.health().current, BOSS.max_health - 5);
        assert_eq!(boss.anim_state(), AnimState::Hurt);
    }

    #[test]
    fn blow_lands_once_per_cycle() {
        let mut minion = Enemy::minion(0, 5, 7);
        let player = view_at(minion.position() + Vec2::new(50.0, 0.0), 10);

        // Think delay 0.5s, then 12 attack frames at one frame per tick.
        let effects = run_ticks(&mut minion, player, 20);
        let hits: Vec<_> = effects
            .iter()
            .filter(|e| matches!(e, Effect::HitPlayer(_)))
            .collect();
        assert_eq!(hits, vec![&Effect::HitPlayer(1)]);
    }

    #[test]
    fn disengages_when_player_is_dead() {
        let mut minion = Enemy::minion(0, 5, 7);
        let player = view_at(minion.position() + Vec2::new(50.0, 0.0), 0);
        let effects = run_ticks(&mut minion, player, 30);
        assert!(effects.is_empty());
        assert_eq!(minion.anim_state(), AnimState::Idle);
        assert!(!minion.is_moving());
    }

    #[test]
    fn corpse_lingers_then_goes() {
        let mut minion = Enemy::minion(0, 5, 7);
        minion.take_damage(3);
        let player = view_at(Vec2::new(175.0, 275.0), 10);

        // Ten ticks to reach the last frame, then just over two seconds.
        run_ticks(&mut minion, player, 20);
        assert_eq!(minion.anim_state(), AnimState::Death);
        run_ticks(&mut minion, player, 12);
        assert!(minion.is_gone());

        minion.take_damage(1);
        run_ticks(&mut minion, player, 5);
        assert!(minion.is_gone());
    }

    #[test]
    fn free_pursuit_walks_at_one_and_a_half_speed() {
        let mut minion = Enemy::minion(0, 5, 7);
        let start = minion.position();
        let player = view_at(start + Vec2::new(300.0, 0.0), 10);

        let effects = run_policy_ticks(&mut minion, player, 1, MovementPolicy::Free);
        assert!(effects.is_empty());
        assert_eq!(minion.anim_state(), AnimState::Walk);
        assert_eq!(minion.facing(), Facing::Right);
        let moved = minion.position() - start;
        assert!((moved.x - MINION.speed * FREE_PURSUIT_FACTOR).abs() < 1e-4);
        assert_eq!(moved.y, 0.0);
    }

    #[test]
    fn free_attack_is_gated_by_cooldown_then_rests() {
        let mut minion = Enemy::minion(0, 5, 7);
        let start = minion.position();
        // Inside both the aggro range and the arrive distance.
        let player = view_at(start + Vec2::new(FREE_ARRIVE_DISTANCE - 10.0, 0.0), 10);

        // One twelve-frame swing, then a tick of standing still on cooldown.
        let effects = run_policy_ticks(&mut minion, player, 13, MovementPolicy::Free);
        assert_eq!(blows(&effects), 1);
        assert_eq!(minion.anim_state(), AnimState::Idle);
        assert!(!minion.damage_applied());
        assert_eq!(minion.position(), start);

        // Cooldown of 1.5s runs out and the second swing lands, but not a third.
        let effects = run_policy_ticks(&mut minion, player, 13, MovementPolicy::Free);
        assert_eq!(blows(&effects), 1);
        assert_eq!(minion.position(), start);
    }

    #[test]
    fn free_pursuit_slides_along_walls() {
        let mut minion = Enemy::minion(0, 2, 7);
        // Beyond the top-left corner, far outside the aggro range.
        let player = view_at(Vec2::new(-200.0, 100.0), 10);

        let effects = run_policy_ticks(&mut minion, player, 200, MovementPolicy::Free);
        assert!(effects.is_empty());
        let position = minion.position();
        assert!(position.x < tile_center(2, 7).x);
        assert!(position.y < tile_center(2, 7).y);
    }
}
