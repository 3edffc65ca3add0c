//! The player character.

use bevy::math::{Rect, Vec2};

use crate::combat::{
    strike_box, Health, HurtBox, Strike, StrikeShape, PLAYER_ATTACK_COOLDOWN,
    PLAYER_STRIKE_DAMAGE,
};
use crate::core::{
    free_slide, Actor, ActorId, ActorKind, AnimState, Animator, ClipTable, Cue, DrawState,
    Effect, Facing, GridMotion, MovementPolicy, PlayerView, Tick,
};
use crate::world::tile_center;

/// Player hit points at spawn.
pub const PLAYER_MAX_HEALTH: u32 = 10;
/// Units per tick, both movement policies.
pub const PLAYER_SPEED: f32 = 4.0;
/// Death cursor the game-over transition waits for.
pub const PLAYER_DEATH_SHOWN_FRAME: f32 = 8.0;

const PLAYER_HURT_BOX: HurtBox = HurtBox::new(32.0, 40.0);

/// Hero sheets have no walk or hurt clips; those fall back to four frames.
pub const PLAYER_CLIPS: ClipTable = ClipTable {
    idle: 4,
    walk: 4,
    run: 6,
    attack: 7,
    hurt: 4,
    death: 9,
};

/// The player character.
#[derive(Debug, Clone)]
pub struct Player {
    motion: GridMotion,
    facing: Facing,
    anim: Animator,
    health: Health,
    attack_cooldown: f32,
}

impl Player {
    pub fn spawn(col: i32, row: i32) -> Self {
        Self {
            motion: GridMotion::new(tile_center(col, row), PLAYER_SPEED),
            facing: Facing::Right,
            anim: Animator::new(PLAYER_CLIPS),
            health: Health::new(PLAYER_MAX_HEALTH),
            attack_cooldown: 0.0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.motion.position
    }

    pub fn target(&self) -> Vec2 {
        self.motion.target
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

    pub fn attack_cooldown(&self) -> f32 {
        self.attack_cooldown
    }

    pub fn view(&self) -> PlayerView {
        PlayerView {
            position: self.motion.position,
            target: self.motion.target,
            hit_points: self.health.current,
        }
    }

    /// Death clip has played far enough for the game-over screen.
    pub fn death_shown(&self) -> bool {
        self.health.is_dead()
            && self.anim.state() == AnimState::Death
            && self.anim.cursor() >= PLAYER_DEATH_SHOWN_FRAME
    }

    /// Overwrite hit points, used by scripted scenarios.
    pub fn set_hit_points(&mut self, hit_points: u32) {
        self.health.current = hit_points.min(self.health.maximum);
    }

    fn walk_grid(&mut self, tick: &Tick<'_>) {
        if self.motion.moving {
            if self.motion.advance() {
                self.anim.transition(AnimState::Idle);
            }
            return;
        }
        if self.anim.state() == AnimState::Attack {
            return;
        }
        let Some(facing) = tick.input.step else {
            return;
        };
        // Facing turns even when the step is blocked.
        self.facing = facing;
        let (dx, dy) = facing.step();
        if self.motion.command_step(dx, dy, tick.arena) {
            self.anim.transition(AnimState::Run);
        }
    }

    fn walk_free(&mut self, tick: &Tick<'_>) {
        if self.anim.state() == AnimState::Attack {
            return;
        }
        let axis = tick.input.axis.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
        if axis == Vec2::ZERO {
            if self.anim.state() == AnimState::Run {
                self.anim.transition(AnimState::Idle);
            }
            return;
        }
        if let Some(facing) = Facing::toward(axis) {
            self.facing = facing;
        }
        self.motion.position = free_slide(self.motion.position, axis * PLAYER_SPEED, tick.arena);
        self.motion.target = self.motion.position;
        self.anim.transition(AnimState::Run);
    }

    fn try_attack(&mut self, tick: &mut Tick<'_>) {
        if !tick.input.attack || self.attack_cooldown > 0.0 || self.motion.moving {
            return;
        }
        self.anim.restart(AnimState::Attack);
        self.attack_cooldown = PLAYER_ATTACK_COOLDOWN;

        let shape = match tick.policy {
            MovementPolicy::Grid => StrikeShape::Forward,
            MovementPolicy::Free => StrikeShape::Sweep,
        };
        tick.emit(Effect::Strike(Strike {
            area: strike_box(self.motion.position, self.facing, shape),
            damage: PLAYER_STRIKE_DAMAGE,
        }));
        tick.cue(Cue::Slash);
    }
}

impl Actor for Player {
    fn update(&mut self, tick: &mut Tick<'_>) {
        if self.anim.state() == AnimState::Gone {
            return;
        }
        if self.attack_cooldown > 0.0 {
            self.attack_cooldown -= tick.dt;
        }

        if self.health.is_dead() {
            self.motion.halt();
            self.anim.transition(AnimState::Death);
        } else {
            match tick.policy {
                MovementPolicy::Grid => self.walk_grid(tick),
                MovementPolicy::Free => self.walk_free(tick),
            }
            self.try_attack(tick);
        }

        self.anim.advance(tick.dt);
    }

    fn draw_state(&self) -> DrawState {
        DrawState {
            id: ActorId::Player,
            kind: ActorKind::Player,
            position: self.motion.position,
            state: self.anim.state(),
            facing: self.facing,
            frame: self.anim.frame_index(),
        }
    }

    fn hurt_box(&self) -> Rect {
        PLAYER_HURT_BOX.at(self.motion.position)
    }

    /// Blows only drain hit points; the death transition happens on the
    /// player's next update.
    fn take_damage(&mut self, amount: u32) {
        if self.anim.state().is_terminal() {
            return;
        }
        self.health.take_damage(amount);
    }

    fn anim_state(&self) -> AnimState {
        self.anim.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerInput;
    use crate::world::{ObstacleMap, PLAYER_SPAWN};

    fn tick_with<'a>(arena: &'a ObstacleMap, player: &Player, input: PlayerInput) -> Tick<'a> {
        Tick::new(0.1, arena, MovementPolicy::Grid, input, player.view())
    }

    #[test]
    fn attack_emits_strike_and_slash() {
        let arena = ObstacleMap::default();
        let mut player = Player::spawn(PLAYER_SPAWN.0, PLAYER_SPAWN.1);
        let input = PlayerInput {
            attack: true,
            ..Default::default()
        };
        let mut tick = tick_with(&arena, &player, input);
        player.update(&mut tick);

        let effects = tick.take_effects();
        assert_eq!(effects.len(), 2);
        assert!(matches!(effects[0], Effect::Strike(_)));
        assert_eq!(effects[1], Effect::Cue(Cue::Slash));
        assert_eq!(player.anim_state(), AnimState::Attack);
        assert_eq!(player.attack_cooldown(), PLAYER_ATTACK_COOLDOWN);
    }

    #[test]
    fn cooldown_gates_repeat_swings() {
        let arena = ObstacleMap::default();
        let mut player = Player::spawn(PLAYER_SPAWN.0, PLAYER_SPAWN.1);
        let input = PlayerInput {
            attack: true,
            ..Default::default()
        };
        let mut strikes = 0;
        for _ in 0..5 {
            let mut tick = tick_with(&arena, &player, input);
            player.update(&mut tick);
            strikes += tick
                .take_effects()
                .iter()
                .filter(|e| matches!(e, Effect::Strike(_)))
                .count();
        }
        assert_eq!(strikes, 1);
    }

    #[test]
    fn step_turns_and_runs() {
        let arena = ObstacleMap::default();
        let mut player = Player::spawn(PLAYER_SPAWN.0, PLAYER_SPAWN.1);
        let input = PlayerInput {
            step: Some(Facing::Down),
            ..Default::default()
        };
        let mut tick = tick_with(&arena, &player, input);
        player.update(&mut tick);
        assert_eq!(player.facing(), Facing::Down);
        assert!(player.is_moving());
        assert_eq!(player.anim_state(), AnimState::Run);
        assert_eq!(player.target(), tile_center(3, 6));
    }

    #[test]
    fn free_vertical_walk_faces_the_way_it_goes() {
        let arena = ObstacleMap::default();
        let mut player = Player::spawn(PLAYER_SPAWN.0, PLAYER_SPAWN.1);
        let start = player.position();
        for (axis, facing) in [(Vec2::new(0.0, -1.0), Facing::Up), (Vec2::new(0.0, 1.0), Facing::Down)] {
            let input = PlayerInput {
                axis,
                ..Default::default()
            };
            let mut tick = Tick::new(0.1, &arena, MovementPolicy::Free, input, player.view());
            player.update(&mut tick);
            assert_eq!(player.facing(), facing);
            assert_eq!(player.anim_state(), AnimState::Run);
        }
        assert_eq!(player.position(), start);
    }

    #[test]
    fn lethal_damage_kills_on_next_update() {
        let arena = ObstacleMap::default();
        let mut player = Player::spawn(PLAYER_SPAWN.0, PLAYER_SPAWN.1);
        player.take_damage(50);
        assert_eq!(player.health().current, 0);
        assert_eq!(player.anim_state(), AnimState::Idle);

        let mut tick = tick_with(&arena, &player, PlayerInput::default());
        player.update(&mut tick);
        assert_eq!(player.anim_state(), AnimState::Death);

        // Further blows change nothing.
        player.take_damage(3);
        assert_eq!(player.health().current, 0);
    }
}
