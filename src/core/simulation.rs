//! The simulation context and game phase controller.
//!
//! [`Simulation`] owns every actor, the obstacle map and the phase, and is the
//! only authority on global state. Bevy's `GameState` mirrors its phase.

use bevy::log::info;
use bevy::prelude::Resource;

use super::actor::{Actor, ActorId, DrawState, Effect, Tick};
use super::animation::AnimState;
use super::events::{Cue, MenuTarget, PlayerInput, Track};
use super::movement::MovementPolicy;
use super::states::Phase;
use crate::combat::resolve_strike;
use crate::enemies::{spawn_boss, spawn_minion_roster, Enemy};
use crate::player::Player;
use crate::world::{ObstacleMap, PLAYER_SPAWN};

/// Numbers shown on the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudStats {
    pub player_hit_points: u32,
    /// Present once the boss phase is active.
    pub boss_hit_points: Option<u32>,
    pub minions_left: usize,
}

/// Whole-game simulation state.
#[derive(Resource, Debug)]
pub struct Simulation {
    phase: Phase,
    policy: MovementPolicy,
    arena: ObstacleMap,
    player: Player,
    boss: Enemy,
    minions: Vec<Enemy>,
    boss_phase_active: bool,
    cues: Vec<Cue>,
    /// Bumped on every reset so observers can tell sessions apart.
    session: u32,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(MovementPolicy::default())
    }
}

impl Simulation {
    /// A simulation sitting in the menu.
    pub fn new(policy: MovementPolicy) -> Self {
        Self {
            phase: Phase::Menu,
            policy,
            arena: ObstacleMap::default(),
            player: Player::spawn(PLAYER_SPAWN.0, PLAYER_SPAWN.1),
            boss: spawn_boss(),
            minions: spawn_minion_roster(),
            boss_phase_active: false,
            cues: vec![Cue::Music(Track::Menu)],
            session: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> u32 {
        self.session
    }

    pub fn arena(&self) -> &ObstacleMap {
        &self.arena
    }

    pub fn boss_phase_active(&self) -> bool {
        self.boss_phase_active
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn boss(&self) -> &Enemy {
        &self.boss
    }

    pub fn minions(&self) -> &[Enemy] {
        &self.minions
    }

    /// Mutable access for scripted scenarios.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Mutable access for scripted scenarios.
    pub fn boss_mut(&mut self) -> &mut Enemy {
        &mut self.boss
    }

    /// Mutable access for scripted scenarios.
    pub fn minions_mut(&mut self) -> &mut Vec<Enemy> {
        &mut self.minions
    }

    pub fn hud(&self) -> HudStats {
        HudStats {
            player_hit_points: self.player.health().current,
            boss_hit_points: self
                .boss_phase_active
                .then(|| self.boss.health().current),
            minions_left: self.minions.len(),
        }
    }

    /// Draw states of every visible actor, back to front.
    ///
    /// Dying minions go underneath; everyone else is ordered by y.
    pub fn draw_states(&self) -> Vec<DrawState> {
        let mut corpses = Vec::new();
        let mut standing = Vec::new();
        for minion in &self.minions {
            match minion.anim_state() {
                AnimState::Gone => {}
                AnimState::Death => corpses.push(minion.draw_state()),
                _ => standing.push(minion.draw_state()),
            }
        }
        standing.push(self.player.draw_state());
        if !self.boss.is_gone() {
            standing.push(self.boss.draw_state());
        }
        standing.sort_by(|a, b| a.position.y.total_cmp(&b.position.y));
        corpses.extend(standing);
        corpses
    }

    /// Take the cues emitted since the last call.
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    /// Recreate every actor at its spawn point and clear the boss phase.
    pub fn reset_game(&mut self) {
        self.player = Player::spawn(PLAYER_SPAWN.0, PLAYER_SPAWN.1);
        self.boss = spawn_boss();
        self.minions = spawn_minion_roster();
        self.boss_phase_active = false;
        self.session = self.session.wrapping_add(1);
        self.cues.push(Cue::Music(Track::Game));
        info!("Session {} started ({:?} movement)", self.session, self.policy);
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            info!("Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    /// Escape key: game and paused toggle; anything else is ignored.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            Phase::Game => self.set_phase(Phase::Paused),
            Phase::Paused => self.set_phase(Phase::Game),
            _ => {}
        }
    }

    /// Apply a menu action. Returns false when it is not valid in this phase.
    pub fn menu_select(&mut self, target: MenuTarget) -> bool {
        match (self.phase, target) {
            (Phase::Menu, MenuTarget::Start)
            | (Phase::GameOver | Phase::Win, MenuTarget::Retry) => {
                self.reset_game();
                self.set_phase(Phase::Game);
            }
            (Phase::Paused, MenuTarget::Resume) => self.set_phase(Phase::Game),
            (Phase::Paused | Phase::GameOver | Phase::Win, MenuTarget::MainMenu) => {
                self.set_phase(Phase::Menu);
                self.cues.push(Cue::Music(Track::Menu));
            }
            _ => return false,
        }
        true
    }

    /// Advance the whole game by one frame. Does nothing outside the game phase.
    pub fn update(&mut self, dt: f32, input: PlayerInput) {
        if self.phase != Phase::Game {
            return;
        }

        self.run_actors(dt, input);
        self.minions.retain(|minion| !minion.is_gone());

        if !self.boss_phase_active && self.minions.is_empty() {
            self.boss_phase_active = true;
            self.boss.engage();
            self.cues.push(Cue::Music(Track::Boss));
            info!("Minions cleared, the boss awakens");
        }

        if self.player.death_shown() {
            self.set_phase(Phase::GameOver);
            self.cues.push(Cue::Music(Track::GameOver));
        } else if self.boss.is_gone() {
            self.set_phase(Phase::Win);
            self.cues.push(Cue::Music(Track::Win));
        }
    }

    /// Player first, then the boss, then each minion. Effects are applied
    /// right after the actor that emitted them.
    fn run_actors(&mut self, dt: f32, input: PlayerInput) {
        let Simulation {
            policy,
            arena,
            player,
            boss,
            minions,
            boss_phase_active,
            cues,
            ..
        } = self;
        let mut tick = Tick::new(dt, arena, *policy, input, player.view());
        let mut world = EffectTargets {
            player,
            boss,
            minions,
            boss_phase_active: *boss_phase_active,
            cues,
        };

        world.player.update(&mut tick);
        world.apply(&mut tick);

        world.boss.update(&mut tick);
        world.apply(&mut tick);

        for index in 0..world.minions.len() {
            world.minions[index].update(&mut tick);
            world.apply(&mut tick);
        }
    }
}

/// Mutable view of the actors that effects land on.
struct EffectTargets<'a> {
    player: &'a mut Player,
    boss: &'a mut Enemy,
    minions: &'a mut Vec<Enemy>,
    boss_phase_active: bool,
    cues: &'a mut Vec<Cue>,
}

impl EffectTargets<'_> {
    fn apply(&mut self, tick: &mut Tick<'_>) {
        for effect in tick.take_effects() {
            match effect {
                Effect::Strike(strike) => {
                    let mut targets: Vec<&mut dyn Actor> = Vec::with_capacity(self.minions.len() + 1);
                    if self.boss_phase_active {
                        targets.push(&mut *self.boss);
                    }
                    targets.extend(self.minions.iter_mut().map(|m| m as &mut dyn Actor));

                    let outcome = resolve_strike(&strike, &mut targets);
                    if outcome.killed.contains(&ActorId::Boss) {
                        info!("The boss has fallen");
                        self.cues.push(Cue::Music(Track::Game));
                    }
                }
                Effect::HitPlayer(amount) => self.player.take_damage(amount),
                Effect::Cue(cue) => self.cues.push(cue),
            }
        }
        tick.player = self.player.view();
    }
}
