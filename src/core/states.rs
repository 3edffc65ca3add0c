//! Game phases and the Bevy state that mirrors them.
//!
//! [`Phase`] belongs to the simulation and decides what runs. [`GameState`]
//! follows it one frame behind so menus, HUD and music can hang off
//! `OnEnter`/`OnExit` schedules.

use bevy::prelude::*;

/// Phase of the simulation. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Menu,
    Game,
    Paused,
    GameOver,
    Win,
}

/// Main game states - controls which shell systems run.
///
/// - Start in `Loading` for the first frame, while `Startup` requests sheets
/// - `MainMenu` on the first sync with the simulation, sheets still arriving
/// - `InGame`, `Paused`, `GameOver` and `Victory` follow the simulation phase
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - building the sprite table
    #[default]
    Loading,
    /// Title screen
    MainMenu,
    /// Active gameplay
    InGame,
    /// Game is paused (overlay on gameplay)
    Paused,
    /// Player has died
    GameOver,
    /// Boss defeated
    Victory,
}

impl From<Phase> for GameState {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Menu => GameState::MainMenu,
            Phase::Game => GameState::InGame,
            Phase::Paused => GameState::Paused,
            Phase::GameOver => GameState::GameOver,
            Phase::Win => GameState::Victory,
        }
    }
}

impl GameState {
    /// States in which the arena and actors stay on screen.
    pub fn shows_arena(self) -> bool {
        matches!(
            self,
            GameState::InGame | GameState::Paused | GameState::GameOver | GameState::Victory
        )
    }
}

/// Run condition: the arena is on screen.
pub fn arena_visible(state: Option<Res<State<GameState>>>) -> bool {
    state.is_some_and(|state| state.get().shows_arena())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_phase_has_a_distinct_state() {
        let phases = [Phase::Menu, Phase::Game, Phase::Paused, Phase::GameOver, Phase::Win];
        let states: Vec<GameState> = phases.iter().map(|&p| p.into()).collect();
        for (i, a) in states.iter().enumerate() {
            assert!(states[i + 1..].iter().all(|b| a != b));
            assert_ne!(*a, GameState::Loading);
        }
    }
}
