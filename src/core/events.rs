//! Intents flowing into the simulation and cues flowing out of it.
//!
//! Input systems translate devices into [`PlayerInput`] and [`MenuTarget`];
//! the simulation answers with [`Cue`]s that the audio plugin consumes.

use bevy::math::Vec2;
use bevy::prelude::*;

use super::animation::Facing;

/// Music tracks, one per phase mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    Menu,
    Game,
    Boss,
    GameOver,
    Win,
}

impl Track {
    /// File stem under `assets/music/`.
    pub fn name(self) -> &'static str {
        match self {
            Track::Menu => "menu",
            Track::Game => "game",
            Track::Boss => "boss",
            Track::GameOver => "game_over",
            Track::Win => "win",
        }
    }
}

/// Named audio cue emitted by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Player swing.
    Slash,
    /// Menu button press.
    Click,
    /// Switch background music.
    Music(Track),
}

/// Bevy event carrying a drained simulation cue.
#[derive(Event, Debug, Clone, Copy)]
pub struct CueEvent(pub Cue);

/// Player intents sampled once per frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    /// Tile step request for the grid policy.
    pub step: Option<Facing>,
    /// Axis deltas in `-1..=1` for the free policy, y pointing down.
    pub axis: Vec2,
    /// Attack button held.
    pub attack: bool,
}

/// Menu actions the simulation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    Start,
    Resume,
    MainMenu,
    Retry,
}
