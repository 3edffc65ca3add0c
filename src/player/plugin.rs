//! Player plugin - keyboard input for the player character.

use bevy::prelude::*;

use super::input::read_player_input;
use crate::core::{GameState, PlayerInput, SimulationSet};

/// Player plugin - samples the keyboard while the game is running.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            read_player_input
                .in_set(SimulationSet::Input)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(OnExit(GameState::InGame), clear_player_input);
    }
}

/// Keys held when the game stops must not act on the first tick back.
fn clear_player_input(mut input: ResMut<PlayerInput>) {
    *input = PlayerInput::default();
}
