//! Core plugin that owns the simulation and mirrors its phase into Bevy.

use bevy::prelude::*;

use super::events::*;
use super::settings::GameSettings;
use super::simulation::Simulation;
use super::states::*;

/// Simulation ticks per second. Speeds are expressed per tick.
pub const TICK_RATE: f64 = 60.0;

/// Ordering of the per-frame shell work around the simulation.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Devices and buttons become intents.
    Input,
    /// Phase and cues flow back out.
    Sync,
}

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Settings and the [`Simulation`] resource
/// - The mirrored `GameState`
/// - The fixed-rate simulation tick
/// - Cue forwarding as [`CueEvent`]s
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let settings = GameSettings::load();
        let simulation = Simulation::new(settings.movement);

        app.insert_resource(settings)
            .insert_resource(simulation)
            .init_resource::<PlayerInput>()
            .insert_resource(Time::<Fixed>::from_hz(TICK_RATE))
            .init_state::<GameState>()
            .add_event::<CueEvent>()
            .configure_sets(Update, (SimulationSet::Input, SimulationSet::Sync).chain())
            .add_systems(Update, handle_pause_input.in_set(SimulationSet::Input))
            .add_systems(FixedUpdate, tick_simulation)
            .add_systems(Update, (sync_game_state, forward_cues).in_set(SimulationSet::Sync));
    }
}

/// Handle Escape key to pause/unpause the game.
fn handle_pause_input(keyboard: Res<ButtonInput<KeyCode>>, mut simulation: ResMut<Simulation>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        simulation.toggle_pause();
    }
}

/// Advance the simulation by one fixed tick.
fn tick_simulation(time: Res<Time>, input: Res<PlayerInput>, mut simulation: ResMut<Simulation>) {
    simulation.update(time.delta_secs(), *input);
}

/// Follow the simulation phase with the Bevy state.
fn sync_game_state(
    simulation: Res<Simulation>,
    current_state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let wanted = GameState::from(simulation.phase());
    if *current_state.get() != wanted {
        next_state.set(wanted);
    }
}

/// Drain simulation cues into Bevy events for the audio plugin.
fn forward_cues(mut simulation: ResMut<Simulation>, mut cues: EventWriter<CueEvent>) {
    for cue in simulation.drain_cues() {
        debug!("cue {:?}", cue);
        cues.send(CueEvent(cue));
    }
}
