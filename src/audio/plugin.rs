//! Audio plugin - turns simulation cues into kira playback.
//!
//! Music loops on its own channel and never restarts the track already
//! playing. Effects go to the default channel. Muting stops the music and
//! drops effects until sound is switched back on.

use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::utils::{HashMap, HashSet};
use bevy_kira_audio::prelude::*;

use crate::core::{Cue, CueEvent, GameSettings, Track};

const TRACKS: [Track; 5] = [Track::Menu, Track::Game, Track::Boss, Track::GameOver, Track::Win];

/// Dedicated channel for background music.
#[derive(Resource)]
pub struct MusicChannel;

/// Request to flip the sound on or off.
#[derive(Event, Debug, Clone, Copy)]
pub struct ToggleMusic;

/// What to do with a music request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicAction {
    Play(Track),
    /// Already playing, or muted.
    Skip,
}

/// Playback bookkeeping.
#[derive(Resource, Debug, Clone)]
pub struct AudioState {
    pub sound_on: bool,
    pub music_volume: f64,
    pub sfx_volume: f64,
    current: Option<Track>,
    /// Last track asked for, kept while muted.
    wanted: Option<Track>,
}

impl AudioState {
    pub fn from_settings(settings: &GameSettings) -> Self {
        Self {
            sound_on: settings.sound_on,
            music_volume: settings.music_volume,
            sfx_volume: settings.sfx_volume,
            current: None,
            wanted: None,
        }
    }

    pub fn current(&self) -> Option<Track> {
        self.current
    }

    /// Decide whether `track` needs to start, recording it as current.
    pub fn request(&mut self, track: Track) -> MusicAction {
        self.wanted = Some(track);
        if !self.sound_on || self.current == Some(track) {
            return MusicAction::Skip;
        }
        self.current = Some(track);
        MusicAction::Play(track)
    }

    /// Flip sound. Returns the track to resume when switching back on.
    pub fn toggle(&mut self) -> Option<Track> {
        self.sound_on = !self.sound_on;
        if !self.sound_on {
            self.current = None;
            return None;
        }
        Some(self.wanted.unwrap_or(Track::Menu))
    }
}

/// Handles to every sound, requested at startup.
#[derive(Resource)]
struct AudioHandles {
    tracks: HashMap<Track, Handle<AudioSource>>,
    slash: Handle<AudioSource>,
    click: Handle<AudioSource>,
}

/// Audio plugin - music channel, effects, and the mute toggle.
pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        let state = app
            .world()
            .get_resource::<GameSettings>()
            .map(AudioState::from_settings)
            .unwrap_or_else(|| AudioState::from_settings(&GameSettings::default()));

        app.add_plugins(AudioPlugin)
            .add_audio_channel::<MusicChannel>()
            .insert_resource(state)
            .add_event::<ToggleMusic>()
            .add_systems(Startup, load_audio)
            .add_systems(Update, (handle_toggle, play_cues, report_missing_audio).chain());
    }
}

fn load_audio(mut commands: Commands, asset_server: Res<AssetServer>) {
    let tracks = TRACKS
        .iter()
        .map(|&track| (track, asset_server.load(format!("music/{}.ogg", track.name()))))
        .collect();
    commands.insert_resource(AudioHandles {
        tracks,
        slash: asset_server.load("sounds/slash.wav"),
        click: asset_server.load("sounds/click.wav"),
    });
}

fn handle_toggle(
    mut events: EventReader<ToggleMusic>,
    mut state: ResMut<AudioState>,
    handles: Res<AudioHandles>,
    music: Res<AudioChannel<MusicChannel>>,
) {
    for _ in events.read() {
        match state.toggle() {
            Some(track) => {
                info!("Sound on");
                start_track(&mut state, &handles, &music, track);
            }
            None => {
                info!("Sound off");
                music.stop();
            }
        }
    }
}

fn start_track(
    state: &mut AudioState,
    handles: &AudioHandles,
    music: &AudioChannel<MusicChannel>,
    track: Track,
) {
    let MusicAction::Play(track) = state.request(track) else {
        return;
    };
    music.stop();
    if let Some(handle) = handles.tracks.get(&track) {
        music.play(handle.clone()).looped().with_volume(state.music_volume);
    }
}

fn play_cues(
    mut cues: EventReader<CueEvent>,
    mut state: ResMut<AudioState>,
    handles: Res<AudioHandles>,
    music: Res<AudioChannel<MusicChannel>>,
    audio: Res<Audio>,
) {
    for CueEvent(cue) in cues.read() {
        match *cue {
            Cue::Music(track) => start_track(&mut state, &handles, &music, track),
            Cue::Slash | Cue::Click if !state.sound_on => {}
            Cue::Slash => {
                audio.play(handles.slash.clone()).with_volume(state.sfx_volume);
            }
            Cue::Click => {
                audio.play(handles.click.clone()).with_volume(state.sfx_volume);
            }
        }
    }
}

/// Missing sound files play as silence; say so once per file.
fn report_missing_audio(
    handles: Res<AudioHandles>,
    asset_server: Res<AssetServer>,
    mut reported: Local<HashSet<AssetId<AudioSource>>>,
) {
    let all = handles
        .tracks
        .values()
        .chain([&handles.slash, &handles.click]);
    for handle in all {
        if reported.contains(&handle.id()) {
            continue;
        }
        if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle.id()) {
            warn!("Audio unavailable, playing silence: {}", err);
            reported.insert(handle.id());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_track_is_not_restarted() {
        let mut state = AudioState::from_settings(&GameSettings::default());
        assert_eq!(state.request(Track::Menu), MusicAction::Play(Track::Menu));
        assert_eq!(state.request(Track::Menu), MusicAction::Skip);
        assert_eq!(state.request(Track::Game), MusicAction::Play(Track::Game));
    }

    #[test]
    fn muting_forgets_the_track() {
        let mut state = AudioState::from_settings(&GameSettings::default());
        state.request(Track::Boss);
        assert_eq!(state.toggle(), None);
        assert_eq!(state.current(), None);
        assert_eq!(state.request(Track::GameOver), MusicAction::Skip);

        // Switching back on resumes whatever was last asked for.
        assert_eq!(state.toggle(), Some(Track::GameOver));
        assert_eq!(state.request(Track::GameOver), MusicAction::Play(Track::GameOver));
    }
}
