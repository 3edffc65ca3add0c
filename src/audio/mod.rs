//! Audio module - music per phase and one-shot effects, played with kira.

mod plugin;

pub use plugin::{AudioState, GameAudioPlugin, MusicAction, MusicChannel, ToggleMusic};
