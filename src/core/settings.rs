//! Player-facing settings loaded from `assets/data/settings.ron`.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

use super::error::SettingsError;
use super::movement::MovementPolicy;

/// Default location of the settings file.
pub const SETTINGS_PATH: &str = "assets/data/settings.ron";

fn default_volume() -> f64 {
    0.5
}

fn default_sound_on() -> bool {
    true
}

/// Settings read once at startup.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
pub struct GameSettings {
    /// Movement model for the whole session.
    #[serde(default)]
    pub movement: MovementPolicy,
    #[serde(default = "default_sound_on")]
    pub sound_on: bool,
    #[serde(default = "default_volume")]
    pub music_volume: f64,
    #[serde(default = "default_volume")]
    pub sfx_volume: f64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            movement: MovementPolicy::default(),
            sound_on: default_sound_on(),
            music_volume: default_volume(),
            sfx_volume: default_volume(),
        }
    }
}

impl GameSettings {
    /// Parse settings from RON text.
    pub fn from_ron(path: &str, contents: &str) -> Result<Self, SettingsError> {
        ron::from_str(contents).map_err(|e| SettingsError::ParseError {
            path: path.to_string(),
            details: e.to_string(),
        })
    }

    /// Read and parse the file at `path`.
    pub fn read(path: &str) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path).map_err(|e| SettingsError::ReadError {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        Self::from_ron(path, &contents)
    }

    /// Load settings, falling back to defaults on any failure.
    pub fn load() -> Self {
        match Self::read(SETTINGS_PATH) {
            Ok(settings) => {
                info!("Loaded settings from {}", SETTINGS_PATH);
                settings
            }
            Err(e @ SettingsError::ParseError { .. }) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
            Err(e) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_in_defaults() {
        let settings = GameSettings::from_ron("test", "(movement: Free)").unwrap();
        assert_eq!(settings.movement, MovementPolicy::Free);
        assert!(settings.sound_on);
        assert_eq!(settings.music_volume, 0.5);
    }

    #[test]
    fn parse_failure_names_the_file() {
        let err = GameSettings::from_ron("broken.ron", "(movement: Sideways)").unwrap_err();
        assert!(matches!(err, SettingsError::ParseError { ref path, .. } if path == "broken.ron"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = GameSettings::read("does/not/exist.ron").unwrap_err();
        assert!(matches!(err, SettingsError::ReadError { .. }));
    }
}
